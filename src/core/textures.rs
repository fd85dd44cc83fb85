// Procedural texture synthesis.
//
// A tiny RGBA8 software raster plus the three generators the sigil needs.
// Generators are seeded so a given seed always yields the same bytes.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub type Rgba = [u8; 4];

pub const BLACK: Rgba = [0, 0, 0, 255];
pub const WHITE: Rgba = [255, 255, 255, 255];
pub const GLOW_GREEN: Rgba = [0x00, 0xff, 0x41, 255];

pub const VEIN_MAP_SIZE: u32 = 512;
pub const TRIBAL_MAP_SIZE: u32 = 256;
pub const SPRITE_PLATE_SIZE: u32 = 16;

const VEIN_STROKES: usize = 100;
const VEIN_GRADIENT_PEAK: u8 = 0x0a;
const TRIBAL_STROKES: usize = 20;
const TRIBAL_POINTS: usize = 10;
const TRIBAL_RADIUS: f32 = 30.0;
const TRIBAL_LINE_WIDTH: f32 = 2.0;
const SPRITE_DITHER_MODULUS: u32 = 3;

/// Row-major RGBA8 pixel buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl Raster {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; (width as usize) * (height as usize) * 4],
        }
    }

    pub fn filled(width: u32, height: u32, color: Rgba) -> Self {
        let mut r = Self::new(width, height);
        r.fill(color);
        r
    }

    pub fn fill(&mut self, color: Rgba) {
        for px in self.pixels.chunks_exact_mut(4) {
            px.copy_from_slice(&color);
        }
    }

    pub fn get(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y * self.width + x) * 4) as usize;
        let mut out = [0u8; 4];
        out.copy_from_slice(&self.pixels[i..i + 4]);
        Some(out)
    }

    /// Write one pixel; coordinates outside the raster are clipped.
    pub fn put(&mut self, x: i64, y: i64, color: Rgba) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        let i = ((y as usize) * (self.width as usize) + x as usize) * 4;
        self.pixels[i..i + 4].copy_from_slice(&color);
    }

    /// Diagonal black -> `peak` -> black ramp from the top-left corner.
    pub fn fill_diagonal_ramp(&mut self, peak: u8) {
        let span = (self.width + self.height).max(2) as f32 - 2.0;
        for y in 0..self.height {
            for x in 0..self.width {
                let t = (x + y) as f32 / span.max(1.0);
                let v = (peak as f32 * (1.0 - (2.0 * t - 1.0).abs())).round() as u8;
                self.put(x as i64, y as i64, [v, v, v, 255]);
            }
        }
    }

    /// Stroke a segment with a square pen of `width` pixels.
    pub fn stroke_line(&mut self, from: (f32, f32), to: (f32, f32), width: f32, color: Rgba) {
        let (dx, dy) = (to.0 - from.0, to.1 - from.1);
        let steps = (dx.abs().max(dy.abs()) * 2.0).ceil().max(1.0) as usize;
        let pen = width.max(1.0).round() as i64;
        let half = pen / 2;
        for s in 0..=steps {
            let t = s as f32 / steps as f32;
            let cx = (from.0 + dx * t).floor() as i64;
            let cy = (from.1 + dy * t).floor() as i64;
            for oy in 0..pen {
                for ox in 0..pen {
                    self.put(cx - half + ox, cy - half + oy, color);
                }
            }
        }
    }

    pub fn stroke_polyline(&mut self, points: &[(f32, f32)], width: f32, color: Rgba) {
        for pair in points.windows(2) {
            self.stroke_line(pair[0], pair[1], width, color);
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Filtering {
    /// Bilinear sampling.
    Smooth,
    /// Nearest-neighbour sampling; keeps pixel art blocky.
    Nearest,
}

/// A generated texture ready for upload. All textures repeat in both axes.
#[derive(Clone, Debug)]
pub struct TextureImage {
    pub label: &'static str,
    pub raster: Raster,
    pub filtering: Filtering,
}

/// 512x512 biomechanical vein map: dark diagonal ramp plus glow-green strokes.
pub fn vein_map(seed: u64) -> TextureImage {
    let size = VEIN_MAP_SIZE;
    let mut rng = StdRng::seed_from_u64(seed);
    let mut raster = Raster::new(size, size);
    raster.fill_diagonal_ramp(VEIN_GRADIENT_PEAK);
    let extent = size as f32;
    for _ in 0..VEIN_STROKES {
        let from = (rng.gen::<f32>() * extent, rng.gen::<f32>() * extent);
        let to = (rng.gen::<f32>() * extent, rng.gen::<f32>() * extent);
        raster.stroke_line(from, to, 1.0, GLOW_GREEN);
    }
    TextureImage {
        label: "vein_map",
        raster,
        filtering: Filtering::Smooth,
    }
}

/// 256x256 tribal pattern: white polylines looping around random centres.
pub fn tribal_map(seed: u64) -> TextureImage {
    let size = TRIBAL_MAP_SIZE;
    let mut rng = StdRng::seed_from_u64(seed);
    let mut raster = Raster::filled(size, size, BLACK);
    let extent = size as f32;
    for _ in 0..TRIBAL_STROKES {
        let x = rng.gen::<f32>() * extent;
        let y = rng.gen::<f32>() * extent;
        let mut path = Vec::with_capacity(TRIBAL_POINTS + 1);
        path.push((x, y));
        for j in 0..TRIBAL_POINTS {
            let a = j as f32;
            path.push((x + a.sin() * TRIBAL_RADIUS, y + a.cos() * TRIBAL_RADIUS));
        }
        raster.stroke_polyline(&path, TRIBAL_LINE_WIDTH, WHITE);
    }
    TextureImage {
        label: "tribal_map",
        raster,
        filtering: Filtering::Smooth,
    }
}

/// 16x16 dithered plate for the billboard sprites.
pub fn sprite_plate() -> TextureImage {
    let size = SPRITE_PLATE_SIZE;
    let mut raster = Raster::filled(size, size, BLACK);
    for y in 0..size {
        for x in 0..size {
            if (x + y) % SPRITE_DITHER_MODULUS == 0 {
                raster.put(x as i64, y as i64, GLOW_GREEN);
            }
        }
    }
    TextureImage {
        label: "sprite_plate",
        raster,
        filtering: Filtering::Nearest,
    }
}
