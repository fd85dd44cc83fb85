// Host-side tests for the procedural texture generators.

#![allow(dead_code)]
mod textures {
    include!("../src/core/textures.rs");
}

use textures::*;

#[test]
fn generators_have_fixed_sizes_and_filtering() {
    let vein = vein_map(1);
    assert_eq!((vein.raster.width, vein.raster.height), (VEIN_MAP_SIZE, VEIN_MAP_SIZE));
    assert_eq!(vein.filtering, Filtering::Smooth);

    let tribal = tribal_map(1);
    assert_eq!((tribal.raster.width, tribal.raster.height), (TRIBAL_MAP_SIZE, TRIBAL_MAP_SIZE));
    assert_eq!(tribal.filtering, Filtering::Smooth);

    let plate = sprite_plate();
    assert_eq!((plate.raster.width, plate.raster.height), (SPRITE_PLATE_SIZE, SPRITE_PLATE_SIZE));
    assert_eq!(plate.filtering, Filtering::Nearest);

    for img in [&vein, &tribal, &plate] {
        let r = &img.raster;
        assert_eq!(r.pixels.len(), (r.width * r.height * 4) as usize);
        // fully opaque everywhere
        assert!(r.pixels.chunks_exact(4).all(|px| px[3] == 255));
    }
}

#[test]
fn same_seed_same_bytes() {
    assert_eq!(vein_map(99).raster, vein_map(99).raster);
    assert_eq!(tribal_map(99).raster, tribal_map(99).raster);
    assert_ne!(vein_map(1).raster, vein_map(2).raster);
}

#[test]
fn vein_map_is_dark_with_green_veins() {
    let r = vein_map(5).raster;
    let mut green = 0;
    for px in r.pixels.chunks_exact(4) {
        if [px[0], px[1], px[2], px[3]] == GLOW_GREEN {
            green += 1;
        } else {
            // background ramp is a dim grey
            assert_eq!(px[0], px[1]);
            assert!(px[0] <= 0x0a);
        }
    }
    assert!(green > 1000, "{green} vein pixels");
    // ramp is black at both diagonal ends
    let corner = r.get(0, 0).expect("pixel");
    assert!(corner == BLACK || corner == GLOW_GREEN);
}

#[test]
fn tribal_map_is_black_and_white() {
    let r = tribal_map(8).raster;
    let mut white = 0;
    for px in r.pixels.chunks_exact(4) {
        let c = [px[0], px[1], px[2], px[3]];
        assert!(c == BLACK || c == WHITE);
        if c == WHITE {
            white += 1;
        }
    }
    assert!(white > 0);
}

#[test]
fn sprite_plate_dither_pattern() {
    let r = sprite_plate().raster;
    for y in 0..SPRITE_PLATE_SIZE {
        for x in 0..SPRITE_PLATE_SIZE {
            let expected = if (x + y) % 3 == 0 { GLOW_GREEN } else { BLACK };
            assert_eq!(r.get(x, y), Some(expected), "pixel ({x}, {y})");
        }
    }
}

#[test]
fn raster_clips_out_of_bounds_writes() {
    let mut r = Raster::filled(4, 4, BLACK);
    r.put(-1, 0, WHITE);
    r.put(0, 4, WHITE);
    r.put(4, 0, WHITE);
    assert!(r.pixels.chunks_exact(4).all(|px| px == BLACK));
    assert_eq!(r.get(4, 0), None);

    r.stroke_line((-3.0, 1.0), (10.0, 1.0), 1.0, WHITE);
    for x in 0..4 {
        assert_eq!(r.get(x, 1), Some(WHITE));
        assert_eq!(r.get(x, 0), Some(BLACK));
    }
}

#[test]
fn diagonal_ramp_peaks_in_the_middle() {
    let mut r = Raster::new(9, 9);
    r.fill_diagonal_ramp(10);
    assert_eq!(r.get(0, 0), Some([0, 0, 0, 255]));
    assert_eq!(r.get(8, 8), Some([0, 0, 0, 255]));
    assert_eq!(r.get(4, 4), Some([10, 10, 10, 255]));
}
