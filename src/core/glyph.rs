// Sigil glyph geometry: a closed 2D outline extruded into a bevelled solid.

use glam::{Vec2, Vec3};
use std::f32::consts::FRAC_PI_2;

/// "V" glyph outline in unit shape space (y up).
pub const SIGIL_OUTLINE: [[f32; 2]; 7] = [
    [0.2, 0.8],
    [0.4, 0.8],
    [0.5, 0.45],
    [0.6, 0.8],
    [0.8, 0.8],
    [0.55, 0.2],
    [0.45, 0.2],
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExtrudeSettings {
    pub depth: f32,
    pub bevel_thickness: f32,
    pub bevel_size: f32,
    pub bevel_segments: u32,
}

impl Default for ExtrudeSettings {
    fn default() -> Self {
        Self {
            depth: 0.1,
            bevel_thickness: 0.02,
            bevel_size: 0.02,
            bevel_segments: 3,
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SigilVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub vertices: Vec<SigilVertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    fn push_vertex(&mut self, position: Vec3, normal: Vec3, uv: Vec2) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(SigilVertex {
            position: position.to_array(),
            normal: normal.to_array(),
            uv: uv.to_array(),
        });
        index
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Twice the signed area; positive for counter-clockwise winding.
pub fn signed_area(points: &[Vec2]) -> f32 {
    let n = points.len();
    (0..n)
        .map(|i| {
            let a = points[i];
            let b = points[(i + 1) % n];
            a.x * b.y - b.x * a.y
        })
        .sum::<f32>()
        * 0.5
}

#[inline]
fn cross(o: Vec2, a: Vec2, b: Vec2) -> f32 {
    (a - o).perp_dot(b - o)
}

fn point_in_triangle(p: Vec2, a: Vec2, b: Vec2, c: Vec2) -> bool {
    let d1 = cross(a, b, p);
    let d2 = cross(b, c, p);
    let d3 = cross(c, a, p);
    d1 >= 0.0 && d2 >= 0.0 && d3 >= 0.0
}

/// Ear-clipping triangulation of a simple counter-clockwise polygon.
///
/// Returns index triples into `points`, all wound counter-clockwise. A
/// degenerate remainder (no ear found) stops clipping early.
pub fn triangulate(points: &[Vec2]) -> Vec<[usize; 3]> {
    let n = points.len();
    if n < 3 {
        return Vec::new();
    }
    let mut remaining: Vec<usize> = (0..n).collect();
    let mut triangles = Vec::with_capacity(n - 2);

    while remaining.len() > 3 {
        let m = remaining.len();
        let ear = (0..m).find(|&i| {
            let a = remaining[(i + m - 1) % m];
            let b = remaining[i];
            let c = remaining[(i + 1) % m];
            let (pa, pb, pc) = (points[a], points[b], points[c]);
            if cross(pa, pb, pc) <= f32::EPSILON {
                return false;
            }
            !remaining
                .iter()
                .filter(|&&k| k != a && k != b && k != c)
                .any(|&k| point_in_triangle(points[k], pa, pb, pc))
        });
        let Some(i) = ear else {
            log::warn!("[glyph] no ear left with {} vertices remaining", m);
            break;
        };
        triangles.push([remaining[(i + m - 1) % m], remaining[i], remaining[(i + 1) % m]]);
        remaining.remove(i);
    }
    if remaining.len() == 3 {
        triangles.push([remaining[0], remaining[1], remaining[2]]);
    }
    triangles
}

/// Miter offset directions pointing out of a counter-clockwise contour.
fn outward_miters(contour: &[Vec2]) -> Vec<Vec2> {
    let n = contour.len();
    let edge_normal = |i: usize| {
        let d = contour[(i + 1) % n] - contour[i];
        Vec2::new(d.y, -d.x).normalize_or_zero()
    };
    (0..n)
        .map(|i| {
            let prev = edge_normal((i + n - 1) % n);
            let next = edge_normal(i);
            let bisector = (prev + next).normalize_or_zero();
            let cos = bisector.dot(next);
            // sharp corners would spike; cap the miter length
            let len = if cos > 0.25 { 1.0 / cos } else { 4.0 };
            bisector * len
        })
        .collect()
}

/// Extrude `outline` along +Z with a rounded bevel on both faces.
///
/// The result is centred on the origin in all three axes. Cap UVs map the
/// outline's bounding box onto [0, 1]; side UVs run along the perimeter (u)
/// and through the depth (v).
pub fn extrude(outline: &[Vec2], settings: &ExtrudeSettings) -> MeshData {
    let mut mesh = MeshData::default();
    if outline.len() < 3 {
        return mesh;
    }
    let mut contour = outline.to_vec();
    if signed_area(&contour) < 0.0 {
        contour.reverse();
    }

    let (min, max) = contour
        .iter()
        .fold((Vec2::splat(f32::MAX), Vec2::splat(f32::MIN)), |(lo, hi), p| {
            (lo.min(*p), hi.max(*p))
        });
    let extent = (max - min).max(Vec2::splat(f32::EPSILON));
    let center = (min + max) * 0.5;
    let uv_of = |p: Vec2| (p - min) / extent;

    let segments = settings.bevel_segments.max(1);
    let mut layers: Vec<(f32, f32)> = Vec::with_capacity(2 * (segments as usize + 1));
    for s in 0..=segments {
        let t = s as f32 / segments as f32 * FRAC_PI_2;
        layers.push((
            settings.bevel_size * t.sin(),
            -settings.bevel_thickness * t.cos(),
        ));
    }
    for s in (0..=segments).rev() {
        let t = s as f32 / segments as f32 * FRAC_PI_2;
        layers.push((
            settings.bevel_size * t.sin(),
            settings.depth + settings.bevel_thickness * t.cos(),
        ));
    }
    let z_min = -settings.bevel_thickness;
    let z_max = settings.depth + settings.bevel_thickness;
    let z_center = (z_min + z_max) * 0.5;
    let z_span = (z_max - z_min).max(f32::EPSILON);

    let miters = outward_miters(&contour);
    let ring = |offset: f32, z: f32| -> Vec<Vec3> {
        contour
            .iter()
            .zip(&miters)
            .map(|(p, m)| {
                let q = *p + *m * offset - center;
                Vec3::new(q.x, q.y, z - z_center)
            })
            .collect()
    };
    let rings: Vec<Vec<Vec3>> = layers.iter().map(|&(off, z)| ring(off, z)).collect();

    let n = contour.len();
    let mut perimeter = vec![0.0f32; n + 1];
    for i in 0..n {
        perimeter[i + 1] = perimeter[i] + contour[i].distance(contour[(i + 1) % n]);
    }
    let total = perimeter[n].max(f32::EPSILON);

    // side walls, one flat-shaded quad per edge per layer pair
    for (li, pair) in rings.windows(2).enumerate() {
        let (a, b) = (&pair[0], &pair[1]);
        let va = (layers[li].1 - z_min) / z_span;
        let vb = (layers[li + 1].1 - z_min) / z_span;
        for i in 0..n {
            let j = (i + 1) % n;
            let normal = (a[j] - a[i]).cross(b[i] - a[i]).normalize_or_zero();
            let ua = perimeter[i] / total;
            let ub = perimeter[i + 1] / total;
            let i0 = mesh.push_vertex(a[i], normal, Vec2::new(ua, va));
            let i1 = mesh.push_vertex(a[j], normal, Vec2::new(ub, va));
            let i2 = mesh.push_vertex(b[j], normal, Vec2::new(ub, vb));
            let i3 = mesh.push_vertex(b[i], normal, Vec2::new(ua, vb));
            mesh.indices.extend_from_slice(&[i0, i1, i2, i0, i2, i3]);
        }
    }

    // caps use the un-bevelled contour
    let triangles = triangulate(&contour);
    let front = &rings[0];
    let back = &rings[rings.len() - 1];
    let front_base = mesh.vertices.len() as u32;
    for (k, p) in front.iter().enumerate() {
        mesh.push_vertex(*p, Vec3::NEG_Z, uv_of(contour[k]));
    }
    for t in &triangles {
        mesh.indices.extend_from_slice(&[
            front_base + t[0] as u32,
            front_base + t[2] as u32,
            front_base + t[1] as u32,
        ]);
    }
    let back_base = mesh.vertices.len() as u32;
    for (k, p) in back.iter().enumerate() {
        mesh.push_vertex(*p, Vec3::Z, uv_of(contour[k]));
    }
    for t in &triangles {
        mesh.indices.extend_from_slice(&[
            back_base + t[0] as u32,
            back_base + t[1] as u32,
            back_base + t[2] as u32,
        ]);
    }

    mesh
}

pub fn sigil_outline() -> Vec<Vec2> {
    SIGIL_OUTLINE.iter().map(|p| Vec2::from_array(*p)).collect()
}

pub fn build_sigil_mesh() -> MeshData {
    extrude(&sigil_outline(), &ExtrudeSettings::default())
}
