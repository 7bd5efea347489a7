use glam::{Mat4, Vec2, Vec3};
use std::f32::consts::{FRAC_PI_2, TAU};

/// Indexed triangle mesh with positions and texture coordinates.
#[derive(Clone, Debug, Default)]
pub struct Mesh {
    pub positions: Vec<[f32; 3]>,
    pub uvs: Vec<[f32; 2]>,
    pub indices: Vec<u32>,
}

impl Mesh {
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Triangles transformed by `model`.
    pub fn world_triangles(&self, model: Mat4) -> impl Iterator<Item = [Vec3; 3]> + '_ {
        self.indices.chunks_exact(3).map(move |tri| {
            let p = |i: u32| model.transform_point3(Vec3::from_array(self.positions[i as usize]));
            [p(tri[0]), p(tri[1]), p(tri[2])]
        })
    }

    /// Radius of the smallest origin-centred sphere holding every vertex.
    pub fn bounding_radius(&self) -> f32 {
        self.positions
            .iter()
            .map(|p| Vec3::from_array(*p).length())
            .fold(0.0, f32::max)
    }
}

// Two triangles per grid cell, row-major vertices, matching the usual
// (a, b, d), (b, c, d) winding.
fn grid_indices(columns: u32, rows: u32) -> Vec<u32> {
    let stride = columns + 1;
    let mut indices = Vec::with_capacity((columns * rows * 6) as usize);
    for iy in 0..rows {
        for ix in 0..columns {
            let a = ix + stride * iy;
            let b = ix + stride * (iy + 1);
            let c = (ix + 1) + stride * (iy + 1);
            let d = (ix + 1) + stride * iy;
            indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }
    indices
}

/// Flat XY plane centred on the origin, `v = 1` along the top edge.
pub fn plane(width: f32, height: f32, width_segments: u32, height_segments: u32) -> Mesh {
    let (gx, gy) = (width_segments.max(1), height_segments.max(1));
    let (seg_w, seg_h) = (width / gx as f32, height / gy as f32);
    let mut positions = Vec::with_capacity(((gx + 1) * (gy + 1)) as usize);
    let mut uvs = Vec::with_capacity(positions.capacity());
    for iy in 0..=gy {
        let y = height * 0.5 - iy as f32 * seg_h;
        for ix in 0..=gx {
            let x = ix as f32 * seg_w - width * 0.5;
            positions.push([x, y, 0.0]);
            uvs.push([ix as f32 / gx as f32, 1.0 - iy as f32 / gy as f32]);
        }
    }
    Mesh {
        positions,
        uvs,
        indices: grid_indices(gx, gy),
    }
}

#[inline]
fn rotate_around(p: Vec2, center: Vec2, angle: f32) -> Vec2 {
    let (s, c) = angle.sin_cos();
    let d = p - center;
    center + Vec2::new(d.x * c - d.y * s, d.x * s + d.y * c)
}

/// Plane bowed along its width into a circular arc.
///
/// The left and right edges stay at `z = 0`; the vertical centre line is
/// pushed back to `z = -bend`. Arc length is preserved per column by
/// walking the arc with the horizontal texture coordinate.
pub fn bent_plane(
    bend: f32,
    width: f32,
    height: f32,
    width_segments: u32,
    height_segments: u32,
) -> Mesh {
    let mut mesh = plane(width, height, width_segments, height_segments);
    if bend.abs() <= f32::EPSILON {
        return mesh;
    }
    let hw = width * 0.5;
    let a = Vec2::new(-hw, 0.0);
    let b = Vec2::new(0.0, bend);
    let c = Vec2::new(hw, 0.0);
    // Circumradius of the triangle through both edges and the bowed centre.
    let (ab, bc, ac) = (a - b, b - c, a - c);
    let r = ab.length() * bc.length() * ac.length() / (2.0 * ab.perp_dot(ac).abs());
    let center = Vec2::new(0.0, bend - r);
    let base = a - center;
    let arc = (base.y.atan2(base.x) - FRAC_PI_2) * 2.0;
    for (pos, uv) in mesh.positions.iter_mut().zip(&mesh.uvs) {
        let p = rotate_around(c, center, arc * (1.0 - uv[0]));
        *pos = [p.x, pos[1], -p.y];
    }
    mesh
}

/// Open-ended cylinder around the Y axis, centred on the origin.
pub fn open_cylinder(
    radius: f32,
    height: f32,
    radial_segments: u32,
    height_segments: u32,
) -> Mesh {
    let (rs, hs) = (radial_segments.max(3), height_segments.max(1));
    let mut positions = Vec::with_capacity(((rs + 1) * (hs + 1)) as usize);
    let mut uvs = Vec::with_capacity(positions.capacity());
    for y in 0..=hs {
        let v = y as f32 / hs as f32;
        let py = height * 0.5 - v * height;
        for x in 0..=rs {
            let u = x as f32 / rs as f32;
            let theta = u * TAU;
            positions.push([radius * theta.sin(), py, radius * theta.cos()]);
            uvs.push([u, 1.0 - v]);
        }
    }
    Mesh {
        positions,
        uvs,
        indices: grid_indices(rs, hs),
    }
}
