use super::camera::Ray;
use super::geometry::Mesh;
use glam::{Mat4, Vec3};

const EPSILON: f32 = 1e-7;

/// Nearest non-negative hit distance of a ray against a sphere, if any.
/// A ray starting inside the sphere reports the exit distance.
#[inline]
pub fn ray_sphere(ray: &Ray, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray.origin - center;
    let b = oc.dot(ray.dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let sq = disc.sqrt();
    let near = -b - sq;
    let far = -b + sq;
    if near >= 0.0 {
        Some(near)
    } else if far >= 0.0 {
        Some(far)
    } else {
        None
    }
}

/// Möller–Trumbore intersection, both faces.
pub fn ray_triangle(ray: &Ray, tri: [Vec3; 3]) -> Option<f32> {
    let [a, b, c] = tri;
    let e1 = b - a;
    let e2 = c - a;
    let p = ray.dir.cross(e2);
    let det = e1.dot(p);
    if det.abs() < EPSILON {
        return None;
    }
    let inv_det = 1.0 / det;
    let s = ray.origin - a;
    let u = s.dot(p) * inv_det;
    if !(0.0..=1.0).contains(&u) {
        return None;
    }
    let q = s.cross(e1);
    let v = ray.dir.dot(q) * inv_det;
    if v < 0.0 || u + v > 1.0 {
        return None;
    }
    let t = e2.dot(q) * inv_det;
    (t > EPSILON).then_some(t)
}

/// Closest hit of a ray against `mesh` placed with `model`.
pub fn ray_mesh(ray: &Ray, mesh: &Mesh, model: Mat4) -> Option<f32> {
    // Cheap rejection against the transformed bounding sphere first.
    let (scale, _, translation) = model.to_scale_rotation_translation();
    let radius = mesh.bounding_radius() * scale.abs().max_element();
    ray_sphere(ray, translation, radius)?;
    mesh.world_triangles(model)
        .filter_map(|tri| ray_triangle(ray, tri))
        .fold(None, |best: Option<f32>, t| match best {
            Some(bt) if bt <= t => Some(bt),
            _ => Some(t),
        })
}

/// Index and distance of the nearest instance of `mesh` hit by `ray`.
pub fn nearest_hit<I>(ray: &Ray, mesh: &Mesh, models: I) -> Option<(usize, f32)>
where
    I: IntoIterator<Item = Mat4>,
{
    let mut best = None::<(usize, f32)>;
    for (i, model) in models.into_iter().enumerate() {
        if let Some(t) = ray_mesh(ray, mesh, model) {
            match best {
                Some((_, bt)) if t >= bt => {}
                _ => best = Some((i, t)),
            }
        }
    }
    best
}
