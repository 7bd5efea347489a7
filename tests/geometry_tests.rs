mod common;

use common::approx;
use common::scene_core::constants::*;
use common::scene_core::geometry::*;

#[test]
fn plane_grid_counts() {
    let m = plane(1.0, 1.0, 4, 2);
    assert_eq!(m.vertex_count(), 5 * 3);
    assert_eq!(m.uvs.len(), m.vertex_count());
    assert_eq!(m.triangle_count(), 4 * 2 * 2);
    assert!(m.indices.iter().all(|&i| (i as usize) < m.vertex_count()));
}

#[test]
fn bent_card_counts() {
    let m = bent_plane(CARD_BEND, CARD_WIDTH, CARD_HEIGHT, CARD_SEGMENTS, CARD_SEGMENTS);
    assert_eq!(m.vertex_count(), 21 * 21);
    assert_eq!(m.triangle_count(), 800);
}

#[test]
fn bend_keeps_edges_and_pushes_centre_back() {
    let m = bent_plane(0.1, 1.0, 1.0, 20, 20);
    for (p, uv) in m.positions.iter().zip(&m.uvs) {
        assert!(p[2] <= 1e-5 && p[2] >= -0.1 - 1e-5, "z {} out of range", p[2]);
        if uv[0] == 0.0 {
            assert!(approx(p[0], -0.5, 1e-5));
            assert!(approx(p[2], 0.0, 1e-5));
        } else if uv[0] == 1.0 {
            assert!(approx(p[0], 0.5, 1e-5));
            assert!(approx(p[2], 0.0, 1e-5));
        } else if uv[0] == 0.5 {
            assert!(approx(p[0], 0.0, 1e-5));
            assert!(approx(p[2], -0.1, 1e-5));
        }
    }
}

#[test]
fn bend_leaves_height_untouched() {
    let flat = plane(1.0, 1.0, 20, 20);
    let bent = bent_plane(0.1, 1.0, 1.0, 20, 20);
    for (a, b) in flat.positions.iter().zip(&bent.positions) {
        assert_eq!(a[1], b[1]);
    }
}

#[test]
fn zero_bend_is_flat() {
    let m = bent_plane(0.0, 1.0, 1.0, 4, 4);
    assert!(m.positions.iter().all(|p| p[2] == 0.0));
}

#[test]
fn banner_cylinder_shape() {
    let m = open_cylinder(
        BANNER_RADIUS,
        BANNER_HEIGHT,
        BANNER_RADIAL_SEGMENTS,
        BANNER_HEIGHT_SEGMENTS,
    );
    assert_eq!(m.vertex_count(), 129 * 17);
    assert_eq!(m.triangle_count(), 128 * 16 * 2);
    for p in &m.positions {
        let r = (p[0] * p[0] + p[2] * p[2]).sqrt();
        assert!(approx(r, BANNER_RADIUS, 1e-4));
        assert!(p[1].abs() <= BANNER_HEIGHT * 0.5 + 1e-6);
    }
}

#[test]
fn bounding_radius_covers_corners() {
    let m = plane(2.0, 2.0, 1, 1);
    assert!(approx(m.bounding_radius(), 2.0f32.sqrt(), 1e-6));
}
