//! Procedural meshes for shapes that are not plain primitives.

use std::f32::consts::PI;

use crate::scene::CustomGeometry;

/// Segments sampled along the curved roof arc.
pub const CURVED_ROOF_SEGMENTS: u32 = 12;
pub const ARCH_SEGMENTS: u32 = 8;

/// Unit window plane (XY, centered) whose top edge bulges upward by `bulge`.
pub fn arched_plane(segments: u32, bulge: f32) -> CustomGeometry {
    let n = segments + 1;
    let mut positions = Vec::with_capacity(2 * n as usize);

    for s in 0..n {
        let t = s as f32 / segments as f32;
        positions.push([t - 0.5, -0.5, 0.0]);
    }
    for s in 0..n {
        let t = s as f32 / segments as f32;
        positions.push([t - 0.5, 0.5 + bulge * (PI * t).sin(), 0.0]);
    }

    let mut indices = Vec::with_capacity(6 * segments as usize);
    for s in 0..segments {
        let (b0, b1) = (s, s + 1);
        let (t0, t1) = (n + s, n + s + 1);
        indices.extend_from_slice(&[b0, b1, t1, b0, t1, t0]);
    }

    CustomGeometry { positions, indices }
}

/// Closed triangular prism for a gable roof. Base sits on y = 0, ridge runs along X.
pub fn gable_prism(width: f32, depth: f32, ridge_height: f32) -> CustomGeometry {
    let (hw, hd) = (width / 2.0, depth / 2.0);
    let positions = vec![
        [-hw, 0.0, hd],
        [hw, 0.0, hd],
        [hw, 0.0, -hd],
        [-hw, 0.0, -hd],
        [-hw, ridge_height, 0.0],
        [hw, ridge_height, 0.0],
    ];

    #[rustfmt::skip]
    let indices = vec![
        0, 1, 5,  0, 5, 4, // front slope
        2, 3, 4,  2, 4, 5, // back slope
        3, 0, 4,           // left gable
        1, 2, 5,           // right gable
        0, 3, 2,  0, 2, 1, // underside
    ];

    CustomGeometry { positions, indices }
}

/// Half-barrel roof: an arc across Z sampled with `segments`, extruded along X, with end caps.
pub fn barrel_arc(width: f32, depth: f32, rise: f32, segments: u32) -> CustomGeometry {
    let (hw, hd) = (width / 2.0, depth / 2.0);
    let n = segments + 1;
    let mut positions = Vec::with_capacity(2 * n as usize + 2);

    for x in [-hw, hw] {
        for s in 0..n {
            let theta = PI * s as f32 / segments as f32;
            positions.push([x, rise * theta.sin(), hd * theta.cos()]);
        }
    }
    let left_center = positions.len() as u32;
    positions.push([-hw, 0.0, 0.0]);
    let right_center = left_center + 1;
    positions.push([hw, 0.0, 0.0]);

    let mut indices = Vec::with_capacity(12 * segments as usize);
    for s in 0..segments {
        let (a, b) = (s, s + 1);
        let (c, d) = (n + s, n + s + 1);
        indices.extend_from_slice(&[a, c, d, a, d, b]);
    }
    for s in 0..segments {
        indices.extend_from_slice(&[left_center, s + 1, s]);
        indices.extend_from_slice(&[right_center, n + s, n + s + 1]);
    }

    CustomGeometry { positions, indices }
}
