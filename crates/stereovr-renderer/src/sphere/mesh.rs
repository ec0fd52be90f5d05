//! Sphere and box mesh generation.
//!
//! The sphere is a latitude/longitude grid with a duplicated seam column so
//! the texture wraps cleanly. UVs are `u = column / width_segments` and
//! `v = 1 - row / height_segments`.

use std::f32::consts::PI;

use super::types::SphereSpec;
use crate::graph::Mesh;

/// Generate an indexed UV sphere centred on the origin.
///
/// Row 0 is the north pole (+Y). Segment counts below the minimum
/// (3 around, 2 down) are clamped.
pub fn generate_sphere_mesh(spec: &SphereSpec) -> Mesh {
    let w = spec.width_segments.max(3);
    let h = spec.height_segments.max(2);
    let r = spec.radius;

    let count = ((w + 1) * (h + 1)) as usize;
    let mut positions = Vec::with_capacity(count);
    let mut uvs = Vec::with_capacity(count);

    for row in 0..=h {
        let v = row as f32 / h as f32;
        let theta = v * PI;
        for col in 0..=w {
            let u = col as f32 / w as f32;
            let phi = u * 2.0 * PI;
            positions.push([
                -r * phi.cos() * theta.sin(),
                r * theta.cos(),
                r * phi.sin() * theta.sin(),
            ]);
            uvs.push([u, 1.0 - v]);
        }
    }

    let stride = w + 1;
    let mut indices = Vec::with_capacity((w * h * 6) as usize);
    for row in 0..h {
        for col in 0..w {
            let a = row * stride + col + 1;
            let b = row * stride + col;
            let c = (row + 1) * stride + col;
            let d = (row + 1) * stride + col + 1;
            // Skip the degenerate triangle at each pole.
            if row != 0 {
                indices.extend_from_slice(&[a, b, d]);
            }
            if row != h - 1 {
                indices.extend_from_slice(&[b, c, d]);
            }
        }
    }

    Mesh::new(positions, uvs, indices)
}

/// Generate a cube with edge length `size`, 4 vertices per face so every
/// face gets the full texture.
pub fn generate_box_mesh(size: f32) -> Mesh {
    let s = size * 0.5;
    // +X, -X, +Y, -Y, +Z, -Z
    let faces: [[[f32; 3]; 4]; 6] = [
        [[s, -s, s], [s, -s, -s], [s, s, -s], [s, s, s]],
        [[-s, -s, -s], [-s, -s, s], [-s, s, s], [-s, s, -s]],
        [[-s, s, s], [s, s, s], [s, s, -s], [-s, s, -s]],
        [[-s, -s, -s], [s, -s, -s], [s, -s, s], [-s, -s, s]],
        [[-s, -s, s], [s, -s, s], [s, s, s], [-s, s, s]],
        [[s, -s, -s], [-s, -s, -s], [-s, s, -s], [s, s, -s]],
    ];
    let corner_uvs = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];

    let mut positions = Vec::with_capacity(24);
    let mut uvs = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);

    for (face_index, corners) in faces.iter().enumerate() {
        let base = (face_index * 4) as u32;
        positions.extend_from_slice(corners);
        uvs.extend_from_slice(&corner_uvs);
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    Mesh::new(positions, uvs, indices)
}

// =============================================================================
// Tests
// =============================================================================
