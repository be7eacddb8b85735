use super::constants::*;
use fnv::FnvHashSet;
use glam::Vec3;
use rand::prelude::*;
use std::f32::consts::TAU;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
}

/// Vertices plus a line-list index buffer.
#[derive(Clone, Debug, Default)]
pub struct Wireframe {
    pub vertices: Vec<LineVertex>,
    pub indices: Vec<u32>,
}

#[derive(Clone, Copy, Debug)]
pub struct TorusKnotParams {
    pub radius: f32,
    pub tube: f32,
    pub tubular_segments: u32,
    pub radial_segments: u32,
    pub p: u32,
    pub q: u32,
}

impl Default for TorusKnotParams {
    fn default() -> Self {
        Self {
            radius: KNOT_RADIUS,
            tube: KNOT_TUBE,
            tubular_segments: KNOT_TUBULAR_SEGMENTS,
            radial_segments: KNOT_RADIAL_SEGMENTS,
            p: KNOT_P,
            q: KNOT_Q,
        }
    }
}

#[inline]
fn knot_curve(u: f32, p: f32, q: f32, radius: f32) -> Vec3 {
    let qu_over_p = q / p * u;
    let cs = qu_over_p.cos();
    Vec3::new(
        radius * (2.0 + cs) * 0.5 * u.cos(),
        radius * (2.0 + cs) * 0.5 * u.sin(),
        radius * qu_over_p.sin() * 0.5,
    )
}

/// Tube swept along a (p, q) torus knot, emitted as the unique edges of its triangles.
pub fn torus_knot_wireframe(params: &TorusKnotParams) -> Wireframe {
    let tubular = params.tubular_segments.max(3);
    let radial = params.radial_segments.max(3);
    let p = params.p.max(1) as f32;
    let q = params.q as f32;

    let mut vertices = Vec::with_capacity(((tubular + 1) * (radial + 1)) as usize);
    for j in 0..=tubular {
        let u = j as f32 / tubular as f32 * p * TAU;
        let p1 = knot_curve(u, p, q, params.radius);
        let p2 = knot_curve(u + 0.01, p, q, params.radius);
        // Frenet-like frame from the curve tangent
        let t = p2 - p1;
        let n = p2 + p1;
        let b = t.cross(n).normalize_or_zero();
        let n = b.cross(t).normalize_or_zero();
        for i in 0..=radial {
            let v = i as f32 / radial as f32 * TAU;
            let cx = -params.tube * v.cos();
            let cy = params.tube * v.sin();
            let pos = p1 + n * cx + b * cy;
            vertices.push(LineVertex {
                position: pos.to_array(),
            });
        }
    }

    let row = radial + 1;
    let mut seen: FnvHashSet<(u32, u32)> = FnvHashSet::default();
    let mut indices = Vec::new();
    let mut edge = |x: u32, y: u32, out: &mut Vec<u32>| {
        let key = if x < y { (x, y) } else { (y, x) };
        if seen.insert(key) {
            out.push(key.0);
            out.push(key.1);
        }
    };
    for j in 1..=tubular {
        for i in 1..=radial {
            let a = row * (j - 1) + (i - 1);
            let b = row * j + (i - 1);
            let c = row * j + i;
            let d = row * (j - 1) + i;
            // triangles (a, b, d) and (b, c, d)
            edge(a, b, &mut indices);
            edge(b, d, &mut indices);
            edge(d, a, &mut indices);
            edge(b, c, &mut indices);
            edge(c, d, &mut indices);
        }
    }

    Wireframe { vertices, indices }
}

/// Points scattered uniformly in a cube of edge `spread` centred on the origin.
pub fn particle_field(count: usize, spread: f32, seed: u64) -> Vec<LineVertex> {
    let mut rng = StdRng::seed_from_u64(seed);
    let half = spread * 0.5;
    (0..count)
        .map(|_| LineVertex {
            position: [
                rng.gen_range(-half..half),
                rng.gen_range(-half..half),
                rng.gen_range(-half..half),
            ],
        })
        .collect()
}
