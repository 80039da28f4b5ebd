//! CPU tessellation of scene commands into an anti-aliased triangle mesh.
//!
//! Every shape is reduced to a convex outline, then filled as a triangle fan
//! surrounded by a fringe: a ring of triangles whose outer vertices carry a
//! fully transparent color. The GPU interpolates across the fringe, which gives
//! a one-pixel anti-aliased edge for crisp shapes and a wide soft edge for
//! shadows.

use std::f32::consts::{PI, TAU};

use bytemuck::{Pod, Zeroable};

use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, LineCap};

/// Vertex layout shared with `shaders/mesh.wgsl`.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    /// Logical pixels, top-left origin.
    pub pos: [f32; 2],
    /// Premultiplied RGBA.
    pub color: [f32; 4],
}

impl MeshVertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x2, // pos
        1 => Float32x4  // color
    ];

    pub(super) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<MeshVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Indexed triangle list built from a draw stream.
#[derive(Debug, Default)]
pub struct Mesh {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops recorded geometry, keeping capacity.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Appends the triangles for `cmd`.
    ///
    /// `aa_width` is the anti-aliasing fringe in logical pixels, normally one
    /// physical pixel (`1 / scale_factor`). Commands with a non-zero softness
    /// use that as the fringe width instead.
    pub fn add_cmd(&mut self, cmd: &DrawCmd, aa_width: f32) {
        let (inset, outset) = edge_widths(cmd.softness(), aa_width);

        match cmd {
            DrawCmd::Circle(c) => {
                if c.radius <= 0.0 {
                    return;
                }
                let outline = circle_outline(c.center, c.radius);
                self.fill_convex(&outline, c.color, inset, outset);
            }
            DrawCmd::Line(l) => {
                let outline = line_outline(l.from, l.to, l.width, l.cap);
                self.fill_convex(&outline, l.color, inset, outset);
            }
            DrawCmd::Polygon(p) => self.fill_convex(&p.points, p.color, inset, outset),
        }
    }

    /// Fills a convex outline with `color`.
    ///
    /// The opaque core is the outline pulled in by `inset`; the fringe fades
    /// to transparent at the outline pushed out by `outset`. Outlines with
    /// fewer than three distinct points or zero area are ignored.
    pub fn fill_convex(&mut self, points: &[Vec2], color: Color, inset: f32, outset: f32) {
        if color.a <= 0.0 {
            return;
        }

        let pts = dedup_outline(points);
        let n = pts.len();
        if n < 3 {
            return;
        }

        let area = signed_area(&pts);
        if area.abs() <= f32::EPSILON {
            return;
        }
        let orient = if area > 0.0 { 1.0 } else { -1.0 };

        let edge_normals: Vec<Vec2> = (0..n)
            .map(|i| {
                let d = (pts[(i + 1) % n] - pts[i]).normalized();
                Vec2::new(d.y, -d.x) * orient
            })
            .collect();

        let base = self.vertices.len() as u32;
        let fill = color.to_array();
        let with_fringe = outset > 0.0 || inset > 0.0;

        let miters: Vec<Vec2> = (0..n)
            .map(|i| miter(edge_normals[(i + n - 1) % n], edge_normals[i]))
            .collect();

        for (p, m) in pts.iter().zip(&miters) {
            let inner = if with_fringe { *p - *m * inset } else { *p };
            self.vertices.push(MeshVertex { pos: [inner.x, inner.y], color: fill });
        }

        for i in 1..(n as u32 - 1) {
            self.indices.extend_from_slice(&[base, base + i, base + i + 1]);
        }

        if !with_fringe {
            return;
        }

        let clear = Color::transparent().to_array();
        for (p, m) in pts.iter().zip(&miters) {
            let outer = *p + *m * outset;
            self.vertices.push(MeshVertex { pos: [outer.x, outer.y], color: clear });
        }

        let n = n as u32;
        for i in 0..n {
            let j = (i + 1) % n;
            let (inner_i, inner_j) = (base + i, base + j);
            let (outer_i, outer_j) = (base + n + i, base + n + j);
            self.indices.extend_from_slice(&[inner_i, inner_j, outer_j, inner_i, outer_j, outer_i]);
        }
    }
}

/// `(inset, outset)` for a shape edge.
fn edge_widths(softness: f32, aa_width: f32) -> (f32, f32) {
    if softness > 0.0 {
        (0.0, softness)
    } else {
        let half = aa_width.max(0.0) * 0.5;
        (half, half)
    }
}

/// Number of outline segments for a circle of `radius`: roughly one every
/// three logical pixels of circumference.
pub fn circle_segments(radius: f32) -> usize {
    ((TAU * radius.max(0.0) / 3.0).ceil() as usize).clamp(12, 128)
}

/// Clockwise (on screen) outline of a circle.
pub fn circle_outline(center: Vec2, radius: f32) -> Vec<Vec2> {
    let segments = circle_segments(radius);
    (0..segments)
        .map(|i| {
            let t = i as f32 / segments as f32 * TAU;
            center + Vec2::new(t.cos(), t.sin()) * radius
        })
        .collect()
}

/// Convex outline of a stroked segment.
///
/// A zero-length butt segment has no area and yields an empty outline; a
/// zero-length round segment degenerates to a dot of diameter `width`.
pub fn line_outline(from: Vec2, to: Vec2, width: f32, cap: LineCap) -> Vec<Vec2> {
    let half = width * 0.5;
    if half <= 0.0 {
        return Vec::new();
    }

    let axis = (to - from).normalized();

    match cap {
        LineCap::Butt => {
            if axis == Vec2::zero() {
                return Vec::new();
            }
            let n = axis.perp() * half;
            vec![from + n, to + n, to - n, from - n]
        }
        LineCap::Round => {
            let d = if axis == Vec2::zero() { Vec2::new(1.0, 0.0) } else { axis };
            let n = d.perp();
            let steps = (circle_segments(half) / 2).max(4);

            let mut out = Vec::with_capacity(2 * (steps + 1));
            for i in 0..=steps {
                let t = i as f32 / steps as f32 * PI;
                out.push(to + (n * t.cos() + d * t.sin()) * half);
            }
            for i in 0..=steps {
                let t = i as f32 / steps as f32 * PI;
                out.push(from - (n * t.cos() + d * t.sin()) * half);
            }
            out
        }
    }
}

fn dedup_outline(points: &[Vec2]) -> Vec<Vec2> {
    let mut out: Vec<Vec2> = Vec::with_capacity(points.len());
    for &p in points {
        if out.last().is_none_or(|&last| (p - last).length() > 1e-5) {
            out.push(p);
        }
    }
    while out.len() > 1 && (out[0] - out[out.len() - 1]).length() <= 1e-5 {
        out.pop();
    }
    out
}

/// Shoelace area; positive when the outline turns from +X towards +Y.
fn signed_area(points: &[Vec2]) -> f32 {
    let n = points.len();
    let twice: f32 = (0..n)
        .map(|i| {
            let (a, b) = (points[i], points[(i + 1) % n]);
            a.x * b.y - b.x * a.y
        })
        .sum();
    twice * 0.5
}

/// Vertex offset direction such that moving by `miter * w` displaces both
/// adjacent edges by `w`. Clamped so near-reversing corners stay bounded.
fn miter(prev: Vec2, next: Vec2) -> Vec2 {
    let m = (prev + next) * 0.5;
    let d2 = m.dot(m);
    if d2 > 1e-6 { m * (1.0 / d2).min(100.0) } else { m }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::shapes::{CircleCmd, LineCmd, PolygonCmd};

    fn close(a: [f32; 2], b: Vec2) -> bool {
        (a[0] - b.x).abs() < 1e-4 && (a[1] - b.y).abs() < 1e-4
    }

    fn unit_square() -> Vec<Vec2> {
        vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(0.0, 1.0),
        ]
    }

    #[test]
    fn square_produces_core_and_fringe() {
        let mut mesh = Mesh::new();
        mesh.fill_convex(&unit_square(), Color::black(), 0.5, 0.5);

        assert_eq!(mesh.vertices.len(), 8);
        // (n - 2) fan triangles + 2 per fringe edge.
        assert_eq!(mesh.indices.len(), 2 * 3 + 4 * 6);
        assert!(mesh.indices.iter().all(|&i| (i as usize) < mesh.vertices.len()));
    }

    #[test]
    fn fringe_pushes_outward_for_either_winding() {
        for pts in [unit_square(), unit_square().into_iter().rev().collect()] {
            let mut mesh = Mesh::new();
            mesh.fill_convex(&pts, Color::black(), 0.0, 1.0);

            let n = pts.len();
            for (i, p) in pts.iter().enumerate() {
                let outer = mesh.vertices[n + i].pos;
                let expected = Vec2::new(
                    if p.x == 0.0 { -1.0 } else { 2.0 },
                    if p.y == 0.0 { -1.0 } else { 2.0 },
                );
                assert!(close(outer, expected), "corner {p:?} -> {outer:?}");
            }
        }
    }

    #[test]
    fn fringe_vertices_are_transparent_and_core_is_filled() {
        let red = Color::from_straight(1.0, 0.0, 0.0, 1.0);
        let mut mesh = Mesh::new();
        mesh.fill_convex(&unit_square(), red, 0.5, 0.5);

        assert!(mesh.vertices[..4].iter().all(|v| v.color == red.to_array()));
        assert!(mesh.vertices[4..].iter().all(|v| v.color == [0.0; 4]));
    }

    #[test]
    fn degenerate_outlines_are_ignored() {
        let mut mesh = Mesh::new();
        mesh.fill_convex(&[Vec2::zero(), Vec2::new(1.0, 0.0)], Color::black(), 0.5, 0.5);
        mesh.fill_convex(
            &[Vec2::zero(), Vec2::new(1.0, 0.0), Vec2::new(2.0, 0.0)],
            Color::black(),
            0.5,
            0.5,
        );
        mesh.fill_convex(&unit_square(), Color::transparent(), 0.5, 0.5);
        assert!(mesh.is_empty());
    }

    #[test]
    fn closing_duplicate_point_is_dropped() {
        let mut pts = unit_square();
        pts.push(Vec2::zero());
        let mut mesh = Mesh::new();
        mesh.fill_convex(&pts, Color::black(), 0.0, 0.0);
        assert_eq!(mesh.vertices.len(), 4);
        assert_eq!(mesh.indices.len(), 6);
    }

    #[test]
    fn circle_outline_lies_on_radius() {
        let center = Vec2::new(150.0, 150.0);
        let pts = circle_outline(center, 150.0);
        assert_eq!(pts.len(), circle_segments(150.0));
        assert!(pts.iter().all(|p| ((*p - center).length() - 150.0).abs() < 1e-3));
    }

    #[test]
    fn circle_segments_are_clamped() {
        assert_eq!(circle_segments(0.5), 12);
        assert_eq!(circle_segments(10_000.0), 128);
    }

    #[test]
    fn butt_line_is_a_quad_of_stroke_width() {
        let pts = line_outline(Vec2::zero(), Vec2::new(10.0, 0.0), 4.0, LineCap::Butt);
        assert_eq!(
            pts,
            vec![
                Vec2::new(0.0, 2.0),
                Vec2::new(10.0, 2.0),
                Vec2::new(10.0, -2.0),
                Vec2::new(0.0, -2.0),
            ]
        );
    }

    #[test]
    fn round_line_extends_past_endpoints() {
        let pts = line_outline(Vec2::zero(), Vec2::new(10.0, 0.0), 4.0, LineCap::Round);
        let max_x = pts.iter().map(|p| p.x).fold(f32::MIN, f32::max);
        let min_x = pts.iter().map(|p| p.x).fold(f32::MAX, f32::min);
        assert!((max_x - 12.0).abs() < 1e-4);
        assert!((min_x + 2.0).abs() < 1e-4);
    }

    #[test]
    fn zero_length_lines() {
        let p = Vec2::new(3.0, 3.0);
        assert!(line_outline(p, p, 2.0, LineCap::Butt).is_empty());
        assert!(!line_outline(p, p, 2.0, LineCap::Round).is_empty());
    }

    #[test]
    fn soft_commands_use_softness_as_fringe() {
        let mut cmd = PolygonCmd::new(unit_square(), Color::black());
        cmd.softness = 3.0;

        let mut mesh = Mesh::new();
        mesh.add_cmd(&DrawCmd::Polygon(cmd), 1.0);

        // Core stays on the outline, fringe reaches 3px out.
        assert!(close(mesh.vertices[0].pos, Vec2::zero()));
        assert!(close(mesh.vertices[4].pos, Vec2::new(-3.0, -3.0)));
    }

    #[test]
    fn add_cmd_covers_every_shape() {
        let mut mesh = Mesh::new();
        mesh.add_cmd(&DrawCmd::Circle(CircleCmd::new(Vec2::zero(), 5.0, Color::black())), 1.0);
        let after_circle = mesh.indices.len();
        assert!(after_circle > 0);

        mesh.add_cmd(
            &DrawCmd::Line(LineCmd::new(
                Vec2::zero(),
                Vec2::new(0.0, 20.0),
                1.5,
                Color::black(),
                LineCap::Round,
            )),
            1.0,
        );
        assert!(mesh.indices.len() > after_circle);

        mesh.add_cmd(&DrawCmd::Circle(CircleCmd::new(Vec2::zero(), 0.0, Color::black())), 1.0);
        mesh.clear();
        assert!(mesh.is_empty() && mesh.vertices.is_empty());
    }
}
