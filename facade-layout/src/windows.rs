//! Window pool placement.
//!
//! Twelve slots are always emitted. Slot `i` sits in grid cell
//! `(row = i / 3, col = i % 3)`, the pattern moves it, the user offset is added
//! on top, and the style decides the scale and primitive.

use facade_config::{FacadeConfig, FrameStyle, Offset, SurfaceRole, WindowGroup, WindowPattern, WindowStyle};
use facade_core::Vec3;

use crate::geometry::{arched_plane, ARCH_SEGMENTS};
use crate::materials::RoleMaterials;
use crate::scene::{Node, NodeKind};
use crate::{FRONT_EPSILON, WINDOW_POOL};

const ARCH_BULGE: f32 = 0.25;

/// Pattern position of slot `i` before any user offset.
pub fn pattern_position(pattern: WindowPattern, i: usize) -> (f32, f32) {
    let row = (i / 3) as f32;
    let col = (i % 3) as f32;
    match pattern {
        WindowPattern::Grid => ((col - 1.0) * 2.5, (row - 1.0) * 2.0 + 1.0),
        WindowPattern::Asymmetric => (
            (col - 1.0) * 2.5 + (i / 3 % 2) as f32 * 0.8,
            (row - 1.0) * 2.0 + 1.2,
        ),
        WindowPattern::Ribbon => ((col - 1.0) * 3.5, row),
        WindowPattern::Scattered => {
            let k = i as f32;
            (
                (col - 1.0) * 2.5 + k.sin() * 0.5,
                (row - 1.0) * 2.0 + 1.0 + k.cos() * 0.5,
            )
        }
    }
}

/// Pane scale (x, y) for a style. Ribbon patterns stretch every pane into a strip.
pub fn pane_scale(style: WindowStyle, pattern: WindowPattern, i: usize) -> (f32, f32) {
    if pattern == WindowPattern::Ribbon {
        return (3.0, 0.8);
    }
    match style {
        WindowStyle::Large => (2.0, 2.0),
        WindowStyle::Grid => (1.8, 1.8),
        WindowStyle::Horizontal => (2.5, 1.0),
        WindowStyle::Arched => (1.5, 2.0),
        WindowStyle::Circular => (1.3, 1.3),
        WindowStyle::Irregular => (1.2 + 0.4 * (i % 3) as f32, 1.6 - 0.3 * (i % 2) as f32),
    }
}

fn frame_growth(frames: FrameStyle) -> Option<f32> {
    match frames {
        FrameStyle::None => None,
        FrameStyle::Minimal => Some(0.04),
        FrameStyle::Standard => Some(0.08),
        FrameStyle::Bold => Some(0.15),
    }
}

pub(crate) fn window_nodes(config: &FacadeConfig, roles: &RoleMaterials) -> Vec<Node> {
    let windows = &config.elements.windows;
    let z = config.dimensions.depth / 2.0 + FRONT_EPSILON;

    (0..WINDOW_POOL)
        .map(|i| window_node(windows, i, z, roles))
        .collect()
}

fn window_node(windows: &WindowGroup, i: usize, z: f32, roles: &RoleMaterials) -> Node {
    let visible = i < windows.count as usize;
    // Hidden slots ignore offsets so they never depend on stale data.
    let offset = if visible {
        windows.positions[i]
    } else {
        Offset::ZERO
    };

    let (bx, by) = pattern_position(windows.pattern, i);
    let (sx, sy) = pane_scale(windows.style, windows.pattern, i);

    let kind = match windows.style {
        WindowStyle::Circular => NodeKind::Disc,
        WindowStyle::Arched => NodeKind::CustomMesh,
        _ => NodeKind::Plane,
    };

    let mut node = Node::new(
        format!("window_{}", i),
        kind,
        SurfaceRole::Secondary,
        roles.for_role(SurfaceRole::Secondary),
    )
    .at(Vec3::new(bx + offset.x, by + offset.y, z))
    .scaled(Vec3::new(sx, sy, 1.0))
    .visible(visible);

    if windows.style == WindowStyle::Arched {
        node = node.with_geometry(arched_plane(ARCH_SEGMENTS, ARCH_BULGE));
    }

    let trim = roles.for_role(SurfaceRole::Trim);
    let growth = frame_growth(windows.frames);
    let frame_kind = match windows.style {
        WindowStyle::Circular => NodeKind::Ring,
        _ => NodeKind::Box,
    };
    node = node.with_child(
        Node::new("frame", frame_kind, SurfaceRole::Trim, trim)
            .at(Vec3::new(0.0, 0.0, -0.02))
            .scaled(Vec3::new(
                1.0 + growth.unwrap_or(0.0),
                1.0 + growth.unwrap_or(0.0),
                0.05,
            ))
            .visible(growth.is_some()),
    );

    if windows.style == WindowStyle::Grid {
        node = node
            .with_child(
                Node::new("divider_vertical", NodeKind::Box, SurfaceRole::Trim, trim)
                    .at(Vec3::new(0.0, 0.0, 0.01))
                    .scaled(Vec3::new(0.03, 1.0, 0.02)),
            )
            .with_child(
                Node::new("divider_horizontal", NodeKind::Box, SurfaceRole::Trim, trim)
                    .at(Vec3::new(0.0, 0.0, 0.01))
                    .scaled(Vec3::new(1.0, 0.03, 0.02)),
            );
    }

    tracing::trace!(
        index = i,
        visible = visible,
        x = node.transform.position.x,
        y = node.transform.position.y,
        "window placed"
    );
    node
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: (f32, f32), b: (f32, f32)) -> bool {
        (a.0 - b.0).abs() < 1e-5 && (a.1 - b.1).abs() < 1e-5
    }

    #[test]
    fn test_grid_formula() {
        assert!(close(pattern_position(WindowPattern::Grid, 0), (-2.5, -1.0)));
        assert!(close(pattern_position(WindowPattern::Grid, 4), (0.0, 1.0)));
        assert!(close(pattern_position(WindowPattern::Grid, 11), (2.5, 5.0)));
    }

    #[test]
    fn test_asymmetric_shifts_odd_rows() {
        let even = pattern_position(WindowPattern::Asymmetric, 1);
        let odd = pattern_position(WindowPattern::Asymmetric, 4);
        assert!(close(even, (0.0, -0.8)));
        assert!(close(odd, (0.8, 1.2)));
    }

    #[test]
    fn test_ribbon_formula_and_scale() {
        assert!(close(pattern_position(WindowPattern::Ribbon, 5), (3.5, 1.0)));
        assert_eq!(pane_scale(WindowStyle::Large, WindowPattern::Ribbon, 0), (3.0, 0.8));
    }

    #[test]
    fn test_scattered_is_deterministic() {
        let a = pattern_position(WindowPattern::Scattered, 7);
        let b = pattern_position(WindowPattern::Scattered, 7);
        assert_eq!(a, b);
        // Slot 7 is row 2, col 1.
        let expected = ((7.0f32).sin() * 0.5, 3.0 + (7.0f32).cos() * 0.5);
        assert!(close(a, expected));
    }

    #[test]
    fn test_style_scales() {
        let grid = WindowPattern::Grid;
        assert_eq!(pane_scale(WindowStyle::Large, grid, 0), (2.0, 2.0));
        assert_eq!(pane_scale(WindowStyle::Arched, grid, 0), (1.5, 2.0));
        assert_eq!(pane_scale(WindowStyle::Circular, grid, 0), (1.3, 1.3));
        assert_eq!(pane_scale(WindowStyle::Horizontal, grid, 0), (2.5, 1.0));
    }
}
