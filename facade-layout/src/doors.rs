//! Door pool placement.

use facade_config::{DoorGroup, DoorStyle, FacadeConfig, Offset, SurfaceRole};
use facade_core::Vec3;

use crate::materials::RoleMaterials;
use crate::scene::{Node, NodeKind};
use crate::{DOOR_POOL, FRONT_EPSILON};

const DOOR_SPACING: f32 = 4.0;
const DOOR_Y: f32 = -3.0;

/// Door leaf scale per style.
pub fn door_scale(style: DoorStyle) -> Vec3 {
    match style {
        DoorStyle::Standard => Vec3::new(1.2, 2.4, 0.1),
        DoorStyle::Double => Vec3::new(2.2, 2.6, 0.1),
        DoorStyle::Sliding => Vec3::new(3.0, 2.5, 0.1),
        DoorStyle::Revolving => Vec3::new(2.4, 2.6, 0.1),
        DoorStyle::Folding => Vec3::new(3.2, 2.5, 0.1),
    }
}

/// Row of `count` doors centered on x = 0, before user offsets.
pub fn door_x(i: usize, count: u32) -> f32 {
    i as f32 * DOOR_SPACING - (count as f32 - 1.0) * (DOOR_SPACING / 2.0)
}

pub(crate) fn door_nodes(config: &FacadeConfig, roles: &RoleMaterials) -> Vec<Node> {
    let doors = &config.elements.doors;
    let z = config.dimensions.depth / 2.0 + FRONT_EPSILON;
    (0..DOOR_POOL).map(|i| door_node(doors, i, z, roles)).collect()
}

fn door_node(doors: &DoorGroup, i: usize, z: f32, roles: &RoleMaterials) -> Node {
    let visible = i < doors.count as usize;
    let offset = if visible {
        doors.positions[i]
    } else {
        Offset::ZERO
    };

    let style = doors.style;
    let trim = roles.for_role(SurfaceRole::Trim);
    // Decorations live in the door's unit space, just proud of its face.
    let front = 0.6;

    Node::new(
        format!("door_{}", i),
        NodeKind::Box,
        SurfaceRole::Accent,
        roles.with_material(SurfaceRole::Accent, doors.material),
    )
    .at(Vec3::new(
        door_x(i, doors.count) + offset.x,
        DOOR_Y + offset.y,
        z,
    ))
    .scaled(door_scale(style))
    .visible(visible)
    .with_child(
        Node::new("sliding_rail", NodeKind::Box, SurfaceRole::Trim, trim)
            .at(Vec3::new(0.0, 0.52, front))
            .scaled(Vec3::new(1.05, 0.04, 0.5))
            .visible(style == DoorStyle::Sliding),
    )
    .with_child(
        Node::new("centerline", NodeKind::Box, SurfaceRole::Trim, trim)
            .at(Vec3::new(0.0, 0.0, front))
            .scaled(Vec3::new(0.02, 1.0, 0.5))
            .visible(style == DoorStyle::Double),
    )
    .with_child(
        Node::new("revolving_ring", NodeKind::Ring, SurfaceRole::Trim, trim)
            .at(Vec3::new(0.0, 0.0, front))
            .scaled(Vec3::new(0.9, 0.9 * 2.4 / 2.6, 1.0))
            .visible(style == DoorStyle::Revolving),
    )
    .with_child(
        Node::new("fold_left", NodeKind::Box, SurfaceRole::Trim, trim)
            .at(Vec3::new(-1.0 / 6.0, 0.0, front))
            .scaled(Vec3::new(0.015, 1.0, 0.5))
            .visible(style == DoorStyle::Folding),
    )
    .with_child(
        Node::new("fold_right", NodeKind::Box, SurfaceRole::Trim, trim)
            .at(Vec3::new(1.0 / 6.0, 0.0, front))
            .scaled(Vec3::new(0.015, 1.0, 0.5))
            .visible(style == DoorStyle::Folding),
    )
}
