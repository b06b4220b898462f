use facade_config::{BalconyStyle, FacadeConfig, Offset, SurfaceRole};
use facade_core::Vec3;

use crate::materials::RoleMaterials;
use crate::scene::{Node, NodeKind};

/// Slab placement for one balcony style. `position.z` is measured from the front facade plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BalconyLayout {
    pub position: Vec3,
    pub scale: Vec3,
    pub railing_height: f32,
}

const RAILING_THICKNESS: f32 = 0.05;

pub fn balcony_layout(style: BalconyStyle) -> BalconyLayout {
    let (position, scale, railing_height) = match style {
        BalconyStyle::Cantilever => (Vec3::new(0.0, 1.0, 1.0), Vec3::new(4.0, 0.2, 2.0), 1.0),
        BalconyStyle::Recessed => (Vec3::new(0.0, 1.0, -0.5), Vec3::new(3.5, 0.2, 1.5), 0.9),
        BalconyStyle::Stacked => (Vec3::new(0.0, 2.5, 1.0), Vec3::new(5.0, 0.2, 2.0), 1.0),
        BalconyStyle::Corner => (Vec3::new(3.5, 1.0, 0.75), Vec3::new(3.0, 0.2, 1.5), 1.0),
        BalconyStyle::Wrapped => (Vec3::new(0.0, 1.0, 1.25), Vec3::new(8.0, 0.2, 2.5), 1.1),
    };
    BalconyLayout {
        position,
        scale,
        railing_height,
    }
}

/// Slab and railing, in that order. Both are hidden when the balcony is disabled.
pub(crate) fn balcony_nodes(config: &FacadeConfig, roles: &RoleMaterials) -> [Node; 2] {
    let balcony = &config.elements.balcony;
    let placement = balcony_layout(balcony.style);
    let offset = if balcony.enabled {
        balcony.position.unwrap_or(Offset::ZERO)
    } else {
        Offset::ZERO
    };

    let slab_at = Vec3::new(
        placement.position.x + offset.x,
        placement.position.y + offset.y,
        config.dimensions.depth / 2.0 + placement.position.z,
    );
    let slab = Node::new(
        "balcony",
        NodeKind::Box,
        SurfaceRole::Accent,
        roles.for_role(SurfaceRole::Accent),
    )
    .at(slab_at)
    .scaled(placement.scale)
    .visible(balcony.enabled);

    // Railing runs along the slab's outer edge, standing on top of it.
    let railing = Node::new(
        "balcony_railing",
        NodeKind::Box,
        SurfaceRole::Trim,
        roles.railing(balcony.railing),
    )
    .at(Vec3::new(
        slab_at.x,
        slab_at.y + placement.scale.y / 2.0 + placement.railing_height / 2.0,
        slab_at.z + placement.scale.z / 2.0,
    ))
    .scaled(Vec3::new(placement.scale.x, placement.railing_height, RAILING_THICKNESS))
    .visible(balcony.enabled);

    tracing::trace!(
        enabled = balcony.enabled,
        style = ?balcony.style,
        x = slab_at.x,
        y = slab_at.y,
        "balcony placed"
    );
    [slab, railing]
}
