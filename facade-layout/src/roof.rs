//! Roof node: a scaled box for flat-ish styles, a procedural mesh for pitched and curved.

use facade_config::{FacadeConfig, Overhang, RoofStyle, SurfaceRole};
use facade_core::Vec3;
use std::f32::consts::FRAC_PI_2;

use crate::geometry::{barrel_arc, gable_prism, CURVED_ROOF_SEGMENTS};
use crate::materials::RoleMaterials;
use crate::scene::{Node, NodeKind};

pub const SLAB_THICKNESS: f32 = 0.3;
pub const GREEN_THICKNESS: f32 = 0.5;
/// Tilt of a sloped roof about X, in radians.
pub const SLOPE_TILT: f32 = 0.15;
/// Ridge height of a pitched roof as a fraction of depth.
pub const PITCH_RATIO: f32 = 0.35;
/// Crown height of a curved roof as a fraction of depth.
pub const CURVE_RATIO: f32 = 0.25;

/// Horizontal scale multiplier. Grows with the overhang ordering.
pub fn overhang_factor(overhang: Overhang) -> f32 {
    match overhang {
        Overhang::Minimal => 1.0,
        Overhang::Standard => 1.15,
        Overhang::Extended => 1.3,
        Overhang::Dramatic => 1.45,
    }
}

pub(crate) fn roof_node(config: &FacadeConfig, roles: &RoleMaterials) -> Node {
    let roof = &config.elements.roof;
    let dims = config.dimensions;
    let top = dims.height / 2.0;
    let f = overhang_factor(roof.overhang);

    let node = Node::new(
        "roof",
        NodeKind::Box,
        SurfaceRole::Trim,
        roles.with_material(SurfaceRole::Trim, roof.material),
    );

    let node = match roof.style {
        RoofStyle::Flat => node
            .at(Vec3::new(0.0, top + SLAB_THICKNESS / 2.0, 0.0))
            .scaled(Vec3::new(dims.width * f, SLAB_THICKNESS, dims.depth * f)),
        RoofStyle::Sloped => node
            .at(Vec3::new(0.0, top + SLAB_THICKNESS / 2.0 + 0.25, 0.0))
            .scaled(Vec3::new(dims.width * f, SLAB_THICKNESS, dims.depth * f))
            .rotated(Vec3::new(SLOPE_TILT, 0.0, 0.0)),
        RoofStyle::Green => node
            .at(Vec3::new(0.0, top + GREEN_THICKNESS / 2.0, 0.0))
            .scaled(Vec3::new(dims.width * f, GREEN_THICKNESS, dims.depth * f))
            .with_child(
                Node::new(
                    "planting",
                    NodeKind::Plane,
                    SurfaceRole::Accent,
                    roles.for_role(SurfaceRole::Accent),
                )
                .at(Vec3::new(0.0, 0.51, 0.0))
                .rotated(Vec3::new(-FRAC_PI_2, 0.0, 0.0))
                .scaled(Vec3::new(0.95, 0.95, 1.0)),
            ),
        RoofStyle::Pitched => {
            let mut node = node
                .at(Vec3::new(0.0, top, 0.0))
                .scaled(Vec3::new(f, 1.0, f))
                .with_geometry(gable_prism(
                    dims.width,
                    dims.depth,
                    dims.depth * PITCH_RATIO,
                ));
            node.kind = NodeKind::CustomMesh;
            node
        }
        RoofStyle::Curved => {
            let mut node = node
                .at(Vec3::new(0.0, top, 0.0))
                .scaled(Vec3::new(f, 1.0, f))
                .with_geometry(barrel_arc(
                    dims.width,
                    dims.depth,
                    dims.depth * CURVE_RATIO,
                    CURVED_ROOF_SEGMENTS,
                ));
            node.kind = NodeKind::CustomMesh;
            node
        }
    };

    tracing::trace!(style = ?roof.style, overhang = f, "roof built");
    node
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roof_for(config: &FacadeConfig) -> Node {
        let roles = RoleMaterials::from_config(config).unwrap();
        roof_node(config, &roles)
    }

    #[test]
    fn test_overhang_is_monotonic() {
        let order = [
            Overhang::Minimal,
            Overhang::Standard,
            Overhang::Extended,
            Overhang::Dramatic,
        ];
        for pair in order.windows(2) {
            assert!(overhang_factor(pair[0]) < overhang_factor(pair[1]));
        }
        assert_eq!(overhang_factor(Overhang::Minimal), 1.0);
    }

    #[test]
    fn test_flat_roof_covers_facade() {
        let config = FacadeConfig::default();
        let roof = roof_for(&config);
        assert_eq!(roof.kind, NodeKind::Box);
        assert_eq!(roof.transform.scale.x, config.dimensions.width);
        assert_eq!(roof.transform.scale.z, config.dimensions.depth);
        assert!(roof.transform.position.y > config.dimensions.height / 2.0);
        assert!(roof.geometry.is_none());
    }

    #[test]
    fn test_overhang_scales_horizontal_axes_only() {
        let config = FacadeConfig::default().set_overhang(Overhang::Extended);
        let roof = roof_for(&config);
        let s = roof.transform.scale;
        assert!((s.x - config.dimensions.width * 1.3).abs() < 1e-4);
        assert!((s.z - config.dimensions.depth * 1.3).abs() < 1e-4);
        assert_eq!(s.y, SLAB_THICKNESS);
    }

    #[test]
    fn test_sloped_roof_tilts() {
        let config = FacadeConfig::default().set_roof_style(RoofStyle::Sloped);
        let roof = roof_for(&config);
        assert_eq!(roof.transform.rotation.x, SLOPE_TILT);
    }

    #[test]
    fn test_pitched_and_curved_build_meshes() {
        let pitched = roof_for(&FacadeConfig::default().set_roof_style(RoofStyle::Pitched));
        assert_eq!(pitched.kind, NodeKind::CustomMesh);
        assert_eq!(pitched.geometry.as_ref().map(|g| g.positions.len()), Some(6));

        let curved = roof_for(
            &FacadeConfig::default()
                .set_roof_style(RoofStyle::Curved)
                .set_overhang(Overhang::Dramatic),
        );
        assert_eq!(curved.kind, NodeKind::CustomMesh);
        assert_eq!(curved.transform.scale, Vec3::new(1.45, 1.0, 1.45));
        assert_eq!(curved.geometry.as_ref().map(|g| g.positions.len()), Some(28));
    }

    #[test]
    fn test_green_roof_has_planting() {
        let roof = roof_for(&FacadeConfig::default().set_roof_style(RoofStyle::Green));
        assert!(roof.child("planting").is_some());
        assert_eq!(roof.transform.scale.y, GREEN_THICKNESS);
    }

    #[test]
    fn test_roof_uses_group_material() {
        let config = FacadeConfig::default().set_roof_material("terracotta").unwrap();
        let roof = roof_for(&config);
        assert_eq!(roof.material.material, facade_core::MaterialId::Terracotta);
    }
}
