//! facade-layout: turns a `FacadeConfig` into a renderer-agnostic scene.
//!
//! `layout` is a pure function. It rebuilds the whole scene on every call,
//! holds no state between calls and never substitutes defaults for a broken
//! config: structural problems come back as `LayoutError`.
//!
//! Scene order is fixed: `facade`, `window_0..=window_11`, `door_0..=door_2`,
//! `balcony`, `balcony_railing`, `roof`.

use facade_config::{ElementKind, FacadeConfig, SurfaceRole, DOOR_COUNT, WINDOW_COUNT};
use facade_core::{Offset, Vec3};
use thiserror::Error;

pub mod balcony;
pub mod doors;
pub mod geometry;
pub mod materials;
pub mod roof;
pub mod scene;
pub mod windows;

pub use scene::{CustomGeometry, Node, NodeKind, ResolvedMaterial, SceneDescription, Transform};

use materials::RoleMaterials;

/// Window slots always present in the scene.
pub const WINDOW_POOL: usize = WINDOW_COUNT.max as usize;
/// Door slots always present in the scene.
pub const DOOR_POOL: usize = DOOR_COUNT.max as usize;
/// Distance in front of the facade plane where windows and doors sit.
pub const FRONT_EPSILON: f32 = 0.05;
/// Top-level node count of every scene.
pub const SCENE_NODE_COUNT: usize = 1 + WINDOW_POOL + DOOR_POOL + 2 + 1;

/// Lay out a facade.
pub fn layout(config: &FacadeConfig) -> Result<SceneDescription, LayoutError> {
    check_structure(config)?;
    let roles = RoleMaterials::from_config(config)?;

    let dims = config.dimensions;
    let mut nodes = Vec::with_capacity(SCENE_NODE_COUNT);
    nodes.push(
        Node::new(
            "facade",
            NodeKind::Box,
            SurfaceRole::Primary,
            roles.for_role(SurfaceRole::Primary),
        )
        .scaled(Vec3::new(dims.width, dims.height, dims.depth)),
    );
    nodes.extend(windows::window_nodes(config, &roles));
    nodes.extend(doors::door_nodes(config, &roles));
    nodes.extend(balcony::balcony_nodes(config, &roles));
    nodes.push(roof::roof_node(config, &roles));

    let scene = SceneDescription { nodes };
    tracing::debug!(
        nodes = scene.nodes.len(),
        visible = scene.visible_count(),
        style = %config.style,
        "facade laid out"
    );
    Ok(scene)
}

/// Structural checks. Configs produced by the reducers always pass.
fn check_structure(config: &FacadeConfig) -> Result<(), LayoutError> {
    let dims = config.dimensions;
    for (field, value) in [
        ("width", dims.width),
        ("height", dims.height),
        ("depth", dims.depth),
    ] {
        if !(value.is_finite() && value > 0.0) {
            tracing::error!(field = field, value = value, "non-positive dimension reached layout");
            return Err(LayoutError::InvalidValue {
                field: format!("dimensions.{}", field),
                value,
            });
        }
    }

    for kind in [ElementKind::Windows, ElementKind::Doors] {
        let (count, positions) = config.element_state(kind);
        if !kind.bounds().contains(count) {
            tracing::error!(kind = %kind, count = count, "element count out of bounds reached layout");
            return Err(LayoutError::InvalidValue {
                field: format!("{}.count", kind),
                value: count as f32,
            });
        }
        if positions.len() != count as usize {
            tracing::error!(
                kind = %kind,
                count = count,
                positions = positions.len(),
                "element state inconsistent"
            );
            return Err(LayoutError::InconsistentElementState {
                kind,
                count,
                positions: positions.len(),
            });
        }
        for (i, offset) in positions.iter().enumerate() {
            check_offset(format!("{}.positions[{}]", kind, i), *offset)?;
        }
    }
    if let Some(offset) = config.elements.balcony.position {
        check_offset("balcony.position".to_string(), offset)?;
    }

    // The roof spans the widest extents of the scene.
    let f = roof::overhang_factor(config.elements.roof.overhang);
    for (field, value) in [("width", dims.width * f), ("depth", dims.depth * f)] {
        if !value.is_finite() {
            tracing::error!(field = field, overhang = f, "roof extent overflows");
            return Err(LayoutError::InvalidValue {
                field: format!("roof.{}", field),
                value,
            });
        }
    }

    Ok(())
}

fn check_offset(field: String, offset: Offset) -> Result<(), LayoutError> {
    if offset.is_finite() {
        return Ok(());
    }
    let value = if offset.x.is_finite() { offset.y } else { offset.x };
    tracing::error!(field = %field, value = value, "non-finite offset reached layout");
    Err(LayoutError::InvalidValue { field, value })
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("config has no material for role '{role}'")]
    IncompleteConfig { role: SurfaceRole },

    #[error("{kind} count {count} does not match {positions} positions")]
    InconsistentElementState {
        kind: ElementKind,
        count: u32,
        positions: usize,
    },

    #[error("invalid value for {field}: {value}")]
    InvalidValue { field: String, value: f32 },
}
