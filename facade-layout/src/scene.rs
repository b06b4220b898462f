//! Engine-agnostic scene description.
//!
//! A scene is a flat list of top-level nodes, each with optional children whose
//! transforms are local to the parent. Hidden nodes stay in the list so the
//! shape of the scene does not depend on element counts.

use facade_config::SurfaceRole;
use facade_core::{MaterialId, Rgb, Vec3};
use serde::{Deserialize, Serialize};

/// Primitive a renderer should instantiate for a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeKind {
    /// Unit cube centered at the origin.
    Box,
    /// Unit square in the XY plane, facing +Z.
    Plane,
    /// Annulus in the XY plane, outer radius 0.5.
    Ring,
    /// Filled circle in the XY plane, radius 0.5.
    Disc,
    /// Explicit vertex/index buffers in `Node::geometry`.
    CustomMesh,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    /// Euler angles in radians, XYZ order.
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

/// Triangle mesh built fresh for every layout call.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CustomGeometry {
    pub positions: Vec<[f32; 3]>,
    /// Triangle list, three indices per face.
    pub indices: Vec<u32>,
}

impl CustomGeometry {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Axis-aligned bounds as (min, max).
    pub fn bounds(&self) -> Option<([f32; 3], [f32; 3])> {
        let first = *self.positions.first()?;
        let bounds = self.positions.iter().fold((first, first), |(mut lo, mut hi), p| {
            for axis in 0..3 {
                lo[axis] = lo[axis].min(p[axis]);
                hi[axis] = hi[axis].max(p[axis]);
            }
            (lo, hi)
        });
        Some(bounds)
    }
}

/// Catalog material after tinting and role overrides.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedMaterial {
    pub material: MaterialId,
    /// Catalog base color multiplied by the role's scheme color.
    pub color: Rgb,
    pub roughness: f32,
    pub metalness: f32,
    pub transmission: f32,
    pub clearcoat: f32,
    pub clearcoat_roughness: f32,
    pub ior: f32,
    pub transparent: bool,
    pub opacity: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub name: String,
    pub kind: NodeKind,
    pub transform: Transform,
    pub material_ref: SurfaceRole,
    pub material: ResolvedMaterial,
    pub visible: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<CustomGeometry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(
        name: impl Into<String>,
        kind: NodeKind,
        material_ref: SurfaceRole,
        material: ResolvedMaterial,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            transform: Transform::default(),
            material_ref,
            material,
            visible: true,
            geometry: None,
            children: Vec::new(),
        }
    }

    pub fn at(mut self, position: Vec3) -> Self {
        self.transform.position = position;
        self
    }

    pub fn scaled(mut self, scale: Vec3) -> Self {
        self.transform.scale = scale;
        self
    }

    pub fn rotated(mut self, rotation: Vec3) -> Self {
        self.transform.rotation = rotation;
        self
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn with_geometry(mut self, geometry: CustomGeometry) -> Self {
        self.geometry = Some(geometry);
        self
    }

    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn child(&self, name: &str) -> Option<&Node> {
        self.children.iter().find(|c| c.name == name)
    }

    fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(Node::subtree_len).sum::<usize>()
    }
}

/// Output of [`crate::layout`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SceneDescription {
    pub nodes: Vec<Node>,
}

impl SceneDescription {
    pub fn node(&self, name: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.name == name)
    }

    /// Top-level nodes whose name starts with `prefix`, in scene order.
    pub fn nodes_with_prefix<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a Node> + 'a {
        self.nodes.iter().filter(move |n| n.name.starts_with(prefix))
    }

    /// Number of visible top-level nodes.
    pub fn visible_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.visible).count()
    }

    /// Every node in the tree, children included.
    pub fn total_node_count(&self) -> usize {
        self.nodes.iter().map(Node::subtree_len).sum()
    }
}
