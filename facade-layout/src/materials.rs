//! Role-based material resolution.

use facade_config::{ColorScheme, FacadeConfig, RailingStyle, SurfaceRole};
use facade_core::{MaterialDefinition, MaterialId, Rgb};

use crate::scene::ResolvedMaterial;
use crate::LayoutError;

const DEFAULT_IOR: f32 = 1.5;
const GLASS_OPACITY: f32 = 0.4;
const GLAZING_TRANSMISSION: f32 = 0.9;

/// Resolve a catalog entry tinted with `tint`.
pub fn resolve(definition: &MaterialDefinition, tint: Rgb) -> ResolvedMaterial {
    ResolvedMaterial {
        material: definition.id,
        color: definition.base_color.multiply(tint),
        roughness: definition.roughness,
        metalness: definition.metalness,
        transmission: definition.transmission.unwrap_or(0.0),
        clearcoat: definition.clearcoat.unwrap_or(0.0),
        clearcoat_roughness: definition.clearcoat_roughness.unwrap_or(0.0),
        ior: definition.index_of_refraction.unwrap_or(DEFAULT_IOR),
        transparent: definition.is_transparent,
        opacity: if definition.is_transparent {
            GLASS_OPACITY
        } else {
            1.0
        },
    }
}

/// The four role materials of one config, resolved once per layout call.
#[derive(Debug, Clone)]
pub struct RoleMaterials {
    ids: [MaterialId; 4],
    colors: ColorScheme,
}

impl RoleMaterials {
    pub fn from_config(config: &FacadeConfig) -> Result<Self, LayoutError> {
        let mut ids = [MaterialId::Concrete; 4];
        for (slot, role) in ids.iter_mut().zip(SurfaceRole::ALL) {
            *slot = config.materials.get(role).ok_or_else(|| {
                tracing::error!(role = %role, "config has no material for role");
                LayoutError::IncompleteConfig { role }
            })?;
        }
        Ok(Self {
            ids,
            colors: config.color_scheme,
        })
    }

    pub fn id(&self, role: SurfaceRole) -> MaterialId {
        self.ids[role as usize]
    }

    /// The role's own material, tinted by the role's color.
    pub fn for_role(&self, role: SurfaceRole) -> ResolvedMaterial {
        self.with_material(role, self.id(role))
    }

    /// A group-specific material (door, roof) tinted by the role's color.
    pub fn with_material(&self, role: SurfaceRole, material: MaterialId) -> ResolvedMaterial {
        let mut resolved = resolve(material.definition(), self.colors.get(role));
        // Secondary is glazing: glass there always renders see-through.
        if role == SurfaceRole::Secondary && material == MaterialId::Glass {
            resolved.transparent = true;
            resolved.transmission = GLAZING_TRANSMISSION;
            resolved.opacity = GLASS_OPACITY;
        }
        resolved
    }

    /// Railing material, tinted with the trim color.
    pub fn railing(&self, railing: RailingStyle) -> ResolvedMaterial {
        let tint = self.colors.trim;
        match railing {
            RailingStyle::Glass => {
                let mut m = resolve(MaterialId::Glass.definition(), tint);
                m.transparent = true;
                m.transmission = 0.95;
                m.opacity = 0.3;
                m
            }
            RailingStyle::Metal => {
                let mut m = resolve(MaterialId::Metal.definition(), tint);
                m.metalness = 0.9;
                m.roughness = 0.2;
                m
            }
            RailingStyle::Cable | RailingStyle::Concrete | RailingStyle::Wood => {
                let id = match railing {
                    RailingStyle::Concrete => MaterialId::Concrete,
                    RailingStyle::Wood => MaterialId::Wood,
                    _ => MaterialId::Metal,
                };
                let mut m = resolve(id.definition(), tint);
                m.roughness = 0.5;
                m.metalness = 0.3;
                m.transparent = false;
                m.transmission = 0.0;
                m.opacity = 1.0;
                m
            }
        }
    }
}
