//! Static material catalog.
//!
//! Each known material id maps to one immutable set of PBR shading parameters.
//! The facade's color scheme tints these at layout time; the catalog itself is
//! never mutated.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::Rgb;

/// Known facade materials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialId {
    Concrete,
    Glass,
    Wood,
    Brick,
    Stone,
    Metal,
    Terracotta,
}

impl MaterialId {
    pub const ALL: [MaterialId; 7] = [
        MaterialId::Concrete,
        MaterialId::Glass,
        MaterialId::Wood,
        MaterialId::Brick,
        MaterialId::Stone,
        MaterialId::Metal,
        MaterialId::Terracotta,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MaterialId::Concrete => "concrete",
            MaterialId::Glass => "glass",
            MaterialId::Wood => "wood",
            MaterialId::Brick => "brick",
            MaterialId::Stone => "stone",
            MaterialId::Metal => "metal",
            MaterialId::Terracotta => "terracotta",
        }
    }

    /// Catalog entry for this id. Every variant has exactly one entry.
    pub fn definition(self) -> &'static MaterialDefinition {
        // CATALOG is ordered like the enum.
        &CATALOG[self as usize]
    }
}

impl fmt::Display for MaterialId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MaterialId {
    type Err = MaterialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MaterialId::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| MaterialError::UnknownMaterial { id: s.to_string() })
    }
}

/// Shading parameters for one material.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MaterialDefinition {
    pub id: MaterialId,
    pub base_color: Rgb,
    /// 0.0 = mirror, 1.0 = fully diffuse
    pub roughness: f32,
    /// 0.0 = dielectric, 1.0 = metal
    pub metalness: f32,
    pub transmission: Option<f32>,
    pub clearcoat: Option<f32>,
    pub clearcoat_roughness: Option<f32>,
    pub index_of_refraction: Option<f32>,
    pub is_transparent: bool,
}

impl MaterialDefinition {
    const fn opaque(id: MaterialId, base_color: Rgb, roughness: f32, metalness: f32) -> Self {
        Self {
            id,
            base_color,
            roughness,
            metalness,
            transmission: None,
            clearcoat: None,
            clearcoat_roughness: None,
            index_of_refraction: None,
            is_transparent: false,
        }
    }
}

pub static CATALOG: [MaterialDefinition; 7] = [
    MaterialDefinition::opaque(MaterialId::Concrete, Rgb::hex(0xcccccc), 0.8, 0.1),
    MaterialDefinition {
        id: MaterialId::Glass,
        base_color: Rgb::hex(0x88ccff),
        roughness: 0.05,
        metalness: 0.1,
        transmission: Some(0.9),
        clearcoat: Some(1.0),
        clearcoat_roughness: Some(0.05),
        index_of_refraction: Some(1.5),
        is_transparent: true,
    },
    MaterialDefinition::opaque(MaterialId::Wood, Rgb::hex(0x8b4513), 0.8, 0.0),
    MaterialDefinition::opaque(MaterialId::Brick, Rgb::hex(0xb22222), 0.9, 0.0),
    MaterialDefinition::opaque(MaterialId::Stone, Rgb::hex(0x808080), 0.85, 0.05),
    MaterialDefinition {
        id: MaterialId::Metal,
        base_color: Rgb::hex(0xc0c0c0),
        roughness: 0.2,
        metalness: 0.9,
        transmission: None,
        clearcoat: Some(1.0),
        clearcoat_roughness: Some(0.1),
        index_of_refraction: None,
        is_transparent: false,
    },
    MaterialDefinition::opaque(MaterialId::Terracotta, Rgb::hex(0xe2725b), 0.75, 0.0),
];

/// Look up a material by its string id.
pub fn lookup(id: &str) -> Result<&'static MaterialDefinition, MaterialError> {
    let material: MaterialId = id.parse().map_err(|e| {
        tracing::error!(id = %id, "material id not in catalog");
        e
    })?;
    tracing::trace!(id = %material, "material lookup");
    Ok(material.definition())
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MaterialError {
    #[error("unknown material: {id}")]
    UnknownMaterial { id: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_ordered_like_enum() {
        for id in MaterialId::ALL {
            assert_eq!(id.definition().id, id);
        }
    }

    #[test]
    fn test_lookup_known_material() {
        let glass = lookup("glass").unwrap();
        assert!(glass.is_transparent);
        assert_eq!(glass.transmission, Some(0.9));

        let metal = lookup("metal").unwrap();
        assert!(metal.metalness > 0.8);
    }

    #[test]
    fn test_lookup_unknown_material() {
        let err = lookup("unobtainium").unwrap_err();
        assert_eq!(
            err,
            MaterialError::UnknownMaterial {
                id: "unobtainium".into()
            }
        );
    }

    #[test]
    fn test_ids_round_trip_through_strings() {
        for id in MaterialId::ALL {
            assert_eq!(id.as_str().parse::<MaterialId>().unwrap(), id);
            let json = serde_json::to_string(&id).unwrap();
            assert_eq!(json, format!("\"{}\"", id.as_str()));
        }
    }

    #[test]
    fn test_catalog_parameters_in_range() {
        for def in CATALOG.iter() {
            assert!((0.0..=1.0).contains(&def.roughness), "{}", def.id);
            assert!((0.0..=1.0).contains(&def.metalness), "{}", def.id);
        }
    }
}
