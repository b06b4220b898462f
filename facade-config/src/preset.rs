//! Named style presets and curated color palettes.
//!
//! A preset is applied atomically: style id, materials and colors change in one
//! step, and some presets also carry landscaping.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{
    ColorScheme, ConfigError, LandscapeElement, LandscapingGroup, LandscapingStyle,
    MaterialAssignment, MaterialId, Rgb,
};

/// Top-level design style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StylePreset {
    Modern,
    Minimalist,
    Industrial,
    Brutalist,
    Biophilic,
    Traditional,
}

impl StylePreset {
    pub const ALL: [StylePreset; 6] = [
        StylePreset::Modern,
        StylePreset::Minimalist,
        StylePreset::Industrial,
        StylePreset::Brutalist,
        StylePreset::Biophilic,
        StylePreset::Traditional,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StylePreset::Modern => "modern",
            StylePreset::Minimalist => "minimalist",
            StylePreset::Industrial => "industrial",
            StylePreset::Brutalist => "brutalist",
            StylePreset::Biophilic => "biophilic",
            StylePreset::Traditional => "traditional",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            StylePreset::Modern => "Clean concrete planes with generous glazing",
            StylePreset::Minimalist => "White surfaces, pale glass and warm timber accents",
            StylePreset::Industrial => "Exposed brick with dark steel framing",
            StylePreset::Brutalist => "Raw board-formed concrete massing",
            StylePreset::Biophilic => "Soft concrete, timber and planted surfaces",
            StylePreset::Traditional => "Brick, stone trim and timber joinery",
        }
    }

    pub fn materials(&self) -> MaterialAssignment {
        use MaterialId::*;
        match self {
            StylePreset::Modern => MaterialAssignment::new(Concrete, Glass, Metal, Metal),
            StylePreset::Minimalist => MaterialAssignment::new(Concrete, Glass, Wood, Metal),
            StylePreset::Industrial => MaterialAssignment::new(Brick, Glass, Metal, Metal),
            StylePreset::Brutalist => MaterialAssignment::new(Concrete, Glass, Concrete, Metal),
            StylePreset::Biophilic => MaterialAssignment::new(Concrete, Glass, Wood, Wood),
            StylePreset::Traditional => MaterialAssignment::new(Brick, Glass, Wood, Stone),
        }
    }

    pub fn color_scheme(&self) -> ColorScheme {
        match self {
            StylePreset::Modern => scheme(0xf5f5f5, 0x87ceeb, 0x333333, 0x666666),
            StylePreset::Minimalist => scheme(0xffffff, 0xe0f2f7, 0xd4a574, 0x9e9e9e),
            StylePreset::Industrial => scheme(0x8b4513, 0x708090, 0x2f4f4f, 0x1c1c1c),
            StylePreset::Brutalist => scheme(0xa9a9a9, 0x5f7f8f, 0x696969, 0x404040),
            StylePreset::Biophilic => scheme(0xe8e4d9, 0xa8d5ba, 0x6b8e23, 0x8b7355),
            StylePreset::Traditional => scheme(0xb5651d, 0xadd8e6, 0x654321, 0xf5f5dc),
        }
    }

    /// Landscaping that comes with the preset, if any.
    pub fn landscaping(&self) -> Option<LandscapingGroup> {
        match self {
            StylePreset::Biophilic => Some(LandscapingGroup {
                style: LandscapingStyle::Lush,
                elements: vec![
                    LandscapeElement::Planters,
                    LandscapeElement::GreenWall,
                    LandscapeElement::VerticalGarden,
                ],
            }),
            _ => None,
        }
    }
}

impl fmt::Display for StylePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StylePreset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StylePreset::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownPreset { id: s.to_string() })
    }
}

const fn scheme(primary: u32, secondary: u32, accent: u32, trim: u32) -> ColorScheme {
    ColorScheme::new(
        Rgb::hex(primary),
        Rgb::hex(secondary),
        Rgb::hex(accent),
        Rgb::hex(trim),
    )
}

/// A coordinated four-color palette used by randomization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub name: &'static str,
    pub colors: ColorScheme,
}

pub static PALETTES: [Palette; 6] = [
    Palette {
        name: "Nordic",
        colors: scheme(0xf4f1ea, 0xb8d8e8, 0x5b7083, 0x2e3a44),
    },
    Palette {
        name: "Desert",
        colors: scheme(0xe3c9a8, 0x9fc5d1, 0xc2693e, 0x7a4a2a),
    },
    Palette {
        name: "Forest",
        colors: scheme(0xdcd6c4, 0xa8d5ba, 0x4f6f52, 0x3a3226),
    },
    Palette {
        name: "Coastal",
        colors: scheme(0xfafafa, 0x8ecae6, 0x219ebc, 0x023047),
    },
    Palette {
        name: "Urban",
        colors: scheme(0xbfbfbf, 0x6b8ba4, 0xe07a5f, 0x3d405b),
    },
    Palette {
        name: "Terracotta",
        colors: scheme(0xf2e8cf, 0xa7c4bc, 0xbc4749, 0x6a994e),
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SurfaceRole;

    #[test]
    fn test_every_preset_assigns_every_role() {
        for preset in StylePreset::ALL {
            assert!(preset.materials().missing_roles().is_empty(), "{}", preset);
        }
    }

    #[test]
    fn test_preset_ids_parse() {
        for preset in StylePreset::ALL {
            assert_eq!(preset.as_str().parse::<StylePreset>().unwrap(), preset);
        }
        assert_eq!(
            "gothic".parse::<StylePreset>(),
            Err(ConfigError::UnknownPreset { id: "gothic".into() })
        );
    }

    #[test]
    fn test_only_biophilic_carries_landscaping() {
        for preset in StylePreset::ALL {
            assert_eq!(
                preset.landscaping().is_some(),
                preset == StylePreset::Biophilic
            );
        }
    }

    #[test]
    fn test_biophilic_primary_is_concrete() {
        let materials = StylePreset::Biophilic.materials();
        assert_eq!(materials.get(SurfaceRole::Primary), Some(MaterialId::Concrete));
    }

    #[test]
    fn test_palettes_are_distinct() {
        for (i, a) in PALETTES.iter().enumerate() {
            for b in PALETTES.iter().skip(i + 1) {
                assert_ne!(a.colors, b.colors, "{} vs {}", a.name, b.name);
            }
        }
    }
}
