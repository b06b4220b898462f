//! facade-core: shared value types and the static material catalog.
//!
//! Design rules:
//! - Everything here is plain data: `Copy` where possible, serializable, no handles.
//! - The catalog is a `static` table, read-only for the life of the process.
//! - Colors travel as `#rrggbb` strings so saved designs stay human-editable.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub mod material;

pub use material::{lookup, MaterialDefinition, MaterialError, MaterialId, CATALOG};

/// A 3D vector in meters (positions, scales) or radians (rotations).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3::splat(0.0);
    pub const ONE: Vec3 = Vec3::splat(1.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub const fn splat(v: f32) -> Self {
        Self { x: v, y: v, z: v }
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

impl Default for Vec3 {
    fn default() -> Self {
        Vec3::ZERO
    }
}

/// A per-instance 2D adjustment on the facade plane, added to the computed placement.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Offset {
    pub x: f32,
    pub y: f32,
}

impl Offset {
    pub const ZERO: Offset = Offset { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// 8-bit sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(0xff, 0xff, 0xff);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed `0xRRGGBB` literal.
    pub const fn hex(packed: u32) -> Self {
        Self {
            r: ((packed >> 16) & 0xff) as u8,
            g: ((packed >> 8) & 0xff) as u8,
            b: (packed & 0xff) as u8,
        }
    }

    /// Channels as 0.0-1.0 floats.
    pub fn as_unit(self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }

    /// Channel-wise multiply, used to tint a material's base color.
    pub fn multiply(self, other: Rgb) -> Rgb {
        let mul = |a: u8, b: u8| ((a as u16 * b as u16 + 127) / 255) as u8;
        Rgb::new(mul(self.r, other.r), mul(self.g, other.g), mul(self.b, other.b))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color '{input}' (expected #rgb or #rrggbb)")]
pub struct ColorParseError {
    pub input: String,
}

impl FromStr for Rgb {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ColorParseError {
            input: s.to_string(),
        };
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(err());
        }

        match digits.len() {
            6 => {
                let packed = u32::from_str_radix(digits, 16).map_err(|_| err())?;
                Ok(Rgb::hex(packed))
            }
            3 => {
                let mut channels = [0u8; 3];
                for (slot, c) in channels.iter_mut().zip(digits.chars()) {
                    let v = c.to_digit(16).ok_or_else(err)? as u8;
                    *slot = v * 16 + v;
                }
                Ok(Rgb::new(channels[0], channels[1], channels[2]))
            }
            _ => Err(err()),
        }
    }
}

impl TryFrom<String> for Rgb {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgb> for String {
    fn from(value: Rgb) -> Self {
        value.to_string()
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(c: [u8; 3]) -> Self {
        Rgb::new(c[0], c[1], c[2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_long_and_short_hex() {
        assert_eq!("#87ceeb".parse::<Rgb>().unwrap(), Rgb::new(0x87, 0xce, 0xeb));
        assert_eq!("fff".parse::<Rgb>().unwrap(), Rgb::WHITE);
        assert_eq!("#a1b".parse::<Rgb>().unwrap(), Rgb::new(0xaa, 0x11, 0xbb));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("#12345".parse::<Rgb>().is_err());
        assert!("#gggggg".parse::<Rgb>().is_err());
        assert!("".parse::<Rgb>().is_err());
    }

    #[test]
    fn test_parse_accepts_one_hash_only() {
        assert!("##fff".parse::<Rgb>().is_err());
        assert!("##ffffff".parse::<Rgb>().is_err());
        assert!("#".parse::<Rgb>().is_err());
    }

    #[test]
    fn test_offset_finiteness() {
        assert!(Offset::new(1.0, -2.0).is_finite());
        assert!(!Offset::new(f32::NAN, 0.0).is_finite());
        assert!(!Offset::new(0.0, f32::NEG_INFINITY).is_finite());
    }

    #[test]
    fn test_display_is_lowercase_hex() {
        assert_eq!(Rgb::hex(0x2F4F4F).to_string(), "#2f4f4f");
    }

    #[test]
    fn test_serde_uses_hex_strings() {
        let json = serde_json::to_string(&Rgb::hex(0x336699)).unwrap();
        assert_eq!(json, "\"#336699\"");

        let back: Rgb = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Rgb::hex(0x336699));

        assert!(serde_json::from_str::<Rgb>("\"blue\"").is_err());
    }

    #[test]
    fn test_multiply_by_white_is_identity() {
        let c = Rgb::hex(0x8b4513);
        assert_eq!(c.multiply(Rgb::WHITE), c);
        assert_eq!(c.multiply(Rgb::new(0, 0, 0)), Rgb::new(0, 0, 0));
    }
}
