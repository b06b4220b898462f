//! facade-config: the facade configuration schema, presets and pure edit reducers.
//!
//! Design rules:
//! - A `FacadeConfig` is plain data. Every edit returns a new value; the input is never touched.
//! - Element counts are bounded and clamped; position lists always match their count.
//! - Randomization is deterministic: same seed in, same design out.
//! - All structs are serializable for save/load and share codes.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

pub use facade_core::{MaterialError, MaterialId, Offset, Rgb};

pub mod design;
pub mod preset;
pub mod random;
pub mod reducers;

pub use design::{DesignFileV1, DESIGN_FILE_EXT};
pub use preset::{Palette, StylePreset, PALETTES};
pub use random::Seed;

/// Schema version for forward compatibility.
pub const CONFIG_SCHEMA_VERSION: &str = "1.0";

pub const WINDOW_COUNT: Bounds = Bounds { min: 1, max: 12 };
pub const DOOR_COUNT: Bounds = Bounds { min: 1, max: 3 };

/// Inclusive integer bounds for repeatable element counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min: u32,
    pub max: u32,
}

impl Bounds {
    pub fn clamp(&self, value: u32) -> u32 {
        value.clamp(self.min, self.max)
    }

    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Surface roles a material and a color are assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SurfaceRole {
    Primary,
    /// Conventionally glazing.
    Secondary,
    Accent,
    Trim,
}

impl SurfaceRole {
    pub const ALL: [SurfaceRole; 4] = [
        SurfaceRole::Primary,
        SurfaceRole::Secondary,
        SurfaceRole::Accent,
        SurfaceRole::Trim,
    ];
}

impl fmt::Display for SurfaceRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SurfaceRole::Primary => "primary",
            SurfaceRole::Secondary => "secondary",
            SurfaceRole::Accent => "accent",
            SurfaceRole::Trim => "trim",
        };
        f.write_str(s)
    }
}

/// Material id per surface role.
///
/// Kept as a map so a hand-edited design missing a role still deserializes;
/// the layout engine reports that as an incomplete config.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaterialAssignment(BTreeMap<SurfaceRole, MaterialId>);

impl MaterialAssignment {
    pub fn new(primary: MaterialId, secondary: MaterialId, accent: MaterialId, trim: MaterialId) -> Self {
        let mut map = BTreeMap::new();
        map.insert(SurfaceRole::Primary, primary);
        map.insert(SurfaceRole::Secondary, secondary);
        map.insert(SurfaceRole::Accent, accent);
        map.insert(SurfaceRole::Trim, trim);
        Self(map)
    }

    pub fn get(&self, role: SurfaceRole) -> Option<MaterialId> {
        self.0.get(&role).copied()
    }

    pub fn insert(&mut self, role: SurfaceRole, material: MaterialId) {
        self.0.insert(role, material);
    }

    pub fn remove(&mut self, role: SurfaceRole) -> Option<MaterialId> {
        self.0.remove(&role)
    }

    /// Roles with no material assigned.
    pub fn missing_roles(&self) -> Vec<SurfaceRole> {
        SurfaceRole::ALL
            .into_iter()
            .filter(|r| !self.0.contains_key(r))
            .collect()
    }
}

/// Color per surface role. Tints the material's base appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorScheme {
    pub primary: Rgb,
    pub secondary: Rgb,
    pub accent: Rgb,
    pub trim: Rgb,
}

impl ColorScheme {
    pub const fn new(primary: Rgb, secondary: Rgb, accent: Rgb, trim: Rgb) -> Self {
        Self {
            primary,
            secondary,
            accent,
            trim,
        }
    }

    pub fn get(&self, role: SurfaceRole) -> Rgb {
        match role {
            SurfaceRole::Primary => self.primary,
            SurfaceRole::Secondary => self.secondary,
            SurfaceRole::Accent => self.accent,
            SurfaceRole::Trim => self.trim,
        }
    }

    pub fn set(&mut self, role: SurfaceRole, color: Rgb) {
        match role {
            SurfaceRole::Primary => self.primary = color,
            SurfaceRole::Secondary => self.secondary = color,
            SurfaceRole::Accent => self.accent = color,
            SurfaceRole::Trim => self.trim = color,
        }
    }
}

/// Dimension axis addressed by `set_dimension`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Width,
    Height,
    Depth,
}

/// Facade extents in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
}

impl Dimensions {
    /// Slider ranges of the configurator UI. The layout engine accepts any positive value.
    pub const UI_WIDTH: (f32, f32) = (6.0, 20.0);
    pub const UI_HEIGHT: (f32, f32) = (4.0, 15.0);
    pub const UI_DEPTH: (f32, f32) = (6.0, 15.0);

    pub fn is_valid(&self) -> bool {
        [self.width, self.height, self.depth]
            .iter()
            .all(|v| v.is_finite() && *v > 0.0)
    }

    pub fn get(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Width => self.width,
            Axis::Height => self.height,
            Axis::Depth => self.depth,
        }
    }

    /// Clamp to the UI slider ranges. Presentation-layer helper only.
    pub fn clamp_to_ui(self) -> Self {
        Self {
            width: self.width.clamp(Self::UI_WIDTH.0, Self::UI_WIDTH.1),
            height: self.height.clamp(Self::UI_HEIGHT.0, Self::UI_HEIGHT.1),
            depth: self.depth.clamp(Self::UI_DEPTH.0, Self::UI_DEPTH.1),
        }
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            width: 12.0,
            height: 10.0,
            depth: 8.0,
        }
    }
}

/// Repeatable element kinds that carry a count and a position list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Windows,
    Doors,
}

impl ElementKind {
    pub fn bounds(self) -> Bounds {
        match self {
            ElementKind::Windows => WINDOW_COUNT,
            ElementKind::Doors => DOOR_COUNT,
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementKind::Windows => f.write_str("windows"),
            ElementKind::Doors => f.write_str("doors"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowStyle {
    Large,
    Grid,
    Horizontal,
    Arched,
    Circular,
    Irregular,
}

impl WindowStyle {
    pub const ALL: [WindowStyle; 6] = [
        WindowStyle::Large,
        WindowStyle::Grid,
        WindowStyle::Horizontal,
        WindowStyle::Arched,
        WindowStyle::Circular,
        WindowStyle::Irregular,
    ];
}

/// Placement algorithm for the window pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowPattern {
    Grid,
    Asymmetric,
    Ribbon,
    Scattered,
}

impl WindowPattern {
    pub const ALL: [WindowPattern; 4] = [
        WindowPattern::Grid,
        WindowPattern::Asymmetric,
        WindowPattern::Ribbon,
        WindowPattern::Scattered,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameStyle {
    None,
    Minimal,
    Standard,
    Bold,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowGroup {
    pub style: WindowStyle,
    pub pattern: WindowPattern,
    pub frames: FrameStyle,
    pub count: u32,
    /// Per-window offsets added to the pattern position. Always `count` long.
    pub positions: Vec<Offset>,
}

impl Default for WindowGroup {
    fn default() -> Self {
        Self {
            style: WindowStyle::Large,
            pattern: WindowPattern::Grid,
            frames: FrameStyle::Minimal,
            count: 6,
            positions: vec![Offset::ZERO; 6],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DoorStyle {
    Sliding,
    Double,
    Revolving,
    Folding,
    Standard,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoorGroup {
    pub style: DoorStyle,
    pub material: MaterialId,
    pub count: u32,
    /// Per-door offsets added to the computed position. Always `count` long.
    pub positions: Vec<Offset>,
}

impl Default for DoorGroup {
    fn default() -> Self {
        Self {
            style: DoorStyle::Sliding,
            material: MaterialId::Glass,
            count: 1,
            positions: vec![Offset::ZERO],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BalconyStyle {
    Cantilever,
    Recessed,
    Stacked,
    Corner,
    Wrapped,
}

impl BalconyStyle {
    pub const ALL: [BalconyStyle; 5] = [
        BalconyStyle::Cantilever,
        BalconyStyle::Recessed,
        BalconyStyle::Stacked,
        BalconyStyle::Corner,
        BalconyStyle::Wrapped,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RailingStyle {
    Glass,
    Metal,
    Cable,
    Concrete,
    Wood,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalconyGroup {
    pub enabled: bool,
    pub style: BalconyStyle,
    pub railing: RailingStyle,
    /// Only read while `enabled` is true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Offset>,
}

impl Default for BalconyGroup {
    fn default() -> Self {
        Self {
            enabled: true,
            style: BalconyStyle::Cantilever,
            railing: RailingStyle::Glass,
            position: Some(Offset::ZERO),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoofStyle {
    Flat,
    Sloped,
    Pitched,
    Curved,
    Green,
}

impl RoofStyle {
    pub const ALL: [RoofStyle; 5] = [
        RoofStyle::Flat,
        RoofStyle::Sloped,
        RoofStyle::Pitched,
        RoofStyle::Curved,
        RoofStyle::Green,
    ];
}

/// Roof overhang, ordered from smallest to largest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Overhang {
    Minimal,
    #[serde(alias = "medium")]
    Standard,
    #[serde(alias = "large")]
    Extended,
    Dramatic,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoofGroup {
    pub style: RoofStyle,
    pub material: MaterialId,
    pub overhang: Overhang,
}

impl Default for RoofGroup {
    fn default() -> Self {
        Self {
            style: RoofStyle::Flat,
            material: MaterialId::Concrete,
            overhang: Overhang::Minimal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LightingStyle {
    Ambient,
    Accent,
    Dramatic,
    Minimal,
}

/// Advisory only; produces no geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightingGroup {
    pub style: LightingStyle,
    /// 0.0-1.0
    pub intensity: f32,
}

impl Default for LightingGroup {
    fn default() -> Self {
        Self {
            style: LightingStyle::Ambient,
            intensity: 0.6,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LandscapingStyle {
    Minimal,
    Formal,
    Lush,
    Xeric,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LandscapeElement {
    Planters,
    GreenWall,
    VerticalGarden,
    Trees,
    Lawn,
    WaterFeature,
}

/// Advisory only; produces no geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandscapingGroup {
    pub style: LandscapingStyle,
    pub elements: Vec<LandscapeElement>,
}

impl Default for LandscapingGroup {
    fn default() -> Self {
        Self {
            style: LandscapingStyle::Minimal,
            elements: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Elements {
    pub windows: WindowGroup,
    pub doors: DoorGroup,
    pub balcony: BalconyGroup,
    pub roof: RoofGroup,
    pub lighting: LightingGroup,
    pub landscaping: LandscapingGroup,
}

/// The complete, serializable description of one facade design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacadeConfig {
    pub style: StylePreset,
    pub materials: MaterialAssignment,
    pub color_scheme: ColorScheme,
    pub dimensions: Dimensions,
    pub elements: Elements,
}

impl Default for FacadeConfig {
    /// The "modern" preset.
    fn default() -> Self {
        let preset = StylePreset::Modern;
        Self {
            style: preset,
            materials: preset.materials(),
            color_scheme: preset.color_scheme(),
            dimensions: Dimensions::default(),
            elements: Elements::default(),
        }
    }
}

impl FacadeConfig {
    /// Count and position list for a repeatable element kind.
    pub fn element_state(&self, kind: ElementKind) -> (u32, &[Offset]) {
        match kind {
            ElementKind::Windows => (
                self.elements.windows.count,
                &self.elements.windows.positions,
            ),
            ElementKind::Doors => (self.elements.doors.count, &self.elements.doors.positions),
        }
    }

    /// Check structural invariants. Configs built through the reducers always pass.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for axis in [Axis::Width, Axis::Height, Axis::Depth] {
            let value = self.dimensions.get(axis);
            if !(value.is_finite() && value > 0.0) {
                tracing::error!(axis = ?axis, value = value, "dimension must be positive");
                return Err(ConfigError::InvalidValue {
                    field: format!("dimensions.{:?}", axis).to_lowercase(),
                    value,
                });
            }
        }

        for kind in [ElementKind::Windows, ElementKind::Doors] {
            let (count, positions) = self.element_state(kind);
            if !kind.bounds().contains(count) {
                tracing::error!(kind = %kind, count = count, "element count out of bounds");
                return Err(ConfigError::InvalidValue {
                    field: format!("{}.count", kind),
                    value: count as f32,
                });
            }
            if positions.len() != count as usize {
                tracing::error!(
                    kind = %kind,
                    count = count,
                    positions = positions.len(),
                    "position list does not match element count"
                );
                return Err(ConfigError::InconsistentElementState {
                    kind,
                    count,
                    positions: positions.len(),
                });
            }
        }

        for kind in [ElementKind::Windows, ElementKind::Doors] {
            let (_, positions) = self.element_state(kind);
            for (i, offset) in positions.iter().enumerate() {
                check_offset(&format!("{}.positions[{}]", kind, i), *offset)?;
            }
        }
        if let Some(offset) = self.elements.balcony.position {
            check_offset("balcony.position", offset)?;
        }

        let missing = self.materials.missing_roles();
        if let Some(role) = missing.first() {
            tracing::error!(role = %role, "no material assigned to role");
            return Err(ConfigError::MissingMaterial { role: *role });
        }

        Ok(())
    }
}

/// Offsets must be finite; reports the first bad component.
pub(crate) fn check_offset(field: &str, offset: Offset) -> Result<(), ConfigError> {
    if offset.is_finite() {
        return Ok(());
    }
    let value = if offset.x.is_finite() { offset.y } else { offset.x };
    tracing::error!(field = field, value = value, "offset must be finite");
    Err(ConfigError::InvalidValue {
        field: field.to_string(),
        value,
    })
}

/// Errors produced by config reducers and validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("unknown material: {id}")]
    UnknownMaterial { id: String },

    #[error("unknown style preset: {id}")]
    UnknownPreset { id: String },

    #[error("invalid value for {field}: {value}")]
    InvalidValue { field: String, value: f32 },

    #[error("{kind} index {index} out of range (count {count})")]
    IndexOutOfRange {
        kind: ElementKind,
        index: usize,
        count: u32,
    },

    #[error("{kind} count {count} does not match {positions} positions")]
    InconsistentElementState {
        kind: ElementKind,
        count: u32,
        positions: usize,
    },

    #[error("no material assigned to role '{role}'")]
    MissingMaterial { role: SurfaceRole },
}

impl From<MaterialError> for ConfigError {
    fn from(err: MaterialError) -> Self {
        match err {
            MaterialError::UnknownMaterial { id } => ConfigError::UnknownMaterial { id },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_modern_and_valid() {
        let config = FacadeConfig::default();
        assert_eq!(config.style, StylePreset::Modern);
        assert!(config.validate().is_ok());
        assert_eq!(config.elements.windows.count, 6);
        assert_eq!(config.elements.doors.count, 1);
        assert!(config.elements.balcony.enabled);
        assert_eq!(config.elements.roof.style, RoofStyle::Flat);
    }

    #[test]
    fn test_validate_rejects_mismatched_positions() {
        let mut config = FacadeConfig::default();
        config.elements.windows.positions.pop();

        assert_eq!(
            config.validate(),
            Err(ConfigError::InconsistentElementState {
                kind: ElementKind::Windows,
                count: 6,
                positions: 5,
            })
        );
    }

    #[test]
    fn test_validate_rejects_missing_role() {
        let mut config = FacadeConfig::default();
        config.materials.remove(SurfaceRole::Trim);

        assert_eq!(
            config.validate(),
            Err(ConfigError::MissingMaterial {
                role: SurfaceRole::Trim
            })
        );
    }

    #[test]
    fn test_validate_rejects_bad_dimension() {
        let mut config = FacadeConfig::default();
        config.dimensions.depth = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_non_finite_offsets() {
        let mut config = FacadeConfig::default();
        config.elements.windows.positions[2] = Offset::new(0.0, f32::INFINITY);
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidValue {
                field: "windows.positions[2]".into(),
                value: f32::INFINITY,
            })
        );

        let mut config = FacadeConfig::default();
        config.elements.balcony.position = Some(Offset::new(f32::NEG_INFINITY, 0.0));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "balcony.position"
        ));
    }

    #[test]
    fn test_clamp_to_ui_ranges() {
        let dims = Dimensions {
            width: 40.0,
            height: 1.0,
            depth: 9.0,
        }
        .clamp_to_ui();
        assert_eq!(dims.width, 20.0);
        assert_eq!(dims.height, 4.0);
        assert_eq!(dims.depth, 9.0);
    }

    #[test]
    fn test_json_shape_is_camel_case() {
        let json = serde_json::to_value(FacadeConfig::default()).unwrap();
        assert!(json.get("colorScheme").is_some());
        assert_eq!(json["materials"]["primary"], "concrete");
        assert_eq!(json["elements"]["windows"]["pattern"], "grid");
        assert_eq!(json["colorScheme"]["secondary"], "#87ceeb");
    }

    #[test]
    fn test_overhang_aliases() {
        let medium: Overhang = serde_json::from_str("\"medium\"").unwrap();
        let large: Overhang = serde_json::from_str("\"large\"").unwrap();
        assert_eq!(medium, Overhang::Standard);
        assert_eq!(large, Overhang::Extended);
        assert!(Overhang::Minimal < Overhang::Dramatic);
    }
}
