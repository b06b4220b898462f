// Edit intents for the facade editor.
// Each edit maps onto exactly one config reducer.

use facade_config::{
    Axis, BalconyStyle, ConfigError, DoorStyle, ElementKind, FacadeConfig, FrameStyle,
    LandscapingGroup, LightingGroup, Offset, Overhang, RailingStyle, Rgb, RoofStyle, Seed,
    SurfaceRole, WindowPattern, WindowStyle,
};
use serde::{Deserialize, Serialize};
use tracing::trace;

pub trait Edit {
    fn apply(&self, config: &FacadeConfig) -> Result<FacadeConfig, ConfigError>;

    fn name(&self) -> &str;
}

/// Serializable edit, so scripted edit lists can be loaded from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum EditIntent {
    ApplyPreset { preset: String },
    SetCount { kind: ElementKind, count: u32 },
    SetPosition { kind: ElementKind, index: usize, x: f32, y: f32 },
    SetDimension { axis: Axis, value: f32 },
    SetMaterial { role: SurfaceRole, material: String },
    SetColor { role: SurfaceRole, color: Rgb },
    ToggleBalcony { enabled: bool },
    SetBalconyPosition { x: f32, y: f32 },
    SetBalconyStyle { style: BalconyStyle },
    SetRailing { railing: RailingStyle },
    SetWindowStyle { style: WindowStyle },
    SetWindowPattern { pattern: WindowPattern },
    SetWindowFrames { frames: FrameStyle },
    SetDoorStyle { style: DoorStyle },
    SetDoorMaterial { material: String },
    SetRoofStyle { style: RoofStyle },
    SetRoofMaterial { material: String },
    SetOverhang { overhang: Overhang },
    SetLighting { lighting: LightingGroup },
    SetLandscaping { landscaping: LandscapingGroup },
    Randomize { seed: u64 },
}

impl Edit for EditIntent {
    fn apply(&self, config: &FacadeConfig) -> Result<FacadeConfig, ConfigError> {
        trace!("Applying edit {}", self.name());
        let next = match self {
            EditIntent::ApplyPreset { preset } => config.apply_style_preset(preset)?,
            EditIntent::SetCount { kind, count } => config.set_element_count(*kind, *count),
            EditIntent::SetPosition { kind, index, x, y } => {
                config.set_element_position(*kind, *index, Offset::new(*x, *y))?
            }
            EditIntent::SetDimension { axis, value } => config.set_dimension(*axis, *value)?,
            EditIntent::SetMaterial { role, material } => config.set_material(*role, material)?,
            EditIntent::SetColor { role, color } => config.set_color(*role, *color),
            EditIntent::ToggleBalcony { enabled } => config.toggle_balcony(*enabled),
            EditIntent::SetBalconyPosition { x, y } => {
                config.set_balcony_position(Offset::new(*x, *y))?
            }
            EditIntent::SetBalconyStyle { style } => config.set_balcony_style(*style),
            EditIntent::SetRailing { railing } => config.set_balcony_railing(*railing),
            EditIntent::SetWindowStyle { style } => config.set_window_style(*style),
            EditIntent::SetWindowPattern { pattern } => config.set_window_pattern(*pattern),
            EditIntent::SetWindowFrames { frames } => config.set_window_frames(*frames),
            EditIntent::SetDoorStyle { style } => config.set_door_style(*style),
            EditIntent::SetDoorMaterial { material } => config.set_door_material(material)?,
            EditIntent::SetRoofStyle { style } => config.set_roof_style(*style),
            EditIntent::SetRoofMaterial { material } => config.set_roof_material(material)?,
            EditIntent::SetOverhang { overhang } => config.set_overhang(*overhang),
            EditIntent::SetLighting { lighting } => config.set_lighting(lighting.clone())?,
            EditIntent::SetLandscaping { landscaping } => {
                config.set_landscaping(landscaping.clone())
            }
            EditIntent::Randomize { seed } => config.randomize(Seed(*seed)),
        };
        Ok(next)
    }

    fn name(&self) -> &str {
        match self {
            EditIntent::ApplyPreset { .. } => "apply_preset",
            EditIntent::SetCount { .. } => "set_count",
            EditIntent::SetPosition { .. } => "set_position",
            EditIntent::SetDimension { .. } => "set_dimension",
            EditIntent::SetMaterial { .. } => "set_material",
            EditIntent::SetColor { .. } => "set_color",
            EditIntent::ToggleBalcony { .. } => "toggle_balcony",
            EditIntent::SetBalconyPosition { .. } => "set_balcony_position",
            EditIntent::SetBalconyStyle { .. } => "set_balcony_style",
            EditIntent::SetRailing { .. } => "set_railing",
            EditIntent::SetWindowStyle { .. } => "set_window_style",
            EditIntent::SetWindowPattern { .. } => "set_window_pattern",
            EditIntent::SetWindowFrames { .. } => "set_window_frames",
            EditIntent::SetDoorStyle { .. } => "set_door_style",
            EditIntent::SetDoorMaterial { .. } => "set_door_material",
            EditIntent::SetRoofStyle { .. } => "set_roof_style",
            EditIntent::SetRoofMaterial { .. } => "set_roof_material",
            EditIntent::SetOverhang { .. } => "set_overhang",
            EditIntent::SetLighting { .. } => "set_lighting",
            EditIntent::SetLandscaping { .. } => "set_landscaping",
            EditIntent::Randomize { .. } => "randomize",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_list_parses_from_json() {
        let json = r##"[
            { "op": "apply_preset", "preset": "industrial" },
            { "op": "set_count", "kind": "windows", "count": 9 },
            { "op": "set_position", "kind": "windows", "index": 2, "x": 0.5, "y": -0.5 },
            { "op": "set_color", "role": "accent", "color": "#ff8800" },
            { "op": "set_overhang", "overhang": "large" },
            { "op": "randomize", "seed": 12 }
        ]"##;
        let edits: Vec<EditIntent> = serde_json::from_str(json).unwrap();
        assert_eq!(edits.len(), 6);
        assert_eq!(
            edits[1],
            EditIntent::SetCount {
                kind: ElementKind::Windows,
                count: 9
            }
        );
        assert_eq!(
            edits[4],
            EditIntent::SetOverhang {
                overhang: Overhang::Extended
            }
        );
    }

    #[test]
    fn test_edits_apply_in_sequence() {
        let edits = vec![
            EditIntent::ApplyPreset {
                preset: "traditional".into(),
            },
            EditIntent::SetCount {
                kind: ElementKind::Doors,
                count: 2,
            },
            EditIntent::SetPosition {
                kind: ElementKind::Doors,
                index: 1,
                x: 0.5,
                y: 0.0,
            },
        ];

        let mut config = FacadeConfig::default();
        for edit in &edits {
            config = edit.apply(&config).unwrap();
        }
        assert_eq!(config.elements.doors.positions[1], Offset::new(0.5, 0.0));
    }

    #[test]
    fn test_failed_edit_reports_config_error() {
        let edit = EditIntent::SetMaterial {
            role: SurfaceRole::Primary,
            material: "unobtainium".into(),
        };
        assert!(matches!(
            edit.apply(&FacadeConfig::default()),
            Err(ConfigError::UnknownMaterial { .. })
        ));
        assert_eq!(edit.name(), "set_material");
    }
}
