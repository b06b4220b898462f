//! Pure edit reducers.
//!
//! Every reducer takes `&self` and returns a fresh config (or a typed error).
//! The input is never modified, so callers can keep old values as undo snapshots.

use crate::{
    check_offset, Axis, BalconyStyle, ConfigError, DoorStyle, ElementKind, FacadeConfig, FrameStyle,
    LandscapingGroup, LightingGroup, MaterialId, Offset, Overhang, RailingStyle, Rgb, RoofStyle,
    StylePreset, SurfaceRole, WindowPattern, WindowStyle,
};

/// Resize a position list to `count`, keeping index-aligned entries and zero-filling new slots.
pub(crate) fn resize_positions(positions: &mut Vec<Offset>, count: u32) {
    positions.resize(count as usize, Offset::ZERO);
}

impl FacadeConfig {
    /// Apply a preset by id. Replaces style, materials and colors; some presets also set landscaping.
    pub fn apply_style_preset(&self, preset_id: &str) -> Result<Self, ConfigError> {
        let preset: StylePreset = preset_id.parse().map_err(|e| {
            tracing::error!(preset = %preset_id, "unknown style preset");
            e
        })?;
        Ok(self.with_preset(preset))
    }

    /// Typed form of [`FacadeConfig::apply_style_preset`].
    pub fn with_preset(&self, preset: StylePreset) -> Self {
        let mut next = self.clone();
        next.style = preset;
        next.materials = preset.materials();
        next.color_scheme = preset.color_scheme();
        if let Some(landscaping) = preset.landscaping() {
            next.elements.landscaping = landscaping;
        }

        tracing::info!(preset = %preset, "style preset applied");
        next
    }

    /// Set how many windows or doors the facade has. Out-of-range requests are clamped.
    pub fn set_element_count(&self, kind: ElementKind, requested: u32) -> Self {
        let count = kind.bounds().clamp(requested);
        if count != requested {
            tracing::warn!(
                kind = %kind,
                requested = requested,
                clamped = count,
                "element count clamped to bounds"
            );
        }

        let mut next = self.clone();
        let (slot, positions) = match kind {
            ElementKind::Windows => (
                &mut next.elements.windows.count,
                &mut next.elements.windows.positions,
            ),
            ElementKind::Doors => (
                &mut next.elements.doors.count,
                &mut next.elements.doors.positions,
            ),
        };
        *slot = count;
        resize_positions(positions, count);

        tracing::debug!(kind = %kind, count = count, "element count updated");
        next
    }

    /// Set the user offset of one window or door.
    pub fn set_element_position(
        &self,
        kind: ElementKind,
        index: usize,
        offset: Offset,
    ) -> Result<Self, ConfigError> {
        let (count, _) = self.element_state(kind);
        if index >= count as usize {
            tracing::error!(kind = %kind, index = index, count = count, "position index out of range");
            return Err(ConfigError::IndexOutOfRange { kind, index, count });
        }
        check_offset(&format!("{}.positions[{}]", kind, index), offset)?;

        let mut next = self.clone();
        let positions = match kind {
            ElementKind::Windows => &mut next.elements.windows.positions,
            ElementKind::Doors => &mut next.elements.doors.positions,
        };
        // Heal a short list instead of panicking on a hand-edited config.
        if positions.len() < count as usize {
            resize_positions(positions, count);
        }
        positions[index] = offset;

        tracing::debug!(kind = %kind, index = index, x = offset.x, y = offset.y, "element moved");
        Ok(next)
    }

    /// Set one facade dimension. Must be positive and finite.
    pub fn set_dimension(&self, axis: Axis, value: f32) -> Result<Self, ConfigError> {
        if !(value.is_finite() && value > 0.0) {
            tracing::error!(axis = ?axis, value = value, "dimension must be positive");
            return Err(ConfigError::InvalidValue {
                field: format!("dimensions.{:?}", axis).to_lowercase(),
                value,
            });
        }

        let mut next = self.clone();
        match axis {
            Axis::Width => next.dimensions.width = value,
            Axis::Height => next.dimensions.height = value,
            Axis::Depth => next.dimensions.depth = value,
        }
        Ok(next)
    }

    /// Assign a catalog material to a surface role.
    pub fn set_material(&self, role: SurfaceRole, material_id: &str) -> Result<Self, ConfigError> {
        let material: MaterialId = material_id.parse()?;

        let mut next = self.clone();
        next.materials.insert(role, material);
        tracing::debug!(role = %role, material = %material, "material assigned");
        Ok(next)
    }

    pub fn set_color(&self, role: SurfaceRole, color: Rgb) -> Self {
        let mut next = self.clone();
        next.color_scheme.set(role, color);
        next
    }

    /// Enable or disable the balcony. The first enable seeds the position with the origin;
    /// later toggles keep whatever the user set.
    pub fn toggle_balcony(&self, enabled: bool) -> Self {
        let mut next = self.clone();
        let balcony = &mut next.elements.balcony;
        balcony.enabled = enabled;
        if enabled && balcony.position.is_none() {
            balcony.position = Some(Offset::ZERO);
        }
        tracing::debug!(enabled = enabled, "balcony toggled");
        next
    }

    pub fn set_balcony_position(&self, offset: Offset) -> Result<Self, ConfigError> {
        check_offset("balcony.position", offset)?;

        let mut next = self.clone();
        if !next.elements.balcony.enabled {
            tracing::debug!("balcony position stored while disabled");
        }
        next.elements.balcony.position = Some(offset);
        Ok(next)
    }

    pub fn set_balcony_style(&self, style: BalconyStyle) -> Self {
        let mut next = self.clone();
        next.elements.balcony.style = style;
        next
    }

    pub fn set_balcony_railing(&self, railing: RailingStyle) -> Self {
        let mut next = self.clone();
        next.elements.balcony.railing = railing;
        next
    }

    pub fn set_window_style(&self, style: WindowStyle) -> Self {
        let mut next = self.clone();
        next.elements.windows.style = style;
        next
    }

    pub fn set_window_pattern(&self, pattern: WindowPattern) -> Self {
        let mut next = self.clone();
        next.elements.windows.pattern = pattern;
        next
    }

    pub fn set_window_frames(&self, frames: FrameStyle) -> Self {
        let mut next = self.clone();
        next.elements.windows.frames = frames;
        next
    }

    pub fn set_door_style(&self, style: DoorStyle) -> Self {
        let mut next = self.clone();
        next.elements.doors.style = style;
        next
    }

    pub fn set_door_material(&self, material_id: &str) -> Result<Self, ConfigError> {
        let material: MaterialId = material_id.parse()?;
        let mut next = self.clone();
        next.elements.doors.material = material;
        Ok(next)
    }

    pub fn set_roof_style(&self, style: RoofStyle) -> Self {
        let mut next = self.clone();
        next.elements.roof.style = style;
        next
    }

    pub fn set_roof_material(&self, material_id: &str) -> Result<Self, ConfigError> {
        let material: MaterialId = material_id.parse()?;
        let mut next = self.clone();
        next.elements.roof.material = material;
        Ok(next)
    }

    pub fn set_overhang(&self, overhang: Overhang) -> Self {
        let mut next = self.clone();
        next.elements.roof.overhang = overhang;
        next
    }

    pub fn set_lighting(&self, lighting: LightingGroup) -> Result<Self, ConfigError> {
        if !(0.0..=1.0).contains(&lighting.intensity) {
            tracing::error!(intensity = lighting.intensity, "lighting intensity out of range");
            return Err(ConfigError::InvalidValue {
                field: "lighting.intensity".into(),
                value: lighting.intensity,
            });
        }
        let mut next = self.clone();
        next.elements.lighting = lighting;
        Ok(next)
    }

    pub fn set_landscaping(&self, landscaping: LandscapingGroup) -> Self {
        let mut next = self.clone();
        next.elements.landscaping = landscaping;
        next
    }
}
