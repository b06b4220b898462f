// Editing session: the current config, its scene, and the undo history.
// Every successful edit re-runs layout before it is recorded.

use facade_config::{ConfigError, FacadeConfig};
use facade_layout::{layout, LayoutError, SceneDescription};
use thiserror::Error;
use tracing::{debug, info, trace, warn};

use super::edits::Edit;
use super::history::{History, HistoryError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Applied,
    /// The edit produced the config already on screen; nothing was recorded.
    Unchanged,
}

#[derive(Debug, Error)]
pub enum EditorError {
    #[error("edit '{edit}' rejected")]
    Rejected {
        edit: String,
        #[source]
        source: ConfigError,
    },

    #[error("history state {index} is invalid")]
    InvalidHistory {
        index: usize,
        #[source]
        source: ConfigError,
    },

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    History(#[from] HistoryError),
}

#[derive(Debug, Clone)]
pub struct Editor {
    history: History,
    scene: SceneDescription,
}

impl Editor {
    pub fn new(config: FacadeConfig) -> Result<Self, EditorError> {
        info!("Opening editor with style {}", config.style);
        let scene = layout(&config)?;
        Ok(Self {
            history: History::new(config),
            scene,
        })
    }

    /// Resume from a saved history. Every stored state must validate.
    pub fn from_history(history: History) -> Result<Self, EditorError> {
        for (index, state) in history.states().iter().enumerate() {
            state.validate().map_err(|source| {
                warn!("History state {} is invalid: {}", index, source);
                EditorError::InvalidHistory { index, source }
            })?;
        }
        let scene = layout(history.current())?;
        debug!(
            "Resumed editor with {} states, cursor at {}",
            history.len(),
            history.cursor()
        );
        Ok(Self { history, scene })
    }

    pub fn config(&self) -> &FacadeConfig {
        self.history.current()
    }

    pub fn scene(&self) -> &SceneDescription {
        &self.scene
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn apply(&mut self, edit: &impl Edit) -> Result<EditOutcome, EditorError> {
        let next = match edit.apply(self.config()) {
            Ok(next) => next,
            Err(err) => {
                warn!("Edit {} rejected: {}", edit.name(), err);
                return Err(EditorError::Rejected {
                    edit: edit.name().to_string(),
                    source: err,
                });
            }
        };

        if &next == self.config() {
            trace!("Edit {} left the config unchanged", edit.name());
            return Ok(EditOutcome::Unchanged);
        }

        // Lay out before recording so a failing config never enters history.
        let scene = layout(&next)?;
        self.history.push(next);
        self.scene = scene;
        debug!(
            "Applied {}, {} visible nodes",
            edit.name(),
            self.scene.visible_count()
        );
        Ok(EditOutcome::Applied)
    }

    /// Apply edits in order, stopping at the first failure.
    pub fn apply_all<'a, E, I>(&mut self, edits: I) -> Result<usize, EditorError>
    where
        E: Edit + 'a,
        I: IntoIterator<Item = &'a E>,
    {
        let mut applied = 0;
        for edit in edits {
            if self.apply(edit)? == EditOutcome::Applied {
                applied += 1;
            }
        }
        info!("Applied {} edits", applied);
        Ok(applied)
    }

    /// Step back one state. The target is laid out before the cursor moves,
    /// so a failing snapshot leaves both config and scene where they were.
    pub fn undo(&mut self) -> Result<bool, EditorError> {
        let Some(target) = self.history.peek_undo() else {
            return Ok(false);
        };
        let scene = layout(target).map_err(|err| {
            warn!("Undo target failed layout: {}", err);
            err
        })?;
        self.history.undo();
        self.scene = scene;
        Ok(true)
    }

    pub fn redo(&mut self) -> Result<bool, EditorError> {
        let Some(target) = self.history.peek_redo() else {
            return Ok(false);
        };
        let scene = layout(target).map_err(|err| {
            warn!("Redo target failed layout: {}", err);
            err
        })?;
        self.history.redo();
        self.scene = scene;
        Ok(true)
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn into_config(self) -> FacadeConfig {
        self.history.current().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::EditIntent;
    use facade_config::{ElementKind, RoofStyle, SurfaceRole};

    #[test]
    fn test_rejected_edit_keeps_state() {
        let mut editor = Editor::new(FacadeConfig::default()).unwrap();
        let before = editor.config().clone();

        let result = editor.apply(&EditIntent::ApplyPreset {
            preset: "gothic".into(),
        });
        assert!(matches!(
            result,
            Err(EditorError::Rejected {
                source: ConfigError::UnknownPreset { .. },
                ..
            })
        ));
        assert_eq!(editor.config(), &before);
        assert!(!editor.can_undo());
    }

    #[test]
    fn test_unchanged_edit_is_not_recorded() {
        let mut editor = Editor::new(FacadeConfig::default()).unwrap();
        let outcome = editor
            .apply(&EditIntent::SetRoofStyle {
                style: RoofStyle::Flat,
            })
            .unwrap();
        assert_eq!(outcome, EditOutcome::Unchanged);
        assert_eq!(editor.history().len(), 1);
    }

    #[test]
    fn test_failed_undo_keeps_config_and_scene() {
        let mut broken = FacadeConfig::default();
        broken.materials.remove(SurfaceRole::Accent);
        let good = FacadeConfig::default().set_element_count(ElementKind::Windows, 9);

        let mut history = History::new(broken);
        history.push(good.clone());
        let mut editor = Editor {
            scene: layout(&good).unwrap(),
            history,
        };

        assert!(matches!(editor.undo(), Err(EditorError::Layout(_))));
        assert_eq!(editor.config(), &good);
        assert_eq!(editor.scene(), &layout(&good).unwrap());
        assert_eq!(editor.history().cursor(), 1);
        assert!(editor.can_undo());
    }

    #[test]
    fn test_scene_follows_undo() {
        let mut editor = Editor::new(FacadeConfig::default()).unwrap();
        editor
            .apply(&EditIntent::SetCount {
                kind: ElementKind::Windows,
                count: 12,
            })
            .unwrap();
        assert_eq!(editor.scene().visible_count(), 17);

        assert!(editor.undo().unwrap());
        assert_eq!(editor.scene().visible_count(), 11);
        assert!(editor.redo().unwrap());
        assert_eq!(editor.scene().visible_count(), 17);
        assert!(!editor.redo().unwrap());
    }
}
