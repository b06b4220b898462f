// Undo/redo history of config snapshots.

use facade_config::FacadeConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, trace};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(try_from = "HistoryRecord")]
pub struct History {
    states: Vec<FacadeConfig>,
    current_index: usize,
    max_states: usize,
}

fn default_max_states() -> usize {
    50
}

// Unchecked shape used while deserializing.
#[derive(Deserialize)]
struct HistoryRecord {
    states: Vec<FacadeConfig>,
    current_index: usize,
    #[serde(default = "default_max_states")]
    max_states: usize,
}

impl TryFrom<HistoryRecord> for History {
    type Error = HistoryError;

    fn try_from(record: HistoryRecord) -> Result<Self, Self::Error> {
        if record.states.is_empty() {
            return Err(HistoryError::Empty);
        }
        if record.current_index >= record.states.len() {
            return Err(HistoryError::CursorOutOfRange {
                index: record.current_index,
                len: record.states.len(),
            });
        }
        Ok(Self {
            states: record.states,
            current_index: record.current_index,
            max_states: record.max_states.max(1),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HistoryError {
    #[error("history has no states")]
    Empty,

    #[error("history cursor {index} out of range ({len} states)")]
    CursorOutOfRange { index: usize, len: usize },
}

impl History {
    pub fn new(initial_state: FacadeConfig) -> Self {
        Self::with_limit(initial_state, default_max_states())
    }

    pub fn with_limit(initial_state: FacadeConfig, max_states: usize) -> Self {
        debug!("Creating history with limit {}", max_states);
        Self {
            states: vec![initial_state],
            current_index: 0,
            max_states: max_states.max(1),
        }
    }

    pub fn current(&self) -> &FacadeConfig {
        // Non-empty and in range by construction.
        &self.states[self.current_index]
    }

    // Record a new state. Anything that could have been redone is dropped.
    pub fn push(&mut self, state: FacadeConfig) {
        self.states.truncate(self.current_index + 1);
        self.states.push(state);

        if self.states.len() > self.max_states {
            let overflow = self.states.len() - self.max_states;
            self.states.drain(..overflow);
            trace!("Evicted {} oldest states", overflow);
        }
        self.current_index = self.states.len() - 1;
        debug!(
            "History now holds {} states, cursor at {}",
            self.states.len(),
            self.current_index
        );
    }

    pub fn undo(&mut self) -> Option<&FacadeConfig> {
        if !self.can_undo() {
            debug!("Nothing to undo");
            return None;
        }
        self.current_index -= 1;
        trace!("Undo to state {}", self.current_index);
        Some(self.current())
    }

    pub fn redo(&mut self) -> Option<&FacadeConfig> {
        if !self.can_redo() {
            debug!("Nothing to redo");
            return None;
        }
        self.current_index += 1;
        trace!("Redo to state {}", self.current_index);
        Some(self.current())
    }

    /// State `undo` would move to, without moving.
    pub fn peek_undo(&self) -> Option<&FacadeConfig> {
        self.can_undo().then(|| &self.states[self.current_index - 1])
    }

    /// State `redo` would move to, without moving.
    pub fn peek_redo(&self) -> Option<&FacadeConfig> {
        self.can_redo().then(|| &self.states[self.current_index + 1])
    }

    pub fn states(&self) -> &[FacadeConfig] {
        &self.states
    }

    pub fn can_undo(&self) -> bool {
        self.current_index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.current_index + 1 < self.states.len()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.current_index
    }

    pub fn max_states(&self) -> usize {
        self.max_states
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use facade_config::ElementKind;

    fn config_with_windows(n: u32) -> FacadeConfig {
        FacadeConfig::default().set_element_count(ElementKind::Windows, n)
    }

    #[test]
    fn test_undo_redo_walks_snapshots() {
        let mut history = History::new(config_with_windows(1));
        history.push(config_with_windows(2));
        history.push(config_with_windows(3));

        assert_eq!(history.undo().map(|c| c.elements.windows.count), Some(2));
        assert_eq!(history.undo().map(|c| c.elements.windows.count), Some(1));
        assert!(history.undo().is_none());
        assert_eq!(history.redo().map(|c| c.elements.windows.count), Some(2));
    }

    #[test]
    fn test_peek_does_not_move_cursor() {
        let mut history = History::new(config_with_windows(1));
        history.push(config_with_windows(2));
        assert!(history.peek_redo().is_none());
        assert_eq!(history.peek_undo().map(|c| c.elements.windows.count), Some(1));
        assert_eq!(history.cursor(), 1);

        history.undo();
        assert!(history.peek_undo().is_none());
        assert_eq!(history.peek_redo().map(|c| c.elements.windows.count), Some(2));
        assert_eq!(history.cursor(), 0);
    }

    #[test]
    fn test_push_drops_redo_tail() {
        let mut history = History::new(config_with_windows(1));
        history.push(config_with_windows(2));
        history.push(config_with_windows(3));
        history.undo();
        history.undo();

        history.push(config_with_windows(7));
        assert!(!history.can_redo());
        assert_eq!(history.len(), 2);
        assert_eq!(history.current().elements.windows.count, 7);
    }

    #[test]
    fn test_limit_evicts_oldest() {
        let mut history = History::with_limit(config_with_windows(1), 3);
        for n in 2..=6 {
            history.push(config_with_windows(n));
        }
        assert_eq!(history.len(), 3);
        assert_eq!(history.current().elements.windows.count, 6);

        history.undo();
        history.undo();
        assert_eq!(history.current().elements.windows.count, 4);
        assert!(!history.can_undo());
    }

    #[test]
    fn test_deserialize_checks_cursor() {
        let json = serde_json::json!({
            "states": [FacadeConfig::default()],
            "current_index": 3,
        });
        assert!(serde_json::from_value::<History>(json).is_err());

        let empty = serde_json::json!({ "states": [], "current_index": 0 });
        assert!(serde_json::from_value::<History>(empty).is_err());
    }

    #[test]
    fn test_serde_round_trip_defaults_limit() {
        let history = History::new(FacadeConfig::default());
        let mut json = serde_json::to_value(&history).unwrap();
        json.as_object_mut().unwrap().remove("max_states");

        let back: History = serde_json::from_value(json).unwrap();
        assert_eq!(back.max_states(), 50);
        assert_eq!(back.current(), history.current());
    }
}
