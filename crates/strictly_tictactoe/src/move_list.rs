//! Presentation data for the move list.

use super::snapshot::{Location, Snapshot};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// One row of the move list: a step the player can jump to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct MoveListEntry {
    /// History index to pass to `jump_to`.
    step: usize,
    /// Button text, e.g. `Go to move #3(0, 2)`.
    label: String,
    /// Location of the move, `None` for the game start.
    location: Option<Location>,
    /// Whether this is the step currently viewed.
    is_current: bool,
}

impl MoveListEntry {
    pub(crate) fn describe(step: usize, snapshot: &Snapshot, is_current: bool) -> Self {
        let location = snapshot.location();
        let label = match location {
            Some(loc) if step > 0 => format!("Go to move #{step}{loc}"),
            _ => "Go to game start".to_string(),
        };
        Self {
            step,
            label,
            location,
            is_current,
        }
    }
}
