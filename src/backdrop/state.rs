use crate::foundation::{
    core::Layer,
    error::{BackdropError, BackdropResult},
};

/// Minimal snapshot handed to the host's save/restore mechanism.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SavedState {
    /// Layer active when the state was saved.
    pub active_layer: Layer,
}

impl SavedState {
    /// Encode as JSON.
    pub fn to_json(&self) -> BackdropResult<String> {
        serde_json::to_string(self).map_err(|e| BackdropError::serde(format!("saved state: {e}")))
    }

    /// Decode from JSON.
    pub fn from_json_str(s: &str) -> BackdropResult<Self> {
        serde_json::from_str(s).map_err(|e| BackdropError::serde(format!("saved state: {e}")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/backdrop/state.rs"]
mod tests;
