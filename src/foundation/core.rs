pub use kurbo::{Insets, Point, Rect, Size};

/// One of the two stacked children of a backdrop.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Layer {
    /// Normally hidden; revealed when active.
    Back,
    /// Normally covering the back layer; its height is what animates.
    #[default]
    Front,
}

impl Layer {
    /// Both layers, back first.
    pub const ALL: [Layer; 2] = [Layer::Back, Layer::Front];

    /// The layer this one is stacked against.
    pub fn other(self) -> Self {
        match self {
            Self::Back => Self::Front,
            Self::Front => Self::Back,
        }
    }

    /// Lowercase name, matching the serde form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Back => "back",
            Self::Front => "front",
        }
    }
}

impl std::fmt::Display for Layer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
