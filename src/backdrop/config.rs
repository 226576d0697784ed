use crate::{
    animation::ease::Ease,
    foundation::{
        core::{Insets, Layer},
        error::{BackdropError, BackdropResult},
    },
};

/// Construction-time settings for a [`crate::BackdropController`].
///
/// Every field can also be changed later through the controller.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BackdropConfig {
    /// Back-layer strip that stays visible while the front layer is active.
    /// Zero means there is no always-visible strip.
    pub persistent_back_height: f64,
    /// Floor on the front-layer height while the back layer is active.
    pub min_front_height: f64,
    /// Layer activated by the first layout pass.
    pub initial_active_layer: Layer,
    /// Take the persistent back height from the back surface's
    /// always-visible sub-element on the first layout pass.
    pub measure_persistent_back: bool,
    /// Container padding around both layers.
    pub padding: Insets,
    /// Curve for every front-height transition.
    pub ease: Ease,
    /// Install click-to-cover on the front surface even if it handles clicks itself.
    pub override_front_click: bool,
}

impl Default for BackdropConfig {
    fn default() -> Self {
        Self {
            persistent_back_height: 0.0,
            min_front_height: 0.0,
            initial_active_layer: Layer::Front,
            measure_persistent_back: false,
            padding: Insets::ZERO,
            ease: Ease::AccelerateDecelerate,
            override_front_click: false,
        }
    }
}

impl BackdropConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json_str(s: &str) -> BackdropResult<Self> {
        let cfg: Self = serde_json::from_str(s)
            .map_err(|e| BackdropError::serde(format!("backdrop config: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Lengths must be finite and non-negative.
    pub fn validate(&self) -> BackdropResult<()> {
        check_length("persistent_back_height", self.persistent_back_height)?;
        check_length("min_front_height", self.min_front_height)?;
        for (name, v) in [
            ("padding.x0", self.padding.x0),
            ("padding.y0", self.padding.y0),
            ("padding.x1", self.padding.x1),
            ("padding.y1", self.padding.y1),
        ] {
            check_length(name, v)?;
        }
        Ok(())
    }
}

pub(crate) fn check_length(name: &str, v: f64) -> BackdropResult<()> {
    if !v.is_finite() || v < 0.0 {
        return Err(BackdropError::configuration(format!(
            "{name} must be finite and >= 0, got {v}"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/backdrop/config.rs"]
mod tests;
