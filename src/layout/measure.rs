use crate::foundation::core::{Insets, Size};

/// Constraint handed to a surface along one axis.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasureSpec {
    /// The parent offers exactly this size. Match-parent surfaces take it;
    /// wrap-content surfaces treat it as an upper bound (see [`MeasureSpec::wrap`]).
    Exactly(f64),
    /// The surface may be any size up to this value.
    AtMost(f64),
    /// No constraint; the surface picks its natural size.
    Unspecified,
}

impl MeasureSpec {
    /// Size carried by the spec; zero when unconstrained.
    pub fn size(self) -> f64 {
        match self {
            Self::Exactly(v) | Self::AtMost(v) => v,
            Self::Unspecified => 0.0,
        }
    }

    /// Resolve a match-parent extent: `Exactly` wins over `preferred`.
    pub fn resolve(self, preferred: f64) -> f64 {
        match self {
            Self::Exactly(v) => v,
            Self::AtMost(v) => preferred.min(v),
            Self::Unspecified => preferred,
        }
    }

    /// Resolve a wrap-content extent: `preferred`, clipped to any size the
    /// parent offers, exact or not.
    pub fn wrap(self, preferred: f64) -> f64 {
        match self {
            Self::Exactly(v) | Self::AtMost(v) => preferred.min(v),
            Self::Unspecified => preferred,
        }
    }
}

/// Per-layer constraints produced by one measure pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChildSpecs {
    /// Shared by both layers.
    pub width: MeasureSpec,
    /// Back-layer height constraint.
    pub back_height: MeasureSpec,
    /// Front-layer height constraint.
    pub front_height: MeasureSpec,
}

/// The back layer gets the exact inner box; the front layer gets the exact
/// inner width but may never be taller than the inner height.
pub fn child_specs(width: MeasureSpec, height: MeasureSpec, padding: Insets) -> ChildSpecs {
    let inner_w = (width.size() - padding.x_value()).max(0.0);
    let inner_h = (height.size() - padding.y_value()).max(0.0);
    ChildSpecs {
        width: MeasureSpec::Exactly(inner_w),
        back_height: MeasureSpec::Exactly(inner_h),
        front_height: MeasureSpec::AtMost(inner_h),
    }
}

/// The container always reports the sizes it was offered.
pub fn container_size(width: MeasureSpec, height: MeasureSpec) -> Size {
    Size::new(width.size(), height.size())
}

#[cfg(test)]
#[path = "../../tests/unit/layout/measure.rs"]
mod tests;
