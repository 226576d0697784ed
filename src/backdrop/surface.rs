use crate::{
    foundation::core::Size,
    layout::measure::MeasureSpec,
};

/// Host-side view of one backdrop child.
///
/// The controller never renders or lays out a surface itself; it asks for a
/// measurement, reads back the resulting height and pushes animated front
/// heights into it.
pub trait Surface {
    /// Measure against the given constraints and return the resulting size.
    fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> Size;

    /// Size from the most recent measurement.
    fn measured_size(&self) -> Size;

    /// Measured height; the back layer's height feeds the back target.
    fn height(&self) -> f64 {
        self.measured_size().height
    }

    /// Called with each animated front-layer height.
    fn set_height(&mut self, _height: f64) {}

    /// Whether the host already wired a click handler to this surface.
    fn has_click_handler(&self) -> bool {
        false
    }

    /// Height of an always-visible sub-element, known only once laid out.
    fn persistent_strip_height(&self) -> Option<f64> {
        None
    }
}

impl<S: Surface + ?Sized> Surface for Box<S> {
    fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> Size {
        (**self).measure(width, height)
    }

    fn measured_size(&self) -> Size {
        (**self).measured_size()
    }

    fn height(&self) -> f64 {
        (**self).height()
    }

    fn set_height(&mut self, height: f64) {
        (**self).set_height(height);
    }

    fn has_click_handler(&self) -> bool {
        (**self).has_click_handler()
    }

    fn persistent_strip_height(&self) -> Option<f64> {
        (**self).persistent_strip_height()
    }
}

/// A match-parent-width, wrap-content-height surface with a fixed preferred
/// size.
///
/// Width is measured with [`MeasureSpec::resolve`], so an exact width is
/// taken as is. Height is measured with [`MeasureSpec::wrap`]: even an
/// `Exactly` height is only an upper bound, which keeps the back layer at its
/// natural height inside an exact container. Useful for headless hosts and
/// simulations. Animated heights are recorded in
/// [`FixedSurface::applied_height`].
#[derive(Clone, Debug, PartialEq)]
pub struct FixedSurface {
    preferred: Size,
    measured: Size,
    applied_height: Option<f64>,
    strip_height: Option<f64>,
    click_handler: bool,
}

impl FixedSurface {
    /// Surface that measures to `preferred` when unconstrained.
    pub fn new(preferred: Size) -> Self {
        Self {
            preferred,
            measured: preferred,
            applied_height: None,
            strip_height: None,
            click_handler: false,
        }
    }

    /// Report a persistent strip of `height` once laid out.
    pub fn with_strip_height(mut self, height: f64) -> Self {
        self.strip_height = Some(height);
        self
    }

    /// Pretend the host already wired a click handler.
    pub fn with_click_handler(mut self) -> Self {
        self.click_handler = true;
        self
    }

    /// Last front height pushed by the controller.
    pub fn applied_height(&self) -> Option<f64> {
        self.applied_height
    }
}

impl Surface for FixedSurface {
    fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> Size {
        self.measured = Size::new(
            width.resolve(self.preferred.width),
            height.wrap(self.preferred.height),
        );
        self.measured
    }

    fn measured_size(&self) -> Size {
        self.measured
    }

    fn set_height(&mut self, height: f64) {
        self.applied_height = Some(height);
    }

    fn has_click_handler(&self) -> bool {
        self.click_handler
    }

    fn persistent_strip_height(&self) -> Option<f64> {
        self.strip_height
    }
}

#[cfg(test)]
#[path = "../../tests/unit/backdrop/surface.rs"]
mod tests;
