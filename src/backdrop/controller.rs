use std::time::Duration;

use crate::{
    animation::{
        ease::Ease,
        transition::{ACTIVATE_BACK_DURATION, ACTIVATE_FRONT_DURATION, HeightTransition},
    },
    backdrop::{
        config::{BackdropConfig, check_length},
        listeners::{Activation, ActivationListeners, ListenerId},
        slots::SlotRegistry,
        state::SavedState,
        surface::Surface,
    },
    foundation::{
        core::{Insets, Layer, Size},
        error::{BackdropError, BackdropResult},
    },
    layout::{
        measure::{MeasureSpec, child_specs, container_size},
        placement::{LayerPlacements, inner_rect, place_back, place_front},
    },
};

/// Upper bound on listener-requested follow-up activations within one call.
const MAX_FOLLOW_UPS: usize = 8;

/// Owns the two layer surfaces, the active-layer state and the front-height
/// transition.
///
/// All methods run on the host's UI thread. The host drives it with
/// [`measure`](Self::measure), [`on_layout_pass`](Self::on_layout_pass) and
/// one [`tick`](Self::tick) per frame while [`is_animating`](Self::is_animating).
#[derive(Debug)]
pub struct BackdropController<S> {
    slots: SlotRegistry<S>,
    listeners: ActivationListeners,
    config: BackdropConfig,
    active_layer: Layer,
    container_height: f64,
    current_front_height: f64,
    in_flight: Option<HeightTransition>,
    laid_out: bool,
}

impl<S: Surface> BackdropController<S> {
    /// Create a controller with no surfaces registered yet.
    pub fn new(config: BackdropConfig) -> BackdropResult<Self> {
        Self::with_slots(config, SlotRegistry::new())
    }

    /// Create a controller around an already populated slot registry.
    pub fn with_slots(config: BackdropConfig, slots: SlotRegistry<S>) -> BackdropResult<Self> {
        config.validate()?;
        Ok(Self {
            slots,
            listeners: ActivationListeners::default(),
            active_layer: config.initial_active_layer,
            config,
            container_height: 0.0,
            current_front_height: 0.0,
            in_flight: None,
            laid_out: false,
        })
    }

    /// Bind `surface` to `layer`. Fails if `layer` already has a surface.
    pub fn register_slot(&mut self, layer: Layer, surface: S) -> BackdropResult<()> {
        self.slots.register(layer, surface)
    }

    /// Swap the surface for `layer`, returning the one it replaces.
    pub fn set_slot(&mut self, layer: Layer, mut surface: S) -> Option<S> {
        if layer == Layer::Front && self.laid_out {
            surface.set_height(self.current_front_height);
        }
        self.slots.replace(layer, surface)
    }

    /// Check that both the back and the front slot are filled.
    pub fn validate_configuration(&self) -> BackdropResult<()> {
        self.slots.validate()
    }

    /// Surface registered for `layer`, if any.
    pub fn surface(&self, layer: Layer) -> Option<&S> {
        self.slots.get(layer)
    }

    /// Mutable access to the surface registered for `layer`, if any.
    pub fn surface_mut(&mut self, layer: Layer) -> Option<&mut S> {
        self.slots.get_mut(layer)
    }

    /// Current settings, including changes made through the setters.
    pub fn config(&self) -> &BackdropConfig {
        &self.config
    }

    /// Layer most recently activated (or restored).
    pub fn active_layer(&self) -> Layer {
        self.active_layer
    }

    /// Inner container height from the last layout pass.
    pub fn container_height(&self) -> f64 {
        self.container_height
    }

    /// Live front-layer height, updated on every tick.
    pub fn current_front_height(&self) -> f64 {
        self.current_front_height
    }

    /// Back strip kept visible while the front layer is active.
    pub fn persistent_back_height(&self) -> f64 {
        self.config.persistent_back_height
    }

    /// Floor on the front height while the back layer is active.
    pub fn min_front_height(&self) -> f64 {
        self.config.min_front_height
    }

    /// The in-flight transition, if one is running.
    pub fn transition(&self) -> Option<&HeightTransition> {
        self.in_flight.as_ref()
    }

    /// Whether the host should keep calling [`tick`](Self::tick).
    pub fn is_animating(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Whether the first layout pass has run.
    pub fn is_laid_out(&self) -> bool {
        self.laid_out
    }

    /// Measure both surfaces and return the container's own size.
    pub fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> BackdropResult<Size> {
        self.validate_configuration()?;
        let specs = child_specs(width, height, self.config.padding);
        self.slots
            .require_mut(Layer::Back)?
            .measure(specs.width, specs.back_height);
        self.slots
            .require_mut(Layer::Front)?
            .measure(specs.width, specs.front_height);
        Ok(container_size(width, height))
    }

    /// Record the container geometry and compute where each layer goes.
    ///
    /// The first pass also settles the persistent back height (when it is
    /// measured from the back surface) and activates the initial layer.
    #[tracing::instrument(skip(self))]
    pub fn on_layout_pass(&mut self, bounds: Size) -> BackdropResult<LayerPlacements> {
        self.validate_configuration()?;
        check_length("layout bounds width", bounds.width)?;
        check_length("layout bounds height", bounds.height)?;
        let inner = inner_rect(bounds, self.config.padding);
        self.container_height = inner.height();

        if !self.laid_out {
            self.laid_out = true;
            self.current_front_height = self.slots.require(Layer::Front)?.height();
            if self.config.measure_persistent_back {
                self.resolve_persistent_back_height()?;
            }
            self.activate_layer(self.active_layer)?;
        }

        let back = self.slots.require(Layer::Back)?.measured_size();
        Ok(LayerPlacements {
            back: place_back(inner, back),
            front: place_front(inner, self.current_front_height),
        })
    }

    fn resolve_persistent_back_height(&mut self) -> BackdropResult<()> {
        match self.slots.require(Layer::Back)?.persistent_strip_height() {
            Some(h) => {
                check_length("persistent strip height", h)?;
                tracing::debug!(height = h, "persistent back height taken from back surface");
                self.config.persistent_back_height = h;
            }
            None => {
                tracing::warn!(
                    "back surface reports no persistent strip; keeping configured height {}",
                    self.config.persistent_back_height
                );
            }
        }
        Ok(())
    }

    /// Make `layer` the active layer and start the matching front-height
    /// transition. Listeners are notified before the transition runs.
    #[tracing::instrument(skip(self))]
    pub fn activate_layer(&mut self, layer: Layer) -> BackdropResult<()> {
        self.validate_configuration()?;
        let mut next = self.activate_once(layer)?;
        let mut rounds = 0;
        while let Some(layer) = next {
            rounds += 1;
            if rounds > MAX_FOLLOW_UPS {
                return Err(BackdropError::configuration(format!(
                    "activation listeners kept redirecting after {MAX_FOLLOW_UPS} follow-ups"
                )));
            }
            next = self.activate_once(layer)?;
        }
        Ok(())
    }

    fn activate_once(&mut self, layer: Layer) -> BackdropResult<Option<Layer>> {
        self.active_layer = layer;
        let (target, duration) = match layer {
            Layer::Back => (self.back_target()?, ACTIVATE_BACK_DURATION),
            Layer::Front => (self.front_target(), ACTIVATE_FRONT_DURATION),
        };
        self.animate_front_height(target, duration)?;
        tracing::debug!(%layer, target_height = target, "layer activated");

        let follow_up = self.listeners.notify(layer)?;
        // Re-activating the layer that was just activated would only restart
        // the same transition.
        Ok(follow_up.filter(|&next| next != layer))
    }

    fn back_target(&self) -> BackdropResult<f64> {
        let back = self.slots.require(Layer::Back)?.height();
        Ok(self
            .config
            .min_front_height
            .max(self.container_height - back))
    }

    fn front_target(&self) -> f64 {
        self.container_height - self.config.persistent_back_height
    }

    fn animate_front_height(&mut self, target: f64, duration: Duration) -> BackdropResult<()> {
        self.slots.require(Layer::Front)?;
        if let Some(prev) = self.in_flight.take() {
            tracing::trace!(
                from = prev.start(),
                to = prev.target(),
                at = self.current_front_height,
                "cancelling in-flight transition"
            );
        }
        self.in_flight = Some(HeightTransition::new(
            self.current_front_height,
            target,
            duration,
            self.config.ease,
        ));
        Ok(())
    }

    /// Advance the running transition by one frame. Returns whether another
    /// frame is needed.
    pub fn tick(&mut self, dt: Duration) -> BackdropResult<bool> {
        let Some(transition) = self.in_flight.as_mut() else {
            return Ok(false);
        };
        let step = transition.advance(dt);
        self.current_front_height = step.height();
        self.slots
            .require_mut(Layer::Front)?
            .set_height(self.current_front_height);
        tracing::trace!(height = self.current_front_height, "front height frame");

        if step.is_finished() {
            self.in_flight = None;
        }
        Ok(!step.is_finished())
    }

    /// A larger strip while the front layer is active makes the current
    /// front target stale, so the front layer re-shrinks right away.
    pub fn set_persistent_back_height(&mut self, height: f64) -> BackdropResult<()> {
        check_length("persistent_back_height", height)?;
        let previous = std::mem::replace(&mut self.config.persistent_back_height, height);
        if self.laid_out && height > previous && self.active_layer == Layer::Front {
            tracing::debug!(previous, height, "persistent back height grew; retargeting");
            self.animate_front_height(self.front_target(), ACTIVATE_BACK_DURATION)?;
        }
        Ok(())
    }

    /// A larger floor while the back layer is active may leave the front
    /// layer below the minimum, so it grows right away.
    pub fn set_min_front_height(&mut self, height: f64) -> BackdropResult<()> {
        check_length("min_front_height", height)?;
        let previous = std::mem::replace(&mut self.config.min_front_height, height);
        if self.laid_out && height > previous && self.active_layer == Layer::Back {
            tracing::debug!(previous, height, "min front height grew; retargeting");
            let target = self.back_target()?;
            self.animate_front_height(target, ACTIVATE_FRONT_DURATION)?;
        }
        Ok(())
    }

    /// Applies to transitions started after the call.
    pub fn set_ease(&mut self, ease: Ease) {
        self.config.ease = ease;
    }

    /// Takes effect on the next measure and layout pass.
    pub fn set_padding(&mut self, padding: Insets) -> BackdropResult<()> {
        let candidate = BackdropConfig {
            padding,
            ..self.config.clone()
        };
        candidate.validate()?;
        self.config.padding = padding;
        Ok(())
    }

    /// Install click-to-cover even when the front surface handles clicks itself.
    pub fn set_override_front_click(&mut self, override_click: bool) {
        self.config.override_front_click = override_click;
    }

    /// Whether host glue should route front-surface taps to
    /// [`front_layer_clicked`](Self::front_layer_clicked).
    pub fn should_wire_front_click(&self) -> BackdropResult<bool> {
        self.validate_configuration()?;
        let front = self.slots.require(Layer::Front)?;
        Ok(self.config.override_front_click || !front.has_click_handler())
    }

    /// Tap on the front layer: cover the back layer again.
    pub fn front_layer_clicked(&mut self) -> BackdropResult<()> {
        self.activate_layer(Layer::Front)
    }

    /// Register a listener; listeners run in registration order.
    pub fn add_on_activate_layer_listener<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&mut Activation) -> anyhow::Result<()> + 'static,
    {
        self.listeners.add(listener)
    }

    /// Unregister a listener. Returns `false` if `id` was not registered.
    pub fn remove_on_activate_layer_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    /// Snapshot for the host's save/restore mechanism.
    pub fn serialize_state(&self) -> SavedState {
        SavedState {
            active_layer: self.active_layer,
        }
    }

    /// Restores the active layer only; geometry follows on the next
    /// activation or first layout pass.
    pub fn restore_state(&mut self, state: SavedState) {
        self.active_layer = state.active_layer;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/backdrop/controller.rs"]
mod tests;
