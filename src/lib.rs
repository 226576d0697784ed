//! Backdrop is a two-layer sliding container.
//!
//! A backdrop holds exactly two surfaces: a **back** layer and a **front**
//! layer stacked on top of it. Activating the back layer shrinks the front
//! layer to reveal what is behind it; activating the front layer grows it
//! again to cover everything except an optional always-visible strip.
//!
//! # Driving a backdrop
//!
//! 1. **Assemble**: register one [`Surface`] per [`Layer`] on a [`BackdropController`].
//! 2. **Measure**: `measure(width, height)` hands each surface its [`MeasureSpec`]s.
//! 3. **Lay out**: `on_layout_pass(bounds)` returns [`LayerPlacements`]; the first
//!    pass activates the initial layer.
//! 4. **Animate**: call `tick(dt)` once per frame while a transition is running.
//!
//! `activate_layer` notifies listeners synchronously, when the decision is
//! made rather than when the front layer stops moving.
//!
//! Everything runs on one thread; nothing here blocks or performs IO.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod backdrop;
mod foundation;
mod layout;

pub use animation::ease::Ease;
pub use animation::transition::{
    ACTIVATE_BACK_DURATION, ACTIVATE_FRONT_DURATION, HeightTransition, TransitionStep,
};
pub use backdrop::config::BackdropConfig;
pub use backdrop::controller::BackdropController;
pub use backdrop::listeners::{Activation, ActivationListeners, ListenerId};
pub use backdrop::slots::SlotRegistry;
pub use backdrop::state::SavedState;
pub use backdrop::surface::{FixedSurface, Surface};
pub use foundation::core::{Insets, Layer, Point, Rect, Size};
pub use foundation::error::{BackdropError, BackdropResult};
pub use layout::measure::{ChildSpecs, MeasureSpec, child_specs, container_size};
pub use layout::placement::{LayerPlacements, inner_rect, place_back, place_front};
