use crate::foundation::{
    core::Layer,
    error::{BackdropError, BackdropResult},
};

/// Exactly-two-slot registry keyed by [`Layer`].
#[derive(Debug)]
pub struct SlotRegistry<S> {
    back: Option<S>,
    front: Option<S>,
}

impl<S> Default for SlotRegistry<S> {
    fn default() -> Self {
        Self {
            back: None,
            front: None,
        }
    }
}

impl<S> SlotRegistry<S> {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a host child list, rejecting anything but one back and one front child.
    pub fn from_children(children: impl IntoIterator<Item = (Layer, S)>) -> BackdropResult<Self> {
        let children = children.into_iter().collect::<Vec<_>>();
        if children.len() != 2 {
            return Err(BackdropError::configuration(format!(
                "exactly two slots required, got {}",
                children.len()
            )));
        }
        let mut registry = Self::new();
        for (layer, surface) in children {
            if registry.get(layer).is_some() {
                return Err(BackdropError::configuration(format!(
                    "duplicate layer '{layer}'"
                )));
            }
            *registry.slot_mut(layer) = Some(surface);
        }
        Ok(registry)
    }

    fn slot_mut(&mut self, layer: Layer) -> &mut Option<S> {
        match layer {
            Layer::Back => &mut self.back,
            Layer::Front => &mut self.front,
        }
    }

    /// Fill `layer`. Fails if it is already filled.
    pub fn register(&mut self, layer: Layer, surface: S) -> BackdropResult<()> {
        let slot = self.slot_mut(layer);
        if slot.is_some() {
            return Err(BackdropError::configuration(format!(
                "duplicate layer '{layer}'"
            )));
        }
        *slot = Some(surface);
        Ok(())
    }

    /// Replace whatever surface holds `layer`, returning the previous one.
    pub fn replace(&mut self, layer: Layer, surface: S) -> Option<S> {
        self.slot_mut(layer).replace(surface)
    }

    /// Empty `layer`, returning its surface.
    pub fn remove(&mut self, layer: Layer) -> Option<S> {
        self.slot_mut(layer).take()
    }

    /// Surface for `layer`, if any.
    pub fn get(&self, layer: Layer) -> Option<&S> {
        match layer {
            Layer::Back => self.back.as_ref(),
            Layer::Front => self.front.as_ref(),
        }
    }

    /// Mutable surface for `layer`, if any.
    pub fn get_mut(&mut self, layer: Layer) -> Option<&mut S> {
        self.slot_mut(layer).as_mut()
    }

    /// Like [`get`](Self::get), but a missing surface is a configuration error.
    pub fn require(&self, layer: Layer) -> BackdropResult<&S> {
        self.get(layer).ok_or_else(|| missing(layer))
    }

    /// Like [`get_mut`](Self::get_mut), but a missing surface is a configuration error.
    pub fn require_mut(&mut self, layer: Layer) -> BackdropResult<&mut S> {
        self.get_mut(layer).ok_or_else(|| missing(layer))
    }

    /// Number of filled slots.
    pub fn len(&self) -> usize {
        usize::from(self.back.is_some()) + usize::from(self.front.is_some())
    }

    /// Whether no slot is filled.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Both slots must be filled.
    pub fn validate(&self) -> BackdropResult<()> {
        if self.len() != 2 {
            return Err(BackdropError::configuration(format!(
                "exactly two slots required, got {}",
                self.len()
            )));
        }
        Ok(())
    }
}

fn missing(layer: Layer) -> BackdropError {
    BackdropError::configuration(format!("no surface registered for layer '{layer}'"))
}

#[cfg(test)]
#[path = "../../tests/unit/backdrop/slots.rs"]
mod tests;
