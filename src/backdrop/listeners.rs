use crate::foundation::{core::Layer, error::BackdropResult};

/// Handle returned by listener registration; pass it back to unregister.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Event handed to activation listeners.
#[derive(Debug)]
pub struct Activation {
    layer: Layer,
    follow_up: Option<Layer>,
}

impl Activation {
    pub(crate) fn new(layer: Layer) -> Self {
        Self {
            layer,
            follow_up: None,
        }
    }

    /// The layer that was just activated.
    pub fn layer(&self) -> Layer {
        self.layer
    }

    /// Request another activation once the current notification round ends.
    ///
    /// When several listeners ask, the last request wins.
    pub fn activate(&mut self, layer: Layer) {
        self.follow_up = Some(layer);
    }

    /// Follow-up requested so far.
    pub fn follow_up(&self) -> Option<Layer> {
        self.follow_up
    }
}

type Callback = Box<dyn FnMut(&mut Activation) -> anyhow::Result<()>>;

/// Ordered listener list. No error isolation: the first failing listener
/// stops the round and its error reaches the caller.
#[derive(Default)]
pub struct ActivationListeners {
    next_id: u64,
    entries: Vec<(ListenerId, Callback)>,
}

impl std::fmt::Debug for ActivationListeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActivationListeners")
            .field("len", &self.entries.len())
            .finish()
    }
}

impl ActivationListeners {
    /// Append a listener.
    pub fn add<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&mut Activation) -> anyhow::Result<()> + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(listener)));
        id
    }

    /// Drop the listener registered under `id`. Returns whether it existed.
    pub fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    /// Number of registered listeners.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no listener is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Invoke every listener in registration order. Returns the follow-up
    /// activation requested during the round, if any.
    pub fn notify(&mut self, layer: Layer) -> BackdropResult<Option<Layer>> {
        let mut event = Activation::new(layer);
        for (_, listener) in &mut self.entries {
            listener(&mut event)?;
        }
        Ok(event.follow_up())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/backdrop/listeners.rs"]
mod tests;
