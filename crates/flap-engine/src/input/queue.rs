/// Keys the engine knows by name. Anything else arrives as `Other` with the
/// platform key code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,
    Space,
    Enter,
    Up,
    Other(u32),
}

/// Input event types the engine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// The platform asked the application to close.
    Quit,
    /// A key was pressed.
    KeyDown { key: Key },
    /// A key was released.
    KeyUp { key: Key },
}

impl InputEvent {
    /// Whether this event should stop the main loop (window close or Escape).
    pub fn is_quit(&self) -> bool {
        matches!(
            self,
            InputEvent::Quit | InputEvent::KeyDown { key: Key::Escape }
        )
    }
}

/// A queue of input events.
/// The platform layer pushes events; the runner drains them once per frame.
#[derive(Debug)]
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    /// True if any pending event is a key press of `key`.
    pub fn key_pressed(&self, key: Key) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, InputEvent::KeyDown { key: k } if *k == key))
    }

    /// Drop all pending events.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
