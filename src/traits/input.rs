use std::collections::HashSet;

use crate::config::binding::InputId;

/// Abstraction over raw press-state polling.
/// Implementations: LiveInput (macroquad), ScriptedInput (testing).
pub trait InputSource {
    /// Whether the given key or mouse button is currently held down.
    fn is_active(&self, id: InputId) -> bool;
}

/// Scripted input for deterministic testing: explicitly pressed ids
/// are active, everything else is released.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    down: HashSet<InputId>,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, id: InputId) {
        self.down.insert(id);
    }

    pub fn release(&mut self, id: InputId) {
        self.down.remove(&id);
    }

    pub fn release_all(&mut self) {
        self.down.clear();
    }
}

impl InputSource for ScriptedInput {
    fn is_active(&self, id: InputId) -> bool {
        self.down.contains(&id)
    }
}
