use crate::overlay::color::Rgba;
use crate::overlay::fade::{FadeParams, faded_color};
use crate::overlay::key_entry::KeyEntry;

/// Engine-wide animation parameters, rebuilt from config on reload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineParams {
    pub fade: FadeParams,
    /// Bar scroll/growth speed in pixels per second. Always > 0.
    pub bar_speed: f32,
    pub background: Rgba,
}

/// Per-input result of one animation tick.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyFrame {
    /// Fill color for the input's square this frame.
    pub fill: Rgba,
    /// Total presses since startup.
    pub press_count: u64,
    /// Bar rectangles as `(top_offset, length)` relative to the
    /// square's top edge, oldest first.
    pub bars: Vec<(f32, f32)>,
}

/// Drives one animation tick for every tracked input.
///
/// Time is injected as elapsed seconds rather than read from a clock so
/// the animation is steppable with synthetic time in tests.
#[derive(Debug, Clone)]
pub struct OverlayEngine {
    entries: Vec<KeyEntry>,
    params: EngineParams,
}

impl OverlayEngine {
    pub fn new(entries: Vec<KeyEntry>, params: EngineParams) -> Self {
        Self { entries, params }
    }

    pub fn entries(&self) -> &[KeyEntry] {
        &self.entries
    }

    pub fn params(&self) -> &EngineParams {
        &self.params
    }

    /// Advance every entry by one frame.
    ///
    /// `active` carries the current raw press state per entry, in entry
    /// order; missing trailing entries are treated as released.
    pub fn step(&mut self, active: &[bool], elapsed_seconds: f32) -> Vec<KeyFrame> {
        let distance = elapsed_seconds * self.params.bar_speed;
        let mut frames = Vec::with_capacity(self.entries.len());

        for (i, entry) in self.entries.iter_mut().enumerate() {
            let is_down = active.get(i).copied().unwrap_or(false);
            entry.apply_input(is_down, self.params.fade.duration);

            let fill = if is_down {
                entry.input.pressed_color
            } else {
                let fill = faded_color(
                    self.params.background,
                    entry.input.pressed_color,
                    entry.fade_ticks,
                    self.params.fade,
                );
                entry.decay_fade();
                fill
            };

            entry.bars.advance(distance, is_down);

            frames.push(KeyFrame {
                fill,
                press_count: entry.press_count,
                bars: entry.bars.segments().map(|s| (s.top_offset, s.length)).collect(),
            });
        }

        frames
    }
}
