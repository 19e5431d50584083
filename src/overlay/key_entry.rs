use crate::config::binding::InputId;
use crate::config::overlay_config::SizeClass;
use crate::overlay::bars::BarTrack;
use crate::overlay::color::Rgba;

/// Immutable per-input display properties, fixed at (re)initialization.
#[derive(Debug, Clone)]
pub struct TrackedInput {
    pub id: InputId,
    pub label: String,
    pub pressed_color: Rgba,
    pub size: SizeClass,
}

/// Mutable per-frame state for one tracked input, kept together with
/// its identity and bar list so reinitialization can never desync
/// parallel lists.
#[derive(Debug, Clone)]
pub struct KeyEntry {
    pub input: TrackedInput,
    /// Consecutive frames held; 0 = up, 1 = rising edge, >1 = held.
    pub hold_run: u32,
    /// Fade frames remaining, in `[0, fade_duration]`.
    pub fade_ticks: u32,
    /// Total presses since startup.
    pub press_count: u64,
    pub bars: BarTrack,
}

impl KeyEntry {
    pub fn new(input: TrackedInput, ceiling: f32) -> Self {
        Self {
            input,
            hold_run: 0,
            fade_ticks: 0,
            press_count: 0,
            bars: BarTrack::new(ceiling),
        }
    }

    /// Whether the input is held this frame (set by `apply_input`).
    pub fn is_active(&self) -> bool {
        self.hold_run > 0
    }

    /// Apply this frame's raw active signal: advance the hold run,
    /// count rising edges, start/stop bar growth, and re-arm the fade
    /// counter while held.
    pub fn apply_input(&mut self, active: bool, fade_duration: u32) {
        if active {
            self.hold_run = self.hold_run.saturating_add(1);
            self.fade_ticks = fade_duration;
            if self.hold_run == 1 {
                self.press_count += 1;
                self.bars.start();
            }
        } else if self.hold_run > 0 {
            self.hold_run = 0;
            self.bars.finish();
        }
    }

    /// Count down one fade frame after the fill color for this frame
    /// has been composited. Saturates at zero.
    pub fn decay_fade(&mut self) {
        self.fade_ticks = self.fade_ticks.saturating_sub(1);
    }
}
