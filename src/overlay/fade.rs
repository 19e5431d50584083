use crate::overlay::color::Rgba;

/// Fade timing parameters shared by every tracked input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeParams {
    /// Number of frames a released key takes to fade back to the
    /// background color. Always >= 1 (enforced at config load).
    pub duration: u32,
    /// Exponent applied to the normalized fade factor. Retained
    /// configuration hook; current behavior is linear (1.0).
    pub exponent: f32,
}

impl Default for FadeParams {
    fn default() -> Self {
        Self {
            duration: 7,
            exponent: 1.0,
        }
    }
}

/// Interpolate between the background and pressed color for a key that
/// has `ticks` fade frames remaining.
///
/// `ticks == duration` yields the pressed color, `ticks == 0` the
/// background color. Channels are truncated to 8 bits.
pub fn faded_color(background: Rgba, pressed: Rgba, ticks: u32, params: FadeParams) -> Rgba {
    let duration = params.duration.max(1);
    let factor = (ticks as f32 / duration as f32).clamp(0.0, 1.0).powf(params.exponent);

    let channel = |bg: u8, fg: u8| (bg as f32 + (fg as f32 - bg as f32) * factor) as u8;

    Rgba::new(
        channel(background.r, pressed.r),
        channel(background.g, pressed.g),
        channel(background.b, pressed.b),
        channel(background.a, pressed.a),
    )
}
