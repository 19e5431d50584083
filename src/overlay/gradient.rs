use crate::overlay::color::Rgba;

/// Reference height the gradient is scaled from, matching the layout's
/// 960 px reference window height.
const BASE_HEIGHT: f32 = 512.0;

/// Precomputed vertical alpha gradient drawn as a fixed translucent
/// sprite over the bar field: the background color, opaque at the top
/// row and fading to transparent at the bottom.
///
/// Built once per (re)initialization from validated dimensions; the
/// pixel buffer is immutable afterwards and owned exclusively here.
/// The GPU texture derived from it lives in the render layer.
#[derive(Debug, Clone)]
pub struct OverlayGradient {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl OverlayGradient {
    pub fn build(background: Rgba, window_width: u32, ratio_y: f32) -> Self {
        let width = window_width.max(1);
        let height = ((BASE_HEIGHT * ratio_y) as u32).max(1);

        let mut pixels = Vec::with_capacity((width * height * 4) as usize);
        for y in 0..height {
            let alpha = ((1.0 - y as f32 / height as f32) * 255.0) as u8;
            for _ in 0..width {
                pixels.extend_from_slice(&[background.r, background.g, background.b, alpha]);
            }
        }

        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA8 rows, top to bottom.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}
