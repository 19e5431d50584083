use crate::config::overlay_config::OverlayConfig;

/// Reference canvas the original overlay was designed against; the
/// ratios below rescale text and the gradient for other window sizes.
const BASE_WIDTH: f32 = 480.0;
const BASE_HEIGHT: f32 = 960.0;

/// Screen-space geometry for one key square (outline excluded).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SquareLayout {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl SquareLayout {
    /// Prune boundary for this square's bar track: the window top in
    /// square-relative coordinates.
    pub fn bar_ceiling(&self) -> f32 {
        -self.y
    }
}

/// Static window and per-square geometry, derived once per
/// (re)initialization from a validated config.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub window_width: u32,
    pub window_height: u32,
    pub ratio_x: f32,
    pub ratio_y: f32,
    pub outline: f32,
    pub squares: Vec<SquareLayout>,
    pub label_font_px: u16,
    pub counter_font_px: u16,
}

impl Layout {
    pub fn compute(config: &OverlayConfig) -> Self {
        let general = &config.general;
        let outline = general.outline_thickness;
        let key_size = general.key_size;
        let margin = general.margin;

        let mut window_width = margin;
        for key in &config.keys {
            window_width += key_size * key.size.multiplier() + outline * 2.0 + margin;
        }
        let window_width = window_width.ceil().max(1.0) as u32;
        let window_height = general.height;

        let ratio_x = window_width as f32 / BASE_WIDTH;
        let ratio_y = window_height as f32 / BASE_HEIGHT;

        // One bottom row of squares; widths vary with the size class,
        // heights stay at the base key size.
        let y = (window_height as f32 - margin - key_size).max(0.0);
        let mut squares = Vec::with_capacity(config.keys.len());
        let mut cursor = margin + outline;
        for key in &config.keys {
            let width = key_size * key.size.multiplier();
            squares.push(SquareLayout {
                x: cursor,
                y,
                width,
                height: key_size,
            });
            cursor += width + outline * 2.0 + margin;
        }

        Self {
            window_width,
            window_height,
            ratio_x,
            ratio_y,
            outline,
            squares,
            label_font_px: scaled_font(32.0, ratio_x),
            counter_font_px: scaled_font(20.0, ratio_x),
        }
    }
}

fn scaled_font(base: f32, ratio: f32) -> u16 {
    (base * ratio).round().clamp(8.0, 255.0) as u16
}
