use crate::config::overlay_config::OverlayConfig;
use crate::overlay::color::Rgba;
use crate::overlay::stepper::KeyFrame;
use crate::render::layout::Layout;

/// Filled rectangle in window coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct RectCmd {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub color: Rgba,
}

/// Rectangle border in window coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct OutlineCmd {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub thickness: f32,
    pub color: Rgba,
}

/// Text centered on `(cx, cy)`.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub text: String,
    pub cx: f32,
    pub cy: f32,
    pub font_px: u16,
    pub color: Rgba,
}

/// Everything the host draws for one frame, in paint order: square
/// fills, outlines, bar rectangles, text, then the gradient sprite.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawList {
    pub background: Rgba,
    pub fills: Vec<RectCmd>,
    pub outlines: Vec<OutlineCmd>,
    pub bars: Vec<RectCmd>,
    pub texts: Vec<TextCmd>,
    pub show_gradient: bool,
}

const OUTLINE_COLOR: Rgba = Rgba::WHITE;
const TEXT_COLOR: Rgba = Rgba::WHITE;

/// Compose the frame's draw list from the engine output and the static
/// layout. `frames` is in key order, matching `config.keys` and
/// `layout.squares`.
pub fn compose(config: &OverlayConfig, layout: &Layout, frames: &[KeyFrame]) -> DrawList {
    let mut list = DrawList {
        background: config.general.background_color,
        fills: Vec::with_capacity(frames.len()),
        outlines: Vec::with_capacity(frames.len()),
        bars: Vec::new(),
        texts: Vec::new(),
        show_gradient: config.general.fading,
    };

    for ((key, square), frame) in config.keys.iter().zip(&layout.squares).zip(frames) {
        list.fills.push(RectCmd {
            x: square.x,
            y: square.y,
            w: square.width,
            h: square.height,
            color: frame.fill,
        });
        if layout.outline > 0.0 {
            list.outlines.push(OutlineCmd {
                x: square.x,
                y: square.y,
                w: square.width,
                h: square.height,
                thickness: layout.outline,
                color: OUTLINE_COLOR,
            });
        }

        for &(top_offset, length) in &frame.bars {
            list.bars.push(RectCmd {
                x: square.x,
                y: square.y + top_offset,
                w: square.width,
                h: length,
                color: key.pressed_color,
            });
        }

        list.texts.push(TextCmd {
            text: key.display_label().to_string(),
            cx: square.x + square.width / 2.0,
            cy: square.y + square.height / 2.0,
            font_px: layout.label_font_px,
            color: TEXT_COLOR,
        });
        if config.general.counter {
            list.texts.push(TextCmd {
                text: frame.press_count.to_string(),
                cx: square.x + square.width / 2.0,
                cy: square.y + square.height + layout.outline + 14.0,
                font_px: layout.counter_font_px,
                color: TEXT_COLOR,
            });
        }
    }

    list
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::layout::Layout;

    fn frame(fill: Rgba, count: u64, bars: Vec<(f32, f32)>) -> KeyFrame {
        KeyFrame {
            fill,
            press_count: count,
            bars,
        }
    }

    #[test]
    fn one_fill_and_label_per_key() {
        let config = OverlayConfig::default();
        let layout = Layout::compute(&config);
        let frames = vec![
            frame(Rgba::BLACK, 0, vec![]),
            frame(Rgba::WHITE, 2, vec![]),
        ];

        let list = compose(&config, &layout, &frames);
        assert_eq!(list.fills.len(), 2);
        assert_eq!(list.outlines.len(), 2);
        assert_eq!(list.texts.len(), 2);
        assert_eq!(list.fills[1].color, Rgba::WHITE);
        assert_eq!(list.texts[0].text, "Z");
        assert!(list.show_gradient);
    }

    #[test]
    fn bars_map_to_window_coordinates() {
        let config = OverlayConfig::default();
        let layout = Layout::compute(&config);
        let frames = vec![
            frame(Rgba::BLACK, 1, vec![(-100.0, 40.0)]),
            frame(Rgba::BLACK, 0, vec![]),
        ];

        let list = compose(&config, &layout, &frames);
        assert_eq!(list.bars.len(), 1);
        let bar = &list.bars[0];
        let square = &layout.squares[0];
        assert_eq!(bar.x, square.x);
        assert_eq!(bar.y, square.y - 100.0);
        assert_eq!(bar.w, square.width);
        assert_eq!(bar.h, 40.0);
        assert_eq!(bar.color, config.keys[0].pressed_color);
    }

    #[test]
    fn counters_add_one_text_per_key() {
        let mut config = OverlayConfig::default();
        config.general.counter = true;
        let layout = Layout::compute(&config);
        let frames = vec![
            frame(Rgba::BLACK, 7, vec![]),
            frame(Rgba::BLACK, 0, vec![]),
        ];

        let list = compose(&config, &layout, &frames);
        assert_eq!(list.texts.len(), 4);
        assert_eq!(list.texts[1].text, "7");
    }

    #[test]
    fn fading_flag_gates_gradient() {
        let mut config = OverlayConfig::default();
        config.general.fading = false;
        let layout = Layout::compute(&config);
        let list = compose(&config, &layout, &[]);
        assert!(!list.show_gradient);
    }

    #[test]
    fn zero_outline_emits_no_outline_cmds() {
        let mut config = OverlayConfig::default();
        config.general.outline_thickness = 0.0;
        let layout = Layout::compute(&config);
        let frames = vec![
            frame(Rgba::BLACK, 0, vec![]),
            frame(Rgba::BLACK, 0, vec![]),
        ];
        let list = compose(&config, &layout, &frames);
        assert!(list.outlines.is_empty());
    }
}
