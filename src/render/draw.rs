use macroquad::prelude::{
    Color, FilterMode, TextParams, Texture2D, WHITE, clear_background, draw_rectangle,
    draw_rectangle_lines, draw_text_ex, draw_texture, measure_text,
};

use crate::overlay::color::Rgba;
use crate::overlay::gradient::OverlayGradient;
use crate::render::draw_list::DrawList;

fn to_mq(c: Rgba) -> Color {
    Color::from_rgba(c.r, c.g, c.b, c.a)
}

/// Upload the gradient buffer as a GPU texture. Rebuilt only when the
/// overlay is reinitialized.
pub fn gradient_texture(gradient: &OverlayGradient) -> Texture2D {
    let texture = Texture2D::from_rgba8(
        gradient.width() as u16,
        gradient.height() as u16,
        gradient.pixels(),
    );
    texture.set_filter(FilterMode::Linear);
    texture
}

/// Paint one frame's draw list.
pub fn paint(list: &DrawList, gradient: Option<&Texture2D>) {
    clear_background(to_mq(list.background));

    for rect in &list.fills {
        draw_rectangle(rect.x, rect.y, rect.w, rect.h, to_mq(rect.color));
    }

    for outline in &list.outlines {
        let t = outline.thickness;
        draw_rectangle_lines(
            outline.x - t,
            outline.y - t,
            outline.w + t * 2.0,
            outline.h + t * 2.0,
            t,
            to_mq(outline.color),
        );
    }

    for bar in &list.bars {
        draw_rectangle(bar.x, bar.y, bar.w, bar.h, to_mq(bar.color));
    }

    for text in &list.texts {
        let dims = measure_text(&text.text, None, text.font_px, 1.0);
        draw_text_ex(
            &text.text,
            text.cx - dims.width / 2.0,
            text.cy + dims.offset_y / 2.0,
            TextParams {
                font_size: text.font_px,
                color: to_mq(text.color),
                ..Default::default()
            },
        );
    }

    if list.show_gradient {
        if let Some(texture) = gradient {
            draw_texture(texture, 0.0, 0.0, WHITE);
        }
    }
}
