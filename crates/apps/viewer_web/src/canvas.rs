//! Replays a display list onto a 2d canvas context. Kept free of app state
//! so a redraw is a pure function of the list it is handed.

use std::f64::consts::TAU;

use render::display::{DisplayList, DrawCmd, Stroke};
use render::style;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

pub fn replay(ctx: &CanvasRenderingContext2d, list: &DisplayList) -> Result<(), JsValue> {
    for cmd in list.iter() {
        match cmd {
            DrawCmd::Clear { width, height } => {
                ctx.clear_rect(0.0, 0.0, *width, *height);
            }
            DrawCmd::Circle {
                center,
                radius,
                fill,
                stroke,
            } => {
                ctx.begin_path();
                ctx.arc(center.x, center.y, *radius, 0.0, TAU)?;
                if let Some(fill) = fill {
                    ctx.set_fill_style_str(&fill.to_css());
                    ctx.fill();
                }
                apply_stroke(ctx, *stroke);
            }
            DrawCmd::Shape {
                subpaths,
                closed,
                fill,
                stroke,
                shadow,
            } => {
                if subpaths.is_empty() {
                    continue;
                }
                ctx.save();
                if let Some(shadow) = shadow {
                    ctx.set_shadow_color(&shadow.color.to_css());
                    ctx.set_shadow_blur(shadow.blur);
                }
                ctx.begin_path();
                for subpath in subpaths {
                    for (i, point) in subpath.iter().enumerate() {
                        if i == 0 {
                            ctx.move_to(point.x, point.y);
                        } else {
                            ctx.line_to(point.x, point.y);
                        }
                    }
                    if *closed {
                        ctx.close_path();
                    }
                }
                if let Some(fill) = fill {
                    ctx.set_fill_style_str(&fill.to_css());
                    ctx.fill();
                }
                apply_stroke(ctx, *stroke);
                ctx.restore();
            }
            DrawCmd::Glow {
                center,
                inner,
                outer,
                color,
                width,
                height,
            } => {
                let gradient = ctx.create_radial_gradient(
                    center.x, center.y, *inner, center.x, center.y, *outer,
                )?;
                gradient.add_color_stop(0.0, &color.to_css())?;
                gradient.add_color_stop(
                    1.0,
                    &format!("rgba({}, {}, {}, 0)", color.r, color.g, color.b),
                )?;
                ctx.set_fill_style_canvas_gradient(&gradient);
                ctx.fill_rect(0.0, 0.0, *width, *height);
            }
            DrawCmd::Tooltip { anchor, text } => {
                draw_tooltip(ctx, anchor.x, anchor.y, text)?;
            }
        }
    }
    Ok(())
}

fn apply_stroke(ctx: &CanvasRenderingContext2d, stroke: Option<Stroke>) {
    if let Some(stroke) = stroke {
        ctx.set_stroke_style_str(&stroke.color.to_css());
        ctx.set_line_width(stroke.width);
        ctx.stroke();
    }
}

fn draw_tooltip(
    ctx: &CanvasRenderingContext2d,
    x: f64,
    y: f64,
    text: &str,
) -> Result<(), JsValue> {
    ctx.set_font(style::TOOLTIP_FONT);
    let text_width = ctx.measure_text(text)?.width();

    let box_x = x + style::TOOLTIP_OFFSET;
    let box_y = y + style::TOOLTIP_OFFSET;
    let box_w = text_width + style::TOOLTIP_PADDING * 2.0;
    let box_h = style::TOOLTIP_HEIGHT;

    rounded_rect(ctx, box_x, box_y, box_w, box_h, style::TOOLTIP_RADIUS)?;
    ctx.set_fill_style_str(&style::TOOLTIP_BG.to_css());
    ctx.fill();
    ctx.set_stroke_style_str(&style::TOOLTIP_BORDER.to_css());
    ctx.set_line_width(1.0);
    ctx.stroke();

    ctx.set_fill_style_str(&style::TOOLTIP_TEXT.to_css());
    ctx.set_text_baseline("middle");
    ctx.fill_text(text, box_x + style::TOOLTIP_PADDING, box_y + box_h / 2.0)?;
    Ok(())
}

fn rounded_rect(
    ctx: &CanvasRenderingContext2d,
    x: f64,
    y: f64,
    w: f64,
    h: f64,
    r: f64,
) -> Result<(), JsValue> {
    ctx.begin_path();
    ctx.move_to(x + r, y);
    ctx.arc_to(x + w, y, x + w, y + h, r)?;
    ctx.arc_to(x + w, y + h, x, y + h, r)?;
    ctx.arc_to(x, y + h, x, y, r)?;
    ctx.arc_to(x, y, x + w, y, r)?;
    ctx.close_path();
    Ok(())
}
