use crate::constants::HELP_FONT_FAMILY;
use scream_core::HelpPanel;
use web_sys as web;

/// Trace a rounded rectangle as the current path.
pub fn rounded_rect_path(
    ctx: &web::CanvasRenderingContext2d,
    x: f64,
    y: f64,
    w: f64,
    h: f64,
    r: f64,
) {
    let r = r.min(w * 0.5).min(h * 0.5).max(0.0);
    ctx.begin_path();
    ctx.move_to(x + r, y);
    _ = ctx.arc_to(x + w, y, x + w, y + h, r);
    _ = ctx.arc_to(x + w, y + h, x, y + h, r);
    _ = ctx.arc_to(x, y + h, x, y, r);
    _ = ctx.arc_to(x, y, x + w, y, r);
    ctx.close_path();
}

/// Draw the help panel: translucent box, bold title, instruction lines.
pub fn draw_help(ctx: &web::CanvasRenderingContext2d, panel: &HelpPanel) {
    rounded_rect_path(
        ctx,
        panel.origin.x as f64,
        panel.origin.y as f64,
        panel.size.x as f64,
        panel.size.y as f64,
        panel.corner_radius as f64,
    );
    ctx.set_fill_style_str(&panel.fill.to_css());
    ctx.fill();

    ctx.set_fill_style_str(&panel.text_fill.to_css());
    ctx.set_text_align("left");
    ctx.set_text_baseline("top");

    ctx.set_font(&format!("bold {}px {}", panel.text_size, HELP_FONT_FAMILY));
    _ = ctx.fill_text(panel.title, panel.title_pos.x as f64, panel.title_pos.y as f64);

    ctx.set_font(&format!("{}px {}", panel.text_size, HELP_FONT_FAMILY));
    for (i, line) in panel.lines.iter().enumerate() {
        let y = panel.lines_pos.y + i as f32 * panel.line_height;
        _ = ctx.fill_text(line, panel.lines_pos.x as f64, y as f64);
    }
}
