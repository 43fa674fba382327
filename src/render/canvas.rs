use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::sprite::{
    actor_sprite, overlay_center_x, overlay_lines, team_color, Fill, BACKGROUND, GRID_LINE,
    OVERLAY_FONT, OVERLAY_TEXT, OVERLAY_VEIL,
};
use crate::constants::{CANVAS_HEIGHT, CANVAS_WIDTH, TILE_SIZE};
use crate::error::HostError;
use crate::types::{MatchSnapshot, Team};

/// Looks up the canvas by id, sizes it to the playfield and returns a
/// pixelated 2d context.
pub fn context_for(canvas_id: &str) -> Result<CanvasRenderingContext2d, HostError> {
    let window = web_sys::window().ok_or(HostError::NoWindow)?;
    let document = window.document().ok_or(HostError::NoDocument)?;
    let canvas = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| HostError::CanvasNotFound(canvas_id.to_string()))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| HostError::NotACanvas(canvas_id.to_string()))?;

    canvas.set_width(CANVAS_WIDTH as u32);
    canvas.set_height(CANVAS_HEIGHT as u32);

    let ctx = canvas
        .get_context("2d")
        .ok()
        .flatten()
        .ok_or(HostError::ContextUnavailable)?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| HostError::ContextUnavailable)?;
    ctx.set_image_smoothing_enabled(false);
    Ok(ctx)
}

pub fn draw_frame(ctx: &CanvasRenderingContext2d, snapshot: &MatchSnapshot) -> Result<(), JsValue> {
    let width = CANVAS_WIDTH as f64;
    let height = CANVAS_HEIGHT as f64;
    let tile = TILE_SIZE as f64;

    ctx.set_fill_style_str(BACKGROUND);
    ctx.fill_rect(0.0, 0.0, width, height);

    let grid = &snapshot.grid;
    for (i, &tag) in grid.tags.iter().enumerate() {
        if let Some(color) = team_color(Team::from(tag)) {
            let x = (i % grid.width) as f64 * tile;
            let y = (i / grid.width) as f64 * tile;
            ctx.set_fill_style_str(color);
            ctx.fill_rect(x, y, tile, tile);
        }
    }

    ctx.set_stroke_style_str(GRID_LINE);
    ctx.set_line_width(1.0);
    for col in 0..=grid.width {
        let x = col as f64 * tile;
        ctx.begin_path();
        ctx.move_to(x, 0.0);
        ctx.line_to(x, height);
        ctx.stroke();
    }
    for row in 0..=grid.height {
        let y = row as f64 * tile;
        ctx.begin_path();
        ctx.move_to(0.0, y);
        ctx.line_to(width, y);
        ctx.stroke();
    }

    draw_fills(ctx, &actor_sprite(&snapshot.player));
    for opponent in &snapshot.opponents {
        draw_fills(ctx, &actor_sprite(opponent));
    }

    if let Some(outcome) = &snapshot.outcome {
        ctx.set_fill_style_str(OVERLAY_VEIL);
        ctx.fill_rect(0.0, 0.0, width, height);

        ctx.set_fill_style_str(OVERLAY_TEXT);
        ctx.set_font(OVERLAY_FONT);
        ctx.set_text_align("center");
        for (line, y) in overlay_lines(outcome) {
            ctx.fill_text(&line, overlay_center_x(), y)?;
        }
    }

    Ok(())
}

fn draw_fills(ctx: &CanvasRenderingContext2d, fills: &[Fill]) {
    for fill in fills {
        ctx.set_fill_style_str(fill.color);
        ctx.fill_rect(fill.rect.x, fill.rect.y, fill.rect.w, fill.rect.h);
    }
}
