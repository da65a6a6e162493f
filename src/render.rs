use macroquad::prelude::*;

use crate::TILE_SIZE;
use crate::game::{Direction, Game, Settings};

const TILE: f32 = TILE_SIZE as f32;

const HEAD_COLOR: Color = Color::new(0.0, 1.0, 0.0, 1.0);
const FOOD_COLOR: Color = Color::new(1.0, 0.0, 0.0, 1.0);
const STEM_COLOR: Color = Color::new(0.0, 0.667, 0.0, 1.0);
const EYE_COLOR: Color = BLACK;
const EYE_SIZE: f32 = 3.0;

/// Body shade darkens with distance from the head, floored so the far tail
/// stays visible against the background.
fn body_color(index: usize) -> Color {
    let green = 255_i32.saturating_sub(10 * index as i32).max(50);
    Color::new(0.0, green as f32 / 255.0, 0.0, 1.0)
}

/// Eye placement within the head tile, one layout per heading plus the
/// stationary layout at round start. Offsets are in pixels from the tile's
/// top-left corner.
fn eye_offsets(heading: Option<Direction>) -> [(f32, f32); 2] {
    match heading {
        Some(Direction::Right) => [(TILE - 7.0, 5.0), (TILE - 7.0, TILE - 8.0)],
        Some(Direction::Left) => [(4.0, 5.0), (4.0, TILE - 8.0)],
        Some(Direction::Down) => [(5.0, TILE - 7.0), (TILE - 8.0, TILE - 7.0)],
        Some(Direction::Up) => [(5.0, 4.0), (TILE - 8.0, 4.0)],
        None => [(5.0, 5.0), (TILE - 8.0, 5.0)],
    }
}

pub fn draw_board(game: &Game) {
    clear_background(BLACK);

    // Segments are inset one pixel so the body reads as separate squares.
    for (index, segment) in game.snake.iter().enumerate() {
        let color = if index == 0 {
            HEAD_COLOR
        } else {
            body_color(index)
        };
        draw_rectangle(
            segment.x as f32 * TILE,
            segment.y as f32 * TILE,
            TILE - 1.0,
            TILE - 1.0,
            color,
        );
    }

    let head = game.head();
    for (ex, ey) in eye_offsets(game.heading) {
        draw_rectangle(
            head.x as f32 * TILE + ex,
            head.y as f32 * TILE + ey,
            EYE_SIZE,
            EYE_SIZE,
            EYE_COLOR,
        );
    }

    // Food is an apple: filled circle with a short stem.
    let center_x = game.food.x as f32 * TILE + TILE / 2.0;
    let center_y = game.food.y as f32 * TILE + TILE / 2.0;
    draw_circle(center_x, center_y, TILE / 2.0 - 2.0, FOOD_COLOR);
    draw_rectangle(
        center_x - 1.0,
        game.food.y as f32 * TILE + 2.0,
        2.0,
        4.0,
        STEM_COLOR,
    );
}

pub fn draw_hud(game: &Game, best: u32, settings: &Settings) {
    draw_text(&format!("Score: {}", game.score), 8.0, 20.0, 24.0, WHITE);
    draw_text(&format!("Best: {}", best), 8.0, 40.0, 20.0, GRAY);

    let panel = format!(
        "[1] wall pass: {}   [2] sound: {}",
        on_off(settings.wall_pass),
        on_off(settings.sound),
    );
    draw_text(&panel, 8.0, screen_height() - 8.0, 18.0, DARKGRAY);
}

pub fn draw_round_over(final_score: u32) {
    draw_rectangle(
        0.0,
        0.0,
        screen_width(),
        screen_height(),
        Color::new(0.0, 0.0, 0.0, 0.6),
    );

    let sw = screen_width();
    let sh = screen_height();

    let title = "GAME OVER";
    let tm = measure_text(title, None, 40, 1.0);
    draw_text(title, (sw - tm.width) * 0.5, sh * 0.4, 40.0, HEAD_COLOR);

    let score_line = format!("Final score: {}", final_score);
    let sm = measure_text(&score_line, None, 24, 1.0);
    draw_text(&score_line, (sw - sm.width) * 0.5, sh * 0.4 + 36.0, 24.0, WHITE);

    let hint = "R: restart   Q: quit";
    let hm = measure_text(hint, None, 20, 1.0);
    draw_text(hint, (sw - hm.width) * 0.5, sh * 0.4 + 64.0, 20.0, GRAY);
}

fn on_off(enabled: bool) -> &'static str {
    if enabled { "on" } else { "off" }
}
