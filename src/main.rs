use std::path::Path;

use macroquad::prelude::*;

mod audio;
mod game;
mod render;
mod save;

use audio::SoundBank;
use game::{Direction, Game, Settings, Step};
use save::{SAVE_FILE, load_high_score, store_high_score};

/// Square playing surface in pixels. Must divide evenly by the tile size or
/// the edge row of tiles renders short.
const SCREEN_SIZE: i32 = 400;
/// Pixels per grid cell.
const TILE_SIZE: i32 = 20;
/// Cells per side of the board.
const GRID_SIZE: i32 = SCREEN_SIZE / TILE_SIZE;

fn window_conf() -> Conf {
    Conf {
        window_title: "Snake".to_owned(),
        window_width: SCREEN_SIZE,
        window_height: SCREEN_SIZE,
        window_resizable: false,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let sounds = SoundBank::load().await;
    let save_path = Path::new(SAVE_FILE);
    let mut best = load_high_score(save_path);
    let mut settings = Settings::default();

    let mut game = Game::new(GRID_SIZE);
    let mut last_tick = get_time();

    loop {
        if is_key_pressed(KeyCode::Q) || is_key_pressed(KeyCode::Escape) {
            break;
        }
        if is_key_pressed(KeyCode::Key1) {
            settings.wall_pass = !settings.wall_pass;
        }
        if is_key_pressed(KeyCode::Key2) {
            settings.sound = !settings.sound;
        }

        if game.alive {
            if let Some(direction) = direction_key() {
                game.steer(direction);
            }

            let now = get_time();
            if now - last_tick >= f64::from(game.tick_ms) / 1000.0 {
                // Rearm the tick before stepping so a speed change taken
                // during the step applies from this instant.
                last_tick = now;
                match game.advance(settings.wall_pass) {
                    Step::Ate => {
                        if settings.sound {
                            sounds.play_eat();
                        }
                    }
                    Step::Died => {
                        if settings.sound {
                            sounds.play_round_over();
                        }
                        if game.score > best {
                            best = game.score;
                            store_high_score(save_path, best);
                        }
                    }
                    Step::Moved => {}
                }
            }
        } else if is_key_pressed(KeyCode::R) || is_key_pressed(KeyCode::Space) {
            game.restart();
            last_tick = get_time();
        }

        render::draw_board(&game);
        render::draw_hud(&game, best, &settings);
        if !game.alive {
            render::draw_round_over(game.score);
        }

        next_frame().await;
    }
}

/// Arrow keys and their WASD aliases; key codes cover both letter cases.
fn direction_key() -> Option<Direction> {
    if is_key_pressed(KeyCode::Up) || is_key_pressed(KeyCode::W) {
        Some(Direction::Up)
    } else if is_key_pressed(KeyCode::Down) || is_key_pressed(KeyCode::S) {
        Some(Direction::Down)
    } else if is_key_pressed(KeyCode::Left) || is_key_pressed(KeyCode::A) {
        Some(Direction::Left)
    } else if is_key_pressed(KeyCode::Right) || is_key_pressed(KeyCode::D) {
        Some(Direction::Right)
    } else {
        None
    }
}
