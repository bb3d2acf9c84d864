//! Terminal rendering. Everything here reads the world, nothing mutates it.

pub mod game_scene;

use ratatui::Frame;

use crate::game::GameWorld;
use crate::sprites::SpriteSet;

/// Main UI drawing function, called once per frame by the game loop.
pub fn draw_ui(frame: &mut Frame, world: &GameWorld, sprites: &SpriteSet) {
    let area = frame.size();
    game_scene::render_game(frame, area, world, sprites);
}
