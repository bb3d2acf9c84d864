//! Game logic: physics, pipe recycling, collision detection, and scoring.
//!
//! All functions here mutate a [`GameWorld`] and return the discrete
//! [`GameEvent`]s the tick or keypress produced. The caller forwards those
//! to the sound player; the renderer just reads the world afterwards.

use rand::Rng;

use super::types::GameWorld;
use crate::constants::{
    BIRD_HEIGHT, BIRD_WIDTH, BIRD_X, GRAVITY_ACCEL, JUMP_IMPULSE, PIPE_GAP, PIPE_WIDTH,
    SCREEN_HEIGHT, SCROLL_SPEED,
};

/// UI-agnostic input actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    /// Jump (Space or Up).
    Jump,
    /// Restart after a crash (F).
    Restart,
    /// Leave the game (Q or Esc). Handled by the main loop.
    Quit,
    /// Any other key.
    Other,
}

/// Something discrete that happened during a tick or keypress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The bird jumped.
    Jump,
    /// The pipe was recycled past the left edge and the score went up.
    ScoreIncrement,
    /// The bird hit the playfield edge or a pipe.
    GameOver,
}

/// Process a player keypress between ticks.
///
/// Jump only works while playing, restart only while crashed; out-of-phase
/// presses are silently ignored rather than treated as errors.
pub fn process_input<R: Rng>(
    world: &mut GameWorld,
    input: GameInput,
    rng: &mut R,
) -> Vec<GameEvent> {
    match input {
        GameInput::Jump if !world.game_over => {
            // Velocity override, not additive: a jump always leaves the bird
            // at exactly the impulse speed regardless of its prior fall.
            world.bird.velocity_y = JUMP_IMPULSE;
            vec![GameEvent::Jump]
        }
        GameInput::Restart if world.game_over => {
            world.bird.reset();
            world.pipe.reset(rng);
            world.score = 0;
            world.game_over = false;
            Vec::new()
        }
        _ => Vec::new(),
    }
}

/// Advance the simulation by one fixed step.
///
/// Once `game_over` is set this is a no-op until a restart, so the main
/// loop can keep ticking unconditionally. The step order is load-bearing:
/// gravity, scroll, recycle, boundary check, pipe check.
pub fn process_tick<R: Rng>(world: &mut GameWorld, rng: &mut R) -> Vec<GameEvent> {
    if world.game_over {
        return Vec::new();
    }

    let mut events = Vec::new();

    // Gravity
    world.bird.velocity_y += GRAVITY_ACCEL;
    world.bird.y += world.bird.velocity_y;

    // Scroll the pipe left
    world.pipe.x -= SCROLL_SPEED;

    // Recycle once the pipe is fully off-screen. This is the only way the
    // score ever increases.
    if world.pipe.x + PIPE_WIDTH < 0 {
        world.pipe.reset(rng);
        world.score += 1;
        events.push(GameEvent::ScoreIncrement);
    }

    // Playfield boundary check runs first and unconditionally; a pipe hit
    // in the same tick emits a second GameOver.
    if bird_outside_bounds(world) {
        world.game_over = true;
        events.push(GameEvent::GameOver);
    }

    if bird_hits_pipe(world) {
        world.game_over = true;
        events.push(GameEvent::GameOver);
    }

    events
}

/// True when the bird pokes above the ceiling or below the floor.
fn bird_outside_bounds(world: &GameWorld) -> bool {
    world.bird.y < 0 || world.bird.y + BIRD_HEIGHT > SCREEN_HEIGHT
}

/// True when the bird overlaps the pipe pair outside its opening.
fn bird_hits_pipe(world: &GameWorld) -> bool {
    let pipe = &world.pipe;

    // Cheap horizontal rejection before the vertical check
    if BIRD_X + BIRD_WIDTH <= pipe.x || BIRD_X >= pipe.x + PIPE_WIDTH {
        return false;
    }

    let bird = &world.bird;
    bird.y < pipe.gap_y - world.top_pipe_height || bird.y + BIRD_HEIGHT > pipe.gap_y + PIPE_GAP
}

/// Build a fresh world from the configured top pipe height.
pub fn new_game<R: Rng>(top_pipe_height: i32, rng: &mut R) -> GameWorld {
    GameWorld::new(top_pipe_height, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{BIRD_START_Y, DEFAULT_TOP_PIPE_HEIGHT, SCREEN_WIDTH};

    fn test_world<R: Rng>(rng: &mut R) -> GameWorld {
        GameWorld::new(DEFAULT_TOP_PIPE_HEIGHT, rng)
    }

    #[test]
    fn test_jump_overrides_velocity() {
        let mut rng = rand::thread_rng();
        let mut world = test_world(&mut rng);
        world.bird.velocity_y = 5;
        let events = process_input(&mut world, GameInput::Jump, &mut rng);
        assert_eq!(world.bird.velocity_y, JUMP_IMPULSE);
        assert_eq!(events, vec![GameEvent::Jump]);
    }

    #[test]
    fn test_jump_ignored_when_crashed() {
        let mut rng = rand::thread_rng();
        let mut world = test_world(&mut rng);
        world.game_over = true;
        world.bird.velocity_y = 7;
        let events = process_input(&mut world, GameInput::Jump, &mut rng);
        assert_eq!(world.bird.velocity_y, 7);
        assert!(events.is_empty());
    }

    #[test]
    fn test_gravity_accelerates_bird() {
        let mut rng = rand::thread_rng();
        let mut world = test_world(&mut rng);
        process_tick(&mut world, &mut rng);
        assert_eq!(world.bird.velocity_y, 1);
        assert_eq!(world.bird.y, BIRD_START_Y + 1);
        process_tick(&mut world, &mut rng);
        assert_eq!(world.bird.velocity_y, 2);
        assert_eq!(world.bird.y, BIRD_START_Y + 3);
    }

    #[test]
    fn test_pipe_scrolls_left() {
        let mut rng = rand::thread_rng();
        let mut world = test_world(&mut rng);
        let start_x = world.pipe.x;
        process_tick(&mut world, &mut rng);
        assert_eq!(world.pipe.x, start_x - SCROLL_SPEED);
    }

    #[test]
    fn test_floor_crash_ends_run() {
        let mut rng = rand::thread_rng();
        let mut world = test_world(&mut rng);
        world.bird.y = SCREEN_HEIGHT - BIRD_HEIGHT;
        world.bird.velocity_y = 0;
        let events = process_tick(&mut world, &mut rng);
        assert!(world.game_over);
        assert!(events.contains(&GameEvent::GameOver));
    }

    #[test]
    fn test_ceiling_crash_ends_run() {
        let mut rng = rand::thread_rng();
        let mut world = test_world(&mut rng);
        world.bird.y = 10;
        world.bird.velocity_y = -12;
        let events = process_tick(&mut world, &mut rng);
        assert!(world.bird.y < 0);
        assert!(world.game_over);
        assert!(events.contains(&GameEvent::GameOver));
    }

    #[test]
    fn test_pipe_collision_below_gap() {
        let mut rng = rand::thread_rng();
        let mut world = test_world(&mut rng);
        // Park the pipe on the bird's column with the opening far above it.
        world.pipe.x = BIRD_X;
        world.pipe.gap_y = 100;
        world.bird.y = 400;
        world.bird.velocity_y = 0;
        let events = process_tick(&mut world, &mut rng);
        assert!(world.game_over);
        assert_eq!(events, vec![GameEvent::GameOver]);
    }

    #[test]
    fn test_no_collision_inside_gap() {
        let mut rng = rand::thread_rng();
        let mut world = test_world(&mut rng);
        world.pipe.x = BIRD_X;
        world.pipe.gap_y = 300;
        // Opening spans [gap_y - top_pipe_height, gap_y + PIPE_GAP]; after
        // one gravity step the bird sits at 251..301, inside [150, 350].
        world.bird.y = 250;
        world.bird.velocity_y = 0;
        process_tick(&mut world, &mut rng);
        assert!(!world.game_over);
    }

    #[test]
    fn test_no_collision_without_horizontal_overlap() {
        let mut rng = rand::thread_rng();
        let mut world = test_world(&mut rng);
        world.pipe.x = BIRD_X + BIRD_WIDTH + SCROLL_SPEED; // clear after one scroll
        world.pipe.gap_y = 100;
        world.bird.y = 400;
        world.bird.velocity_y = 0;
        process_tick(&mut world, &mut rng);
        assert!(!world.game_over);
    }

    #[test]
    fn test_tick_noop_after_crash() {
        let mut rng = rand::thread_rng();
        let mut world = test_world(&mut rng);
        world.game_over = true;
        let before = world;
        let events = process_tick(&mut world, &mut rng);
        assert!(events.is_empty());
        assert_eq!(world, before);
    }

    #[test]
    fn test_restart_ignored_while_playing() {
        let mut rng = rand::thread_rng();
        let mut world = test_world(&mut rng);
        world.bird.y = 333;
        world.score = 4;
        let before = world;
        let events = process_input(&mut world, GameInput::Restart, &mut rng);
        assert!(events.is_empty());
        assert_eq!(world, before);
    }

    #[test]
    fn test_restart_resets_run() {
        let mut rng = rand::thread_rng();
        let mut world = test_world(&mut rng);
        world.bird.y = 700;
        world.bird.velocity_y = 20;
        world.pipe.x = -50;
        world.score = 9;
        world.game_over = true;
        process_input(&mut world, GameInput::Restart, &mut rng);
        assert_eq!(world.bird.y, BIRD_START_Y);
        assert_eq!(world.bird.velocity_y, 0);
        assert_eq!(world.pipe.x, SCREEN_WIDTH);
        assert_eq!(world.score, 0);
        assert!(!world.game_over);
    }
}
