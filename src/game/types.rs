//! Data structures for the bird-and-pipe simulation.

use rand::Rng;

use crate::constants::{
    BIRD_START_Y, PIPE_GAP, PIPE_Y_MIN, PIPE_Y_RANGE, SCREEN_WIDTH,
};

/// The player's bird. Horizontal position and size are constants
/// (`BIRD_X`, `BIRD_WIDTH`, `BIRD_HEIGHT`); only the vertical state moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bird {
    /// Top edge in logical pixels. Row 0 is the ceiling.
    pub y: i32,
    /// Vertical velocity in pixels/tick (positive = downward).
    pub velocity_y: i32,
}

impl Bird {
    pub fn new() -> Self {
        Self {
            y: BIRD_START_Y,
            velocity_y: 0,
        }
    }

    /// Put the bird back at its starting position and velocity.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for Bird {
    fn default() -> Self {
        Self::new()
    }
}

/// The single pipe pair. It is recycled when it leaves the screen, never
/// destroyed, so there is exactly one for the whole session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pipe {
    /// Left edge in logical pixels. Scrolls left every tick and may go
    /// negative while the pipe slides off-screen.
    pub x: i32,
    /// Gap anchor row: the top pipe's collision boundary hangs
    /// `top_pipe_height` above it and the bottom opening closes `PIPE_GAP`
    /// below it.
    pub gap_y: i32,
}

impl Pipe {
    /// Spawn at the right edge with a freshly randomized gap.
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        Self {
            x: SCREEN_WIDTH,
            gap_y: Self::random_gap_y(rng),
        }
    }

    /// Move back to the right edge and re-randomize the gap.
    pub fn reset<R: Rng>(&mut self, rng: &mut R) {
        *self = Self::new(rng);
    }

    /// Draw a gap anchor uniformly from
    /// `[PIPE_Y_MIN, PIPE_Y_MIN + PIPE_Y_RANGE - PIPE_GAP)`, which always
    /// leaves room for both pipe segments inside the playfield.
    pub fn random_gap_y<R: Rng>(rng: &mut R) -> i32 {
        PIPE_Y_MIN + rng.gen_range(0..PIPE_Y_RANGE - PIPE_GAP)
    }
}

/// Complete simulation state. Owned by the main loop, mutated in place by
/// the functions in [`super::logic`], and read by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameWorld {
    pub bird: Bird,
    pub pipe: Pipe,
    /// Pipes recycled past the left edge so far.
    pub score: u32,
    /// Set once per run; cleared only by an explicit restart.
    pub game_over: bool,
    /// Height of the top pipe segment, cached from Settings.
    pub top_pipe_height: i32,
}

impl GameWorld {
    /// Create a fresh world with the given top pipe height.
    pub fn new<R: Rng>(top_pipe_height: i32, rng: &mut R) -> Self {
        Self {
            bird: Bird::new(),
            pipe: Pipe::new(rng),
            score: 0,
            game_over: false,
            top_pipe_height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_TOP_PIPE_HEIGHT;

    #[test]
    fn test_new_world_defaults() {
        let mut rng = rand::thread_rng();
        let world = GameWorld::new(DEFAULT_TOP_PIPE_HEIGHT, &mut rng);
        assert_eq!(world.bird.y, BIRD_START_Y);
        assert_eq!(world.bird.velocity_y, 0);
        assert_eq!(world.pipe.x, SCREEN_WIDTH);
        assert_eq!(world.score, 0);
        assert!(!world.game_over);
        assert_eq!(world.top_pipe_height, DEFAULT_TOP_PIPE_HEIGHT);
    }

    #[test]
    fn test_gap_anchor_stays_in_bounds() {
        let mut rng = rand::thread_rng();
        for _ in 0..1000 {
            let gap_y = Pipe::random_gap_y(&mut rng);
            assert!(gap_y >= PIPE_Y_MIN);
            assert!(gap_y < PIPE_Y_MIN + PIPE_Y_RANGE - PIPE_GAP);
        }
    }

    #[test]
    fn test_pipe_reset_returns_to_right_edge() {
        let mut rng = rand::thread_rng();
        let mut pipe = Pipe::new(&mut rng);
        pipe.x = -250;
        pipe.reset(&mut rng);
        assert_eq!(pipe.x, SCREEN_WIDTH);
    }

    #[test]
    fn test_bird_reset() {
        let mut bird = Bird::new();
        bird.y = 17;
        bird.velocity_y = 9;
        bird.reset();
        assert_eq!(bird, Bird::new());
    }
}
