// Game timing constants
pub const TICK_INTERVAL_MS: u64 = 10;

// Playfield dimensions in logical pixels
pub const SCREEN_WIDTH: i32 = 800;
pub const SCREEN_HEIGHT: i32 = 600;

// Bird constants. The bird occupies a fixed column; only its vertical
// position ever changes.
pub const BIRD_X: i32 = 100;
pub const BIRD_START_Y: i32 = 200;
pub const BIRD_WIDTH: i32 = 50;
pub const BIRD_HEIGHT: i32 = 50;

// Physics constants, per 10ms tick
pub const GRAVITY_ACCEL: i32 = 1;
pub const JUMP_IMPULSE: i32 = -14;

// Pipe constants
pub const PIPE_WIDTH: i32 = 200;
pub const PIPE_GAP: i32 = 50;
pub const SCROLL_SPEED: i32 = 3;

// Gap anchor randomization bounds: gap_y is drawn uniformly from
// [PIPE_Y_MIN, PIPE_Y_MIN + PIPE_Y_RANGE - PIPE_GAP).
pub const PIPE_Y_MIN: i32 = 100;
pub const PIPE_Y_RANGE: i32 = 400;

// Height of the top pipe segment. Only moves the upper collision boundary,
// never the physics, so it stays tunable through Settings.
pub const DEFAULT_TOP_PIPE_HEIGHT: i32 = 150;
