// Shared game constants

// Playfield geometry
pub const TILE_SIZE: f32 = 16.0;
pub const GRID_WIDTH: usize = 32;
pub const GRID_HEIGHT: usize = 30;
pub const CANVAS_WIDTH: f32 = GRID_WIDTH as f32 * TILE_SIZE;
pub const CANVAS_HEIGHT: f32 = GRID_HEIGHT as f32 * TILE_SIZE;
pub const ACTOR_SIZE: f32 = TILE_SIZE; // Actors are exactly one tile wide and tall

// Movement
pub const PLAYER_SPEED: f32 = 2.0;
pub const OPPONENT_SPEED_FACTOR: f32 = 0.8;
pub const ARRIVAL_RADIUS: f32 = 5.0; // Opponents stop steering once this close to their target

// Painting
pub const PAINT_RADIUS: i32 = 1; // 3x3 stamp around the occupied tile
pub const PAINT_COOLDOWN: i32 = 15;
pub const OPPONENT_EXTRA_COOLDOWN_MAX: i32 = 30; // Exclusive upper bound
pub const MAX_PAINT_COOLDOWN: i32 = 3600; // One minute of ticks at the default rate

// Opponent AI
pub const OPPONENT_COUNT: usize = 3;
pub const MAX_OPPONENTS: usize = 64;
pub const THINK_TICKS_MIN: i32 = 60;
pub const THINK_TICKS_MAX: i32 = 180; // Exclusive upper bound

// Match timing
pub const MATCH_DURATION_SECS: u32 = 60;
pub const SIMULATION_TICK_RATE: u32 = 60;
pub const COUNTDOWN_TICK_RATE: u32 = 1;
pub const MAX_CATCH_UP_STEPS: u32 = 5; // Simulation steps allowed per host frame

// Animation
pub const ANIMATION_PERIOD: u32 = 60;
