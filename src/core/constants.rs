// Viewport (world units)
pub const VIEWPORT_WIDTH: f64 = 500.0;
pub const VIEWPORT_HEIGHT: f64 = 700.0;

// Bird
pub const BIRD_X: f64 = 100.0;
pub const BIRD_RADIUS: f64 = 20.0;
pub const GRAVITY: f64 = 0.5;
pub const JUMP_STRENGTH: f64 = -10.0;

// Obstacles
pub const OBSTACLE_COUNT: usize = 3;
pub const OBSTACLE_SPEED: f64 = 5.0;
pub const OBSTACLE_WIDTH: f64 = 52.0;
pub const REFERENCE_HEIGHT_MIN: i32 = 150;
pub const REFERENCE_HEIGHT_MAX: i32 = 400;
pub const OSCILLATION_CHANCE: f64 = 0.5;
pub const OSCILLATION_STEP: i32 = 1;

// Difficulty: gap(score) = max(INITIAL_GAP - GAP_STEP * score, MIN_GAP)
pub const INITIAL_GAP: f64 = 200.0;
pub const MIN_GAP: f64 = 130.0;
pub const GAP_STEP: f64 = 2.0;
// spacing(score) = max(INITIAL_SPACING - SPACING_STEP * score, MIN_SPACING)
pub const INITIAL_SPACING: f64 = 300.0;
pub const MIN_SPACING: f64 = 180.0;
pub const SPACING_STEP: f64 = 5.0;

// Scrolling ground strip
pub const SCENERY_SPEED: f64 = 2.0;
pub const SCENERY_TILE_WIDTH: f64 = 288.0;

// Tick and timing
pub const FRAME_DELAY_MS: u64 = 30;

// Files under the data directory
pub const DATA_DIR_NAME: &str = ".flappy";
pub const BEST_SCORE_FILE: &str = "best_score.txt";
pub const CONFIG_FILE: &str = "config.json";
pub const LOG_FILE: &str = "flappy.log";
