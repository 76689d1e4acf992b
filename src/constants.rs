// --- Torus Constants ---
pub const TORUS_WIDTH: i64 = 360;
pub const TORUS_HEIGHT: i64 = 360;
pub const TORUS_TICKS: u64 = 10_000;
pub const TORUS_START: [(i64, i64, i64, i64); 3] = [
    (90, 10, 5, 2),    // x, y, vx, vy
    (270, 120, -3, -2),
    (150, 265, 1, -3),
];

pub const PROXIMITY_CENTER: (i64, i64) = (180, 180);
pub const PROXIMITY_RADIUS_SQ: i64 = 60 * 60;

// --- Bounce Constants ---
pub const BOUNCE_WIDTH: i64 = 400;
pub const BOUNCE_HEIGHT: i64 = 300;
pub const BOUNCE_TICKS: u64 = 10_000;
pub const BOUNCE_START: (i64, i64, i64, i64) = (0, 0, 7, 5);
pub const BOUNCE_LABEL: i64 = -1;

// --- Orbit Constants ---
pub const ORBIT_WIDTH: i64 = 360;
pub const ORBIT_HEIGHT: i64 = 360;
pub const ORBIT_TICKS: u64 = 360; // One degree per tick, one full turn
pub const ORBIT_START: [(i64, i64, i64); 2] = [
    (280, 180, 1), // x, y, degrees per tick
    (180, 100, -2),
];

// --- Scatter Constants ---
pub const SCATTER_WIDTH: i64 = 360;
pub const SCATTER_HEIGHT: i64 = 360;
pub const SCATTER_TICKS: u64 = 1_000;
pub const SCATTER_DEFAULT_COUNT: usize = 5;
pub const SCATTER_DEFAULT_SEED: u64 = 23;
pub const SCATTER_MAX_SPEED: i64 = 6;

pub const CENTER_MARKER_LABEL: i64 = 0;
pub const OUT_OF_BOUNDS_MESSAGE: &str = "point strayed too far out of bounds";

pub const DEFAULT_PREVIEW_DELAY_MS: u64 = 30;
pub const LOG_FILE: &str = "point-sim.log";
