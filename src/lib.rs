//! Riverhop - A river-crossing arcade game
//!
//! Core modules:
//! - `sim`: Deterministic state-transition core (kinematics, collisions, rules)
//! - `platform`: Event sources and render sinks around the core
//! - `session`: The fold loop that threads one state through the event stream
//! - `settings`: Key bindings and runner configuration

pub mod platform;
pub mod session;
pub mod settings;
pub mod sim;

pub use session::Session;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Side length of the square playing field (both axes span `[0, FIELD_SIZE]`)
    pub const FIELD_SIZE: f32 = 600.0;
    /// Distance covered by a single directional move
    pub const GRID_STEP: f32 = 50.0;
    /// Distance covered by a jump (always toward the goals)
    pub const JUMP_STEP: f32 = 100.0;
    /// Lowest coordinate the agent can reach through input
    pub const AGENT_MIN: f32 = GRID_STEP;
    /// Highest coordinate the agent can reach through input
    pub const AGENT_MAX: f32 = FIELD_SIZE - GRID_STEP;

    /// Agent defaults
    pub const AGENT_START: (f32, f32) = (300.0, 550.0);
    pub const AGENT_RADIUS: f32 = 20.0;
    /// Shrinks the rider's radius for the ride test ("standing on", not "touching")
    pub const RIDE_MARGIN: f32 = 7.0;

    /// Elapsed time units between two clock ticks
    pub const TICK_PERIOD: u64 = 10;

    /// Scoring
    pub const GOAL_POINTS: u64 = 100;
    pub const BONUS_POINTS: u64 = 500;

    /// River band (the hazard zone)
    pub const RIVER_TOP: f32 = 75.0;
    pub const RIVER_HEIGHT: f32 = 200.0;

    /// Road lanes, nearest the start first
    pub const VEHICLE_ROWS: [f32; 4] = [500.0, 450.0, 400.0, 350.0];
    pub const VEHICLE_SPEEDS: [f32; 4] = [1.0, -1.5, 2.0, -1.25];
    pub const VEHICLES_PER_ROW: usize = 3;
    pub const VEHICLE_RADIUS: f32 = 20.0;

    /// River lanes, nearest the road first
    pub const PLATFORM_ROWS: [f32; 4] = [250.0, 200.0, 150.0, 100.0];
    pub const PLATFORM_SPEEDS: [f32; 4] = [-1.0, 1.5, -0.75, 1.25];
    pub const PLATFORMS_PER_ROW: usize = 3;
    pub const PLATFORM_RADIUS: f32 = 30.0;

    /// Geese gliding over the river
    pub const SAFE_FLIER_POSITIONS: [(f32, f32); 2] = [(100.0, 175.0), (450.0, 125.0)];
    pub const SAFE_FLIER_SPEEDS: [f32; 2] = [2.0, -1.75];
    pub const SAFE_FLIER_RADIUS: f32 = 25.0;

    /// Hostile fliers wait on the bottom edge until every goal is taken, then
    /// cross into the field heading up
    pub const HOSTILE_FLIER_RADIUS: f32 = 18.0;
    pub const HOSTILE_FLIER_SPEED: f32 = 1.5;
    /// Headings in degrees, 0 = up
    pub const HOSTILE_FLIER_HEADINGS: [f32; 3] = [340.0, 0.0, 20.0];
    pub const HOSTILE_FLIER_DORMANT_Y: f32 = FIELD_SIZE;

    /// Goal row
    pub const GOAL_ROW: f32 = 50.0;
    pub const GOAL_COUNT: usize = 5;
    pub const GOAL_RADIUS: f32 = 20.0;
    pub const BONUS_GOAL_POSITION: (f32, f32) = (300.0, 50.0);
}
