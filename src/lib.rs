//! Grid Hopper - a grid-crossing arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, win detection)
//! - `renderer`: Canvas 2D sprite rendering (wasm only)
//! - `assets`: Sprite image loading (wasm only)
//! - `config`: Data-driven game tuning

pub mod config;
pub mod sim;

#[cfg(target_arch = "wasm32")]
pub mod assets;
#[cfg(target_arch = "wasm32")]
pub mod renderer;

pub use config::GameConfig;

/// Board geometry and timing constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, matching the display loop)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Board dimensions in tiles
    pub const NUM_COLS: i32 = 5;
    pub const NUM_ROWS: i32 = 6;

    /// Tile dimensions in pixels
    pub const TILE_WIDTH: f32 = 101.0;
    pub const TILE_HEIGHT: f32 = 83.0;
    /// Uniform vertical offset so sprites sit centered on their tile
    pub const SPRITE_Y_OFFSET: f32 = -20.0;

    /// Full board width in pixels; enemies recycle past this edge
    pub const BOARD_WIDTH: f32 = NUM_COLS as f32 * TILE_WIDTH;

    /// Canvas size (the tile art overhangs the bottom row)
    pub const CANVAS_WIDTH: u32 = 505;
    pub const CANVAS_HEIGHT: u32 = 606;

    /// Player start tile
    pub const START_COL: i32 = 2;
    pub const START_ROW: i32 = 5;
    /// Reaching this row wins the crossing
    pub const GOAL_ROW: i32 = 0;

    /// Vertical band of a tile sprite that is solid for collisions.
    /// 35px tall, so boxes on adjacent rows (83px apart) never overlap.
    pub const SPRITE_SOLID_TOP: f32 = 95.0;
    pub const SPRITE_SOLID_BOTTOM: f32 = 130.0;
    /// Horizontal inset on each side of the player sprite
    pub const PLAYER_SIDE_INSET: f32 = 18.0;
}

/// Horizontal pixel position of a board column
#[inline]
pub fn pixel_x(col: i32) -> f32 {
    col as f32 * consts::TILE_WIDTH
}

/// Vertical pixel position of a board row
#[inline]
pub fn pixel_y(row: i32) -> f32 {
    row as f32 * consts::TILE_HEIGHT + consts::SPRITE_Y_OFFSET
}
