//! Game state and core simulation types
//!
//! Entities live here. Everything is deterministic: all randomness flows
//! through the state-owned seeded RNG, and the delayed reset after a defeat
//! or a victory is a deadline on the simulation clock, not a platform timer.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::config::GameConfig;
use crate::consts::*;
use crate::{pixel_x, pixel_y};

/// Sprite identifier, resolved to a loaded image by the platform layer.
/// The simulation never holds image resources directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteId {
    PlayerIdle,
    PlayerDefeated,
    PlayerVictory,
    Enemy,
}

impl SpriteId {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpriteId::PlayerIdle => "images/char-cat-girl.png",
            SpriteId::PlayerDefeated => "images/char-cat-dead-girl.png",
            SpriteId::PlayerVictory => "images/char-cat-girl-win.png",
            SpriteId::Enemy => "images/enemy-bug.png",
        }
    }
}

/// A discrete movement event from the input source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Up,
    Right,
    Down,
}

impl Direction {
    /// Map a browser `KeyboardEvent::key` value; anything else is ignored.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Direction::Left),
            "ArrowUp" => Some(Direction::Up),
            "ArrowRight" => Some(Direction::Right),
            "ArrowDown" => Some(Direction::Down),
            _ => None,
        }
    }
}

/// What put the player into the locked state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockReason {
    Defeat,
    Victory,
}

/// Player input handling state.
///
/// `Locked` carries the simulation-clock deadline at which the player resets
/// and becomes movable again. A kill or win while already locked overwrites
/// the deadline (last call wins); there is only ever one pending reset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlayerPhase {
    Active,
    Locked { reason: LockReason, until: f64 },
}

/// An enemy crossing the board on a fixed row.
///
/// Created once at game start and recycled in place forever: when it exits
/// the right edge it teleports back to a random off-screen start with a new
/// random speed. The row never changes.
#[derive(Debug, Clone)]
pub struct Enemy {
    pub pos: Vec2,
    /// Horizontal speed in pixels/sec
    pub speed: f32,
    /// Board row, fixed at creation
    pub row: i32,
    pub sprite: SpriteId,
}

impl Enemy {
    pub fn spawn(row: i32, rng: &mut Pcg32, config: &GameConfig) -> Self {
        Self {
            pos: Vec2::new(random_start_x(rng, config), pixel_y(row)),
            speed: random_speed(rng, config),
            row,
            sprite: SpriteId::Enemy,
        }
    }

    /// Advance by `dt` seconds; recycle once past the right board edge.
    pub fn update(&mut self, dt: f32, rng: &mut Pcg32, config: &GameConfig) {
        debug_assert!(dt >= 0.0);
        self.pos.x += dt * self.speed;
        if self.pos.x >= BOARD_WIDTH {
            self.recycle(rng, config);
        }
    }

    fn recycle(&mut self, rng: &mut Pcg32, config: &GameConfig) {
        self.pos.x = random_start_x(rng, config);
        self.speed = random_speed(rng, config);
    }
}

fn random_speed(rng: &mut Pcg32, config: &GameConfig) -> f32 {
    rng.random_range(config.enemy_speed_min..config.enemy_speed_max)
}

fn random_start_x(rng: &mut Pcg32, config: &GameConfig) -> f32 {
    rng.random_range(config.spawn_offset_min..config.spawn_offset_max)
}

/// The player-controlled sprite
#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    /// Board column, clamped to [0, NUM_COLS)
    pub col: i32,
    /// Board row, clamped to [0, NUM_ROWS)
    pub row: i32,
    pub sprite: SpriteId,
    pub phase: PlayerPhase,
}

impl Player {
    pub fn new() -> Self {
        let mut player = Self {
            pos: Vec2::ZERO,
            col: START_COL,
            row: START_ROW,
            sprite: SpriteId::PlayerIdle,
            phase: PlayerPhase::Active,
        };
        player.reset();
        player
    }

    /// Back to the start tile with the default sprite, movable. Idempotent.
    pub fn reset(&mut self) {
        self.col = START_COL;
        self.row = START_ROW;
        self.update_pixel_position();
        self.sprite = SpriteId::PlayerIdle;
        self.phase = PlayerPhase::Active;
    }

    pub fn can_move(&self) -> bool {
        matches!(self.phase, PlayerPhase::Active)
    }

    /// Move one grid unit, clamped to the board. Ignored while locked.
    pub fn handle_input(&mut self, direction: Direction) {
        if !self.can_move() {
            return;
        }
        match direction {
            Direction::Left => self.col = (self.col - 1).max(0),
            Direction::Up => self.row = (self.row - 1).max(0),
            Direction::Right => self.col = (self.col + 1).min(NUM_COLS - 1),
            Direction::Down => self.row = (self.row + 1).min(NUM_ROWS - 1),
        }
        self.update_pixel_position();
    }

    /// Lock with the defeated sprite until `clock + lock_duration`.
    /// A repeated call re-arms the deadline; last call wins.
    pub fn kill(&mut self, clock: f64, lock_duration: f64) {
        self.phase = PlayerPhase::Locked {
            reason: LockReason::Defeat,
            until: clock + lock_duration,
        };
        self.sprite = SpriteId::PlayerDefeated;
    }

    /// Lock with the victory sprite until `clock + lock_duration`.
    pub fn win(&mut self, clock: f64, lock_duration: f64) {
        self.phase = PlayerPhase::Locked {
            reason: LockReason::Victory,
            until: clock + lock_duration,
        };
        self.sprite = SpriteId::PlayerVictory;
    }

    /// Time-driven update is a no-op; the player only moves on input events.
    pub fn update(&mut self, _dt: f32) {}

    /// Snap the grid position back to the start tile without touching the
    /// sprite or the lock. The win check uses this before locking, so the
    /// victory pose is shown at the start tile.
    pub fn snap_to_start(&mut self) {
        self.col = START_COL;
        self.row = START_ROW;
        self.update_pixel_position();
    }

    fn update_pixel_position(&mut self) {
        self.pos = Vec2::new(pixel_x(self.col), pixel_y(self.row));
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

/// Complete game state (deterministic)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Simulation clock in seconds, advanced by each tick's dt
    pub clock: f64,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub player: Player,
    /// Fixed enemy pool, one per configured row
    pub enemies: Vec<Enemy>,
    pub config: GameConfig,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a new game state with the given seed and default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_config(seed, GameConfig::default())
    }

    pub fn with_config(seed: u64, config: GameConfig) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let enemies = config
            .enemy_rows
            .iter()
            .map(|&row| Enemy::spawn(row, &mut rng, &config))
            .collect();
        Self {
            seed,
            clock: 0.0,
            time_ticks: 0,
            player: Player::new(),
            enemies,
            config,
            rng,
        }
    }

    /// Feed a movement event from the input source. Events arrive between
    /// frames and mutate the player immediately; no queueing.
    pub fn handle_input(&mut self, direction: Direction) {
        self.player.handle_input(direction);
    }
}
