//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies
//!
//! The delayed reset after a kill or a win is a deadline on the simulation
//! clock checked each tick, never a platform timer.

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{HitBox, check_collisions};
pub use state::{Direction, Enemy, GameState, LockReason, Player, PlayerPhase, SpriteId};
pub use tick::{check_win_conditions, tick};
