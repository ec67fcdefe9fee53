//! Per-frame simulation step
//!
//! The frame driver calls `tick` once per fixed timestep. Order per tick:
//! advance the clock, move enemies, resolve a pending player reset, then run
//! the collision and win checks. Input events are applied between ticks by
//! the platform layer via `GameState::handle_input`.

use super::collision::check_collisions;
use super::state::{GameState, PlayerPhase};
use crate::consts::GOAL_ROW;

/// Advance the game state by one frame's elapsed time
pub fn tick(state: &mut GameState, dt: f32) {
    debug_assert!(dt >= 0.0);
    state.clock += dt as f64;
    state.time_ticks += 1;

    let GameState {
        enemies,
        rng,
        config,
        ..
    } = state;
    for enemy in enemies.iter_mut() {
        enemy.update(dt, rng, config);
    }
    state.player.update(dt);

    // Pending reset: back to Active once the deadline passes, regardless of
    // whether a defeat or a victory armed it
    if let PlayerPhase::Locked { until, .. } = state.player.phase {
        if state.clock >= until {
            state.player.reset();
        }
    }

    check_collisions(state);
    check_win_conditions(state);
}

/// Reaching the goal row wins the crossing: the grid position snaps back to
/// the start tile first, then the victory lock is armed. The later reset puts
/// the player on the start tile again; the double reset is intentional and
/// matches the original game.
pub fn check_win_conditions(state: &mut GameState) {
    if state.player.row == GOAL_ROW {
        state.player.snap_to_start();
        let clock = state.clock;
        let lock_duration = state.config.lock_duration;
        state.player.win(clock, lock_duration);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::state::{Direction, LockReason, SpriteId};

    /// Tick with all enemies parked far off-screen so nothing can collide
    fn quiet_state(seed: u64) -> GameState {
        let mut state = GameState::new(seed);
        for enemy in &mut state.enemies {
            enemy.pos.x = -10_000.0;
            enemy.speed = 0.0;
        }
        state
    }

    #[test]
    fn test_tick_advances_clock_and_enemies() {
        let mut state = GameState::new(3);
        let before: Vec<f32> = state.enemies.iter().map(|e| e.pos.x).collect();
        let speeds: Vec<f32> = state.enemies.iter().map(|e| e.speed).collect();

        tick(&mut state, SIM_DT);

        assert_eq!(state.time_ticks, 1);
        assert!((state.clock - SIM_DT as f64).abs() < 1e-9);
        for ((enemy, x0), speed) in state.enemies.iter().zip(before).zip(speeds) {
            assert!((enemy.pos.x - (x0 + SIM_DT * speed)).abs() < 1e-3);
        }
    }

    #[test]
    fn test_win_snaps_to_start_and_locks() {
        let mut state = quiet_state(3);
        for _ in 0..5 {
            state.handle_input(Direction::Up);
        }
        assert_eq!(state.player.row, GOAL_ROW);

        check_win_conditions(&mut state);

        assert_eq!(state.player.col, START_COL);
        assert_eq!(state.player.row, START_ROW);
        assert_eq!(state.player.sprite, SpriteId::PlayerVictory);
        assert!(matches!(
            state.player.phase,
            PlayerPhase::Locked {
                reason: LockReason::Victory,
                ..
            }
        ));
    }

    #[test]
    fn test_lock_expires_after_configured_delay() {
        let mut state = quiet_state(9);
        state.player.kill(state.clock, state.config.lock_duration);
        assert!(!state.player.can_move());

        // Input during the window is ignored entirely
        let mut ticks = 0;
        while !state.player.can_move() {
            state.handle_input(Direction::Up);
            tick(&mut state, SIM_DT);
            ticks += 1;
            assert!(ticks <= 60, "lock never expired");
        }

        // 0.5s at 60Hz, reset lands on the first tick at or past the deadline
        assert_eq!(ticks, 30);
        assert_eq!(state.player.col, START_COL);
        assert_eq!(state.player.row, START_ROW);
        assert_eq!(state.player.sprite, SpriteId::PlayerIdle);
    }

    #[test]
    fn test_win_then_reset_returns_to_active_at_start() {
        let mut state = quiet_state(11);
        for _ in 0..5 {
            state.handle_input(Direction::Up);
        }
        tick(&mut state, SIM_DT); // win check fires inside the tick
        assert!(!state.player.can_move());
        assert_eq!(state.player.sprite, SpriteId::PlayerVictory);

        for _ in 0..40 {
            tick(&mut state, SIM_DT);
        }
        assert!(state.player.can_move());
        assert_eq!((state.player.col, state.player.row), (START_COL, START_ROW));
        assert_eq!(state.player.sprite, SpriteId::PlayerIdle);
    }

    #[test]
    fn test_collision_during_tick_kills() {
        let mut state = GameState::new(13);
        // Enemies sit on rows 1..=3; walk the player to row 3 and park one on them
        for enemy in &mut state.enemies {
            enemy.speed = 0.0;
            enemy.pos.x = -10_000.0;
        }
        state.enemies[0].pos.x = 202.0;
        assert_eq!(state.enemies[0].row, 3);
        state.handle_input(Direction::Up);
        state.handle_input(Direction::Up);
        assert_eq!(state.player.row, 3);

        tick(&mut state, SIM_DT);

        assert!(!state.player.can_move());
        assert_eq!(state.player.sprite, SpriteId::PlayerDefeated);
        // Defeat leaves the grid position where the player died
        assert_eq!(state.player.row, 3);
    }

    #[test]
    fn test_determinism() {
        let mut state1 = GameState::new(99_999);
        let mut state2 = GameState::new(99_999);

        let moves = [
            Some(Direction::Up),
            None,
            Some(Direction::Left),
            Some(Direction::Up),
            None,
            Some(Direction::Right),
        ];
        for step in 0..600 {
            if let Some(Some(dir)) = moves.get(step % moves.len()) {
                state1.handle_input(*dir);
                state2.handle_input(*dir);
            }
            tick(&mut state1, SIM_DT);
            tick(&mut state2, SIM_DT);
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.player.col, state2.player.col);
        assert_eq!(state1.player.row, state2.player.row);
        for (a, b) in state1.enemies.iter().zip(state2.enemies.iter()) {
            assert_eq!(a.pos, b.pos);
            assert_eq!(a.speed, b.speed);
        }
    }

    #[test]
    fn test_zero_dt_is_a_no_op_for_motion() {
        let mut state = quiet_state(17);
        let before = state.clock;
        tick(&mut state, 0.0);
        assert_eq!(state.clock, before);
        assert_eq!(state.time_ticks, 1);
    }
}
