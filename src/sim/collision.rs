//! Player/enemy collision detection
//!
//! Axis-aligned overlap in pixel space. Both sprites use the same 35px
//! vertical solid band of the tile, so only enemies on the player's row can
//! hit; the player additionally gets 18px side insets so near-misses at tile
//! edges don't count.

use glam::Vec2;

use super::state::GameState;
use crate::consts::*;

/// Axis-aligned hit box in pixel space
#[derive(Debug, Clone, Copy)]
pub struct HitBox {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl HitBox {
    /// Enemy hit box: full tile width, solid vertical band
    pub fn enemy(pos: Vec2) -> Self {
        Self {
            left: pos.x,
            right: pos.x + TILE_WIDTH,
            top: pos.y + SPRITE_SOLID_TOP,
            bottom: pos.y + SPRITE_SOLID_BOTTOM,
        }
    }

    /// Player hit box: side insets, same solid vertical band
    pub fn player(pos: Vec2) -> Self {
        Self {
            left: pos.x + PLAYER_SIDE_INSET,
            right: pos.x + TILE_WIDTH - PLAYER_SIDE_INSET,
            top: pos.y + SPRITE_SOLID_TOP,
            bottom: pos.y + SPRITE_SOLID_BOTTOM,
        }
    }

    /// Strict AABB overlap; touching edges do not count
    pub fn overlaps(&self, other: &HitBox) -> bool {
        self.left < other.right
            && self.right > other.left
            && self.top < other.bottom
            && self.bottom > other.top
    }
}

/// Kill the player for every enemy overlapping them this frame.
///
/// Multiple simultaneous overlaps each call `kill`; the lock deadline is
/// simply overwritten, so the net effect is a single pending reset.
pub fn check_collisions(state: &mut GameState) {
    let clock = state.clock;
    let lock_duration = state.config.lock_duration;
    let GameState {
        player, enemies, ..
    } = state;

    let player_box = HitBox::player(player.pos);
    for enemy in enemies.iter() {
        if player_box.overlaps(&HitBox::enemy(enemy.pos)) {
            player.kill(clock, lock_duration);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Direction, PlayerPhase, SpriteId};
    use crate::{pixel_x, pixel_y};

    fn place_enemy(state: &mut GameState, index: usize, x: f32) {
        let enemy = &mut state.enemies[index];
        enemy.pos.x = x;
    }

    fn move_player_to(state: &mut GameState, col: i32, row: i32) {
        // Walk there through input so pixel position stays consistent
        let player = &mut state.player;
        while player.col > col {
            player.handle_input(Direction::Left);
        }
        while player.col < col {
            player.handle_input(Direction::Right);
        }
        while player.row > row {
            player.handle_input(Direction::Up);
        }
        while player.row < row {
            player.handle_input(Direction::Down);
        }
        assert_eq!((player.col, player.row), (col, row));
    }

    #[test]
    fn test_same_row_overlap_kills() {
        let mut state = GameState::new(5);
        // Enemy index 0 is on row 3
        assert_eq!(state.enemies[0].row, 3);
        place_enemy(&mut state, 0, 150.0);
        // Park the others far off-screen
        for i in 1..state.enemies.len() {
            place_enemy(&mut state, i, -1000.0);
        }
        move_player_to(&mut state, 2, 3);
        assert_eq!(state.player.pos, glam::Vec2::new(202.0, 229.0));

        check_collisions(&mut state);

        assert!(!state.player.can_move());
        assert_eq!(state.player.sprite, SpriteId::PlayerDefeated);
        assert_eq!(
            state.player.phase,
            PlayerPhase::Locked {
                reason: crate::sim::state::LockReason::Defeat,
                until: state.config.lock_duration
            }
        );
    }

    #[test]
    fn test_distant_enemy_does_not_kill() {
        let mut state = GameState::new(5);
        for i in 0..state.enemies.len() {
            place_enemy(&mut state, i, 500.0);
        }
        // Player at col 0, row 5; enemies are on rows 1..=3 anyway
        move_player_to(&mut state, 0, 5);

        check_collisions(&mut state);

        assert!(state.player.can_move());
        assert_eq!(state.player.sprite, SpriteId::PlayerIdle);
    }

    #[test]
    fn test_adjacent_row_never_collides() {
        // Same column, rows one apart: vertical bands must not intersect
        let player_box = HitBox::player(glam::Vec2::new(pixel_x(2), pixel_y(3)));
        let enemy_box = HitBox::enemy(glam::Vec2::new(pixel_x(2), pixel_y(2)));
        assert!(!player_box.overlaps(&enemy_box));

        let enemy_below = HitBox::enemy(glam::Vec2::new(pixel_x(2), pixel_y(4)));
        assert!(!player_box.overlaps(&enemy_below));
    }

    #[test]
    fn test_side_inset_allows_near_miss() {
        let y = pixel_y(2);
        let player_box = HitBox::player(glam::Vec2::new(pixel_x(2), y));
        // Enemy whose right edge just reaches into the inset zone
        let graze = HitBox::enemy(glam::Vec2::new(pixel_x(2) - TILE_WIDTH + 10.0, y));
        assert!(!player_box.overlaps(&graze));
        // A little further in and it hits
        let hit = HitBox::enemy(glam::Vec2::new(pixel_x(2) - TILE_WIDTH + 30.0, y));
        assert!(player_box.overlaps(&hit));
    }

    #[test]
    fn test_multiple_overlaps_single_pending_reset() {
        let mut state = GameState::new(5);
        // Two enemies share row 3; stack both on the player
        assert_eq!(state.enemies[0].row, 3);
        assert_eq!(state.enemies[1].row, 3);
        place_enemy(&mut state, 0, 180.0);
        place_enemy(&mut state, 1, 220.0);
        for i in 2..state.enemies.len() {
            place_enemy(&mut state, i, -1000.0);
        }
        move_player_to(&mut state, 2, 3);

        check_collisions(&mut state);

        // Both enemies matched; the lock still holds exactly one deadline
        assert_eq!(
            state.player.phase,
            PlayerPhase::Locked {
                reason: crate::sim::state::LockReason::Defeat,
                until: state.config.lock_duration
            }
        );
    }
}
