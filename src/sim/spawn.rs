//! Entity factories
//!
//! Enemy types cycle through the tuning's spawn order. An enemy spawned into
//! an empty field drops in above the player; otherwise shooters and dashers
//! hug a side edge and homers appear anywhere inside the margins.

use glam::Vec2;

use super::rng::RandomSource;
use super::state::{Behavior, Bullet, Enemy, EnemyKind, Player, Rifle, World, WorldState};
use crate::color::Color;
use crate::consts::*;
use crate::homing_velocity;
use crate::tuning::Tuning;

/// Fresh world: player at the spawn point with full shields, no enemies
pub fn create_world(tuning: &Tuning) -> World {
    World {
        state: WorldState::Running,
        player: Player::new(tuning.initial_shields),
        enemies: Vec::with_capacity(tuning.max_enemies),
        bullets: Vec::with_capacity(tuning.max_bullets),
    }
}

/// Build the enemy for `spawn_index` (the enemy count at spawn time)
pub fn create_enemy(spawn_index: usize, tuning: &Tuning, rng: &mut impl RandomSource) -> Enemy {
    let kind = tuning.spawn_kind(spawn_index);
    let pos = spawn_position(spawn_index, kind, rng);
    let color = tuning.palette[rng.range_inclusive(0, tuning.palette.len() as i32 - 1) as usize];

    let behavior = match kind {
        EnemyKind::Shooter => Behavior::Shooter(Rifle {
            fire_rate: tuning.initial_fire_rate,
            shots_fired: 0,
            shots_per_round: tuning.shots_per_round,
        }),
        EnemyKind::Dasher => Behavior::Dasher,
        EnemyKind::Homing => Behavior::Homing,
    };

    Enemy::new(pos, color, behavior, tuning.trail_length)
}

fn spawn_position(spawn_index: usize, kind: EnemyKind, rng: &mut impl RandomSource) -> Vec2 {
    let max_x = (SCREEN_WIDTH - SPAWN_MARGIN) as i32;
    let max_y = (SCREEN_HEIGHT - SPAWN_MARGIN) as i32;
    let margin = SPAWN_MARGIN as i32;

    if spawn_index == 0 {
        let x = SCREEN_WIDTH / 2.0 + rng.range_inclusive(-100, 100) as f32;
        let y = 100.0 + rng.range_inclusive(-25, 25) as f32;
        return Vec2::new(x, y);
    }

    match kind {
        EnemyKind::Shooter | EnemyKind::Dasher => {
            let x = if rng.coin() {
                SPAWN_MARGIN
            } else {
                SCREEN_WIDTH - SPAWN_MARGIN
            };
            let y = rng.range_inclusive(margin, max_y) as f32;
            Vec2::new(x, y)
        }
        EnemyKind::Homing => {
            let x = rng.range_inclusive(margin, max_x) as f32;
            let y = rng.range_inclusive(margin, max_y) as f32;
            Vec2::new(x, y)
        }
    }
}

/// Bullet leaving `enemy` toward where the player is right now
pub fn create_bullet(enemy: &Enemy, player: &Player, tuning: &Tuning) -> Bullet {
    Bullet {
        pos: enemy.pos,
        color: Color::BLACK,
        vel: homing_velocity(player.pos, enemy.pos, tuning.bullet_speed),
    }
}
