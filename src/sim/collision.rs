//! Collision detection
//!
//! Discrete per-frame overlap tests recomputed from current positions.
//! Player and bullets are circles, enemies are fixed-size squares anchored at
//! their position, homer blasts are circles centered on the homer.

use glam::Vec2;

use super::state::{Bullet, Enemy, EnemyState, Player};
use crate::consts::*;

/// Two circles touch or intersect
#[inline]
pub fn circles_overlap(a: Vec2, radius_a: f32, b: Vec2, radius_b: f32) -> bool {
    let reach = radius_a + radius_b;
    a.distance_squared(b) <= reach * reach
}

/// True if any bullet touches the player
///
/// Several simultaneous hits still count as one.
pub fn player_bullet_collision(player: &Player, bullets: &[Bullet]) -> bool {
    bullets
        .iter()
        .any(|b| circles_overlap(player.pos, PLAYER_RADIUS, b.pos, BULLET_RADIUS))
}

/// Indices of every enemy whose footprint touches the player
pub fn player_enemy_collisions(player: &Player, enemies: &[Enemy]) -> Vec<usize> {
    enemies
        .iter()
        .enumerate()
        .filter(|(_, e)| e.footprint().overlaps_circle(player.pos, PLAYER_RADIUS))
        .map(|(i, _)| i)
        .collect()
}

/// True if the player is inside the blast of any armed homer
pub fn player_blast_collision(player: &Player, enemies: &[Enemy], blast_radius: f32) -> bool {
    enemies
        .iter()
        .filter(|e| e.state == EnemyState::Destruct)
        .any(|e| circles_overlap(player.pos, PLAYER_RADIUS, e.pos, blast_radius))
}

/// A pair of colliding enemies, `first < second`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnemyPair {
    pub first: usize,
    pub second: usize,
}

impl EnemyPair {
    pub fn indices(&self) -> [usize; 2] {
        [self.first, self.second]
    }
}

/// Every overlapping pair among live and reloading enemies
///
/// Armed homers and enemies already dead this frame do not take part.
pub fn enemy_enemy_collisions(enemies: &[Enemy]) -> Vec<EnemyPair> {
    let mut pairs = Vec::new();
    for (i, a) in enemies.iter().enumerate() {
        if !takes_part(a) {
            continue;
        }
        let rect_a = a.footprint();
        for (j, b) in enemies.iter().enumerate().skip(i + 1) {
            if takes_part(b) && rect_a.overlaps(&b.footprint()) {
                pairs.push(EnemyPair {
                    first: i,
                    second: j,
                });
            }
        }
    }
    pairs
}

fn takes_part(enemy: &Enemy) -> bool {
    matches!(enemy.state, EnemyState::Live | EnemyState::Reloading)
}

/// Flattened indices of colliding pairs (an enemy may appear more than once)
pub fn flatten_pairs(pairs: &[EnemyPair]) -> Vec<usize> {
    pairs.iter().flat_map(EnemyPair::indices).collect()
}
