//! Read-only view of a run for renderers
//!
//! The simulation never draws. A renderer takes a [`Snapshot`] once per frame,
//! after `tick`, and derives HUD text and overlays from it with the helpers
//! below.

use glam::Vec2;
use serde::Serialize;

use crate::color::Color;
use crate::sim::{
    EnemyKind, EnemyState, GameState, LifeState, RandomSource, World, WorldState,
};
use crate::tuning::Tuning;

/// Banner shown once the player has died
pub const GAME_OVER_BANNER: &str = "You Died!";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerView {
    pub pos: Vec2,
    pub color: Color,
    pub state: LifeState,
    pub shield: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnemyView {
    pub pos: Vec2,
    pub vel: Vec2,
    pub color: Color,
    pub kind: EnemyKind,
    pub state: EnemyState,
    pub reload_timer: f32,
    /// Oldest to newest
    pub trail: Vec<Vec2>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BulletView {
    pub pos: Vec2,
    pub color: Color,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub world_state: WorldState,
    pub frame: u64,
    pub score: f32,
    pub player: PlayerView,
    pub enemies: Vec<EnemyView>,
    pub bullets: Vec<BulletView>,
}

impl Snapshot {
    pub fn capture(world: &World, frame: u64, score: f32) -> Self {
        let player = &world.player;
        Self {
            world_state: world.state,
            frame,
            score,
            player: PlayerView {
                pos: player.pos,
                color: player.color,
                state: player.state,
                shield: player.shield,
            },
            enemies: world
                .enemies
                .iter()
                .map(|e| EnemyView {
                    pos: e.pos,
                    vel: e.vel,
                    color: e.color,
                    kind: e.kind(),
                    state: e.state,
                    reload_timer: e.reload_timer,
                    trail: e.trail.iter().copied().collect(),
                })
                .collect(),
            bullets: world
                .bullets
                .iter()
                .map(|b| BulletView {
                    pos: b.pos,
                    color: b.color,
                })
                .collect(),
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.world_state == WorldState::GameOver
    }
}

impl<R: RandomSource> GameState<R> {
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.world, self.frame, self.score)
    }
}

/// HUD strings for the current frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hud {
    pub score: String,
    pub shields: String,
    pub banner: Option<&'static str>,
}

impl Hud {
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        Self {
            score: format!("Score: {:02.0}", snapshot.score),
            // The transient negative shield is never shown
            shields: format!("Shields: {}", snapshot.player.shield.max(0)),
            banner: (snapshot.player.state == LifeState::Dead).then_some(GAME_OVER_BANNER),
        }
    }
}

/// Radius of the growing blast ring around an armed homer
///
/// Grows from 0 to the full blast radius as the fuse burns down.
pub fn blast_indicator_radius(enemy: &EnemyView, tuning: &Tuning) -> Option<f32> {
    if enemy.kind != EnemyKind::Homing || enemy.reload_timer <= 0.0 {
        return None;
    }
    let progress = 1.0 - enemy.reload_timer / tuning.reload_seconds;
    Some(progress.clamp(0.0, 1.0) * tuning.blast_radius)
}

/// Outline color for an enemy; reloading enemies flicker red
pub fn enemy_draw_color(enemy: &EnemyView, rng: &mut impl RandomSource) -> Color {
    if enemy.state == EnemyState::Reloading && rng.coin() {
        Color::RED
    } else {
        enemy.color
    }
}

/// Trails are drawn only behind live enemies moving diagonally
pub fn trail_visible(enemy: &EnemyView) -> bool {
    enemy.state == EnemyState::Live && enemy.vel.x != 0.0 && enemy.vel.y != 0.0
}
