//! Per-frame simulation step
//!
//! Core game loop. Order within a frame matters and is fixed:
//! counters, tap handling, player hits, game-over check, enemy crashes,
//! spawning and enemy updates, dead-enemy cleanup, bullet movement.

use glam::Vec2;

use super::behavior::{FrameContext, update_enemy};
use super::collision::{
    enemy_enemy_collisions, player_blast_collision, player_bullet_collision,
    player_enemy_collisions,
};
use super::rect::Rect;
use super::rng::RandomSource;
use super::spawn::create_enemy;
use super::state::{Bullet, EnemyState, GameEvent, GameState, LifeState, World, WorldState};
use crate::tuning::Tuning;

/// Input for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// Screen position of a tap gesture this frame
    pub tap: Option<Vec2>,
}

impl TickInput {
    pub fn tap_at(pos: Vec2) -> Self {
        Self { tap: Some(pos) }
    }
}

/// Advance the game by one frame; `dt` is the elapsed wall time in seconds
pub fn tick<R: RandomSource>(state: &mut GameState<R>, input: &TickInput, dt: f32) {
    state.events.clear();

    if state.world.is_running() {
        state.frame += 1;
        state.score += state.tuning().score_per_frame;
    }

    if let Some(tap) = input.tap {
        if state.world.state == WorldState::GameOver {
            state.reset();
        }
        if state.world.player.is_alive() {
            state.world.player.pos = tap;
            state.events.push(GameEvent::PlayerTeleported { to: tap });
        }
    }

    let frame = state.frame;
    let mut events = std::mem::take(&mut state.events);
    let (world, tuning, rng) = state.split_mut();

    resolve_player_hits(world, tuning, &mut events);
    let bonus = resolve_enemy_crashes(world, tuning, &mut events);

    if world.is_running() {
        maybe_spawn(world, frame, tuning, rng, &mut events);

        let ctx = FrameContext {
            frame,
            dt,
            player: &world.player,
            tuning,
        };
        for enemy in world.enemies.iter_mut() {
            update_enemy(enemy, &ctx, &mut world.bullets, &mut events);
        }
    }

    world.enemies.retain(|e| !e.is_dead());
    advance_bullets(&mut world.bullets, &tuning.bullet_bounds);

    state.score += bonus;
    state.events = events;
}

/// Bullet, blast and ram damage, then the game-over transition
///
/// Each source costs at most one shield per frame except rams, which cost one
/// per enemy. Nothing lands on a player that is already dead.
fn resolve_player_hits(world: &mut World, tuning: &Tuning, events: &mut Vec<GameEvent>) {
    if !world.player.is_alive() {
        return;
    }

    let mut hits = 0;
    if player_bullet_collision(&world.player, &world.bullets) {
        hits += 1;
    }
    if player_blast_collision(&world.player, &world.enemies, tuning.blast_radius) {
        hits += 1;
    }

    for idx in player_enemy_collisions(&world.player, &world.enemies) {
        let Some(enemy) = world.enemies.get_mut(idx) else {
            continue;
        };
        // Reloading enemies are vulnerable; anything else hurts
        if enemy.state == EnemyState::Reloading {
            enemy.kill();
            events.push(GameEvent::EnemyRammed);
        } else {
            hits += 1;
        }
    }

    for _ in 0..hits {
        world.player.shield -= 1;
        events.push(GameEvent::ShieldLost);
    }

    if world.player.shield < 0 {
        log::info!("Player destroyed at {}", world.player.pos);
        world.player.state = LifeState::Dead;
        world.state = WorldState::GameOver;
        events.push(GameEvent::GameOver);
    }
}

/// Kill both enemies of every crashed pair; returns the bonus earned
///
/// A pair only pays out if it killed at least one enemy that was still alive.
fn resolve_enemy_crashes(world: &mut World, tuning: &Tuning, events: &mut Vec<GameEvent>) -> f32 {
    let mut bonus = 0.0;
    for pair in enemy_enemy_collisions(&world.enemies) {
        let mut killed = false;
        for idx in pair.indices() {
            if let Some(enemy) = world.enemies.get_mut(idx) {
                killed |= enemy.kill();
            }
        }
        if killed {
            bonus += tuning.self_kill_bonus;
            events.push(GameEvent::EnemiesCollided);
        }
    }
    bonus
}

fn maybe_spawn<R: RandomSource>(
    world: &mut World,
    frame: u64,
    tuning: &Tuning,
    rng: &mut R,
    events: &mut Vec<GameEvent>,
) {
    let count = world.enemies.len();
    if count >= tuning.max_enemies || frame % tuning.spawn_interval_frames(count) != 0 {
        return;
    }

    let enemy = create_enemy(count, tuning, rng);
    log::debug!("Spawned {:?} #{} at {}", enemy.kind(), count, enemy.pos);
    events.push(GameEvent::EnemySpawned { kind: enemy.kind() });
    world.enemies.push(enemy);
}

/// Move every bullet, then drop the ones that left `bounds`
pub fn advance_bullets(bullets: &mut Vec<Bullet>, bounds: &Rect) {
    for bullet in bullets.iter_mut() {
        bullet.pos += bullet.vel;
    }
    bullets.retain(|b| bounds.contains_point(b.pos));
}
