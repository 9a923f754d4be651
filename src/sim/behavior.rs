//! Enemy behavior state machine
//!
//! `Live → Reloading → Live` for shooters and dashers, `Live → Destruct → Dead`
//! for homers. [`update_enemy`] ticks the reload timer and dispatches to one
//! transition function per enemy type; only enemies that acted this frame
//! record a trail point and move.

use glam::Vec2;

use super::spawn::create_bullet;
use super::state::{Behavior, Bullet, Enemy, EnemyState, GameEvent, Player, Rifle};
use crate::tuning::Tuning;
use crate::{distance, homing_velocity};

/// Per-frame inputs shared by every enemy update
#[derive(Debug, Clone, Copy)]
pub struct FrameContext<'a> {
    /// Frame counter for cadence checks
    pub frame: u64,
    /// Elapsed wall time (seconds), drives the reload timer only
    pub dt: f32,
    pub player: &'a Player,
    pub tuning: &'a Tuning,
}

/// Advance one enemy by one frame
///
/// Shooters may push onto `bullets`; capacity is respected.
pub fn update_enemy(
    enemy: &mut Enemy,
    ctx: &FrameContext,
    bullets: &mut Vec<Bullet>,
    events: &mut Vec<GameEvent>,
) {
    if enemy.is_dead() {
        return;
    }

    tick_reload_timer(enemy, ctx.dt, events);

    // Reloading, armed, or just detonated
    if enemy.state != EnemyState::Live {
        return;
    }

    match enemy.behavior {
        Behavior::Shooter(rifle) => {
            enemy.behavior = Behavior::Shooter(update_shooter(enemy, rifle, ctx, bullets, events));
        }
        Behavior::Dasher => update_dasher(enemy, ctx),
        Behavior::Homing => update_homer(enemy, ctx, events),
    }

    enemy.trail.record(enemy.pos);
    enemy.pos += enemy.vel;
}

/// Count the timer down while it is non-negative and fire the expiry transition
fn tick_reload_timer(enemy: &mut Enemy, dt: f32, events: &mut Vec<GameEvent>) {
    if enemy.reload_timer < 0.0 {
        return;
    }
    enemy.reload_timer -= dt;
    if enemy.reload_timer > 0.0 {
        return;
    }

    match enemy.state {
        EnemyState::Reloading => {
            log::debug!("{:?} at {} back in action", enemy.kind(), enemy.pos);
            enemy.state = EnemyState::Live;
        }
        EnemyState::Destruct => {
            log::debug!("Homer detonated at {}", enemy.pos);
            enemy.state = EnemyState::Dead;
            events.push(GameEvent::HomerDetonated);
        }
        EnemyState::Live | EnemyState::Dead => {}
    }
}

fn start_reload(enemy: &mut Enemy, tuning: &Tuning) {
    enemy.state = EnemyState::Reloading;
    enemy.reload_timer = tuning.reload_seconds;
}

/// Fire on cadence, reload after a full magazine, speed up over time
fn update_shooter(
    enemy: &mut Enemy,
    mut rifle: Rifle,
    ctx: &FrameContext,
    bullets: &mut Vec<Bullet>,
    events: &mut Vec<GameEvent>,
) -> Rifle {
    let tuning = ctx.tuning;

    if ctx.frame == 0 || ctx.frame % rifle.fire_rate == 0 {
        if bullets.len() < tuning.max_bullets {
            rifle.shots_fired += 1;
            bullets.push(create_bullet(enemy, ctx.player, tuning));
            events.push(GameEvent::ShotFired);
        }
        if rifle.shots_fired >= rifle.shots_per_round {
            rifle.shots_fired = 0;
            start_reload(enemy, tuning);
        }
    }

    if ctx.frame % tuning.fire_rate_rampup_interval == 0 {
        rifle.fire_rate = rifle
            .fire_rate
            .saturating_sub(1)
            .max(tuning.fastest_fire_rate);
    }

    rifle
}

/// Commit to a heading when idle; stop and reload once outside the dash area
fn update_dasher(enemy: &mut Enemy, ctx: &FrameContext) {
    if enemy.vel == Vec2::ZERO {
        enemy.vel = homing_velocity(ctx.player.pos, enemy.pos, ctx.tuning.dasher_speed);
    } else if !ctx.tuning.dasher_bounds.overlaps(&enemy.footprint()) {
        enemy.vel = Vec2::ZERO;
        start_reload(enemy, ctx.tuning);
    }
}

/// Chase the player every frame; arm the fuse when close enough
fn update_homer(enemy: &mut Enemy, ctx: &FrameContext, events: &mut Vec<GameEvent>) {
    enemy.vel = homing_velocity(ctx.player.pos, enemy.pos, ctx.tuning.homing_speed);

    if distance(enemy.pos, ctx.player.pos) <= ctx.tuning.blast_trigger_distance {
        enemy.state = EnemyState::Destruct;
        enemy.reload_timer = ctx.tuning.reload_seconds;
        enemy.trail.clear();
        events.push(GameEvent::HomerArmed);
    }
}
