//! Demo autopilot for headless runs
//!
//! Watches the snapshot and taps the player away from the nearest threat.
//! Not clever, just enough to keep a demo run alive for a while.

use glam::Vec2;

use crate::consts::*;
use crate::presentation::Snapshot;
use crate::sim::EnemyState;

/// Threats closer than this trigger an evasive tap
const DANGER_RADIUS: f32 = 90.0;
/// Evasive taps land this far from the current position
const HOP_DISTANCE: f32 = 160.0;
/// Frames between taps
const TAP_COOLDOWN: u32 = 20;

/// Tap-to-dodge bot
#[derive(Debug, Clone, Default)]
pub struct Autopilot {
    cooldown: u32,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tap position for this frame, if the bot wants to move
    pub fn next_tap(&mut self, snapshot: &Snapshot) -> Option<Vec2> {
        if snapshot.is_game_over() {
            return None;
        }
        if self.cooldown > 0 {
            self.cooldown -= 1;
            return None;
        }

        let player = snapshot.player.pos;
        let threat = nearest_threat(snapshot, player)?;
        if threat.distance(player) > DANGER_RADIUS {
            return None;
        }

        let away = (player - threat).try_normalize().unwrap_or(Vec2::Y);
        let target = clamp_to_field(player + away * HOP_DISTANCE);
        self.cooldown = TAP_COOLDOWN;
        log::debug!("Autopilot dodging {} -> {}", threat, target);
        Some(target)
    }
}

fn nearest_threat(snapshot: &Snapshot, player: Vec2) -> Option<Vec2> {
    let bullets = snapshot.bullets.iter().map(|b| b.pos);
    // Reloading enemies are harmless to touch
    let enemies = snapshot
        .enemies
        .iter()
        .filter(|e| e.state != EnemyState::Reloading)
        .map(|e| e.pos + Vec2::splat(ENEMY_SIZE / 2.0));

    bullets.chain(enemies).min_by(|a, b| {
        a.distance_squared(player)
            .partial_cmp(&b.distance_squared(player))
            .unwrap_or(std::cmp::Ordering::Equal)
    })
}

fn clamp_to_field(pos: Vec2) -> Vec2 {
    let margin = Vec2::splat(SPAWN_MARGIN);
    pos.clamp(margin, Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT) - margin)
}
