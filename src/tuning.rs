//! Data-driven game balance
//!
//! Everything that shapes difficulty lives in [`Tuning`]. The simulation reads
//! it but never mutates it; a run is configured once at construction.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::consts::*;
use crate::sim::EnemyKind;
use crate::sim::rect::Rect;

/// Gameplay balance knobs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Enemy collection capacity
    pub max_enemies: usize,
    /// Bullet collection capacity (shooters hold fire while full)
    pub max_bullets: usize,
    /// Shields the player starts with
    pub initial_shields: i32,

    /// Bullet speed (pixels per frame)
    pub bullet_speed: f32,
    /// Dasher speed while committed to a dash (pixels per frame)
    pub dasher_speed: f32,
    /// Homer pursuit speed (pixels per frame)
    pub homing_speed: f32,

    /// Frames between shots for a freshly spawned shooter
    pub initial_fire_rate: u64,
    /// Floor for the fire rate ramp (smallest frame gap between shots)
    pub fastest_fire_rate: u64,
    /// Frames between each one-frame fire rate speed-up
    pub fire_rate_rampup_interval: u64,
    /// Shots per magazine before a shooter reloads
    pub shots_per_round: u32,
    /// Reload cooldown and homer fuse duration (seconds)
    pub reload_seconds: f32,

    /// Homer arms itself when this close to the player
    pub blast_trigger_distance: f32,
    /// Radius of the homer explosion while armed
    pub blast_radius: f32,

    /// Positions remembered per enemy for trail rendering
    pub trail_length: usize,

    /// Score gained per running frame
    pub score_per_frame: f32,
    /// Score gained per pair of enemies that crash into each other
    pub self_kill_bonus: f32,

    /// Seconds between spawns while enemies are present
    pub spawn_interval_seconds: u64,
    /// Seconds between spawns while the field is empty
    pub empty_spawn_interval_seconds: u64,

    /// Dashers stop and reload once their footprint leaves this area
    pub dasher_bounds: Rect,
    /// Bullets outside this area are dropped
    pub bullet_bounds: Rect,

    /// Enemy colors, picked uniformly at spawn
    pub palette: [Color; 3],
    /// Enemy types cycled through by spawn index
    pub spawn_order: Vec<EnemyKind>,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            max_enemies: 4,
            max_bullets: 100,
            initial_shields: 3,

            bullet_speed: 5.0,
            dasher_speed: 8.0,
            homing_speed: 1.5,

            initial_fire_rate: 60,
            fastest_fire_rate: 20,
            fire_rate_rampup_interval: FRAME_RATE * 10,
            shots_per_round: 3,
            reload_seconds: 3.0,

            blast_trigger_distance: 80.0,
            blast_radius: 100.0,

            trail_length: 10,

            score_per_frame: 0.2,
            self_kill_bonus: 50.0,

            spawn_interval_seconds: 5,
            empty_spawn_interval_seconds: 1,

            dasher_bounds: Rect::new(10.0, 10.0, SCREEN_WIDTH - 20.0, SCREEN_HEIGHT - 20.0),
            bullet_bounds: Rect::new(0.0, 0.0, SCREEN_WIDTH, SCREEN_HEIGHT),

            palette: [Color::DARKGREEN, Color::BLUE, Color::VIOLET],
            spawn_order: vec![
                EnemyKind::Shooter,
                EnemyKind::Dasher,
                EnemyKind::Homing,
                EnemyKind::Dasher,
            ],
        }
    }
}

impl Tuning {
    /// Parse a JSON tuning document; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        let checks = [
            (self.spawn_order.is_empty(), "spawn_order must not be empty"),
            (self.max_enemies == 0, "max_enemies must be > 0"),
            (self.max_bullets == 0, "max_bullets must be > 0"),
            (self.initial_fire_rate == 0, "initial_fire_rate must be > 0"),
            (self.fastest_fire_rate == 0, "fastest_fire_rate must be > 0"),
            (
                self.fire_rate_rampup_interval == 0,
                "fire_rate_rampup_interval must be > 0",
            ),
            (self.shots_per_round == 0, "shots_per_round must be > 0"),
            (self.trail_length == 0, "trail_length must be > 0"),
            (
                self.spawn_interval_seconds == 0 || self.empty_spawn_interval_seconds == 0,
                "spawn intervals must be > 0",
            ),
            (
                !self.reload_seconds.is_finite() || self.reload_seconds <= 0.0,
                "reload_seconds must be positive",
            ),
        ];

        match checks.into_iter().find(|(failed, _)| *failed) {
            Some((_, reason)) => {
                log::warn!("Rejected tuning: {}", reason);
                Err(TuningError::Invalid(reason))
            }
            None => Ok(()),
        }
    }

    /// Enemy type for the given spawn index (cycles through `spawn_order`)
    pub fn spawn_kind(&self, spawn_index: usize) -> EnemyKind {
        self.spawn_order[spawn_index % self.spawn_order.len()]
    }

    /// Frames between spawn checks for the current enemy count
    pub fn spawn_interval_frames(&self, enemy_count: usize) -> u64 {
        let seconds = if enemy_count == 0 {
            self.empty_spawn_interval_seconds
        } else {
            self.spawn_interval_seconds
        };
        FRAME_RATE * seconds
    }
}

/// Failure to load a tuning document
#[derive(Debug)]
pub enum TuningError {
    /// Not valid JSON for [`Tuning`]
    Parse(serde_json::Error),
    /// Parsed, but a value is out of range
    Invalid(&'static str),
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuningError::Parse(err) => write!(f, "malformed tuning: {}", err),
            TuningError::Invalid(reason) => write!(f, "invalid tuning: {}", reason),
        }
    }
}

impl std::error::Error for TuningError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TuningError::Parse(err) => Some(err),
            TuningError::Invalid(_) => None,
        }
    }
}

impl From<serde_json::Error> for TuningError {
    fn from(err: serde_json::Error) -> Self {
        TuningError::Parse(err)
    }
}
