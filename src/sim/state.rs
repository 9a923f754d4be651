//! Game state and core simulation types
//!
//! The [`World`] owns every entity; [`GameState`] wraps it with the run
//! counters, the tuning and the random source.

use std::collections::VecDeque;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::rng::{RandomSource, SimRng};
use super::spawn::create_world;
use crate::color::Color;
use crate::consts::*;
use crate::tuning::{Tuning, TuningError};

/// Whether the run is in progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorldState {
    /// Active gameplay
    Running,
    /// Player died; waiting for a tap to restart
    GameOver,
}

/// Player life state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifeState {
    Live,
    Dead,
}

/// Enemy behavior state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyState {
    /// Running its type behavior
    Live,
    /// Inert until the reload timer runs out
    Reloading,
    /// Armed homer counting down to detonation
    Destruct,
    /// Removed at the end of the frame
    Dead,
}

/// Enemy type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnemyKind {
    Shooter,
    Dasher,
    Homing,
}

/// Shooter magazine and cadence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rifle {
    /// Frames between shots (shrinks over time)
    pub fire_rate: u64,
    /// Shots fired in the current magazine
    pub shots_fired: u32,
    /// Magazine size
    pub shots_per_round: u32,
}

/// Per-type behavior data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Behavior {
    /// Fires bullets at the player on a cadence
    Shooter(Rifle),
    /// Locks a heading toward the player and charges until off the field
    Dasher,
    /// Pursues the player and self-destructs when close
    Homing,
}

impl Behavior {
    pub fn kind(&self) -> EnemyKind {
        match self {
            Behavior::Shooter(_) => EnemyKind::Shooter,
            Behavior::Dasher => EnemyKind::Dasher,
            Behavior::Homing => EnemyKind::Homing,
        }
    }
}

/// Fixed-capacity position history, oldest first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trail {
    points: VecDeque<Vec2>,
    capacity: usize,
}

impl Trail {
    pub fn new(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a position, evicting the oldest one when full
    pub fn record(&mut self, pos: Vec2) {
        if self.capacity == 0 {
            return;
        }
        if self.points.len() == self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(pos);
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Oldest to newest
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Vec2> + ExactSizeIterator {
        self.points.iter()
    }

    pub fn newest(&self) -> Option<Vec2> {
        self.points.back().copied()
    }

    pub fn oldest(&self) -> Option<Vec2> {
        self.points.front().copied()
    }
}

/// The player avatar
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub color: Color,
    pub state: LifeState,
    /// Remaining shields; dips below zero only on the frame the player dies
    pub shield: i32,
}

impl Player {
    pub fn new(shields: i32) -> Self {
        Self {
            pos: Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT - PLAYER_SPAWN_OFFSET),
            color: Color::RED,
            state: LifeState::Live,
            shield: shields,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.state == LifeState::Live
    }
}

/// An enemy entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    /// Top-left corner of the footprint
    pub pos: Vec2,
    pub color: Color,
    pub vel: Vec2,
    pub behavior: Behavior,
    pub state: EnemyState,
    /// Seconds left on the reload cooldown or homer fuse
    pub reload_timer: f32,
    pub trail: Trail,
}

impl Enemy {
    pub fn new(pos: Vec2, color: Color, behavior: Behavior, trail_length: usize) -> Self {
        Self {
            pos,
            color,
            vel: Vec2::ZERO,
            behavior,
            state: EnemyState::Live,
            reload_timer: 0.0,
            trail: Trail::new(trail_length),
        }
    }

    pub fn kind(&self) -> EnemyKind {
        self.behavior.kind()
    }

    pub fn footprint(&self) -> Rect {
        Rect::square(self.pos, ENEMY_SIZE)
    }

    pub fn is_dead(&self) -> bool {
        self.state == EnemyState::Dead
    }

    /// Mark dead; returns false if it already was
    pub fn kill(&mut self) -> bool {
        if self.is_dead() {
            return false;
        }
        self.state = EnemyState::Dead;
        true
    }
}

/// An unguided projectile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub pos: Vec2,
    pub color: Color,
    pub vel: Vec2,
}

/// All entities of one run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    pub state: WorldState,
    pub player: Player,
    /// Spawn order
    pub enemies: Vec<Enemy>,
    pub bullets: Vec<Bullet>,
}

impl World {
    pub fn is_running(&self) -> bool {
        self.state == WorldState::Running
    }
}

/// Things that happened during a frame, for audio and effects
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    EnemySpawned { kind: EnemyKind },
    ShotFired,
    /// Player lost one shield
    ShieldLost,
    /// Player rammed a reloading enemy
    EnemyRammed,
    /// Two enemies crashed into each other
    EnemiesCollided,
    /// Homer armed its fuse
    HomerArmed,
    HomerDetonated,
    PlayerTeleported { to: Vec2 },
    GameOver,
    Reset,
}

/// A run: the world plus frame counter, score, tuning and randomness
#[derive(Debug, Clone)]
pub struct GameState<R: RandomSource = SimRng> {
    pub world: World,
    /// Frames advanced while running
    pub frame: u64,
    pub score: f32,
    /// Events emitted by the last tick
    pub events: Vec<GameEvent>,
    tuning: Tuning,
    rng: R,
}

impl GameState<SimRng> {
    /// Default tuning with a seeded random stream
    pub fn new(seed: u64) -> Self {
        Self::build(Tuning::default(), SimRng::new(seed))
    }
}

impl<R: RandomSource> GameState<R> {
    /// Start a run with custom tuning; rejects values `tick` cannot run with
    pub fn with_tuning(tuning: Tuning, rng: R) -> Result<Self, TuningError> {
        tuning.validate()?;
        Ok(Self::build(tuning, rng))
    }

    fn build(tuning: Tuning, rng: R) -> Self {
        Self {
            world: create_world(&tuning),
            frame: 0,
            score: 0.0,
            events: Vec::new(),
            tuning,
            rng,
        }
    }

    /// Start over with a fresh world; tuning and random stream carry on
    pub fn reset(&mut self) {
        log::info!(
            "Resetting run (frame {}, score {:.0})",
            self.frame,
            self.score
        );
        self.world = create_world(&self.tuning);
        self.frame = 0;
        self.score = 0.0;
        self.events.push(GameEvent::Reset);
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Tuning and random source borrowed together with the world
    pub(crate) fn split_mut(&mut self) -> (&mut World, &Tuning, &mut R) {
        (&mut self.world, &self.tuning, &mut self.rng)
    }

    pub fn is_game_over(&self) -> bool {
        self.world.state == WorldState::GameOver
    }
}
