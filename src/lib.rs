//! Dodge Machina - a bullet-hell dodge arcade game
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (entities, collisions, enemy behavior, game loop)
//! - `tuning`: Data-driven game balance
//! - `presentation`: Read-only snapshot and HUD values for a renderer
//! - `autopilot`: Simple dodging bot for the headless runner

pub mod autopilot;
pub mod color;
pub mod presentation;
pub mod sim;
pub mod tuning;

pub use color::Color;
pub use tuning::{Tuning, TuningError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Display refresh the simulation is stepped at (frames per second)
    pub const FRAME_RATE: u64 = 60;
    /// Nominal frame time (seconds)
    pub const SIM_DT: f32 = 1.0 / FRAME_RATE as f32;

    /// Playfield dimensions (pixels, origin at top-left, y grows downward)
    pub const SCREEN_WIDTH: f32 = 600.0;
    pub const SCREEN_HEIGHT: f32 = 900.0;

    /// Player spawns this far above the bottom edge
    pub const PLAYER_SPAWN_OFFSET: f32 = 200.0;
    /// Player hit circle
    pub const PLAYER_RADIUS: f32 = 15.0;
    /// Bullet hit circle
    pub const BULLET_RADIUS: f32 = 5.0;
    /// Enemy footprint is a square anchored at the enemy position (top-left corner)
    pub const ENEMY_SIZE: f32 = 20.0;

    /// Enemies never spawn closer than this to a screen edge
    pub const SPAWN_MARGIN: f32 = 50.0;
}

/// Angle (radians) of the vector pointing from `b` to `a`
#[inline]
pub fn angle(a: Vec2, b: Vec2) -> f32 {
    (a.y - b.y).atan2(a.x - b.x)
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    (b - a).length()
}

/// Velocity of magnitude `speed` heading from `from` toward `target`
#[inline]
pub fn homing_velocity(target: Vec2, from: Vec2, speed: f32) -> Vec2 {
    let theta = angle(target, from);
    Vec2::new(theta.cos(), theta.sin()) * speed
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_angle_points_from_b_to_a() {
        let origin = Vec2::ZERO;
        assert!((angle(Vec2::new(10.0, 0.0), origin)).abs() < 1e-6);
        assert!((angle(Vec2::new(0.0, 10.0), origin) - FRAC_PI_2).abs() < 1e-6);
        assert!((angle(Vec2::new(-10.0, 0.0), origin) - PI).abs() < 1e-6);
        // Swapping the arguments flips the direction
        assert!((angle(origin, Vec2::new(0.0, 10.0)) + FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn test_distance() {
        assert!((distance(Vec2::new(1.0, 2.0), Vec2::new(4.0, 6.0)) - 5.0).abs() < 1e-6);
        assert_eq!(distance(Vec2::new(3.0, 3.0), Vec2::new(3.0, 3.0)), 0.0);
    }

    #[test]
    fn test_homing_velocity_has_requested_speed() {
        let vel = homing_velocity(Vec2::new(100.0, 50.0), Vec2::new(-20.0, 300.0), 7.0);
        assert!((vel.length() - 7.0).abs() < 1e-4);
        // Heads toward the target
        assert!(vel.x > 0.0 && vel.y < 0.0);
    }

    #[test]
    fn test_homing_velocity_on_target_points_along_x() {
        // atan2(0, 0) is 0, so a coincident target yields a +x heading
        let vel = homing_velocity(Vec2::new(5.0, 5.0), Vec2::new(5.0, 5.0), 3.0);
        assert!((vel - Vec2::new(3.0, 0.0)).length() < 1e-6);
    }
}
