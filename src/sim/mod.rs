//! Simulation module
//!
//! All gameplay logic lives here. No rendering, audio or platform code:
//! - One step per display frame
//! - Randomness only through the injected [`RandomSource`]
//! - Enemies and bullets kept in spawn order

pub mod behavior;
pub mod collision;
pub mod rect;
pub mod rng;
pub mod spawn;
pub mod state;
pub mod tick;

pub use behavior::{FrameContext, update_enemy};
pub use collision::{
    EnemyPair, enemy_enemy_collisions, flatten_pairs, player_blast_collision,
    player_bullet_collision, player_enemy_collisions,
};
pub use rect::Rect;
pub use rng::{RandomSource, ScriptedRng, SimRng};
pub use spawn::{create_bullet, create_enemy, create_world};
pub use state::{
    Behavior, Bullet, Enemy, EnemyKind, EnemyState, GameEvent, GameState, LifeState, Player,
    Rifle, Trail, World, WorldState,
};
pub use tick::{TickInput, advance_bullets, tick};
