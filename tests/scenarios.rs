//! Whole-frame scenarios driven through `tick`

use glam::Vec2;

use dodge_machina::Color;
use dodge_machina::Tuning;
use dodge_machina::consts::*;
use dodge_machina::sim::{
    Behavior, Bullet, Enemy, EnemyState, GameEvent, GameState, LifeState, Rifle, ScriptedRng,
    TickInput, WorldState, tick,
};

fn quiet_state() -> GameState<ScriptedRng> {
    GameState::with_tuning(Tuning::default(), ScriptedRng::default()).expect("valid tuning")
}

fn idle() -> TickInput {
    TickInput::default()
}

fn bullet_at(pos: Vec2) -> Bullet {
    Bullet {
        pos,
        color: Color::BLACK,
        vel: Vec2::ZERO,
    }
}

fn shooter_at(pos: Vec2, fire_rate: u64, shots_per_round: u32) -> Enemy {
    Enemy::new(
        pos,
        Color::BLUE,
        Behavior::Shooter(Rifle {
            fire_rate,
            shots_fired: 0,
            shots_per_round,
        }),
        10,
    )
}

#[test]
fn shield_zero_survives_and_minus_one_ends_the_game() {
    let mut state = quiet_state();
    state.world.player.shield = 1;
    let on_player = bullet_at(state.world.player.pos);

    state.world.bullets.push(on_player.clone());
    tick(&mut state, &idle(), SIM_DT);
    assert_eq!(state.world.player.shield, 0);
    assert_eq!(state.world.player.state, LifeState::Live);
    assert_eq!(state.world.state, WorldState::Running);

    // Bullet still sits on the player (zero velocity), so the next frame hits again
    tick(&mut state, &idle(), SIM_DT);
    assert_eq!(state.world.player.shield, -1);
    assert_eq!(state.world.player.state, LifeState::Dead);
    assert_eq!(state.world.state, WorldState::GameOver);
    assert!(state.events.contains(&GameEvent::GameOver));

    // Dead players take no more damage
    state.world.bullets.push(on_player);
    for _ in 0..5 {
        tick(&mut state, &idle(), SIM_DT);
    }
    assert_eq!(state.world.player.shield, -1);
    assert!(!state.events.contains(&GameEvent::GameOver));
}

#[test]
fn overlapping_enemies_die_together_for_one_bonus() {
    let mut state = quiet_state();
    let tuning = state.tuning().clone();
    state.world.enemies.push(shooter_at(Vec2::new(100.0, 100.0), 1000, 3));
    state.world.enemies.push(shooter_at(Vec2::new(110.0, 105.0), 1000, 3));

    tick(&mut state, &idle(), SIM_DT);

    assert!(state.world.enemies.is_empty());
    let expected = tuning.score_per_frame + tuning.self_kill_bonus;
    assert!((state.score - expected).abs() < 1e-4, "score {}", state.score);
    assert_eq!(
        state
            .events
            .iter()
            .filter(|e| **e == GameEvent::EnemiesCollided)
            .count(),
        1
    );
}

#[test]
fn pile_up_never_double_counts() {
    let mut state = quiet_state();
    let tuning = state.tuning().clone();
    // Three mutually overlapping enemies: three pairs, but the last pair has
    // no living member left to kill
    for offset in [0.0, 5.0, 10.0] {
        state
            .world
            .enemies
            .push(shooter_at(Vec2::new(200.0 + offset, 200.0), 1000, 3));
    }

    tick(&mut state, &idle(), SIM_DT);

    assert!(state.world.enemies.is_empty());
    let expected = tuning.score_per_frame + 2.0 * tuning.self_kill_bonus;
    assert!((state.score - expected).abs() < 1e-4, "score {}", state.score);
}

#[test]
fn rammed_enemy_cannot_also_crash_for_bonus() {
    let mut state = quiet_state();
    let tuning = state.tuning().clone();
    let p = state.world.player.pos;

    let mut reloading = shooter_at(p + Vec2::new(5.0, -10.0), 1000, 3);
    reloading.state = EnemyState::Reloading;
    reloading.reload_timer = 2.0;
    state.world.enemies.push(reloading);
    // Overlaps the rammed enemy but stays out of the player's reach
    let mut neighbour = shooter_at(p + Vec2::new(20.0, -10.0), 1000, 3);
    neighbour.state = EnemyState::Reloading;
    neighbour.reload_timer = 2.0;
    state.world.enemies.push(neighbour);

    tick(&mut state, &idle(), SIM_DT);

    // First enemy died to the ram; the second survives since its partner was
    // already dead when crashes were checked
    assert_eq!(state.world.enemies.len(), 1);
    assert_eq!(state.world.player.shield, tuning.initial_shields);
    assert!((state.score - tuning.score_per_frame).abs() < 1e-4);
}

#[test]
fn shooter_reloads_after_three_shots() {
    let mut tuning = Tuning::default();
    tuning.shots_per_round = 3;
    let mut state =
        GameState::with_tuning(tuning, ScriptedRng::default()).expect("valid tuning");
    // Far from the player, firing every 10 frames
    state.world.enemies.push(shooter_at(Vec2::new(300.0, 60.0), 10, 3));

    let mut fired = 0;
    while state.world.enemies[0].state == EnemyState::Live {
        tick(&mut state, &idle(), 0.25);
        fired += state
            .events
            .iter()
            .filter(|e| **e == GameEvent::ShotFired)
            .count();
        assert!(state.frame <= 30, "should reload within three firing ticks");
    }
    assert_eq!(fired, 3);
    assert_eq!(state.frame, 30);
    assert_eq!(state.world.enemies[0].state, EnemyState::Reloading);

    // 3.0 s at 0.25 s per frame: the 4th firing tick (frame 40) falls inside the reload
    for _ in 0..11 {
        tick(&mut state, &idle(), 0.25);
        assert!(!state.events.contains(&GameEvent::ShotFired));
    }
    assert_eq!(state.frame, 41);
    assert_eq!(state.world.enemies[0].state, EnemyState::Reloading);

    tick(&mut state, &idle(), 0.25);
    assert_eq!(state.world.enemies[0].state, EnemyState::Live);

    for _ in 0..8 {
        tick(&mut state, &idle(), 0.25);
    }
    assert_eq!(state.frame, 50);
    assert!(state.events.contains(&GameEvent::ShotFired));
}

#[test]
fn armed_homer_explodes_once_and_is_removed() {
    let mut state = quiet_state();
    let tuning = state.tuning().clone();
    let p = state.world.player.pos;
    // Inside the trigger distance and the blast radius, outside ram reach
    state
        .world
        .enemies
        .push(Enemy::new(p + Vec2::new(0.0, -50.0), Color::BLUE, Behavior::Homing, 10));

    // One-second frames: armed on frame 1, fuse burns for reload_seconds
    tick(&mut state, &idle(), 1.0);
    assert_eq!(state.world.enemies[0].state, EnemyState::Destruct);
    assert!(state.events.contains(&GameEvent::HomerArmed));
    assert_eq!(state.world.player.shield, tuning.initial_shields);

    tick(&mut state, &idle(), 1.0);
    tick(&mut state, &idle(), 1.0);
    assert_eq!(state.world.enemies.len(), 1);
    assert_eq!(state.world.player.shield, tuning.initial_shields - 2);

    // Fuse runs out while the player is still next to it
    tick(&mut state, &idle(), 1.0);
    assert!(state.events.contains(&GameEvent::HomerDetonated));
    assert!(!state.events.contains(&GameEvent::HomerArmed));
    assert!(state.world.enemies.is_empty());
    assert_eq!(state.world.player.shield, tuning.initial_shields - 3);

    // No lingering blast afterwards
    tick(&mut state, &idle(), 1.0);
    assert_eq!(state.world.player.shield, tuning.initial_shields - 3);
    assert_eq!(state.world.state, WorldState::Running);
}

#[test]
fn tap_after_game_over_resets_everything() {
    let mut state = quiet_state();
    let tuning = state.tuning().clone();

    for _ in 0..(FRAME_RATE + 10) {
        tick(&mut state, &idle(), SIM_DT);
    }
    assert!(!state.world.enemies.is_empty());

    state.world.player.shield = 0;
    state.world.bullets.push(bullet_at(state.world.player.pos));
    tick(&mut state, &idle(), SIM_DT);
    assert!(state.is_game_over());
    assert!(state.score > 0.0);

    let tap = Vec2::new(120.0, 640.0);
    tick(&mut state, &TickInput::tap_at(tap), SIM_DT);

    assert_eq!(state.world.state, WorldState::Running);
    assert_eq!(state.world.player.state, LifeState::Live);
    assert_eq!(state.world.player.shield, tuning.initial_shields);
    assert_eq!(state.score, 0.0);
    assert_eq!(state.frame, 0);
    // Frame 0 is a spawn frame, so the reset frame drops in a fresh first
    // enemy, which fires its opening shot right away. Old bullets are gone.
    assert_eq!(state.world.enemies.len(), 1);
    let fresh = state.world.enemies[0].pos;
    assert!(state.world.bullets.len() <= 1);
    assert!(
        state
            .world
            .bullets
            .iter()
            .all(|b| b.pos.distance(fresh) <= tuning.bullet_speed + 1e-3)
    );
    // The same tap also moves the new player
    assert_eq!(state.world.player.pos, tap);
    assert!(state.events.contains(&GameEvent::Reset));
}

#[test]
fn tap_while_running_only_teleports() {
    let mut state = quiet_state();
    tick(&mut state, &idle(), SIM_DT);
    let score = state.score;

    tick(&mut state, &TickInput::tap_at(Vec2::new(10.0, 10.0)), SIM_DT);
    assert_eq!(state.frame, 2);
    assert!(state.score > score);
    assert_eq!(state.world.player.pos, Vec2::new(10.0, 10.0));
}

#[test]
fn dead_enemies_are_pruned_in_order() {
    let mut state = quiet_state();
    let xs = [60.0, 160.0, 260.0, 360.0];
    for x in xs {
        state.world.enemies.push(shooter_at(Vec2::new(x, 60.0), 1000, 3));
    }
    state.world.enemies[1].state = EnemyState::Destruct;
    state.world.enemies[1].reload_timer = 0.01;

    tick(&mut state, &idle(), SIM_DT);

    let remaining: Vec<f32> = state.world.enemies.iter().map(|e| e.pos.x).collect();
    assert_eq!(remaining, vec![60.0, 260.0, 360.0]);
    assert!(state.events.contains(&GameEvent::HomerDetonated));
}

#[test]
fn default_game_eventually_fires_at_the_player() {
    let mut state = GameState::new(2024);
    let mut saw_shot = false;
    for _ in 0..(FRAME_RATE * 4) {
        tick(&mut state, &idle(), SIM_DT);
        saw_shot |= state.events.contains(&GameEvent::ShotFired);
    }
    assert!(saw_shot);
    assert!(state.world.bullets.len() <= state.tuning().max_bullets);
    assert!(state.world.enemies.len() <= state.tuning().max_enemies);
}
