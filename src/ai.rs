/// Enemy behaviour, keyed on `EnemyKind`.
///
/// Kinds differ only in a handful of parameters, kept in the tables below,
/// plus one dispatch rule: bosses chase the player instead of wandering.

use rand::Rng;

use crate::config::GameConfig;
use crate::entities::{Body, Enemy, EnemyKind, Facing, Owner, Platform, Projectile};
use crate::level::EnemySpawn;
use crate::physics::{step_body, PhysicsParams};

const ENEMY_WIDTH: f32 = 40.0;
const ENEMY_HEIGHT: f32 = 60.0;
const WANDER_SPEEDS: [f32; 4] = [-1.5, -1.0, 1.0, 1.5];
const BOSS_CHASE_SPEED: f32 = 2.0;

// ── Kind tables ───────────────────────────────────────────────────────────────

pub fn health_pool(kind: EnemyKind) -> u32 {
    match kind {
        EnemyKind::Normal => 50,
        EnemyKind::Shooter => 70,
        EnemyKind::Boss => 300,
    }
}

/// Score awarded when an enemy of this kind is shot down.
pub fn score_for(kind: EnemyKind) -> u32 {
    match kind {
        EnemyKind::Normal | EnemyKind::Shooter => 50,
        EnemyKind::Boss => 500,
    }
}

/// Frames between shots, or `None` for kinds that never fire.
pub fn fire_cooldown(kind: EnemyKind) -> Option<u32> {
    match kind {
        EnemyKind::Normal => None,
        EnemyKind::Shooter => Some(90),
        EnemyKind::Boss => Some(45),
    }
}

fn random_wander(rng: &mut impl Rng) -> (f32, u32) {
    let speed = WANDER_SPEEDS[rng.gen_range(0..WANDER_SPEEDS.len())];
    (speed, rng.gen_range(30..=90))
}

fn facing_of(speed: f32) -> Facing {
    if speed < 0.0 {
        Facing::Left
    } else {
        Facing::Right
    }
}

// ── Spawning ──────────────────────────────────────────────────────────────────

pub fn spawn_enemy(spawn: &EnemySpawn, rng: &mut impl Rng) -> Enemy {
    let (speed, move_timer) = random_wander(rng);
    let health = health_pool(spawn.kind);
    Enemy {
        body: Body::at(spawn.x, spawn.y, ENEMY_WIDTH, ENEMY_HEIGHT),
        kind: spawn.kind,
        health,
        max_health: health,
        speed,
        facing: if rng.gen_bool(0.5) { Facing::Left } else { Facing::Right },
        move_timer,
        shoot_cooldown: rng.gen_range(60..=120),
        hurt_timer: 0,
    }
}

// ── Per-frame update ──────────────────────────────────────────────────────────

/// Move one enemy for one frame.  Returns `None` if it fell out of the world.
pub fn update_enemy(
    enemy: &Enemy,
    platforms: &[Platform],
    player_x: f32,
    params: &PhysicsParams,
    rng: &mut impl Rng,
) -> Option<Enemy> {
    let mut e = enemy.clone();

    e.move_timer = e.move_timer.saturating_sub(1);
    if e.move_timer == 0 {
        let (speed, timer) = random_wander(rng);
        e.speed = speed;
        e.move_timer = timer;
        e.facing = facing_of(speed);
    }

    if e.kind == EnemyKind::Boss {
        e.speed = if player_x < e.body.x {
            -BOSS_CHASE_SPEED
        } else {
            BOSS_CHASE_SPEED
        };
        e.facing = facing_of(e.speed);
    }

    e.body.vel_x = e.speed;
    let outcome = step_body(&e.body, platforms, params);
    if outcome.fell {
        return None;
    }
    e.body = outcome.body;
    if outcome.blocked.is_some() {
        e.speed = -e.speed;
        e.facing = facing_of(e.speed);
    }

    e.shoot_cooldown = e.shoot_cooldown.saturating_sub(1);
    e.hurt_timer = e.hurt_timer.saturating_sub(1);
    Some(e)
}

/// Roll for an aimed shot at the player.  Returns the enemy with its cooldown
/// rearmed and the new projectile, or `None` if it holds fire this frame.
pub fn try_fire(
    enemy: &Enemy,
    target: &Body,
    config: &GameConfig,
    rng: &mut impl Rng,
) -> Option<(Enemy, Projectile)> {
    let cooldown = fire_cooldown(enemy.kind)?;
    if !rng.gen_bool(config.combat.enemy_fire_chance) || enemy.shoot_cooldown > 0 {
        return None;
    }

    let dx = target.x - enemy.body.x;
    let dy = target.y - enemy.body.y;
    let dist = (dx * dx + dy * dy).sqrt().max(1.0);
    let speed = config.combat.enemy_shot_speed;
    let (cx, cy) = enemy.body.rect().center();

    let projectile = Projectile {
        x: cx,
        y: cy,
        vel_x: speed * dx / dist,
        vel_y: speed * dy / dist,
        radius: config.player.projectile_radius,
        owner: Owner::Enemy,
    };
    let fired = Enemy {
        shoot_cooldown: cooldown,
        ..enemy.clone()
    };
    Some((fired, projectile))
}
