/// Pure game-logic functions: the mode state machine and the per-frame step.
///
/// Every public function takes an immutable reference to the current
/// `GameSession` (and, where needed, an RNG handle) and returns a brand-new
/// `GameSession`.  Side effects are limited to the injected RNG.

use rand::Rng;
use tracing::{debug, info};

use crate::ai::{spawn_enemy, try_fire, update_enemy};
use crate::camera::{follow, CameraParams};
use crate::combat::{resolve, resolve_player_death};
use crate::config::GameConfig;
use crate::entities::{
    Body, Collectible, EnemyKind, Facing, GameMode, GameSession, InputState, Owner, Player,
    Projectile,
};
use crate::level::{build_level, is_final_level, level_name, LEVEL_COUNT};
use crate::physics::step_body;

const BOUNCE_STEP: f32 = 0.1;
const BOUNCE_LIMIT: f32 = 0.5;

// ── Constructors ─────────────────────────────────────────────────────────────

fn fresh_player(config: &GameConfig) -> Player {
    let p = &config.player;
    Player {
        body: Body::at(p.spawn_x, p.spawn_y, p.width, p.height),
        facing: Facing::Right,
        health: p.max_health,
        lives: p.starting_lives,
        score: 0,
        on_ground: false,
        shoot_cooldown: 0,
        hurt_timer: 0,
    }
}

/// A new session sitting on the menu with level 1 loaded behind it.
pub fn new_session(config: GameConfig, rng: &mut impl Rng) -> GameSession {
    let empty = GameSession {
        player: fresh_player(&config),
        enemies: Vec::new(),
        projectiles: Vec::new(),
        collectibles: Vec::new(),
        platforms: Vec::new(),
        camera_x: 0.0,
        level: 1,
        mode: GameMode::Menu,
        frame: 0,
        config,
    };
    load_level(&empty, 1, rng)
}

/// Replace the entity set with `level`'s content.  The player goes back to the
/// spawn point with full health; score and lives carry over.
pub fn load_level(session: &GameSession, level: u32, rng: &mut impl Rng) -> GameSession {
    let cfg = &session.config;
    let layout = build_level(level, cfg);
    let enemies = layout.enemies.iter().map(|s| spawn_enemy(s, rng)).collect();
    info!(level, name = layout.name, "Level loaded");

    GameSession {
        player: Player {
            body: Body::at(cfg.player.spawn_x, cfg.player.spawn_y, cfg.player.width, cfg.player.height),
            facing: Facing::Right,
            health: cfg.player.max_health,
            on_ground: false,
            shoot_cooldown: 0,
            hurt_timer: 0,
            ..session.player.clone()
        },
        enemies,
        projectiles: Vec::new(),
        collectibles: layout.collectibles,
        platforms: layout.platforms,
        camera_x: 0.0,
        level,
        ..session.clone()
    }
}

// ── Mode transitions ─────────────────────────────────────────────────────────

/// Menu → Playing.  Any other mode is returned unchanged.
pub fn start_game(session: &GameSession) -> GameSession {
    if session.mode != GameMode::Menu {
        return session.clone();
    }
    info!(level = session.level, "Game started");
    GameSession {
        mode: GameMode::Playing,
        ..session.clone()
    }
}

/// Restart is only accepted on the game-over screen once its countdown has
/// dropped below the configured threshold.
pub fn can_restart(session: &GameSession) -> bool {
    matches!(session.mode, GameMode::GameOver { timer, .. }
        if timer < session.config.timers.restart_below)
}

/// Reset level index, score, lives and entities and go straight to Playing.
pub fn restart(session: &GameSession, rng: &mut impl Rng) -> GameSession {
    if !can_restart(session) {
        return session.clone();
    }
    info!("Game restarted");
    let reset = GameSession {
        player: fresh_player(&session.config),
        mode: GameMode::Playing,
        frame: 0,
        ..session.clone()
    };
    load_level(&reset, 1, rng)
}

/// Clear condition: the boss is gone on the final level, every enemy is gone
/// elsewhere.
pub fn is_level_cleared(session: &GameSession) -> bool {
    if is_final_level(session.level) {
        !session.enemies.iter().any(|e| e.kind == EnemyKind::Boss)
    } else {
        session.enemies.is_empty()
    }
}

// ── Input-driven player actions (pure) ──────────────────────────────────────

/// Set horizontal velocity and facing from held keys.  Right wins if both are held.
pub fn steer_player(session: &GameSession, input: &InputState) -> GameSession {
    let p = &session.player;
    let speed = session.config.player.speed;
    let (vel_x, facing) = if input.right {
        (speed, Facing::Right)
    } else if input.left {
        (-speed, Facing::Left)
    } else {
        (0.0, p.facing)
    };
    GameSession {
        player: Player {
            body: Body { vel_x, ..p.body },
            facing,
            ..p.clone()
        },
        ..session.clone()
    }
}

/// Jump, if standing on something.
pub fn player_jump(session: &GameSession) -> GameSession {
    let p = &session.player;
    if !p.on_ground {
        return session.clone();
    }
    GameSession {
        player: Player {
            body: Body {
                vel_y: -session.config.player.jump_power,
                ..p.body
            },
            on_ground: false,
            ..p.clone()
        },
        ..session.clone()
    }
}

/// Fire a shot in the facing direction, if the shot cooldown has elapsed.
pub fn player_shoot(session: &GameSession) -> GameSession {
    let p = &session.player;
    if p.shoot_cooldown > 0 {
        return session.clone();
    }
    let cfg = &session.config.player;
    let (cx, cy) = p.body.rect().center();
    let mut projectiles = session.projectiles.clone();
    projectiles.push(Projectile {
        x: cx,
        y: cy,
        vel_x: cfg.shot_speed * p.facing.sign(),
        vel_y: 0.0,
        radius: cfg.projectile_radius,
        owner: Owner::Player,
    });
    GameSession {
        player: Player {
            shoot_cooldown: cfg.shoot_cooldown,
            ..p.clone()
        },
        projectiles,
        ..session.clone()
    }
}

// ── Per-frame tick (RNG is injected) ────────────────────────────────────────

/// Advance the session by one frame, dispatching on the current mode.
pub fn tick(session: &GameSession, input: &InputState, rng: &mut impl Rng) -> GameSession {
    let s = GameSession {
        frame: session.frame + 1,
        ..session.clone()
    };
    let mode = s.mode;
    match mode {
        GameMode::Menu if input.start => start_game(&s),
        GameMode::Menu => s,
        GameMode::Playing => tick_playing(&s, input, rng),
        GameMode::LevelComplete { timer } => tick_level_complete(&s, timer, rng),
        GameMode::GameOver { .. } if input.restart && can_restart(&s) => restart(&s, rng),
        GameMode::GameOver { timer, victory } => GameSession {
            mode: GameMode::GameOver {
                timer: timer.saturating_sub(1),
                victory,
            },
            ..s
        },
    }
}

fn tick_level_complete(session: &GameSession, timer: u32, rng: &mut impl Rng) -> GameSession {
    let timer = timer.saturating_sub(1);
    if timer > 0 {
        return GameSession {
            mode: GameMode::LevelComplete { timer },
            ..session.clone()
        };
    }

    if session.level >= LEVEL_COUNT {
        info!(score = session.player.score, "Final level cleared");
        return GameSession {
            mode: GameMode::GameOver {
                timer: session.config.timers.game_over,
                victory: true,
            },
            ..session.clone()
        };
    }

    let next = load_level(session, session.level + 1, rng);
    GameSession {
        mode: GameMode::Playing,
        ..next
    }
}

fn tick_playing(session: &GameSession, input: &InputState, rng: &mut impl Rng) -> GameSession {
    // ── 1. Input ─────────────────────────────────────────────────────────────
    let mut s = steer_player(session, input);
    if input.jump {
        s = player_jump(&s);
    }
    if input.shoot {
        s = player_shoot(&s);
    }

    // ── 2. Player physics & cooldowns ────────────────────────────────────────
    s = step_player(&s);

    // ── 3. Camera ────────────────────────────────────────────────────────────
    s.camera_x = follow(
        s.camera_x,
        s.player.body.x,
        &CameraParams::from_config(&s.config),
    );

    // ── 4. Projectiles ───────────────────────────────────────────────────────
    s.projectiles = move_projectiles(&s);

    // ── 5. Enemies move and fire ─────────────────────────────────────────────
    let params = s.config.physics_params();
    let mut enemies = Vec::with_capacity(s.enemies.len());
    for enemy in &s.enemies {
        let Some(moved) = update_enemy(enemy, &s.platforms, s.player.body.x, &params, rng) else {
            continue;
        };
        match try_fire(&moved, &s.player.body, &s.config, rng) {
            Some((fired, shot)) => {
                s.projectiles.push(shot);
                enemies.push(fired);
            }
            None => enemies.push(moved),
        }
    }
    s.enemies = enemies;

    // ── 6. Collectible animation ─────────────────────────────────────────────
    s.collectibles = s.collectibles.iter().map(bounce_collectible).collect();

    // ── 7. Combat ────────────────────────────────────────────────────────────
    let s = resolve(&s);

    // ── 8. Terminal conditions ───────────────────────────────────────────────
    let s = resolve_player_death(&s);
    if s.mode != GameMode::Playing {
        return s;
    }
    if is_level_cleared(&s) {
        info!(level = s.level, name = level_name(s.level), score = s.player.score, "Level complete");
        return GameSession {
            mode: GameMode::LevelComplete {
                timer: s.config.timers.level_complete,
            },
            ..s
        };
    }
    s
}

/// Integrate the player's body, tick its cooldowns and zero health on a fall.
pub fn step_player(session: &GameSession) -> GameSession {
    let p = &session.player;
    let outcome = step_body(&p.body, &session.platforms, &session.config.physics_params());
    if outcome.fell {
        debug!(y = outcome.body.y, "Player fell out of the world");
    }
    GameSession {
        player: Player {
            body: outcome.body,
            on_ground: outcome.on_ground,
            health: if outcome.fell { 0 } else { p.health },
            shoot_cooldown: p.shoot_cooldown.saturating_sub(1),
            hurt_timer: p.hurt_timer.saturating_sub(1),
            ..p.clone()
        },
        ..session.clone()
    }
}

/// Move every projectile one frame and drop those that left the viewport margin.
pub fn move_projectiles(session: &GameSession) -> Vec<Projectile> {
    let cfg = &session.config;
    let margin = cfg.physics.projectile_margin;
    let left = session.camera_x - margin;
    let right = session.camera_x + cfg.screen_width + margin;
    let bottom = cfg.screen_height + margin;

    session
        .projectiles
        .iter()
        .map(|p| Projectile {
            x: p.x + p.vel_x,
            y: p.y + p.vel_y,
            vel_y: p.vel_y + cfg.physics.projectile_gravity,
            ..p.clone()
        })
        .filter(|p| p.x >= left && p.x <= right && p.y <= bottom)
        .collect()
}

fn bounce_collectible(c: &Collectible) -> Collectible {
    let bounce = c.bounce + BOUNCE_STEP * c.bounce_dir;
    let bounce_dir = if bounce > BOUNCE_LIMIT {
        -1.0
    } else if bounce < -BOUNCE_LIMIT {
        1.0
    } else {
        c.bounce_dir
    };
    Collectible {
        bounce,
        bounce_dir,
        ..c.clone()
    }
}
