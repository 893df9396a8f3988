/// Combat resolution.
///
/// Each function takes the current session and returns a new one.  `resolve`
/// runs the interaction classes in their fixed order: pickups, melee contact,
/// player shots against enemies, enemy shots against the player.

use tracing::{debug, info};

use crate::ai::score_for;
use crate::entities::{
    Body, CollectibleKind, Enemy, GameMode, GameSession, Owner, Player, Projectile,
};

/// All four interaction classes, in order.
pub fn resolve(session: &GameSession) -> GameSession {
    let s = pick_up_collectibles(session);
    let s = apply_melee(&s);
    let s = resolve_player_shots(&s);
    resolve_enemy_shots(&s)
}

/// True when the projectile's centre is within `reach` of the body's centre.
fn projectile_hits(projectile: &Projectile, body: &Body, reach: f32) -> bool {
    let (cx, cy) = body.rect().center();
    let dx = projectile.x - cx;
    let dy = projectile.y - cy;
    (dx * dx + dy * dy).sqrt() < projectile.radius + reach
}

// ── Pickups ───────────────────────────────────────────────────────────────────

pub fn pick_up_collectibles(session: &GameSession) -> GameSession {
    let combat = &session.config.combat;
    let max_health = session.config.player.max_health;
    let player_rect = session.player.body.rect();
    let mut player = session.player.clone();

    let collectibles = session
        .collectibles
        .iter()
        .filter(|c| {
            if !player_rect.intersects(&c.rect) {
                return true;
            }
            match c.kind {
                CollectibleKind::Health => {
                    player.health = (player.health + combat.health_pickup).min(max_health);
                }
                CollectibleKind::Life => player.lives += 1,
                CollectibleKind::Coin => player.score += combat.coin_value,
            }
            debug!(kind = ?c.kind, "Collectible picked up");
            false
        })
        .cloned()
        .collect();

    GameSession {
        player,
        collectibles,
        ..session.clone()
    }
}

// ── Melee contact ─────────────────────────────────────────────────────────────

/// Contact damage, at most once per hurt-cooldown window no matter how many
/// enemies overlap the player.
pub fn apply_melee(session: &GameSession) -> GameSession {
    let p = &session.player;
    if p.hurt_timer > 0 {
        return session.clone();
    }
    let rect = p.body.rect();
    if !session.enemies.iter().any(|e| e.body.rect().intersects(&rect)) {
        return session.clone();
    }

    let combat = &session.config.combat;
    GameSession {
        player: Player {
            health: p.health.saturating_sub(combat.melee_damage),
            hurt_timer: combat.hurt_cooldown,
            ..p.clone()
        },
        ..session.clone()
    }
}

// ── Player shots ↔ enemies ────────────────────────────────────────────────────

pub fn resolve_player_shots(session: &GameSession) -> GameSession {
    let combat = &session.config.combat;
    let mut enemies: Vec<Enemy> = session.enemies.clone();
    let mut player = session.player.clone();
    let mut projectiles: Vec<Projectile> = Vec::with_capacity(session.projectiles.len());

    for proj in &session.projectiles {
        if proj.owner != Owner::Player {
            projectiles.push(proj.clone());
            continue;
        }

        let hit = enemies.iter().position(|e| {
            let reach = e.body.w.max(e.body.h) / 2.0;
            projectile_hits(proj, &e.body, reach)
        });

        let Some(i) = hit else {
            projectiles.push(proj.clone());
            continue;
        };

        let enemy = &mut enemies[i];
        enemy.health = enemy.health.saturating_sub(combat.player_shot_damage);
        enemy.hurt_timer = combat.enemy_hurt_flash;
        if enemy.health == 0 {
            let award = score_for(enemy.kind);
            info!(kind = ?enemy.kind, award, "Enemy destroyed");
            player.score += award;
            enemies.remove(i);
        }
    }

    GameSession {
        player,
        enemies,
        projectiles,
        ..session.clone()
    }
}

// ── Enemy shots ↔ player ──────────────────────────────────────────────────────

pub fn resolve_enemy_shots(session: &GameSession) -> GameSession {
    let combat = &session.config.combat;
    let mut player = session.player.clone();
    let reach = player.body.w / 2.0;

    let projectiles = session
        .projectiles
        .iter()
        .filter(|proj| {
            if proj.owner != Owner::Enemy
                || player.hurt_timer > 0
                || !projectile_hits(proj, &player.body, reach)
            {
                return true;
            }
            player.health = player.health.saturating_sub(combat.enemy_shot_damage);
            player.hurt_timer = combat.hurt_cooldown;
            false
        })
        .cloned()
        .collect();

    GameSession {
        player,
        projectiles,
        ..session.clone()
    }
}

// ── Player elimination ────────────────────────────────────────────────────────

/// Spend a life when health has run out: respawn with full health, or end the
/// game when no lives remain.
pub fn resolve_player_death(session: &GameSession) -> GameSession {
    if session.player.health > 0 {
        return session.clone();
    }

    let cfg = &session.config;
    let lives = session.player.lives.saturating_sub(1);

    if lives == 0 {
        info!(score = session.player.score, level = session.level, "Game over");
        return GameSession {
            player: Player {
                lives,
                ..session.player.clone()
            },
            mode: GameMode::GameOver {
                timer: cfg.timers.game_over,
                victory: false,
            },
            ..session.clone()
        };
    }

    info!(lives, "Life lost, respawning");
    GameSession {
        player: Player {
            body: Body::at(cfg.player.spawn_x, cfg.player.spawn_y, cfg.player.width, cfg.player.height),
            health: cfg.player.max_health,
            lives,
            on_ground: false,
            ..session.player.clone()
        },
        ..session.clone()
    }
}
