/// Hand-authored level content.
///
/// Every layout is a pure function of the level index and the screen height;
/// the only randomness in a level (enemy wander and fire timers) is applied
/// later when the spawns are turned into live enemies.

use crate::config::GameConfig;
use crate::entities::{Collectible, CollectibleKind, EnemyKind, Platform, PlatformColor, Rect};

/// Number of levels; clearing this one wins the game.
pub const LEVEL_COUNT: u32 = 3;

const GROUND_HEIGHT: f32 = 40.0;
const LEDGE_HEIGHT: f32 = 20.0;
const COLLECTIBLE_SIZE: f32 = 30.0;

/// Where and what to spawn; turned into an `Enemy` by `ai::spawn_enemy`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnemySpawn {
    pub x: f32,
    pub y: f32,
    pub kind: EnemyKind,
}

#[derive(Clone, Debug)]
pub struct LevelLayout {
    pub name: &'static str,
    pub platforms: Vec<Platform>,
    pub enemies: Vec<EnemySpawn>,
    pub collectibles: Vec<Collectible>,
}

pub fn level_name(index: u32) -> &'static str {
    match index {
        1 => "Forest",
        2 => "Mountains",
        _ => "Boss Fortress",
    }
}

pub fn is_final_level(index: u32) -> bool {
    index >= LEVEL_COUNT
}

/// Build the layout for a 1-based level index.  Indices past the last level
/// reuse the final layout.
pub fn build_level(index: u32, config: &GameConfig) -> LevelLayout {
    let h = config.screen_height;
    let ledge = |x: f32, up: f32, w: f32, color: PlatformColor| Platform {
        rect: Rect::new(x, h - up, w, LEDGE_HEIGHT),
        color,
    };
    let spawn = |x: f32, up: f32, kind: EnemyKind| EnemySpawn { x, y: h - up, kind };
    let item = |x: f32, up: f32, kind: CollectibleKind| collectible(x, h - up, kind);

    let mut platforms = vec![Platform {
        rect: Rect::new(0.0, h - GROUND_HEIGHT, config.level_width, GROUND_HEIGHT),
        color: PlatformColor::Ground,
    }];

    let (enemies, collectibles) = match index {
        1 => {
            platforms.extend([
                ledge(300.0, 150.0, 200.0, PlatformColor::Wood),
                ledge(600.0, 200.0, 200.0, PlatformColor::Wood),
                ledge(900.0, 250.0, 200.0, PlatformColor::Wood),
            ]);
            (
                vec![
                    spawn(400.0, 210.0, EnemyKind::Normal),
                    spawn(700.0, 260.0, EnemyKind::Normal),
                    spawn(1000.0, 310.0, EnemyKind::Shooter),
                ],
                vec![
                    item(350.0, 190.0, CollectibleKind::Coin),
                    item(650.0, 240.0, CollectibleKind::Health),
                    item(950.0, 290.0, CollectibleKind::Coin),
                ],
            )
        }
        2 => {
            platforms.extend([
                ledge(300.0, 180.0, 150.0, PlatformColor::Stone),
                ledge(500.0, 250.0, 150.0, PlatformColor::Stone),
                ledge(700.0, 320.0, 150.0, PlatformColor::Stone),
                ledge(900.0, 250.0, 150.0, PlatformColor::Stone),
                ledge(1100.0, 180.0, 150.0, PlatformColor::Stone),
            ]);
            (
                vec![
                    spawn(350.0, 240.0, EnemyKind::Shooter),
                    spawn(550.0, 310.0, EnemyKind::Normal),
                    spawn(750.0, 380.0, EnemyKind::Shooter),
                    spawn(950.0, 310.0, EnemyKind::Normal),
                ],
                vec![
                    item(330.0, 220.0, CollectibleKind::Health),
                    item(550.0, 290.0, CollectibleKind::Coin),
                    item(750.0, 360.0, CollectibleKind::Life),
                    item(970.0, 290.0, CollectibleKind::Coin),
                ],
            )
        }
        _ => {
            platforms.extend([
                ledge(300.0, 200.0, 200.0, PlatformColor::Stone),
                ledge(600.0, 300.0, 200.0, PlatformColor::Stone),
                ledge(900.0, 200.0, 200.0, PlatformColor::Stone),
                ledge(1200.0, 300.0, 200.0, PlatformColor::Stone),
            ]);
            (
                vec![
                    spawn(400.0, 260.0, EnemyKind::Shooter),
                    spawn(700.0, 360.0, EnemyKind::Shooter),
                    spawn(1000.0, 260.0, EnemyKind::Shooter),
                    spawn(1500.0, 360.0, EnemyKind::Boss),
                ],
                vec![
                    item(350.0, 240.0, CollectibleKind::Health),
                    item(650.0, 340.0, CollectibleKind::Health),
                    item(950.0, 240.0, CollectibleKind::Life),
                    item(1250.0, 340.0, CollectibleKind::Health),
                ],
            )
        }
    };

    LevelLayout {
        name: level_name(index),
        platforms,
        enemies,
        collectibles,
    }
}

pub fn collectible(x: f32, y: f32, kind: CollectibleKind) -> Collectible {
    Collectible {
        rect: Rect::new(x, y, COLLECTIBLE_SIZE, COLLECTIBLE_SIZE),
        kind,
        bounce: 0.0,
        bounce_dir: 1.0,
    }
}
