//! Game tunables.
//!
//! Every constant the simulation uses lives here so a RON file can override
//! any subset of them. Missing fields fall back to the values below.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::GameError;
use crate::physics::PhysicsParams;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Viewport width in world pixels.
    pub screen_width: f32,
    /// Viewport height; bodies below this line have fallen out of the world.
    pub screen_height: f32,
    pub level_width: f32,
    pub fps: u32,
    pub physics: PhysicsConfig,
    pub player: PlayerConfig,
    pub combat: CombatConfig,
    pub camera: CameraConfig,
    pub timers: TimerConfig,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Added to every body's vertical velocity each frame.
    pub gravity: f32,
    /// Vertical drift added to projectile velocity each frame.
    pub projectile_gravity: f32,
    /// Projectiles further than this outside the viewport are culled.
    pub projectile_margin: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    pub jump_power: f32,
    pub spawn_x: f32,
    pub spawn_y: f32,
    pub max_health: u32,
    pub starting_lives: u32,
    /// Frames between shots.
    pub shoot_cooldown: u32,
    pub shot_speed: f32,
    pub projectile_radius: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatConfig {
    pub melee_damage: u32,
    pub player_shot_damage: u32,
    pub enemy_shot_damage: u32,
    /// Frames of invulnerability after the player takes a hit.
    pub hurt_cooldown: u32,
    /// Frames an enemy flashes after being shot.
    pub enemy_hurt_flash: u32,
    /// Per-frame probability that a ready shooter or boss opens fire.
    pub enemy_fire_chance: f64,
    pub enemy_shot_speed: f32,
    pub health_pickup: u32,
    pub coin_value: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Distance kept between the left edge of the viewport and the player.
    pub lead: f32,
    /// Fraction of the remaining distance covered each frame.
    pub smoothing: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimerConfig {
    pub level_complete: u32,
    pub game_over: u32,
    /// Restart is accepted once the game-over countdown drops below this.
    pub restart_below: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: 1000.0,
            screen_height: 600.0,
            level_width: 5000.0,
            fps: 60,
            physics: PhysicsConfig::default(),
            player: PlayerConfig::default(),
            combat: CombatConfig::default(),
            camera: CameraConfig::default(),
            timers: TimerConfig::default(),
        }
    }
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: 0.8,
            projectile_gravity: 0.3,
            projectile_margin: 100.0,
        }
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            width: 40.0,
            height: 60.0,
            speed: 5.0,
            jump_power: 15.0,
            spawn_x: 200.0,
            spawn_y: 300.0,
            max_health: 100,
            starting_lives: 3,
            shoot_cooldown: 15,
            shot_speed: 10.0,
            projectile_radius: 6.0,
        }
    }
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            melee_damage: 10,
            player_shot_damage: 10,
            enemy_shot_damage: 15,
            hurt_cooldown: 30,
            enemy_hurt_flash: 5,
            enemy_fire_chance: 0.02,
            enemy_shot_speed: 8.0,
            health_pickup: 30,
            coin_value: 100,
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            lead: 333.0,
            smoothing: 0.1,
        }
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            level_complete: 180,
            game_over: 180,
            restart_below: 90,
        }
    }
}

impl GameConfig {
    /// Read a RON file, fill unspecified fields with defaults and validate.
    pub fn load(path: &Path) -> Result<Self, GameError> {
        let text = fs::read_to_string(path).map_err(|source| GameError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: GameConfig = ron::from_str(&text).map_err(|e| GameError::ConfigParse {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;
        config.validate()?;
        debug!(path = %path.display(), "Loaded game config");
        Ok(config)
    }

    /// Reject values that would make the world degenerate.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.screen_width <= 0.0 || self.screen_height <= 0.0 {
            return Err(GameError::InvalidConfig(format!(
                "screen must be positive, got {}x{}",
                self.screen_width, self.screen_height
            )));
        }
        if self.level_width < self.screen_width {
            return Err(GameError::InvalidConfig(format!(
                "level_width {} is narrower than screen_width {}",
                self.level_width, self.screen_width
            )));
        }
        if self.fps == 0 {
            return Err(GameError::InvalidConfig("fps must be at least 1".into()));
        }
        if !(self.camera.smoothing > 0.0 && self.camera.smoothing <= 1.0) {
            return Err(GameError::InvalidConfig(format!(
                "camera.smoothing must be in (0, 1], got {}",
                self.camera.smoothing
            )));
        }
        if !(0.0..=1.0).contains(&self.combat.enemy_fire_chance) {
            return Err(GameError::InvalidConfig(format!(
                "combat.enemy_fire_chance must be in [0, 1], got {}",
                self.combat.enemy_fire_chance
            )));
        }
        if self.player.width <= 0.0 || self.player.height <= 0.0 {
            return Err(GameError::InvalidConfig("player size must be positive".into()));
        }
        if self.player.max_health == 0 {
            return Err(GameError::InvalidConfig("player.max_health must be at least 1".into()));
        }
        Ok(())
    }

    pub fn physics_params(&self) -> PhysicsParams {
        PhysicsParams {
            gravity: self.physics.gravity,
            level_width: self.level_width,
            fall_limit: self.screen_height,
        }
    }
}
