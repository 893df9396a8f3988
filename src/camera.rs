/// Horizontal camera follow with exponential smoothing.

use crate::config::GameConfig;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraParams {
    pub lead: f32,
    pub smoothing: f32,
    pub viewport_width: f32,
    pub level_width: f32,
}

impl CameraParams {
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            lead: config.camera.lead,
            smoothing: config.camera.smoothing,
            viewport_width: config.screen_width,
            level_width: config.level_width,
        }
    }

    /// Largest offset that still keeps the viewport inside the level.
    pub fn max_offset(&self) -> f32 {
        (self.level_width - self.viewport_width).max(0.0)
    }
}

/// Move `offset` a `smoothing` fraction of the way to `target`, clamped to `[0, max]`.
pub fn smooth_toward(offset: f32, target: f32, smoothing: f32, max: f32) -> f32 {
    (offset + (target - offset) * smoothing).clamp(0.0, max.max(0.0))
}

/// Next camera offset for a player whose left edge is at `player_x`.
pub fn follow(offset: f32, player_x: f32, params: &CameraParams) -> f32 {
    let target = player_x - params.lead;
    smooth_toward(offset, target, params.smoothing, params.max_offset())
}

/// World x to viewport x.
pub fn to_screen_x(world_x: f32, offset: f32) -> f32 {
    world_x - offset
}
