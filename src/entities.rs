/// All game entity types: plain data plus a few geometric accessors.
///
/// World coordinates are pixels with y growing downward.

use crate::config::GameConfig;

// ── Geometry ──────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Strict overlap on both axes; rectangles that only touch do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && self.x + self.w > other.x
            && self.y < other.y + other.h
            && self.y + self.h > other.y
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }
}

/// The physics-facing part of anything that moves and collides as a rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Body {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub vel_x: f32,
    pub vel_y: f32,
}

impl Body {
    pub fn at(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h, vel_x: 0.0, vel_y: 0.0 }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.w, self.h)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Facing {
    Left,
    Right,
}

impl Facing {
    /// −1 for left, +1 for right.
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }
}

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Player {
    pub body: Body,
    pub facing: Facing,
    /// 0 ..= max_health.
    pub health: u32,
    pub lives: u32,
    pub score: u32,
    /// True while standing on a platform; jumping requires it.
    pub on_ground: bool,
    /// Frames until the next shot is allowed.
    pub shoot_cooldown: u32,
    /// Frames of remaining invulnerability after a hit.
    pub hurt_timer: u32,
}

// ── Enemies ───────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnemyKind {
    /// Wanders, never shoots.
    Normal,
    /// Wanders and fires aimed shots.
    Shooter,
    /// Chases the player, fires often, large health pool.
    Boss,
}

#[derive(Clone, Debug)]
pub struct Enemy {
    pub body: Body,
    pub kind: EnemyKind,
    pub health: u32,
    pub max_health: u32,
    /// Signed horizontal wander speed.
    pub speed: f32,
    pub facing: Facing,
    /// Frames until a new wander speed is picked.
    pub move_timer: u32,
    pub shoot_cooldown: u32,
    pub hurt_timer: u32,
}

// ── Projectiles ───────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Owner {
    Player,
    Enemy,
}

/// A round shot. `x`/`y` is the centre.
#[derive(Clone, Debug)]
pub struct Projectile {
    pub x: f32,
    pub y: f32,
    pub vel_x: f32,
    pub vel_y: f32,
    pub radius: f32,
    pub owner: Owner,
}

// ── Collectibles & platforms ──────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CollectibleKind {
    /// Restores some health, capped at the maximum.
    Health,
    /// One extra life.
    Life,
    /// Score bonus.
    Coin,
}

#[derive(Clone, Debug)]
pub struct Collectible {
    pub rect: Rect,
    pub kind: CollectibleKind,
    /// Vertical bob phase, roughly −0.5 ..= 0.5. Cosmetic only.
    pub bounce: f32,
    pub bounce_dir: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlatformColor {
    Ground,
    Wood,
    Stone,
}

#[derive(Clone, Debug)]
pub struct Platform {
    pub rect: Rect,
    pub color: PlatformColor,
}

// ── Modes & input ─────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameMode {
    Menu,
    Playing,
    /// Frames left before the next level loads.
    LevelComplete { timer: u32 },
    /// Frames left on the countdown; `victory` when the final level was cleared.
    GameOver { timer: u32, victory: bool },
}

/// Key state sampled once per frame by the front-end.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub shoot: bool,
    pub start: bool,
    pub restart: bool,
}

// ── Session ───────────────────────────────────────────────────────────────────

/// Everything belonging to one running game.  Cloneable so pure update
/// functions can return a new copy without mutating the original.
#[derive(Clone, Debug)]
pub struct GameSession {
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub projectiles: Vec<Projectile>,
    pub collectibles: Vec<Collectible>,
    pub platforms: Vec<Platform>,
    /// Left edge of the viewport in world coordinates.
    pub camera_x: f32,
    /// 1-based level index.
    pub level: u32,
    pub mode: GameMode,
    pub frame: u64,
    pub config: GameConfig,
}
