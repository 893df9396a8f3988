/// Per-frame body integration and platform collision.
///
/// Resolution order is vertical first, then horizontal, per platform.  A body
/// that lands while straddling a platform's edge and keeps pushing toward it
/// can be shoved sideways off the ledge; this corner behaviour is accepted.

use crate::entities::{Body, Facing, Platform};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhysicsParams {
    pub gravity: f32,
    /// Horizontal positions are clamped to `[0, level_width - body.w]`.
    pub level_width: f32,
    /// A body whose top passes this line has fallen out of the world.
    pub fall_limit: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepOutcome {
    pub body: Body,
    /// Landed on top of some platform this frame.
    pub on_ground: bool,
    /// Side on which a wall or level bound stopped horizontal motion.
    pub blocked: Option<Facing>,
    /// Fatal fall below the screen.
    pub fell: bool,
}

/// Advance one body by one frame against a static platform set.
pub fn step_body(body: &Body, platforms: &[Platform], params: &PhysicsParams) -> StepOutcome {
    let mut b = *body;
    b.vel_y += params.gravity;
    b.x += b.vel_x;
    b.y += b.vel_y;

    let mut on_ground = false;
    let mut blocked = None;

    for platform in platforms {
        let p = platform.rect;
        if !b.rect().intersects(&p) {
            continue;
        }

        // Vertical
        if b.vel_y > 0.0 && b.y + b.h > p.y && b.y < p.y {
            b.y = p.y - b.h;
            b.vel_y = 0.0;
            on_ground = true;
        } else if b.vel_y < 0.0 && b.y < p.bottom() && b.y + b.h > p.bottom() {
            b.y = p.bottom();
            b.vel_y = 0.0;
        }

        // Horizontal, on the post-snap position
        if b.vel_x > 0.0 && b.x + b.w > p.x && b.x < p.x {
            b.x = p.x - b.w;
            blocked = Some(Facing::Right);
        } else if b.vel_x < 0.0 && b.x < p.right() && b.x + b.w > p.right() {
            b.x = p.right();
            blocked = Some(Facing::Left);
        }
    }

    let max_x = (params.level_width - b.w).max(0.0);
    if b.x < 0.0 {
        b.x = 0.0;
        blocked = Some(Facing::Left);
    } else if b.x > max_x {
        b.x = max_x;
        blocked = Some(Facing::Right);
    }

    StepOutcome {
        body: b,
        on_ground,
        blocked,
        fell: b.y > params.fall_limit,
    }
}
