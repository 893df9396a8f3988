use side_scroller::entities::{Body, Facing, Platform, PlatformColor, Rect};
use side_scroller::physics::{step_body, PhysicsParams};

fn params() -> PhysicsParams {
    PhysicsParams {
        gravity: 0.8,
        level_width: 5000.0,
        fall_limit: 600.0,
    }
}

fn ground() -> Platform {
    Platform {
        rect: Rect::new(0.0, 560.0, 5000.0, 40.0),
        color: PlatformColor::Ground,
    }
}

fn block(x: f32, y: f32, w: f32, h: f32) -> Platform {
    Platform {
        rect: Rect::new(x, y, w, h),
        color: PlatformColor::Stone,
    }
}

fn body(x: f32, y: f32, vel_x: f32, vel_y: f32) -> Body {
    Body { x, y, w: 40.0, h: 60.0, vel_x, vel_y }
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

// ── Integration ───────────────────────────────────────────────────────────────

#[test]
fn free_fall_applies_gravity_before_moving() {
    let out = step_body(&body(100.0, 100.0, 0.0, 0.0), &[], &params());
    assert!(approx(out.body.vel_y, 0.8));
    assert!(approx(out.body.y, 100.8));
    assert!(!out.on_ground);
    assert!(!out.fell);
}

#[test]
fn horizontal_velocity_moves_body() {
    let out = step_body(&body(100.0, 100.0, 5.0, 0.0), &[], &params());
    assert!(approx(out.body.x, 105.0));
    assert_eq!(out.blocked, None);
}

// ── Vertical resolution ───────────────────────────────────────────────────────

#[test]
fn standing_on_ground_stays_put() {
    let out = step_body(&body(200.0, 500.0, 0.0, 0.0), &[ground()], &params());
    assert_eq!(out.body.y, 500.0);
    assert_eq!(out.body.vel_y, 0.0);
    assert!(out.on_ground);
}

#[test]
fn landing_snaps_to_platform_top() {
    let out = step_body(&body(200.0, 499.0, 0.0, 5.0), &[ground()], &params());
    assert_eq!(out.body.y, 500.0);
    assert_eq!(out.body.vel_y, 0.0);
    assert!(out.on_ground);
}

#[test]
fn rising_into_platform_snaps_to_its_bottom() {
    let ceiling = block(100.0, 200.0, 300.0, 20.0);
    let out = step_body(&body(200.0, 225.0, 0.0, -10.0), &[ceiling], &params());
    assert_eq!(out.body.y, 220.0);
    assert_eq!(out.body.vel_y, 0.0);
    assert!(!out.on_ground);
}

#[test]
fn landing_resolution_never_leaves_overlap() {
    let ledge = block(300.0, 400.0, 200.0, 20.0);
    for speed in 1..20 {
        let start = body(350.0, 400.0 - 60.0 - speed as f32 / 2.0, 0.0, speed as f32);
        let out = step_body(&start, std::slice::from_ref(&ledge), &params());
        assert!(
            !out.body.rect().intersects(&ledge.rect),
            "overlap after landing at speed {speed}"
        );
    }
}

// ── Horizontal resolution ─────────────────────────────────────────────────────

#[test]
fn walking_right_into_wall_snaps_to_its_left_edge() {
    let wall = block(300.0, 400.0, 50.0, 160.0);
    let out = step_body(&body(258.0, 450.0, 5.0, 0.0), std::slice::from_ref(&wall), &params());
    assert_eq!(out.body.x, 260.0);
    assert_eq!(out.blocked, Some(Facing::Right));
    assert!(!out.body.rect().intersects(&wall.rect));
}

#[test]
fn walking_left_into_wall_snaps_to_its_right_edge() {
    let wall = block(300.0, 400.0, 50.0, 160.0);
    let out = step_body(&body(352.0, 450.0, -5.0, 0.0), std::slice::from_ref(&wall), &params());
    assert_eq!(out.body.x, 350.0);
    assert_eq!(out.blocked, Some(Facing::Left));
    assert!(!out.body.rect().intersects(&wall.rect));
}

#[test]
fn corner_landing_snaps_vertically_then_horizontally() {
    // Straddling the ledge's left edge while falling and walking right: the
    // vertical snap runs first, then the horizontal snap pushes the body off.
    let ledge = block(300.0, 400.0, 200.0, 20.0);
    let out = step_body(&body(280.0, 341.0, 5.0, 0.0), &[ledge], &params());
    assert_eq!(out.body.y, 340.0);
    assert!(out.on_ground);
    assert_eq!(out.body.x, 260.0);
    assert_eq!(out.blocked, Some(Facing::Right));
}

// ── Level bounds & falls ──────────────────────────────────────────────────────

#[test]
fn clamped_at_left_level_bound() {
    let out = step_body(&body(2.0, 100.0, -5.0, 0.0), &[], &params());
    assert_eq!(out.body.x, 0.0);
    assert_eq!(out.blocked, Some(Facing::Left));
}

#[test]
fn clamped_at_right_level_bound() {
    let out = step_body(&body(4958.0, 100.0, 5.0, 0.0), &[], &params());
    assert_eq!(out.body.x, 4960.0); // level_width - w
    assert_eq!(out.blocked, Some(Facing::Right));
}

#[test]
fn falling_below_screen_is_fatal() {
    let out = step_body(&body(100.0, 600.0, 0.0, 10.0), &[], &params());
    assert!(out.fell);
}

#[test]
fn step_does_not_mutate_input() {
    let b = body(100.0, 100.0, 5.0, 0.0);
    let _ = step_body(&b, &[ground()], &params());
    assert_eq!(b.x, 100.0);
    assert_eq!(b.vel_y, 0.0);
}
