use side_scroller::camera::*;
use side_scroller::config::GameConfig;

fn params() -> CameraParams {
    CameraParams::from_config(&GameConfig::default())
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

#[test]
fn params_follow_config() {
    let p = params();
    assert_eq!(p.lead, 333.0);
    assert_eq!(p.smoothing, 0.1);
    assert_eq!(p.max_offset(), 4000.0); // 5000 - 1000
}

#[test]
fn one_frame_covers_smoothing_fraction() {
    // Target offset 1000 from offset 0 with factor 0.1 → 100.
    assert!(approx(smooth_toward(0.0, 1000.0, 0.1, 4000.0), 100.0));
}

#[test]
fn follow_targets_player_minus_lead() {
    let p = params();
    let offset = follow(0.0, 1000.0 + p.lead, &p);
    assert!(approx(offset, 100.0));
}

#[test]
fn follow_clamps_at_level_start() {
    let p = params();
    // Target is negative near the left edge of the level.
    assert_eq!(follow(0.0, 100.0, &p), 0.0);
    assert_eq!(follow(10.0, 0.0, &p), 0.0);
}

#[test]
fn follow_clamps_at_level_end() {
    let p = params();
    let offset = follow(3990.0, 4900.0 + p.lead, &p);
    assert_eq!(offset, 4000.0);
}

#[test]
fn follow_converges_on_stationary_player() {
    let p = params();
    let player_x = 2000.0;
    let mut offset = 0.0;
    for _ in 0..200 {
        offset = follow(offset, player_x, &p);
    }
    assert!((offset - (player_x - p.lead)).abs() < 1.0);
}

#[test]
fn narrow_level_pins_camera_to_zero() {
    assert_eq!(smooth_toward(0.0, 500.0, 0.5, -100.0), 0.0);
}

#[test]
fn world_to_screen_subtracts_offset() {
    assert_eq!(to_screen_x(1250.0, 1000.0), 250.0);
    assert_eq!(to_screen_x(900.0, 1000.0), -100.0);
}
