use std::io::Write;

use side_scroller::config::GameConfig;
use side_scroller::error::GameError;

fn write_config(text: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file
}

#[test]
fn defaults_match_the_arcade_tuning() {
    let c = GameConfig::default();
    assert_eq!((c.screen_width, c.screen_height, c.level_width), (1000.0, 600.0, 5000.0));
    assert_eq!(c.fps, 60);
    assert_eq!(c.physics.gravity, 0.8);
    assert_eq!(c.player.max_health, 100);
    assert_eq!(c.player.starting_lives, 3);
    assert_eq!(c.combat.hurt_cooldown, 30);
    assert_eq!(c.combat.melee_damage, 10);
    assert_eq!(c.camera.smoothing, 0.1);
    assert_eq!(c.timers.level_complete, 180);
    assert!(c.validate().is_ok());
}

#[test]
fn physics_params_come_from_config() {
    let p = GameConfig::default().physics_params();
    assert_eq!(p.gravity, 0.8);
    assert_eq!(p.level_width, 5000.0);
    assert_eq!(p.fall_limit, 600.0);
}

#[test]
fn partial_file_keeps_other_defaults() {
    let file = write_config("(level_width: 6000.0, camera: (smoothing: 0.25), player: (starting_lives: 5))");
    let c = GameConfig::load(file.path()).unwrap();
    assert_eq!(c.level_width, 6000.0);
    assert_eq!(c.camera.smoothing, 0.25);
    assert_eq!(c.camera.lead, 333.0);
    assert_eq!(c.player.starting_lives, 5);
    assert_eq!(c.player.speed, 5.0);
    assert_eq!(c.screen_width, 1000.0);
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = GameConfig::load(&dir.path().join("nope.ron")).unwrap_err();
    assert!(matches!(err, GameError::ConfigRead { .. }));
}

#[test]
fn malformed_file_is_a_parse_error() {
    let file = write_config("(level_width: \"wide\"");
    let err = GameConfig::load(file.path()).unwrap_err();
    assert!(matches!(err, GameError::ConfigParse { .. }));
}

#[test]
fn level_narrower_than_screen_is_rejected() {
    let file = write_config("(level_width: 500.0)");
    let err = GameConfig::load(file.path()).unwrap_err();
    assert!(matches!(err, GameError::InvalidConfig(_)));
}

#[test]
fn validate_rejects_degenerate_values() {
    let mut c = GameConfig::default();
    c.camera.smoothing = 0.0;
    assert!(c.validate().is_err());

    let mut c = GameConfig::default();
    c.fps = 0;
    assert!(c.validate().is_err());

    let mut c = GameConfig::default();
    c.combat.enemy_fire_chance = 1.5;
    assert!(c.validate().is_err());

    let mut c = GameConfig::default();
    c.screen_height = -1.0;
    assert!(c.validate().is_err());
}
