use side_scroller::compute::new_session;
use side_scroller::config::GameConfig;
use side_scroller::entities::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn rect_overlap_is_strict() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    assert!(a.intersects(&Rect::new(5.0, 5.0, 10.0, 10.0)));
    // Shared edges do not count.
    assert!(!a.intersects(&Rect::new(10.0, 0.0, 10.0, 10.0)));
    assert!(!a.intersects(&Rect::new(0.0, 10.0, 10.0, 10.0)));
    assert!(!a.intersects(&Rect::new(30.0, 30.0, 5.0, 5.0)));
}

#[test]
fn rect_edges_and_centre() {
    let r = Rect::new(100.0, 200.0, 40.0, 60.0);
    assert_eq!(r.center(), (120.0, 230.0));
    assert_eq!(r.right(), 140.0);
    assert_eq!(r.bottom(), 260.0);
}

#[test]
fn body_starts_at_rest() {
    let b = Body::at(5.0, 6.0, 40.0, 60.0);
    assert_eq!((b.vel_x, b.vel_y), (0.0, 0.0));
    assert_eq!(b.rect(), Rect::new(5.0, 6.0, 40.0, 60.0));
}

#[test]
fn facing_sign() {
    assert_eq!(Facing::Left.sign(), -1.0);
    assert_eq!(Facing::Right.sign(), 1.0);
}

#[test]
fn mode_equality_includes_payload() {
    assert_eq!(GameMode::LevelComplete { timer: 3 }, GameMode::LevelComplete { timer: 3 });
    assert_ne!(GameMode::LevelComplete { timer: 3 }, GameMode::LevelComplete { timer: 2 });
    assert_ne!(
        GameMode::GameOver { timer: 0, victory: true },
        GameMode::GameOver { timer: 0, victory: false }
    );
    assert_ne!(Owner::Player, Owner::Enemy);
    assert_ne!(EnemyKind::Shooter, EnemyKind::Boss);
}

#[test]
fn input_defaults_to_nothing_held() {
    let input = InputState::default();
    assert!(!(input.left || input.right || input.jump || input.shoot || input.start || input.restart));
}

#[test]
fn session_clone_is_independent() {
    let original = new_session(GameConfig::default(), &mut StdRng::seed_from_u64(42));
    let mut copy = original.clone();
    copy.player.score = 999;
    copy.enemies.clear();
    copy.platforms.pop();
    assert_eq!(original.player.score, 0);
    assert_eq!(original.enemies.len(), 3);
    assert_eq!(original.platforms.len(), 4);
}
