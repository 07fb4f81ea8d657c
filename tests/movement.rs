/// Movement and collision tests for `Walkabout::move`.
///
/// Walkabouts are built from in-memory still frames so no assets are needed.
use glam::{IVec2, UVec2};
use image::RgbaImage;
use tilewalk::{Action, Animation, Direction, Rect, SpriteSet, TileMap, Walkabout};

fn walkabout_at(x: i32, y: i32, w: u32, h: u32, speed: u32) -> Walkabout {
    let mut sprites = SpriteSet::new();
    for action in ["stand", "walk"] {
        for d in Direction::ALL {
            sprites.insert(action, d.as_str(), Animation::still(RgbaImage::new(w, h)));
        }
    }
    let mut wa = Walkabout::from_sprites(sprites, Some(IVec2::new(x, y))).unwrap();
    wa.set_speed(speed);
    wa
}

const OPEN: Vec<Option<Rect>> = Vec::new();

// ── Free movement ────────────────────────────────────────────────────────────

#[test]
fn free_movement_shifts_by_speed_in_every_direction() {
    for speed in 1..=5u32 {
        for d in Direction::ALL {
            let mut wa = walkabout_at(100, 100, 32, 48, speed);
            assert!(wa.r#move(d, &OPEN), "{d} at speed {speed} should succeed");
            let expected = IVec2::new(100, 100) + d.offset() * speed as i32;
            assert_eq!(wa.position().topleft(), expected, "{d} at speed {speed}");
        }
    }
}

#[test]
fn move_down_from_spec_scenario() {
    let mut wa = walkabout_at(100, 100, 32, 48, 1);
    assert!(wa.r#move(Direction::Down, &OPEN));
    assert_eq!(wa.position(), Rect::new(100, 101, 32, 48));
}

#[test]
fn position_keeps_size_after_moves() {
    let mut wa = walkabout_at(0, 0, 20, 30, 3);
    for d in [Direction::Right, Direction::Down, Direction::Left, Direction::Up] {
        wa.r#move(d, &OPEN);
        assert_eq!(wa.position().size(), UVec2::new(20, 30));
        assert_eq!(wa.position().size(), wa.size());
    }
}

// ── Blocked movement ─────────────────────────────────────────────────────────

#[test]
fn move_right_blocked_by_adjacent_region() {
    let mut wa = walkabout_at(100, 100, 32, 48, 1);
    let regions = vec![Some(Rect::new(132, 100, 10, 10))];
    assert!(!wa.r#move(Direction::Right, &regions));
    assert_eq!(wa.position().topleft(), IVec2::new(100, 100));
    assert_eq!(wa.direction, Direction::Right);
}

#[test]
fn failed_move_leaves_action_unchanged() {
    let mut wa = walkabout_at(100, 100, 32, 48, 1);
    let regions = vec![Some(Rect::new(132, 100, 10, 10))];
    assert_eq!(wa.action, Action::Stand);
    assert!(!wa.r#move(Direction::Right, &regions));
    assert_eq!(wa.action, Action::Stand, "action must not change on failure");
}

#[test]
fn successful_move_sets_walk() {
    let mut wa = walkabout_at(0, 0, 8, 8, 1);
    assert!(wa.r#move(Direction::Left, &OPEN));
    assert_eq!(wa.action, Action::Walk);
}

#[test]
fn direction_updates_even_when_blocked() {
    for d in Direction::ALL {
        let mut wa = walkabout_at(50, 50, 10, 10, 2);
        // One region covering everything around the entity.
        let regions = vec![Some(Rect::new(0, 0, 200, 200))];
        let before = wa.position();
        assert!(!wa.r#move(d, &regions));
        assert_eq!(wa.direction, d);
        assert_eq!(wa.position(), before, "blocked {d} must not move");
    }
}

#[test]
fn none_regions_are_skipped() {
    let mut wa = walkabout_at(0, 0, 8, 8, 1);
    let regions: Vec<Option<Rect>> = vec![None, None, None];
    assert!(wa.r#move(Direction::Right, &regions));
}

#[test]
fn zero_speed_never_moves() {
    let mut wa = walkabout_at(10, 10, 8, 8, 0);
    assert!(!wa.r#move(Direction::Down, &OPEN));
    assert_eq!(wa.direction, Direction::Down);
    assert_eq!(wa.position().topleft(), IVec2::new(10, 10));
}

#[test]
fn speed_above_i32_range_still_moves_freely() {
    let mut wa = walkabout_at(100, 100, 32, 48, 3_000_000_000);
    assert!(wa.r#move(Direction::Right, &OPEN));
    // Step is capped where the sprite's right edge reaches i32::MAX.
    assert_eq!(wa.position().topleft(), IVec2::new(i32::MAX - 32, 100));
    assert_eq!(wa.position().bottomright().x, i32::MAX);
}

#[test]
fn speed_at_i32_max_moves_without_overflow() {
    for d in Direction::ALL {
        let mut wa = walkabout_at(100, 100, 32, 48, i32::MAX as u32);
        assert!(wa.r#move(d, &OPEN), "{d} at speed i32::MAX should succeed");
        assert_eq!(wa.position().size(), UVec2::new(32, 48));
    }
}

#[test]
fn max_speed_left_stops_inside_coordinate_range() {
    let mut wa = walkabout_at(100, 100, 32, 48, u32::MAX);
    assert!(wa.r#move(Direction::Left, &OPEN));
    assert_eq!(wa.position().topleft(), IVec2::new(100 - i32::MAX, 100));
}

#[test]
fn at_coordinate_edge_step_counts_as_blocked() {
    let mut wa = walkabout_at(i32::MAX - 32, 0, 32, 48, 5);
    assert!(!wa.r#move(Direction::Right, &OPEN));
    assert_eq!(wa.position().topleft(), IVec2::new(i32::MAX - 32, 0));
    assert_eq!(wa.direction, Direction::Right);
    assert_eq!(wa.action, Action::Stand);
}

// ── Graceful degradation ─────────────────────────────────────────────────────

#[test]
fn full_step_blocked_falls_back_to_smaller_step_right() {
    // Entity spans x in [0, 10). Wall starts at x = 13.
    // speed 5: probe width 15 → hits; 4 → 14 hits; 3 → 13 clear.
    let mut wa = walkabout_at(0, 0, 10, 10, 5);
    let regions = vec![Some(Rect::new(13, 0, 5, 10))];
    assert!(wa.r#move(Direction::Right, &regions));
    assert_eq!(wa.position().topleft(), IVec2::new(3, 0));
}

#[test]
fn full_step_blocked_falls_back_to_smaller_step_down() {
    let mut wa = walkabout_at(0, 0, 10, 10, 4);
    let regions = vec![Some(Rect::new(0, 12, 10, 5))];
    assert!(wa.r#move(Direction::Down, &regions));
    assert_eq!(wa.position().topleft(), IVec2::new(0, 2));
}

#[test]
fn full_step_blocked_falls_back_to_smaller_step_left() {
    // Probe for `pixels` starts at x = -pixels with width 10 - pixels.
    // Wall covers x in [-10, -2): pixels 4 and 3 overlap, pixels 2 is clear.
    let mut wa = walkabout_at(0, 0, 10, 10, 4);
    let regions = vec![Some(Rect::new(-10, 0, 8, 10))];
    assert!(wa.r#move(Direction::Left, &regions));
    assert_eq!(wa.position().topleft(), IVec2::new(-2, 0));
}

#[test]
fn full_step_blocked_falls_back_to_smaller_step_up() {
    let mut wa = walkabout_at(0, 0, 10, 10, 3);
    let regions = vec![Some(Rect::new(0, -10, 10, 9))];
    assert!(wa.r#move(Direction::Up, &regions));
    assert_eq!(wa.position().topleft(), IVec2::new(0, -1));
}

#[test]
fn all_step_sizes_blocked_returns_false() {
    let mut wa = walkabout_at(0, 0, 10, 10, 4);
    let regions = vec![Some(Rect::new(10, 0, 5, 10))];
    assert!(!wa.r#move(Direction::Right, &regions));
    assert_eq!(wa.position(), Rect::new(0, 0, 10, 10));
}

// ── Probe shape ──────────────────────────────────────────────────────────────

#[test]
fn up_probe_does_not_reach_old_bottom_edge() {
    // Moving up by 1 from y = 0 with h = 10 probes y in [-1, 8): a region on
    // the entity's last row (y = 9) is ignored.
    let mut wa = walkabout_at(0, 0, 10, 10, 1);
    let regions = vec![Some(Rect::new(0, 9, 10, 1))];
    assert!(wa.r#move(Direction::Up, &regions));
}

#[test]
fn down_probe_includes_current_area() {
    // Moving down probes from the current top-left, so a region overlapping
    // the entity's current first row blocks the step.
    let mut wa = walkabout_at(0, 0, 10, 10, 1);
    let regions = vec![Some(Rect::new(0, 0, 10, 1))];
    assert!(!wa.r#move(Direction::Down, &regions));
}

// ── Tile map oracle ──────────────────────────────────────────────────────────

#[test]
fn walks_until_tile_wall() {
    let map = TileMap::from_rows(&["....#"], 16, 16).unwrap();
    let mut wa = walkabout_at(0, 0, 16, 16, 5);
    let mut steps = 0;
    while wa.r#move(Direction::Right, &map) {
        steps += 1;
        assert!(steps < 100, "entity walked through the wall");
    }
    // Wall starts at x = 64; entity's right edge stops there.
    assert_eq!(wa.position().bottomright().x, 64);
}
