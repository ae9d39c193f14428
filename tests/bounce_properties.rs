use bouncing_sprite::sim::{
    CanvasBounds, SimPhase, SimState, SpriteState, TickInput, step, tick,
};
use bouncing_sprite::{App, LabelColor, Settings, Sprite, SpriteError};
use glam::Vec2;
use proptest::prelude::*;

const W: f32 = 800.0;
const H: f32 = 600.0;

fn bounds() -> CanvasBounds {
    CanvasBounds::new(W, H)
}

fn velocity() -> impl Strategy<Value = (f32, f32)> {
    // Whole pixels per tick, like the real app
    (-10i32..=10, -10i32..=10).prop_map(|(dx, dy)| (dx as f32, dy as f32))
}

proptest! {
    #[test]
    fn paused_ticks_leave_state_unchanged(
        x in 0.0f32..W,
        y in 0.0f32..H,
        (dx, dy) in velocity(),
        ticks in 1usize..50,
    ) {
        let sprite = SpriteState::new(Vec2::new(x, y), Vec2::new(dx, dy), Vec2::new(40.0, 30.0));
        let mut state = SimState::new(sprite, bounds(), 1);
        state.toggle_pause();

        for _ in 0..ticks {
            let outcome = tick(&mut state, &TickInput::default());
            prop_assert!(!outcome.advanced);
            prop_assert!(outcome.recolor.is_none());
        }
        prop_assert_eq!(state.sprite, sprite);
        prop_assert_eq!(state.label_color, LabelColor::BLACK);
        prop_assert_eq!(state.time_ticks, 0);
    }

    #[test]
    fn interior_moves_by_velocity(
        hw in 0.0f32..100.0,
        hh in 0.0f32..100.0,
        (dx, dy) in velocity(),
        fx in 0.0f32..1.0,
        fy in 0.0f32..1.0,
    ) {
        // Pick a position whose advanced box stays strictly inside
        let min_x = hw - dx + 1.0;
        let max_x = W - hw - dx - 1.0;
        let min_y = hh - dy + 1.0;
        let max_y = H - hh - dy - 1.0;
        prop_assume!(min_x < max_x && min_y < max_y);
        let pos = Vec2::new(min_x + (max_x - min_x) * fx, min_y + (max_y - min_y) * fy);

        let sprite = SpriteState::new(pos, Vec2::new(dx, dy), Vec2::new(hw, hh));
        let (next, flags) = step(&sprite, &bounds());

        prop_assert!(!flags.any());
        prop_assert_eq!(next.vel, sprite.vel);
        prop_assert_eq!(next.pos, pos + Vec2::new(dx, dy));
    }

    #[test]
    fn recolor_only_on_bounce(
        seed in any::<u64>(),
        (dx, dy) in velocity(),
    ) {
        let sprite = SpriteState::centered(&bounds(), Vec2::new(40.0, 30.0));
        let sprite = SpriteState { vel: Vec2::new(dx, dy), ..sprite };
        let mut state = SimState::new(sprite, bounds(), seed);

        for _ in 0..400 {
            let before = state.label_color;
            let outcome = tick(&mut state, &TickInput::default());
            prop_assert_eq!(outcome.recolor.is_some(), outcome.bounces.any());
            if let Some(color) = outcome.recolor {
                prop_assert_eq!(state.label_color, color);
                prop_assert!(color.r >= 64 && color.g >= 64 && color.b >= 64);
            } else {
                prop_assert_eq!(state.label_color, before);
            }
        }
    }

    #[test]
    fn sprite_never_escapes_by_more_than_one_step(
        (dx, dy) in velocity(),
        hw in 1.0f32..80.0,
        hh in 1.0f32..80.0,
    ) {
        let sprite = SpriteState::new(bounds().center(), Vec2::new(dx, dy), Vec2::new(hw, hh));
        let mut state = SimState::new(sprite, bounds(), 3);

        for _ in 0..2000 {
            tick(&mut state, &TickInput::default());
            let (min, max) = state.sprite.aabb();
            prop_assert!(min.x >= -dx.abs() && max.x <= W + dx.abs());
            prop_assert!(min.y >= -dy.abs() && max.y <= H + dy.abs());
        }
    }
}

#[test]
fn right_wall_example() {
    let sprite = SpriteState::new(
        Vec2::new(760.0, 300.0),
        Vec2::new(4.0, 3.0),
        Vec2::new(40.0, 30.0),
    );
    let mut state = SimState::new(sprite, bounds(), 99);
    let outcome = tick(&mut state, &TickInput::default());

    assert_eq!(state.sprite.pos.x, 764.0);
    assert_eq!(state.sprite.vel.x, -4.0);
    assert!(outcome.bounces.horizontal);
    assert!(outcome.recolor.is_some());
}

#[test]
fn double_toggle_is_a_no_op() {
    let sprite = SpriteState::centered(&bounds(), Vec2::new(40.0, 30.0));
    let mut toggled = SimState::new(sprite, bounds(), 5);
    let mut plain = SimState::new(sprite, bounds(), 5);

    toggled.toggle_pause();
    assert_eq!(toggled.phase, SimPhase::Paused);
    toggled.toggle_pause();
    assert_eq!(toggled.phase, SimPhase::Running);
    assert_eq!(toggled.sprite, plain.sprite);

    for _ in 0..300 {
        let a = tick(&mut toggled, &TickInput::default());
        let b = tick(&mut plain, &TickInput::default());
        assert_eq!(a, b);
    }
    assert_eq!(toggled.sprite, plain.sprite);
}

#[test]
fn app_with_missing_image_runs_on_glyph() {
    let settings = Settings {
        sprite_image_path: Some("no/such/burger.png".to_string()),
        seed: Some(11),
        ..Default::default()
    };
    let missing = |path: &str| -> Result<(u32, u32), SpriteError> {
        Err(SpriteError::NotFound(path.to_string()))
    };
    let sprite = Sprite::select(
        settings.sprite_image_path.as_deref(),
        &missing,
        settings.canvas_height,
        settings.glyph_sprite(),
    );
    assert!(sprite.is_glyph());

    let seed = settings.seed_or_clock();
    let mut app = App::new(settings, sprite, seed);
    let report = app.run_ticks(1200);
    assert_eq!(report.ticks, 1200);
    assert_eq!(report.advanced, 1200);
    assert!(report.recolors > 0);
}
