use chrono::{Duration, NaiveDate, NaiveDateTime};
use proptest::prelude::*;
use time_ruler::api::{HighlightInterval, TickKind, TimeRuler};
use time_ruler::core::{RulerPreset, Viewport};
use time_ruler::interaction::PointerEvent;
use time_ruler::render::NullRenderer;
use time_ruler::TimeRulerConfig;

const UNIT_SIZES: [u32; 7] = [1, 5, 10, 15, 20, 30, 60];

fn reference(offset_seconds: i64) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .expect("valid time")
        + Duration::seconds(offset_seconds)
}

fn preset_strategy() -> impl Strategy<Value = RulerPreset> {
    prop_oneof![Just(RulerPreset::Minutes), Just(RulerPreset::Seconds)]
}

fn ruler(
    preset: RulerPreset,
    width: u32,
    unit_size: u32,
    reference_time: NaiveDateTime,
) -> TimeRuler<NullRenderer> {
    let config = TimeRulerConfig::from_preset(Viewport::new(width, 40), preset)
        .with_unit_size(unit_size)
        .with_reference_time(reference_time);
    TimeRuler::with_renderer(NullRenderer::default(), config).expect("ruler init")
}

proptest! {
    #[test]
    fn pixel_round_trip_stays_within_one_step(
        preset in preset_strategy(),
        width in 100u32..2_000,
        unit_index in 0usize..UNIT_SIZES.len(),
        offset_seconds in 0i64..172_800,
        fraction in 0.0f64..1.0
    ) {
        let ruler = ruler(preset, width, UNIT_SIZES[unit_index], reference(offset_seconds));
        let x = fraction * f64::from(width);
        let time = ruler.time_at(x).expect("time at x");
        let back = ruler.pixel_of(time);

        prop_assert!((back - x).abs() < ruler.granularity().px_per_unit);
    }

    #[test]
    fn time_at_is_monotonic(
        preset in preset_strategy(),
        unit_index in 0usize..UNIT_SIZES.len(),
        offset_seconds in 0i64..172_800,
        a in 0.0f64..1_000.0,
        b in 0.0f64..1_000.0
    ) {
        let ruler = ruler(preset, 1_000, UNIT_SIZES[unit_index], reference(offset_seconds));
        let (left, right) = if a <= b { (a, b) } else { (b, a) };
        let t_left = ruler.time_at(left).expect("left time");
        let t_right = ruler.time_at(right).expect("right time");
        prop_assert!(t_left <= t_right);
    }

    #[test]
    fn tick_plan_stays_inside_viewport_with_single_divide_point(
        preset in preset_strategy(),
        width in 1u32..2_000,
        unit_index in 0usize..UNIT_SIZES.len(),
        offset_seconds in 0i64..172_800
    ) {
        let ruler = ruler(preset, width, UNIT_SIZES[unit_index], reference(offset_seconds));
        let plan = ruler.tick_plan(ruler.reference_time());

        let dividers = plan.ticks.iter().filter(|tick| tick.kind == TickKind::Divide).count();
        prop_assert_eq!(dividers, 1);
        for tick in plan.ticks.iter().skip(1) {
            prop_assert!(tick.x >= 0.0 && tick.x <= f64::from(width));
        }
        let center = f64::from(width / 2);
        let divide = plan.divide_point().expect("divide point");
        prop_assert!(divide.x <= center + 1e-9);
    }

    #[test]
    fn wheel_sequences_stay_inside_unit_set(
        deltas in prop::collection::vec(prop_oneof![Just(-120.0f64), Just(120.0f64)], 0..40)
    ) {
        let mut ruler = ruler(RulerPreset::Minutes, 800, 60, reference(43_200));
        let reference_time = ruler.reference_time();
        for delta in deltas {
            let before = ruler.unit_sizes().index_of(ruler.unit_size()).expect("index");
            let transition = ruler.on_wheel_event(delta).expect("wheel");
            let after = ruler.unit_sizes().index_of(ruler.unit_size()).expect("index");
            prop_assert!(before.abs_diff(after) <= 1);
            prop_assert_eq!(transition.rendered, before != after);
        }
        prop_assert_eq!(ruler.reference_time(), reference_time);
    }

    #[test]
    fn drag_then_pointer_out_restores_reference(
        down_x in 0.0f64..800.0,
        moves in prop::collection::vec(0.0f64..800.0, 1..10)
    ) {
        let start = reference(43_200);
        let mut ruler = ruler(RulerPreset::Minutes, 800, 60, start);
        ruler.on_pointer_event(PointerEvent::down(down_x, 10.0)).expect("down");
        for x in moves {
            ruler.on_pointer_event(PointerEvent::moved(x, 10.0)).expect("move");
        }
        ruler.on_pointer_event(PointerEvent::out(0.0, 10.0)).expect("out");

        prop_assert_eq!(ruler.reference_time(), start);
        prop_assert_eq!(ruler.transient_drag_time(), None);
    }

    #[test]
    fn future_highlights_project_right_of_center(
        start_hours in 1i64..12,
        length_hours in 1i64..12
    ) {
        let now = reference(43_200);
        let mut ruler = ruler(RulerPreset::Minutes, 800, 60, now);
        let interval = HighlightInterval::new(
            now + Duration::hours(start_hours),
            now + Duration::hours(start_hours + length_hours),
        );
        ruler.set_highlighted_intervals(vec![interval], None).expect("highlights");

        let span = ruler
            .last_frame()
            .and_then(|frame| frame.rects().nth(2))
            .copied()
            .expect("highlight rect");
        prop_assert!(span.x > 400.0);
        prop_assert!(span.width > 0.0);
    }
}
