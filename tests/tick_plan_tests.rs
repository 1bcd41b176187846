use approx::assert_relative_eq;
use chrono::{NaiveDate, NaiveDateTime};
use time_ruler::TimeRulerConfig;
use time_ruler::api::{TickKind, TimeRuler};
use time_ruler::core::{
    Granularity, GranularityName, LabelFormat, RulerPreset, StepLadder, UnitSizeSet, Viewport,
};
use time_ruler::render::NullRenderer;

fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .and_then(|d| d.and_hms_opt(h, m, s))
        .expect("valid time")
}

fn ruler(config: TimeRulerConfig) -> TimeRuler<NullRenderer> {
    TimeRuler::with_renderer(NullRenderer::default(), config).expect("ruler init")
}

fn hourly_long_ladder() -> StepLadder {
    let long = Granularity::new(GranularityName::Long, 30.0, 2).expect("granularity");
    StepLadder::new([long], [60, 1440]).expect("ladder")
}

#[test]
fn noon_reference_places_divide_point_at_center() {
    let config = TimeRulerConfig::new(Viewport::new(600, 40))
        .with_ladder(hourly_long_ladder())
        .with_unit_size(60)
        .with_reference_time(at(12, 0, 0));
    let ruler = ruler(config);

    let plan = ruler.tick_plan(ruler.reference_time());
    let divide = plan.divide_point().expect("divide point");
    assert_eq!(divide.kind, TickKind::Divide);
    assert_relative_eq!(divide.x, 300.0);
    assert_eq!(divide.time, at(12, 0, 0));
    assert_eq!(divide.label.as_deref(), Some("12:00"));

    for tick in &plan.ticks {
        let steps = (tick.x - 300.0) / 30.0;
        assert_relative_eq!(steps, steps.round());
        assert!(tick.x >= 0.0 && tick.x <= 600.0);
    }
    assert_eq!(plan.ticks.len(), 21);
}

#[test]
fn group_of_two_alternates_minor_and_labeled_major() {
    let config = TimeRulerConfig::new(Viewport::new(600, 40))
        .with_ladder(hourly_long_ladder())
        .with_unit_size(60)
        .with_reference_time(at(12, 0, 0));
    let ruler = ruler(config);
    let plan = ruler.tick_plan(ruler.reference_time());

    let right: Vec<_> = plan.ticks.iter().filter(|tick| tick.x > 300.0).collect();
    assert_eq!(right[0].kind, TickKind::Minor);
    assert_eq!(right[0].time, at(13, 0, 0));
    assert_eq!(right[0].label, None);
    assert_eq!(right[1].kind, TickKind::Major);
    assert_eq!(right[1].label.as_deref(), Some("14:00"));

    let left: Vec<_> = plan.ticks.iter().filter(|tick| tick.x < 300.0).collect();
    assert_eq!(left[0].time, at(11, 0, 0));
    assert_eq!(left[1].label.as_deref(), Some("10:00"));
}

#[test]
fn default_minutes_ladder_uses_medium_step_for_hour_units() {
    let config = TimeRulerConfig::new(Viewport::new(600, 40))
        .with_unit_size(60)
        .with_reference_time(at(12, 0, 0));
    let ruler = ruler(config);
    let plan = ruler.tick_plan(ruler.reference_time());

    assert_eq!(plan.granularity.name, GranularityName::Medium);
    assert_eq!(plan.ticks.len(), 31);
    let divide = plan.divide_point().expect("divide point");
    assert_relative_eq!(divide.x, 300.0);

    let majors: Vec<_> = plan
        .ticks
        .iter()
        .filter(|tick| tick.kind == TickKind::Major && tick.x > 300.0)
        .collect();
    assert_relative_eq!(majors[0].x, 360.0);
    assert_eq!(majors[0].label.as_deref(), Some("15:00"));
}

#[test]
fn fine_grid_divide_point_aligns_to_quarter_hour() {
    let config = TimeRulerConfig::new(Viewport::new(600, 40))
        .with_unit_size(1)
        .with_reference_time(at(12, 7, 0));
    let ruler = ruler(config);
    let plan = ruler.tick_plan(ruler.reference_time());

    let divide = plan.divide_point().expect("divide point");
    assert_eq!(divide.time, at(12, 0, 0));
    assert_relative_eq!(divide.x, 265.0);
}

#[test]
fn labels_keep_minimum_spacing_on_fine_grid() {
    let config = TimeRulerConfig::new(Viewport::new(800, 40))
        .with_unit_size(1)
        .with_reference_time(at(12, 0, 0));
    let ruler = ruler(config);
    let plan = ruler.tick_plan(ruler.reference_time());

    let mut right: Vec<f64> = plan.labels().map(|(x, _)| x).filter(|x| *x >= 400.0).collect();
    right.sort_by(f64::total_cmp);
    assert!(right.len() >= 3);
    for pair in right.windows(2) {
        assert!(pair[1] - pair[0] >= 60.0, "labels too close: {pair:?}");
    }
}

#[test]
fn seconds_preset_aligns_divide_point_to_fifteen_seconds() {
    let config = TimeRulerConfig::from_preset(Viewport::new(600, 40), RulerPreset::Seconds)
        .with_reference_time(at(12, 0, 7));
    let ruler = ruler(config);
    let plan = ruler.tick_plan(ruler.reference_time());

    let divide = plan.divide_point().expect("divide point");
    assert_eq!(divide.time, at(12, 0, 0));
    assert_relative_eq!(divide.x, 265.0);
    assert_eq!(divide.label.as_deref(), Some("12:00:00"));
    assert_relative_eq!(divide.height, 20.0);
}

#[test]
fn unit_sizes_past_first_boundary_use_coarse_labels() {
    let config = TimeRulerConfig::new(Viewport::new(600, 40))
        .with_unit_sizes(UnitSizeSet::new([60, 120]).expect("unit sizes"))
        .with_unit_size(120)
        .with_label_format(LabelFormat::new("%H:%M", "%m/%d"))
        .with_reference_time(at(0, 0, 0));
    let ruler = ruler(config);
    let plan = ruler.tick_plan(ruler.reference_time());

    assert_eq!(ruler.granularity().name, GranularityName::Medium);
    let divide = plan.divide_point().expect("divide point");
    assert_eq!(divide.label.as_deref(), Some("01/01"));
}

#[test]
fn zero_width_viewport_yields_only_divide_point() {
    let config = TimeRulerConfig::new(Viewport::new(600, 40)).with_reference_time(at(12, 0, 0));
    let mut ruler = ruler(config);
    ruler
        .on_resize(Viewport::new(0, 40))
        .expect("zero width resize");

    let plan = ruler.tick_plan(ruler.reference_time());
    assert_eq!(plan.ticks.len(), 1);
    assert_eq!(plan.ticks[0].kind, TickKind::Divide);
}

#[test]
fn unresolvable_unit_size_keeps_previous_granularity() {
    let config = TimeRulerConfig::new(Viewport::new(600, 40))
        .with_unit_sizes(UnitSizeSet::new([7, 60]).expect("unit sizes"))
        .with_unit_size(60)
        .with_reference_time(at(12, 0, 0));
    let mut ruler = ruler(config);
    assert_eq!(ruler.granularity().name, GranularityName::Medium);

    ruler.set_unit_size(7).expect("set unit size");
    assert_eq!(ruler.unit_size(), 7);
    assert_eq!(ruler.granularity().name, GranularityName::Medium);
    assert!(ruler.last_frame().is_some());
}
