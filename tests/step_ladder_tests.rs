use time_ruler::RulerError;
use time_ruler::core::{
    Granularity, GranularityName, MIN_PX_PER_UNIT, RulerPreset, StepLadder, UnitSizeSet,
    ZoomDirection,
};

fn minutes_ladder() -> StepLadder {
    RulerPreset::Minutes.ladder()
}

#[test]
fn minutes_ladder_resolves_every_preset_unit_size() {
    let ladder = minutes_ladder();
    let resolved: Vec<(u32, Option<GranularityName>)> = RulerPreset::Minutes
        .unit_sizes()
        .as_slice()
        .iter()
        .map(|&unit| (unit, ladder.resolve(unit).map(|g| g.name)))
        .collect();

    assert_eq!(
        resolved,
        vec![
            (1, Some(GranularityName::Short)),
            (5, Some(GranularityName::Medium)),
            (10, Some(GranularityName::Medium)),
            (15, Some(GranularityName::Medium)),
            (20, Some(GranularityName::Medium)),
            (30, Some(GranularityName::Medium)),
            (60, Some(GranularityName::Medium)),
        ]
    );
}

#[test]
fn resolution_is_deterministic() {
    let ladder = minutes_ladder();
    for unit in 1..=1500 {
        assert_eq!(ladder.resolve(unit), ladder.resolve(unit), "unit {unit}");
    }
}

#[test]
fn largest_boundary_node_short_circuits_to_coarsest() {
    let ladder = minutes_ladder();
    let resolved = ladder.resolve(1440).expect("largest node resolves");
    assert_eq!(resolved.name, GranularityName::Long);
    assert_eq!(Some(resolved), ladder.coarsest());
}

#[test]
fn sizes_without_divisible_node_do_not_resolve() {
    let ladder = minutes_ladder();
    assert_eq!(ladder.resolve(7), None);
    assert_eq!(ladder.resolve(2000), None);
}

#[test]
fn seconds_ladder_uses_hour_as_largest_node() {
    let ladder = RulerPreset::Seconds.ladder();
    assert_eq!(ladder.boundary_nodes(), &[60, 3600]);
    assert_eq!(
        ladder.resolve(1).map(|g| g.name),
        Some(GranularityName::Short)
    );
    assert_eq!(
        ladder.resolve(3600).map(|g| g.name),
        Some(GranularityName::Long)
    );
}

#[test]
fn custom_single_step_ladder_resolves_against_its_nodes() {
    let long = Granularity::new(GranularityName::Long, 30.0, 2).expect("granularity");
    let ladder = StepLadder::new([long], [60, 1440]).expect("ladder");

    assert_eq!(ladder.resolve(60), Some(long));
    assert_eq!(ladder.first_boundary(), 60);
}

#[test]
fn malformed_ladders_are_rejected() {
    let short = Granularity::new(GranularityName::Short, 5.0, 5).expect("granularity");

    let empty_steps = StepLadder::new(Vec::<Granularity>::new(), [60]);
    assert!(matches!(empty_steps, Err(RulerError::InvalidData(_))));

    let empty_nodes = StepLadder::new([short], Vec::<u32>::new());
    assert!(matches!(empty_nodes, Err(RulerError::InvalidData(_))));

    let unsorted_nodes = StepLadder::new([short], [1440, 60]);
    assert!(matches!(unsorted_nodes, Err(RulerError::InvalidData(_))));

    assert!(Granularity::new(GranularityName::Short, 0.0, 5).is_err());
    assert!(Granularity::new(GranularityName::Short, f64::NAN, 5).is_err());
    assert!(Granularity::new(GranularityName::Short, 5.0, 0).is_err());
}

#[test]
fn unit_size_set_steps_one_index_and_clamps() {
    let sizes = RulerPreset::Minutes.unit_sizes();
    let last = sizes.len() - 1;

    assert_eq!(sizes.step(last, ZoomDirection::In), Some(last - 1));
    assert_eq!(sizes.step(last, ZoomDirection::Out), None);
    assert_eq!(sizes.step(0, ZoomDirection::In), None);
    assert_eq!(sizes.step(0, ZoomDirection::Out), Some(1));
    assert_eq!(sizes.index_of(30), Some(5));
    assert!(!sizes.contains(45));
}

#[test]
fn unit_size_set_rejects_unordered_or_zero_sizes() {
    assert!(UnitSizeSet::new([5, 1]).is_err());
    assert!(UnitSizeSet::new([0, 5]).is_err());
    assert!(UnitSizeSet::new([5, 5]).is_err());
    assert!(UnitSizeSet::new(Vec::<u32>::new()).is_err());
}

#[test]
fn wheel_delta_sign_picks_direction() {
    assert_eq!(ZoomDirection::from_wheel_delta(-120.0), ZoomDirection::In);
    assert_eq!(ZoomDirection::from_wheel_delta(120.0), ZoomDirection::Out);
    assert_eq!(ZoomDirection::from_wheel_delta(0.0), ZoomDirection::Out);
}

#[test]
fn sub_half_pixel_steps_are_rejected() {
    assert!(Granularity::new(GranularityName::Short, 1e-9, 5).is_err());
    assert!(Granularity::new(GranularityName::Short, 0.49, 5).is_err());
    assert!(Granularity::new(GranularityName::Short, MIN_PX_PER_UNIT, 5).is_ok());
}

#[test]
fn config_with_degenerate_ladder_from_json_is_rejected() {
    let config = time_ruler::TimeRulerConfig::new(time_ruler::core::Viewport::new(600, 40));
    let mut value = serde_json::to_value(&config).expect("serialize");
    value["ladder"]["steps"][0]["px_per_unit"] = serde_json::json!(1e-9);
    let parsed =
        time_ruler::TimeRulerConfig::from_json_compat_str(&value.to_string()).expect("json parses");

    let result = time_ruler::TimeRuler::<time_ruler::render::NullRenderer>::new(parsed);
    assert!(matches!(result, Err(RulerError::InvalidData(_))));
}
