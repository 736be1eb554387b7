use chart_base::core::{
    ChartOptions, MergeOptions, Padding, PartialChartClasses, PartialChartOptions, PartialPadding,
    merge_options,
};
use serde_json::json;

#[test]
fn defaults_match_documented_values() {
    let defaults = ChartOptions::default();
    assert_eq!(defaults.padding, Padding::new(10.0, 10.0, 10.0, 10.0));
    assert_eq!(defaults.classes.svg, "chart");
    assert_eq!(defaults.classes.canvas, "chart__canvas");
    assert_eq!(defaults.animation.duration, 1000.0);
    assert!(defaults.extra.is_empty());
}

#[test]
fn single_padding_leaf_overrides_only_that_side() {
    let merged = merge_options(
        ChartOptions::default(),
        PartialPadding::default().with_left(50.0).into(),
    );
    assert_eq!(merged.padding, Padding::new(10.0, 10.0, 50.0, 10.0));
    assert_eq!(merged.classes, ChartOptions::default().classes);
    assert_eq!(merged.animation, ChartOptions::default().animation);
}

#[test]
fn partial_classes_keep_sibling_default() {
    let merged = ChartOptions::default().merge(
        PartialChartOptions::default()
            .with_classes(PartialChartClasses::default().with_canvas("bars")),
    );
    assert_eq!(merged.classes.svg, "chart");
    assert_eq!(merged.classes.canvas, "bars");
}

#[test]
fn out_of_range_values_pass_through_unvalidated() {
    let merged = merge_options(
        ChartOptions::default(),
        PartialChartOptions::default()
            .with_padding(PartialPadding::default().with_top(-25.0))
            .with_animation_duration(-1.0),
    );
    assert_eq!(merged.padding.top, -25.0);
    assert_eq!(merged.animation.duration, -1.0);

    let merged = merge_options(
        ChartOptions::default(),
        PartialPadding::default().with_right(f64::NAN).into(),
    );
    assert!(merged.padding.right.is_nan());
}

#[test]
fn json_partial_merges_deeply_and_keeps_unknown_keys() {
    let partial = PartialChartOptions::from_json_str(
        r#"{
            "padding": { "left": 50 },
            "animation": {},
            "legend": { "position": "top" }
        }"#,
    )
    .expect("parse options");

    let merged = merge_options(ChartOptions::default(), partial);
    assert_eq!(merged.padding, Padding::new(10.0, 10.0, 50.0, 10.0));
    assert_eq!(merged.animation.duration, 1000.0);
    assert_eq!(merged.extra.get("legend"), Some(&json!({ "position": "top" })));
}

#[test]
fn unknown_keys_inside_groups_survive_merge_and_serialization() {
    let partial = PartialChartOptions::from_json_str(
        r#"{
            "padding": { "left": 50, "inner": 3 },
            "classes": { "legend": "chart__legend" },
            "animation": { "easing": "cubic" }
        }"#,
    )
    .expect("parse options");

    let merged = merge_options(ChartOptions::default(), partial);
    assert_eq!(merged.padding.left, 50.0);
    assert_eq!(merged.padding.top, 10.0);
    assert_eq!(merged.padding.extra.get("inner"), Some(&json!(3)));
    assert_eq!(
        merged.classes.extra.get("legend"),
        Some(&json!("chart__legend"))
    );
    assert_eq!(merged.animation.duration, 1000.0);
    assert_eq!(merged.animation.extra.get("easing"), Some(&json!("cubic")));
    assert!(merged.extra.is_empty());

    let value: serde_json::Value =
        serde_json::from_str(&merged.to_json_pretty().expect("serialize")).expect("json");
    assert_eq!(value["padding"]["inner"], json!(3));
    assert_eq!(value["padding"]["left"], json!(50.0));
    assert_eq!(value["animation"]["easing"], json!("cubic"));
}

#[test]
fn unknown_keys_merge_over_existing_extras() {
    let base = ChartOptions::default().merge(
        PartialChartOptions::default()
            .with_extra("legend", json!({ "show": true, "position": "top" })),
    );
    let merged = base.merge(
        PartialChartOptions::default().with_extra("legend", json!({ "position": "right" })),
    );
    assert_eq!(
        merged.extra.get("legend"),
        Some(&json!({ "show": true, "position": "right" }))
    );
}

#[test]
fn malformed_json_options_are_reported() {
    let err = PartialChartOptions::from_json_str(r#"{ "padding": { "left": "wide" } }"#)
        .expect_err("string padding rejected by the typed schema");
    assert!(err.to_string().contains("failed to parse chart options"));
}

#[test]
fn resolved_options_serialize_flat_with_extras() {
    let options = ChartOptions::default()
        .with_padding(Padding::uniform(4.0))
        .with_classes("pie", "pie__canvas")
        .with_animation_duration(250.0)
        .merge(PartialChartOptions::default().with_extra("donut", json!(true)));

    let value: serde_json::Value =
        serde_json::from_str(&options.to_json_pretty().expect("serialize")).expect("json");
    assert_eq!(
        value,
        json!({
            "padding": { "top": 4.0, "bottom": 4.0, "left": 4.0, "right": 4.0 },
            "classes": { "svg": "pie", "canvas": "pie__canvas" },
            "animation": { "duration": 250.0 },
            "donut": true
        })
    );
}
