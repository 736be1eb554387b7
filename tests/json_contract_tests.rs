use chart_base::chart::{CHART_SNAPSHOT_JSON_SCHEMA_V1, ChartBase, ChartPhase, ChartSnapshot};
use chart_base::core::{Bounds, PartialChartOptions, PartialPadding};
use chart_base::scene::RetainedScene;

fn bootstrapped_snapshot() -> ChartSnapshot {
    let mut scene = RetainedScene::new();
    let container = scene
        .create_container(Bounds::new(300.0, 200.0))
        .expect("container");
    let mut chart: ChartBase<RetainedScene> =
        ChartBase::new(&mut scene, container).expect("mount chart");
    chart
        .bootstrap(&mut scene, PartialPadding::default().with_left(50.0).into())
        .expect("bootstrap");
    chart.snapshot()
}

#[test]
fn snapshot_captures_resolved_state() {
    let snapshot = bootstrapped_snapshot();
    assert_eq!(snapshot.phase, ChartPhase::Bootstrapped);
    assert_eq!(snapshot.width, 240.0);
    assert_eq!(snapshot.height, 180.0);
    let options = snapshot.options.expect("options");
    assert_eq!(options.padding.left, 50.0);
    assert_eq!(options.padding.right, 10.0);
    let layout = snapshot.layout.expect("layout");
    assert_eq!(layout.container, Bounds::new(300.0, 200.0));
}

#[test]
fn constructed_snapshot_has_no_options() {
    let mut scene = RetainedScene::new();
    let container = scene
        .create_container(Bounds::new(10.0, 10.0))
        .expect("container");
    let chart: ChartBase<RetainedScene> =
        ChartBase::new(&mut scene, container).expect("mount chart");

    let snapshot = chart.snapshot();
    assert_eq!(snapshot.phase, ChartPhase::Constructed);
    assert!(snapshot.options.is_none());
    assert!(snapshot.layout.is_none());
    assert_eq!(snapshot.width, 0.0);
}

#[test]
fn snapshot_contract_v1_parses_back() {
    let snapshot = bootstrapped_snapshot();
    let json = snapshot
        .to_json_contract_v1_pretty()
        .expect("serialize contract");
    assert!(json.contains("\"schema_version\": 1"));

    let parsed = ChartSnapshot::from_json_compat_str(&json).expect("parse contract");
    assert_eq!(parsed, snapshot);
}

#[test]
fn bare_snapshot_json_is_accepted() {
    let snapshot = bootstrapped_snapshot();
    let json = snapshot.to_json_pretty().expect("serialize");
    let parsed = ChartSnapshot::from_json_compat_str(&json).expect("parse bare");
    assert_eq!(parsed, snapshot);
}

#[test]
fn unsupported_schema_version_is_rejected() {
    let snapshot = bootstrapped_snapshot();
    let mut value: serde_json::Value = serde_json::from_str(
        &snapshot
            .to_json_contract_v1_pretty()
            .expect("serialize contract"),
    )
    .expect("json value");
    value["schema_version"] = serde_json::json!(CHART_SNAPSHOT_JSON_SCHEMA_V1 + 1);

    let err = ChartSnapshot::from_json_compat_str(&value.to_string()).expect_err("version");
    assert!(
        err.to_string()
            .contains("chart snapshot schema_version 2 is not supported (expected 1)")
    );
}

#[test]
fn parse_errors_name_the_rejected_form() {
    let err = ChartSnapshot::from_json_compat_str(r#"{ "id": "00000001", "width": 3 "#)
        .expect_err("truncated");
    assert!(err.to_string().contains("chart snapshot is not valid json"));

    let err =
        ChartSnapshot::from_json_compat_str(r#"{ "id": "00000001", "phase": "Bootstrapped" }"#)
            .expect_err("bare snapshot missing fields");
    assert!(err.to_string().contains("bare chart snapshot rejected"));

    let err = ChartSnapshot::from_json_compat_str(
        r#"{ "schema_version": 1, "snapshot": { "id": "00000001", "width": "wide" } }"#,
    )
    .expect_err("versioned snapshot with bad payload");
    assert!(err.to_string().contains("versioned chart snapshot rejected"));

    let err = ChartSnapshot::from_json_compat_str(r#"{ "schema_version": "one", "snapshot": {} }"#)
        .expect_err("non-numeric version");
    assert!(err.to_string().contains("schema_version \"one\" is not supported"));
}

#[test]
fn contract_v1_wraps_the_same_snapshot_as_bare_json() {
    let snapshot = bootstrapped_snapshot();
    let bare: serde_json::Value =
        serde_json::from_str(&snapshot.to_json_pretty().expect("bare")).expect("json");
    let versioned: serde_json::Value = serde_json::from_str(
        &snapshot
            .to_json_contract_v1_pretty()
            .expect("serialize contract"),
    )
    .expect("json");
    assert_eq!(versioned["schema_version"], serde_json::json!(1));
    assert_eq!(versioned["snapshot"], bare);
}

#[test]
fn partial_options_round_trip_through_json() {
    let partial = PartialChartOptions::default()
        .with_padding(PartialPadding::default().with_top(4.0))
        .with_animation_duration(300.0);
    let json = serde_json::to_string(&partial).expect("serialize");
    assert_eq!(json, r#"{"padding":{"top":4.0},"animation":{"duration":300.0}}"#);
    assert_eq!(
        PartialChartOptions::from_json_str(&json).expect("parse"),
        partial
    );
}
