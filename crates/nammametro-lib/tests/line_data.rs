mod common;

use nammametro_lib::{load_lines, resolve_lines, Error, Metro, MetroConfig, RouteOutcome};

use common::write_lines_file;

const CUSTOM_LINES: &str = r#"[
    {"label": "yellow", "stations": ["RV Road", "Ragigudda", "Jayadeva Hospital", "BTM Layout"]},
    {"label": "blue", "stations": ["Silk Board", "BTM Layout", {"name": "HSR Layout", "planned": true}]}
]"#;

#[test]
fn custom_lines_build_a_routable_network() {
    let file = write_lines_file(CUSTOM_LINES);
    let lines = load_lines(file.path()).expect("lines load");
    let metro = Metro::new(lines, true, MetroConfig::default());

    let report = metro.plan_route("rv road", "Silk Board").expect("route");
    assert_eq!(
        report.stations,
        vec!["RV Road", "Ragigudda", "Jayadeva Hospital", "BTM Layout", "Silk Board"]
    );
    assert_eq!(report.interchanges.len(), 1);
    assert_eq!(report.interchanges[0].name, "BTM Layout");
}

#[test]
fn explicit_path_wins_over_defaults() {
    let file = write_lines_file(CUSTOM_LINES);
    let lines = resolve_lines(Some(file.path())).expect("lines resolve");
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].label, "yellow");
}

#[test]
fn planned_stations_can_be_excluded() {
    let file = write_lines_file(CUSTOM_LINES);
    let lines = load_lines(file.path()).expect("lines load");

    let metro = Metro::new(lines.clone(), false, MetroConfig::default());
    assert!(matches!(
        metro.find_route("Silk Board", "HSR Layout"),
        RouteOutcome::DestinationNotFound { .. }
    ));
    assert!(metro.autocomplete("hsr").is_empty());
    assert!(metro
        .list_stations(false)
        .iter()
        .all(|station| !station.planned));

    let metro = Metro::new(lines, true, MetroConfig::default());
    assert!(metro.find_route("Silk Board", "HSR Layout").is_found());
    assert_eq!(metro.autocomplete("hsr"), vec!["HSR Layout"]);
}

#[test]
fn invalid_files_are_rejected() {
    let file = write_lines_file(r#"[{"label": "", "stations": ["A"]}]"#);
    let err = load_lines(file.path()).expect_err("blank label");
    assert!(matches!(err, Error::InvalidLineData { .. }));

    let file = write_lines_file("not json at all");
    assert!(matches!(load_lines(file.path()), Err(Error::Json(_))));
}

#[test]
fn line_summaries_count_stations() {
    let file = write_lines_file(CUSTOM_LINES);
    let metro = Metro::new(
        load_lines(file.path()).expect("lines load"),
        true,
        MetroConfig::default(),
    );
    let summaries = metro.line_summaries();
    assert_eq!(summaries.len(), 2);
    assert_eq!((summaries[0].label.as_str(), summaries[0].stations), ("yellow", 4));
    assert_eq!((summaries[1].label.as_str(), summaries[1].stations), ("blue", 3));
}
