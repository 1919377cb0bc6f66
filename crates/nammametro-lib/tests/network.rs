use nammametro_lib::{build_network, default_lines, LineDefinition};

#[test]
fn adjacency_is_symmetric() {
    let network = build_network(&default_lines());
    let graph = network.graph();
    for id in 0..graph.node_count() {
        for &other in graph.neighbours(id) {
            assert!(
                graph.neighbours(other).contains(&id),
                "{} -> {} has no reverse edge",
                network.station_name(id),
                network.station_name(other)
            );
        }
    }
}

#[test]
fn edges_only_join_consecutive_stops() {
    let lines = default_lines();
    let network = build_network(&lines);

    let mut expected = 0;
    for line in &lines {
        for pair in line.stations.windows(2) {
            let a = network.lookup(&pair[0].name).expect("first stop");
            let b = network.lookup(&pair[1].name).expect("second stop");
            assert!(network.graph().has_edge(a, b));
            expected += 1;
        }
    }
    assert_eq!(network.graph().edge_count(), expected);
}

#[test]
fn shared_stations_collect_every_line() {
    let network = build_network(&default_lines());

    let majestic = network.lookup("Majestic").expect("majestic");
    let station = network.station(majestic).expect("station");
    assert_eq!(station.lines, vec!["purple", "green"]);

    let mg_road = network.lookup("M.G. Road").expect("mg road");
    assert_eq!(network.lookup("mg road"), Some(mg_road));
    let station = network.station(mg_road).expect("station");
    assert_eq!(station.lines, vec!["purple", "pink"]);

    let jayadeva = network.lookup("Jayadeva Hospital").expect("jayadeva");
    assert!(network.station(jayadeva).expect("station").is_interchange());
}

#[test]
fn builds_are_deterministic() {
    let first = build_network(&default_lines());
    let second = build_network(&default_lines());

    let names = |network: &nammametro_lib::Network| {
        network
            .stations()
            .map(|station| (station.id, station.key.clone(), station.lines.clone()))
            .collect::<Vec<_>>()
    };
    assert_eq!(names(&first), names(&second));
    assert_eq!(
        first.graph().edges().collect::<Vec<_>>(),
        second.graph().edges().collect::<Vec<_>>()
    );
}

#[test]
fn station_ids_follow_first_appearance() {
    let network = build_network(&[
        LineDefinition::open("one", ["Zeta", "Alpha"]),
        LineDefinition::open("two", ["Alpha", "Beta"]),
    ]);
    assert_eq!(network.lookup("zeta"), Some(0));
    assert_eq!(network.lookup("alpha"), Some(1));
    assert_eq!(network.lookup("beta"), Some(2));
    assert_eq!(network.line_labels(), ["one", "two"]);
}
