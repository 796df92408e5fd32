mod common;

use roomtrack_lib::{
    build_graph, directions, network_polylines, node_details, polylines, RouteSegment,
};

use common::{campus_records, indication, line_records, location, names};

fn segment(from: &str, to: &str, info: &str) -> RouteSegment {
    RouteSegment {
        from: from.to_string(),
        to: to.to_string(),
        info: info.to_string(),
    }
}

#[test]
fn three_node_path_has_two_segments() {
    let records = line_records();
    let route = directions(&names(&["A", "B", "C"]), &records.indications);

    // Walking A->B over an (A, B) record: name_a is not the destination, so
    // the backward text is used.
    assert_eq!(
        route,
        vec![segment("A", "B", "B to A"), segment("B", "C", "C to B")]
    );
}

#[test]
fn record_keyed_on_destination_uses_forward_text() {
    let records = line_records();
    let route = directions(&names(&["C", "B", "A"]), &records.indications);

    assert_eq!(
        route,
        vec![segment("C", "B", "B to C"), segment("B", "A", "A to B")]
    );
}

#[test]
fn first_matching_indication_wins() {
    let indications = vec![
        indication("X", "Y", "first forward", "first backward"),
        indication("Y", "X", "second forward", "second backward"),
    ];
    let route = directions(&names(&["X", "Y"]), &indications);
    assert_eq!(route, vec![segment("X", "Y", "first backward")]);
}

#[test]
fn segments_without_indication_are_omitted() {
    let records = campus_records();
    let route = directions(&names(&["Lobby", "Hall1", "Lab"]), &records.indications);

    assert_eq!(route.len(), 1);
    assert_eq!(route[0].to, "Hall1");
}

#[test]
fn trivial_and_empty_paths_have_no_segments() {
    let records = campus_records();
    let graph = build_graph(&records.locations, &records.indications).expect("graph builds");

    for path in [names(&[]), names(&["Hall1"])] {
        assert!(directions(&path, &records.indications).is_empty());
        assert!(polylines(&graph, &path).is_empty());
    }
    assert_eq!(node_details(&graph, &names(&["Hall1"])).len(), 1);
    assert!(node_details(&graph, &[]).is_empty());
}

#[test]
fn polylines_join_consecutive_coordinates() {
    let records = campus_records();
    let graph = build_graph(&records.locations, &records.indications).expect("graph builds");

    let lines = polylines(&graph, &names(&["Hall2", "Lab"]));
    assert_eq!(
        lines,
        vec![[
            ["2".to_string(), "0".to_string()],
            ["2".to_string(), "1".to_string()]
        ]]
    );
}

#[test]
fn node_details_keep_path_order_and_normalize_decimals() {
    let locations = vec![
        location("Desk", "-33.44890", "-70.66930", "12.50", "0.750"),
        location("Door", "-33.4488", "-70.6692", "12", "2"),
    ];
    let graph = build_graph(&locations, &[]).expect("graph builds");

    let details = node_details(&graph, &names(&["Door", "Desk"]));
    let order: Vec<_> = details.iter().map(|detail| detail.name.as_str()).collect();
    assert_eq!(order, ["Door", "Desk"]);

    let desk = details.get("Desk").expect("desk detail present");
    assert_eq!(desk.latitude, "-33.4489");
    assert_eq!(desk.longitude, "-70.6693");
    assert_eq!(desk.altitude, "12.5");
    assert_eq!(desk.rad, "0.75");

    let json = serde_json::to_string(&details).expect("serializes");
    assert!(
        json.starts_with(r#"{"Door":{"name":"Door","rad":"2","#),
        "unexpected JSON: {json}"
    );
}

#[test]
fn network_polylines_cover_known_indications() {
    let records = campus_records();
    let lines = network_polylines(&records.locations, &records.indications);

    // Six indications, one of which names a missing location.
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0][0], ["0".to_string(), "0".to_string()]);
    assert_eq!(lines[0][1], ["1".to_string(), "0".to_string()]);
}
