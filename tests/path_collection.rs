//! End-to-end path enumeration over small vehicle graphs.

use waypoints::builder::{EventBuilder, GraphBuilder};
use waypoints::graph::{Graph, Step};
use waypoints::paths::{OptionValue, PathCollection, PathError, PathOptions};
use waypoints::state_enum;

state_enum! {
    enum Gear {
        Parked => "parked",
        Idling => "idling",
        FirstGear => "first_gear",
    }
}

struct Vehicle {
    gear: Gear,
}

fn parked() -> Vehicle {
    Vehicle { gear: Gear::Parked }
}

fn builder() -> GraphBuilder<Gear, Vehicle> {
    GraphBuilder::new().state_of(|v: &Vehicle| v.gear.clone())
}

fn step(event: &str, from: Gear, to: Gear) -> Step<Gear> {
    Step::new(event, from, to)
}

fn all_gears(builder: GraphBuilder<Gear, Vehicle>) -> GraphBuilder<Gear, Vehicle> {
    builder.states([Gear::Parked, Gear::Idling, Gear::FirstGear])
}

/// `ignite`, then `shift_up` declared for parked and idling.
fn shifting_graph() -> GraphBuilder<Gear, Vehicle> {
    all_gears(builder())
        .event(EventBuilder::new("ignite").transition(Gear::Parked, Gear::Idling))
        .event(
            EventBuilder::new("shift_up")
                .transition(Gear::Parked, Gear::Idling)
                .transition(Gear::Idling, Gear::FirstGear),
        )
}

#[test]
fn no_events_yields_empty_collection() {
    let graph = all_gears(builder()).build().unwrap();
    let paths = PathCollection::new(&graph, &parked(), PathOptions::new()).unwrap();

    assert_eq!(paths.from_name(), &Gear::Parked);
    assert_eq!(paths.to_name(), None);
    assert!(paths.is_empty());
    assert!(paths.from_states().is_empty());
    assert!(paths.to_states().is_empty());
    assert!(paths.events().is_empty());
}

#[test]
fn linear_graph_yields_single_path() {
    let graph = all_gears(builder())
        .event(EventBuilder::new("ignite").transition(Gear::Parked, Gear::Idling))
        .event(EventBuilder::new("shift_up").transition(Gear::Idling, Gear::FirstGear))
        .build()
        .unwrap();
    let paths = PathCollection::new(&graph, &parked(), PathOptions::new()).unwrap();

    assert_eq!(
        paths,
        vec![vec![
            step("ignite", Gear::Parked, Gear::Idling),
            step("shift_up", Gear::Idling, Gear::FirstGear),
        ]]
    );
    assert_eq!(paths.from_states(), &[Gear::Parked, Gear::Idling]);
    assert_eq!(paths.to_states(), &[Gear::Idling, Gear::FirstGear]);
    assert_eq!(paths.events(), &["ignite".to_string(), "shift_up".to_string()]);
}

#[test]
fn guarded_edges_respect_guard_option() {
    let graph = all_gears(builder())
        .event(EventBuilder::new("ignite").transition_when(
            Gear::Parked,
            Gear::Idling,
            |_: &Vehicle| false,
        ))
        .build()
        .unwrap();

    let guarded = PathCollection::new(&graph, &parked(), PathOptions::new()).unwrap();
    assert!(guarded.is_empty());

    let unguarded =
        PathCollection::new(&graph, &parked(), PathOptions::new().guard(false)).unwrap();
    assert_eq!(
        unguarded,
        vec![vec![step("ignite", Gear::Parked, Gear::Idling)]]
    );
}

#[test]
fn guards_see_the_subject() {
    struct Car {
        gear: Gear,
        key_in: bool,
    }

    let graph = GraphBuilder::new()
        .state_of(|car: &Car| car.gear.clone())
        .event(EventBuilder::new("ignite").transition_when(
            Gear::Parked,
            Gear::Idling,
            |car: &Car| car.key_in,
        ))
        .build()
        .unwrap();

    let without_key = Car {
        gear: Gear::Parked,
        key_in: false,
    };
    let with_key = Car {
        gear: Gear::Parked,
        key_in: true,
    };

    assert!(graph
        .paths_for(&without_key, PathOptions::new())
        .unwrap()
        .is_empty());
    assert_eq!(graph.paths_for(&with_key, PathOptions::new()).unwrap().len(), 1);
}

#[test]
fn revisited_states_are_not_duplicated_in_summaries() {
    let graph = builder()
        .states([Gear::Parked, Gear::Idling])
        .event(
            EventBuilder::new("shift_up")
                .transition(Gear::Parked, Gear::Idling)
                .transition(Gear::Idling, Gear::FirstGear),
        )
        .event(EventBuilder::new("park").transition(Gear::FirstGear, Gear::Idling))
        .build()
        .unwrap();
    let paths = PathCollection::new(&graph, &parked(), PathOptions::new()).unwrap();

    assert_eq!(
        paths,
        vec![vec![
            step("shift_up", Gear::Parked, Gear::Idling),
            step("shift_up", Gear::Idling, Gear::FirstGear),
            step("park", Gear::FirstGear, Gear::Idling),
        ]]
    );
    assert_eq!(
        paths.from_states(),
        &[Gear::Parked, Gear::Idling, Gear::FirstGear]
    );
    assert_eq!(paths.to_states(), &[Gear::Idling, Gear::FirstGear]);
    assert_eq!(paths.events(), &["shift_up".to_string(), "park".to_string()]);
}

#[test]
fn custom_from_state() {
    let graph = all_gears(builder())
        .event(EventBuilder::new("park").transition(Gear::Idling, Gear::Parked))
        .build()
        .unwrap();
    let paths =
        PathCollection::new(&graph, &parked(), PathOptions::new().from(Gear::Idling)).unwrap();

    assert_eq!(paths.from_name(), &Gear::Idling);
    assert_eq!(paths, vec![vec![step("park", Gear::Idling, Gear::Parked)]]);
}

#[test]
fn paths_stop_once_target_reached() {
    let graph = shifting_graph()
        .event(EventBuilder::new("shift_down").transition(Gear::FirstGear, Gear::Idling))
        .build()
        .unwrap();
    let paths =
        PathCollection::new(&graph, &parked(), PathOptions::new().to(Gear::Idling)).unwrap();

    assert_eq!(paths.to_name(), Some(&Gear::Idling));
    assert_eq!(
        paths,
        vec![
            vec![step("ignite", Gear::Parked, Gear::Idling)],
            vec![step("shift_up", Gear::Parked, Gear::Idling)],
        ]
    );
}

#[test]
fn shallow_target_without_return_edge() {
    let graph: Graph<Gear, Vehicle> = shifting_graph().build().unwrap();
    let paths =
        PathCollection::new(&graph, &parked(), PathOptions::new().to(Gear::Idling)).unwrap();

    assert_eq!(
        paths,
        vec![
            vec![step("ignite", Gear::Parked, Gear::Idling)],
            vec![step("shift_up", Gear::Parked, Gear::Idling)],
        ]
    );
}

#[test]
fn deep_paths_reach_target_more_than_once() {
    let graph = shifting_graph()
        .event(EventBuilder::new("shift_down").transition(Gear::FirstGear, Gear::Idling))
        .build()
        .unwrap();
    let paths = PathCollection::new(
        &graph,
        &parked(),
        PathOptions::new().to(Gear::Idling).deep(true),
    )
    .unwrap();

    assert_eq!(
        paths,
        vec![
            vec![step("ignite", Gear::Parked, Gear::Idling)],
            vec![
                step("ignite", Gear::Parked, Gear::Idling),
                step("shift_up", Gear::Idling, Gear::FirstGear),
                step("shift_down", Gear::FirstGear, Gear::Idling),
            ],
            vec![step("shift_up", Gear::Parked, Gear::Idling)],
            vec![
                step("shift_up", Gear::Parked, Gear::Idling),
                step("shift_up", Gear::Idling, Gear::FirstGear),
                step("shift_down", Gear::FirstGear, Gear::Idling),
            ],
        ]
    );
    assert!(paths[0].is_prefix_of(&paths[1]));
    assert!(paths[2].is_prefix_of(&paths[3]));
}

#[test]
fn unknown_option_key_is_rejected() {
    let result = PathOptions::<Gear>::from_pairs([("invalid", OptionValue::Flag(true))]);

    assert_eq!(
        result.unwrap_err().to_string(),
        "Unknown key: invalid. Valid keys are: from, to, deep, guard"
    );
}

#[test]
fn unknown_from_state_is_rejected() {
    let graph = builder().state(Gear::Parked).build().unwrap();
    let result = PathCollection::new(&graph, &parked(), PathOptions::new().from(Gear::Idling));

    assert_eq!(
        result,
        Err(PathError::UnknownState {
            name: "idling".to_string()
        })
    );
}

#[test]
fn unknown_to_state_is_rejected() {
    let graph = builder().state(Gear::Parked).build().unwrap();
    let result = PathCollection::new(&graph, &parked(), PathOptions::new().to(Gear::FirstGear));

    assert_eq!(
        result.unwrap_err().to_string(),
        "first_gear is an invalid state name"
    );
}

#[test]
fn json_options_drive_a_traversal() {
    let graph = shifting_graph()
        .event(EventBuilder::new("shift_down").transition(Gear::FirstGear, Gear::Idling))
        .build()
        .unwrap();
    let options = PathOptions::from_json(
        &graph,
        &serde_json::json!({"from": "parked", "to": "idling", "deep": true}),
    )
    .unwrap();

    let paths = graph.paths_for(&parked(), options).unwrap();
    assert_eq!(paths.len(), 4);
    assert_eq!(
        paths.events(),
        &[
            "ignite".to_string(),
            "shift_up".to_string(),
            "shift_down".to_string()
        ]
    );
}

#[test]
fn json_options_reject_unknown_state_names() {
    let graph = shifting_graph().build().unwrap();
    let result = PathOptions::from_json(&graph, &serde_json::json!({"from": "invalid"}));

    assert_eq!(
        result.unwrap_err().to_string(),
        "invalid is an invalid state name"
    );
}
