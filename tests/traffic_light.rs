//! End-to-end walk through a traffic light machine.

use backtrack::{Fsm, FsmError, MachineConfig};

const TRAFFIC_LIGHT: &str = r#"{
    "initial": "green",
    "states": {
        "green":  { "transitions": { "next": "yellow" } },
        "yellow": { "transitions": { "next": "red" } },
        "red":    { "transitions": { "next": "green" } }
    }
}"#;

fn machine() -> Fsm {
    let config = MachineConfig::from_json(TRAFFIC_LIGHT).unwrap();
    Fsm::try_new(config).unwrap()
}

#[test]
fn traffic_light_scenario() {
    let mut fsm = machine();
    assert_eq!(fsm.state(), "green");

    fsm.trigger("next").unwrap();
    assert_eq!(fsm.state(), "yellow");

    fsm.trigger("next").unwrap();
    assert_eq!(fsm.state(), "red");

    assert!(fsm.undo());
    assert_eq!(fsm.state(), "yellow");

    assert!(fsm.undo());
    assert_eq!(fsm.state(), "green");

    assert!(!fsm.undo());
    assert_eq!(fsm.state(), "green");

    assert!(fsm.redo());
    assert_eq!(fsm.state(), "yellow");

    assert_eq!(
        fsm.trigger("bogus"),
        Err(FsmError::InvalidTransition {
            state: "yellow".to_string(),
            event: "bogus".to_string(),
        })
    );
    assert_eq!(fsm.state(), "yellow");

    assert_eq!(
        fsm.change_state("unknown"),
        Err(FsmError::InvalidState {
            state: "unknown".to_string(),
        })
    );
    assert_eq!(fsm.state(), "yellow");
}

#[test]
fn state_listing_follows_declaration_order() {
    let fsm = machine();

    assert_eq!(fsm.states(None), vec!["green", "yellow", "red"]);
    assert_eq!(fsm.states(Some("next")), vec!["green", "yellow", "red"]);
    assert!(fsm.states(Some("stop")).is_empty());
}

#[test]
fn reset_then_redo_reaches_undone_state() {
    let mut fsm = machine();
    fsm.trigger("next").unwrap();
    fsm.trigger("next").unwrap();
    assert!(fsm.undo());

    fsm.reset();
    assert_eq!(fsm.state(), "green");
    assert!(fsm.can_redo());

    assert!(fsm.redo());
    assert_eq!(fsm.state(), "red");

    assert!(fsm.undo());
    assert_eq!(fsm.state(), "green");
}

#[test]
fn error_messages_name_the_offender() {
    let mut fsm = machine();

    let err = fsm.trigger("bogus").unwrap_err();
    assert_eq!(
        err.to_string(),
        "No transition for event 'bogus' from state 'green'"
    );

    let err = fsm.change_state("unknown").unwrap_err();
    assert_eq!(err.to_string(), "State 'unknown' is not declared");
}
