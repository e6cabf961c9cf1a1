// Integration tests for the undo stack and its commit boundary.

use roomscribe_engine::commands::{
    add_note, add_opening, confirm_room, create_room, mark_damage, modify_dimension, undo,
    AddNoteParams, AddOpeningParams, ConfirmRoomParams, CreateRoomParams, MarkDamageParams,
    ModifyDimensionParams, UndoParams,
};
use roomscribe_engine::session::Session;

fn start_room(session: &mut Session, name: &str, width_ft: f64, length_ft: f64) {
    create_room(
        session,
        CreateRoomParams {
            name: name.to_string(),
            width_ft,
            length_ft,
            ..Default::default()
        },
    );
}

fn undo_steps(session: &mut Session, steps: u32) -> String {
    undo(
        session,
        UndoParams {
            steps: Some(steps),
        },
    )
}

// ---------------------------------------------------------------------------
// round trips
// ---------------------------------------------------------------------------

#[test]
fn test_undo_restores_pre_operation_snapshot_field_for_field() {
    let mut session = Session::new();
    start_room(&mut session, "den", 10.0, 12.0);
    let before = session.draft().unwrap().clone();

    add_opening(
        &mut session,
        AddOpeningParams {
            wall: Some("north".to_string()),
            width_ft: 3.0,
            ..Default::default()
        },
    );
    assert_eq!(session.draft().unwrap().openings.len(), 1);

    undo_steps(&mut session, 1);
    assert_eq!(session.draft().unwrap(), &before);
}

#[test]
fn test_undo_n_jumps_back_n_states() {
    let mut session = Session::new();
    start_room(&mut session, "den", 10.0, 12.0);

    modify_dimension(
        &mut session,
        ModifyDimensionParams {
            target: "room_width".to_string(),
            value_ft: 11.0,
        },
    );
    modify_dimension(
        &mut session,
        ModifyDimensionParams {
            target: "room_width".to_string(),
            value_ft: 12.0,
        },
    );
    assert_eq!(session.draft().unwrap().width_ft, 12.0);

    // Two steps back in one jump: the original 10 ft width
    undo_steps(&mut session, 2);
    assert_eq!(session.draft().unwrap().width_ft, 10.0);
}

#[test]
fn test_undo_past_first_create_returns_to_no_draft() {
    let mut session = Session::new();
    start_room(&mut session, "den", 10.0, 12.0);
    mark_damage(&mut session, MarkDamageParams::default());

    let result = undo_steps(&mut session, 10);
    assert!(result.contains("no room in progress"), "{result}");
    assert!(session.draft().is_none());
}

#[test]
fn test_create_over_unconfirmed_draft_is_undoable() {
    let mut session = Session::new();
    start_room(&mut session, "den", 10.0, 12.0);
    start_room(&mut session, "study", 8.0, 9.0);
    assert_eq!(session.draft().unwrap().name, "study");

    undo_steps(&mut session, 1);
    assert_eq!(session.draft().unwrap().name, "den");
}

// ---------------------------------------------------------------------------
// empty stack and commit boundary
// ---------------------------------------------------------------------------

#[test]
fn test_empty_stack_returns_nothing_to_undo() {
    let mut session = Session::new();
    assert_eq!(undo(&mut session, UndoParams::default()), "Nothing to undo");
}

#[test]
fn test_confirm_clears_the_undo_stack() {
    let mut session = Session::new();
    start_room(&mut session, "den", 10.0, 12.0);
    modify_dimension(
        &mut session,
        ModifyDimensionParams {
            target: "room_length".to_string(),
            value_ft: 13.0,
        },
    );
    assert!(session.undo_depth() > 0);

    confirm_room(&mut session, ConfirmRoomParams::default());
    assert_eq!(session.undo_depth(), 0);
    assert_eq!(undo(&mut session, UndoParams::default()), "Nothing to undo");
}

// ---------------------------------------------------------------------------
// deliberate asymmetries
// ---------------------------------------------------------------------------

#[test]
fn test_notes_are_not_undo_tracked() {
    let mut session = Session::new();
    start_room(&mut session, "den", 10.0, 12.0);
    let depth_before = session.undo_depth();

    add_note(
        &mut session,
        AddNoteParams {
            text: "crown molding throughout".to_string(),
            target: None,
        },
    );
    assert_eq!(session.undo_depth(), depth_before);
    assert_eq!(session.draft().unwrap().notes.len(), 1);
}

#[test]
fn test_undo_is_logged_but_not_undoable() {
    let mut session = Session::new();
    start_room(&mut session, "den", 10.0, 12.0);
    undo_steps(&mut session, 1);
    assert!(session.draft().is_none());

    // The undo emptied the stack; a second undo has nothing left
    assert_eq!(undo(&mut session, UndoParams::default()), "Nothing to undo");
    let kinds: Vec<&str> = session.history().iter().map(|c| c.kind.as_str()).collect();
    assert_eq!(kinds, vec!["create_room", "undo", "undo"]);
}

#[test]
fn test_failed_operation_leaves_no_undo_entry() {
    let mut session = Session::new();
    start_room(&mut session, "den", 10.0, 12.0);
    let depth_before = session.undo_depth();

    // Invalid width: validation fails before any mutation
    let result = modify_dimension(
        &mut session,
        ModifyDimensionParams {
            target: "room_width".to_string(),
            value_ft: -4.0,
        },
    );
    assert!(result.starts_with("Error:"), "{result}");
    assert_eq!(session.undo_depth(), depth_before);
    assert_eq!(session.draft().unwrap().width_ft, 10.0);
}
