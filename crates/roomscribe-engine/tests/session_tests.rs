// Integration tests for session control: reset, snapshot, hydration,
// read-only queries, and photo attachment.

use roomscribe_core::geometry::ShapeKind;
use roomscribe_core::model::Room;
use roomscribe_engine::commands::{
    attach_photo, confirm_room, create_room, create_structure, AttachPhotoParams,
    ConfirmRoomParams, CreateRoomParams, CreateStructureParams,
};
use roomscribe_engine::queries::{find_room, location_path};
use roomscribe_engine::session::{ClaimData, Session, SessionSnapshot};

fn seeded_session() -> Session {
    let mut session = Session::new();
    create_structure(
        &mut session,
        CreateStructureParams {
            name: "Main House".to_string(),
            category: Some("main dwelling".to_string()),
            ..Default::default()
        },
    );
    create_room(
        &mut session,
        CreateRoomParams {
            name: "kitchen".to_string(),
            width_ft: 10.0,
            length_ft: 12.0,
            ..Default::default()
        },
    );
    session
}

fn plain_room(name: &str, width_ft: f64, length_ft: f64) -> Room {
    Room::new(name, ShapeKind::Rectangle, width_ft, length_ft, 8.0, None, None, None).unwrap()
}

// ---------------------------------------------------------------------------
// reset
// ---------------------------------------------------------------------------

#[test]
fn test_reset_wipes_all_collections_atomically() {
    let mut session = seeded_session();
    confirm_room(&mut session, ConfirmRoomParams::default());
    assert!(!session.structures().is_empty());
    assert!(!session.rooms().is_empty());
    assert!(!session.history().is_empty());

    session.reset();
    assert!(session.structures().is_empty());
    assert!(session.rooms().is_empty());
    assert!(session.draft().is_none());
    assert!(session.history().is_empty());
    assert!(session.current_structure().is_none());
    assert_eq!(session.undo_depth(), 0);
}

// ---------------------------------------------------------------------------
// snapshot
// ---------------------------------------------------------------------------

#[test]
fn test_snapshot_round_trips_through_json() {
    let mut session = seeded_session();
    confirm_room(
        &mut session,
        ConfirmRoomParams {
            ready_for_next: Some(false),
        },
    );

    let snapshot = session.snapshot();
    let json = serde_json::to_string(&snapshot).unwrap();
    let restored: SessionSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, snapshot);
    assert_eq!(restored.rooms.len(), 1);
    assert!(restored.draft.is_some());
    assert_eq!(restored.history.len(), 3);
}

// ---------------------------------------------------------------------------
// hydration
// ---------------------------------------------------------------------------

#[test]
fn test_load_rooms_bypasses_command_history() {
    let mut session = Session::new();
    let loaded = session.load_rooms(vec![
        plain_room("kitchen", 10.0, 12.0),
        plain_room("den", 9.0, 11.0),
    ]);
    assert_eq!(loaded, 2);
    assert_eq!(session.rooms().len(), 2);
    assert!(session.history().is_empty());
}

#[test]
fn test_load_from_claim_data_replaces_session_collections() {
    let mut session = seeded_session();

    let data = ClaimData {
        structures: Vec::new(),
        rooms: vec![plain_room("parlor", 13.0, 15.0)],
    };
    let (structures, rooms) = session.load_from_claim_data(data);
    assert_eq!((structures, rooms), (0, 1));
    assert_eq!(session.rooms().len(), 1);
    assert_eq!(session.rooms()[0].name, "parlor");
    assert!(session.draft().is_none());
    assert_eq!(session.undo_depth(), 0);
}

// ---------------------------------------------------------------------------
// read-only queries
// ---------------------------------------------------------------------------

#[test]
fn test_find_room_checks_draft_then_confirmed() {
    let mut session = seeded_session();
    assert_eq!(find_room(&session, "Kitchen").unwrap().name, "kitchen");

    confirm_room(&mut session, ConfirmRoomParams::default());
    assert_eq!(find_room(&session, "kitchen").unwrap().name, "kitchen");
    assert!(find_room(&session, "attic").is_none());
}

#[test]
fn test_location_path_walks_structure_to_room() {
    let mut session = seeded_session();
    assert_eq!(location_path(&session), "Main House > kitchen");

    confirm_room(&mut session, ConfirmRoomParams::default());
    assert_eq!(location_path(&session), "Main House");

    session.reset();
    assert_eq!(location_path(&session), "no active location");
}

#[test]
fn test_location_path_includes_sub_room_parent() {
    let mut session = seeded_session();
    confirm_room(&mut session, ConfirmRoomParams::default());
    create_room(
        &mut session,
        CreateRoomParams {
            name: "pantry".to_string(),
            width_ft: 4.0,
            length_ft: 5.0,
            parent_room: Some("kitchen".to_string()),
            ..Default::default()
        },
    );
    assert_eq!(location_path(&session), "Main House > kitchen > pantry");
}

// ---------------------------------------------------------------------------
// photos
// ---------------------------------------------------------------------------

#[test]
fn test_attach_photo_to_draft_room_returns_record() {
    let mut session = seeded_session();
    let result = attach_photo(
        &mut session,
        AttachPhotoParams {
            reference: "file:///captures/0042.jpg".to_string(),
            caption: Some("north wall stain".to_string()),
            structure: None,
        },
    )
    .unwrap();

    assert_eq!(result.attached_to, "room 'kitchen'");
    assert_eq!(result.content_hash.len(), 64);
    assert_eq!(session.draft().unwrap().photos.len(), 1);
    // Photo dispatches are logged like any other command
    assert_eq!(session.history().last().unwrap().kind, "attach_photo");
}

#[test]
fn test_attach_photo_to_structure_by_name() {
    let mut session = seeded_session();
    let result = attach_photo(
        &mut session,
        AttachPhotoParams {
            reference: "file:///captures/0043.jpg".to_string(),
            caption: None,
            structure: Some("Main House".to_string()),
        },
    )
    .unwrap();

    assert_eq!(result.attached_to, "structure 'Main House'");
    assert_eq!(session.structures()[0].photos.len(), 1);
}

#[test]
fn test_attach_photo_without_draft_or_structure_errors() {
    let mut session = Session::new();
    let result = attach_photo(
        &mut session,
        AttachPhotoParams {
            reference: "file:///captures/0044.jpg".to_string(),
            caption: None,
            structure: None,
        },
    );
    assert!(result.is_err());
    // The failed dispatch still leaves its log entry
    assert!(session
        .history()
        .last()
        .unwrap()
        .result
        .starts_with("Error:"));
}
