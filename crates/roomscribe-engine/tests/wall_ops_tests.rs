// Integration tests for wall-first commands: the wall cursor, per-wall
// properties, and moving a wall.

use roomscribe_core::geometry::{Point, WallDirection};
use roomscribe_engine::commands::{
    add_opening, create_room, move_wall, select_wall, undo, update_wall_properties,
    AddOpeningParams, CreateRoomParams, MoveWallParams, SelectWallParams, UndoParams,
    UpdateWallPropertiesParams,
};
use roomscribe_engine::session::Session;

fn session_with_room() -> Session {
    let mut session = Session::new();
    create_room(
        &mut session,
        CreateRoomParams {
            name: "living room".to_string(),
            width_ft: 16.0,
            length_ft: 14.0,
            ..Default::default()
        },
    );
    session
}

// ---------------------------------------------------------------------------
// select_wall
// ---------------------------------------------------------------------------

#[test]
fn test_select_wall_by_cardinal_and_synthetic_index() {
    let mut session = session_with_room();

    select_wall(
        &mut session,
        SelectWallParams {
            wall: "north".to_string(),
        },
    );
    assert_eq!(session.selected_wall(), Some(WallDirection::North));

    // wall_2 cycles north -> east -> south -> west
    select_wall(
        &mut session,
        SelectWallParams {
            wall: "wall_2".to_string(),
        },
    );
    assert_eq!(session.selected_wall(), Some(WallDirection::East));
}

#[test]
fn test_selected_wall_is_reused_by_later_commands() {
    let mut session = session_with_room();
    select_wall(
        &mut session,
        SelectWallParams {
            wall: "south".to_string(),
        },
    );

    // No wall in the params: the cursor supplies it
    let result = add_opening(
        &mut session,
        AddOpeningParams {
            width_ft: 3.0,
            ..Default::default()
        },
    );
    assert!(!result.starts_with("Error:"), "{result}");
    assert_eq!(
        session.draft().unwrap().openings[0].wall,
        WallDirection::South
    );
}

#[test]
fn test_wall_relative_command_without_wall_or_cursor_errors() {
    let mut session = session_with_room();
    let result = add_opening(
        &mut session,
        AddOpeningParams {
            width_ft: 3.0,
            ..Default::default()
        },
    );
    assert!(result.starts_with("Error:"), "{result}");
    assert!(result.contains("no wall selected"), "{result}");
}

// ---------------------------------------------------------------------------
// update_wall_properties
// ---------------------------------------------------------------------------

#[test]
fn test_update_wall_properties_uses_cursor() {
    let mut session = session_with_room();
    select_wall(
        &mut session,
        SelectWallParams {
            wall: "west".to_string(),
        },
    );

    let result = update_wall_properties(
        &mut session,
        UpdateWallPropertiesParams {
            material: Some("plaster".to_string()),
            condition: Some("cracked".to_string()),
            ..Default::default()
        },
    );
    assert!(!result.starts_with("Error:"), "{result}");

    let props = &session.draft().unwrap().wall_properties;
    assert_eq!(props.len(), 1);
    assert_eq!(props[0].wall, WallDirection::West);
    assert_eq!(props[0].material.as_deref(), Some("plaster"));
}

#[test]
fn test_update_wall_properties_with_no_fields_errors() {
    let mut session = session_with_room();
    let result = update_wall_properties(&mut session, UpdateWallPropertiesParams::default());
    assert!(result.contains("no changes specified"), "{result}");
}

// ---------------------------------------------------------------------------
// move_wall
// ---------------------------------------------------------------------------

#[test]
fn test_move_north_wall_out_grows_the_length() {
    let mut session = session_with_room();

    let result = move_wall(
        &mut session,
        MoveWallParams {
            wall: Some("north".to_string()),
            direction: "out".to_string(),
            distance_ft: 2.0,
        },
    );
    assert!(!result.starts_with("Error:"), "{result}");

    let draft = session.draft().unwrap();
    assert_eq!(draft.width_ft, 16.0);
    assert_eq!(draft.length_ft, 16.0);
    assert_eq!(draft.polygon[2], Point::new(16.0, 16.0));
}

#[test]
fn test_move_east_wall_in_shrinks_the_width() {
    let mut session = session_with_room();

    move_wall(
        &mut session,
        MoveWallParams {
            wall: Some("east".to_string()),
            direction: "in".to_string(),
            distance_ft: 3.0,
        },
    );
    let draft = session.draft().unwrap();
    assert_eq!(draft.width_ft, 13.0);
    assert_eq!(draft.length_ft, 14.0);
}

#[test]
fn test_move_wall_is_undoable() {
    let mut session = session_with_room();
    move_wall(
        &mut session,
        MoveWallParams {
            wall: Some("south".to_string()),
            direction: "out".to_string(),
            distance_ft: 4.0,
        },
    );
    assert_eq!(session.draft().unwrap().length_ft, 18.0);

    undo(&mut session, UndoParams::default());
    assert_eq!(session.draft().unwrap().length_ft, 14.0);
}

#[test]
fn test_move_wall_past_zero_fails_cleanly() {
    let mut session = session_with_room();
    let result = move_wall(
        &mut session,
        MoveWallParams {
            wall: Some("west".to_string()),
            direction: "in".to_string(),
            distance_ft: 20.0,
        },
    );
    assert!(result.starts_with("Error:"), "{result}");
    // Validation failed before any mutation
    assert_eq!(session.draft().unwrap().width_ft, 16.0);
}

#[test]
fn test_move_wall_with_unknown_direction_errors() {
    let mut session = session_with_room();
    let result = move_wall(
        &mut session,
        MoveWallParams {
            wall: Some("north".to_string()),
            direction: "sideways".to_string(),
            distance_ft: 1.0,
        },
    );
    assert!(result.starts_with("Error:"), "{result}");
    assert!(result.contains("unknown move direction"), "{result}");
}
