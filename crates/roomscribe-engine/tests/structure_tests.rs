// Integration tests for structure commands and room ownership.

use roomscribe_engine::commands::{
    confirm_room, create_room, create_structure, delete_structure, edit_structure,
    select_structure, ConfirmRoomParams, CreateRoomParams, CreateStructureParams,
    DeleteStructureParams, EditStructureParams, SelectStructureParams,
};
use roomscribe_engine::session::Session;

fn add_structure(session: &mut Session, name: &str, category: &str) -> String {
    create_structure(
        session,
        CreateStructureParams {
            name: name.to_string(),
            category: Some(category.to_string()),
            ..Default::default()
        },
    )
}

// ---------------------------------------------------------------------------
// create / select
// ---------------------------------------------------------------------------

#[test]
fn test_create_structure_selects_it() {
    let mut session = Session::new();
    let result = add_structure(&mut session, "Main House", "main dwelling");
    assert!(result.contains("now selected"), "{result}");
    assert_eq!(session.current_structure().unwrap().name, "Main House");
}

#[test]
fn test_select_structure_by_name_case_insensitive() {
    let mut session = Session::new();
    add_structure(&mut session, "Main House", "main dwelling");
    add_structure(&mut session, "Garage", "detached garage");
    assert_eq!(session.current_structure().unwrap().name, "Garage");

    let result = select_structure(
        &mut session,
        SelectStructureParams {
            structure: "main house".to_string(),
        },
    );
    assert!(!result.starts_with("Error:"), "{result}");
    assert_eq!(session.current_structure().unwrap().name, "Main House");
}

#[test]
fn test_select_unknown_structure_errors() {
    let mut session = Session::new();
    let result = select_structure(
        &mut session,
        SelectStructureParams {
            structure: "boathouse".to_string(),
        },
    );
    assert!(result.starts_with("Error:"), "{result}");
}

// ---------------------------------------------------------------------------
// edit
// ---------------------------------------------------------------------------

#[test]
fn test_edit_structure_applies_present_fields_only() {
    let mut session = Session::new();
    add_structure(&mut session, "Main House", "main dwelling");

    let result = edit_structure(
        &mut session,
        EditStructureParams {
            stories: Some(2),
            year_built: Some(1987),
            ..Default::default()
        },
    );
    assert!(!result.starts_with("Error:"), "{result}");

    let structure = session.current_structure().unwrap();
    assert_eq!(structure.stories, Some(2));
    assert_eq!(structure.year_built, Some(1987));
    assert_eq!(structure.name, "Main House");
}

#[test]
fn test_edit_structure_with_no_fields_errors() {
    let mut session = Session::new();
    add_structure(&mut session, "Main House", "main dwelling");
    let result = edit_structure(&mut session, EditStructureParams::default());
    assert!(result.contains("no changes specified"), "{result}");
}

// ---------------------------------------------------------------------------
// delete and cascade
// ---------------------------------------------------------------------------

#[test]
fn test_delete_structure_cascades_to_owned_rooms() {
    let mut session = Session::new();
    add_structure(&mut session, "Garage", "detached garage");
    create_room(
        &mut session,
        CreateRoomParams {
            name: "bay one".to_string(),
            width_ft: 12.0,
            length_ft: 20.0,
            ..Default::default()
        },
    );
    confirm_room(&mut session, ConfirmRoomParams::default());
    assert_eq!(session.rooms().len(), 1);

    let result = delete_structure(
        &mut session,
        DeleteStructureParams {
            structure: "Garage".to_string(),
        },
    );
    assert!(result.contains("1 room(s)"), "{result}");
    assert!(session.rooms().is_empty());
    // Deleting the selected structure clears the selection
    assert!(session.current_structure().is_none());
}

#[test]
fn test_delete_structure_spares_other_structures_rooms() {
    let mut session = Session::new();
    add_structure(&mut session, "Main House", "main dwelling");
    create_room(
        &mut session,
        CreateRoomParams {
            name: "kitchen".to_string(),
            width_ft: 10.0,
            length_ft: 12.0,
            ..Default::default()
        },
    );
    confirm_room(&mut session, ConfirmRoomParams::default());

    add_structure(&mut session, "Shed", "shed");
    create_room(
        &mut session,
        CreateRoomParams {
            name: "tool room".to_string(),
            width_ft: 6.0,
            length_ft: 8.0,
            ..Default::default()
        },
    );
    confirm_room(&mut session, ConfirmRoomParams::default());
    assert_eq!(session.rooms().len(), 2);

    delete_structure(
        &mut session,
        DeleteStructureParams {
            structure: "Shed".to_string(),
        },
    );
    assert_eq!(session.rooms().len(), 1);
    assert_eq!(session.rooms()[0].name, "kitchen");
}

#[test]
fn test_confirm_registers_room_with_owning_structure() {
    let mut session = Session::new();
    add_structure(&mut session, "Main House", "main dwelling");
    create_room(
        &mut session,
        CreateRoomParams {
            name: "kitchen".to_string(),
            width_ft: 10.0,
            length_ft: 12.0,
            ..Default::default()
        },
    );
    confirm_room(&mut session, ConfirmRoomParams::default());

    let structure = session.current_structure().unwrap();
    assert_eq!(structure.room_ids.len(), 1);
    assert_eq!(structure.room_ids[0], session.rooms()[0].id);
}
