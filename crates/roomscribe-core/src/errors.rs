use thiserror::Error;

/// Result type alias using RoomscribeError
pub type Result<T> = std::result::Result<T, RoomscribeError>;

/// Comprehensive error taxonomy for roomscribe operations
///
/// Every variant is recovered locally at the engine boundary and surfaced to
/// the caller as a plain `Error:`-prefixed string. No error crosses the
/// boundary as a panic, and no operation leaves session state partially
/// mutated on an error path.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RoomscribeError {
    // ===== Geometry Errors =====
    /// A room or element dimension was zero or negative
    #[error("{what} must be positive, got {value} ft")]
    NonPositiveDimension { what: String, value: f64 },

    /// L-shape notch is as large as (or larger than) the bounding box
    #[error(
        "notch {notch_width_ft} ft x {notch_length_ft} ft does not fit inside a {width_ft} ft x {length_ft} ft room"
    )]
    NotchExceedsBounds {
        notch_width_ft: f64,
        notch_length_ft: f64,
        width_ft: f64,
        length_ft: f64,
    },

    /// T-shape stem is as large as (or larger than) the bounding box
    #[error(
        "stem {stem_width_ft} ft x {stem_length_ft} ft does not fit against a {width_ft} ft x {length_ft} ft room"
    )]
    StemExceedsBounds {
        stem_width_ft: f64,
        stem_length_ft: f64,
        width_ft: f64,
        length_ft: f64,
    },

    /// T-shape stem runs past the end of the wall it protrudes from
    #[error(
        "stem at {stem_position_ft} ft with width {stem_width_ft} ft overruns the {wall_length_ft} ft wall"
    )]
    StemOverflowsWall {
        stem_position_ft: f64,
        stem_width_ft: f64,
        wall_length_ft: f64,
    },

    /// L/T shape requested without its notch/stem configuration
    #[error("{shape} rooms need their {shape} configuration (none supplied)")]
    MissingShapeConfig { shape: String },

    /// Irregular shape needs at least three vertices
    #[error("an irregular outline needs at least 3 vertices, got {count}")]
    TooFewVertices { count: usize },

    // ===== Parse Errors =====
    /// Unrecognized room shape keyword
    #[error("unknown room shape '{value}' (expected rectangle, l_shape, t_shape, or irregular)")]
    UnknownShape { value: String },

    /// Unrecognized wall reference
    #[error("unknown wall '{value}' (expected north, east, south, west, or wall_N)")]
    UnknownWall { value: String },

    /// Unrecognized corner keyword for an L-shape notch
    #[error("unknown corner '{value}' (expected ne, nw, se, or sw)")]
    UnknownCorner { value: String },

    /// Unrecognized wall-relative position keyword
    #[error("unknown position '{value}' (expected left, center, right, or a number of feet)")]
    UnknownPosition { value: String },

    /// Unrecognized move-wall direction keyword
    #[error("unknown move direction '{value}' (expected in, out, left, or right)")]
    UnknownMoveDirection { value: String },

    /// modify_dimension was addressed to a target matching no known pattern
    #[error(
        "unknown dimension target '{target}' (expected room_width, room_length, ceiling_height, opening_N, or feature_N)"
    )]
    UnknownDimensionTarget { target: String },

    // ===== Precondition Errors =====
    /// An operation that requires a draft room was called with none
    #[error("no room in progress - create a room first")]
    NoDraftRoom,

    /// No structure matched the given id or name
    #[error("no structure matching '{reference}'")]
    StructureNotFound { reference: String },

    /// No room matched the given id or name, and no draft exists to fall back to
    #[error("no room matching '{reference}'")]
    RoomNotFound { reference: String },

    /// The disambiguation chain exhausted every supplied discriminator
    #[error("no {entity} matched (tried {tried})")]
    EntityNotFound { entity: String, tried: String },

    /// An edit was requested with no recognized fields set
    #[error("no changes specified")]
    NoChangesSpecified,

    /// A wall-first operation was called with no wall given and no wall selected
    #[error("no wall selected - name a wall or select one first")]
    NoWallSelected,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_are_descriptive() {
        let e = RoomscribeError::NoDraftRoom;
        assert_eq!(e.to_string(), "no room in progress - create a room first");

        let e = RoomscribeError::UnknownDimensionTarget {
            target: "opening".to_string(),
        };
        assert!(e.to_string().contains("opening_N"));
        assert!(e.to_string().contains("room_width"));
    }

    #[test]
    fn test_entity_not_found_names_discriminators() {
        let e = RoomscribeError::EntityNotFound {
            entity: "opening".to_string(),
            tried: "wall=north, kind=door".to_string(),
        };
        assert_eq!(e.to_string(), "no opening matched (tried wall=north, kind=door)");
    }
}
