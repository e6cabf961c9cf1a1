pub mod annotation;
pub mod damage;
pub mod feature;
pub mod object;
pub mod opening;
pub mod room;
pub mod structure;

pub use annotation::{Note, NoteTarget, Photo};
pub use damage::{DamageKind, DamageZone, WaterCategory, DEFAULT_EXTENT_FT};
pub use feature::{Feature, FeatureKind};
pub use object::StoredObject;
pub use opening::{Opening, OpeningKind};
pub use room::{normalize_name, Room, WallProperties};
pub use structure::{Structure, StructureCategory};
