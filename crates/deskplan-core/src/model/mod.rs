//! Workspace data model
//!
//! Placed objects, their categories and catalog defaults, cables, groups and
//! the room that bounds the layout.

mod cable;
mod category;
mod object;
mod room;

pub use cable::{Cable, Group};
pub use category::{catalog_entry, CatalogEntry, ObjectCategory, ParseCategoryError};
pub use object::{Dimensions, ObjectId, PlacedObject};
pub use room::Room;

/// Position, rotation and scale triples in room-local coordinates (y up).
pub type Vec3 = [f64; 3];
