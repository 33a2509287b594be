//! Error handling for DeskPlan
//!
//! The arrangement planner, the cable router and the history manager are
//! total functions and never fail. Errors only arise at the edges:
//! layout files that cannot be read or validated, and requests naming
//! objects that do not exist. File I/O wraps these in `anyhow` context in
//! the designer crate; configuration has its own errors in
//! `deskplan-settings`.

use thiserror::Error;

/// Layout error type
///
/// Represents problems with layout files and with requests that name
/// objects which are not part of the layout.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// Layout file format version is not supported
    #[error("Unsupported layout version: {version}")]
    UnsupportedVersion {
        /// The version string found in the file.
        version: String,
    },

    /// Layout content could not be interpreted
    #[error("Malformed layout: {reason}")]
    Malformed {
        /// Why the layout was rejected.
        reason: String,
    },

    /// An object id referenced by a request does not exist
    #[error("Unknown object: {id}")]
    UnknownObject {
        /// The id that could not be resolved.
        id: String,
    },

    /// A room dimension is not usable
    #[error("Invalid room: {reason}")]
    InvalidRoom {
        /// Why the room was rejected.
        reason: String,
    },
}
