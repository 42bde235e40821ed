//! Core types for the Stratum utility layer.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the alignment math used by the arena allocator and the error types
//! shared across the workspace.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod align;
pub mod error;

pub use align::{align_forward, is_power_of_two, DEFAULT_ALIGNMENT};
pub use error::{ArenaError, ListError};
