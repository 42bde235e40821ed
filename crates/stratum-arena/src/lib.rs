//! Bump-pointer arena allocation over a caller-owned byte buffer.
//!
//! The arena never frees individual allocations. Space is reclaimed either
//! all at once ([`Arena::free_all`]) or in stack order through a
//! [`TemporaryScope`] guard.
//!
//! # Architecture
//!
//! ```text
//! &mut [u8] (caller-owned backing buffer)
//! └── Arena (previous_offset, current_offset)
//!     ├── Allocation (offset, len) handles, resolved to slices on demand
//!     └── TemporaryScope (snapshot of both offsets, restored on drop)
//! ```
//!
//! # Failure classes
//!
//! - **Exhaustion** is recoverable: [`Arena::alloc`] returns `None`,
//!   [`Arena::try_alloc`] returns [`ArenaError::CapacityExceeded`].
//! - **Contract violations** panic: a non-power-of-two alignment, or a
//!   handle that lies outside the backing buffer.
//!
//! All state is integer offsets into the borrowed slice, so the crate
//! needs no `unsafe`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod arena;
pub mod config;
pub mod handle;
pub mod load;
pub mod temporary;
pub mod text;

// Public re-exports for the primary API surface.
pub use arena::Arena;
pub use config::ArenaConfig;
pub use handle::Allocation;
pub use load::LoadError;
pub use stratum_core::{align_forward, is_power_of_two, ArenaError, DEFAULT_ALIGNMENT};
pub use temporary::TemporaryScope;
pub use text::count_non_space;
