//! Growable list with doubling capacity.
//!
//! [`GrowableList`] keeps elements in insertion order and doubles its
//! capacity, starting from [`GrowableList::INITIAL_CAPACITY`], whenever an
//! append would overflow it. Growth goes through `Vec::try_reserve_exact`,
//! so an allocation failure is reported as [`ListError::GrowthFailed`] and
//! leaves the list untouched instead of aborting.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod list;

pub use list::GrowableList;
pub use stratum_core::ListError;
