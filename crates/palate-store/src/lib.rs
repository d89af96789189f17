//! # palate-store
//!
//! Profile persistence boundary. [`InMemoryProfileStore`] keeps profiles in a
//! `DashMap` and runs each read-update-write under the user's entry lock, so
//! concurrent experiences for one user never lose an update while different
//! users proceed in parallel.

mod memory;

pub use memory::InMemoryProfileStore;
