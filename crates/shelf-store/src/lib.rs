//! Record storage for Shelf.
//!
//! This crate owns the authoritative set of records. All mutation and
//! reading goes through the [`RecordStore`] trait; nothing else in the
//! system ever holds a reference into the underlying map.
//!
//! # Storage Backends
//!
//! - [`InMemoryRecordStore`] — `HashMap` behind a `RwLock`
//!
//! # Design Rules
//!
//! 1. Arbitrarily many readers run concurrently; writers are exclusive.
//! 2. Every read returns an independent copy — callers can never observe
//!    or cause mutation of stored state through a returned record.
//! 3. A snapshot is taken under one read-lock acquisition: consistent at a
//!    single instant, and writes that happen afterwards never appear in an
//!    already-returned snapshot.
//! 4. `set` overwrites unconditionally; "create" semantics with conflict
//!    detection are a caller concern.
//! 5. Deleting an absent id is a typed error, never silently ignored.

pub mod error;
pub mod memory;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::InMemoryRecordStore;
pub use traits::RecordStore;
