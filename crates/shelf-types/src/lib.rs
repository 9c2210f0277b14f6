//! Foundation types for Shelf, the labeled record store.
//!
//! Every other Shelf crate depends on `shelf-types`.
//!
//! # Key Types
//!
//! - [`RecordId`] — String identifier, client-supplied or generated (UUID v4)
//! - [`Label`] — Opaque tag used for list filtering
//! - [`Record`] — The stored entity: id, server-assigned creation time,
//!   label sequence, opaque payload
//! - [`RecordInput`] — Inbound create shape (carries no creation time)

pub mod id;
pub mod label;
pub mod record;

pub use id::RecordId;
pub use label::Label;
pub use record::{Record, RecordInput};
