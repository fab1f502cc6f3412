//! Lifecycle capability model for persisted entities.
//!
//! # Responsibility
//! - Define the timestamp and soft-delete capabilities entities opt into.
//! - Map semantic timestamp fields onto physical storage keys.
//!
//! # Invariants
//! - Capabilities hold no state; all instants live on the entity itself.
//! - Deletion is a data flag (`deleted_at`), never a physical removal.

pub mod clock;
pub mod field_key;
pub mod has_timestamp;
pub mod soft_delete;
