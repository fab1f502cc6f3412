//! Soft-delete capability.
//!
//! # Responsibility
//! - Declare the `deleted_at` tombstone accessor.
//! - Provide tombstone lifecycle helpers (`mark_deleted`, `restore`).
//!
//! # Invariants
//! - `deleted_at` present means deleted at that instant; absent means active.
//! - Helpers only write the field; filtering deleted records is up to the
//!   query layer.

use super::clock::{now_epoch_ms, EpochMillis};

/// Capability for entities that are tombstoned instead of physically removed.
pub trait SoftDelete {
    /// Tombstone instant, if the entity has been soft deleted.
    fn deleted_at(&self) -> Option<EpochMillis>;

    fn set_deleted_at(&mut self, value: Option<EpochMillis>);

    /// Sets `deleted_at` to `at`, or to the current time when `at` is `None`.
    ///
    /// Marking an already deleted entity overwrites the previous instant.
    fn mark_deleted(&mut self, at: Option<EpochMillis>) {
        self.set_deleted_at(Some(at.unwrap_or_else(now_epoch_ms)));
    }

    /// Clears the tombstone.
    fn restore(&mut self) {
        self.set_deleted_at(None);
    }

    fn is_deleted(&self) -> bool {
        self.deleted_at().is_some()
    }

    /// Returns whether this entity should be considered visible/active.
    fn is_active(&self) -> bool {
        !self.is_deleted()
    }
}

/// Implements [`SoftDelete`] for a struct storing its tombstone in an
/// `Option<EpochMillis>` field.
#[macro_export]
macro_rules! impl_soft_delete {
    ($ty:ty, $deleted:ident) => {
        impl $crate::SoftDelete for $ty {
            fn deleted_at(&self) -> Option<$crate::EpochMillis> {
                self.$deleted
            }

            fn set_deleted_at(&mut self, value: Option<$crate::EpochMillis>) {
                self.$deleted = value;
            }
        }
    };
}
