//! Creation/update timestamp capability.
//!
//! # Responsibility
//! - Declare the `created_at`/`updated_at` accessors an entity must expose.
//! - Provide default `mark_*` mutations on top of those accessors.
//!
//! # Invariants
//! - Both instants start as `None` and only change through explicit calls.
//! - `mark_*` always overwrites; the last write wins.
//! - No ordering is enforced between `created_at` and `updated_at`.

use super::clock::{now_epoch_ms, EpochMillis};

/// Capability for entities that record when they were created and last updated.
pub trait HasTimestamp {
    /// Instant the entity was created, if recorded.
    fn created_at(&self) -> Option<EpochMillis>;

    fn set_created_at(&mut self, value: Option<EpochMillis>);

    /// Instant the entity was last updated, if recorded.
    fn updated_at(&self) -> Option<EpochMillis>;

    fn set_updated_at(&mut self, value: Option<EpochMillis>);

    /// Sets `created_at` to `at`, or to the current time when `at` is `None`.
    fn mark_created(&mut self, at: Option<EpochMillis>) {
        self.set_created_at(Some(at.unwrap_or_else(now_epoch_ms)));
    }

    /// Sets `updated_at` to `at`, or to the current time when `at` is `None`.
    fn mark_updated(&mut self, at: Option<EpochMillis>) {
        self.set_updated_at(Some(at.unwrap_or_else(now_epoch_ms)));
    }
}

/// Implements [`HasTimestamp`] for a struct storing both instants in
/// `Option<EpochMillis>` fields.
///
/// ```
/// use lifestamp_core::{impl_has_timestamp, EpochMillis, HasTimestamp};
///
/// #[derive(Default)]
/// struct Post {
///     created: Option<EpochMillis>,
///     updated: Option<EpochMillis>,
/// }
/// impl_has_timestamp!(Post, created, updated);
///
/// let mut post = Post::default();
/// post.mark_created(Some(10));
/// assert_eq!(post.created_at(), Some(10));
/// ```
#[macro_export]
macro_rules! impl_has_timestamp {
    ($ty:ty, $created:ident, $updated:ident) => {
        impl $crate::HasTimestamp for $ty {
            fn created_at(&self) -> Option<$crate::EpochMillis> {
                self.$created
            }

            fn set_created_at(&mut self, value: Option<$crate::EpochMillis>) {
                self.$created = value;
            }

            fn updated_at(&self) -> Option<$crate::EpochMillis> {
                self.$updated
            }

            fn set_updated_at(&mut self, value: Option<$crate::EpochMillis>) {
                self.$updated = value;
            }
        }
    };
}
