//! Wall-clock instants in the representation entities persist.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Unix epoch milliseconds.
///
/// Kept as a type alias so signatures read as instants, not counters.
pub type EpochMillis = i64;

/// Returns the current wall-clock instant.
pub fn now_epoch_ms() -> EpochMillis {
    epoch_ms_at(SystemTime::now())
}

/// Converts a system time to epoch milliseconds.
///
/// Never fails: times before the Unix epoch yield a negative value.
pub fn epoch_ms_at(time: SystemTime) -> EpochMillis {
    match time.duration_since(UNIX_EPOCH) {
        Ok(elapsed) => duration_to_millis(elapsed),
        Err(err) => -duration_to_millis(err.duration()),
    }
}

fn duration_to_millis(duration: Duration) -> EpochMillis {
    EpochMillis::try_from(duration.as_millis()).unwrap_or(EpochMillis::MAX)
}

#[cfg(test)]
mod tests {
    use super::{duration_to_millis, epoch_ms_at, now_epoch_ms};
    use std::time::{Duration, UNIX_EPOCH};

    #[test]
    fn now_is_after_2020() {
        assert!(now_epoch_ms() > 1_577_836_800_000);
    }

    #[test]
    fn times_around_the_epoch_keep_their_sign() {
        assert_eq!(epoch_ms_at(UNIX_EPOCH), 0);
        assert_eq!(epoch_ms_at(UNIX_EPOCH + Duration::from_millis(5)), 5);
        assert_eq!(epoch_ms_at(UNIX_EPOCH - Duration::from_millis(5)), -5);
    }

    #[test]
    fn duration_conversion_saturates() {
        assert_eq!(duration_to_millis(Duration::from_millis(1_500)), 1_500);
        assert_eq!(duration_to_millis(Duration::MAX), i64::MAX);
    }
}
