//! Trait definitions for accessing values from the host environment.
//!
//! NOTE: This is a power user API.

use crate::CalendarResult;

/// The `HostClock` trait defines an accessor to the host's clock.
pub trait HostClock {
    /// Returns the milliseconds since the Unix epoch, 1970-01-01T00:00Z.
    fn get_host_epoch_milliseconds(&self) -> CalendarResult<i64>;
}

// Implement an empty provider fixed at the Unix epoch.

impl HostClock for () {
    fn get_host_epoch_milliseconds(&self) -> CalendarResult<i64> {
        Ok(0)
    }
}
