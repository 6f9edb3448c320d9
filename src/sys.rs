use crate::host::HostClock;
use crate::{CalendarError, CalendarResult};

use num_traits::ToPrimitive;
use web_time::{SystemTime, UNIX_EPOCH};

/// A host clock backed by [`std::time::SystemTime`], or the browser's
/// clock on `wasm32` targets.
///
/// Enable with the `sys` feature flag.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl HostClock for SystemClock {
    fn get_host_epoch_milliseconds(&self) -> CalendarResult<i64> {
        get_system_milliseconds()
    }
}

/// Returns the system time in milliseconds.
pub(crate) fn get_system_milliseconds() -> CalendarResult<i64> {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|_| CalendarError::general("Error fetching system time"))?
        .as_millis()
        .to_i64()
        .ok_or(CalendarError::general("System time is out of range"))
}
