//! Time source for table serial numbers.

use chrono::{DateTime, Utc};

/// `YYYYMMDDhhmm`, always rendered in UTC.
pub const SERIAL_FORMAT: &str = "%Y%m%d%H%M";

/// Source of the current time.
pub trait Clock {
    fn now_utc(&self) -> DateTime<Utc>;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now_utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Serial number for a table generated now.
pub fn serial_number(clock: &dyn Clock) -> String {
    clock.now_utc().format(SERIAL_FORMAT).to_string()
}
