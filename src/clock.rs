use chrono::{Local, NaiveDate, Utc};

/// Source of the current date and animation timestamp
#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    /// Calendar date used to age releases
    fn today(&self) -> NaiveDate;

    /// Milliseconds since the Unix epoch, used as the animation tick time
    fn now_millis(&self) -> f64;
}

/// Wall-clock time from the operating system
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    fn now_millis(&self) -> f64 {
        Utc::now().timestamp_millis() as f64
    }
}
