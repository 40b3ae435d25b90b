//! Keep track of time, both in native and Web platforms!
pub use web_time::{Duration, Instant};
