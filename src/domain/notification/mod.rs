//! Notification domain module

mod level;
mod request;
mod timeout;

pub use level::{NotificationLevel, Urgency};
pub use request::{NotificationRequest, NotificationRequestBuilder};
pub use timeout::{Timeout, DEFAULT_TIMEOUT_SECS, MAX_TIMEOUT_SECS, MIN_TIMEOUT_SECS};
