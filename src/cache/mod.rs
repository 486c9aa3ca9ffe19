//! Event Cache
//!
//! Holds resolved game documents for a configurable TTL so repeated legs on
//! the same game do not hit the upstream source every cycle. The cache is an
//! optimization only: a cold and a warm cache resolve to the same document.

mod clock;
mod event_cache;

pub use clock::{Clock, ManualClock, SystemClock};
pub use event_cache::{CacheKey, EventCache};
