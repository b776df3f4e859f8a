//! Built-in methods every gantry server ships with.

mod echo;
mod ping;

pub use echo::EchoMethod;
pub use ping::PingMethod;

use std::time::{SystemTime, UNIX_EPOCH};

/// Seconds since the Unix epoch, zero if the clock predates it.
pub(crate) fn unix_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default()
}
