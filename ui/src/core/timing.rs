//! Simulated latency and wall-clock helpers.
//!
//! Every mock operation waits on a [`Latency`] before resolving. Native builds
//! sleep on the tokio timer driven by the Dioxus launcher; wasm builds use
//! `gloo-timers`.

use std::time::Duration;

use rand::Rng;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Artificial delay: `base_ms` plus a uniform jitter in `[0, jitter_ms)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Latency {
    pub base_ms: u64,
    #[serde(default)]
    pub jitter_ms: u64,
}

impl Latency {
    pub const fn fixed(base_ms: u64) -> Self {
        Self {
            base_ms,
            jitter_ms: 0,
        }
    }

    pub const fn jittered(base_ms: u64, jitter_ms: u64) -> Self {
        Self { base_ms, jitter_ms }
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        let jitter = if self.jitter_ms == 0 {
            0
        } else {
            rng.gen_range(0..self.jitter_ms)
        };
        Duration::from_millis(self.base_ms + jitter)
    }
}

#[cfg(target_arch = "wasm32")]
pub async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

/// Current time in the viewer's local offset (UTC when the offset is unknown).
#[cfg(target_arch = "wasm32")]
pub fn local_now() -> OffsetDateTime {
    let now = OffsetDateTime::now_utc();
    // JS reports minutes *behind* UTC.
    let minutes = -(js_sys::Date::new_0().get_timezone_offset() as i32);
    match time::UtcOffset::from_whole_seconds(minutes * 60) {
        Ok(offset) => now.to_offset(offset),
        Err(_) => now,
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn local_now() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}
