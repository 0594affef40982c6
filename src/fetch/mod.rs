//! Fetching source image bytes over HTTP.
//!
//! The fetch step runs strictly before the render pipeline and is the only
//! part of the program that touches the network. Retry policy for transient
//! failures lives here, not in the renderer.

mod client;
mod retry;

pub use client::{FetchClient, FetchError, DEFAULT_MAX_BYTES, DEFAULT_TIMEOUT};
pub use retry::{calculate_backoff, is_transient_network_error, DEFAULT_RETRIES};
