//! Call-duration observation, independent of the query engine.
//!
//! Explicit wrapping at the call site replaces a cross-cutting aspect: any
//! future can be handed to [`timed`] and its wall-clock duration lands in
//! the log, on success and failure paths alike, since the wrapper times the
//! future regardless of what it resolves to.

use std::future::Future;
use std::time::Instant;

/// Drive `fut` to completion, logging its wall-clock duration under `op`.
pub async fn timed<F, T>(op: &'static str, fut: F) -> T
where
    F: Future<Output = T>,
{
    let start = Instant::now();
    let out = fut.await;
    let elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
    tracing::info!(op, elapsed_ms, "call finished");
    out
}
