mod client;
mod queue;

pub use client::WundergroundRelayClient;
pub use queue::{RelayQueue, RelayWorkerPool};
