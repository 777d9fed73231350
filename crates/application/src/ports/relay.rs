use async_trait::async_trait;
use wsrelay_domain::{DomainError, RelayJob};

/// Delivers one record to the upstream weather-reporting service.
#[async_trait]
pub trait RelayClient: Send + Sync {
    /// Fails with `DomainError::RelayDelivery` on transport errors or when the
    /// response does not acknowledge success.
    async fn relay(&self, job: &RelayJob) -> Result<(), DomainError>;
}

/// Producer side of the bounded relay queue.
#[async_trait]
pub trait RelayQueuePort: Send + Sync {
    /// Waits for a free slot when the queue is full.
    async fn enqueue(&self, job: RelayJob) -> Result<(), DomainError>;
}
