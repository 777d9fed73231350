use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};
use wsrelay_application::ports::{RelayClient, RelayQueuePort};
use wsrelay_domain::{DomainError, RelayJob};

/// Producer half of the bounded relay queue.
///
/// `enqueue` waits for a free slot when the queue is full; that wait is the
/// only backpressure the ingestion path sees.
#[derive(Clone)]
pub struct RelayQueue {
    sender: mpsc::Sender<RelayJob>,
}

impl RelayQueue {
    /// Returns the queue and the receiver to hand to [`RelayWorkerPool`].
    pub fn new(capacity: usize) -> (Self, mpsc::Receiver<RelayJob>) {
        let (sender, receiver) = mpsc::channel(capacity.max(1));
        (Self { sender }, receiver)
    }

    pub fn capacity(&self) -> usize {
        self.sender.max_capacity()
    }

    /// Records waiting for a worker.
    pub fn pending(&self) -> usize {
        self.sender.max_capacity() - self.sender.capacity()
    }
}

#[async_trait]
impl RelayQueuePort for RelayQueue {
    async fn enqueue(&self, job: RelayJob) -> Result<(), DomainError> {
        self.sender
            .send(job)
            .await
            .map_err(|_| DomainError::QueueClosed)
    }
}

/// Fixed set of workers draining the relay queue.
///
/// Delivery is at most once: a failed relay is logged and dropped, and
/// workers complete in no particular order.
pub struct RelayWorkerPool {
    receiver: Arc<Mutex<mpsc::Receiver<RelayJob>>>,
    client: Arc<dyn RelayClient>,
    workers: usize,
}

impl RelayWorkerPool {
    pub fn new(
        receiver: mpsc::Receiver<RelayJob>,
        client: Arc<dyn RelayClient>,
        workers: usize,
    ) -> Self {
        Self {
            receiver: Arc::new(Mutex::new(receiver)),
            client,
            workers: workers.max(1),
        }
    }

    /// Spawns the workers. They run until every [`RelayQueue`] handle is
    /// dropped and the queue is empty.
    pub fn start(self) -> Vec<JoinHandle<()>> {
        info!(workers = self.workers, "Starting relay worker pool");

        (0..self.workers)
            .map(|id| {
                let receiver = Arc::clone(&self.receiver);
                let client = Arc::clone(&self.client);
                tokio::spawn(worker_loop(id, receiver, client))
            })
            .collect()
    }
}

async fn worker_loop(
    id: usize,
    receiver: Arc<Mutex<mpsc::Receiver<RelayJob>>>,
    client: Arc<dyn RelayClient>,
) {
    loop {
        // Only the dequeue holds the lock; the relay call runs unlocked.
        let job = receiver.lock().await.recv().await;

        let Some(job) = job else {
            debug!(worker = id, "Relay queue closed, worker exiting");
            return;
        };

        match client.relay(&job).await {
            Ok(()) => debug!(worker = id, "Relay delivered"),
            Err(e) => warn!(worker = id, error = %e, "Relay delivery failed, dropping record"),
        }
    }
}
