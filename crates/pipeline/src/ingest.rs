use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tracing::{debug, error, info, trace};

use valstream_address::{AddressCodec, Base58Codec};
use valstream_metrics::Metrics;
use valstream_store::{InsertOutcome, Store, ValidationRecord};

use crate::{DropReason, InboundValidation, PersistDecision, Pipeline};

/// Runs the pipeline over inbound validations in arrival order.
///
/// Verified records are inserted by detached tasks, so a slow store never holds up the
/// handling of the next message.
pub struct Ingester<A = Base58Codec> {
    pipeline: Pipeline<A>,
    store: Arc<dyn Store>,
    metrics: Metrics,
    inserts: JoinSet<()>,
}

impl Ingester {
    pub fn new(store: Arc<dyn Store>, metrics: Metrics) -> Self {
        Self::with_pipeline(Pipeline::new(), store, metrics)
    }
}

impl<A> Ingester<A>
where
    A: AddressCodec,
{
    pub fn with_pipeline(pipeline: Pipeline<A>, store: Arc<dyn Store>, metrics: Metrics) -> Self {
        Self {
            pipeline,
            store,
            metrics,
            inserts: JoinSet::new(),
        }
    }

    /// Handles messages until the channel closes, then waits for pending inserts.
    pub async fn run(mut self, mut inbound: mpsc::Receiver<InboundValidation>) {
        while let Some(validation) = inbound.recv().await {
            self.ingest(validation);
        }

        let pending = self.inserts.len();
        if pending > 0 {
            info!(%pending, "Inbound stream closed, waiting for pending inserts");
        }

        while self.inserts.join_next().await.is_some() {}

        debug!("Ingester stopped");
    }

    /// Handles one message, spawning its insert if it verifies.
    pub fn ingest(&mut self, validation: InboundValidation) {
        // Reap finished inserts.
        while self.inserts.try_join_next().is_some() {}

        self.metrics.received.inc();

        let decision = self
            .pipeline
            .handle(&validation.validation_public_key, &validation.data);

        match decision {
            PersistDecision::Persist(record) => {
                self.metrics.persist_requests.inc();

                let store = Arc::clone(&self.store);
                let metrics = self.metrics.clone();
                self.inserts.spawn(persist(store, record, metrics));
            }

            PersistDecision::Drop(DropReason::Unverified(_)) => {
                self.metrics.verification_failures.inc();
            }

            PersistDecision::Drop(_) => {
                self.metrics.decode_failures.inc();
            }
        }
    }
}

async fn persist(store: Arc<dyn Store>, record: ValidationRecord, metrics: Metrics) {
    let ledger_sequence = record.ledger_sequence;
    let node_key = record.pubkey.clone();

    match store.insert(record).await {
        Ok(InsertOutcome::Inserted) => {
            metrics.inserted.inc();
            debug!(ledger.sequence = ledger_sequence, %node_key, "Stored validation");
        }

        Ok(InsertOutcome::Conflict) => {
            metrics.conflicts.inc();
            trace!(ledger.sequence = ledger_sequence, %node_key, "Validation already stored");
        }

        Err(e) => {
            metrics.store_failures.inc();
            error!(ledger.sequence = ledger_sequence, %node_key, "Failed to store validation: {e}");
        }
    }
}
