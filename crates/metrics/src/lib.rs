mod registry;

pub use prometheus_client::metrics::counter::Counter;
pub use registry::{Registry, SharedRegistry};

#[derive(Clone, Debug, Default)]
pub struct Metrics {
    /// Validation messages received from the stream
    pub received: Counter,

    /// Messages dropped because the node key, hex payload or binary fields could not be decoded
    pub decode_failures: Counter,

    /// Messages dropped because their signature did not verify
    pub verification_failures: Counter,

    /// Stream frames that could not be parsed
    pub parse_failures: Counter,

    /// Verified messages handed to the store
    pub persist_requests: Counter,

    /// Records written to the store
    pub inserted: Counter,

    /// Inserts skipped because the record was already stored
    pub conflicts: Counter,

    /// Inserts that failed
    pub store_failures: Counter,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(registry: &SharedRegistry) -> Self {
        let metrics = Self::new();

        registry.with_prefix("valstream", |registry| {
            registry.register(
                "validations_received",
                "Validation messages received from the stream",
                metrics.received.clone(),
            );

            registry.register(
                "decode_failures",
                "Messages dropped because they could not be decoded",
                metrics.decode_failures.clone(),
            );

            registry.register(
                "verification_failures",
                "Messages dropped because their signature did not verify",
                metrics.verification_failures.clone(),
            );

            registry.register(
                "parse_failures",
                "Stream frames that could not be parsed",
                metrics.parse_failures.clone(),
            );

            registry.register(
                "persist_requests",
                "Verified messages handed to the store",
                metrics.persist_requests.clone(),
            );

            registry.register(
                "inserted",
                "Records written to the store",
                metrics.inserted.clone(),
            );

            registry.register(
                "conflicts",
                "Inserts skipped because the record was already stored",
                metrics.conflicts.clone(),
            );

            registry.register(
                "store_failures",
                "Inserts that failed",
                metrics.store_failures.clone(),
            );
        });

        metrics
    }
}
