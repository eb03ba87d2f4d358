//! Tests for routing `log` and `tracing` output into a logger

#[cfg(test)]
mod tests {
    use logfacade::{FacadeLayer, Level, LogBridge, Logger, MemoryOutput};
    use tracing_subscriber::layer::SubscriberExt;

    fn leaked(memory: &MemoryOutput) -> &'static Logger {
        Box::leak(Box::new(
            Logger::builder()
                .output(memory.clone())
                .colors(false)
                .build(),
        ))
    }

    // The `log` crate accepts a single global logger per process, so this is
    // the only test that installs one.
    #[test]
    fn test_log_bridge_install_follows_runtime_level() {
        let memory = MemoryOutput::new();
        let logger = leaked(&memory);
        LogBridge::install(logger).expect("no other log backend installed");

        log::debug!(target: "host", "before");
        logger.set_level(Level::Debug);
        log::debug!(target: "host", "after {}", 1);
        log::trace!(target: "host", "trace maps to debug");

        assert_eq!(
            memory.contents(),
            "DEBU after 1\nDEBU trace maps to debug\n"
        );
        assert!(LogBridge::install(logger).is_err());
    }

    #[test]
    fn test_facade_layer_as_default_subscriber() {
        let memory = MemoryOutput::new();
        let logger = leaked(&memory);
        let subscriber = tracing_subscriber::registry().with(FacadeLayer::new(logger));

        tracing::subscriber::with_default(subscriber, || {
            tracing::error!(target: "host", code = 503, "upstream unavailable");
            logger.set_level(Level::Error);
            tracing::warn!(target: "host", "filtered");
        });

        assert_eq!(
            memory.contents(),
            format!("ERRO {:<44} code=503\n", "upstream unavailable")
        );
    }
}
