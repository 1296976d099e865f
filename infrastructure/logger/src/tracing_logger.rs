use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

const TARGET: &str = "storefront";

/// Forwards domain log lines to `tracing`, tagged with the component that
/// emitted them (`cart`, `catalog`, `checkout`).
#[derive(Debug, Clone, Copy)]
pub struct TracingLogger {
    component: &'static str,
}

impl TracingLogger {
    pub fn new(component: &'static str) -> Self {
        Self { component }
    }

    pub fn component(&self) -> &'static str {
        self.component
    }
}

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: TARGET, component = self.component, "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: TARGET, component = self.component, "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: TARGET, component = self.component, "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: TARGET, component = self.component, "{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn should_keep_component_name() {
        let logger = TracingLogger::new("cart");
        assert_eq!(logger.component(), "cart");
    }

    #[test]
    fn should_log_without_subscriber() {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger::new("checkout"));
        logger.info("order link ready");
        logger.debug("nothing to see");
    }
}
