//! Execution-context lifecycle
//!
//! Models the engine session as a scoped resource: created once at process
//! start with the configured application name, explicitly shut down on
//! every exit path. init → use → teardown, exactly once.

use chrono::{DateTime, Utc};
use tracing::{info, warn};
use uuid::Uuid;

/// A live engine session
pub struct ExecutionContext {
    app_name: String,
    run_id: Uuid,
    started_at: DateTime<Utc>,
    shut_down: bool,
}

impl ExecutionContext {
    /// Start a new session under the given application name
    pub fn new(app_name: impl Into<String>) -> Self {
        let app_name = app_name.into();
        let run_id = Uuid::new_v4();
        info!("Starting {} (run {})", app_name, run_id);
        Self {
            app_name,
            run_id,
            started_at: Utc::now(),
            shut_down: false,
        }
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Tear the session down, logging its wall-clock duration.
    ///
    /// Consumes the context so no work can be submitted after teardown.
    pub fn shutdown(mut self) {
        self.shut_down = true;
        let elapsed = Utc::now() - self.started_at;
        info!(
            "Stopped {} (run {}) after {}ms",
            self.app_name,
            self.run_id,
            elapsed.num_milliseconds()
        );
    }
}

impl Drop for ExecutionContext {
    fn drop(&mut self) {
        if !self.shut_down {
            warn!(
                "Execution context for run {} dropped without shutdown",
                self.run_id
            );
        }
    }
}
