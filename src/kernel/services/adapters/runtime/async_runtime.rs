use super::message::AppMessage;
use crate::kernel::selection::LineRange;
use crate::kernel::services::ports::{ExplainOutcome, ExplainService};
use std::io;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;

/// One dispatched explanation request.
pub struct ExplainJob {
    pub generation: u64,
    pub range: LineRange,
    pub prompt: String,
}

pub struct AsyncRuntime {
    runtime: tokio::runtime::Runtime,
    tx: Sender<AppMessage>,
}

impl AsyncRuntime {
    pub fn new(tx: Sender<AppMessage>) -> io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .or_else(|e| {
                tracing::error!(
                    error = %e,
                    "Failed to create multi-thread tokio runtime, falling back to current-thread"
                );
                tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()
            })?;
        Ok(Self { runtime, tx })
    }

    /// Runs `job` on the runtime and posts `AppMessage::ExplainFinished` when it resolves.
    ///
    /// `latest` is read (never written) to skip posting results that are already stale; the
    /// event loop still compares generations before applying anything.
    pub fn spawn_explain(
        &self,
        job: ExplainJob,
        service: Arc<dyn ExplainService>,
        latest: Arc<AtomicU64>,
    ) {
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let ExplainJob {
                generation,
                range,
                prompt,
            } = job;

            let result = service.explain(prompt).await;
            if let Err(err) = &result {
                tracing::warn!(generation, error = %err, "explain request failed");
            }

            if latest.load(Ordering::Acquire) != generation {
                tracing::debug!(generation, "explain result superseded before delivery");
                return;
            }

            let _ = tx.send(AppMessage::ExplainFinished {
                generation,
                range,
                outcome: ExplainOutcome::from(result),
            });
        });
    }
}

#[cfg(test)]
#[path = "../../../../../tests/unit/kernel/services/adapters/runtime/async_runtime.rs"]
mod tests;
