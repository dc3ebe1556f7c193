//! Explain workflow: prompt, background dispatch, last-request-wins delivery.
//!
//! Every request gets a fresh generation number. Only a result whose generation is still the
//! latest, and whose explanation view is still open, is shown. Older
//! results are dropped on arrival; the network call itself is never cancelled.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use super::document::Document;
use super::overlay::{ExplainContent, OverlayStack, OverlayView};
use super::prompt::build_prompt;
use super::selection::LineRange;
use super::services::adapters::{AppMessage, AsyncRuntime, ExplainJob};
use super::services::ports::{ExplainOutcome, ExplainService};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplainPhase {
    Idle,
    InFlight,
    Delivered,
    Failed,
    Superseded,
}

pub struct ExplainOrchestrator {
    service: Arc<dyn ExplainService>,
    runtime: AsyncRuntime,
    latest: Arc<AtomicU64>,
    generation: u64,
    phase: ExplainPhase,
}

impl ExplainOrchestrator {
    pub fn new(service: Arc<dyn ExplainService>, runtime: AsyncRuntime) -> Self {
        Self {
            service,
            runtime,
            latest: Arc::new(AtomicU64::new(0)),
            generation: 0,
            phase: ExplainPhase::Idle,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Lifecycle of the most recent request.
    pub fn phase(&self) -> ExplainPhase {
        self.phase
    }

    /// Shows a loading view for `range` and dispatches the request in the background.
    /// Returns the generation assigned to it.
    pub fn request(
        &mut self,
        document: &Document,
        range: LineRange,
        overlay: &mut OverlayStack,
    ) -> u64 {
        self.generation += 1;
        let generation = self.generation;
        self.latest.store(generation, Ordering::Release);

        let prompt = build_prompt(document, range);
        // Older views would wait forever: their results are dropped as superseded.
        overlay.discard_explain();
        overlay.push(OverlayView::loading(generation, range));
        self.phase = ExplainPhase::InFlight;

        tracing::info!(
            generation,
            range = %range,
            prompt_len = prompt.len(),
            "explain request dispatched"
        );

        self.runtime.spawn_explain(
            ExplainJob {
                generation,
                range,
                prompt,
            },
            self.service.clone(),
            self.latest.clone(),
        );

        generation
    }

    /// Applies a background result to the overlay if it is still current.
    pub fn apply(&mut self, message: AppMessage, overlay: &mut OverlayStack) -> ExplainPhase {
        match message {
            AppMessage::ExplainFinished {
                generation,
                range,
                outcome,
            } => self.apply_outcome(generation, range, outcome, overlay),
        }
    }

    fn apply_outcome(
        &mut self,
        generation: u64,
        range: LineRange,
        outcome: ExplainOutcome,
        overlay: &mut OverlayStack,
    ) -> ExplainPhase {
        if generation != self.generation {
            tracing::debug!(
                generation,
                latest = self.generation,
                "dropping superseded explain result"
            );
            return ExplainPhase::Superseded;
        }

        let (content, phase) = match outcome {
            ExplainOutcome::Success(text) => (ExplainContent::Text(text), ExplainPhase::Delivered),
            ExplainOutcome::Failure(message) => {
                (ExplainContent::Error(message), ExplainPhase::Failed)
            }
        };
        if !overlay.update_explain(generation, content) {
            tracing::debug!(generation, "explain view dismissed, dropping result");
            self.phase = ExplainPhase::Idle;
            return ExplainPhase::Superseded;
        }
        self.phase = phase;

        tracing::info!(generation, range = %range, phase = ?phase, "explain result delivered");
        phase
    }

    /// Called when the user closes the explanation view for `generation`.
    pub fn dismissed(&mut self, generation: u64) {
        if generation == self.generation && self.phase == ExplainPhase::InFlight {
            self.phase = ExplainPhase::Idle;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/explain.rs"]
mod tests;
