use uuid::Uuid;

use crate::submission::error::{SubmitError, TransportError};
use crate::submission::payload::RsvpPayload;
use crate::submission::worker::{AttemptId, SubmissionReport, SubmitCommand, SubmitSender};
use crate::themes::ThemeId;
use crate::ui::form::RsvpForm;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SubmissionState {
    /// True only while a request is on the wire.
    pub in_flight: bool,
    /// Set once a request has gone out without a transport fault.
    pub submitted: bool,
    attempt: Option<AttemptId>,
}

impl SubmissionState {
    pub fn attempt(&self) -> Option<AttemptId> {
        self.attempt
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    Sent(AttemptId),
    /// A previous attempt is still on the wire; nothing was sent.
    Busy,
}

pub struct SubmissionWorkflow {
    state: SubmissionState,
    sender: Option<SubmitSender>,
}

impl SubmissionWorkflow {
    pub fn new(sender: Option<SubmitSender>) -> Self {
        Self {
            state: SubmissionState::default(),
            sender,
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn in_flight(&self) -> bool {
        self.state.in_flight
    }

    pub fn submitted(&self) -> bool {
        self.state.submitted
    }

    pub fn set_sender(&mut self, sender: SubmitSender) {
        self.sender = Some(sender);
    }

    /// Validate and hand exactly one request to the worker.
    pub fn submit(
        &mut self,
        form: &RsvpForm,
        theme: Option<ThemeId>,
    ) -> Result<Dispatch, SubmitError> {
        if self.state.in_flight {
            return Ok(Dispatch::Busy);
        }
        let payload = RsvpPayload::snapshot(form, theme)?;
        let attempt = Uuid::new_v4();

        self.state.in_flight = true;
        self.state.attempt = Some(attempt);
        // Cleared again on every early return below.
        let state = scopeguard::guard(&mut self.state, |state| {
            state.in_flight = false;
            state.attempt = None;
        });

        let sender = self.sender.as_ref().ok_or(TransportError::WorkerUnavailable)?;
        sender
            .try_send(SubmitCommand { attempt, payload })
            .map_err(|_| TransportError::WorkerUnavailable)?;

        scopeguard::ScopeGuard::into_inner(state);
        tracing::info!(target: "submission", %attempt, "rsvp dispatched");
        Ok(Dispatch::Sent(attempt))
    }

    /// Apply a worker report. Returns `None` for a report that does not
    /// belong to the current attempt (abandoned by navigation).
    pub fn finish(&mut self, report: SubmissionReport) -> Option<Result<(), TransportError>> {
        if self.state.attempt != Some(report.attempt) {
            tracing::debug!(target: "submission", attempt = %report.attempt, "stale report ignored");
            return None;
        }
        self.state.in_flight = false;
        self.state.attempt = None;
        if report.result.is_ok() {
            self.state.submitted = true;
        }
        Some(report.result)
    }

    /// Forget the current attempt without cancelling it. Its report will be
    /// ignored when it arrives.
    pub fn reset(&mut self) {
        if let Some(attempt) = self.state.attempt {
            tracing::debug!(target: "submission", %attempt, "attempt abandoned");
        }
        self.state = SubmissionState::default();
    }
}
