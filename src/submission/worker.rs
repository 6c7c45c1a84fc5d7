use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::mpsc;
use uuid::Uuid;

use crate::submission::error::TransportError;
use crate::submission::payload::RsvpPayload;
use crate::submission::transport::RsvpTransport;

pub type AttemptId = Uuid;

const COMMAND_CHANNEL_SIZE: usize = 4;

#[derive(Debug, Clone)]
pub struct SubmitCommand {
    pub attempt: AttemptId,
    pub payload: RsvpPayload,
}

pub type SubmitSender = mpsc::Sender<SubmitCommand>;

/// Outcome of one attempt, delivered back to the UI thread.
#[derive(Debug)]
pub struct SubmissionReport {
    pub attempt: AttemptId,
    pub result: Result<(), TransportError>,
}

type Reporter = Arc<dyn Fn(SubmissionReport) + Send + Sync>;

/// Runs submissions on the tokio runtime, one task per command.
pub struct SubmissionWorker<T> {
    transport: Arc<T>,
    reporter: Reporter,
}

impl<T: RsvpTransport> SubmissionWorker<T> {
    /// Spawn the worker loop and return the command sender. The loop ends
    /// when every sender is dropped.
    pub fn spawn<F>(handle: &Handle, transport: T, reporter: F) -> SubmitSender
    where
        F: Fn(SubmissionReport) + Send + Sync + 'static,
    {
        let (tx, mut rx) = mpsc::channel::<SubmitCommand>(COMMAND_CHANNEL_SIZE);
        let worker = Self {
            transport: Arc::new(transport),
            reporter: Arc::new(reporter),
        };
        handle.spawn(async move {
            while let Some(command) = rx.recv().await {
                worker.dispatch(command);
            }
            tracing::debug!(target: "submission", "worker stopped");
        });
        tx
    }

    fn dispatch(&self, command: SubmitCommand) {
        let transport = Arc::clone(&self.transport);
        let reporter = Arc::clone(&self.reporter);
        tokio::spawn(async move {
            // Reports on every exit path, including a dropped or panicking task.
            let mut report = scopeguard::guard(
                SubmissionReport {
                    attempt: command.attempt,
                    result: Err(TransportError::Abandoned),
                },
                move |report| reporter(report),
            );
            tracing::info!(
                target: "submission",
                attempt = %command.attempt,
                status = %command.payload.status,
                guests = command.payload.guests,
                "sending rsvp"
            );
            report.result = transport.send(&command.payload).await;
            if let Err(err) = &report.result {
                tracing::warn!(target: "submission", attempt = %command.attempt, "{err}");
            }
        });
    }
}
