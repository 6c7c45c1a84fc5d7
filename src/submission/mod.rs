//! One-shot RSVP submission: validation, dispatch to the worker, outcome.

pub mod error;
pub mod payload;
pub mod transport;
pub mod worker;
pub mod workflow;

pub use error::{SubmitError, TransportError, ValidationError};
pub use payload::RsvpPayload;
pub use transport::{HttpTransport, RsvpTransport};
pub use worker::{AttemptId, SubmissionReport, SubmissionWorker, SubmitCommand, SubmitSender};
pub use workflow::{Dispatch, SubmissionState, SubmissionWorkflow};
