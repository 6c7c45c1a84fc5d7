//! Marker trait for intents.

/// Something that happened: a user action on the form or scene, or a system
/// event such as a tick or a finished submission.
pub trait Intent: Send + 'static {}
