//! Marker trait for UI state slices.

/// States are cloned values that carry everything the renderer needs for
/// their slice. `Default` is the slice's initial value for a new session.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
