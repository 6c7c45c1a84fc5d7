use std::time::Instant;

use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastKind {
    #[default]
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ToastState {
    #[default]
    Hidden,
    Visible {
        message: String,
        kind: ToastKind,
        expires_at: Instant,
    },
}

impl UiState for ToastState {}

/// What the renderer sees of the toast slot.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Toast {
    pub visible: bool,
    pub message: String,
    pub kind: ToastKind,
}

impl ToastState {
    pub fn is_visible(&self) -> bool {
        matches!(self, Self::Visible { .. })
    }

    pub fn toast(&self) -> Toast {
        match self {
            ToastState::Hidden => Toast::default(),
            ToastState::Visible { message, kind, .. } => Toast {
                visible: true,
                message: message.clone(),
                kind: *kind,
            },
        }
    }
}
