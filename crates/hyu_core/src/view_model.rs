use crate::{RejectReason, Theme, ToastKind};

/// Immutable snapshot of [`crate::AppState`] handed to rendering.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    /// Last successfully cleaned link, if any.
    pub cleaned_url: Option<String>,
    /// Why the last clean attempt failed, if it did.
    pub reject_reason: Option<RejectReason>,
    /// A clean request is in flight (busy indicator).
    pub processing: bool,
    pub theme: Theme,
    pub toast: Option<ToastView>,
    pub dirty: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastView {
    pub kind: ToastKind,
}
