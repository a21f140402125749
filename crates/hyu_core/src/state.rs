use crate::view_model::{AppViewModel, ToastView};
use crate::{RejectReason, Theme};

/// Monotonic toast identifier; a stale expiry timer carrying an old value
/// must not dismiss a newer toast.
pub type ToastSeq = u64;

/// What a toast is about. Message text is a presentation concern and lives
/// in the shell, keyed off this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Copied,
    CopyFailed,
    NothingToCopy,
    Rejected(RejectReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub seq: ToastSeq,
}

/// Whole-app state. Fields are private; the shell observes it only through
/// [`AppState::view`] and mutates it only through [`crate::update`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    raw_input: String,
    cleaned_url: Option<String>,
    reject_reason: Option<RejectReason>,
    processing: bool,
    theme: Theme,
    toast: Option<Toast>,
    next_toast_seq: ToastSeq,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            cleaned_url: self.cleaned_url.clone(),
            reject_reason: self.reject_reason,
            processing: self.processing,
            theme: self.theme,
            toast: self.toast.map(|toast| ToastView { kind: toast.kind }),
            dirty: self.dirty,
        }
    }

    /// Returns whether a re-render is due and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_raw_input(&mut self, text: String) {
        self.raw_input = text;
    }

    pub(crate) fn raw_input(&self) -> &str {
        &self.raw_input
    }

    pub(crate) fn is_processing(&self) -> bool {
        self.processing
    }

    pub(crate) fn begin_processing(&mut self) {
        self.processing = true;
        self.cleaned_url = None;
        self.reject_reason = None;
        self.toast = None;
        self.mark_dirty();
    }

    pub(crate) fn finish_processing(&mut self, result: Result<String, RejectReason>) {
        self.processing = false;
        match result {
            Ok(url) => self.cleaned_url = Some(url),
            Err(reason) => self.reject_reason = Some(reason),
        }
        self.mark_dirty();
    }

    pub(crate) fn cleaned_url(&self) -> Option<&str> {
        self.cleaned_url.as_deref()
    }

    /// Replaces any visible toast and returns the new sequence number for
    /// the expiry effect.
    pub(crate) fn show_toast(&mut self, kind: ToastKind) -> ToastSeq {
        self.next_toast_seq += 1;
        let seq = self.next_toast_seq;
        self.toast = Some(Toast { kind, seq });
        self.mark_dirty();
        seq
    }

    /// Clears the toast only if `seq` still identifies it.
    pub(crate) fn expire_toast(&mut self, seq: ToastSeq) {
        if self.toast.is_some_and(|toast| toast.seq == seq) {
            self.toast = None;
            self.mark_dirty();
        }
    }

    pub(crate) fn theme(&self) -> Theme {
        self.theme
    }

    pub(crate) fn set_theme(&mut self, theme: Theme) {
        if self.theme != theme {
            self.theme = theme;
            self.mark_dirty();
        }
    }
}
