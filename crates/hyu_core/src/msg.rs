use crate::{RejectReason, Theme, ToastSeq};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the URL input box.
    InputChanged(String),
    /// User asked for the current input to be cleaned.
    CleanClicked,
    /// The shell finished running the sanitizer for the in-flight request.
    CleanFinished {
        result: Result<String, RejectReason>,
    },
    /// User asked for the last cleaned link to be copied again.
    CopyClicked,
    /// Completion notification from the clipboard adapter.
    ClipboardDone { ok: bool },
    /// User toggled light/dark mode.
    ThemeToggled,
    /// Startup restore of the persisted (or ambient) theme preference.
    ThemeRestored(Theme),
    /// A toast display timer elapsed.
    ToastExpired { seq: ToastSeq },
    /// Fallback for placeholder wiring.
    NoOp,
}
