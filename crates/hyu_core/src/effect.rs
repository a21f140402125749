use crate::{Theme, ToastSeq};

/// Side effects requested by [`crate::update`]; the shell executes them and
/// reports completions back as messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Run the sanitizer over `raw` (after any presentation pacing delay)
    /// and answer with [`crate::Msg::CleanFinished`].
    Sanitize { raw: String },
    /// Write `text` to the system clipboard and answer with
    /// [`crate::Msg::ClipboardDone`].
    CopyToClipboard { text: String },
    /// Persist the theme preference, best effort.
    PersistTheme { theme: Theme },
    /// Answer with [`crate::Msg::ToastExpired`] after the toast duration.
    ExpireToast { seq: ToastSeq },
}
