//! User-facing message text. This is the only place reason codes and toast
//! kinds are turned into words.

use hyu_core::{RejectReason, ToastKind};

pub const PROMPT: &str = "paste link> ";

pub const BANNER: &str = "HYU \u{2728} clean your Instagram links";
pub const HINT: &str =
    "Paste a link and press Enter. Commands: :copy  :theme  :quit";

pub const PROCESSING: &str = "Cleaning the link...";
pub const CLEANED_LABEL: &str = "Clean link:";
pub const CLEANED_NOTE: &str =
    "Usernames and tracking identifiers were removed; this copy is safe to share.";

pub fn reject_message(reason: RejectReason) -> &'static str {
    match reason {
        RejectReason::EmptyInput => "Please enter a link.",
        RejectReason::InvalidUrl => {
            "That link is not valid. Please check it and try again."
        }
        RejectReason::NotInstagramHost => {
            "That does not look like a valid Instagram link."
        }
    }
}

pub fn toast_message(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Copied => "Copied to clipboard.",
        ToastKind::CopyFailed => "Copy failed. Please copy the link manually.",
        ToastKind::NothingToCopy => "There is no link to copy yet.",
        ToastKind::Rejected(reason) => reject_message(reason),
    }
}
