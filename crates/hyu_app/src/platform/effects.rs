use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use hyu_core::{sanitize, Effect, Msg, ToastSeq};
use hyu_logging::{hyu_info, hyu_warn};

use super::app::ShellEvent;
use super::persistence;

/// How long a toast stays visible before it is dismissed.
const TOAST_DURATION: Duration = Duration::from_secs(3);

/// Executes effects off the main line of control and reports completions
/// back to the shell as messages.
pub struct EffectRunner {
    event_tx: mpsc::Sender<ShellEvent>,
    clean_delay: Duration,
}

impl EffectRunner {
    pub fn new(event_tx: mpsc::Sender<ShellEvent>, clean_delay: Duration) -> Self {
        Self {
            event_tx,
            clean_delay,
        }
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Sanitize { raw } => self.run_sanitize(raw),
                Effect::CopyToClipboard { text } => self.run_copy(text),
                Effect::PersistTheme { theme } => persistence::save_theme(theme),
                Effect::ExpireToast { seq } => self.run_expiry(seq),
            }
        }
    }

    fn run_sanitize(&self, raw: String) {
        let tx = self.event_tx.clone();
        let delay = self.clean_delay;
        thread::spawn(move || {
            // The pause is presentation pacing only; the sanitizer itself
            // is synchronous and sub-millisecond.
            if !delay.is_zero() {
                thread::sleep(delay);
            }
            let result = sanitize(&raw);
            let _ = tx.send(ShellEvent::Core(Msg::CleanFinished { result }));
        });
    }

    fn run_copy(&self, text: String) {
        let tx = self.event_tx.clone();
        thread::spawn(move || {
            let ok = match copy_to_clipboard(&text) {
                Ok(()) => {
                    hyu_info!("Copied {} bytes to clipboard", text.len());
                    true
                }
                Err(err) => {
                    hyu_warn!("Clipboard write failed: {err}");
                    false
                }
            };
            let _ = tx.send(ShellEvent::Core(Msg::ClipboardDone { ok }));
        });
    }

    fn run_expiry(&self, seq: ToastSeq) {
        let tx = self.event_tx.clone();
        thread::spawn(move || {
            thread::sleep(TOAST_DURATION);
            let _ = tx.send(ShellEvent::Core(Msg::ToastExpired { seq }));
        });
    }
}

/// Write `text` to the system clipboard.
///
/// Initialization can fail in headless sessions and the write itself can be
/// denied by the platform; either way the error is reported to the caller
/// and never retried.
pub fn copy_to_clipboard(text: &str) -> Result<(), arboard::Error> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(text.to_owned())
}
