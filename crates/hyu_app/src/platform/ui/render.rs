use std::io::Write;

use hyu_core::{AppViewModel, Theme, ToastKind};

use super::constants::*;

const RESET: &str = "\x1b[0m";

/// ANSI styling chosen by the active theme: bright variants read better on
/// dark backgrounds, standard ones on light.
struct Palette {
    success_code: &'static str,
    error_code: &'static str,
    muted_code: &'static str,
}

impl Palette {
    fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                success_code: "\x1b[92m",
                error_code: "\x1b[91m",
                muted_code: "\x1b[90m",
            },
            Theme::Light => Self {
                success_code: "\x1b[32m",
                error_code: "\x1b[31m",
                muted_code: "\x1b[2m",
            },
        }
    }

    fn success(&self, text: &str) -> String {
        format!("{}{}{}", self.success_code, text, RESET)
    }

    fn error(&self, text: &str) -> String {
        format!("{}{}{}", self.error_code, text, RESET)
    }

    fn muted(&self, text: &str) -> String {
        format!("{}{}{}", self.muted_code, text, RESET)
    }
}

pub fn draw_banner() {
    println!("{BANNER}");
    println!("{HINT}");
}

pub fn draw_prompt() {
    print!("{PROMPT}");
    let _ = std::io::stdout().flush();
}

/// Print the current view followed by a fresh prompt.
pub fn draw(view: &AppViewModel) {
    println!();
    for line in lines(view) {
        println!("{line}");
    }
    draw_prompt();
}

fn lines(view: &AppViewModel) -> Vec<String> {
    let palette = Palette::for_theme(view.theme);
    let mut out = Vec::new();

    if view.processing {
        out.push(palette.muted(PROCESSING));
    }
    if let Some(url) = view.cleaned_url.as_deref() {
        out.push(format!("{} {url}", palette.success(CLEANED_LABEL)));
        out.push(palette.muted(CLEANED_NOTE));
    }
    if let Some(reason) = view.reject_reason {
        out.push(palette.error(reject_message(reason)));
    }
    if let Some(toast) = view.toast {
        let text = toast_message(toast.kind);
        out.push(match toast.kind {
            ToastKind::Copied => palette.success(text),
            _ => palette.error(text),
        });
    }

    out
}
