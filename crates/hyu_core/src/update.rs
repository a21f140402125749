use crate::{AppState, Effect, Msg, ToastKind};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) => {
            state.set_raw_input(text);
            Vec::new()
        }
        Msg::CleanClicked => {
            // The clean control is disabled while a request is in flight.
            if state.is_processing() {
                return (state, Vec::new());
            }
            let raw = state.raw_input().trim().to_owned();
            if raw.is_empty() {
                // Empty input is reported immediately, without entering the
                // busy state.
                let seq = state.show_toast(ToastKind::Rejected(
                    crate::RejectReason::EmptyInput,
                ));
                return (state, vec![Effect::ExpireToast { seq }]);
            }
            state.begin_processing();
            vec![Effect::Sanitize { raw }]
        }
        Msg::CleanFinished { result } => {
            // A completion with nothing in flight is stale; drop it.
            if !state.is_processing() {
                return (state, Vec::new());
            }
            match result {
                Ok(url) => {
                    state.finish_processing(Ok(url.clone()));
                    vec![Effect::CopyToClipboard { text: url }]
                }
                Err(reason) => {
                    // The reason stays on screen until the next request
                    // replaces it, so no transient toast is raised here.
                    state.finish_processing(Err(reason));
                    Vec::new()
                }
            }
        }
        Msg::CopyClicked => {
            // The copy control is disabled while a clean is in flight, same
            // as the clean control.
            if state.is_processing() {
                return (state, Vec::new());
            }
            match state.cleaned_url() {
                Some(url) => {
                    let text = url.to_owned();
                    vec![Effect::CopyToClipboard { text }]
                }
                None => {
                    let seq = state.show_toast(ToastKind::NothingToCopy);
                    vec![Effect::ExpireToast { seq }]
                }
            }
        }
        Msg::ClipboardDone { ok } => {
            let kind = if ok {
                ToastKind::Copied
            } else {
                ToastKind::CopyFailed
            };
            let seq = state.show_toast(kind);
            vec![Effect::ExpireToast { seq }]
        }
        Msg::ThemeToggled => {
            let theme = state.theme().toggled();
            state.set_theme(theme);
            vec![Effect::PersistTheme { theme }]
        }
        Msg::ThemeRestored(theme) => {
            // Restoring is not a user toggle; nothing is persisted.
            state.set_theme(theme);
            Vec::new()
        }
        Msg::ToastExpired { seq } => {
            state.expire_toast(seq);
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
