use std::sync::Once;

use hyu_core::{update, AppState, Effect, Msg, Theme, ToastKind, ToastSeq};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(hyu_logging::initialize_for_tests);
}

fn toast_seq(effects: &[Effect]) -> ToastSeq {
    effects
        .iter()
        .find_map(|effect| match effect {
            Effect::ExpireToast { seq } => Some(*seq),
            _ => None,
        })
        .expect("expire-toast effect")
}

fn state_with_cleaned_url() -> AppState {
    let (state, _) = update(
        AppState::new(),
        Msg::InputChanged("instagram.com/p/1".to_string()),
    );
    let (state, _) = update(state, Msg::CleanClicked);
    let (state, _) = update(
        state,
        Msg::CleanFinished {
            result: Ok("https://instagram.com/p/1".to_string()),
        },
    );
    state
}

#[test]
fn clipboard_completion_raises_matching_toast() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::ClipboardDone { ok: true });
    assert_eq!(state.view().toast.map(|t| t.kind), Some(ToastKind::Copied));
    assert_eq!(effects.len(), 1);

    let (state, _) = update(state, Msg::ClipboardDone { ok: false });
    assert_eq!(
        state.view().toast.map(|t| t.kind),
        Some(ToastKind::CopyFailed)
    );
}

#[test]
fn copy_without_a_result_raises_nothing_to_copy() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::CopyClicked);
    assert_eq!(
        state.view().toast.map(|t| t.kind),
        Some(ToastKind::NothingToCopy)
    );
    assert_eq!(effects.len(), 1);
    assert!(matches!(effects[0], Effect::ExpireToast { .. }));
}

#[test]
fn copy_clicked_while_busy_is_ignored() {
    init_logging();
    let (state, _) = update(
        AppState::new(),
        Msg::InputChanged("instagram.com/p/1".to_string()),
    );
    let (mut state, _) = update(state, Msg::CleanClicked);
    state.consume_dirty();

    let (mut state, effects) = update(state, Msg::CopyClicked);

    assert!(effects.is_empty());
    assert!(state.view().toast.is_none());
    assert!(!state.consume_dirty());
}

#[test]
fn copy_with_a_result_requests_clipboard_write() {
    init_logging();
    let (_state, effects) = update(state_with_cleaned_url(), Msg::CopyClicked);
    assert_eq!(
        effects,
        vec![Effect::CopyToClipboard {
            text: "https://instagram.com/p/1".to_string(),
        }]
    );
}

#[test]
fn matching_expiry_clears_the_toast() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::ClipboardDone { ok: true });
    let seq = toast_seq(&effects);

    let (state, _) = update(state, Msg::ToastExpired { seq });
    assert!(state.view().toast.is_none());
}

#[test]
fn stale_expiry_leaves_a_newer_toast_in_place() {
    init_logging();
    let (state, first_effects) = update(AppState::new(), Msg::ClipboardDone { ok: true });
    let first_seq = toast_seq(&first_effects);

    // A second toast replaces the first before its timer fires.
    let (state, _) = update(state, Msg::CopyClicked);
    let (mut state, _) = update(state, Msg::ToastExpired { seq: first_seq });

    assert_eq!(
        state.view().toast.map(|t| t.kind),
        Some(ToastKind::NothingToCopy)
    );
    // The stale expiry must not even trigger a re-render.
    state.consume_dirty();
    let (mut state, _) = update(state, Msg::ToastExpired { seq: first_seq });
    assert!(!state.consume_dirty());
}

#[test]
fn theme_toggle_flips_and_persists() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::ThemeToggled);
    assert_eq!(state.view().theme, Theme::Dark);
    assert_eq!(
        effects,
        vec![Effect::PersistTheme { theme: Theme::Dark }]
    );

    let (state, effects) = update(state, Msg::ThemeToggled);
    assert_eq!(state.view().theme, Theme::Light);
    assert_eq!(
        effects,
        vec![Effect::PersistTheme { theme: Theme::Light }]
    );
}

#[test]
fn theme_restore_sets_without_persisting() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::ThemeRestored(Theme::Dark));
    assert_eq!(state.view().theme, Theme::Dark);
    assert!(effects.is_empty());
}
