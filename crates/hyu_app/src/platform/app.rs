use std::io::{self, BufRead};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use hyu_core::{update, AppState, Msg};
use hyu_logging::hyu_info;

use super::effects::EffectRunner;
use super::persistence;
use super::ui;

pub struct ShellOptions {
    /// Presentation pacing before a clean result is shown.
    pub clean_delay: Duration,
}

/// Events feeding the main loop: core messages plus shell-only controls.
#[derive(Debug, PartialEq, Eq)]
pub enum ShellEvent {
    Core(Msg),
    Quit,
}

/// Interactive shell: a reader thread turns stdin lines into events, the
/// main loop dispatches messages through the pure update function and hands
/// resulting effects to the runner.
pub fn run_app(options: ShellOptions) -> anyhow::Result<()> {
    let (event_tx, event_rx) = mpsc::channel::<ShellEvent>();
    let runner = EffectRunner::new(event_tx.clone(), options.clean_delay);

    let theme = persistence::load_theme()
        .or_else(persistence::ambient_theme)
        .unwrap_or_default();
    hyu_info!("Starting shell with theme {:?}", theme);

    spawn_input_reader(event_tx);

    // Theme restore happens before the first paint, so the resulting dirty
    // flag is swallowed rather than rendered.
    let (mut state, _) = update(AppState::new(), Msg::ThemeRestored(theme));
    state.consume_dirty();
    ui::render::draw_banner();
    ui::render::draw_prompt();

    loop {
        match event_rx.recv() {
            Ok(ShellEvent::Core(msg)) => dispatch(&mut state, msg, &runner),
            Ok(ShellEvent::Quit) | Err(_) => break,
        }
    }
    Ok(())
}

fn dispatch(state: &mut AppState, msg: Msg, runner: &EffectRunner) {
    let current = std::mem::take(state);
    let (mut next, effects) = update(current, msg);
    runner.run(effects);
    if next.consume_dirty() {
        ui::render::draw(&next.view());
    }
    *state = next;
}

fn spawn_input_reader(event_tx: mpsc::Sender<ShellEvent>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            for event in events_for_line(&line) {
                if event_tx.send(event).is_err() {
                    return;
                }
            }
        }
        // EOF behaves like an explicit quit.
        let _ = event_tx.send(ShellEvent::Quit);
    });
}

/// A pasted line is submitted right away; colon-prefixed words are shell
/// commands.
fn events_for_line(line: &str) -> Vec<ShellEvent> {
    match line.trim() {
        ":quit" | ":q" => vec![ShellEvent::Quit],
        ":theme" => vec![ShellEvent::Core(Msg::ThemeToggled)],
        ":copy" => vec![ShellEvent::Core(Msg::CopyClicked)],
        other => vec![
            ShellEvent::Core(Msg::InputChanged(other.to_string())),
            ShellEvent::Core(Msg::CleanClicked),
        ],
    }
}
