mod platform;

use std::time::Duration;

use anyhow::bail;
use clap::Parser;

use platform::app::{run_app, ShellOptions};
use platform::logging::{self, LogDestination};
use platform::ui;

/// Strip tracking and profile identifiers from Instagram links.
#[derive(Debug, Parser)]
#[command(name = "hyu", version)]
struct Args {
    /// Clean a single link and exit instead of starting the interactive
    /// shell. The cleaned link is printed and copied to the clipboard.
    url: Option<String>,

    /// Pacing delay before a result is shown, in milliseconds.
    #[arg(long, default_value_t = 500)]
    delay_ms: u64,

    /// Where log output goes.
    #[arg(long, value_enum, default_value = "file")]
    log: LogArg,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum LogArg {
    File,
    Terminal,
    Both,
}

impl From<LogArg> for LogDestination {
    fn from(value: LogArg) -> Self {
        match value {
            LogArg::File => LogDestination::File,
            LogArg::Terminal => LogDestination::Terminal,
            LogArg::Both => LogDestination::Both,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::initialize(args.log.into());

    match args.url {
        Some(raw) => clean_once(&raw),
        None => run_app(ShellOptions {
            clean_delay: Duration::from_millis(args.delay_ms),
        }),
    }
}

/// One-shot mode: no shell, no pacing delay.
fn clean_once(raw: &str) -> anyhow::Result<()> {
    match hyu_core::sanitize(raw) {
        Ok(cleaned) => {
            if let Err(err) = platform::effects::copy_to_clipboard(&cleaned) {
                hyu_logging::hyu_warn!("clipboard write failed: {err}");
                eprintln!("warning: could not copy to clipboard");
            }
            println!("{cleaned}");
            Ok(())
        }
        Err(reason) => bail!("{}", ui::constants::reject_message(reason)),
    }
}
