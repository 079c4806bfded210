#![deny(unused_must_use)]

mod app;
mod args;
mod clipboard;
mod command;
mod config;
mod event;
mod logging;
mod math;
mod navigation;
mod permissions;
mod pwd;
mod tui;
mod ui;

use std::io::{self, IsTerminal, Write};

use app::App;
use clipboard::Clipboard;
use config::Config;

/// Clipboard programs first, then an OSC 52 escape written to `terminal`
fn clipboard_for(
    config: &Config, programs: &'static [(&'static str, &'static [&'static str])],
    terminal: impl Write + 'static,
) -> Box<dyn Clipboard> {
    if config.clipboard {
        Box::new(clipboard::Fallback::new(
            clipboard::System::with_programs(programs),
            clipboard::Osc52::new(terminal),
        ))
    } else {
        log::info!("Clipboard disabled");
        Box::new(clipboard::Disabled)
    }
}

fn main() -> anyhow::Result<()> {
    let args = args::read()?;
    if args.help {
        println!("{}", args::USAGE);
        return Ok(());
    }
    if args.version {
        println!("chmod-cli {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let config = Config {
        clipboard: !args.no_clipboard,
        log_path: args.log_path,
        ..Config::default()
    };

    if let Some(path) = &config.log_path {
        logging::init(path)?;
    }

    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        anyhow::bail!("chmod-cli needs an interactive terminal");
    }

    let mut app = App::new(&config, clipboard_for(&config, clipboard::SYSTEM_PROGRAMS, io::stdout()));
    tui::run(&config, &mut app)?;

    if !app.command().is_empty() {
        log::info!("Last command: {}", app.command());
    }
    Ok(())
}
