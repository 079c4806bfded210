use std::io::{self, Stdout};
use std::sync::mpsc::{self, Receiver};
use std::time::Instant;

use anyhow::Context;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::app::App;
use crate::config::Config;
use crate::event::{Cmd, Key, Msg, Timers};
use crate::{pwd, ui};

/// Raw mode and the alternate screen, restored on drop
struct Session {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl Session {
    fn new() -> anyhow::Result<Self> {
        enable_raw_mode().context("Enabling raw mode")?;
        let mut stdout = io::stdout();
        if let Err(err) = execute!(stdout, EnterAlternateScreen) {
            teardown();
            return Err(err).context("Entering alternate screen");
        }
        let terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => terminal,
            Err(err) => {
                teardown();
                return Err(err).context("Creating terminal");
            },
        };
        Ok(Self { terminal })
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown();
    }
}

fn teardown() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, LeaveAlternateScreen);
}

pub fn run(config: &Config, app: &mut App) -> anyhow::Result<()> {
    let (tx, rx) = mpsc::channel();
    pwd::spawn(tx);

    let mut session = Session::new()?;
    session.terminal.clear().context("Clearing terminal")?;
    event_loop(&mut session.terminal, config, app, &rx)
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>, config: &Config, app: &mut App,
    pwd_rx: &Receiver<Msg>,
) -> anyhow::Result<()> {
    let mut timers = Timers::default();

    loop {
        let mut queue: Vec<Msg> = pwd_rx.try_iter().collect();
        queue.extend(timers.due(Instant::now()));

        if event::poll(config.poll_interval).context("Polling terminal")? {
            if let Event::Key(key) = event::read().context("Reading terminal event")? {
                queue.extend(Key::from_event(key).map(Msg::Key));
            }
        }

        // follow-up messages run before anything queued after their source
        queue.reverse();
        while let Some(msg) = queue.pop() {
            match app.update(msg) {
                Some(Cmd::Send(next)) => queue.push(next),
                Some(Cmd::After(delay, next)) => timers.schedule(Instant::now() + delay, next),
                Some(Cmd::Quit) => {
                    log::debug!("Quit requested");
                    return Ok(());
                },
                None => {},
            }
        }

        terminal.draw(|frame| ui::render(frame, &app.snapshot())).context("Drawing")?;
    }
}
