use std::io::{self, Write};
use std::process::{Command, Stdio};

use anyhow::Context;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// How far a write is known to have gone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// A clipboard program accepted the text
    Confirmed,
    /// Handed to the terminal, which may or may not honour it
    Unconfirmed,
}

/// Somewhere to put the built command
pub trait Clipboard {
    fn write(&mut self, text: &str) -> anyhow::Result<Delivery>;
}

/// Programs that read the clipboard contents from stdin, tried in order
pub const SYSTEM_PROGRAMS: &[(&str, &[&str])] = &[
    ("pbcopy", &[]),
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];

/// The desktop clipboard, through the first program that accepts the text
pub struct System {
    programs: &'static [(&'static str, &'static [&'static str])],
}

impl System {
    pub fn with_programs(programs: &'static [(&'static str, &'static [&'static str])]) -> Self {
        Self { programs }
    }
}

fn pipe_into(program: &str, args: &[&str], text: &str) -> anyhow::Result<()> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .with_context(|| format!("Starting {program}"))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .with_context(|| format!("Writing to {program}"))?;
    }

    let status = child.wait().with_context(|| format!("Waiting for {program}"))?;
    anyhow::ensure!(status.success(), "{program} exited with {status}");
    Ok(())
}

impl Clipboard for System {
    fn write(&mut self, text: &str) -> anyhow::Result<Delivery> {
        let mut errors = Vec::new();
        for (program, args) in self.programs {
            match pipe_into(program, args, text) {
                Ok(()) => {
                    log::debug!("Clipboard set through {program}");
                    return Ok(Delivery::Confirmed);
                },
                Err(err) => errors.push(format!("{err:#}")),
            }
        }
        anyhow::bail!("No clipboard program worked: {}", errors.join("; "))
    }
}

/// Asks the terminal to set the system clipboard through an OSC 52 escape
pub struct Osc52<W: Write> {
    out: W,
}

impl<W: Write> Osc52<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

pub fn osc52_sequence(text: &str) -> String {
    let encoded = STANDARD.encode(text.as_bytes());
    format!("\x1b]52;c;{encoded}\x1b\\")
}

impl<W: Write> Clipboard for Osc52<W> {
    fn write(&mut self, text: &str) -> anyhow::Result<Delivery> {
        self.out
            .write_all(osc52_sequence(text).as_bytes())
            .and_then(|_| self.out.flush())
            .context("Writing OSC 52 sequence")?;
        // the terminal never acknowledges the escape
        Ok(Delivery::Unconfirmed)
    }
}

/// Tries `primary`, then `fallback` if it fails
pub struct Fallback<A, B> {
    primary: A,
    fallback: B,
}

impl<A: Clipboard, B: Clipboard> Fallback<A, B> {
    pub fn new(primary: A, fallback: B) -> Self {
        Self { primary, fallback }
    }
}

impl<A: Clipboard, B: Clipboard> Clipboard for Fallback<A, B> {
    fn write(&mut self, text: &str) -> anyhow::Result<Delivery> {
        match self.primary.write(text) {
            Ok(delivery) => Ok(delivery),
            Err(err) => {
                log::debug!("Falling back: {err:#}");
                self.fallback.write(text)
            },
        }
    }
}

/// Used where no clipboard is reachable; every write fails
pub struct Disabled;

impl Clipboard for Disabled {
    fn write(&mut self, _text: &str) -> anyhow::Result<Delivery> {
        anyhow::bail!("Clipboard is not available")
    }
}
