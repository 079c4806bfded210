use std::time::Duration;

use crate::clipboard::{Clipboard, Delivery};
use crate::command::build_full_command;
use crate::config::Config;
use crate::event::{Cmd, Key, Msg};
use crate::navigation::{Choice, Commit, Navigation, PermissionGrid, Section};
use crate::permissions::{CommandMode, FlagOption, PathType, PermissionState};

pub const COPIED: &str = "copied!";
/// The terminal was asked to copy but never confirms it
pub const SENT_TO_TERMINAL: &str = "sent to terminal";
pub const COPY_FAILED: &str = "copy failed";

/// Transient text shown in place of the command until its reset fires
#[derive(Debug, Clone)]
struct Status {
    token: u64,
    text: &'static str,
}

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub working_directory_mode: &'a str,
    pub command_text: &'a str,
    pub focused: Section,
    pub options: &'a Choice<FlagOption>,
    pub mode: &'a Choice<CommandMode>,
    pub path: &'a Choice<PathType>,
    pub permissions: &'a PermissionGrid,
    pub show_help: bool,
}

pub struct App {
    state: PermissionState,
    nav: Navigation,
    command: String,
    status: Option<Status>,
    next_token: u64,
    working_directory_mode: String,
    show_help: bool,
    clipboard: Box<dyn Clipboard>,
    reset_delay: Duration,
}

impl App {
    pub fn new(config: &Config, clipboard: Box<dyn Clipboard>) -> Self {
        let mut app = Self {
            state: PermissionState::new(),
            nav: Navigation::new(),
            command: String::new(),
            status: None,
            next_token: 0,
            working_directory_mode: String::new(),
            show_help: false,
            clipboard,
            reset_delay: config.reset_delay,
        };
        app.rebuild();
        app
    }

    #[cfg(test)]
    pub fn state(&self) -> &PermissionState {
        &self.state
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    /// The command, or the status covering it
    pub fn command_text(&self) -> &str {
        match &self.status {
            Some(status) => status.text,
            None => &self.command,
        }
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            working_directory_mode: &self.working_directory_mode,
            command_text: self.command_text(),
            focused: self.nav.section(),
            options: &self.nav.options,
            mode: &self.nav.mode,
            path: &self.nav.path,
            permissions: &self.nav.permissions,
            show_help: self.show_help,
        }
    }

    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        match msg {
            Msg::Key(key) => self.handle_key(key),
            Msg::DirectoryMode(mode) => {
                log::debug!("Working directory mode {mode}");
                self.working_directory_mode = mode;
                None
            },
            Msg::UpdateCommand(toggle) => {
                if let Some(toggle) = toggle {
                    self.state.set_access(toggle.subject, toggle.access, toggle.active);
                }
                self.rebuild();
                None
            },
            Msg::CopyCommand => Some(self.copy()),
            Msg::ResetStatus(token) => {
                if self.status.as_ref().is_some_and(|s| s.token == token) {
                    self.status = None;
                }
                None
            },
        }
    }

    fn handle_key(&mut self, key: Key) -> Option<Cmd> {
        match key {
            Key::Quit => return Some(Cmd::Quit),
            Key::Help => {
                self.show_help = !self.show_help;
                return None;
            },
            Key::Copy => {
                return (!self.command.is_empty()).then_some(Cmd::Send(Msg::CopyCommand));
            },
            _ => {},
        }

        let toggle = match self.nav.handle(key)? {
            Commit::Option(option) => {
                self.state.option = option;
                None
            },
            Commit::Mode(mode) => {
                self.state.mode = mode;
                None
            },
            Commit::Path(path) => {
                self.state.path = path;
                None
            },
            Commit::Toggle(toggle) => Some(toggle),
        };
        Some(Cmd::Send(Msg::UpdateCommand(toggle)))
    }

    fn rebuild(&mut self) {
        match build_full_command(&self.state) {
            Ok(command) => {
                log::debug!("Command rebuilt: {command}");
                self.command = command;
            },
            Err(err) => log::error!("Keeping previous command: {err:#}"),
        }
    }

    fn copy(&mut self) -> Cmd {
        let text = match self.clipboard.write(&self.command) {
            Ok(Delivery::Confirmed) => {
                log::info!("Copied {:?}", self.command);
                COPIED
            },
            Ok(Delivery::Unconfirmed) => {
                log::info!("Sent {:?} to the terminal clipboard", self.command);
                SENT_TO_TERMINAL
            },
            Err(err) => {
                log::warn!("Copy failed: {err:#}");
                COPY_FAILED
            },
        };

        self.next_token += 1;
        let token = self.next_token;
        self.status = Some(Status { token, text });
        Cmd::After(self.reset_delay, Msg::ResetStatus(token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::{Disabled, Osc52};
    use crate::permissions::{Access, Subject};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct Recorder(Rc<RefCell<Vec<String>>>);

    impl Clipboard for Recorder {
        fn write(&mut self, text: &str) -> anyhow::Result<Delivery> {
            self.0.borrow_mut().push(text.to_owned());
            Ok(Delivery::Confirmed)
        }
    }

    fn app() -> (App, Recorder) {
        let recorder = Recorder::default();
        (App::new(&Config::default(), Box::new(recorder.clone())), recorder)
    }

    /// Feeds messages through the app the way the event loop does, returning deferred ones
    fn run(app: &mut App, msgs: impl IntoIterator<Item = Msg>) -> Vec<(Duration, Msg)> {
        let mut queue: Vec<Msg> = msgs.into_iter().collect();
        queue.reverse();
        let mut deferred = Vec::new();
        while let Some(msg) = queue.pop() {
            match app.update(msg) {
                Some(Cmd::Send(next)) => queue.push(next),
                Some(Cmd::After(delay, next)) => deferred.push((delay, next)),
                Some(Cmd::Quit) | None => {},
            }
        }
        deferred
    }

    fn keys(keys: &[Key]) -> Vec<Msg> {
        keys.iter().copied().map(Msg::Key).collect()
    }

    /// Owner rw-, Group rwx, Other r-x, starting from the options section
    fn scenario_keys() -> Vec<Key> {
        use Key::*;
        vec![
            Tab, Tab, Tab, // permissions
            Enter, Down, Enter, // owner rw
            Right, Enter, Down, Enter, Down, Enter, // group rwx
            Right, Enter, Down, Down, Enter, // other r-x
        ]
    }

    #[test]
    fn initial_command_is_empty_file() {
        let (app, _) = app();
        assert_eq!(app.command(), "chmod ----------");
        assert_eq!(app.snapshot().focused, Section::Options);
    }

    #[test]
    fn symbolic_file_scenario() {
        let (mut app, _) = app();
        run(&mut app, keys(&scenario_keys()));
        assert_eq!(app.command(), "chmod -rw-rwxr-x");
        assert!(app.state().access(Subject::Group, Access::Execute));
        assert!(!app.state().access(Subject::Other, Access::Write));
    }

    #[test]
    fn octal_scenario() {
        let (mut app, _) = app();
        run(&mut app, keys(&scenario_keys()));
        // back to command mode, pick Octal
        run(&mut app, keys(&[Key::Tab, Key::Tab, Key::Enter]));
        assert_eq!(app.command(), "chmod 675");
    }

    #[test]
    fn directory_scenario() {
        let (mut app, _) = app();
        run(&mut app, keys(&[Key::Tab, Key::Tab, Key::Right, Key::Enter]));
        assert_eq!(app.command(), "chmod d---------");
    }

    #[test]
    fn option_flag_scenario() {
        let (mut app, _) = app();
        run(&mut app, keys(&[Key::Enter]));
        assert_eq!(app.command(), "chmod --verbose ----------");
        run(&mut app, keys(&[Key::Down, Key::Down, Key::Down, Key::Enter]));
        assert_eq!(app.command(), "chmod ----------");
    }

    #[test]
    fn toggle_twice_restores_command() {
        let (mut app, _) = app();
        run(&mut app, keys(&[Key::Tab, Key::Tab, Key::Tab, Key::Enter]));
        assert_eq!(app.command(), "chmod -r--------");
        run(&mut app, keys(&[Key::Enter]));
        assert_eq!(app.command(), "chmod ----------");
    }

    #[test]
    fn copy_shows_status_until_reset() {
        let (mut app, recorder) = app();
        let deferred = run(&mut app, keys(&[Key::Copy]));
        assert_eq!(*recorder.0.borrow(), vec!["chmod ----------".to_owned()]);
        assert_eq!(app.command_text(), COPIED);
        assert_eq!(deferred.len(), 1);
        assert_eq!(deferred[0].0, Config::default().reset_delay);

        run(&mut app, deferred.into_iter().map(|(_, msg)| msg));
        assert_eq!(app.command_text(), "chmod ----------");
    }

    #[test]
    fn latest_copy_owns_the_status() {
        let (mut app, recorder) = app();
        let first = run(&mut app, keys(&[Key::Copy]));
        let second = run(&mut app, keys(&[Key::Copy]));
        assert_eq!(recorder.0.borrow().len(), 2);
        assert_eq!(recorder.0.borrow()[1], "chmod ----------");

        run(&mut app, first.into_iter().map(|(_, msg)| msg));
        assert_eq!(app.command_text(), COPIED);
        run(&mut app, second.into_iter().map(|(_, msg)| msg));
        assert_eq!(app.command_text(), "chmod ----------");
    }

    #[test]
    fn reset_shows_command_built_meanwhile() {
        let (mut app, _) = app();
        let deferred = run(&mut app, keys(&[Key::Copy]));
        run(&mut app, keys(&[Key::Tab, Key::Tab, Key::Right, Key::Enter]));
        assert_eq!(app.command_text(), COPIED);
        run(&mut app, deferred.into_iter().map(|(_, msg)| msg));
        assert_eq!(app.command_text(), "chmod d---------");
    }

    #[test]
    fn failed_copy_is_reported_and_reset() {
        let mut app = App::new(&Config::default(), Box::new(Disabled));
        let deferred = run(&mut app, keys(&[Key::Copy]));
        assert_eq!(app.command_text(), COPY_FAILED);
        run(&mut app, deferred.into_iter().map(|(_, msg)| msg));
        assert_eq!(app.command_text(), "chmod ----------");
    }

    #[test]
    fn terminal_copy_is_not_reported_as_copied() {
        let mut app = App::new(&Config::default(), Box::new(Osc52::new(std::io::sink())));
        let deferred = run(&mut app, keys(&[Key::Copy]));
        assert_eq!(app.command_text(), SENT_TO_TERMINAL);
        assert_ne!(app.command_text(), COPIED);
        run(&mut app, deferred.into_iter().map(|(_, msg)| msg));
        assert_eq!(app.command_text(), "chmod ----------");
    }

    #[test]
    fn quit_help_and_directory_mode() {
        let (mut app, _) = app();
        assert_eq!(app.update(Msg::Key(Key::Quit)), Some(Cmd::Quit));
        assert!(!app.snapshot().show_help);
        assert_eq!(app.update(Msg::Key(Key::Help)), None);
        assert!(app.snapshot().show_help);

        app.update(Msg::DirectoryMode("drwxrwxr-x".into()));
        assert_eq!(app.snapshot().working_directory_mode, "drwxrwxr-x");
        assert_eq!(app.command(), "chmod ----------");
    }

    #[test]
    fn cursor_moves_do_not_rebuild() {
        let (mut app, _) = app();
        assert_eq!(app.update(Msg::Key(Key::Down)), None);
        assert_eq!(app.update(Msg::Key(Key::Tab)), None);
        assert_eq!(
            app.update(Msg::Key(Key::Enter)),
            Some(Cmd::Send(Msg::UpdateCommand(None)))
        );
    }
}
