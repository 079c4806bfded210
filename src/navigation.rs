use crate::event::{Key, Toggle};
use crate::math::{step_back, step_forward, wrap_forward};
use crate::permissions::{Access, CommandMode, FlagOption, Labeled, PathType, Subject};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Section {
    Options,
    CommandMode,
    PathType,
    Permissions,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Options,
        Section::CommandMode,
        Section::PathType,
        Section::Permissions,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Section::Options => "Options",
            Section::CommandMode => "Command Mode",
            Section::PathType => "Path Type",
            Section::Permissions => "Permissions",
        }
    }
}

/// A single-choice list. `cursor` is `None` while the section is not focused.
#[derive(Debug, Clone)]
pub struct Choice<T: 'static> {
    pub values: &'static [T],
    pub selected: T,
    pub cursor: Option<usize>,
}

impl<T: Labeled> Choice<T> {
    pub fn new(values: &'static [T], selected: T) -> Self {
        Self {
            values,
            selected,
            cursor: None,
        }
    }

    pub fn is_focused(&self, value: T) -> bool {
        self.cursor.map(|c| self.values[c]) == Some(value)
    }

    fn handle(&mut self, key: Key) -> Option<T> {
        let cursor = self.cursor?;
        match key {
            Key::Left | Key::Up => self.cursor = Some(step_back(cursor)),
            Key::Right | Key::Down => self.cursor = Some(step_forward(cursor, self.values.len())),
            Key::Enter => {
                self.selected = self.values[cursor];
                return Some(self.selected);
            },
            _ => {},
        }
        None
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermissionBlock {
    pub cursor: Option<usize>,
    /// Access turned on for this subject, in the order it was turned on
    pub selected: Vec<Access>,
}

impl PermissionBlock {
    pub fn contains(&self, access: Access) -> bool {
        self.selected.contains(&access)
    }

    /// Flips `access` and returns whether it is now on
    pub fn toggle(&mut self, access: Access) -> bool {
        match self.selected.iter().position(|&a| a == access) {
            Some(index) => {
                self.selected.remove(index);
                false
            },
            None => {
                self.selected.push(access);
                true
            },
        }
    }
}

/// Three blocks side by side, one per subject
#[derive(Debug, Clone, Default)]
pub struct PermissionGrid {
    pub cursor: Option<usize>,
    pub blocks: [PermissionBlock; 3],
}

impl PermissionGrid {
    pub fn block(&self, subject: Subject) -> &PermissionBlock {
        &self.blocks[subject as usize]
    }

    fn focus(&mut self) {
        self.cursor = Some(0);
        self.blocks[0].cursor = Some(0);
    }

    fn blur(&mut self) {
        self.cursor = None;
        for block in &mut self.blocks {
            block.cursor = None;
        }
    }

    fn handle(&mut self, key: Key) -> Option<Toggle> {
        let column = self.cursor?;
        let rows = Access::ALL.len();
        let block = &mut self.blocks[column];
        let row = *block.cursor.get_or_insert(0);

        match key {
            Key::Up => block.cursor = Some(step_back(row)),
            Key::Down => block.cursor = Some(step_forward(row, rows)),
            Key::Left | Key::Right => {
                let next = if key == Key::Left {
                    step_back(column)
                } else {
                    step_forward(column, self.blocks.len())
                };
                self.cursor = Some(next);
                self.blocks[next].cursor.get_or_insert(0);
            },
            Key::Enter => {
                let access = Access::ALL[row];
                let active = block.toggle(access);
                return Some(Toggle {
                    subject: Subject::ALL[column],
                    access,
                    active,
                });
            },
            _ => {},
        }
        None
    }
}

/// What a key press committed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commit {
    Option(FlagOption),
    Mode(CommandMode),
    Path(PathType),
    Toggle(Toggle),
}

/// Focus state machine over [`Section::ALL`]
#[derive(Debug, Clone)]
pub struct Navigation {
    index: usize,
    pub options: Choice<FlagOption>,
    pub mode: Choice<CommandMode>,
    pub path: Choice<PathType>,
    pub permissions: PermissionGrid,
}

impl Default for Navigation {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigation {
    pub fn new() -> Self {
        let mut nav = Self {
            index: 0,
            options: Choice::new(&FlagOption::ALL, FlagOption::default()),
            mode: Choice::new(&CommandMode::ALL, CommandMode::default()),
            path: Choice::new(&PathType::ALL, PathType::default()),
            permissions: PermissionGrid::default(),
        };
        nav.set_focus(true);
        nav
    }

    pub fn section(&self) -> Section {
        Section::ALL[self.index]
    }

    pub fn handle(&mut self, key: Key) -> Option<Commit> {
        match key {
            Key::Tab | Key::Space => self.advance(),
            Key::BackTab => self.retreat(),
            Key::Up | Key::Down | Key::Left | Key::Right | Key::Enter => {
                return match self.section() {
                    Section::Options => self.options.handle(key).map(Commit::Option),
                    Section::CommandMode => self.mode.handle(key).map(Commit::Mode),
                    Section::PathType => self.path.handle(key).map(Commit::Path),
                    Section::Permissions => self.permissions.handle(key).map(Commit::Toggle),
                };
            },
            _ => {},
        }
        None
    }

    pub fn advance(&mut self) {
        self.set_focus(false);
        self.index = wrap_forward(self.index, Section::ALL.len());
        self.set_focus(true);
    }

    pub fn retreat(&mut self) {
        if self.index == 0 {
            return;
        }
        self.set_focus(false);
        self.index -= 1;
        self.set_focus(true);
    }

    fn set_focus(&mut self, active: bool) {
        let cursor = active.then_some(0);
        match self.section() {
            Section::Options => self.options.cursor = cursor,
            Section::CommandMode => self.mode.cursor = cursor,
            Section::PathType => self.path.cursor = cursor,
            Section::Permissions if active => self.permissions.focus(),
            Section::Permissions => self.permissions.blur(),
        }
    }
}
