#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Subject {
    Owner,
    Group,
    Other,
}

impl Subject {
    pub const ALL: [Subject; 3] = [Subject::Owner, Subject::Group, Subject::Other];

    pub fn label(self) -> &'static str {
        match self {
            Subject::Owner => "Owner",
            Subject::Group => "Group",
            Subject::Other => "Other",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Access {
    Read,
    Write,
    Execute,
}

impl Access {
    pub const ALL: [Access; 3] = [Access::Read, Access::Write, Access::Execute];

    pub fn symbol(self) -> char {
        match self {
            Access::Read => 'r',
            Access::Write => 'w',
            Access::Execute => 'x',
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Access::Read => "Read",
            Access::Write => "Write",
            Access::Execute => "Execute",
        }
    }
}

/// One subject's row of the permission matrix
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Permissions {
    pub read: bool,
    pub write: bool,
    pub execute: bool,
}

impl Permissions {
    pub fn get(&self, access: Access) -> bool {
        match access {
            Access::Read => self.read,
            Access::Write => self.write,
            Access::Execute => self.execute,
        }
    }

    pub fn set(&mut self, access: Access, active: bool) {
        match access {
            Access::Read => self.read = active,
            Access::Write => self.write = active,
            Access::Execute => self.execute = active,
        }
    }
}

/// Flag passed to chmod
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FlagOption {
    Verbose,
    Changes,
    Silent,
    #[default]
    Default,
}

impl FlagOption {
    pub const ALL: [FlagOption; 4] = [
        FlagOption::Verbose,
        FlagOption::Changes,
        FlagOption::Silent,
        FlagOption::Default,
    ];

    pub fn flag(self) -> &'static str {
        match self {
            FlagOption::Verbose => "--verbose",
            FlagOption::Changes => "--changes",
            FlagOption::Silent => "--silent",
            FlagOption::Default => "",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CommandMode {
    Octal,
    #[default]
    Symbolic,
}

impl CommandMode {
    pub const ALL: [CommandMode; 2] = [CommandMode::Octal, CommandMode::Symbolic];
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PathType {
    #[default]
    File,
    Directory,
}

impl PathType {
    pub const ALL: [PathType; 2] = [PathType::File, PathType::Directory];
}

/// Display name of a single-choice value
pub trait Labeled: Copy + PartialEq + 'static {
    fn label(self) -> &'static str;
}

impl Labeled for FlagOption {
    fn label(self) -> &'static str {
        match self {
            FlagOption::Verbose => "Verbose",
            FlagOption::Changes => "Changes",
            FlagOption::Silent => "Silent",
            FlagOption::Default => "Default",
        }
    }
}

impl Labeled for CommandMode {
    fn label(self) -> &'static str {
        match self {
            CommandMode::Octal => "Octal",
            CommandMode::Symbolic => "Symbolic",
        }
    }
}

impl Labeled for PathType {
    fn label(self) -> &'static str {
        match self {
            PathType::File => "File",
            PathType::Directory => "Directory",
        }
    }
}

/// Everything the command is built from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermissionState {
    subjects: [Permissions; 3],
    pub option: FlagOption,
    pub mode: CommandMode,
    pub path: PathType,
}

impl PermissionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_access(&mut self, subject: Subject, access: Access, active: bool) {
        self.subjects[subject.index()].set(access, active);
    }

    pub fn access(&self, subject: Subject, access: Access) -> bool {
        self.subjects[subject.index()].get(access)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty_with_defaults() {
        let state = PermissionState::new();
        for subject in Subject::ALL {
            for access in Access::ALL {
                assert!(!state.access(subject, access));
            }
        }
        assert_eq!(state.option, FlagOption::Default);
        assert_eq!(state.mode, CommandMode::Symbolic);
        assert_eq!(state.path, PathType::File);
    }

    #[test]
    fn set_access_overwrites_one_bit() {
        let mut state = PermissionState::new();
        state.set_access(Subject::Group, Access::Write, true);
        state.set_access(Subject::Group, Access::Write, true);
        assert!(state.access(Subject::Group, Access::Write));
        assert!(!state.access(Subject::Owner, Access::Write));
        assert!(!state.access(Subject::Group, Access::Read));

        state.set_access(Subject::Group, Access::Write, false);
        assert_eq!(state, PermissionState::new());
    }

    #[test]
    fn row_compares_by_bits() {
        let mut row = Permissions::default();
        row.set(Access::Execute, true);
        assert_eq!(row, Permissions { read: false, write: false, execute: true });
        assert!(row.get(Access::Execute) && !row.get(Access::Read));
        row.set(Access::Execute, false);
        assert_eq!(row, Permissions::default());
    }

    #[test]
    fn enum_orders_follow_symbols() {
        assert!(Subject::Owner < Subject::Group && Subject::Group < Subject::Other);
        assert!(Access::Read < Access::Write && Access::Write < Access::Execute);
        let symbols: String = Access::ALL.iter().map(|a| a.symbol()).collect();
        assert_eq!(symbols, "rwx");
    }
}
