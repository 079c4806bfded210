use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    /// How long a copy status covers the command
    pub reset_delay: Duration,
    /// Longest wait for terminal input before timers are checked again
    pub poll_interval: Duration,
    pub clipboard: bool,
    /// Log file; nothing is logged without one
    pub log_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reset_delay: Duration::from_secs(3),
            poll_interval: Duration::from_millis(50),
            clipboard: true,
            log_path: None,
        }
    }
}
