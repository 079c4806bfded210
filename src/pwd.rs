use std::fs;
use std::path::Path;
use std::sync::mpsc::Sender;
use std::thread;

use anyhow::Context;

use crate::event::Msg;
use crate::permissions::Access;

/// Shown when the working directory cannot be inspected
pub const UNKNOWN_MODE: &str = "unknown";

/// `ls`-style mode string, e.g. `drwxrwxr-x`
pub fn format_mode(kind: char, bits: u32) -> String {
    let mut out = String::with_capacity(10);
    out.push(kind);
    // owner, group, other
    for shift in [6, 3, 0] {
        for (j, access) in Access::ALL.iter().enumerate() {
            let set = (bits >> shift) & (0b100 >> j) != 0;
            out.push(if set { access.symbol() } else { '-' });
        }
    }
    out
}

#[cfg(unix)]
pub fn mode_string(path: &Path) -> anyhow::Result<String> {
    use std::os::unix::fs::PermissionsExt;

    let meta = fs::metadata(path).with_context(|| format!("Stat {path:?}"))?;
    let kind = if meta.is_dir() { 'd' } else { '-' };
    Ok(format_mode(kind, meta.permissions().mode()))
}

#[cfg(not(unix))]
pub fn mode_string(path: &Path) -> anyhow::Result<String> {
    let meta = fs::metadata(path).with_context(|| format!("Stat {path:?}"))?;
    let kind = if meta.is_dir() { 'd' } else { '-' };
    let bits = if meta.permissions().readonly() { 0o444 } else { 0o666 };
    Ok(format_mode(kind, bits))
}

pub fn working_directory_mode() -> anyhow::Result<String> {
    let pwd = std::env::current_dir().context("Reading working directory")?;
    mode_string(&pwd)
}

/// Reads the working directory mode off the event loop and reports back through `tx`
pub fn spawn(tx: Sender<Msg>) {
    spawn_with(tx, working_directory_mode);
}

/// Runs `query` on a helper thread; any failure is reported as [`UNKNOWN_MODE`]
pub fn spawn_with<F>(tx: Sender<Msg>, query: F)
where
    F: FnOnce() -> anyhow::Result<String> + Send + 'static,
{
    thread::spawn(move || {
        let mode = query().unwrap_or_else(|err| {
            log::warn!("Reading directory mode failed: {err:#}");
            UNKNOWN_MODE.to_owned()
        });
        if tx.send(Msg::DirectoryMode(mode)).is_err() {
            log::debug!("Event loop gone before directory mode arrived");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;
    use std::time::Duration;

    #[test]
    fn formats_mode_bits() {
        assert_eq!(format_mode('d', 0o775), "drwxrwxr-x");
        assert_eq!(format_mode('-', 0o640), "-rw-r-----");
        assert_eq!(format_mode('-', 0o100755), "-rwxr-xr-x");
        assert_eq!(format_mode('d', 0), "d---------");
    }

    #[cfg(unix)]
    #[test]
    fn reads_directory_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        fs::set_permissions(dir.path(), fs::Permissions::from_mode(0o750)).unwrap();
        assert_eq!(mode_string(dir.path()).unwrap(), "drwxr-x---");

        let file = dir.path().join("script.sh");
        fs::write(&file, "#!/bin/sh\n").unwrap();
        fs::set_permissions(&file, fs::Permissions::from_mode(0o644)).unwrap();
        assert_eq!(mode_string(&file).unwrap(), "-rw-r--r--");
    }

    #[cfg(unix)]
    #[test]
    fn follows_symlinked_directory() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("target");
        fs::create_dir(&target).unwrap();
        fs::set_permissions(&target, fs::Permissions::from_mode(0o755)).unwrap();
        let link = dir.path().join("link");
        std::os::unix::fs::symlink(&target, &link).unwrap();
        assert_eq!(mode_string(&link).unwrap(), "drwxr-xr-x");
    }

    #[test]
    fn missing_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(mode_string(&dir.path().join("nope")).is_err());
    }

    #[test]
    fn spawn_reports_a_mode() {
        let (tx, rx) = mpsc::channel();
        spawn(tx);
        match rx.recv_timeout(Duration::from_secs(5)).unwrap() {
            Msg::DirectoryMode(mode) => assert!(mode.len() == 10 || mode == UNKNOWN_MODE),
            other => panic!("unexpected message {other:?}"),
        }
    }

    #[test]
    fn failed_query_reports_unknown() {
        let (tx, rx) = mpsc::channel();
        spawn_with(tx, || anyhow::bail!("Stat \"/gone\": No such file or directory"));
        assert_eq!(
            rx.recv_timeout(Duration::from_secs(5)).unwrap(),
            Msg::DirectoryMode(UNKNOWN_MODE.to_owned())
        );
    }

    #[test]
    fn successful_query_is_forwarded() {
        let (tx, rx) = mpsc::channel();
        spawn_with(tx, || Ok("drwx------".to_owned()));
        assert_eq!(
            rx.recv_timeout(Duration::from_secs(5)).unwrap(),
            Msg::DirectoryMode("drwx------".to_owned())
        );
    }
}
