use std::path::PathBuf;

pub const USAGE: &str = "\
chmod-cli - generate file permissions with the bat of an eye

Usage: chmod-cli [OPTIONS]

Options:
      --log <PATH>     Write logs to PATH (also CHMOD_CLI_LOG)
      --no-clipboard   Never touch the clipboard
  -h, --help           Print help
  -V, --version        Print version";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Args {
    pub log_path: Option<PathBuf>,
    pub no_clipboard: bool,
    pub help: bool,
    pub version: bool,
}

pub fn read() -> anyhow::Result<Args> {
    let mut args = parse(std::env::args().skip(1))?;
    if args.log_path.is_none() {
        args.log_path = std::env::var_os("CHMOD_CLI_LOG").map(PathBuf::from);
    }
    Ok(args)
}

pub fn parse(args: impl IntoIterator<Item = String>) -> anyhow::Result<Args> {
    let mut args = args.into_iter();
    let mut result = Args::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--log" => {
                let Some(path) = args.next() else {
                    anyhow::bail!("--log value missing");
                };
                result.log_path = Some(PathBuf::from(path));
            },
            _ if arg.starts_with("--log=") => {
                result.log_path = Some(PathBuf::from(&arg["--log=".len()..]));
            },
            "--no-clipboard" => result.no_clipboard = true,
            "-h" | "--help" => result.help = true,
            "-V" | "--version" => result.version = true,
            other => anyhow::bail!("Unknown argument {other:?}\n\n{USAGE}"),
        }
    }

    Ok(result)
}
