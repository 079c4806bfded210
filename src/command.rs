use itertools::Itertools;

use crate::permissions::{Access, CommandMode, PathType, PermissionState, Subject};

const COMMAND: &str = "chmod";

/// Length of a symbolic body without its type prefix
pub const SYMBOLIC_LEN: usize = 9;

fn octal_digit(triplet: &str) -> Option<&'static str> {
    let digit = match triplet {
        "000" => "0",
        "001" => "1",
        "010" => "2",
        "011" => "3",
        "100" => "4",
        "101" => "5",
        "110" => "6",
        "111" => "7",
        _ => return None,
    };
    Some(digit)
}

/// `rwx`/`-` string over all subjects, always in subject then access order
pub fn build_symbolic(state: &PermissionState) -> String {
    Subject::ALL
        .iter()
        .cartesian_product(Access::ALL.iter())
        .map(|(&subject, &access)| {
            if state.access(subject, access) {
                access.symbol()
            } else {
                '-'
            }
        })
        .collect()
}

pub fn build_octal(symbolic: &str) -> anyhow::Result<String> {
    let chars: Vec<char> = symbolic.chars().collect();
    anyhow::ensure!(
        chars.len() == SYMBOLIC_LEN,
        "Invalid chmod string {symbolic:?}: expected {SYMBOLIC_LEN} characters"
    );

    let binary: String = chars.iter().map(|&c| if c == '-' { '0' } else { '1' }).collect();

    let mut octal = String::with_capacity(3);
    for chunk in &binary.chars().chunks(3) {
        let triplet: String = chunk.collect();
        let Some(digit) = octal_digit(&triplet) else {
            anyhow::bail!("No octal digit for {triplet:?}");
        };
        octal.push_str(digit);
    }
    Ok(octal)
}

pub fn build_full_command(state: &PermissionState) -> anyhow::Result<String> {
    let symbolic = build_symbolic(state);
    let body = match (state.mode, state.path) {
        (CommandMode::Octal, _) => build_octal(&symbolic)?,
        (CommandMode::Symbolic, PathType::Directory) => format!("d{symbolic}"),
        (CommandMode::Symbolic, PathType::File) => format!("-{symbolic}"),
    };

    let flag = state.option.flag();
    Ok([COMMAND, flag, body.as_str()].iter().filter(|part| !part.is_empty()).join(" "))
}
