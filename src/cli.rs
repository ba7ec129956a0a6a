// src/cli.rs
use std::io::{self, Write};

use crate::{
    config::options::RunOptions,
    error::{Result, SpoilerError},
    file::read_text,
    index::DocumentIndex,
    progress::{Progress, StderrEcho},
    runner::{run_requests, RunSummary},
};

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    Convert(RunOptions),
}

/// Entry point for the binary: args from the environment, output to stdout.
/// Errors come back typed so the caller's report keeps their cause chain.
pub fn run() -> Result<()> {
    match parse_args(std::env::args().skip(1))? {
        Command::Help => {
            eprint!("{}", include_str!("cli_help.txt"));
            Ok(())
        }
        Command::Convert(opts) => {
            let stdout = io::stdout().lock();
            convert(&opts, stdout, &mut StderrEcho)?;
            Ok(())
        }
    }
}

/// Positional `[CARDS_XML [CARD_LIST]]`; missing ones keep their defaults.
pub fn parse_args<I>(args: I) -> Result<Command>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let mut opts = RunOptions::default();
    let mut positional = 0usize;

    for a in args {
        let a: String = a.into();
        if a == "-h" || a == "--help" {
            return Ok(Command::Help);
        }
        if a.starts_with('-') && a.len() > 1 {
            return Err(SpoilerError::Usage(format!("Unknown arg: {}", a)));
        }
        match positional {
            0 => opts.cards_path = a.into(),
            1 => opts.list_path = a.into(),
            _ => return Err(SpoilerError::Usage(format!("Unexpected extra argument: {}", a))),
        }
        positional += 1;
    }
    Ok(Command::Convert(opts))
}

/// Load the database, then run every request against it.
/// A bad database fails here, before any request is read or echoed.
pub fn convert<W: Write>(
    opts: &RunOptions,
    out: W,
    progress: &mut dyn Progress,
) -> Result<RunSummary> {
    logf!("Database {}, requests {}", opts.cards_path.display(), opts.list_path.display());
    let index = DocumentIndex::load(&read_text(&opts.cards_path)?)?;
    let requests = read_text(&opts.list_path)?;
    progress.begin(requests.lines().count());
    run_requests(&index, requests.as_bytes(), out, progress)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn no_args_uses_defaults() {
        let cmd = parse_args(Vec::<String>::new()).unwrap();
        assert_eq!(cmd, Command::Convert(RunOptions::new("cards.xml", "cardlist.txt")));
    }

    #[test]
    fn positional_paths_override_in_order() {
        match parse_args(["oracle.xml"]).unwrap() {
            Command::Convert(o) => {
                assert_eq!(o.cards_path, PathBuf::from("oracle.xml"));
                assert_eq!(o.list_path, PathBuf::from("cardlist.txt"));
            }
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(
            parse_args(["a.xml", "b.txt"]).unwrap(),
            Command::Convert(RunOptions::new("a.xml", "b.txt"))
        );
    }

    #[test]
    fn help_and_errors() {
        assert_eq!(parse_args(["x.xml", "--help"]).unwrap(), Command::Help);
        assert_eq!(parse_args(["-h"]).unwrap(), Command::Help);
        match parse_args(["--verbose"]) {
            Err(SpoilerError::Usage(msg)) => assert_eq!(msg, "Unknown arg: --verbose"),
            other => panic!("unexpected {other:?}"),
        }
        match parse_args(["a", "b", "c"]) {
            Err(SpoilerError::Usage(msg)) => assert!(msg.ends_with(": c"), "{msg}"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn dash_alone_is_a_path() {
        assert_eq!(
            parse_args(["-", "list.txt"]).unwrap(),
            Command::Convert(RunOptions::new("-", "list.txt"))
        );
    }
}
