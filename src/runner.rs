// src/runner.rs
use std::io::{BufRead, Write};

use crate::{
    error::Result,
    index::DocumentIndex,
    normalize::{build_entry, resolve_rarity, Rarity},
    progress::Progress,
    spoiler::{write_entry, SpoilerEntry},
};

/// Summary of what was produced.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub entries_written: usize,
    pub blank_lines: usize,
}

/// One request line → one spoiler entry.
/// Trailing whitespace (line ending included) is dropped before the rarity
/// prefix is looked at.
pub fn spoiler_for_request(
    index: &DocumentIndex,
    line: &str,
    explicit: Option<Rarity>,
) -> Result<SpoilerEntry> {
    let (rarity, name) = resolve_rarity(explicit, line.trim_end());
    let card = index.find_by_name(name)?;
    logd!("{name:?} -> rarity {rarity}");
    build_entry(card, rarity)
}

/// Process every request in order, writing one entry per line to `out`.
/// The first failing line ends the run; entries before it stay written.
/// `progress.begin` is the caller's job: only it knows how much input there is.
pub fn run_requests<R: BufRead, W: Write>(
    index: &DocumentIndex,
    mut requests: R,
    mut out: W,
    progress: &mut dyn Progress,
) -> Result<RunSummary> {
    let mut summary = RunSummary::default();
    let mut raw = String::new();

    loop {
        raw.clear();
        if requests.read_line(&mut raw)? == 0 {
            break;
        }
        progress.echo(&raw);

        if raw.trim().is_empty() {
            logw!("Skipping blank request line");
            summary.blank_lines += 1;
            continue;
        }

        let entry = spoiler_for_request(index, &raw, None).inspect_err(|e| loge!("{}: {e}", raw.trim_end()))?;
        write_entry(&mut out, &entry)?;
        progress.item_done(&entry.name);
        summary.entries_written += 1;
    }

    out.flush()?;
    progress.finish();
    logf!("Wrote {} entries ({} blank lines skipped)", summary.entries_written, summary.blank_lines);
    Ok(summary)
}
