//! Single responsibility: a journal and its persistence.
//!
//! `Journal` only manages entries. Writing it to disk is `Persistence`'s
//! job, so a change to storage rules never touches the journal.

use crate::error::{PrincipleError, Result};
use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Numbered text entries.
///
/// Each entry is stored as `"{n}: {text}"` where `n` comes from a counter
/// that only ever increases, so numbers are never reused after a removal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Journal {
    entries: Vec<String>,
    count: usize,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry and return its index in `entries()`
    pub fn add_entry(&mut self, text: &str) -> usize {
        self.count += 1;
        self.entries.push(format!("{}: {}", self.count, text));
        self.entries.len() - 1
    }

    /// Remove the entry at `index`, returning it
    pub fn remove_entry(&mut self, index: usize) -> Result<String> {
        if index >= self.entries.len() {
            return Err(PrincipleError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        Ok(self.entries.remove(index))
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Number of entries ever added (including removed ones)
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for Journal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.entries.join("\n"))
    }
}

/// Saves and loads journals as plain text, one entry per line.
///
/// Line breaks inside an entry are written as `\n` (and `\r`), with
/// backslashes doubled, so every entry stays on a single line.
#[derive(Debug, Clone, Copy, Default)]
pub struct Persistence;

impl Persistence {
    /// Write `journal` to `path`.
    ///
    /// Fails with `AlreadyExists` if the file exists and `overwrite` is
    /// false; the existing file is left as it was.
    #[instrument(skip(self, journal), fields(entries = journal.len()))]
    pub fn save(&self, journal: &Journal, path: &Path, overwrite: bool) -> Result<()> {
        let mut options = OpenOptions::new();
        options.write(true);
        if overwrite {
            options.create(true).truncate(true);
        } else {
            options.create_new(true);
        }

        let mut file = options.open(path).map_err(|e| match e.kind() {
            ErrorKind::AlreadyExists => PrincipleError::AlreadyExists {
                path: path.to_path_buf(),
            },
            _ => PrincipleError::IoError(e),
        })?;

        for entry in journal.entries() {
            writeln!(file, "{}", escape_line(entry))?;
        }

        info!("Saved journal to {}", path.display());
        Ok(())
    }

    /// Read a journal written by `save`.
    ///
    /// The counter resumes after the highest entry number found, so new
    /// entries never reuse a number.
    pub fn load(&self, path: &Path) -> Result<Journal> {
        let content = fs::read_to_string(path)?;
        let mut journal = Journal::new();

        for (idx, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let number = line
                .split_once(": ")
                .and_then(|(n, _)| n.parse::<usize>().ok())
                .ok_or_else(|| PrincipleError::MalformedEntry {
                    line: idx + 1,
                    content: line.to_string(),
                })?;

            journal.count = journal.count.max(number);
            journal.entries.push(unescape_line(line));
        }

        debug!("Loaded {} entries from {}", journal.len(), path.display());
        Ok(journal)
    }
}

fn escape_line(entry: &str) -> String {
    let mut out = String::with_capacity(entry.len());
    for c in entry.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c => out.push(c),
        }
    }
    out
}

fn unescape_line(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut chars = line.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}
