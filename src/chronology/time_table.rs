//! Earliest attestation year per word and part of speech.
//!
//! Source lines look like `ambush <delim> n and v <delim> 1350`. Labels
//! outside the lexicon's parts of speech are ignored, and an `adj` label also
//! dates the word as a satellite adjective.

use std::fs;
use std::path::Path;

use ahash::AHashMap;
use tracing::info;

use crate::error::{LexigraphError, Result};
use crate::lexicon::PartOfSpeech;

/// Field separator used by the word-year table unless configured otherwise.
pub const DEFAULT_DELIMITER: &str = " <delim> ";

const LABEL_SEPARATOR: &str = " and ";

type Years = [Option<i32>; PartOfSpeech::ALL.len()];

/// Maps `(word, part of speech)` to the earliest recorded year.
#[derive(Debug, Clone, Default)]
pub struct TimeTable {
    years: AHashMap<String, Years>,
    entries: usize,
}

impl TimeTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a table using [`DEFAULT_DELIMITER`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::load_with_delimiter(path, DEFAULT_DELIMITER)
    }

    /// Load a table whose fields are separated by `delimiter`.
    pub fn load_with_delimiter<P: AsRef<Path>>(path: P, delimiter: &str) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            LexigraphError::input(format!(
                "Failed to read time data file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let table = Self::parse(&content, delimiter).map_err(|e| match e {
            LexigraphError::Format(msg) => {
                LexigraphError::format(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })?;
        info!(file = %path.display(), entries = table.len(), "read time data");
        Ok(table)
    }

    /// Parse table content.
    pub fn parse(content: &str, delimiter: &str) -> Result<Self> {
        if delimiter.is_empty() {
            return Err(LexigraphError::config("time data delimiter must not be empty"));
        }

        let mut table = TimeTable::new();
        for (index, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let parts: Vec<&str> = line.split(delimiter).collect();
            let [word, labels, year] = parts.as_slice() else {
                return Err(LexigraphError::format(format!(
                    "line {}: expected 3 fields separated by '{}', found {}",
                    index + 1,
                    delimiter,
                    parts.len()
                )));
            };
            let year: i32 = year.trim().parse().map_err(|e| {
                LexigraphError::format(format!("line {}: invalid year '{}': {}", index + 1, year, e))
            })?;

            for pos in Self::translate_labels(labels) {
                table.record(word, pos, year);
            }
        }
        Ok(table)
    }

    /// Translate an `" and "`-joined label list into parts of speech.
    fn translate_labels(labels: &str) -> Vec<PartOfSpeech> {
        let mut parts: Vec<PartOfSpeech> = labels
            .split(LABEL_SEPARATOR)
            .filter_map(PartOfSpeech::from_time_label)
            .collect();
        if parts.contains(&PartOfSpeech::Adjective) {
            parts.push(PartOfSpeech::AdjectiveSatellite);
        }
        parts.sort();
        parts.dedup();
        parts
    }

    /// Record a year, keeping the earliest one per `(word, pos)`.
    pub fn record(&mut self, word: &str, pos: PartOfSpeech, year: i32) {
        let years = self.years.entry(word.to_string()).or_default();
        let slot = &mut years[pos.index()];
        match *slot {
            Some(existing) if existing <= year => {}
            Some(_) => *slot = Some(year),
            None => {
                *slot = Some(year);
                self.entries += 1;
            }
        }
    }

    /// Earliest year of `word` used as `pos`.
    pub fn year(&self, word: &str, pos: PartOfSpeech) -> Option<i32> {
        self.years.get(word).and_then(|years| years[pos.index()])
    }

    /// Whether `word` is dated for `pos`.
    pub fn contains(&self, word: &str, pos: PartOfSpeech) -> bool {
        self.year(word, pos).is_some()
    }

    /// Earliest year of `word` across all its parts of speech.
    pub fn earliest_year(&self, word: &str) -> Option<i32> {
        self.years
            .get(word)
            .and_then(|years| years.iter().flatten().min().copied())
    }

    /// Number of `(word, pos)` entries.
    pub fn len(&self) -> usize {
        self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_parse_basic_entries() {
        let table = TimeTable::parse(
            "cat <delim> n <delim> 1200\nfeline <delim> n and adj <delim> 1500\n",
            DEFAULT_DELIMITER,
        )
        .unwrap();

        assert_eq!(table.year("cat", PartOfSpeech::Noun), Some(1200));
        assert_eq!(table.year("cat", PartOfSpeech::Verb), None);
        assert_eq!(table.year("feline", PartOfSpeech::Noun), Some(1500));
        assert_eq!(table.year("feline", PartOfSpeech::Adjective), Some(1500));
        assert_eq!(table.year("feline", PartOfSpeech::AdjectiveSatellite), Some(1500));
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn test_earliest_year_wins() {
        let table = TimeTable::parse(
            "run <delim> v <delim> 1300\nrun <delim> v <delim> 900\nrun <delim> v <delim> 1100\n",
            DEFAULT_DELIMITER,
        )
        .unwrap();

        assert_eq!(table.year("run", PartOfSpeech::Verb), Some(900));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_unknown_labels_are_ignored() {
        let table = TimeTable::parse(
            "oh <delim> interjection <delim> 1200\nwell <delim> adv and interjection <delim> 900\n",
            DEFAULT_DELIMITER,
        )
        .unwrap();

        assert!(!table.contains("oh", PartOfSpeech::Noun));
        assert_eq!(table.earliest_year("oh"), None);
        assert_eq!(table.year("well", PartOfSpeech::Adverb), Some(900));
    }

    #[test]
    fn test_satellite_label_alone() {
        let table = TimeTable::parse("red <delim> s <delim> 1000\n", DEFAULT_DELIMITER).unwrap();
        assert!(table.contains("red", PartOfSpeech::AdjectiveSatellite));
        assert!(!table.contains("red", PartOfSpeech::Adjective));
    }

    #[test]
    fn test_earliest_year_across_parts_of_speech() {
        let table = TimeTable::parse(
            "fish <delim> v <delim> 1400\nfish <delim> n <delim> 800\n",
            DEFAULT_DELIMITER,
        )
        .unwrap();
        assert_eq!(table.earliest_year("fish"), Some(800));
    }

    #[test]
    fn test_malformed_lines() {
        assert!(matches!(
            TimeTable::parse("cat <delim> n\n", DEFAULT_DELIMITER),
            Err(LexigraphError::Format(_))
        ));
        assert!(matches!(
            TimeTable::parse("cat <delim> n <delim> long ago\n", DEFAULT_DELIMITER),
            Err(LexigraphError::Format(_))
        ));
        assert!(matches!(
            TimeTable::parse("cat\tn\t1200\n", ""),
            Err(LexigraphError::Config(_))
        ));
    }

    #[test]
    fn test_custom_delimiter_and_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "cat\tn\t1200").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "dog\tn\t1100").unwrap();
        file.flush().unwrap();

        let table = TimeTable::load_with_delimiter(file.path(), "\t").unwrap();
        assert_eq!(table.year("cat", PartOfSpeech::Noun), Some(1200));
        assert_eq!(table.year("dog", PartOfSpeech::Noun), Some(1100));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            TimeTable::load("/nonexistent/word_to_year.txt"),
            Err(LexigraphError::Input(_))
        ));
    }
}
