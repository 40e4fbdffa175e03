//! Part-of-speech codes and the synset key scheme.
//!
//! Every lexicon file numbers its synsets by byte offset, so the same numeral
//! can occur in `data.noun` and `data.verb`. Keys are made globally unique by
//! adding a per-part-of-speech band offset. Adjectives and satellite
//! adjectives live in the same file and therefore share one band.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{LexigraphError, Result};

/// Globally unique synset identifier (`file offset + band offset`).
pub type SynsetKey = u64;

/// Parts of speech known to the lexicon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PartOfSpeech {
    #[serde(rename = "n")]
    Noun,
    #[serde(rename = "v")]
    Verb,
    #[serde(rename = "a")]
    Adjective,
    #[serde(rename = "s")]
    AdjectiveSatellite,
    #[serde(rename = "r")]
    Adverb,
}

impl PartOfSpeech {
    pub const ALL: [PartOfSpeech; 5] = [
        PartOfSpeech::Noun,
        PartOfSpeech::Verb,
        PartOfSpeech::Adjective,
        PartOfSpeech::AdjectiveSatellite,
        PartOfSpeech::Adverb,
    ];

    /// Parse the single-letter code used in lexicon records.
    pub fn from_code(code: &str) -> Result<Self> {
        match code {
            "n" => Ok(PartOfSpeech::Noun),
            "v" => Ok(PartOfSpeech::Verb),
            "a" => Ok(PartOfSpeech::Adjective),
            "s" => Ok(PartOfSpeech::AdjectiveSatellite),
            "r" => Ok(PartOfSpeech::Adverb),
            other => Err(LexigraphError::unknown_part_of_speech(other)),
        }
    }

    /// The single-letter record code.
    pub fn code(self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "n",
            PartOfSpeech::Verb => "v",
            PartOfSpeech::Adjective => "a",
            PartOfSpeech::AdjectiveSatellite => "s",
            PartOfSpeech::Adverb => "r",
        }
    }

    /// Band offset added to file-local synset numerals.
    pub fn key_offset(self) -> u64 {
        match self {
            PartOfSpeech::Noun => 100_000_000,
            PartOfSpeech::Verb => 200_000_000,
            PartOfSpeech::Adjective | PartOfSpeech::AdjectiveSatellite => 300_000_000,
            PartOfSpeech::Adverb => 500_000_000,
        }
    }

    /// Translate a label from the word-year table.
    ///
    /// Labels such as `interjection` or `pronoun` have no counterpart in the
    /// lexicon and yield `None`.
    pub fn from_time_label(label: &str) -> Option<Self> {
        match label {
            "n" => Some(PartOfSpeech::Noun),
            "v" => Some(PartOfSpeech::Verb),
            "adj" => Some(PartOfSpeech::Adjective),
            "adv" => Some(PartOfSpeech::Adverb),
            "s" => Some(PartOfSpeech::AdjectiveSatellite),
            _ => None,
        }
    }

    /// Dense index, usable for small per-part-of-speech arrays.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Parts of speech contributed by a lexicon file, judged by its suffix.
    pub fn from_file_name(path: &Path) -> &'static [PartOfSpeech] {
        let name = path.to_string_lossy();
        if name.ends_with(".noun") {
            &[PartOfSpeech::Noun]
        } else if name.ends_with(".verb") {
            &[PartOfSpeech::Verb]
        } else if name.ends_with(".adj") {
            &[PartOfSpeech::Adjective, PartOfSpeech::AdjectiveSatellite]
        } else if name.ends_with(".adv") {
            &[PartOfSpeech::Adverb]
        } else {
            &[]
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for PartOfSpeech {
    type Err = LexigraphError;

    fn from_str(s: &str) -> Result<Self> {
        PartOfSpeech::from_code(s)
    }
}

/// Width of one part-of-speech band. File-local numerals must stay below it.
pub const BAND_WIDTH: u64 = 100_000_000;

/// Compute the global key of a synset from its file-local numeral.
///
/// A numeral outside the band would collide with the next part of speech and
/// is rejected as a format error.
pub fn synset_key(file_offset: u64, part_of_speech: PartOfSpeech) -> Result<SynsetKey> {
    if file_offset >= BAND_WIDTH {
        return Err(LexigraphError::format(format!(
            "synset offset {file_offset} exceeds the {part_of_speech} key band"
        )));
    }
    file_offset
        .checked_add(part_of_speech.key_offset())
        .ok_or_else(|| LexigraphError::format(format!("synset offset {file_offset} overflows")))
}
