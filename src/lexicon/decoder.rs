//! Decoder for single lexicon records.
//!
//! A record is one line of a `data.*` file, already split on single spaces:
//!
//! ```text
//! offset lex_filenum pos w_cnt (word lex_id){w_cnt} p_cnt (symbol offset pos src_dst){p_cnt} [frames] | gloss
//! ```
//!
//! `w_cnt` is hexadecimal, `p_cnt` is decimal, and `src_dst` packs the
//! 1-based source and target word indices as two hex digits each.

use super::part_of_speech::{PartOfSpeech, synset_key};
use super::synset::{Connection, Pointer, Synset};
use crate::error::{LexigraphError, Result};

const POS_FIELD: usize = 2;
const WORD_COUNT_FIELD: usize = 3;
const WORD_START: usize = 4;
const POINTER_WIDTH: usize = 4;
const GLOSS_SEPARATOR: &str = "|";

/// Turns raw lexicon records into [`Synset`] values.
pub struct RecordDecoder;

impl RecordDecoder {
    /// Decode a full line. Trailing line terminators are ignored.
    pub fn decode_line(line: &str) -> Result<Synset> {
        let line = line.trim_end_matches(['\n', '\r']);
        let fields: Vec<&str> = line.split(' ').collect();
        Self::decode(&fields)
    }

    /// Decode a record from its space-separated fields.
    pub fn decode(fields: &[&str]) -> Result<Synset> {
        let file_offset = parse_decimal(field(fields, 0, "synset offset")?, "synset offset")?;
        let synset_type = PartOfSpeech::from_code(field(fields, POS_FIELD, "part of speech")?)?;
        let key = synset_key(file_offset, synset_type)?;

        let word_count = parse_hex(field(fields, WORD_COUNT_FIELD, "word count")?, "word count")?;
        let pointer_count_field = word_count
            .checked_mul(2)
            .and_then(|n| n.checked_add(WORD_START))
            .ok_or_else(|| LexigraphError::format(format!("word count {word_count} is too large")))?;

        let words = (0..word_count)
            .map(|i| field(fields, WORD_START + 2 * i, "word").map(str::to_string))
            .collect::<Result<Vec<_>>>()?;
        // The lex id that follows the last word must be present as well.
        if word_count > 0 {
            field(fields, pointer_count_field - 1, "lex id")?;
        }

        let pointer_count = parse_decimal(
            field(fields, pointer_count_field, "pointer count")?,
            "pointer count",
        )?;
        let pointer_count = usize::try_from(pointer_count)
            .map_err(|_| LexigraphError::format(format!("pointer count {pointer_count} is too large")))?;
        let pointer_start = pointer_count_field + 1;
        if pointer_count
            .checked_mul(POINTER_WIDTH)
            .and_then(|n| n.checked_add(pointer_start))
            .is_none_or(|end| end > fields.len())
        {
            return Err(LexigraphError::format(format!(
                "record declares {} pointers but has only {} fields",
                pointer_count,
                fields.len()
            )));
        }

        let pointers = (0..pointer_count)
            .map(|i| decode_pointer(key, &fields[pointer_start + i * POINTER_WIDTH..]))
            .collect::<Result<Vec<_>>>()?;

        let separator = fields
            .iter()
            .position(|f| *f == GLOSS_SEPARATOR)
            .ok_or_else(|| LexigraphError::format("record has no '|' gloss separator"))?;
        let description = fields[separator + 1..].join(" ").trim().to_string();

        Ok(Synset {
            key,
            synset_type,
            words,
            pointers,
            description,
        })
    }
}

fn decode_pointer(src_key: u64, fields: &[&str]) -> Result<Pointer> {
    let symbol = fields[0].to_string();
    let target_offset = parse_decimal(fields[1], "pointer target offset")?;
    let target_pos = PartOfSpeech::from_code(fields[2])?;
    let (src_index, dst_index) = parse_source_target(fields[3])?;
    let dst_key = synset_key(target_offset, target_pos)?;

    Ok(Pointer {
        symbol,
        target_pos,
        connection: Connection {
            src_key,
            src_index,
            dst_key,
            dst_index,
        },
    })
}

fn parse_source_target(token: &str) -> Result<(u8, u8)> {
    if token.len() != 4 || !token.is_ascii() {
        return Err(LexigraphError::format(format!(
            "source/target field '{token}' is not 4 hex digits"
        )));
    }
    let src = u8::from_str_radix(&token[..2], 16);
    let dst = u8::from_str_radix(&token[2..], 16);
    match (src, dst) {
        (Ok(src), Ok(dst)) => Ok((src, dst)),
        _ => Err(LexigraphError::format(format!(
            "source/target field '{token}' is not hexadecimal"
        ))),
    }
}

fn field<'a>(fields: &[&'a str], index: usize, what: &str) -> Result<&'a str> {
    fields.get(index).copied().ok_or_else(|| {
        LexigraphError::format(format!(
            "record has {} fields, missing {} at field {}",
            fields.len(),
            what,
            index
        ))
    })
}

fn parse_decimal(token: &str, what: &str) -> Result<u64> {
    token
        .parse::<u64>()
        .map_err(|e| LexigraphError::format(format!("invalid {what} '{token}': {e}")))
}

fn parse_hex(token: &str, what: &str) -> Result<usize> {
    usize::from_str_radix(token, 16)
        .map_err(|e| LexigraphError::format(format!("invalid {what} '{token}': {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOG: &str = "02084071 05 n 03 dog 0 domestic_dog 0 Canis_familiaris 0 002 @ 02083346 n 0000 ~ 01322604 n 0101 | a member of the genus Canis  ";

    #[test]
    fn test_decode_noun_record() {
        let synset = RecordDecoder::decode_line(DOG).unwrap();

        assert_eq!(synset.key, 102_084_071);
        assert_eq!(synset.synset_type, PartOfSpeech::Noun);
        assert_eq!(synset.words, vec!["dog", "domestic_dog", "Canis_familiaris"]);
        assert_eq!(synset.description, "a member of the genus Canis");
        assert_eq!(synset.pointers.len(), 2);

        let hypernym = &synset.pointers[0];
        assert_eq!(hypernym.symbol, "@");
        assert_eq!(hypernym.target_pos, PartOfSpeech::Noun);
        assert_eq!(
            hypernym.connection,
            Connection {
                src_key: 102_084_071,
                src_index: 0,
                dst_key: 102_083_346,
                dst_index: 0,
            }
        );

        let hyponym = &synset.pointers[1].connection;
        assert_eq!((hyponym.src_index, hyponym.dst_index), (1, 1));
    }

    #[test]
    fn test_word_count_is_hex() {
        let words: Vec<String> = (0..10).map(|i| format!("w{i} 0")).collect();
        let line = format!("00000010 00 r 0a {} 000 | many words", words.join(" "));
        let synset = RecordDecoder::decode_line(&line).unwrap();

        assert_eq!(synset.words.len(), 10);
        assert_eq!(synset.key, 500_000_010);
    }

    #[test]
    fn test_pointer_target_uses_its_own_band() {
        let line = "00001740 00 a 01 able 0 001 + 05207437 n 0101 | having the means";
        let synset = RecordDecoder::decode_line(line).unwrap();

        assert_eq!(synset.key, 300_001_740);
        let connection = synset.pointers[0].connection;
        assert_eq!(connection.dst_key, 105_207_437);
        assert_eq!((connection.src_index, connection.dst_index), (1, 1));
    }

    #[test]
    fn test_verb_frames_stay_out_of_description() {
        let line = "00001740 29 v 01 breathe 0 000 01 + 02 00 | draw air into, and expel out of, the lungs";
        let synset = RecordDecoder::decode_line(line).unwrap();
        assert_eq!(synset.description, "draw air into, and expel out of, the lungs");
    }

    #[test]
    fn test_truncated_pointer_section_is_format_error() {
        let line = "00000001 00 n 01 cat 0 002 @ 00000002 n 0000 |";
        assert!(matches!(
            RecordDecoder::decode_line(line),
            Err(LexigraphError::Format(_))
        ));
    }

    #[test]
    fn test_truncated_word_section_is_format_error() {
        let line = "00000001 00 n 03 cat 0 feline";
        assert!(matches!(
            RecordDecoder::decode_line(line),
            Err(LexigraphError::Format(_))
        ));
    }

    #[test]
    fn test_bad_numbers_are_format_errors() {
        for line in [
            "0000000x 00 n 01 cat 0 000 | x",
            "00000001 00 n zz cat 0 000 | x",
            "00000001 00 n 01 cat 0 00q | x",
            "00000001 00 n 01 cat 0 001 @ 00000002 n 00g0 | x",
            "00000001 00 n 01 cat 0 001 @ 00000002 n 000 | x",
        ] {
            assert!(
                matches!(RecordDecoder::decode_line(line), Err(LexigraphError::Format(_))),
                "expected format error for {line}"
            );
        }
    }

    #[test]
    fn test_unknown_part_of_speech() {
        let line = "00000001 00 x 01 cat 0 000 | x";
        assert!(matches!(
            RecordDecoder::decode_line(line),
            Err(LexigraphError::UnknownPartOfSpeech(_))
        ));

        let line = "00000001 00 n 01 cat 0 001 @ 00000002 q 0000 | x";
        assert!(matches!(
            RecordDecoder::decode_line(line),
            Err(LexigraphError::UnknownPartOfSpeech(_))
        ));
    }

    #[test]
    fn test_missing_gloss_separator() {
        let line = "00000001 00 n 01 cat 0 000";
        assert!(matches!(
            RecordDecoder::decode_line(line),
            Err(LexigraphError::Format(_))
        ));
    }

    #[test]
    fn test_synset_offset_outside_band() {
        // would share a key with verb 00000001
        let line = "100000001 05 n 01 cat 0 000 | x";
        assert!(matches!(
            RecordDecoder::decode_line(line),
            Err(LexigraphError::Format(_))
        ));

        let line = "18446744073709551615 00 n 01 cat 0 000 | x";
        assert!(matches!(
            RecordDecoder::decode_line(line),
            Err(LexigraphError::Format(_))
        ));
    }

    #[test]
    fn test_pointer_offset_outside_band() {
        let line = "00000001 05 n 01 cat 0 001 @ 18446744073709551615 n 0000 | x";
        assert!(matches!(
            RecordDecoder::decode_line(line),
            Err(LexigraphError::Format(_))
        ));

        let line = "00000001 05 n 01 cat 0 001 @ 100000000 v 0000 | x";
        assert!(matches!(
            RecordDecoder::decode_line(line),
            Err(LexigraphError::Format(_))
        ));
    }
}
