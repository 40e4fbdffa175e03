//! Reader for `data.*` lexicon files.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use tracing::{debug, info};

use super::decoder::RecordDecoder;
use super::part_of_speech::PartOfSpeech;
use super::registry::SynsetRegistry;
use crate::error::{LexigraphError, Result};

/// Lines of the license header start with two spaces.
const LICENSE_PREFIX: &str = "  ";

/// Reads lexicon files into a [`SynsetRegistry`].
pub struct LexiconReader;

impl LexiconReader {
    /// Parts of speech contributed by a set of files, judged by file suffix.
    pub fn parts_of_speech<P: AsRef<Path>>(paths: &[P]) -> BTreeSet<PartOfSpeech> {
        paths
            .iter()
            .flat_map(|path| PartOfSpeech::from_file_name(path.as_ref()).iter().copied())
            .collect()
    }

    /// Read every file in order. Records read later replace earlier records
    /// with the same key.
    pub fn read<P: AsRef<Path>>(paths: &[P]) -> Result<SynsetRegistry> {
        let mut registry = SynsetRegistry::new();
        for path in paths {
            let path = path.as_ref();
            let content = fs::read_to_string(path).map_err(|e| {
                LexigraphError::input(format!(
                    "Failed to read lexicon file '{}': {}",
                    path.display(),
                    e
                ))
            })?;
            registry.activate(PartOfSpeech::from_file_name(path));
            let name = path.display().to_string();
            let count = Self::read_records(&name, &content, &mut registry)?;
            info!(file = %name, records = count, "read lexicon file");
        }
        registry.rebuild_word_index();
        Ok(registry)
    }

    /// Read records from in-memory file content. Returns the number of records.
    ///
    /// The license header is skipped; the first line without the header
    /// prefix is the first record.
    pub fn read_str(
        name: &str,
        content: &str,
        parts_of_speech: &[PartOfSpeech],
        registry: &mut SynsetRegistry,
    ) -> Result<usize> {
        registry.activate(parts_of_speech);
        let count = Self::read_records(name, content, registry)?;
        registry.rebuild_word_index();
        Ok(count)
    }

    fn read_records(name: &str, content: &str, registry: &mut SynsetRegistry) -> Result<usize> {
        let mut count = 0;
        let records = content
            .lines()
            .enumerate()
            .skip_while(|(_, line)| line.starts_with(LICENSE_PREFIX));

        for (index, line) in records {
            if line.trim().is_empty() {
                continue;
            }
            let synset =
                RecordDecoder::decode_line(line).map_err(|e| e.at_line(name, index + 1))?;
            let key = synset.key;
            if registry.insert(synset).is_some() {
                debug!(key, file = name, line = index + 1, "synset key overwritten");
            }
            count += 1;
        }

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    const LICENSE: &str = "  1 This software and database is being provided to you, the LICENSEE, by\n  2 Princeton University under the following license.\n";

    #[test]
    fn test_license_block_is_skipped() {
        let content = format!(
            "{LICENSE}00000001 03 n 01 entity 0 000 | that which exists\n00000002 03 n 01 thing 0 000 | an entity\n"
        );
        let mut registry = SynsetRegistry::new();
        let count =
            LexiconReader::read_str("data.noun", &content, &[PartOfSpeech::Noun], &mut registry)
                .unwrap();

        assert_eq!(count, 2);
        assert!(registry.contains(100_000_001));
        assert!(registry.contains(100_000_002));
    }

    #[test]
    fn test_file_without_license() {
        let content = "00000001 03 n 01 entity 0 000 | that which exists\n";
        let mut registry = SynsetRegistry::new();
        let count =
            LexiconReader::read_str("data.noun", content, &[PartOfSpeech::Noun], &mut registry)
                .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_format_error_reports_line() {
        let content = format!("{LICENSE}00000001 03 n 02 entity 0\n");
        let mut registry = SynsetRegistry::new();
        let error =
            LexiconReader::read_str("data.noun", &content, &[PartOfSpeech::Noun], &mut registry)
                .unwrap_err();

        assert!(error.to_string().contains("data.noun:3"), "{error}");
    }

    #[test]
    fn test_read_files_and_parts_of_speech() {
        let dir = tempfile::tempdir().unwrap();
        let noun = dir.path().join("data.noun");
        let adj = dir.path().join("data.adj");
        fs::write(&noun, format!("{LICENSE}00000001 03 n 01 cat 0 000 | a feline\n")).unwrap();
        fs::write(&adj, "00000001 00 a 01 feline 0 000 | catlike\n").unwrap();

        let paths = vec![noun, adj];
        let registry = LexiconReader::read(&paths).unwrap();

        assert_eq!(registry.len(), 2);
        assert!(registry.contains(100_000_001));
        assert!(registry.contains(300_000_001));
        assert_eq!(
            registry.parts_of_speech().iter().copied().collect::<Vec<_>>(),
            vec![
                PartOfSpeech::Noun,
                PartOfSpeech::Adjective,
                PartOfSpeech::AdjectiveSatellite
            ]
        );
        assert_eq!(LexiconReader::parts_of_speech(&paths), *registry.parts_of_speech());
    }

    #[test]
    fn test_unknown_suffix_contributes_nothing() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "00000001 03 n 01 cat 0 000 | a feline").unwrap();
        file.flush().unwrap();

        let registry = LexiconReader::read(&[file.path()]).unwrap();
        assert_eq!(registry.len(), 1);
        assert!(registry.parts_of_speech().is_empty());
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let result = LexiconReader::read(&["/nonexistent/data.noun"]);
        assert!(matches!(result, Err(LexigraphError::Input(_))));
    }
}
