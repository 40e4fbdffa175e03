//! Lexicon ingestion: the key scheme, the record decoder, and the file reader.

pub mod decoder;
pub mod part_of_speech;
pub mod reader;
pub mod registry;
pub mod synset;

pub use decoder::RecordDecoder;
pub use part_of_speech::{PartOfSpeech, SynsetKey, synset_key};
pub use reader::LexiconReader;
pub use registry::SynsetRegistry;
pub use synset::{Connection, Pointer, Synset};
