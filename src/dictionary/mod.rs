pub mod entry;

mod tokenize;
mod transliterate;

pub use entry::{ImportSummary, Source, Word};
pub use tokenize::{TextStats, Tokenizer, DEFAULT_STRIP};
pub use transliterate::{is_cyrillic, transliterate, transliterate_char};
