mod chinese;
mod english;

use std::{collections::HashSet, sync::OnceLock};

use crate::engine::Language;

use chinese::CHINESE_STOP_WORDS;
use english::ENGLISH_STOP_WORDS;

static CHINESE_SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
static ENGLISH_SET: OnceLock<HashSet<&'static str>> = OnceLock::new();

fn stop_word_set(language: Language) -> &'static HashSet<&'static str> {
    match language {
        Language::Chinese => CHINESE_SET.get_or_init(|| CHINESE_STOP_WORDS.iter().copied().collect()),
        Language::English => ENGLISH_SET.get_or_init(|| ENGLISH_STOP_WORDS.iter().copied().collect()),
    }
}

/// Exact-match membership test against the language's stop-word table.
///
/// The Chinese table is case-sensitive. The English table only holds
/// lower-case entries, so Latin terms must be lower-cased by the caller
/// (the Latin tokenizer already emits lower-case terms).
#[inline]
pub fn is_stop_word(term: &str, language: Language) -> bool {
    stop_word_set(language).contains(term)
}

/// Every entry of the language's table, in table order.
pub fn stop_words(language: Language) -> &'static [&'static str] {
    match language {
        Language::Chinese => CHINESE_STOP_WORDS,
        Language::English => ENGLISH_STOP_WORDS,
    }
}
