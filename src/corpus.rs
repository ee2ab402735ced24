//! Process-wide word list for synthetic prompt generation.
//!
//! Loaded once on first use and never mutated afterward, so every caller
//! shares the same immutable list without locking. The crate ships an
//! embedded English word list; set `TGI_LOADGEN_WORDS_FILE` to point at a
//! larger corpus (one word per line, `#` comments and blank lines skipped).
//! Only synthetic generation touches this module; validation never does.

use once_cell::sync::Lazy;
use rand::seq::IndexedRandom;

/// Environment variable naming an external word-list file.
pub const WORDS_FILE_ENV: &str = "TGI_LOADGEN_WORDS_FILE";

static EMBEDDED_WORDS: &str = include_str!("../data/words.txt");

static WORD_LIST: Lazy<Vec<String>> = Lazy::new(|| {
    if let Ok(path) = std::env::var(WORDS_FILE_ENV) {
        match std::fs::read_to_string(&path) {
            Ok(raw) => {
                let words = parse_words(&raw);
                if words.is_empty() {
                    tracing::warn!(
                        "word list at {path} is empty, falling back to the embedded corpus"
                    );
                } else {
                    tracing::debug!("loaded {} words from {path}", words.len());
                    return words;
                }
            }
            Err(err) => {
                tracing::warn!(
                    "could not read word list at {path}: {err}, falling back to the embedded corpus"
                );
            }
        }
    }
    parse_words(EMBEDDED_WORDS)
});

fn parse_words(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Number of words in the loaded corpus.
pub fn word_count() -> usize {
    WORD_LIST.len()
}

/// Sample `count` words with replacement, space-joined into a prompt.
pub fn random_prompt(count: usize) -> String {
    let mut rng = rand::rng();
    let words: Vec<&str> = (0..count)
        .map(|_| {
            WORD_LIST
                .choose(&mut rng)
                .map(String::as_str)
                .unwrap_or("lorem")
        })
        .collect();
    words.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_corpus_is_non_trivial() {
        assert!(word_count() > 500);
    }

    #[test]
    fn prompt_has_exact_word_count() {
        let prompt = random_prompt(250);
        assert_eq!(prompt.split(' ').count(), 250);
    }

    #[test]
    fn prompt_draws_only_corpus_words() {
        for word in random_prompt(50).split(' ') {
            assert!(
                WORD_LIST.iter().any(|w| w == word),
                "{word} not in corpus"
            );
        }
    }

    #[test]
    fn parse_skips_comments_and_blanks() {
        let words = parse_words("alpha\n\n# comment\n beta \n");
        assert_eq!(words, vec!["alpha", "beta"]);
    }
}
