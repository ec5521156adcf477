//! Pick a random secret without starting a round

use crate::core::Word;
use crate::wordlists::{WordPool, WordSource};
use anyhow::Result;
use rand::Rng;

/// Draw one word of `word_length` letters, skipping `excluding`
///
/// # Errors
///
/// Returns an error if the source has no list for the length or every word
/// is excluded.
pub fn pick_word<S, R>(
    source: &S,
    word_length: usize,
    excluding: &[String],
    rng: &mut R,
) -> Result<Word>
where
    S: WordSource + ?Sized,
    R: Rng + ?Sized,
{
    let pool = WordPool::from_source(source, word_length)?;
    Ok(pool.select_word(excluding, rng)?.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GameError;
    use crate::wordlists::{EmbeddedWords, WordLists};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn picks_word_of_requested_length() {
        let mut rng = StdRng::seed_from_u64(11);
        for length in 4..=7 {
            let word = pick_word(&EmbeddedWords, length, &[], &mut rng).unwrap();
            assert_eq!(word.len(), length);
        }
    }

    #[test]
    fn skips_excluded_words() {
        let lists = WordLists::from_words(["lingo", "sheep"].map(|w| Word::new(w).unwrap()));
        let mut rng = StdRng::seed_from_u64(1);
        let word = pick_word(&lists, 5, &["SHEEP".to_string()], &mut rng).unwrap();
        assert_eq!(word.text(), "lingo");

        let err = pick_word(&lists, 5, &["sheep".into(), "lingo".into()], &mut rng).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GameError>(),
            Some(GameError::EmptyPool { word_length: 5 })
        ));
    }

    #[test]
    fn missing_length_is_an_error() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(pick_word(&EmbeddedWords, 12, &[], &mut rng).is_err());
    }
}
