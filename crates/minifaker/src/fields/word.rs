//! Word generator keyed by part of speech.

use std::fmt;

use crate::MiniFaker;
use crate::error::GenerationError;
use crate::random;

/// Part of speech selecting the word list to draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordType {
    /// Reads `verbs`.
    Verb,
    /// Reads `prepositions`.
    Preposition,
    /// Reads `nouns`.
    Noun,
    /// Reads `interjections`.
    Interjection,
    /// Reads `conjunctions`.
    Conjunction,
    /// Reads `adverbs`.
    Adverb,
    /// Reads `adjectives`.
    Adjective,
}

impl WordType {
    /// Every word type, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::Verb,
        Self::Preposition,
        Self::Noun,
        Self::Interjection,
        Self::Conjunction,
        Self::Adverb,
        Self::Adjective,
    ];

    /// Returns the locale field key holding words of this type.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Verb => "verbs",
            Self::Preposition => "prepositions",
            Self::Noun => "nouns",
            Self::Interjection => "interjections",
            Self::Conjunction => "conjunctions",
            Self::Adverb => "adverbs",
            Self::Adjective => "adjectives",
        }
    }
}

/// Options for [`MiniFaker::word`].
#[derive(Clone, Copy, Default)]
pub struct WordOptions<'a> {
    /// Explicit locale, or `None` for the registry default.
    pub locale: Option<&'a str>,
    /// Part of speech; `None` picks one at random.
    pub kind: Option<WordType>,
    /// Keeps only the words for which the predicate returns `true`.
    pub filter: Option<&'a dyn Fn(&str) -> bool>,
}

impl fmt::Debug for WordOptions<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WordOptions")
            .field("locale", &self.locale)
            .field("kind", &self.kind)
            .field("filter", &self.filter.map(|_| "<fn>"))
            .finish()
    }
}

impl MiniFaker {
    /// Picks a word of the requested part of speech.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] if the word list cannot be resolved, or if
    /// it is empty once the filter has been applied.
    ///
    /// # Example
    ///
    /// ```
    /// use minifaker::{LocaleBundle, LocaleRegistry, MiniFaker, WordOptions, WordType};
    ///
    /// let registry = LocaleRegistry::with_locale(
    ///     "en",
    ///     LocaleBundle::new().with_field("nouns", ["otter", "heron", "badger"]),
    /// );
    /// let mut faker = MiniFaker::with_seed(registry, 11);
    /// let short = |word: &str| word.len() == 5;
    ///
    /// let word = faker
    ///     .word(&WordOptions {
    ///         kind: Some(WordType::Noun),
    ///         filter: Some(&short),
    ///         ..WordOptions::default()
    ///     })
    ///     .expect("matching nouns exist");
    /// assert!(word == "otter" || word == "heron");
    /// ```
    pub fn word(&mut self, options: &WordOptions<'_>) -> Result<String, GenerationError> {
        let kind = match options.kind {
            Some(kind) => kind,
            None => *random::array_element(self.rng(), &WordType::ALL)?,
        };

        match options.filter {
            Some(filter) => self.pick_field_where(options.locale, kind.key(), filter),
            None => self.pick_field(options.locale, kind.key()),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::fields::fixtures::faker;
    use crate::{FieldRequest, SamplingError};

    #[rstest]
    #[case(WordType::Verb)]
    #[case(WordType::Preposition)]
    #[case(WordType::Noun)]
    #[case(WordType::Interjection)]
    #[case(WordType::Conjunction)]
    #[case(WordType::Adverb)]
    #[case(WordType::Adjective)]
    fn word_reads_the_list_for_its_type(mut faker: MiniFaker, #[case] kind: WordType) {
        let words = faker
            .get_locale_data(FieldRequest::new(kind.key()))
            .expect("en has every word type")
            .to_vec();
        let options = WordOptions {
            kind: Some(kind),
            ..WordOptions::default()
        };

        let word = faker.word(&options).expect("en has every word type");
        assert!(words.contains(&word));
    }

    #[rstest]
    fn random_type_still_yields_a_word(mut faker: MiniFaker) {
        let word = faker.word(&WordOptions::default()).expect("en has every word type");

        assert!(!word.is_empty());
    }

    #[rstest]
    fn filter_that_rejects_everything_fails(mut faker: MiniFaker) {
        let reject = |_: &str| false;
        let options = WordOptions {
            kind: Some(WordType::Noun),
            filter: Some(&reject),
            ..WordOptions::default()
        };

        assert_eq!(
            faker.word(&options),
            Err(GenerationError::Sampling(SamplingError::EmptyInput))
        );
    }

    #[test]
    fn keys_are_plural_type_names() {
        let keys: Vec<&str> = WordType::ALL.iter().map(|kind| kind.key()).collect();

        assert_eq!(
            keys,
            [
                "verbs",
                "prepositions",
                "nouns",
                "interjections",
                "conjunctions",
                "adverbs",
                "adjectives"
            ]
        );
    }
}
