//! Snowball stemmers backed by `rust-stemmers`.

use std::fmt;

use rust_stemmers::Algorithm;

use crate::analysis::token_filter::stem::Stemmer;

/// A Snowball stemmer for one language.
pub struct SnowballStemmer {
    language: &'static str,
    stemmer: rust_stemmers::Stemmer,
}

impl SnowballStemmer {
    /// Languages accepted by [`SnowballStemmer::from_language`].
    pub const LANGUAGES: [&'static str; 18] = [
        "arabic",
        "danish",
        "dutch",
        "english",
        "finnish",
        "french",
        "german",
        "greek",
        "hungarian",
        "italian",
        "norwegian",
        "portuguese",
        "romanian",
        "russian",
        "spanish",
        "swedish",
        "tamil",
        "turkish",
    ];

    /// The English (Porter2) stemmer.
    pub fn english() -> Self {
        Self::new("english", Algorithm::English)
    }

    /// Look up a stemmer by lowercase language name.
    pub fn from_language(language: &str) -> Option<Self> {
        let (name, algorithm) = match language {
            "arabic" => ("arabic", Algorithm::Arabic),
            "danish" => ("danish", Algorithm::Danish),
            "dutch" => ("dutch", Algorithm::Dutch),
            "english" => ("english", Algorithm::English),
            "finnish" => ("finnish", Algorithm::Finnish),
            "french" => ("french", Algorithm::French),
            "german" => ("german", Algorithm::German),
            "greek" => ("greek", Algorithm::Greek),
            "hungarian" => ("hungarian", Algorithm::Hungarian),
            "italian" => ("italian", Algorithm::Italian),
            "norwegian" => ("norwegian", Algorithm::Norwegian),
            "portuguese" => ("portuguese", Algorithm::Portuguese),
            "romanian" => ("romanian", Algorithm::Romanian),
            "russian" => ("russian", Algorithm::Russian),
            "spanish" => ("spanish", Algorithm::Spanish),
            "swedish" => ("swedish", Algorithm::Swedish),
            "tamil" => ("tamil", Algorithm::Tamil),
            "turkish" => ("turkish", Algorithm::Turkish),
            _ => return None,
        };
        Some(Self::new(name, algorithm))
    }

    fn new(language: &'static str, algorithm: Algorithm) -> Self {
        SnowballStemmer {
            language,
            stemmer: rust_stemmers::Stemmer::create(algorithm),
        }
    }
}

impl fmt::Debug for SnowballStemmer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnowballStemmer")
            .field("language", &self.language)
            .finish()
    }
}

impl Stemmer for SnowballStemmer {
    fn stem(&self, word: &str) -> String {
        self.stemmer.stem(word).into_owned()
    }

    fn name(&self) -> &'static str {
        self.language
    }
}
