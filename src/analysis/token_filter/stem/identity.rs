//! Pass-through stemmer.

use crate::analysis::token_filter::stem::Stemmer;

/// Leaves every token as it is. This is the default stemmer of a
/// [`TokenizerConfig`](crate::analysis::config::TokenizerConfig).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdentityStemmer;

impl IdentityStemmer {
    /// Names that select this stemmer, compared after trimming and
    /// lowercasing. The empty name counts as "no stemmer".
    pub const ALIASES: [&'static str; 3] = ["identity", "none", ""];

    pub fn is_alias(name: &str) -> bool {
        Self::ALIASES.contains(&name)
    }
}

impl Stemmer for IdentityStemmer {
    fn stem(&self, word: &str) -> String {
        word.to_owned()
    }

    fn name(&self) -> &'static str {
        "identity"
    }
}
