use super::CharFilter;

/// ASCII punctuation that [`PunctuationCharFilter::new`] leaves in place.
pub const DEFAULT_KEPT: &[char] = &['-', '/', '\\'];

/// A char filter that removes ASCII punctuation characters.
///
/// Characters listed in `kept` survive, so that forms like `and/or` and
/// `pre-heated` reach the tokenizer intact.
#[derive(Clone, Debug)]
pub struct PunctuationCharFilter {
    kept: Vec<char>,
}

impl PunctuationCharFilter {
    pub fn new() -> Self {
        Self::keeping(DEFAULT_KEPT)
    }

    /// Remove all ASCII punctuation except `kept`.
    pub fn keeping(kept: &[char]) -> Self {
        PunctuationCharFilter {
            kept: kept.to_vec(),
        }
    }

    fn removes(&self, c: char) -> bool {
        c.is_ascii_punctuation() && !self.kept.contains(&c)
    }
}

impl Default for PunctuationCharFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl CharFilter for PunctuationCharFilter {
    fn filter(&self, input: &str) -> String {
        input.chars().filter(|&c| !self.removes(c)).collect()
    }

    fn name(&self) -> &'static str {
        "punctuation"
    }
}
