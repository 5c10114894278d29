use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use super::CharFilter;

/// Supported Unicode normalization forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NormalizationForm {
    NFC,
    NFD,
    NFKC,
    NFKD,
}

/// A char filter that performs Unicode normalization.
///
/// With `ascii_only` every non-ASCII character left after normalization is
/// dropped, which folds accented letters to their base letter.
#[derive(Debug, Clone)]
pub struct UnicodeNormalizationCharFilter {
    form: NormalizationForm,
    ascii_only: bool,
}

impl UnicodeNormalizationCharFilter {
    pub fn new(form: NormalizationForm) -> Self {
        Self {
            form,
            ascii_only: false,
        }
    }

    /// NFKD decomposition followed by dropping non-ASCII characters.
    pub fn ascii_folding() -> Self {
        Self {
            form: NormalizationForm::NFKD,
            ascii_only: true,
        }
    }

    pub fn form(&self) -> NormalizationForm {
        self.form
    }
}

impl CharFilter for UnicodeNormalizationCharFilter {
    fn filter(&self, input: &str) -> String {
        let chars: Box<dyn Iterator<Item = char> + '_> = match self.form {
            NormalizationForm::NFC => Box::new(input.nfc()),
            NormalizationForm::NFD => Box::new(input.nfd()),
            NormalizationForm::NFKC => Box::new(input.nfkc()),
            NormalizationForm::NFKD => Box::new(input.nfkd()),
        };

        if self.ascii_only {
            chars.filter(char::is_ascii).collect()
        } else {
            chars.collect()
        }
    }

    fn name(&self) -> &'static str {
        "unicode_normalization"
    }
}
