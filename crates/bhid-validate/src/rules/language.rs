//! `language_check`: every character must belong to the language's script.

use std::fmt;
use std::ops::RangeInclusive;

use bhid_model::Value;

use super::failure;
use crate::error::{Result, ValidatorError};
use crate::registry::Validator;
use crate::{ValidationContext, ValidationResult, ValidatorKind, ValidatorOptions};

const KIND: ValidatorKind = ValidatorKind::LanguageCheck;

/// Letters, tatweel, harakat and extended letters. Arabic digits and
/// punctuation are excluded.
const ARABIC: &[RangeInclusive<char>] = &[
    '\u{0621}'..='\u{063A}',
    '\u{0640}'..='\u{0652}',
    '\u{0670}'..='\u{06D3}',
    '\u{06D5}'..='\u{06D5}',
];

/// Supported languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Arabic,
}

impl Language {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "arabic" => Some(Self::Arabic),
            _ => None,
        }
    }

    /// Whether `c` is accepted in text of this language. Whitespace separates words
    /// and is always accepted.
    pub fn accepts(&self, c: char) -> bool {
        if c.is_whitespace() {
            return true;
        }
        match self {
            Self::Arabic => ARABIC.iter().any(|range| range.contains(&c)),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Arabic => f.write_str("Arabic"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LanguageCheck {
    language: Language,
    message: Option<String>,
}

impl LanguageCheck {
    pub fn new(options: &ValidatorOptions) -> Result<Self> {
        let name = options.value_str()?;
        let language = Language::parse(name).ok_or_else(|| ValidatorError::UnsupportedLanguage {
            language: name.to_string(),
        })?;
        Ok(Self {
            language,
            message: options.message.clone(),
        })
    }

    pub(crate) fn boxed(options: &ValidatorOptions) -> Result<Box<dyn Validator>> {
        Ok(Box::new(Self::new(options)?))
    }
}

impl Validator for LanguageCheck {
    fn kind(&self) -> ValidatorKind {
        KIND
    }

    fn validate(
        &self,
        value: Option<&Value>,
        _context: Option<&ValidationContext<'_>>,
    ) -> Result<ValidationResult> {
        let Some(value) = value else {
            return Ok(ValidationResult::pass(KIND));
        };
        if value.to_string().chars().all(|c| self.language.accepts(c)) {
            return Ok(ValidationResult::pass(KIND));
        }
        Ok(failure(KIND, self.message.as_deref(), || {
            format!("only readable {} characters are supported", self.language)
        }))
    }
}
