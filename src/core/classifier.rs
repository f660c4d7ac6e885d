//! Study classifier: finds study features in review text
//!
//! The feature vocabulary is a table of trigger phrases. Each feature's
//! phrases compile into one word-bounded, case-insensitive regex that is
//! tested against all reviews joined into a single corpus.

use lazy_static::lazy_static;
use regex::Regex;
use crate::types::{Feature, Place, StudyAssessment};

/// Trigger phrases per feature
pub const FEATURE_TRIGGERS: &[(Feature, &[&str])] = &[
    (Feature::Wifi, &["wifi", "wi-fi", "internet", "free wifi"]),
    (Feature::Laptop, &["laptop", "remote work", "work from", "working", "computer"]),
    (Feature::Outlets, &["outlet", "plug", "charging", "power"]),
    (Feature::Seating, &["seating", "seats", "tables", "spacious", "roomy", "plenty of room"]),
    (Feature::Quiet, &["quiet", "peaceful", "calm", "study", "studying", "focus", "concentrate"]),
];

lazy_static! {
    static ref DEFAULT_PATTERNS: Vec<(Feature, Regex)> = FEATURE_TRIGGERS
        .iter()
        .map(|(feature, phrases)| (*feature, build_pattern(phrases).unwrap()))
        .collect();
}

/// Review classifier
#[derive(Debug, Clone)]
pub struct StudyClassifier {
    patterns: Vec<(Feature, Regex)>,
}

impl Default for StudyClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl StudyClassifier {
    /// Classifier with the built-in trigger table
    pub fn new() -> Self {
        Self {
            patterns: DEFAULT_PATTERNS.clone(),
        }
    }

    /// Classifier with a custom trigger table
    ///
    /// A feature may appear more than once; it is present if any of its
    /// rows match. Features missing from the table are never detected.
    pub fn from_triggers(triggers: &[(Feature, &[&str])]) -> Result<Self, regex::Error> {
        let patterns = triggers
            .iter()
            .filter(|(_, phrases)| !phrases.is_empty())
            .map(|(feature, phrases)| Ok((*feature, build_pattern(phrases)?)))
            .collect::<Result<Vec<_>, regex::Error>>()?;

        Ok(Self { patterns })
    }

    /// Analyze review texts
    pub fn classify<I, S>(&self, reviews: I) -> StudyAssessment
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let corpus = reviews
            .into_iter()
            .map(|r| r.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();

        if corpus.trim().is_empty() {
            return StudyAssessment::empty();
        }

        let found = Feature::ALL.into_iter().filter(|feature| {
            self.patterns
                .iter()
                .any(|(f, regex)| f == feature && regex.is_match(&corpus))
        });

        StudyAssessment::from_features(found)
    }

    /// Analyze a place's reviews; reviews without text count as ""
    pub fn classify_place(&self, place: &Place) -> StudyAssessment {
        self.classify(place.review_texts())
    }
}

/// Analyze review texts with the built-in trigger table
pub fn classify<I, S>(reviews: I) -> StudyAssessment
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    StudyClassifier::new().classify(reviews)
}

/// Compile one case-insensitive alternation, phrases taken literally
///
/// Word boundaries are ASCII-only, so letters from other scripts count as
/// separators. A side of a phrase that ends in punctuation gets no boundary.
fn build_pattern(phrases: &[&str]) -> Result<Regex, regex::Error> {
    let alternatives = phrases
        .iter()
        .map(|p| {
            let start = if p.starts_with(is_word_char) { ASCII_BOUNDARY } else { "" };
            let end = if p.ends_with(is_word_char) { ASCII_BOUNDARY } else { "" };
            format!("{}{}{}", start, regex::escape(p), end)
        })
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!("(?i)(?:{})", alternatives))
}

const ASCII_BOUNDARY: &str = r"(?-u:\b)";

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

// =============================================================================
// TESTS
// =============================================================================
