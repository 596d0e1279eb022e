//! Forgiving component lookup.
//!
//! Callers type component names freely ("file-input-multiple",
//! "va-button", "ALERT"), so lookup walks an ordered list of match rules
//! and returns the first component any rule accepts. When nothing matches,
//! [`ComponentMatcher::suggest`] ranks near misses.

use crate::extractor::collapse_hyphens;
use std::fmt;
use tracing::debug;
use vads_docs_core::{ComponentData, ComponentRegistry, ParserConfig};

/// Common UI terms that earn a suggestion bonus when both names contain them.
pub const COMMON_TERMS: &[&str] = &["button", "input", "alert", "form", "text", "file"];

const SUBSTRING_SCORE: usize = 10;
const COMMON_TERM_SCORE: usize = 5;
const MAX_LENGTH_SCORE: usize = 5;

/// Match rules in precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchRule {
    /// Exact registry key.
    ExactKey,
    /// Case-insensitive name, or tag prefix plus name.
    CaseInsensitive,
    /// Lower-cased, whitespace to hyphens, other punctuation dropped.
    Normalized,
    /// Component name with spaces turned into hyphens.
    Kebab,
    /// Kebab form with repeated hyphens folded.
    HyphenCollapsed,
    /// Same words in the same order, ignoring case and separators.
    WordForWord,
}

impl MatchRule {
    /// Rules after `ExactKey`, in the order they are tried.
    pub const FUZZY_ORDER: [Self; 5] = [
        Self::CaseInsensitive,
        Self::Normalized,
        Self::Kebab,
        Self::HyphenCollapsed,
        Self::WordForWord,
    ];

    fn accepts(self, query: &Query<'_>, component: &ComponentData, tag_prefix: &str) -> bool {
        let name_lower = component.name.to_lowercase();
        match self {
            Self::ExactKey => component.name == query.raw,
            Self::CaseInsensitive => {
                name_lower == query.lower
                    || format!("{tag_prefix}{}", component.name).to_lowercase() == query.lower
            }
            Self::Normalized => normalize_name(&component.name) == query.normalized,
            Self::Kebab => name_lower.replace(' ', "-") == query.lower,
            Self::HyphenCollapsed => {
                collapse_hyphens(&name_lower.replace(' ', "-")) == collapse_hyphens(&query.lower)
            }
            Self::WordForWord => {
                let words = split_words(&name_lower);
                !words.is_empty() && words == query.words
            }
        }
    }
}

impl fmt::Display for MatchRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::ExactKey => "exact",
            Self::CaseInsensitive => "case-insensitive",
            Self::Normalized => "normalized",
            Self::Kebab => "kebab-case",
            Self::HyphenCollapsed => "hyphen-collapsed",
            Self::WordForWord => "word-for-word",
        };
        f.write_str(label)
    }
}

/// Pre-computed forms of the caller's input.
struct Query<'a> {
    raw: &'a str,
    lower: String,
    normalized: String,
    words: Vec<String>,
}

impl<'a> Query<'a> {
    fn new(raw: &'a str) -> Self {
        let lower = raw.trim().to_lowercase();
        Self {
            raw,
            normalized: normalize_name(raw),
            words: split_words(&lower),
            lower,
        }
    }
}

/// Component lookup and suggestion service.
///
/// # Examples
///
/// ```
/// use vads_docs_core::ParserConfig;
/// use vads_docs_metadata::{ComponentMatcher, MetadataExtractor};
///
/// let text = "/** @componentName File input multiple\n * @maturityCategory use\n * @maturityLevel deployed */\ninterface VaFileInputMultiple { label: string; }";
/// let config = ParserConfig::default();
/// let registry = MetadataExtractor::new(&config)?.extract_components(text);
///
/// let matcher = ComponentMatcher::new(&config);
/// let found = matcher.find("file-input-multiple", &registry).unwrap();
/// assert_eq!(found.name, "File input multiple");
/// # Ok::<(), vads_docs_core::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct ComponentMatcher {
    tag_prefix: String,
    max_suggestions: usize,
}

impl ComponentMatcher {
    /// Creates a matcher using the configured tag prefix and suggestion limit.
    #[must_use]
    pub fn new(config: &ParserConfig) -> Self {
        Self {
            tag_prefix: config.tag_prefix.clone(),
            max_suggestions: config.max_suggestions,
        }
    }

    /// Finds the best match for `input`, or `None`.
    #[must_use]
    pub fn find<'r>(&self, input: &str, registry: &'r ComponentRegistry) -> Option<&'r ComponentData> {
        self.find_with_rule(input, registry).map(|(_, c)| c)
    }

    /// Finds the best match and reports which rule accepted it.
    #[must_use]
    pub fn find_with_rule<'r>(
        &self,
        input: &str,
        registry: &'r ComponentRegistry,
    ) -> Option<(MatchRule, &'r ComponentData)> {
        if let Some(component) = registry.get(input) {
            return Some((MatchRule::ExactKey, component));
        }

        let query = Query::new(input);
        for rule in MatchRule::FUZZY_ORDER {
            if let Some(component) = registry
                .iter()
                .find(|c| rule.accepts(&query, c, &self.tag_prefix))
            {
                debug!(input, component = %component.name, %rule, "component matched");
                return Some((rule, component));
            }
        }

        debug!(input, "no component matched");
        None
    }

    /// Ranks component names similar to `input`.
    ///
    /// Scoring: +10 when either lower-cased name contains the other, +5 per
    /// common UI term present in both, plus up to 5 for similar length.
    /// Zero scores are dropped; ties keep registry order.
    ///
    /// # Examples
    ///
    /// ```
    /// use vads_docs_core::ParserConfig;
    /// use vads_docs_metadata::{ComponentMatcher, MetadataExtractor};
    ///
    /// let text = "/** @componentName Button\n * @maturityCategory use\n * @maturityLevel deployed */\ninterface VaButton { text: string; }";
    /// let config = ParserConfig::default();
    /// let registry = MetadataExtractor::new(&config)?.extract_components(text);
    ///
    /// let suggestions = ComponentMatcher::new(&config).suggest("buton", &registry);
    /// assert_eq!(suggestions, vec!["Button".to_string()]);
    /// # Ok::<(), vads_docs_core::Error>(())
    /// ```
    #[must_use]
    pub fn suggest(&self, input: &str, registry: &ComponentRegistry) -> Vec<String> {
        let input_lower = input.trim().to_lowercase();

        let mut scored: Vec<(usize, &str)> = registry
            .names()
            .map(|name| (suggestion_score(&input_lower, &name.to_lowercase()), name))
            .filter(|(score, _)| *score > 0)
            .collect();

        // Stable sort keeps registry order among equal scores.
        scored.sort_by(|a, b| b.0.cmp(&a.0));

        scored
            .into_iter()
            .take(self.max_suggestions)
            .map(|(_, name)| name.to_string())
            .collect()
    }
}

/// Scores how close two lower-cased names are.
#[must_use]
pub fn suggestion_score(input_lower: &str, name_lower: &str) -> usize {
    let mut score = 0;

    if name_lower.contains(input_lower) || input_lower.contains(name_lower) {
        score += SUBSTRING_SCORE;
    }

    score += COMMON_TERMS
        .iter()
        .filter(|term| input_lower.contains(*term) && name_lower.contains(*term))
        .count()
        * COMMON_TERM_SCORE;

    let length_diff = input_lower.len().abs_diff(name_lower.len());
    score += MAX_LENGTH_SCORE.saturating_sub(length_diff);

    score
}

/// Lower-cases, turns whitespace runs into single hyphens and drops every
/// character outside `[a-z0-9-]`.
///
/// # Examples
///
/// ```
/// use vads_docs_metadata::normalize_name;
///
/// assert_eq!(normalize_name("File input  multiple"), "file-input-multiple");
/// assert_eq!(normalize_name("Alert (expandable)"), "alert-expandable");
/// ```
#[must_use]
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
        .collect()
}

fn split_words(s: &str) -> Vec<String> {
    s.split(|c: char| c.is_whitespace() || c == '-')
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect()
}
