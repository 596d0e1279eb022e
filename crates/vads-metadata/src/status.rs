//! Component status rules.
//!
//! Status is derived from maturity metadata by an ordered rule list: the
//! category is consulted before the level, so a `caution` category always
//! yields `UseWithCaution` regardless of level.

use vads_docs_core::{ComponentStatus, MaturityCategory, MaturityLevel};

/// Derives the component status from parsed maturity metadata.
///
/// # Examples
///
/// ```
/// use vads_docs_core::{ComponentStatus, MaturityCategory, MaturityLevel};
/// use vads_docs_metadata::determine_component_status;
///
/// let status = determine_component_status(MaturityCategory::Caution, MaturityLevel::BestPractice);
/// assert_eq!(status, ComponentStatus::UseWithCaution);
/// ```
#[must_use]
pub const fn determine_component_status(
    category: MaturityCategory,
    level: MaturityLevel,
) -> ComponentStatus {
    match (category, level) {
        (MaturityCategory::Caution, _) => ComponentStatus::UseWithCaution,
        (MaturityCategory::DontUse, _) => ComponentStatus::Deprecated,
        (_, MaturityLevel::BestPractice) => ComponentStatus::Recommended,
        (_, MaturityLevel::Deployed) => ComponentStatus::Stable,
        (_, MaturityLevel::Candidate) => ComponentStatus::Experimental,
        (_, MaturityLevel::AvailableWithIssues) => ComponentStatus::UseWithCaution,
        (_, MaturityLevel::Unknown) => ComponentStatus::Unknown,
    }
}

/// Derives the component status from raw tag text.
///
/// # Examples
///
/// ```
/// use vads_docs_core::ComponentStatus;
/// use vads_docs_metadata::determine_component_status_from_tags;
///
/// assert_eq!(
///     determine_component_status_from_tags("caution", "best_practice"),
///     ComponentStatus::UseWithCaution
/// );
/// ```
#[must_use]
pub fn determine_component_status_from_tags(category: &str, level: &str) -> ComponentStatus {
    determine_component_status(MaturityCategory::parse(category), MaturityLevel::parse(level))
}

/// Returns the recommendation text shown alongside a status.
#[must_use]
pub const fn recommendation_for(status: ComponentStatus) -> &'static str {
    match status {
        ComponentStatus::Recommended => {
            "Recommended: this component follows best practices and is preferred for new work."
        }
        ComponentStatus::Stable => {
            "Stable: this component is deployed in production and safe to use."
        }
        ComponentStatus::Experimental => {
            "Experimental: this component is a candidate and its API may change."
        }
        ComponentStatus::UseWithCaution => {
            "Use with caution: review the design system guidance before adopting this component."
        }
        ComponentStatus::Deprecated => {
            "Deprecated: do not use this component in new work; choose an alternative."
        }
        ComponentStatus::Unknown => {
            "Status unknown: maturity metadata is missing or unrecognized."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_overrides_level() {
        assert_eq!(
            determine_component_status_from_tags("caution", "best_practice"),
            ComponentStatus::UseWithCaution
        );
        assert_eq!(
            determine_component_status_from_tags("dont_use", "deployed"),
            ComponentStatus::Deprecated
        );
    }

    #[test]
    fn test_level_decides_for_use_category() {
        assert_eq!(
            determine_component_status_from_tags("use", "best_practice"),
            ComponentStatus::Recommended
        );
        assert_eq!(
            determine_component_status_from_tags("use", "deployed"),
            ComponentStatus::Stable
        );
        assert_eq!(
            determine_component_status_from_tags("use", "candidate"),
            ComponentStatus::Experimental
        );
        assert_eq!(
            determine_component_status_from_tags("use", "available_with_issues"),
            ComponentStatus::UseWithCaution
        );
    }

    #[test]
    fn test_unknown_metadata() {
        assert_eq!(
            determine_component_status_from_tags("use", "someday"),
            ComponentStatus::Unknown
        );
        assert_eq!(
            determine_component_status_from_tags("whatever", "deployed"),
            ComponentStatus::Stable
        );
    }

    #[test]
    fn test_recommendation_mentions_status() {
        assert!(recommendation_for(ComponentStatus::Recommended).starts_with("Recommended"));
        assert!(recommendation_for(ComponentStatus::Deprecated).contains("do not use"));
    }
}
