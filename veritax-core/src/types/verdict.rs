/// Match and verdict types produced by name resolution and classification
use serde::{Deserialize, Serialize};
use std::fmt;

use super::taxonomy::TaxonId;

/// Which tier of the resolution policy produced a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchTier {
    /// Exact, case-sensitive scientific name
    Exact,
    /// Case-insensitive match after whitespace normalization
    Normalized,
    /// Exact, case-sensitive synonym
    Synonym,
    /// Substring of exactly one scientific name
    Substring,
    /// No match
    None,
}

impl MatchTier {
    pub fn is_match(&self) -> bool {
        !matches!(self, MatchTier::None)
    }
}

/// Outcome of resolving one input name.
///
/// Named fields rather than a positional tuple, so call sites cannot
/// confuse the resolved name with the input or misread the flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// The name as given
    pub input: String,
    /// Matched taxon, if any
    pub taxid: Option<TaxonId>,
    /// Scientific name the match resolved to, if any
    pub scientific_name: Option<String>,
    /// Tier that produced the match
    pub tier: MatchTier,
    /// Whether the resolved name should silently replace the input
    pub auto_replaced: bool,
}

impl MatchResult {
    /// A non-match for the given input
    pub fn none(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            taxid: None,
            scientific_name: None,
            tier: MatchTier::None,
            auto_replaced: false,
        }
    }
}

/// Classification outcome for one input name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Exact scientific name of a virus
    Confirmed,
    /// Normalized match; the resolved name replaces the input
    AutoCorrected,
    /// Synonym or unique-substring match; a correction is suggested
    Suggested,
    /// Resolved to a taxon outside the viral subtree
    NotAVirus,
    /// Not found in the taxonomy at all
    Unresolved,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Outcome::Confirmed => "confirmed",
            Outcome::AutoCorrected => "auto-corrected",
            Outcome::Suggested => "suggested",
            Outcome::NotAVirus => "not-a-virus",
            Outcome::Unresolved => "unresolved",
        };
        write!(f, "{}", s)
    }
}

/// Comment attached to taxa that resolved outside the viral subtree
pub const COMMENT_NOT_A_VIRUS: &str = "Not the name of a virus";
/// Comment attached to names with no match at any tier
pub const COMMENT_NOT_FOUND: &str = "Not found in NCBI Taxonomy";

/// Validation verdict for one input name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub outcome: Outcome,
    /// Explanatory comment; `None` for a confirmed exact match
    pub comment: Option<String>,
    /// Replacement name, populated only for auto-corrected verdicts
    pub corrected_name: Option<String>,
}

impl Verdict {
    pub fn confirmed() -> Self {
        Self {
            outcome: Outcome::Confirmed,
            comment: None,
            corrected_name: None,
        }
    }

    pub fn auto_corrected(input: &str, resolved: &str) -> Self {
        Self {
            outcome: Outcome::AutoCorrected,
            comment: Some(format!(
                "Automatically replaced \"{}\" with \"{}\".",
                input, resolved
            )),
            corrected_name: Some(resolved.to_string()),
        }
    }

    pub fn suggested(resolved: &str) -> Self {
        Self {
            outcome: Outcome::Suggested,
            comment: Some(format!("Suggestion: {}", resolved)),
            corrected_name: None,
        }
    }

    pub fn not_a_virus() -> Self {
        Self {
            outcome: Outcome::NotAVirus,
            comment: Some(COMMENT_NOT_A_VIRUS.to_string()),
            corrected_name: None,
        }
    }

    pub fn unresolved() -> Self {
        Self {
            outcome: Outcome::Unresolved,
            comment: Some(COMMENT_NOT_FOUND.to_string()),
            corrected_name: None,
        }
    }

    /// Two verdicts agree when their comments are equal. Two confirmed
    /// verdicts both carry no comment, so they always agree.
    pub fn matches(&self, other: &Verdict) -> bool {
        self.comment == other.comment
    }

    /// Comment text for report rendering, empty when there is none
    pub fn comment_text(&self) -> &str {
        self.comment.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_corrected_comment_quotes_both_names() {
        let verdict = Verdict::auto_corrected("virus x", "Virus X");
        assert_eq!(
            verdict.comment.as_deref(),
            Some("Automatically replaced \"virus x\" with \"Virus X\".")
        );
        assert_eq!(verdict.corrected_name.as_deref(), Some("Virus X"));
    }

    #[test]
    fn test_only_auto_corrected_populates_corrected_name() {
        assert_eq!(Verdict::confirmed().corrected_name, None);
        assert_eq!(Verdict::suggested("Virus X").corrected_name, None);
        assert_eq!(Verdict::not_a_virus().corrected_name, None);
        assert_eq!(Verdict::unresolved().corrected_name, None);
    }

    #[test]
    fn test_confirmed_verdicts_always_match() {
        // Confirmed carries no comment, so two confirmed verdicts on
        // different inputs still compare equal.
        assert!(Verdict::confirmed().matches(&Verdict::confirmed()));
    }

    #[test]
    fn test_differing_comments_do_not_match() {
        assert!(!Verdict::not_a_virus().matches(&Verdict::unresolved()));
        assert!(!Verdict::confirmed().matches(&Verdict::suggested("Virus X")));
        assert!(Verdict::suggested("Virus X").matches(&Verdict::suggested("Virus X")));
    }

    #[test]
    fn test_tier_is_match() {
        assert!(MatchTier::Exact.is_match());
        assert!(MatchTier::Substring.is_match());
        assert!(!MatchTier::None.is_match());
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(Outcome::AutoCorrected.to_string(), "auto-corrected");
        assert_eq!(Outcome::NotAVirus.to_string(), "not-a-virus");
    }
}
