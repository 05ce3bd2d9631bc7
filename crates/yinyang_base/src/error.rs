//! Error types for chart construction and ruleset validation.

use thiserror::Error;

/// Errors from malformed chart input or an inconsistent ruleset.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum BaseError {
    /// Gender code other than 0 (female) or 1 (male).
    #[error("invalid gender code {0}: expected 0 (female) or 1 (male)")]
    InvalidGender(i64),
    /// Text is not a heavenly stem.
    #[error("unknown stem {0:?}")]
    UnknownStem(String),
    /// Text is not an earthly branch.
    #[error("unknown branch {0:?}")]
    UnknownBranch(String),
    /// Pillar or chart text could not be parsed.
    #[error("cannot parse pillars {0:?}: expected four stem-branch pairs such as \"甲子 丙寅 戊辰 庚申\"")]
    InvalidPillars(String),
    /// Ruleset profile name not recognised.
    #[error("unknown ruleset profile {0:?}: expected \"classic\" or \"simplified\"")]
    UnknownProfile(String),
    /// Ruleset parameters are inconsistent.
    #[error("invalid ruleset: {0}")]
    InvalidRuleset(String),
}
