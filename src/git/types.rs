//! git::types
//!
//! Strong types for Git identifiers.
//!
//! # Types
//!
//! - [`Oid`] - Git object identifier (SHA)
//! - [`BranchName`] - Validated Git branch name
//!
//! # Validation
//!
//! These types enforce validity at construction time. Invalid values
//! cannot be represented, so everything downstream of the Git interface
//! can assume identifiers are well-formed.
//!
//! # Examples
//!
//! ```
//! use gitform::git::types::{BranchName, Oid};
//!
//! let branch = BranchName::new("feature/my-branch").unwrap();
//! let oid = Oid::new("abc123def4567890abc123def4567890abc12345").unwrap();
//! assert_eq!(oid.short(7), "abc123d");
//!
//! assert!(BranchName::new("invalid..name").is_err());
//! assert!(Oid::new("not-a-sha").is_err());
//! ```

use thiserror::Error;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid branch name: {0}")]
    InvalidBranchName(String),

    #[error("invalid object id: {0}")]
    InvalidOid(String),
}

/// A validated Git object id.
///
/// Normalized to lowercase hex. SHA-1 (40 chars) and SHA-256 (64 chars)
/// are both accepted.
///
/// # Example
///
/// ```
/// use gitform::git::types::Oid;
///
/// let oid = Oid::new("ABC123DEF4567890ABC123DEF4567890ABC12345").unwrap();
/// assert_eq!(oid.short(4), "abc1");
/// assert_eq!(oid.as_str().len(), 40);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Oid(String);

impl Oid {
    /// Create a new validated object id.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidOid` if the string is not a valid hex OID.
    pub fn new(oid: impl Into<String>) -> Result<Self, TypeError> {
        let oid = oid.into().to_ascii_lowercase();
        Self::validate(&oid)?;
        Ok(Self(oid))
    }

    /// Validate an object id.
    fn validate(oid: &str) -> Result<(), TypeError> {
        // SHA-1 is 40 hex chars, SHA-256 is 64
        if oid.len() != 40 && oid.len() != 64 {
            return Err(TypeError::InvalidOid(format!(
                "expected 40 or 64 hex characters, got {}",
                oid.len()
            )));
        }
        if !oid.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(TypeError::InvalidOid(
                "object id must be hexadecimal".into(),
            ));
        }
        Ok(())
    }

    /// Get an abbreviated form of the OID.
    ///
    /// Returns the first `len` characters. If `len` exceeds the OID length,
    /// returns the full OID.
    pub fn short(&self, len: usize) -> &str {
        let end = len.min(self.0.len());
        &self.0[..end]
    }

    /// Get the object id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Oid {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Oid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated Git branch name.
///
/// Branch names must conform to Git's refname rules (see
/// `git check-ref-format`):
/// - Cannot be empty
/// - Cannot be exactly `@`
/// - Cannot start with `-`, end with `/`, or contain `..`, `@{`, or `//`
/// - No component can start with `.` or end with `.lock`
/// - Cannot contain spaces, `~`, `^`, `:`, `\`, `?`, `*`, `[`, or ASCII
///   control characters
///
/// # Example
///
/// ```
/// use gitform::git::types::BranchName;
///
/// let name = BranchName::new("feature/my-branch").unwrap();
/// assert_eq!(name.as_str(), "feature/my-branch");
///
/// assert!(BranchName::new("").is_err());
/// assert!(BranchName::new(".hidden").is_err());
/// assert!(BranchName::new("branch.lock").is_err());
/// assert!(BranchName::new("has space").is_err());
/// assert!(BranchName::new("@").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BranchName(String);

impl BranchName {
    /// Create a new validated branch name.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidBranchName` if the name violates Git's
    /// refname rules.
    pub fn new(name: impl Into<String>) -> Result<Self, TypeError> {
        let name = name.into();
        Self::validate(&name)?;
        Ok(Self(name))
    }

    /// Validate a branch name against Git's refname rules.
    fn validate(name: &str) -> Result<(), TypeError> {
        if name.is_empty() {
            return Err(TypeError::InvalidBranchName(
                "branch name cannot be empty".into(),
            ));
        }

        // Reserved shorthand for HEAD
        if name == "@" {
            return Err(TypeError::InvalidBranchName(
                "branch name cannot be '@' (reserved)".into(),
            ));
        }

        if name.starts_with('-') {
            return Err(TypeError::InvalidBranchName(
                "branch name cannot start with '-'".into(),
            ));
        }
        if name.ends_with('/') {
            return Err(TypeError::InvalidBranchName(
                "branch name cannot end with '/'".into(),
            ));
        }
        if name.contains("..") {
            return Err(TypeError::InvalidBranchName(
                "branch name cannot contain '..'".into(),
            ));
        }
        if name.contains("@{") {
            return Err(TypeError::InvalidBranchName(
                "branch name cannot contain '@{'".into(),
            ));
        }
        if name.contains("//") {
            return Err(TypeError::InvalidBranchName(
                "branch name cannot contain '//'".into(),
            ));
        }

        for component in name.split('/') {
            validate_refname_component(component)
                .map_err(TypeError::InvalidBranchName)?;
        }

        Ok(())
    }

    /// Get the branch name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for BranchName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BranchName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validate one slash-separated component of a refname.
///
/// Shared by every identifier that participates in a ref, so the character
/// rules live in exactly one place.
fn validate_refname_component(component: &str) -> Result<(), String> {
    if component.is_empty() {
        return Err("refname component cannot be empty".into());
    }
    if component.starts_with('.') {
        return Err(format!("component '{}' cannot start with '.'", component));
    }
    if component.ends_with(".lock") {
        return Err(format!("component '{}' cannot end with '.lock'", component));
    }

    for c in component.chars() {
        if c.is_ascii_control() {
            return Err("refname cannot contain control characters".into());
        }
        if matches!(c, ' ' | '~' | '^' | ':' | '\\' | '?' | '*' | '[') {
            return Err(format!("refname cannot contain '{}'", c));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oid_normalizes_to_lowercase() {
        let oid = Oid::new("ABC123DEF4567890ABC123DEF4567890ABC12345").unwrap();
        assert_eq!(oid.as_str(), "abc123def4567890abc123def4567890abc12345");
    }

    #[test]
    fn oid_accepts_sha256_length() {
        let hex64 = "a".repeat(64);
        assert!(Oid::new(hex64).is_ok());
    }

    #[test]
    fn oid_rejects_bad_lengths_and_characters() {
        assert!(Oid::new("abc123").is_err());
        assert!(Oid::new("g".repeat(40)).is_err());
        assert!(Oid::new("").is_err());
    }

    #[test]
    fn oid_short_clamps_to_length() {
        let oid = Oid::new("abc123def4567890abc123def4567890abc12345").unwrap();
        assert_eq!(oid.short(100), oid.as_str());
    }

    #[test]
    fn branch_name_accepts_common_forms() {
        for name in ["main", "feature/one", "user@feature", "v1.2.3", "a/b/c"] {
            assert!(BranchName::new(name).is_ok(), "{} should be valid", name);
        }
    }

    #[test]
    fn branch_name_rejects_refname_violations() {
        for name in [
            "",
            "@",
            "-leading-dash",
            "trailing/",
            "a..b",
            "a@{b",
            "a//b",
            ".hidden",
            "nested/.hidden",
            "branch.lock",
            "nested/branch.lock",
            "has space",
            "has~tilde",
            "has^caret",
            "has:colon",
            "has?question",
            "has*star",
            "has[bracket",
        ] {
            assert!(BranchName::new(name).is_err(), "{} should be invalid", name);
        }
    }
}
