use std::sync::LazyLock;

use regex::Regex;

/// Issue key pattern: uppercase project letters, a hyphen, then the number.
static ISSUE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Z]+-\d+").expect("issue pattern is a valid regex")
});

/// An issue key such as `PROJ-123`, copied verbatim out of a branch name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IssueId(pub(crate) String);

impl IssueId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for IssueId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for IssueId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl std::fmt::Display for IssueId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Find the issue key in a branch name.
///
/// The pattern is unanchored and the leftmost match wins, so
/// `bugfix/AB-1/AB-2` yields `AB-1`. Returns `None` when the branch carries
/// no key, including for the empty string.
///
/// # Examples
///
/// ```
/// use branch_issue_tag::issue::extract_issue;
///
/// let issue = extract_issue("feature/PROJ-42-login").unwrap();
/// assert_eq!(issue.as_str(), "PROJ-42");
/// assert!(extract_issue("main").is_none());
/// ```
pub fn extract_issue(branch: &str) -> Option<IssueId> {
    ISSUE_PATTERN
        .find(branch)
        .map(|m| IssueId(m.as_str().to_string()))
}
