use regex::Regex;

use crate::Result;

/// Pattern extracting a username from a repository name.
///
/// The username is the first capture group. Patterns with no group or with
/// more than one group never yield a username.
#[derive(Debug, Clone)]
pub struct UsernamePattern {
    regex: Regex,
}

impl UsernamePattern {
    /// Compile a pattern.
    pub fn new(pattern: &str) -> Result<Self> {
        Ok(Self {
            regex: Regex::new(pattern)?,
        })
    }

    /// Extract the username from a repository name.
    pub fn extract(&self, repository_name: &str) -> Option<String> {
        let captures = self.regex.captures(repository_name)?;
        if captures.len() != 2 {
            return None;
        }

        captures.get(1).map(|m| m.as_str().to_owned())
    }

    /// Source pattern.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}
