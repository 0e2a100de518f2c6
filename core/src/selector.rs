//! Element selectors.
//!
//! A small subset of CSS selector syntax, enough to point an event at one
//! rendered element:
//!
//! - `input` - by tag
//! - `#todo-3` - by id
//! - `.toggle` - by class (several classes may be chained: `.a.b`)
//! - `li.completed` - tag and classes combined
//! - `.destroy[1]` - the second match in document order (default: the first)

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors produced while parsing a selector
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectorError {
    /// The selector string was empty
    #[error("empty selector")]
    Empty,

    /// A `#` or `.` was not followed by a name
    #[error("missing name after '{0}' in selector")]
    MissingName(char),

    /// The `[n]` suffix was malformed
    #[error("invalid index in selector: {0}")]
    InvalidIndex(String),

    /// A character that has no meaning in a selector
    #[error("unexpected character '{0}' in selector")]
    UnexpectedChar(char),
}

/// Identifies the n-th element (in document order) matching a tag/id/class pattern
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selector {
    /// Required tag name, if any
    pub tag: Option<String>,
    /// Required element id, if any
    pub id: Option<String>,
    /// Classes the element must all carry
    pub classes: Vec<String>,
    /// Which match to pick (0-based)
    pub index: usize,
}

impl Selector {
    /// Selects the first element with the given id
    #[must_use]
    pub fn id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    /// Selects the first element carrying the given class
    #[must_use]
    pub fn class(class: impl Into<String>) -> Self {
        Self {
            classes: vec![class.into()],
            ..Self::default()
        }
    }

    /// Selects the n-th match instead of the first
    #[must_use]
    pub const fn nth(mut self, index: usize) -> Self {
        self.index = index;
        self
    }

    /// Whether an element with these properties satisfies the pattern (ignores `index`)
    #[must_use]
    pub fn matches(&self, tag: &str, id: Option<&str>, classes: &[String]) -> bool {
        self.tag.as_deref().is_none_or(|t| t == tag)
            && self.id.as_deref().is_none_or(|wanted| id == Some(wanted))
            && self.classes.iter().all(|c| classes.contains(c))
    }
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_'
}

impl FromStr for Selector {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(SelectorError::Empty);
        }

        let (pattern, index) = match s.strip_suffix(']') {
            Some(rest) => {
                let (pattern, raw) = rest
                    .rsplit_once('[')
                    .ok_or_else(|| SelectorError::InvalidIndex(s.to_string()))?;
                let index = raw
                    .parse::<usize>()
                    .map_err(|_| SelectorError::InvalidIndex(raw.to_string()))?;
                (pattern, index)
            }
            None => (s, 0),
        };

        let mut selector = Self {
            index,
            ..Self::default()
        };
        let mut chars = pattern.chars().peekable();

        let tag: String = std::iter::from_fn(|| chars.next_if(|c| is_name_char(*c))).collect();
        if !tag.is_empty() {
            selector.tag = Some(tag);
        }

        while let Some(marker) = chars.next() {
            if marker != '#' && marker != '.' {
                return Err(SelectorError::UnexpectedChar(marker));
            }
            let name: String = std::iter::from_fn(|| chars.next_if(|c| is_name_char(*c))).collect();
            if name.is_empty() {
                return Err(SelectorError::MissingName(marker));
            }
            if marker == '#' {
                selector.id = Some(name);
            } else {
                selector.classes.push(name);
            }
        }

        if selector.tag.is_none() && selector.id.is_none() && selector.classes.is_empty() {
            return Err(SelectorError::Empty);
        }
        Ok(selector)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(tag) = &self.tag {
            f.write_str(tag)?;
        }
        if let Some(id) = &self.id {
            write!(f, "#{id}")?;
        }
        for class in &self.classes {
            write!(f, ".{class}")?;
        }
        if self.index > 0 {
            write!(f, "[{}]", self.index)?;
        }
        Ok(())
    }
}
