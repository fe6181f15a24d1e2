//! Path normalization and segment classification.
//!
//! # Responsibilities
//! - Normalize raw paths before storage and lookup
//! - Split paths into delimiter-separated segments
//! - Recognize parameter placeholders (`{name}` by default)
//! - Compare the shapes of two templates for conflict detection
//!
//! # Design Decisions
//! - Delimiter and placeholder pattern are overridable per router
//! - The placeholder pattern is unanchored: any segment it matches is a parameter

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::RouterConfig;
use crate::routing::RouteError;

/// Default segment delimiter.
pub const DEFAULT_DELIMITER: char = '/';

/// Default placeholder pattern; the single group captures the parameter name.
pub const DEFAULT_PARAMETER_PATTERN: &str = r"\{(.*)\}";

static DEFAULT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(DEFAULT_PARAMETER_PATTERN).expect("default parameter pattern is valid")
});

/// Normalize `path` using `delimiter`.
///
/// Whitespace is removed, trailing delimiters are stripped, and an empty
/// result becomes the delimiter itself. The result is a fixed point:
/// normalizing it again returns it unchanged.
pub fn normalize(path: &str, delimiter: char) -> String {
    let compact: String = path.chars().filter(|c| !c.is_whitespace()).collect();
    let trimmed = compact.trim_end_matches(delimiter);

    if trimmed.is_empty() {
        delimiter.to_string()
    } else {
        trimmed.to_string()
    }
}

/// One segment of a route template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Matches only the identical text.
    Literal(&'a str),
    /// Binds whatever text occupies this position. `None` when the pattern
    /// matched but its capture group did not participate.
    Param(Option<&'a str>),
}

/// Delimiter and placeholder pattern used by a router.
#[derive(Debug, Clone)]
pub struct PathSyntax {
    delimiter: char,
    pattern: Regex,
}

impl Default for PathSyntax {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            pattern: DEFAULT_PATTERN.clone(),
        }
    }
}

impl PathSyntax {
    /// Build a syntax from a delimiter and a placeholder pattern.
    ///
    /// The pattern must compile and contain exactly one capture group.
    pub fn new(delimiter: char, pattern: &str) -> Result<Self, RouteError> {
        if delimiter.is_whitespace() {
            return Err(RouteError::InvalidDelimiter(delimiter));
        }

        let regex = Regex::new(pattern).map_err(|source| RouteError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;

        // captures_len counts the implicit whole-match group
        let groups = regex.captures_len() - 1;
        if groups != 1 {
            return Err(RouteError::PatternGroups {
                pattern: pattern.to_string(),
                groups,
            });
        }

        Ok(Self {
            delimiter,
            pattern: regex,
        })
    }

    pub fn from_config(config: &RouterConfig) -> Result<Self, RouteError> {
        Self::new(config.delimiter, &config.parameter_pattern)
    }

    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn normalize(&self, path: &str) -> String {
        normalize(path, self.delimiter)
    }

    /// Split a normalized path into its raw segments.
    pub fn split<'a>(&self, path: &'a str) -> impl Iterator<Item = &'a str> {
        path.split(self.delimiter)
    }

    pub fn segment_count(&self, path: &str) -> usize {
        self.split(path).count()
    }

    /// Classify a template segment.
    pub fn classify<'a>(&self, segment: &'a str) -> Segment<'a> {
        match self.pattern.captures(segment) {
            Some(captures) => Segment::Param(captures.get(1).map(|name| name.as_str())),
            None => Segment::Literal(segment),
        }
    }

    pub fn is_param(&self, segment: &str) -> bool {
        self.pattern.is_match(segment)
    }

    /// True when two normalized templates have the same shape.
    ///
    /// Shapes are equal when both have the same segment count and every
    /// position holds either two identical literals or two placeholders.
    /// Placeholder names are ignored.
    pub fn same_shape(&self, a: &str, b: &str) -> bool {
        if self.segment_count(a) != self.segment_count(b) {
            return false;
        }

        self.split(a).zip(self.split(b)).all(|(left, right)| {
            match (self.is_param(left), self.is_param(right)) {
                (true, true) => true,
                (false, false) => left == right,
                _ => false,
            }
        })
    }
}
