//! Template matching logic.
//!
//! # Responsibilities
//! - Walk a template and a request path segment by segment
//! - Bind placeholder names to the request's segment text
//!
//! # Design Decisions
//! - Each candidate gets its own `Params`; a failed walk drops it whole
//! - Segment counts must be equal; callers filter on that before walking
//! - Placeholders match any text, including the empty segment

use crate::routing::path::{PathSyntax, Segment};
use crate::routing::Params;

/// A template segment the walk cannot interpret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum WalkError {
    /// The placeholder pattern matched but captured no name.
    UnnamedParam { segment: String },
    /// The template and path disagree on segment count.
    LengthMismatch { template: usize, path: usize },
}

impl std::fmt::Display for WalkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WalkError::UnnamedParam { segment } => {
                write!(f, "placeholder segment `{}` captured no name", segment)
            }
            WalkError::LengthMismatch { template, path } => {
                write!(f, "template has {} segments, path has {}", template, path)
            }
        }
    }
}

/// Match `path` against `template`, both already normalized.
///
/// Returns `Ok(Some(params))` on a full match and `Ok(None)` as soon as a
/// literal segment differs.
pub(crate) fn match_template(
    syntax: &PathSyntax,
    template: &str,
    path: &str,
) -> Result<Option<Params>, WalkError> {
    let template_segments: Vec<&str> = syntax.split(template).collect();
    let path_segments: Vec<&str> = syntax.split(path).collect();

    if template_segments.len() != path_segments.len() {
        return Err(WalkError::LengthMismatch {
            template: template_segments.len(),
            path: path_segments.len(),
        });
    }

    let mut params = Params::new();

    for (expected, actual) in template_segments.into_iter().zip(path_segments) {
        match syntax.classify(expected) {
            Segment::Param(Some(name)) => params.insert(name, actual),
            Segment::Param(None) => {
                return Err(WalkError::UnnamedParam {
                    segment: expected.to_string(),
                })
            }
            Segment::Literal(literal) if literal == actual => {}
            Segment::Literal(_) => return Ok(None),
        }
    }

    Ok(Some(params))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binds_every_placeholder() {
        let syntax = PathSyntax::default();
        let params = match_template(&syntax, "/users/{id}/posts/{postId}", "/users/7/posts/99")
            .unwrap()
            .unwrap();

        assert_eq!(params.len(), 2);
        assert_eq!(params.get("id"), Some("7"));
        assert_eq!(params.get("postId"), Some("99"));
    }

    #[test]
    fn test_literal_mismatch_is_no_match() {
        let syntax = PathSyntax::default();
        assert_eq!(match_template(&syntax, "/users/{id}/posts", "/users/7/comments"), Ok(None));
    }

    #[test]
    fn test_pure_literal_template() {
        let syntax = PathSyntax::default();
        let params = match_template(&syntax, "/about", "/about").unwrap().unwrap();
        assert!(params.is_empty());
    }

    #[test]
    fn test_length_mismatch_is_an_error() {
        let syntax = PathSyntax::default();
        assert_eq!(
            match_template(&syntax, "/a/b", "/a/b/c"),
            Err(WalkError::LengthMismatch { template: 3, path: 4 })
        );
    }

    #[test]
    fn test_unnamed_placeholder_is_an_error() {
        let syntax = PathSyntax::new('/', r"\{(\w+)?\}").unwrap();
        assert_eq!(
            match_template(&syntax, "/items/{}", "/items/3"),
            Err(WalkError::UnnamedParam { segment: "{}".into() })
        );
    }

    #[test]
    fn test_custom_syntax() {
        let syntax = PathSyntax::new('.', r"^:(\w+)$").unwrap();
        let params = match_template(&syntax, "orders.:id", "orders.12").unwrap().unwrap();
        assert_eq!(params.get("id"), Some("12"));
    }
}
