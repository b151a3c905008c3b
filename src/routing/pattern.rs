//! URL path patterns and parameter extraction
//!
//! This module handles the conversion of a navigated path into captured
//! parameters for a single route pattern. It's completely pure: no store,
//! no views, just string shape matching.
//!
//! ## Pattern syntax
//! - `/docs` — literal segments match byte-for-byte
//! - `/generate/:skeletonUrl` — `:name` captures exactly one segment,
//!   except in final position where it captures the whole remaining path
//!   (embedded URLs keep their slashes)
//! - `/home/:exec?/:skeletonUrl?` — `:name?` may be absent; a missing
//!   optional segment captures an explicit `None`, never an error

use thiserror::Error;

/// Pattern parsing errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatternError {
    #[error("route pattern must start with '/': {0:?}")]
    MissingLeadingSlash(String),

    #[error("route pattern {pattern:?} contains an empty segment")]
    EmptySegment { pattern: String },

    #[error("route pattern {pattern:?} contains a parameter with no name")]
    EmptyParamName { pattern: String },

    #[error("route pattern {pattern:?} places required segment {segment:?} after an optional one")]
    RequiredAfterOptional { pattern: String, segment: String },
}

/// One segment of a parsed pattern
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    /// Fixed text that must match exactly
    Literal(String),
    /// Named capture; optional captures may be absent from the path
    Param { name: String, optional: bool },
}

/// Parameters captured while matching a path against a pattern
///
/// Every parameter the pattern declares is present as a key; optional
/// segments missing from the path carry `None`. Values are plain strings;
/// the mounted view does any further parsing (see [`RouteParams::flag`]).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams {
    captures: Vec<(String, Option<String>)>,
}

impl RouteParams {
    /// Captured value for `name`, flattening absent-optional to `None`
    pub fn get(&self, name: &str) -> Option<&str> {
        self.captures
            .iter()
            .find(|(key, _)| key == name)
            .and_then(|(_, value)| value.as_deref())
    }

    /// Whether the matched pattern declares a parameter called `name`,
    /// regardless of whether the path populated it
    pub fn declares(&self, name: &str) -> bool {
        self.captures.iter().any(|(key, _)| key == name)
    }

    /// Boolean coercion of a captured segment: only the literal string
    /// `"true"` reads as true, anything else (including absence) as false
    pub fn flag(&self, name: &str) -> bool {
        self.get(name) == Some("true")
    }

    pub fn is_empty(&self) -> bool {
        self.captures.is_empty()
    }

    pub fn len(&self) -> usize {
        self.captures.len()
    }

    /// Iterates captures in pattern declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.captures
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_deref()))
    }

    fn push(&mut self, name: &str, value: Option<String>) {
        self.captures.push((name.to_string(), value));
    }
}

/// A parsed, matchable URL path pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    raw: String,
    segments: Vec<Segment>,
}

impl RoutePattern {
    /// Parses a pattern string
    ///
    /// Required segments may not follow optional ones: once a segment can
    /// be absent, everything after it could never be positioned reliably.
    pub fn parse(pattern: &str) -> Result<Self, PatternError> {
        let Some(rest) = pattern.strip_prefix('/') else {
            return Err(PatternError::MissingLeadingSlash(pattern.to_string()));
        };

        let mut segments = Vec::new();
        let mut seen_optional = false;

        // "/" parses to the empty segment list and matches only the root
        if !rest.is_empty() {
            for piece in rest.split('/') {
                if piece.is_empty() {
                    return Err(PatternError::EmptySegment {
                        pattern: pattern.to_string(),
                    });
                }

                let segment = match piece.strip_prefix(':') {
                    Some(param) => {
                        let (name, optional) = match param.strip_suffix('?') {
                            Some(name) => (name, true),
                            None => (param, false),
                        };
                        if name.is_empty() {
                            return Err(PatternError::EmptyParamName {
                                pattern: pattern.to_string(),
                            });
                        }
                        Segment::Param {
                            name: name.to_string(),
                            optional,
                        }
                    }
                    None => Segment::Literal(piece.to_string()),
                };

                let required = !matches!(segment, Segment::Param { optional: true, .. });
                if required && seen_optional {
                    return Err(PatternError::RequiredAfterOptional {
                        pattern: pattern.to_string(),
                        segment: piece.to_string(),
                    });
                }
                seen_optional |= !required;

                segments.push(segment);
            }
        }

        Ok(Self {
            raw: pattern.to_string(),
            segments,
        })
    }

    /// The pattern string this was parsed from
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Tests whether `path` has this pattern's shape
    ///
    /// Returns the captured parameters on a match, `None` otherwise. A
    /// single trailing slash on the path is tolerated.
    pub fn matches(&self, path: &str) -> Option<RouteParams> {
        let pieces = split_path(path)?;

        let mut params = RouteParams::default();
        let mut cursor = 0;

        for (index, segment) in self.segments.iter().enumerate() {
            let last = index + 1 == self.segments.len();
            match segment {
                Segment::Literal(literal) => {
                    if pieces.get(cursor) != Some(&literal.as_str()) {
                        return None;
                    }
                    cursor += 1;
                }
                Segment::Param { name, optional } => {
                    if cursor < pieces.len() {
                        // A parameter in final position swallows the rest
                        // of the path, so embedded URLs survive intact.
                        let value = if last {
                            pieces[cursor..].join("/")
                        } else {
                            pieces[cursor].to_string()
                        };
                        cursor = if last { pieces.len() } else { cursor + 1 };
                        params.push(name, Some(value));
                    } else if *optional {
                        params.push(name, None);
                    } else {
                        return None;
                    }
                }
            }
        }

        if cursor != pieces.len() {
            return None;
        }
        Some(params)
    }
}

/// Splits a navigated path into segments, or `None` for paths that cannot
/// match any pattern (no leading slash)
fn split_path(path: &str) -> Option<Vec<&str>> {
    let rest = path.strip_prefix('/')?;
    if rest.is_empty() {
        return Some(Vec::new());
    }

    let mut pieces: Vec<&str> = rest.split('/').collect();
    // Tolerate exactly one trailing slash, e.g. "/cli/"
    if pieces.last() == Some(&"") {
        pieces.pop();
    }
    Some(pieces)
}
