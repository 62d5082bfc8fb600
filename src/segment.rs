/// One `/`-delimited component of a route pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Segment<'a> {
    /// Matched by exact string equality.
    Literal(&'a str),

    /// `:name`; matches any single segment.
    Param(&'a str),

    /// `*name` or `*`; matches all remaining segments.
    Wildcard(&'a str),
}

impl<'a> Segment<'a> {
    /// Classifies a single pattern segment by its sigil.
    pub(crate) fn parse(segment: &'a str) -> Self {
        if let Some(name) = segment.strip_prefix(':') {
            Segment::Param(name)
        } else if let Some(name) = segment.strip_prefix('*') {
            Segment::Wildcard(name)
        } else {
            Segment::Literal(segment)
        }
    }
}

/// Strips leading slashes.
///
/// An empty result means the route has been fully consumed.
#[inline]
pub(crate) fn normalize(route: &str) -> &str {
    route.trim_start_matches('/')
}

/// Splits a normalized route into its first segment and the rest.
///
/// `"foo/bar/baz"` becomes `("foo", "bar/baz")`; a route without a slash is all head.
#[inline]
pub(crate) fn split(route: &str) -> (&str, &str) {
    match route.find('/') {
        Some(idx) => (&route[..idx], &route[idx + 1..]),
        None => (route, ""),
    }
}
