//! Escaping of caller input that ends up in request paths.
use std::fmt::{self, Display};

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

// Matches what the API expects from escaped path segments: everything
// outside the RFC 3986 unreserved set (and a few harmless sub-delims) is
// encoded, slashes included.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}')
    .add(b'+')
    .add(b';')
    .add(b',');

/// Wrapper that escapes its argument as a single URL path segment.
///
/// ```
/// use pixeldrain::path::PathArg;
///
/// assert_eq!(PathArg("me/my bucket/a?.txt").to_string(), "me%2Fmy%20bucket%2Fa%3F.txt");
/// assert_eq!(PathArg("plain-id_1").to_string(), "plain-id_1");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PathArg<A: Display>(pub A);

impl<A: Display> Display for PathArg<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        utf8_percent_encode(&self.0.to_string(), PATH_SEGMENT).fmt(f)
    }
}
