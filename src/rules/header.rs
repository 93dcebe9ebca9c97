// SPDX-License-Identifier: MIT

//! Header line parsing.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for the header shape `prefix[component]: summary`.
    ///
    /// The character classes are load-bearing: the prefix and component
    /// are runs of word characters (no spaces), the component sits in
    /// square brackets directly after the prefix, and a single ": "
    /// separates them from the free-text summary.
    static ref HEADER_REGEX: Regex =
        Regex::new(r"^(?P<prefix>\w+)(?:\[(?P<component>\w+)\])?: (?P<summary>.*)$").unwrap();
}

/// The decomposed header of a commit message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderParts<'a> {
    /// Change classifier, e.g. "fix".
    pub prefix: &'a str,
    /// Optional sub-scope, brackets already stripped.
    pub component: Option<&'a str>,
    /// Free-text remainder after ": " (may be empty).
    pub summary: &'a str,
}

impl<'a> HeaderParts<'a> {
    /// Parse a header line, or `None` if it does not match the shape.
    pub fn parse(line: &'a str) -> Option<Self> {
        let captures = HEADER_REGEX.captures(line)?;

        Some(Self {
            prefix: captures.name("prefix").map(|m| m.as_str()).unwrap_or(""),
            component: captures.name("component").map(|m| m.as_str()),
            summary: captures.name("summary").map(|m| m.as_str()).unwrap_or(""),
        })
    }
}
