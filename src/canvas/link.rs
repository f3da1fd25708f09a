//! Parsing of the RFC 8288 `Link` header Canvas uses for pagination:
//!
//! `<https://host/api/v1/...&page=2>; rel="next", <https://host/...>; rel="last"`

use regex::Regex;
use std::sync::OnceLock;

fn entry_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<([^>]*)>([^<]*)").unwrap())
}

fn rel_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"(?i)\brel\s*=\s*"?([^";,]+)"?"#).unwrap())
}

/// Return the target of the first link whose relation list contains `rel`.
pub fn find_rel(header: &str, rel: &str) -> Option<String> {
    entry_re()
        .captures_iter(header)
        .find(|entry| {
            rel_re().captures(&entry[2]).is_some_and(|params| {
                params[1]
                    .split_whitespace()
                    .any(|value| value.eq_ignore_ascii_case(rel))
            })
        })
        .map(|entry| entry[1].trim().to_string())
        .filter(|url| !url.is_empty())
}

pub fn next_link(header: &str) -> Option<String> {
    find_rel(header, "next")
}
