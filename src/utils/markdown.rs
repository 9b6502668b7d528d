//! Markdown text utilities.
//!
//! This module contains a small line classifier used to style the
//! description preview pane. It recognizes block-level markdown only;
//! inline emphasis is left as plain text.

use log::*;
use regex::Regex;

/// Block-level classification of a markdown line.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum LineKind {
    Heading(usize),
    Bullet,
    Ordered,
    Quote,
    CodeFence,
    Text,
}

/// Classify a single line of markdown.
///
pub fn classify_line(line: &str) -> LineKind {
    let patterns: [(&str, fn(&regex::Captures) -> LineKind); 5] = [
        (r"^(#{1,6})\s+\S", |caps| {
            LineKind::Heading(caps.get(1).map(|m| m.as_str().len()).unwrap_or(1))
        }),
        (r"^\s*```", |_| LineKind::CodeFence),
        (r"^\s*[-*+]\s+\S", |_| LineKind::Bullet),
        (r"^\s*\d+\.\s+\S", |_| LineKind::Ordered),
        (r"^\s*>", |_| LineKind::Quote),
    ];

    for (pattern, kind) in patterns.iter() {
        let re = match Regex::new(pattern) {
            Ok(r) => r,
            Err(e) => {
                warn!("Failed to compile regex pattern '{}': {}", pattern, e);
                continue;
            }
        };
        if let Some(caps) = re.captures(line) {
            return kind(&caps);
        }
    }
    LineKind::Text
}
