//! Link identifier registry and anchor slugs.
//!
//! The same link title can appear on several days or assignments, and
//! anchors derived from colliding titles would collide too. The
//! registry sees every link of one course in a fixed traversal order
//! and issues each a globally unique identifier, from which the
//! anchor slug is derived.

use std::collections::HashSet;

use crate::config::LinkEntry;

/// A registered hyperlink carrying its unique identifier and
/// document-safe anchor slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    /// Display text.
    pub title: String,

    /// Link target, opaque to the core.
    pub url: String,

    /// Nesting depth for renderer emphasis; 0 is top level.
    pub level: usize,

    /// Registry-assigned identifier, unique across the whole course.
    pub identifier: String,

    /// Anchor-safe form of the identifier. May be empty.
    pub slug: String,
}

/// Characters stripped from anchor slugs: structural or
/// escape-requiring in the target document formats.
const FORBIDDEN: &[char] = &[
    '#', '&', ':', '\'', '"', '/', '$', '%', '^', '(', ')', '’', '|', '@', '+', '\\', '<', '>',
    '?', '[', ']', '{', '}', ',', '.',
];

/// Derive an anchor-safe slug from an identifier.
///
/// One pass: spaces become hyphens before forbidden characters are
/// stripped, and a space-produced hyphen is dropped when the slug
/// already ends in one, so a stripped character sitting between two
/// spaces leaves a single hyphen rather than a pair. Hyphens written
/// in the identifier itself pass through untouched. The result is
/// empty when the identifier holds nothing else; renderers must
/// tolerate that.
pub fn anchor_slug(identifier: &str) -> String {
    let mut slug = String::with_capacity(identifier.len());
    for c in identifier.chars() {
        if c == ' ' {
            if !slug.ends_with('-') {
                slug.push('-');
            }
        } else if !FORBIDDEN.contains(&c) {
            slug.push(c);
        }
    }
    tracing::debug!(identifier = %identifier, slug = %slug, "derived anchor slug");
    slug
}

/// Issues unique link identifiers for one course build.
///
/// The issued set is append-only and local to a single build. A fresh
/// registry must be constructed per course so that identifiers never
/// depend on other courses processed in the same run.
#[derive(Debug, Default)]
pub struct LinkRegistry {
    issued: HashSet<String>,
}

impl LinkRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one link, assigning the first free identifier: the
    /// title itself on first occurrence, otherwise `{title}-{k}` for
    /// the smallest positive `k` not yet issued.
    pub fn register(&mut self, entry: LinkEntry) -> Link {
        let identifier = if self.issued.insert(entry.title.clone()) {
            entry.title.clone()
        } else {
            let mut ext = 1;
            loop {
                let candidate = format!("{}-{}", entry.title, ext);
                if self.issued.insert(candidate.clone()) {
                    break candidate;
                }
                ext += 1;
            }
        };
        let slug = anchor_slug(&identifier);

        Link {
            title: entry.title,
            url: entry.url,
            level: entry.level,
            identifier,
            slug,
        }
    }
}
