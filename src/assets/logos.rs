//! Tiered logo lookup.
//!
//! A display name is matched against an [`AssetIndex`] in four tiers, first
//! success wins:
//!
//! 1. exact key
//! 2. spelling variants (` State` / ` University` removed, then appended)
//! 3. case-insensitive substring in either direction, scanning keys in
//!    insertion order
//! 4. the fallback asset
//!
//! The substring tier depends on index order: `"Iowa"` is tried before
//! `"Iowa State"` only because it was inserted first. It can be turned off
//! with [`SubstringMatching::Disabled`].

use super::index::AssetIndex;
use crate::constants::assets::DEFAULT_SCHOOL_LOGO;
use crate::data_fetcher::names::canonicalize;
use std::fmt;
use tracing::debug;

/// Which tier produced a resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchTier {
    Exact,
    Variant,
    Substring,
    Fallback,
}

impl fmt::Display for MatchTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MatchTier::Exact => "exact",
            MatchTier::Variant => "variant",
            MatchTier::Substring => "substring",
            MatchTier::Fallback => "fallback",
        };
        write!(f, "{label}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubstringMatching {
    /// First key in insertion order that matches wins
    #[default]
    InsertionOrder,
    Disabled,
}

/// A resolved asset and how it was found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution<'a> {
    pub uri: &'a str,
    pub tier: MatchTier,
    /// Index key that matched, `None` for the fallback
    pub matched_key: Option<&'a str>,
}

/// Spelling variants tried after the exact lookup, in order
fn variants(name: &str) -> [String; 4] {
    [
        name.replacen(" State", "", 1),
        name.replacen(" University", "", 1),
        format!("{name} State"),
        format!("{name} University"),
    ]
}

/// Runs the exact, variant and substring tiers with insertion-order
/// substring matching.
///
/// Returns `None` when no tier matches. Blank names never match, not even
/// in the substring tier where an empty string would otherwise be contained
/// in the first key; they go straight to the caller's fallback.
pub fn resolve<'a>(name: &str, index: &'a AssetIndex) -> Option<Resolution<'a>> {
    resolve_with(name, index, SubstringMatching::InsertionOrder)
}

/// Like [`resolve`] with an explicit substring policy
pub fn resolve_with<'a>(
    name: &str,
    index: &'a AssetIndex,
    substring: SubstringMatching,
) -> Option<Resolution<'a>> {
    if name.trim().is_empty() {
        return None;
    }

    if let Some((key, uri)) = index.get_key_value(name) {
        return Some(Resolution {
            uri,
            tier: MatchTier::Exact,
            matched_key: Some(key),
        });
    }

    for variant in variants(name) {
        if variant == name {
            continue;
        }
        if let Some((key, uri)) = index.get_key_value(&variant) {
            return Some(Resolution {
                uri,
                tier: MatchTier::Variant,
                matched_key: Some(key),
            });
        }
    }

    if substring == SubstringMatching::Disabled {
        return None;
    }

    let lowered = name.to_lowercase();
    index
        .iter()
        .find(|(key, _)| {
            let key = key.to_lowercase();
            key.contains(&lowered) || lowered.contains(&key)
        })
        .map(|(key, uri)| Resolution {
            uri,
            tier: MatchTier::Substring,
            matched_key: Some(key),
        })
}

/// Logo lookup that always yields an asset.
#[derive(Debug, Clone)]
pub struct LogoResolver<'a> {
    index: &'a AssetIndex,
    fallback: &'a str,
    substring: SubstringMatching,
}

impl Default for LogoResolver<'static> {
    fn default() -> Self {
        Self::new(AssetIndex::sports_reference())
    }
}

impl<'a> LogoResolver<'a> {
    pub fn new(index: &'a AssetIndex) -> Self {
        Self {
            index,
            fallback: DEFAULT_SCHOOL_LOGO,
            substring: SubstringMatching::default(),
        }
    }

    pub fn with_fallback(mut self, fallback: &'a str) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn with_substring_matching(mut self, substring: SubstringMatching) -> Self {
        self.substring = substring;
        self
    }

    /// Resolves a canonical display name, falling back to the default asset.
    ///
    /// The result borrows the index, not the resolver.
    pub fn resolve(&self, name: &str) -> Resolution<'a> {
        match resolve_with(name, self.index, self.substring) {
            Some(resolution) => {
                debug!(
                    "Logo for '{}' matched '{}' ({})",
                    name,
                    resolution.matched_key.unwrap_or_default(),
                    resolution.tier
                );
                resolution
            }
            None => {
                debug!("No logo for '{}', using fallback", name);
                Resolution {
                    uri: self.fallback,
                    tier: MatchTier::Fallback,
                    matched_key: None,
                }
            }
        }
    }

    /// Canonicalizes a raw school slug and resolves the result.
    pub fn resolve_slug(&self, slug: &str) -> Resolution<'a> {
        self.resolve(&canonicalize(slug))
    }

    /// URI only
    pub fn logo_for(&self, name: &str) -> &'a str {
        self.resolve(name).uri
    }
}
