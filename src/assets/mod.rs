//! School logo lookup.

pub mod index;
pub mod logos;

pub use index::{AssetIndex, build_logo_url};
pub use logos::{LogoResolver, MatchTier, Resolution, SubstringMatching, resolve, resolve_with};
