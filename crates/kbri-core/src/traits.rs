// crates/kbri-core/src/traits.rs
use crate::error::Result;
use crate::text::fold_key;

/// Name-based matching helpers for types that expose a canonical display name.
///
/// This trait centralizes accent-insensitive and case-insensitive
/// comparisons based on [`fold_key`]. Implementors provide a `&str` view of
/// their canonical name via [`NameMatch::name_str`], and get:
/// - [`NameMatch::is_named`] — equality on folded form
/// - [`NameMatch::name_contains`] — substring match on folded form
///
/// # Examples
/// ```rust
/// use kbri_core::traits::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Place("Łódź").is_named("lodz"));
/// assert!(Place("Zürich").name_contains("zuri"));
/// ```
pub trait NameMatch {
    /// Returns the canonical display name used for matching.
    fn name_str(&self) -> &str;

    #[inline]
    fn is_named(&self, q: &str) -> bool {
        fold_key(self.name_str()) == fold_key(q)
    }

    #[inline]
    fn name_contains(&self, q: &str) -> bool {
        fold_key(self.name_str()).contains(&fold_key(q))
    }
}

/// The external text-extraction collaborator.
///
/// Implementations reduce a free-form chat utterance ("Saya di Paris, di
/// mana KBRI terdekat?") to a candidate place name ("Paris"). This is
/// typically a language-model call and is therefore kept outside the
/// deterministic core; the resolver only ever sees the extracted name.
pub trait PlaceExtractor {
    fn extract(&self, utterance: &str) -> Result<String>;
}

/// Identity extractor: the utterance itself is the place name.
#[derive(Debug, Clone, Copy, Default)]
pub struct Verbatim;

impl PlaceExtractor for Verbatim {
    fn extract(&self, utterance: &str) -> Result<String> {
        Ok(utterance.trim().to_string())
    }
}

impl<F> PlaceExtractor for F
where
    F: Fn(&str) -> Result<String>,
{
    fn extract(&self, utterance: &str) -> Result<String> {
        self(utterance)
    }
}
