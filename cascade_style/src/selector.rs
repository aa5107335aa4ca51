// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selector specificity and the selector engine seam.
//!
//! The cascade never interprets selector text itself. Matching an element
//! against a selector, and scoring a selector, are delegated to a
//! [`SelectorEngine`] supplied by the embedder.

use cascade_property::CascadeElement;

/// Bucketed selector specificity: `(ids, classes, types)`.
///
/// The fields are ordered highest-weight-first so that derived `Ord`
/// gives CSS-like lexicographic ordering: id count outranks class and
/// pseudo-class count, which outranks type selector count.
///
/// [`Specificity::ZERO`] marks a selector as unusable: rules are never stored
/// for selectors that score zero.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Specificity(pub u32, pub u32, pub u32);

impl Specificity {
    /// The zero score reported for empty or invalid selectors.
    pub const ZERO: Self = Self(0, 0, 0);

    /// Returns `true` if this is [`Specificity::ZERO`].
    #[must_use]
    #[inline]
    pub fn is_zero(self) -> bool {
        self == Self::ZERO
    }
}

impl core::ops::Add for Specificity {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(
            self.0.saturating_add(rhs.0),
            self.1.saturating_add(rhs.1),
            self.2.saturating_add(rhs.2),
        )
    }
}

/// Matching and scoring of textual selectors.
///
/// Implementations decide which selector syntax they understand. The cascade
/// only relies on two guarantees:
///
/// - [`specificity`](Self::specificity) returns [`Specificity::ZERO`] for a
///   selector the engine cannot use (empty, unsupported, malformed).
/// - [`matches`](Self::matches) is deterministic for a given element and
///   selector.
///
/// # Example
///
/// ```rust
/// use cascade_property::CascadeElement;
/// use cascade_style::{SelectorEngine, Specificity};
///
/// #[derive(Clone)]
/// struct Tagged(&'static str);
///
/// impl CascadeElement for Tagged {
///     fn parent(&self) -> Option<Self> { None }
/// }
///
/// /// Matches a selector against the element's tag, nothing else.
/// struct TagOnly;
///
/// impl SelectorEngine for TagOnly {
///     type Element = Tagged;
///
///     fn matches(&self, element: &Tagged, selector: &str) -> bool {
///         element.0 == selector
///     }
///
///     fn specificity(&self, selector: &str) -> Specificity {
///         if selector.is_empty() { Specificity::ZERO } else { Specificity(0, 0, 1) }
///     }
/// }
///
/// assert!(TagOnly.matches(&Tagged("p"), "p"));
/// assert!(TagOnly.specificity("").is_zero());
/// ```
pub trait SelectorEngine {
    /// The element handle this engine matches against.
    type Element: CascadeElement;

    /// Returns `true` if `element` matches `selector`.
    fn matches(&self, element: &Self::Element, selector: &str) -> bool;

    /// Returns the specificity of `selector`, or [`Specificity::ZERO`] if the
    /// selector is empty or cannot be used.
    fn specificity(&self, selector: &str) -> Specificity;
}

impl<S: SelectorEngine + ?Sized> SelectorEngine for &S {
    type Element = S::Element;

    #[inline]
    fn matches(&self, element: &Self::Element, selector: &str) -> bool {
        (**self).matches(element, selector)
    }

    #[inline]
    fn specificity(&self, selector: &str) -> Specificity {
        (**self).specificity(selector)
    }
}
