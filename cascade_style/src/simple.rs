// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A small reference selector engine.
//!
//! [`SimpleSelectorEngine`] understands a practical subset of CSS selectors:
//!
//! - type (`li`), universal (`*`), id (`#main`) and class (`.icon`) selectors,
//! - the structural pseudo-classes `:first-child`, `:last-child`,
//!   `:only-child` and `:root`,
//! - the descendant (whitespace) and child (`>`) combinators.
//!
//! Anything else makes the selector invalid, which scores
//! [`Specificity::ZERO`] and never matches.
//!
//! Complex selectors are matched right-to-left: the rightmost compound must
//! match the element, then each combinator is followed up the ancestor chain.

use alloc::string::String;
use alloc::vec::Vec;
use core::iter::Peekable;
use core::marker::PhantomData;
use core::str::Chars;

use cascade_property::CascadeElement;
use smallvec::SmallVec;

use crate::selector::{SelectorEngine, Specificity};

/// Element queries needed by [`SimpleSelectorEngine`].
pub trait SelectorElement: CascadeElement {
    /// Returns the element's type name, compared ASCII case-insensitively.
    fn local_name(&self) -> &str;

    /// Returns the element's id, if any.
    fn id(&self) -> Option<&str>;

    /// Returns `true` if the element carries the class `name`.
    fn has_class(&self, name: &str) -> bool;

    /// Returns the previous sibling element.
    fn previous_sibling(&self) -> Option<Self>;

    /// Returns the next sibling element.
    fn next_sibling(&self) -> Option<Self>;
}

/// Reference [`SelectorEngine`] over any [`SelectorElement`].
///
/// Selectors are parsed on every call; the engine holds no state.
///
/// # Example
///
/// ```rust
/// use cascade_style::{SimpleSelectorEngine, SelectorEngine, Specificity};
/// # use cascade_style::SelectorElement;
/// # use cascade_property::CascadeElement;
/// # #[derive(Clone)]
/// # struct Leaf;
/// # impl CascadeElement for Leaf { fn parent(&self) -> Option<Self> { None } }
/// # impl SelectorElement for Leaf {
/// #     fn local_name(&self) -> &str { "p" }
/// #     fn id(&self) -> Option<&str> { None }
/// #     fn has_class(&self, _: &str) -> bool { false }
/// #     fn previous_sibling(&self) -> Option<Self> { None }
/// #     fn next_sibling(&self) -> Option<Self> { None }
/// # }
///
/// let engine = SimpleSelectorEngine::<Leaf>::new();
/// assert_eq!(engine.specificity("ul > li:last-child"), Specificity(0, 1, 2));
/// assert_eq!(engine.specificity("#nav .item"), Specificity(1, 1, 0));
/// assert!(engine.specificity("*").is_zero());
/// assert!(engine.specificity("li[title]").is_zero());
/// assert!(engine.matches(&Leaf, "p:root"));
/// ```
pub struct SimpleSelectorEngine<E> {
    _marker: PhantomData<fn(&E)>,
}

impl<E> SimpleSelectorEngine<E> {
    /// Creates a new engine.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<E> Default for SimpleSelectorEngine<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for SimpleSelectorEngine<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for SimpleSelectorEngine<E> {}

impl<E> core::fmt::Debug for SimpleSelectorEngine<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SimpleSelectorEngine")
            .field("element", &core::any::type_name::<E>())
            .finish()
    }
}

impl<E: SelectorElement> SelectorEngine for SimpleSelectorEngine<E> {
    type Element = E;

    fn matches(&self, element: &E, selector: &str) -> bool {
        parse_selector(selector).is_some_and(|complex| complex.matches(element))
    }

    fn specificity(&self, selector: &str) -> Specificity {
        parse_selector(selector).map_or(Specificity::ZERO, |complex| complex.specificity())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Combinator {
    Descendant,
    Child,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum PseudoClass {
    FirstChild,
    LastChild,
    OnlyChild,
    Root,
}

impl PseudoClass {
    fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "first-child" => Some(Self::FirstChild),
            "last-child" => Some(Self::LastChild),
            "only-child" => Some(Self::OnlyChild),
            "root" => Some(Self::Root),
            _ => None,
        }
    }

    fn matches<E: SelectorElement>(self, element: &E) -> bool {
        match self {
            Self::FirstChild => element.parent().is_some() && element.previous_sibling().is_none(),
            Self::LastChild => element.parent().is_some() && element.next_sibling().is_none(),
            Self::OnlyChild => {
                element.parent().is_some()
                    && element.previous_sibling().is_none()
                    && element.next_sibling().is_none()
            }
            Self::Root => element.parent().is_none(),
        }
    }
}

/// One compound selector, such as `li.item:first-child`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct Compound {
    /// `None` for an implicit or explicit universal selector.
    type_name: Option<String>,
    ids: Vec<String>,
    classes: Vec<String>,
    pseudos: Vec<PseudoClass>,
}

impl Compound {
    fn matches<E: SelectorElement>(&self, element: &E) -> bool {
        if let Some(name) = &self.type_name
            && !element.local_name().eq_ignore_ascii_case(name)
        {
            return false;
        }
        self.ids.iter().all(|id| element.id() == Some(id.as_str()))
            && self.classes.iter().all(|class| element.has_class(class))
            && self.pseudos.iter().all(|pseudo| pseudo.matches(element))
    }

    fn specificity(&self) -> Specificity {
        let count = |n: usize| u32::try_from(n).unwrap_or(u32::MAX);
        Specificity(
            count(self.ids.len()),
            count(self.classes.len() + self.pseudos.len()),
            u32::from(self.type_name.is_some()),
        )
    }
}

/// Compounds joined by combinators, stored left-to-right.
///
/// `combinators[i]` joins `compounds[i]` and `compounds[i + 1]`.
#[derive(Clone, Debug, PartialEq, Eq)]
struct ComplexSelector {
    compounds: SmallVec<[Compound; 4]>,
    combinators: SmallVec<[Combinator; 4]>,
}

impl ComplexSelector {
    fn specificity(&self) -> Specificity {
        self.compounds
            .iter()
            .fold(Specificity::ZERO, |total, compound| {
                total + compound.specificity()
            })
    }

    fn matches<E: SelectorElement>(&self, element: &E) -> bool {
        self.matches_at(self.compounds.len() - 1, element)
    }

    /// Matches `compounds[..=index]` with `compounds[index]` as the subject.
    fn matches_at<E: SelectorElement>(&self, index: usize, element: &E) -> bool {
        if !self.compounds[index].matches(element) {
            return false;
        }
        if index == 0 {
            return true;
        }
        match self.combinators[index - 1] {
            Combinator::Child => element
                .parent()
                .is_some_and(|parent| self.matches_at(index - 1, &parent)),
            Combinator::Descendant => {
                let mut ancestor = element.parent();
                while let Some(current) = ancestor {
                    if self.matches_at(index - 1, &current) {
                        return true;
                    }
                    ancestor = current.parent();
                }
                false
            }
        }
    }
}

/// Parses a single complex selector. Returns `None` if it is empty or uses
/// anything outside the supported subset.
fn parse_selector(input: &str) -> Option<ComplexSelector> {
    let mut chars = input.trim().chars().peekable();
    let mut compounds = SmallVec::new();
    let mut combinators = SmallVec::new();
    let mut pending: Option<Combinator> = None;

    loop {
        while let Some(&c) = chars.peek() {
            if c.is_whitespace() {
                pending.get_or_insert(Combinator::Descendant);
            } else if c == '>' {
                if pending == Some(Combinator::Child) {
                    return None;
                }
                pending = Some(Combinator::Child);
            } else {
                break;
            }
            chars.next();
        }
        if chars.peek().is_none() {
            break;
        }
        match pending.take() {
            Some(combinator) if !compounds.is_empty() => combinators.push(combinator),
            // A leading combinator has nothing to its left.
            Some(_) => return None,
            None => {}
        }
        compounds.push(parse_compound(&mut chars)?);
    }

    if compounds.is_empty() || pending == Some(Combinator::Child) {
        return None;
    }
    Some(ComplexSelector {
        compounds,
        combinators,
    })
}

fn parse_compound(chars: &mut Peekable<Chars<'_>>) -> Option<Compound> {
    let mut compound = Compound::default();
    let mut empty = true;

    match chars.peek() {
        Some('*') => {
            chars.next();
            empty = false;
        }
        Some(&c) if is_ident_char(c) => {
            compound.type_name = Some(parse_ident(chars)?);
            empty = false;
        }
        _ => {}
    }

    while let Some(&c) = chars.peek() {
        match c {
            '#' => {
                chars.next();
                compound.ids.push(parse_ident(chars)?);
            }
            '.' => {
                chars.next();
                compound.classes.push(parse_ident(chars)?);
            }
            ':' => {
                chars.next();
                compound
                    .pseudos
                    .push(PseudoClass::from_name(&parse_ident(chars)?)?);
            }
            c if c.is_whitespace() || c == '>' => break,
            _ => return None,
        }
        empty = false;
    }

    (!empty).then_some(compound)
}

fn parse_ident(chars: &mut Peekable<Chars<'_>>) -> Option<String> {
    let mut ident = String::new();
    while let Some(&c) = chars.peek() {
        if !is_ident_char(c) {
            break;
        }
        ident.push(c);
        chars.next();
    }
    (!ident.is_empty()).then_some(ident)
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_'
}
