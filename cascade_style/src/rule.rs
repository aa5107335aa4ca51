// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flattened rules and rule-tree flattening.

use alloc::boxed::Box;
use alloc::string::String;

use cascade_property::Value;
use smallvec::SmallVec;

use crate::properties::{PropertySet, PropertySetBuilder};
use crate::selector::Specificity;
use crate::tree::{RuleNode, RuleTree};

/// A single selector with its specificity and property payload.
///
/// Rules are produced by flattening a [`RuleTree`] and are immutable once
/// stored. The selector is one complex selector; selector lists are split
/// into one rule per selector.
#[derive(Clone, Debug, PartialEq)]
pub struct Rule<V = Value> {
    selector: Box<str>,
    specificity: Specificity,
    properties: PropertySet<V>,
}

impl<V> Rule<V> {
    pub(crate) fn new(
        selector: Box<str>,
        specificity: Specificity,
        properties: PropertySet<V>,
    ) -> Self {
        Self {
            selector,
            specificity,
            properties,
        }
    }

    /// Returns the selector.
    #[must_use]
    #[inline]
    pub fn selector(&self) -> &str {
        &self.selector
    }

    /// Returns the selector's specificity. Never [`Specificity::ZERO`].
    #[must_use]
    #[inline]
    pub fn specificity(&self) -> Specificity {
        self.specificity
    }

    /// Returns the rule's property assignments.
    #[must_use]
    #[inline]
    pub fn properties(&self) -> &PropertySet<V> {
        &self.properties
    }
}

/// Splits a selector list on `,`.
///
/// Fragments are returned untrimmed; empty fragments are kept so that the
/// caller can reject them.
pub(crate) fn split_selector_list(list: &str) -> SmallVec<[&str; 4]> {
    list.split(',').collect()
}

/// Prefixes every selector of `selectors` with every selector of `parents`.
///
/// Each combination is `trim(parent) + " " + trim(selector)`, trimmed, and the
/// results are joined with `,`. The outer loop runs over `selectors`, so
/// `"a,b"` under `"x,y"` yields `"x a,y a,x b,y b"`. An empty parent list
/// leaves the selectors unprefixed.
pub(crate) fn scope_selectors(selectors: &str, parents: &str) -> String {
    let parents = split_selector_list(parents);
    let mut scoped: SmallVec<[String; 4]> = SmallVec::new();
    for selector in split_selector_list(selectors) {
        for parent in &parents {
            let combined = [parent.trim(), selector.trim()].join(" ");
            scoped.push(String::from(combined.trim()));
        }
    }
    scoped.join(",")
}

/// Walks a rule tree depth-first, reporting each non-root scope.
///
/// `emit` receives the scope's selector list and the properties assigned
/// directly at that level. Nested scopes are reported before the level that
/// contains them, and every non-root scope is reported, even one that only
/// contains nested scopes. Properties at the root (empty `scope`) have no
/// selector and are dropped.
pub(crate) fn flatten<V, F>(tree: &RuleTree<V>, scope: &str, emit: &mut F)
where
    V: Clone,
    F: FnMut(&str, PropertySet<V>),
{
    let mut properties = PropertySetBuilder::new();
    for (key, node) in tree.entries() {
        match node {
            RuleNode::Selector(nested) => {
                flatten(nested, &scope_selectors(key, scope), emit);
            }
            RuleNode::Property(value) => properties.insert(key, value.clone()),
        }
    }

    if scope.is_empty() {
        if !properties.is_empty() {
            log::debug!("dropping root-level properties without a selector scope");
        }
        return;
    }
    emit(scope, properties.build());
}
