// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Nested rule trees.
//!
//! A [`RuleTree`] is the input format for rule declaration: an ordered list of
//! keys, where each key either opens a nested selector scope or assigns a
//! property. Which one it is depends on the [`RuleNode`] variant, chosen by the
//! caller when the tree is built.

use alloc::string::String;
use alloc::vec::Vec;

use cascade_property::Value;

/// A value in a [`RuleTree`].
#[derive(Clone, Debug, PartialEq)]
pub enum RuleNode<V = Value> {
    /// A nested scope. The key is a comma-separated selector list.
    Selector(RuleTree<V>),
    /// A property assignment. The key is the property name.
    Property(V),
}

/// An ordered, nested mapping of selector scopes and property assignments.
///
/// Keys keep their insertion order, which becomes rule registration order
/// during flattening. Setting an existing key replaces its node in place.
///
/// # Example
///
/// ```rust
/// use cascade_style::{RuleNode, RuleTree};
///
/// let tree: RuleTree = RuleTree::new().nest(
///     "ul",
///     RuleTree::new()
///         .set("margin", 0)
///         .nest("li, em", RuleTree::new().set("weight", 1)),
/// );
///
/// let (key, node) = tree.entries().next().unwrap();
/// assert_eq!(key, "ul");
/// assert!(matches!(node, RuleNode::Selector(scope) if scope.len() == 2));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct RuleTree<V = Value> {
    entries: Vec<(String, RuleNode<V>)>,
}

impl<V> Default for RuleTree<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<V> RuleTree<V> {
    /// Creates an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns a property value at this level.
    #[must_use]
    pub fn set(mut self, name: impl Into<String>, value: impl Into<V>) -> Self {
        self.insert(name, RuleNode::Property(value.into()));
        self
    }

    /// Opens a nested selector scope at this level.
    #[must_use]
    pub fn nest(mut self, selectors: impl Into<String>, scope: Self) -> Self {
        self.insert(selectors, RuleNode::Selector(scope));
        self
    }

    /// Inserts a node, replacing any node already stored under `key`.
    ///
    /// A replaced key keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, node: RuleNode<V>) {
        let key = key.into();
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = node;
        } else {
            self.entries.push((key, node));
        }
    }

    /// Returns the node stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&RuleNode<V>> {
        self.entries
            .iter()
            .find_map(|(k, node)| (k == key).then_some(node))
    }

    /// Returns the number of keys at this level.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if this level has no keys.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the keys and nodes at this level, in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &RuleNode<V>)> + '_ {
        self.entries.iter().map(|(k, node)| (k.as_str(), node))
    }
}

impl<K, V> FromIterator<(K, RuleNode<V>)> for RuleTree<V>
where
    K: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, RuleNode<V>)>>(iter: I) -> Self {
        let mut tree = Self::new();
        for (key, node) in iter {
            tree.insert(key, node);
        }
        tree
    }
}
