// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared property assignments.
//!
//! This module provides [`PropertySet`], the name-to-value payload of a rule.
//! All rules flattened from the same tree level share one set.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;

use cascade_property::Value;

/// A shared, immutable collection of property assignments.
///
/// Cloning is cheap (an `Rc` increment). Entries are kept sorted by name for
/// binary search lookup.
///
/// # Example
///
/// ```rust
/// use cascade_property::Value;
/// use cascade_style::PropertySetBuilder;
///
/// let set = PropertySetBuilder::<Value>::new()
///     .set("weight", 1)
///     .set("color", "red")
///     .build();
///
/// let shared = set.clone();
/// assert_eq!(shared.get("weight"), Some(&Value::Integer(1)));
/// assert_eq!(set.names().collect::<Vec<_>>(), ["color", "weight"]);
/// ```
#[derive(Debug)]
pub struct PropertySet<V = Value> {
    inner: Rc<[(Box<str>, V)]>,
}

impl<V> Clone for PropertySet<V> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<V> Default for PropertySet<V> {
    fn default() -> Self {
        PropertySetBuilder::new().build()
    }
}

impl<V> PropertySet<V> {
    /// Returns `true` if this set assigns no properties.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the number of assigned properties.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Gets the value assigned to `name`.
    #[must_use]
    #[inline]
    pub fn get(&self, name: &str) -> Option<&V> {
        self.inner
            .binary_search_by(|(n, _)| (**n).cmp(name))
            .ok()
            .map(|idx| &self.inner[idx].1)
    }

    /// Returns `true` if this set assigns `name`.
    #[must_use]
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Returns the assigned property names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.inner.iter().map(|(name, _)| &**name)
    }

    /// Returns the assignments in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> + '_ {
        self.inner.iter().map(|(name, value)| (&**name, value))
    }

    /// Returns `true` if both handles share the same storage.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<V: PartialEq> PartialEq for PropertySet<V> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<N: Into<Box<str>>, V> FromIterator<(N, V)> for PropertySet<V> {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut builder = PropertySetBuilder::new();
        for (name, value) in iter {
            builder.insert(name, value);
        }
        builder.build()
    }
}

/// Builder for constructing [`PropertySet`] instances.
#[derive(Debug)]
pub struct PropertySetBuilder<V = Value> {
    entries: Vec<(Box<str>, V)>,
}

impl<V> Default for PropertySetBuilder<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<V> PropertySetBuilder<V> {
    /// Creates a new empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns a property value.
    ///
    /// If the property was already assigned, the value is replaced.
    #[must_use]
    pub fn set(mut self, name: impl Into<Box<str>>, value: impl Into<V>) -> Self {
        self.insert(name, value.into());
        self
    }

    /// Assigns a property value in place.
    pub fn insert(&mut self, name: impl Into<Box<str>>, value: V) {
        let name = name.into();
        match self.entries.binary_search_by(|(n, _)| n.cmp(&name)) {
            Ok(idx) => self.entries[idx].1 = value,
            Err(idx) => self.entries.insert(idx, (name, value)),
        }
    }

    /// Returns `true` if nothing has been assigned yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Builds the property set.
    #[must_use]
    pub fn build(self) -> PropertySet<V> {
        PropertySet {
            inner: self.entries.into(),
        }
    }
}
