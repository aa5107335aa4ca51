// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property declaration registry.
//!
//! This module provides [`PropertyRegistry`] for declaring properties by name
//! and for the derived lookups cascade resolution needs.

use alloc::string::String;
use alloc::vec::Vec;
use hashbrown::{HashMap, HashSet};

use crate::declaration::PropertyDeclaration;
use crate::value::Value;

/// A registry of named property declarations.
///
/// Declaring a name that is already present fully replaces the previous
/// declaration; fields are never merged. After every call to
/// [`declare`](Self::declare) the registry rebuilds two derived name sets,
/// the inherited properties and the properties with a default value, from
/// the complete set of declarations.
///
/// # Example
///
/// ```rust
/// use cascade_property::{PropertyDeclarationBuilder, PropertyRegistry, Value};
///
/// let mut registry = PropertyRegistry::<Value>::new();
/// registry.declare([
///     ("color", PropertyDeclarationBuilder::new().inherited(true).build()),
///     ("width", PropertyDeclarationBuilder::new().default_value(0).build()),
/// ]);
///
/// assert_eq!(registry.len(), 2);
/// assert!(registry.is_inherited("color"));
/// assert!(registry.has_default("width"));
/// assert!(!registry.has_default("color"));
/// ```
#[derive(Clone)]
pub struct PropertyRegistry<V = Value> {
    declarations: HashMap<String, PropertyDeclaration<V>>,
    inherited: HashSet<String>,
    with_default: HashSet<String>,
}

impl<V> Default for PropertyRegistry<V> {
    fn default() -> Self {
        Self {
            declarations: HashMap::new(),
            inherited: HashSet::new(),
            with_default: HashSet::new(),
        }
    }
}

impl<V> PropertyRegistry<V> {
    /// Creates a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares (or redeclares) properties.
    ///
    /// Each entry overwrites any previous declaration with the same name.
    pub fn declare<N, I>(&mut self, declarations: I)
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, PropertyDeclaration<V>)>,
    {
        for (name, declaration) in declarations {
            self.declarations.insert(name.into(), declaration);
        }
        self.rebuild_derived();
    }

    /// Removes every declaration.
    pub fn clear(&mut self) {
        self.declarations.clear();
        self.inherited.clear();
        self.with_default.clear();
    }

    fn rebuild_derived(&mut self) {
        self.inherited.clear();
        self.with_default.clear();
        for (name, declaration) in &self.declarations {
            if declaration.inherited() {
                self.inherited.insert(name.clone());
            }
            if declaration.has_default() {
                self.with_default.insert(name.clone());
            }
        }
    }

    /// Returns the number of declared properties.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    /// Returns `true` if no properties are declared.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Returns the declaration for a property.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PropertyDeclaration<V>> {
        self.declarations.get(name)
    }

    /// Returns `true` if the property is declared.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.declarations.contains_key(name)
    }

    /// Returns whether a property inherits from ancestors.
    ///
    /// Undeclared properties do not inherit.
    #[must_use]
    pub fn is_inherited(&self, name: &str) -> bool {
        self.inherited.contains(name)
    }

    /// Returns whether a property declares a default value.
    #[must_use]
    pub fn has_default(&self, name: &str) -> bool {
        self.with_default.contains(name)
    }

    /// Returns the names of all inherited properties, in no particular order.
    pub fn inherited_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.inherited.iter().map(String::as_str)
    }

    /// Returns the names of all properties with a default, in no particular order.
    pub fn names_with_default(&self) -> impl Iterator<Item = &str> + '_ {
        self.with_default.iter().map(String::as_str)
    }

    /// Returns an iterator over all declarations, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyDeclaration<V>)> + '_ {
        self.declarations
            .iter()
            .map(|(name, declaration)| (name.as_str(), declaration))
    }
}

impl<V> core::fmt::Debug for PropertyRegistry<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut names: Vec<&str> = self.declarations.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("PropertyRegistry")
            .field("count", &self.declarations.len())
            .field("properties", &names)
            .finish_non_exhaustive()
    }
}
