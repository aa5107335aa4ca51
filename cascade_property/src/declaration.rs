// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property declarations.
//!
//! This module provides [`PropertyDeclaration`] for storing per-property
//! configuration and [`PropertyDeclarationBuilder`] for ergonomic construction.

use crate::value::Value;

/// Declared metadata for a named property.
///
/// A declaration carries an optional default value and whether the property
/// inherits from ancestor elements. Properties that were never declared behave
/// as [`PropertyDeclaration::new`]: no default, not inherited.
///
/// # Example
///
/// ```rust
/// use cascade_property::{PropertyDeclarationBuilder, Value};
///
/// let declaration = PropertyDeclarationBuilder::<Value>::new()
///     .default_value(12)
///     .inherited(true)
///     .build();
///
/// assert_eq!(declaration.default_value(), Some(&Value::from(12)));
/// assert!(declaration.inherited());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct PropertyDeclaration<V = Value> {
    default_value: Option<V>,
    inherited: bool,
}

impl<V> PropertyDeclaration<V> {
    /// Creates an empty declaration.
    ///
    /// All fields use their defaults:
    /// - `default_value`: `None`
    /// - `inherited`: `false`
    #[must_use]
    pub const fn new() -> Self {
        Self {
            default_value: None,
            inherited: false,
        }
    }

    /// Returns the declared default value, if any.
    #[must_use]
    #[inline]
    pub fn default_value(&self) -> Option<&V> {
        self.default_value.as_ref()
    }

    /// Returns `true` if a default value is declared.
    #[must_use]
    #[inline]
    pub fn has_default(&self) -> bool {
        self.default_value.is_some()
    }

    /// Returns whether unset values are taken from the parent element.
    #[must_use]
    #[inline]
    pub fn inherited(&self) -> bool {
        self.inherited
    }
}

impl<V> Default for PropertyDeclaration<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for [`PropertyDeclaration`].
///
/// # Example
///
/// ```rust
/// use cascade_property::{PropertyDeclarationBuilder, Value};
///
/// let font_size = PropertyDeclarationBuilder::<Value>::new()
///     .inherited(true)
///     .build();
///
/// assert_eq!(font_size.default_value(), None);
/// assert!(font_size.inherited());
/// ```
#[derive(Clone, Debug)]
pub struct PropertyDeclarationBuilder<V = Value> {
    default_value: Option<V>,
    inherited: bool,
}

impl<V> Default for PropertyDeclarationBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> PropertyDeclarationBuilder<V> {
    /// Creates a new builder with no default and no inheritance.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            default_value: None,
            inherited: false,
        }
    }

    /// Sets the default value.
    #[must_use]
    pub fn default_value(mut self, value: impl Into<V>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// Sets whether this property inherits from ancestor elements.
    ///
    /// Inheritance only applies when neither a rule nor a default value
    /// provides a value for the element.
    #[must_use]
    pub fn inherited(mut self, inherited: bool) -> Self {
        self.inherited = inherited;
        self
    }

    /// Builds the [`PropertyDeclaration`].
    #[must_use]
    pub fn build(self) -> PropertyDeclaration<V> {
        PropertyDeclaration {
            default_value: self.default_value,
            inherited: self.inherited,
        }
    }
}
