// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cascade Property: named property declarations for cascade resolution.
//!
//! This crate provides the property side of a CSS-like cascade: which
//! properties exist, what their default values are, and which of them inherit
//! from ancestor elements. Selector-scoped rules and the resolution algorithm
//! itself live in `cascade_style`.
//!
//! ## Core Concepts
//!
//! ### Declarations
//!
//! A [`PropertyDeclaration`] records an optional default value and an
//! `inherited` flag. Properties are identified by name; a property that was
//! never declared behaves like an empty declaration (no default, not
//! inherited) and can still be set by rules.
//!
//! ### Registry
//!
//! [`PropertyRegistry`] maps names to declarations. Redeclaring a name replaces
//! the previous declaration outright. The registry keeps the set of inherited
//! names and the set of names with defaults in sync with its declarations.
//!
//! ### Elements
//!
//! The element model belongs to the embedder. [`CascadeElement`] only asks for
//! a parent, and [`walk_inherited`] walks the ancestor chain with a depth bound
//! so that a cyclic element model cannot hang resolution.
//!
//! ## Quick Start
//!
//! ```rust
//! use cascade_property::{PropertyDeclarationBuilder, PropertyRegistry, Value};
//!
//! let mut registry = PropertyRegistry::<Value>::new();
//! registry.declare([
//!     ("color", PropertyDeclarationBuilder::new().inherited(true).build()),
//!     ("margin", PropertyDeclarationBuilder::new().default_value(0).build()),
//! ]);
//!
//! let margin = registry.get("margin").unwrap();
//! assert_eq!(margin.default_value(), Some(&Value::Integer(0)));
//! assert!(registry.is_inherited("color"));
//! assert!(registry.get("padding").is_none());
//! ```
//!
//! ## Values
//!
//! Declarations and registries are generic over the value type. [`Value`] is
//! the default: a small dynamic scalar covering booleans, numbers and strings.
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. It does not depend on `std`.

#![no_std]

extern crate alloc;

mod declaration;
mod element;
mod registry;
mod value;

pub use declaration::{PropertyDeclaration, PropertyDeclarationBuilder};
pub use element::{CascadeElement, Inherited, walk_inherited};
pub use registry::PropertyRegistry;
pub use value::Value;
