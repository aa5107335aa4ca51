// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cascade Style: selector-scoped rules and cascade resolution.
//!
//! This crate builds on `cascade_property` with selector-scoped rules,
//! providing a CSS-like precedence chain:
//!
//! **Matching rule → Default → Inherited**
//!
//! ## Core Concepts
//!
//! ### Rule trees
//!
//! Rules are declared as a [`RuleTree`]: nested scopes keyed by
//! comma-separated selector lists, holding property assignments. Declaring a
//! tree flattens it into one [`Rule`] per fully-qualified selector, so that
//! `"h1, h2"` containing `"em"` yields rules for `h1 em` and `h2 em`. The tree
//! itself is not retained.
//!
//! ### Selector engines
//!
//! The store never interprets selector text. A [`SelectorEngine`] decides
//! whether an element matches a selector and how specific a selector is.
//! [`SimpleSelectorEngine`] is a ready-made engine for element models that
//! implement [`SelectorElement`].
//!
//! ### Resolution
//!
//! [`CascadeStore::resolve`] picks the matching rule with the highest
//! [`Specificity`], with ties going to the rule registered last. Without a
//! matching rule the declared default applies, and only when that is missing
//! too does an inherited property look at the parent element.
//! [`CascadeStore::explain`] additionally reports where the value came from.
//!
//! ## Quick Start
//!
//! ```rust
//! use cascade_property::{CascadeElement, PropertyDeclarationBuilder, Value};
//! use cascade_style::{CascadeStore, RuleTree, SelectorElement, SimpleSelectorEngine};
//!
//! #[derive(Clone, Copy)]
//! struct Node<'a> {
//!     names: &'a [&'a str],
//!     index: usize,
//! }
//!
//! impl CascadeElement for Node<'_> {
//!     fn parent(&self) -> Option<Self> {
//!         self.index.checked_sub(1).map(|index| Node { index, ..*self })
//!     }
//! }
//!
//! impl SelectorElement for Node<'_> {
//!     fn local_name(&self) -> &str { self.names[self.index] }
//!     fn id(&self) -> Option<&str> { None }
//!     fn has_class(&self, _: &str) -> bool { false }
//!     fn previous_sibling(&self) -> Option<Self> { None }
//!     fn next_sibling(&self) -> Option<Self> { None }
//! }
//!
//! let names = ["article", "p", "strong"];
//! let mut store: CascadeStore<SimpleSelectorEngine<Node<'_>>> =
//!     CascadeStore::new(SimpleSelectorEngine::new());
//! store.declare_properties([
//!     ("color", PropertyDeclarationBuilder::new().inherited(true).build()),
//!     ("weight", PropertyDeclarationBuilder::new().default_value(400).build()),
//! ]);
//! store.declare_rules(
//!     &RuleTree::new().nest(
//!         "article",
//!         RuleTree::new()
//!             .set("color", "navy")
//!             .nest("b, strong", RuleTree::new().set("weight", 700)),
//!     ),
//! );
//!
//! let strong = Node { names: &names, index: 2 };
//! let p = Node { names: &names, index: 1 };
//!
//! assert_eq!(store.resolve(&strong, "weight"), Some(Value::from(700)));
//! assert_eq!(store.resolve(&p, "weight"), Some(Value::from(400)));
//! assert_eq!(store.resolve(&strong, "color"), Some(Value::from("navy")));
//! ```
//!
//! ## Features
//!
//! - `json`: load rule trees and property declarations from
//!   `serde_json::Value` documents.
//!
//! The JSON unit, integration and doc tests only build with the feature
//! enabled, so run the full suite with `cargo test --all-features`.
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. The `json` feature brings in
//! `serde_json`, which depends on `std`.

#![no_std]

extern crate alloc;

#[cfg(feature = "json")]
mod json;
mod options;
mod properties;
mod resolve;
mod rule;
mod selector;
mod simple;
mod store;
#[cfg(test)]
mod testing;
mod tree;

#[cfg(feature = "json")]
pub use json::{JsonError, JsonErrorKind, declarations_from_json, rule_tree_from_json};
pub use options::{CascadeOptions, DEFAULT_MAX_INHERITANCE_DEPTH};
pub use properties::{PropertySet, PropertySetBuilder};
pub use resolve::{Resolution, ValueSource};
pub use rule::Rule;
pub use selector::{SelectorEngine, Specificity};
pub use simple::{SelectorElement, SimpleSelectorEngine};
pub use store::{CascadeStore, CascadeStoreBuilder};
pub use tree::{RuleNode, RuleTree};
