// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The cascade store.
//!
//! [`CascadeStore`] owns property declarations and the flat, ordered rule
//! list. Rule trees are flattened when they are declared; queries (see the
//! resolution methods) scan the flat list.

use alloc::string::String;
use alloc::vec::Vec;

use cascade_property::{PropertyDeclaration, PropertyRegistry, Value};

use crate::options::CascadeOptions;
use crate::properties::PropertySet;
use crate::rule::{Rule, flatten, split_selector_list};
use crate::selector::SelectorEngine;
use crate::tree::RuleTree;

/// Property declarations plus selector-scoped rules.
///
/// The store is built once and then queried: declaring properties or rules
/// takes `&mut self`, resolution takes `&self`.
///
/// # Example
///
/// ```rust
/// use cascade_property::{PropertyDeclarationBuilder, Value};
/// use cascade_style::{CascadeStore, RuleTree, SelectorEngine, Specificity};
/// # use cascade_property::CascadeElement;
/// # #[derive(Clone)]
/// # struct Tag(&'static str);
/// # impl CascadeElement for Tag { fn parent(&self) -> Option<Self> { None } }
/// # struct TagEngine;
/// # impl SelectorEngine for TagEngine {
/// #     type Element = Tag;
/// #     fn matches(&self, e: &Tag, s: &str) -> bool { e.0 == s }
/// #     fn specificity(&self, s: &str) -> Specificity {
/// #         if s.is_empty() { Specificity::ZERO } else { Specificity(0, 0, 1) }
/// #     }
/// # }
///
/// let mut store: CascadeStore<TagEngine> = CascadeStore::new(TagEngine);
/// store.declare_properties([(
///     "weight",
///     PropertyDeclarationBuilder::new().default_value(400).build(),
/// )]);
/// store.declare_rules(&RuleTree::new().nest("b, strong", RuleTree::new().set("weight", 700)));
///
/// assert_eq!(store.rules().len(), 2);
/// assert_eq!(store.resolve(&Tag("strong"), "weight"), Some(Value::from(700)));
/// assert_eq!(store.resolve(&Tag("p"), "weight"), Some(Value::from(400)));
/// assert_eq!(store.resolve(&Tag("p"), "color"), None);
/// ```
pub struct CascadeStore<S, V = Value> {
    pub(crate) engine: S,
    pub(crate) options: CascadeOptions,
    pub(crate) registry: PropertyRegistry<V>,
    pub(crate) rules: Vec<Rule<V>>,
}

impl<S, V> CascadeStore<S, V>
where
    S: SelectorEngine,
    V: Clone,
{
    /// Creates an empty store using `engine` for matching and specificity.
    pub fn new(engine: S) -> Self {
        Self::with_options(engine, CascadeOptions::default())
    }

    /// Creates an empty store with explicit options.
    pub fn with_options(engine: S, options: CascadeOptions) -> Self {
        Self {
            engine,
            options,
            registry: PropertyRegistry::new(),
            rules: Vec::new(),
        }
    }

    /// Declares (or redeclares) properties.
    ///
    /// Each entry replaces any earlier declaration of the same name. The
    /// inherited and with-default name sets are rebuilt before this returns.
    pub fn declare_properties<N, I>(&mut self, declarations: I)
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, PropertyDeclaration<V>)>,
    {
        self.registry.declare(declarations);
    }

    /// Flattens `tree` into rules and appends them.
    ///
    /// Selector keys nest: a scope's selectors are prefixed with every
    /// selector of the enclosing scope. Property assignments at the root of
    /// `tree` have no selector and are ignored.
    pub fn declare_rules(&mut self, tree: &RuleTree<V>) {
        self.declare_rules_scoped(tree, "");
    }

    /// Flattens `tree` as if it were nested under `parent_selectors`.
    ///
    /// With a non-empty `parent_selectors`, property assignments at the root
    /// of `tree` produce rules for those selectors.
    pub fn declare_rules_scoped(&mut self, tree: &RuleTree<V>, parent_selectors: &str) {
        flatten(tree, parent_selectors, &mut |selectors: &str, properties: PropertySet<V>| {
            self.add_rule(selectors, properties);
        });
    }

    /// Appends one rule per selector in the comma-separated `selectors`.
    ///
    /// Each selector is trimmed and scored by the engine. Selectors that score
    /// [`Specificity::ZERO`](crate::Specificity::ZERO) are dropped.
    pub fn add_rule(&mut self, selectors: &str, properties: PropertySet<V>) {
        for selector in split_selector_list(selectors) {
            let selector = selector.trim();
            let specificity = self.engine.specificity(selector);
            if specificity.is_zero() {
                log::debug!("dropping rule for unusable selector {selector:?}");
                continue;
            }
            self.rules
                .push(Rule::new(selector.into(), specificity, properties.clone()));
        }
    }

    /// Removes all declarations and rules.
    pub fn clear(&mut self) {
        self.registry.clear();
        self.rules.clear();
    }
}

impl<S, V> CascadeStore<S, V> {
    /// Returns the stored rules in registration order.
    #[must_use]
    #[inline]
    pub fn rules(&self) -> &[Rule<V>] {
        &self.rules
    }

    /// Returns the property registry.
    #[must_use]
    #[inline]
    pub fn registry(&self) -> &PropertyRegistry<V> {
        &self.registry
    }

    /// Returns the declaration for `name`, if declared.
    #[must_use]
    pub fn declaration(&self, name: &str) -> Option<&PropertyDeclaration<V>> {
        self.registry.get(name)
    }

    /// Returns the names of inherited properties, in no particular order.
    pub fn inherited_property_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.registry.inherited_names()
    }

    /// Returns the names of properties with a default, in no particular order.
    pub fn properties_with_default(&self) -> impl Iterator<Item = &str> + '_ {
        self.registry.names_with_default()
    }

    /// Returns the selector engine.
    #[must_use]
    #[inline]
    pub fn engine(&self) -> &S {
        &self.engine
    }

    /// Returns the store options.
    #[must_use]
    #[inline]
    pub fn options(&self) -> &CascadeOptions {
        &self.options
    }
}

impl<S, V> core::fmt::Debug for CascadeStore<S, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CascadeStore")
            .field("engine", &core::any::type_name::<S>())
            .field("options", &self.options)
            .field("registry", &self.registry)
            .field("rules", &self.rules.len())
            .finish_non_exhaustive()
    }
}

/// Builder for a [`CascadeStore`] seeded with declarations and rules.
///
/// Declarations are applied before rule trees, and rule trees in the order
/// they were added.
///
/// # Example
///
/// ```rust
/// use cascade_property::PropertyDeclarationBuilder;
/// use cascade_style::{CascadeOptions, CascadeStore, CascadeStoreBuilder, RuleTree};
/// # use cascade_style::{SelectorEngine, Specificity};
/// # use cascade_property::CascadeElement;
/// # #[derive(Clone)]
/// # struct Tag(&'static str);
/// # impl CascadeElement for Tag { fn parent(&self) -> Option<Self> { None } }
/// # struct TagEngine;
/// # impl SelectorEngine for TagEngine {
/// #     type Element = Tag;
/// #     fn matches(&self, e: &Tag, s: &str) -> bool { e.0 == s }
/// #     fn specificity(&self, s: &str) -> Specificity {
/// #         if s.is_empty() { Specificity::ZERO } else { Specificity(0, 0, 1) }
/// #     }
/// # }
///
/// let store: CascadeStore<TagEngine> = CascadeStoreBuilder::new(TagEngine)
///     .options(CascadeOptions::new().with_max_inheritance_depth(8))
///     .declare_properties([("hidden", PropertyDeclarationBuilder::new().default_value(false).build())])
///     .declare_rules(RuleTree::new().nest("template", RuleTree::new().set("hidden", true)))
///     .build();
///
/// assert_eq!(store.rules().len(), 1);
/// assert_eq!(store.options().max_inheritance_depth(), 8);
/// ```
pub struct CascadeStoreBuilder<S, V = Value> {
    engine: S,
    options: CascadeOptions,
    declarations: Vec<(String, PropertyDeclaration<V>)>,
    trees: Vec<RuleTree<V>>,
}

impl<S, V> CascadeStoreBuilder<S, V>
where
    S: SelectorEngine,
    V: Clone,
{
    /// Creates a builder for a store using `engine`.
    #[must_use]
    pub fn new(engine: S) -> Self {
        Self {
            engine,
            options: CascadeOptions::default(),
            declarations: Vec::new(),
            trees: Vec::new(),
        }
    }

    /// Sets the store options.
    #[must_use]
    pub fn options(mut self, options: CascadeOptions) -> Self {
        self.options = options;
        self
    }

    /// Adds property declarations.
    #[must_use]
    pub fn declare_properties<N, I>(mut self, declarations: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, PropertyDeclaration<V>)>,
    {
        self.declarations.extend(
            declarations
                .into_iter()
                .map(|(name, declaration)| (name.into(), declaration)),
        );
        self
    }

    /// Adds a rule tree.
    #[must_use]
    pub fn declare_rules(mut self, tree: RuleTree<V>) -> Self {
        self.trees.push(tree);
        self
    }

    /// Builds the store.
    #[must_use]
    pub fn build(self) -> CascadeStore<S, V> {
        let mut store = CascadeStore::with_options(self.engine, self.options);
        if !self.declarations.is_empty() {
            store.declare_properties(self.declarations);
        }
        for tree in &self.trees {
            store.declare_rules(tree);
        }
        store
    }
}

impl<S, V> core::fmt::Debug for CascadeStoreBuilder<S, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CascadeStoreBuilder")
            .field("engine", &core::any::type_name::<S>())
            .field("options", &self.options)
            .field("declarations", &self.declarations.len())
            .field("trees", &self.trees.len())
            .finish_non_exhaustive()
    }
}
