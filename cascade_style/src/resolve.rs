// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property resolution.
//!
//! Resolution follows a fixed precedence chain:
//!
//! **Matching rule → Default → Inherited**
//!
//! The best matching rule wins, with ties going to the rule registered last.
//! Without a matching rule the declared default applies. Only when neither
//! exists, and the property is declared inherited, does the lookup continue on
//! the parent element. A property with a default therefore never inherits.

use alloc::string::String;

use cascade_property::{CascadeElement, PropertyDeclaration, walk_inherited};
use hashbrown::HashMap;
use hashbrown::hash_map::Entry;

use crate::selector::{SelectorEngine, Specificity};
use crate::store::CascadeStore;

/// Where a resolved value came from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ValueSource {
    /// A stored rule.
    Rule {
        /// Position of the rule in [`CascadeStore::rules`].
        index: usize,
        /// The rule's specificity.
        specificity: Specificity,
    },
    /// The property's declared default.
    Default,
}

/// A resolved value with its provenance.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Resolution<'a, V> {
    /// The resolved value.
    pub value: &'a V,
    /// Where the value came from.
    pub source: ValueSource,
    /// How many parent links were followed to find the value.
    pub depth: usize,
}

impl<S, V> CascadeStore<S, V>
where
    S: SelectorEngine,
    V: Clone,
{
    /// Resolves `name` for `element` and returns a copy of the value.
    ///
    /// Returns `None` when no rule matches, there is no default, and
    /// inheritance (if enabled for the property) finds nothing either.
    #[must_use]
    pub fn resolve(&self, element: &S::Element, name: &str) -> Option<V> {
        self.resolve_ref(element, name).cloned()
    }

    /// Resolves `name` for `element` and returns the stored value.
    #[must_use]
    pub fn resolve_ref(&self, element: &S::Element, name: &str) -> Option<&V> {
        self.explain(element, name).map(|resolution| resolution.value)
    }

    /// Resolves `name` for `element` and reports where the value came from.
    ///
    /// The inheritance walk is bounded by
    /// [`CascadeOptions::max_inheritance_depth`](crate::CascadeOptions::max_inheritance_depth).
    #[must_use]
    pub fn explain(&self, element: &S::Element, name: &str) -> Option<Resolution<'_, V>> {
        self.explain_within(element, name, self.options.max_inheritance_depth())
    }

    /// Like [`explain`](Self::explain), following at most `max_depth` parent links.
    fn explain_within(
        &self,
        element: &S::Element,
        name: &str,
        max_depth: usize,
    ) -> Option<Resolution<'_, V>> {
        let declaration = self.registry.get(name);
        let default = declaration.and_then(PropertyDeclaration::default_value);

        let probe = |element: &S::Element| {
            self.cascaded(element, name)
                .map(|(index, specificity, value)| {
                    (value, ValueSource::Rule { index, specificity })
                })
                .or_else(|| default.map(|value| (value, ValueSource::Default)))
        };

        if declaration.is_some_and(PropertyDeclaration::inherited) {
            walk_inherited(element.clone(), max_depth, probe)
            .map(|found| Resolution {
                value: found.value.0,
                source: found.value.1,
                depth: found.depth,
            })
        } else {
            probe(element).map(|(value, source)| Resolution {
                value,
                source,
                depth: 0,
            })
        }
    }

    /// Resolves every property that has a value for `element`.
    ///
    /// The map holds, per property name:
    /// 1. the value of the best matching rule, for every property any matching
    ///    rule assigns (declared or not);
    /// 2. otherwise, for inherited properties, the parent's resolved value;
    /// 3. otherwise the declared default.
    ///
    /// Names with no value are absent. A root element has nothing to inherit
    /// from, so step 2 contributes nothing there. The link to the parent counts
    /// against the inheritance depth bound, so every entry agrees with
    /// [`resolve`](Self::resolve).
    #[must_use]
    pub fn resolve_all(&self, element: &S::Element) -> HashMap<String, V> {
        let mut winners: HashMap<&str, (Specificity, &V)> = HashMap::new();
        for rule in &self.rules {
            if rule.properties().is_empty() || !self.engine.matches(element, rule.selector()) {
                continue;
            }
            for (name, value) in rule.properties().iter() {
                match winners.entry(name) {
                    Entry::Occupied(mut slot) => {
                        if rule.specificity() >= slot.get().0 {
                            slot.insert((rule.specificity(), value));
                        }
                    }
                    Entry::Vacant(slot) => {
                        slot.insert((rule.specificity(), value));
                    }
                }
            }
        }

        let mut resolved: HashMap<String, V> = winners
            .into_iter()
            .map(|(name, (_, value))| (String::from(name), value.clone()))
            .collect();

        let max_depth = self.options.max_inheritance_depth();
        match element.parent() {
            None => {
                log::trace!("resolving all properties on a root element, nothing to inherit");
            }
            Some(_) if max_depth == 0 => {
                log::trace!("inheritance disabled by a zero depth bound");
            }
            Some(parent) => {
                for name in self.registry.inherited_names() {
                    if resolved.contains_key(name) {
                        continue;
                    }
                    if let Some(found) = self.explain_within(&parent, name, max_depth - 1) {
                        resolved.insert(String::from(name), found.value.clone());
                    }
                }
            }
        }

        for name in self.registry.names_with_default() {
            if resolved.contains_key(name) {
                continue;
            }
            if let Some(value) = self
                .registry
                .get(name)
                .and_then(PropertyDeclaration::default_value)
            {
                resolved.insert(String::from(name), value.clone());
            }
        }

        resolved
    }

    /// Finds the winning rule assigning `name` on `element` alone.
    fn cascaded(&self, element: &S::Element, name: &str) -> Option<(usize, Specificity, &V)> {
        let mut best: Option<(usize, Specificity, &V)> = None;
        for (index, rule) in self.rules.iter().enumerate() {
            let Some(value) = rule.properties().get(name) else {
                continue;
            };
            if !self.engine.matches(element, rule.selector()) {
                continue;
            }
            if best.is_none_or(|(_, specificity, _)| rule.specificity() >= specificity) {
                best = Some((index, rule.specificity(), value));
            }
        }
        best
    }
}
