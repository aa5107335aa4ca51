// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A minimal element model for unit tests.

use alloc::rc::Rc;

use cascade_property::CascadeElement;

use crate::selector::{SelectorEngine, Specificity};

/// The last element of a root-first chain of names.
#[derive(Clone, Debug)]
pub(crate) struct Chain {
    names: Rc<[&'static str]>,
    index: usize,
}

impl Chain {
    /// `names` runs from the root down; the returned element is the last one.
    pub(crate) fn new(names: &[&'static str]) -> Self {
        Self {
            names: Rc::from(names),
            index: names.len() - 1,
        }
    }

    fn name(&self) -> &'static str {
        self.names[self.index]
    }
}

impl CascadeElement for Chain {
    fn parent(&self) -> Option<Self> {
        self.index.checked_sub(1).map(|index| Self {
            names: Rc::clone(&self.names),
            index,
        })
    }
}

/// Matches whitespace-separated names as descendant selectors.
///
/// Specificity is the number of non-whitespace characters other than `*`, in
/// the type bucket.
#[derive(Copy, Clone, Debug)]
pub(crate) struct ChainEngine;

impl SelectorEngine for ChainEngine {
    type Element = Chain;

    fn matches(&self, element: &Chain, selector: &str) -> bool {
        let mut parts = selector.split_whitespace().rev();
        if parts.next() != Some(element.name()) {
            return false;
        }
        let mut ancestor = element.parent();
        for part in parts {
            loop {
                let Some(current) = ancestor else {
                    return false;
                };
                ancestor = current.parent();
                if current.name() == part {
                    break;
                }
            }
        }
        true
    }

    fn specificity(&self, selector: &str) -> Specificity {
        let weight = selector
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '*')
            .count();
        Specificity(0, 0, u32::try_from(weight).unwrap_or(u32::MAX))
    }
}
