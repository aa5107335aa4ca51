// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A small arena DOM for integration tests.

#![allow(
    dead_code,
    reason = "Each integration test binary uses a different subset of the helpers."
)]

use std::rc::Rc;

use cascade_property::CascadeElement;
use cascade_style::{CascadeStore, SelectorElement, SimpleSelectorEngine};

pub(crate) type Store = CascadeStore<SimpleSelectorEngine<Element>>;

#[derive(Debug)]
struct NodeData {
    name: String,
    id: Option<String>,
    classes: Vec<String>,
    parent: Option<usize>,
    children: Vec<usize>,
}

/// Builds a [`Dom`] node by node.
#[derive(Debug, Default)]
pub(crate) struct DomBuilder {
    nodes: Vec<NodeData>,
}

impl DomBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Adds a node described as `name#id.class.class` and returns its index.
    pub(crate) fn add(&mut self, parent: Option<usize>, tag: &str) -> usize {
        let (head, classes) = match tag.split_once('.') {
            Some((head, classes)) => (head, classes.split('.').map(String::from).collect()),
            None => (tag, Vec::new()),
        };
        let (name, id) = match head.split_once('#') {
            Some((name, id)) => (name, Some(String::from(id))),
            None => (head, None),
        };

        let index = self.nodes.len();
        self.nodes.push(NodeData {
            name: String::from(name),
            id,
            classes,
            parent,
            children: Vec::new(),
        });
        if let Some(parent) = parent {
            self.nodes[parent].children.push(index);
        }
        index
    }

    pub(crate) fn build(self) -> Dom {
        Dom {
            nodes: Rc::new(self.nodes),
        }
    }
}

/// An immutable element tree.
#[derive(Clone, Debug)]
pub(crate) struct Dom {
    nodes: Rc<Vec<NodeData>>,
}

impl Dom {
    pub(crate) fn element(&self, index: usize) -> Element {
        assert!(index < self.nodes.len(), "no node at index {index}");
        Element {
            nodes: Rc::clone(&self.nodes),
            index,
        }
    }
}

/// A handle to one node of a [`Dom`].
#[derive(Clone, Debug)]
pub(crate) struct Element {
    nodes: Rc<Vec<NodeData>>,
    index: usize,
}

impl Element {
    fn data(&self) -> &NodeData {
        &self.nodes[self.index]
    }

    fn at(&self, index: usize) -> Self {
        Self {
            nodes: Rc::clone(&self.nodes),
            index,
        }
    }

    fn siblings(&self) -> &[usize] {
        match self.data().parent {
            Some(parent) => &self.nodes[parent].children,
            None => &[],
        }
    }

    fn position(&self) -> Option<usize> {
        self.siblings().iter().position(|&i| i == self.index)
    }
}

impl CascadeElement for Element {
    fn parent(&self) -> Option<Self> {
        self.data().parent.map(|index| self.at(index))
    }
}

impl SelectorElement for Element {
    fn local_name(&self) -> &str {
        &self.data().name
    }

    fn id(&self) -> Option<&str> {
        self.data().id.as_deref()
    }

    fn has_class(&self, name: &str) -> bool {
        self.data().classes.iter().any(|class| class == name)
    }

    fn previous_sibling(&self) -> Option<Self> {
        let position = self.position()?;
        let previous = position.checked_sub(1)?;
        Some(self.at(self.siblings()[previous]))
    }

    fn next_sibling(&self) -> Option<Self> {
        let position = self.position()?;
        self.siblings().get(position + 1).map(|&index| self.at(index))
    }
}
