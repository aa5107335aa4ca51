// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `cascade_property` + `cascade_style`.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use std::rc::Rc;

use cascade_property::{CascadeElement, PropertyDeclarationBuilder, Value};
use cascade_style::{CascadeStore, RuleTree, SelectorElement, SimpleSelectorEngine};

/// A chain of `div.level-N` elements, each the only child of the previous.
#[derive(Clone)]
struct Elem {
    classes: Rc<Vec<String>>,
    depth: usize,
}

impl Elem {
    fn chain(len: usize) -> Self {
        Self {
            classes: Rc::new((0..len).map(|i| format!("level-{}", i % 8)).collect()),
            depth: len - 1,
        }
    }
}

impl CascadeElement for Elem {
    fn parent(&self) -> Option<Self> {
        self.depth.checked_sub(1).map(|depth| Self {
            classes: Rc::clone(&self.classes),
            depth,
        })
    }
}

impl SelectorElement for Elem {
    fn local_name(&self) -> &str {
        if self.depth == 0 { "section" } else { "div" }
    }

    fn id(&self) -> Option<&str> {
        None
    }

    fn has_class(&self, name: &str) -> bool {
        self.classes[self.depth] == name
    }

    fn previous_sibling(&self) -> Option<Self> {
        None
    }

    fn next_sibling(&self) -> Option<Self> {
        None
    }
}

type Store = CascadeStore<SimpleSelectorEngine<Elem>>;

/// `width` rules at several specificities plus an inherited `color` set on the root.
fn rules(levels: usize) -> RuleTree {
    let mut nested = RuleTree::new().set("width", 1);
    for i in 0..levels {
        nested = RuleTree::new()
            .set("width", i64::try_from(i).unwrap_or(i64::MAX))
            .nest(format!(".level-{}, div", i % 8), nested);
    }
    RuleTree::new()
        .nest("section", RuleTree::new().set("color", "black"))
        .nest("div", nested)
}

fn store(levels: usize) -> Store {
    let mut store: Store = CascadeStore::new(SimpleSelectorEngine::new());
    store.declare_properties([
        (
            "color",
            PropertyDeclarationBuilder::new().inherited(true).build(),
        ),
        (
            "margin",
            PropertyDeclarationBuilder::new().default_value(0).build(),
        ),
    ]);
    store.declare_rules(&rules(levels));
    store
}

fn bench_cascade(c: &mut Criterion) {
    let mut group = c.benchmark_group("cascade/declare");
    for levels in [1_usize, 3, 5] {
        let tree = rules(levels);
        group.bench_function(BenchmarkId::new("flatten", levels), |b| {
            b.iter(|| {
                let mut store: Store = CascadeStore::new(SimpleSelectorEngine::new());
                store.declare_rules(black_box(&tree));
                black_box(store.rules().len())
            });
        });
    }
    group.finish();

    let store = store(3);
    let mut group = c.benchmark_group("cascade/resolve");

    group.bench_function("default", |b| {
        let element = Elem::chain(1);
        b.iter(|| black_box(store.resolve_ref(&element, "margin")));
    });

    group.bench_function("matched", |b| {
        let element = Elem::chain(4);
        b.iter(|| black_box(store.resolve_ref(&element, "width")));
    });

    for len in [4_usize, 16, 64] {
        group.bench_function(BenchmarkId::new("inherited", len), |b| {
            let element = Elem::chain(len);
            b.iter(|| black_box(store.resolve_ref(&element, "color")));
        });
    }

    group.bench_function("resolve_all", |b| {
        let element = Elem::chain(8);
        b.iter(|| black_box(store.resolve_all(&element).len()));
    });

    group.bench_function("resolve_clone/string", |b| {
        let element = Elem::chain(8);
        b.iter(|| black_box(store.resolve(&element, "color").map(|v| matches!(v, Value::String(_)))));
    });

    group.finish();
}

criterion_group!(benches, bench_cascade);
criterion_main!(benches);
