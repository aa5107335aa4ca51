// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Store configuration.

/// Default bound on parent links followed while resolving inherited values.
pub const DEFAULT_MAX_INHERITANCE_DEPTH: usize = 512;

/// Configuration for a [`CascadeStore`](crate::CascadeStore).
///
/// # Example
///
/// ```rust
/// use cascade_style::CascadeOptions;
///
/// let options = CascadeOptions::new().with_max_inheritance_depth(32);
/// assert_eq!(options.max_inheritance_depth(), 32);
/// assert_eq!(CascadeOptions::default().max_inheritance_depth(), 512);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct CascadeOptions {
    max_inheritance_depth: usize,
}

impl CascadeOptions {
    /// Creates the default options.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_inheritance_depth: DEFAULT_MAX_INHERITANCE_DEPTH,
        }
    }

    /// Sets how many parent links an inherited lookup may follow.
    ///
    /// When the bound is reached the lookup behaves as if the chain ended
    /// there. `0` disables inheritance from ancestors entirely.
    #[must_use]
    pub const fn with_max_inheritance_depth(mut self, depth: usize) -> Self {
        self.max_inheritance_depth = depth;
        self
    }

    /// Returns the inheritance depth bound.
    #[must_use]
    #[inline]
    pub const fn max_inheritance_depth(&self) -> usize {
        self.max_inheritance_depth
    }
}

impl Default for CascadeOptions {
    fn default() -> Self {
        Self::new()
    }
}
