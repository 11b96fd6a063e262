// Dweve Cypher Template - Safe Cypher statement assembly
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Validated node and relationship labels with a shared validation memo.
//!
//! # Thread Safety
//!
//! [`LabelCache`] uses `DashMap` for concurrent access. Two threads validating
//! the same new label at once race on one map entry; the first insert wins and
//! both return equal labels. A bounded cache reserves a slot before inserting,
//! so concurrent misses never push it past its capacity.

use crate::error::{Result, TemplateError};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock};
use tracing::trace;

/// Check if a string is a valid label: `^[A-Za-z0-9_]+$`.
pub fn is_valid_label(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// A validated label. Template text is `:` followed by the name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Label {
    name: Arc<str>,
}

impl Label {
    /// Validate `text` through the process-wide cache.
    ///
    /// # Examples
    ///
    /// ```
    /// use cypher_template::Label;
    ///
    /// let label = Label::new("Person").unwrap();
    /// assert_eq!(label.template(), ":Person");
    /// assert!(Label::new("Person:Admin").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self> {
        LabelCache::global().label(text)
    }

    /// The label name without the leading colon.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Template text, e.g. `:Person`.
    pub fn template(&self) -> String {
        format!(":{}", self.name)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ":{}", self.name)
    }
}

/// Validate a label through the process-wide cache.
pub fn make_label(text: &str) -> Result<Label> {
    Label::new(text)
}

/// Cache statistics for monitoring.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelCacheStats {
    /// Lookups answered from the cache.
    pub hits: u64,
    /// Lookups that had to validate.
    pub misses: u64,
    /// Current number of cached labels.
    pub size: usize,
    /// Configured bound, if any.
    pub capacity: Option<usize>,
}

impl LabelCacheStats {
    /// Cache hit rate (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Insert-only memo of validated label strings.
///
/// Invalid inputs are never cached, so a corrected retry is always validated
/// fresh. An unbounded cache grows with the number of distinct labels ever
/// validated; callers building labels from open-ended input should use
/// [`LabelCache::with_capacity`]. A bounded cache never evicts: once full it
/// keeps validating new labels but stops memoising them.
#[derive(Debug)]
pub struct LabelCache {
    entries: DashMap<String, Label>,
    capacity: Option<usize>,
    reserved: AtomicUsize,
    hits: AtomicU64,
    misses: AtomicU64,
}

static GLOBAL_LABELS: OnceLock<LabelCache> = OnceLock::new();

impl LabelCache {
    /// Create an unbounded cache.
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
            capacity: None,
            reserved: AtomicUsize::new(0),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Create a cache that memoises at most `capacity` labels.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: DashMap::with_capacity(capacity),
            capacity: Some(capacity),
            reserved: AtomicUsize::new(0),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// The unbounded process-wide cache used by [`Label::new`].
    ///
    /// Only a shared reference is handed out, so the global memo can never be
    /// cleared.
    pub fn global() -> &'static LabelCache {
        GLOBAL_LABELS.get_or_init(LabelCache::new)
    }

    /// Validate `text`, answering from the cache when possible.
    pub fn label(&self, text: &str) -> Result<Label> {
        if let Some(entry) = self.entries.get(text) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            trace!("Label cache hit: {}", text);
            return Ok(entry.value().clone());
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        if !is_valid_label(text) {
            trace!("Label rejected: {:?}", text);
            return Err(TemplateError::LabelInvalidFormat(text.to_string()));
        }

        let label = Label {
            name: Arc::from(text),
        };
        if !self.reserve_slot() {
            trace!("Label cache full, not memoising: {}", text);
            return Ok(label);
        }
        match self.entries.entry(text.to_string()) {
            Entry::Occupied(existing) => {
                // another thread memoised it first; hand back its slot
                self.release_slot();
                Ok(existing.get().clone())
            }
            Entry::Vacant(slot) => {
                slot.insert(label.clone());
                trace!("Label cached: {}", text);
                Ok(label)
            }
        }
    }

    /// Claim room for one more entry. Always succeeds when unbounded.
    fn reserve_slot(&self) -> bool {
        match self.capacity {
            None => {
                self.reserved.fetch_add(1, Ordering::AcqRel);
                true
            }
            Some(cap) => self
                .reserved
                .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| {
                    (n < cap).then_some(n + 1)
                })
                .is_ok(),
        }
    }

    fn release_slot(&self) {
        self.reserved.fetch_sub(1, Ordering::AcqRel);
    }

    /// Check whether `text` has been memoised.
    pub fn contains(&self, text: &str) -> bool {
        self.entries.contains_key(text)
    }

    /// Number of memoised labels.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing has been memoised.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every memoised label and reset the counters.
    ///
    /// Needs exclusive access, so it applies to caller-owned caches only.
    /// The process-wide cache is reachable only through a shared reference:
    ///
    /// ```compile_fail
    /// use cypher_template::LabelCache;
    ///
    /// LabelCache::global().clear();
    /// ```
    pub fn clear(&mut self) {
        self.entries.clear();
        *self.reserved.get_mut() = 0;
        *self.hits.get_mut() = 0;
        *self.misses.get_mut() = 0;
    }

    /// Snapshot of the cache counters.
    pub fn stats(&self) -> LabelCacheStats {
        LabelCacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            size: self.entries.len(),
            capacity: self.capacity,
        }
    }
}

impl Default for LabelCache {
    fn default() -> Self {
        Self::new()
    }
}
