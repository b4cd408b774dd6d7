//! Insertion-ordered sets of named items.

use indexmap::IndexMap;
use log::warn;

use ordinal_core::{directive::Directive, item::Item};

use crate::{error::MalformedDirective, sorter};

/// An insertion-ordered set of named items and their directives.
///
/// Names are unique. Inserting an existing name replaces its directive and
/// keeps its original slot, so the fallback order is the order in which
/// names were first seen.
///
/// # Examples
///
/// ```
/// use ordinal::{ItemSet, directive::Directive};
///
/// let mut items = ItemSet::new();
/// items.insert("second", Directive::End(0));
/// items.insert("first", Directive::Unspecified);
///
/// assert_eq!(items.sorted_names(), ["first", "second"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ItemSet {
    entries: IndexMap<String, Directive>,
}

impl ItemSet {
    /// Create an empty item set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an item, returning the directive it replaced.
    pub fn insert(&mut self, name: impl Into<String>, directive: Directive) -> Option<Directive> {
        self.entries.insert(name.into(), directive)
    }

    /// Insert an item from raw directive text.
    ///
    /// A missing or malformed directive never fails: the item is placed
    /// with [`Directive::Unspecified`] and the problem is returned.
    pub fn insert_raw(
        &mut self,
        name: impl Into<String>,
        position: Option<&str>,
    ) -> Option<MalformedDirective> {
        let name = name.into();
        let Some(position) = position else {
            self.entries.insert(name, Directive::Unspecified);
            return None;
        };

        let (directive, warning) = ordinal_parser::parse_lenient(position);
        let malformed = warning.map(|diagnostic| {
            warn!(
                key = name.as_str(),
                directive = position;
                "Malformed position directive, using default placement"
            );
            MalformedDirective::new(name.as_str(), position, diagnostic)
        });

        self.entries.insert(name, directive);
        malformed
    }

    /// Remove an item, keeping the order of the others.
    pub fn remove(&mut self, name: &str) -> Option<Directive> {
        self.entries.shift_remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Directive of the named item.
    pub fn directive(&self, name: &str) -> Option<&Directive> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over names and directives in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Directive)> {
        self.entries
            .iter()
            .map(|(name, directive)| (name.as_str(), directive))
    }

    /// Names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Names ordered by their directives.
    pub fn sorted_names(&self) -> Vec<&str> {
        sorter::sort(self.iter())
    }
}

impl FromIterator<Item> for ItemSet {
    fn from_iter<T: IntoIterator<Item = Item>>(iter: T) -> Self {
        let mut items = Self::new();
        items.extend(iter);
        items
    }
}

impl Extend<Item> for ItemSet {
    fn extend<T: IntoIterator<Item = Item>>(&mut self, iter: T) {
        for item in iter {
            let (name, directive) = item.into_parts();
            self.insert(name, directive);
        }
    }
}
