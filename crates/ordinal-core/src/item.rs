//! Named sub-elements.

use crate::directive::Directive;

/// A named sub-element and the directive controlling its position.
///
/// # Examples
///
/// ```
/// use ordinal_core::{directive::Directive, item::Item};
///
/// let item = Item::new("header", Directive::Start(0));
/// assert_eq!(item.name(), "header");
/// assert_eq!(item.directive(), &Directive::Start(0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    name: String,
    directive: Directive,
}

impl Item {
    /// Creates a new item.
    pub fn new(name: impl Into<String>, directive: Directive) -> Self {
        Self {
            name: name.into(),
            directive,
        }
    }

    /// Creates an item without a directive.
    pub fn unpositioned(name: impl Into<String>) -> Self {
        Self::new(name, Directive::Unspecified)
    }

    /// Returns the item name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the item directive.
    pub fn directive(&self) -> &Directive {
        &self.directive
    }

    /// Splits the item into its name and directive.
    pub fn into_parts(self) -> (String, Directive) {
        (self.name, self.directive)
    }
}
