//! Rendering of ordered sub-elements.
//!
//! An [`ArrayRenderer`] owns the sub-elements found under one base path. It
//! orders them by their position directives and hands every resulting path
//! to an [`Evaluator`], collecting whatever the evaluator produces.

use std::convert::Infallible;

use log::{debug, trace};

use ordinal_core::directive::Directive;

use crate::{error::MalformedDirective, items::ItemSet};

/// Evaluates a single sub-element by its path.
///
/// Returning `Ok(None)` means the sub-element has no value and is left out
/// of the rendered result.
pub trait Evaluator {
    type Output;
    type Error;

    fn evaluate(&mut self, path: &str) -> Result<Option<Self::Output>, Self::Error>;
}

impl<F, T> Evaluator for F
where
    F: FnMut(&str) -> Option<T>,
{
    type Output = T;
    type Error = Infallible;

    fn evaluate(&mut self, path: &str) -> Result<Option<T>, Infallible> {
        Ok(self(path))
    }
}

/// Ordered sub-elements below a base path.
///
/// # Examples
///
/// ```
/// use ordinal::ArrayRenderer;
///
/// let mut renderer = ArrayRenderer::new("page/body");
/// renderer.set("footer", Some("end"));
/// renderer.set("content", None);
///
/// assert_eq!(
///     renderer.sorted_paths(),
///     ["page/body/content", "page/body/footer"]
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct ArrayRenderer {
    path: String,
    elements: ItemSet,
    ignored: Vec<String>,
}

impl ArrayRenderer {
    /// Create a renderer for the sub-elements below `path`.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// Exclude the given keys from ordering and evaluation.
    pub fn with_ignored<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignored.extend(keys.into_iter().map(Into::into));
        self
    }

    /// Add a sub-element with an already parsed directive.
    pub fn insert(&mut self, key: impl Into<String>, directive: Directive) -> &mut Self {
        self.elements.insert(key, directive);
        self
    }

    /// Add a sub-element with raw directive text.
    ///
    /// See [`ItemSet::insert_raw`].
    pub fn set(
        &mut self,
        key: impl Into<String>,
        position: Option<&str>,
    ) -> Option<MalformedDirective> {
        self.elements.insert_raw(key, position)
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn elements(&self) -> &ItemSet {
        &self.elements
    }

    pub fn is_ignored(&self, key: &str) -> bool {
        self.ignored.iter().any(|ignored| ignored == key)
    }

    /// Keys of the rendered sub-elements in output order.
    pub fn sorted_keys(&self) -> Vec<&str> {
        crate::sorter::sort(self.elements.iter().filter(|(key, _)| !self.is_ignored(key)))
    }

    /// Full paths of the rendered sub-elements in output order.
    pub fn sorted_paths(&self) -> Vec<String> {
        self.sorted_keys()
            .into_iter()
            .map(|key| format!("{}/{}", self.path, key))
            .collect()
    }

    /// Evaluate every sub-element in output order.
    ///
    /// Returns `Ok(None)` when there is nothing to render. Sub-elements the
    /// evaluator yields no value for are skipped.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first evaluator error.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordinal::ArrayRenderer;
    ///
    /// let mut renderer = ArrayRenderer::new("");
    /// renderer.set("second", Some("end"));
    /// renderer.set("first", None);
    ///
    /// let mut evaluate = |path: &str| Some(path.to_uppercase());
    /// let rendered = renderer.evaluate(&mut evaluate).unwrap();
    ///
    /// assert_eq!(rendered, Some(vec!["/FIRST".to_string(), "/SECOND".to_string()]));
    /// ```
    pub fn evaluate<E: Evaluator>(
        &self,
        evaluator: &mut E,
    ) -> Result<Option<Vec<E::Output>>, E::Error> {
        let paths = self.sorted_paths();
        if paths.is_empty() {
            debug!(path = self.path.as_str(); "No sub-elements to render");
            return Ok(None);
        }

        let mut rendered = Vec::with_capacity(paths.len());
        for path in &paths {
            trace!(path = path.as_str(); "Evaluating sub-element");
            if let Some(output) = evaluator.evaluate(path)? {
                rendered.push(output);
            }
        }

        debug!(
            path = self.path.as_str(),
            elements = paths.len(),
            rendered = rendered.len();
            "Rendered sub-elements"
        );
        Ok(Some(rendered))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_join_base_path() {
        let mut renderer = ArrayRenderer::new("array/test");
        renderer.insert("first", Directive::Unspecified);

        assert_eq!(renderer.sorted_paths(), ["array/test/first"]);
    }

    #[test]
    fn test_empty_base_path() {
        let mut renderer = ArrayRenderer::new("");
        renderer.insert("first", Directive::Unspecified);

        assert_eq!(renderer.sorted_paths(), ["/first"]);
    }

    #[test]
    fn test_ignored_keys_are_not_ordered() {
        let mut renderer = ArrayRenderer::new("").with_ignored(["__meta"]);
        renderer
            .insert("__meta", Directive::Start(0))
            .insert("first", Directive::Unspecified);

        assert!(renderer.is_ignored("__meta"));
        assert_eq!(renderer.sorted_keys(), ["first"]);
    }

    #[test]
    fn test_only_ignored_keys_renders_nothing() {
        let mut renderer = ArrayRenderer::new("").with_ignored(["skip"]);
        renderer.insert("skip", Directive::Unspecified);

        let mut evaluate = |path: &str| Some(path.to_string());
        assert_eq!(renderer.evaluate(&mut evaluate), Ok(None));
    }
}
