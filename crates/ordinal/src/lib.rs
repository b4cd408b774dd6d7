//! Ordinal - deterministic ordering of named sub-elements.
//!
//! Every sub-element may carry a position directive such as `start`,
//! `end 10`, `before header`, `after body 5` or a plain number. Ordinal
//! parses the directives, orders the sub-elements and renders them through
//! an [`Evaluator`].

pub mod config;
pub mod sorter;

mod array;
mod error;
mod items;

pub use ordinal_core::{directive, item};

pub use array::{ArrayRenderer, Evaluator};
pub use error::{MalformedDirective, OrdinalError};
pub use items::ItemSet;
pub use sorter::sort;

use log::{debug, info};

use config::AppConfig;

/// Sub-elements collected into a renderer.
#[derive(Debug, Clone)]
pub struct Collected {
    pub renderer: ArrayRenderer,
    /// Directives that could not be parsed, in input order.
    pub malformed: Vec<MalformedDirective>,
}

/// The ordered output paths of an [`Arranger::arrange`] call.
#[derive(Debug, Clone)]
pub struct Arrangement {
    pub paths: Vec<String>,
    /// Directives that fell back to the default placement.
    pub malformed: Vec<MalformedDirective>,
}

/// Builder-style entry point that applies an [`AppConfig`] to raw entries.
///
/// Entries are `(key, directive)` pairs in their natural order. A missing
/// directive means the sub-element has no position preference.
///
/// # Examples
///
/// ```
/// use ordinal::{Arranger, config::AppConfig};
///
/// let arranger = Arranger::new(AppConfig::default().with_base_path("page"));
/// let arrangement = arranger
///     .arrange([("footer", Some("end")), ("title", Some("start")), ("text", None)])
///     .expect("Failed to arrange");
///
/// assert_eq!(arrangement.paths, ["page/title", "page/text", "page/footer"]);
/// ```
#[derive(Debug, Default)]
pub struct Arranger {
    config: AppConfig,
}

impl Arranger {
    /// Create a new arranger with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Build an [`ArrayRenderer`] from raw entries.
    ///
    /// Malformed directives never fail here. They are reported in
    /// [`Collected::malformed`] and their items use the default placement.
    pub fn collect<I, K, P>(&self, entries: I) -> Collected
    where
        I: IntoIterator<Item = (K, Option<P>)>,
        K: Into<String>,
        P: AsRef<str>,
    {
        let mut renderer = ArrayRenderer::new(self.config.output().base_path())
            .with_ignored(self.config.input().ignore().iter().cloned());

        let malformed: Vec<_> = entries
            .into_iter()
            .filter_map(|(key, position)| {
                renderer.set(key, position.as_ref().map(|p| p.as_ref()))
            })
            .collect();

        debug!(
            elements = renderer.elements().len(),
            malformed = malformed.len();
            "Collected sub-elements"
        );
        Collected {
            renderer,
            malformed,
        }
    }

    /// Order raw entries into output paths.
    ///
    /// # Errors
    ///
    /// Returns [`OrdinalError::Directive`] for the first malformed directive
    /// when `diagnostics.deny_malformed` is enabled.
    pub fn arrange<I, K, P>(&self, entries: I) -> Result<Arrangement, OrdinalError>
    where
        I: IntoIterator<Item = (K, Option<P>)>,
        K: Into<String>,
        P: AsRef<str>,
    {
        let Collected {
            renderer,
            malformed,
        } = self.collect_checked(entries)?;

        let paths = renderer.sorted_paths();
        info!(paths_count = paths.len(); "Sub-elements arranged");
        Ok(Arrangement { paths, malformed })
    }

    /// Order raw entries and evaluate each resulting path.
    ///
    /// Returns `Ok(None)` when there is nothing to render.
    ///
    /// # Errors
    ///
    /// Returns [`OrdinalError::Directive`] as [`arrange`](Self::arrange)
    /// does, and [`OrdinalError::Evaluation`] when the evaluator fails.
    pub fn render<I, K, P, E>(
        &self,
        entries: I,
        evaluator: &mut E,
    ) -> Result<Option<Vec<E::Output>>, OrdinalError>
    where
        I: IntoIterator<Item = (K, Option<P>)>,
        K: Into<String>,
        P: AsRef<str>,
        E: Evaluator,
        E::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        self.collect_checked(entries)?
            .renderer
            .evaluate(evaluator)
            .map_err(|err| OrdinalError::Evaluation(err.into()))
    }

    fn collect_checked<I, K, P>(&self, entries: I) -> Result<Collected, OrdinalError>
    where
        I: IntoIterator<Item = (K, Option<P>)>,
        K: Into<String>,
        P: AsRef<str>,
    {
        let mut collected = self.collect(entries);
        if self.config.diagnostics().deny_malformed() && !collected.malformed.is_empty() {
            return Err(collected.malformed.swap_remove(0).into());
        }
        Ok(collected)
    }
}
