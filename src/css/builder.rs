use std::fmt;

use log::{debug, trace};

use super::error::SelectorError;
use super::selector::Category;

/// Accumulates one compound selector, checking fragment order and the
/// once-only categories before every append.
///
/// Instances come from the free functions in [`super::facade`]; every
/// category method consumes the builder and hands it back on success.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectorBuilder {
    text: String,
    used: u8,
    last: Option<Category>,
}

impl SelectorBuilder {
    pub(crate) fn new() -> Self {
        Self {
            text: String::new(),
            used: 0,
            last: None,
        }
    }

    /// A builder holding a single fragment. A fresh builder cannot violate
    /// either rule, so this skips the checks.
    pub(crate) fn starting_with(category: Category, value: &str) -> Self {
        let mut builder = Self::new();
        builder.append(category, value);
        builder
    }

    pub fn element(self, value: impl AsRef<str>) -> Result<Self, SelectorError> {
        self.push(Category::Type, value.as_ref())
    }

    pub fn id(self, value: impl AsRef<str>) -> Result<Self, SelectorError> {
        self.push(Category::Id, value.as_ref())
    }

    pub fn class(self, value: impl AsRef<str>) -> Result<Self, SelectorError> {
        self.push(Category::Class, value.as_ref())
    }

    /// Appends `[value]`. The value is inserted as given, e.g. `href$=".png"`.
    pub fn attr(self, value: impl AsRef<str>) -> Result<Self, SelectorError> {
        self.push(Category::Attribute, value.as_ref())
    }

    pub fn pseudo_class(self, value: impl AsRef<str>) -> Result<Self, SelectorError> {
        self.push(Category::PseudoClass, value.as_ref())
    }

    pub fn pseudo_element(self, value: impl AsRef<str>) -> Result<Self, SelectorError> {
        self.push(Category::PseudoElement, value.as_ref())
    }

    /// Appends a fragment of any category, applying the same checks as the
    /// named methods.
    pub(crate) fn push(mut self, category: Category, value: &str) -> Result<Self, SelectorError> {
        self.check(category)?;
        self.append(category, value);
        Ok(self)
    }

    pub(crate) fn check(&self, category: Category) -> Result<(), SelectorError> {
        if category.is_once_only() && self.has(category) {
            debug!(target: "selector", "Rejected repeated {} in '{}'", category, self.text);
            return Err(SelectorError::DuplicateCategory(category));
        }
        if let Some(last) = self.last {
            if category < last {
                debug!(
                    target: "selector",
                    "Rejected {} after {} in '{}'",
                    category,
                    last,
                    self.text
                );
                return Err(SelectorError::OrderViolation {
                    attempted: category,
                    last,
                });
            }
        }
        Ok(())
    }

    fn append(&mut self, category: Category, value: &str) {
        let fragment = category.render(value);
        trace!(target: "selector", "Appending {} fragment '{}'", category, fragment);
        self.text.push_str(&fragment);
        self.used |= category.mask();
        self.last = Some(category);
    }

    /// Whether a fragment of `category` has been appended.
    pub fn has(&self, category: Category) -> bool {
        self.used & category.mask() != 0
    }

    /// The category of the most recent fragment.
    pub fn last_category(&self) -> Option<Category> {
        self.last
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the built selector text.
    pub fn finalize(&self) -> String {
        self.text.clone()
    }
}

impl fmt::Display for SelectorBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
