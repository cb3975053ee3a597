use thiserror::Error;

use super::selector::Category;

/// Misuse of a [`SelectorBuilder`](super::SelectorBuilder) chain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    #[error("element, id and pseudo-element may occur at most once in a selector (repeated {0})")]
    DuplicateCategory(Category),

    #[error(
        "selector fragments must appear in the order \
         element, id, class, attribute, pseudo-class, pseudo-element ({attempted} after {last})"
    )]
    OrderViolation { attempted: Category, last: Category },
}

impl SelectorError {
    pub fn category(&self) -> Category {
        match self {
            SelectorError::DuplicateCategory(category) => *category,
            SelectorError::OrderViolation { attempted, .. } => *attempted,
        }
    }
}
