pub mod builder;
pub mod combined;
pub mod error;
pub mod facade;
pub mod selector;
mod test_cases;

// Re-export main types for convenience
pub use builder::SelectorBuilder;
pub use combined::Selector;
pub use error::SelectorError;
pub use facade::{attr, class, combine, element, id, pseudo_class, pseudo_element};
pub use selector::{Category, Combinator};
