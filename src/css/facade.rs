//! Entry points for building selectors. Each call starts a fresh builder, so
//! no two chains ever share state.

use super::builder::SelectorBuilder;
use super::combined::Selector;
use super::selector::Category;

pub fn element(value: impl AsRef<str>) -> SelectorBuilder {
    SelectorBuilder::starting_with(Category::Type, value.as_ref())
}

pub fn id(value: impl AsRef<str>) -> SelectorBuilder {
    SelectorBuilder::starting_with(Category::Id, value.as_ref())
}

pub fn class(value: impl AsRef<str>) -> SelectorBuilder {
    SelectorBuilder::starting_with(Category::Class, value.as_ref())
}

pub fn attr(value: impl AsRef<str>) -> SelectorBuilder {
    SelectorBuilder::starting_with(Category::Attribute, value.as_ref())
}

pub fn pseudo_class(value: impl AsRef<str>) -> SelectorBuilder {
    SelectorBuilder::starting_with(Category::PseudoClass, value.as_ref())
}

pub fn pseudo_element(value: impl AsRef<str>) -> SelectorBuilder {
    SelectorBuilder::starting_with(Category::PseudoElement, value.as_ref())
}

/// Joins two selectors with `combinator`, e.g. `" "`, `"+"`, `"~"` or `">"`.
pub fn combine(
    left: impl Into<Selector>,
    combinator: impl AsRef<str>,
    right: impl Into<Selector>,
) -> Selector {
    Selector::combine(left, combinator, right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::css::SelectorError;

    #[test]
    fn test_each_entry_point_starts_its_category() {
        assert_eq!(element("div").finalize(), "div");
        assert_eq!(id("main").finalize(), "#main");
        assert_eq!(class("box").finalize(), ".box");
        assert_eq!(attr("disabled").finalize(), "[disabled]");
        assert_eq!(pseudo_class("hover").finalize(), ":hover");
        assert_eq!(pseudo_element("after").finalize(), "::after");
    }

    #[test]
    fn test_entry_points_do_not_share_state() -> Result<(), SelectorError> {
        let first = id("a");
        let second = id("b").class("x")?;
        assert_eq!(first.finalize(), "#a");
        assert_eq!(second.finalize(), "#b.x");
        assert!(first.id("c").is_err());
        Ok(())
    }

    #[test]
    fn test_entry_point_chain_enforces_order() {
        assert!(matches!(
            class("x").element("y"),
            Err(SelectorError::OrderViolation { .. })
        ));
        assert!(matches!(
            pseudo_element("before").pseudo_element("after"),
            Err(SelectorError::DuplicateCategory(_))
        ));
    }

    #[test]
    fn test_combine_accepts_builders_and_selectors() {
        let pair = combine(element("h1"), "+", element("p"));
        let chained = combine(pair, "~", class("note"));
        assert_eq!(chained.finalize(), "h1 + p ~ .note");
    }
}
