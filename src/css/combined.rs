use std::fmt;

use super::builder::SelectorBuilder;

/// A finished selector: either one compound selector or two selectors joined
/// by a combinator.
///
/// Only the `Compound` side carries fragment methods; a combined expression
/// can be rendered or combined further, never extended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selector {
    Compound(SelectorBuilder),
    Combined {
        left: Box<Selector>,
        combinator: String,
        right: Box<Selector>,
    },
}

impl Selector {
    pub fn combine(
        left: impl Into<Selector>,
        combinator: impl AsRef<str>,
        right: impl Into<Selector>,
    ) -> Self {
        Selector::Combined {
            left: Box::new(left.into()),
            combinator: combinator.as_ref().to_string(),
            right: Box::new(right.into()),
        }
    }

    /// Renders the selector. Combined parts are joined as
    /// `left + " " + combinator + " " + right`, with the combinator verbatim.
    pub fn finalize(&self) -> String {
        self.to_string()
    }

    /// Number of compound selectors in the expression.
    pub fn compound_count(&self) -> usize {
        match self {
            Selector::Compound(_) => 1,
            Selector::Combined { left, right, .. } => {
                left.compound_count() + right.compound_count()
            }
        }
    }
}

impl From<SelectorBuilder> for Selector {
    fn from(builder: SelectorBuilder) -> Self {
        Selector::Compound(builder)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Compound(builder) => f.write_str(builder.as_str()),
            Selector::Combined {
                left,
                combinator,
                right,
            } => write!(f, "{} {} {}", left, combinator, right),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::css::selector::{Category, Combinator};

    fn compound(category: Category, value: &str) -> SelectorBuilder {
        SelectorBuilder::starting_with(category, value)
    }

    #[test]
    fn test_combine_joins_with_spaces() {
        let selector = Selector::combine(
            compound(Category::Type, "ul"),
            ">",
            compound(Category::Type, "li"),
        );
        assert_eq!(selector.finalize(), "ul > li");
        assert_eq!(selector.compound_count(), 2);
    }

    #[test]
    fn test_descendant_combinator_is_inserted_verbatim() {
        let selector = Selector::combine(
            compound(Category::Type, "nav"),
            Combinator::Descendant,
            compound(Category::Type, "a"),
        );
        assert_eq!(selector.finalize(), "nav   a");
    }

    #[test]
    fn test_combinator_text_is_not_validated() {
        let selector = Selector::combine(
            compound(Category::Class, "a"),
            "||",
            compound(Category::Class, "b"),
        );
        assert_eq!(selector.finalize(), ".a || .b");
    }

    #[test]
    fn test_nested_combination_renders_recursively() {
        let inner = Selector::combine(
            compound(Category::Class, "a"),
            "~",
            compound(Category::Class, "b"),
        );
        let outer = Selector::combine(compound(Category::Id, "root"), ">", inner.clone());
        assert_eq!(outer.finalize(), "#root > .a ~ .b");
        assert_eq!(outer.finalize(), format!("#root > {}", inner.finalize()));
        assert_eq!(outer.compound_count(), 3);
    }
}
