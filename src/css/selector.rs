use std::fmt;

/// Kind of fragment a compound selector is assembled from.
///
/// Variants are declared in the order they must appear in a selector, so the
/// derived `Ord` agrees with [`Category::rank`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Type,
    Id,
    Class,
    Attribute,
    PseudoClass,
    PseudoElement,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Type,
        Category::Id,
        Category::Class,
        Category::Attribute,
        Category::PseudoClass,
        Category::PseudoElement,
    ];

    /// Position in the required fragment order, starting at 1.
    pub fn rank(self) -> u8 {
        match self {
            Category::Type => 1,
            Category::Id => 2,
            Category::Class => 3,
            Category::Attribute => 4,
            Category::PseudoClass => 5,
            Category::PseudoElement => 6,
        }
    }

    /// Whether the category may contribute at most one fragment.
    pub fn is_once_only(self) -> bool {
        matches!(
            self,
            Category::Type | Category::Id | Category::PseudoElement
        )
    }

    /// Renders a raw value as this category's fragment text.
    pub fn render(self, value: &str) -> String {
        match self {
            Category::Type => value.to_string(),
            Category::Id => format!("#{}", value),
            Category::Class => format!(".{}", value),
            Category::Attribute => format!("[{}]", value),
            Category::PseudoClass => format!(":{}", value),
            Category::PseudoElement => format!("::{}", value),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::Type => "element",
            Category::Id => "id",
            Category::Class => "class",
            Category::Attribute => "attribute",
            Category::PseudoClass => "pseudo-class",
            Category::PseudoElement => "pseudo-element",
        }
    }

    // bit used in the builder's occurrence mask
    pub(crate) fn mask(self) -> u8 {
        1 << (self.rank() - 1)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The conventional combinators. `combine` accepts any text, these are just
/// the spellings callers usually want.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Combinator {
    Descendant,
    Child,
    Adjacent,
    GeneralSibling,
}

impl Combinator {
    pub fn as_str(self) -> &'static str {
        match self {
            Combinator::Descendant => " ",
            Combinator::Child => ">",
            Combinator::Adjacent => "+",
            Combinator::GeneralSibling => "~",
        }
    }
}

impl AsRef<str> for Combinator {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
