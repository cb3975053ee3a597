pub mod cli;
pub mod codec;
pub mod css;
pub mod logger;
pub mod shapes;

pub use codec::{CodecError, from_text, from_text_positional, to_text};
pub use css::{
    Category, Combinator, Selector, SelectorBuilder, SelectorError, attr, class, combine, element,
    id, pseudo_class, pseudo_element,
};
pub use shapes::{Rectangle, rectangle};
