//! Plate
//!
//! Builds HTML element trees in memory and renders them to strings, without a
//! browser DOM. Children may be nested arbitrarily deep and may contain absent
//! values; both are flattened away before rendering.
//!
//! ```text
//! tags::div(args) → Element → render() → "<div>...</div>"
//! ```
//!
//! # Example
//!
//! ```
//! use plate_core::attrs;
//! use plate_core::tags::{input, li, p, ul, div};
//!
//! let page = div((p("hi"), ul(li("x"))));
//! assert_eq!(page.render(), "<div><p>hi</p><ul><li>x</li></ul></div>");
//!
//! let checkbox = input(attrs! { "type" => "checkbox", "checked" => true });
//! assert_eq!(checkbox.render(), r#"<input type="checkbox" checked>"#);
//! ```

pub mod attrs;
pub mod describe;
pub mod document;
pub mod element;
pub mod escape;
pub mod normalize;
pub mod tags;

pub use attrs::{AttrValue, Attrs};
pub use describe::{DocumentSpec, Markup, NodeSpec};
pub use document::{render_document, render_fragment};
pub use element::{add, is_valid_name, is_void_tag, Arg, Args, Element, IntoArgs, VOID_TAGS};
pub use normalize::{normalize, Child, Content};
pub use tags::{make_element, tag};

/// Error raised at the construction boundary for names or arguments that
/// cannot be serialized into well-formed HTML.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlateError {
    #[error("invalid tag name {name:?}")]
    InvalidTagName { name: String },

    #[error("invalid attribute name {name:?} on <{tag}>")]
    InvalidAttributeName { tag: String, name: String },

    #[error("attributes must be the first argument of <{tag}>, found at position {position}")]
    MisplacedAttributes { tag: String, position: usize },
}

/// Builds an [`Attrs`] map in insertion order.
///
/// ```
/// let a = plate_core::attrs! { "lang" => "en", "hidden" => false };
/// assert_eq!(a.len(), 2);
/// ```
#[macro_export]
macro_rules! attrs {
    () => {
        $crate::Attrs::new()
    };
    ($($name:expr => $value:expr),+ $(,)?) => {
        $crate::Attrs::new()$(.set($name, $value))+
    };
}

/// Builds a heterogeneous [`Child::List`] from any child-convertible values.
///
/// ```
/// use plate_core::{children, tags::{li, ul}};
///
/// let list = ul(children![(), li("1"), None::<&str>, children![li("2")]]);
/// assert_eq!(list.render(), "<ul><li>1</li><li>2</li></ul>");
/// ```
#[macro_export]
macro_rules! children {
    ($($child:expr),* $(,)?) => {
        $crate::Child::List(::std::vec![$($crate::Child::from($child)),*])
    };
}
