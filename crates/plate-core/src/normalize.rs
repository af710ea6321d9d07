//! Child values and their normalization.
//!
//! A [`Child`] is the raw, arbitrarily nested input accepted by constructors.
//! [`normalize`] flattens it depth-first, left to right, into the [`Content`]
//! sequence an element actually stores, dropping every absent value.

use crate::element::Element;
use crate::escape::{escape_text, format_number};

/// Raw child input.
#[derive(Debug, Clone, PartialEq)]
pub enum Child {
    Node(Element),
    Text(String),
    Num(f64),
    Bool(bool),
    /// Ignored wherever it appears.
    Absent,
    List(Vec<Child>),
}

/// One entry of an element's normalized children.
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    Node(Element),
    Text(String),
    Num(f64),
    Bool(bool),
}

impl Child {
    /// Flatten this child on its own.
    pub fn normalize(self) -> Vec<Content> {
        normalize([self])
    }
}

impl Content {
    pub(crate) fn write_to(&self, out: &mut String) {
        match self {
            Content::Node(el) => el.write_to(out),
            Content::Text(text) => out.push_str(&escape_text(text)),
            Content::Num(n) => out.push_str(&format_number(*n)),
            Content::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        }
    }
}

/// Flatten `inputs` into a single ordered sequence.
///
/// Uses an explicit stack of iterators so nesting depth is bounded by the
/// heap, not the call stack.
pub fn normalize(inputs: impl IntoIterator<Item = Child>) -> Vec<Content> {
    let mut out = Vec::new();
    let first: Vec<Child> = inputs.into_iter().collect();
    let mut stack = vec![first.into_iter()];

    while let Some(level) = stack.last_mut() {
        let next = level.next();
        match next {
            None => {
                stack.pop();
            }
            Some(Child::Absent) => {}
            Some(Child::List(items)) => stack.push(items.into_iter()),
            Some(Child::Node(el)) => out.push(Content::Node(el)),
            Some(Child::Text(text)) => out.push(Content::Text(text)),
            Some(Child::Num(n)) => out.push(Content::Num(n)),
            Some(Child::Bool(b)) => out.push(Content::Bool(b)),
        }
    }

    out
}

// =========================================================================
// Conversions
// =========================================================================

impl From<Element> for Child {
    fn from(el: Element) -> Self {
        Child::Node(el)
    }
}

impl From<&str> for Child {
    fn from(text: &str) -> Self {
        Child::Text(text.to_owned())
    }
}

impl From<String> for Child {
    fn from(text: String) -> Self {
        Child::Text(text)
    }
}

impl From<&String> for Child {
    fn from(text: &String) -> Self {
        Child::Text(text.clone())
    }
}

impl From<bool> for Child {
    fn from(b: bool) -> Self {
        Child::Bool(b)
    }
}

impl From<()> for Child {
    fn from(_: ()) -> Self {
        Child::Absent
    }
}

macro_rules! child_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Child {
                fn from(n: $ty) -> Self {
                    Child::Num(n as f64)
                }
            }
        )*
    };
}

child_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl<T: Into<Child>> From<Option<T>> for Child {
    fn from(value: Option<T>) -> Self {
        value.map_or(Child::Absent, Into::into)
    }
}

impl<T: Into<Child>> From<Vec<T>> for Child {
    fn from(items: Vec<T>) -> Self {
        Child::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Child>, const N: usize> From<[T; N]> for Child {
    fn from(items: [T; N]) -> Self {
        Child::List(items.into_iter().map(Into::into).collect())
    }
}

macro_rules! child_from_tuple {
    ($($name:ident),+) => {
        impl<$($name: Into<Child>),+> From<($($name,)+)> for Child {
            #[allow(non_snake_case)]
            fn from(($($name,)+): ($($name,)+)) -> Self {
                Child::List(vec![$($name.into()),+])
            }
        }
    };
}

child_from_tuple!(A);
child_from_tuple!(A, B);
child_from_tuple!(A, B, C);
child_from_tuple!(A, B, C, D);
child_from_tuple!(A, B, C, D, E);
child_from_tuple!(A, B, C, D, E, F);
child_from_tuple!(A, B, C, D, E, F, G);
child_from_tuple!(A, B, C, D, E, F, G, H);
child_from_tuple!(A, B, C, D, E, F, G, H, I);
child_from_tuple!(A, B, C, D, E, F, G, H, I, J);
child_from_tuple!(A, B, C, D, E, F, G, H, I, J, K);
child_from_tuple!(A, B, C, D, E, F, G, H, I, J, K, L);
