//! Element nodes and call arguments.
//!
//! An [`Element`] owns its tag name, attributes and normalized children.
//! Only the children can change after construction, and only by appending
//! through [`Element::add`].

use std::fmt;

use tracing::{debug, trace};

use crate::attrs::Attrs;
use crate::normalize::{normalize, Child, Content};

/// Tags rendered without content or closing tag.
pub const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Check if a tag is a void element (ASCII case-insensitive).
pub fn is_void_tag(tag: &str) -> bool {
    VOID_TAGS.iter().any(|void| void.eq_ignore_ascii_case(tag))
}

/// Check if a tag or attribute name can be serialized as-is.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && !name.chars().any(|c| {
            c.is_ascii_whitespace()
                || c.is_control()
                || matches!(c, '<' | '>' | '"' | '\'' | '/' | '=')
        })
}

/// One HTML tag instance.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: String,
    attrs: Attrs,
    children: Vec<Content>,
    is_void: bool,
}

impl Element {
    /// Build an element without validating `tag`. Children given to a void
    /// tag are discarded.
    pub fn new(tag: impl Into<String>, attrs: Attrs, children: impl Into<Child>) -> Self {
        let tag = tag.into();
        let is_void = is_void_tag(&tag);
        let normalized = normalize([children.into()]);

        let children = if is_void {
            if !normalized.is_empty() {
                debug!(tag = %tag, discarded = normalized.len(), "void element ignores children");
            }
            Vec::new()
        } else {
            normalized
        };

        Self {
            tag,
            attrs,
            children,
            is_void,
        }
    }

    pub fn tag_name(&self) -> &str {
        &self.tag
    }

    pub fn attrs(&self) -> &Attrs {
        &self.attrs
    }

    pub fn children(&self) -> &[Content] {
        &self.children
    }

    pub fn is_void(&self) -> bool {
        self.is_void
    }

    /// Normalize `children` and append them after the existing ones.
    ///
    /// Returns `self` for chaining. Appending to a void element is allowed but
    /// never shows up in the rendered output.
    pub fn add(&mut self, children: impl Into<Child>) -> &mut Self {
        let added = normalize([children.into()]);
        if !added.is_empty() {
            trace!(tag = %self.tag, count = added.len(), "appending children");
            self.children.extend(added);
        }
        self
    }

    /// Render this element and its subtree to HTML.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.write_to(&mut out);
        out
    }

    pub(crate) fn write_to(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        self.attrs.write_to(out);
        out.push('>');

        if self.is_void {
            return;
        }

        for child in &self.children {
            child.write_to(out);
        }

        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Free-function form of [`Element::add`].
pub fn add(target: &mut Element, children: impl Into<Child>) -> &mut Element {
    target.add(children)
}

// =========================================================================
// Call arguments
// =========================================================================

/// A single constructor argument: an attribute map or a child.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Attrs(Attrs),
    Child(Child),
}

/// Constructor arguments after the attribute/child split.
#[derive(Debug, Clone, PartialEq)]
pub struct Args {
    pub attrs: Attrs,
    pub children: Child,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            attrs: Attrs::new(),
            children: Child::Absent,
        }
    }
}

/// Values accepted as the argument list of a tag constructor.
///
/// Attributes are only accepted in the first position; a tuple carrying an
/// [`Attrs`] anywhere else does not type-check.
pub trait IntoArgs {
    fn into_args(self) -> Args;
}

impl IntoArgs for Args {
    fn into_args(self) -> Args {
        self
    }
}

impl IntoArgs for Attrs {
    fn into_args(self) -> Args {
        Args {
            attrs: self,
            children: Child::Absent,
        }
    }
}

impl From<Attrs> for Arg {
    fn from(attrs: Attrs) -> Self {
        Arg::Attrs(attrs)
    }
}

macro_rules! child_args {
    ($($ty:ty),*) => {
        $(
            impl IntoArgs for $ty {
                fn into_args(self) -> Args {
                    Args {
                        attrs: Attrs::new(),
                        children: self.into(),
                    }
                }
            }

            impl From<$ty> for Arg {
                fn from(value: $ty) -> Self {
                    Arg::Child(value.into())
                }
            }
        )*
    };
}

child_args!(
    Child, Element, &str, String, &String, bool, (), i8, i16, i32, i64, isize, u8, u16, u32, u64,
    usize, f32, f64
);

macro_rules! generic_child_args {
    ($([$($param:tt)*] $ty:ty),*) => {
        $(
            impl<$($param)*> IntoArgs for $ty {
                fn into_args(self) -> Args {
                    Args {
                        attrs: Attrs::new(),
                        children: self.into(),
                    }
                }
            }

            impl<$($param)*> From<$ty> for Arg {
                fn from(value: $ty) -> Self {
                    Arg::Child(value.into())
                }
            }
        )*
    };
}

generic_child_args!(
    [T: Into<Child>] Option<T>,
    [T: Into<Child>] Vec<T>,
    [T: Into<Child>, const N: usize] [T; N]
);

macro_rules! tuple_args {
    ($first:ident $(, $rest:ident)*) => {
        impl<$first: Into<Arg>, $($rest: Into<Child>),*> IntoArgs for ($first, $($rest,)*) {
            #[allow(non_snake_case)]
            fn into_args(self) -> Args {
                let ($first, $($rest,)*) = self;
                let rest: Vec<Child> = vec![$($rest.into()),*];
                match $first.into() {
                    Arg::Attrs(attrs) => Args {
                        attrs,
                        children: Child::List(rest),
                    },
                    Arg::Child(first) => {
                        let mut children = Vec::with_capacity(rest.len() + 1);
                        children.push(first);
                        children.extend(rest);
                        Args {
                            attrs: Attrs::new(),
                            children: Child::List(children),
                        }
                    }
                }
            }
        }
    };
}

tuple_args!(A);
tuple_args!(A, B);
tuple_args!(A, B, C);
tuple_args!(A, B, C, D);
tuple_args!(A, B, C, D, E);
tuple_args!(A, B, C, D, E, F);
tuple_args!(A, B, C, D, E, F, G);
tuple_args!(A, B, C, D, E, F, G, H);
tuple_args!(A, B, C, D, E, F, G, H, I);
tuple_args!(A, B, C, D, E, F, G, H, I, J);
tuple_args!(A, B, C, D, E, F, G, H, I, J, K);
tuple_args!(A, B, C, D, E, F, G, H, I, J, K, L);
