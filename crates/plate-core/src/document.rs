//! Whole-document and fragment rendering.

use crate::element::{Args, Element, IntoArgs};
use crate::normalize::Child;

pub const DOCTYPE: &str = "<!DOCTYPE html>";

/// Render a full document: the doctype followed by an `<html>` root built
/// from `args` (optional root attributes, then top-level nodes).
///
/// ```
/// use plate_core::render_document;
/// use plate_core::tags::{body, head, title};
///
/// let doc = render_document((head(title("Hello")), body("World")));
/// assert_eq!(
///     doc,
///     "<!DOCTYPE html><html><head><title>Hello</title></head><body>World</body></html>"
/// );
/// ```
pub fn render_document(args: impl IntoArgs) -> String {
    let Args { attrs, children } = args.into_args();
    with_doctype(&Element::new("html", attrs, children))
}

pub(crate) fn with_doctype(root: &Element) -> String {
    let mut out = String::from(DOCTYPE);
    root.write_to(&mut out);
    out
}

/// Render children without a wrapping element.
pub fn render_fragment(children: impl Into<Child>) -> String {
    let mut out = String::new();
    for content in children.into().normalize() {
        content.write_to(&mut out);
    }
    out
}
