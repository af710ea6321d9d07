//! Tag factory.
//!
//! [`tag`] builds an element for any serializable tag name. The functions
//! below it are pre-bound constructors for the standard HTML tags; they are a
//! convenience, not a whitelist.

use crate::element::{is_valid_name, Arg, Args, Element, IntoArgs};
use crate::normalize::Child;
use crate::PlateError;

/// Build an element for an arbitrary tag name.
///
/// Fails when the tag or one of the attribute names would break the markup.
pub fn tag(name: &str, args: impl IntoArgs) -> Result<Element, PlateError> {
    if !is_valid_name(name) {
        return Err(PlateError::InvalidTagName {
            name: name.to_owned(),
        });
    }
    let Args { attrs, children } = args.into_args();
    attrs.validate(name)?;
    Ok(Element::new(name, attrs, children))
}

/// Build an element from a runtime argument list.
///
/// The first argument is taken as the attribute map when it is one; an
/// attribute map anywhere else is an error.
pub fn make_element(name: &str, args: Vec<Arg>) -> Result<Element, PlateError> {
    let mut args = args.into_iter().enumerate().peekable();
    let mut split = Args::default();
    if let Some((_, Arg::Attrs(attrs))) = args.next_if(|(_, arg)| matches!(arg, Arg::Attrs(_))) {
        split.attrs = attrs;
    }

    let mut children = Vec::new();
    for (position, arg) in args {
        match arg {
            Arg::Child(child) => children.push(child),
            Arg::Attrs(_) => {
                return Err(PlateError::MisplacedAttributes {
                    tag: name.to_owned(),
                    position,
                });
            }
        }
    }
    split.children = Child::List(children);

    tag(name, split)
}

fn build(name: &'static str, args: impl IntoArgs) -> Element {
    let Args { attrs, children } = args.into_args();
    Element::new(name, attrs, children)
}

macro_rules! define_tags {
    ($($name:ident),* $(,)?) => {
        $(
            #[doc = concat!("Build a `<", stringify!($name), ">` element.")]
            pub fn $name(args: impl IntoArgs) -> Element {
                build(stringify!($name), args)
            }
        )*

        /// Tags with a pre-bound constructor in this module.
        pub const KNOWN_TAGS: &[&str] = &[$(stringify!($name)),*];
    };
}

define_tags!(
    a, abbr, address, area, article, aside, audio, b, base, bdi, bdo, blockquote, body, br,
    button, canvas, caption, cite, code, col, colgroup, data, datalist, dd, del, details, dfn,
    dialog, div, dl, dt, em, embed, fieldset, figcaption, figure, footer, form, h1, h2, h3, h4,
    h5, h6, head, header, hgroup, hr, html, i, iframe, img, input, ins, kbd, label, legend, li,
    link, main, map, mark, menu, meta, meter, nav, noscript, object, ol, optgroup, option,
    output, p, param, picture, pre, progress, q, rp, rt, ruby, s, samp, script, search, section,
    select, slot, small, source, span, strong, style, sub, summary, sup, table, tbody, td,
    template, textarea, tfoot, th, thead, time, title, tr, track, u, ul, var, video, wbr,
);
