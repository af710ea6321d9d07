//! Declarative element trees as data.
//!
//! Mirrors the child input model in a serde-friendly shape so a tree can be
//! read from JSON or a JavaScript object:
//!
//! ```text
//! null                          → absent
//! true / 1.5 / "text"           → primitive child
//! [ ... ]                       → nested children
//! { "tag", "attrs"?, "children"? } → element
//! ```
//!
//! Conversion into [`Child`] validates tag and attribute names.

use serde::Deserialize;
use tracing::trace;

use crate::attrs::Attrs;
use crate::document::{render_fragment, with_doctype};
use crate::element::{Args, Element};
use crate::normalize::Child;
use crate::tags::tag;
use crate::PlateError;

/// A described child value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Markup {
    Absent,
    Bool(bool),
    Num(f64),
    Text(String),
    List(Vec<Markup>),
    Node(NodeSpec),
}

/// A described element.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NodeSpec {
    pub tag: String,
    #[serde(default)]
    pub attrs: Attrs,
    #[serde(default)]
    pub children: Vec<Markup>,
}

/// A described document: root attributes and top-level nodes.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DocumentSpec {
    #[serde(default)]
    pub attrs: Attrs,
    #[serde(default)]
    pub children: Vec<Markup>,
}

impl Markup {
    pub fn into_child(self) -> Result<Child, PlateError> {
        Ok(match self {
            Markup::Absent => Child::Absent,
            Markup::Bool(b) => Child::Bool(b),
            Markup::Num(n) => Child::Num(n),
            Markup::Text(text) => Child::Text(text),
            Markup::List(items) => Child::List(into_children(items)?),
            Markup::Node(node) => Child::Node(node.into_element()?),
        })
    }

    /// Render as a fragment, without a wrapping element.
    pub fn render(self) -> Result<String, PlateError> {
        Ok(render_fragment(self.into_child()?))
    }
}

impl NodeSpec {
    pub fn into_element(self) -> Result<Element, PlateError> {
        trace!(tag = %self.tag, "building described element");
        let children = Child::List(into_children(self.children)?);
        tag(
            &self.tag,
            Args {
                attrs: self.attrs,
                children,
            },
        )
    }
}

impl DocumentSpec {
    /// Render with the doctype and `<html>` root.
    pub fn render(self) -> Result<String, PlateError> {
        let root = tag(
            "html",
            Args {
                attrs: self.attrs,
                children: Child::List(into_children(self.children)?),
            },
        )?;
        Ok(with_doctype(&root))
    }
}

fn into_children(items: Vec<Markup>) -> Result<Vec<Child>, PlateError> {
    items.into_iter().map(Markup::into_child).collect()
}
