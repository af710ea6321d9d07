//! WASM bindings for the plate renderer.
//!
//! Exposes rendering of plain JS object descriptions (`{ tag, attrs, children }`)
//! to JavaScript via wasm-bindgen. Errors are thrown as JS errors.

use plate_core::{DocumentSpec, Markup, PlateError, VOID_TAGS};
use wasm_bindgen::prelude::*;

/// Render a described element tree (or list of children) to HTML.
#[wasm_bindgen]
pub fn render(value: JsValue) -> Result<String, JsError> {
    let markup: Markup =
        serde_wasm_bindgen::from_value(value).map_err(|e| JsError::new(&e.to_string()))?;
    render_markup(markup).map_err(|e| JsError::new(&e.to_string()))
}

/// Render a described document `{ attrs, children }` with doctype and `<html>` root.
#[wasm_bindgen(js_name = renderDocument)]
pub fn render_document(value: JsValue) -> Result<String, JsError> {
    let spec: DocumentSpec =
        serde_wasm_bindgen::from_value(value).map_err(|e| JsError::new(&e.to_string()))?;
    spec.render().map_err(|e| JsError::new(&e.to_string()))
}

/// Whether `tag` is rendered without children or closing tag.
#[wasm_bindgen(js_name = isVoid)]
pub fn is_void(tag: &str) -> bool {
    plate_core::is_void_tag(tag)
}

/// The fixed set of void tag names, as a JS array of strings.
#[wasm_bindgen(js_name = voidTags)]
pub fn void_tags() -> js_sys::Array {
    VOID_TAGS.iter().map(|t| JsValue::from_str(t)).collect()
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn render_markup(markup: Markup) -> Result<String, PlateError> {
    markup.render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use plate_core::{Attrs, NodeSpec};
    use pretty_assertions::assert_eq;

    // =========================================================================
    // Native tests (non-WASM) — the pipeline behind the bindings
    // =========================================================================

    fn node(tag: &str, attrs: Attrs, children: Vec<Markup>) -> Markup {
        Markup::Node(NodeSpec {
            tag: tag.into(),
            attrs,
            children,
        })
    }

    #[test]
    fn test_render_markup() {
        let tree = node(
            "ul",
            Attrs::new(),
            vec![
                Markup::List(vec![
                    Markup::Absent,
                    node("li", Attrs::new(), vec![Markup::Text("1".into())]),
                ]),
                node("li", Attrs::new(), vec![Markup::Num(2.0)]),
            ],
        );
        assert_eq!(render_markup(tree).unwrap(), "<ul><li>1</li><li>2</li></ul>");
    }

    #[test]
    fn test_render_markup_void() {
        let tree = node(
            "input",
            Attrs::new().set("type", "checkbox").set("checked", true),
            vec![Markup::Text("ignored".into())],
        );
        assert_eq!(render_markup(tree).unwrap(), r#"<input type="checkbox" checked>"#);
    }

    #[test]
    fn test_render_markup_error() {
        let tree = node("bad tag", Attrs::new(), Vec::new());
        assert!(render_markup(tree).is_err());
    }

    #[test]
    fn test_is_void() {
        assert!(is_void("br"));
        assert!(!is_void("div"));
    }

    #[test]
    fn test_version() {
        let v = version();
        assert!(!v.is_empty());
        assert!(v.contains('.'));
    }

    #[test]
    fn test_multiple_renders_independent() {
        let out1 = render_markup(Markup::Text("a".into())).unwrap();
        let out2 = render_markup(Markup::Text("b".into())).unwrap();
        assert_eq!(out1, "a");
        assert_eq!(out2, "b");
    }
}
