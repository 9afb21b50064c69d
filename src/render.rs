use crate::constants::{ICON_DATA_ATTR, LAYER_ELEMENT_ID};
use crate::dom;
use crate::style;
use backdrop_core::DecorationLayout;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Root element the icons are drawn into.
pub fn find_layer(document: &web::Document) -> anyhow::Result<web::HtmlElement> {
    let el = document
        .get_element_by_id(LAYER_ELEMENT_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", LAYER_ELEMENT_ID))?;
    el.dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("#{} is not an HTML element: {:?}", LAYER_ELEMENT_ID, e))
}

/// Replace the layer contents with one node per item.
///
/// Nodes are built into a fragment first so the swap is a single DOM
/// mutation and the previous set never mixes with the new one.
pub fn render_layout(
    document: &web::Document,
    layer: &web::HtmlElement,
    layout: &DecorationLayout,
) -> anyhow::Result<()> {
    let fragment = document.create_document_fragment();
    let class = style::icon_class(layout.mode);
    for item in &layout.items {
        let node = document
            .create_element("div")
            .map_err(|e| anyhow::anyhow!("create_element failed: {:?}", e))?;
        node.set_id(&item.key());
        node.set_class_name(&class);
        _ = node.set_attribute(ICON_DATA_ATTR, item.icon_name());
        _ = node.set_attribute("aria-hidden", "true");
        _ = node.set_attribute("style", &style::icon_style(item, layout.mode));
        fragment
            .append_child(&node)
            .map_err(|e| anyhow::anyhow!("append failed: {:?}", e))?;
    }
    dom::clear_children(layer);
    layer
        .append_child(&fragment)
        .map_err(|e| anyhow::anyhow!("layer append failed: {:?}", e))?;
    Ok(())
}

#[inline]
pub fn set_layer_opacity(layer: &web::HtmlElement, opacity: f64) {
    _ = layer
        .style()
        .set_property("opacity", &style::layer_opacity(opacity));
}
