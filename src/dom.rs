use wasm_bindgen::JsCast;
use web_sys::{Element, NodeList};

/// Collects the element nodes of a query result, skipping any other kind of node.
pub(crate) fn to_elements(list: NodeList) -> Vec<Element> {
    let mut result = Vec::with_capacity(list.length() as usize);

    for index in 0..list.length() {
        if let Some(item) = list.get(index) {
            if !item.has_type::<Element>() {
                continue;
            }
            let item = item
                .dyn_into::<Element>()
                .expect("could not cast node to element");
            result.push(item);
        }
    }

    result
}
