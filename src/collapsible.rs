use js_sys::Array;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::Element;

/// Initialises the collapsible widget on each of the given elements, consuming them.
///
/// The widget library owns the returned instances; they are discarded here. Fails with
/// the underlying reference error when the library is not loaded on the page.
pub fn init(elements: Vec<Element>, options: Options) -> Result<(), JsValue> {
    let elements = elements.into_iter().map(JsValue::from).collect::<Array>();
    Collapsible::init(
        &elements,
        JsValue::from_serde(&options).expect("could not serialise options"),
    )?;
    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Options {
    /// Only one section may be open at a time; opening a section closes the others.
    pub accordion: bool,
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = M)]
    type Collapsible;

    #[wasm_bindgen(catch, static_method_of = Collapsible, js_namespace = M)]
    fn init(elements: &Array, options: JsValue) -> Result<JsValue, JsValue>;
}

#[cfg(test)]
mod tests {
    use super::Options;

    #[test]
    fn options_serialise_to_widget_shape() {
        let options =
            serde_json::to_value(Options { accordion: true }).expect("could not serialise options");
        assert_eq!(options, serde_json::json!({ "accordion": true }));
    }
}
