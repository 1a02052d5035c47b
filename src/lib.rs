use gloo_console::{error, log};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Window};

pub mod collapsible;
mod dom;

const COLLAPSIBLE_SELECTOR: &str = ".collapsible";

/// Entry point for the host page, called once the module has been instantiated.
#[wasm_bindgen]
pub fn run() -> Result<(), JsValue> {
    let window = web_sys::window().expect("global window does not exists");
    let document = window.document().expect("expecting a document on window");
    attach(&window, &document)
}

/// Arranges for collapsible initialisation to run once the page has loaded.
///
/// Initialisation is driven by the window load event. The load event never refires, so
/// if the document has already finished loading by the time this runs the ready-state
/// check below invokes initialisation directly instead. Both triggers can fire when the
/// document completes loading while this is executing; initialisation is not suppressed
/// on the second trigger.
pub fn attach(window: &Window, document: &Document) -> Result<(), JsValue> {
    let document_clone = document.clone();
    let listener = Closure::wrap(Box::new(move |_event: JsValue| {
        if let Err(e) = initialize_collapsibles(&document_clone) {
            error!("unable to initialise collapsibles:", e)
        }
    }) as Box<dyn Fn(JsValue)>);
    window.add_event_listener_with_callback("load", listener.as_ref().unchecked_ref())?;
    listener.forget();

    if document.ready_state() == "complete" {
        initialize_collapsibles(document)?;
    }

    Ok(())
}

/// Initialises accordion behaviour on every element marked with the collapsible class.
pub fn initialize_collapsibles(document: &Document) -> Result<(), JsValue> {
    log!("initialising collapsibles");

    let elements = collapsible_elements(document)?;
    collapsible::init(elements, collapsible::Options { accordion: true })
}

/// Gathers the elements to be initialised. An empty result is not an error; the widget
/// library is still invoked and does nothing.
pub fn collapsible_elements(document: &Document) -> Result<Vec<Element>, JsValue> {
    Ok(dom::to_elements(
        document.query_selector_all(COLLAPSIBLE_SELECTOR)?,
    ))
}
