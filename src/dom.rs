use ambient_core::LayoutElement;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Wall-clock milliseconds, the same clock as `Date.now()`.
#[inline]
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// Attach a listener for the page lifetime.
pub fn add_listener<T>(target: &web::EventTarget, event: &str, handler: impl FnMut(T) + 'static)
where
    T: wasm_bindgen::convert::FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(T)>);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        log::warn!("addEventListener({}) failed: {:?}", event, e);
    }
    closure.forget();
}

/// Broadcast a `CustomEvent` on the document.
pub fn dispatch_custom_event(document: &web::Document, name: &str, detail: &JsValue) {
    let init = web::CustomEventInit::new();
    init.set_detail(detail);
    match web::CustomEvent::new_with_event_init_dict(name, &init) {
        Ok(ev) => {
            _ = document.dispatch_event(&ev);
        }
        Err(e) => log::error!("CustomEvent({}) error: {:?}", name, e),
    }
}

#[inline]
pub fn set_prop(obj: &js_sys::Object, key: &str, value: &JsValue) {
    _ = js_sys::Reflect::set(obj, &JsValue::from_str(key), value);
}

/// Element handle compared by JS identity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DomElement(pub web::Element);

impl DomElement {
    pub fn as_js(&self) -> &JsValue {
        self.0.as_ref()
    }
}

impl LayoutElement for DomElement {
    fn dom_id(&self) -> Option<String> {
        let id = self.0.id();
        (!id.is_empty()).then_some(id)
    }

    fn child_count(&self) -> u32 {
        self.0.child_element_count()
    }

    fn client_size(&self) -> (f64, f64) {
        (self.0.client_width() as f64, self.0.client_height() as f64)
    }

    fn add_class(&self, class: &str) {
        _ = self.0.class_list().add_1(class);
    }

    fn remove_class(&self, class: &str) {
        _ = self.0.class_list().remove_1(class);
    }
}
