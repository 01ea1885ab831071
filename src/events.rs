use crate::dom::{self, DomElement};
use ambient_core::{GazeEvent, Listener};
use wasm_bindgen::JsValue;
use web_sys as web;

/// Who receives gaze notifications on the web.
#[derive(Clone, Debug, PartialEq)]
pub enum WebListener {
    /// A JS callback registered through `addEventListener`; called with a
    /// `CustomEvent` whose `detail` carries the payload.
    Function(js_sys::Function),
    /// Re-dispatch on `document` as `gazemove`/`gazefocus`/`gazeblur`.
    Document,
}

pub fn event_detail(event: &GazeEvent<DomElement>) -> JsValue {
    let obj = js_sys::Object::new();
    match event {
        GazeEvent::Move { x, y, timestamp_ms } => {
            dom::set_prop(&obj, "x", &(*x).into());
            dom::set_prop(&obj, "y", &(*y).into());
            dom::set_prop(&obj, "timestamp", &(*timestamp_ms).into());
        }
        GazeEvent::Focus {
            element,
            x,
            y,
            focus_duration_ms,
        } => {
            dom::set_prop(&obj, "element", element.as_js());
            dom::set_prop(&obj, "x", &(*x).into());
            dom::set_prop(&obj, "y", &(*y).into());
            if let Some(d) = focus_duration_ms {
                dom::set_prop(&obj, "focusDuration", &(*d).into());
            }
        }
        GazeEvent::Blur {
            element,
            duration_ms,
            x,
            y,
        } => {
            dom::set_prop(&obj, "element", element.as_js());
            dom::set_prop(&obj, "duration", &(*duration_ms).into());
            dom::set_prop(&obj, "x", &(*x).into());
            dom::set_prop(&obj, "y", &(*y).into());
        }
    }
    obj.into()
}

fn custom_event(event: &GazeEvent<DomElement>) -> Option<web::CustomEvent> {
    let name = event.kind().dom_name();
    let init = web::CustomEventInit::new();
    init.set_detail(&event_detail(event));
    match web::CustomEvent::new_with_event_init_dict(name, &init) {
        Ok(ev) => Some(ev),
        Err(e) => {
            log::error!("[gaze] CustomEvent({}) error: {:?}", name, e);
            None
        }
    }
}

impl Listener<DomElement> for WebListener {
    fn notify(&self, event: &GazeEvent<DomElement>) {
        match self {
            WebListener::Function(f) => {
                if let Some(ev) = custom_event(event) {
                    if let Err(e) = f.call1(&JsValue::NULL, &ev) {
                        log::error!("[gaze] listener threw: {:?}", e);
                    }
                }
            }
            WebListener::Document => {
                if let Some(document) = dom::window_document() {
                    dom::dispatch_custom_event(
                        &document,
                        event.kind().dom_name(),
                        &event_detail(event),
                    );
                }
            }
        }
    }
}
