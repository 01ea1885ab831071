use crate::dom::{self, DomElement};
use crate::events::WebListener;
use crate::media;
use ambient_core::{
    CaptureResource, EventBus, GazeConfig, GazeError, GazeEventKind, GazeTracker,
    InitStep, Listener, ParseError, Scope,
};
use std::cell::{OnceCell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

/// Pointer-driven gaze manager: tracker state plus its listener bus.
#[wasm_bindgen]
#[derive(Clone)]
pub struct GazeManager {
    tracker: Rc<RefCell<GazeTracker<DomElement>>>,
    bus: Rc<RefCell<EventBus<WebListener>>>,
}

impl GazeManager {
    /// Create a manager and start listening for mouse moves on the document.
    pub fn new(config: GazeConfig) -> Self {
        let mut bus = EventBus::new();
        for kind in GazeEventKind::ALL {
            bus.subscribe(Scope::Global, kind, WebListener::Document);
        }
        let manager = Self {
            tracker: Rc::new(RefCell::new(GazeTracker::new(config))),
            bus: Rc::new(RefCell::new(bus)),
        };
        manager.wire_mousemove();
        manager
    }

    fn wire_mousemove(&self) {
        let Some(document) = dom::window_document() else {
            log::warn!("[gaze] no document; pointer tracking unavailable");
            return;
        };
        let m = self.clone();
        let doc = document.clone();
        dom::add_listener(&document, "mousemove", move |ev: web::MouseEvent| {
            m.handle_mouse_move(&doc, ev.client_x() as f64, ev.client_y() as f64);
        });
    }

    fn handle_mouse_move(&self, document: &web::Document, x: f64, y: f64) {
        let events = self
            .tracker
            .borrow_mut()
            .handle_pointer_move(x, y, dom::now_ms(), |x, y| {
                document
                    .element_from_point(x as f32, y as f32)
                    .map(DomElement)
            });
        for event in &events {
            let recipients = self.bus.borrow().recipients(event.kind());
            for listener in recipients {
                listener.notify(event);
            }
        }
    }

    pub async fn initialize_async(&self) -> bool {
        let step = self.tracker.borrow_mut().begin_initialize();
        let generation = match step {
            InitStep::Ready => return true,
            InitStep::InFlight => {
                log::warn!("[gaze] {}", GazeError::AlreadyInitializing);
                return false;
            }
            InitStep::Acquire(generation) => generation,
        };
        let result = media::request_camera()
            .await
            .map(|c| Box::new(c) as Box<dyn CaptureResource>);
        self.tracker
            .borrow_mut()
            .finish_initialize(generation, result)
    }

    pub fn subscribe(&self, kind: GazeEventKind, callback: js_sys::Function) {
        self.bus
            .borrow_mut()
            .subscribe(Scope::Local, kind, WebListener::Function(callback));
    }

    pub fn unsubscribe(&self, kind: GazeEventKind, callback: js_sys::Function) -> usize {
        self.bus
            .borrow_mut()
            .unsubscribe(Scope::Local, kind, &WebListener::Function(callback))
    }

    pub fn position(&self) -> (f64, f64) {
        self.tracker.borrow().position()
    }
}

fn parse_kind(kind: &str) -> Result<GazeEventKind, JsValue> {
    kind.parse()
        .map_err(|e: ParseError| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen]
impl GazeManager {
    /// Resolves to `true` once tracking is active, `false` if capture failed.
    pub fn initialize(&self) -> js_sys::Promise {
        let m = self.clone();
        wasm_bindgen_futures::future_to_promise(async move {
            Ok(JsValue::from_bool(m.initialize_async().await))
        })
    }

    #[wasm_bindgen(js_name = addEventListener)]
    pub fn add_event_listener(&self, kind: &str, callback: js_sys::Function) -> Result<(), JsValue> {
        self.subscribe(parse_kind(kind)?, callback);
        Ok(())
    }

    #[wasm_bindgen(js_name = removeEventListener)]
    pub fn remove_event_listener(
        &self,
        kind: &str,
        callback: js_sys::Function,
    ) -> Result<(), JsValue> {
        self.unsubscribe(parse_kind(kind)?, callback);
        Ok(())
    }

    pub fn stop(&self) {
        self.tracker.borrow_mut().stop();
    }

    #[wasm_bindgen(js_name = getGazePosition)]
    pub fn get_gaze_position(&self) -> JsValue {
        let (x, y) = self.position();
        let obj = js_sys::Object::new();
        dom::set_prop(&obj, "x", &x.into());
        dom::set_prop(&obj, "y", &y.into());
        obj.into()
    }

    #[wasm_bindgen(js_name = isTracking)]
    pub fn is_tracking(&self) -> bool {
        self.tracker.borrow().is_tracking()
    }
}

thread_local! {
    static GAZE: OnceCell<GazeManager> = const { OnceCell::new() };
}

/// The page-wide manager, created on first request.
#[wasm_bindgen(js_name = getGazeManager)]
pub fn gaze_manager() -> GazeManager {
    GAZE.with(|cell| cell.get_or_init(|| GazeManager::new(GazeConfig::default())).clone())
}
