use crate::dom::{self, DomElement};
use ambient_core::{AdaptiveConfig, AdaptiveState, AdaptiveTracker, Visualization};
use std::cell::{OnceCell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

pub const STATE_CHANGE_EVENT: &str = "adaptivechange";

/// Adaptive-UI context: the tracker plus the browser observers feeding it.
///
/// Cheap to clone; all clones share one tracker.
#[derive(Clone)]
pub struct AdaptiveUi {
    tracker: Rc<RefCell<AdaptiveTracker<DomElement>>>,
    resize_observer: web::ResizeObserver,
    visibility_observer: web::IntersectionObserver,
}

impl AdaptiveUi {
    pub fn new(config: AdaptiveConfig) -> anyhow::Result<Self> {
        let visibility_threshold = config.visibility_threshold;
        let tracker = Rc::new(RefCell::new(AdaptiveTracker::new(config)));

        let t = tracker.clone();
        let on_resize = Closure::wrap(Box::new(move |entries: js_sys::Array, _obs: JsValue| {
            let mut changed = false;
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::ResizeObserverEntry>() else {
                    continue;
                };
                let rect = entry.content_rect();
                let el = DomElement(entry.target());
                let outcome =
                    t.borrow_mut()
                        .record_resize(&el, rect.width(), rect.height(), dom::now_ms());
                changed |= outcome.changed;
            }
            if changed {
                let snapshot = t.borrow().state().clone();
                broadcast_state(&snapshot);
            }
        }) as Box<dyn FnMut(js_sys::Array, JsValue)>);
        let resize_observer = web::ResizeObserver::new(on_resize.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("ResizeObserver error: {:?}", e))?;
        on_resize.forget();

        let t = tracker.clone();
        let on_visibility = Closure::wrap(Box::new(move |entries: js_sys::Array, _obs: JsValue| {
            let tracker = t.borrow();
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() {
                    let el = DomElement(entry.target());
                    // Decide on the ratio rather than `isIntersecting`, which is
                    // also true for edge-adjacent zero-area overlaps; the tracker
                    // absorbs the small undershoot reported at the crossing.
                    tracker.record_visibility(&el, entry.intersection_ratio());
                }
            }
        }) as Box<dyn FnMut(js_sys::Array, JsValue)>);
        let init = web::IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(visibility_threshold));
        let visibility_observer = web::IntersectionObserver::new_with_options(
            on_visibility.as_ref().unchecked_ref(),
            &init,
        )
        .map_err(|e| anyhow::anyhow!("IntersectionObserver error: {:?}", e))?;
        on_visibility.forget();

        Ok(Self {
            tracker,
            resize_observer,
            visibility_observer,
        })
    }

    pub fn observe_element(&self, element: &web::Element) {
        let el = DomElement(element.clone());
        if self.tracker.borrow_mut().observe(&el) {
            self.resize_observer.observe(element);
            self.visibility_observer.observe(element);
        }
    }

    pub fn unobserve_element(&self, element: &web::Element) {
        let el = DomElement(element.clone());
        if self.tracker.borrow_mut().unobserve(&el) {
            self.resize_observer.unobserve(element);
            self.visibility_observer.unobserve(element);
        }
    }

    /// Read viewport width and touch support, then keep the width check live.
    pub fn detect_device_capabilities(&self) {
        let Some(window) = web::window() else {
            log::warn!("[adaptive] no window; device capabilities left at defaults");
            return;
        };
        let touch = js_sys::Reflect::has(&window, &JsValue::from_str("ontouchstart"))
            .unwrap_or(false)
            || window.navigator().max_touch_points() > 0;
        {
            let mut tracker = self.tracker.borrow_mut();
            tracker.apply_viewport_width(viewport_width(&window));
            tracker.set_touch_mode(touch);
        }
        log::info!(
            "[adaptive] large_display={} touch={}",
            self.tracker.borrow().state().is_large_display,
            touch
        );

        let t = self.tracker.clone();
        let w = window.clone();
        dom::add_listener(&window, "resize", move |_: web::Event| {
            let changed = t.borrow_mut().apply_viewport_width(viewport_width(&w));
            if changed {
                let snapshot = t.borrow().state().clone();
                broadcast_state(&snapshot);
            }
        });
    }

    pub fn initialize(&self) {
        self.detect_device_capabilities();

        let Some(document) = dom::window_document() else {
            log::warn!("[adaptive] no document; click counting disabled");
            return;
        };
        let t = self.tracker.clone();
        dom::add_listener(&document, "click", move |_: web::Event| {
            let changed = t.borrow_mut().record_click();
            if changed {
                let snapshot = t.borrow().state().clone();
                broadcast_state(&snapshot);
            }
        });
    }

    pub fn state(&self) -> AdaptiveState {
        self.tracker.borrow().state().clone()
    }

    pub fn set_preferred_visualization(&self, kind: Visualization) {
        let changed = self.tracker.borrow_mut().set_preferred_visualization(kind);
        if changed {
            broadcast_state(&self.state());
        }
    }

    pub fn set_color_blind_mode(&self, on: bool) {
        let changed = self.tracker.borrow_mut().set_color_blind_mode(on);
        if changed {
            broadcast_state(&self.state());
        }
    }
}

fn viewport_width(window: &web::Window) -> f64 {
    window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

pub fn state_to_js(state: &AdaptiveState) -> JsValue {
    let obj = js_sys::Object::new();
    dom::set_prop(&obj, "contentDensity", &state.content_density.as_str().into());
    dom::set_prop(&obj, "userExpertise", &state.user_expertise.as_str().into());
    dom::set_prop(
        &obj,
        "preferredVisualization",
        &state.preferred_visualization.as_str().into(),
    );
    dom::set_prop(&obj, "colorBlindMode", &state.color_blind_mode.into());
    dom::set_prop(&obj, "isLargeDisplay", &state.is_large_display.into());
    dom::set_prop(&obj, "touchMode", &state.touch_mode.into());
    obj.into()
}

fn broadcast_state(state: &AdaptiveState) {
    if let Some(document) = dom::window_document() {
        dom::dispatch_custom_event(&document, STATE_CHANGE_EVENT, &state_to_js(state));
    }
}

// ---------------- JS-facing exports ----------------

thread_local! {
    static ADAPTIVE: OnceCell<AdaptiveUi> = const { OnceCell::new() };
}

/// Build the page-wide adaptive context and start device/click tracking.
pub fn init_adaptive_ui() -> anyhow::Result<()> {
    let ui = AdaptiveUi::new(AdaptiveConfig::default())?;
    ADAPTIVE.with(|cell| {
        if cell.set(ui.clone()).is_ok() {
            ui.initialize();
        }
    });
    Ok(())
}

fn with_adaptive<R>(f: impl FnOnce(&AdaptiveUi) -> R) -> Option<R> {
    let ui = ADAPTIVE.with(|cell| cell.get().cloned());
    match ui {
        Some(ui) => Some(f(&ui)),
        None => {
            log::warn!("[adaptive] used before initialization");
            None
        }
    }
}

#[wasm_bindgen(js_name = observeElement)]
pub fn observe_element(element: web::Element) {
    with_adaptive(|ui| ui.observe_element(&element));
}

#[wasm_bindgen(js_name = unobserveElement)]
pub fn unobserve_element(element: web::Element) {
    with_adaptive(|ui| ui.unobserve_element(&element));
}

#[wasm_bindgen(js_name = adaptiveState)]
pub fn adaptive_state() -> JsValue {
    with_adaptive(|ui| state_to_js(&ui.state())).unwrap_or(JsValue::NULL)
}

#[wasm_bindgen(js_name = setPreferredVisualization)]
pub fn set_preferred_visualization(kind: &str) -> Result<(), JsValue> {
    let kind: Visualization = kind
        .parse()
        .map_err(|e: ambient_core::ParseError| JsValue::from_str(&e.to_string()))?;
    with_adaptive(|ui| ui.set_preferred_visualization(kind));
    Ok(())
}

#[wasm_bindgen(js_name = setColorBlindMode)]
pub fn set_color_blind_mode(on: bool) {
    with_adaptive(|ui| ui.set_color_blind_mode(on));
}
