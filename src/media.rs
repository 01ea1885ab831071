use crate::dom;
use ambient_core::constants::{CAPTURE_FACING_MODE, CAPTURE_IDEAL_HEIGHT, CAPTURE_IDEAL_WIDTH};
use ambient_core::{CaptureResource, GazeError};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Camera stream held to confirm permission and readiness. Frames are never read.
pub struct CameraCapture {
    stream: web::MediaStream,
}

impl CaptureResource for CameraCapture {
    fn release(&mut self) {
        for track in self.stream.get_tracks().iter() {
            if let Ok(track) = track.dyn_into::<web::MediaStreamTrack>() {
                track.stop();
            }
        }
    }
}

fn ideal(value: &JsValue) -> JsValue {
    let obj = js_sys::Object::new();
    dom::set_prop(&obj, "ideal", value);
    obj.into()
}

fn video_constraints() -> web::MediaStreamConstraints {
    let video = js_sys::Object::new();
    dom::set_prop(&video, "width", &ideal(&CAPTURE_IDEAL_WIDTH.into()));
    dom::set_prop(&video, "height", &ideal(&CAPTURE_IDEAL_HEIGHT.into()));
    dom::set_prop(&video, "facingMode", &CAPTURE_FACING_MODE.into());
    let constraints = web::MediaStreamConstraints::new();
    constraints.set_video(&video);
    constraints
}

/// Ask for the front camera. Resolves once the user grants or denies access.
pub async fn request_camera() -> Result<CameraCapture, GazeError> {
    let window = web::window().ok_or_else(|| GazeError::CaptureUnavailable("no window".into()))?;
    let devices = window
        .navigator()
        .media_devices()
        .map_err(|e| GazeError::CaptureUnavailable(format!("{:?}", e)))?;
    let promise = devices
        .get_user_media_with_constraints(&video_constraints())
        .map_err(|e| GazeError::CaptureUnavailable(format!("{:?}", e)))?;
    let stream = JsFuture::from(promise)
        .await
        .map_err(|e| GazeError::PermissionDenied(describe_js_error(&e)))?;
    let stream = stream
        .dyn_into::<web::MediaStream>()
        .map_err(|e| GazeError::CaptureUnavailable(format!("{:?}", e)))?;
    Ok(CameraCapture { stream })
}

fn describe_js_error(e: &JsValue) -> String {
    match e.dyn_ref::<js_sys::Error>() {
        Some(err) => format!(
            "{}: {}",
            String::from(err.name()),
            String::from(err.message())
        ),
        None => format!("{:?}", e),
    }
}
