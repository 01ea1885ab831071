// Host-side tests for the scene-object factories.

use ambient_core::scene::*;

#[test]
fn camera_uses_library_defaults() {
    let cam = create_camera(16.0 / 9.0);
    assert!((cam.fovy_radians - 75.0_f32.to_radians()).abs() < 1e-6);
    assert_eq!(cam.znear, 0.1);
    assert_eq!(cam.zfar, 1000.0);
    assert!((cam.aspect - 16.0 / 9.0).abs() < 1e-6);

    let proj = cam.projection_matrix();
    assert!(proj.is_finite());
    let view = cam.view_matrix();
    assert!(view.is_finite());
}

#[test]
fn scene_starts_empty() {
    let scene = create_scene();
    assert!(scene.background.is_none());
    assert!(scene.lights.is_empty());
}

#[test]
fn color_from_hex() {
    let c = Color::from_hex(0xff8000);
    assert_eq!(c.r, 1.0);
    assert!((c.g - 128.0 / 255.0).abs() < 1e-6);
    assert_eq!(c.b, 0.0);
}

#[test]
fn linear_color_keeps_endpoints_and_darkens_midtones() {
    let white = Color::from_hex(0xffffff).to_linear();
    assert!((white.r - 1.0).abs() < 1e-6);
    assert_eq!(Color::from_hex(0x000000).to_linear(), Color::default());

    // sRGB 0x80 is roughly 21.6% linear light.
    let mid = Color::from_hex(0x808080).to_linear();
    assert!((mid.g - 0.2158).abs() < 1e-3);
    // The linear segment near black.
    let dark = Color::from_hex(0x0a0000).to_linear();
    assert!((dark.r - (10.0 / 255.0) / 12.92).abs() < 1e-6);
}

#[test]
fn directional_light_keeps_arguments() {
    let light = create_directional_light(Color::from_hex(0xffffff), 0.8);
    assert_eq!(light.intensity, 0.8);
    assert_eq!(light.color, Color::from_hex(0xffffff));
}

#[test]
fn plane_is_centered_and_sized() {
    let plane = create_plane(4.0, 2.0);
    let xs: Vec<f32> = plane.vertices.iter().map(|v| v.position[0]).collect();
    let ys: Vec<f32> = plane.vertices.iter().map(|v| v.position[1]).collect();
    assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 2.0);
    assert_eq!(xs.iter().cloned().fold(f32::MAX, f32::min), -2.0);
    assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), 1.0);
    assert!(plane.indices.iter().all(|&i| (i as usize) < plane.vertices.len()));
    assert_eq!(plane.vertex_bytes().len(), 4 * 8 * 4);
}
