//! Scene-object factories for the 3D views.
//!
//! These are plain constructors with library defaults filled in; the
//! renderer consumes them as-is.

use crate::constants::{CAMERA_FOV_DEGREES, CAMERA_ZFAR, CAMERA_ZNEAR};
use glam::{Mat4, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    /// From a `0xRRGGBB` value.
    pub fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as f32 / 255.0,
            g: ((hex >> 8) & 0xff) as f32 / 255.0,
            b: (hex & 0xff) as f32 / 255.0,
        }
    }

    /// Decode sRGB channels to linear light, as an `*Srgb` surface expects.
    pub fn to_linear(self) -> Self {
        fn decode(c: f32) -> f32 {
            if c <= 0.04045 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        Self {
            r: decode(self.r),
            g: decode(self.g),
            b: decode(self.b),
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::from_hex(0x000000)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DirectionalLight {
    pub color: Color,
    pub intensity: f32,
    pub position: Vec3,
    pub target: Vec3,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PlaneVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

/// Single-segment plane in the XY plane, centered on the origin.
#[derive(Clone, Debug)]
pub struct PlaneGeometry {
    pub width: f32,
    pub height: f32,
    pub vertices: [PlaneVertex; 4],
    pub indices: [u16; 6],
}

impl PlaneGeometry {
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub background: Option<Color>,
    pub lights: Vec<DirectionalLight>,
}

pub fn create_scene() -> Scene {
    Scene::default()
}

pub fn create_camera(aspect: f32) -> Camera {
    Camera {
        eye: Vec3::ZERO,
        target: Vec3::NEG_Z,
        up: Vec3::Y,
        aspect,
        fovy_radians: CAMERA_FOV_DEGREES.to_radians(),
        znear: CAMERA_ZNEAR,
        zfar: CAMERA_ZFAR,
    }
}

pub fn create_directional_light(color: Color, intensity: f32) -> DirectionalLight {
    DirectionalLight {
        color,
        intensity,
        position: Vec3::Y,
        target: Vec3::ZERO,
    }
}

pub fn create_plane(width: f32, height: f32) -> PlaneGeometry {
    let hw = width * 0.5;
    let hh = height * 0.5;
    let v = |x: f32, y: f32, u: f32, w: f32| PlaneVertex {
        position: [x, y, 0.0],
        normal: [0.0, 0.0, 1.0],
        uv: [u, w],
    };
    PlaneGeometry {
        width,
        height,
        vertices: [
            v(-hw, hh, 0.0, 0.0),
            v(hw, hh, 1.0, 0.0),
            v(-hw, -hh, 0.0, 1.0),
            v(hw, -hh, 1.0, 1.0),
        ],
        indices: [0, 2, 1, 2, 3, 1],
    }
}
