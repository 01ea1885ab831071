use ambient_core::scene::Color;
use wasm_bindgen::prelude::*;
use web_sys as web;

/// Clears a canvas to a solid color through WebGPU.
#[wasm_bindgen]
pub struct Renderer {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    clear_color: wgpu::Color,
}

/// Prefer an sRGB format so hex colors can be submitted as linear values.
fn pick_format(caps: &wgpu::SurfaceCapabilities) -> anyhow::Result<wgpu::TextureFormat> {
    caps.formats
        .iter()
        .copied()
        .find(wgpu::TextureFormat::is_srgb)
        .or_else(|| caps.formats.first().copied())
        .ok_or_else(|| anyhow::anyhow!("canvas surface offers no texture formats"))
}

impl Renderer {
    pub async fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let (width, height) = (canvas.width().max(1), canvas.height().max(1));

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas))?;
        // A clear-only pipeline has no reason to wake a discrete GPU.
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("WebGPU is unavailable for this canvas"))?;

        let descriptor = wgpu::DeviceDescriptor {
            label: Some("ambient_device"),
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::downlevel_defaults(),
            memory_hints: wgpu::MemoryHints::MemoryUsage,
        };
        let (device, queue) = adapter
            .request_device(&descriptor, None)
            .await
            .map_err(|e| anyhow::anyhow!("device request rejected: {e}"))?;

        let caps = surface.get_capabilities(&adapter);
        let format = pick_format(&caps)?;
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: Vec::new(),
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::info!("[render] {}x{} canvas using {:?}", width, height, format);

        let mut renderer = Self {
            surface,
            device,
            queue,
            config,
            clear_color: wgpu::Color::BLACK,
        };
        renderer.set_clear_color(Color::default());
        Ok(renderer)
    }

    pub fn set_clear_color(&mut self, color: Color) {
        let c = if self.config.format.is_srgb() {
            color.to_linear()
        } else {
            color
        };
        self.clear_color = wgpu::Color {
            r: c.r as f64,
            g: c.g as f64,
            b: c.b as f64,
            a: 1.0,
        };
    }
}

#[wasm_bindgen]
impl Renderer {
    /// `0xRRGGBB`
    #[wasm_bindgen(js_name = setClearColor)]
    pub fn set_clear_hex(&mut self, hex: u32) {
        self.set_clear_color(Color::from_hex(hex));
    }

    /// Reconfigure the surface for a new backing size.
    #[wasm_bindgen(js_name = setSize)]
    pub fn set_size(&mut self, width: u32, height: u32) {
        self.config.width = width.max(1);
        self.config.height = height.max(1);
        self.surface.configure(&self.device, &self.config);
    }

    /// Present one frame cleared to the current clear color.
    pub fn clear(&self) -> Result<(), JsValue> {
        let frame = self
            .surface
            .get_current_texture()
            .map_err(|e| JsValue::from_str(&format!("{:?}", e)))?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("clear_encoder"),
            });
        encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("clear_pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(self.clear_color),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

/// Async factory for a WebGPU renderer on `canvas`.
#[wasm_bindgen(js_name = createRenderer)]
pub async fn create_renderer(canvas: web::HtmlCanvasElement) -> Result<Renderer, JsValue> {
    Renderer::new(canvas).await.map_err(|e| {
        log::error!("WebGPU init error: {:?}", e);
        JsValue::from_str(&e.to_string())
    })
}
