use crate::core::constants::{
    KNOT_COLOR, PARTICLE_COLOR, PARTICLE_COUNT, PARTICLE_SEED, PARTICLE_SPREAD,
};
use crate::core::{particle_field, torus_knot_wireframe, PerspectiveCamera, TorusKnotParams};
use glam::Mat4;
use web_sys as web;

mod helpers;
mod mesh;
use mesh::{GpuMesh, ObjectUniforms};

/// What the renderer needs from the scene for one frame.
pub struct FrameInputs<'s> {
    pub camera: &'s PerspectiveCamera,
    pub knot_model: Mat4,
    pub knot_opacity: f32,
    pub particles_model: Mat4,
}

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    knot_pipeline: wgpu::RenderPipeline,
    points_pipeline: wgpu::RenderPipeline,
    knot: GpuMesh,
    particles: GpuMesh,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl GpuState {
    pub async fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        // Transparent canvas so the CSS grid behind it stays visible
        let alpha_mode = if caps
            .alpha_modes
            .contains(&wgpu::CompositeAlphaMode::PreMultiplied)
        {
            wgpu::CompositeAlphaMode::PreMultiplied
        } else {
            caps.alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto)
        };
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::SCENE_WGSL.into()),
        });
        let bgl = helpers::uniform_bind_group_layout(&device);
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });
        let knot_pipeline = helpers::make_object_pipeline(
            &device,
            "knot_pipeline",
            &layout,
            &shader,
            wgpu::PrimitiveTopology::LineList,
            format,
        );
        let points_pipeline = helpers::make_object_pipeline(
            &device,
            "points_pipeline",
            &layout,
            &shader,
            wgpu::PrimitiveTopology::PointList,
            format,
        );

        let wire = torus_knot_wireframe(&TorusKnotParams::default());
        let knot = GpuMesh::new(&device, "knot", &bgl, &wire.vertices, Some(&wire.indices));
        let points = particle_field(PARTICLE_COUNT, PARTICLE_SPREAD, PARTICLE_SEED);
        let particles = GpuMesh::new(&device, "particles", &bgl, &points, None);
        log::info!(
            "[gpu] ready {}x{} {:?}; knot {} verts / {} edges, {} particles",
            width,
            height,
            format,
            wire.vertices.len(),
            wire.indices.len() / 2,
            points.len()
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            knot_pipeline,
            points_pipeline,
            knot,
            particles,
            width,
            height,
            clear_color: wgpu::Color::TRANSPARENT,
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    pub fn render(&mut self, frame_in: &FrameInputs) -> Result<(), wgpu::SurfaceError> {
        let frame = match self.surface.get_current_texture() {
            Ok(f) => f,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                // reconfigure and try again next frame
                self.surface.configure(&self.device, &self.config);
                return Ok(());
            }
            Err(e) => return Err(e),
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let view_proj = frame_in.camera.view_proj();
        self.knot.write_uniforms(
            &self.queue,
            &ObjectUniforms::new(view_proj, frame_in.knot_model, KNOT_COLOR, frame_in.knot_opacity),
        );
        self.particles.write_uniforms(
            &self.queue,
            &ObjectUniforms::new(view_proj, frame_in.particles_model, PARTICLE_COLOR, 1.0),
        );

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
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
            self.particles.draw(&mut rpass, &self.points_pipeline);
            // fully dissolved knot is skipped rather than drawn transparent
            if frame_in.knot_opacity > 0.0 {
                self.knot.draw(&mut rpass, &self.knot_pipeline);
            }
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }

    /// Free geometry buffers now; surface, device and pipelines drop with `self`.
    pub fn dispose(self) {
        self.knot.destroy();
        self.particles.destroy();
        log::info!("[gpu] disposed");
    }
}
