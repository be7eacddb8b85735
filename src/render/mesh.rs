use crate::core::LineVertex;
use glam::Mat4;
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct ObjectUniforms {
    pub(crate) view_proj: [[f32; 4]; 4],
    pub(crate) model: [[f32; 4]; 4],
    pub(crate) color: [f32; 4],
}

impl ObjectUniforms {
    pub(crate) fn new(view_proj: Mat4, model: Mat4, rgb: [f32; 3], opacity: f32) -> Self {
        Self {
            view_proj: view_proj.to_cols_array_2d(),
            model: model.to_cols_array_2d(),
            color: [rgb[0], rgb[1], rgb[2], opacity.clamp(0.0, 1.0)],
        }
    }
}

/// GPU-side geometry plus its per-object uniform block.
///
/// Indexed meshes draw with `indices`; point clouds draw vertices directly.
pub(crate) struct GpuMesh {
    pub(crate) vertex_buffer: wgpu::Buffer,
    pub(crate) index_buffer: Option<wgpu::Buffer>,
    pub(crate) draw_count: u32,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
}

impl GpuMesh {
    pub(crate) fn new(
        device: &wgpu::Device,
        label: &str,
        bgl: &wgpu::BindGroupLayout,
        vertices: &[LineVertex],
        indices: Option<&[u32]>,
    ) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = indices.map(|idx| {
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(label),
                contents: bytemuck::cast_slice(idx),
                usage: wgpu::BufferUsages::INDEX,
            })
        });
        let draw_count = indices.map_or(vertices.len(), |idx| idx.len()) as u32;
        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size: std::mem::size_of::<ObjectUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });
        Self {
            vertex_buffer,
            index_buffer,
            draw_count,
            uniform_buffer,
            bind_group,
        }
    }

    pub(crate) fn write_uniforms(&self, queue: &wgpu::Queue, u: &ObjectUniforms) {
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(u));
    }

    pub(crate) fn draw<'p>(&self, rpass: &mut wgpu::RenderPass<'p>, pipeline: &wgpu::RenderPipeline) {
        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        match &self.index_buffer {
            Some(ib) => {
                rpass.set_index_buffer(ib.slice(..), wgpu::IndexFormat::Uint32);
                rpass.draw_indexed(0..self.draw_count, 0, 0..1);
            }
            None => rpass.draw(0..self.draw_count, 0..1),
        }
    }

    /// Release GPU memory now instead of waiting for the handles to drop.
    pub(crate) fn destroy(&self) {
        self.vertex_buffer.destroy();
        if let Some(ib) = &self.index_buffer {
            ib.destroy();
        }
        self.uniform_buffer.destroy();
    }
}
