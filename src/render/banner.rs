use super::helpers::{self, MeshPipelineDesc};
use super::mesh::GpuMesh;
use super::texture_cache::TextureCache;
use crate::constants::{DEPTH_FORMAT, LOGO_URL, MAX_ANISOTROPY};
use crate::core::constants::BANNER_TEXTURE_REPEAT;
use crate::core::Scene;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct BannerUniforms {
    model: [[f32; 4]; 4],
    // xy: repeat, zw: offset
    uv_transform: [f32; 4],
    // x: sine time
    params: [f32; 4],
}

/// Logo banner: an open cylinder with a wrapped, anisotropically filtered
/// texture and a scroll-driven sine wobble.
pub(crate) struct BannerResources {
    pipeline: wgpu::RenderPipeline,
    bgl: wgpu::BindGroupLayout,
    sampler: wgpu::Sampler,
    mesh: GpuMesh,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

impl BannerResources {
    pub(crate) fn new(
        device: &wgpu::Device,
        color_format: wgpu::TextureFormat,
        frame_bgl: &wgpu::BindGroupLayout,
        scene: &Scene,
        textures: &TextureCache,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("banner_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::BANNER_WGSL.into()),
        });
        let bgl = helpers::textured_bgl(device, "banner_bgl");
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("banner_pl"),
            bind_group_layouts: &[frame_bgl, &bgl],
            push_constant_ranges: &[],
        });
        let pipeline = helpers::make_mesh_pipeline(
            device,
            &MeshPipelineDesc {
                label: "banner_pipeline",
                layout: &layout,
                shader: &shader,
                color_format,
                depth_format: DEPTH_FORMAT,
                blend: None,
                depth_write: true,
            },
        );
        // Anisotropic filtering requires linear filtering on every axis.
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("banner_sampler"),
            address_mode_u: wgpu::AddressMode::Repeat,
            address_mode_v: wgpu::AddressMode::Repeat,
            address_mode_w: wgpu::AddressMode::Repeat,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Linear,
            anisotropy_clamp: MAX_ANISOTROPY,
            ..Default::default()
        });
        let mesh = GpuMesh::new(device, "banner_mesh", scene.banner_mesh());
        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("banner_uniforms"),
            size: std::mem::size_of::<BannerUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group = helpers::textured_bind_group(
            device,
            "banner_bg",
            &bgl,
            &uniform_buffer,
            &textures.get(LOGO_URL).view,
            &sampler,
        );
        Self {
            pipeline,
            bgl,
            sampler,
            mesh,
            uniform_buffer,
            bind_group,
        }
    }

    pub(crate) fn rebind(&mut self, device: &wgpu::Device, textures: &TextureCache, url: &str) {
        if url != LOGO_URL {
            return;
        }
        self.bind_group = helpers::textured_bind_group(
            device,
            "banner_bg",
            &self.bgl,
            &self.uniform_buffer,
            &textures.get(LOGO_URL).view,
            &self.sampler,
        );
    }

    pub(crate) fn write(&self, queue: &wgpu::Queue, scene: &Scene) {
        let [rx, ry] = BANNER_TEXTURE_REPEAT;
        let u = BannerUniforms {
            model: scene.banner_transform().to_cols_array_2d(),
            uv_transform: [rx, ry, scene.banner.wrapped_offset(), 0.0],
            params: [scene.banner.wrapped_time(), 0.0, 0.0, 0.0],
        };
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&u));
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(1, &self.bind_group, &[]);
        self.mesh.draw(rpass);
    }
}
