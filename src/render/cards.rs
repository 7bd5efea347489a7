use super::helpers::{self, MeshPipelineDesc};
use super::mesh::GpuMesh;
use super::texture_cache::TextureCache;
use crate::constants::DEPTH_FORMAT;
use crate::core::Scene;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct CardUniforms {
    model: [[f32; 4]; 4],
    scale: [f32; 2],
    image_size: [f32; 2],
    // x: corner radius, y: zoom
    material: [f32; 4],
}

struct CardSlot {
    url: String,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

/// Image cards: one shared bent-plane mesh, one uniform/bind group per card.
pub(crate) struct CardResources {
    pipeline: wgpu::RenderPipeline,
    bgl: wgpu::BindGroupLayout,
    sampler: wgpu::Sampler,
    mesh: GpuMesh,
    slots: Vec<CardSlot>,
}

impl CardResources {
    pub(crate) fn new(
        device: &wgpu::Device,
        color_format: wgpu::TextureFormat,
        frame_bgl: &wgpu::BindGroupLayout,
        scene: &Scene,
        textures: &TextureCache,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("cards_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::CARDS_WGSL.into()),
        });
        let bgl = helpers::textured_bgl(device, "cards_bgl");
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("cards_pl"),
            bind_group_layouts: &[frame_bgl, &bgl],
            push_constant_ranges: &[],
        });
        let pipeline = helpers::make_mesh_pipeline(
            device,
            &MeshPipelineDesc {
                label: "cards_pipeline",
                layout: &layout,
                shader: &shader,
                color_format,
                depth_format: DEPTH_FORMAT,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                depth_write: true,
            },
        );
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("cards_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });
        let mesh = GpuMesh::new(device, "card_mesh", scene.card_mesh());
        let slots = scene
            .cards
            .iter()
            .map(|card| {
                let url = card.descriptor.image_url.clone();
                let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
                    label: Some("card_uniforms"),
                    size: std::mem::size_of::<CardUniforms>() as u64,
                    usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                    mapped_at_creation: false,
                });
                let bind_group = helpers::textured_bind_group(
                    device,
                    "card_bg",
                    &bgl,
                    &uniform_buffer,
                    &textures.get(&url).view,
                    &sampler,
                );
                CardSlot {
                    url,
                    uniform_buffer,
                    bind_group,
                }
            })
            .collect();
        Self {
            pipeline,
            bgl,
            sampler,
            mesh,
            slots,
        }
    }

    /// Point every card showing `url` at the freshly uploaded texture.
    pub(crate) fn rebind(&mut self, device: &wgpu::Device, textures: &TextureCache, url: &str) {
        for slot in self.slots.iter_mut().filter(|s| s.url == url) {
            slot.bind_group = helpers::textured_bind_group(
                device,
                "card_bg",
                &self.bgl,
                &slot.uniform_buffer,
                &textures.get(url).view,
                &self.sampler,
            );
        }
    }

    pub(crate) fn write(&self, queue: &wgpu::Queue, scene: &Scene, textures: &TextureCache) {
        for ((slot, card), model) in self
            .slots
            .iter()
            .zip(&scene.cards)
            .zip(scene.card_world_transforms())
        {
            let tex = textures.get(&slot.url);
            let scale = card.scale();
            let u = CardUniforms {
                model: model.to_cols_array_2d(),
                scale: [scale.x, scale.y],
                image_size: [tex.width as f32, tex.height as f32],
                material: [card.corner_radius, card.zoom, 0.0, 0.0],
            };
            queue.write_buffer(&slot.uniform_buffer, 0, bytemuck::bytes_of(&u));
        }
    }

    /// Draw in the given order; callers pass farthest first for blending.
    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>, order: &[usize]) {
        rpass.set_pipeline(&self.pipeline);
        for &i in order {
            if let Some(slot) = self.slots.get(i) {
                rpass.set_bind_group(1, &slot.bind_group, &[]);
                self.mesh.draw(rpass);
            }
        }
    }
}
