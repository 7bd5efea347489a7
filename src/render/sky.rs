use super::helpers;
use crate::constants::DEPTH_FORMAT;

/// Procedural "dawn" environment drawn as the background.
pub(crate) struct SkyResources {
    pipeline: wgpu::RenderPipeline,
}

impl SkyResources {
    pub(crate) fn new(
        device: &wgpu::Device,
        color_format: wgpu::TextureFormat,
        frame_bgl: &wgpu::BindGroupLayout,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("sky_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::SKY_WGSL.into()),
        });
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("sky_pl"),
            bind_group_layouts: &[frame_bgl],
            push_constant_ranges: &[],
        });
        let pipeline =
            helpers::make_fullscreen_pipeline(device, &layout, &shader, color_format, DEPTH_FORMAT);
        Self { pipeline }
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        rpass.set_pipeline(&self.pipeline);
        rpass.draw(0..3, 0..1);
    }
}
