use super::helpers;
use crate::constants::PLACEHOLDER_RGBA;
use crate::textures::DecodedImage;
use fnv::FnvHashMap;
use image::{Rgba, RgbaImage};

pub(crate) struct GpuTexture {
    pub(crate) texture: wgpu::Texture,
    pub(crate) view: wgpu::TextureView,
    pub(crate) width: u32,
    pub(crate) height: u32,
}

/// Textures keyed by source url. Several cards may share one image, so
/// each url is uploaded once. Unknown urls resolve to a 1×1 placeholder.
pub(crate) struct TextureCache {
    placeholder: GpuTexture,
    loaded: FnvHashMap<String, GpuTexture>,
}

impl TextureCache {
    pub(crate) fn new(device: &wgpu::Device, queue: &wgpu::Queue) -> Self {
        let placeholder = [RgbaImage::from_pixel(1, 1, Rgba(PLACEHOLDER_RGBA))];
        let (texture, view) =
            helpers::create_rgba_texture(device, queue, "placeholder_tex", &placeholder);
        Self {
            placeholder: GpuTexture {
                texture,
                view,
                width: 1,
                height: 1,
            },
            loaded: FnvHashMap::default(),
        }
    }

    pub(crate) fn get(&self, url: &str) -> &GpuTexture {
        self.loaded.get(url).unwrap_or(&self.placeholder)
    }

    pub(crate) fn insert(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, img: &DecodedImage) {
        if img.width() == 0 || img.height() == 0 {
            log::warn!("[texture] {} is empty, keeping placeholder", img.url);
            return;
        }
        let (texture, view) = helpers::create_rgba_texture(device, queue, &img.url, &img.levels);
        self.loaded.insert(
            img.url.clone(),
            GpuTexture {
                texture,
                view,
                width: img.width(),
                height: img.height(),
            },
        );
    }
}
