use crate::core::textures::{self, Filtering, TextureImage};

pub(crate) struct GpuTexture {
    pub(crate) texture: wgpu::Texture,
    pub(crate) view: wgpu::TextureView,
    pub(crate) sampler: wgpu::Sampler,
}

/// The three procedural textures, generated and uploaded once per mount.
pub(crate) struct SceneTextures {
    pub(crate) vein: GpuTexture,
    pub(crate) tribal: GpuTexture,
    pub(crate) plate: GpuTexture,
}

impl SceneTextures {
    pub(crate) fn generate(device: &wgpu::Device, queue: &wgpu::Queue, seed: u64) -> Self {
        // tribal strokes use their own stream so the two maps never correlate
        Self {
            vein: upload(device, queue, &textures::vein_map(seed)),
            tribal: upload(device, queue, &textures::tribal_map(seed.rotate_left(17))),
            plate: upload(device, queue, &textures::sprite_plate()),
        }
    }

    pub(crate) fn destroy(&self) {
        self.vein.texture.destroy();
        self.tribal.texture.destroy();
        self.plate.texture.destroy();
    }
}

fn upload(device: &wgpu::Device, queue: &wgpu::Queue, image: &TextureImage) -> GpuTexture {
    let raster = &image.raster;
    let size = wgpu::Extent3d {
        width: raster.width,
        height: raster.height,
        depth_or_array_layers: 1,
    };
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some(image.label),
        size,
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Rgba8Unorm,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });
    queue.write_texture(
        wgpu::TexelCopyTextureInfo {
            texture: &texture,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        &raster.pixels,
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(4 * raster.width),
            rows_per_image: Some(raster.height),
        },
        size,
    );
    let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
    let filter = match image.filtering {
        Filtering::Smooth => wgpu::FilterMode::Linear,
        Filtering::Nearest => wgpu::FilterMode::Nearest,
    };
    let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some(image.label),
        address_mode_u: wgpu::AddressMode::Repeat,
        address_mode_v: wgpu::AddressMode::Repeat,
        address_mode_w: wgpu::AddressMode::Repeat,
        mag_filter: filter,
        min_filter: filter,
        mipmap_filter: wgpu::FilterMode::Nearest,
        ..Default::default()
    });
    GpuTexture {
        texture,
        view,
        sampler,
    }
}
