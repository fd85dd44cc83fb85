use super::helpers::{self, SCENE_BLEND};
use super::textures::SceneTextures;
use crate::core::particles::ParticleInstance;
use crate::core::sprites::SpriteInstance;
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct BillboardUniforms {
    pub(crate) view_proj: [[f32; 4]; 4],
    /// rgb = sprite tint, a = particle opacity.
    pub(crate) tint: [f32; 4],
}

/// Two triangles centred on the instance origin.
const QUAD_CORNERS: [f32; 12] = [
    -0.5, -0.5, 0.5, -0.5, 0.5, 0.5, -0.5, -0.5, 0.5, 0.5, -0.5, 0.5,
];

const CORNER_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];
const PARTICLE_ATTRS: [wgpu::VertexAttribute; 3] =
    wgpu::vertex_attr_array![1 => Float32x3, 2 => Float32, 3 => Float32x3];
const SPRITE_ATTRS: [wgpu::VertexAttribute; 3] =
    wgpu::vertex_attr_array![1 => Float32x3, 2 => Float32, 3 => Float32];

/// Instanced quads for the particle field and the sprite field.
///
/// Both instance buffers are sized once from the field capacities, which never
/// change during a mount.
pub(crate) struct BillboardResources {
    pub(crate) points_pipeline: wgpu::RenderPipeline,
    pub(crate) sprites_pipeline: wgpu::RenderPipeline,
    pub(crate) quad_vb: wgpu::Buffer,
    pub(crate) particle_vb: wgpu::Buffer,
    pub(crate) particle_count: u32,
    pub(crate) sprite_vb: wgpu::Buffer,
    pub(crate) sprite_count: u32,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
}

pub(crate) fn create_billboard_resources(
    device: &wgpu::Device,
    color_format: wgpu::TextureFormat,
    textures: &SceneTextures,
    particle_capacity: usize,
    sprite_capacity: usize,
    initial: &BillboardUniforms,
) -> BillboardResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("billboard_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::BILLBOARD_WGSL.into()),
    });
    let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("billboard_bgl"),
        entries: &[
            helpers::uniform_entry(0, wgpu::ShaderStages::VERTEX_FRAGMENT),
            helpers::texture_entry(1, wgpu::ShaderStages::FRAGMENT),
            helpers::sampler_entry(2, wgpu::ShaderStages::FRAGMENT),
        ],
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("billboard_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });

    let make_pipeline = |label: &str,
                         vs: &str,
                         fs: &str,
                         instance_stride: usize,
                         instance_attrs: &[wgpu::VertexAttribute]| {
        device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(label),
            layout: Some(&pl),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some(vs),
                buffers: &[
                    // slot 0: quad corners
                    wgpu::VertexBufferLayout {
                        array_stride: (std::mem::size_of::<f32>() * 2) as u64,
                        step_mode: wgpu::VertexStepMode::Vertex,
                        attributes: &CORNER_ATTRS,
                    },
                    // slot 1: per-instance data
                    wgpu::VertexBufferLayout {
                        array_stride: instance_stride as u64,
                        step_mode: wgpu::VertexStepMode::Instance,
                        attributes: instance_attrs,
                    },
                ],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState::default(),
            // translucent: test against the sigil but never occlude it
            depth_stencil: Some(helpers::depth_state(false)),
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some(fs),
                targets: &[Some(wgpu::ColorTargetState {
                    format: color_format,
                    blend: Some(SCENE_BLEND),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        })
    };
    let points_pipeline = make_pipeline(
        "points_pipeline",
        "vs_points",
        "fs_points",
        std::mem::size_of::<ParticleInstance>(),
        &PARTICLE_ATTRS,
    );
    let sprites_pipeline = make_pipeline(
        "sprites_pipeline",
        "vs_sprites",
        "fs_sprites",
        std::mem::size_of::<SpriteInstance>(),
        &SPRITE_ATTRS,
    );

    let quad_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("quad_vb"),
        contents: bytemuck::cast_slice(&QUAD_CORNERS),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let particle_vb = instance_buffer::<ParticleInstance>(device, "particle_vb", particle_capacity);
    let sprite_vb = instance_buffer::<SpriteInstance>(device, "sprite_vb", sprite_capacity);
    let uniform_buffer = helpers::create_uniform_buffer(device, "billboard_uniforms", initial);
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("billboard_bg"),
        layout: &bgl,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::TextureView(&textures.plate.view),
            },
            wgpu::BindGroupEntry {
                binding: 2,
                resource: wgpu::BindingResource::Sampler(&textures.plate.sampler),
            },
        ],
    });

    BillboardResources {
        points_pipeline,
        sprites_pipeline,
        quad_vb,
        particle_vb,
        particle_count: 0,
        sprite_vb,
        sprite_count: 0,
        uniform_buffer,
        bind_group,
    }
}

fn instance_buffer<T>(device: &wgpu::Device, label: &str, capacity: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some(label),
        size: (std::mem::size_of::<T>() * capacity.max(1)) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

impl BillboardResources {
    pub(crate) fn upload(
        &mut self,
        queue: &wgpu::Queue,
        particles: &[ParticleInstance],
        sprites: &[SpriteInstance],
    ) {
        if !particles.is_empty() {
            queue.write_buffer(&self.particle_vb, 0, bytemuck::cast_slice(particles));
        }
        if !sprites.is_empty() {
            queue.write_buffer(&self.sprite_vb, 0, bytemuck::cast_slice(sprites));
        }
        self.particle_count = particles.len() as u32;
        self.sprite_count = sprites.len() as u32;
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.set_vertex_buffer(0, self.quad_vb.slice(..));
        if self.sprite_count > 0 {
            rpass.set_pipeline(&self.sprites_pipeline);
            rpass.set_vertex_buffer(1, self.sprite_vb.slice(..));
            rpass.draw(0..6, 0..self.sprite_count);
        }
        if self.particle_count > 0 {
            rpass.set_pipeline(&self.points_pipeline);
            rpass.set_vertex_buffer(1, self.particle_vb.slice(..));
            rpass.draw(0..6, 0..self.particle_count);
        }
    }

    pub(crate) fn destroy(&self) {
        self.quad_vb.destroy();
        self.particle_vb.destroy();
        self.sprite_vb.destroy();
        self.uniform_buffer.destroy();
    }
}
