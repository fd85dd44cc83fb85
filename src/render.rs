use crate::core::constants::{GLOW_RGB, PARTICLE_OPACITY};
use crate::core::glyph::build_sigil_mesh;
use crate::core::particles::ParticleInstance;
use crate::core::sprites::SpriteInstance;
use crate::core::SceneState;
use web_sys as web;

mod billboards;
mod helpers;
mod sigil;
mod textures;

use billboards::{create_billboard_resources, BillboardResources, BillboardUniforms};
use sigil::{create_sigil_resources, SigilResources};
use textures::SceneTextures;

// ===================== WebGPU state for one mount =====================

/// Every GPU object owned by a mount session.
///
/// Nothing here is freed implicitly; `release` destroys buffers and textures
/// and must run exactly once when the session ends.
pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    depth_tex: wgpu::Texture,
    depth_view: wgpu::TextureView,
    textures: SceneTextures,
    sigil: SigilResources,
    billboards: BillboardResources,
    particle_scratch: Vec<ParticleInstance>,
    sprite_scratch: Vec<SpriteInstance>,
    width: u32,
    height: u32,
}

impl GpuState {
    pub async fn new(canvas: &web::HtmlCanvasElement, scene: &SceneState) -> anyhow::Result<Self> {
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
                    label: Some("sigil_device"),
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
                    wgpu::TextureFormat::Bgra8Unorm | wgpu::TextureFormat::Rgba8Unorm
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        // the page must show through everywhere the sigil is not drawn
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
        let (depth_tex, depth_view) = helpers::create_depth_target(&device, width, height);

        let params = scene.params();
        let textures = SceneTextures::generate(&device, &queue, params.seed);
        let mesh = build_sigil_mesh();
        log::info!(
            "[gpu] sigil mesh: {} vertices, {} triangles",
            mesh.vertices.len(),
            mesh.triangle_count()
        );
        let sigil = create_sigil_resources(&device, format, &textures, &mesh, &scene.gpu_uniforms());
        let billboards = create_billboard_resources(
            &device,
            format,
            &textures,
            params.particle_count,
            params.sprite_count,
            &billboard_uniforms(scene),
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            depth_tex,
            depth_view,
            textures,
            sigil,
            billboards,
            particle_scratch: Vec::with_capacity(params.particle_count),
            sprite_scratch: Vec::with_capacity(params.sprite_count),
            width,
            height,
        })
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.reconfigure();
        }
    }

    /// Re-apply the surface configuration and rebuild the depth target.
    pub fn reconfigure(&mut self) {
        self.config.width = self.width;
        self.config.height = self.height;
        self.surface.configure(&self.device, &self.config);
        self.depth_tex.destroy();
        let (tex, view) = helpers::create_depth_target(&self.device, self.width, self.height);
        self.depth_tex = tex;
        self.depth_view = view;
    }

    /// Upload this frame's uniforms and instances, then draw the scene in one pass.
    pub fn render(&mut self, scene: &SceneState) -> Result<(), wgpu::SurfaceError> {
        self.queue.write_buffer(
            &self.sigil.uniform_buffer,
            0,
            bytemuck::bytes_of(&scene.gpu_uniforms()),
        );
        self.queue.write_buffer(
            &self.billboards.uniform_buffer,
            0,
            bytemuck::bytes_of(&billboard_uniforms(scene)),
        );
        scene.particles().write_instances(&mut self.particle_scratch);
        scene.sprites().write_instances(&mut self.sprite_scratch);
        self.billboards
            .upload(&self.queue, &self.particle_scratch, &self.sprite_scratch);

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
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
                        load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            self.sigil.draw(&mut rpass);
            self.billboards.draw(&mut rpass);
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }

    /// Destroy every buffer and texture, then drop pipelines and the surface.
    pub fn release(self) {
        self.sigil.destroy();
        self.billboards.destroy();
        self.textures.destroy();
        self.depth_tex.destroy();
        log::info!("[gpu] resources released");
    }
}

fn billboard_uniforms(scene: &SceneState) -> BillboardUniforms {
    BillboardUniforms {
        view_proj: scene.camera().view_projection().to_cols_array_2d(),
        tint: [GLOW_RGB[0], GLOW_RGB[1], GLOW_RGB[2], PARTICLE_OPACITY],
    }
}
