use std::{fmt::Debug, sync::Arc};

use slotmap::{new_key_type, SlotMap};
use winit::window::Window;

use crate::framework::{camera::SceneWithCamera, gpu, gui::Gui};

use super::{camera::Camera, RenderContext, RenderModule, RenderPass};

new_key_type! { pub struct RenderModuleID; }
new_key_type! { pub struct RenderPassID; }

#[derive(Debug)]
struct RegisteredRenderPass {
    attachment: RenderPass,
    modules:    Vec<RenderModuleID>,
}

/// Owns the render surface, all registered render modules and the passes that
/// sequence them. Modules are attached to passes through their IDs.
#[derive(Debug)]
pub struct Renderer<S: SceneWithCamera> {
    context: RenderContext,
    modules: SlotMap<RenderModuleID, Box<dyn RenderModule<S>>>,
    passes:  SlotMap<RenderPassID, RegisteredRenderPass>,
}

// Construction and registration
impl<S: SceneWithCamera> Renderer<S> {

    pub fn new(gpu: Arc<gpu::Context>, window: &Window) -> Self {
        let surface_capabilities = gpu.surface.get_capabilities(&gpu.adapter);
        let surface_config = wgpu::SurfaceConfiguration {
            usage:  wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_capabilities.formats[0],
            #[cfg(feature = "no_vsync")]
            present_mode: wgpu::PresentMode::AutoNoVsync,
            // Fifo blocks presentation on vsync, capping the redraw loop.
            #[cfg(not(feature = "no_vsync"))]
            present_mode: wgpu::PresentMode::Fifo,
            width:  window.inner_size().width,
            height: window.inner_size().height,
            alpha_mode:   surface_capabilities.alpha_modes[0],
            view_formats: vec![],
        };
        gpu.surface.configure(&gpu.device, &surface_config);

        Self {
            context: RenderContext {
                gpu: gpu.clone(),
                surface_config,
                scale_factor: window.scale_factor(),
                camera:       Camera::new(),
            },
            modules: SlotMap::with_key(),
            passes:  SlotMap::with_key(),
        }
    }

    pub fn register_module<M, F>(&mut self, get_module: F) -> RenderModuleID
    where
        M: RenderModule<S> + 'static,
        F: FnOnce(&RenderContext) -> M,
    {
        let module = get_module(&self.context);
        self.modules.insert(Box::new(module))
    }

    /// Passes execute in registration order, each running the given modules in
    /// the order listed here.
    pub fn register_render_pass<F>(&mut self, get_pass: F, modules: &[RenderModuleID]) -> RenderPassID
    where
        F: FnOnce(&RenderContext) -> RenderPass,
    {
        let pass = get_pass(&self.context);
        for module in modules {
            assert!(
                self.modules.contains_key(*module),
                "Render pass {:?} refers to an unregistered render module {:?}",
                pass, module,
            );
        }
        self.passes.insert(RegisteredRenderPass {
            attachment: pass,
            modules:    modules.to_vec(),
        })
    }
}

// Frame lifecycle
impl<S: SceneWithCamera> Renderer<S> {

    #[profiler::function]
    pub fn resize(&mut self, size: &winit::dpi::PhysicalSize<u32>, scale_factor: f64) {
        if size.width == 0 || size.height == 0 {
            return;
        }
        self.context.surface_config.width  = size.width;
        self.context.surface_config.height = size.height;
        self.context.scale_factor = scale_factor;
        self.context.gpu.surface.configure(&self.context.gpu.device, &self.context.surface_config);

        for pass in self.passes.values_mut() {
            pass.attachment.resize(&self.context);
        }
    }

    /// Updates shared per frame state and lets every module upload its GPU
    /// resources before any pass starts recording.
    #[profiler::function]
    pub fn prepare(&mut self, gui: &Gui, scene: &S) {
        // TODO: skip when the camera rig did not move since the last frame
        self.context.camera.update(scene.get_camera_rig().camera());

        for module in self.modules.values_mut() {
            module.prepare(gui, scene, &self.context);
        }
    }

    #[profiler::function]
    pub fn render(&mut self) {
        let output = profiler::call!(
            self.context.gpu
                .surface
                .get_current_texture()
                .expect("Failed to acquire next surface texture")
        );

        let view = profiler::call!(
            output.texture.create_view(&wgpu::TextureViewDescriptor::default())
        );

        let mut encoder = profiler::call!(
            self.context.gpu.device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            })
        );

        { profiler::scope!("Record render passes");
            for pass in self.passes.values() {
                profiler::scope!("Record one render pass");
                let mut render_pass_context = pass.attachment.start(&mut encoder, &view);
                for module_id in pass.modules.iter() {
                    profiler::scope!("Record one render module");
                    if let Some(module) = self.modules.get(*module_id) {
                        module.render(&self.context, &mut render_pass_context);
                    }
                }
            }
        }

        profiler::call!(self.context.gpu.queue.submit(Some(encoder.finish())));
        profiler::call!(output.present());
    }

    #[profiler::function]
    pub fn finalize(&mut self) {
        for module in self.modules.values_mut() {
            module.finalize();
        }
    }
}
