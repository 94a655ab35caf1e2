///! This file is inspired by: https://github.com/hasenbanck/egui_example/blob/master/src/main.rs
use egui::ClippedPrimitive;
use egui_wgpu::{renderer::ScreenDescriptor, Renderer};

use crate::framework::renderer::{RenderContext, RenderModule, RenderPass, RenderPassContext};

use super::{Gui, GuiDataToRender};

struct RenderData {
    clipped_primitives: Vec<ClippedPrimitive>,
    screen_descriptor: ScreenDescriptor,
}

pub struct GuiRenderModule {
    egui_renderer: Renderer,
    render_data: Option<RenderData>,
}

impl std::fmt::Debug for GuiRenderModule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GuiRenderModule").finish()
    }
}

impl GuiRenderModule {
    #[profiler::function]
    pub fn new(context: &RenderContext) -> GuiRenderModule {
        Self {
            egui_renderer: Renderer::new(
                &context.gpu.device,
                context.surface_config.format,
                None,
                1,
            ),
            render_data: None,
        }
    }

    /// Tessellates a fresh gui frame and uploads its texture and buffer changes.
    #[profiler::function]
    fn upload_frame(
        &mut self,
        data: &GuiDataToRender,
        gui: &Gui,
        context: &RenderContext,
        screen_descriptor: ScreenDescriptor,
    ) {
        {
            profiler::scope!("Update egui textures");
            for (id, image_delta) in &data.textures_delta.set {
                self.egui_renderer.update_texture(
                    &context.gpu.device,
                    &context.gpu.queue,
                    *id,
                    image_delta,
                );
            }
        }

        let clipped_primitives = {
            profiler::scope!("Tessellate gui shapes");
            gui.egui_ctx.tessellate(data.shapes.clone())
        };

        {
            profiler::scope!("Update egui buffers");
            let mut encoder = context
                .gpu
                .device
                .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                    label: Some("Egui command encoder"),
                });
            let user_buffers = self.egui_renderer.update_buffers(
                &context.gpu.device,
                &context.gpu.queue,
                &mut encoder,
                &clipped_primitives,
                &screen_descriptor,
            );
            profiler::call!(
                context
                    .gpu
                    .queue
                    .submit(user_buffers.into_iter().chain(std::iter::once(encoder.finish())))
            );
        }

        {
            profiler::scope!("Free unused egui textures");
            for id in &data.textures_delta.free {
                self.egui_renderer.free_texture(id);
            }
        }

        self.render_data = Some(RenderData {
            clipped_primitives,
            screen_descriptor,
        });
    }
}

impl<Scene> RenderModule<Scene> for GuiRenderModule {
    #[profiler::function]
    fn prepare(&mut self, gui: &Gui, _: &Scene, context: &RenderContext) {
        let screen_descriptor = ScreenDescriptor {
            size_in_pixels: [context.surface_config.width, context.surface_config.height],
            pixels_per_point: context.scale_factor as f32,
        };

        match gui.data_to_render.as_ref() {
            Some(data) => self.upload_frame(data, gui, context, screen_descriptor),
            None => {
                // No fresh gui frame, keep drawing the previous one on the
                // possibly resized surface.
                if let Some(render_data) = self.render_data.as_mut() {
                    render_data.screen_descriptor = screen_descriptor;
                }
            },
        }
    }

    #[profiler::function]
    fn render<'pass, 'a: 'pass>(
        &'a self,
        _: &'a RenderContext,
        render_pass_context: &mut RenderPassContext<'pass>,
    ) {
        let RenderPassContext {
            attachment: RenderPass::Gui { .. },
            render_pass,
        } = render_pass_context else {
            return;
        };

        if let Some(data) = self.render_data.as_ref() {
            render_pass.push_debug_group("egui render pass");
            self.egui_renderer.render(
                render_pass,
                &data.clipped_primitives,
                &data.screen_descriptor,
            );
            render_pass.pop_debug_group();
        }
    }
}
