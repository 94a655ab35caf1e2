use crate::framework::updater::{
    AfterRenderContext, InputUpdateResult, ResizeContext, UpdateContext, UpdateResultAction,
    UpdaterModule,
};

/// A unit of gui the application wants on screen. `gui_section` adds rows to
/// the shared "Gui modules" window, `gui_window` is free to open windows and
/// areas of its own.
pub trait GuiModule<Scene> {
    fn gui_window(&mut self, scene: &mut Scene, egui_ctx: &egui::Context);
    fn gui_section(&mut self, scene: &mut Scene, ui: &mut egui::Ui);
}

/// Updater module running one egui frame per update tick over all registered
/// gui modules.
pub struct GuiUpdateModule<Scene> {
    modules: Vec<Box<dyn GuiModule<Scene>>>,
}

impl<Scene> GuiUpdateModule<Scene> {
    pub fn new(modules: Vec<Box<dyn GuiModule<Scene>>>) -> Self {
        Self { modules }
    }
}

impl<Scene> UpdaterModule<Scene> for GuiUpdateModule<Scene> {
    fn input(&mut self, _context: &mut UpdateContext<Scene>) -> InputUpdateResult {
        InputUpdateResult::default()
    }

    #[profiler::function]
    fn update(&mut self, context: &mut UpdateContext<Scene>) -> UpdateResultAction {
        let gui = &mut context.gui;
        let scene = &mut context.scene;

        let raw_input = profiler::call!(gui.egui_winit.take_egui_input(context.window));

        let egui::FullOutput {
            platform_output,
            repaint_after,
            textures_delta,
            shapes,
        } = profiler::call!(gui.egui_ctx.run(raw_input, |egui_ctx| {
            egui::Window::new("Gui modules")
                .default_pos(egui::Pos2::new(0.0, 0.0))
                .show(egui_ctx, |ui| {
                    for module in self.modules.iter_mut() {
                        ui.separator();
                        module.gui_section(scene, ui);
                    }
                });
            for module in self.modules.iter_mut() {
                module.gui_window(scene, egui_ctx);
            }
        }));

        // Cursor changes and clipboard content go back to the window.
        profiler::call!(gui.egui_winit.handle_platform_output(
            context.window,
            &gui.egui_ctx,
            platform_output
        ));

        gui.stash_frame(textures_delta, shapes);

        if repaint_after.is_zero() {
            UpdateResultAction::Redraw
        } else {
            UpdateResultAction::None
        }
    }

    #[profiler::function]
    fn resize(&mut self, context: &mut ResizeContext<Scene>) -> UpdateResultAction {
        context.gui.egui_ctx.set_pixels_per_point(context.scale_factor as f32);
        UpdateResultAction::Redraw
    }

    /// The rendered frame data must not be replayed, see `GuiRenderModule`.
    #[profiler::function]
    fn after_render(&mut self, context: &mut AfterRenderContext<Scene>) {
        context.gui.data_to_render = None;
    }
}
