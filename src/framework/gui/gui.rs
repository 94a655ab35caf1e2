use egui_winit::EventResponse;
use winit::{event::WindowEvent, event_loop::EventLoopWindowTarget};

/// Shared egui state: the context itself, its winit bridge and the output of
/// the most recent gui frame waiting to be rendered.
pub struct Gui {
    pub egui_ctx: egui::Context,
    pub egui_winit: egui_winit::State,
    pub data_to_render: Option<GuiDataToRender>,
}

pub struct GuiDataToRender {
    pub textures_delta: egui::TexturesDelta,
    pub shapes: Vec<egui::epaint::ClippedShape>,
}

impl Gui {
    #[profiler::function]
    pub fn new<T, F>(event_loop: &EventLoopWindowTarget<T>, style_gui: F) -> Self
    where
        F: FnOnce(egui::Style) -> egui::Style,
    {
        let egui_ctx = egui::Context::default();
        egui_ctx.set_style(style_gui((*egui_ctx.style()).clone()));
        Self {
            egui_ctx,
            egui_winit: egui_winit::State::new(event_loop),
            data_to_render: None,
        }
    }

    #[profiler::function]
    pub fn on_event(&mut self, event: &WindowEvent<'_>) -> EventResponse {
        self.egui_winit.on_event(&self.egui_ctx, event)
    }

    /// Queues the output of a finished gui frame for the gui render module.
    /// When the previous frame was never rendered its texture changes still
    /// apply, only its shapes are replaced by the fresh ones.
    pub fn stash_frame(
        &mut self,
        textures_delta: egui::TexturesDelta,
        shapes: Vec<egui::epaint::ClippedShape>,
    ) {
        let textures_delta = match self.data_to_render.take() {
            Some(stale) => {
                let mut merged = stale.textures_delta;
                merged.append(textures_delta);
                merged
            },
            None => textures_delta,
        };
        self.data_to_render = Some(GuiDataToRender { textures_delta, shapes });
    }
}
