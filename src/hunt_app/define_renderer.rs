
use crate::framework::{
    application::Context,
    gui::GuiRenderModule,
    renderer::{Renderer, RenderPass},
};

use super::{
    scene::Scene,
    modules::mesh::MeshRenderModule,
};


pub fn define_renderer(context: &Context) -> Renderer<Scene> {
    let mut renderer = Renderer::new(context.gpu.clone(), context.window);

    // load modules
    let mesh_module = renderer.register_module(MeshRenderModule::new);
    let gui_module = renderer.register_module(GuiRenderModule::new);

    // passes are executed in order of their registration
    renderer.register_render_pass(RenderPass::base, &[
        mesh_module,
    ]);

    renderer.register_render_pass(RenderPass::gui, &[
        gui_module
    ]);

    renderer
}
