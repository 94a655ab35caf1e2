use std::fmt::Debug;

use crate::framework::gui::Gui;

use super::{RenderContext, RenderPassContext};

/// One drawing concern of the renderer. A module uploads its GPU resources in
/// `prepare` and issues draw calls in `render` for every pass it is attached to.
pub trait RenderModule<Scene>: Debug {
    fn prepare(&mut self, gui: &Gui, scene: &Scene, context: &RenderContext);

    /// `'a: 'pass`, the module and its resources outlive the recorded pass.
    fn render<'pass, 'a: 'pass>(
        &'a self,
        context: &'a RenderContext,
        render_pass_context: &mut RenderPassContext<'pass>,
    );

    /// Cleanup after the frame was submitted, a no-op for most modules.
    fn finalize(&mut self) {}
}
