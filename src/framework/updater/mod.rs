///! Scene updating layer.
///! An `Updater` owns an ordered list of `UpdaterModule`s and drives them from
///! the application loop: `input` on new input state, `update` on clock ticks,
///! `resize` on window changes and `after_render` once a frame was submitted.

use winit::window::Window;
use winit_input_helper::WinitInputHelper;

use crate::framework::{clock::Tick, gui::Gui};

pub struct UpdateContext<'a, Scene> {
    pub gui:    &'a mut Gui,
    pub scene:  &'a mut Scene,
    pub input:  &'a WinitInputHelper,
    pub tick:   &'a Tick,
    pub window: &'a Window,
}

pub struct ResizeContext<'a, Scene> {
    pub gui:          &'a mut Gui,
    pub scene:        &'a mut Scene,
    pub size:         &'a winit::dpi::PhysicalSize<u32>,
    pub scale_factor: f64,
}

pub struct AfterRenderContext<'a, Scene> {
    pub gui:   &'a mut Gui,
    pub scene: &'a mut Scene,
}

/// What the application loop should do after an update round.
/// Variants are ordered by severity, combining keeps the stronger one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum UpdateResultAction {
    #[default]
    None,
    Redraw,
    Exit,
}

impl UpdateResultAction {
    pub fn combine(self, other: Self) -> Self {
        self.max(other)
    }
}

#[derive(Default)]
pub struct InputUpdateResult {
    /// A handled input is not offered to modules further down the list.
    pub handled: bool,
    pub result: UpdateResultAction,
}

impl InputUpdateResult {
    pub fn combine(self, other: Self) -> Self {
        Self {
            handled: self.handled || other.handled,
            result:  self.result.combine(other.result),
        }
    }
}

/// One updating concern of the scene. Everything except input handling
/// defaults to a no-op so that simple modules stay short.
pub trait UpdaterModule<Scene> {
    fn input(&mut self, context: &mut UpdateContext<Scene>) -> InputUpdateResult;

    fn update(&mut self, _context: &mut UpdateContext<Scene>) -> UpdateResultAction {
        UpdateResultAction::None
    }

    fn resize(&mut self, _context: &mut ResizeContext<Scene>) -> UpdateResultAction {
        UpdateResultAction::None
    }

    fn after_render(&mut self, _context: &mut AfterRenderContext<Scene>) {}
}

pub struct Updater<Scene> {
    modules: Vec<Box<dyn UpdaterModule<Scene>>>,
}

impl<Scene> Updater<Scene> {
    pub fn new() -> Self {
        Self { modules: vec![] }
    }

    pub fn with_module<M>(mut self, module: M) -> Self
    where
        M: UpdaterModule<Scene> + 'static,
    {
        self.modules.push(Box::new(module));
        self
    }

    /// Offers the new input state to modules in registration order until one
    /// of them claims it as handled.
    #[profiler::function]
    pub fn input(&mut self, mut context: UpdateContext<Scene>) -> UpdateResultAction {
        let mut result = InputUpdateResult::default();
        for module in self.modules.iter_mut() {
            result = result.combine(module.input(&mut context));
            if result.handled {
                break;
            }
        }
        result.result
    }

    #[profiler::function]
    pub fn update(&mut self, mut context: UpdateContext<Scene>) -> UpdateResultAction {
        self.modules
            .iter_mut()
            .fold(UpdateResultAction::None, |action, module| {
                action.combine(module.update(&mut context))
            })
    }

    #[profiler::function]
    pub fn resize(&mut self, mut context: ResizeContext<Scene>) -> UpdateResultAction {
        self.modules
            .iter_mut()
            .fold(UpdateResultAction::None, |action, module| {
                action.combine(module.resize(&mut context))
            })
    }

    #[profiler::function]
    pub fn after_render(&mut self, mut context: AfterRenderContext<Scene>) {
        for module in self.modules.iter_mut() {
            module.after_render(&mut context);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::UpdateResultAction;

    #[test]
    fn combine_keeps_the_stronger_action() {
        use UpdateResultAction::*;
        assert_eq!(None.combine(Redraw), Redraw);
        assert_eq!(Redraw.combine(Exit), Exit);
        assert_eq!(Exit.combine(None), Exit);
        assert_eq!(None.combine(None), None);
    }
}
