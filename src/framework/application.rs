use std::sync::Arc;

use winit_input_helper::WinitInputHelper;
use winit::{
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    platform::run_return::EventLoopExtRunReturn,
    window::{Window, WindowBuilder},
};

use super::{
    gpu,
    clock::Clock,
    gui::Gui,
    camera::SceneWithCamera,
    renderer::Renderer,
    updater::{AfterRenderContext, ResizeContext, UpdateContext, UpdateResultAction, Updater},
};

#[derive(Clone, Debug)]
pub struct RunParams {
    pub window_name: &'static str,
    pub window_width: u32,
    pub window_height: u32,
    pub tick_per_second: u32,
}

impl Default for RunParams {
    fn default() -> Self {
        Self {
            window_name: "App",
            window_width: 1280,
            window_height: 720,
            tick_per_second: 30,
        }
    }
}

/// Handles passed to the init functions of `ApplicationDescriptor`.
pub struct Context<'a> {
    pub params: &'a RunParams,
    pub window: &'a Window,
    pub gpu: Arc<gpu::Context>,
}

pub struct ApplicationDescriptor<R, U, I, G> {
    pub init_renderer: R,
    pub init_updater: U,
    pub init_scene: I,
    pub style_gui: G,
}

/// Creates the window and GPU context, builds the updater, renderer and scene
/// through the descriptor and then blocks on the event loop until exit.
#[profiler::function]
pub fn run<S, R, U, I, G>(descriptor: ApplicationDescriptor<R, U, I, G>, params: RunParams)
where
    S: SceneWithCamera + Sized,
    for<'a> R: FnOnce(&'a Context) -> Renderer<S>,
    U: FnOnce(&Context) -> Updater<S>,
    I: FnOnce(&Context) -> S,
    G: FnOnce(egui::Style) -> egui::Style,
{
    let mut event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(params.window_name)
        .with_inner_size(winit::dpi::LogicalSize::new(params.window_width, params.window_height))
        .build(&event_loop)
        .expect("Failed to create window");
    let gpu = Arc::new(pollster::block_on(gpu::Context::new(&window)));

    let (mut updater, mut renderer, mut scene, mut gui) = {
        let context = Context {
            params: &params,
            window: &window,
            gpu: gpu.clone(),
        };
        (
            (descriptor.init_updater)(&context),
            (descriptor.init_renderer)(&context),
            (descriptor.init_scene)(&context),
            Gui::new(&event_loop, descriptor.style_gui),
        )
    };

    let mut input = WinitInputHelper::new();
    let mut clock = Clock::now(params.tick_per_second as u64);
    let mut gui_consumed_event = false;

    counters::register!("frame_counter");
    counters::register!("event_counter");
    counters::register!("update_counter");

    event_loop.run_return(move |event, _, control_flow| {
        profiler::scope!("Event incoming");
        counters::sample!("event_counter", 1.0);

        let mut flow_action = UpdateResultAction::None;

        match event {
            Event::NewEvents(_) | Event::MainEventsCleared | Event::WindowEvent { .. } => {
                profiler::scope!("Processing input event");

                if let Event::WindowEvent { event, .. } = &event {
                    // Egui sees every window event first. AxisMotion is kept away
                    // from it, on x11 it interferes with dragging egui sliders.
                    if !matches!(event, WindowEvent::AxisMotion { .. }) {
                        profiler::scope!("Processing input event by GUI");
                        gui_consumed_event = gui.on_event(event).consumed;
                    }
                }

                // The input helper aggregates raw events, updater modules read
                // the aggregate instead of individual events.
                if !input.update(&event) {
                    let resized = if let Some(size) = input.window_resized() {
                        Some((size, input.scale_factor().unwrap_or(1.0)))
                    } else {
                        input.scale_factor_changed().map(|factor| (window.inner_size(), factor))
                    };

                    let input_action = if let Some((size, scale_factor)) = resized {
                        renderer.resize(&size, scale_factor);
                        updater.resize(ResizeContext {
                            gui:   &mut gui,
                            scene: &mut scene,
                            size:  &size,
                            scale_factor,
                        })
                    } else if input.close_requested() || input.destroyed() {
                        UpdateResultAction::Exit
                    } else if !gui_consumed_event {
                        updater.input(UpdateContext {
                            gui:    &mut gui,
                            scene:  &mut scene,
                            input:  &input,
                            tick:   clock.current_tick(),
                            window: &window,
                        })
                    } else {
                        UpdateResultAction::None
                    };

                    flow_action = flow_action.combine(input_action);
                }
            },

            // Drawing happens only on redraw requests. After each frame another
            // redraw is requested right away, presentation then blocks on vsync
            // and caps the frame rate.
            Event::RedrawRequested(_) => {
                profiler::scope!("Processing redraw request");

                renderer.prepare(&gui, &scene);
                renderer.render();
                renderer.finalize();

                updater.after_render(AfterRenderContext {
                    gui:   &mut gui,
                    scene: &mut scene,
                });

                counters::sample!("frame_counter", 1.0);
                flow_action = UpdateResultAction::Redraw;
            },

            _ => {},
        }

        // Fixed frequency logic updates, interleaved with whatever events arrive.
        if clock.tick() {
            updater.update(UpdateContext {
                gui:    &mut gui,
                scene:  &mut scene,
                input:  &input,
                tick:   clock.current_tick(),
                window: &window,
            });
            counters::sample!("update_counter", 1.0);
        } else {
            // Wake up for the next tick even when no events are coming.
            *control_flow = ControlFlow::WaitUntil(*clock.next_scheduled_tick());
        }

        match flow_action {
            UpdateResultAction::Exit   => *control_flow = ControlFlow::Exit,
            UpdateResultAction::Redraw => window.request_redraw(),
            UpdateResultAction::None   => {},
        }
    });
}
