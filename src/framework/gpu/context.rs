use winit::window::Window;

/// Device handles shared by everything that talks to the GPU.
#[derive(Debug)]
pub struct Context {
    pub surface: wgpu::Surface,
    pub adapter: wgpu::Adapter,
    pub device:  wgpu::Device,
    pub queue:   wgpu::Queue,
}

impl Context {

    #[profiler::function]
    pub async fn new(window: &Window) -> Self {
        let instance = {
            profiler::scope!("Creating instance");
            wgpu::Instance::new(wgpu::InstanceDescriptor {
                backends: wgpu::Backends::all(),
                dx12_shader_compiler: wgpu::Dx12Compiler::default(),
            })
        };

        let surface = {
            profiler::scope!("Creating surface");
            unsafe { instance.create_surface(window) }
                .expect("Failed to create surface")
        };

        let adapter = profiler::call!(
            instance.request_adapter(
                &wgpu::RequestAdapterOptions {
                    power_preference: wgpu::PowerPreference::default(),
                    force_fallback_adapter: false,
                    compatible_surface: Some(&surface),
                }
            ).await.expect("Failed to find an appropriate adapter")
        );

        let (device, queue) = profiler::call!(
            adapter.request_device(
                &wgpu::DeviceDescriptor {
                    label: None,
                    // camera data is passed to shaders as a push constant
                    features: wgpu::Features::PUSH_CONSTANTS,
                    limits: wgpu::Limits {
                        max_push_constant_size: 128,
                        ..Default::default()
                    },
                },
                None
            ).await.expect("Failed to create device")
        );

        Self {
            adapter,
            surface,
            device,
            queue,
        }
    }

}
