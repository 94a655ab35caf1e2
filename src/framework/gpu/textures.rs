/// Depth attachment of the scene pass, recreated on every surface resize.
/// Nothing samples it, so no sampler or binding usage is set up.
/// See: https://sotrh.github.io/learn-wgpu/beginner/tutorial8-depth/#a-pixels-depth
#[derive(Debug)]
pub struct DepthStencilTexture {
    // The view keeps the underlying texture alive.
    view: wgpu::TextureView,
}

impl DepthStencilTexture {
    pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

    #[profiler::function]
    pub fn new(label: &str, device: &wgpu::Device, config: &wgpu::SurfaceConfiguration) -> Self {
        let texture = profiler::call!(
            device.create_texture(&wgpu::TextureDescriptor {
                label: Some(label),
                format: Self::DEPTH_FORMAT,
                size: wgpu::Extent3d {
                    width: config.width,
                    height: config.height,
                    depth_or_array_layers: 1,
                },
                mip_level_count: 1,
                sample_count: 1,
                dimension: wgpu::TextureDimension::D2,
                usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
                view_formats: &[],
            })
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        Self { view }
    }

    pub fn view(&self) -> &wgpu::TextureView {
        &self.view
    }

    /// Depth test state of pipelines drawing into the scene pass.
    pub fn stencil() -> wgpu::DepthStencilState {
        wgpu::DepthStencilState {
            format: Self::DEPTH_FORMAT,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }
    }
}
