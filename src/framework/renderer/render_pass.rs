use crate::framework::gpu;

use super::RenderContext;

/// Attachment setup of one registered pass. The scene pass clears color and
/// depth before drawing, the gui pass paints over whatever is on screen.
#[derive(Debug)]
pub enum RenderPass {
    Base {
        clear_color: wgpu::Color,
        depth_texture: gpu::DepthStencilTexture,
    },

    Gui {

    },
}

/// Handed to render modules so they can tell which pass is being recorded.
#[derive(Debug)]
pub struct RenderPassContext<'pass> {
    pub attachment:  &'pass RenderPass,
    pub render_pass: wgpu::RenderPass<'pass>,
}

fn make_depth_texture(context: &RenderContext) -> gpu::DepthStencilTexture {
    gpu::DepthStencilTexture::new(
        "Scene pass depth texture",
        &context.gpu.device,
        &context.surface_config,
    )
}

// Construction
impl RenderPass {

    pub fn base(context: &RenderContext) -> Self {
        Self::Base {
            // Open sky above the grove
            clear_color: wgpu::Color { r: 0.45, g: 0.66, b: 0.89, a: 1.0 },
            depth_texture: make_depth_texture(context),
        }
    }

    pub fn gui(_context: &RenderContext) -> Self {
        Self::Gui {

        }
    }

}

impl RenderPass {

    /// The depth attachment follows the surface size, color attachments are
    /// borrowed from the surface and need no work here.
    pub fn resize(&mut self, context: &RenderContext) {
        if let Self::Base { depth_texture, .. } = self {
            *depth_texture = make_depth_texture(context);
        }
    }

    pub fn start<'pass>(
        &'pass self,
        encoder: &'pass mut wgpu::CommandEncoder,
        view: &'pass wgpu::TextureView,
    ) -> RenderPassContext<'pass> {
        let render_pass = match self {
            Self::Base { clear_color, depth_texture } => {
                encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("Scene Pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Clear(*clear_color),
                            store: true,
                        },
                    })],
                    depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                        view: depth_texture.view(),
                        depth_ops: Some(wgpu::Operations {
                            load: wgpu::LoadOp::Clear(1.0),
                            store: true,
                        }),
                        stencil_ops: None,
                    }),
                })
            },

            Self::Gui {  } => {
                encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("Gui Pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: true,
                        },
                    })],
                    depth_stencil_attachment: None,
                })
            },
        };

        RenderPassContext { attachment: self, render_pass }
    }
}
