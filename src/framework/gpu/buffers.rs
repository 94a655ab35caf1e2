use std::{fmt::Debug, marker::PhantomData};

use wgpu::util::DeviceExt;

use crate::warn;

use super::Context;

/// A typed GPU buffer tracking how many items it holds and how many it can
/// hold without reallocating.
#[derive(Debug)]
pub struct Buffer<I: Debug + Copy + Clone + bytemuck::Pod + bytemuck::Zeroable> {
    pub label: Option<&'static str>,
    pub buffer: wgpu::Buffer,
    /// The number of items currently in the buffer.
    pub size: usize,
    /// How many items fit into the allocation.
    pub capacity: usize,
    usage: wgpu::BufferUsages,
    _phantom: PhantomData<I>,
}

impl<I: Debug + Copy + Clone + bytemuck::Pod + bytemuck::Zeroable> Buffer<I> {
    #[profiler::function]
    pub fn new(
        gpu: &Context,
        label: Option<&'static str>,
        data: &[I],
        usage: wgpu::BufferUsages,
    ) -> Buffer<I> {
        let buffer = gpu.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label,
            usage,
            contents: bytemuck::cast_slice(data),
        });
        Buffer {
            label,
            buffer,
            size: data.len(),
            capacity: data.len(),
            usage,
            _phantom: PhantomData,
        }
    }

    /// Uploads `new_data`, growing the allocation when it does not fit.
    /// Returns true when the buffer was reallocated, old bindings are invalid then.
    #[profiler::function]
    pub fn queue_update(&mut self, gpu: &Context, new_data: &[I]) -> bool {
        self.size = new_data.len();

        if new_data.len() > self.capacity {
            profiler::scope!("Updating buffer with reallocation");
            warn!(
                "Buffer {:?} reallocates {} -> {} items",
                self.label, self.capacity, new_data.len()
            );
            self.buffer = gpu.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: self.label,
                usage: self.usage,
                contents: bytemuck::cast_slice(new_data),
            });
            self.capacity = new_data.len();
            return true;
        }

        profiler::scope!("Updating buffer in place");
        if !new_data.is_empty() {
            gpu.queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(new_data));
        }
        false
    }
}
