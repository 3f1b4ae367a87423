//! Growable GPU buffers for per-molecule data.
//!
//! Instance data changes size with every selection, so buffers grow on
//! demand and never shrink.

use std::marker::PhantomData;

use wgpu::util::DeviceExt;

/// Smallest buffer ever allocated, in bytes.
const MIN_CAPACITY: usize = 64;

/// Capacity to reallocate to when `needed` bytes no longer fit in
/// `capacity`; `None` when they still fit.
fn grown_capacity(needed: usize, capacity: usize) -> Option<usize> {
    (needed > capacity).then(|| (needed * 2).max(capacity + 1024))
}

/// A GPU buffer that doubles when written past its capacity.
pub struct DynamicBuffer {
    buffer: wgpu::Buffer,
    capacity: usize,
    usage: wgpu::BufferUsages,
    label: String,
}

impl DynamicBuffer {
    /// Empty buffer with the given byte capacity.
    pub fn new(
        device: &wgpu::Device,
        label: &str,
        initial_capacity: usize,
        usage: wgpu::BufferUsages,
    ) -> Self {
        let capacity = initial_capacity.max(MIN_CAPACITY);
        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size: capacity as u64,
            usage: usage | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        Self {
            buffer,
            capacity,
            usage,
            label: label.to_owned(),
        }
    }

    /// Buffer initialized from `data`.
    pub fn new_with_data<T: bytemuck::Pod>(
        device: &wgpu::Device,
        label: &str,
        data: &[T],
        usage: wgpu::BufferUsages,
    ) -> Self {
        let bytes: &[u8] = bytemuck::cast_slice(data);
        let buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(label),
                contents: bytes,
                usage: usage | wgpu::BufferUsages::COPY_DST,
            });
        Self {
            buffer,
            capacity: bytes.len(),
            usage,
            label: label.to_owned(),
        }
    }

    /// Replace the contents with `data`, growing if necessary.
    ///
    /// Returns `true` if the buffer was reallocated.
    pub fn write<T: bytemuck::Pod>(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        data: &[T],
    ) -> bool {
        let bytes: &[u8] = bytemuck::cast_slice(data);
        let reallocated = match grown_capacity(bytes.len(), self.capacity) {
            Some(capacity) => {
                log::debug!(
                    "growing {} from {} to {} bytes",
                    self.label,
                    self.capacity,
                    capacity
                );
                self.buffer = device.create_buffer(&wgpu::BufferDescriptor {
                    label: Some(&self.label),
                    size: capacity as u64,
                    usage: self.usage | wgpu::BufferUsages::COPY_DST,
                    mapped_at_creation: false,
                });
                self.capacity = capacity;
                true
            }
            None => false,
        };
        if !bytes.is_empty() {
            queue.write_buffer(&self.buffer, 0, bytes);
        }
        reallocated
    }

    /// The underlying wgpu buffer.
    pub fn buffer(&self) -> &wgpu::Buffer {
        &self.buffer
    }
}

/// A [`DynamicBuffer`] of `T` that tracks an item count, for instance
/// data drawn with `0..count()` instances.
pub struct TypedBuffer<T> {
    inner: DynamicBuffer,
    count: usize,
    _marker: PhantomData<T>,
}

impl<T: bytemuck::Pod> TypedBuffer<T> {
    /// Empty buffer with room for `capacity` items.
    pub fn with_capacity(
        device: &wgpu::Device,
        label: &str,
        capacity: usize,
        usage: wgpu::BufferUsages,
    ) -> Self {
        Self {
            inner: DynamicBuffer::new(
                device,
                label,
                size_of::<T>() * capacity,
                usage,
            ),
            count: 0,
            _marker: PhantomData,
        }
    }

    /// Replace the contents with `data`, growing if necessary.
    pub fn write(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        data: &[T],
    ) -> bool {
        self.count = data.len();
        self.inner.write(device, queue, data)
    }

    /// The underlying wgpu buffer.
    pub fn buffer(&self) -> &wgpu::Buffer {
        self.inner.buffer()
    }

    /// Items written by the last [`write`](Self::write).
    pub fn count(&self) -> usize {
        self.count
    }

    /// Whether there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fitting_writes_do_not_grow() {
        assert_eq!(grown_capacity(0, 64), None);
        assert_eq!(grown_capacity(64, 64), None);
    }

    #[test]
    fn growth_at_least_doubles_or_adds_a_kilobyte() {
        assert_eq!(grown_capacity(65, 64), Some(1088));
        assert_eq!(grown_capacity(4000, 1088), Some(8000));
    }
}
