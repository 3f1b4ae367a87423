//! wgpu renderer for ball-and-stick scenes.
//!
//! Draws every atom with one instanced unit sphere and every bond with one
//! instanced unit cylinder. Instance data is re-uploaded only when the
//! displayed group changes; the group rotation travels in a uniform.

pub mod instance;
pub mod mesh;
pub(crate) mod pipeline_util;

use wgpu::util::DeviceExt;

use self::instance::PrimitiveInstance;
use self::mesh::{MeshData, MeshVertex};
use crate::camera::core::CameraUniform;
use crate::engine::frame::{FrameRenderer, FrameView};
use crate::error::MolviewError;
use crate::gpu::dynamic_buffer::{DynamicBuffer, TypedBuffer};
use crate::gpu::render_context::RenderContext;
use crate::options::GeometryOptions;
use crate::scene::{Primitive, SceneGroup};
use crate::util::lighting::LightingUniform;

/// Instances reserved up front; the largest built-in molecule has 17
/// primitives.
const INITIAL_INSTANCES: usize = 64;

/// One unit mesh and the instances drawn with it.
struct InstancedMesh {
    vertices: DynamicBuffer,
    indices: DynamicBuffer,
    index_count: u32,
    instances: TypedBuffer<PrimitiveInstance>,
}

impl InstancedMesh {
    fn new(device: &wgpu::Device, label: &str, mesh: &MeshData) -> Self {
        Self {
            vertices: DynamicBuffer::new_with_data(
                device,
                &format!("{label} Vertices"),
                &mesh.vertices,
                wgpu::BufferUsages::VERTEX,
            ),
            indices: DynamicBuffer::new_with_data(
                device,
                &format!("{label} Indices"),
                &mesh.indices,
                wgpu::BufferUsages::INDEX,
            ),
            index_count: mesh.indices.len() as u32,
            instances: TypedBuffer::with_capacity(
                device,
                &format!("{label} Instances"),
                INITIAL_INSTANCES,
                wgpu::BufferUsages::VERTEX,
            ),
        }
    }

    fn upload<'a>(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        primitives: impl Iterator<Item = &'a Primitive>,
    ) {
        let data: Vec<PrimitiveInstance> =
            primitives.map(PrimitiveInstance::from_primitive).collect();
        let _ = self.instances.write(device, queue, &data);
    }

    fn draw(&self, pass: &mut wgpu::RenderPass<'_>) {
        if self.instances.is_empty() {
            return;
        }
        pass.set_vertex_buffer(0, self.vertices.buffer().slice(..));
        pass.set_vertex_buffer(1, self.instances.buffer().slice(..));
        pass.set_index_buffer(
            self.indices.buffer().slice(..),
            wgpu::IndexFormat::Uint32,
        );
        pass.draw_indexed(
            0..self.index_count,
            0,
            0..self.instances.count() as u32,
        );
    }
}

/// Renders [`FrameView`]s to a window or canvas surface.
pub struct BallAndStickRenderer {
    context: RenderContext,
    pipeline: wgpu::RenderPipeline,
    bind_group: wgpu::BindGroup,
    camera_buffer: wgpu::Buffer,
    lighting_buffer: wgpu::Buffer,
    model_buffer: wgpu::Buffer,
    spheres: InstancedMesh,
    cylinders: InstancedMesh,
    /// Generation of the group whose instances are on the GPU.
    uploaded_generation: Option<u64>,
}

impl BallAndStickRenderer {
    /// Set up the GPU context, unit meshes and pipeline for `target`.
    ///
    /// # Errors
    ///
    /// Returns [`MolviewError::Gpu`] if no adapter, device or compatible
    /// surface configuration is available.
    pub async fn new(
        target: impl Into<wgpu::SurfaceTarget<'static>>,
        size: (u32, u32),
        geometry: &GeometryOptions,
    ) -> Result<Self, MolviewError> {
        let context = RenderContext::new(target, size).await?;
        let device = &context.device;

        let shader =
            device.create_shader_module(wgpu::ShaderModuleDescriptor {
                label: Some("Ball and Stick Shader"),
                source: wgpu::ShaderSource::Wgsl(
                    include_str!("shaders/ball_and_stick.wgsl").into(),
                ),
            });

        let uniform = |label: &str, contents: &[u8]| {
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(label),
                contents,
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            })
        };
        let camera_buffer =
            uniform("Camera Uniform", bytemuck::bytes_of(&CameraUniform::new()));
        let lighting_buffer = uniform(
            "Lighting Uniform",
            bytemuck::bytes_of(&LightingUniform::default()),
        );
        let model_buffer = uniform(
            "Model Uniform",
            bytemuck::bytes_of(&glam::Mat4::IDENTITY.to_cols_array_2d()),
        );

        let uniform_entry = |binding: u32| wgpu::BindGroupLayoutEntry {
            binding,
            visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        };
        let layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Ball and Stick Bind Group Layout"),
                entries: &[uniform_entry(0), uniform_entry(1), uniform_entry(2)],
            });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Ball and Stick Bind Group"),
            layout: &layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: camera_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: lighting_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: model_buffer.as_entire_binding(),
                },
            ],
        });

        let pipeline = pipeline_util::create_mesh_pipeline(
            device,
            context.format(),
            "Ball and Stick",
            &shader,
            &[&layout],
            &[MeshVertex::layout(), PrimitiveInstance::layout()],
        );

        let spheres = InstancedMesh::new(
            device,
            "Sphere",
            &mesh::unit_sphere(
                geometry.sphere_width_segments,
                geometry.sphere_height_segments,
            ),
        );
        let cylinders = InstancedMesh::new(
            device,
            "Cylinder",
            &mesh::unit_cylinder(geometry.cylinder_radial_segments),
        );

        Ok(Self {
            context,
            pipeline,
            bind_group,
            camera_buffer,
            lighting_buffer,
            model_buffer,
            spheres,
            cylinders,
            uploaded_generation: None,
        })
    }

    /// The GPU context.
    pub fn context(&self) -> &RenderContext {
        &self.context
    }

    /// Resize the surface and depth target.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context.resize(width, height);
    }

    /// Reconfigure the surface at its current size, after it was lost or
    /// went out of date.
    pub fn reconfigure(&mut self) {
        let (width, height) = self.context.size();
        self.context.resize(width, height);
    }

    fn upload_group(&mut self, group: Option<&SceneGroup>) {
        let device = &self.context.device;
        let queue = &self.context.queue;
        match group {
            Some(group) => {
                self.spheres.upload(device, queue, group.spheres());
                self.cylinders.upload(device, queue, group.cylinders());
                log::debug!(
                    "uploaded {} instances for {}",
                    group.len(),
                    group.molecule_id()
                );
            }
            None => {
                self.spheres.upload(device, queue, std::iter::empty());
                self.cylinders.upload(device, queue, std::iter::empty());
            }
        }
    }
}

impl FrameRenderer for BallAndStickRenderer {
    type Error = wgpu::SurfaceError;

    fn render(&mut self, frame: &FrameView<'_>) -> Result<(), wgpu::SurfaceError> {
        if frame.size != self.context.size() {
            self.context.resize(frame.size.0, frame.size.1);
        }
        if self.uploaded_generation != Some(frame.generation) {
            self.upload_group(frame.group);
            self.uploaded_generation = Some(frame.generation);
        }

        let queue = &self.context.queue;
        queue.write_buffer(&self.camera_buffer, 0, bytemuck::bytes_of(&frame.camera));
        queue.write_buffer(
            &self.lighting_buffer,
            0,
            bytemuck::bytes_of(&frame.lighting),
        );
        queue.write_buffer(
            &self.model_buffer,
            0,
            bytemuck::bytes_of(&frame.model.to_cols_array_2d()),
        );

        let output = self.context.get_next_frame()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self.context.create_encoder();
        {
            let mut pass =
                encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("Ball and Stick Pass"),
                    color_attachments: &[Some(
                        wgpu::RenderPassColorAttachment {
                            view: &view,
                            depth_slice: None,
                            resolve_target: None,
                            ops: wgpu::Operations {
                                load: wgpu::LoadOp::Clear(clear_color(
                                    frame.clear_color,
                                )),
                                store: wgpu::StoreOp::Store,
                            },
                        },
                    )],
                    depth_stencil_attachment: Some(
                        wgpu::RenderPassDepthStencilAttachment {
                            view: self.context.depth_view(),
                            depth_ops: Some(wgpu::Operations {
                                load: wgpu::LoadOp::Clear(1.0),
                                store: wgpu::StoreOp::Store,
                            }),
                            stencil_ops: None,
                        },
                    ),
                    ..Default::default()
                });
            pass.set_pipeline(&self.pipeline);
            pass.set_bind_group(0, &self.bind_group, &[]);
            self.spheres.draw(&mut pass);
            self.cylinders.draw(&mut pass);
        }
        self.context.submit(encoder);
        output.present();
        Ok(())
    }
}

fn clear_color([r, g, b]: [f32; 3]) -> wgpu::Color {
    wgpu::Color {
        r: f64::from(r),
        g: f64::from(g),
        b: f64::from(b),
        a: 1.0,
    }
}
