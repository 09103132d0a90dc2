//! Line-list rendering for the editor viewport
//!
//! Two pipelines share one shader: the scene pass (grid and object
//! wireframes) is depth tested, the overlay pass (selection outline and
//! gizmo) always draws on top.

use cgmath::Matrix4;
use wgpu::*;

use crate::gfx::gizmos::GizmoVertex;

pub const DEPTH_FORMAT: TextureFormat = TextureFormat::Depth32Float;

/// Smallest vertex buffer allocated, in vertices
const MIN_LINE_CAPACITY: usize = 1024;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineUniform {
    pub view_proj: [[f32; 4]; 4],
}

impl LineUniform {
    pub fn new(view_proj: Matrix4<f32>) -> Self {
        Self {
            view_proj: view_proj.into(),
        }
    }
}

/// Vertex capacity that fits `needed`; grows in powers of two, never shrinks
pub fn grow_capacity(current: usize, needed: usize) -> usize {
    if needed <= current {
        current
    } else {
        needed.next_power_of_two().max(MIN_LINE_CAPACITY)
    }
}

struct LineBuffer {
    label: &'static str,
    buffer: Buffer,
    capacity: usize,
    count: u32,
}

impl LineBuffer {
    fn new(device: &Device, label: &'static str) -> Self {
        Self {
            label,
            buffer: Self::create(device, label, MIN_LINE_CAPACITY),
            capacity: MIN_LINE_CAPACITY,
            count: 0,
        }
    }

    fn create(device: &Device, label: &'static str, capacity: usize) -> Buffer {
        device.create_buffer(&BufferDescriptor {
            label: Some(label),
            size: (capacity * std::mem::size_of::<GizmoVertex>()) as BufferAddress,
            usage: BufferUsages::VERTEX | BufferUsages::COPY_DST,
            mapped_at_creation: false,
        })
    }

    fn upload(&mut self, device: &Device, queue: &Queue, vertices: &[GizmoVertex]) {
        let capacity = grow_capacity(self.capacity, vertices.len());
        if capacity != self.capacity {
            self.buffer = Self::create(device, self.label, capacity);
            self.capacity = capacity;
        }

        if !vertices.is_empty() {
            queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(vertices));
        }
        self.count = vertices.len() as u32;
    }

    fn draw(&self, render_pass: &mut RenderPass<'_>) {
        if self.count == 0 {
            return;
        }
        render_pass.set_vertex_buffer(0, self.buffer.slice(..));
        render_pass.draw(0..self.count, 0..1);
    }
}

/// Draws colored line lists with a shared camera uniform
pub struct LineRenderer {
    scene_pipeline: RenderPipeline,
    overlay_pipeline: RenderPipeline,
    camera_buffer: Buffer,
    camera_bind_group: BindGroup,
    scene_lines: LineBuffer,
    overlay_lines: LineBuffer,
}

impl LineRenderer {
    pub fn new(device: &Device, surface_format: TextureFormat) -> Self {
        let shader = device.create_shader_module(ShaderModuleDescriptor {
            label: Some("Line Shader"),
            source: ShaderSource::Wgsl(include_str!("shaders/lines.wgsl").into()),
        });

        let camera_buffer = device.create_buffer(&BufferDescriptor {
            label: Some("Line Camera Buffer"),
            size: std::mem::size_of::<LineUniform>() as BufferAddress,
            usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let camera_bind_group_layout =
            device.create_bind_group_layout(&BindGroupLayoutDescriptor {
                label: Some("Line Camera Layout"),
                entries: &[BindGroupLayoutEntry {
                    binding: 0,
                    visibility: ShaderStages::VERTEX,
                    ty: BindingType::Buffer {
                        ty: BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            });

        let camera_bind_group = device.create_bind_group(&BindGroupDescriptor {
            label: Some("Line Camera Bind Group"),
            layout: &camera_bind_group_layout,
            entries: &[BindGroupEntry {
                binding: 0,
                resource: camera_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&PipelineLayoutDescriptor {
            label: Some("Line Pipeline Layout"),
            bind_group_layouts: &[&camera_bind_group_layout],
            push_constant_ranges: &[],
        });

        let scene_pipeline = Self::create_pipeline(
            device,
            &pipeline_layout,
            &shader,
            surface_format,
            "Scene Line Pipeline",
            CompareFunction::Less,
            true,
        );
        let overlay_pipeline = Self::create_pipeline(
            device,
            &pipeline_layout,
            &shader,
            surface_format,
            "Overlay Line Pipeline",
            CompareFunction::Always,
            false,
        );

        Self {
            scene_pipeline,
            overlay_pipeline,
            camera_buffer,
            camera_bind_group,
            scene_lines: LineBuffer::new(device, "Scene Line Buffer"),
            overlay_lines: LineBuffer::new(device, "Overlay Line Buffer"),
        }
    }

    fn create_pipeline(
        device: &Device,
        layout: &PipelineLayout,
        shader: &ShaderModule,
        surface_format: TextureFormat,
        label: &str,
        depth_compare: CompareFunction,
        depth_write_enabled: bool,
    ) -> RenderPipeline {
        device.create_render_pipeline(&RenderPipelineDescriptor {
            label: Some(label),
            layout: Some(layout),
            vertex: VertexState {
                module: shader,
                entry_point: Some("vs_main"),
                buffers: &[GizmoVertex::desc()],
                compilation_options: Default::default(),
            },
            fragment: Some(FragmentState {
                module: shader,
                entry_point: Some("fs_main"),
                targets: &[Some(ColorTargetState {
                    format: surface_format,
                    blend: Some(BlendState::ALPHA_BLENDING),
                    write_mask: ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: PrimitiveState {
                topology: PrimitiveTopology::LineList,
                strip_index_format: None,
                front_face: FrontFace::Ccw,
                cull_mode: None,
                unclipped_depth: false,
                polygon_mode: PolygonMode::Fill,
                conservative: false,
            },
            depth_stencil: Some(DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled,
                depth_compare,
                stencil: StencilState::default(),
                bias: DepthBiasState::default(),
            }),
            multisample: MultisampleState::default(),
            multiview: None,
            cache: None,
        })
    }

    /// Upload this frame's camera and line data
    pub fn prepare(
        &mut self,
        device: &Device,
        queue: &Queue,
        view_proj: Matrix4<f32>,
        scene: &[GizmoVertex],
        overlay: &[GizmoVertex],
    ) {
        queue.write_buffer(
            &self.camera_buffer,
            0,
            bytemuck::cast_slice(&[LineUniform::new(view_proj)]),
        );
        self.scene_lines.upload(device, queue, scene);
        self.overlay_lines.upload(device, queue, overlay);
    }

    /// Scene lines first, then the overlay on top
    pub fn draw(&self, render_pass: &mut RenderPass<'_>) {
        render_pass.set_bind_group(0, &self.camera_bind_group, &[]);

        render_pass.set_pipeline(&self.scene_pipeline);
        self.scene_lines.draw(render_pass);

        render_pass.set_pipeline(&self.overlay_pipeline);
        self.overlay_lines.draw(render_pass);
    }
}
