use bytemuck::{Pod, Zeroable};

use crate::coords::Point;
use crate::render::{RenderCtx, RenderTarget};
use crate::scene::DrawCmd;
use crate::scene::DrawList;
use crate::scene::primitives::outline::OutlineCmd;
use crate::scene::primitives::polygon::PolygonCmd;

use super::common::{
    begin_load_pass, create_viewport_ubo, ensure_vertex_capacity, premul_alpha_blend,
    triangle_list_state, viewport_layout_entry, ViewportUniform,
};

/// One triangle-list vertex: position in logical pixels + linear RGBA.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct SolidVertex {
    pub pos: [f32; 2],
    pub color: [f32; 4],
}

impl SolidVertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x2, // pos
        1 => Float32x4  // color
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<SolidVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

// ── tessellation ──────────────────────────────────────────────────────────

/// Appends triangles for every polygon and outline command in paint order.
///
/// Text commands are skipped; they belong to the text renderer.
pub fn tessellate(draw_list: &DrawList, out: &mut Vec<SolidVertex>) {
    for cmd in draw_list.items() {
        match cmd {
            DrawCmd::Polygon(p) => tessellate_polygon(p, out),
            DrawCmd::Outline(o) => tessellate_outline(o, out),
            DrawCmd::Text(_) => {}
        }
    }
}

/// Fan triangulation anchored at the first vertex.
fn tessellate_polygon(cmd: &PolygonCmd, out: &mut Vec<SolidVertex>) {
    let [first, rest @ ..] = cmd.points.as_slice() else { return };
    if rest.len() < 2 {
        return;
    }
    let color = cmd.color.to_linear_rgba();
    for pair in rest.windows(2) {
        push_triangle(out, color, [*first, pair[0], pair[1]]);
    }
}

/// One quad per segment, `width` wide, centered on the segment.
fn tessellate_outline(cmd: &OutlineCmd, out: &mut Vec<SolidVertex>) {
    if cmd.width <= 0.0 || cmd.points.len() < 2 {
        return;
    }
    let color = cmd.color.to_linear_rgba();
    let half = cmd.width * 0.5;

    let closing = match (cmd.closed, cmd.points.first(), cmd.points.last()) {
        (true, Some(&first), Some(&last)) if cmd.points.len() > 2 => Some((last, first)),
        _ => None,
    };

    let segments = cmd
        .points
        .windows(2)
        .map(|w| (w[0], w[1]))
        .chain(closing);

    for (a, b) in segments {
        let d = b - a;
        let len = d.length();
        if len <= f32::EPSILON {
            continue;
        }
        let n = Point::new(-d.y / len, d.x / len) * half;
        push_triangle(out, color, [a + n, b + n, b - n]);
        push_triangle(out, color, [a + n, b - n, a - n]);
    }
}

fn push_triangle(out: &mut Vec<SolidVertex>, color: [f32; 4], tri: [Point; 3]) {
    out.extend(tri.iter().map(|p| SolidVertex {
        pos: [p.x, p.y],
        color,
    }));
}

// ── renderer ──────────────────────────────────────────────────────────────

/// Renderer for `DrawCmd::Polygon` and `DrawCmd::Outline`.
///
/// Everything is tessellated on the CPU into one triangle list per frame and
/// drawn with a single call, so paint order between fills and outlines is kept.
#[derive(Default)]
pub struct SolidRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,

    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,
    viewport_ubo: Option<wgpu::Buffer>,

    vbo: Option<wgpu::Buffer>,
    vbo_capacity: usize,

    // reused across frames
    vertices: Vec<SolidVertex>,
}

impl SolidRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        draw_list: &DrawList,
    ) {
        self.vertices.clear();
        tessellate(draw_list, &mut self.vertices);
        if self.vertices.is_empty() {
            return;
        }

        self.ensure_pipeline(ctx);
        self.ensure_bindings(ctx);
        self.write_viewport_uniform(ctx);
        ensure_vertex_capacity(
            ctx.device,
            &mut self.vbo,
            &mut self.vbo_capacity,
            self.vertices.len(),
            std::mem::size_of::<SolidVertex>(),
            "easel solid vbo",
        );

        let Some(vbo) = self.vbo.as_ref() else { return };
        ctx.queue.write_buffer(vbo, 0, bytemuck::cast_slice(&self.vertices));

        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(bind_group) = self.bind_group.as_ref() else { return };

        let mut rpass = begin_load_pass(target.encoder, target.color_view, "easel solid pass");
        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.set_vertex_buffer(0, vbo.slice(..));
        rpass.draw(0..self.vertices.len() as u32, 0..1);
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("easel solid shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/solid.wgsl").into()),
        });

        let bind_group_layout =
            ctx.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("easel solid bgl"),
                    entries: &[viewport_layout_entry()],
                });

        let pipeline_layout = ctx
            .device
            .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("easel solid pipeline layout"),
                bind_group_layouts: &[&bind_group_layout],
                immediate_size: 0,
            });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("easel solid pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[SolidVertex::layout()],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(premul_alpha_blend()),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: triangle_list_state(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.bind_group_layout = Some(bind_group_layout);

        self.bind_group = None;
        self.viewport_ubo = None;
    }

    fn ensure_bindings(&mut self, ctx: &RenderCtx<'_>) {
        if self.bind_group.is_some() && self.viewport_ubo.is_some() {
            return;
        }
        let Some(bgl) = self.bind_group_layout.as_ref() else { return };

        let viewport_ubo = create_viewport_ubo(ctx.device, "easel solid viewport ubo");
        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("easel solid bind group"),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: viewport_ubo.as_entire_binding(),
            }],
        });

        self.viewport_ubo = Some(viewport_ubo);
        self.bind_group = Some(bind_group);
    }

    fn write_viewport_uniform(&mut self, ctx: &RenderCtx<'_>) {
        let Some(ubo) = self.viewport_ubo.as_ref() else { return };
        let u = ViewportUniform::new(ctx.viewport);
        ctx.queue.write_buffer(ubo, 0, bytemuck::bytes_of(&u));
    }
}
