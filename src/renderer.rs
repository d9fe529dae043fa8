//! The per-frame rendering pipeline.
//!
//! One strictly ordered pass per frame: rotate the mesh and marker by the
//! orbit camera, push the scene out along the view axis, cull and flat-shade
//! faces, perspective-project everything to screen space, depth-sort the
//! surviving items farthest-first, and replay them into a [`Surface`] — the
//! painter's algorithm, no depth buffer.
//!
//! [`FrameRenderer::compose`] is pure: it turns scene state into a list of
//! [`RenderItem`]s and touches no I/O, which is where all the pipeline tests
//! live. [`FrameRenderer::draw`] replays a composed list into a surface.

use glam::Vec2;

use crate::camera::OrbitCamera;
use crate::mesh::Mesh;
use crate::surface::{Color, Surface};
use crate::vec3::Vec3;

/// Depths at or below this floor clamp during projection; a marker this
/// close (or behind the viewpoint) is dropped instead.
const MIN_DEPTH: f64 = 1.0;

/// Immutable viewport and lighting configuration.
///
/// Built once and handed to [`FrameRenderer::new`]; nothing here mutates at
/// runtime.
///
/// # Example
/// ```
/// use haptos::RendererConfig;
///
/// let config = RendererConfig::new()
///     .resolution(1024, 768)
///     .focal_length(600.0)
///     .tick_rate(30);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct RendererConfig {
    /// Viewport width in pixels.
    pub width: u32,
    /// Viewport height in pixels.
    pub height: u32,
    /// Perspective scale: screen offset = coordinate × focal / depth.
    pub focal_length: f64,
    /// Lower bound on shading intensity.
    pub ambient: f64,
    /// Direction light travels, in world space. Normalized at construction.
    pub light_dir: Vec3,
    /// Frame rate of the render loop, in Hz.
    pub tick_rate: u32,
    pub background: Color,
    /// Face color before shading.
    pub base_color: Color,
    /// Wireframe outline drawn over each face.
    pub outline_color: Color,
    pub marker_color: Color,
    /// Marker dot radius in pixels.
    pub marker_radius: f32,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            focal_length: 500.0,
            ambient: 0.15,
            light_dir: Vec3::new(0.5, -1.0, 0.5),
            tick_rate: 60,
            background: Color::rgb(25.0 / 255.0, 25.0 / 255.0, 30.0 / 255.0),
            base_color: Color::rgb(140.0 / 255.0, 140.0 / 255.0, 145.0 / 255.0),
            outline_color: Color::rgb(50.0 / 255.0, 50.0 / 255.0, 55.0 / 255.0),
            marker_color: Color::RED,
            marker_radius: 6.0,
        }
    }
}

impl RendererConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn focal_length(mut self, focal_length: f64) -> Self {
        self.focal_length = focal_length;
        self
    }

    pub fn ambient(mut self, ambient: f64) -> Self {
        self.ambient = ambient;
        self
    }

    pub fn light_dir(mut self, light_dir: Vec3) -> Self {
        self.light_dir = light_dir;
        self
    }

    pub fn tick_rate(mut self, tick_rate: u32) -> Self {
        self.tick_rate = tick_rate.max(1);
        self
    }
}

/// One drawable produced by [`FrameRenderer::compose`].
///
/// Items live for a single frame; the draw pass consumes the list and the
/// next frame starts from scratch.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderItem {
    /// Camera-space depth used by the painter's sort.
    pub depth: f64,
    pub kind: RenderKind,
}

#[derive(Clone, Debug, PartialEq)]
pub enum RenderKind {
    /// A culled, shaded, projected mesh face.
    Polygon { points: Vec<Vec2>, color: Color },
    /// The projected tracked point.
    Marker { point: Vec2 },
}

/// Executes the frame pipeline described in the module docs.
pub struct FrameRenderer {
    config: RendererConfig,
    light_dir: Vec3,
}

impl FrameRenderer {
    pub fn new(config: RendererConfig) -> Self {
        Self {
            light_dir: config.light_dir.normalize(),
            config,
        }
    }

    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    /// Build the frame's draw list: transform, cull, shade, project, and
    /// depth-sort the mesh faces plus an optional marker point.
    ///
    /// Malformed faces (fewer than three vertices, zero-length normals) are
    /// dropped from the frame, never reported as errors. A marker at or
    /// behind the depth floor is dropped the same way.
    pub fn compose(&self, mesh: &Mesh, camera: &OrbitCamera, marker: Option<Vec3>) -> Vec<RenderItem> {
        let mut items = Vec::with_capacity(mesh.face_count() + 1);

        let transformed: Vec<Vec3> = mesh
            .vertices
            .iter()
            .map(|&v| self.to_view(camera, v))
            .collect();

        // Light rides with the camera so shading is stable under orbiting.
        let light_view = camera.rotate(self.light_dir);

        for face in &mesh.faces {
            if face.len() < 3 {
                continue;
            }
            let p0 = transformed[face[0]];
            let p1 = transformed[face[1]];
            let pn = transformed[face[face.len() - 1]];

            let normal = (p1 - p0).cross(pn - p0);
            if normal.length_squared() == 0.0 {
                continue; // degenerate face, excluded this frame
            }
            let normal = normal.normalize();

            // Outward winding means a visible face has its normal pointing
            // back toward the viewpoint, against the view axis.
            if normal.z >= 0.0 {
                continue;
            }

            let intensity = normal.dot(-light_view).max(self.config.ambient);

            let depth = face
                .iter()
                .map(|&i| transformed[i].z)
                .sum::<f64>()
                / face.len() as f64;

            let points = face.iter().map(|&i| self.project(transformed[i])).collect();

            items.push(RenderItem {
                depth,
                kind: RenderKind::Polygon {
                    points,
                    color: self.config.base_color.shaded(intensity as f32),
                },
            });
        }

        if let Some(marker) = marker {
            let view = self.to_view(camera, marker);
            if view.z > MIN_DEPTH {
                items.push(RenderItem {
                    depth: view.z,
                    kind: RenderKind::Marker {
                        point: self.project(view),
                    },
                });
            }
        }

        // Painter's algorithm: farthest first. The sort is stable, so equal
        // depths keep their insertion order.
        items.sort_by(|a, b| b.depth.total_cmp(&a.depth));
        items
    }

    /// Replay a composed draw list into the surface and present the frame.
    pub fn draw<S: Surface>(&self, items: &[RenderItem], surface: &mut S) -> Result<(), S::Error> {
        surface.clear(self.config.background);
        for item in items {
            match &item.kind {
                RenderKind::Polygon { points, color } => {
                    surface.fill_polygon(points, *color);
                    surface.stroke_polygon(points, self.config.outline_color);
                }
                RenderKind::Marker { point } => {
                    surface.fill_circle(*point, self.config.marker_radius, self.config.marker_color);
                }
            }
        }
        surface.present()
    }

    /// Compose and draw in one call.
    pub fn render<S: Surface>(
        &self,
        mesh: &Mesh,
        camera: &OrbitCamera,
        marker: Option<Vec3>,
        surface: &mut S,
    ) -> Result<(), S::Error> {
        let items = self.compose(mesh, camera, marker);
        self.draw(&items, surface)
    }

    fn to_view(&self, camera: &OrbitCamera, v: Vec3) -> Vec3 {
        let mut rotated = camera.rotate(v);
        rotated.z += camera.distance;
        rotated
    }

    fn project(&self, p: Vec3) -> Vec2 {
        let factor = self.config.focal_length / p.z.max(MIN_DEPTH);
        Vec2::new(
            (p.x * factor + f64::from(self.config.width) / 2.0) as f32,
            (-p.y * factor + f64::from(self.config.height) / 2.0) as f32,
        )
    }
}
