//! Graphics backend seam and a recording implementation.
//!
//! The render context never talks to a GPU directly. It drives a
//! [`GraphicsBackend`] with batches of [`DrawCommand`]s, and the backend owns
//! the device-side clip rectangle and viewport. [`RecordingBackend`] keeps
//! every submitted batch in memory for tests and headless use.

use kurbo::{Affine, Vec2};

use crate::geometry::{Point, Rect};
use crate::style::color::Color;

// ---------------------------------------------------------------------------
// SurfaceId
// ---------------------------------------------------------------------------

/// Opaque handle of a drawable surface (a texture owned by the host).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SurfaceId(pub u32);

// ---------------------------------------------------------------------------
// DrawCommand
// ---------------------------------------------------------------------------

/// One textured quad.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCommand {
    pub surface: SurfaceId,
    /// Destination rectangle in local (pre-transform) coordinates.
    pub dest: Rect,
    /// Source region of the surface; `None` draws the whole surface.
    pub source: Option<Rect>,
    pub tint: Color,
    /// Rotation in radians around `origin`.
    pub rotation: f64,
    pub origin: Point,
    pub scale: Vec2,
    /// Layer depth, `0.0` front to `1.0` back.
    pub depth: f32,
}

impl DrawCommand {
    /// Draw all of `surface` into `dest`, untinted.
    pub fn new(surface: SurfaceId, dest: Rect) -> Self {
        Self {
            surface,
            dest,
            source: None,
            tint: Color::WHITE,
            rotation: 0.0,
            origin: Point::ZERO,
            scale: Vec2::new(1.0, 1.0),
            depth: 0.0,
        }
    }

    pub fn with_source(mut self, source: Rect) -> Self {
        self.source = Some(source);
        self
    }

    pub fn with_tint(mut self, tint: Color) -> Self {
        self.tint = tint;
        self
    }

    pub fn with_rotation(mut self, radians: f64, origin: Point) -> Self {
        self.rotation = radians;
        self.origin = origin;
        self
    }

    pub fn with_scale(mut self, scale: Vec2) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_depth(mut self, depth: f32) -> Self {
        self.depth = depth;
        self
    }
}

// ---------------------------------------------------------------------------
// GraphicsBackend
// ---------------------------------------------------------------------------

/// The device side of rendering.
///
/// Draws between `begin_batch` and `end_batch` may be deferred by the backend;
/// state read at `end_batch` (the scissor) applies to the whole batch.
pub trait GraphicsBackend {
    /// Start a batch whose draws are mapped through `transform`.
    fn begin_batch(&mut self, transform: Option<Affine>);

    /// Submit everything drawn since `begin_batch`.
    fn end_batch(&mut self);

    fn draw(&mut self, command: &DrawCommand);

    /// Device clip rectangle, in device coordinates.
    fn scissor(&self) -> Rect;

    fn set_scissor(&mut self, rect: Rect);

    /// Device viewport; its origin offsets the scissor.
    fn viewport(&self) -> Rect;

    fn set_viewport(&mut self, rect: Rect);
}

// ---------------------------------------------------------------------------
// RecordingBackend
// ---------------------------------------------------------------------------

/// A submitted batch.
#[derive(Debug, Clone, PartialEq)]
pub struct Batch {
    pub transform: Option<Affine>,
    /// Device scissor in effect when the batch was submitted.
    pub scissor: Rect,
    pub draws: Vec<DrawCommand>,
}

/// Backend that records batches instead of rasterizing.
#[derive(Debug, Clone)]
pub struct RecordingBackend {
    viewport: Rect,
    scissor: Rect,
    open: Option<Batch>,
    batches: Vec<Batch>,
}

impl RecordingBackend {
    /// A backend whose viewport and initial scissor are `viewport`.
    pub fn new(viewport: Rect) -> Self {
        Self {
            viewport,
            scissor: viewport,
            open: None,
            batches: Vec::new(),
        }
    }

    /// Batches submitted so far, oldest first.
    pub fn batches(&self) -> &[Batch] {
        &self.batches
    }

    /// Submitted batches that contain at least one draw.
    pub fn non_empty_batches(&self) -> impl Iterator<Item = &Batch> {
        self.batches.iter().filter(|b| !b.draws.is_empty())
    }

    /// All submitted draws, in submission order.
    pub fn draws(&self) -> impl Iterator<Item = &DrawCommand> {
        self.batches.iter().flat_map(|b| b.draws.iter())
    }

    /// Whether a batch is open.
    pub fn is_batching(&self) -> bool {
        self.open.is_some()
    }

    /// Forget everything recorded.
    pub fn clear(&mut self) {
        self.batches.clear();
    }
}

impl GraphicsBackend for RecordingBackend {
    fn begin_batch(&mut self, transform: Option<Affine>) {
        self.open = Some(Batch {
            transform,
            scissor: self.scissor,
            draws: Vec::new(),
        });
    }

    fn end_batch(&mut self) {
        if let Some(mut batch) = self.open.take() {
            batch.scissor = self.scissor;
            self.batches.push(batch);
        }
    }

    fn draw(&mut self, command: &DrawCommand) {
        match self.open.as_mut() {
            Some(batch) => batch.draws.push(*command),
            None => log::warn!("draw outside of a batch dropped"),
        }
    }

    fn scissor(&self) -> Rect {
        self.scissor
    }

    fn set_scissor(&mut self, rect: Rect) {
        self.scissor = rect;
    }

    fn viewport(&self) -> Rect {
        self.viewport
    }

    fn set_viewport(&mut self, rect: Rect) {
        self.viewport = rect;
    }
}
