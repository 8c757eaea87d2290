//! Batched render context.
//!
//! A [`RenderContext`] wraps a [`GraphicsBackend`] and owns the per-frame
//! drawing state: the optional affine transform, the clip rectangle, and an
//! opacity multiplier. Draws are only valid inside a `begin`/`end` session.
//!
//! Batches are submitted with the transform they were opened with and the
//! clip in effect when they close, so changing either while a session is open
//! flushes what was drawn so far first.

use kurbo::Affine;

use crate::geometry::{Point, Rect};
use crate::render::backend::{DrawCommand, GraphicsBackend, SurfaceId};
use crate::style::color::Color;

/// Errors from misusing a render session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("invalid render state: {0}")]
    InvalidState(&'static str),
}

fn invalid(message: &'static str) -> RenderError {
    log::warn!("render context misuse: {message}");
    RenderError::InvalidState(message)
}

// ---------------------------------------------------------------------------
// RenderContext
// ---------------------------------------------------------------------------

pub struct RenderContext<B: GraphicsBackend> {
    backend: B,
    open: bool,
    transform: Option<Affine>,
    inverse: Option<Affine>,
    opacity: f32,
    view: Rect,
    scissor_stack: Vec<Rect>,
    transform_stack: Vec<Option<Affine>>,
}

impl<B: GraphicsBackend> RenderContext<B> {
    /// Create a closed context over `backend`, with full opacity.
    pub fn new(backend: B) -> Self {
        let view = backend.viewport();
        Self {
            backend,
            open: false,
            transform: None,
            inverse: None,
            opacity: 1.0,
            view,
            scissor_stack: Vec::new(),
            transform_stack: Vec::new(),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Consume the context and return the backend.
    pub fn into_backend(self) -> B {
        self.backend
    }

    /// Whether a session is open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    // ── Session ──────────────────────────────────────────────────────

    /// Open a drawing session with the current transform.
    pub fn begin(&mut self) -> Result<(), RenderError> {
        if self.open {
            return Err(invalid("begin called while a session is open"));
        }
        self.backend.begin_batch(self.transform);
        self.open = true;
        Ok(())
    }

    /// Submit pending draws and close the session.
    pub fn end(&mut self) -> Result<(), RenderError> {
        if !self.open {
            return Err(invalid("end called without begin"));
        }
        self.backend.end_batch();
        self.open = false;
        Ok(())
    }

    /// Submit pending draws and reopen. Does nothing outside a session.
    pub fn flush(&mut self) {
        if self.open {
            self.backend.end_batch();
            self.backend.begin_batch(self.transform);
        }
    }

    // ── Drawing ──────────────────────────────────────────────────────

    /// Queue a draw. The context opacity scales the tint alpha.
    pub fn draw(&mut self, mut command: DrawCommand) -> Result<(), RenderError> {
        if !self.open {
            return Err(invalid("draw called outside a session"));
        }
        if self.opacity < 1.0 {
            command.tint = command.tint.with_opacity(self.opacity);
        }
        self.backend.draw(&command);
        Ok(())
    }

    /// Draw all of `surface` into `dest`.
    pub fn draw_rect(&mut self, surface: SurfaceId, dest: Rect, tint: Color) -> Result<(), RenderError> {
        self.draw(DrawCommand::new(surface, dest).with_tint(tint))
    }

    /// Draw `source` of `surface` into `dest`.
    pub fn draw_region(
        &mut self,
        surface: SurfaceId,
        dest: Rect,
        source: Rect,
        tint: Color,
    ) -> Result<(), RenderError> {
        self.draw(DrawCommand::new(surface, dest).with_source(source).with_tint(tint))
    }

    /// Draw `source` of `surface` unscaled with its top-left at `position`.
    pub fn draw_at(
        &mut self,
        surface: SurfaceId,
        position: Point,
        source: Rect,
        tint: Color,
    ) -> Result<(), RenderError> {
        let dest = Rect::new(position.x, position.y, source.width, source.height);
        self.draw_region(surface, dest, source, tint)
    }

    // ── Clipping ─────────────────────────────────────────────────────

    /// The clip rectangle, relative to the viewport.
    pub fn scissor(&self) -> Rect {
        let viewport = self.backend.viewport().origin();
        self.backend.scissor().translate(Point::ZERO - viewport)
    }

    /// Set the clip rectangle, given in local coordinates.
    ///
    /// The rectangle is mapped through the transform (bounding box of the
    /// mapped corners) before being applied.
    pub fn set_scissor(&mut self, rect: Rect) {
        let rect = self.to_device(rect);
        self.apply_scissor(rect);
    }

    /// Narrow the clip to `rect` (local coordinates) until the matching
    /// [`pop_scissor`](Self::pop_scissor).
    pub fn push_scissor(&mut self, rect: Rect) {
        let previous = self.scissor();
        self.scissor_stack.push(previous);
        let clip = self.to_device(rect).intersection(previous);
        self.apply_scissor(clip);
    }

    /// Restore the clip that was active before the last `push_scissor`.
    pub fn pop_scissor(&mut self) -> Result<(), RenderError> {
        let previous = self
            .scissor_stack
            .pop()
            .ok_or_else(|| invalid("pop_scissor without push_scissor"))?;
        self.apply_scissor(previous);
        Ok(())
    }

    fn to_device(&self, rect: Rect) -> Rect {
        match self.transform {
            Some(t) => Rect::from_kurbo(t.transform_rect_bbox(rect.to_kurbo())),
            None => rect,
        }
    }

    fn apply_scissor(&mut self, rect: Rect) {
        self.flush();
        let viewport = self.backend.viewport().origin();
        self.backend.set_scissor(rect.translate(viewport));
    }

    // ── Transform ────────────────────────────────────────────────────

    pub fn transform(&self) -> Option<Affine> {
        self.transform
    }

    /// Inverse of the transform, `None` when there is none or it is singular.
    pub fn inverse_transform(&self) -> Option<Affine> {
        self.inverse
    }

    /// Replace the transform. Setting the current value does nothing;
    /// otherwise pending draws are submitted under the old transform first.
    pub fn set_transform(&mut self, transform: Option<Affine>) {
        if transform == self.transform {
            return;
        }
        if self.open {
            self.backend.end_batch();
        }
        self.transform = transform;
        self.inverse = transform.filter(|t| t.determinant() != 0.0).map(|t| t.inverse());
        if self.open {
            self.backend.begin_batch(self.transform);
        }
    }

    /// Compose `transform` onto the current one until the matching
    /// [`pop_transform`](Self::pop_transform).
    pub fn push_transform(&mut self, transform: Affine) {
        self.transform_stack.push(self.transform);
        let combined = match self.transform {
            Some(current) => current * transform,
            None => transform,
        };
        self.set_transform(Some(combined));
    }

    pub fn pop_transform(&mut self) -> Result<(), RenderError> {
        let previous = self
            .transform_stack
            .pop()
            .ok_or_else(|| invalid("pop_transform without push_transform"))?;
        self.set_transform(previous);
        Ok(())
    }

    /// Map a device point back to local coordinates.
    ///
    /// Returns the point unchanged when there is no transform, and `None` when
    /// the transform is singular.
    pub fn to_local(&self, point: Point) -> Option<Point> {
        match (self.transform, self.inverse) {
            (None, _) => Some(point),
            (Some(_), Some(inverse)) => Some(Point::from_kurbo(inverse * point.to_kurbo())),
            (Some(_), None) => None,
        }
    }

    // ── Accessors ────────────────────────────────────────────────────

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn set_opacity(&mut self, opacity: f32) {
        self.opacity = opacity.clamp(0.0, 1.0);
    }

    /// The bounds of the widget currently being drawn, used for culling.
    pub fn view(&self) -> Rect {
        self.view
    }

    pub fn set_view(&mut self, view: Rect) {
        self.view = view;
    }
}

// ===========================================================================
// Tests
// ===========================================================================
