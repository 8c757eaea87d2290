//! Texture regions, fonts, and a host-side registry for resolving them by name.
//!
//! The loader itself never touches files or the GPU: it asks the host for a
//! [`TextureRegion`] or [`Font`] by name through lookup callbacks. A
//! [`ResourceSet`] is the ready-made host registry; its lookups accept plain
//! region names (searched across every atlas) and `atlasName#regionName` tokens.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use crate::geometry::Rect;
use crate::render::backend::SurfaceId;
use crate::style::error::{ResourceKind, StyleError};

// ---------------------------------------------------------------------------
// TextureRegion / Font
// ---------------------------------------------------------------------------

/// A rectangular region of a drawable surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureRegion {
    /// The surface (texture) the region lives on.
    pub surface: SurfaceId,
    /// Source rectangle in surface pixels.
    pub bounds: Rect,
}

impl TextureRegion {
    /// Create a region covering `bounds` of `surface`.
    pub const fn new(surface: SurfaceId, bounds: Rect) -> Self {
        Self { surface, bounds }
    }
}

/// An opaque bitmap font handle.
///
/// Glyph rasterization belongs to the graphics backend; styles only carry the
/// handle and the metrics widgets need for measuring.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Font {
    pub name: String,
    pub line_height: i32,
}

impl Font {
    /// Create a font handle.
    pub fn new(name: impl Into<String>, line_height: i32) -> Self {
        Self {
            name: name.into(),
            line_height,
        }
    }
}

// ---------------------------------------------------------------------------
// TextureAtlas
// ---------------------------------------------------------------------------

/// Named regions packed on a single surface.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextureAtlas {
    surface: SurfaceId,
    regions: HashMap<String, Rect>,
}

impl TextureAtlas {
    /// Create an empty atlas on `surface`.
    pub fn new(surface: SurfaceId) -> Self {
        Self {
            surface,
            regions: HashMap::new(),
        }
    }

    /// Add a named region (builder).
    pub fn with_region(mut self, name: impl Into<String>, bounds: Rect) -> Self {
        self.regions.insert(name.into(), bounds);
        self
    }

    /// Look up a region by name.
    pub fn get(&self, name: &str) -> Option<TextureRegion> {
        self.regions
            .get(name)
            .map(|&bounds| TextureRegion::new(self.surface, bounds))
    }

    /// Number of regions in the atlas.
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Whether the atlas has no regions.
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

// ---------------------------------------------------------------------------
// ResourceSet
// ---------------------------------------------------------------------------

/// Host-side registry of atlases and fonts.
#[derive(Debug, Clone, Default)]
pub struct ResourceSet {
    atlases: BTreeMap<String, TextureAtlas>,
    fonts: HashMap<String, Arc<Font>>,
}

impl ResourceSet {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an atlas under `name` (builder).
    pub fn with_atlas(mut self, name: impl Into<String>, atlas: TextureAtlas) -> Self {
        self.atlases.insert(name.into(), atlas);
        self
    }

    /// Register a font under `name` (builder).
    pub fn with_font(mut self, name: impl Into<String>, font: Font) -> Self {
        self.fonts.insert(name.into(), Arc::new(font));
        self
    }

    /// Resolve a texture region reference.
    ///
    /// `atlas#region` addresses one atlas directly; a bare name is searched in
    /// every atlas in name order and the first hit wins.
    pub fn region(&self, reference: &str) -> Result<TextureRegion, StyleError> {
        let found = match reference.split_once('#') {
            Some((atlas, region)) => self.atlases.get(atlas).and_then(|a| a.get(region)),
            None => self.atlases.values().find_map(|a| a.get(reference)),
        };
        found.ok_or_else(|| StyleError::not_found(ResourceKind::Texture, reference))
    }

    /// Resolve a font by name.
    pub fn font(&self, name: &str) -> Result<Arc<Font>, StyleError> {
        self.fonts
            .get(name)
            .cloned()
            .ok_or_else(|| StyleError::not_found(ResourceKind::Font, name))
    }
}
