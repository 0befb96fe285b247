//! Panel layout as handed over by the host.
//!
//! Panel discovery, orientation normalization and slicing all happen on the
//! host side. This module only describes the result so the selector and the
//! driver can read it.

use heapless::Vec;

/// Maximum number of panels a single frame slice can hold
pub const MAX_SLICE_PANELS: usize = 32;

/// Panel identifier, unique within a layout
pub type PanelId = u16;

/// Point in layout coordinates.
///
/// Larger `y` values are visually higher.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Geometry of a panel
pub trait Shape {
    /// Geometric center of the shape
    fn centroid(&self) -> Point;
}

impl Shape for Point {
    fn centroid(&self) -> Point {
        *self
    }
}

/// Triangular panel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub vertices: [Point; 3],
}

impl Triangle {
    pub const fn new(a: Point, b: Point, c: Point) -> Self {
        Self {
            vertices: [a, b, c],
        }
    }
}

impl Shape for Triangle {
    fn centroid(&self) -> Point {
        let [a, b, c] = self.vertices;
        Point {
            x: (a.x + b.x + c.x) / 3.0,
            y: (a.y + b.y + c.y) / 3.0,
        }
    }
}

/// A single panel of the display
#[derive(Clone, Copy)]
pub struct Panel<'a> {
    pub id: PanelId,
    pub shape: &'a dyn Shape,
}

impl<'a> Panel<'a> {
    pub const fn new(id: PanelId, shape: &'a dyn Shape) -> Self {
        Self { id, shape }
    }
}

/// Global orientation of the layout in degrees
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Orientation(pub i16);

/// Panels of the display with their global orientation
#[derive(Clone, Copy)]
pub struct Layout<'a> {
    panels: &'a [Panel<'a>],
    orientation: Orientation,
}

impl<'a> Layout<'a> {
    pub const fn new(panels: &'a [Panel<'a>], orientation: Orientation) -> Self {
        Self {
            panels,
            orientation,
        }
    }

    pub const fn panels(&self) -> &'a [Panel<'a>] {
        self.panels
    }

    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Vertical centroid coordinate of the panel.
    ///
    /// Returns `None` if the layout has no panel with this id.
    pub fn centroid_y(&self, id: PanelId) -> Option<f32> {
        self.panels
            .iter()
            .find(|panel| panel.id == id)
            .map(|panel| panel.shape.centroid().y)
    }
}

/// Panels sharing one horizontal band of the display.
///
/// Slices are handed over ordered left to right.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameSlice {
    panel_ids: Vec<PanelId, MAX_SLICE_PANELS>,
}

impl FrameSlice {
    pub const fn new() -> Self {
        Self {
            panel_ids: Vec::new(),
        }
    }

    /// Create a slice from panel ids
    ///
    /// Returns the first id that did not fit if the slice is full
    pub fn from_ids(ids: &[PanelId]) -> Result<Self, PanelId> {
        let mut slice = Self::new();
        for id in ids {
            slice.push(*id)?;
        }
        Ok(slice)
    }

    /// Append a panel id
    ///
    /// Returns the id back if the slice is full
    pub fn push(&mut self, id: PanelId) -> Result<(), PanelId> {
        self.panel_ids.push(id)
    }

    pub fn panel_ids(&self) -> &[PanelId] {
        &self.panel_ids
    }

    pub fn len(&self) -> usize {
        self.panel_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panel_ids.is_empty()
    }
}

/// Total number of panels across all slices
pub fn panel_count(slices: &[FrameSlice]) -> usize {
    slices.iter().map(FrameSlice::len).sum()
}

/// All panel ids in slice order, then in-slice order
pub fn panel_ids(slices: &[FrameSlice]) -> impl Iterator<Item = PanelId> + '_ {
    slices
        .iter()
        .flat_map(|slice| slice.panel_ids().iter().copied())
}
