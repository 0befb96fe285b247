//! Panel selection
//!
//! Picks up to three panels of one vertical slice, as close to the
//! horizontal middle of the display as possible, and binds them to the
//! traffic light slots top to bottom.

use heapless::Vec;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::{ColorSlot, Palette, Rgb};
use crate::layout::{FrameSlice, Layout, MAX_SLICE_PANELS, PanelId};

/// Number of panels needed to show every color on its own panel
pub const MINIMUM_PANELS_COUNT: usize = 3;

/// Initial distance for the closest-to-middle search.
///
/// Qualifying slices farther than this from the middle slice are never
/// picked, and the selection falls back to the middle slice itself.
pub const MIDDLE_DISTANCE_SENTINEL: usize = 31;

/// Panel bound to a color slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotTarget {
    /// The slot lights this panel
    Panel(PanelId),
    /// The slot is skipped by the cycle
    Ignored,
}

impl SlotTarget {
    pub const fn panel_id(self) -> Option<PanelId> {
        match self {
            Self::Panel(id) => Some(id),
            Self::Ignored => None,
        }
    }

    pub const fn is_ignored(self) -> bool {
        matches!(self, Self::Ignored)
    }
}

/// Panels and colors chosen for the traffic light
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    targets: [SlotTarget; 3],
    palette: Palette,
}

impl Selection {
    /// Panel bound to the slot
    pub const fn target(&self, slot: ColorSlot) -> SlotTarget {
        self.targets[slot.index()]
    }

    /// Color bound to the slot
    pub const fn color(&self, slot: ColorSlot) -> Rgb {
        self.palette.color(slot)
    }

    /// First slot after `slot` that is bound to a real panel
    pub fn next_active(&self, slot: ColorSlot) -> ColorSlot {
        let mut next = slot.next();
        // Red always holds a panel
        while self.target(next).is_ignored() {
            next = next.next();
        }
        next
    }

    /// Bind slots to panels sorted top to bottom.
    ///
    /// - three or more panels: one slot per panel
    /// - two panels: red on top, green at the bottom, yellow ignored
    /// - one panel: every slot on that panel
    ///
    /// Returns `None` if `sorted` is empty.
    fn from_sorted(sorted: &[PanelId], palette: Palette) -> Option<Self> {
        let targets = match *sorted {
            [] => return None,
            [single] => [SlotTarget::Panel(single); 3],
            [top, bottom] => [
                SlotTarget::Panel(top),
                SlotTarget::Ignored,
                SlotTarget::Panel(bottom),
            ],
            [top, middle, bottom, ..] => [
                SlotTarget::Panel(top),
                SlotTarget::Panel(middle),
                SlotTarget::Panel(bottom),
            ],
        };
        Some(Self { targets, palette })
    }
}

/// Index of the slice closest to the horizontal center: `ceil((n - 1) / 2)`
pub const fn middle_slice_index(slices_count: usize) -> usize {
    slices_count.saturating_sub(1).div_ceil(2)
}

/// Index of the slice the traffic light is placed on.
///
/// Prefers the slice with at least three panels closest to the middle,
/// the lower index winning a tie. Falls back to the middle slice.
pub fn target_slice_index(slices: &[FrameSlice]) -> usize {
    let middle = middle_slice_index(slices.len());
    let mut min_distance = MIDDLE_DISTANCE_SENTINEL;
    let mut closest = None;

    for (index, slice) in slices.iter().enumerate() {
        let distance = middle.abs_diff(index);
        if slice.len() >= MINIMUM_PANELS_COUNT && distance < min_distance {
            min_distance = distance;
            closest = Some(index);
        }
    }

    closest.unwrap_or(middle)
}

/// Choose the traffic light panels.
///
/// `slices` must hold at least one non-empty slice and every id must be
/// present in `layout`. Returns `None` when the chosen slice is missing or
/// empty.
pub fn select_panels(
    layout: &Layout<'_>,
    slices: &[FrameSlice],
    palette: Palette,
) -> Option<Selection> {
    let slice_index = target_slice_index(slices);
    let slice = slices.get(slice_index)?;

    let mut sorted: Vec<PanelId, MAX_SLICE_PANELS> =
        Vec::from_slice(slice.panel_ids()).ok()?;
    // Unknown panels sink to the bottom
    let y = |id: PanelId| layout.centroid_y(id).unwrap_or(f32::NEG_INFINITY);
    sorted.sort_unstable_by(|a, b| y(*b).total_cmp(&y(*a)));

    let selection = Selection::from_sorted(&sorted, palette)?;

    #[cfg(feature = "esp32-log")]
    println!(
        "[select_panels] slice {} of {}: red={:?} yellow={:?} green={:?}",
        slice_index,
        slices.len(),
        selection.target(ColorSlot::Red),
        selection.target(ColorSlot::Yellow),
        selection.target(ColorSlot::Green),
    );

    Some(selection)
}
