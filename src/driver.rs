//! Traffic light cycle driver
//!
//! Renders one frame per tick: every panel dark except the one bound to the
//! active slot, then moves on to the next slot that has a panel.

use embassy_time::Duration;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::{BLACK, ColorSlot, Rgb};
use crate::layout::{FrameSlice, PanelId, panel_count, panel_ids};
use crate::selector::Selection;

/// Transition time of every written frame, in host ticks
pub const FRAME_TRANSITION_TICKS: u16 = 1;

/// Base transition time used when the host provides none
pub const DEFAULT_TRANSITION_TIME: Duration = Duration::from_millis(50);

/// Color of one panel for the current tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PanelFrame {
    pub panel_id: PanelId,
    pub color: Rgb,
    /// Transition time in host ticks
    pub transition_ticks: u16,
}

/// Outcome of a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickResult {
    /// Number of frames written to the buffer
    pub frame_count: usize,
    /// Requested delay before the next tick
    pub sleep_duration: Duration,
}

/// Error returned when the frame buffer can't hold every panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameBufferTooSmall {
    pub required: usize,
    pub provided: usize,
}

/// Cycles the traffic light colors across the selected panels
#[derive(Debug, Clone)]
pub struct CycleDriver {
    /// Base dwell time of red and green
    transition_time: Duration,
    /// Slot rendered on the next tick
    current: ColorSlot,
}

impl Default for CycleDriver {
    fn default() -> Self {
        Self::new(DEFAULT_TRANSITION_TIME)
    }
}

impl CycleDriver {
    /// Create a driver starting at the red slot
    pub const fn new(transition_time: Duration) -> Self {
        Self {
            transition_time,
            current: ColorSlot::Red,
        }
    }

    /// Slot rendered on the next tick
    pub const fn current(&self) -> ColorSlot {
        self.current
    }

    pub const fn transition_time(&self) -> Duration {
        self.transition_time
    }

    /// Time the slot stays lit.
    ///
    /// Yellow is a short flash of 40% of the base time, red and green hold
    /// for the full base time.
    pub const fn dwell_time(&self, slot: ColorSlot) -> Duration {
        match slot {
            ColorSlot::Red | ColorSlot::Green => self.transition_time,
            ColorSlot::Yellow => {
                Duration::from_millis(self.transition_time.as_millis() * 2 / 5)
            }
        }
    }

    /// Render one tick into `frames` and advance to the next slot.
    ///
    /// Writes exactly one frame per panel, in slice order, and nothing past
    /// that. If `frames` is too short, nothing is written and the cycle does
    /// not advance.
    pub fn tick(
        &mut self,
        slices: &[FrameSlice],
        selection: &Selection,
        frames: &mut [PanelFrame],
    ) -> Result<TickResult, FrameBufferTooSmall> {
        let required = panel_count(slices);
        if frames.len() < required {
            #[cfg(feature = "esp32-log")]
            println!(
                "[CycleDriver.tick] frame buffer too small: {} < {}",
                frames.len(),
                required
            );
            return Err(FrameBufferTooSmall {
                required,
                provided: frames.len(),
            });
        }

        let frames = &mut frames[..required];
        let slot = self.current;
        let target = selection.target(slot).panel_id();
        // Ignored slots are never active, the default is never used
        let mut active_index = 0;

        let entries = frames.iter_mut().zip(panel_ids(slices));
        for (index, (frame, panel_id)) in entries.enumerate() {
            *frame = PanelFrame {
                panel_id,
                color: BLACK,
                transition_ticks: FRAME_TRANSITION_TICKS,
            };
            if target == Some(panel_id) {
                active_index = index;
            }
        }

        if let Some(frame) = frames.get_mut(active_index) {
            frame.color = selection.color(slot);
            frame.transition_ticks = FRAME_TRANSITION_TICKS;
        }

        self.current = selection.next_active(slot);

        Ok(TickResult {
            frame_count: required,
            sleep_duration: self.dwell_time(slot),
        })
    }
}
