//! Host-facing traffic light plugin
//!
//! The host sets the plugin up once, ticks it repeatedly and tears it down
//! at the end. All state lives in [`TrafficLightPlugin`]; the host owns the
//! value between calls.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::{Palette, Rgb};
use crate::driver::{CycleDriver, FrameBufferTooSmall, PanelFrame, TickResult};
use crate::layout::{FrameSlice, Layout, panel_count};
use crate::options::{OptionSource, PluginConfig};
use crate::selector::{Selection, select_panels};

/// Error returned when the plugin can't be set up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupError {
    /// No panel could be selected from the slices
    NoPanels,
}

/// Traffic light plugin state
pub struct TrafficLightPlugin<'a> {
    // Borrowed from the host until teardown
    slices: &'a [FrameSlice],

    selection: Selection,
    driver: CycleDriver,
}

impl<'a> TrafficLightPlugin<'a> {
    /// Set up the plugin.
    ///
    /// Selects the traffic light panels, applies user colors and reads the
    /// transition time from the host options.
    pub fn setup(
        layout: &Layout<'_>,
        slices: &'a [FrameSlice],
        user_colors: &[Rgb],
        options: &impl OptionSource,
    ) -> Result<Self, SetupError> {
        let config = PluginConfig::from_options(options);
        Self::with_config(layout, slices, user_colors, &config)
    }

    /// Set up the plugin with an already resolved configuration
    pub fn with_config(
        layout: &Layout<'_>,
        slices: &'a [FrameSlice],
        user_colors: &[Rgb],
        config: &PluginConfig,
    ) -> Result<Self, SetupError> {
        let palette = Palette::from_user_colors(user_colors);
        let selection =
            select_panels(layout, slices, palette).ok_or(SetupError::NoPanels)?;

        #[cfg(feature = "esp32-log")]
        println!(
            "[TrafficLightPlugin.setup] {} panels, transition time {:?}",
            panel_count(slices),
            config.transition_time
        );

        Ok(Self {
            slices,
            selection,
            driver: CycleDriver::new(config.transition_time),
        })
    }

    /// Render the next frame into `frames`
    pub fn tick(
        &mut self,
        frames: &mut [PanelFrame],
    ) -> Result<TickResult, FrameBufferTooSmall> {
        self.driver.tick(self.slices, &self.selection, frames)
    }

    /// Release the slices borrowed at setup
    pub fn teardown(self) -> &'a [FrameSlice] {
        self.slices
    }

    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    pub const fn driver(&self) -> &CycleDriver {
        &self.driver
    }

    /// Minimum frame buffer length accepted by [`Self::tick`]
    pub fn frame_count(&self) -> usize {
        panel_count(self.slices)
    }
}
