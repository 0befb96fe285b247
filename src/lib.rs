#![no_std]

pub mod color;
pub mod driver;
pub mod layout;
pub mod options;
pub mod plugin;
pub mod selector;

pub use driver::{CycleDriver, FrameBufferTooSmall, PanelFrame, TickResult};
pub use layout::{FrameSlice, Layout, Orientation, Panel, PanelId, Point, Shape, Triangle};
pub use options::{OptionError, OptionSource, PluginConfig};
pub use plugin::{SetupError, TrafficLightPlugin};
pub use selector::{Selection, SlotTarget, select_panels};

pub use color::{ColorSlot, Palette, Rgb};
pub use embassy_time::Duration;
