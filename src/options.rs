//! Host options
//!
//! The plugin exposes a single integer option, the base transition time.
//! The host reads its value from the user settings and serves it back
//! through [`OptionSource`].

use embassy_time::Duration;

use crate::driver::DEFAULT_TRANSITION_TIME;

const OPTION_ERROR_NO_SUCH_OPTION: i32 = -10;
const OPTION_ERROR_WRONG_OPTION_TYPE: i32 = -11;

/// Name of the base transition time option
pub const TRANS_TIME_OPTION_NAME: &str = "transTime";

/// Options descriptor as published to the host
pub const PLUGIN_OPTIONS_JSON: &str = r#"{"options": [{"defaultValue": 15, "minValue": 1, "type": "int", "name": "transTime", "maxValue": 600}]}"#;

/// Integer option as shown in the host UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntOption {
    pub name: &'static str,
    pub default_value: i32,
    pub min_value: i32,
    pub max_value: i32,
}

impl IntOption {
    /// Clamp a value into the option range
    pub const fn clamp(&self, value: i32) -> i32 {
        if value < self.min_value {
            self.min_value
        } else if value > self.max_value {
            self.max_value
        } else {
            value
        }
    }
}

/// Base transition time in milliseconds
pub const TRANS_TIME_OPTION: IntOption = IntOption {
    name: TRANS_TIME_OPTION_NAME,
    default_value: 15,
    min_value: 1,
    max_value: 600,
};

/// Error returned by the host option lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionError {
    /// The host has no option with this name
    NoSuchOption,
    /// The option exists with another type
    WrongOptionType,
}

impl OptionError {
    /// Host status code of the error
    pub const fn code(self) -> i32 {
        match self {
            Self::NoSuchOption => OPTION_ERROR_NO_SUCH_OPTION,
            Self::WrongOptionType => OPTION_ERROR_WRONG_OPTION_TYPE,
        }
    }

    pub const fn from_code(code: i32) -> Option<Self> {
        Some(match code {
            OPTION_ERROR_NO_SUCH_OPTION => Self::NoSuchOption,
            OPTION_ERROR_WRONG_OPTION_TYPE => Self::WrongOptionType,
            _ => return None,
        })
    }
}

/// Source of option values, implemented by the host
pub trait OptionSource {
    /// Read an integer option
    fn int_option(&self, name: &str) -> Result<i32, OptionError>;
}

/// Host without any stored options
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOptions;

impl OptionSource for NoOptions {
    fn int_option(&self, _name: &str) -> Result<i32, OptionError> {
        Err(OptionError::NoSuchOption)
    }
}

/// Plugin configuration resolved from host options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PluginConfig {
    /// Base dwell time of the red and green slots
    pub transition_time: Duration,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            transition_time: DEFAULT_TRANSITION_TIME,
        }
    }
}

impl PluginConfig {
    /// Resolve the configuration.
    ///
    /// Falls back to the default transition time if the option can't be
    /// read, and clamps stored values into the option range.
    pub fn from_options(options: &impl OptionSource) -> Self {
        match options.int_option(TRANS_TIME_OPTION.name) {
            Ok(value) => Self {
                transition_time: Duration::from_millis(
                    TRANS_TIME_OPTION.clamp(value).unsigned_abs().into(),
                ),
            },
            Err(_) => Self::default(),
        }
    }
}
