//! Traffic light color slots

/// Number of color slots in the cycle
pub(crate) const SLOT_COUNT: usize = 3;

/// One of the three color roles of the traffic light.
///
/// Slots are ordered top to bottom and are cycled in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorSlot {
    #[default]
    Red = 0,
    Yellow = 1,
    Green = 2,
}

impl ColorSlot {
    /// All slots in cycle order
    pub const ALL: [Self; SLOT_COUNT] = [Self::Red, Self::Yellow, Self::Green];

    /// Ordinal of the slot, usable as an array index
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Next slot in the cycle, wrapping from green back to red
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Red => Self::Yellow,
            Self::Yellow => Self::Green,
            Self::Green => Self::Red,
        }
    }
}
