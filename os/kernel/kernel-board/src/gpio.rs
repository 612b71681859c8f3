//! GPIO pin naming and the configurations board code asks for.

use core::fmt;

/// S3C24xx GPIO port. The 2440 has no port I.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum GpioBank {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    J,
}

impl GpioBank {
    /// Number of pins the port implements.
    #[must_use]
    pub const fn pins(self) -> u8 {
        match self {
            Self::A => 25,
            Self::B => 11,
            Self::C | Self::D | Self::E | Self::G => 16,
            Self::F => 8,
            Self::H => 11,
            Self::J => 13,
        }
    }

    const fn letter(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
            Self::E => 'E',
            Self::F => 'F',
            Self::G => 'G',
            Self::H => 'H',
            Self::J => 'J',
        }
    }
}

/// A single GPIO line, e.g. `GPF4`.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct GpioPin {
    pub bank: GpioBank,
    pub index: u8,
}

impl GpioPin {
    #[must_use]
    pub const fn new(bank: GpioBank, index: u8) -> Self {
        Self { bank, index }
    }

    /// `true` if the port actually has this pin.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.index < self.bank.pins()
    }
}

impl fmt::Debug for GpioPin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for GpioPin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GP{}{}", self.bank.letter(), self.index)
    }
}

/// Pin direction/function request.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum GpioConfig {
    Input,
    Output { high: bool },
    /// Alternate function number as written to the port's `CON` register.
    Function(u8),
}
