//! # S3C24xx UART Control Registers
//!
//! Register block layout (offsets from the per-port base, ports are
//! `0x4000` apart starting at `0x5000_0000`):
//!
//! ```text
//! 0x00 ULCON    line control          0x14 UERSTAT  error status
//! 0x04 UCON     control               0x18 UFSTAT   FIFO status
//! 0x08 UFCON    FIFO control          0x1C UMSTAT   modem status
//! 0x0C UMCON    modem control         0x20 UTXH     transmit buffer (LE)
//! 0x10 UTRSTAT  Tx/Rx status          0x24 URXH     receive buffer (LE)
//!                                     0x28 UBRDIV   baud rate divisor
//! ```

use bitfield_struct::bitfield;

/// Offset of the little-endian transmit holding register.
pub const UTXH: usize = 0x20;

/// Offset of the baud rate divisor register.
pub const UBRDIV: usize = 0x28;

/// Receive / transmit mode select (`UCON[1:0]`, `UCON[3:2]`).
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
#[repr(u8)]
pub enum TransferMode {
    Disabled = 0,
    /// Interrupt request or polling mode.
    IrqOrPolling = 1,
    Dma0 = 2,
    Dma1 = 3,
}

impl TransferMode {
    #[inline]
    pub const fn into_bits(self) -> u8 {
        self as u8
    }

    #[inline]
    pub const fn from_bits(v: u8) -> Self {
        match v & 0b11 {
            0 => Self::Disabled,
            1 => Self::IrqOrPolling,
            2 => Self::Dma0,
            _ => Self::Dma1,
        }
    }
}

/// Interrupt request signalling (`UCON[8]`, `UCON[9]`).
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
#[repr(u8)]
pub enum IrqType {
    Pulse = 0,
    Level = 1,
}

impl IrqType {
    #[inline]
    pub const fn into_bits(self) -> u8 {
        self as u8
    }

    #[inline]
    pub const fn from_bits(v: u8) -> Self {
        match v & 1 {
            0 => Self::Pulse,
            _ => Self::Level,
        }
    }
}

/// Baud clock source (`UCON[11:10]`).
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
#[repr(u8)]
pub enum ClockSelect {
    Pclk = 0,
    Uextclk = 1,
    /// Also PCLK; the second encoding exists for S3C2410 compatibility.
    Pclk2 = 2,
    FclkDivided = 3,
}

impl ClockSelect {
    #[inline]
    pub const fn into_bits(self) -> u8 {
        self as u8
    }

    #[inline]
    pub const fn from_bits(v: u8) -> Self {
        match v & 0b11 {
            0 => Self::Pclk,
            1 => Self::Uextclk,
            2 => Self::Pclk2,
            _ => Self::FclkDivided,
        }
    }
}

/// `UCON`: UART control register.
///
/// The board tables use `0x3c5`: both directions in interrupt/polling mode,
/// Rx error and Rx timeout interrupts enabled, level-triggered requests,
/// PCLK as the baud clock.
///
/// ```rust
/// # use kernel_registers::uart::*;
/// assert_eq!(Ucon::s3c2440_default().into_bits(), 0x3c5);
/// ```
#[bitfield(u32)]
#[derive(PartialEq, Eq)]
pub struct Ucon {
    /// Bits 0-1: Receive mode.
    #[bits(2)]
    pub rx_mode: TransferMode,

    /// Bits 2-3: Transmit mode.
    #[bits(2)]
    pub tx_mode: TransferMode,

    /// Bit 4: Send a break during the next transmission.
    pub send_break: bool,

    /// Bit 5: Loopback mode (test only).
    pub loopback: bool,

    /// Bit 6: Raise an interrupt on receive errors.
    pub rx_error_irq: bool,

    /// Bit 7: Raise an interrupt when the Rx FIFO times out.
    pub rx_timeout: bool,

    /// Bit 8: Rx interrupt request type.
    #[bits(1)]
    pub rx_irq_type: IrqType,

    /// Bit 9: Tx interrupt request type.
    #[bits(1)]
    pub tx_irq_type: IrqType,

    /// Bits 10-11: Baud clock source.
    #[bits(2)]
    pub clock_select: ClockSelect,

    /// Bits 12-15: FCLK divider when `clock_select == FclkDivided`.
    #[bits(4)]
    pub fclk_divider: u8,

    /// Bits 16-31: Reserved (must be 0).
    #[bits(16, default = 0)]
    _reserved_16_31: u16,
}

impl Ucon {
    /// The control value shared by all EmbedSky 2440 ports.
    #[must_use]
    pub const fn s3c2440_default() -> Self {
        Self::new()
            .with_rx_mode(TransferMode::IrqOrPolling)
            .with_tx_mode(TransferMode::IrqOrPolling)
            .with_rx_error_irq(true)
            .with_rx_timeout(true)
            .with_rx_irq_type(IrqType::Level)
            .with_tx_irq_type(IrqType::Level)
            .with_clock_select(ClockSelect::Pclk)
    }
}

mmio_register!(Ucon, 0x04);

/// Data bits per frame (`ULCON[1:0]`).
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
#[repr(u8)]
pub enum WordLength {
    Bits5 = 0,
    Bits6 = 1,
    Bits7 = 2,
    Bits8 = 3,
}

impl WordLength {
    #[inline]
    pub const fn into_bits(self) -> u8 {
        self as u8
    }

    #[inline]
    pub const fn from_bits(v: u8) -> Self {
        match v & 0b11 {
            0 => Self::Bits5,
            1 => Self::Bits6,
            2 => Self::Bits7,
            _ => Self::Bits8,
        }
    }
}

/// Parity mode (`ULCON[5:3]`).
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
#[repr(u8)]
pub enum Parity {
    None = 0b000,
    Odd = 0b100,
    Even = 0b101,
    ForcedOne = 0b110,
    ForcedZero = 0b111,
}

impl Parity {
    #[inline]
    pub const fn into_bits(self) -> u8 {
        self as u8
    }

    #[inline]
    pub const fn from_bits(v: u8) -> Self {
        match v & 0b111 {
            0b100 => Self::Odd,
            0b101 => Self::Even,
            0b110 => Self::ForcedOne,
            0b111 => Self::ForcedZero,
            _ => Self::None,
        }
    }
}

/// `ULCON`: UART line control register.
///
/// ```rust
/// # use kernel_registers::uart::*;
/// assert_eq!(Ulcon::cs8_pnone_1stop().into_bits(), 0x03);
/// assert_eq!(Ulcon::cs8_pnone_1stop().with_infrared(true).into_bits(), 0x43);
/// ```
#[bitfield(u32)]
#[derive(PartialEq, Eq)]
pub struct Ulcon {
    /// Bits 0-1: Word length.
    #[bits(2)]
    pub word_length: WordLength,

    /// Bit 2: Two stop bits instead of one.
    pub two_stop_bits: bool,

    /// Bits 3-5: Parity mode.
    #[bits(3)]
    pub parity: Parity,

    /// Bit 6: Infrared (IrDA 1.0) mode.
    pub infrared: bool,

    /// Bits 7-31: Reserved (must be 0).
    #[bits(25, default = 0)]
    _reserved_7_31: u32,
}

impl Ulcon {
    /// 8 data bits, no parity, one stop bit.
    #[must_use]
    pub const fn cs8_pnone_1stop() -> Self {
        Self::new()
            .with_word_length(WordLength::Bits8)
            .with_parity(Parity::None)
            .with_two_stop_bits(false)
    }
}

mmio_register!(Ulcon, 0x00);

/// `UFCON`: UART FIFO control register.
///
/// Trigger levels are encoded in 2-bit steps; on the S3C2440 the Rx levels
/// are 1/8/16/32 bytes and the Tx levels empty/16/32/48 bytes.
///
/// ```rust
/// # use kernel_registers::uart::*;
/// assert_eq!(Ufcon::rx8_tx16().into_bits(), 0x51);
/// ```
#[bitfield(u32)]
#[derive(PartialEq, Eq)]
pub struct Ufcon {
    /// Bit 0: FIFO enable.
    pub fifo_enable: bool,

    /// Bit 1: Rx FIFO reset (auto-clears).
    pub rx_fifo_reset: bool,

    /// Bit 2: Tx FIFO reset (auto-clears).
    pub tx_fifo_reset: bool,

    /// Bit 3: Reserved.
    #[bits(default = false)]
    _reserved_3: bool,

    /// Bits 4-5: Rx FIFO trigger level.
    #[bits(2)]
    pub rx_trigger: u8,

    /// Bits 6-7: Tx FIFO trigger level.
    #[bits(2)]
    pub tx_trigger: u8,

    /// Bits 8-31: Reserved (must be 0).
    #[bits(24, default = 0)]
    _reserved_8_31: u32,
}

impl Ufcon {
    /// FIFOs on, interrupt at 8 received bytes and at 16 bytes to send.
    #[must_use]
    pub const fn rx8_tx16() -> Self {
        Self::new()
            .with_fifo_enable(true)
            .with_rx_trigger(1)
            .with_tx_trigger(1)
    }

    /// Rx trigger level in bytes (S3C2440 encoding).
    #[must_use]
    pub const fn rx_trigger_bytes(&self) -> u32 {
        match self.rx_trigger() {
            0 => 1,
            1 => 8,
            2 => 16,
            _ => 32,
        }
    }

    /// Tx trigger level in bytes (S3C2440 encoding); 0 means "empty".
    #[must_use]
    pub const fn tx_trigger_bytes(&self) -> u32 {
        match self.tx_trigger() {
            0 => 0,
            1 => 16,
            2 => 32,
            _ => 48,
        }
    }
}

mmio_register!(Ufcon, 0x08);

/// `UTRSTAT`: Tx/Rx status register (read only).
#[bitfield(u32)]
pub struct Utrstat {
    /// Bit 0: Receive buffer holds data.
    pub rx_ready: bool,

    /// Bit 1: Transmit buffer empty.
    pub tx_buffer_empty: bool,

    /// Bit 2: Transmit buffer and shifter both empty.
    pub tx_empty: bool,

    #[bits(29, default = 0)]
    _reserved_3_31: u32,
}

mmio_register!(Utrstat, 0x10);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ucon_decodes_table_value() {
        let ucon = Ucon::from_bits(0x3c5);
        assert_eq!(ucon.rx_mode(), TransferMode::IrqOrPolling);
        assert_eq!(ucon.tx_mode(), TransferMode::IrqOrPolling);
        assert!(ucon.rx_error_irq());
        assert!(ucon.rx_timeout());
        assert!(!ucon.loopback());
        assert_eq!(ucon.clock_select(), ClockSelect::Pclk);
        assert_eq!(ucon, Ucon::s3c2440_default());
    }

    #[test]
    fn ulcon_infrared_only_differs_in_bit_6() {
        let plain = Ulcon::cs8_pnone_1stop();
        let ir = plain.with_infrared(true);
        assert_eq!(plain.into_bits() ^ ir.into_bits(), 1 << 6);
        assert_eq!(Ulcon::from_bits(0x43).word_length(), WordLength::Bits8);
        assert_eq!(Ulcon::from_bits(0x43).parity(), Parity::None);
    }

    #[test]
    fn parity_encodings() {
        let even = Ulcon::cs8_pnone_1stop().with_parity(Parity::Even);
        assert_eq!(even.into_bits(), 0x2B);
        assert_eq!(Ulcon::from_bits(0x2B).parity(), Parity::Even);
    }

    #[test]
    fn ufcon_trigger_levels() {
        let ufcon = Ufcon::from_bits(0x51);
        assert!(ufcon.fifo_enable());
        assert!(!ufcon.rx_fifo_reset());
        assert_eq!(ufcon.rx_trigger_bytes(), 8);
        assert_eq!(ufcon.tx_trigger_bytes(), 16);
    }

    #[test]
    fn register_offsets() {
        assert_eq!(<Ulcon as crate::MmioRegister>::OFFSET, 0x00);
        assert_eq!(<Ucon as crate::MmioRegister>::OFFSET, 0x04);
        assert_eq!(<Ufcon as crate::MmioRegister>::OFFSET, 0x08);
        assert_eq!(<Utrstat as crate::MmioRegister>::OFFSET, 0x10);
    }
}
