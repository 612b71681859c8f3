//! # S3C24xx LCD Controller Registers
//!
//! Only the registers whose values are supplied by board code are modelled:
//! the panel type field of `LCDCON1` and the polarity/format bits of
//! `LCDCON5`. The timing registers (`LCDCON2..4`) are derived by the
//! framebuffer driver from the display timing table.

use bitfield_struct::bitfield;

/// Display panel type (`LCDCON1[6:5]`, "PNRMODE").
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
#[repr(u8)]
pub enum PanelType {
    /// 4-bit dual scan STN.
    Dscan4 = 0,
    /// 4-bit single scan STN.
    Stn4 = 1,
    /// 8-bit single scan STN.
    Stn8 = 2,
    /// Active matrix TFT.
    Tft = 3,
}

impl PanelType {
    #[inline]
    pub const fn into_bits(self) -> u8 {
        self as u8
    }

    #[inline]
    pub const fn from_bits(v: u8) -> Self {
        match v & 0b11 {
            0 => Self::Dscan4,
            1 => Self::Stn4,
            2 => Self::Stn8,
            _ => Self::Tft,
        }
    }

    /// The value as it appears in `LCDCON1` with every other field zero,
    /// which is how the framebuffer driver expects the `type` field.
    #[must_use]
    pub const fn lcdcon1_bits(self) -> u32 {
        LcdCon1::new().with_panel_type(self).into_bits()
    }
}

/// `LCDCON1`: LCD control 1.
///
/// ```rust
/// # use kernel_registers::lcd::*;
/// assert_eq!(PanelType::Tft.lcdcon1_bits(), 0x60);
/// ```
#[bitfield(u32)]
#[derive(PartialEq, Eq)]
pub struct LcdCon1 {
    /// Bit 0: Video output and logic enable.
    pub envid: bool,

    /// Bits 1-4: Bits per pixel mode.
    #[bits(4)]
    pub bpp_mode: u8,

    /// Bits 5-6: Panel type.
    #[bits(2)]
    pub panel_type: PanelType,

    /// Bit 7: VM toggle rate select (STN only).
    pub mmode: bool,

    /// Bits 8-17: VCLK divider.
    #[bits(10)]
    pub clkval: u16,

    /// Bits 18-27: Line counter (read only).
    #[bits(10, access = RO)]
    pub linecnt: u16,

    /// Bits 28-31: Reserved (must be 0).
    #[bits(4, default = 0)]
    _reserved_28_31: u8,
}

mmio_register!(LcdCon1, 0x00);

/// `LCDCON5`: LCD control 5: pixel format, signal polarity and byte order.
///
/// ```rust
/// # use kernel_registers::lcd::*;
/// let con5 = LcdCon5::new()
///     .with_frm565(true)
///     .with_invvline(true)
///     .with_invvframe(true)
///     .with_pwren(true)
///     .with_hwswp(true);
/// assert_eq!(con5.into_bits(), 0xB09);
/// ```
#[bitfield(u32)]
#[derive(PartialEq, Eq)]
pub struct LcdCon5 {
    /// Bit 0: Half-word swap control.
    pub hwswp: bool,

    /// Bit 1: Byte swap control.
    pub bswp: bool,

    /// Bit 2: Enable LEND output signal.
    pub enlend: bool,

    /// Bit 3: Enable LCD_PWREN output signal.
    pub pwren: bool,

    /// Bit 4: Invert LEND polarity.
    pub invlend: bool,

    /// Bit 5: Invert PWREN polarity.
    pub invpwren: bool,

    /// Bit 6: Invert VDEN polarity.
    pub invvden: bool,

    /// Bit 7: Invert VD (video data) polarity.
    pub invvd: bool,

    /// Bit 8: Invert VFRAME/VSYNC polarity.
    pub invvframe: bool,

    /// Bit 9: Invert VLINE/HSYNC polarity.
    pub invvline: bool,

    /// Bit 10: Fetch video data on the VCLK rising edge.
    pub invvclk: bool,

    /// Bit 11: 16bpp output format is 5:6:5 (else 5:5:5:1).
    pub frm565: bool,

    /// Bit 12: 24bpp order is LSB-aligned.
    pub bpp24bl: bool,

    /// Bits 13-14: Horizontal status (read only).
    #[bits(2, access = RO)]
    pub hstatus: u8,

    /// Bits 15-16: Vertical status (read only).
    #[bits(2, access = RO)]
    pub vstatus: u8,

    /// Bits 17-31: Reserved (must be 0).
    #[bits(15, default = 0)]
    _reserved_17_31: u16,
}

mmio_register!(LcdCon5, 0x10);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_type_round_trip() {
        for panel in [
            PanelType::Dscan4,
            PanelType::Stn4,
            PanelType::Stn8,
            PanelType::Tft,
        ] {
            let con1 = LcdCon1::from_bits(panel.lcdcon1_bits());
            assert_eq!(con1.panel_type(), panel);
        }
    }

    #[test]
    fn register_offsets() {
        use crate::MmioRegister;
        assert_eq!(LcdCon1::OFFSET, 0x00);
        assert_eq!(LcdCon5::OFFSET, 0x10);
        assert_eq!(LcdCon5::from_raw(0xB09).into_raw(), 0xB09);
    }

    #[test]
    fn lcdcon5_field_positions() {
        let con5 = LcdCon5::from_bits(0xB09);
        assert!(con5.hwswp());
        assert!(con5.pwren());
        assert!(con5.invvframe());
        assert!(con5.invvline());
        assert!(con5.frm565());
        assert!(!con5.bswp());
        assert!(!con5.invvclk());
    }
}
