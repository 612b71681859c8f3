//! LCD panel timing and the framebuffer platform data built from it.

use crate::error::LayoutError;
use kernel_registers::lcd::{LcdCon5, PanelType};

/// Timing and format of one supported panel.
///
/// Margins and sync lengths are in pixel clocks (horizontal) or lines
/// (vertical), the pixel clock period in picoseconds.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct FbDisplay {
    pub lcdcon5: LcdCon5,
    pub panel: PanelType,
    /// Physical size in millimetres.
    pub width: u16,
    pub height: u16,
    pub pixclock: u32,
    pub xres: u16,
    pub yres: u16,
    pub bpp: u16,
    pub left_margin: u16,
    pub right_margin: u16,
    pub hsync_len: u16,
    pub upper_margin: u16,
    pub lower_margin: u16,
    pub vsync_len: u16,
}

impl FbDisplay {
    /// Pixel clock in Hz, rounded down. Zero if no period is set.
    #[must_use]
    pub const fn pixclock_hz(&self) -> u64 {
        if self.pixclock == 0 {
            0
        } else {
            1_000_000_000_000 / self.pixclock as u64
        }
    }

    /// Bytes of video memory a single frame needs.
    #[must_use]
    pub const fn frame_bytes(&self) -> u64 {
        self.xres as u64 * self.yres as u64 * self.bpp as u64 / 8
    }
}

/// Pin setup of GPC/GPD, as `(value, mask)` pairs.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct FbGpioSetup {
    pub gpcup: (u32, u32),
    pub gpccon: (u32, u32),
    pub gpdup: (u32, u32),
    pub gpdcon: (u32, u32),
}

/// Framebuffer platform data: the panel variants plus controller setup.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct FbMachInfo {
    pub displays: &'static [FbDisplay],
    pub default_display: usize,
    /// `None` leaves the LCD pins as the bootloader configured them.
    pub gpio: Option<FbGpioSetup>,
    /// LPC3600 timing controller select register.
    pub lpcsel: u32,
}

impl FbMachInfo {
    /// # Errors
    /// [`LayoutError::DefaultDisplay`] if `default_display` does not index
    /// `displays` (which includes an empty list).
    pub const fn check(&self) -> Result<(), LayoutError> {
        if self.default_display < self.displays.len() {
            Ok(())
        } else {
            Err(LayoutError::DefaultDisplay {
                default: self.default_display,
                count: self.displays.len(),
            })
        }
    }

    #[must_use]
    pub const fn default_is_valid(&self) -> bool {
        self.check().is_ok()
    }

    /// The panel the driver should bring up first.
    #[must_use]
    pub fn default_panel(&self) -> Option<&'static FbDisplay> {
        self.displays.get(self.default_display)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const QVGA: FbDisplay = FbDisplay {
        lcdcon5: LcdCon5::new(),
        panel: PanelType::Tft,
        width: 240,
        height: 320,
        pixclock: 166_667,
        xres: 240,
        yres: 320,
        bpp: 16,
        left_margin: 20,
        right_margin: 8,
        hsync_len: 4,
        upper_margin: 8,
        lower_margin: 7,
        vsync_len: 4,
    };

    static ONE: [FbDisplay; 1] = [QVGA];

    #[test]
    fn derived_quantities() {
        assert_eq!(QVGA.pixclock_hz(), 5_999_988);
        assert_eq!(QVGA.frame_bytes(), 153_600);
    }

    #[test]
    fn frame_size_of_maximal_mode() {
        let huge = FbDisplay {
            xres: u16::MAX,
            yres: u16::MAX,
            bpp: 32,
            ..QVGA
        };
        assert_eq!(huge.frame_bytes(), 65_535 * 65_535 * 4);
    }

    #[test]
    fn default_index_must_be_in_range() {
        let mut info = FbMachInfo {
            displays: &ONE,
            default_display: 0,
            gpio: None,
            lpcsel: 0,
        };
        assert!(info.default_is_valid());
        assert_eq!(info.default_panel(), Some(&QVGA));

        info.default_display = 1;
        assert_eq!(
            info.check(),
            Err(LayoutError::DefaultDisplay { default: 1, count: 1 })
        );
        assert_eq!(info.default_panel(), None);
    }

    #[test]
    fn empty_display_list_is_invalid() {
        let info = FbMachInfo {
            displays: &[],
            default_display: 0,
            gpio: None,
            lpcsel: 0,
        };
        assert!(!info.default_is_valid());
    }
}
