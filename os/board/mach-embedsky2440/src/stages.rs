use crate::tables::{
    EMBEDSKY2440_DEVICES, EMBEDSKY2440_FB_INFO, EMBEDSKY2440_IODESC, EMBEDSKY2440_UARTCFGS,
    EMBEDSKY2440_UDC_INFO,
};
use board_s3c24xx::smdk::SMDK_COMMON;
use kernel_board::{CommonBoardSetup, DeviceRegistry, Platform, PwmChannel, StageError};
use log::{debug, info, trace};

/// Crystal on the EmbedSky boards.
pub const XTAL_FREQ: u32 = 12_000_000;

/// Static ISA windows, UART setup and timer channel selection.
///
/// # Errors
/// The mapping or serial subsystem rejected a table.
pub fn map_io(platform: &mut dyn Platform) -> Result<(), StageError> {
    for desc in &EMBEDSKY2440_IODESC {
        debug!(
            "map {} -> {} ({:#x} bytes)",
            desc.virt,
            desc.pfn.base(),
            desc.length
        );
    }
    platform.map_io(&EMBEDSKY2440_IODESC)?;

    for cfg in &EMBEDSKY2440_UARTCFGS {
        trace!(
            "UART{}: ucon={:#x} ulcon={:#x} ufcon={:#x}",
            cfg.hwport,
            cfg.ucon.into_bits(),
            cfg.ulcon.into_bits(),
            cfg.ufcon.into_bits()
        );
    }
    platform.init_uarts(&EMBEDSKY2440_UARTCFGS)?;

    platform.set_timer_source(PwmChannel::Pwm3, PwmChannel::Pwm4);
    Ok(())
}

/// # Errors
/// Never fails.
#[allow(clippy::unnecessary_wraps)]
pub fn init_time(platform: &mut dyn Platform) -> Result<(), StageError> {
    info!("xtal {XTAL_FREQ} Hz");
    platform.init_clocks(XTAL_FREQ);
    platform.timer_init();
    Ok(())
}

/// Platform data first, then the device list, then the SMDK setup.
///
/// # Errors
/// A device could not be enrolled.
pub fn init_machine(platform: &mut dyn Platform) -> Result<(), StageError> {
    platform.set_fb_platdata(&EMBEDSKY2440_FB_INFO);
    platform.set_i2c0_platdata(None);
    platform.set_udc_platdata(&EMBEDSKY2440_UDC_INFO);

    DeviceRegistry::new(&EMBEDSKY2440_DEVICES).enroll_all(platform)?;

    debug!("running {} common setup", SMDK_COMMON.name());
    SMDK_COMMON.apply(platform)
}
