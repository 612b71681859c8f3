//! The platform subsystems board code hands its tables to.
//!
//! Board crates never touch hardware directly: every stage talks to the
//! SoC support code through these traits. [`Platform`] bundles all of them
//! so a stage receives a single `&mut dyn Platform`.

use crate::device::PlatformDevice;
use crate::display::FbMachInfo;
use crate::error::{EnrollError, GpioError, MapError, SerialError, StageError};
use crate::gpio::{GpioConfig, GpioPin};
use crate::map::MapDesc;
use crate::platform_data::{I2cPlatformData, NandPlatformData, UdcMachInfo};
use crate::serial::UartConfig;

/// Samsung PWM timer channel.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PwmChannel {
    Pwm0,
    Pwm1,
    Pwm2,
    Pwm3,
    /// Has no output pin; commonly the clock source.
    Pwm4,
}

pub trait IoMapper {
    /// Installs the static mappings. They are live on return.
    ///
    /// # Errors
    /// A mapping overlaps one that is already live or is not page aligned.
    fn map_io(&mut self, table: &[MapDesc]) -> Result<(), MapError>;
}

pub trait SerialSubsystem {
    /// Records the UART configuration for the serial driver.
    ///
    /// # Errors
    /// The table names ports the SoC does not have.
    fn init_uarts(&mut self, table: &[UartConfig]) -> Result<(), SerialError>;
}

pub trait InterruptController {
    /// Brings up the SoC interrupt controller.
    fn init_irq(&mut self);
}

pub trait TimerSubsystem {
    /// Chooses the clock event and clock source channels.
    fn set_timer_source(&mut self, event: PwmChannel, source: PwmChannel);

    /// Registers the SoC clock tree from the crystal frequency.
    fn init_clocks(&mut self, xtal_hz: u32);

    /// Starts the system timer on the selected channels.
    fn timer_init(&mut self);
}

pub trait DisplaySubsystem {
    fn set_fb_platdata(&mut self, info: &'static FbMachInfo);
}

pub trait DeviceSubsystem {
    /// Registers all devices, in order.
    ///
    /// # Errors
    /// The first device that cannot be registered. Devices before it stay
    /// registered.
    fn add_devices(&mut self, devices: &[&'static PlatformDevice]) -> Result<(), EnrollError>;

    /// `None` selects [`I2cPlatformData::DEFAULT`].
    fn set_i2c0_platdata(&mut self, data: Option<&'static I2cPlatformData>);

    fn set_udc_platdata(&mut self, info: &'static UdcMachInfo);

    fn set_nand_platdata(&mut self, info: &'static NandPlatformData);
}

pub trait GpioController {
    /// Requests `pin` and applies `config`; the pin is released again on
    /// return.
    ///
    /// # Errors
    /// The pin is owned by someone else or does not exist.
    fn configure_gpio(&mut self, pin: GpioPin, config: GpioConfig) -> Result<(), GpioError>;
}

pub trait PowerManagement {
    /// Registers suspend/resume support.
    fn pm_init(&mut self);
}

/// Everything a bring-up stage may call.
pub trait Platform:
    IoMapper
    + SerialSubsystem
    + InterruptController
    + TimerSubsystem
    + DisplaySubsystem
    + DeviceSubsystem
    + GpioController
    + PowerManagement
{
}

impl<T> Platform for T where
    T: ?Sized
        + IoMapper
        + SerialSubsystem
        + InterruptController
        + TimerSubsystem
        + DisplaySubsystem
        + DeviceSubsystem
        + GpioController
        + PowerManagement
{
}

/// Setup shared by a family of reference boards, run at the very end of
/// the machine stage.
pub trait CommonBoardSetup: Sync {
    fn name(&self) -> &'static str;

    /// # Errors
    /// Any fatal subsystem rejection.
    fn apply(&self, platform: &mut dyn Platform) -> Result<(), StageError>;
}
