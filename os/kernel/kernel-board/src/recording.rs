//! A host-side [`Platform`](crate::Platform) that records every call.
//!
//! Besides the call log it enforces the rules the real subsystems apply
//! (no overlapping live mappings, unique device names, exclusive MMIO
//! windows and interrupt lines) so board tables can be exercised on the
//! build machine.

extern crate alloc;

use crate::device::PlatformDevice;
use crate::display::FbMachInfo;
use crate::error::{EnrollError, GpioError, MapError, SerialError};
use crate::gpio::{GpioConfig, GpioPin};
use crate::map::MapDesc;
use crate::platform_data::{I2cPlatformData, NandPlatformData, UdcMachInfo};
use crate::resource::{IrqLine, IrqTrigger, ResourceKind};
use crate::serial::UartConfig;
use crate::subsystem::{
    DeviceSubsystem, DisplaySubsystem, GpioController, InterruptController, IoMapper,
    PowerManagement, PwmChannel, SerialSubsystem, TimerSubsystem,
};
use alloc::vec::Vec;
use kernel_memory_addresses::{ByteRange, PhysicalAddress, VirtualAddress};

/// One subsystem call, in the order it was made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    MapIo(Vec<MapDesc>),
    InitUarts(Vec<UartConfig>),
    InitIrq,
    SetTimerSource { event: PwmChannel, source: PwmChannel },
    InitClocks(u32),
    TimerInit,
    SetFbPlatdata(&'static FbMachInfo),
    SetI2c0Platdata(Option<&'static I2cPlatformData>),
    SetUdcPlatdata(&'static UdcMachInfo),
    SetNandPlatdata(&'static NandPlatformData),
    /// Names of the devices passed in one `add_devices` call.
    AddDevices(Vec<&'static str>),
    ConfigureGpio(GpioPin, GpioConfig),
    PmInit,
}

#[derive(Debug, Copy, Clone)]
struct Window {
    range: ByteRange,
    owner: &'static str,
}

#[derive(Debug, Copy, Clone)]
struct IrqClaim {
    line: IrqLine,
    trigger: IrqTrigger,
    shared: bool,
    owner: &'static str,
}

#[derive(Debug)]
pub struct RecordingPlatform {
    nr_uarts: u8,
    nr_irqs: u16,
    calls: Vec<Call>,
    mappings: Vec<MapDesc>,
    uarts: Option<Vec<UartConfig>>,
    devices: Vec<&'static PlatformDevice>,
    windows: Vec<Window>,
    irqs: Vec<IrqClaim>,
    gpios: Vec<(GpioPin, GpioConfig)>,
    reserved_gpios: Vec<GpioPin>,
    i2c0: Option<I2cPlatformData>,
}

impl RecordingPlatform {
    /// A platform with `nr_uarts` on-chip UARTs and interrupt numbers
    /// `0..nr_irqs`.
    #[must_use]
    pub const fn new(nr_uarts: u8, nr_irqs: u16) -> Self {
        Self {
            nr_uarts,
            nr_irqs,
            calls: Vec::new(),
            mappings: Vec::new(),
            uarts: None,
            devices: Vec::new(),
            windows: Vec::new(),
            irqs: Vec::new(),
            gpios: Vec::new(),
            reserved_gpios: Vec::new(),
            i2c0: None,
        }
    }

    #[must_use]
    pub fn calls(&self) -> &[Call] {
        &self.calls
    }

    /// All mappings that are currently live.
    #[must_use]
    pub fn mappings(&self) -> &[MapDesc] {
        &self.mappings
    }

    /// Physical address `va` resolves to through the live mappings.
    #[must_use]
    pub fn translate(&self, va: VirtualAddress) -> Option<PhysicalAddress> {
        self.mappings
            .iter()
            .find(|m| m.virt_range().contains(va.as_u64()))
            .map(|m| m.pfn.base() + (va.as_u32() - m.virt.as_u32()))
    }

    #[must_use]
    pub fn uarts(&self) -> Option<&[UartConfig]> {
        self.uarts.as_deref()
    }

    /// Registered devices in registration order.
    #[must_use]
    pub fn devices(&self) -> &[&'static PlatformDevice] {
        &self.devices
    }

    #[must_use]
    pub fn device(&self, name: &str) -> Option<&'static PlatformDevice> {
        self.devices.iter().copied().find(|d| d.name == name)
    }

    /// Effective I²C0 configuration once platform data was set.
    #[must_use]
    pub const fn i2c0(&self) -> Option<&I2cPlatformData> {
        self.i2c0.as_ref()
    }

    /// Last configuration applied to `pin`.
    #[must_use]
    pub fn gpio(&self, pin: GpioPin) -> Option<GpioConfig> {
        self.gpios
            .iter()
            .find(|(p, _)| *p == pin)
            .map(|&(_, config)| config)
    }

    /// Marks `pin` as owned elsewhere; requests for it fail.
    pub fn reserve_gpio(&mut self, pin: GpioPin) {
        self.reserved_gpios.push(pin);
    }

    /// Index of the first call matching `pred`.
    pub fn position(&self, pred: impl Fn(&Call) -> bool) -> Option<usize> {
        self.calls.iter().position(pred)
    }

    fn register(&mut self, dev: &'static PlatformDevice) -> Result<(), EnrollError> {
        if self
            .devices
            .iter()
            .any(|d| d.name == dev.name && d.id == dev.id)
        {
            return Err(EnrollError::Duplicate {
                name: dev.name,
                id: dev.id.as_i32(),
            });
        }

        let mut windows = Vec::new();
        let mut irqs = Vec::new();
        for res in dev.resources {
            match res.kind {
                ResourceKind::Mem { start, end } => {
                    let Some(range) = res.window().filter(|_| res.is_well_formed()) else {
                        return Err(EnrollError::InvalidResource {
                            device: dev.name,
                            reason: "window ends before it starts",
                        });
                    };
                    if let Some(w) = self.windows.iter().find(|w| w.range.overlaps(&range)) {
                        return Err(EnrollError::Busy {
                            device: dev.name,
                            owner: w.owner,
                            start,
                            end,
                        });
                    }
                    windows.push(Window {
                        range,
                        owner: dev.name,
                    });
                }
                ResourceKind::Irq {
                    line,
                    trigger,
                    shared,
                } => {
                    if line.as_u16() >= self.nr_irqs {
                        return Err(EnrollError::InvalidResource {
                            device: dev.name,
                            reason: "interrupt number out of range",
                        });
                    }
                    if let Some(c) = self.irqs.iter().find(|c| {
                        c.line == line && !(c.shared && shared && c.trigger == trigger)
                    }) {
                        return Err(EnrollError::IrqBusy {
                            device: dev.name,
                            owner: c.owner,
                            line,
                        });
                    }
                    irqs.push(IrqClaim {
                        line,
                        trigger,
                        shared,
                        owner: dev.name,
                    });
                }
            }
        }

        self.windows.extend(windows);
        self.irqs.extend(irqs);
        self.devices.push(dev);
        Ok(())
    }
}

impl IoMapper for RecordingPlatform {
    fn map_io(&mut self, table: &[MapDesc]) -> Result<(), MapError> {
        self.calls.push(Call::MapIo(table.to_vec()));
        for desc in table {
            if !desc.is_well_formed() {
                return Err(MapError::Misaligned { virt: desc.virt });
            }
            if let Some(live) = self
                .mappings
                .iter()
                .find(|m| m.virt_range().overlaps(&desc.virt_range()))
            {
                return Err(MapError::Overlap {
                    virt: desc.virt,
                    existing: live.virt,
                });
            }
            self.mappings.push(*desc);
        }
        Ok(())
    }
}

impl SerialSubsystem for RecordingPlatform {
    fn init_uarts(&mut self, table: &[UartConfig]) -> Result<(), SerialError> {
        self.calls.push(Call::InitUarts(table.to_vec()));
        if self.uarts.is_some() {
            return Err(SerialError::AlreadyRegistered);
        }
        for (index, cfg) in table.iter().enumerate() {
            if cfg.hwport >= self.nr_uarts {
                return Err(SerialError::NoSuchPort(cfg.hwport));
            }
            if usize::from(cfg.hwport) != index {
                return Err(SerialError::NotContiguous {
                    index,
                    found: cfg.hwport,
                });
            }
        }
        self.uarts = Some(table.to_vec());
        Ok(())
    }
}

impl InterruptController for RecordingPlatform {
    fn init_irq(&mut self) {
        self.calls.push(Call::InitIrq);
    }
}

impl TimerSubsystem for RecordingPlatform {
    fn set_timer_source(&mut self, event: PwmChannel, source: PwmChannel) {
        self.calls.push(Call::SetTimerSource { event, source });
    }

    fn init_clocks(&mut self, xtal_hz: u32) {
        self.calls.push(Call::InitClocks(xtal_hz));
    }

    fn timer_init(&mut self) {
        self.calls.push(Call::TimerInit);
    }
}

impl DisplaySubsystem for RecordingPlatform {
    fn set_fb_platdata(&mut self, info: &'static FbMachInfo) {
        self.calls.push(Call::SetFbPlatdata(info));
    }
}

impl DeviceSubsystem for RecordingPlatform {
    fn add_devices(&mut self, devices: &[&'static PlatformDevice]) -> Result<(), EnrollError> {
        self.calls
            .push(Call::AddDevices(devices.iter().map(|d| d.name).collect()));
        devices.iter().try_for_each(|&dev| self.register(dev))
    }

    fn set_i2c0_platdata(&mut self, data: Option<&'static I2cPlatformData>) {
        self.calls.push(Call::SetI2c0Platdata(data));
        self.i2c0 = Some(I2cPlatformData::resolve(data));
    }

    fn set_udc_platdata(&mut self, info: &'static UdcMachInfo) {
        self.calls.push(Call::SetUdcPlatdata(info));
    }

    fn set_nand_platdata(&mut self, info: &'static NandPlatformData) {
        self.calls.push(Call::SetNandPlatdata(info));
    }
}

impl GpioController for RecordingPlatform {
    fn configure_gpio(&mut self, pin: GpioPin, config: GpioConfig) -> Result<(), GpioError> {
        self.calls.push(Call::ConfigureGpio(pin, config));
        if !pin.is_valid() {
            return Err(GpioError::Invalid(pin));
        }
        if self.reserved_gpios.contains(&pin) {
            return Err(GpioError::Busy(pin));
        }
        self.gpios.retain(|(p, _)| *p != pin);
        self.gpios.push((pin, config));
        Ok(())
    }
}

impl PowerManagement for RecordingPlatform {
    fn pm_init(&mut self) {
        self.calls.push(Call::PmInit);
    }
}
