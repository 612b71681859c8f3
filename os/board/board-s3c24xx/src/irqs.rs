//! Interrupt numbering.
//!
//! The first 16 platform numbers are reserved for ISA-style legacy
//! interrupts, so the controller's bit `n` becomes IRQ `n + 16`. External
//! interrupts `EINT4..EINT23` and the UART/ADC sub-sources follow the 32
//! main sources.

use kernel_board::{IrqLine, Platform, StageError};

pub const S3C2410_CPUIRQ_OFFSET: u16 = 16;

/// Platform number of controller source `n`.
#[must_use]
pub const fn s3c2410_irq(n: u16) -> IrqLine {
    IrqLine::new(n + S3C2410_CPUIRQ_OFFSET)
}

pub const IRQ_EINT0: IrqLine = s3c2410_irq(0);
pub const IRQ_EINT1: IrqLine = s3c2410_irq(1);
pub const IRQ_EINT2: IrqLine = s3c2410_irq(2);
pub const IRQ_EINT3: IrqLine = s3c2410_irq(3);
pub const IRQ_EINT4T7: IrqLine = s3c2410_irq(4);
pub const IRQ_EINT8T23: IrqLine = s3c2410_irq(5);
pub const IRQ_TICK: IrqLine = s3c2410_irq(8);
pub const IRQ_WDT: IrqLine = s3c2410_irq(9);
pub const IRQ_TIMER0: IrqLine = s3c2410_irq(10);
pub const IRQ_TIMER1: IrqLine = s3c2410_irq(11);
pub const IRQ_TIMER2: IrqLine = s3c2410_irq(12);
pub const IRQ_TIMER3: IrqLine = s3c2410_irq(13);
pub const IRQ_TIMER4: IrqLine = s3c2410_irq(14);
pub const IRQ_UART2: IrqLine = s3c2410_irq(15);
pub const IRQ_LCD: IrqLine = s3c2410_irq(16);
pub const IRQ_SDI: IrqLine = s3c2410_irq(21);
pub const IRQ_UART1: IrqLine = s3c2410_irq(23);
pub const IRQ_NFCON: IrqLine = s3c2410_irq(24);
pub const IRQ_USBD: IrqLine = s3c2410_irq(25);
pub const IRQ_USBH: IrqLine = s3c2410_irq(26);
pub const IRQ_IIC: IrqLine = s3c2410_irq(27);
pub const IRQ_UART0: IrqLine = s3c2410_irq(28);
pub const IRQ_RTC: IrqLine = s3c2410_irq(30);
pub const IRQ_ADCPARENT: IrqLine = s3c2410_irq(31);

/// External interrupt `n`, demultiplexed from `EINT4t7`/`EINT8t23`.
///
/// # Panics
/// If `n` is not in `4..=23`; `EINT0..3` have their own sources.
#[must_use]
pub const fn irq_eint(n: u16) -> IrqLine {
    assert!(matches!(n, 4..=23));
    s3c2410_irq(32 + n - 4)
}

pub const IRQ_EINT7: IrqLine = irq_eint(7);

/// One past the last S3C2440 interrupt (the AC97 sub-source).
pub const NR_IRQS: u16 = s3c2410_irq(69).as_u16();

/// Interrupt stage shared by all S3C2440 boards.
///
/// # Errors
/// Never fails; the signature matches [`StageFn`](kernel_board::StageFn).
#[allow(clippy::unnecessary_wraps)]
pub fn s3c2440_init_irq(platform: &mut dyn Platform) -> Result<(), StageError> {
    platform.init_irq();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets() {
        assert_eq!(IRQ_USBH.as_u16(), 42);
        assert_eq!(IRQ_LCD.as_u16(), 32);
        assert_eq!(IRQ_WDT.as_u16(), 25);
        assert_eq!(IRQ_IIC.as_u16(), 43);
        assert_eq!(IRQ_USBD.as_u16(), 41);
    }

    #[test]
    fn external_interrupts() {
        assert_eq!(irq_eint(4).as_u16(), 48);
        assert_eq!(IRQ_EINT7.as_u16(), 51);
        assert_eq!(irq_eint(23).as_u16(), 67);
        assert!(IRQ_EINT7.as_u16() < NR_IRQS);
    }
}
