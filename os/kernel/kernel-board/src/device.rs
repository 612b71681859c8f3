use crate::resource::Resource;
use core::any::Any;
use core::fmt;

/// Opaque driver configuration attached to a device record.
pub type PlatformData = dyn Any + Send + Sync;

/// Instance number of a device. Devices that can only exist once carry no
/// number at all.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum DeviceId {
    Single,
    Instance(u16),
}

impl DeviceId {
    /// The numeric form, `-1` for [`DeviceId::Single`].
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        match self {
            Self::Single => -1,
            Self::Instance(n) => n as i32,
        }
    }
}

/// A statically declared platform device.
///
/// Records live for the whole run; enrollment hands references to them to
/// the device subsystem.
#[derive(Debug)]
pub struct PlatformDevice {
    pub name: &'static str,
    pub id: DeviceId,
    pub resources: &'static [Resource],
    pub platform_data: Option<&'static PlatformData>,
}

impl PlatformDevice {
    /// A device without resources or configuration.
    #[must_use]
    pub const fn new(name: &'static str, id: DeviceId) -> Self {
        Self {
            name,
            id,
            resources: &[],
            platform_data: None,
        }
    }

    /// The configuration payload, if it is a `T`.
    #[must_use]
    pub fn platform_data<T: Any>(&self) -> Option<&'static T> {
        self.platform_data.and_then(|data| data.downcast_ref::<T>())
    }

    /// Name as the device subsystem shows it: `name` or `name.id`.
    #[must_use]
    pub const fn display_name(&self) -> DeviceName<'_> {
        DeviceName(self)
    }
}

pub struct DeviceName<'a>(&'a PlatformDevice);

impl fmt::Display for DeviceName<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.id {
            DeviceId::Single => f.write_str(self.0.name),
            DeviceId::Instance(n) => write!(f, "{}.{n}", self.0.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Payload(u32);

    static PAYLOAD: Payload = Payload(2);

    static WITH_DATA: PlatformDevice = PlatformDevice {
        name: "dm9000",
        id: DeviceId::Instance(0),
        resources: &[],
        platform_data: Some(&PAYLOAD),
    };

    #[test]
    fn payload_downcast() {
        assert_eq!(WITH_DATA.platform_data::<Payload>(), Some(&Payload(2)));
        assert_eq!(WITH_DATA.platform_data::<u32>(), None);
        assert_eq!(
            PlatformDevice::new("s3c2410-wdt", DeviceId::Single).platform_data::<Payload>(),
            None
        );
    }

    #[test]
    fn names() {
        assert_eq!(WITH_DATA.display_name().to_string(), "dm9000.0");
        assert_eq!(
            PlatformDevice::new("s3c2410-lcd", DeviceId::Single)
                .display_name()
                .to_string(),
            "s3c2410-lcd"
        );
        assert_eq!(DeviceId::Single.as_i32(), -1);
    }
}
