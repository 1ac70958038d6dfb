//! Flat provider configuration records.
//!
//! Format: `name;RESOLUTION;DEVICE,DEVICE;fee;offline`, for example
//! `QuantumCloud+;HD;PHONE,PC;52.99;True`.

use crate::display::join;
use crate::error::ShelfError;

/// Maximum streaming resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Resolution {
    Hd,
    Fhd,
    Uhd,
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Resolution::Hd => write!(f, "HD"),
            Resolution::Fhd => write!(f, "FHD"),
            Resolution::Uhd => write!(f, "UHD"),
        }
    }
}

impl std::str::FromStr for Resolution {
    type Err = ShelfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "HD" | "720P" => Ok(Resolution::Hd),
            "FHD" | "1080P" => Ok(Resolution::Fhd),
            "UHD" | "4K" | "2160P" => Ok(Resolution::Uhd),
            _ => Err(ShelfError::malformed(
                "resolution",
                format!("unknown resolution: {}", s),
            )),
        }
    }
}

/// Device class a provider can stream to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Device {
    Phone,
    Tablet,
    Tv,
    Pc,
}

impl std::fmt::Display for Device {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Device::Phone => write!(f, "PHONE"),
            Device::Tablet => write!(f, "TAB"),
            Device::Tv => write!(f, "TV"),
            Device::Pc => write!(f, "PC"),
        }
    }
}

impl std::str::FromStr for Device {
    type Err = ShelfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "PHONE" | "MOBILE" => Ok(Device::Phone),
            "TAB" | "TABLET" => Ok(Device::Tablet),
            "TV" => Ok(Device::Tv),
            "PC" | "DESKTOP" => Ok(Device::Pc),
            _ => Err(ShelfError::malformed(
                "devices",
                format!("unknown device: {}", s),
            )),
        }
    }
}

/// One parsed provider configuration line
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderRecord {
    pub name: String,
    pub resolution: Resolution,
    pub devices: Vec<Device>,
    pub fee: f64,
    pub offline: bool,
}

impl std::str::FromStr for ProviderRecord {
    type Err = ShelfError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = line.split(';').map(str::trim).collect();
        let [name, resolution, devices, fee, offline] = parts.as_slice() else {
            return Err(ShelfError::malformed(
                "record",
                format!("expected 5 ';'-separated fields, got {}", parts.len()),
            ));
        };

        if name.is_empty() {
            return Err(ShelfError::malformed("name", "empty provider name"));
        }

        let mut device_list = Vec::new();
        for device in devices.split(',').filter(|d| !d.trim().is_empty()) {
            let device: Device = device.parse()?;
            if !device_list.contains(&device) {
                device_list.push(device);
            }
        }
        if device_list.is_empty() {
            return Err(ShelfError::malformed("devices", "no devices listed"));
        }

        let fee: f64 = fee
            .parse()
            .map_err(|_| ShelfError::malformed("fee", format!("not a number: {}", fee)))?;
        if !fee.is_finite() || fee < 0.0 {
            return Err(ShelfError::malformed(
                "fee",
                format!("must be a non-negative amount: {}", fee),
            ));
        }

        let offline = match offline.to_lowercase().as_str() {
            "true" | "yes" | "1" => true,
            "false" | "no" | "0" => false,
            _ => {
                return Err(ShelfError::malformed(
                    "offline",
                    format!("not a boolean: {}", offline),
                ))
            }
        };

        Ok(Self {
            name: name.to_string(),
            resolution: resolution.parse()?,
            devices: device_list,
            fee,
            offline,
        })
    }
}

impl std::fmt::Display for ProviderRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{};{};{};{:.2};{}",
            self.name,
            self.resolution,
            join(&self.devices, ","),
            self.fee,
            if self.offline { "True" } else { "False" }
        )
    }
}
