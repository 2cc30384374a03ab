//! Memory quantities, kept as a byte count.
//!
//! Only the `Mi` and `Gi` suffixes are understood. Formatting always uses
//! `Mi`, rounded up to the next whole mebibyte.
use std::fmt;
use std::ops;
use std::str::FromStr;

use uom::si::f64::Information;
use uom::si::information::byte;

use crate::number::parse_decimal;
use crate::Error;

/// Bytes in a mebibyte.
pub const MI: f64 = (1u64 << 20) as f64;
/// Bytes in a gibibyte.
pub const GI: f64 = (1u64 << 30) as f64;

const UNITS: [(&str, f64); 2] = [("Mi", MI), ("Gi", GI)];

/// Parses a Kubernetes memory string into bytes.
pub fn parse(quantity: &str) -> Result<f64, Error> {
    let (value, multiplier) = UNITS
        .iter()
        .find_map(|(suffix, multiplier)| {
            quantity.strip_suffix(suffix).map(|value| (value, *multiplier))
        })
        .ok_or_else(|| {
            trace!(quantity, "rejected memory quantity, unknown units");
            Error::UnknownUnit(quantity.to_string())
        })?;

    let value = parse_decimal(value).ok_or_else(|| {
        trace!(quantity, "rejected memory quantity");
        Error::QuantityParsing(quantity.to_string())
    })?;

    Ok(value * multiplier)
}

/// An amount of memory.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Memory {
    bytes: f64,
}

#[allow(clippy::should_implement_trait)]
impl Memory {
    /// Zero bytes.
    pub fn new() -> Self { Self { bytes: 0.0 } }

    #[inline(always)]
    pub fn from_bytes(bytes: f64) -> Self { Self { bytes } }

    #[inline(always)]
    pub fn to_bytes(self) -> f64 { self.bytes }

    /// Parses `quantity` and returns the sum.
    pub fn add(self, quantity: &str) -> Result<Self, Error> {
        Ok(self.add_raw(parse(quantity)?))
    }

    /// Parses `quantity` and returns the difference, which may be negative.
    pub fn sub(self, quantity: &str) -> Result<Self, Error> {
        Ok(self.sub_raw(parse(quantity)?))
    }

    pub fn add_raw(self, bytes: f64) -> Self {
        Self::from_bytes(self.bytes + bytes)
    }

    pub fn sub_raw(self, bytes: f64) -> Self {
        Self::from_bytes(self.bytes - bytes)
    }

    pub fn to_information(self) -> Information {
        Information::new::<byte>(self.bytes)
    }

    pub fn from_information(information: Information) -> Self {
        Self::from_bytes(information.get::<byte>())
    }
}

impl FromStr for Memory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s).map(Self::from_bytes)
    }
}

impl TryFrom<&str> for Memory {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> { value.parse() }
}

impl From<f64> for Memory {
    #[inline(always)]
    fn from(bytes: f64) -> Self { Self::from_bytes(bytes) }
}

impl From<Memory> for f64 {
    #[inline(always)]
    fn from(memory: Memory) -> Self { memory.bytes }
}

/// Always `Mi`, never `Gi`: `1Gi` of bytes is written `1024Mi`. The value is
/// rounded toward positive infinity, so `-1.5Mi` of bytes is written `-1Mi`.
impl fmt::Display for Memory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mebibytes = (self.bytes / MI).ceil() as i64;
        write!(f, "{}Mi", mebibytes)
    }
}

impl ops::Add for Memory {
    type Output = Memory;

    fn add(self, rhs: Memory) -> Memory { self.add_raw(rhs.bytes) }
}

impl ops::Sub for Memory {
    type Output = Memory;

    fn sub(self, rhs: Memory) -> Memory { self.sub_raw(rhs.bytes) }
}

impl ops::Neg for Memory {
    type Output = Memory;

    fn neg(self) -> Memory { Memory::from_bytes(-self.bytes) }
}

impl ops::AddAssign for Memory {
    fn add_assign(&mut self, rhs: Memory) { self.bytes += rhs.bytes; }
}

impl ops::SubAssign for Memory {
    fn sub_assign(&mut self, rhs: Memory) { self.bytes -= rhs.bytes; }
}

#[cfg(feature = "serde")]
impl_serialize_as!(
    Memory,
    f64,
    "a memory quantity such as '256Mi', '2Gi' or a byte count",
    |bytes: i64| Some(Memory::from_bytes(bytes as f64)),
    |bytes: f64| Some(Memory::from_bytes(bytes))
);
