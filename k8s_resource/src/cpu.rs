//! CPU quantities, kept as whole millicores.
//!
//! Two spellings are accepted: an integer followed by `m` (`"250m"`), taken
//! as millicores, and a plain decimal core count (`"1.5"`), multiplied by
//! 1000 and truncated. Formatting always uses the millicore form.
use std::fmt;
use std::ops;
use std::str::FromStr;

use uom::si::f64::Ratio;

use crate::cpu_ratio::millicpu;
use crate::number::parse_decimal;
use crate::Error;

pub const MILLICORES_PER_CORE: i64 = 1000;

/// Parses a Kubernetes CPU string into millicores.
pub fn parse(quantity: &str) -> Result<i64, Error> {
    if let Some(millicores) = quantity.strip_suffix('m') {
        return millicores.parse::<i64>().map_err(|_| {
            trace!(quantity, "rejected millicore quantity");
            Error::QuantityParsing(quantity.to_string())
        });
    }

    let cores = parse_decimal(quantity).ok_or_else(|| {
        trace!(quantity, "rejected core quantity");
        Error::rejected(quantity)
    })?;

    Ok((cores * MILLICORES_PER_CORE as f64).trunc() as i64)
}

/// An amount of CPU.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cpu {
    millicores: i64,
}

#[allow(clippy::should_implement_trait)]
impl Cpu {
    #[inline(always)]
    pub fn from_millicores(millicores: i64) -> Self { Self { millicores } }

    #[inline(always)]
    pub fn to_millicores(self) -> i64 { self.millicores }

    /// Parses `quantity` and returns the sum. Like the operators, the
    /// arithmetic wraps around on overflow.
    pub fn add(self, quantity: &str) -> Result<Self, Error> {
        Ok(self + Self::from_millicores(parse(quantity)?))
    }

    /// Parses `quantity` and returns the difference, which may be negative.
    pub fn sub(self, quantity: &str) -> Result<Self, Error> {
        Ok(self - Self::from_millicores(parse(quantity)?))
    }

    pub fn to_ratio(self) -> Ratio {
        Ratio::new::<millicpu>(self.millicores as f64)
    }

    /// Rounds to the nearest millicore.
    pub fn from_ratio(ratio: Ratio) -> Self {
        Self::from_millicores(ratio.get::<millicpu>().round() as i64)
    }
}

impl FromStr for Cpu {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s).map(Self::from_millicores)
    }
}

impl TryFrom<&str> for Cpu {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> { value.parse() }
}

impl From<i64> for Cpu {
    #[inline(always)]
    fn from(millicores: i64) -> Self { Self::from_millicores(millicores) }
}

impl From<Cpu> for i64 {
    #[inline(always)]
    fn from(cpu: Cpu) -> Self { cpu.millicores }
}

impl fmt::Display for Cpu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}m", self.millicores)
    }
}

impl ops::Add for Cpu {
    type Output = Cpu;

    fn add(self, rhs: Cpu) -> Cpu {
        Cpu::from_millicores(self.millicores.wrapping_add(rhs.millicores))
    }
}

impl ops::Sub for Cpu {
    type Output = Cpu;

    fn sub(self, rhs: Cpu) -> Cpu {
        Cpu::from_millicores(self.millicores.wrapping_sub(rhs.millicores))
    }
}

impl ops::Neg for Cpu {
    type Output = Cpu;

    fn neg(self) -> Cpu {
        Cpu::from_millicores(self.millicores.wrapping_neg())
    }
}

impl ops::AddAssign for Cpu {
    fn add_assign(&mut self, rhs: Cpu) { *self = *self + rhs; }
}

impl ops::SubAssign for Cpu {
    fn sub_assign(&mut self, rhs: Cpu) { *self = *self - rhs; }
}

#[cfg(feature = "serde")]
impl_serialize_as!(
    Cpu,
    i64,
    "a CPU quantity such as '250m', '1.5' or 2",
    |cores: i64| cores
        .checked_mul(MILLICORES_PER_CORE)
        .map(Cpu::from_millicores),
    |cores: f64| {
        let millicores = (cores * MILLICORES_PER_CORE as f64).trunc();
        (millicores >= i64::MIN as f64 && millicores < i64::MAX as f64)
            .then(|| Cpu::from_millicores(millicores as i64))
    }
);
