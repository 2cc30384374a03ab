//! Conversions with the `Quantity` type of `k8s-openapi`, the raw string
//! found in container `resources.requests` and `resources.limits`.
use k8s_openapi::apimachinery::pkg::api::resource::Quantity;

use crate::{Cpu, Error, Memory};

impl TryFrom<&Quantity> for Cpu {
    type Error = Error;

    fn try_from(quantity: &Quantity) -> Result<Self, Self::Error> {
        quantity.0.parse()
    }
}

impl From<Cpu> for Quantity {
    fn from(cpu: Cpu) -> Self { Quantity(cpu.to_string()) }
}

impl TryFrom<&Quantity> for Memory {
    type Error = Error;

    fn try_from(quantity: &Quantity) -> Result<Self, Self::Error> {
        quantity.0.parse()
    }
}

impl From<Memory> for Quantity {
    fn from(memory: Memory) -> Self { Quantity(memory.to_string()) }
}
