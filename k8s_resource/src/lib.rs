//! Kubernetes-style CPU and memory quantities.
//!
//! CPU amounts are written as millicores (`"100m"`) or decimal cores
//! (`"1.5"`) and are kept as whole millicores. Memory amounts are written
//! with a binary suffix (`"256Mi"`, `"2Gi"`), kept as bytes and always
//! formatted back in `Mi`.
#[macro_use]
extern crate uom;
#[macro_use]
extern crate tracing;

#[cfg(feature = "serde")]
#[macro_use]
mod serde_helper;

pub mod cpu;
pub mod cpu_ratio;
mod error;
#[cfg(feature = "k8s")]
pub mod k8s;
pub mod memory;
mod number;

pub use cpu::Cpu;
pub use error::Error;
pub use memory::Memory;
