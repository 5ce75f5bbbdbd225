//! Domain-based type organization
//!
//! Types are organized by domain to match the structure in `update/`:
//! - feature: Feature bindings and per-feature UI state
//! - common: Tagged API outcome shared by all endpoints
//! - status: System status report
//! - wifi: Wi-Fi scan and connect types
//! - ntp: NTP configuration types
//! - rf: RF remote scan types

pub mod common;
pub mod feature;
pub mod ntp;
pub mod rf;
pub mod status;
pub mod wifi;

pub use common::*;
pub use feature::*;
pub use ntp::*;
pub use rf::*;
pub use status::*;
pub use wifi::*;
