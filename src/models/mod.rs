//! Data models for SMS backups.
//!
//! - [`MessageRecord`] - One validated message parsed from a provider dump
//! - [`Direction`] - Incoming or outgoing, derived from the provider type code
//! - [`DeviceInfo`] - A device listed by the bridge tool

pub mod device;
pub mod message;

pub use device::DeviceInfo;
pub use message::{Direction, MessageRecord};
