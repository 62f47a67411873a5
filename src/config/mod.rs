//! Preference persistence
//!
//! Stores the preferred analysis tool in a small JSON file under the
//! per-user config directory. Reads are lazy and fault-tolerant (warn and
//! fall back to the default); writes merge into the existing file so
//! unrelated keys survive.

pub mod store;

pub use store::ConfigStore;
