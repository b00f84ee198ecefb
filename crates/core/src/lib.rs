//! Domain core of the gacha backend: catalog items, pools and their range
//! tables, roll resolution, inventories and the store traits the roll
//! service runs on. No I/O happens here.

pub mod error;
pub mod inventory;
pub mod item;
pub mod memory;
pub mod pool;
pub mod roles;
pub mod roll;
pub mod service;
pub mod store;
pub mod types;
