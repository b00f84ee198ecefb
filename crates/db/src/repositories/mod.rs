//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod inventory_slot_repo;
pub mod item_pool_repo;
pub mod item_repo;
pub mod user_repo;

pub use inventory_slot_repo::InventorySlotRepo;
pub use item_pool_repo::ItemPoolRepo;
pub use item_repo::ItemRepo;
pub use user_repo::UserRepo;
