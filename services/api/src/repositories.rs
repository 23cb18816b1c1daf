//! Repositories for database operations
//!
//! One repository per entity, each a thin `Clone` handle over the shared
//! connection pool. Uniqueness of `users.email` and `deliveries.tracking_id`
//! is enforced by unique indexes; the repositories translate a unique-index
//! violation into the corresponding duplicate-field error.

pub mod delivery;
pub mod product;
pub mod user;

pub use delivery::DeliveryRepository;
pub use product::ProductRepository;
pub use user::UserRepository;

/// Fixed cap applied to every list endpoint
pub const LIST_LIMIT: i64 = 200;
