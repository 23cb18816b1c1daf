//! API models for request and response payloads
//!
//! Incoming JSON is loosely typed; every endpoint has an explicit request
//! shape with optional fields so that missing or mistyped data is rejected
//! by the validation layer with a clear message instead of a bare
//! deserialization failure. The wire format uses camelCase field names.

pub mod delivery;
pub mod product;
pub mod user;

pub use delivery::{CreateDeliveryRequest, Delivery, DeliveryStatus, UpdateDeliveryRequest};
pub use product::{CreateProductRequest, NewProduct, Product, UpdateProductRequest};
pub use user::{CreateUserRequest, NewUser, UpdateUserRequest, User};
