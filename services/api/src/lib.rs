//! Delivery tracking API service
//!
//! A CRUD backend for three resources (users, products, deliveries) over
//! PostgreSQL. The delivery resource carries the referential-integrity
//! rules: creation resolves its product and user references and enforces a
//! unique tracking id.

pub mod error;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod tracking;
pub mod validation;
