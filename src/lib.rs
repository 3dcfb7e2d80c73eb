//! Customer review service for a fixed set of store locations.
//!
//! Reviews live in an append-only in-memory [`store::ReviewStore`], seeded
//! from CSV at startup. `GET /` filters them by location and date window and
//! ranks them by sentiment; `POST /` appends a new review for a known
//! location.

pub mod api;
pub mod config;
pub mod engine;
pub mod error;
pub mod filter;
pub mod models;
pub mod sentiment;
pub mod store;
