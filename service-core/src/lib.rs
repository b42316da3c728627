//! service-core: Shared infrastructure for the travel-plan service.
pub mod config;
pub mod error;
pub mod middleware;
pub mod observability;
