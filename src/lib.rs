//! # Recipe Finder
//!
//! Matches the ingredients a user has on hand against a recipe catalog,
//! scores each recipe by ingredient coverage and filters by cuisine, dietary
//! restriction and cooking method. The engine lives in [`services`]; [`api`]
//! exposes it over HTTP.

pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod services;
