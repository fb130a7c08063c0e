//! Weather-aware outfit recommendation service.
//!
//! The engine (`services`) is a pure computation: it scores wardrobe items
//! against a normalized weather context, picks one item per clothing
//! category, and falls back to a random in-category draw when nothing scores
//! acceptably. The `api` module wraps it in a small HTTP surface for the
//! attribute catalog, the wardrobe, and recommendation requests.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
