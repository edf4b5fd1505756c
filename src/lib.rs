//! Bank marketing dashboard.
//!
//! Loads a customer table, filters it by job title and balance range, and
//! derives the frequency tables and CSV exports the dashboard renders.

pub mod color;
pub mod config;
pub mod data;
pub mod state;
