/*
 * Responsibility
 * - crate surface for the binary and for black-box tests
 */
pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod services;
pub mod state;
