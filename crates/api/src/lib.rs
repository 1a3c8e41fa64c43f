//! Shipdesk API library.
//!
//! This crate provides the admin API as a library, allowing it to be tested
//! and reused.
//!
//! # Security
//!
//! This service manages user balances and carrier permissions. Only deploy
//! behind the VPN; there is no tenant isolation beyond the admin role.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
