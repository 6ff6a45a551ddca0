// src/lib.rs
pub mod config;
pub mod console;
pub mod error;
pub mod message;
pub mod persona;
pub mod routes;
pub mod services;
pub mod state;
pub mod telemetry;
