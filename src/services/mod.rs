// src/services/mod.rs
pub mod gemini;
pub mod generator;
pub mod responder;
