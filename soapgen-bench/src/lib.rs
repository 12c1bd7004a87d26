//! # soapgen bench
//!
//! Synthetic models and helpers for soapgen performance testing.

pub mod models;
pub mod throughput;
