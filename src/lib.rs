//! Questify - Schema-bound AI travel flows
//!
//! This crate implements the contract layer of a travel planning app:
//! typed flows that ask a hosted model for travel data in a fixed JSON
//! shape, the anonymized trip telemetry stub, and live trip tracking.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
