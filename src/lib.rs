//! PawMatch - Pet Owner / Caregiver Matching Engine
//!
//! This crate implements the relational business-rule engine behind a
//! pet-sitting marketplace: caregiver vetting, live availability, swipe
//! matching, reputation, and messaging over a single authoritative snapshot.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
