//! Payroll calculation engine for Mexican labor law (LFT)
//!
//! This crate computes weekly pay with overtime, the year-end aguinaldo bonus
//! and the finiquito termination settlement, converts between salary units and
//! renders amounts as locale-aware currency strings. Every monetary result is
//! rounded to two decimal places, half away from zero, field by field.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod format;
pub mod models;
