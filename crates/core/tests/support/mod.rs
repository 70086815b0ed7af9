//! Shared test helpers for `meetline-core` integration tests.
//!
//! Lightweight in-memory port implementations so pipeline tests can focus on
//! behaviour instead of boilerplate.

#![allow(dead_code)]

pub mod model;
pub mod notification;
pub mod calendar;
