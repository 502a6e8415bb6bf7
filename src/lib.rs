// src/lib.rs
//! Toksight - a terminal client for a token-analysis service.
//!
//! This library provides the state machines, the backend API client, and
//! the terminal interface for the toksight browser.

pub mod api;
pub mod app;
pub mod config;
pub mod fs;
pub mod ui;
