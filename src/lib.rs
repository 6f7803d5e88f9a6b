// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! FitTrack: session-authenticated fitness tracking API.
//!
//! This crate provides the backend for registering users, logging workouts,
//! and serving computed statistics (calories burned, BMI/BMR, weekly
//! summaries, diet guidance). All state is held in process memory.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;
pub mod time_utils;

use config::Config;
use store::MemoryStore;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub store: MemoryStore,
}
