//! # askboard
//!
//! Leptos + WASM frontend for the company research assistant. Two
//! single-page views: a chat console talking to the agent backend, and a
//! company description lookup. The backend runs separately on
//! `http://localhost:8000`; this crate is presentation and request wiring
//! only.
//!
//! State models live in `state` as plain structs so they test natively;
//! components wrap them in `RwSignal` contexts. Browser-only networking
//! is gated behind the `hydrate` feature.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
