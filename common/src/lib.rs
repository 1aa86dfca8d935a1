//! Shared model and client-side logic for the volunteer hub.
//!
//! Everything here is platform independent: the browser frontend plugs in a
//! `gloo-net` transport and a `localStorage` session store, tests plug in a
//! recording transport and [`session::MemoryStore`].

pub mod api;
pub mod board;
pub mod community;
pub mod config;
pub mod error;
pub mod filter;
pub mod model;
pub mod notice;
pub mod session;
