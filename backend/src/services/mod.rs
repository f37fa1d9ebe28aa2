//! HTTP surface of the heritage hub.
//!
//! Each sub-module owns one path prefix and exposes `configure_routes()`,
//! which `main.rs` mounts on the `App`:
//!
//! - `location`: `/api/location`, the three ways of acquiring a location fix.
//! - `contributions`: `/api/contributions`, submitting and browsing.
//! - `temples`: `/api/temples`, temple search and temple media.
//! - `map`: `/api/map`, every located row for the map view.
//! - `stats`: `/api/stats`, aggregate counts.
//!
//! `upload` and `download` hold the multipart reader and the file response
//! shared by the contribution and temple media endpoints.

pub mod contributions;
pub mod location;
pub mod map;
pub mod stats;
pub mod temples;

mod download;
mod upload;
