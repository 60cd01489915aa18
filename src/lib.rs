//! # dht-station
//!
//! Cached multi-sensor temperature/humidity station core for embedded systems.
//!
//! **Key features:**
//! - **Static allocation** - Fixed per-sensor cache table, zero heap usage
//! - **Two-tier freshness policy** - Short refresh interval, long retention window
//! - **All-or-nothing reads** - Consumers never see a partially valid snapshot
//! - **Tokened request layer** - Shared secret stored as SHA-256 digest,
//!   verified in constant time
//! - **Flexible hardware seams** - Platform-agnostic sensor and clock traits
//!
//! The crate owns the caching and staleness logic only. The physical sensor
//! driver, the network stack, request routing, and pixel rendering live in the
//! embedding firmware and talk to this crate through [`SensorSource`],
//! [`Clock`], and the formatted output of [`api`] and [`display`].
//!
//! The intended control flow is a single cooperative loop: service pending
//! requests, call [`Station::tick`] once, redraw the display, sleep for
//! [`StationConfig::POLL_PERIOD_SECS`]. All slot mutation happens inside
//! `tick`; reads happen between iterations.
//!
//! This library is `no_std` compatible.

#![no_std]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

extern crate heapless;

// ============================================================================
// Module Declarations
// ============================================================================

// Platform seams
pub mod clock;
pub mod sensor;

// Configuration
pub mod config;

// Error handling
pub mod error;

// Cache table, derived quantity, and the staleness engine
pub mod cache;

// Read-only snapshot facade
pub mod query;

// Request/response layer and shared-secret check
pub mod api;
pub mod token;

// Display-line formatting
pub mod display;

// Orchestration
pub mod station;

// ============================================================================
// Re-exports - Public API
// ============================================================================

// Platform seams
pub use clock::{Clock, Timestamp};
pub use sensor::{Reading, SensorId, SensorSource};

// Configuration
pub use config::{DefaultConfig, SlowSensorConfig, StationConfig};

// Error types
pub use error::StationError;

// Cache table and staleness engine
pub use cache::heat_index::heat_index;
pub use cache::staleness::{service_all, service_slot};
pub use cache::{SensorSlot, SensorTable, SlotState};

// Query facade
pub use query::{Snapshot, snapshot};

// Request layer
pub use api::{JsonResponse, handle_request};
pub use token::TokenGuard;

// Display formatting
pub use display::{FieldText, LineText, format_humidity, format_line, format_temperature};

// Orchestration
pub use station::Station;

// ============================================================================
// Library Metadata
// ============================================================================

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
