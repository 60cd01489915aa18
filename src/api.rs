//! Tokened request/response layer.
//!
//! Maps a raw request (token and sensor id as the router extracted them from
//! the query string) to a JSON body. Error signaling is in-body only; the
//! router always answers HTTP 200, so `handle_request` is infallible and
//! always hands back a servable string.

use core::fmt::Write;

use crate::cache::SensorTable;
use crate::config::StationConfig;
use crate::error::StationError;
use crate::query::{Snapshot, snapshot};
use crate::sensor::SensorId;
use crate::token::TokenGuard;

/// JSON response body buffer.
pub type JsonResponse = heapless::String<128>; // TODO: Use C::MAX_RESPONSE when const generics stabilize

/// Process one read request and produce the JSON body to serve.
///
/// `token` and `id` are `None` when the router found no such query
/// parameter. Checks run in the original firmware's order: token first, then
/// id presence, then id validity, then sensor availability.
pub fn handle_request<C: StationConfig, const N: usize>(
    table: &SensorTable<C, N>,
    guard: &TokenGuard,
    token: Option<&str>,
    id: Option<&str>,
) -> JsonResponse {
    match process(table, guard, token, id) {
        Ok(body) => body,
        Err(err) => error_body(err),
    }
}

fn process<C: StationConfig, const N: usize>(
    table: &SensorTable<C, N>,
    guard: &TokenGuard,
    token: Option<&str>,
    id: Option<&str>,
) -> Result<JsonResponse, StationError> {
    let token = token.ok_or(StationError::AuthFailure)?;
    if !guard.verify(token) {
        return Err(StationError::AuthFailure);
    }

    let raw_id = id.ok_or(StationError::MissingId)?;
    let id = parse_id::<N>(raw_id).ok_or(StationError::InvalidId)?;

    let snap = snapshot(table, id).ok_or(StationError::SensorUnavailable)?;
    Ok(success_body(id, &snap))
}

/// Parse the 1-based wire id. Only the exact digit form is accepted;
/// signs, leading zeros, and non-numeric input are all the same caller
/// mistake as an out-of-range number.
fn parse_id<const N: usize>(raw: &str) -> Option<SensorId<N>> {
    if raw.is_empty() || raw.starts_with('0') || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse::<u32>().ok().and_then(SensorId::from_external)
}

/// `{"error":true,"message":"..."}`
pub fn error_body(err: StationError) -> JsonResponse {
    let mut body = JsonResponse::new();
    // Messages are short constants; the buffer cannot overflow
    let _ = write!(body, "{{\"error\":true,\"message\":\"{}\"}}", err.message());
    body
}

/// `{"id":<1-based>,"h":<%.2>,"t":<%.2>,"hic":<%.2>}`
pub fn success_body<const N: usize>(id: SensorId<N>, snap: &Snapshot) -> JsonResponse {
    let mut body = JsonResponse::new();
    let _ = write!(
        body,
        "{{\"id\":{},\"h\":{:.2},\"t\":{:.2},\"hic\":{:.2}}}",
        id.external(),
        snap.humidity,
        snap.temperature,
        snap.heat_index
    );
    body
}
