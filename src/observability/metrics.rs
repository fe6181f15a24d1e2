//! Metrics collection.
//!
//! # Metrics
//! - `route_registry_registrations_total` (counter): routes added, by method
//! - `route_registry_duplicates_total` (counter): rejected registrations, by method
//! - `route_registry_lookups_total` (counter): lookups by method and outcome
//!   (`exact`, `param`, `not_found`)
//!
//! # Design Decisions
//! - Emitted through the `metrics` facade; no-ops until a recorder is installed

use metrics::counter;

use crate::routing::Method;

pub fn record_registration(method: Method) {
    counter!("route_registry_registrations_total", "method" => method.as_str()).increment(1);
}

pub fn record_duplicate(method: Method) {
    counter!("route_registry_duplicates_total", "method" => method.as_str()).increment(1);
}

pub fn record_lookup(method: Method, outcome: &'static str) {
    counter!(
        "route_registry_lookups_total",
        "method" => method.as_str(),
        "outcome" => outcome
    )
    .increment(1);
}
