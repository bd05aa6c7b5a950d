//! Route labels for spans and metrics.

/// Label used when no route pattern was matched.
pub(super) const UNMATCHED_ROUTE: &str = "unmatched";

/// Label a request by the route pattern the router matched, e.g. `/price-logs/{id}`.
///
/// Labels come from the route table rather than the raw path, so metric cardinality
/// stays bounded whatever ids clients send.
pub(super) fn route_label(matched_path: &str) -> String {
    let matched_path = matched_path.trim_matches('/');

    if matched_path.is_empty() {
        return UNMATCHED_ROUTE.to_string();
    }

    format!("/{matched_path}")
}
