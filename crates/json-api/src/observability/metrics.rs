//! Prometheus metrics collection and exposition endpoint.

use std::sync::OnceLock;

use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounter, IntCounterVec, IntGauge, Opts, Registry,
    TextEncoder, core::Collector,
};
use salvo::{
    Request, Response, handler,
    http::{
        StatusCode,
        header::{CONTENT_TYPE, HeaderValue},
    },
};
use tracing::error;

const DURATION_BUCKETS: [f64; 13] = [
    0.001, 0.0025, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
];

#[derive(Debug)]
struct HttpMetrics {
    registry: Registry,
    requests_total: IntCounterVec,
    request_duration_seconds: HistogramVec,
    requests_in_flight: IntGauge,
    exported_rows_total: IntCounter,
}

static HTTP_METRICS: OnceLock<Option<HttpMetrics>> = OnceLock::new();

/// Keeps the in-flight gauge raised for as long as it is alive.
#[derive(Debug)]
pub(super) struct InFlightRequestGuard {
    tracked: bool,
}

impl InFlightRequestGuard {
    pub(super) fn track() -> Self {
        let Some(metrics) = metrics() else {
            return Self { tracked: false };
        };

        metrics.requests_in_flight.inc();

        Self { tracked: true }
    }
}

impl Drop for InFlightRequestGuard {
    fn drop(&mut self) {
        if self.tracked
            && let Some(metrics) = metrics()
        {
            metrics.requests_in_flight.dec();
        }
    }
}

pub(super) fn observe_request(method: &str, route: &str, status_code: u16, duration_seconds: f64) {
    let Some(metrics) = metrics() else {
        return;
    };

    let status_code_label = status_code.to_string();

    metrics
        .requests_total
        .with_label_values(&[
            method,
            route,
            status_class(status_code),
            status_code_label.as_str(),
        ])
        .inc();

    metrics
        .request_duration_seconds
        .with_label_values(&[method, route])
        .observe(duration_seconds);
}

/// Count rows written to spreadsheet exports.
pub(crate) fn record_exported_rows(rows: usize) {
    let Some(metrics) = metrics() else {
        return;
    };

    metrics
        .exported_rows_total
        .inc_by(u64::try_from(rows).unwrap_or(u64::MAX));
}

#[handler]
pub(crate) async fn metrics_handler(_req: &mut Request, res: &mut Response) {
    let Some(metrics) = metrics() else {
        res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
        return;
    };

    let encoder = TextEncoder::new();
    let mut encoded = Vec::new();

    if let Err(source) = encoder.encode(&metrics.registry.gather(), &mut encoded) {
        error!("failed to encode metrics response: {source}");
        res.status_code(StatusCode::INTERNAL_SERVER_ERROR);

        return;
    }

    match HeaderValue::from_str(encoder.format_type()) {
        Ok(content_type) => {
            res.headers_mut().insert(CONTENT_TYPE, content_type);
        }
        Err(source) => {
            error!("failed to encode metrics content type header: {source}");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);

            return;
        }
    }

    res.render(String::from_utf8_lossy(&encoded).into_owned());
}

fn metrics() -> Option<&'static HttpMetrics> {
    HTTP_METRICS.get_or_init(build_metrics).as_ref()
}

fn register<M>(registry: &Registry, name: &str, metric: Result<M, prometheus::Error>) -> Option<M>
where
    M: Collector + Clone + 'static,
{
    let metric = match metric {
        Ok(metric) => metric,
        Err(source) => {
            error!("failed to create {name} metric: {source}");
            return None;
        }
    };

    if let Err(source) = registry.register(Box::new(metric.clone())) {
        error!("failed to register {name} metric: {source}");
        return None;
    }

    Some(metric)
}

fn build_metrics() -> Option<HttpMetrics> {
    let registry = Registry::new();

    let requests_total = register(
        &registry,
        "requests_total",
        IntCounterVec::new(
            Opts::new(
                "pricebook_json_http_requests_total",
                "Total HTTP requests partitioned by method, route, status class, and status code.",
            ),
            &["method", "route", "status_class", "status_code"],
        ),
    )?;

    let request_duration_seconds = register(
        &registry,
        "request_duration",
        HistogramVec::new(
            HistogramOpts::new(
                "pricebook_json_http_request_duration_seconds",
                "HTTP request duration in seconds partitioned by method and route.",
            )
            .buckets(DURATION_BUCKETS.to_vec()),
            &["method", "route"],
        ),
    )?;

    let requests_in_flight = register(
        &registry,
        "in-flight gauge",
        IntGauge::with_opts(Opts::new(
            "pricebook_json_http_requests_in_flight",
            "Current number of in-flight HTTP requests.",
        )),
    )?;

    let exported_rows_total = register(
        &registry,
        "exported_rows_total",
        IntCounter::with_opts(Opts::new(
            "pricebook_json_exported_rows_total",
            "Price log rows written to spreadsheet exports.",
        )),
    )?;

    Some(HttpMetrics {
        registry,
        requests_total,
        request_duration_seconds,
        requests_in_flight,
        exported_rows_total,
    })
}

fn status_class(status_code: u16) -> &'static str {
    match status_code {
        100..=199 => "1xx",
        200..=299 => "2xx",
        300..=399 => "3xx",
        400..=499 => "4xx",
        500..=599 => "5xx",
        _ => "other",
    }
}

#[cfg(test)]
mod tests {
    use salvo::{
        Router, Service,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;

    use super::*;

    #[tokio::test]
    async fn metrics_endpoint_exposes_http_and_export_metrics() -> TestResult {
        observe_request("GET", "/price-logs", 200, 0.042);
        observe_request("GET", "/exports/price-logs.xlsx", 500, 0.123);
        record_exported_rows(3);

        let service =
            Service::new(Router::new().push(Router::with_path("metrics").get(metrics_handler)));

        let response = TestClient::get("http://example.com/metrics")
            .send(&service)
            .await
            .take_string()
            .await?;

        for name in [
            "pricebook_json_http_requests_total",
            "pricebook_json_http_request_duration_seconds",
            "pricebook_json_http_requests_in_flight",
            "pricebook_json_exported_rows_total",
        ] {
            assert!(response.contains(name), "expected {name} in response");
        }

        Ok(())
    }

    #[test]
    fn status_codes_are_grouped_by_class() {
        assert_eq!(status_class(204), "2xx");
        assert_eq!(status_class(403), "4xx");
        assert_eq!(status_class(503), "5xx");
        assert_eq!(status_class(42), "other");
    }
}
