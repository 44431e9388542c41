use opentelemetry::{
    global,
    metrics::{Counter, Histogram, Meter},
};
use std::sync::LazyLock;

pub static METER: LazyLock<Meter> = LazyLock::new(|| global::meter("seo-audit-service"));

// --- Domain Metrics ---

pub static AUDITS_CREATED: LazyLock<Counter<u64>> = LazyLock::new(|| {
    METER
        .u64_counter("audits.created")
        .with_description("Total audits generated and stored")
        .with_unit("{audit}")
        .build()
});

pub static AUDIT_VALIDATION_FAILURES: LazyLock<Counter<u64>> = LazyLock::new(|| {
    METER
        .u64_counter("audits.validation_failures")
        .with_description("Audit submissions rejected by intake validation")
        .with_unit("{submission}")
        .build()
});

pub static AUDIT_GENERATION_DURATION: LazyLock<Histogram<f64>> = LazyLock::new(|| {
    METER
        .f64_histogram("audit.generation.duration")
        .with_description("Time to generate and persist an audit in seconds")
        .with_unit("s")
        .build()
});

pub static AUDIT_FINDINGS: LazyLock<Histogram<f64>> = LazyLock::new(|| {
    METER
        .f64_histogram("audit.findings")
        .with_description("Number of SEO issues and opportunity gaps per audit")
        .with_unit("{finding}")
        .build()
});

// --- HTTP Metrics ---

pub static HTTP_REQUESTS_TOTAL: LazyLock<Counter<u64>> = LazyLock::new(|| {
    METER
        .u64_counter("http.requests.total")
        .with_description("Total number of HTTP requests")
        .with_unit("{request}")
        .build()
});

pub static HTTP_REQUEST_DURATION: LazyLock<Histogram<f64>> = LazyLock::new(|| {
    METER
        .f64_histogram("http.request.duration")
        .with_description("HTTP request duration in milliseconds")
        .with_unit("ms")
        .with_boundaries(vec![
            1.0, 5.0, 10.0, 25.0, 50.0, 100.0, 250.0, 500.0, 1000.0, 2500.0, 5000.0, 10000.0,
        ])
        .build()
});
