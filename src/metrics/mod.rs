//! Basic metrics instrumentation for the contact relay.
//!
//! Provides counters and duration tracking for outbound provider calls and
//! for submission outcomes.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Metrics collector shared by the provider clients and the contact service.
#[derive(Debug, Clone)]
pub struct Metrics {
    /// Total number of outbound HTTP requests made
    http_requests_total: Arc<AtomicU64>,

    /// Total number of outbound HTTP errors
    http_errors_total: Arc<AtomicU64>,

    /// Total number of outbound requests that timed out
    http_timeouts_total: Arc<AtomicU64>,

    /// Total duration of all outbound requests in milliseconds
    http_duration_total_ms: Arc<AtomicU64>,

    captcha_passed_total: Arc<AtomicU64>,
    captcha_rejected_total: Arc<AtomicU64>,
    emails_sent_total: Arc<AtomicU64>,
    emails_failed_total: Arc<AtomicU64>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    /// Create a new metrics collector.
    pub fn new() -> Self {
        Self {
            http_requests_total: Arc::new(AtomicU64::new(0)),
            http_errors_total: Arc::new(AtomicU64::new(0)),
            http_timeouts_total: Arc::new(AtomicU64::new(0)),
            http_duration_total_ms: Arc::new(AtomicU64::new(0)),
            captcha_passed_total: Arc::new(AtomicU64::new(0)),
            captcha_rejected_total: Arc::new(AtomicU64::new(0)),
            emails_sent_total: Arc::new(AtomicU64::new(0)),
            emails_failed_total: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Record an outbound HTTP request with duration.
    pub fn record_http_request(&self, duration: Duration) {
        self.http_requests_total.fetch_add(1, Ordering::Relaxed);
        self.http_duration_total_ms
            .fetch_add(duration.as_millis() as u64, Ordering::Relaxed);
    }

    /// Record an outbound HTTP error.
    pub fn record_http_error(&self) {
        self.http_errors_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record an outbound HTTP timeout. Timeouts also count as errors.
    pub fn record_http_timeout(&self) {
        self.http_timeouts_total.fetch_add(1, Ordering::Relaxed);
        self.record_http_error();
    }

    /// Record the verdict of one CAPTCHA verification.
    pub fn record_captcha(&self, passed: bool) {
        let counter = if passed {
            &self.captcha_passed_total
        } else {
            &self.captcha_rejected_total
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Record the outcome of one email send.
    pub fn record_email(&self, sent: bool) {
        let counter = if sent {
            &self.emails_sent_total
        } else {
            &self.emails_failed_total
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn http_requests_total(&self) -> u64 {
        self.http_requests_total.load(Ordering::Relaxed)
    }

    pub fn http_errors_total(&self) -> u64 {
        self.http_errors_total.load(Ordering::Relaxed)
    }

    pub fn http_timeouts_total(&self) -> u64 {
        self.http_timeouts_total.load(Ordering::Relaxed)
    }

    pub fn http_duration_total_ms(&self) -> u64 {
        self.http_duration_total_ms.load(Ordering::Relaxed)
    }

    /// Get average outbound request duration in milliseconds.
    pub fn http_duration_avg_ms(&self) -> f64 {
        let total = self.http_duration_total_ms.load(Ordering::Relaxed);
        let count = self.http_requests_total.load(Ordering::Relaxed);
        if count == 0 {
            0.0
        } else {
            total as f64 / count as f64
        }
    }

    pub fn captcha_passed_total(&self) -> u64 {
        self.captcha_passed_total.load(Ordering::Relaxed)
    }

    pub fn captcha_rejected_total(&self) -> u64 {
        self.captcha_rejected_total.load(Ordering::Relaxed)
    }

    pub fn emails_sent_total(&self) -> u64 {
        self.emails_sent_total.load(Ordering::Relaxed)
    }

    pub fn emails_failed_total(&self) -> u64 {
        self.emails_failed_total.load(Ordering::Relaxed)
    }

    /// Reset all metrics to zero.
    pub fn reset(&self) {
        for counter in [
            &self.http_requests_total,
            &self.http_errors_total,
            &self.http_timeouts_total,
            &self.http_duration_total_ms,
            &self.captcha_passed_total,
            &self.captcha_rejected_total,
            &self.emails_sent_total,
            &self.emails_failed_total,
        ] {
            counter.store(0, Ordering::Relaxed);
        }
    }

    /// Get a summary of all metrics.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            http_requests_total: self.http_requests_total(),
            http_errors_total: self.http_errors_total(),
            http_timeouts_total: self.http_timeouts_total(),
            http_duration_total_ms: self.http_duration_total_ms(),
            http_duration_avg_ms: self.http_duration_avg_ms(),
            captcha_passed_total: self.captcha_passed_total(),
            captcha_rejected_total: self.captcha_rejected_total(),
            emails_sent_total: self.emails_sent_total(),
            emails_failed_total: self.emails_failed_total(),
        }
    }
}

/// A snapshot of metrics values.
#[derive(Debug, Clone)]
pub struct MetricsSummary {
    pub http_requests_total: u64,
    pub http_errors_total: u64,
    pub http_timeouts_total: u64,
    pub http_duration_total_ms: u64,
    pub http_duration_avg_ms: f64,
    pub captcha_passed_total: u64,
    pub captcha_rejected_total: u64,
    pub emails_sent_total: u64,
    pub emails_failed_total: u64,
}

/// Helper for timing outbound HTTP requests.
pub struct HttpTimer {
    start: Instant,
    metrics: Metrics,
}

impl HttpTimer {
    /// Start timing an HTTP request.
    pub fn new(metrics: Metrics) -> Self {
        Self {
            start: Instant::now(),
            metrics,
        }
    }

    /// Complete the timing and record the duration.
    pub fn complete(self) {
        self.metrics.record_http_request(self.start.elapsed());
    }

    /// Complete the timing and record as an error.
    pub fn complete_with_error(self) {
        self.metrics.record_http_request(self.start.elapsed());
        self.metrics.record_http_error();
    }

    /// Complete the timing and record as a timeout.
    pub fn complete_with_timeout(self) {
        self.metrics.record_http_request(self.start.elapsed());
        self.metrics.record_http_timeout();
    }
}
