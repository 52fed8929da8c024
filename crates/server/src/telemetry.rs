use axum::{body::Body, http::Request, response::Response};
use opentelemetry::{
    global,
    trace::{SpanKind, TraceContextExt, Tracer},
    Context, KeyValue,
};
use opentelemetry_otlp::{WithExportConfig, WithTonicConfig};
use std::{
    future::Future,
    pin::Pin,
    sync::OnceLock,
    task::{Context as TaskContext, Poll},
};
use tower::{Layer, Service};

use crate::auth::jwt::Claims;

const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
const TRACER_NAME: &str = "vitacore";

/// Keep the LoggerProvider alive for the process lifetime.
static LOGGER_PROVIDER: OnceLock<opentelemetry_sdk::logs::SdkLoggerProvider> = OnceLock::new();

/// Tokio runtime for the OTLP gRPC exporters. Tonic's `connect_lazy()` calls
/// `tokio::spawn`, and the serve closure may run before a runtime context
/// is entered.
static OTEL_RUNTIME: OnceLock<tokio::runtime::Runtime> = OnceLock::new();

/// Exporter settings read from the environment.
#[derive(Debug, Clone, PartialEq)]
struct OtlpSettings {
    endpoint: String,
    service_name: String,
    environment: String,
}

impl OtlpSettings {
    fn from_env() -> Option<Self> {
        let endpoint = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
            .ok()
            .filter(|e| !e.is_empty())?;
        Some(Self {
            endpoint,
            service_name: std::env::var("OTEL_SERVICE_NAME")
                .unwrap_or_else(|_| "vitacore-cms".to_string()),
            environment: std::env::var("DEPLOY_ENV")
                .unwrap_or_else(|_| "development".to_string()),
        })
    }

    fn uses_tls(&self) -> bool {
        self.endpoint.starts_with("https://")
    }
}

/// Set up the OpenTelemetry trace and log exporters.
///
/// Dioxus owns the tracing subscriber; this only registers the global
/// tracer provider (for `OtelTraceLayer` spans) and bridges the `log` crate.
///
/// Reads `OTEL_EXPORTER_OTLP_ENDPOINT`, `OTEL_SERVICE_NAME` and `DEPLOY_ENV`.
/// Does nothing when no endpoint is configured.
pub fn init_telemetry() {
    let _ = dotenvy::dotenv();

    let Some(settings) = OtlpSettings::from_env() else {
        tracing::info!("OTEL_EXPORTER_OTLP_ENDPOINT not set, skipping OTLP telemetry");
        return;
    };

    let rt = match OTEL_RUNTIME.get() {
        Some(rt) => rt,
        None => match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .worker_threads(1)
            .build()
        {
            Ok(rt) => OTEL_RUNTIME.get_or_init(|| rt),
            Err(e) => {
                tracing::error!(%e, "Failed to create OTEL runtime");
                return;
            }
        },
    };
    let _guard = rt.enter();

    if let Err(e) = install_exporters(&settings) {
        tracing::error!(%e, "Telemetry disabled");
        return;
    }

    tracing::info!(
        endpoint = %settings.endpoint,
        "Telemetry initialized v{APP_VERSION}"
    );
}

fn install_exporters(settings: &OtlpSettings) -> Result<(), Box<dyn std::error::Error>> {
    let mut span_builder = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(&settings.endpoint);
    if settings.uses_tls() {
        span_builder = span_builder.with_tls_config(
            opentelemetry_otlp::tonic_types::transport::ClientTlsConfig::new().with_native_roots(),
        );
    }
    let span_exporter = span_builder.build()?;

    let resource = opentelemetry_sdk::Resource::builder()
        .with_service_name(settings.service_name.clone())
        .with_attribute(KeyValue::new("service.version", APP_VERSION))
        .with_attribute(KeyValue::new("deployment.environment", settings.environment.clone()))
        .build();

    let provider = opentelemetry_sdk::trace::SdkTracerProvider::builder()
        .with_batch_exporter(span_exporter)
        .with_resource(resource.clone())
        .build();
    global::set_tracer_provider(provider);

    // Log exporter (fed by the `log` crate, separate from the tracing subscriber)
    let mut log_builder = opentelemetry_otlp::LogExporter::builder()
        .with_tonic()
        .with_endpoint(&settings.endpoint);
    if settings.uses_tls() {
        log_builder = log_builder.with_tls_config(
            opentelemetry_otlp::tonic_types::transport::ClientTlsConfig::new().with_native_roots(),
        );
    }
    let log_exporter = log_builder.build()?;

    let logger_provider = LOGGER_PROVIDER.get_or_init(|| {
        opentelemetry_sdk::logs::SdkLoggerProvider::builder()
            .with_batch_exporter(log_exporter)
            .with_resource(resource)
            .build()
    });

    let bridge = opentelemetry_appender_log::OpenTelemetryLogBridge::new(logger_provider);
    match log::set_boxed_logger(Box::new(bridge)) {
        Ok(()) => log::set_max_level(log::LevelFilter::Info),
        Err(_) => tracing::warn!("Log bridge skipped, a `log` logger is already set"),
    }

    Ok(())
}

/// Tower layer that creates an OpenTelemetry span for each HTTP request.
///
/// Captures method, path, request ID, response status, and the signed-in
/// account when the session middleware has run.
#[derive(Clone)]
pub struct OtelTraceLayer;

impl<S> Layer<S> for OtelTraceLayer {
    type Service = OtelTraceService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        OtelTraceService { inner }
    }
}

#[derive(Clone)]
pub struct OtelTraceService<S> {
    inner: S,
}

fn request_attributes(req: &Request<Body>) -> Vec<KeyValue> {
    let request_id = req
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();

    let mut attributes = vec![
        KeyValue::new("http.method", req.method().to_string()),
        KeyValue::new("http.target", req.uri().path().to_string()),
        KeyValue::new("http.request_id", request_id),
    ];

    match req.extensions().get::<Claims>() {
        Some(claims) => {
            attributes.push(KeyValue::new("user.id", claims.sub.clone()));
            attributes.push(KeyValue::new("auth.status", "authenticated"));
        }
        None => attributes.push(KeyValue::new("auth.status", "anonymous")),
    }

    attributes
}

impl<S> Service<Request<Body>> for OtelTraceService<S>
where
    S: Service<Request<Body>, Response = Response> + Send + Clone + 'static,
    S::Future: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut TaskContext<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let tracer = global::tracer(TRACER_NAME);
        let name = format!("{} {}", req.method(), req.uri().path());

        let span = tracer
            .span_builder(name)
            .with_kind(SpanKind::Server)
            .with_attributes(request_attributes(&req))
            .start(&tracer);

        let cx = Context::current_with_span(span);
        let mut inner = self.inner.clone();

        let guard = cx.clone().attach();
        let future = inner.call(req);
        drop(guard);

        Box::pin(async move {
            let response = future.await?;

            let span = cx.span();
            let status = response.status();
            span.set_attribute(KeyValue::new("http.status_code", status.as_u16() as i64));
            if status.is_server_error() {
                span.set_status(opentelemetry::trace::Status::error(status.to_string()));
            }

            Ok(response)
        })
    }
}
