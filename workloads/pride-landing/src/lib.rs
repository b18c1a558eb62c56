//! Pride & Purpose storefront - Spin HTTP component.
//!
//! This workload serves:
//! - The landing page and legal pages, streamed shell-first
//! - A 404 page for unknown paths, 405 with `Allow` for wrong methods
//! - `POST /api/cart`, the add-to-cart form endpoint

mod cart;

use anyhow::{anyhow, Context, Result};
use futures::SinkExt;
use http::StatusCode;
use spin_sdk::http::{Fields, IncomingRequest, Method, OutgoingResponse, ResponseOutparam};
use spin_sdk::http_component;

use storefront_commerce::catalog::Catalog;
use storefront_core::{PageError, RequestContext, Route, SiteConfig};
use storefront_observability::{LogBuilder, LogFormat, StructuredLogger};
use storefront_site::{RenderedPage, Site};
use storefront_streaming::StreamingSink;

use cart::{add_to_cart, LoggingCartNotifier};

/// Site settings embedded at build time.
const SITE_TOML: &str = include_str!("../site.toml");

/// Storefront handler.
#[http_component]
async fn handle_storefront(req: IncomingRequest, response_out: ResponseOutparam) {
    let path = req.path_with_query().unwrap_or_default();
    let method = http_method(req.method());
    let ctx = RequestContext::new(method.clone().unwrap_or_default(), &path);

    let logger = StructuredLogger::new(ctx.request_id.clone()).with_format(LogFormat::Json);

    let site = match load_site(&logger) {
        Ok(site) => site,
        Err(e) => {
            failure_log(&logger, "Site failed to load", &e).emit();
            let err = PageError::Config(e.to_string());
            if let Err(e) = send_error(response_out, &ctx, &err).await {
                failure_log(&logger, "Error response failed", &e).emit();
            }
            return;
        }
    };

    let route = method.and_then(|m| Route::resolve(&m, &ctx.path));
    let logger = logger
        .with_site(site.config().brand.clone())
        .with_route(route.as_ref().map(Route::name).unwrap_or("unmatched"));

    let head_only = ctx.method == http::Method::HEAD;
    let outcome = match route {
        Ok(Route::AddToCart) => handle_cart(req, response_out, &site, &ctx, &logger).await,
        Ok(route) => match site.page(route) {
            Ok(page) => {
                stream_page(response_out, &page, StatusCode::OK, &ctx, head_only, &logger).await
            }
            Err(e) => send_error(response_out, &ctx, &e).await,
        },
        Err(PageError::NotFound(path)) => {
            let page = site.not_found(&path);
            stream_page(response_out, &page, StatusCode::NOT_FOUND, &ctx, head_only, &logger)
                .await
        }
        Err(e) => {
            logger
                .warn_builder("Request rejected")
                .field("method", ctx.method.as_str())
                .field("path", ctx.path.clone())
                .field_i64("status", i64::from(e.status().as_u16()))
                .emit();
            send_error(response_out, &ctx, &e).await
        }
    };

    if let Err(e) = outcome {
        failure_log(&logger, "Request failed", &e).emit();
    }
}

/// Error record carrying the full cause chain.
fn failure_log<'a>(
    logger: &'a StructuredLogger,
    message: &str,
    err: &anyhow::Error,
) -> LogBuilder<'a> {
    logger
        .error_builder(message)
        .field("error", format!("{:#}", err))
}

/// Build the site from the embedded config and the sample catalog.
///
/// A config that fails to parse is logged and replaced by the defaults.
fn load_site(logger: &StructuredLogger) -> Result<Site> {
    let config = SiteConfig::from_toml_str(SITE_TOML).unwrap_or_else(|e| {
        logger
            .warn_builder("Embedded site.toml rejected, using defaults")
            .field("error", e.to_string())
            .emit();
        SiteConfig::default()
    });

    Site::new(config, Catalog::sample()).context("building site")
}

fn http_method(method: Method) -> Result<http::Method, PageError> {
    Ok(match method {
        Method::Get => http::Method::GET,
        Method::Head => http::Method::HEAD,
        Method::Post => http::Method::POST,
        Method::Put => http::Method::PUT,
        Method::Delete => http::Method::DELETE,
        Method::Connect => http::Method::CONNECT,
        Method::Options => http::Method::OPTIONS,
        Method::Trace => http::Method::TRACE,
        Method::Patch => http::Method::PATCH,
        Method::Other(other) => http::Method::from_bytes(other.as_bytes())
            .map_err(|_| PageError::BadRequest(format!("invalid method {:?}", other)))?,
    })
}

fn build_response(status: StatusCode, headers: &[(&str, String)]) -> Result<OutgoingResponse> {
    let header_list: Vec<(String, Vec<u8>)> = headers
        .iter()
        .map(|(name, value)| (name.to_string(), value.clone().into_bytes()))
        .collect();

    let fields =
        Fields::from_list(&header_list).map_err(|e| anyhow!("invalid headers: {:?}", e))?;
    let response = OutgoingResponse::new(fields);
    response
        .set_status_code(status.as_u16())
        .map_err(|_| anyhow!("invalid status code {}", status))?;

    Ok(response)
}

/// Send a short plain-text response.
async fn send_text(
    response_out: ResponseOutparam,
    status: StatusCode,
    headers: Vec<(&str, String)>,
    body: String,
) -> Result<()> {
    let mut all = vec![("content-type", "text/plain; charset=utf-8".to_string())];
    all.extend(headers);

    let response = build_response(status, &all)?;
    let mut out = response.take_body();
    response_out.set(response);

    out.send(body.into_bytes())
        .await
        .map_err(|e| anyhow!("writing response body: {}", e))
}

async fn send_error(response_out: ResponseOutparam, ctx: &RequestContext, err: &PageError) -> Result<()> {
    let mut headers = vec![("x-request-id", ctx.request_id.to_string())];
    if let Some(allow) = err.allow_header() {
        headers.push(("allow", allow.to_string()));
    }

    send_text(response_out, err.status(), headers, err.to_string()).await
}

/// Stream a rendered page: shell first, then each section in order.
async fn stream_page(
    response_out: ResponseOutparam,
    page: &RenderedPage,
    status: StatusCode,
    ctx: &RequestContext,
    head_only: bool,
    logger: &StructuredLogger,
) -> Result<()> {
    let response = build_response(
        status,
        &[
            ("content-type", "text/html; charset=utf-8".to_string()),
            ("x-request-id", ctx.request_id.to_string()),
            (
                "cache-control",
                "public, max-age=300, stale-while-revalidate=60".to_string(),
            ),
        ],
    )?;

    let body = response.take_body();
    response_out.set(response);

    if head_only {
        return Ok(());
    }

    let mut sink = StreamingSink::new(body, ctx.timing.clone());
    sink.stream_page(&page.shell, &page.sections)
        .await
        .context("streaming page")?;

    let mut entry = logger
        .info_builder("Page streamed")
        .field_i64("status", i64::from(status.as_u16()))
        .field_i64("sections", page.sections.len() as i64)
        .field_i64("bytes", sink.bytes_sent() as i64)
        .duration_us("total_us", sink.timing().elapsed());
    if let Some(shell) = sink.timing().time_to_shell() {
        entry = entry.duration_us("time_to_shell_us", shell);
    }
    entry.emit();

    Ok(())
}

async fn handle_cart(
    req: IncomingRequest,
    response_out: ResponseOutparam,
    site: &Site,
    ctx: &RequestContext,
    logger: &StructuredLogger,
) -> Result<()> {
    let body = req
        .into_body()
        .await
        .map_err(|e| anyhow!("reading request body: {:?}", e))?;

    let notifier = LoggingCartNotifier::new(logger);
    let outcome = add_to_cart(site, &body, &notifier);

    logger
        .info_builder("Cart request")
        .field_i64("status", i64::from(outcome.status.as_u16()))
        .field("message", outcome.message.clone())
        .emit();

    let mut headers = vec![("x-request-id", ctx.request_id.to_string())];
    if let Some(location) = outcome.location {
        headers.push(("location", location.to_string()));
    }

    send_text(response_out, outcome.status, headers, outcome.message).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let config = SiteConfig::from_toml_str(SITE_TOML).unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_failure_log_keeps_cause_chain() {
        let logger = StructuredLogger::new(storefront_core::RequestId::from_string("req-err"));
        let err = anyhow!("stream closed").context("writing response body");

        let entry = failure_log(&logger, "Error response failed", &err)
            .build()
            .unwrap();
        assert_eq!(entry.message, "Error response failed");
        assert_eq!(entry.request_id, "req-err");
        assert_eq!(entry.fields["error"], "writing response body: stream closed");
    }

    #[test]
    fn test_http_method() {
        assert_eq!(http_method(Method::Get), Ok(http::Method::GET));
        assert_eq!(http_method(Method::Post), Ok(http::Method::POST));
        assert_eq!(
            http_method(Method::Other("PURGE".to_string())).map(|m| m.to_string()),
            Ok("PURGE".to_string())
        );
        assert!(matches!(
            http_method(Method::Other("BAD METHOD".to_string())),
            Err(PageError::BadRequest(_))
        ));
    }
}
