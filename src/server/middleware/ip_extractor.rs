use axum::{
    extract::{ConnectInfo, Request},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use std::net::{IpAddr, SocketAddr};
use tracing::info;

/// Extension key for the extracted client address
#[derive(Clone, Copy, Debug)]
pub struct ClientIp(pub IpAddr);

/// Resolves the client address for a request.
///
/// Priority:
/// 1. X-Forwarded-For header (requests through proxies, first entry)
/// 2. X-Real-IP header (Nginx)
/// 3. Socket peer address (direct connection)
///
/// An unparseable header falls through to the next source.
fn resolve_client_ip(headers: &HeaderMap, peer: SocketAddr) -> IpAddr {
    let forwarded = headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .and_then(|v| v.trim().parse::<IpAddr>().ok());

    let real_ip = headers
        .get("x-real-ip")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<IpAddr>().ok());

    forwarded.or(real_ip).unwrap_or_else(|| peer.ip())
}

/// Middleware that logs the client address of every incoming request and
/// stashes it in the request extensions for the `ip` resolver.
///
/// Logging only; the request itself passes through unchanged.
pub async fn extract_client_ip(
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    mut request: Request,
    next: Next,
) -> Response {
    let ip = resolve_client_ip(request.headers(), addr);

    info!("ip: {}", ip);
    request.extensions_mut().insert(ClientIp(ip));

    next.run(request).await
}
