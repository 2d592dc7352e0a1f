//! Ping handler
//!
//! "Ping" here means timing a DNS lookup of a hostname through the system
//! resolver; no ICMP traffic is sent.

use std::time::{Duration, Instant};
use tokio::net::lookup_host;

use crate::handlers::{HandlerError, HandlerResult};

/// The host pinged for a line of input: its first whitespace-delimited word
pub fn ping_target(text: &str) -> Option<&str> {
    text.split_whitespace().next()
}

/// Resolve `host` and return how long the lookup took
pub async fn resolve_timed(host: &str) -> HandlerResult<Duration> {
    let host = host.trim();
    if host.is_empty() {
        return Err(HandlerError::Parse(
            "Enter text to ping (using first word as domain).".to_string(),
        ));
    }

    let start = Instant::now();
    let mut addrs = lookup_host((host, 0))
        .await
        .map_err(|source| HandlerError::Resolve {
            host: host.to_string(),
            source,
        })?;
    let elapsed = start.elapsed();

    match addrs.next() {
        Some(addr) => {
            log::debug!("Resolved {} to {} in {:?}", host, addr.ip(), elapsed);
            Ok(elapsed)
        }
        None => Err(HandlerError::NoAddress(host.to_string())),
    }
}
