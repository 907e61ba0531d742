use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Maximum retained length of the host capture, in bytes.
pub const MAX_HOST_LEN: usize = 255;

/// Maximum retained length of the IP capture, in bytes.
pub const MAX_IP_LEN: usize = 63;

/// The `host:[ip]:port` descriptor grammar. The IP literal is bracketed
/// for both address families and uses lowercase hex in IPv6 form.
static DESCRIPTOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Za-z0-9._-]+):\[([0-9a-f.:]+)\]:([0-9]+)")
        .expect("valid descriptor pattern")
});

/// A negotiated passive-mode data-connection endpoint.
///
/// Decoded from the engine's `host:[ip]:port` descriptor; `ip` keeps the
/// literal text (dotted-decimal IPv4 or colon-hex IPv6). Transient:
/// announced and discarded, never stored in a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasvEndpoint {
    pub host: String,
    pub ip: String,
    pub port: u16,
}

/// Error produced when a descriptor does not satisfy the grammar.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("descriptor does not match the host:[ip]:port grammar")]
    NoMatch,
}

impl PasvEndpoint {
    /// Decodes a `host:[ip]:port` descriptor.
    ///
    /// The three fields may occur anywhere in `text`; surrounding text is
    /// ignored. Host and IP captures longer than [`MAX_HOST_LEN`] and
    /// [`MAX_IP_LEN`] bytes are truncated at the cap (lossy), and a port
    /// outside the 16-bit range decodes as 0.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let caps = DESCRIPTOR.captures(text).ok_or(ParseError::NoMatch)?;

        let host = bounded(&caps[1], MAX_HOST_LEN, "host");
        let ip = bounded(&caps[2], MAX_IP_LEN, "ip");
        let port = caps[3].parse::<u16>().unwrap_or_else(|_| {
            tracing::debug!(digits = &caps[3], "port outside 16-bit range, using 0");
            0
        });

        Ok(Self {
            host: host.to_string(),
            ip: ip.to_string(),
            port,
        })
    }
}

/// Truncates a capture at `max` bytes. Both descriptor character classes
/// are ASCII, so byte truncation cannot split a character.
fn bounded<'a>(capture: &'a str, max: usize, field: &'static str) -> &'a str {
    if capture.len() > max {
        tracing::debug!(field, len = capture.len(), max, "truncating oversized capture");
        &capture[..max]
    } else {
        capture
    }
}
