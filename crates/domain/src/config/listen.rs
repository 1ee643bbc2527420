use super::errors::ConfigError;
use std::net::{IpAddr, Ipv6Addr, SocketAddr};

/// Parses a listen address in `host:port`, `[v6]:port` or `:port` form.
///
/// The bare `:port` form becomes `[::]:port`, which listeners bind dual-stack
/// so both IPv6 and IPv4 clients reach it.
pub fn parse_listen_addr(value: &str) -> Result<SocketAddr, ConfigError> {
    let trimmed = value.trim();

    if let Some(port) = trimmed.strip_prefix(':') {
        let port: u16 = port
            .parse()
            .map_err(|_| ConfigError::InvalidListenAddress(value.to_string()))?;
        return Ok(SocketAddr::new(IpAddr::V6(Ipv6Addr::UNSPECIFIED), port));
    }

    trimmed
        .parse::<SocketAddr>()
        .map_err(|_| ConfigError::InvalidListenAddress(value.to_string()))
}
