// ABOUTME: Listening-port resolution: an explicit port or an OS-assigned free one.
// ABOUTME: Auto mode binds a throwaway probe socket to port 0 and reads it back.

use std::io;
use std::net::TcpListener;

use crate::config::PortRequest;

/// Resolve the port the server should bind.
///
/// `Fixed` ports are returned as-is. `Auto` binds a transient probe
/// listener to `(host, 0)`, lets the OS pick a free ephemeral port, and
/// drops the probe immediately so the real listener can take the port.
/// Another process could grab the port in that gap; the demo accepts the
/// race rather than handling it.
pub fn resolve_port(host: &str, request: PortRequest) -> io::Result<u16> {
    match request {
        PortRequest::Fixed(port) => Ok(port),
        PortRequest::Auto => {
            let probe = TcpListener::bind((host, 0))?;
            Ok(probe.local_addr()?.port())
        }
    }
}
