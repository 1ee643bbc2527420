use hickory_server::ServerFuture;
use microdns_infrastructure::dns::DnsServerHandler;
use socket2::{Domain, Protocol, Socket, Type};
use std::io;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::{TcpListener, UdpSocket};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

const TCP_IDLE_TIMEOUT: Duration = Duration::from_secs(10);
const TCP_BACKLOG: i32 = 1024;

/// The running UDP and TCP listeners.
pub struct DnsListeners {
    udp_addr: SocketAddr,
    tcp_addr: SocketAddr,
    tasks: JoinSet<anyhow::Result<()>>,
}

impl DnsListeners {
    /// Resolves once any listener stops on its own. That is always an error.
    pub async fn first_exit(&mut self) -> anyhow::Error {
        match self.tasks.join_next().await {
            Some(Ok(Err(e))) => e,
            Some(Ok(Ok(()))) => anyhow::anyhow!("DNS listener stopped unexpectedly"),
            Some(Err(e)) => anyhow::anyhow!("DNS listener task failed: {}", e),
            None => anyhow::anyhow!("No DNS listeners running"),
        }
    }

    /// Waits for every listener to finish draining.
    pub async fn join(mut self) {
        while let Some(result) = self.tasks.join_next().await {
            match result {
                Ok(Ok(())) => {}
                Ok(Err(e)) => warn!(error = %e, "DNS listener ended with error"),
                Err(e) => warn!(error = %e, "DNS listener task failed"),
            }
        }
        info!(udp = %self.udp_addr, tcp = %self.tcp_addr, "DNS listeners closed");
    }
}

/// Binds UDP and TCP on `bind_addr` and serves each from its own task.
///
/// `[::]` is bound dual-stack. Failing to bind either transport is returned
/// to the caller.
pub async fn start_dns_server(
    bind_addr: SocketAddr,
    handler: DnsServerHandler,
    shutdown: CancellationToken,
    grace: Duration,
) -> anyhow::Result<DnsListeners> {
    let udp_socket = bind_with_fallback("UDP", bind_addr, create_udp_socket)?;
    let tcp_listener = bind_with_fallback("TCP", bind_addr, create_tcp_listener)?;
    let udp_addr = udp_socket.local_addr()?;
    let tcp_addr = tcp_listener.local_addr()?;

    let mut tasks = JoinSet::new();

    let mut udp_server = ServerFuture::new(handler.clone());
    udp_server.register_socket(udp_socket);
    tasks.spawn(serve("udp", udp_server, shutdown.clone(), grace));

    let mut tcp_server = ServerFuture::new(handler);
    tcp_server.register_listener(tcp_listener, TCP_IDLE_TIMEOUT);
    tasks.spawn(serve("tcp", tcp_server, shutdown, grace));

    info!(udp = %udp_addr, tcp = %tcp_addr, "DNS server ready (UDP + TCP)");

    Ok(DnsListeners {
        udp_addr,
        tcp_addr,
        tasks,
    })
}

/// Binds `addr`. Hosts without IPv6 get `0.0.0.0` in place of `[::]`.
fn bind_with_fallback<T>(
    transport: &'static str,
    addr: SocketAddr,
    bind: impl Fn(SocketAddr) -> io::Result<T>,
) -> anyhow::Result<T> {
    let bind_error = |addr: SocketAddr, e: io::Error| {
        error!(transport, bind_address = %addr, error = %e, "Failed to set listener");
        anyhow::anyhow!("Failed to bind {} {}: {}", transport, addr, e)
    };

    match bind(addr) {
        Ok(bound) => Ok(bound),
        Err(e) if addr.ip() == IpAddr::V6(Ipv6Addr::UNSPECIFIED) => {
            let v4 = SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), addr.port());
            warn!(transport, bind_address = %addr, error = %e, fallback = %v4, "Dual-stack bind failed");
            bind(v4).map_err(|e| bind_error(v4, e))
        }
        Err(e) => Err(bind_error(addr, e)),
    }
}

fn create_udp_socket(socket_addr: SocketAddr) -> io::Result<UdpSocket> {
    let socket = Socket::new(
        Domain::for_address(socket_addr),
        Type::DGRAM,
        Some(Protocol::UDP),
    )?;
    if socket_addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.bind(&socket_addr.into())?;
    socket.set_nonblocking(true)?;
    let std_socket: std::net::UdpSocket = socket.into();
    UdpSocket::from_std(std_socket)
}

fn create_tcp_listener(socket_addr: SocketAddr) -> io::Result<TcpListener> {
    let socket = Socket::new(
        Domain::for_address(socket_addr),
        Type::STREAM,
        Some(Protocol::TCP),
    )?;
    if socket_addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.set_reuse_address(true)?;
    socket.bind(&socket_addr.into())?;
    socket.listen(TCP_BACKLOG)?;
    socket.set_nonblocking(true)?;
    let std_listener: std::net::TcpListener = socket.into();
    TcpListener::from_std(std_listener)
}

async fn serve(
    transport: &'static str,
    mut server: ServerFuture<DnsServerHandler>,
    shutdown: CancellationToken,
    grace: Duration,
) -> anyhow::Result<()> {
    tokio::select! {
        result = server.block_until_done() => {
            return match result {
                Ok(()) => Err(anyhow::anyhow!("{} listener stopped", transport)),
                Err(e) => {
                    error!(transport, error = %e, "DNS listener failed");
                    Err(anyhow::anyhow!("{} listener failed: {}", transport, e))
                }
            };
        }
        _ = shutdown.cancelled() => {}
    }

    info!(transport, "Draining DNS listener");
    match tokio::time::timeout(grace, server.shutdown_gracefully()).await {
        Ok(Ok(())) => info!(transport, "DNS listener stopped"),
        Ok(Err(e)) => warn!(transport, error = %e, "DNS listener shutdown error"),
        Err(_) => warn!(transport, grace_secs = grace.as_secs(), "DNS listener drain timed out"),
    }
    Ok(())
}
