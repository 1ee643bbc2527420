use hickory_server::ServerFuture;
use microdns_application::ports::RecordStore;
use microdns_application::use_cases::HandleDnsQueryUseCase;
use microdns_domain::{RecordTable, ResponderConfig};
use microdns_infrastructure::dns::DnsServerHandler;
use microdns_infrastructure::records::SwappableRecordStore;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::{TcpListener, UdpSocket};

pub struct TestServer {
    pub udp_addr: SocketAddr,
    pub tcp_addr: SocketAddr,
    pub store: Arc<SwappableRecordStore>,
}

impl TestServer {
    /// Serves `records` on ephemeral loopback ports until the test runtime ends.
    pub async fn start(records: &str, config: ResponderConfig) -> Self {
        let store = Arc::new(SwappableRecordStore::new(RecordTable::parse(records).unwrap()));
        let store_port: Arc<dyn RecordStore> = store.clone();
        let use_case = Arc::new(HandleDnsQueryUseCase::new(store_port, Arc::new(config)));
        let handler = DnsServerHandler::new(use_case);

        let udp_socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let tcp_listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let udp_addr = udp_socket.local_addr().unwrap();
        let tcp_addr = tcp_listener.local_addr().unwrap();

        let mut server = ServerFuture::new(handler);
        server.register_socket(udp_socket);
        server.register_listener(tcp_listener, Duration::from_secs(5));
        tokio::spawn(async move {
            let _ = server.block_until_done().await;
        });

        Self {
            udp_addr,
            tcp_addr,
            store,
        }
    }
}
