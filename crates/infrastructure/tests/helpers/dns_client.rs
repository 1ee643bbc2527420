use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name, RecordType};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpStream, UdpSocket};

const IO_TIMEOUT: Duration = Duration::from_secs(5);

pub fn build_query(id: u16, domain: &str, record_type: RecordType) -> Vec<u8> {
    let mut query = Query::new();
    query.set_name(Name::from_str(domain).unwrap());
    query.set_query_type(record_type);
    query.set_query_class(DNSClass::IN);

    let mut message = Message::new(id, MessageType::Query, OpCode::Query);
    message.set_recursion_desired(true);
    message.add_query(query);

    let mut buf = Vec::with_capacity(512);
    let mut encoder = BinEncoder::new(&mut buf);
    message.emit(&mut encoder).unwrap();
    buf
}

pub async fn query_udp(server: SocketAddr, packet: &[u8]) -> Message {
    let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    socket.send_to(packet, server).await.unwrap();

    let mut buf = vec![0u8; 4096];
    let (len, _) = tokio::time::timeout(IO_TIMEOUT, socket.recv_from(&mut buf))
        .await
        .expect("UDP response timed out")
        .unwrap();

    Message::from_vec(&buf[..len]).unwrap()
}

pub async fn query_tcp(server: SocketAddr, packet: &[u8]) -> Message {
    let mut stream = TcpStream::connect(server).await.unwrap();

    let mut framed = Vec::with_capacity(packet.len() + 2);
    framed.extend_from_slice(&(packet.len() as u16).to_be_bytes());
    framed.extend_from_slice(packet);
    stream.write_all(&framed).await.unwrap();

    let response = tokio::time::timeout(IO_TIMEOUT, async {
        let mut len_buf = [0u8; 2];
        stream.read_exact(&mut len_buf).await.unwrap();
        let mut body = vec![0u8; u16::from_be_bytes(len_buf) as usize];
        stream.read_exact(&mut body).await.unwrap();
        body
    })
    .await
    .expect("TCP response timed out");

    Message::from_vec(&response).unwrap()
}

pub fn build_empty_query(id: u16) -> Vec<u8> {
    let message = Message::new(id, MessageType::Query, OpCode::Query);

    let mut buf = Vec::with_capacity(12);
    let mut encoder = BinEncoder::new(&mut buf);
    message.emit(&mut encoder).unwrap();
    buf
}
