mod helpers;

use helpers::backend_stub::{V4, V6};
use helpers::MockRestBackend;
use hickory_proto::op::{Message, MessageType, OpCode, Query, ResponseCode};
use hickory_proto::rr::{Name, RData, RecordType};
use hickory_proto::serialize::binary::BinEncodable;
use hickory_server::ServerFuture;
use restdns_application::use_cases::HandleDnsQueryUseCase;
use restdns_infrastructure::backend::HttpLookupBackend;
use restdns_infrastructure::dns::DnsServerHandler;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::UdpSocket;

const TTL: u32 = 300;

async fn start_dns_server(base_url: &str) -> SocketAddr {
    let backend = Arc::new(HttpLookupBackend::new(Duration::from_secs(5)).unwrap());
    let base_url = reqwest::Url::parse(base_url).unwrap();
    let use_case = Arc::new(HandleDnsQueryUseCase::new(backend, base_url, TTL));
    let handler = DnsServerHandler::new(use_case);

    let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    let addr = socket.local_addr().unwrap();

    let mut server = ServerFuture::new(handler);
    server.register_socket(socket);
    tokio::spawn(async move {
        let _ = server.block_until_done().await;
    });

    addr
}

async fn ask(server: SocketAddr, name: &str, record_type: RecordType) -> Message {
    let mut request = query_message();
    request.add_query(Query::query(Name::from_ascii(name).unwrap(), record_type));
    exchange(server, &request).await
}

fn query_message() -> Message {
    let mut request = Message::new();
    request.set_id(0x4242);
    request.set_message_type(MessageType::Query);
    request.set_op_code(OpCode::Query);
    request.set_recursion_desired(true);
    request
}

async fn exchange(server: SocketAddr, request: &Message) -> Message {
    let client = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    client
        .send_to(&request.to_bytes().unwrap(), server)
        .await
        .unwrap();

    let mut buf = [0u8; 1500];
    let (len, _) = tokio::time::timeout(Duration::from_secs(5), client.recv_from(&mut buf))
        .await
        .expect("no reply from DNS server")
        .unwrap();

    Message::from_vec(&buf[..len]).unwrap()
}

fn answer_addresses(message: &Message) -> Vec<String> {
    message
        .answers()
        .iter()
        .map(|r| match r.data() {
            RData::A(a) => a.0.to_string(),
            RData::AAAA(aaaa) => aaaa.0.to_string(),
            other => panic!("unexpected rdata {:?}", other),
        })
        .collect()
}

#[tokio::test]
async fn test_a_query_end_to_end() {
    let backend = MockRestBackend::start().await.unwrap();
    let dns = start_dns_server(&backend.base_url()).await;

    let reply = ask(dns, "example.org.", RecordType::A).await;

    assert_eq!(reply.id(), 0x4242);
    assert_eq!(reply.response_code(), ResponseCode::NoError);
    assert!(reply.authoritative());
    assert!(!reply.recursion_available());
    assert_eq!(reply.queries().len(), 1);
    assert_eq!(answer_addresses(&reply), vec![V4]);

    let answer = &reply.answers()[0];
    assert_eq!(answer.name().to_ascii(), "example.org.");
    assert_eq!(answer.ttl(), TTL);
    assert_eq!(answer.record_type(), RecordType::A);
}

#[tokio::test]
async fn test_aaaa_query_end_to_end() {
    let backend = MockRestBackend::start().await.unwrap();
    let dns = start_dns_server(&backend.base_url()).await;

    let reply = ask(dns, "example.org.", RecordType::AAAA).await;

    assert_eq!(reply.response_code(), ResponseCode::NoError);
    assert!(reply.authoritative());
    assert_eq!(answer_addresses(&reply), vec![V6]);
}

#[tokio::test]
async fn test_aaaa_without_v6_is_empty_noerror() {
    let backend = MockRestBackend::start().await.unwrap();
    let dns = start_dns_server(&backend.base_url()).await;

    let reply = ask(dns, "v4only.org.", RecordType::AAAA).await;

    assert_eq!(reply.response_code(), ResponseCode::NoError);
    assert!(reply.answers().is_empty());
    assert!(!reply.authoritative());
}

#[tokio::test]
async fn test_mx_query_is_nxdomain() {
    let backend = MockRestBackend::start().await.unwrap();
    let dns = start_dns_server(&backend.base_url()).await;

    let reply = ask(dns, "example.org.", RecordType::MX).await;

    assert_eq!(reply.response_code(), ResponseCode::NXDomain);
    assert!(reply.answers().is_empty());
}

#[tokio::test]
async fn test_unknown_domain_is_nxdomain() {
    let backend = MockRestBackend::start().await.unwrap();
    let dns = start_dns_server(&backend.base_url()).await;

    let reply = ask(dns, "non-existent.org.", RecordType::A).await;

    assert_eq!(reply.response_code(), ResponseCode::NXDomain);
    assert!(reply.authoritative());
    assert!(reply.answers().is_empty());
}

#[tokio::test]
async fn test_malformed_body_is_servfail() {
    let backend = MockRestBackend::start().await.unwrap();
    let dns = start_dns_server(&backend.base_url()).await;

    let reply = ask(dns, "malformed.org.", RecordType::A).await;

    assert_eq!(reply.response_code(), ResponseCode::ServFail);
    assert!(reply.answers().is_empty());
}

#[tokio::test]
async fn test_invalid_address_is_servfail() {
    let backend = MockRestBackend::start().await.unwrap();
    let dns = start_dns_server(&backend.base_url()).await;

    let reply = ask(dns, "badaddr.org.", RecordType::A).await;

    assert_eq!(reply.response_code(), ResponseCode::ServFail);
}

#[tokio::test]
async fn test_unreachable_backend_is_servfail() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let closed = listener.local_addr().unwrap();
    drop(listener);

    let dns = start_dns_server(&format!("http://{}/rest/v1/dns/", closed)).await;

    let reply = ask(dns, "example.org.", RecordType::A).await;

    assert_eq!(reply.response_code(), ResponseCode::ServFail);
    assert!(reply.answers().is_empty());
}

#[tokio::test]
async fn test_repeated_query_is_identical() {
    let backend = MockRestBackend::start().await.unwrap();
    let dns = start_dns_server(&backend.base_url()).await;

    let first = ask(dns, "example.org.", RecordType::A).await;
    let second = ask(dns, "example.org.", RecordType::A).await;

    assert_eq!(first.answers(), second.answers());
}

#[tokio::test]
async fn test_query_without_question_is_formerr() {
    let backend = MockRestBackend::start().await.unwrap();
    let dns = start_dns_server(&backend.base_url()).await;

    let reply = exchange(dns, &query_message()).await;

    assert_eq!(reply.id(), 0x4242);
    assert_eq!(reply.message_type(), MessageType::Response);
    assert_eq!(reply.response_code(), ResponseCode::FormErr);
    assert!(reply.answers().is_empty());
}
