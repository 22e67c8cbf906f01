use ferrous_console_flows::{DelayedDnsResolver, StaticRconConnector, TestServer};
use serde_json::json;
use std::net::Ipv4Addr;
use std::sync::Arc;
use std::time::{Duration, Instant};

const EXAMPLE_IP: Ipv4Addr = Ipv4Addr::new(93, 184, 216, 34);

#[tokio::test]
async fn test_lookup_over_http() {
    let resolver = Arc::new(DelayedDnsResolver::new(&[EXAMPLE_IP]));
    let server = TestServer::start(resolver.clone(), Arc::new(StaticRconConnector::new("")))
        .await
        .unwrap();

    let (status, body) = server.post("/api/dns", json!({"domain": "example.com"})).await;

    assert_eq!(status, 200);
    assert_eq!(
        body,
        json!({"domain": "example.com", "records": ["93.184.216.34"], "type": "A"})
    );
    assert_eq!(resolver.calls(), 1);
    server.shutdown();
}

#[tokio::test]
async fn test_validation_and_not_found_over_http() {
    let resolver = Arc::new(DelayedDnsResolver::new(&[EXAMPLE_IP]));
    let server = TestServer::start(resolver.clone(), Arc::new(StaticRconConnector::new("")))
        .await
        .unwrap();

    let (status, body) = server.post("/api/dns", json!({})).await;
    assert_eq!(status, 400);
    assert_eq!(body, json!({"error": "Domain is required"}));
    assert_eq!(resolver.calls(), 0);

    let (status, body) = server
        .post("/api/dns", json!({"domain": "nothing.invalid"}))
        .await;
    assert_eq!(status, 404);
    assert_eq!(body, json!({"error": "Domain not found or DNS error"}));

    server.shutdown();
}

#[tokio::test]
async fn test_slow_lookup_does_not_block_other_requests() {
    let resolver = Arc::new(
        DelayedDnsResolver::new(&[EXAMPLE_IP]).with_delay("slow.example", Duration::from_secs(3)),
    );
    let server = Arc::new(
        TestServer::start(resolver, Arc::new(StaticRconConnector::new("")))
            .await
            .unwrap(),
    );

    let slow_server = Arc::clone(&server);
    let slow = tokio::spawn(async move {
        slow_server
            .post("/api/dns", json!({"domain": "slow.example"}))
            .await
    });
    tokio::time::sleep(Duration::from_millis(100)).await;

    let started = Instant::now();
    let (status, _) = server.post("/api/dns", json!({"domain": "fast.example"})).await;
    let fast_elapsed = started.elapsed();

    assert_eq!(status, 200);
    assert!(
        fast_elapsed < Duration::from_secs(2),
        "fast lookup waited {fast_elapsed:?}"
    );
    assert!(!slow.is_finished());

    let (slow_status, slow_body) = slow.await.unwrap();
    assert_eq!(slow_status, 200);
    assert_eq!(slow_body["domain"], "slow.example");
}
