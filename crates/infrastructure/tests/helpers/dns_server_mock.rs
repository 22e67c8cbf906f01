#![allow(dead_code)]
use std::net::{Ipv4Addr, SocketAddr};
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

/// How the mock server answers every query it receives.
#[derive(Debug, Clone)]
pub enum MockAnswer {
    Records(Vec<Ipv4Addr>),
    NoData,
    NxDomain,
    ServFail,
}

impl MockAnswer {
    fn rcode(&self) -> u8 {
        match self {
            Self::Records(_) | Self::NoData => 0,
            Self::ServFail => 2,
            Self::NxDomain => 3,
        }
    }
}

/// Minimal UDP DNS server for resolver tests.
///
/// Echoes the question section and appends the configured A records, or
/// answers with the configured RCODE.
pub struct MockDnsServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    /// Starts on a random local port.
    pub async fn start(answer: MockAnswer) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind("127.0.0.1:0").await?;
        let addr = socket.local_addr()?;

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            if let Some(response) = build_response(&buf[..len], &answer) {
                                let _ = socket.send_to(&response, peer).await;
                            }
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

/// End offset of the first question (name labels + QTYPE + QCLASS).
fn question_end(query: &[u8]) -> Option<usize> {
    let mut pos = 12;
    loop {
        let len = *query.get(pos)? as usize;
        pos += 1;
        if len == 0 {
            break;
        }
        pos += len;
    }
    let end = pos + 4;
    (end <= query.len()).then_some(end)
}

fn build_response(query: &[u8], answer: &MockAnswer) -> Option<Vec<u8>> {
    if query.len() < 12 {
        return None;
    }
    let end = question_end(query)?;

    let records: &[Ipv4Addr] = match answer {
        MockAnswer::Records(records) => records,
        _ => &[],
    };

    let mut response = Vec::with_capacity(512);

    // Transaction ID
    response.extend_from_slice(&query[0..2]);
    // QR=1, Opcode=0, AA=0, TC=0, RD copied from query
    response.push(0x80 | (query[2] & 0x01));
    // RA=1, RCODE
    response.push(0x80 | answer.rcode());
    // QDCOUNT = 1
    response.extend_from_slice(&[0x00, 0x01]);
    // ANCOUNT
    response.extend_from_slice(&(records.len() as u16).to_be_bytes());
    // NSCOUNT, ARCOUNT
    response.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]);

    response.extend_from_slice(&query[12..end]);

    for ip in records {
        response.extend_from_slice(&[
            0xc0, 0x0c, // Name pointer to question
            0x00, 0x01, // Type A
            0x00, 0x01, // Class IN
            0x00, 0x00, 0x00, 0x3c, // TTL: 60 seconds
            0x00, 0x04, // Data length: 4 bytes
        ]);
        response.extend_from_slice(&ip.octets());
    }

    Some(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query_for_example_com() -> Vec<u8> {
        let mut query = vec![
            0xab, 0xcd, // ID
            0x01, 0x00, // Flags: RD
            0x00, 0x01, // Questions
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // Counts
        ];
        query.extend_from_slice(b"\x07example\x03com\x00");
        query.extend_from_slice(&[0x00, 0x01, 0x00, 0x01]);
        query
    }

    #[test]
    fn test_response_echoes_id_and_question() {
        let query = query_for_example_com();
        let response = build_response(
            &query,
            &MockAnswer::Records(vec![Ipv4Addr::new(93, 184, 216, 34)]),
        )
        .unwrap();

        assert_eq!(response[0..2], [0xab, 0xcd]);
        assert_eq!(response[2], 0x81);
        assert_eq!(response[3] & 0x0f, 0);
        assert_eq!(response[6..8], [0x00, 0x01]);
        assert_eq!(&response[response.len() - 4..], &[93, 184, 216, 34]);
    }

    #[test]
    fn test_nxdomain_sets_rcode() {
        let response = build_response(&query_for_example_com(), &MockAnswer::NxDomain).unwrap();

        assert_eq!(response[3] & 0x0f, 3);
        assert_eq!(response[6..8], [0x00, 0x00]);
    }

    #[test]
    fn test_truncated_query_is_ignored() {
        assert!(build_response(&[0x00; 8], &MockAnswer::NoData).is_none());
        assert!(build_response(&[0x00; 13], &MockAnswer::NoData).is_none());
    }
}
