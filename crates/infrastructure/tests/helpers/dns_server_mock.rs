#![allow(dead_code)]
use std::collections::HashMap;
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, UdpSocket};
use tokio::task::JoinHandle;

pub const TYPE_A: u16 = 1;
pub const TYPE_CNAME: u16 = 5;
pub const TYPE_SOA: u16 = 6;
pub const TYPE_PTR: u16 = 12;
pub const TYPE_MX: u16 = 15;

pub const RCODE_NOERROR: u8 = 0;
pub const RCODE_SERVFAIL: u8 = 2;
pub const RCODE_NXDOMAIN: u8 = 3;
pub const RCODE_REFUSED: u8 = 5;

/// Record data the mock knows how to put on the wire.
#[derive(Debug, Clone)]
pub enum MockRdata {
    A(Ipv4Addr),
    Cname(String),
    Ptr(String),
    Mx(u16, String),
    Soa {
        mname: String,
        rname: String,
        serial: u32,
        refresh: u32,
        retry: u32,
        expire: u32,
        minimum: u32,
    },
}

impl MockRdata {
    pub fn rtype(&self) -> u16 {
        match self {
            MockRdata::A(_) => TYPE_A,
            MockRdata::Cname(_) => TYPE_CNAME,
            MockRdata::Ptr(_) => TYPE_PTR,
            MockRdata::Mx(..) => TYPE_MX,
            MockRdata::Soa { .. } => TYPE_SOA,
        }
    }

    fn encode(&self) -> Vec<u8> {
        match self {
            MockRdata::A(ip) => ip.octets().to_vec(),
            MockRdata::Cname(name) | MockRdata::Ptr(name) => encode_name(name),
            MockRdata::Mx(preference, exchange) => {
                let mut out = preference.to_be_bytes().to_vec();
                out.extend(encode_name(exchange));
                out
            }
            MockRdata::Soa {
                mname,
                rname,
                serial,
                refresh,
                retry,
                expire,
                minimum,
            } => {
                let mut out = encode_name(mname);
                out.extend(encode_name(rname));
                for value in [serial, refresh, retry, expire, minimum] {
                    out.extend_from_slice(&value.to_be_bytes());
                }
                out
            }
        }
    }
}

/// One answer record; `owner` defaults to the question name.
#[derive(Debug, Clone)]
pub struct MockRecord {
    pub owner: Option<String>,
    pub rdata: MockRdata,
}

#[derive(Debug, Clone, Default)]
struct MockEntry {
    rcode: u8,
    records: Vec<MockRecord>,
    truncate_udp: bool,
    silent: bool,
}

/// Scripted answers keyed by (name, qtype). Anything else is NXDOMAIN.
#[derive(Debug, Clone, Default)]
pub struct MockZone {
    entries: HashMap<(String, u16), MockEntry>,
}

impl MockZone {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one record answering (name, rdata type).
    pub fn with(mut self, name: &str, rdata: MockRdata) -> Self {
        let key = (normalize(name), rdata.rtype());
        self.entries.entry(key).or_default().records.push(MockRecord {
            owner: None,
            rdata,
        });
        self
    }

    /// Full control over the answer section for (name, qtype).
    pub fn with_answer(mut self, name: &str, qtype: u16, records: Vec<MockRecord>) -> Self {
        self.entries
            .entry((normalize(name), qtype))
            .or_default()
            .records = records;
        self
    }

    pub fn with_rcode(mut self, name: &str, qtype: u16, rcode: u8) -> Self {
        self.entries.entry((normalize(name), qtype)).or_default().rcode = rcode;
        self
    }

    /// UDP answers for (name, qtype) come back empty with TC set.
    pub fn truncated_over_udp(mut self, name: &str, qtype: u16) -> Self {
        self.entries
            .entry((normalize(name), qtype))
            .or_default()
            .truncate_udp = true;
        self
    }

    /// Queries for (name, qtype) are never answered.
    pub fn silent(mut self, name: &str, qtype: u16) -> Self {
        self.entries.entry((normalize(name), qtype)).or_default().silent = true;
        self
    }
}

/// In-process nameserver listening on UDP and TCP on one loopback port.
pub struct MockDnsServer {
    addr: SocketAddr,
    udp_queries: Arc<AtomicUsize>,
    tcp_queries: Arc<AtomicUsize>,
    tasks: Vec<JoinHandle<()>>,
}

impl MockDnsServer {
    pub async fn start(zone: MockZone) -> Result<Self, std::io::Error> {
        let udp = UdpSocket::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = udp.local_addr()?;
        let tcp = TcpListener::bind(addr).await?;

        let zone = Arc::new(zone);
        let udp_queries = Arc::new(AtomicUsize::new(0));
        let tcp_queries = Arc::new(AtomicUsize::new(0));

        let udp_task = {
            let zone = Arc::clone(&zone);
            let counter = Arc::clone(&udp_queries);
            tokio::spawn(async move {
                let mut buf = vec![0u8; 512];
                loop {
                    let Ok((len, peer)) = udp.recv_from(&mut buf).await else {
                        continue;
                    };
                    counter.fetch_add(1, Ordering::SeqCst);
                    if let Some(response) = build_response(&zone, &buf[..len], true) {
                        let _ = udp.send_to(&response, peer).await;
                    }
                }
            })
        };

        let tcp_task = {
            let zone = Arc::clone(&zone);
            let counter = Arc::clone(&tcp_queries);
            tokio::spawn(async move {
                while let Ok((mut stream, _)) = tcp.accept().await {
                    let mut len_buf = [0u8; 2];
                    if stream.read_exact(&mut len_buf).await.is_err() {
                        continue;
                    }
                    let mut query = vec![0u8; u16::from_be_bytes(len_buf) as usize];
                    if stream.read_exact(&mut query).await.is_err() {
                        continue;
                    }
                    counter.fetch_add(1, Ordering::SeqCst);
                    if let Some(response) = build_response(&zone, &query, false) {
                        let mut frame = (response.len() as u16).to_be_bytes().to_vec();
                        frame.extend(response);
                        let _ = stream.write_all(&frame).await;
                    }
                }
            })
        };

        Ok(Self {
            addr,
            udp_queries,
            tcp_queries,
            tasks: vec![udp_task, tcp_task],
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn udp_queries(&self) -> usize {
        self.udp_queries.load(Ordering::SeqCst)
    }

    pub fn tcp_queries(&self) -> usize {
        self.tcp_queries.load(Ordering::SeqCst)
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        for task in &self.tasks {
            task.abort();
        }
    }
}

fn normalize(name: &str) -> String {
    name.trim_end_matches('.').to_ascii_lowercase()
}

pub fn encode_name(name: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(name.len() + 2);
    for label in name.trim_end_matches('.').split('.').filter(|l| !l.is_empty()) {
        out.push(label.len() as u8);
        out.extend_from_slice(label.as_bytes());
    }
    out.push(0);
    out
}

/// Reads the question name and type; returns (name, qtype, end of question).
fn parse_question(query: &[u8]) -> Option<(String, u16, usize)> {
    let mut pos = 12;
    let mut labels = Vec::new();
    loop {
        let len = *query.get(pos)? as usize;
        pos += 1;
        if len == 0 {
            break;
        }
        labels.push(String::from_utf8_lossy(query.get(pos..pos + len)?).to_string());
        pos += len;
    }
    let qtype = u16::from_be_bytes([*query.get(pos)?, *query.get(pos + 1)?]);
    Some((labels.join(".").to_ascii_lowercase(), qtype, pos + 4))
}

fn build_response(zone: &MockZone, query: &[u8], over_udp: bool) -> Option<Vec<u8>> {
    if query.len() < 12 {
        return None;
    }
    let (name, qtype, question_end) = parse_question(query)?;
    let question = query.get(12..question_end)?;

    let nxdomain = MockEntry {
        rcode: RCODE_NXDOMAIN,
        ..Default::default()
    };
    let entry = zone.entries.get(&(name, qtype)).unwrap_or(&nxdomain);
    if entry.silent {
        return None;
    }

    let truncated = over_udp && entry.truncate_udp;
    let records: &[MockRecord] = if truncated { &[] } else { &entry.records };

    let mut response = Vec::with_capacity(512);
    response.extend_from_slice(&query[0..2]); // Transaction ID
    response.push(0x81 | if truncated { 0x02 } else { 0x00 }); // QR=1, TC, RD=1
    response.push(0x80 | (entry.rcode & 0x0f)); // RA=1, RCODE
    response.extend_from_slice(&[0x00, 0x01]); // Questions
    response.extend_from_slice(&(records.len() as u16).to_be_bytes()); // Answers
    response.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]); // Authority, Additional
    response.extend_from_slice(question);

    for record in records {
        match &record.owner {
            Some(owner) => response.extend(encode_name(owner)),
            None => response.extend_from_slice(&[0xc0, 0x0c]), // pointer to question
        }
        let rdata = record.rdata.encode();
        response.extend_from_slice(&record.rdata.rtype().to_be_bytes());
        response.extend_from_slice(&[0x00, 0x01]); // Class IN
        response.extend_from_slice(&300u32.to_be_bytes()); // TTL
        response.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
        response.extend(rdata);
    }

    Some(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_name() {
        assert_eq!(
            encode_name("mail.example.com."),
            b"\x04mail\x07example\x03com\x00".to_vec()
        );
        assert_eq!(encode_name(""), vec![0]);
    }

    #[test]
    fn test_unknown_name_is_nxdomain() {
        let mut query = vec![0xab, 0xcd, 0x01, 0x00, 0x00, 0x01, 0, 0, 0, 0, 0, 0];
        query.extend(encode_name("missing.example.com"));
        query.extend_from_slice(&[0x00, 0x01, 0x00, 0x01]);

        let response = build_response(&MockZone::new(), &query, true).unwrap();
        assert_eq!(response[0..2], [0xab, 0xcd]);
        assert_eq!(response[3] & 0x0f, RCODE_NXDOMAIN);
    }
}
