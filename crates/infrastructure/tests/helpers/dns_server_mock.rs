#![allow(dead_code)]
use hickory_proto::op::{Message, MessageType, OpCode, ResponseCode};
use hickory_proto::rr::rdata::{A, NS, SOA};
use hickory_proto::rr::{Name, RData, Record};
use hickory_proto::serialize::binary::BinEncodable;
use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

/// How the mock server answers each query it receives.
#[derive(Clone)]
pub enum Reply {
    /// Build a response from the parsed query.
    Message(Arc<dyn Fn(&Message) -> Message + Send + Sync>),
    /// Send these bytes verbatim, whatever the query.
    Raw(Vec<u8>),
    /// Echo the query back with a different ID.
    WrongId,
    /// Never answer.
    Silent,
}

impl Reply {
    pub fn with(f: impl Fn(&Message) -> Message + Send + Sync + 'static) -> Self {
        Reply::Message(Arc::new(f))
    }
}

/// Authoritative-style DNS responder bound to 127.0.0.1.
pub struct MockDnsServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start(reply: Reply) -> Result<Self, std::io::Error> {
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
                            if let Some(response) = Self::respond(&reply, &buf[..len]) {
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

    fn respond(reply: &Reply, query_bytes: &[u8]) -> Option<Vec<u8>> {
        match reply {
            Reply::Message(build) => {
                let query = Message::from_vec(query_bytes).ok()?;
                build(&query).to_vec().ok()
            }
            Reply::Raw(bytes) => Some(bytes.clone()),
            Reply::WrongId => {
                let mut bytes = query_bytes.to_vec();
                bytes[0] ^= 0xFF;
                bytes[2] |= 0x80;
                Some(bytes)
            }
            Reply::Silent => None,
        }
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

/// Response skeleton echoing the query's ID and question.
pub fn response_to(query: &Message) -> Message {
    let mut response = Message::new();
    response
        .set_id(query.id())
        .set_message_type(MessageType::Response)
        .set_op_code(OpCode::Query)
        .set_recursion_desired(query.recursion_desired());
    response.add_queries(query.queries().to_vec());
    response
}

pub fn name(s: &str) -> Name {
    Name::from_str(s).unwrap()
}

pub fn a_answer(query: &Message, octets: [u8; 4]) -> Message {
    let mut response = response_to(query);
    response.set_authoritative(true);
    let owner = query.queries()[0].name().clone();
    response.add_answer(Record::from_rdata(
        owner,
        300,
        RData::A(A::new(octets[0], octets[1], octets[2], octets[3])),
    ));
    response
}

pub fn ns_referral(query: &Message, zone: &str, nameservers: &[&str]) -> Message {
    let mut response = response_to(query);
    for ns in nameservers {
        response.add_name_server(Record::from_rdata(
            name(zone),
            172_800,
            RData::NS(NS(name(ns))),
        ));
    }
    response
}

pub fn nxdomain(query: &Message, zone: &str) -> Message {
    let mut response = response_to(query);
    response
        .set_authoritative(true)
        .set_response_code(ResponseCode::NXDomain);
    response.add_name_server(Record::from_rdata(
        name(zone),
        900,
        RData::SOA(SOA::new(
            name("a.gtld-servers.net."),
            name("nstld.verisign-grs.com."),
            1,
            1800,
            900,
            604_800,
            86_400,
        )),
    ));
    response
}
