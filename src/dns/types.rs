//! DNS record kinds and record values.

use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

use clap::ValueEnum;
use hickory_resolver::proto::rr::rdata::NULL;
use hickory_resolver::proto::rr::{Name, RData, RecordType};
use hickory_resolver::proto::serialize::binary::BinDecodable;
use serde::Serialize;
use strum_macros::EnumIter as EnumIterMacro;

/// Wire type code of DNAME (RFC 6672), which the resolver only knows as an
/// unknown type.
pub const DNAME_TYPE_CODE: u16 = 39;

/// Record types supported by the query helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro, ValueEnum, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordKind {
    A,
    Aaaa,
    Mx,
    Ns,
    Txt,
    Caa,
    Srv,
    Soa,
    Cname,
    Dname,
}

impl RecordKind {
    /// Record types checked by an existence check for any type, in order.
    pub const EXISTENCE_ORDER: [RecordKind; 8] = [
        RecordKind::A,
        RecordKind::Aaaa,
        RecordKind::Txt,
        RecordKind::Cname,
        RecordKind::Mx,
        RecordKind::Ns,
        RecordKind::Caa,
        RecordKind::Srv,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::A => "A",
            RecordKind::Aaaa => "AAAA",
            RecordKind::Mx => "MX",
            RecordKind::Ns => "NS",
            RecordKind::Txt => "TXT",
            RecordKind::Caa => "CAA",
            RecordKind::Srv => "SRV",
            RecordKind::Soa => "SOA",
            RecordKind::Cname => "CNAME",
            RecordKind::Dname => "DNAME",
        }
    }

    /// The wire record type used for the query.
    pub fn record_type(&self) -> RecordType {
        match self {
            RecordKind::A => RecordType::A,
            RecordKind::Aaaa => RecordType::AAAA,
            RecordKind::Mx => RecordType::MX,
            RecordKind::Ns => RecordType::NS,
            RecordKind::Txt => RecordType::TXT,
            RecordKind::Caa => RecordType::CAA,
            RecordKind::Srv => RecordType::SRV,
            RecordKind::Soa => RecordType::SOA,
            RecordKind::Cname => RecordType::CNAME,
            RecordKind::Dname => RecordType::from(DNAME_TYPE_CODE),
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mail exchanger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mx {
    /// Lower is preferred
    pub preference: u16,
    pub exchange: String,
}

/// Certification Authority Authorization (RFC 8659).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Caa {
    pub flag: u8,
    pub tag: String,
    pub value: String,
}

/// Service locator (RFC 2782).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Srv {
    pub priority: u16,
    pub weight: u16,
    pub port: u16,
    pub target: String,
}

/// Start of authority (RFC 1035 section 3.3.13).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Soa {
    pub mname: String,
    pub rname: String,
    pub serial: u32,
    pub refresh: i32,
    pub retry: i32,
    pub expire: i32,
    pub minimum: u32,
}

/// A record value returned by a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "UPPERCASE")]
pub enum ResourceRecord {
    A(Ipv4Addr),
    Aaaa(Ipv6Addr),
    Mx(Mx),
    Ns(String),
    /// Character strings of one TXT record, concatenated
    Txt(String),
    Caa(Caa),
    Srv(Srv),
    Soa(Soa),
    Cname(String),
    /// Target of a subtree redirection
    Dname(String),
}

impl ResourceRecord {
    /// Converts record data from the resolver.
    ///
    /// Returns `None` for record types outside [`RecordKind`].
    pub fn from_rdata(rdata: &RData) -> Option<Self> {
        let record = match rdata {
            RData::A(a) => ResourceRecord::A(a.0),
            RData::AAAA(aaaa) => ResourceRecord::Aaaa(aaaa.0),
            RData::MX(mx) => ResourceRecord::Mx(Mx {
                preference: mx.preference(),
                exchange: mx.exchange().to_utf8(),
            }),
            RData::NS(ns) => ResourceRecord::Ns(ns.0.to_utf8()),
            RData::TXT(txt) => ResourceRecord::Txt(
                txt.iter()
                    .map(|bytes| String::from_utf8_lossy(bytes).to_string())
                    .collect::<Vec<String>>()
                    .join(""),
            ),
            RData::CAA(caa) => ResourceRecord::Caa(Caa {
                flag: if caa.issuer_critical() { 128 } else { 0 },
                tag: caa.tag().to_string(),
                value: caa.value().to_string(),
            }),
            RData::SRV(srv) => ResourceRecord::Srv(Srv {
                priority: srv.priority(),
                weight: srv.weight(),
                port: srv.port(),
                target: srv.target().to_utf8(),
            }),
            RData::SOA(soa) => ResourceRecord::Soa(Soa {
                mname: soa.mname().to_utf8(),
                rname: soa.rname().to_utf8(),
                serial: soa.serial(),
                refresh: soa.refresh(),
                retry: soa.retry(),
                expire: soa.expire(),
                minimum: soa.minimum(),
            }),
            RData::CNAME(cname) => ResourceRecord::Cname(cname.0.to_utf8()),
            RData::Unknown { code, rdata } if u16::from(*code) == DNAME_TYPE_CODE => {
                ResourceRecord::Dname(dname_target(rdata)?)
            }
            _ => return None,
        };
        Some(record)
    }

    pub fn kind(&self) -> RecordKind {
        match self {
            ResourceRecord::A(_) => RecordKind::A,
            ResourceRecord::Aaaa(_) => RecordKind::Aaaa,
            ResourceRecord::Mx(_) => RecordKind::Mx,
            ResourceRecord::Ns(_) => RecordKind::Ns,
            ResourceRecord::Txt(_) => RecordKind::Txt,
            ResourceRecord::Caa(_) => RecordKind::Caa,
            ResourceRecord::Srv(_) => RecordKind::Srv,
            ResourceRecord::Soa(_) => RecordKind::Soa,
            ResourceRecord::Cname(_) => RecordKind::Cname,
            ResourceRecord::Dname(_) => RecordKind::Dname,
        }
    }
}

/// Decodes the uncompressed target name carried in DNAME rdata.
fn dname_target(rdata: &NULL) -> Option<String> {
    match Name::from_bytes(rdata.anything()) {
        Ok(target) => Some(target.to_utf8()),
        Err(e) => {
            log::debug!("Ignoring malformed DNAME rdata: {e}");
            None
        }
    }
}

impl fmt::Display for ResourceRecord {
    /// Presentation format of the record data, without owner, class or TTL.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceRecord::A(ip) => write!(f, "{ip}"),
            ResourceRecord::Aaaa(ip) => write!(f, "{ip}"),
            ResourceRecord::Mx(mx) => write!(f, "{} {}", mx.preference, mx.exchange),
            ResourceRecord::Ns(name)
            | ResourceRecord::Cname(name)
            | ResourceRecord::Dname(name) => f.write_str(name),
            ResourceRecord::Txt(text) => f.write_str(text),
            ResourceRecord::Caa(caa) => write!(f, "{} {} {}", caa.flag, caa.tag, caa.value),
            ResourceRecord::Srv(srv) => write!(
                f,
                "{} {} {} {}",
                srv.priority, srv.weight, srv.port, srv.target
            ),
            ResourceRecord::Soa(soa) => write!(
                f,
                "{} {} {} {} {} {} {}",
                soa.mname, soa.rname, soa.serial, soa.refresh, soa.retry, soa.expire, soa.minimum
            ),
        }
    }
}
