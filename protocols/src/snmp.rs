//! # SNMPv2c SET adapter
//!
//! Implements [`SnmpSetter`] with `snmp2`. A fresh session (and UDP socket)
//! is opened for every request and dropped afterwards. The whole exchange,
//! including name resolution, is bounded by one timeout. Nothing is retried.

use std::time::Duration;

use async_trait::async_trait;
use snmp2::{AsyncSession, Oid, Value};
use tokio::time;
use tracing::debug;

use snmpush_common::error::SetError;
use snmpush_common::network::target::Target;
use snmpush_common::snmp::{ErrorStatus, SetResponse, SetValue, SnmpSetter};

use crate::oid::{parse_oid, to_dotted};

const STARTING_REQ_ID: i32 = 1;

pub struct SnmpV2cSetter {
    community: Vec<u8>,
    port: u16,
    timeout: Duration,
}

impl SnmpV2cSetter {
    pub fn new(community: &str, port: u16, timeout: Duration) -> Self {
        Self {
            community: community.as_bytes().to_vec(),
            port,
            timeout,
        }
    }

    async fn send(
        &self,
        addr: &str,
        oid: &Oid<'_>,
        value: &SetValue,
    ) -> Result<SetResponse, SetError> {
        let mut session = AsyncSession::new_v2c(addr, &self.community, STARTING_REQ_ID)
            .await
            .map_err(|e| SetError::Session {
                addr: addr.to_string(),
                reason: e.to_string(),
            })?;

        let varbind = [(oid, to_snmp_value(value))];
        let pdu = session
            .set(&varbind)
            .await
            .map_err(|e| SetError::Request(e.to_string()))?;

        let error_status = ErrorStatus::from_code(pdu.error_status);
        let error_index = pdu.error_index;
        let varbind_oids: Vec<String> = pdu.varbinds.map(|(oid, _)| to_dotted(&oid)).collect();

        Ok(SetResponse {
            error_status,
            error_index,
            varbind_oids,
        })
    }
}

#[async_trait]
impl SnmpSetter for SnmpV2cSetter {
    async fn set(
        &self,
        target: &Target,
        oid: &str,
        value: &SetValue,
    ) -> Result<SetResponse, SetError> {
        let oid = parse_oid(oid)?;
        let addr = target.agent_addr(self.port);
        debug!(%addr, oid = %to_dotted(&oid), %value, "sending SET");

        match time::timeout(self.timeout, self.send(&addr, &oid, value)).await {
            Ok(result) => result,
            Err(_) => Err(SetError::Timeout(self.timeout)),
        }
    }
}

fn to_snmp_value(value: &SetValue) -> Value<'_> {
    match value {
        SetValue::Integer(v) => Value::Integer(i64::from(*v)),
        SetValue::IpAddress(addr) => Value::IpAddress(addr.octets()),
        SetValue::OctetString(text) => Value::OctetString(text.as_bytes()),
    }
}
