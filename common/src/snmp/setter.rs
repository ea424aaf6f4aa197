use async_trait::async_trait;

use crate::error::SetError;
use crate::network::target::Target;
use crate::snmp::{ErrorStatus, SetValue};

/// What the agent sent back for a SET request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetResponse {
    pub error_status: ErrorStatus,
    /// 1-based index into `varbind_oids`. Zero when the agent names no binding.
    pub error_index: u32,
    /// OIDs of the response variable bindings, in dotted form.
    pub varbind_oids: Vec<String>,
}

impl SetResponse {
    pub fn success(varbind_oids: Vec<String>) -> Self {
        Self {
            error_status: ErrorStatus::NoError,
            error_index: 0,
            varbind_oids,
        }
    }

    /// Resolves `error_index` to the OID of the offending binding, if it points at one.
    pub fn offending_oid(&self) -> Option<&str> {
        let idx = usize::try_from(self.error_index).ok()?.checked_sub(1)?;
        self.varbind_oids.get(idx).map(String::as_str)
    }
}

/// Sends a single SET request with one variable binding.
///
/// Implementations own transport details (version, community, port, timeout)
/// and must not retry.
#[async_trait]
pub trait SnmpSetter: Send + Sync {
    async fn set(
        &self,
        target: &Target,
        oid: &str,
        value: &SetValue,
    ) -> Result<SetResponse, SetError>;
}

#[async_trait]
impl<T: SnmpSetter + ?Sized> SnmpSetter for &T {
    async fn set(
        &self,
        target: &Target,
        oid: &str,
        value: &SetValue,
    ) -> Result<SetResponse, SetError> {
        (**self).set(target, oid, value).await
    }
}
