use snmp2::Oid;
use snmpush_common::error::SetError;

/// Parses a dotted OID such as `1.3.6.1.2.1.1.5.0`.
///
/// A leading dot and empty arcs are tolerated (`.1.3.6.1` is accepted).
pub fn parse_oid(s: &str) -> Result<Oid<'static>, SetError> {
    let invalid = || SetError::InvalidOid(s.to_string());

    let arcs: Vec<u64> = s
        .trim()
        .split('.')
        .filter(|arc| !arc.is_empty())
        .map(|arc| arc.parse::<u64>())
        .collect::<Result<_, _>>()
        .map_err(|_| invalid())?;

    if arcs.len() < 2 {
        return Err(invalid());
    }

    Oid::from(&arcs).map_err(|_| invalid())
}

/// Dotted text of an OID as received from an agent.
pub fn to_dotted(oid: &Oid<'_>) -> String {
    oid.to_id_string()
}
