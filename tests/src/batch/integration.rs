#![cfg(test)]
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use snmpush_common::config::Config;
use snmpush_common::network::target::Target;
use snmpush_common::snmp::{ErrorStatus, SetResponse, SetValue, SnmpSetter};
use snmpush_core::batch;
use snmpush_core::input::{self, SpecFiles};
use snmpush_protocols::SnmpV2cSetter;
use tempfile::TempDir;
use tokio::net::UdpSocket;

use super::agent::AnsweringAgent;

const TIMEOUT_ROW: &str = "Failed: No SNMP response received before timeout";
const SYS_NAME: &str = "1.3.6.1.2.1.1.5.0";
const NOT_WRITABLE: u8 = 17;

fn test_config(dir: &TempDir, port: u16) -> Config {
    Config {
        port,
        timeout: Duration::from_millis(200),
        output: dir.path().join("snmp_set_results.csv"),
        pause: false,
        quiet: 2,
        ..Config::default()
    }
}

fn write_spec(dir: &Path, n: usize, oid: &str, value: &str, value_type: &str) -> SpecFiles {
    let files = SpecFiles::new(
        dir.join(format!("oid{n}.txt")),
        dir.join(format!("value{n}.txt")),
        dir.join(format!("value_type{n}.txt")),
    );
    fs::write(&files.oid, oid).unwrap();
    fs::write(&files.value, value).unwrap();
    fs::write(&files.value_type, value_type).unwrap();
    files
}

fn write_targets(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("target_ips.txt");
    fs::write(&path, content).unwrap();
    path
}

fn read_rows(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

/// A bound socket that never answers: every request ends in the timeout indication.
async fn silent_agent() -> (UdpSocket, u16) {
    let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    let port = socket.local_addr().unwrap().port();
    (socket, port)
}

#[tokio::test]
async fn batch_silent_agent_logs_timeout_rows() {
    let dir = TempDir::new().unwrap();
    let (_agent, port) = silent_agent().await;
    let cfg = test_config(&dir, port);

    let targets = input::read_targets(&write_targets(dir.path(), "127.0.0.1\n")).unwrap();
    let specs = vec![
        write_spec(dir.path(), 1, "1.3.6.1.2.1.1.5.0", "myhost", "string"),
        write_spec(dir.path(), 2, "1.3.6.1.2.1.2.2.1.7.1", "42", "integer"),
    ];

    let summary = batch::perform_batch(&targets, &specs, &cfg, None).await.unwrap();
    assert_eq!(summary.attempted, 2);
    assert_eq!(summary.failed, 2);

    let rows = read_rows(&cfg.output);
    assert_eq!(
        rows,
        vec![
            "Target_IP,OID,Value,Result".to_string(),
            format!("127.0.0.1,1.3.6.1.2.1.1.5.0,myhost,{TIMEOUT_ROW}"),
            format!("127.0.0.1,1.3.6.1.2.1.2.2.1.7.1,42,{TIMEOUT_ROW}"),
        ]
    );
}

#[tokio::test]
async fn batch_skips_broken_triples_for_every_target() {
    let dir = TempDir::new().unwrap();
    let (_agent, port) = silent_agent().await;
    let cfg = test_config(&dir, port);

    let targets = input::read_targets(&write_targets(dir.path(), "127.0.0.1\n\n127.0.0.1\n")).unwrap();
    let missing = write_spec(dir.path(), 2, "1.3.6.1.2.1.1.6.0", "lab", "string");
    fs::remove_file(&missing.oid).unwrap();
    let specs = vec![
        write_spec(dir.path(), 1, "1.3.6.1.2.1.1.5.0", "myhost", "string"),
        missing,
        write_spec(dir.path(), 3, "1.3.6.1.2.1.1.4.0", "noc@example.net", "email"),
    ];

    let summary = batch::perform_batch(&targets, &specs, &cfg, None).await.unwrap();
    assert_eq!(summary.attempted, 2);
    assert_eq!(summary.skipped, 4);

    let rows = read_rows(&cfg.output);
    assert_eq!(rows.len(), 3);
    assert!(rows[1..].iter().all(|row| row.starts_with("127.0.0.1,1.3.6.1.2.1.1.5.0,myhost,Failed: ")));
}

#[tokio::test]
async fn batch_invalid_inputs_fail_without_network() {
    let dir = TempDir::new().unwrap();
    let (_agent, port) = silent_agent().await;
    let cfg = test_config(&dir, port);

    let targets = input::read_targets(&write_targets(dir.path(), "127.0.0.1\n")).unwrap();
    let specs = vec![
        write_spec(dir.path(), 1, "sysName.0", "myhost", "string"),
        write_spec(dir.path(), 2, "1.3.6.1.4.1.9.2.1.55.0", "10.0.0.300", "ipaddress"),
    ];

    batch::perform_batch(&targets, &specs, &cfg, None).await.unwrap();

    let rows = read_rows(&cfg.output);
    assert_eq!(rows[1], "127.0.0.1,sysName.0,myhost,Failed: invalid OID 'sysName.0'");
    assert_eq!(
        rows[2],
        "127.0.0.1,1.3.6.1.4.1.9.2.1.55.0,10.0.0.300,Failed: invalid ipaddress value '10.0.0.300'"
    );
}

#[tokio::test]
async fn batch_without_targets_leaves_header() {
    let dir = TempDir::new().unwrap();
    let cfg = test_config(&dir, 161);

    let targets = input::read_targets(&write_targets(dir.path(), "\n")).unwrap();
    let specs = vec![write_spec(dir.path(), 1, "1.3.6.1.2.1.1.5.0", "myhost", "string")];

    let summary = batch::perform_batch(&targets, &specs, &cfg, None).await.unwrap();
    assert_eq!(summary.attempted, 0);
    assert_eq!(read_rows(&cfg.output), vec!["Target_IP,OID,Value,Result".to_string()]);
}

#[tokio::test]
async fn batch_malformed_target_fails_only_its_rows() {
    let dir = TempDir::new().unwrap();
    let cfg = test_config(&dir, 161);

    let path = write_targets(dir.path(), "192.0.2.1\nbad target\n192.0.2.2");
    let targets = input::read_targets(&path).unwrap();
    assert_eq!(targets.len(), 3);

    let specs = vec![write_spec(dir.path(), 1, SYS_NAME, "myhost", "string")];
    let summary = batch::perform_batch(&targets, &specs, &cfg, None).await.unwrap();
    assert_eq!(summary.attempted, 3);
    assert_eq!(summary.failed, 3);

    let rows = read_rows(&cfg.output);
    assert_eq!(rows.len(), 4);
    assert!(rows[1].starts_with("192.0.2.1,1.3.6.1.2.1.1.5.0,myhost,Failed: "));
    assert!(rows[2].starts_with("bad target,1.3.6.1.2.1.1.5.0,myhost,Failed: "));
    assert!(rows[3].starts_with("192.0.2.2,1.3.6.1.2.1.1.5.0,myhost,Failed: "));
}

#[tokio::test]
async fn setter_maps_agent_response() {
    let agent = AnsweringAgent::spawn(NOT_WRITABLE, 1).await;
    let setter = SnmpV2cSetter::new("public", agent.port, Duration::from_secs(2));
    let target: Target = "127.0.0.1".parse().unwrap();

    let response = setter
        .set(&target, SYS_NAME, &SetValue::OctetString("myhost".into()))
        .await
        .unwrap();

    assert_eq!(
        response,
        SetResponse {
            error_status: ErrorStatus::NotWritable,
            error_index: 1,
            varbind_oids: vec![SYS_NAME.to_string()],
        }
    );
    assert_eq!(response.offending_oid(), Some(SYS_NAME));
}

#[tokio::test]
async fn batch_answering_agent_logs_success() {
    let dir = TempDir::new().unwrap();
    let agent = AnsweringAgent::spawn(0, 0).await;
    let cfg = Config {
        timeout: Duration::from_secs(2),
        ..test_config(&dir, agent.port)
    };

    let targets = input::read_targets(&write_targets(dir.path(), "127.0.0.1\n")).unwrap();
    let specs = vec![
        write_spec(dir.path(), 1, SYS_NAME, "myhost", "string"),
        write_spec(dir.path(), 2, "1.3.6.1.2.1.2.2.1.7.1", "2", "integer"),
    ];

    let summary = batch::perform_batch(&targets, &specs, &cfg, None).await.unwrap();
    assert_eq!(summary.successful, 2);
    assert_eq!(summary.failed, 0);

    assert_eq!(
        read_rows(&cfg.output),
        vec![
            "Target_IP,OID,Value,Result".to_string(),
            "127.0.0.1,1.3.6.1.2.1.1.5.0,myhost,Successful".to_string(),
            "127.0.0.1,1.3.6.1.2.1.2.2.1.7.1,2,Successful".to_string(),
        ]
    );
}

#[tokio::test]
async fn batch_agent_error_names_offending_oid() {
    let dir = TempDir::new().unwrap();
    let agent = AnsweringAgent::spawn(NOT_WRITABLE, 1).await;
    let cfg = Config {
        timeout: Duration::from_secs(2),
        ..test_config(&dir, agent.port)
    };

    let targets = input::read_targets(&write_targets(dir.path(), "127.0.0.1\n")).unwrap();
    let specs = vec![write_spec(dir.path(), 1, SYS_NAME, "myhost", "string")];

    let summary = batch::perform_batch(&targets, &specs, &cfg, None).await.unwrap();
    assert_eq!(summary.failed, 1);

    let rows = read_rows(&cfg.output);
    assert_eq!(
        rows[1],
        "127.0.0.1,1.3.6.1.2.1.1.5.0,myhost,Failed: notWritable at 1.3.6.1.2.1.1.5.0"
    );
}

#[tokio::test]
async fn batch_refused_port_logs_failure() {
    let dir = TempDir::new().unwrap();
    // Bound and released: nothing listens on the port any more
    let port = {
        let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        socket.local_addr().unwrap().port()
    };
    let cfg = test_config(&dir, port);

    let targets = input::read_targets(&write_targets(dir.path(), "127.0.0.1\n")).unwrap();
    let specs = vec![write_spec(dir.path(), 1, SYS_NAME, "myhost", "string")];

    let summary = batch::perform_batch(&targets, &specs, &cfg, None).await.unwrap();
    assert_eq!(summary.attempted, 1);
    assert_eq!(summary.failed, 1);

    let rows = read_rows(&cfg.output);
    assert_eq!(rows.len(), 2);
    assert!(rows[1].starts_with("127.0.0.1,1.3.6.1.2.1.1.5.0,myhost,Failed: "));
}
