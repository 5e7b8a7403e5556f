//! Integration tests for the apply engine.

use nicpanel::netcfg::config::{apply, apply_batch};
use nicpanel::netcfg::{
    ApplyOptions, CommandOutput, Error, Mode, StagedChange, ValidationError,
};

use crate::common::FakeHost;

#[tokio::test]
async fn test_static_without_dns_reverts_dns_to_dhcp() {
    let host = FakeHost::new();
    let change = StagedChange::static_ipv4("Ethernet", "10.0.0.2", "255.255.255.0");

    let report = apply(&host, &change, &ApplyOptions::default()).await.unwrap();
    assert_eq!(report.changes_made(), 2);
    assert_eq!(
        host.calls(),
        [
            "netsh interface ip set address name=\"Ethernet\" static 10.0.0.2 255.255.255.0",
            "netsh interface ip set dns name=\"Ethernet\" dhcp",
        ]
    );
    assert!(host.calls().iter().all(|c| !c.contains("static") || c.contains("set address")));
}

#[tokio::test]
async fn test_static_with_gateway_and_dns() {
    let host = FakeHost::new();
    let change = StagedChange::static_ipv4("Local Area Connection", "192.168.1.20", "255.255.255.0")
        .gateway("192.168.1.1")
        .dns(["192.168.1.1", "9.9.9.9"]);

    apply(&host, &change, &ApplyOptions::default()).await.unwrap();
    assert_eq!(
        host.calls(),
        [
            "netsh interface ip set address name=\"Local Area Connection\" static 192.168.1.20 255.255.255.0 192.168.1.1 1",
            "netsh interface ip set dns name=\"Local Area Connection\" static 192.168.1.1 primary",
            "netsh interface ip add dns name=\"Local Area Connection\" 9.9.9.9 index=2",
        ]
    );
}

#[tokio::test]
async fn test_dhcp_ignores_populated_fields() {
    let host = FakeHost::new();
    let change = StagedChange {
        name: "Wi-Fi".into(),
        mode: Mode::Dhcp,
        ip: Some("10.0.0.2".into()),
        mask: Some("255.0.0.0".into()),
        gw: Some("172.16.0.1".into()),
        dns: vec!["1.1.1.1".into(), "8.8.8.8".into()],
    };

    apply(&host, &change, &ApplyOptions::default()).await.unwrap();
    let calls = host.calls();
    assert_eq!(
        calls,
        [
            "netsh interface ip set address name=\"Wi-Fi\" dhcp",
            "netsh interface ip set dns name=\"Wi-Fi\" dhcp",
        ]
    );
    assert!(calls.iter().all(|c| !c.contains("10.0.0.2") && !c.contains("1.1.1.1")));
}

#[tokio::test]
async fn test_invalid_static_runs_nothing() {
    let host = FakeHost::new();
    let change = StagedChange::static_ipv4("Ethernet", "1.2.3.4", "255.255.255.0").gateway("9.9.9.9");

    let err = apply(&host, &change, &ApplyOptions::default()).await.unwrap_err();
    assert!(err.is_validation());
    assert!(matches!(
        err,
        Error::Validation(ValidationError::GatewayOutsideSubnet { .. })
    ));
    assert!(host.calls().is_empty());
}

#[tokio::test]
async fn test_dhcp_with_quoted_name_runs_nothing() {
    let host = FakeHost::new();
    let change = StagedChange::dhcp("Wi-Fi\" static 10.9.9.9 255.0.0.0 \"");

    let err = apply(&host, &change, &ApplyOptions::default()).await.unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(ValidationError::InvalidName(_))
    ));
    assert!(host.calls().is_empty());
}

#[tokio::test]
async fn test_padded_name_is_trimmed() {
    let host = FakeHost::new();
    let change = StagedChange::dhcp("  Ethernet ");

    let report = apply(&host, &change, &ApplyOptions::default()).await.unwrap();
    assert_eq!(report.name, "Ethernet");
    assert_eq!(
        host.calls(),
        [
            "netsh interface ip set address name=\"Ethernet\" dhcp",
            "netsh interface ip set dns name=\"Ethernet\" dhcp",
        ]
    );

    let batch = apply_batch(&host, &[change], &ApplyOptions::default()).await;
    assert_eq!(batch.outcomes[0].name, "Ethernet");
    assert!(batch.outcomes[0].current.is_none());
}

#[tokio::test]
async fn test_failing_step_stops_apply() {
    let host = FakeHost::new().on(
        "netsh interface ip set dns",
        CommandOutput::failure(1, "The configured DNS server is incorrect or does not exist."),
    );
    let change = StagedChange::static_ipv4("Ethernet", "10.0.0.2", "255.0.0.0")
        .dns(["10.0.0.1", "10.0.0.3"]);

    let err = apply(&host, &change, &ApplyOptions::default()).await.unwrap_err();
    match &err {
        Error::Command { operation, stderr, .. } => {
            assert_eq!(operation, "set dns on Ethernet");
            assert!(stderr.starts_with("The configured DNS server"));
        }
        other => panic!("expected command error, got {:?}", other),
    }

    // The address step ran and stays applied; the add step never ran.
    let calls = host.calls();
    assert_eq!(calls.len(), 2);
    assert!(calls[0].contains("set address"));
    assert!(calls.iter().all(|c| !c.contains("add dns")));
}

#[tokio::test]
async fn test_dry_run_issues_no_commands() {
    let host = FakeHost::new();
    let change = StagedChange::static_ipv4("Ethernet", "10.0.0.2", "255.0.0.0")
        .gateway("10.0.0.1")
        .dns(["10.0.0.1", "10.0.0.3"]);

    let report = apply(&host, &change, &ApplyOptions::default().dry_run(true))
        .await
        .unwrap();
    assert!(report.dry_run);
    assert_eq!(report.changes_made(), 3);
    assert!(host.calls().is_empty());
}

#[tokio::test]
async fn test_gateway_metric_option() {
    let host = FakeHost::new();
    let change = StagedChange::static_ipv4("Ethernet", "10.0.0.2", "255.0.0.0").gateway("10.0.0.1");

    apply(&host, &change, &ApplyOptions::default().gateway_metric(25))
        .await
        .unwrap();
    assert!(host.calls()[0].ends_with("10.0.0.1 25"));
}

#[tokio::test]
async fn test_batch_isolates_invalid_change() {
    let host = FakeHost::new();
    let changes = [
        StagedChange::static_ipv4("A", "10.0.0.2", "255.255.255.0").gateway("10.0.0.1"),
        StagedChange::static_ipv4("B", "1.2.3.4", "255.255.255.0").gateway("9.9.9.9"),
    ];

    let batch = apply_batch(&host, &changes, &ApplyOptions::default()).await;
    assert_eq!(batch.len(), 2);
    assert!(!batch.is_success());

    let applied: Vec<_> = batch.succeeded().map(|r| r.name.as_str()).collect();
    assert_eq!(applied, ["A"]);

    let failed: Vec<_> = batch.failed().collect();
    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0].0, "B");
    assert!(failed[0].1.is_validation());

    assert!(host.calls().iter().all(|c| c.contains("name=\"A\"")));
    assert_eq!(host.calls().len(), 2);
}

#[tokio::test]
async fn test_batch_continues_after_command_failure() {
    let host = FakeHost::new().on(
        "netsh interface ip set address name=\"A\"",
        CommandOutput::failure(1, "Access is denied."),
    );
    let changes = [StagedChange::dhcp("A"), StagedChange::dhcp("B")];

    let batch = apply_batch(&host, &changes, &ApplyOptions::default()).await;
    assert_eq!(batch.outcomes[0].name, "A");
    assert!(batch.outcomes[0].result.is_err());
    assert!(batch.outcomes[1].result.is_ok());
    assert_eq!(
        host.calls(),
        [
            "netsh interface ip set address name=\"A\" dhcp",
            "netsh interface ip set address name=\"B\" dhcp",
            "netsh interface ip set dns name=\"B\" dhcp",
        ]
    );
}

#[tokio::test]
async fn test_empty_batch() {
    let host = FakeHost::new();
    let batch = apply_batch(&host, &[], &ApplyOptions::default()).await;
    assert!(batch.is_empty());
    assert!(batch.is_success());
}
