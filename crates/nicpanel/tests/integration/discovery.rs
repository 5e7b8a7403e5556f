//! Integration tests for interface discovery.

use nicpanel::netcfg::interface::list_interfaces;
use nicpanel::netcfg::{CommandOutput, Error, LinkStatus};

use crate::common::{FakeHost, LISTING, METADATA, Reply};

#[tokio::test]
async fn test_list_joins_metadata() {
    let host = FakeHost::new()
        .on("netsh interface show interface", CommandOutput::success(LISTING))
        .on("getmac", CommandOutput::success(METADATA));

    let ifaces = list_interfaces(&host).await.unwrap();
    assert_eq!(ifaces.len(), 2);

    assert_eq!(ifaces[0].name, "Ethernet");
    assert_eq!(ifaces[0].link_status, LinkStatus::Connected);
    assert_eq!(ifaces[0].mac, "AA-BB-CC-DD-EE-FF");
    assert_eq!(ifaces[0].description, "Intel(R) Ethernet Connection I219-V");

    assert_eq!(ifaces[1].name, "Wi-Fi");
    assert_eq!(ifaces[1].link_status, LinkStatus::Disconnected);
    assert_eq!(ifaces[1].mac, "11-22-33-44-55-66");

    assert_eq!(
        host.calls(),
        ["netsh interface show interface", "getmac /v /fo csv"]
    );
}

#[tokio::test]
async fn test_banner_line_is_not_an_interface() {
    let listing = format!("Microsoft Windows [Version 10.0.19045.3803]\r\n{}", LISTING);
    let host = FakeHost::new().on("netsh interface show interface", CommandOutput::success(listing));

    let ifaces = list_interfaces(&host).await.unwrap();
    let names: Vec<_> = ifaces.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, ["Ethernet", "Wi-Fi"]);
}

#[tokio::test]
async fn test_metadata_failure_leaves_fields_empty() {
    let host = FakeHost::new()
        .on("netsh interface show interface", CommandOutput::success(LISTING))
        .on("getmac", CommandOutput::failure(1, "ERROR: access denied"));

    let ifaces = list_interfaces(&host).await.unwrap();
    assert_eq!(ifaces.len(), 2);
    assert!(ifaces.iter().all(|i| i.mac.is_empty() && i.description.is_empty()));
}

#[tokio::test]
async fn test_metadata_tool_missing_is_not_fatal() {
    let host = FakeHost::new()
        .on("netsh interface show interface", CommandOutput::success(LISTING))
        .reply("getmac", Reply::SpawnError);

    let ifaces = list_interfaces(&host).await.unwrap();
    assert_eq!(ifaces.len(), 2);
    assert!(ifaces[0].mac.is_empty());
}

#[tokio::test]
async fn test_listing_failure_is_an_error() {
    let host = FakeHost::new().on(
        "netsh interface show interface",
        CommandOutput::failure(1, "The requested operation requires elevation."),
    );

    match list_interfaces(&host).await {
        Err(Error::Command { operation, stderr, .. }) => {
            assert_eq!(operation, "list interfaces");
            assert!(stderr.contains("elevation"));
        }
        other => panic!("expected command error, got {:?}", other),
    }
    assert!(host.calls_to("getmac").is_empty());
}

#[tokio::test]
async fn test_empty_listing() {
    let host = FakeHost::new();
    assert!(list_interfaces(&host).await.unwrap().is_empty());
}
