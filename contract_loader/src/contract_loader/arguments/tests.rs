//!
//! The contract loader arguments tests.
//!

use clap::Parser;

use super::Arguments;

fn parse(arguments: &[&str]) -> Arguments {
    Arguments::try_parse_from(std::iter::once("contract-loader").chain(arguments.iter().copied()))
        .expect("Always valid")
}

#[test]
fn defaults() {
    let directory = tempfile::tempdir().expect("Always valid");
    std::fs::create_dir_all(directory.path().join("src")).expect("Always valid");
    let root = directory.path().to_string_lossy().to_string();

    let config = parse(&["-C", root.as_str()])
        .validate()
        .expect("Always valid");

    assert_eq!(config.sources, vec![directory.path().join("src")]);
    assert_eq!(config.build, directory.path().join("build"));
    assert!(config.is_recursive);
    assert_eq!(config.endpoint.to_string(), "http://localhost:8545");
    assert_eq!(config.creator, None);
    assert_eq!(config.strategy, contract_loader::Strategy::Macros);
    assert_eq!(config.broadcaster, contract_loader::BroadcasterConfig::default());
}

#[test]
fn creator_address() {
    let directory = tempfile::tempdir().expect("Always valid");
    std::fs::create_dir_all(directory.path().join("src")).expect("Always valid");
    let root = directory.path().to_string_lossy().to_string();

    let config = parse(&[
        "-C",
        root.as_str(),
        "--creator",
        "0x6ac7ea33f8831ea9dcc53393aaa88b25a785dbf0",
    ])
    .validate()
    .expect("Always valid");
    assert_eq!(
        config.creator.map(|creator| hex::encode(creator.as_bytes())),
        Some("6ac7ea33f8831ea9dcc53393aaa88b25a785dbf0".to_owned())
    );

    for creator in [
        "6ac7ea33f8831ea9dcc53393aaa88b25a785dbf0",
        "0x6ac7ea33f8831ea9dcc53393aaa88b25a785dbf",
        "0x6ac7ea33f8831ea9dcc53393aaa88b25a785dbfz",
    ] {
        assert!(parse(&["-C", root.as_str(), "--creator", creator])
            .validate()
            .is_err());
    }
}

#[test]
fn missing_sources() {
    let directory = tempfile::tempdir().expect("Always valid");
    let root = directory.path().to_string_lossy().to_string();

    let error = parse(&["-C", root.as_str(), "-s", "contracts", "-s", "lib"])
        .validate()
        .expect_err("Must fail");

    let message = error.to_string();
    assert!(message.contains("contracts"));
    assert!(message.contains("lib"));
}

#[test]
fn registry_consistency() {
    let directory = tempfile::tempdir().expect("Always valid");
    std::fs::create_dir_all(directory.path().join("src")).expect("Always valid");
    let root = directory.path().to_string_lossy().to_string();
    let registry = "0x2222222222222222222222222222222222222222";

    assert!(parse(&["-C", root.as_str(), "--strategy", "registry"])
        .validate()
        .is_err());
    assert!(parse(&["-C", root.as_str(), "--registry", registry])
        .validate()
        .is_err());

    let config = parse(&[
        "-C",
        root.as_str(),
        "--strategy",
        "registry",
        "--registry",
        registry,
    ])
    .validate()
    .expect("Always valid");
    assert_eq!(config.strategy, contract_loader::Strategy::Registry);
    assert!(config.registry.is_some());
}

#[test]
fn broadcaster_settings() {
    let directory = tempfile::tempdir().expect("Always valid");
    std::fs::create_dir_all(directory.path().join("src")).expect("Always valid");
    let root = directory.path().to_string_lossy().to_string();

    let config = parse(&[
        "-C",
        root.as_str(),
        "--gas",
        "1000000",
        "--max-gas",
        "3000000",
        "--blocktime",
        "0.5",
        "--tries",
        "4",
        "--on-timeout",
        "poll:2",
        "--flat",
    ])
    .validate()
    .expect("Always valid");

    assert_eq!(config.broadcaster.gas, web3::types::U256::from(1_000_000));
    assert_eq!(config.broadcaster.max_gas, web3::types::U256::from(3_000_000));
    assert_eq!(config.broadcaster.blocktime.as_millis(), 500);
    assert_eq!(config.broadcaster.tries, 4);
    assert!(!config.is_recursive);

    assert!(parse(&["-C", root.as_str(), "--tries", "0"]).validate().is_err());
    assert!(parse(&["-C", root.as_str(), "--blocktime=-1"]).validate().is_err());
    assert!(Arguments::try_parse_from(["contract-loader", "--on-timeout", "later"]).is_err());
    assert!(Arguments::try_parse_from(["contract-loader", "--strategy", "controller"]).is_err());
}

#[test]
fn bad_endpoint() {
    let directory = tempfile::tempdir().expect("Always valid");
    std::fs::create_dir_all(directory.path().join("src")).expect("Always valid");
    let root = directory.path().to_string_lossy().to_string();

    assert!(parse(&["-C", root.as_str(), "-r", "localhost"])
        .validate()
        .is_err());
    assert!(parse(&["-C", root.as_str(), "-r", "127.0.0.1:8545"])
        .validate()
        .is_ok());
}
