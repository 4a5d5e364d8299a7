//!
//! The build manifest tests.
//!

use std::path::PathBuf;

use crate::module::state::State;
use crate::module::Module;
use crate::rewriter::strategy::Strategy;

use super::Manifest;

fn manifest() -> Manifest {
    let creator = web3::types::Address::repeat_byte(0xaa);
    let modules = ["token", "exchange"]
        .into_iter()
        .zip(5u64..)
        .map(|(shortcut, nonce)| {
            let mut module = Module::new(
                PathBuf::from(format!("src/{shortcut}.se")),
                "def f(): return(1)\n".to_owned(),
            )
            .expect("Always valid");
            module.nonce = Some(nonce);
            module.address = Some(crate::address::compute(&creator, nonce));
            module.bytecode = Some(web3::types::Bytes(vec![0x60, 0x00]));
            module
        })
        .collect();

    let mut manifest = Manifest::new(Strategy::Macros, modules);
    manifest.creator = Some(creator);
    manifest.nonce = Some(5);
    manifest.modules[0].state = State::Confirmed;
    manifest
}

#[test]
fn write_and_read() {
    let directory = tempfile::tempdir().expect("Always valid");
    let manifest = manifest();

    let path = manifest.write(directory.path()).expect("Always valid");
    assert_eq!(path, directory.path().join(Manifest::FILE_NAME));

    let read = Manifest::read(path.as_path()).expect("Always valid");
    assert_eq!(read.creator, manifest.creator);
    assert_eq!(read.nonce, Some(5));
    assert_eq!(read.strategy, Strategy::Macros);
    assert_eq!(read.modules.len(), 2);
    assert_eq!(read.modules[0].state, State::Confirmed);
    assert_eq!(read.modules[1].state, State::Pending);
    assert_eq!(read.modules[1].address, manifest.modules[1].address);
    assert_eq!(read.modules[1].bytecode, manifest.modules[1].bytecode);
    assert!(read.modules[0].source.is_empty());
}

#[test]
fn serialized_fields() {
    let value = serde_json::to_value(manifest()).expect("Always valid");

    assert_eq!(
        value["modules"][0]["address"],
        "0xb28f3cc812c484da8cc782332fd29b6da902ec43"
    );
    assert_eq!(value["modules"][0]["state"], "Confirmed");
    assert_eq!(value["modules"][0]["bytecode"], "0x6000");
    assert_eq!(value["modules"][1]["transactionHash"], serde_json::Value::Null);
    assert!(value["modules"][0].get("source").is_none());
}

#[test]
fn dumps_are_never_overwritten() {
    let directory = tempfile::tempdir().expect("Always valid");
    let manifest = manifest();

    let first = manifest.dump(directory.path()).expect("Always valid");
    let second = manifest.dump(directory.path()).expect("Always valid");

    assert_ne!(first, second);
    for path in [first, second] {
        let name = path
            .file_name()
            .expect("Always exists")
            .to_string_lossy()
            .to_string();
        assert!(name.starts_with(Manifest::DUMP_FILE_PREFIX));
        assert!(name.ends_with(".json"));
        assert!(Manifest::read(path.as_path()).is_ok());
    }
}

#[test]
fn missing_file() {
    let directory = tempfile::tempdir().expect("Always valid");

    assert!(matches!(
        Manifest::read(directory.path().join(Manifest::FILE_NAME).as_path()),
        Err(crate::error::Error::Io { .. })
    ));
}

#[test]
fn counts() {
    let manifest = manifest();

    assert_eq!(manifest.count(State::Confirmed), 1);
    assert_eq!(manifest.count(State::Pending), 1);
    assert!(!manifest.is_deployed());
    assert_eq!(
        manifest.get("exchange").and_then(|module| module.nonce),
        Some(6)
    );
    assert!(manifest.get("market").is_none());
}
