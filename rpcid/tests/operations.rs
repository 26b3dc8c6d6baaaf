use rpcid::{registry, RpcidError, RpcidTool, ToolConfig, ToolError};
use std::fs;
use std::path::{Path, PathBuf};

const WIFI_JSON: &str = r#"{"api_version": 9, "syscap": ["SystemCapability.Communication.WiFi"]}"#;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("rpcid-ops-{}-{name}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_input(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, bytes).unwrap();
    path
}

fn record(api_word: u16, set_type: u16, set_len: u16, body: &[u8]) -> Vec<u8> {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&api_word.to_be_bytes());
    bytes.extend_from_slice(&set_type.to_be_bytes());
    bytes.extend_from_slice(&set_len.to_be_bytes());
    bytes.extend_from_slice(body);
    bytes
}

#[test]
fn test_encode_wifi_layout() {
    let dir = scratch_dir("encode-wifi");
    let input = write_input(&dir, "syscap.json", WIFI_JSON.as_bytes());

    let tool = RpcidTool::default();
    let out = tool.encode(&input, &dir).unwrap();
    assert_eq!(out, dir.join("rpcid.sc"));

    let bytes = fs::read(&out).unwrap();
    assert_eq!(bytes.len(), 6 + 128);
    assert_eq!(&bytes[..6], &[0x80, 0x09, 0x00, 0x02, 0x00, 0x80]);
    assert_eq!(&bytes[6..24], b"Communication.WiFi");
    assert!(bytes[24..].iter().all(|&b| b == 0));

    let summary = tool.inspect(&out).unwrap();
    assert_eq!(summary.header.api_version, 9);
    assert_eq!(summary.header.api_version_type, 1);
    assert_eq!(summary.header.capability_set_type, 2);
    assert_eq!(summary.header.capability_set_len, 128);
    assert_eq!(summary.slot_count, 1);
    assert_eq!(summary.trailing_bytes, 0);

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_decode_reproduces_descriptor() {
    let dir = scratch_dir("decode");
    let json = r#"{
        "api_version": 12,
        "syscap": [
            "SystemCapability.Sensors.Sensor",
            "SystemCapability.Vendor.Private.Thing",
            "SystemCapability.Communication.WiFi"
        ]
    }"#;
    let input = write_input(&dir, "syscap.json", json.as_bytes());

    let tool = RpcidTool::default();
    let encoded = tool.encode(&input, &dir).unwrap();
    let decoded = tool.decode(&encoded, &dir).unwrap();
    assert_eq!(decoded, dir.join("rpcid.json"));

    let original = rpcid::parse_descriptor(json.as_bytes()).unwrap();
    let roundtrip = rpcid::parse_descriptor(&fs::read(&decoded).unwrap()).unwrap();
    assert_eq!(roundtrip, original);

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_bad_prefix_writes_nothing() {
    let dir = scratch_dir("bad-prefix");
    let json = r#"{"api_version": 9, "syscap": ["SystemCapability.Communication.WiFi", "Foo.Bar"]}"#;
    let input = write_input(&dir, "syscap.json", json.as_bytes());

    let err = RpcidTool::default().encode(&input, &dir).unwrap_err();
    assert!(matches!(err, ToolError::Encoding(RpcidError::MissingPrefix { entry: 1 })));
    assert!(!dir.join("rpcid.sc").exists());
    assert!(!dir.join(".rpcid.sc.tmp").exists());

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_encode_parse_errors() {
    let dir = scratch_dir("parse-errors");
    let tool = RpcidTool::default();

    let missing = write_input(&dir, "missing.json", br#"{"api_version": 9}"#);
    let err = tool.encode(&missing, &dir).unwrap_err();
    assert!(err.is_parse());
    assert!(matches!(err, ToolError::MissingField(ref f) if f == "syscap"));

    let malformed = write_input(&dir, "malformed.json", b"{ not json");
    assert!(matches!(tool.encode(&malformed, &dir), Err(ToolError::Json(_))));

    assert!(!dir.join("rpcid.sc").exists());
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_validator_boundaries() {
    let dir = scratch_dir("validator");
    let tool = RpcidTool::default();

    // Seven bytes is below the minimum record size
    let short = write_input(&dir, "short.sc", &[0x80, 0x09, 0x00, 0x02, 0x00, 0x00, 0x00]);
    assert!(matches!(
        tool.decode(&short, &dir),
        Err(ToolError::Format(RpcidError::BufferTooShort { len: 7 }))
    ));

    let type_zero = write_input(&dir, "type0.sc", &record(0x0009, 2, 128, &[0u8; 128]));
    assert!(matches!(
        tool.decode(&type_zero, &dir),
        Err(ToolError::Format(RpcidError::InvalidApiVersionType))
    ));

    let wrong_set = write_input(&dir, "set1.sc", &record(0x8009, 1, 128, &[0u8; 128]));
    assert!(matches!(
        tool.decode(&wrong_set, &dir),
        Err(ToolError::Format(RpcidError::InvalidCapabilitySetType { found: 1 }))
    ));

    let overrun = write_input(&dir, "overrun.sc", &record(0x8009, 2, 256, &[0u8; 128]));
    assert!(matches!(
        tool.decode_to_text(&overrun, &dir),
        Err(ToolError::Format(RpcidError::CapabilitySetOverrun { .. }))
    ));

    assert!(!dir.join("rpcid.json").exists());
    assert!(!dir.join("RPCID.txt").exists());
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_unterminated_slot_is_rejected() {
    let dir = scratch_dir("unterminated");
    let input = write_input(&dir, "full.sc", &record(0x8009, 2, 128, &[b'A'; 128]));

    let err = RpcidTool::default().decode(&input, &dir).unwrap_err();
    assert!(matches!(err, ToolError::Format(RpcidError::UnterminatedSlot { slot: 0 })));
    assert!(!dir.join("rpcid.json").exists());

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_oversized_buffer_is_accepted() {
    let dir = scratch_dir("oversized");
    let mut slot = [0u8; 128];
    slot[..18].copy_from_slice(b"Communication.WiFi");
    let mut bytes = record(0x8009, 2, 128, &slot);
    bytes.extend_from_slice(&[0xAA; 10]);
    let input = write_input(&dir, "padded.sc", &bytes);

    let tool = RpcidTool::default();
    assert_eq!(tool.inspect(&input).unwrap().trailing_bytes, 10);
    let decoded = tool.decode(&input, &dir).unwrap();
    let descriptor = rpcid::parse_descriptor(&fs::read(decoded).unwrap()).unwrap();
    assert_eq!(descriptor.syscap, vec!["SystemCapability.Communication.WiFi".to_string()]);

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_decode_text_output() {
    let dir = scratch_dir("decode-text");
    let json = r#"{"api_version": 9, "syscap": [
        "SystemCapability.Communication.WiFi",
        "SystemCapability.Vendor.Custom"
    ]}"#;
    let input = write_input(&dir, "syscap.json", json.as_bytes());

    let tool = RpcidTool::default();
    let encoded = tool.encode(&input, &dir).unwrap();
    let text_path = tool.decode_to_text(&encoded, &dir).unwrap();
    assert_eq!(text_path, dir.join("RPCID.txt"));

    let wifi = registry()
        .unwrap()
        .bit_index("SystemCapability.Communication.WiFi")
        .unwrap() as usize;
    let mut bitmap = [0u8; 120];
    bitmap[wifi / 8] |= 1 << (wifi % 8);

    let mut expected = vec!["9".to_string(), "2".to_string()];
    for chunk in bitmap.chunks_exact(4) {
        let word = u32::from_ne_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        expected.push(word.to_string());
    }
    expected.push("SystemCapability.Vendor.Custom".to_string());

    let text = fs::read_to_string(&text_path).unwrap();
    assert_eq!(text, expected.join(","));
    assert!(!text.ends_with('\n'));

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_io_errors() {
    let dir = scratch_dir("io-errors");
    let tool = RpcidTool::default();

    let err = tool.encode(dir.join("absent.json"), &dir).unwrap_err();
    assert!(err.is_io());

    let input = write_input(&dir, "syscap.json", WIFI_JSON.as_bytes());
    let err = tool.encode(&input, dir.join("no-such-dir")).unwrap_err();
    assert!(err.is_io());

    let limited = RpcidTool::new(ToolConfig::default().with_max_input_bytes(8));
    assert!(matches!(
        limited.encode(&input, &dir),
        Err(ToolError::InputTooLarge { limit: 8, .. })
    ));

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_custom_artifact_names() {
    let dir = scratch_dir("custom-names");
    let input = write_input(&dir, "syscap.json", WIFI_JSON.as_bytes());

    let tool = RpcidTool::new(
        ToolConfig::default()
            .with_encoded_file_name("app.rpcid")
            .with_decoded_file_name("app.json"),
    );
    let encoded = tool.encode(&input, &dir).unwrap();
    assert_eq!(encoded, dir.join("app.rpcid"));
    assert_eq!(tool.decode(&encoded, &dir).unwrap(), dir.join("app.json"));

    fs::remove_dir_all(&dir).unwrap();
}
