use inplace_optional::Optional;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Config {
    name: String,
    limit: Optional<u32>,
}

#[test]
fn test_encodes_like_option() {
    let present = Optional::some(5u32);
    let empty: Optional<u32> = Optional::new();

    assert_eq!(
        serde_json::to_string(&present).unwrap(),
        serde_json::to_string(&Some(5u32)).unwrap()
    );
    assert_eq!(serde_json::to_string(&empty).unwrap(), "null");
}

#[test]
fn test_field_in_struct() {
    let config = Config {
        name: "a".into(),
        limit: Optional::some(3),
    };
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(json, r#"{"name":"a","limit":3}"#);

    let back: Config = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);

    let back: Config = serde_json::from_str(r#"{"name":"b","limit":null}"#).unwrap();
    assert!(!back.limit.has_value());
}

#[test]
fn test_rejects_wrong_payload_type() {
    let res: Result<Optional<u32>, _> = serde_json::from_str(r#""text""#);
    assert!(res.is_err());
}
