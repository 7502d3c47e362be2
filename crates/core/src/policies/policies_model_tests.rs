//! Tests for policy mapping models.

use super::policies_model::{ApplySkusOutcome, NewPolicyMapping, PolicyMapping};

fn new_mapping() -> NewPolicyMapping {
    NewPolicyMapping {
        shipping_group: "small-parcel".to_string(),
        shipping_type: "standard".to_string(),
        fulfillment_policy_id: Some("fp-1".to_string()),
        payment_policy_id: None,
        return_policy_id: Some("rp-9".to_string()),
    }
}

#[test]
fn test_validate_accepts_complete_mapping() {
    assert!(new_mapping().validate().is_ok());
}

#[test]
fn test_validate_rejects_blank_shipping_group() {
    let mut mapping = new_mapping();
    mapping.shipping_group = "  ".to_string();

    let err = mapping.validate().unwrap_err();
    assert!(err.to_string().contains("shipping_group"));
}

#[test]
fn test_validate_rejects_blank_shipping_type() {
    let mut mapping = new_mapping();
    mapping.shipping_type = String::new();

    let err = mapping.validate().unwrap_err();
    assert!(err.to_string().contains("shipping_type"));
}

#[test]
fn test_policy_ids_are_optional() {
    let mut mapping = new_mapping();
    mapping.fulfillment_policy_id = None;
    mapping.return_policy_id = None;

    assert!(mapping.validate().is_ok());
}

#[test]
fn test_mapping_deserialization() {
    let mapping: PolicyMapping = serde_json::from_str(
        r#"{
            "id": 3,
            "shipping_group": "freight",
            "shipping_type": "oversize",
            "fulfillment_policy_id": "fp-77"
        }"#,
    )
    .unwrap();

    assert_eq!(mapping.id, 3);
    assert_eq!(mapping.shipping_group, "freight");
    assert_eq!(mapping.fulfillment_policy_id.as_deref(), Some("fp-77"));
    assert!(mapping.payment_policy_id.is_none());
}

#[test]
fn test_apply_outcome_defaults() {
    let outcome: ApplySkusOutcome = serde_json::from_str(r#"{"updated": 4}"#).unwrap();

    assert_eq!(outcome.updated, 4);
    assert!(outcome.missing.is_empty());
}
