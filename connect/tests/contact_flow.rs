/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use connect::input::CreateContactFlowInput;
use connect::model::{ContactFlow, ContactFlowState, ContactFlowStatus, ContactFlowType};
use connect::output::{CreateContactFlowOutput, DescribeContactFlowOutput};
use connect::{DuplicateKeyError, ShapeHash};
use pretty_assertions::assert_eq;
use std::collections::HashMap;
use tracing_test::traced_test;

const FLOW_ARN: &str = "arn:aws:connect:us-west-2:123456789012:instance/abc/contact-flow/f1";

fn main_flow() -> ContactFlow {
    ContactFlow::new()
        .with_arn(FLOW_ARN)
        .with_name("Main Flow")
        .with_type(ContactFlowType::ContactFlow)
        .with_state(ContactFlowState::Active)
}

#[test]
fn build_describe_and_compare_a_flow() {
    let flow = main_flow();
    assert_eq!(flow.r#type(), Some("CONTACT_FLOW"));
    assert_eq!(flow.status(), None);
    assert_eq!(
        flow.to_string(),
        format!("{{Arn: {},Name: Main Flow,Type: CONTACT_FLOW,State: ACTIVE}}", FLOW_ARN)
    );

    let same = main_flow();
    assert_eq!(flow, same);
    assert_eq!(flow.hash_code(), same.hash_code());

    let published = main_flow().with_status(ContactFlowStatus::Published);
    assert_ne!(flow, published);
}

#[test]
fn create_request_and_response() {
    let mut input = CreateContactFlowInput::new()
        .with_instance_id("abc")
        .with_name("Main Flow")
        .with_type(ContactFlowType::CustomerQueue)
        .with_content(r#"{"Version":"2019-10-30","Actions":[]}"#);
    input.add_tags_entry("team", "support").unwrap();
    assert_eq!(input.content(), Some(r#"{"Version":"2019-10-30","Actions":[]}"#));

    let output = CreateContactFlowOutput::new()
        .with_contact_flow_id("f1")
        .with_contact_flow_arn(FLOW_ARN);
    let described = DescribeContactFlowOutput::new().with_contact_flow(
        ContactFlow::new()
            .with_id(output.contact_flow_id().unwrap_or_default())
            .with_arn(output.contact_flow_arn().unwrap_or_default())
            .with_name(input.name().unwrap_or_default())
            .with_type(input.r#type().unwrap_or_default())
            .with_tags(input.tags().cloned().unwrap_or_default()),
    );

    let flow = described.contact_flow().unwrap();
    assert_eq!(flow.id(), Some("f1"));
    assert_eq!(flow.r#type(), Some("CUSTOMER_QUEUE"));
    assert_eq!(flow.tags().unwrap()["team"], "support");
}

#[test]
#[traced_test]
fn tag_entries_reject_duplicates() {
    let mut flow = main_flow();
    flow.add_tags_entry("team", "support")
        .unwrap()
        .add_tags_entry("env", "prod")
        .unwrap();

    let err = flow.add_tags_entry("env", "dev").unwrap_err();
    assert_eq!(err, DuplicateKeyError::new("Tags", "env"));
    assert!(logs_contain("rejected map entry with duplicated key"));

    let expected: HashMap<String, String> = vec![("team", "support"), ("env", "prod")]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    assert_eq!(flow.tags(), Some(&expected));

    flow.clear_tags_entries();
    assert_eq!(flow, main_flow());
}

#[test]
fn snapshot_does_not_follow_later_changes() {
    let mut tags = HashMap::new();
    tags.insert("team".to_string(), "support".to_string());
    let flow = main_flow().with_tags(tags.clone());

    tags.insert("env".to_string(), "prod".to_string());
    assert_eq!(flow.tags().map(HashMap::len), Some(1));

    let mut copy = flow.clone();
    copy.set_name(Some("Renamed".to_string()));
    assert_eq!(flow.name(), Some("Main Flow"));
    assert_ne!(flow, copy);
}
