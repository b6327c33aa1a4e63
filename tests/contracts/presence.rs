//! `is_not_null` / `is_null` over `Option<&T>`.

use super::common::{assert_invalid_argument, assert_null_argument, node, Node};
use ensure_kit::{is_not_null, is_null};

#[test]
fn is_not_null_accepts_present_value() {
    is_not_null(Some("my"), None).unwrap();
    let n = node("a");
    is_not_null(Some(&n), None).unwrap();
}

#[test]
fn is_not_null_rejects_none_with_null_argument() {
    let missing: Option<&Node> = None;
    let message = assert_null_argument(is_not_null(missing, None));
    assert_eq!(message, "Argument cannot be null");
}

#[test]
fn is_not_null_custom_message() {
    let message = assert_null_argument(is_not_null(None::<&str>, Some("host is required")));
    assert_eq!(message, "host is required");
}

#[test]
fn is_not_null_through_option_as_ref() {
    let owned: Option<Node> = Some(node("b"));
    is_not_null(owned.as_ref(), None).unwrap();

    let boxed: Option<Box<[u8]>> = None;
    assert_null_argument(is_not_null(boxed.as_deref(), None));
}

#[test]
fn is_null_accepts_none() {
    is_null(None::<&Node>, Some("must be null")).unwrap();
}

#[test]
fn is_null_rejects_present_value_with_invalid_argument() {
    let present = node("c");
    let message = assert_invalid_argument(is_null(Some(&present), None));
    assert_eq!(message, "value must be null");
}
