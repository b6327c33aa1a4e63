//! Contracts compose with `?`: the first violation aborts the caller.

use ensure_kit::{
    greater_or_equal, greater_than, is_not_null, string_is_not_null_or_empty, ContractError,
    ContractErrorKind,
};

struct Host {
    name: String,
}

fn schedule(retries: i32, workers: u32, target: Option<&Host>) -> Result<String, ContractError> {
    greater_or_equal(retries, 0)?;
    greater_than(workers, 0, Some("need at least one worker"))?;
    is_not_null(target, Some("target host is required"))?;
    let name = target.map(|host| host.name.as_str());
    string_is_not_null_or_empty(name, Some("host name is required"))?;
    Ok(format!("{}x{} on {}", workers, retries, name.unwrap_or_default()))
}

#[test]
fn all_preconditions_hold() {
    let host = Host {
        name: "alpha".to_owned(),
    };
    assert_eq!(schedule(2, 4, Some(&host)).unwrap(), "4x2 on alpha");
}

#[test]
fn first_violation_wins() {
    // Every precondition is violated; only the first one is reported.
    let err = schedule(-1, 0, None).unwrap_err();
    assert_eq!(err.kind(), ContractErrorKind::OutOfRange);
    assert_eq!(err.message(), "value must be greater or equal 0");
}

#[test]
fn later_violations_surface_in_order() {
    let err = schedule(0, 0, None).unwrap_err();
    assert_eq!(err.message(), "need at least one worker");

    let err = schedule(0, 1, None).unwrap_err();
    assert_eq!(err.kind(), ContractErrorKind::NullArgument);

    let empty = Host {
        name: String::new(),
    };
    let err = schedule(0, 1, Some(&empty)).unwrap_err();
    assert_eq!(err.kind(), ContractErrorKind::InvalidArgument);
    assert_eq!(err.to_string(), "host name is required");
}

#[test]
fn errors_box_into_dyn_error() {
    let boxed: Box<dyn std::error::Error + Send + Sync> =
        Box::new(schedule(-5, 1, None).unwrap_err());
    assert_eq!(boxed.to_string(), "value must be greater or equal 0");
}
