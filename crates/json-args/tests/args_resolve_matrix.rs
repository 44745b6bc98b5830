//! Argument location: positional, named and wrapped resolution.

use json_args::{resolve, ArgsCodec, ArgsConfig, ArgsError, ArgValue, Locator, TypeTag};
use serde_json::json;

// ---------------------------------------------------------------------------
// Positional
// ---------------------------------------------------------------------------

#[test]
fn position_selects_same_leaf_as_element() {
    let arr = json!(["a", {"swe_": 1, "type": 8, "v": "b"}, "c"]);
    let by_pos = resolve(&arr, Locator::at(2)).unwrap();
    let direct = resolve(&arr[1], Locator::LEAF).unwrap();
    assert_eq!(by_pos, direct);
    assert_eq!(by_pos, Some(&json!("b")));
}

#[test]
fn position_past_end_is_not_found() {
    let arr = json!([1, 2, 3]);
    assert_eq!(resolve(&arr, Locator::at(4)).unwrap(), None);
    assert_eq!(resolve(&json!([]), Locator::at(1)).unwrap(), None);
}

#[test]
fn position_on_object_without_name_is_not_found() {
    assert_eq!(resolve(&json!({"a": 1}), Locator::at(1)).unwrap(), None);
}

#[test]
fn position_with_name_on_object_uses_name() {
    let obj = json!({"a": 1});
    assert_eq!(resolve(&obj, Locator::new(Some("a"), 2)).unwrap(), Some(&json!(1)));
}

#[test]
fn array_without_position_is_its_own_leaf() {
    let arr = json!([1, 2, 3]);
    assert_eq!(
        json_args::get(&arr, Locator::LEAF, TypeTag::Vec3).unwrap(),
        Some(ArgValue::Vec3([1.0, 2.0, 3.0]))
    );
}

// ---------------------------------------------------------------------------
// Named
// ---------------------------------------------------------------------------

#[test]
fn named_member_decodes() {
    let obj = json!({"x": 5, "y": 7});
    assert_eq!(
        json_args::get(&obj, Locator::named("y"), TypeTag::Int).unwrap(),
        Some(ArgValue::Int(7))
    );
}

#[test]
fn missing_named_member_is_a_violation() {
    let obj = json!({"x": 5, "y": 7});
    let err = resolve(&obj, Locator::named("z")).unwrap_err();
    assert_eq!(err, ArgsError::MissingMember("z".into()));
    assert!(err.is_contract_violation());
}

#[test]
fn named_member_that_is_wrapped_unwraps() {
    let obj = json!({"fov": {"swe_": 1, "type": 19, "hint": "deg", "v": 60}});
    assert_eq!(
        json_args::get(&obj, Locator::named("fov"), TypeTag::Float).unwrap(),
        Some(ArgValue::Float(60.0))
    );
}

#[test]
fn name_on_scalar_is_the_scalar() {
    assert_eq!(resolve(&json!(3), Locator::named("x")).unwrap(), Some(&json!(3)));
}

// ---------------------------------------------------------------------------
// Wrapped precedence
// ---------------------------------------------------------------------------

#[test]
fn wrapper_unwraps_before_name_lookup() {
    let wrapped = json!({"swe_": 1, "type": 8, "a": 99, "v": {"a": 1}});
    // The first step unwraps; the name is not consulted on the wrapper.
    assert_eq!(resolve(&wrapped, Locator::named("a")).unwrap(), Some(&json!({"a": 1})));
}

#[test]
fn wrapper_in_array_slot() {
    let args = json!([{"swe_": 1, "type": 4, "v": [0.5, 0.25]}]);
    assert_eq!(
        json_args::get(&args, Locator::at(1), TypeTag::Vec2).unwrap(),
        Some(ArgValue::Vec2([0.5, 0.25]))
    );
}

#[test]
fn wrapper_is_detected_by_marker_alone() {
    let odd = json!({"swe_": 0, "v": true});
    assert_eq!(resolve(&odd, Locator::named("v")).unwrap(), Some(&json!(true)));
}

// ---------------------------------------------------------------------------
// Depth
// ---------------------------------------------------------------------------

#[test]
fn deep_wrapper_chain_hits_configured_limit() {
    let mut node = json!(1);
    for _ in 0..10 {
        node = json!({"swe_": 1, "type": 2, "v": node});
    }
    let tight = ArgsCodec::new(ArgsConfig {
        max_depth: 3,
        ..ArgsConfig::default()
    });
    assert_eq!(tight.resolve(&node, Locator::LEAF), Err(ArgsError::DepthExceeded(3)));
    assert_eq!(resolve(&node, Locator::LEAF).unwrap(), Some(&json!(1)));
}
