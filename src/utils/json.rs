//! JSON access helpers for loosely-shaped provider payloads
//!
//! Upstream responses are handled as `serde_json::Value`; every accessor
//! here returns `None` instead of failing when a field is missing or has an
//! unexpected shape.

use serde_json::Value;

/// First element of a list-like value.
///
/// Missing values, non-arrays and empty arrays all yield `None`.
pub fn first_item(value: Option<&Value>) -> Option<Value> {
    value.and_then(Value::as_array).and_then(|items| items.first()).cloned()
}

/// Look up a nested field by dotted path (`"market_data.current_price.usd"`).
pub fn lookup<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(value, |current, key| current.get(key))
        .filter(|found| !found.is_null())
}

/// String at `path`
pub fn str_at(value: &Value, path: &str) -> Option<String> {
    lookup(value, path).and_then(Value::as_str).map(str::to_string)
}

/// Number at `path`, accepting integers and floats
pub fn f64_at(value: &Value, path: &str) -> Option<f64> {
    lookup(value, path).and_then(Value::as_f64)
}

/// Non-negative integer at `path`
pub fn u64_at(value: &Value, path: &str) -> Option<u64> {
    lookup(value, path).and_then(Value::as_u64)
}

/// First string of the list at `path`
pub fn first_str_at(value: &Value, path: &str) -> Option<String> {
    first_item(lookup(value, path)).and_then(|item| item.as_str().map(str::to_string))
}

/// At most `limit` leading elements of the array under `key`, in order.
///
/// A missing key or non-array value yields an empty list.
pub fn take_array(value: &Value, key: &str, limit: usize) -> Vec<Value> {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(|items| items.iter().take(limit).cloned().collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_first_item_empty_and_missing() {
        assert_eq!(first_item(Some(&json!([]))), None);
        assert_eq!(first_item(None), None);
        assert_eq!(first_item(Some(&json!(null))), None);
    }

    #[test]
    fn test_first_item_takes_head() {
        assert_eq!(first_item(Some(&json!(["a", "b"]))), Some(json!("a")));
    }

    #[test]
    fn test_first_item_non_list() {
        assert_eq!(first_item(Some(&json!("a"))), None);
        assert_eq!(first_item(Some(&json!({"0": "a"}))), None);
    }

    #[test]
    fn test_lookup_nested_path() {
        let v = json!({"market_data": {"current_price": {"usd": 1.5}}});
        assert_eq!(f64_at(&v, "market_data.current_price.usd"), Some(1.5));
        assert_eq!(f64_at(&v, "market_data.current_price.eur"), None);
        assert_eq!(f64_at(&v, "market_data.total_supply"), None);
    }

    #[test]
    fn test_lookup_treats_null_as_missing() {
        let v = json!({"links": {"twitter_screen_name": null}});
        assert!(lookup(&v, "links.twitter_screen_name").is_none());
    }

    #[test]
    fn test_take_array_truncates_in_order() {
        let v = json!({"coins": (0..15).collect::<Vec<_>>()});
        let coins = take_array(&v, "coins", 10);
        assert_eq!(coins.len(), 10);
        assert_eq!(coins[0], json!(0));
        assert_eq!(coins[9], json!(9));
        assert!(take_array(&v, "exchanges", 5).is_empty());
    }
}
