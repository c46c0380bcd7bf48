use serde::Serialize;
use serde_json::Value;

/// Serialize `value` to canonical JSON bytes: object keys sorted
/// lexicographically (recursive), arrays keep their order, no whitespace.
pub fn canonical_json_bytes<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<Vec<u8>> {
    let tree = serde_json::to_value(value)?;
    serde_json::to_vec(&sort_value(tree))
}

fn sort_value(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut pairs: Vec<(String, Value)> =
                map.into_iter().map(|(k, v)| (k, sort_value(v))).collect();
            pairs.sort_by(|a, b| a.0.cmp(&b.0));
            Value::Object(pairs.into_iter().collect())
        }
        Value::Array(arr) => Value::Array(arr.into_iter().map(sort_value).collect()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn canon_str(value: &Value) -> String {
        String::from_utf8(canonical_json_bytes(value).unwrap()).unwrap()
    }

    #[test]
    fn keys_sorted_lexicographically() {
        let input: Value = serde_json::from_str(r#"{"z":1,"a":2,"m":3}"#).unwrap();
        assert_eq!(canon_str(&input), r#"{"a":2,"m":3,"z":1}"#);
    }

    #[test]
    fn nested_objects_sorted() {
        let input: Value = serde_json::from_str(r#"{"b":{"z":1,"a":2},"a":1}"#).unwrap();
        assert_eq!(canon_str(&input), r#"{"a":1,"b":{"a":2,"z":1}}"#);
    }

    #[test]
    fn arrays_preserve_order() {
        let input: Value = serde_json::from_str(r#"{"a":[3,1,2]}"#).unwrap();
        assert_eq!(canon_str(&input), r#"{"a":[3,1,2]}"#);
    }

    #[test]
    fn hash_map_insertion_order_does_not_leak() {
        let mut first = HashMap::new();
        first.insert("alpha", 1);
        first.insert("omega", 2);
        let mut second = HashMap::new();
        second.insert("omega", 2);
        second.insert("alpha", 1);
        assert_eq!(
            canonical_json_bytes(&first).unwrap(),
            canonical_json_bytes(&second).unwrap()
        );
    }

    #[test]
    fn non_string_map_keys_fail() {
        let mut map = HashMap::new();
        map.insert(vec![1u8], "x");
        assert!(canonical_json_bytes(&map).is_err());
    }
}
