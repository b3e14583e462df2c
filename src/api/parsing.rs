use serde_json::Value;

pub fn v_path<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = root;
    for key in path {
        cur = cur.get(*key)?;
    }
    Some(cur)
}

pub fn v_str<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    v_path(root, path).and_then(|v| v.as_str())
}

pub fn get_header_value<'a>(headers: &'a Value, name: &str) -> Option<&'a str> {
    if let Some(v) = headers.get(name).and_then(|s| s.as_str()) {
        return Some(v);
    }
    headers.as_object().and_then(|map| {
        map.iter().find_map(|(k, v)| {
            if k.eq_ignore_ascii_case(name) {
                v.as_str()
            } else {
                None
            }
        })
    })
}

/// Request path from an HTTP API (v2) or REST API (v1) proxy event.
pub fn request_path(payload: &Value) -> Option<&str> {
    v_str(payload, &["rawPath"]).or_else(|| v_str(payload, &["path"]))
}

/// Request method, if the event carries one.
pub fn request_method(payload: &Value) -> Option<&str> {
    v_str(payload, &["requestContext", "http", "method"])
        .or_else(|| v_str(payload, &["httpMethod"]))
}

/// First value of query parameter `name`, percent-decoded.
pub fn query_param(payload: &Value, name: &str) -> Option<String> {
    if let Some(raw) = v_str(payload, &["rawQueryString"])
        && !raw.is_empty()
    {
        return raw.split('&').find_map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            if decode_component(key) == name {
                Some(decode_component(value))
            } else {
                None
            }
        });
    }

    v_str(payload, &["queryStringParameters", name]).map(ToString::to_string)
}

/// Percent-decode one query or path component; `+` is a space.
pub fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(std::borrow::Cow::into_owned)
        .unwrap_or(spaced)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_path_prefers_raw_path() {
        let v2 = json!({ "rawPath": "/a", "path": "/b" });
        assert_eq!(request_path(&v2), Some("/a"));
        let v1 = json!({ "path": "/b" });
        assert_eq!(request_path(&v1), Some("/b"));
    }

    #[test]
    fn test_request_method_both_payload_versions() {
        let v2 = json!({ "requestContext": { "http": { "method": "GET" } } });
        assert_eq!(request_method(&v2), Some("GET"));
        let v1 = json!({ "httpMethod": "POST" });
        assert_eq!(request_method(&v1), Some("POST"));
        assert_eq!(request_method(&json!({})), None);
    }

    #[test]
    fn test_query_param_from_raw_query_string() {
        let payload = json!({ "rawQueryString": "utm=x&roleId=5" });
        assert_eq!(query_param(&payload, "roleId").as_deref(), Some("5"));
        assert_eq!(query_param(&payload, "missing"), None);
    }

    #[test]
    fn test_query_param_decodes_values() {
        let payload = json!({ "rawQueryString": "name=Ada%20L+ovelace" });
        assert_eq!(
            query_param(&payload, "name").as_deref(),
            Some("Ada L ovelace")
        );
    }

    #[test]
    fn test_query_param_falls_back_to_parameter_map() {
        let payload = json!({ "queryStringParameters": { "roleId": "2" } });
        assert_eq!(query_param(&payload, "roleId").as_deref(), Some("2"));
    }

    #[test]
    fn test_get_header_value_is_case_insensitive() {
        let headers = json!({ "x-amzn-trace-id": "Root=1-abc" });
        assert_eq!(
            get_header_value(&headers, "X-Amzn-Trace-Id"),
            Some("Root=1-abc")
        );
    }
}
