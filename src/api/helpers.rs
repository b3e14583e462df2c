//! Response builders for API Gateway proxy responses.

use serde_json::{Value, json};

const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";

/// Returns an HTML page response. Pages are never cached: every load confirms afresh.
#[must_use]
pub fn html_response(status_code: u16, html: &str) -> Value {
    json!({
        "statusCode": status_code,
        "headers": {
            "Content-Type": HTML_CONTENT_TYPE,
            "Cache-Control": "no-store"
        },
        "body": html
    })
}

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(status_code: u16, message: &str) -> Value {
    json!({
        "statusCode": status_code,
        "headers": { "Content-Type": "application/json" },
        "body": json!({ "error": message }).to_string()
    })
}

/// Returns a 404 for paths this function does not serve.
#[must_use]
pub fn not_found(path: &str) -> Value {
    err_response(404, &format!("No route for {path}"))
}

/// Returns a 405 advertising the only supported method.
#[must_use]
pub fn method_not_allowed() -> Value {
    json!({
        "statusCode": 405,
        "headers": { "Content-Type": "application/json", "Allow": "GET" },
        "body": json!({ "error": "Method not allowed" }).to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_response_headers() {
        let resp = html_response(200, "<p>hi</p>");
        assert_eq!(resp["statusCode"], 200);
        assert_eq!(resp["headers"]["Content-Type"], "text/html; charset=utf-8");
        assert_eq!(resp["headers"]["Cache-Control"], "no-store");
        assert_eq!(resp["body"], "<p>hi</p>");
    }

    #[test]
    fn test_err_response_body_is_json_string() {
        let resp = err_response(400, "Missing path");
        let body: Value = serde_json::from_str(resp["body"].as_str().unwrap()).unwrap();
        assert_eq!(body["error"], "Missing path");
    }

    #[test]
    fn test_method_not_allowed_sets_allow() {
        let resp = method_not_allowed();
        assert_eq!(resp["statusCode"], 405);
        assert_eq!(resp["headers"]["Allow"], "GET");
    }
}
