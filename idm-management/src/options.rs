//! Query-string options for read and list calls.
//!
//! The service defines which keys it understands; nothing is validated here.

/// One `key=value` query parameter. Order is preserved when encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOption {
    pub key: String,
    pub value: String,
}

impl RequestOption {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Arbitrary query parameter.
pub fn parameter(key: impl Into<String>, value: impl Into<String>) -> RequestOption {
    RequestOption::new(key, value)
}

/// Page index (0-based on the management API).
pub fn page(page: u32) -> RequestOption {
    RequestOption::new("page", page.to_string())
}

/// Number of results per page.
pub fn per_page(per_page: u32) -> RequestOption {
    RequestOption::new("per_page", per_page.to_string())
}

/// Ask the service to wrap list results with totals.
pub fn include_totals(include: bool) -> RequestOption {
    RequestOption::new("include_totals", include.to_string())
}

/// Restrict the response to `fields`.
pub fn include_fields(fields: &[&str]) -> Vec<RequestOption> {
    vec![
        RequestOption::new("fields", fields.join(",")),
        RequestOption::new("include_fields", "true"),
    ]
}

/// Return every field except `fields`.
pub fn exclude_fields(fields: &[&str]) -> Vec<RequestOption> {
    vec![
        RequestOption::new("fields", fields.join(",")),
        RequestOption::new("include_fields", "false"),
    ]
}

/// Renders `options` as `?k=v&k2=v2`, or `""` when empty.
pub fn encode_query(options: &[RequestOption]) -> String {
    if options.is_empty() {
        return String::new();
    }

    let pairs: Vec<String> = options
        .iter()
        .map(|o| {
            format!(
                "{}={}",
                urlencoding::encode(&o.key),
                urlencoding::encode(&o.value)
            )
        })
        .collect();
    format!("?{}", pairs.join("&"))
}
