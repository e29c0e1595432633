//! Diagnostics for inbound federation responses that could not be decoded.
//!
//! Parameter values are never logged, only their names and sizes.

/// What is known about an inbound request carrying a malformed response.
#[derive(Debug, Clone, Default)]
pub struct InboundRequestSummary {
    pub method: String,
    pub content_type: Option<String>,
    pub content_length: Option<u64>,
    pub request_id: Option<String>,
    /// Parameter names with their first value, in request order.
    pub parameters: Vec<(String, Option<String>)>,
}

impl InboundRequestSummary {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            ..Self::default()
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn with_content_length(mut self, content_length: u64) -> Self {
        self.content_length = Some(content_length);
        self
    }

    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    pub fn with_parameter(mut self, name: impl Into<String>, value: Option<&str>) -> Self {
        self.parameters.push((name.into(), value.map(String::from)));
        self
    }

    /// `(name/size)` for every parameter, separated by spaces.
    pub fn parameter_sizes(&self) -> String {
        describe_parameters(
            self.parameters
                .iter()
                .map(|(name, value)| (name.as_str(), value.as_deref())),
        )
    }
}

/// Format parameters as `(name/size)` pairs joined by a single space.
///
/// Size is the value's length in UTF-16 code units; a missing value has size 0.
pub fn describe_parameters<'a>(
    params: impl IntoIterator<Item = (&'a str, Option<&'a str>)>,
) -> String {
    params
        .into_iter()
        .map(|(name, value)| {
            let size = value.map_or(0, |v| v.encode_utf16().count());
            format!("({}/{})", name, size)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Report a malformed inbound response: a `warn` line without details, and
/// the request summary at `debug`.
pub fn log_malformed_response(request: &InboundRequestSummary) {
    tracing::warn!("Malformed SAML response. More details at log level DEBUG.");
    tracing::debug!(
        method = %request.method,
        params = %request.parameter_sizes(),
        content_type = request.content_type.as_deref().unwrap_or(""),
        content_length = ?request.content_length,
        request_id = request.request_id.as_deref().unwrap_or(""),
        "Malformed SAML response details"
    );
}
