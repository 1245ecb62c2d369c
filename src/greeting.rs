/// Name used when neither the query nor the body supplies one.
pub const DEFAULT_NAME: &str = "world";

/// Inputs of a single greeting call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GreetingRequest {
    pub query_name: Option<String>,
    pub body_text: Option<String>,
}

impl GreetingRequest {
    pub fn new(query_name: Option<String>, body_text: Option<String>) -> Self {
        Self {
            query_name,
            body_text,
        }
    }

    /// Query wins over body; empty strings count as absent.
    pub fn resolved_name(&self) -> &str {
        non_empty(&self.query_name)
            .or_else(|| non_empty(&self.body_text))
            .unwrap_or(DEFAULT_NAME)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

pub fn handle(request: &GreetingRequest) -> String {
    format!(
        "Hello, {}! Welcome to Azure Functions!",
        request.resolved_name()
    )
}
