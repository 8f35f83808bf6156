//! Per-request context injected by the request-id middleware.

#[derive(Debug, Clone)]
pub struct RequestContext {
    pub request_id: String,
}
