//! Blocking ureq transport for `TodoStore`.

use todo_core::{ApiError, HttpMethod, HttpRequest, HttpResponse, Transport};

pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        // Statuses are interpreted by `TodoClient`, so 4xx/5xx come back as data.
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn execute(&self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        let agent = &self.agent;
        let result = match (req.method, req.body) {
            (HttpMethod::Get, _) => agent.get(&req.path).call(),
            (HttpMethod::Delete, _) => agent.delete(&req.path).call(),
            (HttpMethod::Post, Some(body)) => {
                agent.post(&req.path).content_type("application/json").send(body.as_bytes())
            }
            (HttpMethod::Post, None) => agent.post(&req.path).send_empty(),
            (HttpMethod::Patch, Some(body)) => {
                agent.patch(&req.path).content_type("application/json").send(body.as_bytes())
            }
            (HttpMethod::Patch, None) => agent.patch(&req.path).send_empty(),
        };
        let mut response = result.map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(HttpResponse::new(status, body))
    }
}
