use actix_web::HttpRequest;

/// The parts of the request being served that the URL helpers read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    host_url: String,
}

impl RequestContext {
    pub fn new(host_url: impl Into<String>) -> Self {
        Self {
            host_url: host_url.into(),
        }
    }

    /// Builds `scheme://host/` from the connection info of an incoming request
    ///
    /// Forwarded headers are honoured the same way actix resolves them.
    pub fn from_request(req: &HttpRequest) -> Self {
        let info = req.connection_info();
        Self::new(format!("{}://{}/", info.scheme(), info.host()))
    }

    /// Root URL of the current request, e.g. `https://bi.example.com/`
    pub fn host_url(&self) -> &str {
        &self.host_url
    }
}
