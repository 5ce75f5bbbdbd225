use crux_http::{
    protocol::{HttpRequest, HttpResponse, HttpResult},
    HttpError,
};
use device_panel_core::BASE_URL;
use log::{debug, warn};
use reqwest::{Client, Method};

/// Executes the core's HTTP effects against one device
#[derive(Clone, Debug)]
pub struct DeviceTransport {
    client: Client,
    device_url: String,
}

impl DeviceTransport {
    pub fn new(device_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            device_url: device_url.into(),
        }
    }

    /// Rewrite a core URL onto the device
    ///
    /// The core addresses the device through [`BASE_URL`]; anything else is
    /// passed through unchanged.
    pub fn device_url_for(&self, url: &str) -> String {
        match url.strip_prefix(BASE_URL) {
            Some(path) => format!("{}{path}", self.device_url),
            None => url.to_string(),
        }
    }

    /// Execute `request`, never failing outside of the returned result
    pub async fn execute(&self, request: &HttpRequest) -> HttpResult {
        let Ok(method) = Method::from_bytes(request.method.as_bytes()) else {
            warn!("refusing request with invalid method {:?}", request.method);
            return HttpResult::Err(HttpError::Io(format!(
                "invalid HTTP method: {}",
                request.method
            )));
        };

        match self.send(method, request).await {
            Ok(response) => HttpResult::Ok(response),
            Err(e) => {
                warn!("{} {} failed: {e:#}", request.method, request.url);
                HttpResult::Err(HttpError::Io(e.to_string()))
            }
        }
    }

    async fn send(&self, method: Method, request: &HttpRequest) -> reqwest::Result<HttpResponse> {
        let url = self.device_url_for(&request.url);
        debug!("{method} {url}");

        let mut builder = self.client.request(method, url);
        for header in &request.headers {
            builder = builder.header(header.name.as_str(), header.value.as_str());
        }
        if !request.body.is_empty() {
            builder = builder.body(request.body.clone());
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;
        debug!("device answered {status} with {} bytes", body.len());

        Ok(HttpResponse::status(status).body(body.to_vec()).build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_urls_are_rewritten_onto_device() {
        let transport = DeviceTransport::new("http://10.0.0.7");
        assert_eq!(
            transport.device_url_for("https://relative/api/v1/status"),
            "http://10.0.0.7/api/v1/status"
        );
        assert_eq!(
            transport.device_url_for("https://relative/api/v1/nrf24/scan?duration=5"),
            "http://10.0.0.7/api/v1/nrf24/scan?duration=5"
        );
    }

    #[tokio::test]
    async fn invalid_method_is_an_error_not_a_get() {
        let transport = DeviceTransport::new("http://127.0.0.1:9");
        let request = HttpRequest {
            method: "GE T".to_string(),
            url: "https://relative/api/v1/status".to_string(),
            headers: Vec::new(),
            body: Vec::new(),
        };

        let HttpResult::Err(HttpError::Io(message)) = transport.execute(&request).await else {
            panic!("invalid method must not be sent");
        };
        assert_eq!(message, "invalid HTTP method: GE T");
    }

    #[test]
    fn absolute_urls_pass_through() {
        let transport = DeviceTransport::new("http://10.0.0.7");
        assert_eq!(
            transport.device_url_for("http://other.local/x"),
            "http://other.local/x"
        );
    }
}
