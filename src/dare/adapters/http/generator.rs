//! HTTP content generator client.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::dare::ports::{
    ContentGenerator, ContentGeneratorError, ContentGeneratorResult, GeneratedContent,
    GenerationRequest,
};

#[derive(Debug, Serialize)]
struct GeneratePayload<'a> {
    theme: &'a str,
    generator: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    content: Option<String>,
}

/// Calls `POST {base_url}/generate` with `{theme, generator}` and expects
/// `{content}` back.
#[derive(Debug, Clone)]
pub struct HttpContentGenerator {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
    timeout: Duration,
}

impl HttpContentGenerator {
    /// Creates a client for the generator at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ContentGeneratorError::Transport`] when the HTTP client
    /// cannot be built.
    pub fn new(
        base_url: &str,
        api_key: Option<String>,
        timeout: Duration,
    ) -> ContentGeneratorResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ContentGeneratorError::transport)?;
        Ok(Self {
            client,
            endpoint: format!("{}/generate", base_url.trim_end_matches('/')),
            api_key,
            timeout,
        })
    }

    /// Returns the full generation endpoint URL.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ContentGenerator for HttpContentGenerator {
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> ContentGeneratorResult<GeneratedContent> {
        let payload = GeneratePayload {
            theme: request.theme.as_str(),
            generator: &request.generator,
        };
        let mut call = self.client.post(&self.endpoint).json(&payload);
        if let Some(key) = &self.api_key {
            call = call.bearer_auth(key);
        }

        let response = call.send().await.map_err(|err| {
            if err.is_timeout() {
                ContentGeneratorError::Timeout(self.timeout)
            } else {
                ContentGeneratorError::transport(err)
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ContentGeneratorError::Status(status.as_u16()));
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|err| ContentGeneratorError::MalformedPayload(err.to_string()))?;

        match body.content.as_deref().map(str::trim) {
            Some(text) if !text.is_empty() => Ok(GeneratedContent {
                content: text.to_owned(),
            }),
            _ => Err(ContentGeneratorError::MalformedPayload(
                "response has no content".to_owned(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dare::domain::Theme;
    use rstest::rstest;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};
    use tokio::task::JoinHandle;

    async fn read_request(socket: &mut TcpStream) -> String {
        let mut buffer = Vec::new();
        let mut chunk = [0_u8; 1024];
        loop {
            let read = socket.read(&mut chunk).await.expect("read request");
            if read == 0 {
                break;
            }
            buffer.extend_from_slice(chunk.get(..read).expect("read within chunk"));
            let text = String::from_utf8_lossy(&buffer);
            if let Some(end) = text.find("\r\n\r\n") {
                let length = text
                    .lines()
                    .take_while(|line| !line.is_empty())
                    .filter_map(|line| line.split_once(':'))
                    .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
                    .and_then(|(_, value)| value.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if buffer.len() >= end + 4 + length {
                    break;
                }
            }
        }
        String::from_utf8_lossy(&buffer).into_owned()
    }

    async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.expect("accept");
            let request = read_request(&mut socket).await;
            let response = format!(
                "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            socket
                .write_all(response.as_bytes())
                .await
                .expect("write response");
            request
        });
        (format!("http://{addr}/"), handle)
    }

    fn request() -> GenerationRequest {
        GenerationRequest::new(Theme::new("party").expect("valid theme"), "spicy")
    }

    fn client(base_url: &str, timeout: Duration) -> HttpContentGenerator {
        HttpContentGenerator::new(base_url, Some("secret".to_owned()), timeout)
            .expect("client should build")
    }

    #[rstest]
    fn endpoint_joins_base_url_without_double_slash() {
        let generator = client("http://generator.local/", Duration::from_secs(1));
        assert_eq!(generator.endpoint(), "http://generator.local/generate");
    }

    #[rstest]
    #[tokio::test(flavor = "multi_thread")]
    async fn posts_theme_and_generator_with_bearer_token() {
        let (base_url, server) =
            serve_once("200 OK", r#"{"content":"  Moonwalk across the room "}"#).await;

        let generated = client(&base_url, Duration::from_secs(5))
            .generate(&request())
            .await
            .expect("generation should succeed");
        let raw_request = server.await.expect("server task");

        assert_eq!(generated.content, "Moonwalk across the room");
        assert!(raw_request.starts_with("POST /generate "));
        assert!(
            raw_request
                .to_ascii_lowercase()
                .contains("authorization: bearer secret")
        );
        assert!(raw_request.contains(r#""theme":"party""#));
        assert!(raw_request.contains(r#""generator":"spicy""#));
    }

    #[rstest]
    #[case("503 Service Unavailable", "{}", "status")]
    #[case("200 OK", "not json", "malformed")]
    #[case("200 OK", r#"{"content":"   "}"#, "malformed")]
    #[case("200 OK", r#"{"other":1}"#, "malformed")]
    #[tokio::test(flavor = "multi_thread")]
    async fn bad_responses_are_generator_failures(
        #[case] status: &'static str,
        #[case] body: &'static str,
        #[case] expected: &str,
    ) {
        let (base_url, server) = serve_once(status, body).await;

        let error = client(&base_url, Duration::from_secs(5))
            .generate(&request())
            .await
            .expect_err("generation should fail");
        server.await.expect("server task");

        let matched = match &error {
            ContentGeneratorError::Status(code) => expected == "status" && *code == 503,
            ContentGeneratorError::MalformedPayload(_) => expected == "malformed",
            _ => false,
        };
        assert!(matched, "unexpected error for {expected}: {error}");
    }

    #[rstest]
    #[tokio::test(flavor = "multi_thread")]
    async fn slow_generator_reports_timeout() {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");
        let server = tokio::spawn(async move {
            let (socket, _) = listener.accept().await.expect("accept");
            tokio::time::sleep(Duration::from_secs(5)).await;
            drop(socket);
        });

        let error = client(&format!("http://{addr}"), Duration::from_millis(100))
            .generate(&request())
            .await
            .expect_err("generation should time out");
        server.abort();

        assert!(matches!(error, ContentGeneratorError::Timeout(_)), "{error}");
    }
}
