use crate::config::ProviderConfig;
use crate::quiz::model::{Category, Question};
use crate::trivia::error::FetchError;
use crate::trivia::wire;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// HTTP client for the trivia provider. Cheap to clone; clones share the
/// underlying connection pool.
#[derive(Debug, Clone)]
pub struct TriviaClient {
    client: Client,
    base_url: String,
    categories_path: String,
    questions_path: String,
    amount_param: String,
}

impl TriviaClient {
    pub fn new(config: &ProviderConfig) -> Result<Self, FetchError> {
        let mut builder = Client::builder().user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            categories_path: config.categories_path.trim_start_matches('/').to_string(),
            questions_path: config.questions_path.trim_start_matches('/').to_string(),
            amount_param: config.amount_param.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    pub async fn fetch_categories(&self) -> Result<Vec<Category>, FetchError> {
        let url = self.url(&self.categories_path);
        debug!(%url, "fetching categories");
        let body = self.get(self.client.get(&url)).await?;
        wire::decode_categories(&body)
    }

    pub async fn fetch_questions(
        &self,
        category: u32,
        amount: u8,
    ) -> Result<Vec<Question>, FetchError> {
        let url = self.url(&self.questions_path);
        debug!(%url, category, amount, "fetching questions");
        let request = self.client.get(&url).query(&[
            (self.amount_param.as_str(), amount.to_string()),
            ("category", category.to_string()),
            ("type", "multiple".to_string()),
        ]);
        let body = self.get(request).await?;
        wire::decode_questions(&body)
    }

    async fn get(&self, request: reqwest::RequestBuilder) -> Result<String, FetchError> {
        let response = request.send().await?;

        if !response.status().is_success() {
            return Err(FetchError::Network(format!(
                "HTTP {}",
                response.status()
            )));
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Serve one canned HTTP response on a local port. The handle yields the
    /// request line the client sent.
    async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut chunk = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&chunk[..n]);
            }
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
            String::from_utf8_lossy(&request)
                .lines()
                .next()
                .unwrap_or_default()
                .to_string()
        });
        (format!("http://{}", addr), handle)
    }

    fn client_for(base_url: String) -> TriviaClient {
        TriviaClient::new(&ProviderConfig {
            base_url,
            ..ProviderConfig::default()
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_fetch_questions_sends_batch_query() {
        let (base, server) = serve_once(
            "200 OK",
            r#"{"response_code":0,"results":[{"question":"2 + 2?","correct_answer":"4","incorrect_answers":["3","5","22"]}]}"#,
        )
        .await;
        let questions = client_for(base).fetch_questions(9, 4).await.unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].correct_answer, "4");
        assert_eq!(
            server.await.unwrap(),
            "GET /api.php?amount=4&category=9&type=multiple HTTP/1.1"
        );
    }

    #[tokio::test]
    async fn test_fetch_categories_hits_category_path() {
        let (base, server) = serve_once(
            "200 OK",
            r#"{"trivia_categories":[{"id":9,"name":"General Knowledge"}]}"#,
        )
        .await;
        let categories = client_for(base).fetch_categories().await.unwrap();
        assert_eq!(categories, vec![Category { id: 9, name: "General Knowledge".into() }]);
        assert_eq!(server.await.unwrap(), "GET /api_category.php HTTP/1.1");
    }

    #[tokio::test]
    async fn test_server_error_status_is_network_error() {
        let (base, server) = serve_once("500 Internal Server Error", "oops").await;
        let err = client_for(base).fetch_questions(9, 4).await.unwrap_err();
        assert!(matches!(err, FetchError::Network(ref msg) if msg.contains("500")), "{err:?}");
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_response_code_is_rejected() {
        let (base, server) = serve_once("200 OK", r#"{"response_code":1,"results":[]}"#).await;
        let err = client_for(base).fetch_questions(9, 4).await.unwrap_err();
        assert_eq!(err, FetchError::Rejected { code: 1 });
        server.await.unwrap();
    }

    #[test]
    fn test_client_normalizes_urls() {
        let config = ProviderConfig {
            base_url: "https://trivia.example.com/".into(),
            categories_path: "/categories".into(),
            questions_path: "questions".into(),
            amount_param: "count".into(),
            request_timeout_secs: Some(5),
        };
        let client = TriviaClient::new(&config).unwrap();
        assert_eq!(
            client.url(&client.categories_path),
            "https://trivia.example.com/categories"
        );
        assert_eq!(
            client.url(&client.questions_path),
            "https://trivia.example.com/questions"
        );
        assert_eq!(client.amount_param, "count");
    }

    #[test]
    fn test_default_provider_is_opentdb() {
        let client = TriviaClient::new(&ProviderConfig::default()).unwrap();
        assert_eq!(
            client.url(&client.categories_path),
            "https://opentdb.com/api_category.php"
        );
        assert_eq!(client.url(&client.questions_path), "https://opentdb.com/api.php");
    }
}
