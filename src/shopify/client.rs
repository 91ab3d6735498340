use anyhow::{anyhow, Context, Result};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use crate::config::ShopifyConfig;
use crate::metafield::mutation::MutationDocument;

const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";
const ERROR_BODY_LOG_LIMIT: usize = 2_000;

fn truncate_for_log(mut s: String, max_len: usize) -> String {
    if s.len() > max_len {
        let mut cut = max_len;
        while !s.is_char_boundary(cut) {
            cut -= 1;
        }
        s.truncate(cut);
        s.push('…');
    }
    s
}

/// Sends a GraphQL mutation and hands back the decoded JSON body.
///
/// Errors mean the call itself failed (connection, timeout, non-2xx status,
/// undecodable body). Business errors reported inside the body are left for
/// the caller to inspect.
#[async_trait::async_trait]
pub trait MutationExecutor: Send + Sync {
    async fn execute_mutation(&self, document: &MutationDocument) -> Result<Value>;
}

/// Shopify Admin GraphQL client.
#[derive(Debug, Clone)]
pub struct ShopifyClient {
    endpoint: String,
    access_token: String,
    http: Client,
}

impl ShopifyClient {
    pub fn new(config: &ShopifyConfig) -> Result<Self> {
        let http = Client::builder()
            .user_agent(concat!("metafield-relay/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("failed to build Shopify HTTP client")?;

        Ok(Self {
            endpoint: config.graphql_endpoint(),
            access_token: config.access_token.clone(),
            http,
        })
    }

    /// Point the client at a different GraphQL URL (proxies, local fakes).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl MutationExecutor for ShopifyClient {
    async fn execute_mutation(&self, document: &MutationDocument) -> Result<Value> {
        let resp = self
            .http
            .post(&self.endpoint)
            .header(ACCESS_TOKEN_HEADER, &self.access_token)
            .json(document)
            .send()
            .await
            .with_context(|| format!("POST {} failed", self.endpoint))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(anyhow!(
                "Shopify returned {}: {}",
                status,
                truncate_for_log(body, ERROR_BODY_LOG_LIMIT)
            ));
        }

        resp.json::<Value>()
            .await
            .context("failed to decode Shopify GraphQL response")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metafield::mutation::MetafieldInput;
    use crate::metafield::product_id::ProductId;
    use crate::metafield::year_range::YearRange;
    use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
    use serde_json::json;

    fn sample_document() -> MutationDocument {
        let years = YearRange::parse_at("2010-2011", 2026).unwrap().years();
        MutationDocument::metafields_set(MetafieldInput::vehicle_years(
            &ProductId::normalize("42"),
            &years,
        ))
    }

    async fn fake_graphql(req: HttpRequest, body: web::Json<Value>) -> HttpResponse {
        let token = req
            .headers()
            .get(ACCESS_TOKEN_HEADER)
            .and_then(|h| h.to_str().ok())
            .unwrap_or_default()
            .to_string();
        if token != "shpat_test" {
            return HttpResponse::Unauthorized().body("[API] Invalid API key or access token");
        }
        let input = &body["variables"]["metafields"][0];
        HttpResponse::Ok().json(json!({
            "data": {
                "metafieldsSet": {
                    "metafields": [{
                        "key": input["key"],
                        "namespace": input["namespace"],
                        "value": input["value"]
                    }],
                    "userErrors": []
                }
            }
        }))
    }

    async fn start_fake(path: &'static str) -> String {
        let server = HttpServer::new(move || App::new().route(path, web::post().to(fake_graphql)))
            .workers(1)
            .bind(("127.0.0.1", 0))
            .unwrap();
        let addr = server.addrs()[0];
        actix_web::rt::spawn(server.run());
        format!("http://{}{}", addr, path)
    }

    #[test]
    fn endpoint_comes_from_config() {
        let client = ShopifyClient::new(&ShopifyConfig::new("demo.myshopify.com", "t")).unwrap();
        assert_eq!(
            client.endpoint(),
            "https://demo.myshopify.com/admin/api/2024-01/graphql.json"
        );
    }

    #[test]
    fn truncates_long_bodies_on_char_boundary() {
        let out = truncate_for_log("ééé".to_string(), 3);
        assert_eq!(out, "é…");
    }

    #[actix_web::test]
    async fn posts_document_with_access_token() {
        let url = start_fake("/admin/api/2024-01/graphql.json").await;
        let client = ShopifyClient::new(&ShopifyConfig::new("unused", "shpat_test"))
            .unwrap()
            .with_endpoint(url);

        let body = client.execute_mutation(&sample_document()).await.unwrap();
        assert_eq!(
            body["data"]["metafieldsSet"]["metafields"][0]["value"],
            "2010,2011"
        );
        assert_eq!(
            body["data"]["metafieldsSet"]["metafields"][0]["key"],
            "vehicle_year_range_list"
        );
    }

    #[actix_web::test]
    async fn non_success_status_is_an_error() {
        let url = start_fake("/graphql.json").await;
        let client = ShopifyClient::new(&ShopifyConfig::new("unused", "wrong"))
            .unwrap()
            .with_endpoint(url);

        let err = client.execute_mutation(&sample_document()).await.unwrap_err();
        assert!(err.to_string().contains("401"));
    }

    #[tokio::test]
    async fn connection_failure_is_an_error() {
        let mut config = ShopifyConfig::new("unused", "t");
        config.timeout_secs = 2;
        let client = ShopifyClient::new(&config)
            .unwrap()
            .with_endpoint("http://127.0.0.1:1/graphql.json");

        assert!(client.execute_mutation(&sample_document()).await.is_err());
    }
}
