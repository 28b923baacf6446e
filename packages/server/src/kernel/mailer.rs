use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use tracing::{error, info};

use super::{BaseMailer, OutgoingEmail};

/// Transactional Mail Client (Mailjet HTTP API)
/// Sends notification emails to the family through the provider's
/// `/v3.1/send` endpoint, authenticated with the account/secret pair.
pub struct MailjetClient {
    client: Client,
    base_url: String,
    api_key: String,
    api_secret: String,
    from_email: String,
    from_name: String,
}

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    #[serde(rename = "Messages")]
    messages: Vec<Message<'a>>,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    #[serde(rename = "From")]
    from: Address<'a>,
    #[serde(rename = "To")]
    to: Vec<Address<'a>>,
    #[serde(rename = "Subject")]
    subject: &'a str,
    #[serde(rename = "HTMLPart")]
    html_part: &'a str,
}

#[derive(Debug, Serialize)]
struct Address<'a> {
    #[serde(rename = "Email")]
    email: &'a str,
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
}

impl MailjetClient {
    pub fn new(
        base_url: &str,
        api_key: &str,
        api_secret: &str,
        from_email: &str,
        from_name: &str,
    ) -> Result<Self> {
        // Transport-level bound; the relay applies its own 10s bound too.
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            api_secret: api_secret.to_string(),
            from_email: from_email.to_string(),
            from_name: from_name.to_string(),
        })
    }
}

#[async_trait]
impl BaseMailer for MailjetClient {
    async fn send(&self, email: &OutgoingEmail) -> Result<()> {
        let payload = SendRequest {
            messages: vec![Message {
                from: Address {
                    email: &self.from_email,
                    name: Some(&self.from_name),
                },
                to: vec![Address {
                    email: &email.to,
                    name: None,
                }],
                subject: &email.subject,
                html_part: &email.html,
            }],
        };

        info!(to = %email.to, subject = %email.subject, "Dispatching notification email");

        let response = self
            .client
            .post(format!("{}/v3.1/send", self.base_url))
            .basic_auth(&self.api_key, Some(&self.api_secret))
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!("Mail API rejected send {}: {}", status, body);
            anyhow::bail!("Mail API error {}: {}", status, body);
        }

        info!("Notification email accepted by provider");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn test_email() -> OutgoingEmail {
        OutgoingEmail {
            to: "famille@example.org".to_string(),
            subject: "Test".to_string(),
            html: "<p>ok</p>".to_string(),
        }
    }

    #[tokio::test]
    async fn posts_message_to_send_endpoint() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/v3.1/send")
                .json_body_partial(
                    r#"{"Messages": [{"Subject": "Test", "HTMLPart": "<p>ok</p>"}]}"#,
                );
            then.status(200)
                .json_body(serde_json::json!({ "Messages": [] }));
        });

        let client = MailjetClient::new(
            &server.base_url(),
            "account",
            "secret",
            "site@example.org",
            "Site Obsèques",
        )
        .unwrap();

        client.send(&test_email()).await.unwrap();
        mock.assert();
    }

    #[tokio::test]
    async fn surfaces_provider_rejection() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/v3.1/send");
            then.status(401).body("unauthorized");
        });

        let client = MailjetClient::new(
            &server.base_url(),
            "account",
            "wrong-secret",
            "site@example.org",
            "Site Obsèques",
        )
        .unwrap();

        let err = client.send(&test_email()).await.unwrap_err();
        assert!(err.to_string().contains("401"));
    }
}
