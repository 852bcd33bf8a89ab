//! Delivery of contact-form messages through EmailJS.
//!
//! The page never talks to a server of its own; EmailJS takes the template
//! parameters and sends the mail on our behalf.

use gloo_net::http::Request;
use serde::Serialize;
use thiserror::Error;

use crate::config;
use crate::contact::ContactFields;

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("EmailJS credentials are not configured")]
    NotConfigured,
    #[error("request failed: {0}")]
    Request(String),
    #[error("email service rejected the message with status {status}")]
    Rejected { status: u16 },
}

impl From<gloo_net::Error> for SubmitError {
    fn from(e: gloo_net::Error) -> Self {
        SubmitError::Request(e.to_string())
    }
}

/// Anything that can hand a filled-in contact form to a mail service.
#[allow(async_fn_in_trait)]
pub trait EmailSender {
    async fn send(&self, fields: &ContactFields) -> Result<(), SubmitError>;
}

#[derive(Serialize)]
struct TemplateParams<'a> {
    user_name: &'a str,
    user_email: &'a str,
    message: &'a str,
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EmailJsClient {
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl EmailJsClient {
    pub fn from_config() -> Self {
        Self {
            endpoint: config::EMAILJS_SEND_URL.to_string(),
            service_id: config::emailjs_service_id().to_string(),
            template_id: config::emailjs_template_id().to_string(),
            public_key: config::emailjs_public_key().to_string(),
        }
    }

    pub fn is_configured(&self) -> bool {
        [&self.service_id, &self.template_id, &self.public_key]
            .iter()
            .all(|value| !value.trim().is_empty() && !value.starts_with("YOUR_"))
    }

    fn request_body<'a>(&'a self, fields: &'a ContactFields) -> SendRequest<'a> {
        SendRequest {
            service_id: &self.service_id,
            template_id: &self.template_id,
            user_id: &self.public_key,
            template_params: TemplateParams {
                user_name: &fields.name,
                user_email: &fields.email,
                message: &fields.message,
            },
        }
    }
}

impl EmailSender for EmailJsClient {
    async fn send(&self, fields: &ContactFields) -> Result<(), SubmitError> {
        if !self.is_configured() {
            return Err(SubmitError::NotConfigured);
        }

        let response = Request::post(&self.endpoint)
            .json(&self.request_body(fields))?
            .send()
            .await?;

        if response.ok() {
            Ok(())
        } else {
            Err(SubmitError::Rejected {
                status: response.status(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> EmailJsClient {
        EmailJsClient {
            endpoint: config::EMAILJS_SEND_URL.to_string(),
            service_id: "service_abc".to_string(),
            template_id: "template_xyz".to_string(),
            public_key: "pk_123".to_string(),
        }
    }

    #[test]
    fn request_body_uses_template_field_names() {
        let fields = ContactFields {
            name: "Asha".to_string(),
            email: "asha@example.mu".to_string(),
            message: "Migrating 40 VMs".to_string(),
        };
        let client = client();
        let body = serde_json::to_value(client.request_body(&fields)).unwrap();

        assert_eq!(
            body,
            serde_json::json!({
                "service_id": "service_abc",
                "template_id": "template_xyz",
                "user_id": "pk_123",
                "template_params": {
                    "user_name": "Asha",
                    "user_email": "asha@example.mu",
                    "message": "Migrating 40 VMs"
                }
            })
        );
    }

    #[test]
    fn placeholder_credentials_are_not_configured() {
        assert!(client().is_configured());

        let placeholder = EmailJsClient {
            service_id: "YOUR_SERVICE_ID".to_string(),
            ..client()
        };
        assert!(!placeholder.is_configured());

        let blank = EmailJsClient {
            public_key: "  ".to_string(),
            ..client()
        };
        assert!(!blank.is_configured());
    }

    #[tokio::test]
    async fn unconfigured_client_fails_without_sending() {
        let placeholder = EmailJsClient {
            template_id: "YOUR_TEMPLATE_ID".to_string(),
            ..client()
        };
        let result = placeholder.send(&ContactFields::default()).await;
        assert!(matches!(result, Err(SubmitError::NotConfigured)));
    }
}
