//! Stonegate mail delivery
//!
//! Provides outbound email with support for:
//! - AWS SES integration for production delivery
//! - Mock email service for testing and development
//! - Contact-form notification templates for the site admin

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod aws_ses;
pub mod content;
pub mod mock;

#[derive(Error, Debug)]
pub enum EmailError {
    #[error("Email configuration error: {0}")]
    Configuration(String),

    #[error("Email validation error: {0}")]
    Validation(String),

    #[error("AWS SES error: {0}")]
    AwsSes(String),
}

/// Email message to be sent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailMessage {
    pub to: String,
    pub from: String,
    pub reply_to: Option<String>,
    pub subject: String,
    pub body_text: String,
    pub body_html: Option<String>,
}

impl EmailMessage {
    /// Create a new email message
    pub fn new(to: String, from: String, subject: String, body_text: String) -> Self {
        Self {
            to,
            from,
            reply_to: None,
            subject,
            body_text,
            body_html: None,
        }
    }

    /// Add HTML body content
    pub fn with_html(mut self, body_html: String) -> Self {
        self.body_html = Some(body_html);
        self
    }

    /// Add reply-to address
    pub fn with_reply_to(mut self, reply_to: String) -> Self {
        self.reply_to = Some(reply_to);
        self
    }
}

/// Email delivery receipt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailReceipt {
    pub message_id: String,
    pub sent_at: DateTime<Utc>,
    pub provider: String,
}

/// Email service configuration
#[derive(Debug, Clone)]
pub struct EmailConfig {
    /// Email service provider (ses, mock)
    pub provider: String,
    /// AWS region for SES
    pub aws_region: Option<String>,
    /// AWS endpoint URL (for LocalStack)
    pub aws_endpoint_url: Option<String>,
    /// Default from address
    pub default_from: String,
    /// Recipient of contact-form notifications
    pub admin_email: String,
    /// Application display name used in templates
    pub app_name: String,
    /// Enable email sending (can disable for testing)
    pub enabled: bool,
}

impl EmailConfig {
    /// Create email config from environment variables
    pub fn from_env() -> Result<Self, EmailError> {
        dotenvy::dotenv().ok();

        let provider = std::env::var("EMAIL_PROVIDER").unwrap_or_else(|_| "mock".to_string());
        let aws_region = std::env::var("AWS_REGION").ok();
        let aws_endpoint_url = std::env::var("AWS_ENDPOINT_URL").ok();

        let default_from =
            std::env::var("FROM_EMAIL").unwrap_or_else(|_| "noreply@stonegate.app".to_string());
        let admin_email =
            std::env::var("ADMIN_EMAIL").unwrap_or_else(|_| "contact@stonegate.app".to_string());
        let app_name = std::env::var("APP_NAME").unwrap_or_else(|_| "Stonegate".to_string());

        let enabled = std::env::var("EMAIL_ENABLED")
            .unwrap_or_else(|_| "true".to_string())
            .parse()
            .unwrap_or(true);

        Ok(Self {
            provider,
            aws_region,
            aws_endpoint_url,
            default_from,
            admin_email,
            app_name,
            enabled,
        })
    }
}

/// Fields of a submitted contact message, as rendered into the
/// admin-notification templates.
#[derive(Debug, Clone)]
pub struct ContactNotification {
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
    pub message: String,
    pub submitted_at: DateTime<Utc>,
}

/// Email service trait for different implementations
#[async_trait::async_trait]
pub trait EmailService: Send + Sync {
    /// Send an email message
    async fn send_email(&self, message: EmailMessage) -> Result<EmailReceipt, EmailError>;

    /// Return the default "from" address for outgoing emails
    fn default_from(&self) -> String;

    /// Return the admin address that receives contact notifications
    fn admin_email(&self) -> String;

    /// Return the application display name used in templates
    fn app_name(&self) -> &str;

    /// Notify the site admin about a newly submitted contact message
    async fn send_contact_notification(
        &self,
        notification: &ContactNotification,
    ) -> Result<EmailReceipt, EmailError> {
        let subject = format!(
            "New Contact Message from {} {}",
            notification.first_name, notification.last_name
        );
        let body_text = content::contact_notification_text(notification);
        let body_html = content::contact_notification_html(notification, self.app_name());

        let message = EmailMessage::new(
            self.admin_email(),
            self.default_from(),
            subject,
            body_text,
        )
        .with_html(body_html)
        .with_reply_to(notification.email_address.clone());

        self.send_email(message).await
    }
}

/// Email service factory
pub struct EmailServiceFactory;

impl EmailServiceFactory {
    /// Create email service based on configuration
    pub async fn create(
        config: EmailConfig,
    ) -> Result<std::sync::Arc<dyn EmailService>, EmailError> {
        if !config.enabled {
            tracing::info!("Email service disabled, using mock implementation");
            return Ok(std::sync::Arc::new(mock::MockEmailService::new()));
        }

        match config.provider.as_str() {
            "ses" | "aws-ses" => {
                tracing::info!("Creating AWS SES email service");
                let ses_service = aws_ses::SesEmailService::new(config).await?;
                Ok(std::sync::Arc::new(ses_service))
            }
            "mock" => {
                tracing::info!("Creating mock email service");
                Ok(std::sync::Arc::new(mock::MockEmailService::new()))
            }
            provider => Err(EmailError::Configuration(format!(
                "Unknown email provider: {}. Supported providers: ses, mock",
                provider
            ))),
        }
    }
}
