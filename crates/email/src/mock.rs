//! Mock Email Service Implementation
//!
//! Provides in-memory email capture for testing without external
//! dependencies. Integration tests assert on the captured messages.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{EmailError, EmailMessage, EmailReceipt, EmailService};

/// Email captured by the mock service
#[derive(Debug, Clone)]
pub struct CapturedEmail {
    pub message: EmailMessage,
    pub receipt: EmailReceipt,
    pub captured_at: DateTime<Utc>,
}

/// Mock email service for testing
#[derive(Debug, Clone)]
pub struct MockEmailService {
    emails: Arc<Mutex<Vec<CapturedEmail>>>,
    default_from: String,
    admin_email: String,
    app_name: String,
}

impl MockEmailService {
    /// Create a new mock email service
    pub fn new() -> Self {
        Self {
            emails: Arc::new(Mutex::new(Vec::new())),
            default_from: "noreply@stonegate.test".to_string(),
            admin_email: "contact@stonegate.test".to_string(),
            app_name: "Stonegate".to_string(),
        }
    }

    /// Get all captured emails
    pub fn captured_emails(&self) -> Vec<CapturedEmail> {
        self.emails.lock().unwrap().clone()
    }

    /// Get captured emails sent to a specific recipient
    pub fn emails_to(&self, recipient: &str) -> Vec<CapturedEmail> {
        self.emails
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.message.to == recipient)
            .cloned()
            .collect()
    }

    /// Number of captured emails
    pub fn sent_count(&self) -> usize {
        self.emails.lock().unwrap().len()
    }

    /// Drop all captured emails
    pub fn clear(&self) {
        self.emails.lock().unwrap().clear();
    }
}

impl Default for MockEmailService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl EmailService for MockEmailService {
    async fn send_email(&self, message: EmailMessage) -> Result<EmailReceipt, EmailError> {
        let receipt = EmailReceipt {
            message_id: Uuid::new_v4().to_string(),
            sent_at: Utc::now(),
            provider: "mock".to_string(),
        };

        tracing::debug!(to = %message.to, subject = %message.subject, "mock email captured");

        self.emails.lock().unwrap().push(CapturedEmail {
            message,
            receipt: receipt.clone(),
            captured_at: Utc::now(),
        });

        Ok(receipt)
    }

    fn default_from(&self) -> String {
        self.default_from.clone()
    }

    fn admin_email(&self) -> String {
        self.admin_email.clone()
    }

    fn app_name(&self) -> &str {
        &self.app_name
    }
}
