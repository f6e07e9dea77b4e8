//! Shared email content templates
//!
//! Canonical content generators for the contact-form admin notification,
//! used by both the production (SES) and mock email services.

use crate::ContactNotification;

/// Generate the plain-text body for a contact notification email.
pub fn contact_notification_text(n: &ContactNotification) -> String {
    format!(
        "You have received a new contact message.\n\n\
        Name: {} {}\n\
        Email: {}\n\n\
        Message:\n\
        {}\n\n\
        Submitted on: {}",
        n.first_name,
        n.last_name,
        n.email_address,
        n.message,
        n.submitted_at.format("%Y-%m-%d %H:%M:%S UTC")
    )
}

/// Generate the styled HTML body for a contact notification email.
pub fn contact_notification_html(n: &ContactNotification, app_name: &str) -> String {
    format!(
        r#"
            <div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto; color: #333;">
                <h2 style="color: #9f6a2b; text-align: center; margin-bottom: 20px;">New Contact Message</h2>

                <p style="font-size: 16px; line-height: 1.5; margin-bottom: 20px;">
                    You have received a new message from the website contact form.
                </p>

                <table style="width: 100%; border-collapse: collapse; margin-bottom: 20px;">
                    <tr>
                        <td style="padding: 10px; font-weight: bold; width: 140px; color: #9f6a2b;">Name:</td>
                        <td style="padding: 10px;">{first_name} {last_name}</td>
                    </tr>
                    <tr>
                        <td style="padding: 10px; font-weight: bold; color: #9f6a2b;">Email:</td>
                        <td style="padding: 10px;">
                            <a href="mailto:{email}" style="color: #9f6a2b; text-decoration: none;">{email}</a>
                        </td>
                    </tr>
                    <tr>
                        <td style="padding: 10px; font-weight: bold; vertical-align: top; color: #9f6a2b;">Message:</td>
                        <td style="padding: 10px; white-space: pre-line;">{message}</td>
                    </tr>
                    <tr>
                        <td style="padding: 10px; font-weight: bold; color: #9f6a2b;">Submitted At:</td>
                        <td style="padding: 10px;">{submitted_at}</td>
                    </tr>
                </table>

                <hr style="border: none; border-top: 1px solid #e5e7eb; margin: 20px 0;">

                <p style="font-size: 12px; color: #6b7280; text-align: center;">
                    © {year} {app_name}. All rights reserved.
                </p>
            </div>
            "#,
        first_name = n.first_name,
        last_name = n.last_name,
        email = n.email_address,
        message = n.message,
        submitted_at = n.submitted_at.format("%Y-%m-%d %H:%M:%S UTC"),
        year = n.submitted_at.format("%Y"),
        app_name = app_name
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample() -> ContactNotification {
        ContactNotification {
            first_name: "Ada".to_string(),
            last_name: "Byron".to_string(),
            email_address: "ada@example.com".to_string(),
            message: "Hello there".to_string(),
            submitted_at: Utc::now(),
        }
    }

    #[test]
    fn text_body_contains_all_fields() {
        let body = contact_notification_text(&sample());
        assert!(body.contains("Ada Byron"));
        assert!(body.contains("ada@example.com"));
        assert!(body.contains("Hello there"));
    }

    #[test]
    fn html_body_contains_all_fields_and_app_name() {
        let body = contact_notification_html(&sample(), "Stonegate");
        assert!(body.contains("Ada Byron"));
        assert!(body.contains("mailto:ada@example.com"));
        assert!(body.contains("Hello there"));
        assert!(body.contains("Stonegate"));
    }
}
