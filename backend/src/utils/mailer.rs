use lettre::{
    message::header::ContentType, transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use resend_rs::{types::CreateEmailBaseOptions, Resend};

use crate::handlers::contact_dtos::ValidContact;

enum Provider {
    Smtp(AsyncSmtpTransport<Tokio1Executor>),
    Resend(Resend),
}

pub struct Mailer {
    provider: Provider,
    from: String,
    recipient: String,
}

impl Mailer {
    // Relay is optional: returns None unless a provider is fully configured.
    pub fn from_env() -> Option<Mailer> {
        let provider = match std::env::var("EMAIL_PROVIDER").ok().as_deref() {
            Some("resend") => {
                let api_key = std::env::var("RESEND_API_KEY").ok()?;
                Provider::Resend(Resend::new(&api_key))
            }
            _ => {
                let host = std::env::var("SMTP_HOST").ok()?;
                let user = std::env::var("EMAIL_USER").ok()?;
                let pass = std::env::var("EMAIL_PASS").ok()?;
                let mut builder = AsyncSmtpTransport::<Tokio1Executor>::relay(&host)
                    .ok()?
                    .credentials(Credentials::new(user, pass));
                if let Some(port) = std::env::var("SMTP_PORT")
                    .ok()
                    .and_then(|p| p.parse::<u16>().ok())
                {
                    builder = builder.port(port);
                }
                Provider::Smtp(builder.build())
            }
        };

        let from = std::env::var("EMAIL_FROM")
            .or_else(|_| std::env::var("EMAIL_USER"))
            .ok()?;
        let recipient = std::env::var("RECIPIENT_EMAIL").unwrap_or_else(|_| from.clone());

        Some(Mailer {
            provider,
            from,
            recipient,
        })
    }

    async fn send(&self, to: &str, subject: &str, html: String) -> anyhow::Result<()> {
        match &self.provider {
            Provider::Smtp(transport) => {
                let email = Message::builder()
                    .from(self.from.parse()?)
                    .to(to.parse()?)
                    .subject(subject)
                    .header(ContentType::TEXT_HTML)
                    .body(html)?;
                transport.send(email).await?;
            }
            Provider::Resend(client) => {
                let options =
                    CreateEmailBaseOptions::new(&self.from, [to], subject).with_html(&html);
                client.emails.send(options).await?;
            }
        }
        Ok(())
    }

    pub async fn send_notification(&self, contact: &ValidContact) -> anyhow::Result<()> {
        let subject = format!("Portfolio Contact: {}", contact.subject);
        let html = format!(
            "<h3>New Contact Form Submission</h3>\
             <p><strong>Name:</strong> {}</p>\
             <p><strong>Email:</strong> {}</p>\
             <p><strong>Subject:</strong> {}</p>\
             <p><strong>Message:</strong></p>\
             <p>{}</p>\
             <hr>\
             <p><small>Sent from your portfolio website</small></p>",
            contact.name,
            contact.email,
            contact.subject,
            contact.message.replace('\n', "<br>"),
        );
        self.send(&self.recipient, &subject, html).await
    }

    pub async fn send_auto_reply(&self, contact: &ValidContact) -> anyhow::Result<()> {
        let html = format!(
            "<h3>Thank you for your message, {}!</h3>\
             <p>I have received your message and will get back to you as soon as possible.</p>\
             <p>Here's a copy of what you sent:</p>\
             <blockquote>\
             <p><strong>Subject:</strong> {}</p>\
             <p><strong>Message:</strong> {}</p>\
             </blockquote>\
             <p>Best regards,<br>Eero Salo</p>",
            contact.name,
            contact.subject,
            contact.message.replace('\n', "<br>"),
        );
        self.send(&contact.email, "Thank you for contacting me!", html)
            .await
    }
}
