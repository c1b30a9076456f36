use std::{path::PathBuf, sync::Arc};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::admin::store::FormsStore;
use crate::errors::ServiceError;
use crate::storage::json_list_store::JsonListStore;

/// One contact-form submission, stamped at acceptance time.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
    pub submitted_at: DateTime<Utc>,
}

/// One volunteer signup. The free-form message is optional and an absent one
/// is omitted from the persisted JSON.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct VolunteerSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub submitted_at: DateTime<Utc>,
}

/// Contact form input. Fields default to empty so a missing field fails
/// validation with the form's own message instead of failing body extraction.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ContactInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

impl ContactInput {
    pub fn validate(&self) -> Result<(), ServiceError> {
        if self.name.trim().is_empty() || self.email.trim().is_empty() || self.message.trim().is_empty() {
            return Err(ServiceError::Validation("All fields are required.".into()));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VolunteerInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub message: Option<String>,
}

impl VolunteerInput {
    pub fn validate(&self) -> Result<(), ServiceError> {
        if self.name.trim().is_empty() || self.email.trim().is_empty() || self.phone.trim().is_empty() {
            return Err(ServiceError::Validation("Name, email, and phone are required.".into()));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewsletterInput {
    #[serde(default)]
    pub email: String,
}

impl NewsletterInput {
    pub fn validate(&self) -> Result<(), ServiceError> {
        if self.email.trim().is_empty() {
            return Err(ServiceError::Validation("Email is required.".into()));
        }
        Ok(())
    }
}

/// Aggregate read of all three collections for the admin view.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FormSnapshot {
    pub contact: Vec<ContactSubmission>,
    pub volunteer: Vec<VolunteerSubmission>,
    pub newsletter: Vec<String>,
}

/// File-backed storage for the three public form collections, rooted at a
/// data directory passed in at construction.
#[derive(Clone)]
pub struct FormStore {
    contact: Arc<JsonListStore<ContactSubmission>>,
    volunteer: Arc<JsonListStore<VolunteerSubmission>>,
    newsletter: Arc<JsonListStore<String>>,
}

impl FormStore {
    /// Initialize the three collection stores under `data_dir`. Missing files
    /// are created empty; unparseable ones load as empty collections.
    pub async fn new<P: Into<PathBuf>>(data_dir: P) -> Result<Arc<Self>, ServiceError> {
        let dir = data_dir.into();
        let contact = JsonListStore::new(dir.join("contact_forms.json")).await?;
        let volunteer = JsonListStore::new(dir.join("volunteer_forms.json")).await?;
        let newsletter = JsonListStore::new(dir.join("newsletter.json")).await?;
        Ok(Arc::new(Self { contact, volunteer, newsletter }))
    }

    /// Validate and append one contact submission.
    pub async fn submit_contact(&self, input: ContactInput) -> Result<ContactSubmission, ServiceError> {
        input.validate()?;
        let rec = ContactSubmission {
            name: input.name,
            email: input.email,
            message: input.message,
            submitted_at: Utc::now(),
        };
        self.contact.push(rec.clone()).await?;
        Ok(rec)
    }

    /// Validate and append one volunteer signup.
    pub async fn submit_volunteer(&self, input: VolunteerInput) -> Result<VolunteerSubmission, ServiceError> {
        input.validate()?;
        let rec = VolunteerSubmission {
            name: input.name,
            email: input.email,
            phone: input.phone,
            message: input.message,
            submitted_at: Utc::now(),
        };
        self.volunteer.push(rec.clone()).await?;
        Ok(rec)
    }

    /// Add an email to the newsletter list. An already-subscribed email is a
    /// success no-op, not an error.
    pub async fn subscribe_newsletter(&self, input: NewsletterInput) -> Result<(), ServiceError> {
        input.validate()?;
        self.newsletter.push_unique(input.email).await
    }

    /// Read all three collections together. Never fails; a collection whose
    /// backing file was unreadable shows up empty.
    pub async fn admin_snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            contact: self.contact.list().await,
            volunteer: self.volunteer.list().await,
            newsletter: self.newsletter.list().await,
        }
    }
}

#[async_trait::async_trait]
impl FormsStore for FormStore {
    async fn submit_contact(&self, input: ContactInput) -> Result<ContactSubmission, ServiceError> {
        self.submit_contact(input).await
    }
    async fn submit_volunteer(&self, input: VolunteerInput) -> Result<VolunteerSubmission, ServiceError> {
        self.submit_volunteer(input).await
    }
    async fn subscribe_newsletter(&self, input: NewsletterInput) -> Result<(), ServiceError> {
        self.subscribe_newsletter(input).await
    }
    async fn admin_snapshot(&self) -> FormSnapshot {
        self.admin_snapshot().await
    }
}
