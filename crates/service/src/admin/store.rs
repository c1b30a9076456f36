use async_trait::async_trait;

use crate::errors::ServiceError;
use crate::file::submissions::{
    ContactInput, ContactSubmission, FormSnapshot, NewsletterInput, VolunteerInput,
    VolunteerSubmission,
};

/// Interface over the form store so handlers and tests can hold it behind a
/// seam instead of the concrete file-backed implementation.
#[async_trait]
pub trait FormsStore: Send + Sync {
    async fn submit_contact(&self, input: ContactInput) -> Result<ContactSubmission, ServiceError>;
    async fn submit_volunteer(&self, input: VolunteerInput) -> Result<VolunteerSubmission, ServiceError>;
    async fn subscribe_newsletter(&self, input: NewsletterInput) -> Result<(), ServiceError>;
    async fn admin_snapshot(&self) -> FormSnapshot;
}
