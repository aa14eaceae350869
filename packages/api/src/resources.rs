//! Resource endpoints: one list/create/update/delete family per entity.
//!
//! All families share the same private helpers; the public surface stays
//! one named function per operation so call sites read like the screens
//! they serve. Mutations require the bearer token; list endpoints are
//! public except contacts and attendance, which inherit whatever token the
//! client carries.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{
    AttendanceDraft, AttendanceRecord, Award, AwardDraft, Contact, ContactUpdate, Feature,
    FeatureDraft, Page, Product, ProductDraft, TeamMember, TeamMemberDraft, Technology,
    TechnologyDraft, Testimonial, TestimonialDraft,
};

impl ApiClient {
    async fn list_at<T: DeserializeOwned>(
        &self,
        path: &str,
        page: u32,
        limit: u32,
    ) -> Result<Page<T>, ApiError> {
        let envelope = self
            .get_enveloped::<Vec<T>>(&format!("{path}?page={page}&limit={limit}"))
            .await?;
        Ok(Page::new(envelope.data, envelope.count, page, limit))
    }

    async fn create_at<T: DeserializeOwned>(
        &self,
        path: &str,
        draft: &impl Serialize,
    ) -> Result<T, ApiError> {
        self.post(path, draft).await
    }

    async fn update_at<T: DeserializeOwned>(
        &self,
        path: &str,
        id: &str,
        draft: &impl Serialize,
    ) -> Result<T, ApiError> {
        self.put(&format!("{path}/{id}"), draft).await
    }

    async fn delete_at(&self, path: &str, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("{path}/{id}")).await
    }

    // -- products -----------------------------------------------------------

    pub async fn list_products(&self, page: u32, limit: u32) -> Result<Page<Product>, ApiError> {
        self.list_at("/products", page, limit).await
    }

    pub async fn create_product(&self, draft: &ProductDraft) -> Result<Product, ApiError> {
        self.create_at("/products", draft).await
    }

    pub async fn update_product(
        &self,
        id: &str,
        draft: &ProductDraft,
    ) -> Result<Product, ApiError> {
        self.update_at("/products", id, draft).await
    }

    pub async fn delete_product(&self, id: &str) -> Result<(), ApiError> {
        self.delete_at("/products", id).await
    }

    // -- team ---------------------------------------------------------------

    pub async fn list_team(&self, page: u32, limit: u32) -> Result<Page<TeamMember>, ApiError> {
        self.list_at("/team", page, limit).await
    }

    pub async fn create_team_member(
        &self,
        draft: &TeamMemberDraft,
    ) -> Result<TeamMember, ApiError> {
        self.create_at("/team", draft).await
    }

    pub async fn update_team_member(
        &self,
        id: &str,
        draft: &TeamMemberDraft,
    ) -> Result<TeamMember, ApiError> {
        self.update_at("/team", id, draft).await
    }

    pub async fn delete_team_member(&self, id: &str) -> Result<(), ApiError> {
        self.delete_at("/team", id).await
    }

    // -- technologies -------------------------------------------------------

    pub async fn list_technologies(
        &self,
        page: u32,
        limit: u32,
    ) -> Result<Page<Technology>, ApiError> {
        self.list_at("/technologies", page, limit).await
    }

    pub async fn create_technology(
        &self,
        draft: &TechnologyDraft,
    ) -> Result<Technology, ApiError> {
        self.create_at("/technologies", draft).await
    }

    pub async fn update_technology(
        &self,
        id: &str,
        draft: &TechnologyDraft,
    ) -> Result<Technology, ApiError> {
        self.update_at("/technologies", id, draft).await
    }

    pub async fn delete_technology(&self, id: &str) -> Result<(), ApiError> {
        self.delete_at("/technologies", id).await
    }

    // -- features -----------------------------------------------------------

    pub async fn list_features(&self, page: u32, limit: u32) -> Result<Page<Feature>, ApiError> {
        self.list_at("/features", page, limit).await
    }

    pub async fn create_feature(&self, draft: &FeatureDraft) -> Result<Feature, ApiError> {
        self.create_at("/features", draft).await
    }

    pub async fn update_feature(
        &self,
        id: &str,
        draft: &FeatureDraft,
    ) -> Result<Feature, ApiError> {
        self.update_at("/features", id, draft).await
    }

    pub async fn delete_feature(&self, id: &str) -> Result<(), ApiError> {
        self.delete_at("/features", id).await
    }

    // -- testimonials -------------------------------------------------------

    pub async fn list_testimonials(
        &self,
        page: u32,
        limit: u32,
    ) -> Result<Page<Testimonial>, ApiError> {
        self.list_at("/testimonials", page, limit).await
    }

    pub async fn create_testimonial(
        &self,
        draft: &TestimonialDraft,
    ) -> Result<Testimonial, ApiError> {
        self.create_at("/testimonials", draft).await
    }

    pub async fn update_testimonial(
        &self,
        id: &str,
        draft: &TestimonialDraft,
    ) -> Result<Testimonial, ApiError> {
        self.update_at("/testimonials", id, draft).await
    }

    pub async fn delete_testimonial(&self, id: &str) -> Result<(), ApiError> {
        self.delete_at("/testimonials", id).await
    }

    // -- contacts -----------------------------------------------------------

    pub async fn list_contacts(&self, page: u32, limit: u32) -> Result<Page<Contact>, ApiError> {
        self.list_at("/contacts", page, limit).await
    }

    pub async fn update_contact(
        &self,
        id: &str,
        update: &ContactUpdate,
    ) -> Result<Contact, ApiError> {
        self.update_at("/contacts", id, update).await
    }

    pub async fn delete_contact(&self, id: &str) -> Result<(), ApiError> {
        self.delete_at("/contacts", id).await
    }

    /// Append a triage note to a contact; returns the updated record.
    pub async fn add_contact_note(&self, id: &str, note: &str) -> Result<Contact, ApiError> {
        self.post(
            &format!("/contacts/{id}/notes"),
            &serde_json::json!({ "note": note }),
        )
        .await
    }

    // -- awards -------------------------------------------------------------

    pub async fn list_awards(&self, page: u32, limit: u32) -> Result<Page<Award>, ApiError> {
        self.list_at("/awards", page, limit).await
    }

    pub async fn create_award(&self, draft: &AwardDraft) -> Result<Award, ApiError> {
        self.create_at("/awards", draft).await
    }

    pub async fn update_award(&self, id: &str, draft: &AwardDraft) -> Result<Award, ApiError> {
        self.update_at("/awards", id, draft).await
    }

    pub async fn delete_award(&self, id: &str) -> Result<(), ApiError> {
        self.delete_at("/awards", id).await
    }

    // -- attendance ---------------------------------------------------------

    pub async fn list_attendance(
        &self,
        page: u32,
        limit: u32,
    ) -> Result<Page<AttendanceRecord>, ApiError> {
        self.list_at("/attendance", page, limit).await
    }

    pub async fn create_attendance(
        &self,
        draft: &AttendanceDraft,
    ) -> Result<AttendanceRecord, ApiError> {
        self.create_at("/attendance", draft).await
    }

    pub async fn update_attendance(
        &self,
        id: &str,
        draft: &AttendanceDraft,
    ) -> Result<AttendanceRecord, ApiError> {
        self.update_at("/attendance", id, draft).await
    }

    pub async fn delete_attendance(&self, id: &str) -> Result<(), ApiError> {
        self.delete_at("/attendance", id).await
    }
}
