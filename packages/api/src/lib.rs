//! # API crate — typed REST client for the admin dashboard
//!
//! Everything the dashboard knows about the backend lives here: the wire
//! models, the shared response envelope, the error taxonomy, and one thin
//! endpoint function per operation. The UI crates never touch `reqwest`
//! directly.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`] — base URL + optional bearer token + the single-attempt fetch wrapper |
//! | [`auth`] | Login, register, logout, `/auth/me`, profile and password updates |
//! | [`resources`] | List/create/update/delete per resource, plus contact notes |
//! | [`models`] | Wire records, drafts, [`Envelope`], [`Page`] |
//! | [`error`] | [`ApiError`] — transport / status / empty-body |
//!
//! Requests are a single attempt each: no retry, no timeout, no backoff.
//! Pagination is offset-style and "has next page" is inferred from page
//! fullness, not a server total — see [`Page::has_next_page`].

pub mod auth;
pub mod client;
pub mod error;
pub mod models;
pub mod resources;

pub use client::ApiClient;
pub use error::ApiError;
pub use models::{
    AttendanceDraft, AttendanceRecord, AuthResponse, Award, AwardDraft, Contact, ContactNote,
    ContactUpdate, Envelope, Feature, FeatureDraft, Image, NamedRef, Page, Product, ProductDraft,
    TeamMember, TeamMemberDraft, Technology, TechnologyDraft, Testimonial, TestimonialDraft,
    TokenRefresh, User, UserUpdate,
};
