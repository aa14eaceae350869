//! Wire models for the dashboard API.
//!
//! Records are owned entirely by the backend; the front end holds transient
//! copies fetched per page view. Deserialization is deliberately lenient —
//! unknown fields are ignored and most fields default — because server
//! responses are not schema-validated on the client.

use serde::{Deserialize, Serialize};

/// The `{success, data, count?, message?}` wrapper all API responses share.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// One page of an offset-paginated list.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Server-provided total, when the envelope carried one.
    pub count: Option<u64>,
    pub page: u32,
    pub limit: u32,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, count: Option<u64>, page: u32, limit: u32) -> Self {
        Self {
            items,
            count,
            page,
            limit,
        }
    }

    /// Heuristic: a full page is assumed to have a successor.
    ///
    /// The server does not return a reliable total, so this is inferred from
    /// page fullness. A final page that happens to be exactly full still
    /// reports `true` — a documented approximation, not a bug.
    pub fn has_next_page(&self) -> bool {
        self.limit > 0 && self.items.len() as u32 >= self.limit
    }
}

/// An embedded image reference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Image {
    #[serde(default)]
    pub url: String,
}

impl Image {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// A populated `{_id, name}` reference to another record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NamedRef {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

// ---------------------------------------------------------------------------
// Auth
// ---------------------------------------------------------------------------

/// The authenticated user profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<Image>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login: Option<String>,
}

/// `/auth/login` and `/auth/register` reply with the token beside the user,
/// not inside the standard envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub data: User,
}

/// `/auth/updatepassword` rotates the credential and issues a fresh token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenRefresh {
    pub token: String,
}

/// Editable profile fields, sent to `/users/{id}` or `/auth/updatedetails`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<Image>,
}

// ---------------------------------------------------------------------------
// Resources
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub full_description: String,
    #[serde(default)]
    pub main_image: Image,
    #[serde(default)]
    pub gallery: Vec<Image>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<NamedRef>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub price: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub downloads: u64,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub order: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub name: String,
    pub short_description: String,
    pub full_description: String,
    pub category: String,
    pub price: String,
    pub is_featured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_image: Option<Image>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub avatar: Image,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub skills: Vec<NamedRef>,
    #[serde(default)]
    pub social_links: SocialLinks,
    #[serde(default)]
    pub experience: u32,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub join_date: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub order: i64,
    #[serde(default)]
    pub projects_completed: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMemberDraft {
    pub name: String,
    pub position: String,
    pub bio: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub experience: u32,
    pub is_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<Image>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Technology {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: Image,
    #[serde(default)]
    pub logo: Image,
    #[serde(default)]
    pub category: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub official_website: String,
    #[serde(default)]
    pub proficiency_level: String,
    #[serde(default)]
    pub years_of_experience: u32,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub order: i64,
    #[serde(default)]
    pub color: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnologyDraft {
    pub name: String,
    pub description: String,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub proficiency_level: String,
    pub color: String,
    pub is_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Image>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub image: Image,
    #[serde(default)]
    pub order: i64,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub benefits: Vec<String>,
    #[serde(default)]
    pub category: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureDraft {
    pub title: String,
    pub description: String,
    pub icon: String,
    pub category: String,
    pub is_active: bool,
    pub benefits: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub city: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub client_name: String,
    #[serde(default)]
    pub client_position: String,
    #[serde(default)]
    pub client_company: String,
    #[serde(default)]
    pub client_avatar: Image,
    #[serde(default)]
    pub company_logo: Image,
    #[serde(default)]
    pub testimonial: String,
    #[serde(default)]
    pub rating: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<NamedRef>,
    #[serde(default)]
    pub service: String,
    #[serde(default)]
    pub date_received: String,
    #[serde(default)]
    pub location: Location,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub order: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialDraft {
    pub client_name: String,
    pub client_position: String,
    pub client_company: String,
    pub testimonial: String,
    pub rating: f32,
    pub is_featured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_avatar: Option<Image>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactNote {
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub added_by: NamedRef,
    #[serde(default)]
    pub added_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub service: String,
    #[serde(default)]
    pub budget: String,
    #[serde(default)]
    pub timeline: String,
    /// `new`, `in-progress`, `replied`, or `closed`.
    #[serde(default)]
    pub status: String,
    /// `low`, `medium`, or `high`.
    #[serde(default)]
    pub priority: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<NamedRef>,
    #[serde(default)]
    pub notes: Vec<ContactNote>,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub created_at: String,
}

/// Partial contact mutation — only triage fields are editable here.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Award {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub organization: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub year: i32,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub image: Image,
    #[serde(default)]
    pub certificate: Image,
    #[serde(default)]
    pub verification_url: String,
    #[serde(default)]
    pub rank: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub order: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AwardDraft {
    pub title: String,
    pub description: String,
    pub organization: String,
    pub category: String,
    pub year: i32,
    pub rank: String,
    pub is_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(rename = "memberId", default)]
    pub member: NamedRef,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub check_in: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_out: Option<String>,
    /// `present`, `absent`, `late`, or `half-day`.
    #[serde(default)]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceDraft {
    #[serde(rename = "memberId")]
    pub member_id: String,
    pub date: String,
    pub check_in: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_out: Option<String>,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_response_parse() {
        let body = r#"{"token":"abc","data":{"_id":"1","name":"Admin","email":"admin@example.com","role":"admin","isActive":true}}"#;
        let parsed: AuthResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.token, "abc");
        assert_eq!(parsed.data.id, "1");
        assert_eq!(parsed.data.name, "Admin");
        assert_eq!(parsed.data.email, "admin@example.com");
        assert_eq!(parsed.data.role, "admin");
        assert!(parsed.data.is_active);
        assert!(parsed.data.avatar.is_none());
    }

    #[test]
    fn test_envelope_with_count() {
        let body = r#"{"success":true,"data":[{"_id":"p1","name":"Widget"}],"count":41}"#;
        let parsed: Envelope<Vec<Product>> = serde_json::from_str(body).unwrap();
        assert!(parsed.success);
        assert_eq!(parsed.count, Some(41));
        assert_eq!(parsed.data.len(), 1);
        assert_eq!(parsed.data[0].name, "Widget");
        // Fields absent on the wire default instead of failing.
        assert_eq!(parsed.data[0].category, "");
        assert!(!parsed.data[0].is_featured);
    }

    #[test]
    fn test_envelope_without_count_or_message() {
        let body = r#"{"success":true,"data":{"_id":"t1","name":"Rust"}}"#;
        let parsed: Envelope<Technology> = serde_json::from_str(body).unwrap();
        assert!(parsed.count.is_none());
        assert!(parsed.message.is_none());
        assert_eq!(parsed.data.name, "Rust");
    }

    #[test]
    fn test_has_next_page_partial_page() {
        // 7 items on a limit-10 page: no next page.
        let page = Page::new(vec![0u8; 7], None, 2, 10);
        assert!(!page.has_next_page());
    }

    #[test]
    fn test_has_next_page_full_page() {
        // Exactly full page: assumed to have a successor even when it is the
        // last one.
        let page = Page::new(vec![0u8; 10], None, 2, 10);
        assert!(page.has_next_page());
    }

    #[test]
    fn test_has_next_page_empty() {
        let page = Page::new(Vec::<u8>::new(), Some(0), 1, 10);
        assert!(!page.has_next_page());
    }

    #[test]
    fn test_draft_skips_absent_image() {
        let draft = ProductDraft {
            name: "Widget".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert!(json.get("mainImage").is_none());
        assert_eq!(json["name"], "Widget");
        assert_eq!(json["shortDescription"], "");

        let draft = ProductDraft {
            main_image: Some(Image::new("data:image/png;base64,AAAA")),
            ..draft
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["mainImage"]["url"], "data:image/png;base64,AAAA");
    }

    #[test]
    fn test_attendance_member_ref() {
        let body = r#"{"success":true,"data":[{"_id":"a1","memberId":{"_id":"m1","name":"Jane"},"date":"2026-02-05","checkIn":"09:00","status":"present"}]}"#;
        let parsed: Envelope<Vec<AttendanceRecord>> = serde_json::from_str(body).unwrap();
        let record = &parsed.data[0];
        assert_eq!(record.member.name, "Jane");
        assert_eq!(record.check_in, "09:00");
        assert!(record.check_out.is_none());
    }

    #[test]
    fn test_attendance_draft_wire_shape() {
        let draft = AttendanceDraft {
            member_id: "m1".to_string(),
            date: "2026-02-05".to_string(),
            check_in: "09:00".to_string(),
            check_out: None,
            status: "present".to_string(),
            notes: None,
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["memberId"], "m1");
        assert!(json.get("checkOut").is_none());
        assert!(json.get("notes").is_none());
    }
}
