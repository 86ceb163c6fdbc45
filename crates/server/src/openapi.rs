use serde::Serialize;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi, ToSchema};
use uuid::Uuid;

// Schema-only mirrors of the wire bodies; field names follow the JSON keys.

#[derive(Serialize, ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest { pub username: String, pub password: String, pub secret_code: String, pub full_name: Option<String> }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest { pub username: String, pub password: String, pub secret_code: String }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDoc { pub id: Uuid, pub username: String, pub full_name: String, pub created_at: String }

#[derive(Serialize, ToSchema)]
pub struct TokenResponseDoc { pub access_token: String, pub token_type: String, pub user: UserDoc }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageDoc {
    pub page_id: String,
    pub hero_title: Option<String>,
    pub hero_subtitle: Option<String>,
    pub hero_description: Option<String>,
    pub hero_image: Option<String>,
    #[schema(value_type = Option<Vec<Object>>)]
    pub sections: Option<Vec<serde_json::Value>>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDoc {
    pub title: String,
    pub slug: String,
    pub summary: Option<String>,
    pub content: Option<String>,
    pub cover_image: Option<String>,
    pub tags: Option<Vec<String>>,
}

#[derive(Serialize, ToSchema)]
pub struct MediaDoc {
    pub title: String,
    /// image | video
    #[serde(rename = "type")]
    pub media_type: String,
    pub url: Option<String>,
    pub description: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DocumentDoc {
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub content: Option<String>,
    pub attachments: Option<Vec<String>>,
    /// documentation | activity | report
    pub doc_type: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventDoc {
    pub title: String,
    pub slug: String,
    pub date: String,
    pub time: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub banner_image: Option<String>,
    pub capacity: Option<i32>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationDoc {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub organization: Option<String>,
    pub notes: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaskDoc {
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<String>,
    pub assignee: Option<String>,
    /// low | medium | high, default medium
    pub priority: Option<String>,
    /// pending | in_progress | done, default pending
    pub status: Option<String>,
    pub remind_at: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct MemberDoc { pub name: String, pub position: Option<String>, pub division: Option<String> }

#[derive(Serialize, ToSchema)]
pub struct StoredFileDoc { pub url: String, pub filename: String }

#[derive(Serialize, ToSchema)]
pub struct AgentRequest { pub text: String }

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme("bearer", SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).bearer_format("JWT").build()));
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::root,
        crate::routes::auth::signup,
        crate::routes::auth::login,
        crate::routes::auth::me,
        crate::routes::pages::list,
        crate::routes::pages::get_one,
        crate::routes::pages::upsert,
        crate::routes::articles::list,
        crate::routes::articles::get_by_slug,
        crate::routes::articles::create,
        crate::routes::articles::replace,
        crate::routes::articles::remove,
        crate::routes::media::list,
        crate::routes::media::create,
        crate::routes::media::remove,
        crate::routes::documents::list,
        crate::routes::documents::get_by_slug,
        crate::routes::documents::create,
        crate::routes::documents::replace,
        crate::routes::documents::remove,
        crate::routes::events::list,
        crate::routes::events::get_by_slug,
        crate::routes::events::create,
        crate::routes::events::replace,
        crate::routes::events::remove,
        crate::routes::events::register,
        crate::routes::events::registrations,
        crate::routes::events::export_registrations,
        crate::routes::tasks::list,
        crate::routes::tasks::create,
        crate::routes::tasks::replace,
        crate::routes::tasks::remove,
        crate::routes::members::list,
        crate::routes::members::create,
        crate::routes::members::replace,
        crate::routes::members::remove,
        crate::routes::uploads::upload,
        crate::routes::uploads::download,
        crate::routes::seed::seed_content,
        crate::routes::agent::draft,
    ),
    components(
        schemas(
            HealthResponse,
            SignupRequest,
            LoginRequest,
            UserDoc,
            TokenResponseDoc,
            PageDoc,
            ArticleDoc,
            MediaDoc,
            DocumentDoc,
            EventDoc,
            RegistrationDoc,
            TaskDoc,
            MemberDoc,
            StoredFileDoc,
            AgentRequest,
        )
    ),
    modifiers(&BearerAuth),
    tags(
        (name = "health"),
        (name = "auth"),
        (name = "pages"),
        (name = "articles"),
        (name = "media"),
        (name = "documents"),
        (name = "events"),
        (name = "tasks"),
        (name = "members"),
        (name = "uploads"),
        (name = "seed")
    )
)]
pub struct ApiDoc;
