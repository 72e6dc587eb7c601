use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use super::users::PublicUser;

/// SeaORM entity for the `portfolios` table.
///
/// Each user owns exactly one portfolio (`user_id` is unique). The nested
/// sections live in JSONB columns and stay raw JSON on the entity; the typed
/// shapes below give them structure where payloads are validated.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "portfolios")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub user_id: Uuid,
    pub title: String,
    pub tagline: String,
    #[sea_orm(column_type = "Text")]
    pub about: String,
    #[sea_orm(column_type = "Text")]
    pub avatar: String,
    #[sea_orm(column_type = "Text")]
    pub banner_image: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub skills: JsonValue,
    #[sea_orm(column_type = "JsonBinary")]
    pub projects: JsonValue,
    #[sea_orm(column_type = "JsonBinary")]
    pub experience: JsonValue,
    #[sea_orm(column_type = "JsonBinary")]
    pub education: JsonValue,
    #[sea_orm(column_type = "JsonBinary")]
    pub contact: JsonValue,
    #[sea_orm(column_type = "JsonBinary")]
    pub social_links: JsonValue,
    #[sea_orm(column_type = "JsonBinary")]
    pub theme: JsonValue,
    pub is_public: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── Section shapes ──
//
// These mirror the document schema the frontend works with. Fields are
// lenient (defaulted or optional) so a sparse section entry deserializes;
// only `level` constrains its values.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SkillLevel {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
    Expert,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub level: SkillLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default)]
    pub current: bool,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub school: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
}

/// Colour/font settings; each field falls back to the default theme so a
/// partially specified theme still renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    #[serde(default = "default_primary_color")]
    pub primary_color: String,
    #[serde(default = "default_secondary_color")]
    pub secondary_color: String,
    #[serde(default = "default_accent_color")]
    pub accent_color: String,
    #[serde(default = "default_font_family")]
    pub font_family: String,
}

fn default_primary_color() -> String {
    "#1e40af".to_string()
}

fn default_secondary_color() -> String {
    "#ffffff".to_string()
}

fn default_accent_color() -> String {
    "#3b82f6".to_string()
}

fn default_font_family() -> String {
    "Inter, sans-serif".to_string()
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary_color: default_primary_color(),
            secondary_color: default_secondary_color(),
            accent_color: default_accent_color(),
            font_family: default_font_family(),
        }
    }
}

// ── DTOs (not stored in DB, used for request bodies) ──

/// Sparse update payload for `PUT /api/portfolio/my`.
///
/// Every mutable portfolio field is enumerated here; a key outside this list
/// fails deserialization instead of being merged into the document. Absent
/// keys leave the stored value untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdatePortfolio {
    pub title: Option<String>,
    pub tagline: Option<String>,
    pub about: Option<String>,
    pub avatar: Option<String>,
    pub banner_image: Option<String>,
    pub skills: Option<Vec<Skill>>,
    pub projects: Option<Vec<Project>>,
    pub experience: Option<Vec<Experience>>,
    pub education: Option<Vec<Education>>,
    pub contact: Option<Contact>,
    pub social_links: Option<SocialLinks>,
    pub theme: Option<Theme>,
    pub is_public: Option<bool>,
}

/// A portfolio joined with the public fields of its owner, as returned by the
/// read endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct PortfolioWithUser {
    #[serde(flatten)]
    pub portfolio: Model,
    pub user: Option<PublicUser>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn entity_serializes_with_camel_case_keys() {
        let model = Model {
            id: Uuid::nil(),
            user_id: Uuid::nil(),
            title: "My Portfolio".into(),
            tagline: "Web Developer".into(),
            about: String::new(),
            avatar: String::new(),
            banner_image: String::new(),
            skills: json!([]),
            projects: json!([]),
            experience: json!([]),
            education: json!([]),
            contact: json!({}),
            social_links: json!({}),
            theme: json!({}),
            is_public: true,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        };

        let value = serde_json::to_value(&model).unwrap();
        let object = value.as_object().unwrap();
        assert!(object.contains_key("userId"));
        assert!(object.contains_key("bannerImage"));
        assert!(object.contains_key("socialLinks"));
        assert!(object.contains_key("isPublic"));
        assert!(object.contains_key("updatedAt"));
        assert!(!object.contains_key("banner_image"));
    }

    #[test]
    fn update_rejects_unknown_top_level_keys() {
        let result: Result<UpdatePortfolio, _> =
            serde_json::from_value(json!({ "title": "New", "hacked": true }));
        assert!(result.is_err());
        let message = result.unwrap_err().to_string();
        assert!(message.contains("hacked"), "got: {message}");
    }

    #[test]
    fn update_accepts_any_subset_of_known_keys() {
        let patch: UpdatePortfolio = serde_json::from_value(json!({
            "tagline": "Rust Developer",
            "isPublic": false
        }))
        .unwrap();
        assert_eq!(patch.tagline.as_deref(), Some("Rust Developer"));
        assert_eq!(patch.is_public, Some(false));
        assert!(patch.title.is_none());
        assert!(patch.skills.is_none());
    }

    #[test]
    fn null_patch_value_reads_as_absent() {
        // `"title": null` leaves the field untouched, same as omitting it.
        let patch: UpdatePortfolio = serde_json::from_value(json!({ "title": null })).unwrap();
        assert!(patch.title.is_none());
    }

    #[test]
    fn skill_level_defaults_to_intermediate() {
        let skills: Vec<Skill> = serde_json::from_value(json!([
            { "name": "Rust" },
            { "name": "SQL", "level": "Expert", "category": "Data" }
        ]))
        .unwrap();
        assert_eq!(skills[0].level, SkillLevel::Intermediate);
        assert_eq!(skills[1].level, SkillLevel::Expert);
        assert_eq!(skills[1].category.as_deref(), Some("Data"));
    }

    #[test]
    fn skill_level_outside_enum_is_rejected() {
        let result: Result<Vec<Skill>, _> =
            serde_json::from_value(json!([{ "name": "Rust", "level": "Wizard" }]));
        assert!(result.is_err());
    }

    #[test]
    fn partial_theme_fills_remaining_defaults() {
        let theme: Theme = serde_json::from_value(json!({ "primaryColor": "#000000" })).unwrap();
        assert_eq!(theme.primary_color, "#000000");
        assert_eq!(theme.secondary_color, "#ffffff");
        assert_eq!(theme.accent_color, "#3b82f6");
        assert_eq!(theme.font_family, "Inter, sans-serif");
    }

    #[test]
    fn project_wire_names_are_camel_case() {
        let project: Project = serde_json::from_value(json!({
            "title": "Chat app",
            "githubUrl": "https://github.com/nell/chat",
            "technologies": ["rust", "actix"]
        }))
        .unwrap();
        assert_eq!(project.github_url.as_deref(), Some("https://github.com/nell/chat"));
        assert_eq!(project.technologies, vec!["rust", "actix"]);
        assert!(!project.featured);

        let value = serde_json::to_value(&project).unwrap();
        assert!(value.get("githubUrl").is_some());
        assert!(value.get("liveUrl").is_none());
    }
}
