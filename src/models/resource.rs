//! Resource model and request validation

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError, ValidationErrors};

use super::enums::{labels, Category, SkillLevel};
use crate::error::FieldError;

/// Educational resource record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    /// Opaque identifier assigned by the storage layer
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub skill_level: SkillLevel,
    pub image_url: String,
    /// Free-form label, e.g. "Video Course" or "eBook"
    pub resource_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
}

impl Resource {
    /// Build a stored record from validated input and an assigned id
    pub fn from_new(id: String, data: NewResource) -> Self {
        Self {
            id,
            title: data.title,
            description: data.description,
            category: data.category,
            skill_level: data.skill_level,
            image_url: data.image_url,
            resource_type: data.resource_type,
            video_url: data.video_url,
        }
    }
}

/// Validated resource fields, used for both creation and full replacement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewResource {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub skill_level: SkillLevel,
    pub image_url: String,
    pub resource_type: String,
    pub video_url: Option<String>,
}

/// Incoming create/update body, before validation.
///
/// Every field is optional here so that a missing field is reported by
/// validation alongside the other rule violations.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResourcePayload {
    #[validate(
        required(message = "Title is required"),
        length(min = 1, max = 200, message = "Title must be between 1 and 200 characters")
    )]
    pub title: Option<String>,
    #[validate(
        required(message = "Description is required"),
        length(min = 10, max = 1000, message = "Description must be between 10 and 1000 characters")
    )]
    pub description: Option<String>,
    #[validate(
        required(message = "Category is required"),
        custom(function = "validate_category")
    )]
    pub category: Option<String>,
    #[validate(
        required(message = "Skill level is required"),
        custom(function = "validate_skill_level")
    )]
    pub skill_level: Option<String>,
    #[validate(
        required(message = "Image URL is required"),
        url(message = "Image URL must be a valid URL")
    )]
    pub image_url: Option<String>,
    #[validate(
        required(message = "Resource type is required"),
        length(min = 1, message = "Resource type is required")
    )]
    pub resource_type: Option<String>,
    /// Empty string is treated as not provided
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(url(message = "Video URL must be a valid URL"))]
    pub video_url: Option<String>,
}

impl ResourcePayload {
    /// Check every rule and convert into typed fields
    pub fn into_new_resource(self) -> Result<NewResource, Vec<FieldError>> {
        if let Err(errors) = self.validate() {
            return Err(field_errors(&errors));
        }

        let category = parse_field::<Category>("category", self.category)?;
        let skill_level = parse_field::<SkillLevel>("skillLevel", self.skill_level)?;

        Ok(NewResource {
            title: require("title", self.title)?,
            description: require("description", self.description)?,
            category,
            skill_level,
            image_url: require("imageUrl", self.image_url)?,
            resource_type: require("resourceType", self.resource_type)?,
            video_url: self.video_url,
        })
    }
}

impl From<NewResource> for ResourcePayload {
    fn from(data: NewResource) -> Self {
        Self {
            title: Some(data.title),
            description: Some(data.description),
            category: Some(data.category.to_string()),
            skill_level: Some(data.skill_level.to_string()),
            image_url: Some(data.image_url),
            resource_type: Some(data.resource_type),
            video_url: data.video_url,
        }
    }
}

fn require(field: &str, value: Option<String>) -> Result<String, Vec<FieldError>> {
    value.ok_or_else(|| vec![FieldError::new(field, "Field is required")])
}

fn parse_field<T>(field: &str, value: Option<String>) -> Result<T, Vec<FieldError>>
where
    T: std::str::FromStr<Err = String>,
{
    require(field, value)?
        .parse::<T>()
        .map_err(|e| vec![FieldError::new(field, e)])
}

fn validate_category(value: &str) -> Result<(), ValidationError> {
    value.parse::<Category>().map(|_| ()).map_err(|_| {
        let mut err = ValidationError::new("category");
        err.message = Some(format!("Category must be one of: {}", labels(&Category::ALL)).into());
        err
    })
}

fn validate_skill_level(value: &str) -> Result<(), ValidationError> {
    value.parse::<SkillLevel>().map(|_| ()).map_err(|_| {
        let mut err = ValidationError::new("skill_level");
        err.message =
            Some(format!("Skill level must be one of: {}", labels(&SkillLevel::ALL)).into());
        err
    })
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

/// Flatten validator output into wire-named field errors, sorted by field
fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut out: Vec<FieldError> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            let name = camel_case(&field);
            errs.iter().map(move |e| {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value ({})", e.code));
                FieldError::new(name.clone(), message)
            })
        })
        .collect();
    out.sort_by(|a, b| a.field.cmp(&b.field));
    out
}

fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_body() -> serde_json::Value {
        json!({
            "title": "Rust for Beginners",
            "description": "A gentle introduction to ownership and borrowing.",
            "category": "Programming",
            "skillLevel": "Beginner",
            "imageUrl": "https://images.example.com/rust.png",
            "resourceType": "Video Course",
            "videoUrl": "https://youtu.be/abc123"
        })
    }

    fn validate(body: serde_json::Value) -> Result<NewResource, Vec<FieldError>> {
        serde_json::from_value::<ResourcePayload>(body)
            .unwrap()
            .into_new_resource()
    }

    fn fields(errors: &[FieldError]) -> Vec<&str> {
        errors.iter().map(|e| e.field.as_str()).collect()
    }

    #[test]
    fn test_valid_payload() {
        let data = validate(valid_body()).unwrap();
        assert_eq!(data.title, "Rust for Beginners");
        assert_eq!(data.category, Category::Programming);
        assert_eq!(data.skill_level, SkillLevel::Beginner);
        assert_eq!(data.video_url.as_deref(), Some("https://youtu.be/abc123"));
    }

    #[test]
    fn test_empty_title_rejected() {
        let mut body = valid_body();
        body["title"] = json!("");
        let errors = validate(body).unwrap_err();
        assert_eq!(fields(&errors), vec!["title"]);
    }

    #[test]
    fn test_title_too_long_rejected() {
        let mut body = valid_body();
        body["title"] = json!("x".repeat(201));
        assert!(validate(body).is_err());
    }

    #[test]
    fn test_title_at_max_length_accepted() {
        let mut body = valid_body();
        body["title"] = json!("x".repeat(200));
        assert_eq!(validate(body).unwrap().title.len(), 200);
    }

    #[test]
    fn test_description_bounds_inclusive() {
        let mut body = valid_body();
        body["description"] = json!("d".repeat(10));
        assert!(validate(body).is_ok());

        let mut body = valid_body();
        body["description"] = json!("d".repeat(1000));
        assert!(validate(body).is_ok());

        let mut body = valid_body();
        body["description"] = json!("d".repeat(9));
        assert!(validate(body).is_err());
    }

    #[test]
    fn test_description_too_long_rejected() {
        let mut body = valid_body();
        body["description"] = json!("d".repeat(1001));
        let errors = validate(body).unwrap_err();
        assert_eq!(fields(&errors), vec!["description"]);
    }

    #[test]
    fn test_empty_resource_type_rejected() {
        let mut body = valid_body();
        body["resourceType"] = json!("");
        let errors = validate(body).unwrap_err();
        assert_eq!(fields(&errors), vec!["resourceType"]);
    }

    #[test]
    fn test_short_description_rejected() {
        let mut body = valid_body();
        body["description"] = json!("too short");
        let errors = validate(body).unwrap_err();
        assert_eq!(fields(&errors), vec!["description"]);
    }

    #[test]
    fn test_unknown_category_rejected() {
        let mut body = valid_body();
        body["category"] = json!("Unknown");
        let errors = validate(body).unwrap_err();
        assert_eq!(fields(&errors), vec!["category"]);
        assert!(errors[0].message.contains("Data Science"));
    }

    #[test]
    fn test_unknown_skill_level_rejected() {
        let mut body = valid_body();
        body["skillLevel"] = json!("Expert");
        let errors = validate(body).unwrap_err();
        assert_eq!(fields(&errors), vec!["skillLevel"]);
    }

    #[test]
    fn test_invalid_urls_rejected() {
        let mut body = valid_body();
        body["imageUrl"] = json!("not-a-url");
        body["videoUrl"] = json!("not-a-url");
        let errors = validate(body).unwrap_err();
        assert_eq!(fields(&errors), vec!["imageUrl", "videoUrl"]);
    }

    #[test]
    fn test_empty_video_url_is_absent() {
        let mut body = valid_body();
        body["videoUrl"] = json!("");
        assert_eq!(validate(body).unwrap().video_url, None);

        let mut body = valid_body();
        body.as_object_mut().unwrap().remove("videoUrl");
        assert_eq!(validate(body).unwrap().video_url, None);
    }

    #[test]
    fn test_all_violations_reported() {
        let errors = validate(json!({ "category": "Unknown" })).unwrap_err();
        assert_eq!(
            fields(&errors),
            vec!["category", "description", "imageUrl", "resourceType", "skillLevel", "title"]
        );
    }

    #[test]
    fn test_resource_serializes_camel_case() {
        let data = validate(valid_body()).unwrap();
        let resource = Resource::from_new("r1".into(), data);
        let value = serde_json::to_value(&resource).unwrap();
        assert_eq!(value["skillLevel"], "Beginner");
        assert_eq!(value["resourceType"], "Video Course");
        assert_eq!(value["id"], "r1");

        let without_video = Resource {
            video_url: None,
            ..resource
        };
        let value = serde_json::to_value(&without_video).unwrap();
        assert!(value.get("videoUrl").is_none());
    }

    #[test]
    fn test_camel_case() {
        assert_eq!(camel_case("skill_level"), "skillLevel");
        assert_eq!(camel_case("title"), "title");
    }
}
