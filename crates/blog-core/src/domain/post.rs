use chrono::{DateTime, Utc};
use validator::Validate;

use crate::error::FieldErrors;

/// Maximum stored title length, matching the `posts.title` column.
pub const TITLE_MAX_LEN: u64 = 255;

/// Post entity - represents a blog post.
///
/// `id` and both timestamps are owned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields accepted when creating a post. The store assigns everything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
}

/// Client-supplied post attributes, before validation.
#[derive(Debug, Clone, Default, Validate)]
pub struct PostInput {
    #[validate(
        required(message = "The title field is required."),
        length(max = 255, message = "The title may not be greater than 255 characters.")
    )]
    pub title: Option<String>,
}

impl PostInput {
    pub fn new(title: Option<String>) -> Self {
        Self { title }
    }

    /// Trims the title and treats a blank one as missing.
    fn normalized(self) -> Self {
        let title = self
            .title
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());
        Self { title }
    }

    /// Validate and return the accepted title.
    pub fn validated_title(self) -> Result<String, FieldErrors> {
        let input = self.normalized();
        input.validate().map_err(|e| field_errors(&e))?;

        input
            .title
            .ok_or_else(|| FieldErrors::single("title", "The title field is required."))
    }

    pub fn into_new_post(self) -> Result<NewPost, FieldErrors> {
        self.validated_title().map(|title| NewPost { title })
    }
}

fn field_errors(errs: &validator::ValidationErrors) -> FieldErrors {
    let mut out = FieldErrors::new();

    for (field, kind) in errs.errors() {
        if let validator::ValidationErrorsKind::Field(field_errors) = kind {
            for e in field_errors {
                let msg = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string());
                out.push(field.to_string(), msg);
            }
        }
    }

    out
}
