//! Post resource handlers. All routes sit behind [`Authenticate`](crate::middleware::auth::Authenticate).

use actix_web::{HttpRequest, HttpResponse, web};
use serde::Deserialize;

use blog_core::domain::{Post, PostInput};
use blog_shared::dto::{PostPayload, PostResponse};
use blog_shared::{PageMeta, Paginated};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Query string of `GET /api/posts`.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    page: Option<String>,
}

impl ListQuery {
    /// Unparseable or missing page numbers fall back to the first page.
    fn page(&self) -> u64 {
        self.page
            .as_deref()
            .and_then(|p| p.trim().parse().ok())
            .unwrap_or(1)
    }
}

fn to_response(post: Post) -> PostResponse {
    PostResponse::new(post.id, post.title, post.created_at, post.updated_at)
}

fn to_input(payload: PostPayload) -> PostInput {
    PostInput::new(payload.title)
}

/// Absolute URL of the collection, without query string.
fn collection_path(req: &HttpRequest) -> String {
    let info = req.connection_info();
    format!("{}://{}{}", info.scheme(), info.host(), req.path())
}

/// GET /api/posts
pub async fn list(
    req: HttpRequest,
    state: web::Data<AppState>,
    query: web::Query<ListQuery>,
) -> AppResult<HttpResponse> {
    let page = state.posts.list(query.page()).await?;

    let meta = PageMeta {
        current_page: page.page,
        per_page: page.per_page,
        total: page.total,
        last_page: page.last_page(),
        from: page.from(),
        to: page.to(),
    };
    let data = page.items.into_iter().map(to_response).collect();

    Ok(HttpResponse::Ok().json(Paginated::new(data, meta, collection_path(&req))))
}

/// POST /api/posts
pub async fn create(
    identity: Identity,
    state: web::Data<AppState>,
    body: web::Json<PostPayload>,
) -> AppResult<HttpResponse> {
    let post = state.posts.create(to_input(body.into_inner())).await?;
    tracing::debug!(user_id = identity.user_id, post_id = post.id, "Created post");

    Ok(HttpResponse::Created().json(to_response(post)))
}

/// GET /api/posts/{id}
pub async fn show(state: web::Data<AppState>, path: web::Path<i64>) -> AppResult<HttpResponse> {
    let post = state.posts.show(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(to_response(post)))
}

/// PUT /api/posts/{id}
///
/// The body is extracted fallibly so that a missing post answers 404 even
/// when the body cannot be read.
pub async fn update(
    identity: Identity,
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: Result<web::Json<PostPayload>, actix_web::Error>,
) -> actix_web::Result<HttpResponse> {
    let id = path.into_inner();
    let payload = match body {
        Ok(body) => body.into_inner(),
        Err(err) => {
            state.posts.show(id).await.map_err(AppError::from)?;
            return Err(err);
        }
    };

    let post = state
        .posts
        .update(id, to_input(payload))
        .await
        .map_err(AppError::from)?;
    tracing::debug!(user_id = identity.user_id, post_id = post.id, "Updated post");

    Ok(HttpResponse::Ok().json(to_response(post)))
}

/// DELETE /api/posts/{id}
pub async fn destroy(
    identity: Identity,
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    state.posts.delete(id).await?;
    tracing::debug!(user_id = identity.user_id, post_id = id, "Deleted post");

    Ok(HttpResponse::NoContent().finish())
}
