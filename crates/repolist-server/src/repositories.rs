//! User repositories handlers.

use actix_web::{
    http::header::{self, HeaderMap},
    web, HttpRequest, HttpResponse,
};
use repolist_core::use_cases::repositories::GetUserRepositoriesInterface;
use repolist_ghapi_interface::RepositoryListParams;
use repolist_models::UserRepositoriesResponse;
use repolist_sentry::sentry;
use serde::Deserialize;
use shaku::HasComponent;
use tracing::{info, warn};

use crate::{server::AppContext, translator::error_response, Result, ServerError};

const BEARER_PREFIX: &str = "bearer ";

#[derive(Debug, Deserialize)]
pub(crate) struct RepositoriesQuery {
    sort: Option<String>,
    direction: Option<String>,
}

#[tracing::instrument(skip_all, fields(user_name = %path))]
pub(crate) async fn user_repositories(
    ctx: web::Data<AppContext>,
    req: HttpRequest,
    path: web::Path<String>,
) -> HttpResponse {
    let user_name = path.into_inner();

    match list_user_repositories(&ctx, req.headers(), &user_name, req.query_string()).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => {
            warn!(
                user_name = %user_name,
                error = %e,
                message = "Could not list user repositories"
            );

            error_response(&ctx.config.messages, &e)
        }
    }
}

async fn list_user_repositories(
    ctx: &AppContext,
    headers: &HeaderMap,
    user_name: &str,
    query_string: &str,
) -> Result<UserRepositoriesResponse> {
    check_accept_header(headers)?;
    let query = parse_query(query_string)?;
    let access_token = extract_access_token(headers);

    info!(
        user_name = %user_name,
        sort = ?query.sort,
        direction = ?query.direction,
        message = "Listing user repositories"
    );

    sentry::configure_scope(|scope| {
        scope.set_tag("github_user", user_name);
    });

    let get_user_repositories: &dyn GetUserRepositoriesInterface = ctx.core_module.resolve_ref();
    let repositories = get_user_repositories
        .run(
            &ctx.as_core_context(),
            user_name,
            &access_token,
            &RepositoryListParams::new(query.sort, query.direction),
        )
        .await?;

    Ok(UserRepositoriesResponse::new(repositories))
}

fn parse_query(query_string: &str) -> Result<RepositoriesQuery> {
    web::Query::<RepositoriesQuery>::from_query(query_string)
        .map(web::Query::into_inner)
        .map_err(|e| ServerError::InvalidQuery { source: e })
}

fn check_accept_header(headers: &HeaderMap) -> Result<()> {
    let value = headers
        .get(header::ACCEPT)
        .ok_or(ServerError::MissingHeader { name: "Accept" })?;

    match value.to_str() {
        Ok(v) if !v.trim().is_empty() => Ok(()),
        _ => Err(ServerError::NotAcceptable),
    }
}

/// Token from the `Authorization` header, without its `Bearer` scheme.
fn extract_access_token(headers: &HeaderMap) -> String {
    let value = match headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
    {
        Some(v) => v.trim(),
        None => return String::new(),
    };

    match value.get(..BEARER_PREFIX.len()) {
        Some(prefix) if prefix.eq_ignore_ascii_case(BEARER_PREFIX) => {
            value[BEARER_PREFIX.len()..].trim().to_string()
        }
        _ => value.to_string(),
    }
}
