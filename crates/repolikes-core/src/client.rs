// SPDX-License-Identifier: Apache-2.0

//! HTTP client for the repositories API.
//!
//! [`ApiClient`] is a thin wrapper over `reqwest` bound to a base URL.
//! [`RepositoryApi`] is the seam the list screen talks through, so other
//! platforms (or tests) can supply their own transport.

use async_trait::async_trait;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::error::RepoLikesError;
use crate::repository::{Repository, RepositoryId};

/// Characters escaped when an id is placed in a single URL path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// HTTP client bound to the API base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a client for the given base URL.
    ///
    /// A trailing `/` on the base URL is ignored.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Returns the base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Sends `GET {base_url}{path}` and decodes the JSON body.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> crate::Result<T> {
        let url = self.url(path);
        let response = self.http.get(&url).send().await?;
        let body = check_status(response, &url).await?;
        serde_json::from_str(&body).map_err(|source| RepoLikesError::Decode { url, source })
    }

    /// Sends `POST {base_url}{path}` with an empty body and returns the raw response body.
    pub async fn post(&self, path: &str) -> crate::Result<String> {
        let url = self.url(path);
        let response = self.http.post(&url).send().await?;
        check_status(response, &url).await
    }
}

/// Converts a non-success status into [`RepoLikesError::HttpStatus`], otherwise reads the body.
async fn check_status(response: Response, url: &str) -> crate::Result<String> {
    let status = response.status();
    if !status.is_success() {
        return Err(RepoLikesError::HttpStatus {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }
    Ok(response.text().await?)
}

/// Operations the list screen needs from the repositories API.
#[async_trait]
pub trait RepositoryApi: Send + Sync {
    /// Fetches every repository, in server order.
    async fn fetch_list(&self) -> crate::Result<Vec<Repository>>;

    /// Asks the server to add one like to `id`.
    ///
    /// Returns the updated record when the server sends one back.
    async fn like_repository(&self, id: &RepositoryId) -> crate::Result<Option<Repository>>;
}

/// [`RepositoryApi`] over HTTP.
#[derive(Debug, Clone)]
pub struct HttpRepositoryApi {
    client: ApiClient,
}

impl HttpRepositoryApi {
    /// Creates an API bound to `base_url`.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            client: ApiClient::new(base_url),
        }
    }

    /// Returns the underlying client.
    #[must_use]
    pub fn client(&self) -> &ApiClient {
        &self.client
    }
}

#[async_trait]
impl RepositoryApi for HttpRepositoryApi {
    #[instrument(skip(self), fields(base_url = %self.client.base_url()))]
    async fn fetch_list(&self) -> crate::Result<Vec<Repository>> {
        let repositories: Vec<Repository> = self.client.get("/repositories").await?;
        debug!(count = repositories.len(), "Fetched repositories");
        Ok(repositories)
    }

    #[instrument(skip(self, id), fields(id = %id))]
    async fn like_repository(&self, id: &RepositoryId) -> crate::Result<Option<Repository>> {
        let segment = utf8_percent_encode(&id.to_string(), PATH_SEGMENT).to_string();
        let body = self
            .client
            .post(&format!("/repositories/{segment}/like"))
            .await?;
        // The body is informational only; a 2xx is the confirmation.
        let updated = serde_json::from_str::<Repository>(&body).ok();
        debug!(echoed = updated.is_some(), "Like accepted");
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use std::net::SocketAddr;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU64, Ordering};

    use axum::Router;
    use axum::extract::{Path, State};
    use axum::http::StatusCode;
    use axum::routing::{get, post};
    use serde_json::{Value, json};
    use tokio::net::TcpListener;

    use super::*;

    async fn serve(router: Router) -> SocketAddr {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        addr
    }

    fn api_for(addr: SocketAddr) -> HttpRepositoryApi {
        HttpRepositoryApi::new(&format!("http://{addr}/"))
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::new("http://localhost:3333/");
        assert_eq!(client.base_url(), "http://localhost:3333");
        assert_eq!(
            client.url("/repositories"),
            "http://localhost:3333/repositories"
        );
        assert_eq!(client.url("repositories"), "http://localhost:3333/repositories");
    }

    #[tokio::test]
    async fn fetch_list_preserves_server_order() {
        let router = Router::new().route(
            "/repositories",
            get(|| async {
                axum::Json(json!([
                    {"id": 2, "title": "second", "techs": ["Go"], "likes": 1},
                    {"id": 1, "title": "first", "techs": ["Node", "React"], "likes": 0},
                ]))
            }),
        );
        let api = api_for(serve(router).await);

        let repos = api.fetch_list().await.unwrap();

        let titles: Vec<_> = repos.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, ["second", "first"]);
        assert_eq!(repos[1].techs, ["Node", "React"]);
    }

    #[tokio::test]
    async fn fetch_list_maps_error_status() {
        let router = Router::new().route(
            "/repositories",
            get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        );
        let api = api_for(serve(router).await);

        let err = api.fetch_list().await.unwrap_err();

        assert!(matches!(err, RepoLikesError::HttpStatus { status: 500, .. }));
    }

    #[tokio::test]
    async fn fetch_list_rejects_unexpected_body() {
        let router = Router::new().route(
            "/repositories",
            get(|| async { axum::Json(json!({"error": "nope"})) }),
        );
        let api = api_for(serve(router).await);

        let err = api.fetch_list().await.unwrap_err();

        assert!(matches!(err, RepoLikesError::Decode { .. }));
    }

    #[tokio::test]
    async fn fetch_list_maps_connection_failure() {
        // Bind then drop to get a port nobody listens on.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = api_for(addr).fetch_list().await.unwrap_err();

        assert!(matches!(err, RepoLikesError::Network(_)));
        assert!(!err.has_response());
    }

    #[tokio::test]
    async fn like_repository_posts_to_like_route() {
        let hits = Arc::new(AtomicU64::new(0));
        let router = Router::new()
            .route(
                "/repositories/{id}/like",
                post(
                    |State(hits): State<Arc<AtomicU64>>, Path(id): Path<String>| async move {
                        let likes = hits.fetch_add(1, Ordering::SeqCst) + 1;
                        axum::Json(json!({"id": id, "title": "repo-a", "techs": [], "likes": likes}))
                    },
                ),
            )
            .with_state(Arc::clone(&hits));
        let api = api_for(serve(router).await);

        let updated = api
            .like_repository(&RepositoryId::from("abc"))
            .await
            .unwrap()
            .expect("server echoes the record");

        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert_eq!(updated.id, RepositoryId::from("abc"));
        assert_eq!(updated.likes, 1);
    }

    #[tokio::test]
    async fn like_repository_escapes_text_id_segment() {
        let router = Router::new().route(
            "/repositories/{id}/like",
            post(|Path(id): Path<String>| async move {
                axum::Json(json!({"id": id, "title": "repo-a", "techs": [], "likes": 1}))
            }),
        );
        let api = api_for(serve(router).await);
        let id = RepositoryId::from("a/b?c#d e");

        let updated = api
            .like_repository(&id)
            .await
            .unwrap()
            .expect("server echoes the record");

        assert_eq!(updated.id, id);
    }

    #[tokio::test]
    async fn like_repository_accepts_empty_success_body() {
        let router = Router::new().route(
            "/repositories/{id}/like",
            post(|| async { StatusCode::NO_CONTENT }),
        );
        let api = api_for(serve(router).await);

        let updated = api.like_repository(&RepositoryId::Number(1)).await.unwrap();

        assert!(updated.is_none());
    }

    #[tokio::test]
    async fn like_repository_maps_error_status() {
        let router = Router::new().route(
            "/repositories/{id}/like",
            post(|| async { (StatusCode::BAD_REQUEST, axum::Json(Value::Null)) }),
        );
        let api = api_for(serve(router).await);

        let err = api
            .like_repository(&RepositoryId::Number(9))
            .await
            .unwrap_err();

        match err {
            RepoLikesError::HttpStatus { status, url } => {
                assert_eq!(status, 400);
                assert!(url.ends_with("/repositories/9/like"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
