use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use url::Url;

use crate::config::settings;
use crate::error::ApiError;
use crate::resource::{Editable, EntityId, Resource};
use crate::session::Auth;

/// Collection endpoints disagree on shape: most wrap rows in a page
/// envelope, a few return a bare array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ListPayload<T> {
    Page { results: Vec<T> },
    Flat(Vec<T>),
}

impl<T> ListPayload<T> {
    fn into_items(self) -> Vec<T> {
        match self {
            ListPayload::Page { results } => results,
            ListPayload::Flat(items) => items,
        }
    }
}

/// JSON-over-HTTP client for the console backend. Credentials are fixed
/// at construction, so two sessions never share authorization state.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: String,
    auth: Auth,
}

impl ApiClient {
    pub fn new(base: Url, auth: Auth) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(settings().http.timeout_secs))
            .build()?;
        Ok(ApiClient {
            http,
            base: base.as_str().trim_end_matches('/').to_string(),
            auth,
        })
    }

    /// Same connection pool, different credentials. Used after login to
    /// step up from anonymous to bearer.
    pub fn with_auth(&self, auth: Auth) -> Self {
        ApiClient {
            http: self.http.clone(),
            base: self.base.clone(),
            auth,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}/", self.base, path.trim_matches('/'))
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.auth {
            Auth::Anonymous => request,
            Auth::Bearer(token) => request.bearer_auth(token),
        }
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();
        let body = response.text().await?;
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(ApiError::AuthRequired);
        }
        if !status.is_success() {
            return Err(ApiError::rejected(status.as_u16(), &body));
        }
        serde_json::from_str(&body).map_err(|err| ApiError::Decode(err.to_string()))
    }

    async fn get_once<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let mut request = self.http.get(url);
        if !params.is_empty() {
            request = request.query(params);
        }
        let response = self.authorize(request).send().await?;
        Self::decode(response).await
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.get_json_where(path, &[]).await
    }

    /// GET with a single bounded retry on 502/503/504 or a transport
    /// error. Mutating verbs never retry; a replayed POST could create
    /// the record twice.
    pub async fn get_json_where<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let url = self.endpoint(path);
        debug!("GET {url}");
        match self.get_once(&url, params).await {
            Err(err) if settings().http.retry_idempotent && err.is_retryable() => {
                warn!("GET {url} failed ({err}), retrying once");
                self.get_once(&url, params).await
            }
            outcome => outcome,
        }
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path);
        debug!("POST {url}");
        let response = self.authorize(self.http.post(&url).json(body)).send().await?;
        Self::decode(response).await
    }

    pub async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path);
        debug!("PUT {url}");
        let response = self.authorize(self.http.put(&url).json(body)).send().await?;
        Self::decode(response).await
    }

    /// List rows at an explicit path, e.g. a department's employee
    /// sub-collection.
    pub async fn list_at<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, ApiError> {
        let payload: ListPayload<T> = self.get_json(path).await?;
        Ok(payload.into_items())
    }

    pub async fn list<R: Resource>(&self) -> Result<Vec<R>, ApiError> {
        self.list_at(R::COLLECTION).await
    }

    pub async fn list_where<R: Resource>(
        &self,
        params: &[(&str, &str)],
    ) -> Result<Vec<R>, ApiError> {
        let payload: ListPayload<R> = self.get_json_where(R::COLLECTION, params).await?;
        Ok(payload.into_items())
    }

    pub async fn fetch<R: Resource>(&self, id: EntityId) -> Result<R, ApiError> {
        self.get_json(&format!("{}/{id}", R::COLLECTION)).await
    }

    pub async fn create<R: Editable>(&self, draft: &R::Draft) -> Result<R, ApiError> {
        self.post_json(R::COLLECTION, draft).await
    }

    pub async fn update<R: Editable>(&self, id: EntityId, draft: &R::Draft) -> Result<R, ApiError> {
        self.put_json(&format!("{}/{id}", R::COLLECTION), draft).await
    }

    pub async fn delete<R: Resource>(&self, id: EntityId) -> Result<(), ApiError> {
        let url = self.endpoint(&format!("{}/{id}", R::COLLECTION));
        debug!("DELETE {url}");
        let response = self.authorize(self.http.delete(&url)).send().await?;
        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(ApiError::AuthRequired);
        }
        if !status.is_success() {
            let body = response.text().await?;
            return Err(ApiError::rejected(status.as_u16(), &body));
        }
        Ok(())
    }
}
