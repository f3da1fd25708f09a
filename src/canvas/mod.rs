//! Thin blocking client for the three Canvas endpoints the report reads.

pub mod dto;
pub mod link;

use crate::config::ApiConfig;
use crate::errors::{AppError, AppResult};
use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, LINK};
use serde::de::DeserializeOwned;

/// What the report needs from one HTTP exchange.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub link: Option<String>,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(&self) -> AppResult<T> {
        Ok(serde_json::from_str(&self.body)?)
    }

    /// Target of the `rel="next"` link, if the response carries one.
    pub fn next_link(&self) -> Option<String> {
        self.link.as_deref().and_then(link::next_link)
    }
}

/// Issues authenticated GET requests. Tests swap in an in-memory fake.
pub trait Transport {
    fn get(&self, url: &str) -> AppResult<ApiResponse>;
}

pub struct HttpTransport {
    client: Client,
    access_token: String,
}

impl HttpTransport {
    pub fn new(api: &ApiConfig) -> AppResult<Self> {
        let client = Client::builder()
            .user_agent(concat!("canvas-grade-report/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            access_token: api.access_token.clone(),
        })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> AppResult<ApiResponse> {
        let response = self
            .client
            .get(url)
            .header(AUTHORIZATION, format!("Bearer {}", self.access_token))
            .send()?;

        let status = response.status().as_u16();
        let link = response
            .headers()
            .get(LINK)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.text()?;

        Ok(ApiResponse { status, link, body })
    }
}

/// Knows the Canvas URL layout; every request goes through the transport.
pub struct CanvasClient<T: Transport> {
    transport: T,
    base_url: String,
}

impl<T: Transport> CanvasClient<T> {
    pub fn new(transport: T, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn course_url(&self, course_id: &str) -> String {
        format!("{}/api/v1/courses/{}", self.base_url, course_id)
    }

    pub fn assignments_url(&self, course_id: &str) -> String {
        format!("{}/assignments", self.course_url(course_id))
    }

    pub fn submissions_url(&self, course_id: &str, assignment_id: u64) -> String {
        format!(
            "{}/assignments/{}/submissions?include[]=user",
            self.course_url(course_id),
            assignment_id
        )
    }

    /// Absolute URL for a link target; relative targets are resolved
    /// against the API base.
    pub fn resolve(&self, target: &str) -> String {
        if target.starts_with('/') {
            format!("{}{}", self.base_url, target)
        } else {
            target.to_string()
        }
    }

    pub fn get(&self, url: &str) -> AppResult<ApiResponse> {
        tracing::debug!(url, "GET");
        let response = self.transport.get(url)?;
        tracing::debug!(url, status = response.status, "response");
        Ok(response)
    }

    /// Single-record course lookup.
    pub fn fetch_course(&self, course_id: &str) -> AppResult<dto::Course> {
        let response = self.get(&self.course_url(course_id))?;
        if !response.is_success() {
            return Err(AppError::Status(response.status));
        }
        response.json()
    }
}
