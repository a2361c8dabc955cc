use url::Url;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid url")]
    InvalidUrl(#[from] url::ParseError),
    #[error("invalid token")]
    InvalidToken(#[from] reqwest::header::InvalidHeaderValue),
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Server error: {0}\n{1}")]
    ServerError(reqwest::StatusCode, String),
    #[error("json error")]
    Json(#[from] serde_json::Error),
}

pub const DEFAULT_SERVER_URL: &str = "https://aidex.dev/";

const BASE: &str = "api/v1/";

#[derive(Default, Debug, Clone)]
pub struct ClientConfig<'a> {
    pub url_base: Option<Url>,
    pub token: Option<&'a str>,
}

impl<'a> ClientConfig<'a> {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_url(mut self, url: impl AsRef<str>) -> Result<Self, Error> {
        self.url_base = Some(Url::parse(url.as_ref())?);
        Ok(self)
    }

    /// The JWT sent as a Bearer token. Only needed for admin endpoints.
    pub fn with_token(mut self, token: &'a str) -> Self {
        self.token = Some(token);
        self
    }
}

/// An async client for the Aidex directory API.
pub struct Client(Url, reqwest::Client);

impl Client {
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let url = config
            .url_base
            .map_or_else(|| Url::parse(DEFAULT_SERVER_URL), Ok)?;

        let mut headers = reqwest::header::HeaderMap::new();
        if let Some(token) = config.token {
            let mut value =
                reqwest::header::HeaderValue::from_str(&format!("Bearer {token}"))?;
            value.set_sensitive(true);
            headers.insert(reqwest::header::AUTHORIZATION, value);
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;
        Ok(Self(url, client))
    }

    fn url(&self, path: &str) -> Result<Url, Error> {
        Ok(self.0.join(BASE)?.join(path)?)
    }

    async fn expect_json<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, Error> {
        if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            let status = response.status();
            let body = response.text().await?;
            Err(Error::ServerError(status, body))
        }
    }

    pub async fn platforms(
        &self,
        params: &crate::params::PlatformListParams,
    ) -> Result<Vec<crate::platforms::Platform>, Error> {
        let request = self.1.get(self.url("platforms")?).query(params);
        Self::expect_json(request.send().await?).await
    }

    pub async fn platform_details(
        &self,
        id: i32,
    ) -> Result<crate::platforms::Platform, Error> {
        let request = self.1.get(self.url(&format!("platforms/{id}"))?);
        Self::expect_json(request.send().await?).await
    }

    pub async fn platform_create(
        &self,
        body: &crate::platforms::PlatformCreateRequest<'_>,
    ) -> Result<crate::platforms::PlatformCreateResponse, Error> {
        let request = self.1.post(self.url("platforms")?).json(body);
        Self::expect_json(request.send().await?).await
    }

    pub async fn search(
        &self,
        query: &str,
    ) -> Result<Vec<crate::platforms::Platform>, Error> {
        let request = self
            .1
            .get(self.url("platforms/search")?)
            .query(&[("q", query)]);
        Self::expect_json(request.send().await?).await
    }

    pub async fn reviews(
        &self,
        platform_id: i32,
        params: &crate::params::ReviewListParams,
    ) -> Result<Vec<crate::reviews::Review>, Error> {
        let request = self
            .1
            .get(self.url(&format!("platforms/{platform_id}/reviews"))?)
            .query(params);
        Self::expect_json(request.send().await?).await
    }

    pub async fn review_create(
        &self,
        platform_id: i32,
        body: &crate::reviews::ReviewCreateRequest<'_>,
    ) -> Result<crate::reviews::Review, Error> {
        let request = self
            .1
            .post(self.url(&format!("platforms/{platform_id}/reviews"))?)
            .json(body);
        Self::expect_json(request.send().await?).await
    }

    pub async fn review_flag(&self, review_id: i32) -> Result<crate::Ok, Error> {
        let request = self
            .1
            .post(self.url(&format!("reviews/{review_id}/flag"))?);
        Self::expect_json(request.send().await?).await
    }

    pub async fn tags(&self) -> Result<crate::tags::TagList, Error> {
        let request = self.1.get(self.url("tags")?);
        Self::expect_json(request.send().await?).await
    }
}
