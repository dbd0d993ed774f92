//! HTTP contract of the steganography service.
//!
//! [`StegoClient`] builds endpoint URLs and multipart forms and interprets
//! responses; the wire itself sits behind [`Transport`] (gloo-net in the
//! browser, a recording mock in tests).

use serde::Deserialize;
use serde::de::DeserializeOwned;

use super::error::ServiceError;
use super::selection::Carrier;
use crate::config::{endpoints, form_fields};
use crate::models::{MediaKind, SupportedFormats};

// =============================================================================
// Wire types
// =============================================================================

/// One multipart field value.
#[derive(Clone, Debug, PartialEq)]
pub enum FormPart<F> {
    File(F),
    Text(String),
}

/// Ordered multipart form.
#[derive(Clone, Debug, PartialEq)]
pub struct MultipartForm<F> {
    fields: Vec<(&'static str, FormPart<F>)>,
}

impl<F> MultipartForm<F> {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    pub fn file(mut self, name: &'static str, file: F) -> Self {
        self.fields.push((name, FormPart::File(file)));
        self
    }

    pub fn text(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.fields.push((name, FormPart::Text(value.into())));
        self
    }

    pub fn fields(&self) -> &[(&'static str, FormPart<F>)] {
        &self.fields
    }
}

#[cfg(test)]
impl<F> MultipartForm<F> {
    /// Field names in insertion order.
    pub fn names(&self) -> Vec<&'static str> {
        self.fields.iter().map(|(name, _)| *name).collect()
    }

    /// Text value of the first field called `name`.
    pub fn text_value(&self, name: &str) -> Option<&str> {
        self.fields.iter().find_map(|(n, part)| match part {
            FormPart::Text(value) if *n == name => Some(value.as_str()),
            _ => None,
        })
    }
}

impl<F> Default for MultipartForm<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Raw HTTP response: status and body bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends requests to the service.
#[allow(async_fn_in_trait)]
pub trait Transport {
    type File: Carrier;

    async fn get(&self, url: &str) -> Result<HttpReply, ServiceError>;

    async fn post(
        &self,
        url: &str,
        form: MultipartForm<Self::File>,
    ) -> Result<HttpReply, ServiceError>;
}

// =============================================================================
// Requests
// =============================================================================

/// Payload embedding request.
#[derive(Clone, Debug, PartialEq)]
pub struct HideRequest<F> {
    pub file: F,
    pub payload: String,
    pub password: Option<String>,
}

impl<F> HideRequest<F> {
    /// `password` is only sent when non-empty.
    pub fn new(file: F, payload: impl Into<String>, password: &str) -> Self {
        Self {
            file,
            payload: payload.into(),
            password: non_empty(password),
        }
    }

    pub fn into_form(self) -> MultipartForm<F> {
        let form = MultipartForm::new()
            .file(form_fields::FILE, self.file)
            .text(form_fields::DATA, self.payload);
        match self.password {
            Some(password) => form.text(form_fields::PASSWORD, password),
            None => form,
        }
    }
}

/// Payload recovery request.
#[derive(Clone, Debug, PartialEq)]
pub struct ExtractRequest<F> {
    pub file: F,
    pub password: Option<String>,
}

impl<F> ExtractRequest<F> {
    /// `password` is only sent when non-empty.
    pub fn new(file: F, password: &str) -> Self {
        Self {
            file,
            password: non_empty(password),
        }
    }

    pub fn into_form(self) -> MultipartForm<F> {
        let form = MultipartForm::new().file(form_fields::FILE, self.file);
        match self.password {
            Some(password) => form.text(form_fields::PASSWORD, password),
            None => form,
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

// =============================================================================
// Responses
// =============================================================================

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

#[derive(Deserialize)]
struct CapacityBody {
    capacity_bits: u64,
}

#[derive(Deserialize)]
struct ExtractBody {
    data: String,
}

// =============================================================================
// Client
// =============================================================================

/// Typed client for the service's REST API.
#[derive(Clone, Debug)]
pub struct StegoClient<T> {
    transport: T,
    base: String,
}

impl<T: Transport> StegoClient<T> {
    /// `base` is the address from the
    /// [`ServiceLocator`](super::locator::ServiceLocator); empty means same origin.
    pub fn new(transport: T, base: impl Into<String>) -> Self {
        Self {
            transport,
            base: base.into(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    fn kind_url(&self, path: &str, kind: MediaKind) -> String {
        format!("{}{}/{}", self.base, path, kind.as_str())
    }

    /// `GET /api/health`; any 2xx counts as healthy.
    pub async fn health(&self) -> Result<(), ServiceError> {
        let reply = self.transport.get(&self.url(endpoints::HEALTH)).await?;
        check(reply).map(|_| ())
    }

    /// `POST /api/capacity/{kind}` with the carrier; returns capacity in bits.
    pub async fn capacity(&self, kind: MediaKind, file: T::File) -> Result<u64, ServiceError> {
        let form = MultipartForm::new().file(form_fields::FILE, file);
        let reply = self
            .transport
            .post(&self.kind_url(endpoints::CAPACITY, kind), form)
            .await?;
        let body: CapacityBody = decode(&check(reply)?)?;
        Ok(body.capacity_bits)
    }

    /// `POST /api/hide/{kind}`; returns the modified carrier file.
    pub async fn hide(
        &self,
        kind: MediaKind,
        request: HideRequest<T::File>,
    ) -> Result<Vec<u8>, ServiceError> {
        let reply = self
            .transport
            .post(&self.kind_url(endpoints::HIDE, kind), request.into_form())
            .await?;
        Ok(check(reply)?.body)
    }

    /// `POST /api/extract/{kind}`; returns the recovered payload text.
    pub async fn extract(
        &self,
        kind: MediaKind,
        request: ExtractRequest<T::File>,
    ) -> Result<String, ServiceError> {
        let reply = self
            .transport
            .post(&self.kind_url(endpoints::EXTRACT, kind), request.into_form())
            .await?;
        let body: ExtractBody = decode(&check(reply)?)?;
        Ok(body.data)
    }

    /// `GET /api/supported-formats`.
    pub async fn supported_formats(&self) -> Result<SupportedFormats, ServiceError> {
        let reply = self
            .transport
            .get(&self.url(endpoints::SUPPORTED_FORMATS))
            .await?;
        decode(&check(reply)?)
    }
}

/// Turn a non-2xx reply into [`ServiceError::Rejected`], reading the
/// structured `{"error": ...}` body when it parses.
fn check(reply: HttpReply) -> Result<HttpReply, ServiceError> {
    if reply.is_success() {
        return Ok(reply);
    }
    let message = serde_json::from_slice::<ErrorBody>(&reply.body)
        .ok()
        .and_then(|body| body.error);
    Err(ServiceError::Rejected {
        status: reply.status,
        message,
    })
}

fn decode<B: DeserializeOwned>(reply: &HttpReply) -> Result<B, ServiceError> {
    serde_json::from_slice(&reply.body).map_err(|e| ServiceError::Decode(e.to_string()))
}
