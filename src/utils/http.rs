//! Fetch-backed transport for the service client.
//!
//! Sends requests with `gloo-net` and hands back raw status and body bytes;
//! interpreting them is left to [`StegoClient`](crate::core::StegoClient).

use gloo_net::http::{Request, Response};
use web_sys::{File, FormData};

use crate::core::error::ServiceError;
use crate::core::{FormPart, HttpReply, MultipartForm, Transport};

/// [`Transport`] over the browser Fetch API.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTransport;

impl Transport for GlooTransport {
    type File = File;

    async fn get(&self, url: &str) -> Result<HttpReply, ServiceError> {
        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| ServiceError::Network(e.to_string()))?;
        read_reply(response).await
    }

    async fn post(&self, url: &str, form: MultipartForm<File>) -> Result<HttpReply, ServiceError> {
        let body = to_form_data(&form)?;
        let response = Request::post(url)
            .body(body)
            .map_err(|e| ServiceError::RequestBuild(e.to_string()))?
            .send()
            .await
            .map_err(|e| ServiceError::Network(e.to_string()))?;
        read_reply(response).await
    }
}

/// Build the browser multipart body. The browser sets the boundary header.
fn to_form_data(form: &MultipartForm<File>) -> Result<FormData, ServiceError> {
    let data = FormData::new().map_err(|_| ServiceError::RequestBuild("FormData".to_string()))?;
    for (name, part) in form.fields() {
        let appended = match part {
            FormPart::File(file) => data.append_with_blob_and_filename(name, file, &file.name()),
            FormPart::Text(value) => data.append_with_str(name, value),
        };
        appended.map_err(|_| ServiceError::RequestBuild(format!("field `{}`", name)))?;
    }
    Ok(data)
}

async fn read_reply(response: Response) -> Result<HttpReply, ServiceError> {
    let status = response.status();
    let body = response
        .binary()
        .await
        .map_err(|_| ServiceError::ResponseRead)?;
    Ok(HttpReply { status, body })
}
