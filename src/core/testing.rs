//! Test doubles for the orchestration core.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use super::client::{FormPart, HttpReply, MultipartForm, Transport};
use super::error::{PlatformError, ServiceError};
use super::platform::Platform;
use super::selection::{Carrier, Side};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestFile {
    name: String,
}

impl TestFile {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

impl Carrier for TestFile {
    fn name(&self) -> String {
        self.name.clone()
    }
}

/// A request as seen by [`MockTransport`].
#[derive(Clone, Debug)]
pub struct RecordedRequest {
    pub method: &'static str,
    pub url: String,
    pub fields: Vec<&'static str>,
    pub texts: Vec<(&'static str, String)>,
    pub file: Option<String>,
}

type Hook = Box<dyn FnOnce()>;

#[derive(Default)]
struct Inner {
    replies: VecDeque<Result<HttpReply, ServiceError>>,
    requests: Vec<RecordedRequest>,
    on_send: Option<Hook>,
}

/// Transport that records requests and plays back queued replies.
#[derive(Clone, Default)]
pub struct MockTransport {
    inner: Rc<RefCell<Inner>>,
}

impl MockTransport {
    pub fn respond(&self, status: u16, body: &[u8]) {
        self.inner.borrow_mut().replies.push_back(Ok(HttpReply {
            status,
            body: body.to_vec(),
        }));
    }

    pub fn fail(&self, err: ServiceError) {
        self.inner.borrow_mut().replies.push_back(Err(err));
    }

    /// Run `hook` while the next request is "on the wire".
    pub fn on_send(&self, hook: impl FnOnce() + 'static) {
        self.inner.borrow_mut().on_send = Some(Box::new(hook));
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.inner.borrow().requests.clone()
    }

    fn record(&self, request: RecordedRequest) -> Result<HttpReply, ServiceError> {
        let hook = {
            let mut inner = self.inner.borrow_mut();
            inner.requests.push(request);
            inner.on_send.take()
        };
        if let Some(hook) = hook {
            hook();
        }
        self.inner
            .borrow_mut()
            .replies
            .pop_front()
            .unwrap_or_else(|| Err(ServiceError::Network("no reply queued".to_string())))
    }
}

impl Transport for MockTransport {
    type File = TestFile;

    async fn get(&self, url: &str) -> Result<HttpReply, ServiceError> {
        self.record(RecordedRequest {
            method: "GET",
            url: url.to_string(),
            fields: Vec::new(),
            texts: Vec::new(),
            file: None,
        })
    }

    async fn post(
        &self,
        url: &str,
        form: MultipartForm<TestFile>,
    ) -> Result<HttpReply, ServiceError> {
        let mut texts = Vec::new();
        let mut file = None;
        for (name, part) in form.fields() {
            match part {
                FormPart::File(f) => file = Some(f.name()),
                FormPart::Text(value) => texts.push((*name, value.clone())),
            }
        }
        self.record(RecordedRequest {
            method: "POST",
            url: url.to_string(),
            fields: form.names(),
            texts,
            file,
        })
    }
}

/// Platform with a settable clock and scripted clipboard results.
pub struct MockPlatform {
    pub now: Cell<f64>,
    pub clipboard_ok: Cell<bool>,
    pub fallback_ok: Cell<bool>,
    pub download_ok: Cell<bool>,
    pub fallback_calls: Cell<u32>,
    downloads: RefCell<Vec<(Vec<u8>, String, String)>>,
    reset_inputs: RefCell<Vec<Side>>,
}

impl Default for MockPlatform {
    fn default() -> Self {
        Self {
            now: Cell::new(0.0),
            clipboard_ok: Cell::new(true),
            fallback_ok: Cell::new(true),
            download_ok: Cell::new(true),
            fallback_calls: Cell::new(0),
            downloads: RefCell::new(Vec::new()),
            reset_inputs: RefCell::new(Vec::new()),
        }
    }
}

impl MockPlatform {
    /// (bytes, filename, mime) per download.
    pub fn downloads(&self) -> Vec<(Vec<u8>, String, String)> {
        self.downloads.borrow().clone()
    }

    pub fn reset_inputs(&self) -> Vec<Side> {
        self.reset_inputs.borrow().clone()
    }
}

impl Platform for MockPlatform {
    fn now_ms(&self) -> f64 {
        self.now.get()
    }

    fn trigger_download(
        &self,
        bytes: &[u8],
        filename: &str,
        mime: &str,
    ) -> Result<(), PlatformError> {
        if !self.download_ok.get() {
            return Err(PlatformError::Download("blob rejected".to_string()));
        }
        self.downloads
            .borrow_mut()
            .push((bytes.to_vec(), filename.to_string(), mime.to_string()));
        Ok(())
    }

    async fn write_clipboard(&self, _text: &str) -> Result<(), PlatformError> {
        if self.clipboard_ok.get() {
            Ok(())
        } else {
            Err(PlatformError::Clipboard("permission denied".to_string()))
        }
    }

    fn write_clipboard_fallback(&self, _text: &str) -> Result<(), PlatformError> {
        self.fallback_calls.set(self.fallback_calls.get() + 1);
        if self.fallback_ok.get() {
            Ok(())
        } else {
            Err(PlatformError::Clipboard("copy command failed".to_string()))
        }
    }

    fn reset_file_input(&self, side: Side) {
        self.reset_inputs.borrow_mut().push(side);
    }
}
