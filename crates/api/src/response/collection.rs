use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use envelope_core::envelope::Meta;
use envelope_core::error::CoreError;
use envelope_core::pagination::{Page, PAGINATION_KEY};
use envelope_core::types::JsonMap;
use serde::Serialize;
use serde_json::{json, Value};

use super::{render, JsonApiResource, RequestContext, ToPayload, ToResponse};

/// Envelope around a list of resources of type `R`.
///
/// Usually obtained through [`JsonApiResource::collection`]. Each item is
/// hydrated into its own [`JsonApiResource`] to produce its payload, so the
/// `data` member is an array of item payloads.
#[derive(Debug, Clone)]
pub struct JsonApiResourceCollection<R> {
    items: Vec<R>,
    meta: Meta,
    errors: Vec<Value>,
    status: StatusCode,
    page: Option<Page>,
}

impl<R> JsonApiResourceCollection<R> {
    pub fn new(items: impl IntoIterator<Item = R>) -> Self {
        Self {
            items: items.into_iter().collect(),
            meta: Meta::new(StatusCode::OK.as_u16()),
            errors: Vec::new(),
            status: StatusCode::OK,
            page: None,
        }
    }

    /// Replace the metadata with a copy of `entries`, keeping the status and
    /// any pagination already recorded.
    pub fn with_meta(mut self, entries: JsonMap) -> Self {
        self.meta = Meta::from_map(entries, self.status.as_u16());
        if let Some(page) = self.page {
            self.meta.insert(PAGINATION_KEY, pagination_value(&page));
        }
        self
    }

    pub fn with_meta_entry(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.meta.insert(key, value);
        self
    }

    pub fn with_errors<I, E>(mut self, errors: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Value>,
    {
        self.errors = errors.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self.meta.set_status(status.as_u16());
        self
    }

    pub fn try_with_status(self, code: u16) -> Result<Self, CoreError> {
        let status = StatusCode::from_u16(code).map_err(|_| CoreError::InvalidStatusCode(code))?;
        Ok(self.with_status(status))
    }

    /// Record the listing window under `meta.pagination`.
    pub fn with_pagination(mut self, page: Page) -> Self {
        self.page = Some(page);
        self.meta.insert(PAGINATION_KEY, pagination_value(&page));
        self
    }

    pub fn page(&self) -> Option<&Page> {
        self.page.as_ref()
    }

    pub fn items(&self) -> &[R] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn meta(&self) -> &Meta {
        &self.meta
    }

    pub fn errors(&self) -> &[Value] {
        &self.errors
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

fn pagination_value(page: &Page) -> Value {
    json!({
        "limit": page.limit,
        "offset": page.offset,
        "total": page.total,
        "has_more": page.has_more(),
    })
}

impl<R: Serialize> ToPayload for JsonApiResourceCollection<R> {
    fn to_payload(&self, request: &RequestContext) -> serde_json::Result<Value> {
        self.items
            .iter()
            .map(|item| JsonApiResource::hydrate(item).to_payload(request))
            .collect::<serde_json::Result<Vec<_>>>()
            .map(Value::Array)
    }
}

impl<R: Serialize> ToResponse for JsonApiResourceCollection<R> {
    fn to_response(self, request: &RequestContext) -> Response {
        let data = self.to_payload(request);
        render(data, self.meta, self.errors, self.status)
    }
}

impl<R: Serialize> IntoResponse for JsonApiResourceCollection<R> {
    fn into_response(self) -> Response {
        let request = axum::http::Request::new(()).into_parts().0;
        self.to_response(&request)
    }
}
