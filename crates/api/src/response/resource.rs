use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use envelope_core::envelope::{empty_data, Meta};
use envelope_core::error::CoreError;
use envelope_core::types::JsonMap;
use serde::Serialize;
use serde_json::Value;

use super::{render, JsonApiResourceCollection, RequestContext, ToPayload, ToResponse};

/// Envelope around a single resource (or none).
///
/// `meta.status` always mirrors the status the envelope was built with, and
/// that status is applied to the HTTP response when it is not `200 OK`.
#[derive(Debug, Clone)]
pub struct JsonApiResource<R> {
    resource: Option<R>,
    meta: Meta,
    errors: Vec<Value>,
    status: StatusCode,
}

impl<R> JsonApiResource<R> {
    /// Wrap a resource with empty metadata, no errors and `200 OK`.
    pub fn new(resource: impl Into<Option<R>>) -> Self {
        Self {
            resource: resource.into(),
            meta: Meta::new(StatusCode::OK.as_u16()),
            errors: Vec::new(),
            status: StatusCode::OK,
        }
    }

    /// Envelope without a resource; `data` serializes as `{}`.
    pub fn empty() -> Self {
        Self::new(None)
    }

    /// Build the envelope in one call.
    ///
    /// `meta` entries are copied; a `status` key among them is replaced by
    /// `status`.
    pub fn from_parts(
        resource: impl Into<Option<R>>,
        meta: JsonMap,
        errors: Vec<Value>,
        status: StatusCode,
    ) -> Self {
        Self::new(resource)
            .with_status(status)
            .with_meta(meta)
            .with_errors(errors)
    }

    /// Wrap one item of a collection. Items never carry metadata of their own.
    pub(crate) fn hydrate(resource: R) -> Self {
        Self::new(resource)
    }

    /// List counterpart of this envelope, with `R` as the item type.
    pub fn collection(
        items: impl IntoIterator<Item = R>,
        meta: JsonMap,
        errors: Vec<Value>,
    ) -> JsonApiResourceCollection<R> {
        JsonApiResourceCollection::new(items)
            .with_meta(meta)
            .with_errors(errors)
    }

    /// Replace the metadata with a copy of `entries`, keeping the status.
    pub fn with_meta(mut self, entries: JsonMap) -> Self {
        self.meta = Meta::from_map(entries, self.status.as_u16());
        self
    }

    /// Add a single metadata entry. `status` is reserved and ignored.
    pub fn with_meta_entry(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.meta.insert(key, value);
        self
    }

    /// Replace the error entries. They are emitted verbatim.
    pub fn with_errors<I, E>(mut self, errors: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Value>,
    {
        self.errors = errors.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_error(mut self, error: impl Into<Value>) -> Self {
        self.errors.push(error.into());
        self
    }

    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self.meta.set_status(status.as_u16());
        self
    }

    /// Like [`with_status`](Self::with_status) for a raw integer.
    ///
    /// Fails with [`CoreError::InvalidStatusCode`] outside `100..=999`.
    pub fn try_with_status(self, code: u16) -> Result<Self, CoreError> {
        let status = StatusCode::from_u16(code).map_err(|_| CoreError::InvalidStatusCode(code))?;
        Ok(self.with_status(status))
    }

    pub fn resource(&self) -> Option<&R> {
        self.resource.as_ref()
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

impl<R: Serialize> JsonApiResource<R> {
    fn payload(&self) -> serde_json::Result<Value> {
        match &self.resource {
            // Shortcut: no resource means an empty object, not `null`.
            None => Ok(empty_data()),
            Some(resource) => serde_json::to_value(resource),
        }
    }

    fn into_response_with(self, data: serde_json::Result<Value>) -> Response {
        render(data, self.meta, self.errors, self.status)
    }
}

impl<R: Serialize> ToPayload for JsonApiResource<R> {
    fn to_payload(&self, _request: &RequestContext) -> serde_json::Result<Value> {
        self.payload()
    }
}

impl<R: Serialize> ToResponse for JsonApiResource<R> {
    fn to_response(self, request: &RequestContext) -> Response {
        let data = self.to_payload(request);
        self.into_response_with(data)
    }
}

impl<R: Serialize> IntoResponse for JsonApiResource<R> {
    fn into_response(self) -> Response {
        let data = self.payload();
        self.into_response_with(data)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use axum::http::Request;
    use serde_json::json;

    use super::*;

    #[derive(Debug, Clone, Serialize)]
    struct Project {
        id: i64,
        name: &'static str,
    }

    fn request() -> RequestContext {
        Request::new(()).into_parts().0
    }

    fn entries(value: Value) -> JsonMap {
        match value {
            Value::Object(map) => map.into_iter().collect(),
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn defaults_to_ok_with_status_only_meta() {
        let resource = JsonApiResource::new(Project { id: 1, name: "a" });

        assert_eq!(resource.status(), StatusCode::OK);
        assert_eq!(serde_json::to_value(resource.meta()).unwrap(), json!({"status": 200}));
        assert!(resource.errors().is_empty());
    }

    #[test]
    fn payload_is_serde_form_of_resource() {
        let resource = JsonApiResource::new(Project { id: 7, name: "demo" });

        assert_eq!(
            resource.to_payload(&request()).unwrap(),
            json!({"id": 7, "name": "demo"})
        );
    }

    #[test]
    fn absent_resource_payload_is_empty_object() {
        let resource = JsonApiResource::<Project>::from_parts(
            None,
            entries(json!({"page": 3})),
            vec![json!({"message": "boom"})],
            StatusCode::NOT_FOUND,
        );

        assert_eq!(resource.to_payload(&request()).unwrap(), json!({}));
    }

    #[test]
    fn from_parts_overrides_caller_status() {
        let resource = JsonApiResource::from_parts(
            Project { id: 1, name: "a" },
            entries(json!({"page": 2, "status": 500})),
            Vec::new(),
            StatusCode::CREATED,
        );

        assert_eq!(
            serde_json::to_value(resource.meta()).unwrap(),
            json!({"page": 2, "status": 201})
        );
    }

    #[test]
    fn with_status_after_meta_keeps_entries() {
        let resource = JsonApiResource::new(Project { id: 1, name: "a" })
            .with_meta(entries(json!({"page": 2})))
            .with_status(StatusCode::ACCEPTED);

        assert_eq!(resource.meta().status(), 202);
        assert_eq!(resource.meta().get("page"), Some(json!(2)));
    }

    #[test]
    fn hydrated_item_meta_holds_only_status() {
        let item = JsonApiResource::hydrate(Project { id: 1, name: "a" });

        assert_eq!(serde_json::to_value(item.meta()).unwrap(), json!({"status": 200}));
        assert_eq!(item.status(), StatusCode::OK);
    }

    #[test]
    fn try_with_status_accepts_valid_codes() {
        let resource = JsonApiResource::<Project>::empty()
            .try_with_status(422)
            .unwrap();

        assert_eq!(resource.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(resource.meta().status(), 422);
    }

    #[test]
    fn try_with_status_rejects_out_of_range_codes() {
        let result = JsonApiResource::<Project>::empty().try_with_status(1000);
        assert_matches!(result, Err(CoreError::InvalidStatusCode(1000)));

        let result = JsonApiResource::<Project>::empty().try_with_status(42);
        assert_matches!(result, Err(CoreError::InvalidStatusCode(42)));
    }

    #[test]
    fn errors_are_stored_verbatim() {
        let entry = json!({"field": "name", "message": "required"});
        let resource = JsonApiResource::<Project>::empty()
            .with_errors(vec![entry.clone()])
            .with_meta_entry("status", 999);

        assert_eq!(resource.errors(), &[entry]);
        assert_eq!(resource.meta().status(), 200);
    }
}
