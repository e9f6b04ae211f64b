//! Generic typed manager for one collection of the management API.

use std::marker::PhantomData;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::Result;
use crate::management::{Management, merge_into};
use crate::options::RequestOption;

/// CRUD and action verbs for the collection mounted at `/{resource}`.
///
/// Every call is a single request through the shared [`Management`] client.
/// Nothing is cached or validated locally; a non-2xx answer comes back as
/// [`ManagementError::Remote`](crate::ManagementError::Remote).
pub struct ResourceManager<T> {
    m: Arc<Management>,
    resource: &'static str,
    _entity: PhantomData<fn() -> T>,
}

impl<T> Clone for ResourceManager<T> {
    fn clone(&self) -> Self {
        Self {
            m: Arc::clone(&self.m),
            resource: self.resource,
            _entity: PhantomData,
        }
    }
}

impl<T> std::fmt::Debug for ResourceManager<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceManager")
            .field("resource", &self.resource)
            .finish_non_exhaustive()
    }
}

impl<T> ResourceManager<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(m: Arc<Management>, resource: &'static str) -> Self {
        Self {
            m,
            resource,
            _entity: PhantomData,
        }
    }

    pub fn resource(&self) -> &'static str {
        self.resource
    }

    /// `POST /{resource}`; the response is merged into `entity`.
    pub async fn create(&self, entity: &mut T) -> Result<()> {
        let path = self.m.uri(&[self.resource]);
        let response: Value = self.m.post(&path, &*entity).await?;
        merge_into(entity, response)
    }

    /// `GET /{resource}/{id}`.
    pub async fn read(&self, id: &str, options: &[RequestOption]) -> Result<T> {
        let path = self.m.uri(&[self.resource, id]) + &self.m.query(options);
        self.m.get(&path).await
    }

    /// `PATCH /{resource}/{id}`; the response is merged into `entity`.
    pub async fn update(&self, id: &str, entity: &mut T) -> Result<()> {
        let path = self.m.uri(&[self.resource, id]);
        let response: Value = self.m.patch(&path, &*entity).await?;
        merge_into(entity, response)
    }

    /// `DELETE /{resource}/{id}`.
    pub async fn delete(&self, id: &str) -> Result<()> {
        let path = self.m.uri(&[self.resource, id]);
        self.m.delete(&path).await
    }

    /// `GET /{resource}`. An empty body or `null` is an empty list.
    pub async fn list(&self, options: &[RequestOption]) -> Result<Vec<T>> {
        let path = self.m.uri(&[self.resource]) + &self.m.query(options);
        let items: Option<Vec<T>> = self.m.get(&path).await?;
        Ok(items.unwrap_or_default())
    }

    /// `POST /{resource}/{id}/{verb}` with no body.
    pub async fn action(&self, id: &str, verb: &str) -> Result<T> {
        let path = self.m.uri(&[self.resource, id, verb]);
        self.m.post_empty(&path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ManagementError;
    use crate::http_client::HttpMethod;
    use crate::options::{page, per_page};
    use crate::testing::FakeDoer;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
    struct Hook {
        #[serde(skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        enabled: Option<bool>,
    }

    fn manager(doer: &Arc<FakeDoer>) -> ResourceManager<Hook> {
        let m = Arc::new(Management::new(doer.clone()));
        ResourceManager::new(m, "hooks")
    }

    #[tokio::test]
    async fn update_patches_and_merges() {
        let doer = Arc::new(FakeDoer::new());
        doer.respond(
            HttpMethod::Patch,
            "/hooks/h_1",
            200,
            r#"{"id":"h_1","name":"renamed","enabled":true}"#,
        );
        let hooks = manager(&doer);

        let mut hook = Hook {
            name: Some("renamed".into()),
            ..Hook::default()
        };
        hooks.update("h_1", &mut hook).await.unwrap();

        assert_eq!(hook.id.as_deref(), Some("h_1"));
        assert_eq!(hook.enabled, Some(true));
        let sent = doer.requests();
        assert_eq!(sent[0].method, HttpMethod::Patch);
        assert_eq!(sent[0].body, Some(json!({"name": "renamed"})));
    }

    #[tokio::test]
    async fn list_passes_options_through() {
        let doer = Arc::new(FakeDoer::new());
        doer.respond(
            HttpMethod::Get,
            "/hooks?page=0&per_page=2",
            200,
            r#"[{"id":"h_2"},{"id":"h_1"}]"#,
        );
        let hooks = manager(&doer);

        let items = hooks.list(&[page(0), per_page(2)]).await.unwrap();
        let ids: Vec<_> = items.iter().filter_map(|h| h.id.as_deref()).collect();
        assert_eq!(ids, ["h_2", "h_1"]);
    }

    #[tokio::test]
    async fn list_null_or_empty_body_is_empty() {
        let doer = Arc::new(FakeDoer::new());
        doer.respond(HttpMethod::Get, "/hooks", 200, "null");
        let hooks = manager(&doer);
        assert!(hooks.list(&[]).await.unwrap().is_empty());

        doer.respond(HttpMethod::Get, "/hooks", 200, "");
        assert!(hooks.list(&[]).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn action_posts_without_body() {
        let doer = Arc::new(FakeDoer::new());
        doer.respond(HttpMethod::Post, "/hooks/h_1/enable", 200, r#"{"id":"h_1","enabled":true}"#);
        let hooks = manager(&doer);

        let hook = hooks.action("h_1", "enable").await.unwrap();
        assert_eq!(hook.enabled, Some(true));
        assert_eq!(doer.requests()[0].body, None);
    }

    #[tokio::test]
    async fn create_failure_leaves_entity_untouched() {
        let doer = Arc::new(FakeDoer::new());
        doer.respond(
            HttpMethod::Post,
            "/hooks",
            400,
            r#"{"statusCode":400,"error":"Bad Request","message":"Payload validation error"}"#,
        );
        let hooks = manager(&doer);

        let mut hook = Hook {
            name: Some("x".into()),
            ..Hook::default()
        };
        let before = hook.clone();
        let result = hooks.create(&mut hook).await;
        assert!(matches!(
            result,
            Err(ManagementError::Remote(ref r)) if r.status_code == 400
        ));
        assert_eq!(hook, before);
    }

    #[tokio::test]
    async fn success_body_of_wrong_shape_is_parse_error() {
        let doer = Arc::new(FakeDoer::new());
        doer.respond(HttpMethod::Get, "/hooks/h_1", 200, r#"["not", "an", "object"]"#);
        let hooks = manager(&doer);

        let result = hooks.read("h_1", &[]).await;
        assert!(matches!(result, Err(ManagementError::Parse { .. })));
    }

    #[test]
    fn manager_is_shareable() {
        fn assert_send_sync<S: Send + Sync>() {}
        assert_send_sync::<ResourceManager<Hook>>();
    }
}
