//! Form Endpoints
//!
//! `FormsApi` over HTTP.

use async_trait::async_trait;
use reqwest::Method;

use super::{FormsApi, HttpFormsApi};
use crate::error::ApiResult;
use crate::models::{Form, FormId};

#[async_trait(?Send)]
impl FormsApi for HttpFormsApi {
    async fn list_forms(&self) -> ApiResult<Vec<Form>> {
        self.send_json(Method::GET, &["forms"]).await
    }

    async fn duplicate_form(&self, id: &FormId) -> ApiResult<Form> {
        self.send_json(Method::POST, &["forms", id.as_str(), "duplicate"]).await
    }

    async fn delete_form(&self, id: &FormId) -> ApiResult<()> {
        // Body is ignored; any 2xx counts as deleted
        self.send(Method::DELETE, &["forms", id.as_str()]).await?;
        Ok(())
    }
}
