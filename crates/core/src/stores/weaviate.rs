use crate::traits::DocumentStore;
use crate::{Chunk, Metadata, StoreError};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde_json::{json, Value};
use url::Url;

const BACKEND: &str = "weaviate";
const PAGE_SIZE: usize = 100;
const CHUNK_FIELDS: [&str; 6] = ["content", "text", "url", "image", "image_data", "imageData"];

pub struct WeaviateStore {
    endpoint: Url,
    client: Client,
    api_key: Option<String>,
}

impl WeaviateStore {
    pub fn new(endpoint: &str, api_key: Option<String>) -> Result<Self, StoreError> {
        let mut endpoint = Url::parse(endpoint)?;
        if !endpoint.path().ends_with('/') {
            let path = format!("{}/", endpoint.path());
            endpoint.set_path(&path);
        }
        Ok(Self {
            endpoint,
            client: Client::new(),
            api_key: api_key.filter(|key| !key.trim().is_empty()),
        })
    }

    fn url(&self, path: &str) -> Result<Url, StoreError> {
        Ok(self.endpoint.join(path)?)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.api_key {
            Some(key) => request.bearer_auth(key),
            None => request,
        }
    }

    async fn fetch_page(
        &self,
        collection: &str,
        limit: usize,
        after: Option<&str>,
    ) -> Result<Vec<Chunk>, StoreError> {
        let mut url = self.url("v1/objects")?;
        url.query_pairs_mut()
            .append_pair("class", collection)
            .append_pair("limit", &limit.to_string());
        if let Some(after) = after {
            url.query_pairs_mut().append_pair("after", after);
        }

        let response = self.send(self.client.get(url)).await?;
        let parsed: Value = response.json().await?;
        Ok(parsed
            .pointer("/objects")
            .and_then(Value::as_array)
            .map(|objects| objects.iter().map(object_to_chunk).collect())
            .unwrap_or_default())
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, StoreError> {
        let response = self.authorized(request).send().await?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::BackendResponse {
                backend: BACKEND.to_string(),
                details: format!("{status}: {}", body.trim()),
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl DocumentStore for WeaviateStore {
    async fn list_collections(&self) -> Result<Vec<String>, StoreError> {
        let response = self.send(self.client.get(self.url("v1/schema")?)).await?;
        let parsed: Value = response.json().await?;
        Ok(parsed
            .pointer("/classes")
            .and_then(Value::as_array)
            .map(|classes| {
                classes
                    .iter()
                    .filter_map(|class| class.pointer("/class").and_then(Value::as_str))
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn list_documents(
        &self,
        collection: &str,
        limit: usize,
    ) -> Result<Vec<Chunk>, StoreError> {
        if limit > 0 {
            return self.fetch_page(collection, limit, None).await;
        }

        let mut chunks = Vec::new();
        let mut after: Option<String> = None;
        loop {
            let page = self.fetch_page(collection, PAGE_SIZE, after.as_deref()).await?;
            let exhausted = page.len() < PAGE_SIZE;
            after = page.last().map(|chunk| chunk.id.clone());
            chunks.extend(page);
            if exhausted || after.is_none() {
                break;
            }
        }
        Ok(chunks)
    }

    async fn get_document(&self, collection: &str, id: &str) -> Result<Chunk, StoreError> {
        let url = self.url(&format!("v1/objects/{collection}/{id}"))?;
        let response = self.authorized(self.client.get(url)).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(StoreError::DocumentNotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            });
        }
        if !response.status().is_success() {
            return Err(StoreError::BackendResponse {
                backend: BACKEND.to_string(),
                details: response.status().to_string(),
            });
        }
        let parsed: Value = response.json().await?;
        Ok(object_to_chunk(&parsed))
    }

    async fn create_document(&self, collection: &str, chunk: &Chunk) -> Result<(), StoreError> {
        let body = json!({
            "class": collection,
            "id": chunk.id,
            "properties": chunk_to_properties(chunk),
        });
        self.send(self.client.post(self.url("v1/objects")?).json(&body))
            .await?;
        Ok(())
    }

    async fn delete_document(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        let url = self.url(&format!("v1/objects/{collection}/{id}"))?;
        self.send(self.client.delete(url)).await?;
        Ok(())
    }

    async fn delete_documents_bulk(
        &self,
        collection: &str,
        ids: &[String],
    ) -> Result<usize, StoreError> {
        if ids.is_empty() {
            return Ok(0);
        }

        let body = json!({
            "match": {
                "class": collection,
                "where": {
                    "path": ["id"],
                    "operator": "ContainsAny",
                    "valueTextArray": ids,
                }
            },
            "output": "minimal",
        });
        let response = self
            .send(self.client.delete(self.url("v1/batch/objects")?).json(&body))
            .await?;
        let parsed: Value = response.json().await?;
        let deleted = parsed
            .pointer("/results/successful")
            .and_then(Value::as_u64)
            .unwrap_or_default();
        Ok(deleted as usize)
    }

    async fn collection_schema(&self, collection: &str) -> Result<Vec<String>, StoreError> {
        let url = self.url(&format!("v1/schema/{collection}"))?;
        let response = self.authorized(self.client.get(url)).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(StoreError::CollectionNotFound(collection.to_string()));
        }
        if !response.status().is_success() {
            return Err(StoreError::BackendResponse {
                backend: BACKEND.to_string(),
                details: response.status().to_string(),
            });
        }
        let parsed: Value = response.json().await?;
        Ok(property_names(&parsed))
    }

    async fn delete_collection(&self, collection: &str) -> Result<(), StoreError> {
        let url = self.url(&format!("v1/schema/{collection}"))?;
        self.send(self.client.delete(url)).await?;
        Ok(())
    }
}

fn object_to_chunk(object: &Value) -> Chunk {
    let id = object
        .pointer("/id")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let properties = object
        .pointer("/properties")
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_default();

    let text = |key: &str| properties.get(key).and_then(Value::as_str).map(str::to_string);
    let metadata: Metadata = properties
        .iter()
        .filter(|(key, _)| !CHUNK_FIELDS.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    Chunk {
        id,
        content: text("content").or_else(|| text("text")),
        image: text("image"),
        image_data: text("image_data").or_else(|| text("imageData")),
        url: text("url"),
        metadata,
    }
}

fn chunk_to_properties(chunk: &Chunk) -> Metadata {
    let mut properties = chunk.metadata.clone();
    let fields = [
        ("content", &chunk.content),
        ("url", &chunk.url),
        ("image", &chunk.image),
        ("image_data", &chunk.image_data),
    ];
    for (key, value) in fields {
        if let Some(value) = value {
            properties.insert(key.to_string(), Value::String(value.clone()));
        }
    }
    properties
}

fn property_names(class: &Value) -> Vec<String> {
    class
        .pointer("/properties")
        .and_then(Value::as_array)
        .map(|properties| {
            properties
                .iter()
                .filter_map(|property| property.pointer("/name").and_then(Value::as_str))
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
