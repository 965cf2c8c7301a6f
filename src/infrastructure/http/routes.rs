//! HTTP Routes
//!
//! API Endpoints:
//! - /api/ping                           GET     存活检查
//! - /api/models                         GET     列出模型服务上的模型
//! - /api/generate                       POST    文本生成（非流式）
//! - /api/novels                         GET     列出小说
//! - /api/novels                         POST    创建小说
//! - /api/novels/:id                     GET     获取完整记录
//! - /api/novels/:id                     PUT     部分更新
//! - /api/novels/:id                     PATCH   部分更新
//! - /api/novels/:id                     DELETE  删除小说
//! - /api/novels/:id/export/:format      POST    导出为 txt / json / docx

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new().nest("/api", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .route("/models", get(handlers::list_models))
        .route("/generate", post(handlers::generate))
        .route(
            "/novels",
            get(handlers::list_novels).post(handlers::create_novel),
        )
        .route(
            "/novels/:id",
            get(handlers::get_novel)
                .put(handlers::update_novel)
                .patch(handlers::update_novel)
                .delete(handlers::delete_novel),
        )
        .route("/novels/:id/export/:format", post(handlers::export_novel))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tempfile::{tempdir, TempDir};
    use tower::util::ServiceExt;

    use crate::application::{LanguageModelPort, NovelRepositoryPort};
    use crate::domain::export::ExportLabels;
    use crate::infrastructure::adapters::{
        default_formatters, FakeLanguageModel, FakeLanguageModelConfig, FileExportStorage,
    };
    use crate::infrastructure::memory::InMemoryNovelRepository;

    struct TestApp {
        router: Router,
        repo: Arc<InMemoryNovelRepository>,
        _export_dir: TempDir,
    }

    async fn test_app(llm_config: FakeLanguageModelConfig) -> TestApp {
        let export_dir = tempdir().unwrap();
        let repo = InMemoryNovelRepository::new().arc();
        let llm: Arc<dyn LanguageModelPort> = Arc::new(FakeLanguageModel::new(llm_config));
        let storage = Arc::new(FileExportStorage::new(export_dir.path()).await.unwrap());
        let state = AppState::new(
            repo.clone(),
            llm,
            default_formatters(ExportLabels::zh()),
            storage,
        );

        TestApp {
            router: create_routes().with_state(Arc::new(state)),
            repo,
            _export_dir: export_dir,
        }
    }

    impl TestApp {
        async fn send(
            &self,
            method: Method,
            uri: &str,
            body: Option<Value>,
        ) -> (StatusCode, Value) {
            let builder = Request::builder().method(method).uri(uri);
            let request = match body {
                Some(body) => builder
                    .header(CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
                None => builder.body(Body::empty()).unwrap(),
            };

            let response = self.router.clone().oneshot(request).await.unwrap();
            let status = response.status();
            let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
            let value = if bytes.is_empty() {
                Value::Null
            } else {
                serde_json::from_slice(&bytes).unwrap()
            };
            (status, value)
        }

        async fn create(&self, body: Value) -> String {
            let (status, created) = self.send(Method::POST, "/api/novels", Some(body)).await;
            assert_eq!(status, StatusCode::CREATED);
            created["id"].as_str().unwrap().to_string()
        }
    }

    #[tokio::test]
    async fn test_ping() {
        let app = test_app(FakeLanguageModelConfig::default()).await;
        let (status, body) = app.send(Method::GET, "/api/ping", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_create_get_update_export_scenario() {
        let app = test_app(FakeLanguageModelConfig::default()).await;

        let (status, created) = app
            .send(
                Method::POST,
                "/api/novels",
                Some(json!({"title": "秋水长天", "content": "第一章..."})),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["title"], "秋水长天");
        let id = created["id"].as_str().unwrap().to_string();

        let (status, novel) = app.send(Method::GET, &format!("/api/novels/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            novel,
            json!({
                "id": id,
                "title": "秋水长天",
                "characters": "",
                "content": "第一章...",
                "knowledge": "",
                "promptLibrary": "",
            })
        );

        let (status, updated) = app
            .send(
                Method::PATCH,
                &format!("/api/novels/{id}"),
                Some(json!({"characters": "张三"})),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["id"], id.as_str());
        assert_eq!(updated["message"], "Novel updated successfully");

        let (status, exported) = app
            .send(Method::POST, &format!("/api/novels/{id}/export/txt"), None)
            .await;
        assert_eq!(status, StatusCode::OK);

        let filepath = exported["filepath"].as_str().unwrap();
        assert!(filepath.ends_with(".txt"), "{filepath}");
        assert!(exported["message"].as_str().unwrap().contains(filepath));

        let text = std::fs::read_to_string(filepath).unwrap();
        assert_eq!(text, "标题: 秋水长天\n\n角色设定:\n张三\n\n正文内容:\n第一章...");
    }

    #[tokio::test]
    async fn test_list_in_creation_order() {
        let app = test_app(FakeLanguageModelConfig::default()).await;
        let first = app.create(json!({"title": "甲"})).await;
        let second = app.create(json!({"title": "乙"})).await;

        let (status, list) = app.send(Method::GET, "/api/novels", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            list,
            json!([{"id": first, "title": "甲"}, {"id": second, "title": "乙"}])
        );
    }

    #[tokio::test]
    async fn test_create_requires_title() {
        let app = test_app(FakeLanguageModelConfig::default()).await;

        for body in [json!({}), json!({"title": ""}), json!({"content": "x"})] {
            let (status, error) = app.send(Method::POST, "/api/novels", Some(body)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(error, json!({"message": "Title is required"}));
        }

        let (_, list) = app.send(Method::GET, "/api/novels", None).await;
        assert_eq!(list, json!([]));
    }

    #[tokio::test]
    async fn test_unknown_and_malformed_ids_are_not_found() {
        let app = test_app(FakeLanguageModelConfig::default()).await;
        let missing = uuid::Uuid::new_v4().to_string();

        for id in [missing.as_str(), "not-a-uuid"] {
            let (status, body) = app.send(Method::GET, &format!("/api/novels/{id}"), None).await;
            assert_eq!(status, StatusCode::NOT_FOUND);
            assert_eq!(body, json!({"message": "Novel not found"}));

            let (status, _) = app
                .send(Method::DELETE, &format!("/api/novels/{id}"), None)
                .await;
            assert_eq!(status, StatusCode::NOT_FOUND);

            let (status, _) = app
                .send(Method::POST, &format!("/api/novels/{id}/export/json"), None)
                .await;
            assert_eq!(status, StatusCode::NOT_FOUND);
        }
    }

    #[tokio::test]
    async fn test_alternate_id_spellings_are_not_found() {
        let app = test_app(FakeLanguageModelConfig::default()).await;
        let id = app.create(json!({"title": "t"})).await;

        for alias in [id.replace('-', ""), id.to_uppercase(), format!("urn:uuid:{id}")] {
            let (status, body) = app
                .send(Method::GET, &format!("/api/novels/{alias}"), None)
                .await;
            assert_eq!(status, StatusCode::NOT_FOUND);
            assert_eq!(body, json!({"message": "Novel not found"}));
        }

        let (status, _) = app.send(Method::GET, &format!("/api/novels/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_update_checks_existence_before_empty_body() {
        let app = test_app(FakeLanguageModelConfig::default()).await;
        let missing = uuid::Uuid::new_v4();

        let (status, _) = app
            .send(Method::PUT, &format!("/api/novels/{missing}"), Some(json!({})))
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let id = app.create(json!({"title": "T"})).await;
        let (status, body) = app
            .send(Method::PUT, &format!("/api/novels/{id}"), Some(json!({})))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"message": "No update data provided"}));

        let (status, _) = app.send(Method::PUT, &format!("/api/novels/{id}"), None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_update_accepts_snake_case_prompt_library() {
        let app = test_app(FakeLanguageModelConfig::default()).await;
        let id = app.create(json!({"title": "T"})).await;

        let (status, _) = app
            .send(
                Method::PUT,
                &format!("/api/novels/{id}"),
                Some(json!({"prompt_library": "p1", "title": "T2"})),
            )
            .await;
        assert_eq!(status, StatusCode::OK);

        let (_, novel) = app.send(Method::GET, &format!("/api/novels/{id}"), None).await;
        assert_eq!(novel["promptLibrary"], "p1");
        assert_eq!(novel["title"], "T2");
    }

    #[tokio::test]
    async fn test_delete_names_title() {
        let app = test_app(FakeLanguageModelConfig::default()).await;
        let id = app.create(json!({"title": "秋水长天"})).await;

        let (status, body) = app
            .send(Method::DELETE, &format!("/api/novels/{id}"), None)
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Novel '秋水长天' deleted successfully");

        let (status, _) = app.send(Method::GET, &format!("/api/novels/{id}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_export_unknown_format() {
        let app = test_app(FakeLanguageModelConfig::default()).await;
        let id = app.create(json!({"title": "T"})).await;

        let (status, body) = app
            .send(Method::POST, &format!("/api/novels/{id}/export/pdf"), None)
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"message": "Invalid file format requested: pdf"}));
    }

    #[tokio::test]
    async fn test_export_json_and_docx() {
        let app = test_app(FakeLanguageModelConfig::default()).await;
        let id = app.create(json!({"title": "T", "content": "c"})).await;

        let (status, body) = app
            .send(Method::POST, &format!("/api/novels/{id}/export/JSON"), None)
            .await;
        assert_eq!(status, StatusCode::OK);
        let exported: Value =
            serde_json::from_slice(&std::fs::read(body["filepath"].as_str().unwrap()).unwrap())
                .unwrap();
        assert_eq!(exported["content"], "c");

        let (status, body) = app
            .send(Method::POST, &format!("/api/novels/{id}/export/docx"), None)
            .await;
        assert_eq!(status, StatusCode::OK);
        let bytes = std::fs::read(body["filepath"].as_str().unwrap()).unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }

    #[tokio::test]
    async fn test_models_listed() {
        let app = test_app(FakeLanguageModelConfig {
            models: vec!["qwen2:7b".to_string(), "llama3:8b".to_string()],
            ..Default::default()
        })
        .await;

        let (status, body) = app.send(Method::GET, "/api/models", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!(["qwen2:7b", "llama3:8b"]));
    }

    #[tokio::test]
    async fn test_models_when_service_down() {
        let app = test_app(FakeLanguageModelConfig {
            unavailable: true,
            ..Default::default()
        })
        .await;

        let (status, body) = app.send(Method::GET, "/api/models", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"].as_str().unwrap().contains("fake://model-service"));
    }

    #[tokio::test]
    async fn test_generate() {
        let app = test_app(FakeLanguageModelConfig {
            reply: Some("从前有座山".to_string()),
            ..Default::default()
        })
        .await;

        let (status, body) = app
            .send(
                Method::POST,
                "/api/generate",
                Some(json!({"model": "x", "prompt": "hi"})),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"generatedText": "从前有座山"}));
    }

    #[tokio::test]
    async fn test_generate_validation_and_streaming() {
        let app = test_app(FakeLanguageModelConfig::default()).await;

        let (status, body) = app
            .send(Method::POST, "/api/generate", Some(json!({"model": "x"})))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Missing required fields: model and prompt");

        let (status, body) = app
            .send(
                Method::POST,
                "/api/generate",
                Some(json!({"model": "x", "prompt": "hi", "stream": true})),
            )
            .await;
        assert_eq!(status, StatusCode::NOT_IMPLEMENTED);
        assert_eq!(body["error"], "Streaming not yet implemented in this backend");
    }

    #[tokio::test]
    async fn test_generate_when_service_down_leaves_store_untouched() {
        let app = test_app(FakeLanguageModelConfig {
            unavailable: true,
            ..Default::default()
        })
        .await;
        let id = app.create(json!({"title": "T", "content": "c"})).await;

        let (status, body) = app
            .send(
                Method::POST,
                "/api/generate",
                Some(json!({"model": "x", "prompt": "hi"})),
            )
            .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let error = body["error"].as_str().unwrap();
        assert!(error.contains("Cannot connect"), "{error}");

        assert_eq!(app.repo.count().await.unwrap(), 1);
        let (_, novel) = app.send(Method::GET, &format!("/api/novels/{id}"), None).await;
        assert_eq!(novel["content"], "c");
    }
}
