#![allow(dead_code)]

use std::{
    io::{Cursor, Write},
    sync::{Arc, Mutex},
};

use actix_web::{http::StatusCode, web, App, HttpRequest, HttpResponse, HttpServer};
use async_trait::async_trait;
use deck_quiz_server::{
    errors::AppResult, models::domain::GenerationRequest, services::model_service::TextModel,
};
use zip::{write::SimpleFileOptions, CompressionMethod, ZipWriter};

pub const PPTX: &str = "application/vnd.openxmlformats-officedocument.presentationml.presentation";

pub const PARIS_QUIZ: &str = r#"[{"question":"What is the capital of France?","options":["Paris","Rome","Berlin","Madrid"],"answer":"Paris"}]"#;

pub fn slide_deck(slides: &[&str]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for (index, text) in slides.iter().enumerate() {
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
        writer
            .start_file(format!("ppt/slides/slide{}.xml", index + 1), options)
            .unwrap();
        write!(
            writer,
            "<p:sld><p:txBody><a:p><a:r><a:t>{text}</a:t></a:r></a:p></p:txBody></p:sld>"
        )
        .unwrap();
    }
    writer.finish().unwrap().into_inner()
}

/// Text model that answers every prompt with a canned reply and remembers
/// what it was asked.
pub struct CannedModel {
    reply: String,
    pub requests: Mutex<Vec<(String, u32)>>,
}

impl CannedModel {
    pub fn new(reply: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            reply: reply.into(),
            requests: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl TextModel for CannedModel {
    async fn generate(&self, request: &GenerationRequest) -> AppResult<String> {
        self.requests
            .lock()
            .unwrap()
            .push((request.source_text.clone(), request.question_count));
        Ok(self.reply.clone())
    }
}

/// Requests received by a stub form service: method, query string, body.
pub type Received = Arc<Mutex<Vec<(String, String, String)>>>;

/// Starts a form service stub on an ephemeral port that answers every
/// request with `status` and `body`. Returns its endpoint URL.
pub async fn spawn_form_stub(status: u16, body: &'static str) -> (String, Received) {
    let received: Received = Arc::new(Mutex::new(Vec::new()));
    let log = received.clone();

    let server = HttpServer::new(move || {
        let log = log.clone();
        App::new().default_service(web::to(move |req: HttpRequest, payload: web::Bytes| {
            let log = log.clone();
            async move {
                log.lock().unwrap().push((
                    req.method().to_string(),
                    req.query_string().to_string(),
                    String::from_utf8_lossy(&payload).into_owned(),
                ));
                HttpResponse::build(StatusCode::from_u16(status).unwrap())
                    .content_type("application/json")
                    .body(body)
            }
        }))
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .unwrap();

    let addr = server.addrs()[0];
    actix_rt::spawn(server.run());

    (format!("http://{addr}/exec"), received)
}

/// Requests received by a stub model endpoint: path, `Authorization` header,
/// body.
pub type ModelCalls = Arc<Mutex<Vec<(String, String, String)>>>;

/// Starts an OpenAI-compatible stub on an ephemeral port that answers every
/// request with `status` and `body`. Returns the API base to configure.
pub async fn spawn_model_stub(status: u16, body: &'static str) -> (String, ModelCalls) {
    let calls: ModelCalls = Arc::new(Mutex::new(Vec::new()));
    let log = calls.clone();

    let server = HttpServer::new(move || {
        let log = log.clone();
        App::new().default_service(web::to(move |req: HttpRequest, payload: web::Bytes| {
            let log = log.clone();
            async move {
                let authorization = req
                    .headers()
                    .get("authorization")
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or_default()
                    .to_string();
                log.lock().unwrap().push((
                    req.path().to_string(),
                    authorization,
                    String::from_utf8_lossy(&payload).into_owned(),
                ));
                HttpResponse::build(StatusCode::from_u16(status).unwrap())
                    .content_type("application/json")
                    .body(body)
            }
        }))
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .unwrap();

    let addr = server.addrs()[0];
    actix_rt::spawn(server.run());

    (format!("http://{addr}/v1"), calls)
}
