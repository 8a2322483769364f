use std::env;
use std::io;
use std::sync::RwLock;

use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{get, put, web, App, HttpResponse, HttpServer, Responder};

use serde::{Deserialize, Serialize};
use markov_gen_core::session::Session;

use crate::extract::TextExtractor;

mod extract;

/// Struct representing query parameters for the `/v1/build` endpoint
#[derive(Deserialize)]
struct BuildParams {
	url: Option<String>,
}

/// Struct representing query parameters for the `/v1/generate` endpoint
#[derive(Deserialize)]
struct GenerateParams {
	num_words: Option<usize>,
	start_word: Option<String>,
}

#[derive(Serialize)]
struct GenerateResponse {
	text: String,
}

#[derive(Serialize)]
struct ErrorResponse {
	error: String,
}

type SharedSession = web::Data<RwLock<Session>>;

fn error_body(error: impl ToString) -> ErrorResponse {
	ErrorResponse { error: error.to_string() }
}

/// HTTP PUT endpoint `/v1/build`
///
/// Replaces the current model. With a `url` query parameter the corpus is
/// fetched and extracted server-side; otherwise the raw request body is
/// used as the corpus text.
#[put("/v1/build")]
async fn put_build(
	data: SharedSession,
	extractor: web::Data<TextExtractor>,
	query: web::Query<BuildParams>,
	body: String,
) -> impl Responder {
	let text = match &query.url {
		Some(raw) => {
			let url = match extract::validate_url(raw) {
				Ok(url) => url,
				Err(e) => return HttpResponse::BadRequest().json(error_body(e)),
			};
			match extractor.extract_text(&url).await {
				Ok(text) => text,
				Err(e) => return HttpResponse::InternalServerError().json(error_body(e)),
			}
		}
		None => body,
	};

	if text.trim().is_empty() {
		return HttpResponse::BadRequest().json(error_body("Missing corpus text"));
	}

	let mut session = match data.write() {
		Ok(s) => s,
		Err(_) => return HttpResponse::InternalServerError().json(error_body("Model lock failed")),
	};
	session.build(&text);

	if let Some(stats) = session.stats() {
		log::info!(
			"Model built: {} corpus words, {} vocabulary entries",
			stats.corpus_size,
			stats.vocab_size
		);
	}

	HttpResponse::Ok().body("Model built successfully")
}

/// HTTP GET endpoint `/v1/generate`
///
/// Generates a word sequence from the current model. Randomness is drawn
/// per request; no generator state is shared across requests.
#[get("/v1/generate")]
async fn get_generated(data: SharedSession, query: web::Query<GenerateParams>) -> impl Responder {
	let num_words = query.num_words.unwrap_or(50);
	if num_words < 1 {
		return HttpResponse::BadRequest().json(error_body("num_words must be >= 1"));
	}

	let session = match data.read() {
		Ok(s) => s,
		Err(_) => return HttpResponse::InternalServerError().json(error_body("Model lock failed")),
	};

	match session.generate(num_words, query.start_word.as_deref()) {
		Ok(text) => HttpResponse::Ok().json(GenerateResponse { text }),
		Err(e) => HttpResponse::BadRequest().json(error_body(e)),
	}
}

/// HTTP GET endpoint `/v1/stats`
///
/// Returns model statistics, or JSON `null` when no model has been built.
#[get("/v1/stats")]
async fn get_stats(data: SharedSession) -> impl Responder {
	let session = match data.read() {
		Ok(s) => s,
		Err(_) => return HttpResponse::InternalServerError().json(error_body("Model lock failed")),
	};
	HttpResponse::Ok().json(session.stats())
}

/// HTTP GET endpoint `/v1/vocabulary`
///
/// Returns the sorted vocabulary snapshot of the current model.
#[get("/v1/vocabulary")]
async fn get_vocabulary(data: SharedSession) -> impl Responder {
	let session = match data.read() {
		Ok(s) => s,
		Err(_) => return HttpResponse::InternalServerError().json(error_body("Model lock failed")),
	};
	let mut words: Vec<String> = session.vocabulary().into_iter().collect();
	words.sort();
	HttpResponse::Ok().json(words)
}

/// Main entry point for the server.
///
/// Wraps the session in a `RwLock` (exclusive lock around build-and-swap,
/// shared locks around reads) and starts an Actix-web HTTP server with
/// permissive CORS for browser frontends.
///
/// # Notes
/// - The bind address comes from `MARKOV_GEN_BIND`, default 127.0.0.1:5000.
/// - Request logging uses `env_logger` (`RUST_LOG=info`).
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::init();

	let bind = env::var("MARKOV_GEN_BIND").unwrap_or_else(|_| "127.0.0.1:5000".to_owned());

	let session = web::Data::new(RwLock::new(Session::new()));
	let extractor = web::Data::new(TextExtractor::new().map_err(io::Error::other)?);

	log::info!("Listening on {bind}");

	HttpServer::new(move || {
		App::new()
			.wrap(Logger::default())
			.wrap(Cors::permissive())
			.app_data(session.clone())
			.app_data(extractor.clone())
			.service(put_build)
			.service(get_generated)
			.service(get_stats)
			.service(get_vocabulary)
	})
		.bind(bind)?
		.run()
		.await
}
