use std::io;
use std::sync::{Arc, Mutex};

use actix_cors::Cors;
use actix_web::{get, put, web, App, HttpResponse, HttpServer, Responder};

use serde::Deserialize;
use rs_name_core::error::NameGenError;
use rs_name_core::io::{list_word_lists, resolve_word_list};
use rs_name_core::model::generation_input::GeneratorConfig;
use rs_name_core::model::repository::WordListRepository;

/// Folder holding the `.txt` word lists.
const DATA_FOLDER: &str = "./data";

/// Upper bound on `count` for a single request.
const MAX_COUNT: usize = 1_000;

/// Upper bound on pair selection attempts per name for a single request.
const MAX_ATTEMPTS_PER_NAME: usize = 1_000;

/// Query parameters of `/v1/generate` besides the generator configuration.
///
/// The configuration itself (`min_length`, `max_length`, `middle_letter_chance`,
/// `max_attempts`) is read from the same query string as a `GeneratorConfig`.
#[derive(Deserialize)]
struct GenerateParams {
	count: Option<usize>,
}

#[derive(Deserialize)]
struct WordListQuery {
	prefixes: Option<String>,
	suffixes: Option<String>,
}

/// Loaded word lists. Reloads swap the `Arc`, requests clone it and release the lock.
struct SharedData {
	repository: Arc<WordListRepository>,
}

/// Maps a generation error onto an HTTP response.
fn error_response(error: NameGenError) -> HttpResponse {
	match error {
		NameGenError::InvalidConfiguration(_) => HttpResponse::BadRequest().body(error.to_string()),
		NameGenError::EmptyWordList(_) => HttpResponse::Conflict().body(error.to_string()),
		NameGenError::NoValidPair { .. } => HttpResponse::UnprocessableEntity().body(error.to_string()),
		NameGenError::Io(_) => HttpResponse::InternalServerError().body(error.to_string()),
	}
}

/// Maps a word list name lookup failure onto an HTTP response.
fn lookup_response(error: io::Error) -> HttpResponse {
	match error.kind() {
		io::ErrorKind::InvalidInput => HttpResponse::BadRequest().body(error.to_string()),
		io::ErrorKind::NotFound => HttpResponse::NotFound().body(error.to_string()),
		_ => HttpResponse::InternalServerError().body("Failed to list word lists"),
	}
}

fn current_repository(data: &Mutex<SharedData>) -> Option<Arc<WordListRepository>> {
	data.lock().ok().map(|shared_data| Arc::clone(&shared_data.repository))
}

/// HTTP GET endpoint `/v1/generate`
///
/// Generates `count` names with the loaded word lists.
/// Returns the names joined by newlines.
#[get("/v1/generate")]
async fn get_generated(
	data: web::Data<Mutex<SharedData>>,
	query: web::Query<GenerateParams>,
	config: web::Query<GeneratorConfig>,
) -> impl Responder {
	let count = query.count.unwrap_or(1);
	if count > MAX_COUNT {
		return HttpResponse::BadRequest().body(format!("count must be at most {}", MAX_COUNT));
	}

	let mut config = config.into_inner();
	let max_attempts = config.max_attempts().min(MAX_ATTEMPTS_PER_NAME);
	if let Err(e) = config.set_max_attempts(max_attempts) {
		return error_response(e);
	}

	let Some(repository) = current_repository(&data) else {
		return HttpResponse::InternalServerError().body("Word list lock failed");
	};

	let generator = match repository.generator(config) {
		Ok(g) => g,
		Err(e) => return error_response(e),
	};

	match generator.generate_names(count, &mut rand::rng()) {
		Ok(names) => HttpResponse::Ok().body(names.join("\n")),
		Err(e) => {
			log::warn!("generation failed: {e}");
			error_response(e)
		}
	}
}

#[get("/v1/word_lists")]
async fn get_word_lists() -> impl Responder {
	match list_word_lists(DATA_FOLDER) {
		Ok(names) => HttpResponse::Ok().body(names.join("\n")),
		Err(_) => HttpResponse::InternalServerError().body("Failed to list word lists"),
	}
}

#[get("/v1/loaded_word_lists")]
async fn get_loaded_word_lists(data: web::Data<Mutex<SharedData>>) -> impl Responder {
	match current_repository(&data) {
		Some(repository) => HttpResponse::Ok().json(&*repository),
		None => HttpResponse::InternalServerError().body("Word list lock failed"),
	}
}

#[put("/v1/load_word_lists")]
async fn put_word_lists(data: web::Data<Mutex<SharedData>>, query: web::Query<WordListQuery>) -> impl Responder {
	let prefixes = match &query.prefixes {
		Some(s) if !s.trim().is_empty() => s.trim(),
		_ => return HttpResponse::BadRequest().body("Missing or empty prefix list name"),
	};
	let suffixes = match &query.suffixes {
		Some(s) if !s.trim().is_empty() => s.trim(),
		_ => return HttpResponse::BadRequest().body("Missing or empty suffix list name"),
	};

	// Only names of lists present in the data folder are accepted
	let prefix_path = match resolve_word_list(DATA_FOLDER, prefixes) {
		Ok(p) => p,
		Err(e) => return lookup_response(e),
	};
	let suffix_path = match resolve_word_list(DATA_FOLDER, suffixes) {
		Ok(p) => p,
		Err(e) => return lookup_response(e),
	};

	let repository = match WordListRepository::from_files(&prefix_path, &suffix_path) {
		Ok(r) => r,
		Err(e) => {
			log::error!("failed to load word lists '{prefixes}' / '{suffixes}': {e}");
			return HttpResponse::InternalServerError().body(format!("Failed to load word lists: {e}"));
		}
	};

	let mut shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Word list lock failed"),
	};
	shared_data.repository = Arc::new(repository);

	HttpResponse::Ok().body("Word lists loaded successfully")
}

/// Main entry point for the server.
///
/// Starts with empty word lists (load them with `PUT /v1/load_word_lists`),
/// shares them behind a `Mutex` and serves on 127.0.0.1:5000.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::init();

	let shared_data = SharedData {
		repository: Arc::new(WordListRepository::default()),
	};
	let shared_repository = web::Data::new(Mutex::new(shared_data));

	log::info!("serving names on 127.0.0.1:5000, word lists from '{}'", DATA_FOLDER);

	HttpServer::new(move || {
		App::new()
			.wrap(Cors::permissive())
			.app_data(shared_repository.clone())
			.service(get_generated)
			.service(get_word_lists)
			.service(put_word_lists)
			.service(get_loaded_word_lists)
	})
		.bind(("127.0.0.1", 5000))?
		.run()
		.await
}

#[cfg(test)]
mod tests {
	use super::*;
	use actix_web::http::StatusCode;
	use actix_web::test;

	fn shared(repository: WordListRepository) -> web::Data<Mutex<SharedData>> {
		web::Data::new(Mutex::new(SharedData {
			repository: Arc::new(repository),
		}))
	}

	#[actix_web::test]
	async fn load_refuses_paths_outside_the_data_folder() {
		let app = test::init_service(
			App::new()
				.app_data(shared(WordListRepository::default()))
				.service(put_word_lists),
		)
		.await;

		for uri in [
			"/v1/load_word_lists?prefixes=../../etc/secret&suffixes=suffixes",
			"/v1/load_word_lists?prefixes=%2Fhome%2Fuser%2Fnotes&suffixes=suffixes",
			"/v1/load_word_lists?prefixes=..%5Cprefixes&suffixes=suffixes",
		] {
			let request = test::TestRequest::put().uri(uri).to_request();
			let response = test::call_service(&app, request).await;
			assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
		}
	}

	#[actix_web::test]
	async fn generate_reads_config_from_query() {
		let repository = WordListRepository::from_text("mor\nel\ntha", "wyn\nak\ndor").unwrap();
		let app = test::init_service(App::new().app_data(shared(repository)).service(get_generated)).await;

		let request = test::TestRequest::get()
			.uri("/v1/generate?count=5&min_length=4&max_length=8&middle_letter_chance=0.5")
			.to_request();
		let body = test::call_and_read_body(&app, request).await;
		let text = std::str::from_utf8(&body).unwrap();
		assert_eq!(text.lines().count(), 5);

		let request = test::TestRequest::get()
			.uri("/v1/generate?min_length=8&max_length=4")
			.to_request();
		let response = test::call_service(&app, request).await;
		assert_eq!(response.status(), StatusCode::BAD_REQUEST);
	}

	#[actix_web::test]
	async fn request_attempts_are_capped() {
		let repository = WordListRepository::from_text("ab", "cd").unwrap();
		let app = test::init_service(App::new().app_data(shared(repository)).service(get_generated)).await;

		let request = test::TestRequest::get()
			.uri("/v1/generate?min_length=20&max_length=30&max_attempts=1000000")
			.to_request();
		let response = test::call_service(&app, request).await;
		assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

		let body = test::read_body(response).await;
		let message = std::str::from_utf8(&body).unwrap();
		assert!(message.contains(&MAX_ATTEMPTS_PER_NAME.to_string()), "{message}");
	}

	#[actix_web::test]
	async fn generate_without_lists_is_a_conflict() {
		let app = test::init_service(
			App::new()
				.app_data(shared(WordListRepository::default()))
				.service(get_generated),
		)
		.await;

		let request = test::TestRequest::get().uri("/v1/generate").to_request();
		let response = test::call_service(&app, request).await;
		assert_eq!(response.status(), StatusCode::CONFLICT);
	}
}
