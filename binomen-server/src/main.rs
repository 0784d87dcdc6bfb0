use std::sync::Mutex;

use actix_cors::Cors;
use actix_web::{get, put, web, App, HttpResponse, HttpServer, Responder};

use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;

use binomen_core::naming::compose_input::{ComposeInput, FirstPool, Structure};
use binomen_core::naming::composer::NameComposer;
use binomen_core::naming::corpus::NameCorpus;
use binomen_core::naming::fragment_table::{FragmentRole, FragmentTable};

/// Struct representing query parameters for the `/v1/generate` endpoint
#[derive(Deserialize)]
struct GenerateParams {
	structure: Option<String>, // -> "two", "three" or "random"
	cofix_probability: Option<f32>,
	first_pool: Option<String>, // -> "prefix" or "any"
	binomial: Option<bool>,
	seed: Option<u64>,
}

struct SharedData {
	table: FragmentTable,
}

impl GenerateParams {
	/// Builds the compose input from the query parameters.
	fn compose_input(&self) -> Result<ComposeInput, String> {
		let mut input = ComposeInput::default();

		match self.structure.as_deref() {
			None => (),
			Some(s) if s.eq_ignore_ascii_case("two") => input.structure = Structure::Two,
			Some(s) if s.eq_ignore_ascii_case("three") => input.structure = Structure::Three,
			Some(s) if s.eq_ignore_ascii_case("random") => input.structure = Structure::Random,
			Some(_) => return Err("Structure must be 'two', 'three' or 'random'".into()),
		}

		match self.first_pool.as_deref() {
			None => (),
			Some(s) if s.eq_ignore_ascii_case("prefix") => input.first_pool = FirstPool::PrefixOnly,
			Some(s) if s.eq_ignore_ascii_case("any") => input.first_pool = FirstPool::PrefixOrCofix,
			Some(_) => return Err("First pool must be 'prefix' or 'any'".into()),
		}

		if let Some(probability) = self.cofix_probability {
			input.set_cofix_probability(probability).map_err(|e| e.to_string())?;
		}

		Ok(input)
	}

	/// Random source for this request.
	///
	/// A seeded source makes the response reproducible; without a seed the
	/// source is drawn from the operating system.
	fn rng(&self) -> StdRng {
		match self.seed {
			Some(seed) => StdRng::seed_from_u64(seed),
			None => StdRng::from_os_rng(),
		}
	}
}

/// HTTP GET endpoint `/v1/generate`
///
/// Composes a species name (or a full binomial with `binomial=true`) from
/// the live fragment table, driven by query parameters.
/// Returns the generated name as the response body.
#[get("/v1/generate")]
async fn get_generated(data: web::Data<Mutex<SharedData>>, query: web::Query<GenerateParams>) -> impl Responder {
	let input = match query.compose_input() {
		Ok(input) => input,
		Err(e) => return HttpResponse::BadRequest().body(e),
	};

	let shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Table lock failed"),
	};

	let composer = NameComposer::new(&shared_data.table);
	let mut rng = query.rng();

	if query.binomial.unwrap_or(false) {
		match composer.compose_binomial(&input, &mut rng) {
			Ok(name) => HttpResponse::Ok().body(name.text()),
			Err(e) => HttpResponse::InternalServerError().body(format!("Failed to compose name: {e}")),
		}
	} else {
		match composer.compose(&input, &mut rng) {
			Ok(name) => HttpResponse::Ok().body(name.into_text()),
			Err(e) => HttpResponse::InternalServerError().body(format!("Failed to compose name: {e}")),
		}
	}
}

/// HTTP GET endpoint `/v1/corpus`
///
/// Reports the size of every fragment bucket in the live table.
#[get("/v1/corpus")]
async fn get_corpus(data: web::Data<Mutex<SharedData>>) -> impl Responder {
	let shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Table lock failed"),
	};

	let summary = [
		FragmentRole::Prefix,
		FragmentRole::VowelPrefix,
		FragmentRole::ConsonantPrefix,
		FragmentRole::VowelCofix,
		FragmentRole::ConsonantCofix,
		FragmentRole::Suffix,
		FragmentRole::VowelSuffix,
		FragmentRole::ConsonantSuffix,
		FragmentRole::PrefixOrCofix,
	]
		.iter()
		.map(|role| format!("{}: {}", role, shared_data.table.by_role(*role).len()))
		.collect::<Vec<_>>()
		.join("\n");

	HttpResponse::Ok().body(summary)
}

/// HTTP PUT endpoint `/v1/corpus`
///
/// Replaces the live fragment table from a JSON corpus record
/// (flat prefix/cofix/suffix lists, classified server-side).
#[put("/v1/corpus")]
async fn put_corpus(data: web::Data<Mutex<SharedData>>, corpus: web::Json<NameCorpus>) -> impl Responder {
	let table = match FragmentTable::from_corpus(&corpus) {
		Ok(table) => table,
		Err(e) => return HttpResponse::BadRequest().body(format!("Failed to load corpus: {e}")),
	};

	let mut shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Table lock failed"),
	};

	shared_data.table = table;
	info!("Corpus replaced, prefix-or-cofix pool now holds {} fragments",
		shared_data.table.prefix_cofix_pool().len());

	HttpResponse::Ok().body("Corpus loaded successfully")
}

/// Main entry point for the server.
///
/// Builds the built-in fragment table, wraps it in a `Mutex` for thread
/// safety, and starts an Actix-web HTTP server.
///
/// # Notes
/// - The server binds to 127.0.0.1:5000.
/// - The table starts from the built-in corpus; hosts push their own
///   corpus through `PUT /v1/corpus`.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::init();

	let shared_data = SharedData {
		table: FragmentTable::builtin(),
	};
	let shared_table = web::Data::new(Mutex::new(shared_data));

	info!("Serving species names on 127.0.0.1:5000");

	HttpServer::new(move || {
		App::new()
			.wrap(Cors::permissive())
			.app_data(shared_table.clone())
			.service(get_generated)
			.service(get_corpus)
			.service(put_corpus)
	})
		.bind(("127.0.0.1", 5000))?
		.run()
		.await
}
