use actix_web::{get, middleware, web, App, HttpResponse, HttpServer, Responder};

mod catalog;
mod data;
mod models;

use crate::catalog::{CatalogService, LookupError};
use crate::models::ErrorResponse;

const DEFAULT_PORT: u16 = 8080;

#[get("/api/menu")]
async fn get_menu(service: web::Data<CatalogService>) -> impl Responder {
    HttpResponse::Ok().json(service.items())
}

#[get("/api/menu/{id}")]
async fn get_menu_item(
    raw_id: web::Path<String>,
    service: web::Data<CatalogService>,
) -> HttpResponse {
    //the service reports the outcome, the http layer picks the status code
    match service.find_enriched_item(raw_id.as_str()) {
        Ok(item) => HttpResponse::Ok().json(item),
        Err(err @ LookupError::InvalidId) => HttpResponse::BadRequest().json(ErrorResponse {
            error: err.to_string(),
        }),
        Err(err @ LookupError::NotFound) => HttpResponse::NotFound().json(ErrorResponse {
            error: err.to_string(),
        }),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    //catalog and reference tables are built once, before the server starts
    let items = data::load_menu().expect("embedded menu catalog is well-formed");
    let service = web::Data::new(CatalogService::new(
        items,
        data::ingredient_table(),
        data::nutrition_table(),
    ));

    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = std::env::var("PORT")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(DEFAULT_PORT);

    log::info!("starting HTTP server at http://{}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(service.clone())
            .wrap(middleware::Logger::default())
            .service(get_menu)
            .service(get_menu_item)
    })
    .bind((host, port))?
    .run()
    .await
}
