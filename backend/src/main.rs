mod config;
mod detection;
mod error;
mod routes;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use config::{AllowedOrigins, ServerConfig};
use routes::{configure_routes, UploadLimits};

fn build_cors(origins: &AllowedOrigins) -> Cors {
    let cors = match origins {
        AllowedOrigins::Any => Cors::default().allow_any_origin(),
        AllowedOrigins::List(list) => list
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin)),
    };

    cors.allow_any_method()
        .allow_any_header()
        .supports_credentials()
        .max_age(3600)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServerConfig::from_env().map_err(|e| {
        log::error!("Invalid configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    match &config.cors_origins {
        AllowedOrigins::Any => log::warn!("CORS allows any origin"),
        AllowedOrigins::List(list) => log::info!("CORS origins: {}", list.join(", ")),
    }

    let frontend_dir = if config.frontend_dir.is_dir() {
        log::info!("Serving web client from {} at /app", config.frontend_dir.display());
        Some(config.frontend_dir.clone())
    } else {
        log::warn!(
            "Web client not found at {}; only the API is served",
            config.frontend_dir.display()
        );
        None
    };

    let limits = web::Data::new(UploadLimits {
        max_upload_bytes: config.max_upload_bytes,
    });
    let bind_address = config.bind_address();

    log::info!("Starting server on {}", bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(build_cors(&config.cors_origins))
            .app_data(limits.clone())
            .configure(|cfg| configure_routes(cfg, frontend_dir.clone()))
    })
    .bind(&bind_address)?
    .run()
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::{header, StatusCode};
    use actix_web::test;

    #[actix_web::test]
    async fn cors_allows_listed_origin_with_credentials() {
        let origins = AllowedOrigins::List(vec!["http://localhost:5173".into()]);
        let app = test::init_service(
            App::new()
                .wrap(build_cors(&origins))
                .configure(|cfg| configure_routes(cfg, None)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/")
            .insert_header((header::ORIGIN, "http://localhost:5173"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "http://localhost:5173"
        );
        assert_eq!(
            resp.headers().get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(),
            "true"
        );
    }

    #[actix_web::test]
    async fn cors_rejects_unlisted_origin() {
        let origins = AllowedOrigins::List(vec!["http://localhost:5173".into()]);
        let app = test::init_service(
            App::new()
                .wrap(build_cors(&origins))
                .configure(|cfg| configure_routes(cfg, None)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/")
            .insert_header((header::ORIGIN, "https://elsewhere.example"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
    }
}
