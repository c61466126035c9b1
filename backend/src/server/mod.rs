//! Server construction and middleware wiring.

mod config;
mod settings;

pub use config::ServerConfig;
pub use settings::ServerSettings;

use actix_cors::Cors;
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::{info, warn};

use users_backend::Trace;
#[cfg(debug_assertions)]
use users_backend::doc::ApiDoc;
use users_backend::inbound::http::health::{HealthState, live, ready};
use users_backend::inbound::http::root::root;
use users_backend::inbound::http::state::HttpState;
use users_backend::inbound::http::users;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

/// Cross-origin policy: listed origins, any method, any header, credentials
/// allowed. A `*` entry admits every origin.
fn build_cors(origins: &[String]) -> Cors {
    let cors = Cors::default()
        .allow_any_method()
        .allow_any_header()
        .supports_credentials();

    origins.iter().fold(cors, |cors, origin| {
        if origin == "*" {
            cors.allow_any_origin()
        } else {
            cors.allowed_origin(origin)
        }
    })
}

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
    cors_origins: Vec<String>,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
        cors_origins,
    } = deps;

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(build_cors(&cors_origins))
        .wrap(Trace)
        .service(root)
        .configure(users::configure)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server using the provided health state and
/// configuration, and mark the service ready once the socket is bound.
///
/// # Errors
/// Returns [`std::io::Error`] when no user repository is configured or when
/// binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let ServerConfig {
        bind_addr,
        cors_origins,
        users,
    } = config;
    let users = users.ok_or_else(|| std::io::Error::other("no user repository configured"))?;
    let http_state = web::Data::new(HttpState::new(users));

    if cors_origins.is_empty() {
        warn!("no CORS origins configured; cross-origin requests will be rejected");
    }

    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
            cors_origins: cors_origins.clone(),
        })
    })
    .bind(bind_addr)?
    .run();

    info!(%bind_addr, "HTTP server listening");
    health_state.mark_ready();
    Ok(server)
}
