#[cfg(feature = "ssr")]
fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info,kitchen_map=debug".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Leptos pages and server functions behind an HTTP trace layer.
#[cfg(feature = "ssr")]
fn site_router(options: leptos::prelude::LeptosOptions) -> axum::Router {
    use kitchen_map::app::{shell, App};
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
    use tracing::Level;

    let routes = generate_route_list(App);
    let shell_options = options.clone();

    axum::Router::new()
        .leptos_routes(&options, routes, move || shell(shell_options.clone()))
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(options)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use kitchen_map::events_api::events_api_url;
    use leptos::prelude::get_configuration;

    // `cargo leptos watch` runs from web/, so the workspace .env wins.
    dotenvy::from_filename("../.env")
        .or_else(|_| dotenvy::dotenv())
        .ok();
    init_tracing();

    let options = get_configuration(None)?.leptos_options;
    let addr = options.site_addr;
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!(%addr, events_api = %events_api_url(), "serving event map");
    axum::serve(listener, site_router(options).into_make_service()).await?;
    Ok(())
}

#[cfg(not(feature = "ssr"))]
fn main() {
    // Only the ssr binary serves; the hydrate build enters through `lib::hydrate`.
}
