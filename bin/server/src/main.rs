#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use akademi_assistant::{AssistantBackend, CannedAssistant};
    use akademi_catalog::Catalog;
    use akademi_server::{app::App, config::SiteConfig};
    use axum::Router;
    use leptos::prelude::*;
    use leptos_axum::{LeptosRoutes, generate_route_list};
    use std::sync::Arc;
    use std::time::Duration;
    use tower_http::services::ServeDir;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration from environment
    let config = SiteConfig::from_env().expect("failed to load configuration");
    tracing::info!("Loaded configuration");

    // Build the shared services handed to server functions
    let catalog = Arc::new(Catalog::builtin());
    tracing::info!(courses = catalog.len(), "Loaded course catalog");

    let assistant: Arc<dyn AssistantBackend> = Arc::new(CannedAssistant::new(
        Duration::from_millis(config.assistant.reply_delay_ms),
    ));
    tracing::info!(
        backend = assistant.name(),
        reply_delay_ms = config.assistant.reply_delay_ms,
        "Initialized assistant backend"
    );

    let conf = get_configuration(None).expect("failed to get leptos configuration");
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let routes = generate_route_list(App);

    let app = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler::<LeptosOptions, _>(
            shell,
        ))
        .nest_service("/pkg", ServeDir::new("target/site/pkg"))
        // Provide the catalog and assistant as request extensions for server functions
        .layer(axum::Extension(catalog))
        .layer(axum::Extension(assistant))
        .with_state(leptos_options);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind to address");

    tracing::info!("listening on http://{}", addr);

    axum::serve(listener, app.into_make_service())
        .await
        .expect("server error");
}

#[cfg(feature = "ssr")]
fn shell(options: leptos::prelude::LeptosOptions) -> impl leptos::prelude::IntoView {
    use akademi_server::app::App;
    use leptos::prelude::*;
    use leptos_meta::*;

    view! {
        <!DOCTYPE html>
        <html lang="tr">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="stylesheet" href="/pkg/akademi.css"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[cfg(not(feature = "ssr"))]
fn main() {
    // This main function is only used for WASM builds
    // The actual hydration happens in lib.rs
}
