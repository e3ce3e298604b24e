use carbon_server::cache::{CacheConfig, CachedGeocoder};
use carbon_server::config::ServerConfig;
use carbon_server::geocode::Geocoder;
use carbon_server::store::MemoryStore;
use carbon_server::web::{AppState, create_router};
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("carbon_server=info,tower_http=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let geocoder = match Geocoder::from_api_key(
        config.google_maps_api_key.as_deref(),
        &config.geocode_base_url,
        config.geocode_timeout_secs,
    ) {
        Ok(geocoder) => geocoder,
        Err(e) => {
            error!(error = %e, "failed to create geocoding client");
            std::process::exit(1);
        }
    };
    if geocoder.is_mock() {
        warn!("GOOGLE_MAPS_API_KEY not set, location search returns sample data");
    }

    let cached_geocoder = CachedGeocoder::new(geocoder, &CacheConfig::default());

    // Build app state
    let state = AppState::new(MemoryStore::new(), cached_geocoder);

    // Create router
    let app = create_router(state, &config.static_dir);

    // Bind and serve
    let listener = match tokio::net::TcpListener::bind(config.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %config.bind_addr, error = %e, "failed to bind");
            std::process::exit(1);
        }
    };

    info!(addr = %config.bind_addr, "carbon estimator listening");
    info!("  GET  /health                    - Health check");
    info!("  GET  /api/locations/search?q=   - Search locations");
    info!("  POST /api/itineraries           - Create an itinerary");
    info!("  POST /api/itineraries/preview   - Estimate without storing");
    info!("  GET  /api/itineraries           - List itineraries");
    info!("  GET  /api/itineraries/:id       - Itinerary details");

    if let Err(e) = axum::serve(listener, app).await {
        error!(error = %e, "server error");
        std::process::exit(1);
    }
}
