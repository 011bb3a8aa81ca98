use car_listings::{
    config::{database, logging, settings, users::UserDirectory},
    core::car::seed_cars,
    errors::Result,
    web::{self, AppState},
};
use tokio::net::TcpListener;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Load .env, then initialize tracing (as early as possible)
    logging::init();

    // 2. Load the application configuration
    let config = settings::load_default_config()
        .inspect_err(|e| error!("Failed to load configuration: {}", e))?;

    // 3. Connect and make sure the schema exists
    let db = database::create_connection()
        .await
        .inspect_err(|e| error!("Failed to connect to database: {}", e))?;
    database::create_tables(&db)
        .await
        .inspect(|_| info!("Database initialized successfully."))
        .inspect_err(|e| error!("Failed to create tables: {}", e))?;

    // 4. Seed listings into an empty database
    seed_cars(&db, &config.cars)
        .await
        .inspect_err(|e| error!("Failed to seed car listings: {}", e))?;

    // 5. Serve
    let users = UserDirectory::new(&config.users);
    if users.staff_count() == 0 {
        warn!("No staff users configured; moderation pages are unreachable.");
    }
    let app = web::router(AppState::new(db, users));

    let listener = TcpListener::bind(&config.server.bind).await?;
    info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
