use std::env;

use actix_web::{App, HttpServer, middleware, web};
use dotenvy::dotenv;

use price_service::db::{establish_connection_pool, run_migrations};
use price_service::repository::DieselRepository;
use price_service::routes::prices::get_price;
use price_service::routes::query_config;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    dotenv().ok(); // Load .env file

    let database_url = env::var("DATABASE_URL").unwrap_or("prices.db".to_string());
    let port = env::var("PORT").unwrap_or("8080".to_string());
    let port = port.parse::<u16>().unwrap_or(8080);
    let address = env::var("ADDRESS").unwrap_or("127.0.0.1".to_string());

    let pool = match establish_connection_pool(&database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };

    {
        let mut conn = match pool.get() {
            Ok(conn) => conn,
            Err(e) => {
                log::error!("Failed to get a database connection: {e}");
                std::process::exit(1);
            }
        };
        if let Err(e) = run_migrations(&mut conn) {
            log::error!("Failed to run database migrations: {e}");
            std::process::exit(1);
        }
    }

    let repo = DieselRepository::new(pool);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .app_data(query_config())
            .app_data(web::Data::new(repo.clone()))
            .service(get_price)
    })
    .bind((address, port))?
    .run()
    .await
}
