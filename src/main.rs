use dotenvy::dotenv;
use order_lookup::{run, Config, ServeError, Store};

#[actix_web::main]
async fn main() -> Result<(), ServeError> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env()?;

    run(config, Store::seeded()).await
}
