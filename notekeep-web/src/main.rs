use notekeep_web::configuration::CONFIGURATION;
use notekeep_web::startup::run;
use notekeep_web::telemetry::{get_subscriber, init_tracing};
use std::net::TcpListener;
use tracing_subscriber::layer::SubscriberExt;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let subscriber =
        get_subscriber(&CONFIGURATION).with(tracing_subscriber::fmt::Layer::default());
    init_tracing(subscriber);

    let note_store = CONFIGURATION
        .get_note_store()
        .await
        .map_err(std::io::Error::other)?;
    let address = CONFIGURATION.address();
    let listener = TcpListener::bind(&address)?;
    tracing::info!("Listening on {}", address);
    run(listener, note_store)?.await
}
