use crate::routes::*;
use actix_cors::Cors;
use actix_web::dev::Server;
use actix_web::middleware::{NormalizePath, TrailingSlash};
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use notekeep::notestore::BoxedNoteStore;
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub fn run(listener: TcpListener, note_store: BoxedNoteStore) -> Result<Server, std::io::Error> {
    let ns: Data<BoxedNoteStore> = Data::new(note_store);
    let server = HttpServer::new(move || {
        // Browser frontends are served from elsewhere
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);
        App::new()
            .wrap(cors)
            .wrap(NormalizePath::new(TrailingSlash::MergeOnly))
            .wrap(TracingLogger::default())
            .configure(index_config)
            .configure(notes_config)
            .app_data(ns.clone())
    })
    .listen(listener)?
    .run();
    Ok(server)
}
