use actix_web::error::JsonPayloadError;
use actix_web::{delete, get, post, put, web, HttpRequest, HttpResponse, Responder};
use notekeep::errors::NoteStoreError;
use notekeep::notestore::BoxedNoteStore;
use notekeep::{NoteDraft, NoteID, NoteStore};
use serde_json::json;

fn bad_request(message: impl ToString) -> HttpResponse {
    HttpResponse::BadRequest().json(json!({ "error": message.to_string() }))
}

fn notestore_error_handler(e: &NoteStoreError) -> HttpResponse {
    match e {
        NoteStoreError::NoteNotExist(_) => {
            HttpResponse::NotFound().json(json!({ "error": e.to_string() }))
        }
        NoteStoreError::PostgreSQLError(_) | NoteStoreError::MigrateError(_) => {
            error!("Note store internal error {:?}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Malformed request bodies get the same `{"error": ...}` shape as every other failure.
fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = bad_request(&err);
    actix_web::error::InternalError::from_response(err, response).into()
}

fn parse_note_id(raw: &str) -> Result<NoteID, HttpResponse> {
    raw.parse::<i64>().map(NoteID::new).map_err(bad_request)
}

#[get("/")]
#[instrument(skip(store))]
async fn list_notes(store: web::Data<BoxedNoteStore>) -> impl Responder {
    match store.list_notes().await {
        // An empty collection goes out as `null`
        Ok(notes) if notes.is_empty() => HttpResponse::Ok().json(json!({ "data": null })),
        Ok(notes) => HttpResponse::Ok().json(json!({ "data": notes })),
        Err(e) => notestore_error_handler(&e),
    }
}

#[post("/")]
#[instrument(skip(store, note))]
async fn new_note(
    store: web::Data<BoxedNoteStore>,
    note: web::Json<NoteDraft>,
) -> impl Responder {
    match store.new_note(note.into_inner()).await {
        Ok(note) => HttpResponse::Ok().json(json!({
            "message": "note created",
            "data": note
        })),
        Err(e) => notestore_error_handler(&e),
    }
}

#[put("/{note_id}")]
#[instrument(
    skip(store, params, note),
    fields(
        note_id = %params.0
    )
)]
async fn update_note(
    store: web::Data<BoxedNoteStore>,
    params: web::Path<(String,)>,
    note: web::Json<NoteDraft>,
) -> impl Responder {
    let (note_id,) = params.into_inner();
    let id = match parse_note_id(&note_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    match store.update_note(id, note.into_inner()).await {
        Ok(note) => HttpResponse::Ok().json(json!({
            "message": "note updated",
            "data": note
        })),
        Err(e) => notestore_error_handler(&e),
    }
}

#[delete("/{note_id}")]
#[instrument(
    skip(store, params),
    fields(
        note_id = %params.0
    )
)]
async fn delete_note(
    store: web::Data<BoxedNoteStore>,
    params: web::Path<(String,)>,
) -> impl Responder {
    let (note_id,) = params.into_inner();
    let id = match parse_note_id(&note_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    match store.delete_note(id).await {
        Ok(()) => HttpResponse::Ok().json(json!({ "message": "note deleted" })),
        Err(e) => notestore_error_handler(&e),
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(list_notes)
        .service(new_note)
        .service(update_note)
        .service(delete_note);
}
