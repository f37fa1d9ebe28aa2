use crate::store::StoredFile;
use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::HttpResponse;
use mime_guess::from_path;

/// Serves stored bytes with a content type guessed from the filename.
pub fn file_response(file: StoredFile) -> HttpResponse {
    let mime = from_path(&file.filename).first_or_octet_stream();
    HttpResponse::Ok()
        .content_type(mime.as_ref())
        .insert_header(ContentDisposition {
            disposition: DispositionType::Inline,
            parameters: vec![DispositionParam::Filename(file.filename)],
        })
        .body(file.bytes)
}
