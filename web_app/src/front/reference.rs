use crate::{api, front::utils};
use ntex::web;

#[web::get("/breeds")]
async fn get_breeds() -> Result<impl web::Responder, web::Error> {
    utils::ok_json(&api::reference::breed_table())
}

#[web::get("/life-stages")]
async fn get_life_stages() -> Result<impl web::Responder, web::Error> {
    utils::ok_json(&api::reference::life_stages())
}
