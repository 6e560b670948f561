use actix_web::{web, HttpResponse};
use serde_json::json;
use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::render::render_episode_page;
use crate::store::EpisodeStore;

pub async fn episode_handler(
    path: web::Path<String>,
    store: web::Data<EpisodeStore>,
    config: web::Data<Config>,
) -> AppResult<HttpResponse> {
    let page = format!("/episodes/{}", path.into_inner());
    let episode = store
        .find_by_page(&page)
        .cloned()
        .ok_or_else(|| AppError::not_found(format!("no episode at {}", page)))?;

    log::info!("Rendering {} ({})", episode.page, episode.number_display);
    let body = render_episode_page(
        config.site.url.clone(),
        episode,
        store.next_episode().cloned(),
        store.sponsors().clone(),
    )
    .await;

    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body))
}

pub async fn health_handler(store: web::Data<EpisodeStore>) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "episodes": store.episodes().len(),
    }))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/episodes/{slug}", web::get().to(episode_handler))
        .route("/api/health", web::get().to(health_handler));
}
