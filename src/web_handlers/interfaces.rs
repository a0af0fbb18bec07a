use actix_web::{web, HttpResponse};
use log::{debug, error};
use serde::Deserialize;

use crate::error::Surge2ClashError;
use crate::interfaces::surge2clash::surge_url_to_clash;
use crate::utils::http::FetchConfig;
use crate::Settings;

const YAML_CONTENT_TYPE: &str = "text/yaml; charset=utf-8";

/// Query parameters for Surge to Clash conversion
#[derive(Deserialize, Debug, Default, Clone)]
pub struct Surge2ClashQuery {
    /// URL of the Surge configuration to convert
    pub url: Option<String>,
}

/// Handler for Clash from Surge configuration
pub async fn surge_to_clash_handler(query: web::Query<Surge2ClashQuery>) -> HttpResponse {
    debug!("Received surge2clash request: {:?}", query);

    let Some(url) = query.url.as_deref().filter(|url| !url.is_empty()) else {
        return HttpResponse::BadRequest()
            .content_type("text/plain")
            .body("Invalid Request");
    };

    let fetch_config = FetchConfig::from(&Settings::current().fetch);
    match surge_url_to_clash(url, &fetch_config).await {
        Ok(clash_config) => HttpResponse::Ok()
            .content_type(YAML_CONTENT_TYPE)
            .body(clash_config),
        Err(Surge2ClashError::Fetch(e)) => {
            error!("Failed to fetch {}: {}", url, e);
            HttpResponse::BadGateway()
                .content_type("text/plain")
                .body(format!("Failed to fetch source: {}", e))
        }
        Err(Surge2ClashError::Convert(e)) => {
            error!("Failed to convert {}: {}", url, e);
            HttpResponse::UnprocessableEntity()
                .content_type("text/plain")
                .body(format!("Conversion error: {}", e))
        }
    }
}

/// Register the API endpoints with Actix Web
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/surge2clash", web::get().to(surge_to_clash_handler))
        .route("/", web::get().to(|| async { "surge2clash is running!" }));
}
