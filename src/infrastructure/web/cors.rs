use actix_cors::Cors;

use crate::settings::AppConfig;

/// Wildcard origins allow everything, credentials included; any other value
/// is treated as an explicit origin list.
pub fn build_cors(config: &AppConfig) -> Cors {
    let origins = config.cors_origins();

    if origins.iter().any(|o| o == "*") {
        return Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .supports_credentials()
            .max_age(3600);
    }

    origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
        .max_age(3600)
}
