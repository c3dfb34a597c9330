//! Route discovery endpoint

use crate::state::AppState;
use axum::{extract::State, response::Json};
use serde::Serialize;

/// Description of one public route
#[derive(Debug, Serialize, PartialEq)]
pub struct RouteInfo {
    /// Path template
    pub route: &'static str,
    /// HTTP method
    pub method: &'static str,
    /// What the route does
    pub description: &'static str,
    /// Sample curl invocation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

/// Routes served by the font store, with curl examples against `port`
pub fn describe_routes(port: u16) -> Vec<RouteInfo> {
    vec![
        RouteInfo {
            route: "/get-font/{fontName}",
            method: "GET",
            description: "Retrieve a font file by its name from the server.",
            example: None,
        },
        RouteInfo {
            route: "/add-font",
            method: "POST",
            description: "Upload a new font file to the server. (Multipart file upload required).",
            example: Some(format!(
                "curl -X POST -F 'font=@path/to/font.ttf' http://localhost:{}/add-font",
                port
            )),
        },
        RouteInfo {
            route: "/delete-font/{fontName}",
            method: "DELETE",
            description: "Delete a font by its name from the server.",
            example: Some(format!(
                "curl -X DELETE http://localhost:{}/delete-font/fontName.ttf",
                port
            )),
        },
        RouteInfo {
            route: "/fonts",
            method: "GET",
            description: "List all available font files on the server.",
            example: None,
        },
    ]
}

/// GET /routes-info - Describe the available routes
pub async fn routes_info(State(state): State<AppState>) -> Json<Vec<RouteInfo>> {
    Json(describe_routes(state.config.server.port))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_routes_uses_port() {
        let routes = describe_routes(4321);
        assert_eq!(routes.len(), 4);

        let upload = routes.iter().find(|r| r.route == "/add-font").unwrap();
        assert_eq!(upload.method, "POST");
        assert!(upload
            .example
            .as_deref()
            .unwrap()
            .contains("http://localhost:4321/add-font"));
    }

    #[test]
    fn test_example_omitted_when_absent() {
        let json = serde_json::to_value(describe_routes(3000)).unwrap();
        assert!(json[0].get("example").is_none());
        assert_eq!(json[0]["route"], "/get-font/{fontName}");
        assert!(json[1].get("example").is_some());
    }
}
