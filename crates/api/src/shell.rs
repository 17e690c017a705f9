//! SPA fallback. Serves the compiled front-end when `index.html` exists in the
//! static directory, otherwise a built-in shell rendered from the navigation
//! model.

use axum::{http::Uri, response::Html, Router};
use cardvault_core::navigation::{NavState, Route};
use std::path::Path;
use tower_http::services::{ServeDir, ServeFile};

const SHELL_TEMPLATE: &str = include_str!("../assets/shell.html");

pub fn attach(router: Router, static_dir: &Path) -> Router {
    let index = static_dir.join("index.html");
    if index.is_file() {
        tracing::info!(dir = %static_dir.display(), "serving front-end bundle");
        // Unknown files fall through to index.html with 200 so deep links work.
        router.fallback_service(ServeDir::new(static_dir).fallback(ServeFile::new(index)))
    } else {
        tracing::warn!(
            dir = %static_dir.display(),
            "index.html not found; serving built-in shell"
        );
        router.fallback(builtin_shell)
    }
}

async fn builtin_shell(uri: Uri) -> Html<String> {
    Html(render_shell(uri.path()))
}

pub fn render_shell(path: &str) -> String {
    let nav = NavState::from_deep_link(path);

    let links: String = nav
        .links()
        .iter()
        .map(|link| {
            let class = if link.active { " class=\"active\"" } else { "" };
            format!(
                "<a href=\"{}\" data-route=\"{}\"{class}>{}</a>",
                link.path,
                link.route.key(),
                link.label
            )
        })
        .collect::<Vec<_>>()
        .join("\n      ");

    let routes: Vec<_> = Route::ALL
        .into_iter()
        .map(|r| {
            serde_json::json!({
                "key": r.key(),
                "path": r.path(),
                "calls": view_calls(r),
            })
        })
        .collect();

    SHELL_TEMPLATE
        .replace("{{ACTIVE_ROUTE}}", nav.active().key())
        .replace("{{TITLE}}", nav.active().label())
        .replace("{{NAV_LINKS}}", &links)
        .replace("{{ROUTES_JSON}}", &serde_json::Value::from(routes).to_string())
}

/// `Route::api_calls` as `{method, url}` objects for the shell script.
fn view_calls(route: Route) -> Vec<serde_json::Value> {
    route
        .api_calls()
        .iter()
        .filter_map(|call| call.split_once(' '))
        .map(|(method, url)| serde_json::json!({ "method": method, "url": url }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marks_requested_route_active() {
        let html = render_shell("/portfolio");
        assert!(html.contains("data-active-route=\"portfolio\""));
        assert!(html.contains("<a href=\"/portfolio\" data-route=\"portfolio\" class=\"active\">"));
        assert_eq!(html.matches("class=\"active\"").count(), 1);
        assert!(!html.contains("{{"));
    }

    #[test]
    fn script_endpoints_come_from_route_calls() {
        let html = render_shell("/");
        assert!(html.contains(r#"{"method":"GET","url":"/api/portfolio/value"}"#));
        assert!(html.contains(r#"{"method":"POST","url":"/api/grader/predict"}"#));
        assert!(html.contains(r#"{"calls":[],"key":"compass","path":"/compass"}"#));
    }

    #[test]
    fn unknown_path_renders_home() {
        let html = render_shell("/no/such/page");
        assert!(html.contains("data-active-route=\"home\""));
    }
}
