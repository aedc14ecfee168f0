//! Ordered path router.
//!
//! Every API request lands in [`dispatch`], which strips the configured base
//! prefix, trims slashes and walks the route table in order. The first
//! matching rule wins. The trailing prefix rules match any path that merely
//! starts with the literal (`staffer` reaches the staff handler).

use axum::{
    extract::{Request, State},
    response::{IntoResponse, Response},
};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::context::RequestContext;
use super::handlers::{
    auth_handler, export_handler, funding_handler, lawyer_handler, lookup_handler,
    report_handler, staff_handler,
};
use super::AppState;
use crate::errors::{AppError, AppResult};

/// Handler selected for a normalized path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Lookup,
    Login,
    /// Raw numeric id from the path; may exceed the id range
    Lawyer(i64),
    Lawyers,
    Reports,
    Export,
    Staff,
    Funding,
}

enum Matcher {
    Exact(&'static str),
    Pattern(Regex, fn(&Captures) -> Option<Route>),
    Prefix(&'static str),
}

struct Rule {
    matcher: Matcher,
    route: Option<Route>,
}

impl Rule {
    fn exact(literal: &'static str, route: Route) -> Self {
        Self {
            matcher: Matcher::Exact(literal),
            route: Some(route),
        }
    }

    fn prefix(literal: &'static str, route: Route) -> Self {
        Self {
            matcher: Matcher::Prefix(literal),
            route: Some(route),
        }
    }

    fn pattern(pattern: &str, capture: fn(&Captures) -> Option<Route>) -> Self {
        let regex = Regex::new(pattern)
            .unwrap_or_else(|e| panic!("invalid route pattern {}: {}", pattern, e));
        Self {
            matcher: Matcher::Pattern(regex, capture),
            route: None,
        }
    }

    fn apply(&self, path: &str) -> Option<Route> {
        match &self.matcher {
            Matcher::Exact(literal) => (path == *literal).then_some(self.route).flatten(),
            Matcher::Prefix(literal) => path.starts_with(literal).then_some(self.route).flatten(),
            Matcher::Pattern(regex, capture) => regex.captures(path).and_then(|c| capture(&c)),
        }
    }
}

static ROUTES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        Rule::exact("lookup", Route::Lookup),
        Rule::pattern(r"^auth/login/?$", |_| Some(Route::Login)),
        Rule::pattern(r"^lawyers/(\d+)$", |c| {
            c.get(1)
                .map(|id| id.as_str().parse::<i64>().unwrap_or(i64::MAX))
                .map(Route::Lawyer)
        }),
        Rule::exact("lawyers", Route::Lawyers),
        Rule::prefix("dashboard/reports", Route::Reports),
        Rule::prefix("export/export", Route::Export),
        Rule::prefix("staff", Route::Staff),
        Rule::prefix("funding", Route::Funding),
    ]
});

/// Strip the first matching base prefix, then surrounding slashes.
pub fn normalize_path<'a>(path: &'a str, base_paths: &[String]) -> &'a str {
    let stripped = base_paths
        .iter()
        .filter(|base| !base.is_empty())
        .find_map(|base| path.strip_prefix(base.as_str()))
        .unwrap_or(path);
    stripped.trim_matches('/')
}

/// First route whose rule accepts `path`.
pub fn resolve(path: &str) -> Option<Route> {
    ROUTES.iter().find_map(|rule| rule.apply(path))
}

/// Fallback handler for every API path.
pub async fn dispatch(State(state): State<AppState>, request: Request) -> Response {
    let path = normalize_path(request.uri().path(), &state.base_paths).to_string();
    tracing::debug!(method = %request.method(), path = %path, "Routing request");

    let ctx = match RequestContext::from_request(request, &state, path).await {
        Ok(ctx) => ctx,
        Err(e) => return e.into_response(),
    };

    match route(&state, ctx).await {
        Ok(response) => response,
        Err(e) => e.into_response(),
    }
}

async fn route(state: &AppState, ctx: RequestContext) -> AppResult<Response> {
    let Some(route) = resolve(&ctx.path) else {
        tracing::warn!(
            path = %ctx.path,
            request_uri = %ctx.request_uri(),
            method = %ctx.method,
            "Endpoint not found"
        );
        return Err(AppError::EndpointNotFound {
            path: ctx.path.clone(),
            request_uri: ctx.request_uri(),
            method: ctx.method.to_string(),
        });
    };

    match route {
        Route::Lookup => lookup_handler::handle(state, ctx).await,
        Route::Login => auth_handler::handle(state, ctx).await,
        Route::Lawyer(id) => lawyer_handler::handle_item(state, ctx, id).await,
        Route::Lawyers => lawyer_handler::handle_collection(state, ctx).await,
        Route::Reports => report_handler::handle(state, ctx).await,
        Route::Export => export_handler::handle(state, ctx).await,
        Route::Staff => staff_handler::handle(state, ctx).await,
        Route::Funding => funding_handler::handle(state, ctx).await,
    }
}
