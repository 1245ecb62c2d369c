use crate::config::Runtime;
use crate::error::ServerError;
use axum::handler::Handler;
use axum::http::Method;
use axum::routing::{on, MethodFilter};
use axum::Router;
use lambda_http::{tracing, Error};
use std::collections::HashSet;
use tokio::net::TcpListener;

/// Who may invoke a registered function.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[non_exhaustive]
pub enum AuthLevel {
    #[default]
    Anonymous,
}

pub trait HttpHost: Sized {
    /// Exposes `handler` under `name` for the given methods.
    fn register_route<H, T>(
        self,
        name: &str,
        methods: &[Method],
        auth_level: AuthLevel,
        handler: H,
    ) -> Result<Self, ServerError>
    where
        H: Handler<T, ()>,
        T: 'static;
}

/// Axum-backed host. Functions are mounted at `/{route_prefix}/{name}`.
pub struct FunctionApp {
    router: Router,
    route_prefix: String,
    registered: HashSet<String>,
}

impl FunctionApp {
    pub fn new(route_prefix: &str) -> Self {
        Self {
            router: Router::new(),
            route_prefix: route_prefix.trim_matches('/').to_string(),
            registered: HashSet::new(),
        }
    }

    pub fn route_path(&self, name: &str) -> String {
        if self.route_prefix.is_empty() {
            format!("/{name}")
        } else {
            format!("/{}/{name}", self.route_prefix)
        }
    }

    pub fn into_router(self) -> Router {
        self.router
    }

    pub async fn run(self, runtime: Runtime) -> Result<(), Error> {
        match runtime {
            Runtime::Lambda => {
                tracing::info!("starting lambda runtime");
                lambda_http::run(self.into_router()).await
            }
            Runtime::CustomHandler { port } => {
                let listener = TcpListener::bind(("127.0.0.1", port)).await?;
                tracing::info!(port, "listening as custom handler");
                axum::serve(listener, self.into_router()).await?;
                Ok(())
            }
        }
    }
}

impl HttpHost for FunctionApp {
    fn register_route<H, T>(
        self,
        name: &str,
        methods: &[Method],
        auth_level: AuthLevel,
        handler: H,
    ) -> Result<Self, ServerError>
    where
        H: Handler<T, ()>,
        T: 'static,
    {
        let filter = method_filter(methods)?
            .ok_or_else(|| ServerError::Route(format!("no methods given for {name}")))?;
        let path = self.route_path(name);
        check_literal_path(&path).map_err(ServerError::Route)?;

        let mut registered = self.registered;
        if !registered.insert(path.clone()) {
            return Err(ServerError::Route(format!("{path} is already registered")));
        }
        tracing::info!(%path, ?methods, ?auth_level, "registered http function");

        Ok(Self {
            router: self.router.route(&path, on(filter, handler)),
            route_prefix: self.route_prefix,
            registered,
        })
    }
}

/// Routes are plain paths; axum would read `{..}`, `*` and `:` as captures.
pub fn check_literal_path(path: &str) -> Result<(), String> {
    if path.contains(['{', '}', '*']) || path.split('/').any(|segment| segment.starts_with(':')) {
        return Err(format!("{path} is not a literal path"));
    }
    Ok(())
}

fn method_filter(methods: &[Method]) -> Result<Option<MethodFilter>, ServerError> {
    methods.iter().try_fold(None, |acc: Option<MethodFilter>, method| {
        let next = MethodFilter::try_from(method.clone())
            .map_err(|err| ServerError::Route(format!("{method}: {err}")))?;
        Ok(Some(acc.map_or(next, |filter| filter.or(next))))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn ok() -> &'static str {
        "ok"
    }

    #[test]
    fn route_path_uses_prefix() {
        assert_eq!(FunctionApp::new("api").route_path("Demo"), "/api/Demo");
        assert_eq!(FunctionApp::new("/v1/").route_path("Demo"), "/v1/Demo");
        assert_eq!(FunctionApp::new("").route_path("Demo"), "/Demo");
    }

    #[test]
    fn empty_method_list_is_rejected() {
        let result = FunctionApp::new("api").register_route("Demo", &[], AuthLevel::Anonymous, ok);
        assert!(matches!(result, Err(ServerError::Route(_))));
    }

    #[test]
    fn capture_syntax_is_rejected() {
        for (prefix, name) in [("v{1", "Demo"), ("api", "{name}"), ("*rest", "Demo"), ("api", ":id")] {
            let result =
                FunctionApp::new(prefix).register_route(name, &[Method::GET], AuthLevel::Anonymous, ok);
            assert!(matches!(result, Err(ServerError::Route(_))), "{prefix}/{name}");
        }
    }

    #[test]
    fn duplicate_name_is_rejected() {
        let app = FunctionApp::new("api")
            .register_route("Demo", &[Method::GET], AuthLevel::Anonymous, ok)
            .unwrap();
        let result = app.register_route("Demo", &[Method::POST], AuthLevel::Anonymous, ok);
        assert!(matches!(result, Err(ServerError::Route(_))));
    }

    #[test]
    fn distinct_names_share_a_prefix() {
        let result = FunctionApp::new("api")
            .register_route("Demo", &[Method::GET], AuthLevel::Anonymous, ok)
            .and_then(|app| app.register_route("Other", &[Method::GET], AuthLevel::Anonymous, ok));
        assert!(result.is_ok());
    }

    #[test]
    fn unsupported_method_is_rejected() {
        let method = Method::from_bytes(b"PURGE").unwrap();
        let result =
            FunctionApp::new("api").register_route("Demo", &[method], AuthLevel::Anonymous, ok);
        assert!(matches!(result, Err(ServerError::Route(_))));
    }

    #[test]
    fn methods_are_combined() {
        let filter = method_filter(&[Method::GET, Method::POST]).unwrap();
        assert_eq!(filter, Some(MethodFilter::GET.or(MethodFilter::POST)));
    }
}
