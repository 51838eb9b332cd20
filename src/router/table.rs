//! Route table

use super::paths;
use crate::state::forms::catalog;
use crate::state::FormConfig;

/// What a route renders once loaded
#[derive(Debug, Clone, PartialEq)]
pub enum Page {
    /// Landing page listing the other routes
    Home,
    /// A form rendered from its configuration
    Form(FormConfig),
}

impl Page {
    pub fn form(&self) -> Option<&FormConfig> {
        match self {
            Page::Home => None,
            Page::Form(config) => Some(config),
        }
    }
}

/// Deferred constructor for a route's page
pub type ViewLoader = fn() -> Page;

/// A path-to-page binding
#[derive(Debug, Clone)]
pub struct Route {
    pub path: &'static str,
    pub name: &'static str,
    loader: ViewLoader,
}

impl Route {
    /// Build the page this route points at
    pub fn load(&self) -> Page {
        tracing::debug!(path = self.path, name = self.name, "loading page");
        (self.loader)()
    }
}

/// Ordered list of routes
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `path` to a page; an existing binding for the same path is
    /// replaced in place
    pub fn register(&mut self, path: &'static str, name: &'static str, loader: ViewLoader) {
        let route = Route { path, name, loader };
        match self.routes.iter_mut().find(|r| r.path == path) {
            Some(existing) => *existing = route,
            None => self.routes.push(route),
        }
    }

    /// Builder form of [`RouteTable::register`]
    pub fn route(mut self, path: &'static str, name: &'static str, loader: ViewLoader) -> Self {
        self.register(path, name, loader);
        self
    }

    /// Route bound to `path`
    pub fn resolve(&self, path: &str) -> Option<&Route> {
        self.routes.iter().find(|r| r.path == path)
    }

    pub(super) fn position(&self, path: &str) -> Option<usize> {
        self.routes.iter().position(|r| r.path == path)
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }
}

/// The application's routes
pub fn app_routes() -> RouteTable {
    RouteTable::new()
        .route(paths::HOME, "Home", || Page::Home)
        .route(paths::CONTACT_FORM, "ContactForm", || {
            Page::Form(catalog::contact_form())
        })
        .route(paths::SURVEY_FORM, "SurveyForm", || {
            Page::Form(catalog::survey_form())
        })
        .route(paths::REGISTRATION_FORM, "RegistrationForm", || {
            Page::Form(catalog::registration_form())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_routes_resolve() {
        let table = app_routes();
        let expected = [
            ("/", "Home"),
            ("/contact-form", "ContactForm"),
            ("/survey-form", "SurveyForm"),
            ("/registration-form", "RegistrationForm"),
        ];
        assert_eq!(table.routes().len(), expected.len());
        for (path, name) in expected {
            assert_eq!(table.resolve(path).map(|r| r.name), Some(name), "{path}");
        }
    }

    #[test]
    fn test_unknown_path_does_not_resolve() {
        let table = app_routes();
        assert!(table.resolve("/nope").is_none());
        assert!(table.resolve("/contact-form/").is_none());
    }

    #[test]
    fn test_form_routes_load_matching_forms() {
        let table = app_routes();
        let form_id = |path: &str| {
            table
                .resolve(path)
                .and_then(|r| r.load().form().map(|f| f.id.clone()))
        };
        assert_eq!(form_id("/contact-form").as_deref(), Some("contact"));
        assert_eq!(form_id("/survey-form").as_deref(), Some("survey"));
        assert_eq!(form_id("/registration-form").as_deref(), Some("registration"));
        assert_eq!(table.resolve("/").map(Route::load), Some(Page::Home));
    }

    #[test]
    fn test_register_replaces_existing_path() {
        let mut table = app_routes();
        table.register("/", "Landing", || Page::Home);
        assert_eq!(table.routes().len(), 4);
        assert_eq!(table.resolve("/").map(|r| r.name), Some("Landing"));
        assert_eq!(table.routes()[0].name, "Landing");
    }
}
