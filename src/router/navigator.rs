//! Navigation controller

use super::table::{Page, Route, RouteTable};
use super::RouterError;
use std::collections::HashMap;
use std::sync::Arc;

/// Tracks the current route and history over a route table. Pages are
/// loaded the first time they are shown and cached afterwards.
#[derive(Debug)]
pub struct Navigator {
    table: RouteTable,
    current: usize,
    history: Vec<usize>,
    loaded: HashMap<&'static str, Arc<Page>>,
}

impl Navigator {
    /// Start at `start_path`
    pub fn new(table: RouteTable, start_path: &str) -> Result<Self, RouterError> {
        let current = table
            .position(start_path)
            .ok_or_else(|| RouterError::NotFound(start_path.to_string()))?;
        Ok(Self {
            table,
            current,
            history: Vec::new(),
            loaded: HashMap::new(),
        })
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn current_route(&self) -> &Route {
        // `current` always comes from `position`, and routes are never removed
        &self.table.routes()[self.current]
    }

    pub fn current_path(&self) -> &'static str {
        self.current_route().path
    }

    /// Move to `path`, remembering where we came from.
    ///
    /// Unknown paths leave the location unchanged.
    pub fn navigate(&mut self, path: &str) -> Result<&Route, RouterError> {
        let Some(next) = self.table.position(path) else {
            tracing::warn!(path, "navigation to unknown path");
            return Err(RouterError::NotFound(path.to_string()));
        };
        if next != self.current {
            self.history.push(self.current);
            self.current = next;
            tracing::debug!(path, "navigated");
        }
        Ok(self.current_route())
    }

    /// Return to the previous route. Returns false when there is no history.
    pub fn go_back(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                self.current = previous;
                true
            }
            None => false,
        }
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    /// Page of the current route, loading it on first use
    pub fn current_page(&mut self) -> Arc<Page> {
        let route = &self.table.routes()[self.current];
        Arc::clone(
            self.loaded
                .entry(route.path)
                .or_insert_with(|| Arc::new(route.load())),
        )
    }
}
