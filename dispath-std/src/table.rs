//! The flat route table produced by flattening a routing definition.
//!
//! Flattening walks the definition tree once, depth-first in input order,
//! carrying the accumulated parent path. The result maps absolute paths
//! (`/`-joined, always starting with `/`) to their handler identity and
//! option. The table is derived at construction and never changes.

use dispath_core::{Routing, RoutingOption, RoutingTarget, Token};
use indexmap::IndexMap;

/// One flattened leaf: the handler identity and per-path metadata.
#[derive(Debug, Clone)]
pub struct RouteEntry {
    token: Token,
    option: Option<RoutingOption>,
}

impl RouteEntry {
    /// The handler identity bound to this path.
    pub fn token(&self) -> &Token {
        &self.token
    }

    /// The leaf's metadata, if any.
    pub fn option(&self) -> Option<&RoutingOption> {
        self.option.as_ref()
    }
}

/// Flat mapping from absolute path to [`RouteEntry`].
///
/// Keys keep depth-first traversal order; on a duplicate path the later leaf
/// silently replaces the earlier entry's value while keeping its original
/// position (last-write-wins, with a warning diagnostic).
#[derive(Debug, Default)]
pub struct RouteTable {
    entries: IndexMap<String, RouteEntry>,
}

impl RouteTable {
    /// Flatten an ordered routing definition into a table.
    pub fn flatten(routings: &[Routing]) -> Self {
        let mut table = Self::default();
        for routing in routings {
            table.visit("", routing);
        }
        table
    }

    fn visit(&mut self, parent: &str, routing: &Routing) {
        let segment = routing.path.strip_prefix('/').unwrap_or(&routing.path);
        let path = format!("{parent}/{segment}");
        match &routing.target {
            RoutingTarget::Group(children) => {
                for child in children {
                    self.visit(&path, child);
                }
            }
            RoutingTarget::Leaf(token) => {
                let entry = RouteEntry {
                    token: token.clone(),
                    option: routing.option.clone(),
                };
                if self.entries.insert(path.clone(), entry).is_some() {
                    tracing::warn!(path = %path, "duplicate route replaces earlier entry");
                }
            }
        }
    }

    /// The flat entry for an absolute path.
    pub fn entry(&self, path: &str) -> Option<&RouteEntry> {
        self.entries.get(path)
    }

    /// The option stored for an absolute path, if any.
    pub fn option(&self, path: &str) -> Option<&RoutingOption> {
        self.entries.get(path).and_then(RouteEntry::option)
    }

    /// All absolute paths, in flattening traversal order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Paths whose option explicitly sets `security` to `false`.
    ///
    /// Absence of an option, or an option with `security` absent or `true`,
    /// is secure.
    pub fn insecurity_paths(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(_, entry)| entry.option.as_ref().is_some_and(RoutingOption::is_insecure))
            .map(|(path, _)| path.as_str())
            .collect()
    }

    /// Number of flattened leaf routes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table holds no routes.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
