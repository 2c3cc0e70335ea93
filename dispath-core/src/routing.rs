//! The routing definition tree.
//!
//! A routing definition is an ordered list of [`Routing`] nodes supplied
//! once, at engine construction, and immutable afterward. Flattening it into
//! the absolute-path table is the job of `dispath-std`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identity of the handler type serving a leaf path.
///
/// The engine never interprets a token; it only hands it to the
/// [`Resolver`](crate::Resolver) when a path is first processed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Token(String);

impl Token {
    /// Create a token from any string-like identity.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identity as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Token {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for Token {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Verb metadata carried alongside a leaf path.
///
/// Like the `security` flag, this is metadata for hooks and introspection;
/// the engine does not dispatch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verb {
    /// Read-style access.
    Get,
    /// Write-style access.
    Post,
    /// Either.
    Any,
}

/// Per-path metadata carried alongside a leaf.
///
/// Both fields are optional. Absence of `security` means secure by default;
/// `security == Some(false)` is the only value that marks a path insecure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutingOption {
    /// Verb metadata, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verb: Option<Verb>,
    /// Security metadata; enforcement is the caller's responsibility.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security: Option<bool>,
}

impl RoutingOption {
    /// Whether this option explicitly marks the path insecure.
    pub fn is_insecure(&self) -> bool {
        self.security == Some(false)
    }
}

/// One node of the routing definition tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Routing {
    /// This node's path segment. A single leading `/` is tolerated and
    /// stripped during flattening; compound segments (`"fold/fold"`) pass
    /// through as-is.
    pub path: String,
    /// Leaf handler identity or nested group.
    pub target: RoutingTarget,
    /// Optional per-path metadata. Only consulted for leaves.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub option: Option<RoutingOption>,
}

impl Routing {
    /// A leaf node binding `path` to a handler identity.
    pub fn leaf(path: impl Into<String>, token: impl Into<Token>) -> Self {
        Self {
            path: path.into(),
            target: RoutingTarget::Leaf(token.into()),
            option: None,
        }
    }

    /// A leaf node with metadata.
    pub fn leaf_with(
        path: impl Into<String>,
        token: impl Into<Token>,
        option: RoutingOption,
    ) -> Self {
        Self {
            path: path.into(),
            target: RoutingTarget::Leaf(token.into()),
            option: Some(option),
        }
    }

    /// A group node nesting `children` under `path`.
    pub fn group(path: impl Into<String>, children: Vec<Routing>) -> Self {
        Self {
            path: path.into(),
            target: RoutingTarget::Group(children),
            option: None,
        }
    }
}

/// What a routing node points at.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RoutingTarget {
    /// A single handler identity; this node is a leaf route.
    Leaf(Token),
    /// An ordered list of nested nodes; this node is a group.
    Group(Vec<Routing>),
}
