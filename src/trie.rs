use std::collections::HashMap;

use tracing::{debug, trace, warn};

use crate::{
    segment::{normalize, split, Segment},
    Params, RouteError,
};

/// Route table keyed by path segment.
///
/// Routes are `/`-separated patterns, typically a URL path with or without a leading host, e.g.
/// `"example.com/foo"` or just `"/foo"`. Each segment of a pattern is one of:
/// 1. a literal, matched by exact string equality;
/// 1. a `:name` parameter, matching any single segment and capturing it under `name`;
/// 1. a `*name` wildcard, matching all remaining segments and capturing them under `name`. The
///    name may be omitted (`*`), in which case nothing is captured. A wildcard always ends the
///    pattern.
///
/// Lookups prefer literal matches over `:param` matches, and `:param` matches over `*wildcard`
/// matches. This holds at every depth: when a preferred branch turns out to have no route for the
/// rest of the path, the search backs up and tries the next alternative.
///
/// # Examples
/// ```
/// # use route_trie::RouteTrie;
/// let mut trie = RouteTrie::new();
/// trie.add("example.com/test/one/:two", 1).unwrap();
/// trie.add("example.com/test/:one/two/three", 2).unwrap();
///
/// let (value, params) = trie.get("example.com/test/one/two/three").unwrap();
/// assert_eq!(*value, 2);
/// assert_eq!(params.get("one"), Some("one"));
///
/// assert!(trie.get("example.com/test").is_none());
/// ```
///
/// # Concurrency
/// Registration takes `&mut self` and lookup takes `&self`, so a populated trie can be shared
/// (e.g. behind an `Arc`) by any number of concurrent readers. Mutating a shared trie requires
/// external locking.
#[derive(Debug, Clone)]
pub struct RouteTrie<T> {
    root: Node<T>,
}

impl<T> RouteTrie<T> {
    /// Constructs an empty route trie.
    pub fn new() -> RouteTrie<T> {
        RouteTrie { root: Node::new() }
    }

    /// Registers `value` at `route`.
    ///
    /// Leading slashes are ignored, so `"/foo"` and `"foo"` are the same route. Registering an
    /// existing route replaces its value.
    ///
    /// Segments following a wildcard are discarded: `"a/*mid/b"` registers as `"a/*mid"`.
    ///
    /// # Errors
    /// Returns [`RouteError::ParamNameConflict`] if a `:param` segment uses a different name than
    /// one already registered at the same position. Nodes created for earlier segments of `route`
    /// are kept.
    pub fn add(&mut self, route: &str, value: T) -> Result<(), RouteError> {
        self.root.insert(route, route, value)?;
        trace!(route, "registered route");
        Ok(())
    }

    /// Finds the value registered for `route`, along with the captured parameter values.
    ///
    /// Returns `None` if no route matches. A match without any captures returns empty [`Params`].
    pub fn get(&self, route: &str) -> Option<(&T, Params)> {
        let mut params = Params::new();
        let value = self.root.find(route, &mut params)?;
        Some((value, params.finish()))
    }
}

impl<T> Default for RouteTrie<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone)]
struct Node<T> {
    literal: HashMap<String, Node<T>>,
    param: Option<ParamChild<T>>,
    wildcard: Option<WildcardChild<T>>,

    /// Set when a registered route ends at this node.
    value: Option<T>,
}

#[derive(Debug, Clone)]
struct ParamChild<T> {
    name: String,
    node: Box<Node<T>>,
}

/// Wildcards always end a route so they hold the value directly.
#[derive(Debug, Clone)]
struct WildcardChild<T> {
    name: String,
    value: T,
}

impl<T> Node<T> {
    fn new() -> Node<T> {
        Node {
            literal: HashMap::new(),
            param: None,
            wildcard: None,
            value: None,
        }
    }

    fn insert(&mut self, full_route: &str, route: &str, value: T) -> Result<(), RouteError> {
        let route = normalize(route);

        if route.is_empty() {
            self.value = Some(value);
            return Ok(());
        }

        let (head, tail) = split(route);

        match Segment::parse(head) {
            Segment::Param(name) => {
                if let Some(param) = &self.param {
                    if param.name != name {
                        debug!(
                            route = full_route,
                            existing = %param.name,
                            conflicting = name,
                            "rejected conflicting :param name"
                        );

                        return Err(RouteError::ParamNameConflict {
                            existing: param.name.clone(),
                            conflicting: name.to_owned(),
                        });
                    }
                }

                let param = self.param.get_or_insert_with(|| ParamChild {
                    name: name.to_owned(),
                    node: Box::new(Node::new()),
                });

                param.node.insert(full_route, tail, value)
            }

            Segment::Wildcard(name) => {
                if !normalize(tail).is_empty() {
                    warn!(
                        route = full_route,
                        discarded = tail,
                        "segments after a wildcard are ignored"
                    );
                }

                self.wildcard = Some(WildcardChild {
                    name: name.to_owned(),
                    value,
                });

                Ok(())
            }

            Segment::Literal(literal) => self
                .literal
                .entry(literal.to_owned())
                .or_insert_with(Node::new)
                .insert(full_route, tail, value),
        }
    }

    /// Backtracking search. `params` is only written once the subtree below a capture has matched,
    /// so abandoned branches leave nothing behind.
    fn find<'a>(&'a self, route: &str, params: &mut Params) -> Option<&'a T> {
        let route = normalize(route);

        if route.is_empty() {
            return self.value.as_ref();
        }

        let (head, tail) = split(route);

        if let Some(child) = self.literal.get(head) {
            if let Some(value) = child.find(tail, params) {
                return Some(value);
            }
        }

        if let Some(param) = &self.param {
            if let Some(value) = param.node.find(tail, params) {
                params.insert(&param.name, head);
                return Some(value);
            }
        }

        if let Some(wildcard) = &self.wildcard {
            if !wildcard.name.is_empty() {
                params.insert(&wildcard.name, route.trim_end_matches('/'));
            }

            return Some(&wildcard.value);
        }

        None
    }
}
