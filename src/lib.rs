//! Segment trie for URL route lookups.
//!
//! A [`RouteTrie`] maps route patterns such as `"example.com/users/:id"` or `"/static/*path"` to
//! values of any type and resolves incoming paths to the best matching route, capturing `:param`
//! and `*wildcard` segments into [`Params`].
//!
//! ```
//! use route_trie::RouteTrie;
//!
//! let mut trie = RouteTrie::new();
//! trie.add("/users/:id", "user").unwrap();
//! trie.add("/users/me", "me").unwrap();
//! trie.add("/static/*path", "static").unwrap();
//!
//! let (value, params) = trie.get("/users/42").unwrap();
//! assert_eq!(*value, "user");
//! assert_eq!(&params["id"], "42");
//!
//! let (value, params) = trie.get("/users/me").unwrap();
//! assert_eq!(*value, "me");
//! assert!(params.is_empty());
//!
//! let (_, params) = trie.get("/static/css/site.css").unwrap();
//! assert_eq!(params.get("path"), Some("css/site.css"));
//!
//! assert!(trie.get("/unknown").is_none());
//! ```

#![deny(rust_2018_idioms, nonstandard_style)]

mod error;
mod params;
mod segment;
mod trie;

pub use self::error::RouteError;
pub use self::params::{Params, ParamsIter};
pub use self::trie::RouteTrie;
