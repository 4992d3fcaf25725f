//! Package implement a [red-black tree][wiki-rbt] index.
//!
//! The tree keeps parent back-references so that both insertion and
//! removal can rebalance bottom-up with the classic recolor-and-rotate
//! cases, guaranteeing a height of at most `2 * log2(n+1)`.
//!
//! Following types implement the index for specific use cases:
//!
//! * [RbTree] implements an ephemeral, single threaded red-black tree.
//!   Nodes live in a dense arena and refer to each other by slot index,
//!   slot ZERO being the black sentinel every absent link points to.
//! * [Index] wraps an [RbTree] behind a single coarse latch, serializing
//!   all reads and writes. [RwIndex] is the reader/writer variant that
//!   allows concurrent lookups.
//!
//! Elements
//! --------
//!
//! - Each element exposes one total-order key, refer to [Element].
//! - Duplicate keys are allowed, each duplicate is a distinct element.
//! - Insert always succeeds, remove and find report absence via
//!   `Option` or `bool`, never via [Error].
//!
//! Constructing a new [RbTree] instance and CRUD operations:
//!
//! ```
//! use rbix::RbTree;
//!
//! let mut tree: RbTree<u64> = RbTree::new();
//! assert_eq!(tree.len(), 0);
//! assert_eq!(tree.is_empty(), true);
//!
//! for key in [10, 18, 7, 15, 16, 30, 25, 40, 60, 2].iter() {
//!     tree.insert(*key);
//! }
//! assert_eq!(tree.len(), 10);
//! assert_eq!(tree.get(&15), Some(&15));
//!
//! assert_eq!(tree.remove(&18), Some(18));
//! assert_eq!(tree.remove(&18), None);
//! tree.validate().unwrap();
//! ```
//!
//! Sharing an [Index] between threads:
//!
//! ```
//! use rbix::Index;
//! use std::thread;
//!
//! let index: Index<(u32, String)> = Index::new("users");
//! let handle = {
//!     let index = index.clone();
//!     thread::spawn(move || index.insert((1, "one".to_string())))
//! };
//! handle.join().unwrap();
//!
//! assert_eq!(index.find(&1), Some((1, "one".to_string())));
//! assert_eq!(index.remove(&1), true);
//! assert_eq!(index.remove(&1), false);
//! ```
//!
//! [wiki-rbt]: https://en.wikipedia.org/wiki/Red%E2%80%93black_tree

use std::{error, fmt, result};

// Short form to compose Error values.
//
// Here are few possible ways:
//
// ```ignore
// use crate::Error;
// err_at!(Fatal, msg: format!("bad argument"));
// ```
//
// ```ignore
// use crate::Error;
// err_at!(Fatal, std::fs::read(file_path), format!("read failed"));
// ```
//
macro_rules! err_at {
    ($v:ident, msg: $($arg:expr),+) => {{
        let prefix = format!("{}:{}", file!(), line!());
        Err(Error::$v(prefix, format!($($arg),+)))
    }};
    ($v:ident, $e:expr) => {{
        match $e {
            Ok(val) => Ok(val),
            Err(err) => {
                let prefix = format!("{}:{}", file!(), line!());
                Err(Error::$v(prefix, format!("{}", err)))
            }
        }
    }};
    ($v:ident, $e:expr, $($arg:expr),+) => {{
        match $e {
            Ok(val) => Ok(val),
            Err(err) => {
                let prefix = format!("{}:{}", file!(), line!());
                let msg = format!($($arg),+);
                Err(Error::$v(prefix, format!("{} {}", err, msg)))
            }
        }
    }};
}

mod delete;
mod index;
mod insert;
mod node;
mod rotate;
mod tree;

pub use index::{Index, Latch, RwIndex};
pub use node::Color;
pub use tree::{Iter, RbTree, Stats};

/// Element stored in the tree, ordered by a single total-order key.
///
/// ```
/// use rbix::Element;
///
/// struct Account {
///     id: u64,
///     balance: i64,
/// }
///
/// impl Element for Account {
///     type Key = u64;
///
///     fn as_key(&self) -> &u64 {
///         &self.id
///     }
/// }
/// ```
pub trait Element {
    type Key: Ord;

    /// Return the key this element is ordered by.
    fn as_key(&self) -> &Self::Key;
}

macro_rules! self_keyed {
    ($($t:ty),*) => {
        $(
            impl Element for $t {
                type Key = $t;

                #[inline]
                fn as_key(&self) -> &$t {
                    self
                }
            }
        )*
    };
}

self_keyed!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
self_keyed!(bool, char, String);

/// Pairs are keyed on their first member, the second rides along.
impl<K, V> Element for (K, V)
where
    K: Ord,
{
    type Key = K;

    #[inline]
    fn as_key(&self) -> &K {
        &self.0
    }
}

/// Error variants that are returned by this package's API.
///
/// Each variant carries a prefix, typically identifying the
/// error location.
pub enum Error {
    Fatal(String, String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> result::Result<(), fmt::Error> {
        use Error::*;

        match self {
            Fatal(p, msg) => write!(f, "{} Fatal: {}", p, msg),
        }
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> result::Result<(), fmt::Error> {
        write!(f, "{}", self)
    }
}

impl error::Error for Error {}

/// Type alias for Result return type, used by this package.
pub type Result<T> = result::Result<T, Error>;
