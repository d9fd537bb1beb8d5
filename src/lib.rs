//! # sovran-bag
//!
//! A thread-safe, string-keyed properties bag.
//!
//! `sovran-bag` provides a single container, [`Bag`], that maps string keys to
//! heterogeneous values and is safe for concurrent use. It is meant to be
//! passed between loosely coupled components that need to exchange untyped
//! data — configuration fragments, request attributes, plugin state — without
//! each component having to repeat shape checks at every call site.
//!
//! ## Key Features
//!
//! - **Typed accessors**: `get_string`, `get_int`, `get_bool`, `get_bytes`,
//!   and `get_string_map` check the stored shape for you and report mismatch
//!   as `None` instead of panicking
//! - **Thread-safe**: built on a reader/writer lock, so readers overlap and
//!   writers get exclusive access
//! - **Cheap to share**: cloning a `Bag` clones a handle, not the data
//! - **No errors, ever**: absence and shape mismatch are the only failures,
//!   both reported through `Option`
//!
//! ## Usage Examples
//!
//! ### Basic Usage
//!
//! ```rust
//! use sovran_bag::Bag;
//!
//! let bag = Bag::new();
//!
//! // Store values of different shapes under string keys
//! bag.set("greeting", "hello");
//! bag.set("attempts", 3);
//! bag.set("verbose", true);
//! bag.set("payload", vec![0xDEu8, 0xAD, 0xBE, 0xEF]);
//!
//! // Typed retrieval; the shape check happens inside
//! assert_eq!(bag.get_string("greeting").as_deref(), Some("hello"));
//! assert_eq!(bag.get_int("attempts"), Some(3));
//! assert_eq!(bag.get_bool("verbose"), Some(true));
//!
//! // A missing key and a wrong-shape key look the same: None
//! assert_eq!(bag.get_string("nope"), None);
//! assert_eq!(bag.get_string("attempts"), None);
//! ```
//!
//! ### Pre-populating a Bag
//!
//! A bag can take ownership of an existing mapping without copying it.
//! Because `Bag::from` moves the map, the compiler guarantees nobody keeps
//! mutating it outside the bag's lock:
//!
//! ```rust
//! use sovran_bag::{Bag, Entries};
//!
//! let mut seed = Entries::new();
//! seed.insert("env".to_owned(), "production".into());
//! seed.insert("workers".to_owned(), 8.into());
//!
//! let bag = Bag::from(seed);
//! assert_eq!(bag.get_string("env").as_deref(), Some("production"));
//! assert_eq!(bag.get_int("workers"), Some(8));
//! ```
//!
//! ### Sharing Between Threads
//!
//! ```rust
//! use sovran_bag::Bag;
//! use std::thread;
//!
//! let bag = Bag::new();
//!
//! let handles: Vec<_> = (0..4)
//!     .map(|i| {
//!         let bag = bag.clone();
//!         thread::spawn(move || bag.set(format!("worker-{i}"), i))
//!     })
//!     .collect();
//!
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//!
//! assert_eq!(bag.len(), 4);
//! assert_eq!(bag.get_int("worker-2"), Some(2));
//! ```
//!
//! ### The Escape Hatch
//!
//! [`Bag::entries`] hands out the live storage handle — the same map and the
//! same lock the bag itself uses. It is there for bulk access and for
//! building an aliasing bag over existing storage; anything done through it
//! bypasses the bag's accessors, so treat it as a sharp tool. When a detached
//! copy is all you need, use [`Bag::snapshot`] instead:
//!
//! ```rust
//! use sovran_bag::Bag;
//!
//! let bag = Bag::new();
//! bag.set("k", "v");
//!
//! let frozen = bag.snapshot();
//! bag.set("k", "changed");
//!
//! assert_eq!(frozen["k"].as_str(), Some("v"));
//! assert_eq!(bag.get_string("k").as_deref(), Some("changed"));
//! ```

mod bag;
mod value;

pub use bag::{Bag, Entries, SharedEntries};
pub use value::Value;
