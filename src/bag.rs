use crate::value::Value;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// The mapping a [`Bag`] wraps.
pub type Entries = HashMap<String, Value>;

/// A shared, lock-guarded handle to a bag's storage.
///
/// Returned by [`Bag::entries`]; accepted by `Bag::from` to build an aliasing
/// bag over the same storage.
pub type SharedEntries = Arc<RwLock<Entries>>;

/// A thread-safe, string-keyed bag of heterogeneous values.
///
/// `Bag` wraps a `HashMap<String, Value>` behind a reader/writer lock so that
/// loosely coupled components can exchange untyped data without racing.
/// Readers overlap freely; a writer excludes everyone for the duration of its
/// insert.
///
/// The typed getters (`get_string`, `get_int`, ...) do the shape check for
/// you: a key that is absent, or present with a different shape, comes back as
/// `None`. Nothing in this API panics or returns an error — "not there / not
/// this shape" is the only failure, and `Option` is how it is reported. The
/// two cases are deliberately indistinguishable from the return value alone.
///
/// Cloning a `Bag` is cheap and produces a handle to the *same* storage and
/// lock, which is the intended way to hand a bag to another thread.
///
/// # Examples
///
/// ```rust
/// use sovran_bag::Bag;
///
/// let bag = Bag::new();
/// bag.set("foo", "hey, this is a string and here is a number:");
/// bag.set("bar", 42);
///
/// assert_eq!(
///     bag.get_string("foo").as_deref(),
///     Some("hey, this is a string and here is a number:")
/// );
/// assert_eq!(bag.get_int("bar"), Some(42));
///
/// // Wrong shape downgrades to None rather than panicking.
/// assert_eq!(bag.get_string("bar"), None);
/// ```
///
/// Sharing between threads:
///
/// ```rust
/// use sovran_bag::Bag;
/// use std::thread;
///
/// let bag = Bag::new();
/// let writer = bag.clone();
/// thread::spawn(move || writer.set("ready", true)).join().unwrap();
///
/// assert_eq!(bag.get_bool("ready"), Some(true));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Bag {
    entries: SharedEntries,
}

impl Bag {
    /// Creates an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites the value for `key`.
    ///
    /// Anything convertible to [`Value`] can be passed directly: `&str`,
    /// `String`, integers, `bool`, `Vec<u8>`, or a `HashMap<String, String>`.
    /// The write lock is held for the whole mutation, so an insert is never
    /// observed half-done.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sovran_bag::Bag;
    ///
    /// let bag = Bag::new();
    /// bag.set("name", "amber");
    /// bag.set("name", "beryl"); // overwrite: the second write wins
    /// assert_eq!(bag.get_string("name").as_deref(), Some("beryl"));
    /// ```
    pub fn set(&self, key: impl Into<String>, value: impl Into<Value>) {
        let mut entries = self.entries.write();
        entries.insert(key.into(), value.into());
    }

    /// Returns true if `key` is present, regardless of the value's shape.
    pub fn has(&self, key: &str) -> bool {
        let entries = self.entries.read();
        entries.contains_key(key)
    }

    /// Returns a clone of the value for `key` exactly as stored, without any
    /// shape assertion, or `None` if the key is absent.
    pub fn get(&self, key: &str) -> Option<Value> {
        let entries = self.entries.read();
        entries.get(key).cloned()
    }

    /// Returns the string stored under `key`.
    ///
    /// `None` means the key is absent *or* holds a non-string value; the two
    /// cases are not distinguished. Callers that want the old
    /// default-on-missing behavior can chain `.unwrap_or_default()`.
    pub fn get_string(&self, key: &str) -> Option<String> {
        let entries = self.entries.read();
        entries.get(key).and_then(Value::as_str).map(str::to_owned)
    }

    /// Returns the boolean stored under `key`. Same contract as
    /// [`get_string`](Bag::get_string).
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        let entries = self.entries.read();
        entries.get(key).and_then(Value::as_bool)
    }

    /// Returns the integer stored under `key`. Same contract as
    /// [`get_string`](Bag::get_string).
    pub fn get_int(&self, key: &str) -> Option<i64> {
        let entries = self.entries.read();
        entries.get(key).and_then(Value::as_int)
    }

    /// Returns the byte sequence stored under `key`. Same contract as
    /// [`get_string`](Bag::get_string).
    pub fn get_bytes(&self, key: &str) -> Option<Vec<u8>> {
        let entries = self.entries.read();
        entries.get(key).and_then(Value::as_bytes).map(<[u8]>::to_vec)
    }

    /// Returns the string-to-string map stored under `key`. Same contract as
    /// [`get_string`](Bag::get_string).
    pub fn get_string_map(&self, key: &str) -> Option<HashMap<String, String>> {
        let entries = self.entries.read();
        entries.get(key).and_then(Value::as_string_map).cloned()
    }

    /// Removes `key`, returning the value it held.
    pub fn remove(&self, key: &str) -> Option<Value> {
        let mut entries = self.entries.write();
        entries.remove(key)
    }

    /// Returns the number of keys in the bag.
    pub fn len(&self) -> usize {
        let entries = self.entries.read();
        entries.len()
    }

    /// Returns true if the bag holds no keys.
    pub fn is_empty(&self) -> bool {
        let entries = self.entries.read();
        entries.is_empty()
    }

    /// Returns all keys currently in the bag, in no particular order.
    pub fn keys(&self) -> Vec<String> {
        let entries = self.entries.read();
        entries.keys().cloned().collect()
    }

    /// Returns the live handle to the bag's underlying storage.
    ///
    /// This is an escape hatch, not a copy: the returned handle aliases the
    /// bag's own map and lock, so mutation through either side is visible to
    /// the other. It exists for bulk inspection and for rebuilding a bag over
    /// the same storage via `Bag::from`. Direct access bypasses the bag's
    /// accessors — callers take on the locking discipline themselves, and
    /// holding a guard while calling back into the bag will deadlock. Prefer
    /// [`snapshot`](Bag::snapshot) when a detached copy will do.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sovran_bag::Bag;
    ///
    /// let bag = Bag::new();
    /// bag.set("k", "v");
    ///
    /// let alias = Bag::from(bag.entries());
    /// alias.set("k2", 2);
    /// assert_eq!(bag.get_int("k2"), Some(2)); // same storage
    /// ```
    pub fn entries(&self) -> SharedEntries {
        Arc::clone(&self.entries)
    }

    /// Returns a detached copy of the bag's contents, taken under the read
    /// lock. Later mutation of the bag does not affect the snapshot.
    pub fn snapshot(&self) -> Entries {
        let entries = self.entries.read();
        entries.clone()
    }
}

/// Builds a bag that takes ownership of an existing mapping, without copying.
///
/// The move makes the handoff explicit: after `Bag::from(m)` the caller no
/// longer holds `m`, so all further access goes through the bag's lock.
///
/// # Examples
///
/// ```rust
/// use sovran_bag::{Bag, Entries};
///
/// let mut seed = Entries::new();
/// seed.insert("x".to_owned(), "y".into());
///
/// let bag = Bag::from(seed);
/// assert_eq!(bag.get_string("x").as_deref(), Some("y"));
/// ```
impl From<Entries> for Bag {
    fn from(entries: Entries) -> Self {
        Self {
            entries: Arc::new(RwLock::new(entries)),
        }
    }
}

/// Builds a bag over an already-shared storage handle, typically one obtained
/// from [`Bag::entries`]. The new bag aliases that storage.
impl From<SharedEntries> for Bag {
    fn from(entries: SharedEntries) -> Self {
        Self { entries }
    }
}

impl FromIterator<(String, Value)> for Bag {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Entries>())
    }
}
