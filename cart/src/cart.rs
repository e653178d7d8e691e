//! Fixed-capacity unordered multiset.
//!
//! # Examples
//!
//! ## Basic usage
//!
//! ```rust
//! use cart::Cart;
//!
//! let mut cart = Cart::new();
//! cart.add("milk");
//! cart.add("eggs");
//!
//! assert!(cart.contains(&"milk"));
//! assert_eq!(cart.len(), 2);
//! ```
//!
//! ## Duplicates
//!
//! ```rust
//! use cart::Cart;
//!
//! let mut cart = Cart::new();
//! cart.add("soda");
//! cart.add("soda");
//! cart.add("soda");
//!
//! assert_eq!(cart.frequency_of(&"soda"), 3);
//! assert!(cart.remove_item(&"soda"));
//! assert_eq!(cart.frequency_of(&"soda"), 2);
//! ```
//!
use crate::CartError;

/// Capacity used by [`Cart::new`] and [`Cart::default`].
pub const DEFAULT_CAPACITY: usize = 25;

/// Hard ceiling on the capacity a cart may be constructed with.
pub const MAX_CAPACITY: usize = 10_000;

/// A capacity-bounded multiset of items of one element type.
///
/// The cart holds up to `capacity` items, chosen at construction and fixed
/// for the cart's lifetime. Items are compared by value equality
/// ([`PartialEq`]), and the same value may be held more than once.
///
/// The cart is unordered: removal swaps the removed slot with the last
/// occupied one, so any removal may reorder the remaining items. In
/// exchange, [`remove_item`](Cart::remove_item) frees its slot in O(1)
/// after the scan that locates it.
///
/// # Examples
///
/// ```rust
/// use cart::Cart;
///
/// let mut cart = Cart::with_capacity(3).expect("capacity within ceiling");
///
/// assert!(cart.add("bread"));
/// assert!(cart.add("butter"));
/// assert!(cart.add("jam"));
/// assert!(!cart.add("honey")); // full: rejected, never grown
///
/// assert!(cart.remove_item(&"butter"));
/// assert_eq!(cart.len(), 2);
/// assert!(!cart.contains(&"butter"));
/// ```
#[derive(Debug, Clone)]
pub struct Cart<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> Cart<T> {
    /// Creates an empty cart with the default capacity of 25.
    ///
    /// # Examples
    ///
    /// ```
    /// use cart::Cart;
    ///
    /// let cart = Cart::<String>::new();
    /// assert!(cart.is_empty());
    /// assert_eq!(cart.capacity(), 25);
    /// ```
    pub fn new() -> Self {
        Cart {
            items: Vec::with_capacity(DEFAULT_CAPACITY),
            capacity: DEFAULT_CAPACITY,
        }
    }

    /// Creates an empty cart with the given capacity.
    ///
    /// The backing storage is allocated once here and never grows.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::CapacityExceeded`] if `capacity` is above
    /// [`MAX_CAPACITY`].
    ///
    /// # Examples
    ///
    /// ```
    /// use cart::{Cart, CartError, MAX_CAPACITY};
    ///
    /// let cart = Cart::<u32>::with_capacity(100).unwrap();
    /// assert_eq!(cart.capacity(), 100);
    ///
    /// let too_big = Cart::<u32>::with_capacity(MAX_CAPACITY + 1);
    /// assert!(matches!(too_big, Err(CartError::CapacityExceeded(_))));
    /// ```
    pub fn with_capacity(capacity: usize) -> Result<Self, CartError> {
        if capacity > MAX_CAPACITY {
            return Err(CartError::CapacityExceeded(capacity));
        }
        Ok(Cart {
            items: Vec::with_capacity(capacity),
            capacity,
        })
    }

    /// Adds an item to the cart.
    ///
    /// Returns `true` on success, or `false` if the cart is already at
    /// capacity, in which case the cart is left unchanged and the item is
    /// dropped. A full cart is an ordinary outcome, not an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use cart::Cart;
    ///
    /// let mut cart = Cart::with_capacity(1).unwrap();
    /// assert!(cart.add("cereal"));
    /// assert!(!cart.add("cereal"));
    /// assert_eq!(cart.len(), 1);
    /// ```
    pub fn add(&mut self, item: T) -> bool {
        if self.items.len() == self.capacity {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Removes and returns one arbitrary item, or `None` if the cart is
    /// empty.
    ///
    /// The item removed happens to be the one in the last occupied slot,
    /// but swap-removal scrambles slot order, so callers must not read
    /// this as "the most recently added item".
    ///
    /// # Examples
    ///
    /// ```
    /// use cart::Cart;
    ///
    /// let mut cart = Cart::new();
    /// cart.add("apple");
    ///
    /// assert_eq!(cart.remove(), Some("apple"));
    /// assert_eq!(cart.remove(), None);
    /// ```
    pub fn remove(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Removes one occurrence of a value-equal item.
    ///
    /// Scans from slot 0 upward and swap-removes the first match: the
    /// matched slot is overwritten with the last occupied item and the
    /// occupied count shrinks by one, so remaining items may be
    /// reordered. Returns `false` if no slot holds an equal value.
    ///
    /// # Examples
    ///
    /// ```
    /// use cart::Cart;
    ///
    /// let mut cart = Cart::new();
    /// cart.add("tea");
    /// cart.add("coffee");
    ///
    /// assert!(cart.remove_item(&"tea"));
    /// assert!(!cart.remove_item(&"tea"));
    /// assert_eq!(cart.len(), 1);
    /// ```
    pub fn remove_item(&mut self, item: &T) -> bool
    where
        T: PartialEq,
    {
        match self.items.iter().position(|slot| slot == item) {
            Some(index) => {
                self.items.swap_remove(index);
                true
            }
            None => false,
        }
    }

    /// Tests whether the cart holds a value equal to `item`.
    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.items.iter().any(|slot| slot == item)
    }

    /// Counts the occurrences of a value-equal item.
    ///
    /// # Examples
    ///
    /// ```
    /// use cart::Cart;
    ///
    /// let mut cart = Cart::new();
    /// cart.add(7);
    /// cart.add(7);
    ///
    /// assert_eq!(cart.frequency_of(&7), 2);
    /// assert_eq!(cart.frequency_of(&8), 0);
    /// ```
    pub fn frequency_of(&self, item: &T) -> usize
    where
        T: PartialEq,
    {
        self.items.iter().filter(|slot| *slot == item).count()
    }

    /// Returns the number of items currently in the cart.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the cart holds no items.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the fixed capacity chosen at construction.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Removes every item. The cart keeps its capacity and stays usable.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Copies the occupied slots into a freshly allocated `Vec`.
    ///
    /// The returned vector is independent of the cart's storage. Its order
    /// is the current internal order, which is unspecified once any
    /// removal has happened.
    ///
    /// # Examples
    ///
    /// ```
    /// use cart::Cart;
    ///
    /// let mut cart = Cart::new();
    /// cart.add("rice");
    ///
    /// let exported = cart.to_vec();
    /// cart.clear();
    /// assert_eq!(exported, vec!["rice"]);
    /// ```
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.to_vec()
    }

    /// Returns a borrowed view of the occupied slots.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.items.as_slice()
    }

    /// Returns an iterator over the items in their current internal order.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Confirms the construction invariant still holds.
    ///
    /// A cart built through [`Cart::new`] or [`Cart::with_capacity`]
    /// cannot fail this check; it exists so callers that want a defensive
    /// audit have an explicit [`CartError::CorruptState`] to observe.
    pub fn verify(&self) -> Result<(), CartError> {
        if self.items.len() > self.capacity {
            return Err(CartError::CorruptState);
        }
        Ok(())
    }
}

impl<T> Default for Cart<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a Cart<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for Cart<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
