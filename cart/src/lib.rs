//! # cart
//!
//! A fixed-capacity, unordered multiset ("shopping cart").
//!
//! The cart holds up to `capacity` items of one element type, compared by
//! value equality. Duplicates are allowed, insertion is O(1), and removal
//! is O(1) swap-removal, which is why the cart makes no ordering
//! guarantees.
//!
//! ```rust
//! use cart::Cart;
//!
//! let mut cart = Cart::new();
//! cart.add("milk");
//! cart.add("milk");
//! cart.add("eggs");
//!
//! assert_eq!(cart.frequency_of(&"milk"), 2);
//! assert!(cart.remove_item(&"eggs"));
//! assert_eq!(cart.len(), 2);
//! ```
//!
//! ## Capacity is fixed
//!
//! The backing storage is allocated once at construction and never grows.
//! Adding to a full cart is rejected, not an error:
//!
//! ```rust
//! use cart::Cart;
//!
//! let mut cart = Cart::with_capacity(2).expect("capacity within ceiling");
//! assert!(cart.add(1));
//! assert!(cart.add(2));
//! assert!(!cart.add(3));
//! assert_eq!(cart.len(), 2);
//! ```

pub mod error;
pub use error::CartError;

mod cart;
pub use cart::{Cart, DEFAULT_CAPACITY, MAX_CAPACITY};
