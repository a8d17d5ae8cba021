//! Page collaborators: connectivity, URL access and the cart.
//!
//! The page core reaches the outside world only through these traits.

mod cart;
mod location;
mod network;

pub use self::cart::{Cart, CartLine, MemoryCart};
pub use self::location::{Location, PageUrl, SearchQueryAttributes};
pub use self::network::{NetworkStatus, StaticNetworkStatus};
