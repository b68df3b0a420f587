//! Contact directory core for Helpline.
//!
//! This crate owns everything that is independent of the terminal UI:
//!
//! - `model`  : `Contact`, `ContactId`, `Category`
//! - `seed`   : the built-in list of emergency / help-line numbers
//! - `store`  : `ContactStore`, the session-scoped collection of contacts
//! - `filter` : case-insensitive search + name ordering for the display list
//! - `dial`   : turning a phone number into a dialer address (`tel://...`)
//!
//! Nothing in here performs I/O. The only side effect is `log` output on
//! store mutations, which the binary routes into its tracing subscriber.
//!
//! ```
//! use directory::{Category, ContactStore, filter};
//!
//! let mut store = ContactStore::with_seed();
//! store.add("Taxi", "999", Category::Custom);
//!
//! let hits = filter(&store.snapshot(), "taxi");
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].phone_number(), "999");
//! ```

pub mod dial;
pub mod error;
pub mod filter;
pub mod model;
pub mod seed;
pub mod store;

pub use dial::DialAddress;
pub use error::DialError;
pub use filter::{FilterEngine, filter};
pub use model::{Category, Contact, ContactId};
pub use store::ContactStore;
