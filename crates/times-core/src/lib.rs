//! Repeat an action N times, where N is a signed integer count.
//!
//! ```
//! use times_core::Times;
//!
//! let mut seen = Vec::new();
//! 3i16.times(|i| seen.push(i));
//! assert_eq!(seen, [0, 1, 2]);
//! ```

pub mod config;
pub mod count;
pub mod error;
pub mod io;
pub mod repeat;
pub mod verify;
pub mod width;

pub use count::Count;
pub use error::{Result, TimesError};
pub use repeat::{repeat, try_repeat, Times};
pub use width::Width;
