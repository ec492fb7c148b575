//! Carton - a value-type container holding at most one rectangular item.
//!
//! A [`Carton`] is opened, filled with a single [`Dimensions`] item, and
//! closed again. Every carton is issued an id by the [`CartonFactory`] that
//! created it, and the factory counts how many initialized cartons are
//! alive so leaks can be detected in tests.
//!
//! Both types have a brace-delimited text form:
//!
//! ```text
//! {id: 0, is_open: false, size: {length: 20, width: 20, height: 10}}
//! ```
//!
//! # Example
//!
//! ```
//! use carton::{CartonFactory, CartonStatus, Dimensions};
//!
//! let factory = CartonFactory::default();
//! let mut carton = factory.create(Dimensions::new(10, 10, 10))?;
//! carton.open()?;
//! carton.put_item(Dimensions::new(5, 5, 5))?;
//!
//! let copy = factory.decode(&carton.encode()?)?;
//! assert!(copy.equals(&carton)?);
//! assert_eq!(copy.status(), CartonStatus::OpenFull);
//! # Ok::<(), carton::CartonError>(())
//! ```

pub mod container;
pub mod dimensions;
pub mod factory;
pub mod options;
mod registry;
pub mod types;

pub use container::{Carton, CartonState, CartonStatus};
pub use dimensions::Dimensions;
pub use factory::CartonFactory;
pub use options::{CartonOptions, IdPolicy};
pub use types::CartonId;

pub use carton_shared::codec::Reader;
pub use carton_shared::errors::{CartonError, CartonResult, ParseError, TransitionError};
