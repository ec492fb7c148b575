//! Carton - a container holding at most one item
//!
//! ## Architecture
//!
//! - `state`: lifecycle status and the transition rules
//! - `codec`: text encoding and decoding of a whole carton
//!
//! A [`Carton`] is either uninitialized (created with
//! [`CartonFactory::lazy`]) or wraps a [`CartonState`]. Every operation
//! other than `init` checks that first and fails with
//! [`CartonError::UninitializedUsage`].
//!
//! Two comparisons exist side by side:
//! - [`Carton::equals`] compares size, lid, and contents.
//! - `==`, `<`, ... (and [`Carton::compare_volume`]) compare only the volume
//!   of the carton size, so cartons can be ranked by capacity.

mod codec;
mod state;

pub(crate) use codec::DecodedFields;
pub use state::{CartonState, CartonStatus};

use std::cmp::Ordering;
use std::fmt;

use carton_shared::errors::{CartonError, CartonResult};

use crate::dimensions::Dimensions;
use crate::factory::CartonFactory;
use crate::types::CartonId;

/// A rectangular container that holds at most one item at a time.
///
/// Cloning deep-copies the state and keeps the id; the clone counts as a
/// separate live instance of the factory.
///
/// # Example
///
/// ```
/// use carton::{CartonFactory, Dimensions};
///
/// let factory = CartonFactory::default();
/// let mut carton = factory.create(Dimensions::SMALL)?;
/// carton.open()?;
/// carton.put_item(Dimensions::new(5, 8, 7))?;
/// carton.close()?;
/// assert!(carton.is_full()?);
/// # Ok::<(), carton::CartonError>(())
/// ```
pub struct Carton {
    factory: CartonFactory,
    state: Option<CartonState>,
}

impl Carton {
    pub(crate) fn uninitialized(factory: CartonFactory) -> Self {
        Self {
            factory,
            state: None,
        }
    }

    /// Wrap a fully built state. The state's id must come from `factory`.
    pub(crate) fn from_state(factory: CartonFactory, state: CartonState) -> Self {
        factory.registry().acquire_instance();
        Self {
            factory,
            state: Some(state),
        }
    }

    fn state(&self) -> CartonResult<&CartonState> {
        self.state.as_ref().ok_or(CartonError::UninitializedUsage)
    }

    fn state_mut(&mut self) -> CartonResult<&mut CartonState> {
        self.state.as_mut().ok_or(CartonError::UninitializedUsage)
    }

    /// Initialize a lazily created carton.
    pub fn init(&mut self, size: Dimensions) -> CartonResult<()> {
        if self.state.is_some() {
            return Err(CartonError::DoubleInitialization);
        }
        size.validate()?;

        let registry = self.factory.registry();
        let id = registry.allocate()?;
        registry.acquire_instance();
        self.state = Some(CartonState::new(id, size));

        tracing::debug!(id = %id, size = %size, "Initialized carton");
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.state.is_some()
    }

    /// Current status; [`CartonStatus::Uninitialized`] before `init`.
    pub fn status(&self) -> CartonStatus {
        self.state
            .as_ref()
            .map_or(CartonStatus::Uninitialized, CartonState::status)
    }

    pub fn id(&self) -> CartonResult<CartonId> {
        Ok(self.state()?.id())
    }

    pub fn size(&self) -> CartonResult<Dimensions> {
        Ok(self.state()?.size())
    }

    /// The stored item, without taking it out.
    pub fn item(&self) -> CartonResult<Option<Dimensions>> {
        Ok(self.state()?.item())
    }

    pub fn is_full(&self) -> CartonResult<bool> {
        Ok(self.state()?.item.is_some())
    }

    pub fn is_closed(&self) -> CartonResult<bool> {
        Ok(!self.state()?.is_open)
    }

    pub fn open(&mut self) -> CartonResult<()> {
        let state = self.state_mut()?;
        state.open()?;
        tracing::debug!(id = %state.id, "Opened carton");
        Ok(())
    }

    /// Close the lid. Fails if the stored item is taller than the carton.
    pub fn close(&mut self) -> CartonResult<()> {
        let state = self.state_mut()?;
        state.close()?;
        tracing::debug!(id = %state.id, "Closed carton");
        Ok(())
    }

    /// Put an item into the open, empty carton.
    ///
    /// Only length and width are checked here; height is checked by
    /// [`close`](Self::close).
    pub fn put_item(&mut self, item: Dimensions) -> CartonResult<()> {
        let state = self.state_mut()?;
        state.put_item(item)?;
        tracing::debug!(id = %state.id, item = %item, "Put item into carton");
        Ok(())
    }

    /// Take the item out of the open, full carton. The carton is empty
    /// afterwards.
    pub fn take_item(&mut self) -> CartonResult<Dimensions> {
        let state = self.state_mut()?;
        let item = state.take_item()?;
        tracing::debug!(id = %state.id, item = %item, "Took item from carton");
        Ok(item)
    }

    /// Move this carton to the smallest unused id and return it. On error
    /// the id is unchanged.
    pub fn pre_increment(&mut self) -> CartonResult<&mut Self> {
        let state = self.state.as_mut().ok_or(CartonError::UninitializedUsage)?;
        let previous = state.id;
        state.id = self.factory.registry().allocate()?;
        tracing::debug!(previous = %previous, id = %state.id, "Reassigned carton id");
        Ok(self)
    }

    /// Move this carton to the smallest unused id and return a copy taken
    /// before the change.
    pub fn post_increment(&mut self) -> CartonResult<Carton> {
        self.state()?;
        let snapshot = self.clone();
        self.pre_increment()?;
        Ok(snapshot)
    }

    /// Complete equality: size, open/closed, empty/full and, when both are
    /// full, the item. Ids are not compared.
    pub fn equals(&self, other: &Carton) -> CartonResult<bool> {
        Ok(self.state()?.same_contents(other.state()?))
    }

    /// Order by the volume of the carton size only.
    pub fn compare_volume(&self, other: &Carton) -> CartonResult<Ordering> {
        let mine = self.state()?.size.volume();
        let theirs = other.state()?.size.volume();
        Ok(mine.cmp(&theirs))
    }

    /// Encode in the `{id: .., is_open: .., item: .., size: ..}` form.
    pub fn encode(&self) -> CartonResult<String> {
        Ok(self.state()?.to_string())
    }

    /// Replace this carton with the one decoded from `text`.
    ///
    /// On failure `self` is left exactly as it was. Works on an
    /// uninitialized carton too.
    pub fn decode_from(&mut self, text: &str) -> CartonResult<()> {
        let decoded = self.factory.decode(text)?;
        *self = decoded;
        Ok(())
    }

    pub fn factory(&self) -> &CartonFactory {
        &self.factory
    }
}

impl Clone for Carton {
    fn clone(&self) -> Self {
        if self.state.is_some() {
            self.factory.registry().acquire_instance();
        }
        Self {
            factory: self.factory.clone(),
            state: self.state.clone(),
        }
    }
}

impl Drop for Carton {
    fn drop(&mut self) {
        if self.state.is_some() {
            self.factory.registry().release_instance();
        }
    }
}

impl fmt::Debug for Carton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Carton")
            .field("status", &self.status())
            .field("state", &self.state)
            .finish()
    }
}

/// Volume equality. Uninitialized cartons are never equal to anything.
impl PartialEq for Carton {
    fn eq(&self, other: &Self) -> bool {
        matches!(self.compare_volume(other), Ok(Ordering::Equal))
    }
}

/// Volume ordering. Uninitialized cartons are incomparable.
impl PartialOrd for Carton {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare_volume(other).ok()
    }
}
