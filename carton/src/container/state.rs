//! Carton lifecycle status and state machine.
//!
//! Defines the possible states of a carton and the valid transitions
//! between them.

use carton_shared::errors::{CartonError, CartonResult, TransitionError};

use crate::dimensions::Dimensions;
use crate::types::CartonId;

/// Lifecycle status of a carton.
///
/// ```text
/// Uninitialized ─init()→ ClosedEmpty ⇄ OpenEmpty ⇄ OpenFull ⇄ ClosedFull
///                          open/close   put/take   close/open
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CartonStatus {
    /// Created lazily; `init()` has not been called.
    Uninitialized,

    ClosedEmpty,

    OpenEmpty,

    OpenFull,

    /// Lid closed over an item. Only reachable when the item is not taller
    /// than the carton.
    ClosedFull,
}

impl CartonStatus {
    pub fn is_initialized(&self) -> bool {
        !matches!(self, CartonStatus::Uninitialized)
    }

    pub fn is_open(&self) -> bool {
        matches!(self, CartonStatus::OpenEmpty | CartonStatus::OpenFull)
    }

    pub fn is_full(&self) -> bool {
        matches!(self, CartonStatus::OpenFull | CartonStatus::ClosedFull)
    }

    pub fn can_open(&self) -> bool {
        matches!(self, CartonStatus::ClosedEmpty | CartonStatus::ClosedFull)
    }

    /// Ignores item height; that is checked against the carton size.
    pub fn can_close(&self) -> bool {
        self.is_open()
    }

    pub fn can_put(&self) -> bool {
        matches!(self, CartonStatus::OpenEmpty)
    }

    pub fn can_take(&self) -> bool {
        matches!(self, CartonStatus::OpenFull)
    }

    /// Check if a single operation can move this status to `target`.
    pub fn can_transition_to(&self, target: CartonStatus) -> bool {
        use CartonStatus::*;
        matches!(
            (self, target),
            (Uninitialized, ClosedEmpty)
                | (ClosedEmpty, OpenEmpty)
                | (OpenEmpty, ClosedEmpty)
                | (OpenEmpty, OpenFull)
                | (OpenFull, OpenEmpty)
                | (OpenFull, ClosedFull)
                | (ClosedFull, OpenFull)
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CartonStatus::Uninitialized => "uninitialized",
            CartonStatus::ClosedEmpty => "closed-empty",
            CartonStatus::OpenEmpty => "open-empty",
            CartonStatus::OpenFull => "open-full",
            CartonStatus::ClosedFull => "closed-full",
        }
    }
}

impl std::str::FromStr for CartonStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "uninitialized" => Ok(CartonStatus::Uninitialized),
            "closed-empty" => Ok(CartonStatus::ClosedEmpty),
            "open-empty" => Ok(CartonStatus::OpenEmpty),
            "open-full" => Ok(CartonStatus::OpenFull),
            "closed-full" => Ok(CartonStatus::ClosedFull),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for CartonStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// State of an initialized carton.
///
/// Transitions are validated before applying; a rejected transition
/// leaves the state unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartonState {
    pub(crate) id: CartonId,
    pub(crate) is_open: bool,
    pub(crate) item: Option<Dimensions>,
    pub(crate) size: Dimensions,
}

impl CartonState {
    /// Closed, empty state. `size` must already be validated.
    pub(crate) fn new(id: CartonId, size: Dimensions) -> Self {
        Self {
            id,
            is_open: false,
            item: None,
            size,
        }
    }

    pub fn id(&self) -> CartonId {
        self.id
    }

    pub fn size(&self) -> Dimensions {
        self.size
    }

    pub fn item(&self) -> Option<Dimensions> {
        self.item
    }

    pub fn status(&self) -> CartonStatus {
        match (self.is_open, self.item.is_some()) {
            (false, false) => CartonStatus::ClosedEmpty,
            (true, false) => CartonStatus::OpenEmpty,
            (true, true) => CartonStatus::OpenFull,
            (false, true) => CartonStatus::ClosedFull,
        }
    }

    pub(crate) fn open(&mut self) -> CartonResult<()> {
        if self.is_open {
            return Err(TransitionError::AlreadyOpened.into());
        }
        self.is_open = true;
        Ok(())
    }

    pub(crate) fn close(&mut self) -> CartonResult<()> {
        if !self.is_open {
            return Err(TransitionError::AlreadyClosed.into());
        }
        if let Some(item) = self.item.filter(|item| item.height() > self.size.height()) {
            return Err(CartonError::ItemTooTallToClose {
                item_height: item.height(),
                height: self.size.height(),
            });
        }
        self.is_open = false;
        Ok(())
    }

    pub(crate) fn put_item(&mut self, item: Dimensions) -> CartonResult<()> {
        item.validate()?;
        if !self.is_open {
            return Err(TransitionError::PutIntoClosed.into());
        }
        if self.item.is_some() {
            return Err(TransitionError::PutIntoFull.into());
        }
        if !item.fits_footprint_of(&self.size) {
            return Err(CartonError::ItemDoesNotFit {
                item: item.to_string(),
                size: self.size.to_string(),
            });
        }
        self.item = Some(item);
        Ok(())
    }

    pub(crate) fn take_item(&mut self) -> CartonResult<Dimensions> {
        if !self.is_open {
            return Err(TransitionError::TakeFromClosed.into());
        }
        self.item
            .take()
            .ok_or(CartonError::InvalidStateTransition(TransitionError::TakeFromEmpty))
    }

    /// Full structural equality, ignoring identity.
    pub fn same_contents(&self, other: &CartonState) -> bool {
        self.size == other.size && self.is_open == other.is_open && self.item == other.item
    }
}
