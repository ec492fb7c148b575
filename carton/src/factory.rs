//! Entry point for creating and decoding cartons.

use std::sync::Arc;

use carton_shared::codec::Reader;
use carton_shared::constants::fields::carton as fields;
use carton_shared::errors::{CartonResult, ParseError};

use crate::container::{Carton, CartonState, DecodedFields};
use crate::dimensions::Dimensions;
use crate::options::{CartonOptions, IdPolicy};
use crate::registry::Registry;
use crate::types::CartonId;

/// Owns the id counter and the live-instance counter for a family of
/// cartons.
///
/// Cheap to clone; clones share the same counters. Every carton keeps a
/// handle to the factory it came from, so the counters outlive the
/// factory value itself.
///
/// # Example
///
/// ```
/// use carton::{CartonFactory, Dimensions};
///
/// let factory = CartonFactory::default();
/// let first = factory.create(Dimensions::SMALL)?;
/// let second = factory.create_default()?;
/// assert_eq!(second.id()?.as_u64(), first.id()?.as_u64() + 1);
/// assert_eq!(factory.live_instances(), 2);
/// # Ok::<(), carton::CartonError>(())
/// ```
#[derive(Clone, Debug)]
pub struct CartonFactory {
    inner: Arc<FactoryInner>,
}

#[derive(Debug)]
struct FactoryInner {
    options: CartonOptions,
    registry: Registry,
}

impl CartonFactory {
    pub fn new(options: CartonOptions) -> CartonResult<Self> {
        options.validate()?;
        tracing::debug!(
            id_policy = %options.id_policy,
            first_id = %options.first_id,
            default_size = %options.default_size,
            "Created carton factory"
        );
        Ok(Self::from_valid_options(options))
    }

    fn from_valid_options(options: CartonOptions) -> Self {
        let registry = Registry::new(options.first_id);
        Self {
            inner: Arc::new(FactoryInner { options, registry }),
        }
    }

    pub fn options(&self) -> &CartonOptions {
        &self.inner.options
    }

    pub(crate) fn registry(&self) -> &Registry {
        &self.inner.registry
    }

    /// Closed, empty carton of the given size.
    pub fn create(&self, size: Dimensions) -> CartonResult<Carton> {
        let mut carton = self.lazy();
        carton.init(size)?;
        Ok(carton)
    }

    /// Closed, empty carton of the configured default size.
    pub fn create_default(&self) -> CartonResult<Carton> {
        self.create(self.inner.options.default_size)
    }

    /// Uninitialized carton. Consumes no id until [`Carton::init`].
    pub fn lazy(&self) -> Carton {
        Carton::uninitialized(self.clone())
    }

    /// Decodes exactly one carton; trailing text is rejected.
    pub fn decode(&self, text: &str) -> CartonResult<Carton> {
        let mut reader = Reader::new(text);
        let fields = DecodedFields::read(&mut reader)?;
        reader.finish()?;
        self.build(fields)
    }

    /// Decodes one carton at the reader's cursor.
    pub fn read(&self, reader: &mut Reader<'_>) -> CartonResult<Carton> {
        let fields = DecodedFields::read(reader)?;
        self.build(fields)
    }

    /// Decodes whitespace-separated cartons until the text is exhausted.
    ///
    /// All or nothing: no carton is returned on error. A malformed or
    /// invalid value uses no id.
    pub fn decode_all(&self, text: &str) -> CartonResult<Vec<Carton>> {
        let mut reader = Reader::new(text);
        let mut pending = Vec::new();
        while !reader.is_at_end() {
            let fields = DecodedFields::read(&mut reader)?;
            let encoded_id = fields.id;
            self.check_encoded_id(encoded_id)?;
            pending.push((encoded_id, fields.into_state(CartonId::default())?));
        }
        pending
            .into_iter()
            .map(|(encoded_id, state)| self.adopt_state(encoded_id, state))
            .collect()
    }

    /// Nothing is allocated or counted unless the whole carton is valid.
    fn build(&self, fields: DecodedFields) -> CartonResult<Carton> {
        let encoded_id = fields.id;
        self.check_encoded_id(encoded_id)?;
        let state = fields.into_state(CartonId::default())?;
        self.adopt_state(encoded_id, state)
    }

    /// Under `adopt`, an encoded id is only usable if the counter can move
    /// past it.
    fn check_encoded_id(&self, encoded_id: Option<CartonId>) -> Result<(), ParseError> {
        match (self.inner.options.id_policy, encoded_id) {
            (IdPolicy::Adopt, Some(id)) if id.checked_next().is_none() => {
                Err(ParseError::InvalidValue {
                    field: fields::ID,
                    token: id.to_string(),
                })
            }
            _ => Ok(()),
        }
    }

    /// Gives a validated state its final id per the id policy.
    fn adopt_state(
        &self,
        encoded_id: Option<CartonId>,
        mut state: CartonState,
    ) -> CartonResult<Carton> {
        let registry = self.registry();
        state.id = match (self.inner.options.id_policy, encoded_id) {
            (IdPolicy::Adopt, Some(id)) => {
                registry.reserve(id)?;
                id
            }
            _ => registry.allocate()?,
        };

        tracing::debug!(
            id = %state.id,
            encoded_id = ?encoded_id.map(u64::from),
            status = %state.status(),
            "Decoded carton"
        );
        Ok(Carton::from_state(self.clone(), state))
    }

    /// Initialized cartons from this factory that are still alive.
    pub fn live_instances(&self) -> usize {
        self.inner.registry.live_instances()
    }

    /// Id the next allocation will return, unless the counter is exhausted.
    pub fn next_id(&self) -> CartonId {
        self.inner.registry.peek_next()
    }
}

impl Default for CartonFactory {
    fn default() -> Self {
        Self::from_valid_options(CartonOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carton_shared::errors::CartonError;

    #[test]
    fn test_first_id_from_options() {
        let factory = CartonFactory::new(CartonOptions {
            first_id: CartonId::from(100),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(factory.create_default().unwrap().id().unwrap(), CartonId::from(100));
    }

    #[test]
    fn test_new_rejects_invalid_options() {
        let result = CartonFactory::new(CartonOptions {
            default_size: Dimensions::new(0, 1, 1),
            ..Default::default()
        });
        assert!(matches!(result, Err(CartonError::Config(_))));
    }

    #[test]
    fn test_create_default_uses_medium() {
        let carton = CartonFactory::default().create_default().unwrap();
        assert_eq!(carton.size().unwrap(), Dimensions::MEDIUM);
    }

    #[test]
    fn test_lazy_consumes_no_id() {
        let factory = CartonFactory::default();
        let _lazy = factory.lazy();
        assert_eq!(factory.next_id(), CartonId::from(0));
        assert_eq!(factory.live_instances(), 0);
    }

    #[test]
    fn test_failed_create_consumes_no_id() {
        let factory = CartonFactory::default();
        assert!(factory.create(Dimensions::new(-1, 1, 1)).is_err());
        assert_eq!(factory.next_id(), CartonId::from(0));
        assert_eq!(factory.live_instances(), 0);
    }

    #[test]
    fn test_reassign_ignores_encoded_id() {
        let factory = CartonFactory::default();
        let carton = factory
            .decode("{id: 42, is_open: false, size: {length: 1, width: 1, height: 1}}")
            .unwrap();
        assert_eq!(carton.id().unwrap(), CartonId::from(0));
    }

    #[test]
    fn test_adopt_keeps_encoded_id() {
        let factory = CartonFactory::new(CartonOptions {
            id_policy: IdPolicy::Adopt,
            ..Default::default()
        })
        .unwrap();
        let carton = factory
            .decode("{id: 42, is_open: false, size: {length: 1, width: 1, height: 1}}")
            .unwrap();
        assert_eq!(carton.id().unwrap(), CartonId::from(42));
        assert_eq!(factory.next_id(), CartonId::from(43));

        let without_id = factory
            .decode("{size: {length: 1, width: 1, height: 1}}")
            .unwrap();
        assert_eq!(without_id.id().unwrap(), CartonId::from(43));
    }

    #[test]
    fn test_failed_decode_consumes_no_id() {
        let factory = CartonFactory::default();
        assert!(factory.decode("{size: {length: 1}}").is_err());
        assert!(factory.decode("{size: {length: 1, width: 1, height: 1}} x").is_err());
        assert_eq!(factory.next_id(), CartonId::from(0));
        assert_eq!(factory.live_instances(), 0);
    }

    #[test]
    fn test_decode_all() {
        let factory = CartonFactory::default();
        let cartons = factory
            .decode_all(
                "{is_open: true, size: {length: 1, width: 1, height: 1}}\n\
                 {size: {length: 2, width: 2, height: 2}}\n",
            )
            .unwrap();
        assert_eq!(cartons.len(), 2);
        assert!(!cartons[0].is_closed().unwrap());
        assert!(cartons[1].is_closed().unwrap());
        assert!(factory.decode_all("   ").unwrap().is_empty());
    }

    #[test]
    fn test_decode_all_is_all_or_nothing() {
        let factory = CartonFactory::default();
        let result = factory.decode_all(
            "{size: {length: 1, width: 1, height: 1}} {size: {length: 0, width: 1, height: 1}}",
        );
        assert!(matches!(result, Err(CartonError::InvalidDimensions(_))));
        assert_eq!(factory.next_id(), CartonId::from(0));
        assert_eq!(factory.live_instances(), 0);
    }

    #[test]
    fn test_exhausted_counter_fails_create_and_decode() {
        let factory = CartonFactory::new(CartonOptions {
            first_id: CartonId::from(u64::MAX),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(factory.create_default().unwrap_err(), CartonError::IdsExhausted);
        assert_eq!(
            factory
                .decode("{size: {length: 1, width: 1, height: 1}}")
                .unwrap_err(),
            CartonError::IdsExhausted
        );
        assert_eq!(factory.next_id(), CartonId::from(u64::MAX));
        assert_eq!(factory.live_instances(), 0);
    }

    #[test]
    fn test_clones_share_counters() {
        let factory = CartonFactory::default();
        let other = factory.clone();
        let _a = factory.create_default().unwrap();
        let b = other.create_default().unwrap();
        assert_eq!(b.id().unwrap(), CartonId::from(1));
        assert_eq!(factory.live_instances(), 2);
    }
}
