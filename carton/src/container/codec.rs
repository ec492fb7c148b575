//! Text form of a whole carton.
//!
//! ```text
//! {id: 3, is_open: true, item: {length: 5, width: 5, height: 5}, size: {length: 10, width: 10, height: 10}}
//! ```
//!
//! `item` is omitted for an empty carton. Decoding accepts fields in any
//! order; the last occurrence of a repeated field wins.

use std::fmt;

use carton_shared::codec::{Reader, ValueWriter};
use carton_shared::constants::fields::carton as fields;
use carton_shared::errors::{CartonResult, ParseError};

use super::state::CartonState;
use crate::dimensions::Dimensions;
use crate::types::CartonId;

impl fmt::Display for CartonState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut writer = ValueWriter::begin(f)?;
        writer.field(fields::ID, self.id)?;
        writer.bool_field(fields::IS_OPEN, self.is_open)?;
        if let Some(item) = &self.item {
            writer.field(fields::ITEM, item)?;
        }
        writer.field(fields::SIZE, self.size)?;
        writer.finish()
    }
}

/// Fields of one encoded carton, before any lifecycle rule is applied.
#[derive(Debug, Default)]
pub(crate) struct DecodedFields {
    pub(crate) id: Option<CartonId>,
    is_open: bool,
    item: Option<Dimensions>,
    size: Option<Dimensions>,
}

impl DecodedFields {
    /// Reads one `{...}` value at the cursor.
    pub(crate) fn read(reader: &mut Reader<'_>) -> Result<Self, ParseError> {
        let mut decoded = Self::default();
        reader.read_fields(|name, r| {
            match name {
                fields::ID => decoded.id = Some(CartonId::from(r.read_int::<u64>(fields::ID)?)),
                fields::IS_OPEN => decoded.is_open = r.read_bool(fields::IS_OPEN)?,
                fields::ITEM => decoded.item = Some(Dimensions::read(r)?),
                fields::SIZE => decoded.size = Some(Dimensions::read(r)?),
                other => return Err(ParseError::UnknownValue(other.to_string())),
            }
            Ok(())
        })?;
        Ok(decoded)
    }

    /// Replays the fields through the lifecycle rules: open, put the item
    /// (if any), then close unless the carton was encoded open.
    ///
    /// The returned state carries `id` regardless of the encoded one.
    pub(crate) fn into_state(self, id: CartonId) -> CartonResult<CartonState> {
        let size = self.size.ok_or(ParseError::MissingField(fields::SIZE))?;
        size.validate()?;

        let mut state = CartonState::new(id, size);
        state.open()?;
        if let Some(item) = self.item {
            state.put_item(item)?;
        }
        if !self.is_open {
            state.close()?;
        }
        Ok(state)
    }
}
