//! Length/width/height triple describing a carton or an item.

use std::fmt;
use std::str::FromStr;

use carton_shared::codec::{Reader, ValueWriter};
use carton_shared::constants::fields::dimensions as fields;
use carton_shared::errors::{CartonError, CartonResult, ParseError};
use serde::{Deserialize, Serialize};

/// Rectangular extent of a carton or of the item stored in it.
///
/// Values are not validated on construction or mutation. Consumers call
/// [`Dimensions::validate`] at the point where positivity matters.
///
/// # Example
///
/// ```
/// use carton::Dimensions;
///
/// let d = Dimensions::new(10, 20, 30);
/// assert_eq!(d.volume(), 6000);
/// assert_eq!(d.to_string(), "{length: 10, width: 20, height: 30}");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimensions {
    length: i32,
    width: i32,
    height: i32,
}

impl Dimensions {
    pub const SMALL: Dimensions = Dimensions::new(10, 10, 10);
    pub const MEDIUM: Dimensions = Dimensions::new(20, 20, 10);
    pub const LARGE: Dimensions = Dimensions::new(30, 25, 20);

    pub const fn new(length: i32, width: i32, height: i32) -> Self {
        Self {
            length,
            width,
            height,
        }
    }

    #[inline]
    pub const fn length(&self) -> i32 {
        self.length
    }

    #[inline]
    pub const fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub const fn height(&self) -> i32 {
        self.height
    }

    pub fn set_length(&mut self, length: i32) {
        self.length = length;
    }

    pub fn set_width(&mut self, width: i32) {
        self.width = width;
    }

    pub fn set_height(&mut self, height: i32) {
        self.height = height;
    }

    /// Product of the three fields. Wide enough that it cannot overflow.
    pub fn volume(&self) -> i128 {
        i128::from(self.length) * i128::from(self.width) * i128::from(self.height)
    }

    /// All three fields strictly positive.
    pub fn is_valid(&self) -> bool {
        self.length > 0 && self.width > 0 && self.height > 0
    }

    pub fn validate(&self) -> CartonResult<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(CartonError::InvalidDimensions(self.to_string()))
        }
    }

    /// Whether `self` fits on the floor of `container` (height is ignored).
    pub fn fits_footprint_of(&self, container: &Dimensions) -> bool {
        self.length <= container.length && self.width <= container.width
    }

    pub fn encode(&self) -> String {
        self.to_string()
    }

    /// Decodes exactly one value; trailing text is rejected.
    ///
    /// Positivity is not checked here.
    pub fn decode(text: &str) -> CartonResult<Self> {
        let mut reader = Reader::new(text);
        let dimensions = Self::read(&mut reader)?;
        reader.finish()?;
        Ok(dimensions)
    }

    /// Reads one value at the reader's cursor.
    pub fn read(reader: &mut Reader<'_>) -> Result<Self, ParseError> {
        let (mut length, mut width, mut height) = (None, None, None);
        reader.read_fields(|name, r| {
            match name {
                fields::LENGTH => length = Some(r.read_int(fields::LENGTH)?),
                fields::WIDTH => width = Some(r.read_int(fields::WIDTH)?),
                fields::HEIGHT => height = Some(r.read_int(fields::HEIGHT)?),
                other => return Err(ParseError::UnknownValue(other.to_string())),
            }
            Ok(())
        })?;

        Ok(Self {
            length: length.ok_or(ParseError::MissingField(fields::LENGTH))?,
            width: width.ok_or(ParseError::MissingField(fields::WIDTH))?,
            height: height.ok_or(ParseError::MissingField(fields::HEIGHT))?,
        })
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut writer = ValueWriter::begin(f)?;
        writer.field(fields::LENGTH, self.length)?;
        writer.field(fields::WIDTH, self.width)?;
        writer.field(fields::HEIGHT, self.height)?;
        writer.finish()
    }
}

impl FromStr for Dimensions {
    type Err = CartonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

impl From<(i32, i32, i32)> for Dimensions {
    fn from((length, width, height): (i32, i32, i32)) -> Self {
        Self::new(length, width, height)
    }
}
