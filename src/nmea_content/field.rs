//! Declarative field tables.
//!
//! Each sentence is described by an ordered list of [`Field`] descriptors. The same table
//! drives decoding and encoding, so a sentence type only has to say *what* its fields are.

use crate::{Error, Raw, Result, nmea_content::Sentence};

/// Decodes `width` consecutive raw fields into the record.
pub type Decode<T> = fn(&mut T, &[&str]) -> Result<()>;

/// Appends exactly `width` fields for the record.
pub type Encode<T> = fn(&T, &mut Vec<String>);

/// One entry of a sentence's field table.
pub struct Field<T> {
    name: &'static str,
    width: usize,
    required: bool,
    kind: Kind<T>,
}

enum Kind<T> {
    Value { decode: Decode<T>, encode: Encode<T> },
    Literal(&'static str),
}

impl<T> Field<T> {
    /// A required field spanning `width` raw fields.
    pub const fn new(name: &'static str, width: usize, decode: Decode<T>, encode: Encode<T>) -> Self {
        Self {
            name,
            width,
            required: true,
            kind: Kind::Value { decode, encode },
        }
    }

    /// A fixed literal such as a unit suffix. On input the field may be empty or equal to
    /// `literal`; on output it is always `literal`.
    pub const fn literal(name: &'static str, literal: &'static str) -> Self {
        Self {
            name,
            width: 1,
            required: true,
            kind: Kind::Literal(literal),
        }
    }

    /// Marks a trailing field that may be missing from the field list altogether.
    pub const fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn is_required(&self) -> bool {
        self.required
    }
}

/// Number of raw fields a sentence must carry: the width of its required fields.
pub fn min_fields<T>(fields: &[Field<T>]) -> usize {
    fields
        .iter()
        .filter(|field| field.is_required())
        .map(Field::width)
        .sum()
}

/// Decodes `raw` by walking `T::FIELDS`.
///
/// Checks run in this order: type tag, field count, every field positionally, then fixed
/// literals, then the record's own cross-field invariants.
pub fn decode<T: Sentence>(raw: &Raw) -> Result<T> {
    let expected = T::SENTENCE_TYPE;
    if raw.sentence_type != expected.tag() {
        return Err(Error::TypeMismatch {
            expected,
            found: raw.sentence_type.clone(),
        });
    }

    let min = T::min_fields();
    if raw.fields.len() < min {
        return Err(Error::FieldCount {
            sentence: expected,
            expected: min,
            found: raw.fields.len(),
        });
    }

    let values: Vec<&str> = raw.fields.iter().map(String::as_str).collect();
    let mut record = T::default();
    let mut literals = Vec::new();
    let mut offset = 0;

    for field in T::FIELDS {
        let end = offset + field.width();
        // optional trailing fields that are absent keep their default
        if let Some(slice) = values.get(offset..end) {
            match &field.kind {
                Kind::Value { decode, .. } => decode(&mut record, slice)?,
                Kind::Literal(literal) => {
                    let value = slice.first().copied().unwrap_or_default();
                    literals.push((field.name(), *literal, value));
                }
            }
        }
        offset = end;
    }

    for (name, literal, value) in literals {
        if !value.is_empty() && value != literal {
            return Err(Error::Inconsistent {
                field: name,
                value: value.to_owned(),
                reason: "is not the expected unit",
            });
        }
    }

    record.validate()?;
    Ok(record)
}

/// Encodes `record` by walking `T::FIELDS`.
pub fn encode<T: Sentence>(record: &T) -> Raw {
    let mut fields = Vec::with_capacity(T::FIELDS.iter().map(Field::width).sum());

    for field in T::FIELDS {
        match &field.kind {
            Kind::Value { encode, .. } => encode(record, &mut fields),
            Kind::Literal(literal) => fields.push((*literal).to_owned()),
        }
    }

    Raw::new(T::SENTENCE_TYPE.tag(), fields)
}

/// A single-field entry backed by [`NmeaField`](crate::NmeaField).
macro_rules! field {
    ($name:literal => $member:ident) => {
        $crate::nmea_content::Field::new(
            $name,
            1,
            |record: &mut Self, values: &[&str]| {
                let value = values.first().copied().unwrap_or_default();
                record.$member = $crate::NmeaField::decode(value, $name)?;
                Ok(())
            },
            |record: &Self, out: &mut Vec<String>| {
                out.push($crate::NmeaField::encode(&record.$member))
            },
        )
    };
}

/// A value/hemisphere pair backed by [`Coordinate`](crate::Coordinate).
macro_rules! coordinate {
    ($name:literal => $member:ident) => {
        $crate::nmea_content::Field::new(
            $name,
            2,
            |record: &mut Self, values: &[&str]| {
                let [value, hemisphere] = values else {
                    return Err($crate::Error::invalid_field($name, &values.join(",")));
                };
                record.$member = $crate::Coordinate::parse_fields(value, hemisphere, $name)?;
                Ok(())
            },
            |record: &Self, out: &mut Vec<String>| {
                let value = record.$member.to_field();
                // a value without a field form is written as both fields empty
                let hemisphere = if value.is_empty() {
                    ""
                } else {
                    $crate::coords::Direction::symbol(record.$member.direction())
                };
                out.push(value);
                out.push(hemisphere.to_owned());
            },
        )
    };
}
