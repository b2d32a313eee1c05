//! # Parsing Utilities
//!
//! Combinators shared by the framing and field parsers. NMEA fields are always handed to a
//! parser in isolation, so a field only counts as valid when the parser used all of it.

use nom::{
    Err, Input, Mode, OutputMode, PResult, Parser,
    error::{ErrorKind, ParseError},
};

/// Ensures that the parser consumes all input.
///
/// Runs `f` and fails with error kind `e` if anything is left over.
///
/// # Examples
///
/// ```rust
/// use nmea0183_codec::parsing::consumed;
/// use nom::{IResult, Parser, character::complete::digit1, error::ErrorKind};
///
/// let mut parser = consumed(digit1, ErrorKind::Eof);
/// let result: IResult<_, _> = parser.parse("0815");
/// assert_eq!(result, Ok(("", "0815")));
///
/// // Trailing garbage is rejected instead of silently ignored
/// let result: IResult<_, _> = parser.parse("0815x");
/// assert!(result.is_err());
/// ```
pub fn consumed<I, E: ParseError<I>, F>(
    f: F,
    e: ErrorKind,
) -> impl Parser<I, Output = <F as Parser<I>>::Output, Error = E>
where
    I: Input,
    F: Parser<I, Error = E>,
{
    Consumed { f, e }
}

struct Consumed<F> {
    f: F,
    e: ErrorKind,
}

impl<I, F> Parser<I> for Consumed<F>
where
    I: Input,
    F: Parser<I>,
{
    type Output = <F as Parser<I>>::Output;
    type Error = <F as Parser<I>>::Error;

    fn process<OM: OutputMode>(&mut self, i: I) -> PResult<OM, I, Self::Output, Self::Error> {
        let (i, o) = self.f.process::<OM>(i)?;

        if i.input_len() != 0 {
            return Err(Err::Error(OM::Error::bind(|| {
                <F as Parser<I>>::Error::from_error_kind(i, self.e)
            })));
        }

        Ok((i, o))
    }
}
