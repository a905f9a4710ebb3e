/// Line splitting and argument parsers shared by the OBJ and MTL readers
use nom::{
    branch::alt,
    bytes::complete::{take_till, take_till1},
    character::complete::{char, i64 as integer, space0, space1},
    combinator::{all_consuming, eof, opt, peek},
    multi::many1,
    number::complete::double,
    sequence::{preceded, terminated, tuple},
    IResult,
};

const BYTE_ORDER_MARK: char = '\u{feff}';

/// A non-blank, non-comment line split into keyword and arguments
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Directive<'a> {
    /// 1-based line number in the source file
    pub line: usize,
    pub keyword: &'a str,
    pub args: &'a str,
}

/// Split a raw line. Returns `None` for blank lines and `#` comments.
///
/// `index` is the 0-based position of the line; the first line may carry a
/// byte-order mark.
pub(crate) fn split_directive(index: usize, raw: &str) -> Option<Directive<'_>> {
    let raw = if index == 0 {
        raw.trim_start_matches(BYTE_ORDER_MARK)
    } else {
        raw
    };
    let line = raw.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let (keyword, args) = line
        .split_once(|c: char| c.is_whitespace())
        .unwrap_or((line, ""));

    Some(Directive {
        line: index + 1,
        keyword,
        args: args.trim_start(),
    })
}

/// A number that ends at whitespace or end of input ("1.0abc" is rejected)
fn number(input: &str) -> IResult<&str, f64> {
    preceded(space0, terminated(double, peek(alt((space1, eof)))))(input)
}

/// First whitespace-delimited token, e.g. a material name or a file name
pub(crate) fn parse_name(input: &str) -> IResult<&str, &str> {
    preceded(space0, take_till1(|c: char| c.is_whitespace()))(input)
}

/// Three leading numbers; anything after them is left unconsumed
pub(crate) fn parse_triple(input: &str) -> IResult<&str, (f64, f64, f64)> {
    tuple((number, number, number))(input)
}

/// Exactly three numbers
pub(crate) fn parse_exact_triple(input: &str) -> IResult<&str, (f64, f64, f64)> {
    all_consuming(terminated(parse_triple, space0))(input)
}

/// A face reference such as `7`, `7/2` or `7//3`; only the vertex index is kept
fn face_ref(input: &str) -> IResult<&str, i64> {
    preceded(
        space0,
        terminated(
            integer,
            terminated(
                opt(preceded(char('/'), take_till(|c: char| c.is_whitespace()))),
                peek(alt((space1, eof))),
            ),
        ),
    )(input)
}

/// Every vertex index of an `f` line, as written (1-based)
pub(crate) fn parse_face_refs(input: &str) -> IResult<&str, Vec<i64>> {
    all_consuming(terminated(many1(face_ref), space0))(input)
}
