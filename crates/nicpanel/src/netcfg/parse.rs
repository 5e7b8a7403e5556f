//! Text extraction primitives for tool output.
//!
//! Tool output is not a stable format. Everything here returns `Option`
//! or an empty collection when the expected shape is missing; callers
//! turn that into "field unknown", never into an error.

use winnow::Parser;
use winnow::ascii::{Caseless, digit1, space0, space1};
use winnow::combinator::{alt, delimited, separated};
use winnow::token::{rest, take_till, take_while};

pub(crate) type PResult<T> = winnow::Result<T>;

/// A dotted quad of digit runs. Octet ranges are not checked here.
pub(crate) fn ipv4_token<'s>(input: &mut &'s str) -> PResult<&'s str> {
    (digit1, '.', digit1, '.', digit1, '.', digit1)
        .take()
        .parse_next(input)
}

fn is_addr_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

/// All IPv4-looking tokens in `text`, in order of appearance.
///
/// A token must not touch other digits or dots, so `1.2.3.4.5` and
/// version strings like `10.0.19045.1` yield nothing.
pub(crate) fn ipv4_tokens(text: &str) -> Vec<&str> {
    let mut found = Vec::new();
    let mut remaining = text;

    while !remaining.is_empty() {
        let mut probe = remaining;
        if let Ok(token) = ipv4_token(&mut probe)
            && !probe.starts_with(is_addr_char)
        {
            found.push(token);
            remaining = probe;
            continue;
        }

        let run = remaining
            .find(|c: char| !is_addr_char(c))
            .unwrap_or(remaining.len());
        let skip = if run == 0 {
            remaining.chars().next().map_or(1, char::len_utf8)
        } else {
            run
        };
        remaining = &remaining[skip..];
    }

    found
}

/// The IPv4 token at the very start of `text` after leading whitespace.
pub(crate) fn leading_ipv4(text: &str) -> Option<&str> {
    let mut input = text.trim_start();
    let token = ipv4_token(&mut input).ok()?;
    if input.starts_with(is_addr_char) {
        return None;
    }
    Some(token)
}

/// Byte offset of `needle` in `haystack`, ignoring ASCII case.
pub(crate) fn find_caseless(haystack: &str, needle: &str) -> Option<usize> {
    // ASCII lowercasing keeps byte offsets, so positions map back 1:1.
    haystack
        .to_ascii_lowercase()
        .find(&needle.to_ascii_lowercase())
}

/// The rest of the line following the first occurrence of `label`.
pub(crate) fn after_label<'t>(text: &'t str, label: &str) -> Option<&'t str> {
    let start = find_caseless(text, label)? + label.len();
    let tail = &text[start..];
    let line = tail.split('\n').next().unwrap_or(tail);
    Some(line.trim_end_matches('\r'))
}

/// The value after `label` and the next colon on the same line.
///
/// Handles padded labels such as `IPv4 Address. . . . : 10.0.0.2`.
pub(crate) fn labeled_value<'t>(text: &'t str, label: &str) -> Option<&'t str> {
    let line = after_label(text, label)?;
    let colon = line.find(':')?;
    Some(line[colon + 1..].trim())
}

/// The lines belonging to a labelled block.
///
/// The first element is the remainder of the label line. Continuation
/// lines follow until a blank line or the next labelled line (one that
/// contains a colon).
pub(crate) fn labeled_block<'t>(text: &'t str, label: &str) -> Option<Vec<&'t str>> {
    let start = find_caseless(text, label)? + label.len();
    let mut lines = text[start..].lines();

    let mut block = vec![lines.next().unwrap_or_default()];
    for line in lines {
        if line.trim().is_empty() || line.contains(':') {
            break;
        }
        block.push(line);
    }
    Some(block)
}

/// A case-insensitive yes/no flag at the start of `text`.
pub(crate) fn yes_no(text: &str) -> Option<bool> {
    fn flag(input: &mut &str) -> PResult<bool> {
        delimited(
            space0,
            alt((Caseless("yes").value(true), Caseless("no").value(false))),
            take_till(0.., |c: char| c.is_whitespace()).verify(|word: &str| word.is_empty()),
        )
        .parse_next(input)
    }

    let mut input = text;
    flag(&mut input).ok()
}

/// One row of the interface listing: admin state, link state, type, name.
pub(crate) fn interface_row<'s>(input: &mut &'s str) -> PResult<(&'s str, &'s str, &'s str)> {
    (
        space0,
        alt(("Enabled", "Disabled")),
        space1,
        alt(("Connected", "Disconnected")),
        space1,
        take_while(1.., |c: char| !c.is_whitespace()),
        space1,
        rest.map(str::trim_end).verify(|name: &str| !name.is_empty()),
    )
        .map(|(_, admin, _, link, _, _, _, name)| (admin, link, name))
        .parse_next(input)
}

fn csv_field<'s>(input: &mut &'s str) -> PResult<&'s str> {
    alt((
        delimited('"', take_till(0.., '"'), '"'),
        take_till(0.., ',').verify(|field: &str| !field.starts_with('"')),
    ))
    .parse_next(input)
}

/// One CSV record. Quoted fields may contain commas; escaped quotes are
/// not supported.
pub(crate) fn csv_record(line: &str) -> Option<Vec<&str>> {
    separated(1.., csv_field, ',').parse(line).ok()
}
