//! Form-style percent encoding for token fields.
//!
//! Everything except ASCII alphanumerics and `_ . - ~` is escaped, and a
//! space becomes `+`. `/` is escaped too, so a resource URI such as
//! `scope/registrations/dev1` is encoded as `scope%2Fregistrations%2Fdev1`.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters escaped by [`quote_plus`], minus the space which is rewritten to `+`.
const FORM: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'~')
    .remove(b' ');

/// Percent-encode `input`, turning spaces into `+`.
///
/// # Example
///
/// ```rust
/// use dps_tools::sas::quote_plus;
///
/// assert_eq!(quote_plus("a b/c+d"), "a+b%2Fc%2Bd");
/// ```
pub fn quote_plus(input: &str) -> String {
    // Literal spaces are the only unescaped byte outside the safe set.
    utf8_percent_encode(input, FORM).to_string().replace(' ', "+")
}

/// Encode ordered key/value pairs as `k1=v1&k2=v2`, preserving order.
pub fn encode_pairs<'a, I>(pairs: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    pairs
        .into_iter()
        .map(|(key, value)| format!("{}={}", quote_plus(key), quote_plus(value)))
        .collect::<Vec<_>>()
        .join("&")
}
