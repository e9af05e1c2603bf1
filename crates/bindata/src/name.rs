// Copyright (c) Contributors to the bindata project.
// SPDX-License-Identifier: Apache-2.0

//! Conversion of asset paths into Go identifiers.

use unicode_properties::{GeneralCategory, GeneralCategoryGroup, UnicodeGeneralCategory};

use crate::{Error, Result};

#[cfg(test)]
#[path = "./name_test.rs"]
mod name_test;

/// Build the function name for an asset path.
///
/// Letters and decimal digits are kept, every `/` upper-cases the character
/// that follows it and anything else is dropped. The result is prefixed with
/// `asset_prefix`, and with `_` when it would otherwise start with a digit.
///
/// ```
/// assert_eq!(
///     bindata::normalize("bindata", "testdata/dupname/foo_bar").unwrap(),
///     "bindataTestdataDupnameFoobar"
/// );
/// ```
pub fn normalize(asset_prefix: &str, path: &str) -> Result<String> {
    let camel = camel_case(path);
    if camel.is_empty() {
        return Err(Error::InvalidIdentifier(path.to_string()));
    }

    let mut ident = String::with_capacity(asset_prefix.len() + camel.len() + 1);
    ident.push_str(asset_prefix);
    ident.push_str(&camel);

    if ident.starts_with(is_decimal_digit) {
        ident.insert(0, '_');
    }
    Ok(ident)
}

fn camel_case(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    let mut up = true;

    for c in path.chars() {
        if is_ident_char(c) {
            if up {
                out.push(to_upper(c));
                up = false;
            } else {
                out.push(c);
            }
        } else if c == '/' {
            up = true;
        }
    }
    out
}

/// Characters Go accepts in an identifier, apart from `_`.
fn is_ident_char(c: char) -> bool {
    matches!(c.general_category_group(), GeneralCategoryGroup::Letter) || is_decimal_digit(c)
}

fn is_decimal_digit(c: char) -> bool {
    matches!(c.general_category(), GeneralCategory::DecimalNumber)
}

/// Single character upper case mapping; characters whose upper case form
/// expands to several characters (`ß`) are kept as they are.
fn to_upper(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}
