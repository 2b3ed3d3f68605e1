//! Canonical comparison keys for country and subdivision input.
//!
//! Every code lookup funnels its input through [normalize]: numbers become
//! their decimal form, text is trimmed and ASCII-uppercased, absent input
//! becomes the empty string. The empty string is never a valid key, so callers
//! treat it as "not found" without a separate error path.
//!
//! Names go through [normalize_name] instead, which uppercases the full
//! Unicode range. Codes never do: "ıt" must not fold into "IT".

use std::borrow::Cow;

/// A country or subdivision identifier as a caller supplied it: text, a
/// number (numeric ISO codes are often stored as integers), or nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeInput<'a> {
    Text(Cow<'a, str>),
    Number(i128),
    Absent,
}

impl<'a> From<&'a str> for CodeInput<'a> {
    fn from(value: &'a str) -> Self {
        CodeInput::Text(Cow::Borrowed(value))
    }
}

impl<'a> From<&'a String> for CodeInput<'a> {
    fn from(value: &'a String) -> Self {
        CodeInput::Text(Cow::Borrowed(value.as_str()))
    }
}

impl From<String> for CodeInput<'_> {
    fn from(value: String) -> Self {
        CodeInput::Text(Cow::Owned(value))
    }
}

macro_rules! number_input {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for CodeInput<'_> {
                fn from(value: $ty) -> Self {
                    CodeInput::Number(i128::from(value))
                }
            }
        )*
    };
}

number_input!(u8, u16, u32, u64, i8, i16, i32, i64);

impl From<usize> for CodeInput<'_> {
    fn from(value: usize) -> Self {
        // usize fits in i128 on every supported target.
        CodeInput::Number(value as i128)
    }
}

impl<'a, T> From<Option<T>> for CodeInput<'a>
where
    T: Into<CodeInput<'a>>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(CodeInput::Absent, Into::into)
    }
}

/// Trim and ASCII-uppercase text, render numbers in decimal. Absent input yields "".
pub fn normalize<'a>(input: impl Into<CodeInput<'a>>) -> String {
    match input.into() {
        CodeInput::Text(text) => text.trim().to_ascii_uppercase(),
        CodeInput::Number(number) => number.to_string(),
        CodeInput::Absent => String::new(),
    }
}

/// Comparison key for country and subdivision names: trimmed, Unicode uppercase.
pub fn normalize_name<'a>(input: impl Into<CodeInput<'a>>) -> String {
    match input.into() {
        CodeInput::Text(text) => text.trim().to_uppercase(),
        CodeInput::Number(number) => number.to_string(),
        CodeInput::Absent => String::new(),
    }
}

/// Left-pad with '0' to three characters ("4" -> "004"). Longer values are untouched.
pub fn pad_numeric(value: &str) -> Cow<'_, str> {
    let len = value.chars().count();
    if len >= 3 {
        Cow::Borrowed(value)
    } else {
        Cow::Owned(format!("{}{value}", "0".repeat(3 - len)))
    }
}

/// Syntactic shape of a normalized code, decided without consulting any table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodeShape {
    /// Exactly two ASCII letters.
    Alpha2,
    /// Exactly three ASCII letters.
    Alpha3,
    /// One or more ASCII digits.
    Numeric,
    /// Anything else, including names and the empty string.
    FreeText,
}

impl CodeShape {
    pub fn of(normalized: &str) -> Self {
        let all_letters = !normalized.is_empty()
            && normalized.bytes().all(|byte| byte.is_ascii_uppercase());
        if all_letters && normalized.len() == 2 {
            CodeShape::Alpha2
        } else if all_letters && normalized.len() == 3 {
            CodeShape::Alpha3
        } else if !normalized.is_empty() && normalized.bytes().all(|byte| byte.is_ascii_digit()) {
            CodeShape::Numeric
        } else {
            CodeShape::FreeText
        }
    }
}

/// A normalized value together with its shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedCode {
    value: String,
    shape: CodeShape,
}

impl NormalizedCode {
    pub fn new<'a>(input: impl Into<CodeInput<'a>>) -> Self {
        let value = normalize(input);
        let shape = CodeShape::of(&value);
        NormalizedCode { value, shape }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn shape(&self) -> CodeShape {
        self.shape
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

/// A full subdivision code split on its first hyphen, both halves normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubdivisionCode {
    country: String,
    region: String,
    region_name: String,
}

impl SubdivisionCode {
    /// Split "<country>-<region>". Only the first hyphen separates; the region
    /// keeps any further hyphens. Returns None when there is no hyphen.
    pub fn parse(code: &str) -> Option<Self> {
        let (country, region) = code.trim().split_once('-')?;
        Some(SubdivisionCode {
            country: country.to_ascii_uppercase(),
            region: region.to_ascii_uppercase(),
            region_name: region.to_uppercase(),
        })
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    /// Region part as a name key, for input like "US-California" or "JP-tôkyô".
    pub fn region_name(&self) -> &str {
        &self.region_name
    }
}

/// Region part of a stored full code, as-is (no normalization).
pub(crate) fn region_suffix(full_code: &str) -> &str {
    full_code
        .split_once('-')
        .map_or("", |(_, region)| region)
}
