//! Per-type random literal generation.
//!
//! Each generator returns text that is already valid inside an `INSERT ...
//! VALUES` list. [`generate_literal`] dispatches on the column's type family.

use rand::Rng;

use seedgen_model::{
    ColumnDescriptor, DATE_FORMAT, DateRange, DecimalStrategy, GenerateOptions, Result, TypeFamily,
};

use crate::datetime::random_date;
use crate::literal::{quote_string, random_letters};

/// Inclusive bounds, in hundredths, of the fixed decimal rule.
pub const DECIMAL_HUNDREDTHS: (u32, u32) = (155, 389);

pub const SMALLINT_RANGE: (i32, i32) = (-32_767, 32_767);

/// Inclusive bounds of the `int` rule. The upper bound is one past
/// `i32::MAX` and can overflow a SQL Server `int` column; it is kept
/// as the historical range of this generator.
pub const INT_RANGE: (i64, i64) = (-2_147_483_648, 2_147_483_648);

/// Largest precision SQL Server accepts for `decimal`.
const MAX_DECIMAL_PRECISION: u32 = 38;

/// Digits drawn at once for the integer part of a declared decimal.
const MAX_INTEGER_CHUNK: u32 = 18;

/// Quoted string of exactly `length` random letters.
pub fn random_string<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    quote_string(&random_letters(rng, length))
}

/// Decimal in 1.55..=3.89 with exactly two fractional digits.
pub fn random_decimal<R: Rng + ?Sized>(rng: &mut R) -> String {
    let (low, high) = DECIMAL_HUNDREDTHS;
    let hundredths = rng.gen_range(low..=high);
    format!("{}.{:02}", hundredths / 100, hundredths % 100)
}

/// Non-negative decimal that fits `decimal(precision, scale)`.
///
/// The integer part has at most `precision - scale` digits and the
/// fractional part has exactly `scale` digits. A scale larger than the
/// precision is clamped to it.
pub fn random_declared_decimal<R: Rng + ?Sized>(
    rng: &mut R,
    precision: u32,
    scale: u32,
) -> String {
    let precision = precision.clamp(1, MAX_DECIMAL_PRECISION);
    let scale = scale.min(precision);
    let integer = random_integer_digits(rng, precision - scale);
    if scale == 0 {
        return integer;
    }
    let fraction: String = (0..scale)
        .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
        .collect();
    format!("{integer}.{fraction}")
}

/// Integer text with at most `digits` digits and no leading zeros.
fn random_integer_digits<R: Rng + ?Sized>(rng: &mut R, digits: u32) -> String {
    if digits == 0 {
        return "0".to_string();
    }
    let head_digits = digits.min(MAX_INTEGER_CHUNK);
    let head = rng.gen_range(0..10u64.pow(head_digits));
    let mut out = head.to_string();
    if head > 0 {
        for _ in head_digits..digits {
            out.push(char::from(b'0' + rng.gen_range(0..10u8)));
        }
    }
    out
}

/// Letters of `length` cast to `BINARY(length)`.
pub fn random_binary<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    format!(
        "CAST({} AS BINARY({length}))",
        quote_string(&random_letters(rng, length))
    )
}

pub fn random_smallint<R: Rng + ?Sized>(rng: &mut R) -> String {
    let (low, high) = SMALLINT_RANGE;
    rng.gen_range(low..=high).to_string()
}

pub fn random_int<R: Rng + ?Sized>(rng: &mut R) -> String {
    let (low, high) = INT_RANGE;
    rng.gen_range(low..=high).to_string()
}

/// Quoted `YYYY-MM-DD` date drawn from `range`.
pub fn random_date_literal<R: Rng + ?Sized>(rng: &mut R, range: &DateRange) -> String {
    quote_string(&random_date(rng, range).format(DATE_FORMAT).to_string())
}

/// Generate one literal for `column`.
///
/// Returns `Ok(None)` when the column's type has no generation rule; the
/// caller reports it and leaves the column out of the row.
///
/// # Errors
///
/// Returns `SeedgenError::MissingLength` for a character or binary column
/// without a positive maximum length.
pub fn generate_literal<R: Rng + ?Sized>(
    column: &ColumnDescriptor<'_>,
    options: &GenerateOptions,
    rng: &mut R,
) -> Result<Option<String>> {
    let literal = match column.data_type.family() {
        TypeFamily::Character => random_string(rng, column.required_length()?),
        TypeFamily::Binary => random_binary(rng, column.required_length()?),
        TypeFamily::Decimal => match (options.decimal, column.numeric_precision) {
            (DecimalStrategy::Declared, Some(precision)) if precision > 0 => {
                random_declared_decimal(rng, precision, column.numeric_scale.unwrap_or(0))
            }
            _ => random_decimal(rng),
        },
        TypeFamily::SmallInt => random_smallint(rng),
        TypeFamily::Int => random_int(rng),
        TypeFamily::Date => random_date_literal(rng, &options.date_range),
        TypeFamily::Unsupported => return Ok(None),
    };
    Ok(Some(literal))
}
