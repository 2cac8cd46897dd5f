/// Precision multiplier for the reward-per-token accumulator (1e18).
pub const SCALE: u128 = 1_000_000_000_000_000_000;

/// Failure modes of the checked ledger arithmetic.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ArithmeticError {
    Overflow,
    Underflow,
    DivideByZero,
}

pub fn add(x: u128, y: u128) -> Result<u128, ArithmeticError> {
    x.checked_add(y).ok_or(ArithmeticError::Overflow)
}

pub fn sub(x: u128, y: u128) -> Result<u128, ArithmeticError> {
    x.checked_sub(y).ok_or(ArithmeticError::Underflow)
}

/// Multiply, rejecting any product that does not divide back to `x`.
pub fn mul(x: u128, y: u128) -> Result<u128, ArithmeticError> {
    if y == 0 {
        return Ok(0);
    }
    let product = x.wrapping_mul(y);
    if product / y != x {
        return Err(ArithmeticError::Overflow);
    }
    Ok(product)
}

/// `x * y / SCALE`, rounded down, without forming the full product.
///
/// Both operands are split around `SCALE`, so the only way to fail is a
/// result that does not fit in `u128` itself.
pub fn mul_scaled(x: u128, y: u128) -> Result<u128, ArithmeticError> {
    let (xq, xr) = (x / SCALE, x % SCALE);
    let (yq, yr) = (y / SCALE, y % SCALE);

    let whole = mul(mul(xq, yq)?, SCALE)?;
    let cross = add(mul(xq, yr)?, mul(xr, yq)?)?;
    // xr, yr < 1e18, so their product stays below 1e36.
    let frac = (xr * yr) / SCALE;

    add(add(whole, cross)?, frac)
}

pub fn div(x: u128, y: u128) -> Result<u128, ArithmeticError> {
    if y == 0 {
        return Err(ArithmeticError::DivideByZero);
    }
    Ok(x / y)
}

pub fn min_u64(a: u64, b: u64) -> u64 {
    if a < b {
        a
    } else {
        b
    }
}

/// Ledger amount -> token amount. Token contracts speak `i128`.
pub fn to_token_amount(amount: u128) -> Result<i128, ArithmeticError> {
    i128::try_from(amount).map_err(|_| ArithmeticError::Overflow)
}

/// Token balance -> ledger amount. A negative balance is never valid here.
pub fn from_token_amount(amount: i128) -> Result<u128, ArithmeticError> {
    u128::try_from(amount).map_err(|_| ArithmeticError::Underflow)
}
