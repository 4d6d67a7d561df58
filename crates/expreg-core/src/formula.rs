use crate::error::{ExpRegError, ExpRegResult};
use crate::output::Output;
use crate::stats::LinReg;
use std::str::FromStr;

/// Length of the variable tag in front of the slope, as in `X0*`.
const VAR_TAG_LEN: usize = 3;

/// Reads a regression report line of the form `Predicted = <a> + <var>*<b>`.
///
/// The line must hold exactly five whitespace-separated tokens. Only the numbers are
/// checked; `Predicted`, `=` and `+` are taken on trust. The coefficients come back as a
/// linear [`Output`] so they can be exponentiated like a fresh fit.
pub fn parse_formula(text: &str) -> ExpRegResult<Output> {
    parse_coefficients(text).map(Output::Linear)
}

fn parse_coefficients(text: &str) -> ExpRegResult<LinReg> {
    let invalid = || ExpRegError::InvalidFormula(text.to_string());

    let members: Vec<&str> = text.split_whitespace().collect();
    if members.len() != 5 {
        return Err(invalid());
    }
    let intercept: f64 = members[2].parse().map_err(|_| invalid())?;
    let slope: f64 =
        members[4].get(VAR_TAG_LEN..).ok_or_else(invalid)?.parse().map_err(|_| invalid())?;

    Ok(LinReg { intercept, slope })
}

impl FromStr for LinReg {
    type Err = ExpRegError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_coefficients(s)
    }
}
