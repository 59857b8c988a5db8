//! A Monte Carlo model of the closest-to-the-pin golf side bet. Maps qualitative player
//! attributes onto shot-distance distributions, simulates a large number of contests and
//! prices each player's win chance as an American moneyline.

pub mod gaussian;
pub mod interp;
pub mod mc;
pub mod model;
pub mod moneyline;
pub mod print;
pub mod profile;

#[cfg(test)]
pub(crate) mod testing;

#[doc = include_str!("../README.md")]
#[cfg(doc)]
fn readme() {}
