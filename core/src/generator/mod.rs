use rand::Rng;

use crate::*;
pub use random::*;

mod random;

pub trait FleetGenerator {
    /// Places a whole fleet on `board`, leaving existing cells untouched.
    fn generate<R: Rng + ?Sized>(&self, board: &mut Board, rng: &mut R) -> Result<()>;
}
