//! Destination for encoded integers

use alloc::vec::Vec;
use core::convert::Infallible;

/// Consumer of encoded integers in core order
pub trait EncodedSink {
    type Output;
    type Error;

    /// Accept the next encoded value
    fn accept(&mut self, value: u32) -> Result<(), Self::Error>;

    /// Finalize the sink and return its result
    fn finish(self) -> Result<Self::Output, Self::Error>;
}

impl EncodedSink for Vec<u32> {
    type Output = Vec<u32>;
    type Error = Infallible;

    fn accept(&mut self, value: u32) -> Result<(), Self::Error> {
        self.push(value);
        Ok(())
    }

    fn finish(self) -> Result<Self::Output, Self::Error> {
        Ok(self)
    }
}
