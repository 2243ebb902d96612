// Create the Error, ErrorKind, ResultExt, and Result types.
// Other modules `use crate::errors::*;` to get at them.
use error_chain::error_chain;

error_chain! {
    errors {
        InvalidDimensions(width: usize, height: usize) {
            description("invalid maze dimensions")
            display("invalid maze dimensions {}x{}: width and height must both be at least 1 and their product must fit in usize", width, height)
        }
    }
}
