// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

//! Shared error types.

use std::error::Error;
use std::fmt;

#[macro_export]
/// Build a [TopoError] from a message that supports `to_string`
macro_rules! topo_error {
    ($($arg:tt)*) => {
        Err($crate::error::TopoError(format!($($arg)*)))?
    };
}

/// The `TopoError` is what should be returned in the case of an error
#[derive(Debug)]
pub struct TopoError(pub String);

impl fmt::Display for TopoError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Error: {}", self.0)
    }
}

impl Error for TopoError {}

/// The return type for fallible topology operations
pub type TopoResult<T> = Result<T, TopoError>;
