/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Logging shim used by the runigram crates.
//!
//! With the `log` feature the macros here are the ones from the `log` crate,
//! without it they expand to code that is never run, so arguments are still
//! type checked but nothing is formatted.

#[cfg(feature = "log")]
pub use log::{debug, error, info, trace, warn};

// #[macro_export] is required to make macros works across crates
// but it always put the macro in the crate root.
// #[doc(hidden)] + "pub use" is a workaround to namespace a macro.
#[cfg(not(feature = "log"))]
pub use crate::{
    __debug as debug, __error as error, __info as info, __trace as trace, __warn as warn
};

#[doc(hidden)]
#[macro_export]
macro_rules! __error {
    ($($arg:tt)+) => {
        if false {
            let _ = ::std::format!($($arg)+);
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __warn {
    ($($arg:tt)+) => {
        if false {
            let _ = ::std::format!($($arg)+);
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __info {
    ($($arg:tt)+) => {
        if false {
            let _ = ::std::format!($($arg)+);
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __debug {
    ($($arg:tt)+) => {
        if false {
            let _ = ::std::format!($($arg)+);
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __trace {
    ($($arg:tt)+) => {
        if false {
            let _ = ::std::format!($($arg)+);
        }
    };
}
