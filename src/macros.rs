//! Logging shims.
//!
//! With the `logging` feature these forward to the `log` crate; without it
//! they expand to nothing, so the arguments are never evaluated.

#[allow(unused_macros)]
macro_rules! debug {
    ($($tt:tt)*) => {
        #[cfg(feature = "logging")]
        {
            log::debug!($($tt)*);
        }
    };
}

#[allow(unused_macros)]
macro_rules! trace {
    ($($tt:tt)*) => {
        #[cfg(feature = "logging")]
        {
            log::trace!($($tt)*);
        }
    };
}
