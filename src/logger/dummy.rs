// Stand-ins for the `log` macros when the feature is off.

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {};
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {};
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {};
}

#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {};
}
