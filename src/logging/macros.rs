//! Global-style logging macros
//!
//! Every macro forwards to [`crate::logger()`]. The `…f!` forms take a format
//! string like `format!`; the plain and `…ln!` forms take any number of
//! `Display` operands and join them with spaces.
//!
//! Invoke them by path (`logfacade::info!`) when `std` or `tracing` macros of
//! the same name are also in scope.

#[doc(hidden)]
#[macro_export]
macro_rules! __operands {
    ($($arg:expr),* $(,)?) => {
        &[$(&$arg as &dyn ::std::fmt::Display),*]
    };
}

/// Log the operands at `Debug`
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => { $crate::logger().debug($crate::__operands!($($arg)*)) };
}

#[macro_export]
macro_rules! debugf {
    ($($arg:tt)+) => { $crate::logger().debugf(::std::format_args!($($arg)+)) };
}

#[macro_export]
macro_rules! debugln {
    ($($arg:tt)*) => { $crate::logger().debugln($crate::__operands!($($arg)*)) };
}

/// Log the operands at `Info`
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => { $crate::logger().info($crate::__operands!($($arg)*)) };
}

#[macro_export]
macro_rules! infof {
    ($($arg:tt)+) => { $crate::logger().infof(::std::format_args!($($arg)+)) };
}

#[macro_export]
macro_rules! infoln {
    ($($arg:tt)*) => { $crate::logger().infoln($crate::__operands!($($arg)*)) };
}

/// Log the operands at `Warn`
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => { $crate::logger().warn($crate::__operands!($($arg)*)) };
}

#[macro_export]
macro_rules! warnf {
    ($($arg:tt)+) => { $crate::logger().warnf(::std::format_args!($($arg)+)) };
}

#[macro_export]
macro_rules! warnln {
    ($($arg:tt)*) => { $crate::logger().warnln($crate::__operands!($($arg)*)) };
}

#[macro_export]
macro_rules! warning {
    ($($arg:tt)*) => { $crate::logger().warning($crate::__operands!($($arg)*)) };
}

#[macro_export]
macro_rules! warningf {
    ($($arg:tt)+) => { $crate::logger().warningf(::std::format_args!($($arg)+)) };
}

#[macro_export]
macro_rules! warningln {
    ($($arg:tt)*) => { $crate::logger().warningln($crate::__operands!($($arg)*)) };
}

/// Log the operands at `Error`
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => { $crate::logger().error($crate::__operands!($($arg)*)) };
}

#[macro_export]
macro_rules! errorf {
    ($($arg:tt)+) => { $crate::logger().errorf(::std::format_args!($($arg)+)) };
}

#[macro_export]
macro_rules! errorln {
    ($($arg:tt)*) => { $crate::logger().errorln($crate::__operands!($($arg)*)) };
}

/// Log at `Panic` and unwind with the same message
#[macro_export]
macro_rules! panic {
    ($($arg:tt)*) => { $crate::logger().panic($crate::__operands!($($arg)*)) };
}

#[macro_export]
macro_rules! panicf {
    ($($arg:tt)+) => { $crate::logger().panicf(::std::format_args!($($arg)+)) };
}

#[macro_export]
macro_rules! panicln {
    ($($arg:tt)*) => { $crate::logger().panicln($crate::__operands!($($arg)*)) };
}

/// Log at `Fatal` and exit the process with status 1
#[macro_export]
macro_rules! fatal {
    ($($arg:tt)*) => { $crate::logger().fatal($crate::__operands!($($arg)*)) };
}

#[macro_export]
macro_rules! fatalf {
    ($($arg:tt)+) => { $crate::logger().fatalf(::std::format_args!($($arg)+)) };
}

#[macro_export]
macro_rules! fatalln {
    ($($arg:tt)*) => { $crate::logger().fatalln($crate::__operands!($($arg)*)) };
}

/// Raw, ungated write of the operands back to back
#[macro_export]
macro_rules! print {
    ($($arg:tt)*) => { $crate::logger().print($crate::__operands!($($arg)*)) };
}

#[macro_export]
macro_rules! printf {
    ($($arg:tt)+) => { $crate::logger().printf(::std::format_args!($($arg)+)) };
}

#[macro_export]
macro_rules! println {
    ($($arg:tt)*) => { $crate::logger().println($crate::__operands!($($arg)*)) };
}
