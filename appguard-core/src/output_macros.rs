//! Output macros for user-facing CLI text.
//!
//! Command results go through these macros rather than raw println so that
//! stdout stays clean of log formatting and the output style can change in
//! one place.

#[macro_export]
macro_rules! guard_print {
    ($($arg:tt)*) => {
        print!("{}", format!($($arg)*));
    }
}

#[macro_export]
macro_rules! guard_println {
    () => {
        println!();
    };
    ($($arg:tt)*) => {
        println!("{}", format!($($arg)*));
    }
}

#[macro_export]
macro_rules! guard_error {
    ($($arg:tt)*) => {
        eprintln!("{}", format!($($arg)*));
    }
}
