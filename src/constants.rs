//######################################################################################################################
// Environment variables

/// Filter directive for the logger, e.g. "debug" or "fibonacci=trace"
pub const ENV_FIBONACCI_LOG: &str = "FIBONACCI_LOG";

//######################################################################################################################
// Output

pub const HEADER: &str = "TypeScript Fibonacci:";

/// Index used when none is given on the command line
pub const DEFAULT_INDEX: i64 = 10;

/// Largest index whose Fibonacci number fits into an `i64`
pub const MAX_INDEX: i64 = 92;
