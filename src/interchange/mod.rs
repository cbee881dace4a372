//! Interchange boundary between task records and external textual formats.
//!
//! Conversion failures at this boundary are recoverable: the fallible entry
//! points report a typed error, and the lenient entry point substitutes a
//! fallback record carrying the error status so callers never face a fatal
//! fault.

mod json;

pub use json::{
    record_from_json, record_to_json, try_record_from_json, ConversionError, ConversionResult,
};
