//! Defines the `Error` type for the interactome library

use std::error::Error;
use std::fmt;
use std::result;

pub type Result<T> = result::Result<T, InteractomeError>;

#[derive(Clone, Debug)]
pub enum InteractomeError {

    /// Represents an operation that requires a fitted dataset, invoked before `fit`
    NotFitted,

    /// Represents an operation the model does not supply. Significance values are
    /// optional; a model without them reports this error.
    NotImplemented,

    /// Represents a label that was present multiple times in a situation where it should
    /// only have been present once
    DuplicateLabel,

    /// Represents a label that was looked up in an index that does not contain it.
    /// The value in the tuple is the missing label.
    UnknownLabel(String),

    /// A general error with the given description
    General(String),

    /// An unknown error condition
    Unknown

}

impl Error for InteractomeError {

    fn description(&self) -> &str {
        match self {
            &InteractomeError::NotFitted => "No dataset has been fitted",
            &InteractomeError::NotImplemented => "The operation is not supplied by this model",
            &InteractomeError::DuplicateLabel => "A label was encountered twice",
            &InteractomeError::UnknownLabel(_) => "A label was not present in the index",
            &InteractomeError::General(ref err) => err.as_str(),
            &InteractomeError::Unknown => "An unknown error occured"
        }
    }

    fn cause(&self) -> Option<&Error> {
        None
    }

}

impl fmt::Display for InteractomeError {

    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.description())
    }

}
