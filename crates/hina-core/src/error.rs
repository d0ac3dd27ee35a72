use std::path::PathBuf;
use std::string::FromUtf8Error;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HinaError {
    /// Represents a missing input file, for example a carrier image that does not exist
    #[error("Input file not found: {0}")]
    InputNotFound(PathBuf),

    /// Represents an unsupported carrier media. For example, a Movie file is not supported
    #[error("Media format is not supported")]
    UnsupportedMedia,

    /// Represents an invalid carrier image media. For example, a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia,

    /// Represents a decoded bit-plane that carries a record header but no end marker
    #[error("No end marker found in the decoded data")]
    MissingEndMarker,

    /// Represents a decoded record that carries no file name marker
    #[error("No file name marker found in the decoded data")]
    MissingNameMarker,

    /// Represents a payload that does not fit into the selected channels of the carrier
    #[error(
        "Capacity Error: the payload needs {needed_bits} bits but the selected channels only carry {capacity_bits}"
    )]
    CapacityExceeded {
        needed_bits: usize,
        capacity_bits: usize,
    },

    /// Represents a bit sequence whose length is not a multiple of 8
    #[error("Bit count is not a multiple of 8")]
    IncompleteBits,

    /// Represents invalid UTF-8 data found where a file name was expected
    #[error("Invalid text data found inside a record")]
    InvalidTextData(#[from] FromUtf8Error),

    /// Represents an error caused by an invalid file name, for example an empty one
    #[error("A file with an invalid file name was provided")]
    InvalidFileName,

    /// Represents an unsupported channel selector, anything above 3
    #[error("Unsupported channel selector: {0}")]
    UnsupportedChannelSelector(u8),

    /// Represents a failure to read from input.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write a target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents a failure when encoding an image file.
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

impl HinaError {
    /// Process exit code the command line tool maps this error onto.
    pub fn exit_code(&self) -> i32 {
        match self {
            HinaError::InputNotFound(_) => -1,
            HinaError::MissingEndMarker => -2,
            HinaError::MissingNameMarker => -3,
            _ => 1,
        }
    }
}
