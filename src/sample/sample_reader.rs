use std::path::Path;
use std::fs::File;
use std::io::BufReader;

use super::sample_struct::{Sample, DEFAULT_DELIMITER};
use crate::error::{Error, Result};


/// A struct that returns [`Sample`].
/// Using this struct, one can read a delimited file to [`Sample`].
/// Each row has the form `id,label,feature_1,...,feature_F`
/// where the label and the features take value in `{0, 1}`.
/// # Example
/// The following code is a simple example to read a CSV file.
/// ```no_run
/// use minilearn::SampleReader;
/// let filename = "/path/to/csv/file.csv";
/// let sample = SampleReader::default()
///     .file(filename)
///     .has_header(true)
///     .read()
///     .unwrap();
/// ```
pub struct SampleReader<P> {
    file: Option<P>,
    has_header: bool,
    delimiter: char,
}


impl<P> Default for SampleReader<P> {
    fn default() -> Self {
        Self {
            file: None,
            has_header: false,
            delimiter: DEFAULT_DELIMITER,
        }
    }
}


impl<P> SampleReader<P> {
    /// Set the flag whether the file has the header row or not.
    /// Default is `false.`
    pub fn has_header(mut self, flag: bool) -> Self {
        self.has_header = flag;
        self
    }


    /// Set the field delimiter.
    /// Default is `','`.
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }
}


impl<P> SampleReader<P>
    where P: AsRef<Path>
{
    /// Set the file name.
    pub fn file(mut self, file: P) -> Self {
        self.file = Some(file);
        self
    }


    /// Reads the file based on the arguments,
    /// and returns `Result<Sample>`.
    /// This method consumes `self.`
    pub fn read(self) -> Result<Sample> {
        let file = self.file
            .ok_or_else(|| Error::InvalidParameter {
                name: "file",
                value: "None".to_string(),
                reason: "the file name is not set, use `SampleReader::file`",
            })?;
        let reader = BufReader::new(File::open(file)?);
        Sample::parse(reader, self.has_header, self.delimiter)
    }
}
