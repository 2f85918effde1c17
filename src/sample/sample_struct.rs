use std::path::Path;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::ops::Index;
use std::slice;

use fixedbitset::FixedBitSet;
use polars::prelude::*;

use super::instance::Instance;
use crate::common::checker;
use crate::error::{Error, Result};


/// The default delimiter of a row.
pub const DEFAULT_DELIMITER: char = ',';


/// Struct `Sample` holds a batch of instances.
/// Every instance of a `Sample` has the same number of features
/// and a `Sample` always has at least one instance.
#[derive(Debug, Clone)]
pub struct Sample {
    pub(super) instances: Vec<Instance>,
    pub(super) n_feature: usize,
}


impl Sample {
    /// Construct a new `Sample` from the given instances.
    /// Returns an error if `instances` is empty
    /// or the instances disagree on the number of features.
    pub fn new(instances: Vec<Instance>) -> Result<Self> {
        let refs = instances.iter().collect::<Vec<_>>();
        let n_feature = checker::instances(&refs)?;

        Ok(Self { instances, n_feature })
    }


    /// Read a delimited file to `Sample` type.
    /// Each row has the form `id,label,feature_1,...,feature_F`.
    pub fn from_csv<P>(file: P, has_header: bool) -> Result<Self>
        where P: AsRef<Path>,
    {
        let file = File::open(file)?;
        let reader = BufReader::new(file);
        Self::from_reader(reader, has_header)
    }


    /// Read rows of the form `id,label,feature_1,...,feature_F`
    /// from the given buffered reader.
    pub fn from_reader<R>(reader: R, has_header: bool) -> Result<Self>
        where R: BufRead,
    {
        Self::parse(reader, has_header, DEFAULT_DELIMITER)
    }


    pub(super) fn parse<R>(
        reader: R,
        has_header: bool,
        delimiter: char,
    ) -> Result<Self>
        where R: BufRead,
    {
        let skip = usize::from(has_header);

        let mut instances = Vec::new();
        for (i, line) in reader.lines().enumerate().skip(skip) {
            let line = line?;
            // Line numbers are 1-indexed in error messages.
            let lineno = i + 1;

            if line.trim().is_empty() { continue; }

            let mut fields = line.split(delimiter).map(str::trim);
            let id = fields.next()
                .filter(|id| !id.is_empty())
                .ok_or_else(|| Error::Parse {
                    line: lineno,
                    message: "missing instance identifier".to_string(),
                })?;
            let label = fields.next()
                .ok_or_else(|| Error::Parse {
                    line: lineno,
                    message: format!("instance `{id}` has no label"),
                })
                .and_then(|x| parse_value(x, lineno))?;
            let features = fields.map(|x| parse_value(x, lineno))
                .collect::<Result<Vec<_>>>()?;

            instances.push(Instance::new(id, label, &features)?);
        }

        Self::new(instances)
    }


    /// Convert `polars::DataFrame` and `polars::Series` into `Sample`.
    /// Each column of `data` is a feature and `target` holds the labels.
    /// The identifier of an instance is its row number.
    pub fn from_dataframe(data: DataFrame, target: Series) -> Result<Self> {
        let (n_sample, n_feature) = data.shape();

        if target.len() != n_sample {
            return Err(Error::InvalidParameter {
                name: "target",
                value: target.len().to_string(),
                reason: "the target length differs from the number of rows",
            });
        }

        let labels = binary_column(&target)?;
        let columns = data.get_columns()
            .iter()
            .map(binary_column)
            .collect::<Result<Vec<_>>>()?;

        let instances = labels.into_iter()
            .enumerate()
            .map(|(i, label)| {
                let mut bits = FixedBitSet::with_capacity(n_feature);
                for (f, column) in columns.iter().enumerate() {
                    bits.set(f, column[i]);
                }
                Instance::from_bits(i.to_string(), label, bits)
            })
            .collect::<Vec<_>>();

        Self::new(instances)
    }


    /// Returns the pair of the number of instances and
    /// the number of features.
    pub fn shape(&self) -> (usize, usize) {
        (self.instances.len(), self.n_feature)
    }


    /// Returns a slice of instances.
    pub fn instances(&self) -> &[Instance] {
        &self.instances[..]
    }


    /// Returns an iterator over the instances.
    pub fn iter(&self) -> slice::Iter<'_, Instance> {
        self.instances.iter()
    }


    /// Returns the number of instances labeled `1` and `0`, respectively.
    pub fn label_counts(&self) -> (usize, usize) {
        let refs = self.instances.iter().collect::<Vec<_>>();
        crate::common::statistics::count_labels(&refs)
    }
}


fn parse_value(x: &str, line: usize) -> Result<u8> {
    x.parse::<u8>()
        .map_err(|_| Error::Parse {
            line,
            message: format!("expected 0 or 1, got `{x}`"),
        })
}


fn binary_column(series: &Series) -> Result<Vec<bool>> {
    let name = series.name().to_string();
    let values = series.cast(&DataType::Float64)?;
    let values = values.f64()?;

    values.into_iter()
        .enumerate()
        .map(|(row, x)| {
            match x {
                Some(x) if x == 0f64 => Ok(false),
                Some(x) if x == 1f64 => Ok(true),
                _ => Err(Error::NonBinaryValue {
                    id: row.to_string(),
                    column: name.clone(),
                    value: format!("{x:?}"),
                }),
            }
        })
        .collect()
}


impl Index<usize> for Sample {
    type Output = Instance;
    fn index(&self, idx: usize) -> &Self::Output {
        &self.instances[idx]
    }
}


impl<'a> IntoIterator for &'a Sample {
    type Item = &'a Instance;
    type IntoIter = slice::Iter<'a, Instance>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn training_examples(bytes: &[u8], has_header: bool) -> Result<Sample> {
        let reader = BufReader::new(bytes);
        Sample::from_reader(reader, has_header)
    }

    #[test]
    fn test_from_reader_01() {
        let bytes = b"\
            a,1,1,0\n\
            b,1,1,1\n\
            c,0,0,0\n\
            d,0,0,1";
        let sample = training_examples(bytes, false).unwrap();
        assert_eq!(sample.shape(), (4, 2));
        assert_eq!(sample[2].id(), "c");
        assert_eq!(sample.label_counts(), (2, 2));
    }

    #[test]
    fn test_from_reader_02() {
        let bytes = b"\
            name,class,x,y,z\n\
            p, 1, 0, 1, 1\n\
            \n\
            q, 0, 1, 1, 0\n";
        let sample = training_examples(bytes, true).unwrap();
        assert_eq!(sample.shape(), (2, 3));
        assert!(sample[0].feature(2));
        assert!(!sample[1].label());
    }

    #[test]
    fn test_from_reader_unwrapped() {
        // `&[u8]` is already buffered.
        let bytes: &[u8] = b"a,1,0\nb,0,1\n";
        let sample = Sample::from_reader(bytes, false).unwrap();
        assert_eq!(sample.shape(), (2, 1));

        let cursor = std::io::Cursor::new(b"x,1,1\n".to_vec());
        let sample = Sample::from_reader(cursor, false).unwrap();
        assert_eq!(sample[0].id(), "x");
    }

    #[test]
    fn test_from_reader_mismatch() {
        let bytes = b"\
            a,1,1,0\n\
            b,1,1";
        let err = training_examples(bytes, false).unwrap_err();
        assert!(matches!(
            err,
            Error::FeatureCountMismatch { expected: 2, found: 1, .. }
        ));
    }

    #[test]
    fn test_from_reader_parse_error() {
        let bytes = b"\
            a,1,1,0\n\
            b,yes,1,0";
        let err = training_examples(bytes, false).unwrap_err();
        assert!(matches!(err, Error::Parse { line: 2, .. }));
    }

    #[test]
    fn test_from_reader_empty() {
        let err = training_examples(b"id,label,f\n", true).unwrap_err();
        assert!(matches!(err, Error::EmptySample));
    }

    #[test]
    fn test_from_dataframe() {
        let s1 = Series::new("x", &[1_i64, 1, 0, 0]);
        let s2 = Series::new("y", &[0_i64, 1, 0, 1]);
        let target = Series::new("class", &[1.0, 1.0, 0.0, 0.0]);
        let df = DataFrame::new(vec![s1, s2]).unwrap();

        let sample = Sample::from_dataframe(df, target).unwrap();
        assert_eq!(sample.shape(), (4, 2));
        assert_eq!(sample[1].id(), "1");
        assert!(sample[1].feature(0) && sample[1].feature(1));
        assert_eq!(sample.label_counts(), (2, 2));
    }

    #[test]
    fn test_from_dataframe_non_binary() {
        let s1 = Series::new("x", &[0.5, 1.0]);
        let target = Series::new("class", &[1_i64, 0]);
        let df = DataFrame::new(vec![s1]).unwrap();

        let err = Sample::from_dataframe(df, target).unwrap_err();
        assert!(matches!(err, Error::NonBinaryValue { .. }));
    }
}
