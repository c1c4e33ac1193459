#[derive(thiserror::Error, Debug)]
pub enum DatasetError {
    #[error("failed reading '{filepath}': {source}")]
    ReadError {
        filepath: String,
        source: std::io::Error,
    },
    #[error("failed decoding row {row} of '{filepath}': {source}")]
    CsvDecodeError {
        filepath: String,
        row: usize,
        source: csv::Error,
    },
    #[error("failed opening '{filepath}' as csv: {source}")]
    CsvOpenError {
        filepath: String,
        source: csv::Error,
    },
    #[error("failed parsing '{filepath}' as kml: {source}")]
    KmlError {
        filepath: String,
        source: quick_xml::Error,
    },
    #[error("track file '{0}' contains no coordinates")]
    EmptyTrack(String),
}
