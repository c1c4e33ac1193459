use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use geo::{Coord, LineString, MultiLineString};
use quick_xml::{events::Event, Reader};
use serde::{Deserialize, Serialize};

use super::DatasetError;

const COORDINATES_TAG: &[u8] = b"coordinates";

/// maps a city pair onto the name of its precomputed track file,
/// e.g. `Den Haag` → `Den_Haag_to_Paris.kml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackNaming {
    /// multi-word city names whose track files keep the space
    pub keep_spaces: HashSet<String>,
}

impl TrackNaming {
    pub fn filename(&self, departure_city: &str, arrival_city: &str) -> String {
        format!(
            "{}_to_{}.kml",
            self.file_stem(departure_city),
            self.file_stem(arrival_city)
        )
    }

    fn file_stem(&self, city: &str) -> String {
        if self.keep_spaces.contains(city) {
            city.to_owned()
        } else {
            city.replace(' ', "_")
        }
    }
}

/// source of the precomputed rail geometry drawn for train routes.
pub trait TrackSource {
    fn load_track(
        &self,
        departure_city: &str,
        arrival_city: &str,
    ) -> Result<MultiLineString<f64>, DatasetError>;
}

/// reads tracks from a directory of KML files.
#[derive(Debug, Clone)]
pub struct KmlTrackSource {
    directory: PathBuf,
    naming: TrackNaming,
}

impl KmlTrackSource {
    pub fn new<P: AsRef<Path>>(directory: P, naming: TrackNaming) -> Self {
        Self {
            directory: directory.as_ref().to_path_buf(),
            naming,
        }
    }

    pub fn track_path(&self, departure_city: &str, arrival_city: &str) -> PathBuf {
        self.directory
            .join(self.naming.filename(departure_city, arrival_city))
    }
}

impl TrackSource for KmlTrackSource {
    fn load_track(
        &self,
        departure_city: &str,
        arrival_city: &str,
    ) -> Result<MultiLineString<f64>, DatasetError> {
        let path = self.track_path(departure_city, arrival_city);
        let filepath = path.to_string_lossy().to_string();
        let contents = std::fs::read_to_string(&path).map_err(|source| DatasetError::ReadError {
            filepath: filepath.clone(),
            source,
        })?;
        let track = parse_kml_lines(&contents).map_err(|source| DatasetError::KmlError {
            filepath: filepath.clone(),
            source,
        })?;
        if track.0.is_empty() {
            return Err(DatasetError::EmptyTrack(filepath));
        }
        Ok(track)
    }
}

/// collects every `coordinates` element of a KML document holding at least two
/// positions. elements are matched by local name, so `kml:coordinates` counts.
/// single positions are placemark points and are skipped, as is markup quoted
/// inside CDATA sections or comments.
pub fn parse_kml_lines(kml: &str) -> Result<MultiLineString<f64>, quick_xml::Error> {
    let mut reader = Reader::from_str(kml);
    let mut lines = vec![];
    let mut block: Option<String> = None;
    loop {
        match reader.read_event()? {
            Event::Eof => break,
            Event::Start(e) if e.local_name().as_ref() == COORDINATES_TAG => {
                block = Some(String::new());
            }
            Event::Text(e) => {
                if let Some(text) = block.as_mut() {
                    text.push_str(&e.unescape()?);
                    text.push(' ');
                }
            }
            Event::End(e) if e.local_name().as_ref() == COORDINATES_TAG => {
                if let Some(text) = block.take() {
                    let coords = parse_kml_tuples(&text);
                    if coords.len() >= 2 {
                        lines.push(LineString::from(coords));
                    }
                }
            }
            _ => {}
        }
    }
    Ok(MultiLineString::new(lines))
}

/// KML tuples are `lon,lat[,alt]` separated by whitespace
fn parse_kml_tuples(block: &str) -> Vec<Coord<f64>> {
    block
        .split_whitespace()
        .filter_map(|tuple| {
            let mut parts = tuple.split(',');
            let x = parts.next()?.trim().parse::<f64>().ok()?;
            let y = parts.next()?.trim().parse::<f64>().ok()?;
            Some(Coord { x, y })
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_filename_replaces_spaces() {
        let naming = TrackNaming::default();
        assert_eq!(
            naming.filename("Den Haag", "Frankfurt am Main"),
            "Den_Haag_to_Frankfurt_am_Main.kml"
        );
    }

    #[test]
    fn test_filename_keeps_listed_spaces() {
        let naming = TrackNaming {
            keep_spaces: HashSet::from([String::from("Den Haag")]),
        };
        assert_eq!(naming.filename("Den Haag", "San Marino"), "Den Haag_to_San_Marino.kml");
    }

    #[test]
    fn test_parse_kml_skips_points() {
        let kml = r#"<kml><Document>
            <Placemark><Point><coordinates>2.35,48.85,0</coordinates></Point></Placemark>
            <Placemark><LineString><coordinates>
                2.35,48.85,0 3.0,47.5,0
                4.83,45.76,0
            </coordinates></LineString></Placemark>
        </Document></kml>"#;
        let lines = parse_kml_lines(kml).unwrap();
        assert_eq!(lines.0.len(), 1);
        assert_eq!(lines.0[0].0.len(), 3);
        assert_eq!(lines.0[0].0[2], Coord { x: 4.83, y: 45.76 });
    }

    #[test]
    fn test_parse_kml_ignores_quoted_markup() {
        let kml = r#"<kml><Document>
            <Placemark>
                <description><![CDATA[example: <coordinates>0,0 1,1</coordinates>]]></description>
                <!-- <coordinates>5,5 6,6</coordinates> -->
                <LineString><coordinates>2.35,48.85 4.83,45.76</coordinates></LineString>
            </Placemark>
        </Document></kml>"#;
        let lines = parse_kml_lines(kml).unwrap();
        assert_eq!(lines.0.len(), 1);
        assert_eq!(lines.0[0].0[0], Coord { x: 2.35, y: 48.85 });
    }

    #[test]
    fn test_parse_kml_namespaced_coordinates() {
        let kml = r#"<kml:kml xmlns:kml="http://www.opengis.net/kml/2.2"><kml:Document>
            <kml:Placemark><kml:LineString>
                <kml:coordinates>2.35,48.85 4.83,45.76</kml:coordinates>
            </kml:LineString></kml:Placemark>
        </kml:Document></kml:kml>"#;
        let lines = parse_kml_lines(kml).unwrap();
        assert_eq!(lines.0.len(), 1);
        assert_eq!(lines.0[0].0[1], Coord { x: 4.83, y: 45.76 });
    }

    #[test]
    fn test_parse_kml_rejects_malformed_document() {
        assert!(parse_kml_lines("<kml><coordinates>1,2 3,4</kml>").is_err());
    }

    #[test]
    fn test_load_fixture_track() {
        let directory = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("test")
            .join("tracks");
        let source = KmlTrackSource::new(directory, TrackNaming::default());
        let track = source.load_track("Paris", "Lyon").unwrap();
        assert_eq!(track.0.len(), 1);
        assert!(matches!(
            source.load_track("Paris", "Atlantis"),
            Err(DatasetError::ReadError { .. })
        ));
    }
}
