//! # Body catalogue
//!
//! Loading of the solar-system body records feeding the kinematics engine. The
//! record layout follows the public "système solaire" body API: camelCase keys,
//! angles in degrees, distances and radii in km, orbit periods in days and
//! rotation periods in hours.
//!
//! Records are deserialized permissively (every numeric field is optional) and
//! checked when converted into [`OrbitalElements`] with
//! [`BodyRecord::to_elements`]: a missing kinematic field is a
//! [`OrreryError::MissingField`] surfaced at load time, never inside a per-frame
//! calculation.
//!
//! Supported sources:
//!
//! - JSON, either a bare array of records or an object `{ "bodies": [...] }`,
//! - CSV with a header row using the same column names (nested fields excepted).

use std::{fs::File, io::Read, path::Path};

use hifitime::Epoch;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    orbital_elements::OrbitalElements, orrery_errors::OrreryError, scale_law::SphereDimensions,
};

/// Identifier of the central star in the catalogue.
pub const STAR_ID: &str = "soleil";

/// Parent body of a moon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AroundPlanet {
    pub planet: Option<String>,
    pub rel: Option<String>,
}

/// One body of the catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyRecord {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub english_name: Option<String>,
    #[serde(default)]
    pub is_planet: bool,
    #[serde(default)]
    pub semimajor_axis: Option<f64>,
    #[serde(default)]
    pub perihelion: Option<f64>,
    #[serde(default)]
    pub aphelion: Option<f64>,
    #[serde(default)]
    pub eccentricity: Option<f64>,
    #[serde(default)]
    pub inclination: Option<f64>,
    #[serde(default)]
    pub mean_radius: Option<f64>,
    #[serde(default, rename = "equaRadius")]
    pub equatorial_radius: Option<f64>,
    #[serde(default)]
    pub polar_radius: Option<f64>,
    #[serde(default, rename = "sideralOrbit")]
    pub sidereal_orbit: Option<f64>,
    #[serde(default, rename = "sideralRotation")]
    pub sidereal_rotation: Option<f64>,
    #[serde(default)]
    pub axial_tilt: Option<f64>,
    #[serde(default, rename = "mainAnomaly")]
    pub mean_anomaly: Option<f64>,
    #[serde(default, rename = "argPeriapsis")]
    pub argument_of_periapsis: Option<f64>,
    #[serde(default, rename = "longAscNode", alias = "doubleAscNode")]
    pub longitude_of_ascending_node: Option<f64>,
    #[serde(default)]
    pub body_type: Option<String>,
    #[serde(default)]
    pub around_planet: Option<AroundPlanet>,
}

impl BodyRecord {
    /// English name if known, else the native name, else the identifier.
    pub fn display_name(&self) -> &str {
        self.english_name
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or(&self.id)
    }

    /// Planets and the central star: the bodies placed in the scene by default.
    pub fn is_major_body(&self) -> bool {
        self.is_planet || self.id == STAR_ID
    }

    fn require(&self, value: Option<f64>, field: &'static str) -> Result<f64, OrreryError> {
        value.ok_or_else(|| OrreryError::MissingField {
            body: self.display_name().to_string(),
            field,
        })
    }

    /// Convert the record into validated [`OrbitalElements`].
    ///
    /// Arguments
    /// ---------
    /// * `reference_epoch` – epoch at which the catalogue mean anomaly is valid.
    ///
    /// Return
    /// ------
    /// * The elements, [`OrreryError::MissingField`] naming the first absent kinematic
    ///   field, or any validation error of [`OrbitalElements`].
    pub fn to_elements(&self, reference_epoch: Epoch) -> Result<OrbitalElements, OrreryError> {
        let mut builder = OrbitalElements::builder(reference_epoch)
            .semi_major_axis(self.require(self.semimajor_axis, "semimajorAxis")?)
            .eccentricity(self.require(self.eccentricity, "eccentricity")?)
            .inclination(self.require(self.inclination, "inclination")?)
            .argument_of_periapsis(self.require(self.argument_of_periapsis, "argPeriapsis")?)
            .longitude_of_ascending_node(
                self.require(self.longitude_of_ascending_node, "longAscNode")?,
            )
            .mean_anomaly_at_epoch(self.require(self.mean_anomaly, "mainAnomaly")?)
            .sidereal_orbit_period(self.require(self.sidereal_orbit, "sideralOrbit")?)
            .sidereal_rotation_period(self.require(self.sidereal_rotation, "sideralRotation")?);

        if let Some(tilt) = self.axial_tilt {
            builder = builder.axial_tilt(tilt);
        }

        builder.build()
    }

    /// Display sphere sized from the equatorial and polar radii (missing radii count as 0).
    pub fn sphere_dimensions(&self) -> Result<SphereDimensions, OrreryError> {
        SphereDimensions::from_radii(
            self.equatorial_radius.unwrap_or(0.0),
            self.polar_radius.unwrap_or(0.0),
        )
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogDocument {
    Wrapped { bodies: Vec<BodyRecord> },
    List(Vec<BodyRecord>),
}

impl From<CatalogDocument> for Vec<BodyRecord> {
    fn from(doc: CatalogDocument) -> Self {
        match doc {
            CatalogDocument::Wrapped { bodies } => bodies,
            CatalogDocument::List(bodies) => bodies,
        }
    }
}

/// Parse a JSON catalogue.
pub fn parse_catalog_json(content: &str) -> Result<Vec<BodyRecord>, OrreryError> {
    read_catalog_json(content.as_bytes())
}

/// Read a JSON catalogue from any reader.
pub fn read_catalog_json<R: Read>(reader: R) -> Result<Vec<BodyRecord>, OrreryError> {
    let doc: CatalogDocument = serde_json::from_reader(reader)?;
    let bodies: Vec<BodyRecord> = doc.into();
    debug!(count = bodies.len(), "read JSON body catalogue");
    Ok(bodies)
}

/// Read a CSV catalogue (header row required) from any reader.
pub fn read_catalog_csv<R: Read>(reader: R) -> Result<Vec<BodyRecord>, OrreryError> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let bodies = rdr
        .deserialize::<BodyRecord>()
        .collect::<Result<Vec<_>, _>>()?;
    debug!(count = bodies.len(), "read CSV body catalogue");
    Ok(bodies)
}

/// Load a catalogue file; `.csv` files are read as CSV, anything else as JSON.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Vec<BodyRecord>, OrreryError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let is_csv = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

    if is_csv {
        read_catalog_csv(file)
    } else {
        read_catalog_json(std::io::BufReader::new(file))
    }
}
