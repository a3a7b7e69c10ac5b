use thiserror::Error;

/// Broad class of an [`OrreryError`].
///
/// * `Domain` – a numeric input outside the domain of a formula.
/// * `Configuration` – a missing or invalid element field, caught at load/construction time.
/// * `Io` – reading or parsing an external source failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Domain,
    Configuration,
    Io,
}

#[derive(Error, Debug)]
pub enum OrreryError {
    #[error("Negative input to the display scale law: {0}")]
    NegativeScaleInput(f64),

    #[error("Sidereal orbit period is zero for an orbiting body (semi-major axis {0})")]
    ZeroOrbitalPeriod(f64),

    #[error("Eccentricity {0} is outside [0, 1): only bound elliptical orbits are supported")]
    UnsupportedEccentricity(f64),

    #[error("Negative semi-major axis: {0}")]
    NegativeSemiMajorAxis(f64),

    #[error("Orbital element `{field}` is not a finite number: {value}")]
    NonFiniteElement { field: &'static str, value: f64 },

    #[error("Missing required field `{field}` for body {body}")]
    MissingField { body: String, field: &'static str },

    #[error("Invalid configuration value: {0}")]
    InvalidConfig(String),

    #[error("Invalid epoch: {0}")]
    InvalidEpoch(String),

    #[error("Body not found: {0}")]
    BodyNotFound(String),

    #[error("Unable to perform file operation: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Error during JSON parsing: {0}")]
    JsonParsingError(#[from] serde_json::Error),

    #[error("Error during CSV parsing: {0}")]
    CsvParsingError(#[from] csv::Error),

    #[error("Error during TOML parsing: {0}")]
    TomlParsingError(#[from] toml::de::Error),
}

impl OrreryError {
    /// Classify the error according to the crate taxonomy.
    pub fn category(&self) -> ErrorCategory {
        use OrreryError::*;
        match self {
            NegativeScaleInput(_) | ZeroOrbitalPeriod(_) => ErrorCategory::Domain,
            UnsupportedEccentricity(_)
            | NegativeSemiMajorAxis(_)
            | NonFiniteElement { .. }
            | MissingField { .. }
            | InvalidConfig(_)
            | InvalidEpoch(_)
            | BodyNotFound(_) => ErrorCategory::Configuration,
            IoError(_) | JsonParsingError(_) | CsvParsingError(_) | TomlParsingError(_) => {
                ErrorCategory::Io
            }
        }
    }
}

impl From<hifitime::HifitimeError> for OrreryError {
    fn from(err: hifitime::HifitimeError) -> Self {
        OrreryError::InvalidEpoch(err.to_string())
    }
}

impl PartialEq for OrreryError {
    fn eq(&self, other: &Self) -> bool {
        use OrreryError::*;
        match (self, other) {
            (NegativeScaleInput(a), NegativeScaleInput(b)) => a == b,
            (ZeroOrbitalPeriod(a), ZeroOrbitalPeriod(b)) => a == b,
            (UnsupportedEccentricity(a), UnsupportedEccentricity(b)) => a == b,
            (NegativeSemiMajorAxis(a), NegativeSemiMajorAxis(b)) => a == b,
            (
                NonFiniteElement { field: fa, .. },
                NonFiniteElement { field: fb, .. },
            ) => fa == fb,
            (
                MissingField {
                    body: ba,
                    field: fa,
                },
                MissingField {
                    body: bb,
                    field: fb,
                },
            ) => ba == bb && fa == fb,
            (InvalidConfig(a), InvalidConfig(b)) => a == b,
            (InvalidEpoch(a), InvalidEpoch(b)) => a == b,
            (BodyNotFound(a), BodyNotFound(b)) => a == b,

            // Wrapped foreign errors: equal when the variant matches
            (IoError(_), IoError(_)) => true,
            (JsonParsingError(_), JsonParsingError(_)) => true,
            (CsvParsingError(_), CsvParsingError(_)) => true,
            (TomlParsingError(_), TomlParsingError(_)) => true,

            _ => false,
        }
    }
}

#[cfg(test)]
mod orrery_errors_test {
    use super::*;

    #[test]
    fn test_error_categories() {
        assert_eq!(
            OrreryError::NegativeScaleInput(-1.0).category(),
            ErrorCategory::Domain
        );
        assert_eq!(
            OrreryError::ZeroOrbitalPeriod(1.5e8).category(),
            ErrorCategory::Domain
        );
        assert_eq!(
            OrreryError::MissingField {
                body: "Mars".into(),
                field: "eccentricity"
            }
            .category(),
            ErrorCategory::Configuration
        );
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert_eq!(OrreryError::from(io).category(), ErrorCategory::Io);
    }

    #[test]
    fn test_non_finite_equality_ignores_value() {
        let a = OrreryError::NonFiniteElement {
            field: "inclination",
            value: f64::NAN,
        };
        let b = OrreryError::NonFiniteElement {
            field: "inclination",
            value: f64::NAN,
        };
        assert_eq!(a, b);
    }
}
