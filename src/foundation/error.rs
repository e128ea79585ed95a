pub type MaskResult<T> = Result<T, MaskError>;

#[derive(thiserror::Error, Debug)]
pub enum MaskError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("containment oracle failure: {0}")]
    OracleFailure(String),

    #[error("projection error: {0}")]
    Projection(String),

    #[error("mangle parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("pixel ({i}, {j}) at ra={ra}, dec={dec}: {source}")]
    AtPixel {
        i: i64,
        j: i64,
        ra: f64,
        dec: f64,
        source: Box<MaskError>,
    },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MaskError {
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    pub fn oracle(msg: impl Into<String>) -> Self {
        Self::OracleFailure(msg.into())
    }

    pub fn projection(msg: impl Into<String>) -> Self {
        Self::Projection(msg.into())
    }

    pub fn parse(line: usize, msg: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: msg.into(),
        }
    }

    pub(crate) fn at_pixel(i: i64, j: i64, ra: f64, dec: f64, source: MaskError) -> Self {
        Self::AtPixel {
            i,
            j,
            ra,
            dec,
            source: Box::new(source),
        }
    }

    /// Innermost error, skipping any pixel context wrappers.
    pub fn root(&self) -> &MaskError {
        match self {
            Self::AtPixel { source, .. } => source.root(),
            other => other,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
