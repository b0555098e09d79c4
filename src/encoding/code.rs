use std::fmt::{Display, Formatter};

/// A fixed-length binary fingerprint of a segment's shadow pattern.
///
/// Each symbol covers an equal part of the segment's coverage interval,
/// in route order. `1` marks a shaded part, `0` a lit one.
///
/// ```rust
/// use shadepath::encoding::ExposureCode;
///
/// let code = ExposureCode::from(vec![true, true, false]);
/// assert_eq!(code.to_string(), "110");
/// assert_eq!(code.shaded(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ExposureCode(Vec<bool>);

impl ExposureCode {
    pub fn bits(&self) -> &[bool] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The number of shaded parts.
    pub fn shaded(&self) -> usize {
        self.0.iter().filter(|bit| **bit).count()
    }
}

impl From<Vec<bool>> for ExposureCode {
    fn from(bits: Vec<bool>) -> Self {
        ExposureCode(bits)
    }
}

impl FromIterator<bool> for ExposureCode {
    fn from_iter<T: IntoIterator<Item = bool>>(iter: T) -> Self {
        ExposureCode(iter.into_iter().collect())
    }
}

impl Display for ExposureCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.0
            .iter()
            .try_for_each(|bit| f.write_str(if *bit { "1" } else { "0" }))
    }
}
