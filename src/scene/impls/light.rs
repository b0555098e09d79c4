use crate::geometry::Point3;
use crate::scene::LightSource;

/// A directional light with a fixed facing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    facing: Point3,
}

impl DirectionalLight {
    pub fn new(facing: Point3) -> Self {
        DirectionalLight { facing }
    }

    /// A light shining straight down, like a sun at its zenith.
    pub fn overhead() -> Self {
        DirectionalLight::new(-Point3::UP)
    }

    /// Derives the light from a sun position in degrees.
    ///
    /// The azimuth is measured clockwise from north (`+z`) towards east (`+x`),
    /// and elevation upwards from the horizon. A sun at or below the horizon
    /// casts no light, yielding `None`.
    ///
    /// ```rust
    /// use shadepath::scene::impls::DirectionalLight;
    /// use shadepath::LightSource;
    ///
    /// let noon = DirectionalLight::from_sun(180.0, 90.0).unwrap();
    /// assert!(noon.towards().unwrap().y > 0.999);
    ///
    /// assert!(DirectionalLight::from_sun(90.0, -4.0).is_none());
    /// ```
    pub fn from_sun(azimuth: f64, elevation: f64) -> Option<Self> {
        if elevation <= 0.0 {
            return None;
        }

        let (azimuth, elevation) = (azimuth.to_radians(), elevation.to_radians());
        let towards = Point3::new(
            azimuth.sin() * elevation.cos(),
            elevation.sin(),
            azimuth.cos() * elevation.cos(),
        );

        Some(DirectionalLight::new(-towards))
    }
}

impl LightSource for DirectionalLight {
    fn facing(&self) -> Option<Point3> {
        Some(self.facing)
    }
}
