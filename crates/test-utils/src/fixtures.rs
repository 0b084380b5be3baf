//! Common test fixtures for placement tests.

/// Common image sizes in pixels.
pub mod images {
    /// A small chart
    pub const SMALL: (u32, u32) = (200, 150);

    /// A typical web chart
    pub const STANDARD: (u32, u32) = (800, 600);

    /// Standard tile size (256x256)
    pub const TILE_256: (u32, u32) = (256, 256);
}

/// Common parameter ids.
pub mod params {
    /// Temperature
    pub const TEMPERATURE: i32 = 4;

    /// Mean sea level pressure
    pub const PRESSURE: i32 = 1;

    /// Relative humidity
    pub const HUMIDITY: i32 = 13;

    /// Synthetic wind chill id
    pub const WIND_CHILL: i32 = 10001;
}

/// Common contour value sets.
pub mod contours {
    /// Temperature isotherms in Celsius
    pub const TEMPERATURE: [f32; 5] = [-10.0, -5.0, 0.0, 5.0, 10.0];

    /// Isobars in hPa
    pub const ISOBARS: [f32; 5] = [1000.0, 1005.0, 1010.0, 1015.0, 1020.0];
}
