//! Parameter identifiers for rendered quantities.
//!
//! Locators key their candidates by an integer parameter id. Ordinary
//! parameters use their data source numbers; derived quantities computed by
//! the renderer itself get synthetic ids starting at 10000.

/// Reserved id meaning "no active parameter".
pub const NO_PARAMETER: i32 = 0;

const META_PARAMETERS: &[(&str, i32)] = &[
    ("MetaElevationAngle", 10000),
    ("MetaWindChill", 10001),
    ("MetaDewDifference", 10002),
    ("MetaN", 10003),
    ("MetaNN", 10004),
    ("MetaT2mAdvection", 10005),
    ("MetaThermalFront", 10006),
    ("MetaDewDifferenceAir", 10007),
    ("MetaSnowProb", 10008),
    ("MetaThetaE", 10009),
];

/// Synthetic parameter id of a derived ("meta") quantity.
pub fn meta_parameter_id(name: &str) -> Option<i32> {
    META_PARAMETERS
        .iter()
        .find(|(meta, _)| *meta == name)
        .map(|(_, id)| *id)
}
