//! Metric/imperial conversions for volume, area and weight.
//!
//! Stored values are always metric (liters, hectares, kilograms). Imperial values
//! are derived on read and converted back to metric on write. Every conversion
//! rounds its result to 2 decimal places, half away from zero.

pub const LITERS_TO_GALLONS: f64 = 0.264172;
pub const GALLONS_TO_LITERS: f64 = 3.78541;
pub const HECTARES_TO_ACRES: f64 = 2.47105;
pub const ACRES_TO_HECTARES: f64 = 0.404686;
pub const KILOGRAMS_TO_POUNDS: f64 = 2.20462;
pub const POUNDS_TO_KILOGRAMS: f64 = 0.453592;

/// Round `value` to `places` decimal places, half away from zero.
///
/// The scaled value is nudged outward by a few ulps before rounding, so decimal
/// halves stored just below `.5` in binary (`1.005`) still round up.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    let scaled = value * factor;
    (scaled * (1.0 + 4.0 * f64::EPSILON)).round() / factor
}

fn convert(value: f64, factor: f64) -> f64 {
    round_to(value * factor, 2)
}

pub fn liters_to_gallons(liters: f64) -> f64 {
    convert(liters, LITERS_TO_GALLONS)
}

pub fn gallons_to_liters(gallons: f64) -> f64 {
    convert(gallons, GALLONS_TO_LITERS)
}

pub fn hectares_to_acres(hectares: f64) -> f64 {
    convert(hectares, HECTARES_TO_ACRES)
}

pub fn acres_to_hectares(acres: f64) -> f64 {
    convert(acres, ACRES_TO_HECTARES)
}

pub fn kilograms_to_pounds(kilograms: f64) -> f64 {
    convert(kilograms, KILOGRAMS_TO_POUNDS)
}

pub fn pounds_to_kilograms(pounds: f64) -> f64 {
    convert(pounds, POUNDS_TO_KILOGRAMS)
}

/// Format a volume in liters for display.
///
/// Produces `"26.4 gal (100.0 L)"` when `use_gallons` is set, otherwise `"100.0 L"`.
pub fn format_volume(liters: f64, use_gallons: bool) -> String {
    if use_gallons {
        let gallons = liters_to_gallons(liters);
        return format!("{:.1} gal ({:.1} L)", round_to(gallons, 1), round_to(liters, 1));
    }

    format!("{:.1} L", round_to(liters, 1))
}

/// Format an area in hectares for display.
///
/// Produces `"24.7 ac (10.0 ha)"` when `use_acres` is set, otherwise `"10.0 ha"`.
pub fn format_area(hectares: f64, use_acres: bool) -> String {
    if use_acres {
        let acres = hectares_to_acres(hectares);
        return format!("{:.1} ac ({:.1} ha)", round_to(acres, 1), round_to(hectares, 1));
    }

    format!("{:.1} ha", round_to(hectares, 1))
}
