use std::collections::HashMap;

/// One reference-list country with the map centroid used to place its
/// marker on the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RefCountry {
    pub name: &'static str,
    pub lat: f64,
    pub lon: f64,
}

/// Fixed reference list standing in for the charting library's built-in
/// country table. Spellings must match the Winner/Runner-up columns for the
/// map join to work; historical names ("West Germany", "England",
/// "Czechoslovakia") are deliberately not here, so their wins drop off the
/// map exactly like the source dashboard.
pub const REFERENCE_COUNTRIES: &[RefCountry] = &[
    RefCountry { name: "Afghanistan", lat: 33.9, lon: 67.7 },
    RefCountry { name: "Albania", lat: 41.2, lon: 20.2 },
    RefCountry { name: "Algeria", lat: 28.0, lon: 1.7 },
    RefCountry { name: "Angola", lat: -11.2, lon: 17.9 },
    RefCountry { name: "Argentina", lat: -38.4, lon: -63.6 },
    RefCountry { name: "Australia", lat: -25.3, lon: 133.8 },
    RefCountry { name: "Austria", lat: 47.5, lon: 14.6 },
    RefCountry { name: "Bahrain", lat: 26.0, lon: 50.6 },
    RefCountry { name: "Bangladesh", lat: 23.7, lon: 90.4 },
    RefCountry { name: "Belgium", lat: 50.5, lon: 4.5 },
    RefCountry { name: "Benin", lat: 9.3, lon: 2.3 },
    RefCountry { name: "Bolivia", lat: -16.3, lon: -63.6 },
    RefCountry { name: "Bosnia and Herzegovina", lat: 43.9, lon: 17.7 },
    RefCountry { name: "Botswana", lat: -22.3, lon: 24.7 },
    RefCountry { name: "Brazil", lat: -14.2, lon: -51.9 },
    RefCountry { name: "Bulgaria", lat: 42.7, lon: 25.5 },
    RefCountry { name: "Burkina Faso", lat: 12.2, lon: -1.6 },
    RefCountry { name: "Burundi", lat: -3.4, lon: 29.9 },
    RefCountry { name: "Cambodia", lat: 12.6, lon: 105.0 },
    RefCountry { name: "Cameroon", lat: 7.4, lon: 12.4 },
    RefCountry { name: "Canada", lat: 56.1, lon: -106.3 },
    RefCountry { name: "Chad", lat: 15.5, lon: 18.7 },
    RefCountry { name: "Chile", lat: -35.7, lon: -71.5 },
    RefCountry { name: "China", lat: 35.9, lon: 104.2 },
    RefCountry { name: "Colombia", lat: 4.6, lon: -74.3 },
    RefCountry { name: "Costa Rica", lat: 9.7, lon: -83.8 },
    RefCountry { name: "Croatia", lat: 45.1, lon: 15.2 },
    RefCountry { name: "Cuba", lat: 21.5, lon: -77.8 },
    RefCountry { name: "Czech Republic", lat: 49.8, lon: 15.5 },
    RefCountry { name: "Denmark", lat: 56.3, lon: 9.5 },
    RefCountry { name: "Dominican Republic", lat: 18.7, lon: -70.2 },
    RefCountry { name: "Ecuador", lat: -1.8, lon: -78.2 },
    RefCountry { name: "Egypt", lat: 26.8, lon: 30.8 },
    RefCountry { name: "El Salvador", lat: 13.8, lon: -88.9 },
    RefCountry { name: "Eritrea", lat: 15.2, lon: 39.8 },
    RefCountry { name: "Ethiopia", lat: 9.1, lon: 40.5 },
    RefCountry { name: "Finland", lat: 61.9, lon: 25.7 },
    RefCountry { name: "France", lat: 46.2, lon: 2.2 },
    RefCountry { name: "Gabon", lat: -0.8, lon: 11.6 },
    RefCountry { name: "Gambia", lat: 13.4, lon: -15.3 },
    RefCountry { name: "Germany", lat: 51.2, lon: 10.5 },
    RefCountry { name: "Ghana", lat: 7.9, lon: -1.0 },
    RefCountry { name: "Greece", lat: 39.1, lon: 21.8 },
    RefCountry { name: "Guatemala", lat: 15.8, lon: -90.2 },
    RefCountry { name: "Guinea", lat: 9.9, lon: -9.7 },
    RefCountry { name: "Haiti", lat: 19.0, lon: -72.3 },
    RefCountry { name: "Honduras", lat: 15.2, lon: -86.2 },
    RefCountry { name: "Hungary", lat: 47.2, lon: 19.5 },
    RefCountry { name: "Iceland", lat: 64.9, lon: -19.0 },
    RefCountry { name: "India", lat: 20.6, lon: 79.0 },
    RefCountry { name: "Indonesia", lat: -0.8, lon: 113.9 },
    RefCountry { name: "Iran", lat: 32.4, lon: 53.7 },
    RefCountry { name: "Iraq", lat: 33.2, lon: 43.7 },
    RefCountry { name: "Ireland", lat: 53.4, lon: -8.2 },
    RefCountry { name: "Israel", lat: 31.0, lon: 34.9 },
    RefCountry { name: "Italy", lat: 41.9, lon: 12.6 },
    RefCountry { name: "Jamaica", lat: 18.1, lon: -77.3 },
    RefCountry { name: "Japan", lat: 36.2, lon: 138.3 },
    RefCountry { name: "Jordan", lat: 30.6, lon: 36.2 },
    RefCountry { name: "Kenya", lat: -0.0, lon: 37.9 },
    RefCountry { name: "Kuwait", lat: 29.3, lon: 47.5 },
    RefCountry { name: "Lebanon", lat: 33.9, lon: 35.9 },
    RefCountry { name: "Lesotho", lat: -29.6, lon: 28.2 },
    RefCountry { name: "Liberia", lat: 6.4, lon: -9.4 },
    RefCountry { name: "Libya", lat: 26.3, lon: 17.2 },
    RefCountry { name: "Madagascar", lat: -18.8, lon: 47.0 },
    RefCountry { name: "Malawi", lat: -13.3, lon: 34.3 },
    RefCountry { name: "Malaysia", lat: 4.2, lon: 101.9 },
    RefCountry { name: "Mali", lat: 17.6, lon: -4.0 },
    RefCountry { name: "Mauritania", lat: 21.0, lon: -10.9 },
    RefCountry { name: "Mexico", lat: 23.6, lon: -102.6 },
    RefCountry { name: "Mongolia", lat: 46.9, lon: 103.8 },
    RefCountry { name: "Montenegro", lat: 42.7, lon: 19.4 },
    RefCountry { name: "Morocco", lat: 31.8, lon: -7.1 },
    RefCountry { name: "Mozambique", lat: -18.7, lon: 35.5 },
    RefCountry { name: "Myanmar", lat: 21.9, lon: 95.9 },
    RefCountry { name: "Namibia", lat: -22.9, lon: 18.5 },
    RefCountry { name: "Nepal", lat: 28.4, lon: 84.1 },
    RefCountry { name: "Netherlands", lat: 52.1, lon: 5.3 },
    RefCountry { name: "New Zealand", lat: -40.9, lon: 174.9 },
    RefCountry { name: "Nicaragua", lat: 12.9, lon: -85.2 },
    RefCountry { name: "Niger", lat: 17.6, lon: 8.1 },
    RefCountry { name: "Nigeria", lat: 9.1, lon: 8.7 },
    RefCountry { name: "Norway", lat: 60.5, lon: 8.5 },
    RefCountry { name: "Oman", lat: 21.5, lon: 55.9 },
    RefCountry { name: "Pakistan", lat: 30.4, lon: 69.3 },
    RefCountry { name: "Panama", lat: 8.5, lon: -80.8 },
    RefCountry { name: "Paraguay", lat: -23.4, lon: -58.4 },
    RefCountry { name: "Peru", lat: -9.2, lon: -75.0 },
    RefCountry { name: "Philippines", lat: 12.9, lon: 121.8 },
    RefCountry { name: "Poland", lat: 51.9, lon: 19.1 },
    RefCountry { name: "Portugal", lat: 39.4, lon: -8.2 },
    RefCountry { name: "Romania", lat: 45.9, lon: 25.0 },
    RefCountry { name: "Rwanda", lat: -1.9, lon: 29.9 },
    RefCountry { name: "Saudi Arabia", lat: 23.9, lon: 45.1 },
    RefCountry { name: "Senegal", lat: 14.5, lon: -14.5 },
    RefCountry { name: "Serbia", lat: 44.0, lon: 21.0 },
    RefCountry { name: "Sierra Leone", lat: 8.5, lon: -11.8 },
    RefCountry { name: "Singapore", lat: 1.4, lon: 103.8 },
    RefCountry { name: "Slovak Republic", lat: 48.7, lon: 19.7 },
    RefCountry { name: "Slovenia", lat: 46.2, lon: 15.0 },
    RefCountry { name: "Somalia", lat: 5.2, lon: 46.2 },
    RefCountry { name: "South Africa", lat: -30.6, lon: 22.9 },
    RefCountry { name: "Spain", lat: 40.5, lon: -3.7 },
    RefCountry { name: "Sri Lanka", lat: 7.9, lon: 80.8 },
    RefCountry { name: "Sudan", lat: 12.9, lon: 30.2 },
    RefCountry { name: "Sweden", lat: 60.1, lon: 18.6 },
    RefCountry { name: "Switzerland", lat: 46.8, lon: 8.2 },
    RefCountry { name: "Syria", lat: 34.8, lon: 39.0 },
    RefCountry { name: "Tanzania", lat: -6.4, lon: 34.9 },
    RefCountry { name: "Thailand", lat: 15.9, lon: 100.9 },
    RefCountry { name: "Togo", lat: 8.6, lon: 0.8 },
    RefCountry { name: "Tunisia", lat: 33.9, lon: 9.5 },
    RefCountry { name: "Turkey", lat: 38.9, lon: 35.2 },
    RefCountry { name: "Uganda", lat: 1.4, lon: 32.3 },
    RefCountry { name: "United Kingdom", lat: 55.4, lon: -3.4 },
    RefCountry { name: "United States", lat: 37.1, lon: -95.7 },
    RefCountry { name: "Uruguay", lat: -32.5, lon: -55.8 },
    RefCountry { name: "Venezuela", lat: 6.4, lon: -66.6 },
    RefCountry { name: "Vietnam", lat: 14.1, lon: 108.3 },
    RefCountry { name: "Yemen", lat: 15.6, lon: 48.5 },
    RefCountry { name: "Zambia", lat: -13.1, lon: 27.8 },
    RefCountry { name: "Zimbabwe", lat: -19.0, lon: 29.2 },
];

pub fn reference_names() -> impl Iterator<Item = &'static str> {
    REFERENCE_COUNTRIES.iter().map(|c| c.name)
}

/// Marker position as (lon, lat), matching canvas coordinates.
pub fn centroid(name: &str) -> Option<(f64, f64)> {
    REFERENCE_COUNTRIES
        .iter()
        .find(|c| c.name == name)
        .map(|c| (c.lon, c.lat))
}

/// Winners that cannot appear on the map because their spelling is not in
/// the reference list. Reported once at startup so the mismatch stays
/// visible instead of silently vanishing.
pub fn missing_winners(counts: &HashMap<String, u32>) -> Vec<String> {
    let mut missing: Vec<String> = counts
        .keys()
        .filter(|name| centroid(name).is_none())
        .cloned()
        .collect();
    missing.sort_unstable();
    missing
}

#[cfg(test)]
mod tests {
    use super::{REFERENCE_COUNTRIES, centroid};

    #[test]
    fn reference_names_are_unique() {
        let mut names: Vec<&str> = REFERENCE_COUNTRIES.iter().map(|c| c.name).collect();
        names.sort_unstable();
        let before = names.len();
        names.dedup();
        assert_eq!(before, names.len());
    }

    #[test]
    fn historical_spellings_are_absent() {
        assert!(centroid("Brazil").is_some());
        assert!(centroid("West Germany").is_none());
        assert!(centroid("England").is_none());
    }
}
