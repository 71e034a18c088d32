use crate::planner::domain::{CityEntry, CityGroup};

/// Multiplier applied when a city is missing or not in the table.
pub const DEFAULT_CITY_MULTIPLIER: f64 = 1.0;

const fn city(
    value: &'static str,
    name: &'static str,
    multiplier: f64,
    country: &'static str,
    flag: &'static str,
) -> CityEntry {
    CityEntry {
        value,
        name,
        multiplier,
        country,
        flag,
    }
}

const US_HIGH_COST: &[CityEntry] = &[
    city("new-york", "New York City, NY", 1.4, "US", "🇺🇸"),
    city("san-francisco", "San Francisco, CA", 1.5, "US", "🇺🇸"),
    city("los-angeles", "Los Angeles, CA", 1.3, "US", "🇺🇸"),
    city("seattle", "Seattle, WA", 1.25, "US", "🇺🇸"),
    city("boston", "Boston, MA", 1.3, "US", "🇺🇸"),
    city("washington-dc", "Washington, DC", 1.35, "US", "🇺🇸"),
];

const US_MEDIUM_COST: &[CityEntry] = &[
    city("chicago", "Chicago, IL", 1.1, "US", "🇺🇸"),
    city("denver", "Denver, CO", 1.15, "US", "🇺🇸"),
    city("austin", "Austin, TX", 1.2, "US", "🇺🇸"),
    city("atlanta", "Atlanta, GA", 1.05, "US", "🇺🇸"),
    city("philadelphia", "Philadelphia, PA", 1.1, "US", "🇺🇸"),
    city("miami", "Miami, FL", 1.15, "US", "🇺🇸"),
];

const US_LOW_COST: &[CityEntry] = &[
    city("kansas-city", "Kansas City, MO", 0.8, "US", "🇺🇸"),
    city("indianapolis", "Indianapolis, IN", 0.75, "US", "🇺🇸"),
    city("cleveland", "Cleveland, OH", 0.7, "US", "🇺🇸"),
    city("birmingham", "Birmingham, AL", 0.65, "US", "🇺🇸"),
    city("buffalo", "Buffalo, NY", 0.7, "US", "🇺🇸"),
    city("memphis", "Memphis, TN", 0.7, "US", "🇺🇸"),
];

const UNITED_KINGDOM: &[CityEntry] = &[
    city("london", "London", 1.4, "UK", "🇬🇧"),
    city("manchester", "Manchester", 1.0, "UK", "🇬🇧"),
    city("edinburgh", "Edinburgh", 1.1, "UK", "🇬🇧"),
    city("birmingham-uk", "Birmingham", 0.9, "UK", "🇬🇧"),
];

const CANADA: &[CityEntry] = &[
    city("toronto", "Toronto", 1.2, "Canada", "🇨🇦"),
    city("vancouver", "Vancouver", 1.3, "Canada", "🇨🇦"),
    city("montreal", "Montreal", 1.0, "Canada", "🇨🇦"),
    city("calgary", "Calgary", 1.05, "Canada", "🇨🇦"),
];

const AUSTRALIA: &[CityEntry] = &[
    city("sydney", "Sydney", 1.35, "Australia", "🇦🇺"),
    city("melbourne", "Melbourne", 1.25, "Australia", "🇦🇺"),
    city("brisbane", "Brisbane", 1.1, "Australia", "🇦🇺"),
    city("perth", "Perth", 1.15, "Australia", "🇦🇺"),
];

const EUROPE: &[CityEntry] = &[
    city("paris", "Paris, France", 1.3, "France", "🇫🇷"),
    city("berlin", "Berlin, Germany", 1.0, "Germany", "🇩🇪"),
    city("amsterdam", "Amsterdam, Netherlands", 1.25, "Netherlands", "🇳🇱"),
    city("zurich", "Zurich, Switzerland", 1.6, "Switzerland", "🇨🇭"),
    city("stockholm", "Stockholm, Sweden", 1.2, "Sweden", "🇸🇪"),
    city("madrid", "Madrid, Spain", 0.95, "Spain", "🇪🇸"),
    city("rome", "Rome, Italy", 1.0, "Italy", "🇮🇹"),
];

const AFRICA: &[CityEntry] = &[
    city("cape-town", "Cape Town, South Africa", 0.6, "South Africa", "🇿🇦"),
    city("johannesburg", "Johannesburg, South Africa", 0.55, "South Africa", "🇿🇦"),
    city("lagos", "Lagos, Nigeria", 0.4, "Nigeria", "🇳🇬"),
    city("nairobi", "Nairobi, Kenya", 0.5, "Kenya", "🇰🇪"),
    city("cairo", "Cairo, Egypt", 0.3, "Egypt", "🇪🇬"),
    city("casablanca", "Casablanca, Morocco", 0.45, "Morocco", "🇲🇦"),
    city("accra", "Accra, Ghana", 0.4, "Ghana", "🇬🇭"),
    city("addis-ababa", "Addis Ababa, Ethiopia", 0.25, "Ethiopia", "🇪🇹"),
    city("kampala", "Kampala, Uganda", 0.3, "Uganda", "🇺🇬"),
    city("dar-es-salaam", "Dar es Salaam, Tanzania", 0.35, "Tanzania", "🇹🇿"),
    city("kigali", "Kigali, Rwanda", 0.4, "Rwanda", "🇷🇼"),
    city("tunis", "Tunis, Tunisia", 0.35, "Tunisia", "🇹🇳"),
    city("algiers", "Algiers, Algeria", 0.3, "Algeria", "🇩🇿"),
    city("abidjan", "Abidjan, Côte d'Ivoire", 0.4, "Côte d'Ivoire", "🇨🇮"),
    city("dakar", "Dakar, Senegal", 0.35, "Senegal", "🇸🇳"),
];

const ASIA: &[CityEntry] = &[
    city("tokyo", "Tokyo, Japan", 1.3, "Japan", "🇯🇵"),
    city("singapore", "Singapore", 1.2, "Singapore", "🇸🇬"),
    city("hong-kong", "Hong Kong", 1.4, "Hong Kong", "🇭🇰"),
    city("shanghai", "Shanghai, China", 0.9, "China", "🇨🇳"),
    city("mumbai", "Mumbai, India", 0.4, "India", "🇮🇳"),
    city("bangalore", "Bangalore, India", 0.45, "India", "🇮🇳"),
    city("delhi", "Delhi, India", 0.5, "India", "🇮🇳"),
    city("seoul", "Seoul, South Korea", 1.2, "South Korea", "🇰🇷"),
    city("bangkok", "Bangkok, Thailand", 0.6, "Thailand", "🇹🇭"),
    city("kuala-lumpur", "Kuala Lumpur, Malaysia", 0.7, "Malaysia", "🇲🇾"),
    city("jakarta", "Jakarta, Indonesia", 0.5, "Indonesia", "🇮🇩"),
    city("manila", "Manila, Philippines", 0.6, "Philippines", "🇵🇭"),
    city("dubai", "Dubai, UAE", 1.3, "UAE", "🇦🇪"),
    city("tel-aviv", "Tel Aviv, Israel", 1.35, "Israel", "🇮🇱"),
];

const AMERICAS: &[CityEntry] = &[
    city("sao-paulo", "São Paulo, Brazil", 0.6, "Brazil", "🇧🇷"),
    city("mexico-city", "Mexico City, Mexico", 0.5, "Mexico", "🇲🇽"),
    city("buenos-aires", "Buenos Aires, Argentina", 0.4, "Argentina", "🇦🇷"),
    city("santiago", "Santiago, Chile", 0.7, "Chile", "🇨🇱"),
    city("lima", "Lima, Peru", 0.45, "Peru", "🇵🇪"),
    city("bogota", "Bogotá, Colombia", 0.4, "Colombia", "🇨🇴"),
    city("caracas", "Caracas, Venezuela", 0.3, "Venezuela", "🇻🇪"),
    city("montevideo", "Montevideo, Uruguay", 0.55, "Uruguay", "🇺🇾"),
];

const OTHER: &[CityEntry] = &[
    city("other", "Other Location", 1.0, "Other", "🌍"),
];

static CITY_GROUPS: &[CityGroup] = &[
    CityGroup {
        label: "🇺🇸 United States - High Cost",
        cities: US_HIGH_COST,
    },
    CityGroup {
        label: "🇺🇸 United States - Medium Cost",
        cities: US_MEDIUM_COST,
    },
    CityGroup {
        label: "🇺🇸 United States - Low Cost",
        cities: US_LOW_COST,
    },
    CityGroup {
        label: "🇬🇧 United Kingdom",
        cities: UNITED_KINGDOM,
    },
    CityGroup {
        label: "🇨🇦 Canada",
        cities: CANADA,
    },
    CityGroup {
        label: "🇦🇺 Australia",
        cities: AUSTRALIA,
    },
    CityGroup {
        label: "🇪🇺 Europe",
        cities: EUROPE,
    },
    CityGroup {
        label: "🌍 Africa",
        cities: AFRICA,
    },
    CityGroup {
        label: "🌏 Asia",
        cities: ASIA,
    },
    CityGroup {
        label: "🌎 Americas",
        cities: AMERICAS,
    },
    CityGroup {
        label: "Other",
        cities: OTHER,
    },
];

pub fn city_groups() -> &'static [CityGroup] {
    CITY_GROUPS
}

pub fn all_cities() -> impl Iterator<Item = &'static CityEntry> {
    CITY_GROUPS.iter().flat_map(|group| group.cities.iter())
}

/// Looks up a city by its key. Unknown keys return `None`.
pub fn find_city(key: &str) -> Option<&'static CityEntry> {
    all_cities().find(|city| city.value == key)
}

/// Cost-of-living multiplier for an optional city key, defaulting to 1.0.
pub fn city_multiplier(key: Option<&str>) -> f64 {
    key.and_then(find_city)
        .map(|city| city.multiplier)
        .unwrap_or(DEFAULT_CITY_MULTIPLIER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn city_keys_are_unique() {
        let mut seen = HashSet::new();
        for city in all_cities() {
            assert!(seen.insert(city.value), "duplicate city key {}", city.value);
        }
        assert_eq!(seen.len(), 75);
    }

    #[test]
    fn multipliers_stay_within_observed_range() {
        for city in all_cities() {
            assert!(city.multiplier >= 0.25 && city.multiplier <= 1.6, "{}", city.value);
        }
    }

    #[test]
    fn unknown_or_missing_city_defaults_to_one() {
        assert_eq!(city_multiplier(None), 1.0);
        assert_eq!(city_multiplier(Some("atlantis")), 1.0);
        assert_eq!(city_multiplier(Some("")), 1.0);
        assert_eq!(city_multiplier(Some("zurich")), 1.6);
    }

    #[test]
    fn find_city_returns_full_record() {
        let lagos = find_city("lagos").expect("lagos present");
        assert_eq!(lagos.country, "Nigeria");
        assert_eq!(lagos.multiplier, 0.4);
        assert!(find_city("Lagos").is_none());
    }
}
