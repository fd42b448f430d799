//! Country and region catalogue backing the Country and Region selects.
//!
//! The form treats this as an opaque lookup: a labelled country list and, for
//! a selected country, its subordinate regions. Unknown countries resolve to
//! an empty region list, which leaves the Region select empty rather than
//! failing.

struct CountryEntry {
    name: &'static str,
    regions: &'static [&'static str],
}

/// Entries sorted by country name; `regions` relies on the order for lookup.
static CATALOGUE: &[CountryEntry] = &[
    CountryEntry {
        name: "Australia",
        regions: &[
            "Australian Capital Territory",
            "New South Wales",
            "Northern Territory",
            "Queensland",
            "South Australia",
            "Tasmania",
            "Victoria",
            "Western Australia",
        ],
    },
    CountryEntry {
        name: "Brazil",
        regions: &[
            "Bahia",
            "Minas Gerais",
            "Paraná",
            "Pernambuco",
            "Rio Grande do Sul",
            "Rio de Janeiro",
            "Santa Catarina",
            "São Paulo",
        ],
    },
    CountryEntry {
        name: "Canada",
        regions: &[
            "Alberta",
            "British Columbia",
            "Manitoba",
            "New Brunswick",
            "Newfoundland and Labrador",
            "Northwest Territories",
            "Nova Scotia",
            "Nunavut",
            "Ontario",
            "Prince Edward Island",
            "Quebec",
            "Saskatchewan",
            "Yukon",
        ],
    },
    CountryEntry {
        name: "France",
        regions: &[
            "Auvergne-Rhône-Alpes",
            "Bourgogne-Franche-Comté",
            "Bretagne",
            "Centre-Val de Loire",
            "Corse",
            "Grand Est",
            "Hauts-de-France",
            "Normandie",
            "Nouvelle-Aquitaine",
            "Occitanie",
            "Pays de la Loire",
            "Provence-Alpes-Côte d'Azur",
            "Île-de-France",
        ],
    },
    CountryEntry {
        name: "Germany",
        regions: &[
            "Baden-Württemberg",
            "Bayern",
            "Berlin",
            "Brandenburg",
            "Bremen",
            "Hamburg",
            "Hessen",
            "Mecklenburg-Vorpommern",
            "Niedersachsen",
            "Nordrhein-Westfalen",
            "Rheinland-Pfalz",
            "Saarland",
            "Sachsen",
            "Sachsen-Anhalt",
            "Schleswig-Holstein",
            "Thüringen",
        ],
    },
    CountryEntry {
        name: "India",
        regions: &[
            "Delhi",
            "Gujarat",
            "Karnataka",
            "Kerala",
            "Maharashtra",
            "Punjab",
            "Rajasthan",
            "Tamil Nadu",
            "Uttar Pradesh",
            "West Bengal",
        ],
    },
    CountryEntry {
        name: "Japan",
        regions: &[
            "Aichi",
            "Fukuoka",
            "Hiroshima",
            "Hokkaido",
            "Kanagawa",
            "Kyoto",
            "Osaka",
            "Saitama",
            "Tokyo",
        ],
    },
    CountryEntry {
        name: "Mexico",
        regions: &[
            "Baja California",
            "Chihuahua",
            "Ciudad de México",
            "Guanajuato",
            "Jalisco",
            "Nuevo León",
            "Puebla",
            "Veracruz",
            "Yucatán",
        ],
    },
    CountryEntry {
        name: "United Kingdom",
        regions: &["England", "Northern Ireland", "Scotland", "Wales"],
    },
    CountryEntry {
        name: "United States",
        regions: &[
            "Alabama",
            "Alaska",
            "Arizona",
            "Arkansas",
            "California",
            "Colorado",
            "Connecticut",
            "Delaware",
            "Florida",
            "Georgia",
            "Hawaii",
            "Idaho",
            "Illinois",
            "Indiana",
            "Iowa",
            "Kansas",
            "Kentucky",
            "Louisiana",
            "Maine",
            "Maryland",
            "Massachusetts",
            "Michigan",
            "Minnesota",
            "Mississippi",
            "Missouri",
            "Montana",
            "Nebraska",
            "Nevada",
            "New Hampshire",
            "New Jersey",
            "New Mexico",
            "New York",
            "North Carolina",
            "North Dakota",
            "Ohio",
            "Oklahoma",
            "Oregon",
            "Pennsylvania",
            "Rhode Island",
            "South Carolina",
            "South Dakota",
            "Tennessee",
            "Texas",
            "Utah",
            "Vermont",
            "Virginia",
            "Washington",
            "West Virginia",
            "Wisconsin",
            "Wyoming",
        ],
    },
];

/// Labelled country list offered by the Country select, in display order.
pub fn countries() -> impl Iterator<Item = &'static str> {
    CATALOGUE.iter().map(|entry| entry.name)
}

/// Regions of the selected country; empty for countries the catalogue does
/// not know.
pub fn regions(country: &str) -> &'static [&'static str] {
    CATALOGUE
        .binary_search_by(|entry| entry.name.cmp(country))
        .ok()
        .and_then(|index| CATALOGUE.get(index))
        .map_or(&[], |entry| entry.regions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::values::DEFAULT_COUNTRY;

    #[test]
    fn catalogue_stays_sorted_for_binary_search() {
        let names: Vec<&str> = countries().collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }

    #[test]
    fn the_default_country_lists_all_fifty_states() {
        let states = regions(DEFAULT_COUNTRY);
        assert_eq!(states.len(), 50);
        assert!(states.contains(&"California"));
    }

    #[test]
    fn unknown_countries_resolve_to_an_empty_region_list() {
        assert!(regions("Atlantis").is_empty());
        assert!(regions("").is_empty());
    }

    #[test]
    fn region_lookup_matches_exact_country_labels_only() {
        assert!(!regions("United Kingdom").is_empty());
        assert!(regions("united kingdom").is_empty());
    }
}
