use super::AddressLocale;
use crate::types::Choices;

pub static EN_US: AddressLocale = AddressLocale {
    address_formats: Choices::Weighted(&[
        ("{{street_address}}\n{{city}}, {{state_abbr}} {{postcode}}", 25.0),
        ("{{street_address}}\n{{city}}, {{state}} {{postcode}}", 1.0),
    ]),
    street_address_formats: Choices::Uniform(&[
        "{{building_number}} {{street_name}}",
        "{{building_number}} {{street_name}} {{secondary_address}}",
    ]),
    street_name_formats: Choices::Uniform(&[
        "{{first_name}} {{street_suffix}}",
        "{{last_name}} {{street_suffix}}",
    ]),
    street_suffixes: Choices::Uniform(&[
        "Alley", "Avenue", "Bridge", "Brook", "Burg", "Circle", "Club", "Common", "Court",
        "Creek", "Crossing", "Drive", "Estates", "Expressway", "Fall", "Ferry", "Field",
        "Forest", "Fork", "Gardens", "Glen", "Green", "Grove", "Harbor", "Heights", "Highway",
        "Hill", "Hollow", "Island", "Junction", "Lake", "Landing", "Lane", "Light", "Loop",
        "Manor", "Meadow", "Mill", "Mission", "Mountain", "Park", "Parkway", "Pass", "Path",
        "Pike", "Pine", "Place", "Plaza", "Point", "Port", "Ridge", "River", "Road", "Route",
        "Row", "Shore", "Spring", "Square", "Station", "Stream", "Street", "Summit", "Terrace",
        "Trail", "Tunnel", "Turnpike", "Union", "Valley", "View", "Village", "Way", "Well",
    ]),
    building_number_formats: Choices::Uniform(&["%####", "%###", "%##"]),
    city_formats: Choices::Uniform(&[
        "{{city_prefix}} {{first_name}}{{city_suffix}}",
        "{{city_prefix}} {{first_name}}",
        "{{first_name}}{{city_suffix}}",
        "{{last_name}}{{city_suffix}}",
    ]),
    city_suffixes: Choices::Uniform(&[
        "town", "ton", "land", "ville", "berg", "burgh", "borough", "bury", "view", "port",
        "mouth", "stad", "furt", "chester", "fort", "haven", "side", "shire",
    ]),
    postcode_formats: Choices::Uniform(&["#####"]),
    countries: Choices::Uniform(&[
        "Argentina", "Australia", "Austria", "Belgium", "Brazil", "Canada", "Chile", "China",
        "Denmark", "Egypt", "Finland", "France", "Germany", "Greece", "India", "Ireland",
        "Italy", "Japan", "Kenya", "Mexico", "Netherlands", "New Zealand", "Norway", "Peru",
        "Poland", "Portugal", "South Africa", "Spain", "Sweden", "Switzerland",
        "United Kingdom", "United States of America",
    ]),
    states: Choices::Uniform(&[
        "Alabama", "Alaska", "Arizona", "Arkansas", "California", "Colorado", "Connecticut",
        "Delaware", "Florida", "Georgia", "Hawaii", "Idaho", "Illinois", "Indiana", "Iowa",
        "Kansas", "Kentucky", "Louisiana", "Maine", "Maryland", "Massachusetts", "Michigan",
        "Minnesota", "Mississippi", "Missouri", "Montana", "Nebraska", "Nevada",
        "New Hampshire", "New Jersey", "New Mexico", "New York", "North Carolina",
        "North Dakota", "Ohio", "Oklahoma", "Oregon", "Pennsylvania", "Rhode Island",
        "South Carolina", "South Dakota", "Tennessee", "Texas", "Utah", "Vermont", "Virginia",
        "Washington", "West Virginia", "Wisconsin", "Wyoming",
    ]),
    states_abbr: Some(Choices::Uniform(&[
        "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", "GA", "HI", "ID", "IL",
        "IN", "IA", "KS", "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE",
        "NV", "NH", "NJ", "NM", "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", "SD",
        "TN", "TX", "UT", "VT", "VA", "WA", "WV", "WI", "WY",
    ])),
    city_prefixes: Some(Choices::Uniform(&["North", "East", "West", "South", "New", "Lake", "Port"])),
    city_names: None,
    secondary_address_formats: Some(Choices::Uniform(&["Apt. ###", "Suite ###"])),
};
