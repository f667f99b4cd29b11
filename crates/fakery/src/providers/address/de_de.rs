use super::AddressLocale;
use crate::types::Choices;

pub static DE_DE: AddressLocale = AddressLocale {
    address_formats: Choices::Uniform(&["{{street_address}}\n{{postcode}} {{city}}"]),
    street_address_formats: Choices::Uniform(&["{{street_name}} {{building_number}}"]),
    street_name_formats: Choices::Uniform(&[
        "{{first_name}}-{{last_name}}-{{street_suffix}}",
        "{{city_name}}er {{street_suffix}}",
        "{{last_name}} {{street_suffix}}",
    ]),
    street_suffixes: Choices::Uniform(&["Gasse", "Platz", "Ring", "Straße", "Weg", "Allee"]),
    building_number_formats: Choices::Uniform(&["###", "##", "#", "#/#"]),
    city_formats: Choices::Uniform(&["{{city_name}}"]),
    city_suffixes: Choices::Uniform(&["dorf", "hausen", "heim", "berg", "burg", "feld", "stadt"]),
    postcode_formats: Choices::Uniform(&["#####"]),
    countries: Choices::Uniform(&[
        "Ägypten", "Argentinien", "Australien", "Belgien", "Brasilien", "China", "Dänemark",
        "Deutschland", "Finnland", "Frankreich", "Griechenland", "Indien", "Irland", "Italien",
        "Japan", "Kanada", "Mexiko", "Neuseeland", "Niederlande", "Norwegen", "Österreich",
        "Polen", "Portugal", "Schweden", "Schweiz", "Spanien", "Südafrika",
        "Vereinigte Staaten von Amerika", "Vereinigtes Königreich",
    ]),
    states: Choices::Uniform(&[
        "Baden-Württemberg", "Bayern", "Berlin", "Brandenburg", "Bremen", "Hamburg", "Hessen",
        "Mecklenburg-Vorpommern", "Niedersachsen", "Nordrhein-Westfalen", "Rheinland-Pfalz",
        "Saarland", "Sachsen", "Sachsen-Anhalt", "Schleswig-Holstein", "Thüringen",
    ]),
    states_abbr: None,
    city_prefixes: None,
    city_names: Some(Choices::Uniform(&[
        "Aachen", "Augsburg", "Bamberg", "Berlin", "Bielefeld", "Bochum", "Bonn", "Bremen",
        "Darmstadt", "Dortmund", "Dresden", "Düsseldorf", "Erfurt", "Essen", "Frankfurt",
        "Freiburg", "Göttingen", "Hamburg", "Hannover", "Heidelberg", "Karlsruhe", "Kiel",
        "Köln", "Leipzig", "Lübeck", "Mainz", "Mannheim", "München", "Münster", "Nürnberg",
        "Potsdam", "Regensburg", "Rostock", "Stuttgart", "Ulm", "Wiesbaden", "Würzburg",
    ])),
    secondary_address_formats: None,
};
