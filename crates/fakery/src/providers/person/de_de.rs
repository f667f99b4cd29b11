use super::PersonLocale;
use crate::types::Choices;

pub static DE_DE: PersonLocale = PersonLocale {
    formats_male: Choices::Uniform(&[
        "{{first_name_male}} {{last_name}}",
        "{{first_name_male}} {{last_name}}",
        "{{first_name_male}} {{last_name}}",
        "{{first_name_male}} {{last_name}}",
        "{{first_name_male}} {{last_name}}-{{last_name}}",
        "{{prefix_male}} {{first_name_male}} {{last_name}}",
    ]),
    formats_female: Choices::Uniform(&[
        "{{first_name_female}} {{last_name}}",
        "{{first_name_female}} {{last_name}}",
        "{{first_name_female}} {{last_name}}",
        "{{first_name_female}} {{last_name}}",
        "{{first_name_female}} {{last_name}}-{{last_name}}",
        "{{prefix_female}} {{first_name_female}} {{last_name}}",
    ]),
    first_names_male: Choices::Uniform(&[
        "Achim", "Albert", "Alexander", "Andreas", "Bernd", "Björn", "Christian", "Dieter",
        "Dirk", "Eckhard", "Felix", "Frank", "Friedrich", "Georg", "Günter", "Hans", "Heinz",
        "Helmut", "Jan", "Jens", "Jürgen", "Karl", "Klaus", "Lars", "Lukas", "Markus",
        "Matthias", "Michael", "Niklas", "Peter", "Ralf", "Stefan", "Thomas", "Uwe", "Wolfgang",
    ]),
    first_names_female: Choices::Uniform(&[
        "Angelika", "Anja", "Anna", "Birgit", "Brigitte", "Christina", "Claudia", "Doris",
        "Elke", "Emma", "Erika", "Gabriele", "Gisela", "Hannelore", "Heike", "Ilse", "Ingrid",
        "Jana", "Julia", "Karin", "Katrin", "Lea", "Lena", "Marie", "Monika", "Nicole", "Petra",
        "Renate", "Sabine", "Sandra", "Sophie", "Stefanie", "Susanne", "Ursula", "Yvonne",
    ]),
    last_names: Choices::Uniform(&[
        "Bauer", "Becker", "Braun", "Fischer", "Frank", "Hartmann", "Hoffmann", "Hofmann",
        "Keller", "Klein", "Koch", "König", "Krause", "Krüger", "Lange", "Lehmann", "Meier",
        "Meyer", "Müller", "Neumann", "Richter", "Schäfer", "Schmid", "Schmidt", "Schmitt",
        "Schneider", "Schröder", "Schulz", "Schwarz", "Wagner", "Weber", "Werner", "Wolf",
        "Zimmermann",
    ]),
    prefixes_male: Choices::Uniform(&["Herr", "Dr.", "Ing.", "Dipl.-Ing.", "Prof.", "Univ.Prof."]),
    prefixes_female: Choices::Uniform(&["Frau", "Dr.", "Ing.", "Dipl.-Ing.", "Prof.", "Univ.Prof."]),
    suffixes_male: None,
    suffixes_female: None,
};
