use super::PhoneNumberLocale;

pub static EN_US: PhoneNumberLocale = PhoneNumberLocale {
    formats: &[
        "###-###-####",
        "(###)###-####",
        "###.###.####",
        "+1-###-###-####",
        "###-###-####x###",
        "(###)###-####x####",
        "###.###.####x#####",
        "+1-###-###-####x###",
    ],
    msisdn_formats: &["#############"],
};
