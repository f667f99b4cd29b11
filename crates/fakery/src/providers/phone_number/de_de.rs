use super::PhoneNumberLocale;

pub static DE_DE: PhoneNumberLocale = PhoneNumberLocale {
    formats: &[
        "+49(0)##########",
        "+49(0)#### ######",
        "+49 (0) ####-######",
        "0##########",
        "0#### ######",
        "0####-######",
        "(0####) ######",
    ],
    msisdn_formats: &["49151########", "49160########", "49170########", "49176########"],
};
