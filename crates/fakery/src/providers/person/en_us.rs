use super::PersonLocale;
use crate::types::Choices;

pub static EN_US: PersonLocale = PersonLocale {
    formats_male: Choices::Weighted(&[
        ("{{first_name_male}} {{last_name}}", 0.97),
        ("{{prefix_male}} {{first_name_male}} {{last_name}}", 0.015),
        ("{{first_name_male}} {{last_name}} {{suffix_male}}", 0.02),
        ("{{prefix_male}} {{first_name_male}} {{last_name}} {{suffix_male}}", 0.005),
    ]),
    formats_female: Choices::Weighted(&[
        ("{{first_name_female}} {{last_name}}", 0.97),
        ("{{prefix_female}} {{first_name_female}} {{last_name}}", 0.015),
        ("{{first_name_female}} {{last_name}} {{suffix_female}}", 0.02),
        ("{{prefix_female}} {{first_name_female}} {{last_name}} {{suffix_female}}", 0.005),
    ]),
    first_names_male: Choices::Weighted(&[
        ("James", 0.032),
        ("John", 0.031),
        ("Robert", 0.030),
        ("Michael", 0.029),
        ("William", 0.024),
        ("David", 0.024),
        ("Richard", 0.015),
        ("Joseph", 0.013),
        ("Thomas", 0.012),
        ("Charles", 0.011),
        ("Christopher", 0.011),
        ("Daniel", 0.010),
        ("Matthew", 0.009),
        ("Anthony", 0.008),
        ("Mark", 0.008),
        ("Donald", 0.007),
        ("Steven", 0.007),
        ("Paul", 0.006),
        ("Andrew", 0.006),
        ("Joshua", 0.006),
        ("Kenneth", 0.005),
        ("Kevin", 0.005),
        ("Brian", 0.005),
        ("George", 0.005),
        ("Timothy", 0.004),
        ("Ronald", 0.004),
        ("Edward", 0.004),
        ("Jason", 0.004),
        ("Jeffrey", 0.004),
        ("Ryan", 0.004),
    ]),
    first_names_female: Choices::Weighted(&[
        ("Mary", 0.029),
        ("Patricia", 0.016),
        ("Jennifer", 0.015),
        ("Linda", 0.015),
        ("Elizabeth", 0.014),
        ("Barbara", 0.013),
        ("Susan", 0.011),
        ("Jessica", 0.011),
        ("Sarah", 0.010),
        ("Karen", 0.010),
        ("Lisa", 0.009),
        ("Nancy", 0.009),
        ("Betty", 0.008),
        ("Margaret", 0.008),
        ("Sandra", 0.007),
        ("Ashley", 0.007),
        ("Kimberly", 0.007),
        ("Emily", 0.006),
        ("Donna", 0.006),
        ("Michelle", 0.006),
        ("Carol", 0.006),
        ("Amanda", 0.006),
        ("Dorothy", 0.005),
        ("Melissa", 0.005),
        ("Deborah", 0.005),
        ("Stephanie", 0.005),
        ("Rebecca", 0.005),
        ("Sharon", 0.004),
        ("Laura", 0.004),
        ("Cynthia", 0.004),
    ]),
    last_names: Choices::Weighted(&[
        ("Smith", 0.021712),
        ("Johnson", 0.01697),
        ("Williams", 0.014016),
        ("Brown", 0.012805),
        ("Jones", 0.012776),
        ("Miller", 0.010125),
        ("Davis", 0.009854),
        ("Garcia", 0.007257),
        ("Rodriguez", 0.006758),
        ("Wilson", 0.006445),
        ("Martinez", 0.006219),
        ("Anderson", 0.005708),
        ("Taylor", 0.005609),
        ("Thomas", 0.005527),
        ("Hernandez", 0.005454),
        ("Moore", 0.005404),
        ("Martin", 0.005225),
        ("Jackson", 0.005197),
        ("Thompson", 0.004883),
        ("White", 0.004757),
        ("Lopez", 0.004511),
        ("Lee", 0.004477),
        ("Gonzalez", 0.004472),
        ("Harris", 0.004415),
        ("Clark", 0.004011),
        ("Lewis", 0.003699),
        ("Robinson", 0.003663),
        ("Walker", 0.003619),
        ("Perez", 0.003522),
        ("Hall", 0.003422),
    ]),
    prefixes_male: Choices::Weighted(&[("Mr.", 0.7), ("Dr.", 0.3)]),
    prefixes_female: Choices::Weighted(&[("Mrs.", 0.5), ("Ms.", 0.1), ("Miss", 0.1), ("Dr.", 0.3)]),
    suffixes_male: Some(Choices::Weighted(&[
        ("Jr.", 0.2),
        ("Sr.", 0.2),
        ("I", 0.025),
        ("II", 0.025),
        ("III", 0.025),
        ("IV", 0.025),
        ("V", 0.025),
        ("MD", 0.3),
        ("DDS", 0.3),
        ("PhD", 0.1),
        ("DVM", 0.1),
    ])),
    suffixes_female: Some(Choices::Weighted(&[("MD", 0.5), ("DDS", 0.3), ("PhD", 0.1), ("DVM", 0.2)])),
};
