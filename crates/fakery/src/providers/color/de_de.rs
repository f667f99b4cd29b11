use super::ColorLocale;

pub static DE_DE: ColorLocale = ColorLocale {
    all_colors: &[
        ("Aliceblau", "#F0F8FF"),
        ("Antikweiß", "#FAEBD7"),
        ("Aquamarinblau", "#7FFFD4"),
        ("Azurblau", "#F0FFFF"),
        ("Beige", "#F5F5DC"),
        ("Blau", "#0000FF"),
        ("Blauviolett", "#8A2BE2"),
        ("Braun", "#A52A2A"),
        ("Dunkelblau", "#00008B"),
        ("Dunkelgrün", "#006400"),
        ("Dunkelorange", "#FF8C00"),
        ("Elfenbein", "#FFFFF0"),
        ("Gelb", "#FFFF00"),
        ("Gold", "#FFD700"),
        ("Grau", "#808080"),
        ("Grün", "#008000"),
        ("Hellblau", "#ADD8E6"),
        ("Himmelblau", "#87CEEB"),
        ("Indigo", "#4B0082"),
        ("Kastanienbraun", "#800000"),
        ("Koralle", "#FF7F50"),
        ("Lavendel", "#E6E6FA"),
        ("Limette", "#00FF00"),
        ("Marineblau", "#000080"),
        ("Olivgrün", "#808000"),
        ("Orange", "#FFA500"),
        ("Orchidee", "#DA70D6"),
        ("Pflaume", "#DDA0DD"),
        ("Purpur", "#800080"),
        ("Rosa", "#FFC0CB"),
        ("Rot", "#FF0000"),
        ("Schokolade", "#D2691E"),
        ("Schwarz", "#000000"),
        ("Silber", "#C0C0C0"),
        ("Tomate", "#FF6347"),
        ("Türkis", "#40E0D0"),
        ("Veilchen", "#EE82EE"),
        ("Weiß", "#FFFFFF"),
        ("Weizen", "#F5DEB3"),
    ],
    safe_colors: &[
        "schwarz", "bordeaux", "grün", "rotbraun", "purpur", "türkis", "grau", "silber", "rot",
        "lila", "gelb", "blau", "weiß", "limette", "aquamarinblau",
    ],
};
