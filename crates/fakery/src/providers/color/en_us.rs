use super::ColorLocale;

pub static EN_US: ColorLocale = ColorLocale {
    all_colors: &[
        ("AliceBlue", "#F0F8FF"),
        ("AntiqueWhite", "#FAEBD7"),
        ("Aqua", "#00FFFF"),
        ("Aquamarine", "#7FFFD4"),
        ("Azure", "#F0FFFF"),
        ("Beige", "#F5F5DC"),
        ("Black", "#000000"),
        ("Blue", "#0000FF"),
        ("BlueViolet", "#8A2BE2"),
        ("Brown", "#A52A2A"),
        ("CadetBlue", "#5F9EA0"),
        ("Chartreuse", "#7FFF00"),
        ("Chocolate", "#D2691E"),
        ("Coral", "#FF7F50"),
        ("CornflowerBlue", "#6495ED"),
        ("Crimson", "#DC143C"),
        ("DarkBlue", "#00008B"),
        ("DarkGreen", "#006400"),
        ("DarkOrange", "#FF8C00"),
        ("DeepPink", "#FF1493"),
        ("FireBrick", "#B22222"),
        ("ForestGreen", "#228B22"),
        ("Gold", "#FFD700"),
        ("GoldenRod", "#DAA520"),
        ("Gray", "#808080"),
        ("Green", "#008000"),
        ("HotPink", "#FF69B4"),
        ("Indigo", "#4B0082"),
        ("Ivory", "#FFFFF0"),
        ("Khaki", "#F0E68C"),
        ("Lavender", "#E6E6FA"),
        ("LightBlue", "#ADD8E6"),
        ("Lime", "#00FF00"),
        ("Magenta", "#FF00FF"),
        ("Maroon", "#800000"),
        ("MintCream", "#F5FFFA"),
        ("Navy", "#000080"),
        ("Olive", "#808000"),
        ("Orange", "#FFA500"),
        ("Orchid", "#DA70D6"),
        ("Peru", "#CD853F"),
        ("Pink", "#FFC0CB"),
        ("Plum", "#DDA0DD"),
        ("Purple", "#800080"),
        ("Red", "#FF0000"),
        ("Salmon", "#FA8072"),
        ("SeaGreen", "#2E8B57"),
        ("Sienna", "#A0522D"),
        ("Silver", "#C0C0C0"),
        ("SkyBlue", "#87CEEB"),
        ("Tan", "#D2B48C"),
        ("Teal", "#008080"),
        ("Tomato", "#FF6347"),
        ("Turquoise", "#40E0D0"),
        ("Violet", "#EE82EE"),
        ("Wheat", "#F5DEB3"),
        ("White", "#FFFFFF"),
        ("Yellow", "#FFFF00"),
    ],
    safe_colors: &[
        "black", "maroon", "green", "navy", "olive", "purple", "teal", "lime", "blue", "silver",
        "gray", "yellow", "fuchsia", "aqua", "white",
    ],
};
