use super::LoremLocale;

pub static EN_US: LoremLocale = LoremLocale {
    word_list: &[
        "able", "about", "account", "across", "action", "activity", "actually", "add",
        "address", "admit", "adult", "affect", "after", "again", "against", "agency", "agent",
        "agree", "air", "all", "allow", "almost", "alone", "along", "already", "also", "always",
        "among", "amount", "analysis", "and", "animal", "another", "answer", "anyone", "appear",
        "apply", "approach", "area", "argue", "arm", "around", "arrive", "art", "article",
        "artist", "ask", "attack", "attention", "author", "avoid", "away", "baby", "back", "bad",
        "bag", "ball", "bank", "bar", "base", "beat", "beautiful", "because", "become", "bed",
        "before", "begin", "behavior", "behind", "believe", "benefit", "best", "better",
        "between", "beyond", "big", "bill", "black", "blood", "blue", "board", "body", "book",
        "born", "both", "box", "boy", "break", "bring", "brother", "budget", "build", "building",
        "business", "buy", "call", "camera", "campaign", "can", "cancer", "candidate", "capital",
        "car", "card", "care", "career", "carry", "case", "catch", "cause", "cell", "center",
        "central", "century", "certain", "chair", "challenge", "chance", "change", "character",
        "charge", "check", "child", "choice", "choose", "church", "citizen", "city", "civil",
        "claim", "class", "clear", "clearly", "close", "coach", "cold", "collection", "college",
        "color", "come", "commercial", "common", "community", "company", "compare", "computer",
        "concern", "condition", "conference", "consider", "consumer", "contain", "continue",
        "control", "cost", "could", "country", "couple", "course", "court", "cover", "create",
        "crime", "cultural", "culture", "cup", "current", "customer", "cut", "dark", "data",
        "daughter", "day", "dead", "deal", "decade", "decide", "decision", "deep", "defense",
    ],
    word_connector: " ",
    sentence_punctuation: ".",
};
