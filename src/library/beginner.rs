// Beginner words: three letters each.

pub static BEGINNER_WORDS: [&str; 50] = [
    "cat", "dog", "run", "fun", "sun", "bug", "hug", "cup", "top", "hop",
    "red", "big", "yes", "mom", "dad", "car", "bus", "egg", "hat", "bat",
    "bag", "pig", "dig", "fig", "wig", "log", "fog", "jog", "box", "fox",
    "six", "mix", "fix", "zip", "tip", "rip", "lap", "map", "tap", "cap",
    "pen", "ten", "men", "hen", "den", "net", "wet", "set", "get", "pet",
];
