// First-time words: home row only, then cross-hand pairs, then short home-row words.

pub static FIRSTTIME_WORDS: [&str; 46] = [
    // single home-row keys
    "a", "s", "d", "f", "j", "k", "l",
    // left hand pairs
    "as", "ad", "af", "sa", "sd", "sf", "da", "ds", "df", "fa", "fs", "fd",
    // right hand pairs
    "jk", "jl", "kj", "kl", "lj", "lk",
    // cross-hand pairs
    "aj", "ak", "al", "sj", "sk", "sl", "dj", "dk", "dl", "fj", "fk", "fl",
    // words
    "ask", "sad", "lad", "dad", "fall", "all", "lass", "flask", "salad",
];
