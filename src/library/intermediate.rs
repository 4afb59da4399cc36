// Intermediate words: five to seven letters.

pub static INTERMEDIATE_WORDS: [&str; 44] = [
    "hello", "world", "house", "mouse", "water", "happy", "smile", "magic",
    "brave", "smart", "quick", "funny", "party", "dance", "music", "dream",
    "cloud", "flower", "button", "purple", "orange", "yellow", "friend",
    "school", "garden", "rabbit", "turtle", "monkey", "cookie", "bridge",
    "castle", "dragon", "prince", "queen", "tiger", "eagle", "ocean",
    "forest", "rainbow", "thunder", "winter", "summer", "spring", "autumn",
];
