// Advanced words: long and multi-syllable.

pub static ADVANCED_WORDS: [&str; 32] = [
    "computer", "keyboard", "programming", "adventure", "chocolate",
    "butterfly", "elephant", "telephone", "dinosaur", "helicopter",
    "refrigerator", "microscope", "telescope", "photograph", "automobile",
    "playground", "wonderful", "beautiful", "fantastic", "incredible",
    "transportation", "imagination", "celebration", "conversation",
    "mathematics", "encyclopedia", "hippopotamus", "neighborhood",
    "responsibility", "extraordinary", "understanding", "enthusiastic",
];
