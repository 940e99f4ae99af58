/// Candidate words, all lowercase ASCII.
pub const WORDLIST: [&str; 55] = [
    "alpha", "beta", "gamma", "delta", "echo", "frost", "storm", "cloud", "blade", "spark", "forge",
    "pulse", "drift", "shade", "flame", "steel", "stone", "ocean", "river", "mount", "valley",
    "forest", "meadow", "desert", "tiger", "viper", "nexus", "cipher", "phoenix", "dragon",
    "knight", "titan", "cobra", "eagle", "falcon", "raven", "wolf", "bear", "lion", "hawk",
    "shadow", "crystal", "thunder", "plasma", "quantum", "vector", "matrix", "prism", "ember",
    "aurora", "comet", "galaxy", "stellar", "lunar", "solar",
];
