/// Fixed console text for a game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub title: String,
    pub prompt: String,
    pub invalid_input: String,
    pub opponent_prefix: String,
    pub separator: String,
    pub close_prompt: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            title: "Welcome to Rock Paper Scissors".to_owned(),
            prompt: "Enter your choice (a for Rock, b for Paper, c for Scissors): ".to_owned(),
            invalid_input: "Invalid input. Please choose a valid option.".to_owned(),
            opponent_prefix: "The opponent chose".to_owned(),
            separator: "-".repeat(25),
            close_prompt: "Press enter to close".to_owned(),
        }
    }
}
