pub const DEFAULT_DEALER_STANDS_ON: u8 = 17;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Action {
    Hit,
    Stand,
}

impl Action {
    /// Parses the one-letter console answer. Anything else is not a choice.
    pub fn from_code(code: &str) -> Option<Action> {
        match code {
            "h" => Some(Action::Hit),
            "s" => Some(Action::Stand),
            _ => None,
        }
    }
}

/// Fixed-threshold dealer play: draw below the threshold, stand at or above it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DealerRule {
    pub stands_on: u8,
}

impl DealerRule {
    pub fn new(stands_on: u8) -> Self {
        DealerRule { stands_on }
    }

    pub fn decide_action(&self, total: u8) -> Action {
        if total < self.stands_on {
            Action::Hit
        } else {
            Action::Stand
        }
    }
}

impl Default for DealerRule {
    fn default() -> Self {
        DealerRule::new(DEFAULT_DEALER_STANDS_ON)
    }
}
