use serde::Serialize;

use super::difficulty::Tier;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Challenge {
    pub id: String,
    pub title: String,
    pub description: String,
    pub starter_code: String,
    pub solution: String,
    pub hints: Vec<String>,
    pub difficulty: u8,
}

impl Challenge {
    fn new(
        id: &str,
        title: &str,
        description: &str,
        starter_code: &str,
        solution: &str,
        hints: &[&str],
        difficulty: u8,
    ) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            starter_code: starter_code.to_string(),
            solution: solution.to_string(),
            hints: hints.iter().map(|h| h.to_string()).collect(),
            difficulty,
        }
    }

    /// Placeholder challenges returned for unknown ids have no id.
    pub fn is_placeholder(&self) -> bool {
        self.id.is_empty()
    }
}

/// The fixed set of built-in challenges, in presentation order.
#[derive(Debug, Clone)]
pub struct ChallengeCatalog {
    challenges: Vec<Challenge>,
}

impl Default for ChallengeCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl ChallengeCatalog {
    pub fn new() -> Self {
        Self {
            challenges: built_in_challenges(),
        }
    }

    /// Returns an empty placeholder when `id` is unknown.
    pub fn get_challenge(&self, id: &str) -> Challenge {
        self.challenges
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .unwrap_or_default()
    }

    pub fn get_challenges_by_difficulty(&self, difficulty: u8) -> Vec<Challenge> {
        self.challenges
            .iter()
            .filter(|c| c.difficulty == difficulty)
            .cloned()
            .collect()
    }

    pub fn challenges_in_tier(&self, tier: Tier) -> Vec<Challenge> {
        self.challenges
            .iter()
            .filter(|c| tier.contains(c.difficulty))
            .cloned()
            .collect()
    }

    pub fn get_all_challenges(&self) -> Vec<Challenge> {
        self.challenges.clone()
    }

    pub fn len(&self) -> usize {
        self.challenges.len()
    }

    /// Keyword checks only. Solutions are never executed, and only two
    /// challenges have checks at all; the rest always pass.
    pub fn validate_solution(&self, challenge_id: &str, code: &str) -> bool {
        match challenge_id {
            "hello_world" => code.contains("print"),
            "create_part" => code.contains("Instance.new") && code.contains("workspace"),
            _ => true,
        }
    }
}

fn built_in_challenges() -> Vec<Challenge> {
    vec![
        Challenge::new(
            "hello_world",
            "Hello Roblox",
            "Print 'Hello, Roblox!' to the console",
            "-- Write your code here\n\n",
            "print(\"Hello, Roblox!\")",
            &["Use the print() function", "Strings are enclosed in quotes"],
            1,
        ),
        Challenge::new(
            "create_part",
            "Create a Part",
            "Create a new Part and parent it to workspace",
            "-- Create a part and add it to workspace\n\n",
            "local part = Instance.new(\"Part\")\npart.Parent = workspace",
            &["Use Instance.new()", "Set the Parent property to workspace"],
            1,
        ),
        Challenge::new(
            "part_properties",
            "Colorful Part",
            "Create a red part with size (10, 5, 10) and place it at position (0, 10, 0)",
            "-- Create a colored part with specific size and position\n\
             local part = Instance.new(\"Part\")\n\
             part.Parent = workspace\n\n\
             -- Your code here\n",
            "local part = Instance.new(\"Part\")\n\
             part.Parent = workspace\n\
             part.Size = Vector3.new(10, 5, 10)\n\
             part.Position = Vector3.new(0, 10, 0)\n\
             part.BrickColor = BrickColor.new(\"Bright red\")",
            &[
                "Use Vector3.new() for size and position",
                "Use BrickColor.new() for color",
            ],
            2,
        ),
        Challenge::new(
            "loop_practice",
            "Count to 10",
            "Use a for loop to print numbers from 1 to 10",
            "-- Write a for loop to count from 1 to 10\n\n",
            "for i = 1, 10 do\n    print(i)\nend",
            &["Use for i = start, end do", "Don't forget the 'end' keyword"],
            2,
        ),
        Challenge::new(
            "function_basic",
            "Greet Function",
            "Create a function called 'greet' that takes a name parameter and prints 'Hello, [name]!'",
            "-- Create a greet function\n\n",
            "local function greet(name)\n    print(\"Hello, \" .. name .. \"!\")\nend\n\ngreet(\"Player\")",
            &[
                "Use 'local function' to define a function",
                "Use .. for string concatenation",
            ],
            2,
        ),
        Challenge::new(
            "table_basics",
            "Table Operations",
            "Create a table with 3 player names and print each one using a loop",
            "-- Create a table and iterate through it\n\n",
            "local players = {\"Alice\", \"Bob\", \"Charlie\"}\n\
             for i, name in ipairs(players) do\n    print(name)\nend",
            &[
                "Tables use curly braces {}",
                "Use ipairs() to iterate over arrays",
            ],
            3,
        ),
        Challenge::new(
            "touch_detection",
            "Touch Detector",
            "Create a part that prints 'Touched!' when a player touches it",
            "local part = Instance.new(\"Part\")\npart.Parent = workspace\n\n-- Add touch detection here\n",
            "local part = Instance.new(\"Part\")\n\
             part.Parent = workspace\n\n\
             part.Touched:Connect(function(hit)\n    print(\"Touched!\")\nend)",
            &["Use the Touched event", "Connect events with :Connect()"],
            3,
        ),
        Challenge::new(
            "player_detection",
            "Player Detector",
            "Detect when a player's character touches a part and print the player's name",
            "local part = Instance.new(\"Part\")\npart.Parent = workspace\n\n-- Detect player touch\n",
            "local part = Instance.new(\"Part\")\n\
             part.Parent = workspace\n\n\
             part.Touched:Connect(function(hit)\n\
             \x20   local humanoid = hit.Parent:FindFirstChild(\"Humanoid\")\n\
             \x20   if humanoid then\n\
             \x20       local player = game.Players:GetPlayerFromCharacter(hit.Parent)\n\
             \x20       if player then\n\
             \x20           print(player.Name)\n\
             \x20       end\n\
             \x20   end\n\
             end)",
            &[
                "Check for Humanoid in the parent",
                "Use GetPlayerFromCharacter()",
            ],
            4,
        ),
        Challenge::new(
            "tween_basic",
            "Smooth Movement",
            "Use TweenService to smoothly move a part to position (0, 20, 0) over 2 seconds",
            "local TweenService = game:GetService(\"TweenService\")\n\
             local part = Instance.new(\"Part\")\n\
             part.Parent = workspace\n\n\
             -- Create and play tween\n",
            "local TweenService = game:GetService(\"TweenService\")\n\
             local part = Instance.new(\"Part\")\n\
             part.Parent = workspace\n\n\
             local goal = {Position = Vector3.new(0, 20, 0)}\n\
             local info = TweenInfo.new(2)\n\
             local tween = TweenService:Create(part, info, goal)\n\
             tween:Play()",
            &[
                "Create a goal table with properties",
                "Use TweenInfo.new() for timing",
            ],
            4,
        ),
        Challenge::new(
            "damage_function",
            "Damage System",
            "Create a function that damages a player's humanoid by a specified amount",
            "-- Create a damage function\n\n",
            "local function damagePlayer(player, amount)\n\
             \x20   local character = player.Character\n\
             \x20   if character then\n\
             \x20       local humanoid = character:FindFirstChild(\"Humanoid\")\n\
             \x20       if humanoid then\n\
             \x20           humanoid.Health = humanoid.Health - amount\n\
             \x20       end\n\
             \x20   end\n\
             end",
            &[
                "Get the character from the player",
                "Modify the Humanoid.Health property",
            ],
            5,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    const BUILT_IN_IDS: [&str; 10] = [
        "hello_world",
        "create_part",
        "part_properties",
        "loop_practice",
        "function_basic",
        "table_basics",
        "touch_detection",
        "player_detection",
        "tween_basic",
        "damage_function",
    ];

    #[test]
    fn test_lookup_built_in_ids() {
        let catalog = ChallengeCatalog::new();
        assert_eq!(catalog.len(), 10);
        for id in BUILT_IN_IDS {
            assert_eq!(catalog.get_challenge(id).id, id);
        }
    }

    #[test]
    fn test_unknown_id_returns_placeholder() {
        let catalog = ChallengeCatalog::new();
        for id in ["", "nope", "Hello_World", "hello_world "] {
            let c = catalog.get_challenge(id);
            assert!(c.is_placeholder());
            assert_eq!(c, Challenge::default());
        }
    }

    #[test]
    fn test_difficulty_filters() {
        let catalog = ChallengeCatalog::new();
        let ones: Vec<String> = catalog
            .get_challenges_by_difficulty(1)
            .into_iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ones, vec!["hello_world", "create_part"]);
        assert_eq!(catalog.get_challenges_by_difficulty(5).len(), 1);
        assert!(catalog.get_challenges_by_difficulty(0).is_empty());

        assert_eq!(catalog.challenges_in_tier(Tier::Beginner).len(), 5);
        assert_eq!(catalog.challenges_in_tier(Tier::Intermediate).len(), 4);
        assert_eq!(catalog.challenges_in_tier(Tier::Advanced).len(), 1);
    }

    #[test]
    fn test_every_challenge_is_well_formed() {
        for c in ChallengeCatalog::new().get_all_challenges() {
            assert!(!c.title.is_empty());
            assert!(!c.solution.is_empty());
            assert!(!c.hints.is_empty());
            assert!((1..=5).contains(&c.difficulty));
        }
    }

    #[test]
    fn test_validate_hello_world() {
        let catalog = ChallengeCatalog::new();
        assert!(catalog.validate_solution("hello_world", "print(\"hi\")"));
        assert!(!catalog.validate_solution("hello_world", "local x = 1"));
    }

    #[test]
    fn test_validate_create_part() {
        let catalog = ChallengeCatalog::new();
        assert!(catalog.validate_solution(
            "create_part",
            "local p = Instance.new(\"Part\")\np.Parent = workspace"
        ));
        assert!(!catalog.validate_solution("create_part", "Instance.new(\"Part\")"));
        assert!(!catalog.validate_solution("create_part", "workspace"));
    }

    #[test]
    fn test_unchecked_challenges_always_pass() {
        let catalog = ChallengeCatalog::new();
        assert!(catalog.validate_solution("loop_practice", ""));
        assert!(catalog.validate_solution("damage_function", "nonsense"));
        assert!(catalog.validate_solution("not_a_challenge", ""));
    }

    #[test]
    fn test_reference_solutions_pass_validation() {
        let catalog = ChallengeCatalog::new();
        for c in catalog.get_all_challenges() {
            assert!(catalog.validate_solution(&c.id, &c.solution), "{}", c.id);
        }
    }
}
