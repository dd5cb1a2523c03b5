use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snippet {
    pub title: String,
    pub description: String,
    pub code: String,
    pub category: String,
    pub difficulty: u8,
}

impl Snippet {
    pub fn new(title: &str, description: &str, code: &str, category: &str, difficulty: u8) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            code: code.to_string(),
            category: category.to_string(),
            difficulty,
        }
    }
}

/// Browsable collection of example code, grouped by category.
#[derive(Debug, Clone)]
pub struct SnippetLibrary {
    snippets: Vec<Snippet>,
}

impl Default for SnippetLibrary {
    fn default() -> Self {
        Self::new()
    }
}

impl SnippetLibrary {
    pub fn new() -> Self {
        let mut library = Self {
            snippets: Vec::new(),
        };
        for snippet in built_in_snippets() {
            library.add_snippet(snippet);
        }
        library
    }

    pub fn add_snippet(&mut self, snippet: Snippet) {
        self.snippets.push(snippet);
    }

    pub fn all(&self) -> &[Snippet] {
        &self.snippets
    }

    pub fn get_snippets_by_category(&self, category: &str) -> Vec<Snippet> {
        self.snippets
            .iter()
            .filter(|s| s.category == category)
            .cloned()
            .collect()
    }

    /// Case-insensitive substring match on the title only.
    pub fn search_snippets(&self, query: &str) -> Vec<Snippet> {
        let query = query.to_lowercase();
        self.snippets
            .iter()
            .filter(|s| s.title.to_lowercase().contains(&query))
            .cloned()
            .collect()
    }

    /// Categories in the order they first appear.
    pub fn get_categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for snippet in &self.snippets {
            if !categories.contains(&snippet.category) {
                categories.push(snippet.category.clone());
            }
        }
        categories
    }
}

fn built_in_snippets() -> Vec<Snippet> {
    vec![
        Snippet::new(
            "Create Part",
            "Creates a basic part in workspace",
            "local part = Instance.new(\"Part\")\npart.Parent = workspace\npart.Anchored = true",
            "Basics",
            1,
        ),
        Snippet::new(
            "Print Function",
            "Basic print statement",
            "print(\"Hello, World!\")",
            "Basics",
            1,
        ),
        Snippet::new(
            "Touch Event",
            "Detects when something touches a part",
            "part.Touched:Connect(function(hit)\n    print(\"Something touched the part!\")\nend)",
            "Events",
            2,
        ),
        Snippet::new(
            "Player Joined Event",
            "Detects when a player joins the game",
            "game.Players.PlayerAdded:Connect(function(player)\n    print(player.Name .. \" joined the game!\")\nend)",
            "Events",
            2,
        ),
        Snippet::new(
            "Basic Function",
            "Template for a basic function",
            "local function functionName(parameter)\n    -- Code here\n    return result\nend",
            "Functions",
            2,
        ),
        Snippet::new(
            "Tween Part",
            "Smoothly moves a part using TweenService",
            "local TweenService = game:GetService(\"TweenService\")\n\n\
             local part = workspace.Part\n\
             local goal = {Position = Vector3.new(0, 10, 0)}\n\
             local tweenInfo = TweenInfo.new(1)\n\n\
             local tween = TweenService:Create(part, tweenInfo, goal)\n\
             tween:Play()",
            "Animation",
            3,
        ),
        Snippet::new(
            "Remote Event (Server)",
            "Server-side remote event handler",
            "local ReplicatedStorage = game:GetService(\"ReplicatedStorage\")\n\
             local remoteEvent = ReplicatedStorage:WaitForChild(\"RemoteEvent\")\n\n\
             remoteEvent.OnServerEvent:Connect(function(player, ...)\n\
             \x20   -- Handle event\n\
             end)",
            "Networking",
            4,
        ),
        Snippet::new(
            "Remote Event (Client)",
            "Client-side remote event usage",
            "local ReplicatedStorage = game:GetService(\"ReplicatedStorage\")\n\
             local remoteEvent = ReplicatedStorage:WaitForChild(\"RemoteEvent\")\n\n\
             remoteEvent:FireServer(data)",
            "Networking",
            4,
        ),
        Snippet::new(
            "DataStore Save",
            "Save player data using DataStore",
            "local DataStoreService = game:GetService(\"DataStoreService\")\n\
             local playerData = DataStoreService:GetDataStore(\"PlayerData\")\n\n\
             local function saveData(player)\n\
             \x20   local success, err = pcall(function()\n\
             \x20       playerData:SetAsync(player.UserId, data)\n\
             \x20   end)\n\
             \x20   if not success then\n\
             \x20       warn(\"Failed to save data: \" .. err)\n\
             \x20   end\n\
             end",
            "Data",
            5,
        ),
        Snippet::new(
            "Button Click",
            "Handle GUI button click",
            "local button = script.Parent\n\n\
             button.MouseButton1Click:Connect(function()\n\
             \x20   print(\"Button clicked!\")\n\
             end)",
            "GUI",
            2,
        ),
    ]
}
