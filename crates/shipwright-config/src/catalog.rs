//! Catalog of the prompt modules the editor knows about.
//!
//! The catalog drives the module picker and validation: any top-level key
//! that is neither a global setting nor a catalog id is reported as unknown.

use serde::Serialize;

/// Grouping used by the module picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleCategory {
    Core,
    Vcs,
    Languages,
    Tools,
    Cloud,
    System,
}

impl ModuleCategory {
    pub const ALL: [ModuleCategory; 6] = [
        ModuleCategory::Core,
        ModuleCategory::Vcs,
        ModuleCategory::Languages,
        ModuleCategory::Tools,
        ModuleCategory::Cloud,
        ModuleCategory::System,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ModuleCategory::Core => "core",
            ModuleCategory::Vcs => "vcs",
            ModuleCategory::Languages => "languages",
            ModuleCategory::Tools => "tools",
            ModuleCategory::Cloud => "cloud",
            ModuleCategory::System => "system",
        }
    }
}

/// Static description of one prompt module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModuleInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: ModuleCategory,
    pub icon: &'static str,
    pub default_enabled: bool,
    pub requires_nerd_font: bool,
    /// Module shells out or walks the filesystem on every prompt.
    pub expensive: bool,
}

const fn module(
    id: &'static str,
    name: &'static str,
    description: &'static str,
    category: ModuleCategory,
    icon: &'static str,
    default_enabled: bool,
) -> ModuleInfo {
    ModuleInfo {
        id,
        name,
        description,
        category,
        icon,
        default_enabled,
        requires_nerd_font: false,
        expensive: false,
    }
}

const fn expensive(info: ModuleInfo) -> ModuleInfo {
    ModuleInfo {
        expensive: true,
        ..info
    }
}

const fn nerd_font(info: ModuleInfo) -> ModuleInfo {
    ModuleInfo {
        requires_nerd_font: true,
        ..info
    }
}

use ModuleCategory::*;

/// Every module in the catalog, grouped by category.
pub static MODULES: &[ModuleInfo] = &[
    module("username", "Username", "Shows current username", Core, "👤", true),
    module("hostname", "Hostname", "Shows system hostname", Core, "💻", true),
    module("directory", "Directory", "Current working directory", Core, "📂", true),
    module("character", "Character", "The prompt character (usually ❯)", Core, "➜", true),
    module("line_break", "Line Break", "Splits prompt into two lines", Core, "↵", false),
    module("cmd_duration", "Cmd Duration", "Shows how long the last command took", Core, "⏱️", true),
    module("time", "Time", "Current time", Core, "🕒", false),
    module("jobs", "Jobs", "Number of background jobs", Core, "⚙️", true),
    module("battery", "Battery", "Battery status", Core, "🔋", true),
    module("git_branch", "Git Branch", "Current git branch", Vcs, "🌱", true),
    expensive(module("git_status", "Git Status", "Git status symbols", Vcs, "📊", true)),
    module("git_state", "Git State", "Rebase/merge state", Vcs, "🔄", true),
    module("git_metrics", "Git Metrics", "Added/deleted lines count", Vcs, "📈", false),
    nerd_font(module("nodejs", "Node.js", "Node.js version", Languages, "⬢", true)),
    nerd_font(module("python", "Python", "Python version", Languages, "🐍", true)),
    module("rust", "Rust", "Rust version", Languages, "🦀", true),
    module("golang", "Go", "Go version", Languages, "🐹", true),
    module("java", "Java", "Java version", Languages, "☕", true),
    module("php", "PHP", "PHP version", Languages, "🐘", true),
    module("ruby", "Ruby", "Ruby version", Languages, "💎", true),
    module("package", "Package", "Package version (npm, cargo, etc.)", Tools, "📦", true),
    module("docker_context", "Docker", "Docker context", Tools, "🐳", true),
    expensive(module("kubernetes", "Kubernetes", "Kubernetes context", Tools, "☸️", true)),
    module("terraform", "Terraform", "Terraform workspace", Tools, "💠", false),
    expensive(module("aws", "AWS", "AWS profile/region", Cloud, "☁️", true)),
    expensive(module("gcloud", "Google Cloud", "GCloud project", Cloud, "🇬", false)),
    module("azure", "Azure", "Azure subscription", Cloud, "🇦", false),
    module("memory_usage", "Memory", "System memory usage", System, "💾", false),
    module("env_var", "Env Var", "Environment variable value", System, "💲", false),
];

/// Top-level keys that are global settings rather than modules.
pub const GLOBAL_KEYS: &[&str] = &[
    "format",
    "right_format",
    "continuation_prompt",
    "add_newline",
    "scan_timeout",
    "command_timeout",
    "palette",
    "palettes",
    "custom",
];

/// Looks up a module by id.
pub fn find_module(id: &str) -> Option<&'static ModuleInfo> {
    MODULES.iter().find(|m| m.id == id)
}

/// Returns true if `id` names a catalog module.
pub fn is_known_module(id: &str) -> bool {
    find_module(id).is_some()
}

/// Modules in `category`, in catalog order.
pub fn modules_in(category: ModuleCategory) -> impl Iterator<Item = &'static ModuleInfo> {
    MODULES.iter().filter(move |m| m.category == category)
}
