//! Fixed configuration payloads installed by the bootstrap
//!
//! Everything here is immutable module-level data: the bundle location,
//! the extension and dependency lists, and the config-file contents the
//! configurator writes.

use serde_json::{json, Value};

/// Remote bundle containing the downstream setup script.
pub const BUNDLE_URL: &str =
    "https://github.com/Zachacious/ts-vscode-config/raw/main/setup.zip";

/// Entry point inside the bundle, executed with `node` after extraction.
pub const ENTRY_SCRIPT: &str = "setup.js";

/// VS Code extensions installed through the editor CLI, in install order.
pub const EXTENSIONS: [&str; 12] = [
    "dbaeumer.vscode-eslint",
    "esbenp.prettier-vscode",
    "rbbit.typescript-hero",
    "christian-kohler.path-intellisense",
    "coenraads.bracket-pair-colorizer-2",
    "eamodio.gitlens",
    "rvest.vs-code-prettier-eslint",
    "usernamehw.errorlens",
    "bradlc.vscode-tailwindcss",
    "amatiasq.sort-imports",
    "formulahendry.auto-rename-tag",
    "aaron-bond.better-comments",
];

/// Development dependencies installed through the detected package manager.
pub const DEV_DEPENDENCIES: [&str; 9] = [
    "typescript",
    "eslint",
    "prettier",
    "eslint-plugin-import",
    "eslint-plugin-unused-imports",
    "eslint-plugin-security",
    "@typescript-eslint/eslint-plugin",
    "@typescript-eslint/parser",
    "prettier-plugin-tailwindcss",
];

/// `package.json` scripts seeded only where the manifest does not
/// already define them.
#[must_use]
pub fn default_scripts() -> [(&'static str, &'static str); 5] {
    [
        ("format", "prettier --write ."),
        ("lint", "eslint ."),
        ("type-check", "tsc --noEmit"),
        ("lint:fix", "eslint . --fix"),
        ("sort:imports", "tsc && prettier --write ."),
    ]
}

/// Block appended to `.prettierignore`.
pub const PRETTIER_IGNORE: &str = "node_modules\ndist\nbuild\n.vscode\n*.log\n*.lock\n";

/// Block appended to `.eslintignore`.
pub const ESLINT_IGNORE: &str = "node_modules\ndist\nbuild\n*.log\n*.lock\n";

/// Block appended to `.gitignore`.
pub const GIT_IGNORE: &str = "node_modules/\ndist/\nbuild/\n.env\n*.log\n*.lock\n";

/// Workspace settings merged into `.vscode/settings.json`. On key
/// conflict these values win over what the file already holds.
#[must_use]
pub fn default_settings() -> Value {
    json!({
        "editor.formatOnSave": true,
        "editor.defaultFormatter": "esbenp.prettier-vscode",
        "eslint.format.enable": true,
        "typescript.tsdk": "node_modules/typescript/lib",
        "tailwindCSS.includeLanguages": {
            "typescript": "javascript",
            "typescriptreact": "javascript"
        },
        "files.exclude": {
            "**/node_modules": true,
            "**/dist": true,
            "**/build": true
        }
    })
}
