//! Environment configurator
//!
//! Linear pipeline over external tools and config files: editor check,
//! runtime detection, extension install, dependency install, manifest
//! merge, ignore files, workspace settings. The first failure aborts the
//! run; there is no rollback, so an interrupted run leaves the workspace
//! partially configured.

pub mod ignore;
pub mod manifest;
pub mod settings;

use std::path::PathBuf;

use crate::command::{editor_command, editor_installed, run_command};
use crate::defaults::{ESLINT_IGNORE, EXTENSIONS, GIT_IGNORE, PRETTIER_IGNORE};
use crate::error::{SetupError, SetupResult};
use crate::runtime::Runtime;

/// The configurator. Side effects only; build one per invocation.
pub struct Setup {
    root: PathBuf,
    editor: String,
    runtime: Option<Runtime>,
}

impl Setup {
    /// Create a configurator targeting `root` as the project directory.
    #[must_use]
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            editor: editor_command().to_string(),
            runtime: None,
        }
    }

    /// Override the editor CLI command.
    #[must_use]
    pub fn with_editor_command(mut self, command: impl Into<String>) -> Self {
        self.editor = command.into();
        self
    }

    /// Skip runtime detection and use this runtime.
    #[must_use]
    pub fn with_runtime(mut self, runtime: Runtime) -> Self {
        self.runtime = Some(runtime);
        self
    }

    /// Run the full setup pipeline.
    ///
    /// # Errors
    /// Returns the first failure: `EditorMissing`, `UnsupportedRuntime`,
    /// `CommandFailure` from any mandatory invocation, or an I/O or JSON
    /// error from the config-file steps.
    pub fn run(&self) -> SetupResult<()> {
        println!("Setting up the TypeScript environment...");

        if !editor_installed(&self.editor) {
            return Err(SetupError::EditorMissing);
        }

        let runtime = Runtime::detect(self.runtime)?;
        println!("Using runtime: {runtime}");

        self.install_extensions()?;
        self.install_dependencies(runtime)?;

        println!("Ensuring package.json scripts...");
        manifest::merge_scripts(&self.root)?;

        println!("Setting up ignore files...");
        ignore::append_block(&self.root.join(".prettierignore"), PRETTIER_IGNORE)?;
        ignore::append_block(&self.root.join(".eslintignore"), ESLINT_IGNORE)?;
        ignore::append_block(&self.root.join(".gitignore"), GIT_IGNORE)?;

        println!("Configuring VS Code workspace settings...");
        settings::merge_settings(&self.root)?;

        println!("Setup complete!");
        Ok(())
    }

    fn install_extensions(&self) -> SetupResult<()> {
        println!("Installing VS Code extensions...");
        // One invocation with the whole list, matching the upstream shape
        let mut args = vec!["--install-extension"];
        args.extend(EXTENSIONS);
        run_command(&self.editor, &args)
    }

    fn install_dependencies(&self, runtime: Runtime) -> SetupResult<()> {
        match runtime.install_command() {
            Some((program, args)) => {
                println!("Installing dependencies...");
                run_command(program, &args)
            }
            None => {
                println!("Note: {runtime} manages dependencies differently; skipping packages.");
                Ok(())
            }
        }
    }
}
